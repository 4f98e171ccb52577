pub(crate) mod books;
pub(crate) mod plan;
pub(crate) mod reference;
