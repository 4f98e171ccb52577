//! Citation parser: "2 Corinthians 5:17" -> [`ParsedReference`].
//!
//! A small state machine walks the input left to right:
//!
//! ```text
//! ExpectBookNumber -> ExpectBookName -> ExpectSeparator -> ExpectChapter -> ExpectVerse -> Done
//! ```
//!
//! Each state either hands its typed result to the next state or stops with
//! the [`ReferenceError`] variant for that step. There is no backtracking.

use crate::error::ReferenceError;
use crate::reference::ParsedReference;

/// Numbered-book prefixes found in the canon ("1 Samuel", "3 John").
const BOOK_NUMBERS: [char; 3] = ['1', '2', '3'];

enum State {
    ExpectBookNumber,
    ExpectBookName {
        book_number: Option<u8>,
    },
    ExpectSeparator {
        book_number: Option<u8>,
        book_name: String,
    },
    ExpectChapter {
        book_number: Option<u8>,
        book_name: String,
    },
    ExpectVerse {
        book_number: Option<u8>,
        book_name: String,
        chapter: u32,
        verses: String,
    },
    Done(ParsedReference),
}

struct Parser<'a> {
    reference: &'a str,
    chars: Vec<char>,
    pos: usize,
}

impl<'a> Parser<'a> {
    fn new(reference: &'a str) -> Self {
        Parser {
            reference,
            chars: reference.chars().collect(),
            pos: 0,
        }
    }

    fn peek_at(&self, offset: usize) -> Option<char> {
        self.chars.get(self.pos + offset).copied()
    }

    fn rest(&self) -> String {
        self.chars[self.pos.min(self.chars.len())..].iter().collect()
    }

    fn step(&mut self, state: State) -> Result<State, ReferenceError> {
        match state {
            State::ExpectBookNumber => self.book_number(),
            State::ExpectBookName { book_number } => self.book_name(book_number),
            State::ExpectSeparator {
                book_number,
                book_name,
            } => self.separator(book_number, book_name),
            State::ExpectChapter {
                book_number,
                book_name,
            } => self.chapter(book_number, book_name),
            State::ExpectVerse {
                book_number,
                book_name,
                chapter,
                verses,
            } => verse(book_number, book_name, chapter, &verses),
            State::Done(parsed) => Ok(State::Done(parsed)),
        }
    }

    fn book_number(&mut self) -> Result<State, ReferenceError> {
        let Some(c) = self.peek_at(0).filter(char::is_ascii_digit) else {
            return Ok(State::ExpectBookName { book_number: None });
        };
        if self.peek_at(1) != Some(' ') {
            return Err(ReferenceError::MissingBookNumberSeparator {
                reference: self.reference.to_owned(),
            });
        }
        if !BOOK_NUMBERS.contains(&c) {
            return Err(ReferenceError::InvalidBookNumber { number: c });
        }
        self.pos += 2;
        Ok(State::ExpectBookName {
            book_number: c.to_digit(10).map(|d| d as u8),
        })
    }

    fn book_name(&mut self, book_number: Option<u8>) -> Result<State, ReferenceError> {
        let start = self.pos;
        loop {
            while self.peek_at(0).is_some_and(|c| c.is_ascii_alphabetic()) {
                self.pos += 1;
            }
            // A space belongs to the name only when another word follows it.
            let next_word = self.peek_at(1).is_some_and(|c| c.is_ascii_alphabetic());
            if self.pos > start && self.peek_at(0) == Some(' ') && next_word {
                self.pos += 1;
                continue;
            }
            break;
        }
        if self.pos == start {
            return Err(ReferenceError::BookNameNotFound {
                reference: self.reference.to_owned(),
            });
        }
        let book_name = self.chars[start..self.pos].iter().collect();
        Ok(State::ExpectSeparator {
            book_number,
            book_name,
        })
    }

    fn separator(
        &mut self,
        book_number: Option<u8>,
        book_name: String,
    ) -> Result<State, ReferenceError> {
        if self.peek_at(0) != Some(' ') {
            return Err(ReferenceError::MissingBookChapterSeparator {
                reference: self.reference.to_owned(),
            });
        }
        self.pos += 1;
        Ok(State::ExpectChapter {
            book_number,
            book_name,
        })
    }

    fn chapter(
        &mut self,
        book_number: Option<u8>,
        book_name: String,
    ) -> Result<State, ReferenceError> {
        let segment = self.rest();
        self.pos = self.chars.len();
        let Some((chapter, verses)) = segment
            .split_once(':')
            .filter(|(_, verses)| !verses.contains(':'))
        else {
            return Err(ReferenceError::InvalidColonCount {
                segment: segment.clone(),
            });
        };
        let chapter = parse_number(chapter).ok_or_else(|| ReferenceError::InvalidChapter {
            chapter: chapter.to_owned(),
        })?;
        Ok(State::ExpectVerse {
            book_number,
            book_name,
            chapter,
            verses: verses.to_owned(),
        })
    }
}

fn verse(
    book_number: Option<u8>,
    book_name: String,
    chapter: u32,
    verses: &str,
) -> Result<State, ReferenceError> {
    let invalid = || ReferenceError::InvalidVerse {
        verse: verses.to_owned(),
    };
    let (start, end) = match verses.split_once('-') {
        Some((start, end)) => (start, end),
        None => (verses, verses),
    };
    let start = parse_number(start).ok_or_else(invalid)?;
    let end = parse_number(end).ok_or_else(invalid)?;
    if end < start {
        return Err(invalid());
    }
    Ok(State::Done(ParsedReference::new(
        book_number,
        book_name,
        chapter,
        start,
        end,
    )))
}

/// Positive decimal integer, digits only.
fn parse_number(s: &str) -> Option<u32> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse::<u32>().ok().filter(|n| *n > 0)
}

/// Parse a citation such as `"Song of Solomon 2:1"` or `"3 John 1:7-8"`.
///
/// Fails with the first grammar violation found; never returns a partial result.
pub fn parse(reference: &str) -> Result<ParsedReference, ReferenceError> {
    let mut parser = Parser::new(reference);
    let mut state = State::ExpectBookNumber;
    loop {
        state = match parser.step(state)? {
            State::Done(parsed) => return Ok(parsed),
            next => next,
        };
    }
}
