// File: src/core/parser.rs
use crate::error::ParseError;

const COMMENT_MARKER: char = '#';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Side {
    Left,
    Right,
}

/// The word lists of one corpus line, abbreviations first regardless of
/// which side of the separator they were written on.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Record {
    pub abbreviations: Vec<String>,
    pub definitions: Vec<String>,
}

impl Record {
    /// Every (abbreviation, definition) combination of the record.
    pub fn pairs(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.abbreviations.iter().flat_map(move |abbr| {
            self.definitions
                .iter()
                .map(move |defn| (abbr.as_str(), defn.as_str()))
        })
    }
}

/// Tokenizer state for a single line.
///
/// Splits on `,`, `:` and `->` outside parentheses. Anything inside `(...)`
/// is kept verbatim, so an explanation like `(medical officer, on duty)`
/// survives the comma split. `:` marks the left side as abbreviations,
/// `->` marks the right side.
pub struct LineParser<'a> {
    line: &'a str,
    depth: usize,
    word: String,
    left: Vec<String>,
    right: Vec<String>,
    side: Side,
    abbreviations_on: Option<Side>,
}

impl<'a> LineParser<'a> {
    fn new(line: &'a str) -> Self {
        Self {
            line,
            depth: 0,
            word: String::new(),
            left: Vec::new(),
            right: Vec::new(),
            side: Side::Left,
            abbreviations_on: None,
        }
    }

    /// Parses one raw corpus line.
    /// Blank lines and `#` comments yield `Ok(None)`.
    pub fn parse(line: &str) -> Result<Option<Record>, ParseError> {
        let line = line.trim();
        if line.is_empty() || line.starts_with(COMMENT_MARKER) {
            return Ok(None);
        }
        LineParser::new(line).run().map(Some)
    }

    fn run(mut self) -> Result<Record, ParseError> {
        let line = self.line;
        let mut chars = line.chars().peekable();

        while let Some(c) = chars.next() {
            match c {
                '(' => {
                    self.depth += 1;
                    self.word.push(c);
                }
                ')' => {
                    if self.depth == 0 {
                        return Err(ParseError::MismatchedParentheses {
                            line: self.line.to_string(),
                        });
                    }
                    self.depth -= 1;
                    self.word.push(c);
                }
                _ if self.depth > 0 => self.word.push(c),
                ',' => self.finish_word(),
                ':' => self.switch_side(Side::Left),
                '-' if chars.peek() == Some(&'>') => {
                    chars.next();
                    self.switch_side(Side::Right);
                }
                _ => self.word.push(c),
            }
        }
        self.finish_word();

        let Some(abbreviations_on) = self.abbreviations_on else {
            return Err(ParseError::MissingSeparator {
                line: self.line.to_string(),
            });
        };
        let (abbreviations, definitions) = match abbreviations_on {
            Side::Left => (self.left, self.right),
            Side::Right => (self.right, self.left),
        };
        Ok(Record {
            abbreviations,
            definitions,
        })
    }

    fn finish_word(&mut self) {
        let word = std::mem::take(&mut self.word);
        let word = word.trim();
        // Trailing commas and "A:" with nothing after leave empty items.
        if word.is_empty() {
            return;
        }
        match self.side {
            Side::Left => self.left.push(word.to_string()),
            Side::Right => self.right.push(word.to_string()),
        }
    }

    /// Only the first separator flips sides; later ones just end the word.
    fn switch_side(&mut self, abbreviations_on: Side) {
        self.finish_word();
        if self.abbreviations_on.is_none() {
            self.abbreviations_on = Some(abbreviations_on);
            self.side = Side::Right;
        }
    }
}
