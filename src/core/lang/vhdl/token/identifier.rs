//
//  Copyright (C) 2022-2024  Chase Ruskin
//
//  This program is free software: you can redistribute it and/or modify
//  it under the terms of the GNU General Public License as published by
//  the Free Software Foundation, either version 3 of the License, or
//  (at your option) any later version.
//
//  This program is distributed in the hope that it will be useful,
//  but WITHOUT ANY WARRANTY; without even the implied warranty of
//  MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
//  GNU General Public License for more details.
//
//  You should have received a copy of the GNU General Public License
//  along with this program.  If not, see <http://www.gnu.org/licenses/>.
//

use super::super::super::lexer::TrainCar;
use super::char_set;
use super::ToColor;
use colored::ColoredString;
use colored::Colorize;
use serde_derive::Serialize;
use std::fmt::Display;
use std::hash::Hash;
use std::hash::Hasher;
use std::str::FromStr;

/// A VHDL identifier: either a basic identifier (letters, digits, and
/// underscores, case-insensitive) or an extended identifier delimited by
/// backslashes (case-sensitive, may contain any graphic character).
#[derive(Debug, Clone, PartialOrd, Ord, Serialize)]
#[serde(untagged)]
pub enum Identifier {
    Basic(String),
    Extended(String),
}

impl std::cmp::Eq for Identifier {}

impl Identifier {
    /// Creates an empty basic identifier.
    pub fn new() -> Self {
        Self::Basic(String::new())
    }

    /// Creates a new basic identifier for the working library: `work`.
    pub fn new_working() -> Self {
        Self::Basic(String::from("work"))
    }

    /// Returns the reference to the inner `String`.
    fn as_str(&self) -> &str {
        match self {
            Self::Basic(id) => id.as_ref(),
            Self::Extended(id) => id.as_ref(),
        }
    }

    /// Modifies the ending of the identifier with `ext` and writes as a String.
    pub fn into_extension(&self, ext: &str) -> Identifier {
        match self {
            Self::Basic(s) => Self::Basic(s.clone() + ext),
            Self::Extended(s) => Self::Extended(s.clone() + ext),
        }
    }

    /// Checks if `self` is an extended identifier or not.
    fn is_extended(&self) -> bool {
        match self {
            Self::Extended(_) => true,
            Self::Basic(_) => false,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Self::Basic(id) => id.len(),
            Self::Extended(id) => id.len() + 2 + (id.chars().filter(|c| c == &'\\').count()),
        }
    }
}

impl Hash for Identifier {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match self {
            Self::Basic(id) => id.to_lowercase().hash(state),
            Self::Extended(id) => id.hash(state),
        }
    }
}

#[derive(Debug, PartialEq)]
pub enum IdentifierError {
    Empty,
    InvalidFirstChar(char),
    CharsAfterDelimiter(String),
}

impl std::error::Error for IdentifierError {}

impl std::fmt::Display for IdentifierError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "empty identifier"),
            Self::CharsAfterDelimiter(s) => write!(
                f,
                "characters \'{}\' found following closing extended backslash, ",
                s
            ),
            Self::InvalidFirstChar(c) => {
                write!(f, "first character must be letter but found \'{}\'", c)
            }
        }
    }
}

impl FromStr for Identifier {
    type Err = IdentifierError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = TrainCar::new(s.chars());
        match chars.consume() {
            Some(c) => Ok(match c {
                '\\' => {
                    // gather graphic characters up to the closing backslash
                    let mut inner = String::new();
                    while let Some(c) = chars.peek() {
                        if c == &char_set::BACKSLASH {
                            chars.consume();
                            break;
                        }
                        inner.push(chars.consume().unwrap());
                    }
                    let result = Self::Extended(inner);
                    let mut rem = String::new();
                    while let Some(c) = chars.consume() {
                        rem.push(c);
                    }
                    match rem.is_empty() {
                        true => result,
                        false => return Err(Self::Err::CharsAfterDelimiter(rem)),
                    }
                }
                _ => match char_set::is_letter(&c) {
                    true => {
                        let mut word = String::from(c);
                        while let Some(c) = chars.peek() {
                            if char_set::is_letter_or_digit(c) || c == &char_set::UNDERLINE {
                                word.push(chars.consume().unwrap());
                            } else {
                                break;
                            }
                        }
                        Self::Basic(word)
                    }
                    false => return Err(Self::Err::InvalidFirstChar(c)),
                },
            }),
            None => Err(Self::Err::Empty),
        }
    }
}

impl std::cmp::PartialEq for Identifier {
    fn eq(&self, other: &Self) -> bool {
        if self.is_extended() != other.is_extended() {
            return false;
        };
        if self.is_extended() == true {
            self.as_str() == other.as_str()
        } else {
            self.as_str().to_lowercase() == other.as_str().to_lowercase()
        }
    }

    fn ne(&self, other: &Self) -> bool {
        self.eq(other) == false
    }
}

impl Display for Identifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Basic(id) => write!(f, "{}", id),
            Self::Extended(id) => write!(f, "\\{}\\", id.replace('\\', r#"\\"#)),
        }
    }
}

impl ToColor for Identifier {
    fn to_color(&self) -> ColoredString {
        self.to_string().normal()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn basic_identifier_parses() {
        let id = Identifier::from_str("clk_div").unwrap();
        assert_eq!(id, Identifier::Basic(String::from("clk_div")));
    }

    #[test]
    fn basic_identifier_case_insensitive() {
        assert_eq!(
            Identifier::from_str("CLK").unwrap(),
            Identifier::from_str("clk").unwrap()
        );
    }

    #[test]
    fn extended_identifier_case_sensitive() {
        assert_ne!(
            Identifier::from_str("\\Clk\\").unwrap(),
            Identifier::from_str("\\clk\\").unwrap()
        );
    }

    #[test]
    fn empty_identifier_errors() {
        assert_eq!(Identifier::from_str(""), Err(IdentifierError::Empty));
    }

    #[test]
    fn invalid_first_char_errors() {
        assert_eq!(
            Identifier::from_str("1clk"),
            Err(IdentifierError::InvalidFirstChar('1'))
        );
    }
}
