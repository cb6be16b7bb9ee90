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
//! The raw tokenizer is an external collaborator: the block engine only
//! depends on its token contract, not on how it scans characters. This is a
//! pragmatic, from-scratch scanner — not an eager, keyword-resolving one —
//! because the block engine needs generic `word`/`character` tokens it can
//! rewrite in place, not pre-classified ones.

use crate::core::lang::vhdl::token::char_set;
use crate::core::lang::vhdl::token::literal::AbstLiteral;
use crate::core::lang::vhdl::token::{Comment, Delimiter};

use super::error::BlockError;
use super::token::{SourcePosition, TokenKind, TokenLiteral};

/// One token as produced by the tokenizer, before it is pushed into a
/// `TokenChain` by the driver.
pub struct RawToken {
    pub position: SourcePosition,
    pub raw: String,
    pub kind: TokenKind,
}

/// A random-access cursor over the source text's characters.
///
/// Unlike `lexer::TrainCar` (single-char peek), the tokenizer needs a
/// two-character lookahead to tell a character literal (`'a'`) apart from a
/// tick delimiter and to greedily match fused operators (`?/=`); collecting
/// into a `Vec<char>` up front is the simplest way to get that, and the
/// whole source is already resident in memory as the `&str` passed in.
struct Scanner<'s> {
    chars: Vec<char>,
    idx: usize,
    pos: SourcePosition,
    marker: std::marker::PhantomData<&'s str>,
}

impl<'s> Scanner<'s> {
    fn new(source: &'s str) -> Self {
        Self {
            chars: source.chars().collect(),
            idx: 0,
            pos: SourcePosition::new(),
            marker: std::marker::PhantomData,
        }
    }

    fn peek(&self, offset: usize) -> Option<char> {
        self.chars.get(self.idx + offset).copied()
    }

    fn advance(&mut self) -> Option<char> {
        let c = *self.chars.get(self.idx)?;
        self.idx += 1;
        self.pos.step(c);
        Some(c)
    }

    fn at_end(&self) -> bool {
        self.idx >= self.chars.len()
    }

    fn scan_while(&mut self, pred: impl Fn(&char) -> bool) -> String {
        let mut s = String::new();
        while let Some(c) = self.peek(0) {
            if pred(&c) {
                s.push(c);
                self.advance();
            } else {
                break;
            }
        }
        s
    }

    fn scan_word(&mut self) -> String {
        self.scan_while(|c| char_set::is_letter_or_digit(c) || c == &char_set::UNDERLINE)
    }

    fn scan_number(&mut self) -> TokenLiteral {
        let mut raw = self.scan_while(|c| char_set::is_digit(c) || c == &char_set::UNDERLINE);
        let mut based = false;
        if self.peek(0) == Some(char_set::HASH) {
            based = true;
            raw.push(self.advance().unwrap());
            raw.push_str(&self.scan_while(|c| char_set::is_extended_digit(c) || c == &'_' || c == &char_set::DOT));
            if self.peek(0) == Some(char_set::HASH) {
                raw.push(self.advance().unwrap());
            }
        } else if self.peek(0) == Some(char_set::DOT)
            && self.peek(1).map_or(false, |c| char_set::is_digit(&c))
        {
            raw.push(self.advance().unwrap());
            raw.push_str(&self.scan_while(|c| char_set::is_digit(c) || c == &'_'));
        }
        if matches!(self.peek(0), Some('e') | Some('E')) {
            let mut exp = String::new();
            exp.push(self.advance().unwrap());
            if matches!(self.peek(0), Some('+') | Some('-')) {
                exp.push(self.advance().unwrap());
            }
            let digits = self.scan_while(|c| char_set::is_digit(c));
            if !digits.is_empty() {
                exp.push_str(&digits);
                raw.push_str(&exp);
            }
        }
        if based {
            TokenLiteral::Abst(AbstLiteral::Based(raw))
        } else {
            TokenLiteral::Abst(AbstLiteral::Decimal(raw))
        }
    }

    fn scan_string(&mut self) -> String {
        self.advance(); // opening quote
        let mut s = String::new();
        loop {
            match self.advance() {
                Some(c) if c == char_set::DOUBLE_QUOTE => {
                    if self.peek(0) == Some(char_set::DOUBLE_QUOTE) {
                        s.push(char_set::DOUBLE_QUOTE);
                        self.advance();
                    } else {
                        break;
                    }
                }
                Some(c) => s.push(c),
                None => break,
            }
        }
        s
    }

    fn scan_line_comment(&mut self) -> Comment {
        self.advance();
        self.advance();
        let s = self.scan_while(|c| !char_set::is_newline(c));
        Comment::Single(s)
    }

    fn scan_delimited_comment(&mut self) -> Comment {
        self.advance();
        self.advance();
        let mut s = String::new();
        loop {
            if self.peek(0) == Some(char_set::STAR) && self.peek(1) == Some(char_set::FWDSLASH) {
                self.advance();
                self.advance();
                break;
            }
            match self.advance() {
                Some(c) => s.push(c),
                None => break,
            }
        }
        Comment::Delimited(s)
    }

    /// Greedily matches the longest valid delimiter sequence (3, then 2,
    /// then 1 characters) starting at the cursor, returning the raw text
    /// and whether more than one character was consumed.
    fn scan_punct(&mut self) -> (String, bool) {
        for width in [3usize, 2usize] {
            let candidate: String = (0..width).filter_map(|i| self.peek(i)).collect();
            if candidate.chars().count() == width && Delimiter::transform(&candidate).is_some() {
                for _ in 0..width {
                    self.advance();
                }
                return (candidate, true);
            }
        }
        let c = self.advance().unwrap();
        (c.to_string(), false)
    }
}

/// Yields the lazy, single-pass sequence of raw tokens,
/// bracketed by start/end-of-document sentinels.
pub struct Tokenizer<'s> {
    scanner: Scanner<'s>,
    started: bool,
    finished: bool,
    at_line_start: bool,
}

impl<'s> Tokenizer<'s> {
    pub fn new(source: &'s str) -> Self {
        Self {
            scanner: Scanner::new(source),
            started: false,
            finished: false,
            at_line_start: true,
        }
    }
}

impl<'s> Iterator for Tokenizer<'s> {
    type Item = Result<RawToken, BlockError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        if !self.started {
            self.started = true;
            return Some(Ok(RawToken {
                position: self.scanner.pos,
                raw: String::new(),
                kind: TokenKind::StartOfDocument,
            }));
        }
        if self.scanner.at_end() {
            self.finished = true;
            return Some(Ok(RawToken {
                position: self.scanner.pos,
                raw: String::new(),
                kind: TokenKind::EndOfDocument,
            }));
        }

        let start = self.scanner.pos;
        let c = self.scanner.peek(0).unwrap();

        let (kind, raw) = if char_set::is_newline(&c) {
            self.scanner.advance();
            self.at_line_start = true;
            (TokenKind::Linebreak, String::from("\n"))
        } else if char_set::is_space(&c) {
            let was_line_start = self.at_line_start;
            let s = self.scanner.scan_while(|c| char_set::is_space(c));
            self.at_line_start = false;
            let kind = if was_line_start {
                TokenKind::Indentation
            } else {
                TokenKind::Space
            };
            (kind, s)
        } else if c == char_set::DASH && self.scanner.peek(1) == Some(char_set::DASH) {
            self.at_line_start = false;
            let comment = self.scanner.scan_line_comment();
            let raw = comment.to_string();
            (TokenKind::Comment(comment), raw)
        } else if c == char_set::FWDSLASH && self.scanner.peek(1) == Some(char_set::STAR) {
            self.at_line_start = false;
            let comment = self.scanner.scan_delimited_comment();
            let raw = comment.to_string();
            (TokenKind::Comment(comment), raw)
        } else if char_set::is_letter(&c) {
            self.at_line_start = false;
            let w = self.scanner.scan_word();
            (TokenKind::Word(w.clone()), w)
        } else if char_set::is_digit(&c) {
            self.at_line_start = false;
            let lit = self.scanner.scan_number();
            let raw = lit.to_string();
            (TokenKind::Literal(lit), raw)
        } else if c == char_set::DOUBLE_QUOTE {
            self.at_line_start = false;
            let s = self.scanner.scan_string();
            let raw = format!("\"{}\"", s);
            (TokenKind::Literal(TokenLiteral::Str(s)), raw)
        } else if c == char_set::SINGLE_QUOTE
            && self.scanner.peek(1).is_some()
            && self.scanner.peek(2) == Some(char_set::SINGLE_QUOTE)
        {
            self.at_line_start = false;
            let inner = self.scanner.peek(1).unwrap();
            self.scanner.advance();
            self.scanner.advance();
            self.scanner.advance();
            let raw = format!("'{}'", inner);
            (TokenKind::Literal(TokenLiteral::Character(inner)), raw)
        } else {
            self.at_line_start = false;
            let (raw, fused) = self.scanner.scan_punct();
            if fused {
                (TokenKind::FusedCharacter(raw.clone()), raw)
            } else {
                (TokenKind::Character(raw.chars().next().unwrap()), raw)
            }
        };

        Some(Ok(RawToken { position: start, raw, kind }))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn kinds(src: &str) -> Vec<TokenKind> {
        Tokenizer::new(src)
            .map(|r| r.unwrap().kind)
            .collect()
    }

    #[test]
    fn sentinels_bracket_every_stream() {
        let ks = kinds("");
        assert_eq!(ks, vec![TokenKind::StartOfDocument, TokenKind::EndOfDocument]);
    }

    #[test]
    fn words_and_punct() {
        let ks = kinds("return;");
        assert_eq!(
            ks,
            vec![
                TokenKind::StartOfDocument,
                TokenKind::Word(String::from("return")),
                TokenKind::Character(';'),
                TokenKind::EndOfDocument,
            ]
        );
    }

    #[test]
    fn fused_operator_is_greedy() {
        let ks = kinds("a <= b");
        assert!(ks.contains(&TokenKind::FusedCharacter(String::from("<="))));
    }

    #[test]
    fn indentation_vs_space() {
        let ks = kinds("  a b");
        assert_eq!(ks[1], TokenKind::Indentation);
        assert!(ks.contains(&TokenKind::Space));
    }

    #[test]
    fn line_comment_runs_to_newline() {
        let ks = kinds("-- hi\n");
        assert_eq!(ks[1], TokenKind::Comment(Comment::Single(String::from(" hi"))));
        assert_eq!(ks[2], TokenKind::Linebreak);
    }

    #[test]
    fn character_literal_vs_tick() {
        let ks = kinds("'a'");
        assert_eq!(ks[1], TokenKind::Literal(TokenLiteral::Character('a')));
    }
}
