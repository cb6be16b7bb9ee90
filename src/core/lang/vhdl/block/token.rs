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

use colored::ColoredString;
use colored::Colorize;
use serde_derive::Serialize;
use std::fmt::Display;

use crate::core::lang::vhdl::highlight;
use crate::core::lang::vhdl::token::literal::AbstLiteral;
use crate::core::lang::vhdl::token::{Comment, Delimiter, Identifier, Keyword, ToColor};

/// Absolute character offset plus line/column, the position every token and
/// block anchors its diagnostics to. Extends `lexer::Position`'s (line, col)
/// pair with the absolute offset the block-length invariants need.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub struct SourcePosition {
    absolute: usize,
    line: usize,
    column: usize,
}

impl SourcePosition {
    pub fn new() -> Self {
        Self {
            absolute: 0,
            line: 1,
            column: 0,
        }
    }

    /// Advances the position past `c`.
    pub fn step(&mut self, c: char) {
        self.absolute += 1;
        self.column += 1;
        if c == '\n' {
            self.line += 1;
            self.column = 0;
        }
    }

    pub fn absolute(&self) -> usize {
        self.absolute
    }

    pub fn line(&self) -> usize {
        self.line
    }

    pub fn column(&self) -> usize {
        self.column
    }
}

impl Display for SourcePosition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// A literal payload attached to a `TokenKind::Literal` token.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenLiteral {
    Abst(AbstLiteral),
    Character(char),
    Str(String),
}

impl Display for TokenLiteral {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Abst(a) => write!(f, "{}", a),
            Self::Character(c) => write!(f, "'{}'", c),
            Self::Str(s) => write!(f, "\"{}\"", s),
        }
    }
}

impl ToColor for TokenLiteral {
    fn to_color(&self) -> ColoredString {
        let crayon = highlight::NUMBERS;
        self.to_string().truecolor(crayon.0, crayon.1, crayon.2)
    }
}

/// The variant set of a raw or rewritten token.
///
/// `Word`, `Character`, and `FusedCharacter` are the generic classes the
/// tokenizer produces; `Keyword`, `Delimiter`, and `Identifier` only appear
/// after the block engine rewrites a generic token in place (§4.1, §4.3).
#[derive(Debug, Clone, PartialEq)]
pub enum TokenKind {
    StartOfDocument,
    EndOfDocument,
    Space,
    Indentation,
    Linebreak,
    Comment(Comment),
    Literal(TokenLiteral),
    Word(String),
    Character(char),
    FusedCharacter(String),
    Keyword(Keyword),
    Delimiter(Delimiter),
    Identifier(Identifier),
}

impl TokenKind {
    /// The keyword this token names, once rewritten. Used by state
    /// functions that need to branch on keyword identity after a dispatch
    /// table rewrite already took place.
    pub fn as_keyword(&self) -> Option<&Keyword> {
        match self {
            Self::Keyword(k) => Some(k),
            _ => None,
        }
    }

    pub fn as_delimiter(&self) -> Option<&Delimiter> {
        match self {
            Self::Delimiter(d) => Some(d),
            _ => None,
        }
    }

    pub fn as_word(&self) -> Option<&str> {
        match self {
            Self::Word(w) => Some(w.as_str()),
            _ => None,
        }
    }

    pub fn is_trivia(&self) -> bool {
        matches!(
            self,
            Self::Space | Self::Indentation | Self::Linebreak | Self::Comment(_)
        )
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::StartOfDocument | Self::EndOfDocument => write!(f, ""),
            Self::Space | Self::Indentation => write!(f, " "),
            Self::Linebreak => write!(f, "\n"),
            Self::Comment(c) => write!(f, "{}", c),
            Self::Literal(l) => write!(f, "{}", l),
            Self::Word(w) => write!(f, "{}", w),
            Self::Character(c) => write!(f, "{}", c),
            Self::FusedCharacter(s) => write!(f, "{}", s),
            Self::Keyword(k) => write!(f, "{}", k),
            Self::Delimiter(d) => write!(f, "{}", d),
            Self::Identifier(i) => write!(f, "{}", i),
        }
    }
}

pub type TokenId = usize;

/// A node in the token chain. `previous`/`next` model the doubly-linked
/// chain; in this arena they are indices rather than pointers
/// (DESIGN.md: "Cyclic block/token graphs → index-based arenas").
#[derive(Debug, Clone)]
pub struct TokenNode {
    position: SourcePosition,
    raw: String,
    kind: TokenKind,
    previous: Option<TokenId>,
    next: Option<TokenId>,
}

impl TokenNode {
    pub fn position(&self) -> SourcePosition {
        self.position
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn kind(&self) -> &TokenKind {
        &self.kind
    }

    pub fn previous(&self) -> Option<TokenId> {
        self.previous
    }

    pub fn next(&self) -> Option<TokenId> {
        self.next
    }

    /// The absolute offset of the last character this token covers, used by
    /// `Block::length`. Zero-width sentinel tokens cover no characters.
    pub fn end_absolute(&self) -> usize {
        let len = self.raw.chars().count();
        if len == 0 {
            self.position.absolute
        } else {
            self.position.absolute + len - 1
        }
    }
}

/// The growing, append-only arena backing the token chain.
///
/// Tokens are pushed in source order as the tokenizer yields them; a
/// `rewrite` mutates a node's `kind` in place. Because identity in an arena
/// is the stable index rather than pointer identity, this replaces the
/// pointer-splice: the index a marker already
/// holds keeps pointing at the same node after a rewrite, so there is
/// nothing further to re-point (see DESIGN.md, "token rewrite").
#[derive(Debug, Default)]
pub struct TokenChain {
    nodes: Vec<TokenNode>,
}

impl TokenChain {
    pub fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    /// Appends a new token to the chain, linking it after the previous tail.
    pub fn push(&mut self, position: SourcePosition, raw: String, kind: TokenKind) -> TokenId {
        let id = self.nodes.len();
        let previous = if id == 0 { None } else { Some(id - 1) };
        if let Some(prev) = previous {
            self.nodes[prev].next = Some(id);
        }
        self.nodes.push(TokenNode {
            position,
            raw,
            kind,
            previous,
            next: None,
        });
        id
    }

    pub fn get(&self, id: TokenId) -> &TokenNode {
        &self.nodes[id]
    }

    /// Replaces the token's kind in place, preserving position and links.
    /// Equivalent to a `newToken` splice once token identity is an
    /// arena index rather than an object pointer.
    pub fn rewrite(&mut self, id: TokenId, kind: TokenKind) {
        self.nodes[id].kind = kind;
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }
}
