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

use super::token::{TokenChain, TokenId};

/// The dynamic type of a block, standing in for one class per construct as
/// a tagged variant instead (DESIGN.md: "dynamic dispatch on classes →
/// tagged variants"). Each variant corresponds to one block family's
/// `STATES` entry in the registry (see `registry.rs`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockKind {
    StartOfDocument,
    EndOfDocument,
    Whitespace,
    Indentation,
    Linebreak,
    EmptyLine,
    Comment,
    LibraryClause,
    UseClause,
    ContextClause,
    EntityHeader,
    ArchitectureHeader,
    PackageHeader,
    PackageBodyHeader,
    OpaqueBody,
    ListOpen,
    ListItem,
    ListDelimiter,
    ListClose,
    ReturnStatement,
    EndOfReturn,
    Expression,
    EndOfExpression,
    ExitBlock,
    RangeDirection,
    ObjectDeclaration,
}

impl BlockKind {
    /// Trivia blocks carry no semantic role; they exist so coverage holds.
    pub fn is_trivia(&self) -> bool {
        matches!(
            self,
            Self::Whitespace | Self::Indentation | Self::Linebreak | Self::EmptyLine | Self::Comment
        )
    }
}

pub type BlockId = usize;

/// One fragment of a block. Multiple fragments with `multi_part = true`
/// chained together (all but the last) represent one syntactic construct
/// split by interleaved trivia.
#[derive(Debug, Clone)]
pub struct BlockNode {
    kind: BlockKind,
    start: TokenId,
    end: TokenId,
    multi_part: bool,
    previous: Option<BlockId>,
    next: Option<BlockId>,
}

impl BlockNode {
    pub fn kind(&self) -> BlockKind {
        self.kind
    }

    pub fn start(&self) -> TokenId {
        self.start
    }

    pub fn end(&self) -> TokenId {
        self.end
    }

    pub fn is_multi_part(&self) -> bool {
        self.multi_part
    }

    pub fn previous(&self) -> Option<BlockId> {
        self.previous
    }

    pub fn next(&self) -> Option<BlockId> {
        self.next
    }

    /// Length in characters:
    /// `len(B) = B.end.end.absolute − B.start.start.absolute + 1`.
    /// Sentinel blocks are defined to have zero length.
    pub fn length(&self, tokens: &TokenChain) -> usize {
        if matches!(self.kind, BlockKind::StartOfDocument | BlockKind::EndOfDocument) {
            return 0;
        }
        let start_abs = tokens.get(self.start).position().absolute();
        let end_abs = tokens.get(self.end).end_absolute();
        end_abs - start_abs + 1
    }

    /// Iterates every token from `start` to `end`, inclusive.
    pub fn tokens<'a>(&self, chain: &'a TokenChain) -> TokenSpan<'a> {
        TokenSpan {
            chain,
            next: Some(self.start),
            end: self.end,
            done: false,
        }
    }

    /// Iterates the same span in reverse, from `end` to `start`.
    pub fn tokens_rev<'a>(&self, chain: &'a TokenChain) -> TokenSpanRev<'a> {
        TokenSpanRev {
            chain,
            next: Some(self.end),
            start: self.start,
            done: false,
        }
    }
}

pub struct TokenSpan<'a> {
    chain: &'a TokenChain,
    next: Option<TokenId>,
    end: TokenId,
    done: bool,
}

impl<'a> Iterator for TokenSpan<'a> {
    type Item = TokenId;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let current = self.next?;
        if current == self.end {
            self.done = true;
        } else {
            self.next = self.chain.get(current).next();
        }
        Some(current)
    }
}

pub struct TokenSpanRev<'a> {
    chain: &'a TokenChain,
    next: Option<TokenId>,
    start: TokenId,
    done: bool,
}

impl<'a> Iterator for TokenSpanRev<'a> {
    type Item = TokenId;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let current = self.next?;
        if current == self.start {
            self.done = true;
        } else {
            self.next = self.chain.get(current).previous();
        }
        Some(current)
    }
}

/// The growing, append-only arena backing the block chain, mirroring
/// `TokenChain` (DESIGN.md: "index-based arenas").
#[derive(Debug, Default)]
pub struct BlockChain {
    nodes: Vec<BlockNode>,
}

impl BlockChain {
    pub fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    pub fn push(&mut self, kind: BlockKind, start: TokenId, end: TokenId, multi_part: bool) -> BlockId {
        let id = self.nodes.len();
        let previous = if id == 0 { None } else { Some(id - 1) };
        if let Some(prev) = previous {
            self.nodes[prev].next = Some(id);
        }
        self.nodes.push(BlockNode {
            kind,
            start,
            end,
            multi_part,
            previous,
            next: None,
        });
        id
    }

    pub fn get(&self, id: BlockId) -> &BlockNode {
        &self.nodes[id]
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Walks forward from `from` until it finds a fragment of `kind` with
    /// `multi_part == false`, rejoining a multi-part group.
    pub fn find_multi_part_end(&self, from: BlockId, kind: BlockKind) -> Option<BlockId> {
        let mut cursor = Some(from);
        while let Some(id) = cursor {
            let node = self.get(id);
            if node.kind == kind && !node.is_multi_part() {
                return Some(id);
            }
            cursor = node.next();
        }
        None
    }
}
