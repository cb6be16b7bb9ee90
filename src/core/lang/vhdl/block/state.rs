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

use super::block::BlockKind;
use super::token::{TokenId, TokenKind};

/// Identifies a single state function, one variant per construct state;
/// `run_state` in `dispatch.rs` is the explicit registry this enum drives
/// (DESIGN.md: "class-level metaclass registration → explicit registry").
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StateId {
    DocumentDispatch,
    ClauseBody,
    UnitHeaderHeading,
    UnitHeaderAfterIs,
    UnitHeaderOpaqueBody,
    UnitHeaderClosing,
    ListAwaitOpen,
    ListOpeningParenthesis,
    ListItemRemainder,
    ListClosingParenthesis,
    ReturnKeyword,
    ReturnWhitespace1,
    ExpressionBody,
    ExpressionWhitespace1,
    ObjectDeclHeading,
    StateError,
}

/// A suspended outer state plus the nesting counter it had when it pushed a
/// sub-parser (DESIGN.md: "global multi-frame stack").
#[derive(Debug, Clone, Copy)]
pub struct Frame {
    pub state: StateId,
    pub counter: i64,
}

/// A block queued by a state function, drained by the driver loop before
/// the next token is processed.
#[derive(Debug, Clone)]
pub struct PendingBlock {
    pub kind: BlockKind,
    pub start: TokenId,
    pub end: TokenId,
    pub multi_part: bool,
}

/// Parameters threaded through an expression or list state-function family,
/// so one set of functions can serve all four expression termination
/// variants (§4.4) instead of four near-duplicates.
#[derive(Debug, Clone, PartialEq)]
pub enum ExpressionTermination {
    /// Variant 1: `;` at depth 0 ends the expression.
    Semicolon,
    /// Variant 2: a configurable exit character, or an unmatched `)` at
    /// depth 0 which soft-exits to the enclosing list.
    CharOrClosingParen(char),
    /// Variant 3: a terminating keyword, or `)` at depth 0.
    KeywordOrClosingParen(crate::core::lang::vhdl::token::Keyword),
    /// Variant 4: a terminating keyword, or `to`/`downto`.
    KeywordOrRangeDirection(crate::core::lang::vhdl::token::Keyword),
}

/// The mutable context threaded through every state function.
///
/// Single-threaded and owned exclusively by the driver loop; state
/// functions only ever see it through `&mut self`.
pub struct ParserState {
    pub token: TokenId,
    pub new_token: Option<TokenKind>,
    pub new_blocks: Vec<PendingBlock>,
    pub last_block_kind: Option<BlockKind>,
    pub token_marker: Option<TokenId>,
    pub counter: i64,
    pub stack: Vec<Frame>,
    pub next_state: StateId,
    pub reissue: bool,
    /// Parameters for whichever expression variant is currently running;
    /// set before transitioning into `ExpressionBody`.
    pub expression: Option<ExpressionTermination>,
    /// The `BlockKind` the currently-open flat construct (clause, header,
    /// object declaration, ...) will emit once it closes. Stands in for the
    /// per-class `self` a method on a teacher-side block object would carry.
    pub construct: Option<BlockKind>,
}

impl ParserState {
    pub fn new() -> Self {
        Self {
            token: 0,
            new_token: None,
            new_blocks: Vec::new(),
            last_block_kind: None,
            token_marker: None,
            counter: 0,
            stack: Vec::new(),
            next_state: StateId::DocumentDispatch,
            reissue: false,
            expression: None,
            construct: None,
        }
    }

    /// Rewrites the current token in place.
    pub fn rewrite(&mut self, kind: TokenKind) {
        self.new_token = Some(kind);
    }

    /// Queues a block for the driver to emit.
    pub fn emit(&mut self, kind: BlockKind, start: TokenId, end: TokenId, multi_part: bool) {
        self.new_blocks.push(PendingBlock {
            kind,
            start,
            end,
            multi_part,
        });
    }

    /// Pushes `state` onto the stack, saving the current state/counter, and
    /// transitions to it with a cleared marker.
    pub fn push(&mut self, state: StateId) {
        self.stack.push(Frame {
            state: self.next_state,
            counter: self.counter,
        });
        self.next_state = state;
        self.token_marker = None;
        self.counter = 0;
    }

    /// Pops `n` frames, restoring the last popped frame's state and
    /// counter.
    pub fn pop(&mut self, n: usize, new_marker: Option<TokenId>) {
        let mut restored = None;
        for _ in 0..n {
            restored = self.stack.pop();
        }
        if let Some(frame) = restored {
            self.next_state = frame.state;
            self.counter = frame.counter;
        }
        self.token_marker = new_marker;
    }

    /// Transitions to `state` on the next token.
    pub fn goto(&mut self, state: StateId) {
        self.next_state = state;
    }

    /// Pops `n` frames if the stack is non-empty, otherwise falls back to
    /// `fallback`. A construct that can be reached either as a pushed
    /// sub-parser or as a standalone top-level entry (return statements and
    /// object declarations are both exercised standalone in tests) needs
    /// both endings to resolve into a legal `next_state`.
    pub fn pop_or(&mut self, n: usize, new_marker: Option<TokenId>, fallback: StateId) {
        if self.stack.is_empty() {
            self.next_state = fallback;
            self.token_marker = new_marker;
        } else {
            self.pop(n, new_marker);
        }
    }

    /// Re-enters `state` on the current token without advancing (spec
    /// §4.6, §9: "reissue").
    pub fn reissue_as(&mut self, state: StateId) {
        self.next_state = state;
        self.reissue = true;
    }
}
