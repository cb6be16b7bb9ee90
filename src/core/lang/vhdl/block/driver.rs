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
//! The driver loop: pulls a token, applies any pending rewrite,
//! establishes the block marker, drains queued blocks, and runs the current
//! state. `BlockStream` is a lazy iterator over `BlockId`s; callers read the
//! actual token/block content back out of `tokens()`/`blocks()`.

use std::collections::VecDeque;

use super::block::{BlockChain, BlockId, BlockKind};
use super::dispatch;
use super::error::BlockError;
use super::state::{ParserState, StateId};
use super::token::{TokenChain, TokenKind};
use super::tokenizer::Tokenizer;

pub struct BlockStream<'s> {
    tokenizer: Tokenizer<'s>,
    tokens: TokenChain,
    blocks: BlockChain,
    state: ParserState,
    pending: VecDeque<BlockId>,
    done: bool,
}

impl<'s> BlockStream<'s> {
    /// The main entry point: parses `source` as a whole document (spec
    /// §4.3).
    pub fn parse(source: &'s str) -> Self {
        Self::starting_at(source, StateId::DocumentDispatch)
    }

    /// Parses `source` starting from an arbitrary construct's initial
    /// state, bypassing the document dispatcher. Exists so individual
    /// block families (return statements, object declarations) are testable
    /// in isolation (a few worked scenarios parse `return ...;`
    /// directly).
    pub fn starting_at(source: &'s str, initial: StateId) -> Self {
        Self {
            tokenizer: Tokenizer::new(source),
            tokens: TokenChain::new(),
            blocks: BlockChain::new(),
            state: {
                let mut ps = ParserState::new();
                ps.next_state = initial;
                ps
            },
            pending: VecDeque::new(),
            done: false,
        }
    }

    pub fn tokens(&self) -> &TokenChain {
        &self.tokens
    }

    pub fn blocks(&self) -> &BlockChain {
        &self.blocks
    }
}

impl<'s> Iterator for BlockStream<'s> {
    type Item = Result<BlockId, BlockError>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(id) = self.pending.pop_front() {
            return Some(Ok(id));
        }
        if self.done {
            return None;
        }

        loop {
            // A rewrite queued by the previous iteration's state function
            // targets the token that function actually examined, which is
            // still `self.state.token` at this point — apply it before
            // pulling (or reissuing) the next token, or it would land on
            // the wrong token entirely.
            if let Some(new_kind) = self.state.new_token.take() {
                self.tokens.rewrite(self.state.token, new_kind);
            }

            if !self.state.reissue {
                match self.tokenizer.next() {
                    Some(Ok(raw)) => {
                        let id = self.tokens.push(raw.position, raw.raw, raw.kind);
                        self.state.token = id;
                    }
                    Some(Err(e)) => {
                        self.done = true;
                        return Some(Err(e));
                    }
                    None => {
                        self.done = true;
                        return None;
                    }
                }
            } else {
                self.state.reissue = false;
            }

            if self.state.token_marker.is_none() {
                self.state.token_marker = Some(self.state.token);
            }

            for pending in std::mem::take(&mut self.state.new_blocks) {
                let (kind, multi_part) = if pending.kind == BlockKind::Linebreak
                    && matches!(
                        self.state.last_block_kind,
                        Some(BlockKind::Linebreak) | Some(BlockKind::EmptyLine)
                    ) {
                    (BlockKind::EmptyLine, false)
                } else {
                    (pending.kind, pending.multi_part)
                };
                let id = self.blocks.push(kind, pending.start, pending.end, multi_part);
                self.state.last_block_kind = Some(kind);
                if kind == BlockKind::EndOfDocument {
                    self.done = true;
                }
                self.pending.push_back(id);
            }

            let current_token = self.state.token;

            // The start-of-document sentinel is handled generically so
            // that every construct's own initial state — not just the
            // document dispatcher — can be used as a standalone entry
            // point (isolated return-statement/list scenarios).
            if matches!(self.tokens.get(current_token).kind(), TokenKind::StartOfDocument) {
                let id = self.blocks.push(BlockKind::StartOfDocument, current_token, current_token, false);
                self.state.last_block_kind = Some(BlockKind::StartOfDocument);
                self.state.token_marker = None;
                self.pending.push_back(id);
                return self.pending.pop_front().map(Ok);
            }

            let current_state = self.state.next_state;
            let is_end_of_document = matches!(self.tokens.get(current_token).kind(), TokenKind::EndOfDocument);

            // Only the document dispatcher, with nothing suspended, is
            // allowed to see end-of-document — every other state is mid
            // construct and end-of-document there is a genuine error.
            if is_end_of_document && (!self.state.stack.is_empty() || current_state != StateId::DocumentDispatch) {
                self.done = true;
                return Some(Err(BlockError::UnexpectedEndOfDocument(state_name(current_state))));
            }

            if let Err(e) = dispatch::run_state(current_state, &mut self.state, &self.tokens) {
                self.done = true;
                return Some(Err(e));
            }

            if !self.pending.is_empty() {
                return self.pending.pop_front().map(Ok);
            }
            if self.done {
                return None;
            }
        }
    }
}

fn state_name(id: StateId) -> &'static str {
    match id {
        StateId::DocumentDispatch => "DocumentDispatch",
        StateId::ClauseBody => "ClauseBody",
        StateId::UnitHeaderHeading => "UnitHeaderHeading",
        StateId::UnitHeaderAfterIs => "UnitHeaderAfterIs",
        StateId::UnitHeaderOpaqueBody => "UnitHeaderOpaqueBody",
        StateId::UnitHeaderClosing => "UnitHeaderClosing",
        StateId::ListAwaitOpen => "ListAwaitOpen",
        StateId::ListOpeningParenthesis => "ListOpeningParenthesis",
        StateId::ListItemRemainder => "ListItemRemainder",
        StateId::ListClosingParenthesis => "ListClosingParenthesis",
        StateId::ReturnKeyword => "ReturnKeyword",
        StateId::ReturnWhitespace1 => "ReturnWhitespace1",
        StateId::ExpressionBody => "ExpressionBody",
        StateId::ExpressionWhitespace1 => "ExpressionWhitespace1",
        StateId::ObjectDeclHeading => "ObjectDeclHeading",
        StateId::StateError => "StateError",
    }
}
