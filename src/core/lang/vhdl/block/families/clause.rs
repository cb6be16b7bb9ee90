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
//! `library` and `use` clauses: a single flat span from the keyword through
//! the terminating `;`. Neither clause has internal structure the block
//! engine needs to recognize.

use crate::core::lang::vhdl::token::Delimiter;

use super::super::block::BlockKind;
use super::super::error::BlockError;
use super::super::state::{ParserState, StateId};
use super::super::token::{TokenChain, TokenKind};

pub fn state_body(ps: &mut ParserState, tokens: &TokenChain) -> Result<(), BlockError> {
    let node = tokens.get(ps.token);
    match node.kind() {
        TokenKind::Character(';') => {
            ps.rewrite(TokenKind::Delimiter(Delimiter::Terminator));
            let marker = ps.token_marker.unwrap_or(ps.token);
            let kind = ps.construct.take().unwrap_or(BlockKind::LibraryClause);
            ps.emit(kind, marker, ps.token, false);
            ps.token_marker = None;
            ps.goto(StateId::DocumentDispatch);
            Ok(())
        }
        TokenKind::EndOfDocument => Err(BlockError::UnexpectedEndOfDocument("ClauseBody")),
        // identifiers, dots, and interior trivia accumulate into the one span
        _ => Ok(()),
    }
}
