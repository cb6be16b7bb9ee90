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
//! The generic/port list engine shared by every interface list:
//! `ListOpen` (keyword through `(`), one `ListItem` per interface element
//! separated by `ListDelimiter`, `ListClose` (`)` through the terminating
//! `;`). `counter` tracks parenthesis depth so an item's own array
//! constraint (`std_logic_vector(7 downto 0)`) doesn't get mistaken for the
//! list's own closing bracket.
//!
//! Unlike a pushdown with one frame per nesting level, this implementation
//! needs no internal stack of its own: `counter` alone
//! disambiguates nested item parens from the list's boundary, and the one
//! frame a caller needs back is pushed by the caller itself (see
//! `unit_header::state_after_is`) and popped here on close (DESIGN.md,
//! "list engine stack simplification").

use crate::core::lang::vhdl::token::{Delimiter, Identifier};

use super::super::block::BlockKind;
use super::super::error::BlockError;
use super::super::state::{ParserState, StateId};
use super::super::token::{TokenChain, TokenKind};

pub fn state_await_open(ps: &mut ParserState, tokens: &TokenChain) -> Result<(), BlockError> {
    let node = tokens.get(ps.token);
    match node.kind() {
        TokenKind::Character('(') => {
            ps.rewrite(TokenKind::Delimiter(Delimiter::ParenL));
            let marker = ps.token_marker.unwrap_or(ps.token);
            ps.emit(BlockKind::ListOpen, marker, ps.token, false);
            ps.counter = 1;
            ps.token_marker = None;
            ps.goto(StateId::ListOpeningParenthesis);
            Ok(())
        }
        TokenKind::EndOfDocument => Err(BlockError::UnexpectedEndOfDocument("ListAwaitOpen")),
        // trivia between the keyword and '(' accumulates into ListOpen's span
        _ => Ok(()),
    }
}

pub fn state_opening_parenthesis(ps: &mut ParserState, tokens: &TokenChain) -> Result<(), BlockError> {
    let node = tokens.get(ps.token);
    match node.kind() {
        TokenKind::Character(')') => {
            // an empty list, e.g. `generic ();`
            ps.rewrite(TokenKind::Delimiter(Delimiter::ParenR));
            ps.counter = 0;
            ps.token_marker = Some(ps.token);
            ps.goto(StateId::ListClosingParenthesis);
            Ok(())
        }
        TokenKind::EndOfDocument => Err(BlockError::UnexpectedEndOfDocument("ListOpeningParenthesis")),
        _ => {
            ps.reissue_as(StateId::ListItemRemainder);
            Ok(())
        }
    }
}

pub fn state_item_remainder(ps: &mut ParserState, tokens: &TokenChain) -> Result<(), BlockError> {
    let node = tokens.get(ps.token);
    match node.kind().clone() {
        TokenKind::Character('(') => {
            ps.counter += 1;
            Ok(())
        }
        TokenKind::Character(')') => {
            if ps.counter == 0 {
                return Err(BlockError::BracketMismatch(
                    node.position(),
                    String::from("unmatched ')' in list item"),
                ));
            }
            ps.counter -= 1;
            if ps.counter == 0 {
                let marker = ps.token_marker.unwrap_or(ps.token);
                if let Some(prev) = node.previous() {
                    if marker != ps.token {
                        ps.emit(BlockKind::ListItem, marker, prev, false);
                    }
                }
                ps.rewrite(TokenKind::Delimiter(Delimiter::ParenR));
                ps.token_marker = Some(ps.token);
                ps.goto(StateId::ListClosingParenthesis);
            }
            Ok(())
        }
        TokenKind::Character(';') if ps.counter == 1 => {
            let marker = ps.token_marker.unwrap_or(ps.token);
            if let Some(prev) = node.previous() {
                if marker != ps.token {
                    ps.emit(BlockKind::ListItem, marker, prev, false);
                }
            }
            ps.rewrite(TokenKind::Delimiter(Delimiter::Terminator));
            ps.emit(BlockKind::ListDelimiter, ps.token, ps.token, false);
            ps.token_marker = None;
            ps.goto(StateId::ListOpeningParenthesis);
            Ok(())
        }
        TokenKind::Word(w) => {
            ps.rewrite(TokenKind::Identifier(Identifier::Basic(w)));
            Ok(())
        }
        TokenKind::EndOfDocument => Err(BlockError::UnexpectedEndOfDocument("ListItemRemainder")),
        _ => Ok(()),
    }
}

pub fn state_closing_parenthesis(ps: &mut ParserState, tokens: &TokenChain) -> Result<(), BlockError> {
    let node = tokens.get(ps.token);
    match node.kind() {
        TokenKind::Character(';') => {
            ps.rewrite(TokenKind::Delimiter(Delimiter::Terminator));
            let marker = ps.token_marker.unwrap_or(ps.token);
            ps.emit(BlockKind::ListClose, marker, ps.token, false);
            ps.pop_or(1, None, StateId::DocumentDispatch);
            Ok(())
        }
        TokenKind::EndOfDocument => Err(BlockError::UnexpectedEndOfDocument("ListClosingParenthesis")),
        // trivia between ')' and ';' accumulates into ListClose's span
        _ => Ok(()),
    }
}
