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
//! Entity, architecture, package, package body, and context headers.
//!
//! A header is a multi-part construct: one fragment from the opening
//! keyword through `is`, an optional `OpaqueBody` fragment of a different
//! `BlockKind` sitting in between, and a final `end ... ;` fragment closing
//! the same `BlockKind`'s multi-part chain (a rejoin at close; see DESIGN.md's
//! `OpaqueBody` design note).
//!
//! `generic`/`port` clauses immediately after `is` are handed to the
//! shared list engine and resumed here afterward — the one place this
//! engine pushes a frame without clearing the marker, since the clause's
//! `ListOpen` fragment must include the `generic`/`port` keyword itself.

use crate::core::lang::vhdl::token::{Delimiter, Keyword};

use super::super::block::BlockKind;
use super::super::error::BlockError;
use super::super::state::{Frame, ParserState, StateId};
use super::super::token::{TokenChain, TokenKind};

pub fn state_heading(ps: &mut ParserState, tokens: &TokenChain) -> Result<(), BlockError> {
    let node = tokens.get(ps.token);
    match node.kind().clone() {
        TokenKind::Word(w) if w.eq_ignore_ascii_case("body") => {
            // `package body foo is` — only package headers have a second
            // keyword here; reclassify the construct we're building.
            if ps.construct == Some(BlockKind::PackageHeader) {
                ps.construct = Some(BlockKind::PackageBodyHeader);
            }
            ps.rewrite(TokenKind::Keyword(Keyword::Body));
            Ok(())
        }
        TokenKind::Word(w) if w.eq_ignore_ascii_case("is") => {
            ps.rewrite(TokenKind::Keyword(Keyword::Is));
            let marker = ps.token_marker.unwrap_or(ps.token);
            ps.emit(
                ps.construct.clone().unwrap_or(BlockKind::EntityHeader),
                marker,
                ps.token,
                true,
            );
            ps.token_marker = None;
            ps.goto(StateId::UnitHeaderAfterIs);
            Ok(())
        }
        TokenKind::EndOfDocument => Err(BlockError::UnexpectedEndOfDocument("UnitHeaderHeading")),
        // identifiers (unit name, entity-of-architecture, "of"), dots, and
        // interior trivia accumulate into the heading span
        _ => Ok(()),
    }
}

pub fn state_after_is(ps: &mut ParserState, tokens: &TokenChain) -> Result<(), BlockError> {
    let node = tokens.get(ps.token);
    match node.kind().clone() {
        TokenKind::Word(w) if w.eq_ignore_ascii_case("generic") => {
            ps.rewrite(TokenKind::Keyword(Keyword::Generic));
            ps.stack.push(Frame {
                state: StateId::UnitHeaderAfterIs,
                counter: ps.counter,
            });
            ps.counter = 0;
            ps.goto(StateId::ListAwaitOpen);
            Ok(())
        }
        TokenKind::Word(w) if w.eq_ignore_ascii_case("port") => {
            ps.rewrite(TokenKind::Keyword(Keyword::Port));
            ps.stack.push(Frame {
                state: StateId::UnitHeaderAfterIs,
                counter: ps.counter,
            });
            ps.counter = 0;
            ps.goto(StateId::ListAwaitOpen);
            Ok(())
        }
        TokenKind::EndOfDocument => Err(BlockError::UnexpectedEndOfDocument("UnitHeaderAfterIs")),
        // trivia between 'is' and the first real word doesn't yet tell us
        // whether a generic/port clause follows; keep waiting
        TokenKind::Space | TokenKind::Indentation | TokenKind::Linebreak | TokenKind::Comment(_) => Ok(()),
        // anything else (a non-generic/port word, or structural punctuation):
        // neither clause is present here, hand this exact token to the
        // opaque-body scanner without skipping it
        _ => {
            ps.reissue_as(StateId::UnitHeaderOpaqueBody);
            Ok(())
        }
    }
}

pub fn state_opaque_body(ps: &mut ParserState, tokens: &TokenChain) -> Result<(), BlockError> {
    let node = tokens.get(ps.token);
    match node.kind().clone() {
        TokenKind::Word(w) if w.eq_ignore_ascii_case("end") && ps.counter == 0 => {
            let marker = ps.token_marker.unwrap_or(ps.token);
            if marker != ps.token {
                if let Some(prev) = node.previous() {
                    ps.emit(BlockKind::OpaqueBody, marker, prev, false);
                }
            }
            ps.rewrite(TokenKind::Keyword(Keyword::End));
            ps.token_marker = Some(ps.token);
            ps.goto(StateId::UnitHeaderClosing);
            Ok(())
        }
        TokenKind::Character('(') => {
            ps.counter += 1;
            Ok(())
        }
        TokenKind::Character(')') => {
            if ps.counter == 0 {
                return Err(BlockError::BracketMismatch(
                    node.position(),
                    String::from("unmatched ')' in declarative part"),
                ));
            }
            ps.counter -= 1;
            Ok(())
        }
        TokenKind::EndOfDocument => Err(BlockError::UnexpectedEndOfDocument("UnitHeaderOpaqueBody")),
        _ => Ok(()),
    }
}

pub fn state_closing(ps: &mut ParserState, tokens: &TokenChain) -> Result<(), BlockError> {
    let node = tokens.get(ps.token);
    match node.kind() {
        TokenKind::Character(';') => {
            ps.rewrite(TokenKind::Delimiter(Delimiter::Terminator));
            let marker = ps.token_marker.unwrap_or(ps.token);
            let kind = ps.construct.take().unwrap_or(BlockKind::EntityHeader);
            ps.emit(kind, marker, ps.token, false);
            ps.token_marker = None;
            ps.goto(StateId::DocumentDispatch);
            Ok(())
        }
        TokenKind::EndOfDocument => Err(BlockError::UnexpectedEndOfDocument("UnitHeaderClosing")),
        // "end entity foo" before the ';' accumulates into the trailer span
        _ => Ok(()),
    }
}
