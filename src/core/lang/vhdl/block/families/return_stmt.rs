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
//! The return statement: `return`, an optional expression, `;`.
//! `state_return_keyword` doubles as its own entry point — it rewrites the
//! `return` word itself on first sight, so no separate bootstrap state is
//! needed to reach it standalone (some scenarios parse `return ...;`
//! directly, with nothing pushing into this state).

use crate::core::lang::vhdl::token::{Delimiter, Keyword};

use super::super::block::BlockKind;
use super::super::error::BlockError;
use super::super::state::{ExpressionTermination, ParserState, StateId};
use super::super::token::{TokenChain, TokenKind};

pub fn state_return_keyword(ps: &mut ParserState, tokens: &TokenChain) -> Result<(), BlockError> {
    let node = tokens.get(ps.token);
    match node.kind().clone() {
        TokenKind::Word(w) if w.eq_ignore_ascii_case("return") => {
            ps.rewrite(TokenKind::Keyword(Keyword::Return));
            Ok(())
        }
        TokenKind::Character(';') => {
            close_without_expression(ps, tokens);
            Ok(())
        }
        TokenKind::Character('(') => {
            ps.rewrite(TokenKind::Delimiter(Delimiter::ParenL));
            let marker = ps.token_marker.unwrap_or(ps.token);
            ps.emit(BlockKind::ReturnStatement, marker, ps.token, true);
            ps.token_marker = None;
            ps.push(StateId::ExpressionBody);
            ps.expression = Some(ExpressionTermination::Semicolon);
            Ok(())
        }
        TokenKind::Space => {
            emit_heading_then(ps, tokens, BlockKind::Whitespace);
            ps.goto(StateId::ReturnWhitespace1);
            Ok(())
        }
        TokenKind::Linebreak => {
            emit_heading_then(ps, tokens, BlockKind::Linebreak);
            ps.goto(StateId::ReturnWhitespace1);
            Ok(())
        }
        TokenKind::Comment(_) => {
            emit_heading_then(ps, tokens, BlockKind::Comment);
            ps.goto(StateId::ReturnWhitespace1);
            Ok(())
        }
        TokenKind::EndOfDocument => Err(BlockError::UnexpectedEndOfDocument("ReturnKeyword")),
        _ => Err(BlockError::UnexpectedToken(
            node.position(),
            String::from("';', '(', whitespace, linebreak, or comment after 'return'"),
            node.raw().to_string(),
        )),
    }
}

pub fn state_whitespace1(ps: &mut ParserState, tokens: &TokenChain) -> Result<(), BlockError> {
    let node = tokens.get(ps.token);
    match node.kind().clone() {
        TokenKind::Character(';') => {
            close_without_expression(ps, tokens);
            Ok(())
        }
        TokenKind::Linebreak => {
            ps.emit(BlockKind::Linebreak, ps.token, ps.token, false);
            ps.token_marker = None;
            Ok(())
        }
        TokenKind::Comment(_) => {
            ps.emit(BlockKind::Comment, ps.token, ps.token, false);
            ps.token_marker = None;
            Ok(())
        }
        TokenKind::Space => {
            ps.emit(BlockKind::Whitespace, ps.token, ps.token, false);
            ps.token_marker = None;
            Ok(())
        }
        TokenKind::EndOfDocument => Err(BlockError::UnexpectedEndOfDocument("ReturnWhitespace1")),
        // anything else starts the expression; pushing clears the marker so
        // the driver re-establishes it on this same, reissued token
        _ => {
            ps.push(StateId::ExpressionBody);
            ps.expression = Some(ExpressionTermination::Semicolon);
            ps.reissue = true;
            Ok(())
        }
    }
}

/// Emits the `return`-so-far fragment (multi-part, since at least one more
/// fragment of `ReturnStatement` or an `Expression`/`EndOfReturn` block
/// follows), then the trivia token's own block.
fn emit_heading_then(ps: &mut ParserState, tokens: &TokenChain, trivia: BlockKind) {
    let node = tokens.get(ps.token);
    let marker = ps.token_marker.unwrap_or(ps.token);
    if marker != ps.token {
        if let Some(prev) = node.previous() {
            ps.emit(BlockKind::ReturnStatement, marker, prev, true);
        }
    }
    ps.emit(trivia, ps.token, ps.token, false);
    ps.token_marker = None;
}

fn close_without_expression(ps: &mut ParserState, tokens: &TokenChain) {
    let node = tokens.get(ps.token);
    if let Some(marker) = ps.token_marker {
        if marker != ps.token {
            if let Some(prev) = node.previous() {
                ps.emit(BlockKind::ReturnStatement, marker, prev, false);
            }
        }
    }
    ps.rewrite(TokenKind::Delimiter(Delimiter::Terminator));
    ps.emit(BlockKind::EndOfReturn, ps.token, ps.token, false);
    ps.pop_or(1, None, StateId::DocumentDispatch);
}
