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
//! `signal`/`variable`/`constant` object declarations: identifiers, a type
//! mark, and an optional default value. The default value reuses the
//! semicolon-terminated expression variant rather than a bespoke value
//! parser — the same family `return_stmt` uses.

use crate::core::lang::vhdl::token::{Delimiter, Identifier, Keyword};

use super::super::block::BlockKind;
use super::super::error::BlockError;
use super::super::state::{ExpressionTermination, ParserState, StateId};
use super::super::token::{TokenChain, TokenKind};

pub fn state_heading(ps: &mut ParserState, tokens: &TokenChain) -> Result<(), BlockError> {
    let node = tokens.get(ps.token);
    match node.kind().clone() {
        TokenKind::Word(w) => {
            if let Some(kw) = Keyword::match_keyword(&w) {
                if matches!(kw, Keyword::Signal | Keyword::Variable | Keyword::Constant) {
                    ps.rewrite(TokenKind::Keyword(kw));
                    return Ok(());
                }
            }
            ps.rewrite(TokenKind::Identifier(Identifier::Basic(w)));
            Ok(())
        }
        TokenKind::Character(':') => {
            ps.rewrite(TokenKind::Delimiter(Delimiter::Colon));
            Ok(())
        }
        TokenKind::FusedCharacter(s) if s == ":=" => {
            ps.rewrite(TokenKind::Delimiter(Delimiter::VarAssign));
            let marker = ps.token_marker.unwrap_or(ps.token);
            ps.emit(BlockKind::ObjectDeclaration, marker, ps.token, true);
            ps.token_marker = None;
            ps.push(StateId::ExpressionBody);
            ps.expression = Some(ExpressionTermination::Semicolon);
            Ok(())
        }
        TokenKind::Character(';') => {
            ps.rewrite(TokenKind::Delimiter(Delimiter::Terminator));
            let marker = ps.token_marker.unwrap_or(ps.token);
            ps.emit(BlockKind::ObjectDeclaration, marker, ps.token, false);
            ps.pop_or(1, None, StateId::DocumentDispatch);
            Ok(())
        }
        TokenKind::EndOfDocument => Err(BlockError::UnexpectedEndOfDocument("ObjectDeclHeading")),
        _ => Ok(()),
    }
}
