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
//! The four expression termination variants, unified behind
//! `ExpressionTermination` instead of four near-duplicate state machines.
//! `ps.expression` (set by whoever pushed `ExpressionBody`) selects which
//! variant's closing rule applies; everything else — operator rewriting,
//! paren-depth tracking, trivia handling — is shared.
//!
//! On any termination, this family emits the trailing `Expression` fragment
//! and hands the terminating token *back* to the caller via `pop_or` +
//! `reissue`, rather than guessing what "end" block (if any) the caller
//! wants to emit for it. `return_stmt` and `object_decl` each interpret the
//! reissued token themselves.

use crate::core::lang::vhdl::token::{Comment, Delimiter, Identifier, Keyword};

use super::super::block::BlockKind;
use super::super::dispatch;
use super::super::error::BlockError;
use super::super::state::{ExpressionTermination, ParserState, StateId};
use super::super::token::{TokenChain, TokenKind, TokenNode};

pub fn state_expression(ps: &mut ParserState, tokens: &TokenChain) -> Result<(), BlockError> {
    handle(ps, tokens)
}

pub fn state_whitespace1(ps: &mut ParserState, tokens: &TokenChain) -> Result<(), BlockError> {
    handle(ps, tokens)
}

fn handle(ps: &mut ParserState, tokens: &TokenChain) -> Result<(), BlockError> {
    let node = tokens.get(ps.token);
    match node.kind().clone() {
        TokenKind::Space => {
            // Ordinary interior whitespace (the space inside `a + b`) has
            // no structural meaning here — it stays absorbed in whatever
            // `Expression` fragment is accumulating instead of splitting
            // it into its own block and orphaning the token before it.
            ps.goto(StateId::ExpressionWhitespace1);
            Ok(())
        }
        TokenKind::Indentation => {
            let silent = matches!(
                node.previous().map(|p| tokens.get(p).kind().clone()),
                Some(TokenKind::Linebreak) | Some(TokenKind::Comment(Comment::Single(_)))
            );
            if !silent {
                ps.emit(BlockKind::Indentation, ps.token, ps.token, false);
                ps.token_marker = None;
            }
            ps.goto(StateId::ExpressionWhitespace1);
            Ok(())
        }
        TokenKind::Linebreak => {
            close_fragment(ps, tokens, node);
            ps.emit(BlockKind::Linebreak, ps.token, ps.token, false);
            ps.token_marker = None;
            ps.goto(StateId::ExpressionWhitespace1);
            Ok(())
        }
        TokenKind::Comment(_) => {
            close_fragment(ps, tokens, node);
            ps.emit(BlockKind::Comment, ps.token, ps.token, false);
            ps.token_marker = None;
            ps.goto(StateId::ExpressionWhitespace1);
            Ok(())
        }
        TokenKind::Character('(') => {
            ps.rewrite(TokenKind::Delimiter(Delimiter::ParenL));
            ps.counter += 1;
            ps.goto(StateId::ExpressionBody);
            Ok(())
        }
        TokenKind::Character(')') => handle_closing_paren(ps, tokens, node),
        TokenKind::Character(';') => handle_terminator(ps, tokens, node),
        TokenKind::Word(w) => handle_word(ps, tokens, node, &w),
        TokenKind::Character(c) => {
            if let Some(ExpressionTermination::CharOrClosingParen(exit_char)) = ps.expression {
                if c == exit_char && ps.counter == 0 {
                    return close_via_reissue(ps, tokens, node);
                }
            }
            if let Some(d) = dispatch::character_translation(c) {
                ps.rewrite(TokenKind::Delimiter(d));
            }
            ps.goto(StateId::ExpressionBody);
            Ok(())
        }
        TokenKind::FusedCharacter(s) => {
            if let Some(d) = dispatch::fused_character_translation(&s) {
                ps.rewrite(TokenKind::Delimiter(d));
            }
            ps.goto(StateId::ExpressionBody);
            Ok(())
        }
        TokenKind::Literal(_) => {
            ps.goto(StateId::ExpressionBody);
            Ok(())
        }
        TokenKind::EndOfDocument => Err(BlockError::UnexpectedEndOfDocument("ExpressionBody")),
        _ => Ok(()),
    }
}

fn close_fragment(ps: &mut ParserState, _tokens: &TokenChain, node: &TokenNode) {
    if let Some(marker) = ps.token_marker {
        if marker != ps.token {
            if let Some(prev) = node.previous() {
                ps.emit(BlockKind::Expression, marker, prev, true);
            }
        }
    }
}

fn handle_word(ps: &mut ParserState, tokens: &TokenChain, node: &TokenNode, w: &str) -> Result<(), BlockError> {
    if let Some(op) = dispatch::operator_translation(w) {
        match ps.expression.clone() {
            Some(ExpressionTermination::KeywordOrClosingParen(kw)) if op == kw => {
                return close_via_keyword(ps, tokens, node, op);
            }
            _ => {}
        }
        ps.rewrite(TokenKind::Keyword(op));
        ps.goto(StateId::ExpressionBody);
        return Ok(());
    }
    if let Some(ExpressionTermination::KeywordOrRangeDirection(_)) = ps.expression {
        if let Some(kw) = Keyword::match_keyword(w) {
            if matches!(kw, Keyword::To | Keyword::Downto) {
                return close_via_range_direction(ps, tokens, node, kw);
            }
        }
    }
    if let Some(ExpressionTermination::KeywordOrClosingParen(kw)) = ps.expression.clone() {
        if let Some(found) = Keyword::match_keyword(w) {
            if found == kw {
                return close_via_keyword(ps, tokens, node, found);
            }
        }
    }
    ps.rewrite(TokenKind::Identifier(Identifier::Basic(w.to_string())));
    ps.goto(StateId::ExpressionBody);
    Ok(())
}

fn handle_closing_paren(ps: &mut ParserState, tokens: &TokenChain, node: &TokenNode) -> Result<(), BlockError> {
    match ps.expression.clone() {
        Some(ExpressionTermination::CharOrClosingParen(_)) if ps.counter == 0 => close_via_reissue(ps, tokens, node),
        Some(ExpressionTermination::KeywordOrClosingParen(_)) if ps.counter == 0 => {
            close_fragment(ps, tokens, node);
            ps.rewrite(TokenKind::Delimiter(Delimiter::ParenR));
            ps.emit(BlockKind::ExitBlock, ps.token, ps.token, false);
            ps.pop_or(1, None, StateId::DocumentDispatch);
            Ok(())
        }
        Some(ExpressionTermination::Semicolon)
        | Some(ExpressionTermination::CharOrClosingParen(_))
        | Some(ExpressionTermination::KeywordOrClosingParen(_))
        | Some(ExpressionTermination::KeywordOrRangeDirection(_))
        | None => {
            if ps.counter == 0 {
                Err(BlockError::BracketMismatch(
                    node.position(),
                    String::from("unmatched ')' in expression"),
                ))
            } else {
                ps.counter -= 1;
                ps.rewrite(TokenKind::Delimiter(Delimiter::ParenR));
                ps.goto(StateId::ExpressionBody);
                Ok(())
            }
        }
    }
}

fn handle_terminator(ps: &mut ParserState, tokens: &TokenChain, node: &TokenNode) -> Result<(), BlockError> {
    match ps.expression.clone() {
        Some(ExpressionTermination::Semicolon) => {
            if ps.counter != 0 {
                return Err(BlockError::BracketMismatch(
                    node.position(),
                    String::from("expression closed with unbalanced parentheses"),
                ));
            }
            // With no caller suspended to interpret a reissued ';', there's
            // nobody left to emit the closing block for it — this state has
            // to close itself out.
            if ps.stack.is_empty() {
                close_fragment(ps, tokens, node);
                ps.rewrite(TokenKind::Delimiter(Delimiter::Terminator));
                ps.emit(BlockKind::EndOfExpression, ps.token, ps.token, false);
                ps.pop_or(1, None, StateId::DocumentDispatch);
                Ok(())
            } else {
                close_via_reissue(ps, tokens, node)
            }
        }
        _ => Err(BlockError::UnexpectedToken(
            node.position(),
            String::from("this expression's configured terminator"),
            String::from(";"),
        )),
    }
}

fn close_via_keyword(ps: &mut ParserState, tokens: &TokenChain, node: &TokenNode, kw: Keyword) -> Result<(), BlockError> {
    close_fragment(ps, tokens, node);
    ps.rewrite(TokenKind::Keyword(kw));
    ps.emit(BlockKind::ExitBlock, ps.token, ps.token, false);
    ps.pop_or(1, None, StateId::DocumentDispatch);
    Ok(())
}

fn close_via_range_direction(
    ps: &mut ParserState,
    tokens: &TokenChain,
    node: &TokenNode,
    kw: Keyword,
) -> Result<(), BlockError> {
    close_fragment(ps, tokens, node);
    ps.rewrite(TokenKind::Keyword(kw));
    ps.emit(BlockKind::RangeDirection, ps.token, ps.token, false);
    ps.pop_or(1, None, StateId::DocumentDispatch);
    Ok(())
}

/// Shared ending for variant 1 (`;`) and variant 2's both exits: emit the
/// trailing `Expression` fragment, then pop back to the caller and let it
/// re-handle the terminating token itself.
fn close_via_reissue(ps: &mut ParserState, tokens: &TokenChain, node: &TokenNode) -> Result<(), BlockError> {
    let _ = tokens;
    if let Some(marker) = ps.token_marker {
        if marker != ps.token {
            if let Some(prev) = node.previous() {
                ps.emit(BlockKind::Expression, marker, prev, false);
            }
        }
    }
    ps.pop_or(1, Some(ps.token), StateId::DocumentDispatch);
    ps.reissue = true;
    Ok(())
}
