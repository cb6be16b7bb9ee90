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
//! Rewrite dispatch tables and the `run_state` registry. The three
//! translation tables wrap the existing `Keyword::match_keyword` and
//! `Delimiter::transform` rather than re-deriving a parallel table
//! (DESIGN.md, "keyword/operator dispatch").

use crate::core::lang::vhdl::token::{Delimiter, Keyword};

use super::error::BlockError;
use super::families;
use super::state::{ParserState, StateId};
use super::token::TokenChain;

/// Single-character operators a state function rewrites via table lookup
/// rather than ad hoc (structural punctuation like `(`, `)`, `;`, `:` is
/// rewritten directly by the state that owns it instead).
pub fn character_translation(c: char) -> Option<Delimiter> {
    match c {
        '=' | '+' | '-' | '*' | '/' | '&' | '<' | '>' | ',' => Delimiter::transform(&c.to_string()),
        _ => None,
    }
}

/// Multi-character operators the tokenizer already fused into one token.
pub fn fused_character_translation(s: &str) -> Option<Delimiter> {
    match s {
        "**" | "/=" | "<=" | ">=" | "?=" | "?/=" | "?<" | "?<=" | "?>" | "?>=" => Delimiter::transform(s),
        _ => None,
    }
}

/// Word-form operators (`and`, `nand`, `sll`, `abs`, ...) that an expression
/// rewrites into keywords rather than identifiers.
pub fn operator_translation(word: &str) -> Option<Keyword> {
    match word.to_ascii_lowercase().as_str() {
        "or" | "nor" | "and" | "nand" | "xor" | "xnor" | "sla" | "sll" | "sra" | "srl" | "not" | "abs"
        | "mod" | "rem" => Keyword::match_keyword(word),
        _ => None,
    }
}

/// The keywords the document-level dispatcher recognizes as the first word
/// of a top-level construct.
pub fn document_keyword(word: &str) -> Option<Keyword> {
    match word.to_ascii_lowercase().as_str() {
        "library" | "use" | "context" | "entity" | "architecture" | "package" => Keyword::match_keyword(word),
        _ => None,
    }
}

/// The explicit registry a class-level `STATES` table and virtual dispatch
/// would otherwise provide (DESIGN.md: "class-level metaclass registration →
/// explicit registry").
pub fn run_state(id: StateId, ps: &mut ParserState, tokens: &TokenChain) -> Result<(), BlockError> {
    match id {
        StateId::DocumentDispatch => families::document::state_dispatch(ps, tokens),
        StateId::ClauseBody => families::clause::state_body(ps, tokens),
        StateId::UnitHeaderHeading => families::unit_header::state_heading(ps, tokens),
        StateId::UnitHeaderAfterIs => families::unit_header::state_after_is(ps, tokens),
        StateId::UnitHeaderOpaqueBody => families::unit_header::state_opaque_body(ps, tokens),
        StateId::UnitHeaderClosing => families::unit_header::state_closing(ps, tokens),
        StateId::ListAwaitOpen => families::list::state_await_open(ps, tokens),
        StateId::ListOpeningParenthesis => families::list::state_opening_parenthesis(ps, tokens),
        StateId::ListItemRemainder => families::list::state_item_remainder(ps, tokens),
        StateId::ListClosingParenthesis => families::list::state_closing_parenthesis(ps, tokens),
        StateId::ReturnKeyword => families::return_stmt::state_return_keyword(ps, tokens),
        StateId::ReturnWhitespace1 => families::return_stmt::state_whitespace1(ps, tokens),
        StateId::ExpressionBody => families::expression::state_expression(ps, tokens),
        StateId::ExpressionWhitespace1 => families::expression::state_whitespace1(ps, tokens),
        StateId::ObjectDeclHeading => families::object_decl::state_heading(ps, tokens),
        StateId::StateError => Err(BlockError::UnreachableState(
            tokens.get(ps.token).position(),
            "StateError",
        )),
    }
}
