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
//! Top-level dispatch: recognizes the handful of keywords that can open a
//! design unit or context clause, and accounts for everything between them.

use crate::core::lang::vhdl::token::Keyword;

use super::super::block::BlockKind;
use super::super::dispatch;
use super::super::error::BlockError;
use super::super::state::{ParserState, StateId};
use super::super::token::{TokenChain, TokenKind};

pub fn state_dispatch(ps: &mut ParserState, tokens: &TokenChain) -> Result<(), BlockError> {
    let node = tokens.get(ps.token);
    let marker = ps.token_marker.unwrap_or(ps.token);

    match node.kind().clone() {
        // start-of-document is handled generically by the driver before any
        // state function runs (see `driver::BlockStream::next`)
        TokenKind::EndOfDocument => {
            ps.emit(BlockKind::EndOfDocument, ps.token, ps.token, false);
            Ok(())
        }
        TokenKind::Space => {
            ps.emit(BlockKind::Whitespace, marker, ps.token, false);
            ps.token_marker = None;
            Ok(())
        }
        TokenKind::Indentation => {
            ps.emit(BlockKind::Indentation, marker, ps.token, false);
            ps.token_marker = None;
            Ok(())
        }
        TokenKind::Linebreak => {
            ps.emit(BlockKind::Linebreak, marker, ps.token, false);
            ps.token_marker = None;
            Ok(())
        }
        TokenKind::Comment(_) => {
            ps.emit(BlockKind::Comment, marker, ps.token, false);
            ps.token_marker = None;
            Ok(())
        }
        TokenKind::Word(w) => match dispatch::document_keyword(&w) {
            Some(kw) => {
                ps.rewrite(TokenKind::Keyword(kw.clone()));
                match kw {
                    Keyword::Library => {
                        ps.construct = Some(BlockKind::LibraryClause);
                        ps.goto(StateId::ClauseBody);
                    }
                    Keyword::Use => {
                        ps.construct = Some(BlockKind::UseClause);
                        ps.goto(StateId::ClauseBody);
                    }
                    Keyword::Context => {
                        ps.construct = Some(BlockKind::ContextClause);
                        ps.goto(StateId::UnitHeaderHeading);
                    }
                    Keyword::Entity => {
                        ps.construct = Some(BlockKind::EntityHeader);
                        ps.goto(StateId::UnitHeaderHeading);
                    }
                    Keyword::Architecture => {
                        ps.construct = Some(BlockKind::ArchitectureHeader);
                        ps.goto(StateId::UnitHeaderHeading);
                    }
                    Keyword::Package => {
                        ps.construct = Some(BlockKind::PackageHeader);
                        ps.goto(StateId::UnitHeaderHeading);
                    }
                    _ => unreachable!("document_keyword only returns the six unit-opening keywords"),
                }
                Ok(())
            }
            None => Err(unexpected(ps, tokens)),
        },
        _ => Err(unexpected(ps, tokens)),
    }
}

fn unexpected(ps: &ParserState, tokens: &TokenChain) -> BlockError {
    let node = tokens.get(ps.token);
    BlockError::UnexpectedToken(
        node.position(),
        String::from("one of 'library', 'use', 'context', 'entity', 'architecture', 'package'"),
        node.raw().to_string(),
    )
}

#[cfg(test)]
mod test {
    use super::super::super::driver::BlockStream;

    #[test]
    fn trivia_between_clauses_is_bracketed() {
        let blocks: Vec<_> = BlockStream::parse("\n").map(|r| r.unwrap()).collect();
        // start-of-document, linebreak, end-of-document
        assert_eq!(blocks.len(), 3);
    }
}
