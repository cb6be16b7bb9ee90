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
//! A streaming token-to-block engine for VHDL source: a cooperative
//! pushdown state machine that turns a flat token stream into a sequence of
//! non-overlapping, position-addressable blocks (design units, clauses,
//! statements, expressions, trivia) without building a parse tree.

mod block;
mod dispatch;
mod driver;
mod error;
mod families;
mod registry;
mod state;
mod token;
mod tokenizer;

pub use block::{BlockChain, BlockId, BlockKind, BlockNode};
pub use driver::BlockStream;
pub use error::BlockError;
pub use registry::{BlockDescriptor, STATES};
pub use token::{SourcePosition, TokenChain, TokenId, TokenKind, TokenLiteral, TokenNode};

/// Parses `source` as a complete VHDL document, yielding one `BlockId` at a
/// time. Look up the block's content via `stream.blocks()`/`stream.tokens()`
/// as each id arrives, or drain the stream and query afterward.
pub fn parse_blocks(source: &str) -> BlockStream {
    BlockStream::parse(source)
}

#[cfg(test)]
mod test {
    use super::*;

    fn collect(source: &str) -> (Vec<BlockKind>, BlockStream) {
        let mut stream = BlockStream::parse(source);
        let mut kinds = Vec::new();
        for result in &mut stream {
            let id = result.unwrap();
            kinds.push(stream_block_kind(&stream, id));
        }
        (kinds, stream)
    }

    fn stream_block_kind(stream: &BlockStream, id: BlockId) -> BlockKind {
        stream.blocks().get(id).kind()
    }

    #[test]
    fn empty_document_is_just_sentinels() {
        let (kinds, _) = collect("");
        assert_eq!(kinds, vec![BlockKind::StartOfDocument, BlockKind::EndOfDocument]);
    }

    #[test]
    fn return_without_expression() {
        let mut stream = BlockStream::starting_at("return;", state::StateId::ReturnKeyword);
        let mut kinds = Vec::new();
        while let Some(r) = stream.next() {
            kinds.push(stream.blocks().get(r.unwrap()).kind());
        }
        assert_eq!(
            kinds,
            vec![
                BlockKind::StartOfDocument,
                BlockKind::ReturnStatement,
                BlockKind::EndOfReturn,
                BlockKind::EndOfDocument,
            ]
        );
    }

    #[test]
    fn return_with_expression() {
        let mut stream = BlockStream::starting_at("return a + b;", state::StateId::ReturnKeyword);
        let mut kinds = Vec::new();
        while let Some(r) = stream.next() {
            kinds.push(stream.blocks().get(r.unwrap()).kind());
        }
        assert_eq!(
            kinds,
            vec![
                BlockKind::StartOfDocument,
                BlockKind::ReturnStatement,
                BlockKind::Whitespace,
                BlockKind::Expression,
                BlockKind::EndOfReturn,
                BlockKind::EndOfDocument,
            ]
        );
    }

    #[test]
    fn return_with_parenthesized_expression() {
        let mut stream = BlockStream::starting_at("return (a + b);", state::StateId::ReturnKeyword);
        let mut kinds = Vec::new();
        while let Some(r) = stream.next() {
            kinds.push(stream.blocks().get(r.unwrap()).kind());
        }
        assert_eq!(
            kinds,
            vec![
                BlockKind::StartOfDocument,
                BlockKind::ReturnStatement,
                BlockKind::Expression,
                BlockKind::EndOfReturn,
                BlockKind::EndOfDocument,
            ]
        );
    }

    #[test]
    fn return_with_multiline_expression_is_multi_part() {
        let source = "return a +\n  b;";
        let mut stream = BlockStream::starting_at(source, state::StateId::ReturnKeyword);
        let mut kinds = Vec::new();
        while let Some(r) = stream.next() {
            kinds.push(stream.blocks().get(r.unwrap()).kind());
        }
        let expr_fragments = kinds.iter().filter(|k| **k == BlockKind::Expression).count();
        assert_eq!(expr_fragments, 2);
        assert!(kinds.contains(&BlockKind::Linebreak));
        assert!(kinds.contains(&BlockKind::Indentation));
    }

    #[test]
    fn port_list_with_two_items() {
        let source = "port (x : in std_logic; y : out std_logic);";
        let mut stream = BlockStream::starting_at(source, state::StateId::ListAwaitOpen);
        let mut kinds = Vec::new();
        while let Some(r) = stream.next() {
            kinds.push(stream.blocks().get(r.unwrap()).kind());
        }
        // interior trivia (the space before the second item) is absorbed
        // into the next ListItem's span rather than split out on its own —
        // a deliberate simplification for this supplemented construct
        // (DESIGN.md, "list engine interior trivia").
        assert_eq!(
            kinds,
            vec![
                BlockKind::StartOfDocument,
                BlockKind::ListOpen,
                BlockKind::ListItem,
                BlockKind::ListDelimiter,
                BlockKind::ListItem,
                BlockKind::ListClose,
                BlockKind::EndOfDocument,
            ]
        );
    }

    #[test]
    fn mismatched_closing_paren_is_an_error() {
        let mut stream = BlockStream::starting_at("return a);", state::StateId::ReturnKeyword);
        let mut last = None;
        while let Some(r) = stream.next() {
            last = Some(r);
        }
        assert!(matches!(last, Some(Err(BlockError::BracketMismatch(..)))));
    }

    #[test]
    fn full_entity_with_generic_and_port() {
        let source = "entity counter is\n  generic (WIDTH : integer);\n  port (clk : in std_logic);\nend entity;";
        let (kinds, _) = collect(source);
        assert!(kinds.contains(&BlockKind::EntityHeader));
        assert!(kinds.contains(&BlockKind::ListOpen));
        assert!(kinds.contains(&BlockKind::ListClose));
        assert_eq!(kinds.first(), Some(&BlockKind::StartOfDocument));
        assert_eq!(kinds.last(), Some(&BlockKind::EndOfDocument));
    }
}
