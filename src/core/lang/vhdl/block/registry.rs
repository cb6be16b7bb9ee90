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
//! Block/state metadata, kept purely for documentation and test generation.
//! Nothing in `driver.rs` or `dispatch.rs` reads this table;
//! `StateId` and `run_state` are the actual registry.

use super::block::BlockKind;
use super::state::StateId;

pub struct BlockDescriptor {
    pub kind: BlockKind,
    pub entry_state: StateId,
    pub description: &'static str,
}

pub const STATES: &[BlockDescriptor] = &[
    BlockDescriptor {
        kind: BlockKind::LibraryClause,
        entry_state: StateId::ClauseBody,
        description: "library clause, keyword through ';'",
    },
    BlockDescriptor {
        kind: BlockKind::UseClause,
        entry_state: StateId::ClauseBody,
        description: "use clause, keyword through ';'",
    },
    BlockDescriptor {
        kind: BlockKind::ContextClause,
        entry_state: StateId::UnitHeaderHeading,
        description: "context declaration header through 'is'",
    },
    BlockDescriptor {
        kind: BlockKind::EntityHeader,
        entry_state: StateId::UnitHeaderHeading,
        description: "entity header through 'is'",
    },
    BlockDescriptor {
        kind: BlockKind::ArchitectureHeader,
        entry_state: StateId::UnitHeaderHeading,
        description: "architecture header through 'is'",
    },
    BlockDescriptor {
        kind: BlockKind::PackageHeader,
        entry_state: StateId::UnitHeaderHeading,
        description: "package header through 'is'",
    },
    BlockDescriptor {
        kind: BlockKind::PackageBodyHeader,
        entry_state: StateId::UnitHeaderHeading,
        description: "package body header through 'is'",
    },
    BlockDescriptor {
        kind: BlockKind::OpaqueBody,
        entry_state: StateId::UnitHeaderOpaqueBody,
        description: "unexamined declarative/statement part up to the matching 'end'",
    },
    BlockDescriptor {
        kind: BlockKind::ListOpen,
        entry_state: StateId::ListAwaitOpen,
        description: "generic/port clause, keyword through '('",
    },
    BlockDescriptor {
        kind: BlockKind::ListItem,
        entry_state: StateId::ListItemRemainder,
        description: "one interface element of a generic/port list",
    },
    BlockDescriptor {
        kind: BlockKind::ListDelimiter,
        entry_state: StateId::ListItemRemainder,
        description: "';' separating two list items",
    },
    BlockDescriptor {
        kind: BlockKind::ListClose,
        entry_state: StateId::ListClosingParenthesis,
        description: "')' through the closing ';'",
    },
    BlockDescriptor {
        kind: BlockKind::ReturnStatement,
        entry_state: StateId::ReturnKeyword,
        description: "'return' plus its optional expression's leading fragment",
    },
    BlockDescriptor {
        kind: BlockKind::EndOfReturn,
        entry_state: StateId::ReturnKeyword,
        description: "terminating ';' of a return statement",
    },
    BlockDescriptor {
        kind: BlockKind::Expression,
        entry_state: StateId::ExpressionBody,
        description: "one fragment of an expression",
    },
    BlockDescriptor {
        kind: BlockKind::ObjectDeclaration,
        entry_state: StateId::ObjectDeclHeading,
        description: "signal/variable/constant declaration",
    },
];
