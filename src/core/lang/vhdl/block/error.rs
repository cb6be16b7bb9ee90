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

use super::token::SourcePosition;
use thiserror::Error;

/// Errors raised by the token-to-block engine.
///
/// Every variant carries the position of the offending token so a
/// consumer can point a diagnostic at the exact place parsing stopped.
#[derive(Debug, Error, PartialEq)]
pub enum BlockError {
    #[error("{0} expected {1} but found '{2}'")]
    UnexpectedToken(SourcePosition, String, String),
    #[error("{0} bracket mismatch: {1}")]
    BracketMismatch(SourcePosition, String),
    #[error("unexpected end of document while in state '{0}'")]
    UnexpectedEndOfDocument(&'static str),
    #[error("{0} reached unreachable state '{1}'")]
    UnreachableState(SourcePosition, &'static str),
}
