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

use colored::ColoredString;
use std::fmt::Display;

pub mod char_set;
pub mod comment;
pub mod delimiter;
pub mod identifier;
pub mod keyword;
pub mod literal;

use super::highlight::*;

pub type Identifier = identifier::Identifier;
pub type Comment = comment::Comment;
pub type Keyword = keyword::Keyword;
pub type Delimiter = delimiter::Delimiter;
pub type VhdlError = super::error::VhdlError;

/// Implemented by every token payload type so block/token `Display` can be
/// rendered with the same truecolor scheme the rest of the `vhdl` module
/// uses (see `highlight::color`).
pub trait ToColor: Display {
    fn to_color(&self) -> ColoredString;
}
