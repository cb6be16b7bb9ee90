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
//! One module per construct family, each exposing its `state*` functions to
//! `dispatch::run_state`. Mirrors the one-class-per-construct layout the
//! spec describes (§2), with `StateId` standing in for the class.

pub mod clause;
pub mod document;
pub mod expression;
pub mod list;
pub mod object_decl;
pub mod return_stmt;
pub mod unit_header;
