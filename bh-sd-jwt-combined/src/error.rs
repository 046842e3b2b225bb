// Copyright (C) 2020-2026  The Blockhouse Technology Limited (TBTL).
//
// This program is free software: you can redistribute it and/or modify it
// under the terms of the GNU Affero General Public License as published by
// the Free Software Foundation, either version 3 of the License, or (at your
// option) any later version.
//
// This program is distributed in the hope that it will be useful, but
// WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU Affero General Public
// License for more details.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

/// Format error related to parsing an SD-JWT combined serialization.
///
/// Both variants can only arise while parsing; constructing a combined
/// serialization from its parts never fails.
#[derive(strum_macros::Display, Debug, PartialEq, Clone)]
pub enum FormatError {
    /// Error indicating that a non-final element of the combined
    /// serialization is empty. Carries the index of the offending element.
    #[strum(to_string = "Empty element at index {0}")]
    EmptyElement(usize),

    /// Error indicating that the combined serialization does not contain
    /// enough elements. Carries the observed element count.
    #[strum(to_string = "Invalid element count {0}")]
    InvalidElementCount(usize),
}

impl bherror::BhError for FormatError {}

/// Result type used across the crate.
pub type Result<T, E> = bherror::Result<T, E>;
