// Copyright © 2021 Rouven Spreckels <rs@qu1x.dev>
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use core::fmt;

/// Failure to parse a decimal string as an [`crate::Sf32`].
///
/// Replaces the original library's convention of silently returning zero on malformed input with
/// a result that distinguishes an empty string from a malformed character from an unparsable
/// exponent.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParseSf32Error {
	/// The input contained no characters after whitespace was skipped.
	Empty,
	/// A character at the given byte offset could not extend the number being parsed.
	InvalidAt(usize),
	/// An exponent was introduced by `e`/`E` but no digits followed it.
	MissingExponent,
}

impl fmt::Display for ParseSf32Error {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Empty => f.write_str("cannot parse float from empty string"),
			Self::InvalidAt(at) => write!(f, "invalid character at byte offset {at}"),
			Self::MissingExponent => f.write_str("exponent marker without exponent digits"),
		}
	}
}

#[cfg(feature = "std")]
impl std::error::Error for ParseSf32Error {}

/// Failure to format an [`crate::Sf32`] into a caller-supplied buffer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormatSf32Error {
	/// The buffer was too small to hold the formatted output.
	BufferTooSmall,
}

impl fmt::Display for FormatSf32Error {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::BufferTooSmall => f.write_str("buffer too small to format value"),
		}
	}
}

#[cfg(feature = "std")]
impl std::error::Error for FormatSf32Error {}
