// Copyright © 2021 Rouven Spreckels <rs@qu1x.dev>
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Conversion between [`Sf32`] and 32-bit signed integers.

use crate::bits::round_shift_right_u32;
use crate::Sf32;

impl Sf32 {
	/// Converts a 32-bit signed integer to its nearest representable value, rounding to nearest
	/// even when the magnitude needs more than 24 significant bits.
	#[must_use]
	pub fn from_i32(n: i32) -> Self {
		if n == 0 {
			return Self::ZERO;
		}
		let sign = n < 0;
		let mag = n.unsigned_abs();
		let position = 31 - mag.leading_zeros();
		#[allow(clippy::cast_possible_wrap)]
		let mut exp = position as i32;
		let mut frac = if position <= 23 {
			mag << (23 - position)
		} else {
			let shifted = round_shift_right_u32(mag, position - 23);
			if shifted & 0x0100_0000 != 0 {
				exp += 1;
				shifted >> 1
			} else {
				shifted
			}
		};
		frac &= Self::FRAC;
		Self::compose(sign, exp + Self::BIAS, frac)
	}

	/// Converts to a 32-bit signed integer, truncating toward zero and saturating to
	/// [`i32::MIN`]/[`i32::MAX`] outside the representable range.
	#[must_use]
	pub fn to_i32(self) -> i32 {
		if !self.is_finite() {
			return if self.is_sign_negative() { i32::MIN } else { i32::MAX };
		}
		if self.is_zero() {
			return 0;
		}
		let (sign, exp, frac) = self.decompose();
		let e = exp - Self::BIAS;
		if e < 0 {
			return 0;
		}
		if e >= 31 {
			return if sign { i32::MIN } else { i32::MAX };
		}
		let mant = frac | 0x0080_0000;
		let shift = e - 23;
		#[allow(clippy::cast_sign_loss)]
		let mag = if shift >= 0 { mant << shift } else { mant >> (-shift) };
		if sign {
			if mag >= 0x8000_0000 {
				i32::MIN
			} else {
				#[allow(clippy::cast_possible_wrap)]
				{
					-(mag as i32)
				}
			}
		} else if mag >= 0x8000_0000 {
			i32::MAX
		} else {
			#[allow(clippy::cast_possible_wrap)]
			{
				mag as i32
			}
		}
	}
}

impl From<i32> for Sf32 {
	fn from(n: i32) -> Self {
		Self::from_i32(n)
	}
}

impl From<Sf32> for i32 {
	fn from(x: Sf32) -> Self {
		x.to_i32()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn round_trips_small_integers() {
		for n in [-100, -1, 0, 1, 100, 12345] {
			assert_eq!(Sf32::from_i32(n).to_i32(), n);
		}
	}

	#[test]
	fn saturates_at_extremes() {
		assert_eq!(Sf32::MAX.to_i32(), i32::MAX);
		assert_eq!(Sf32::MIN.to_i32(), i32::MIN);
		assert_eq!(Sf32::INFINITY.to_i32(), i32::MAX);
		assert_eq!(Sf32::NEG_INFINITY.to_i32(), i32::MIN);
	}

	#[test]
	fn truncates_toward_zero() {
		assert_eq!(Sf32::from_bits(0x3FC0_0000).to_i32(), 1); // 1.5 -> 1
		assert_eq!(Sf32::from_bits(0xBFC0_0000).to_i32(), -1); // -1.5 -> -1
	}
}
