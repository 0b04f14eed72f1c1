// Copyright © 2021 Rouven Spreckels <rs@qu1x.dev>
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Fixed-point bridges used internally by the square-root and CORDIC kernels.
//!
//! None of these types appear in the public surface beyond their names: the only way to produce
//! or consume one is through the kernels in [`crate::sqrt`], [`crate::trig`], and [`crate::atan`].

use crate::bits::round_shift_right_u64;
use crate::Sf32;

/// Signed `2.30` fixed-point: 2 integer bits (including sign), 30 fractional bits, range
/// $(-2, 2)$. Used by the CORDIC vectoring (arctangent) kernel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Q2_30(pub(crate) i32);

/// Signed `4.28` fixed-point: 4 integer bits (including sign), 28 fractional bits, range
/// $(-16, 16)$. Used by the bitwise square-root kernel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Q4_28(pub(crate) i32);

/// Signed `2.62` fixed-point stored in a 64-bit word: 2 integer bits, 62 fractional bits, range
/// $(-2, 2)$. Used by the CORDIC rotation kernel and the arctangent angle accumulator.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Q2_62(pub(crate) i64);

/// Converts a finite, nonzero [`Sf32`] to a raw signed fixed-point word with `frac_bits`
/// fractional bits, rounding to nearest even on bits shifted out.
fn to_fixed_raw(x: Sf32, frac_bits: i32) -> i64 {
	let (sign, exp, frac) = x.decompose();
	let e = exp - Sf32::BIAS;
	let mant = u64::from(frac | 0x0080_0000);
	let shift = frac_bits + e - 23;
	#[allow(clippy::cast_sign_loss)]
	let mag = if shift >= 0 {
		mant << shift
	} else {
		round_shift_right_u64(mant, (-shift) as u32)
	};
	#[allow(clippy::cast_possible_wrap)]
	let mag = mag as i64;
	if sign {
		-mag
	} else {
		mag
	}
}

/// Converts a raw signed fixed-point word with `frac_bits` fractional bits back to [`Sf32`].
fn from_fixed_raw(raw: i64, frac_bits: i32) -> Sf32 {
	if raw == 0 {
		return Sf32::ZERO;
	}
	let sign = raw < 0;
	#[allow(clippy::cast_sign_loss)]
	let mag = raw.unsigned_abs();
	let position = 63 - mag.leading_zeros();
	#[allow(clippy::cast_possible_wrap)]
	let mut exp = position as i32 - frac_bits;
	let mut mant = if position <= 23 {
		mag << (23 - position)
	} else {
		let shifted = round_shift_right_u64(mag, position - 23);
		if shifted & 0x0100_0000 != 0 {
			exp += 1;
			shifted >> 1
		} else {
			shifted
		}
	};
	mant &= u64::from(Sf32::FRAC);
	#[allow(clippy::cast_possible_truncation)]
	Sf32::compose(sign, exp + Sf32::BIAS, mant as u32)
}

impl Q2_30 {
	/// Converts from [`Sf32`], saturating at $\pm(2 - 2^{-30})$.
	#[must_use]
	pub(crate) fn from_sf32(x: Sf32) -> Self {
		if x.is_zero() || !x.is_finite() {
			return Self(if x.is_sign_negative() { i32::MIN } else { i32::MAX });
		}
		let raw = to_fixed_raw(x, 30);
		#[allow(clippy::cast_possible_truncation)]
		Self(raw.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32)
	}

	/// Converts back to [`Sf32`].
	#[must_use]
	pub(crate) fn to_sf32(self) -> Sf32 {
		from_fixed_raw(i64::from(self.0), 30)
	}

	/// Raw two's-complement word.
	#[must_use]
	pub(crate) const fn raw(self) -> i32 {
		self.0
	}

	pub(crate) const fn from_raw(raw: i32) -> Self {
		Self(raw)
	}
}

impl Q4_28 {
	/// Converts from [`Sf32`]. Returns `None` if `x` is negative, NaN, or would overflow the
	/// $(-16, 16)$ range.
	#[must_use]
	pub(crate) fn from_sf32(x: Sf32) -> Option<Self> {
		if !x.is_finite() || x.is_sign_negative() {
			return None;
		}
		if x.is_zero() {
			return Some(Self(0));
		}
		let raw = to_fixed_raw(x, 28);
		i32::try_from(raw).ok().map(Self)
	}

	/// Converts back to [`Sf32`].
	#[must_use]
	pub(crate) fn to_sf32(self) -> Sf32 {
		from_fixed_raw(i64::from(self.0), 28)
	}

	pub(crate) const fn raw(self) -> i32 {
		self.0
	}

	pub(crate) const fn from_raw(raw: i32) -> Self {
		Self(raw)
	}
}

impl Q2_62 {
	/// The zero value.
	pub(crate) const ZERO: Self = Self(0);

	/// Converts from [`Sf32`], saturating at $\pm(2 - 2^{-62})$.
	#[must_use]
	pub(crate) fn from_sf32(x: Sf32) -> Self {
		if x.is_zero() || !x.is_finite() {
			return Self(if x.is_sign_negative() { i64::MIN } else { i64::MAX });
		}
		Self(to_fixed_raw(x, 62))
	}

	/// Converts back to [`Sf32`].
	#[must_use]
	pub(crate) fn to_sf32(self) -> Sf32 {
		from_fixed_raw(self.0, 62)
	}

	pub(crate) const fn from_raw(raw: i64) -> Self {
		Self(raw)
	}

	pub(crate) const fn is_negative(self) -> bool {
		self.0 < 0
	}

	pub(crate) const fn add(self, other: Self) -> Self {
		Self(self.0.wrapping_add(other.0))
	}

	pub(crate) const fn sub(self, other: Self) -> Self {
		Self(self.0.wrapping_sub(other.0))
	}

	pub(crate) const fn neg(self) -> Self {
		Self(-self.0)
	}

	/// Arithmetic right shift by `n` bits, used for the per-step CORDIC scale factor
	/// $2^{-i}$.
	#[must_use]
	pub(crate) fn shr(self, n: u32) -> Self {
		Self(crate::bits::sra64(self.0, n))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn q2_30_round_trips_small_values() {
		let x = Sf32::HALF;
		let q = Q2_30::from_sf32(x);
		assert!((q.to_sf32().sub(x)).abs().total_cmp(Sf32::from_bits(0x3300_0000)) != core::cmp::Ordering::Greater);
	}

	#[test]
	fn q4_28_rejects_negative() {
		assert!(Q4_28::from_sf32(Sf32::NEG_ONE).is_none());
	}

	#[test]
	fn q2_62_round_trips_one() {
		let q = Q2_62::from_sf32(Sf32::ONE);
		assert_eq!(q.to_sf32().to_bits(), Sf32::ONE.to_bits());
	}
}
