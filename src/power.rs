// Copyright © 2021 Rouven Spreckels <rs@qu1x.dev>
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Integer and floating-point exponentiation.
//!
//! Both the integer and the float-to-integer-exponent routines use iterative
//! exponentiation-by-squaring. The original library computed both recursively; recursion on an
//! embedded target with a small fixed stack is a latent overflow risk the iterative form removes
//! without changing the result.

use crate::Sf32;

/// Raises a 32-bit integer `base` to a non-negative integer power `exp`, saturating on overflow.
#[must_use]
pub fn ipow(mut base: i32, mut exp: u32) -> i32 {
	if exp == 0 {
		return 1;
	}
	match base {
		0 => return 0,
		1 => return 1,
		-1 => return if exp % 2 == 0 { 1 } else { -1 },
		_ => {}
	}
	let mut result: i32 = 1;
	loop {
		if exp & 1 == 1 {
			result = result.saturating_mul(base);
		}
		exp >>= 1;
		if exp == 0 {
			break;
		}
		base = base.saturating_mul(base);
	}
	result
}

impl Sf32 {
	/// Raises `self` to the signed integer power `n`, by iterative exponentiation-by-squaring on
	/// `|n|` with a final reciprocal for negative `n`.
	#[must_use]
	pub fn powi(self, n: i32) -> Self {
		if self.is_nan() {
			return self;
		}
		if n == 0 {
			return Self::ONE;
		}
		if self.is_zero() {
			return if n > 0 { self } else { Self::INFINITY };
		}
		if self.to_bits() == Self::ONE.to_bits() {
			return Self::ONE;
		}
		if self.to_bits() == Self::NEG_ONE.to_bits() {
			return if n.unsigned_abs() % 2 == 0 { Self::ONE } else { Self::NEG_ONE };
		}
		let negative = n < 0;
		let mut e = n.unsigned_abs();
		let mut base = self;
		let mut result = Self::ONE;
		loop {
			if e & 1 == 1 {
				result = result.mul(base);
			}
			e >>= 1;
			if e == 0 {
				break;
			}
			base = base.mul(base);
		}
		if negative {
			Self::ONE.div(result)
		} else {
			result
		}
	}

	/// General power `self^y`, computed as `exp(y * ln(self))`. Domain `self > 0`; behavior for
	/// `self <= 0` or `self == 1` follows the short-circuits already baked into [`Sf32::ln`] and
	/// [`Sf32::exp`] rather than any special-casing here.
	#[must_use]
	pub fn pow(self, y: Self) -> Self {
		y.mul(self.ln()).exp()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn ipow_matches_repeated_multiplication() {
		assert_eq!(ipow(2, 10), 1024);
		assert_eq!(ipow(-2, 3), -8);
		assert_eq!(ipow(3, 0), 1);
	}

	#[test]
	fn powi_of_two_cubed_is_eight() {
		assert_eq!(Sf32::TWO.powi(3).to_bits(), Sf32::from_i32(8).to_bits());
	}

	#[test]
	fn powi_negative_exponent_reciprocates() {
		assert_eq!(Sf32::TWO.powi(-1).to_bits(), Sf32::HALF.to_bits());
	}

	#[test]
	fn pow_of_one_is_always_one() {
		assert_eq!(Sf32::ONE.pow(Sf32::from_i32(100)).to_bits(), Sf32::ONE.to_bits());
	}

	#[test]
	fn pow_of_positive_base_matches_exp_ln_composition() {
		let got = Sf32::TWO.pow(Sf32::from_i32(3));
		assert!((got.to_bits() as i64 - Sf32::from_i32(8).to_bits() as i64).abs() <= 64);
	}

	#[test]
	fn pow_of_nonpositive_base_is_nan() {
		// `ln` is qNaN on `x <= 0`, so `pow` inherits that domain restriction without its own
		// special-casing, per `original_source/spfefn.c`'s three-line `spfpow`.
		assert!(Sf32::ZERO.pow(Sf32::from_i32(2)).is_nan());
		assert!(Sf32::from_i32(-2).pow(Sf32::from_i32(3)).is_nan());
	}
}
