// Copyright © 2021 Rouven Spreckels <rs@qu1x.dev>
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Exponential and logarithm kernels: a continued-fraction `exp` on $[0,1)$ and an
//! arctanh-series `ln` on $[1,2)$, from which the general routines are composed.

use crate::Sf32;

/// $e^x$ for $x \in [0, 1)$ via a seven-term continued fraction.
fn exp_frac(x: Sf32) -> Sf32 {
	let mut t = Sf32::ONE;
	for k in (1..=7).rev() {
		let k = Sf32::from_i32(k);
		t = Sf32::ONE.add(x.div(k).mul(t));
	}
	t
}

/// $\ln x$ for $x \in [1, 2)$ via the arctanh series $\ln x = 2 \operatorname{artanh}
/// \frac{x-1}{x+1}$, summed through the $\frac{1}{13}$ term.
fn ln_mantissa(x: Sf32) -> Sf32 {
	let r = x.sub(Sf32::ONE);
	let z = r.div(Sf32::TWO.add(r));
	let z2 = z.mul(z);
	let mut term = z;
	let mut sum = z;
	for n in [3, 5, 7, 9, 11, 13] {
		term = term.mul(z2);
		sum = sum.add(term.div(Sf32::from_i32(n)));
	}
	sum.mul(Sf32::TWO)
}

impl Sf32 {
	/// $e^x$.
	#[must_use]
	pub fn exp(self) -> Self {
		if self.is_nan() {
			return self;
		}
		if self.is_zero() {
			return Self::ONE;
		}
		if self.to_bits() == Self::ONE.to_bits() {
			return Self::E;
		}
		if self.is_infinite() {
			return if self.is_sign_negative() { Self::ZERO } else { Self::INFINITY };
		}
		let negative = self.is_sign_negative();
		let ax = self.abs();
		let k = ax.trunc().to_i32();
		let f = ax.sub(Self::from_i32(k));
		let result = Self::E.powi(k).mul(exp_frac(f));
		if negative {
			Self::ONE.div(result)
		} else {
			result
		}
	}

	/// Natural logarithm. Domain `x > 0`; returns [`Sf32::NAN`] for `x <= 0`, including `+0`/`−0`.
	#[must_use]
	pub fn ln(self) -> Self {
		if self.is_nan() {
			return self;
		}
		if self.is_sign_negative() || self.is_zero() {
			return Self::NAN;
		}
		if self.is_infinite() {
			return Self::INFINITY;
		}
		let (_, exp, frac) = self.decompose();
		let e = exp - Self::BIAS;
		let mantissa = Self::compose(false, Self::BIAS, frac);
		Self::from_i32(e).mul(Self::LN_2).add(ln_mantissa(mantissa))
	}

	/// Base-10 logarithm, `ln(self) / ln(10)`.
	#[must_use]
	pub fn log10(self) -> Self {
		self.ln().div(Self::LN_10)
	}

	/// Base-2 logarithm, `ln(self) / ln(2)`.
	#[must_use]
	pub fn log2(self) -> Self {
		self.ln().div(Self::LN_2)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn close(a: Sf32, b: Sf32, ulp: i64) -> bool {
		(a.to_bits() as i64 - b.to_bits() as i64).abs() <= ulp
	}

	#[test]
	fn exp_of_zero_is_one() {
		assert_eq!(Sf32::ZERO.exp().to_bits(), Sf32::ONE.to_bits());
	}

	#[test]
	fn exp_of_one_is_e() {
		assert_eq!(Sf32::ONE.exp().to_bits(), Sf32::E.to_bits());
	}

	#[test]
	fn ln_of_one_is_zero() {
		assert_eq!(Sf32::ONE.ln().to_bits(), Sf32::ZERO.to_bits());
	}

	#[test]
	fn ln_of_zero_is_nan() {
		assert!(Sf32::ZERO.ln().is_nan());
		assert!(Sf32::NEG_ZERO.ln().is_nan());
	}

	#[test]
	fn ln_of_negative_is_nan() {
		assert!(Sf32::NEG_ONE.ln().is_nan());
	}

	#[test]
	fn exp_ln_are_approximate_inverses() {
		let x = Sf32::from_i32(5);
		assert!(close(x.ln().exp(), x, 16));
	}

	#[test]
	fn log10_of_ten_is_one() {
		assert!(close(Sf32::TEN.log10(), Sf32::ONE, 16));
	}

	#[cfg(feature = "libm-check")]
	#[test]
	fn exp_matches_libm_across_a_sweep() {
		for i in -20_i16..=20 {
			let x = f32::from(i) / 4.0;
			let got = Sf32::from_bits(x.to_bits()).exp().to_bits();
			let want = libm::expf(x).to_bits();
			assert!(
				(i64::from(got) - i64::from(want)).abs() <= 1 << 12,
				"exp({x}): got {got:#010x}, libm {want:#010x}"
			);
		}
	}

	#[cfg(feature = "libm-check")]
	#[test]
	fn ln_matches_libm_across_a_sweep() {
		for i in 1_i16..=40 {
			let x = f32::from(i) / 4.0;
			let got = Sf32::from_bits(x.to_bits()).ln().to_bits();
			let want = libm::logf(x).to_bits();
			assert!(
				(i64::from(got) - i64::from(want)).abs() <= 1 << 12,
				"ln({x}): got {got:#010x}, libm {want:#010x}"
			);
		}
	}
}
