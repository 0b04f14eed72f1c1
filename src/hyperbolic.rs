// Copyright © 2021 Rouven Spreckels <rs@qu1x.dev>
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Hyperbolic trigonometry, composed from [`crate::explog`]'s `exp`/`ln`.

use core::cmp::Ordering;

use crate::Sf32;

/// Below this magnitude, `(e^x - e^-x)/2` loses precision to cancellation; switch to a Maclaurin
/// expansion instead.
const SMALL_X: Sf32 = Sf32::from_bits(0x3980_0000); // 2^-12

/// Above this magnitude, `e^-|x|` underflows to zero in `exp`'s continued fraction before the
/// subtraction that would otherwise cancel it; switch to the half-angle form.
const LARGE_X: Sf32 = Sf32::from_bits(0x42B1_7218); // ~88.7, ln(Sf32::MAX)

impl Sf32 {
	/// Hyperbolic sine and cosine in one pass, sharing the `exp(|x|)` evaluation.
	#[must_use]
	pub fn sinh_cosh(self) -> (Self, Self) {
		if self.is_nan() {
			return (self, self);
		}
		if self.is_zero() {
			return (self, Self::ONE);
		}
		let ax = self.abs();
		if ax.total_cmp(SMALL_X) != Ordering::Greater {
			let x2 = ax.mul(ax);
			let cosh = Self::ONE.add(x2.div(Self::TWO)).add(x2.mul(x2).div(Self::from_i32(24)));
			let sinh_mag = ax.add(ax.mul(x2).div(Self::from_i32(6)));
			return (if self.is_sign_negative() { sinh_mag.neg() } else { sinh_mag }, cosh);
		}
		if ax.total_cmp(LARGE_X) == Ordering::Greater {
			// Divide before squaring back up: `half * half` can overflow to infinity for an `x`
			// whose true cosh is still finite, since `e^x` itself may exceed `Sf32::MAX` even
			// though `e^x / 2` does not.
			let half = ax.div(Self::TWO).exp();
			let cosh = half.div(Self::TWO).mul(half);
			return (if self.is_sign_negative() { cosh.neg() } else { cosh }, cosh);
		}
		let e = ax.exp();
		let ei = Self::ONE.div(e);
		let cosh = e.add(ei).div(Self::TWO);
		let sinh_mag = e.sub(ei).div(Self::TWO);
		(if self.is_sign_negative() { sinh_mag.neg() } else { sinh_mag }, cosh)
	}

	/// Hyperbolic sine.
	#[must_use]
	pub fn sinh(self) -> Self {
		self.sinh_cosh().0
	}

	/// Hyperbolic cosine.
	#[must_use]
	pub fn cosh(self) -> Self {
		self.sinh_cosh().1
	}

	/// Hyperbolic tangent, `sinh(self) / cosh(self)`, saturating to `±1` once `sinh`/`cosh` both
	/// overflow to infinity rather than propagating the resulting `inf / inf` as [`Sf32::NAN`].
	#[must_use]
	pub fn tanh(self) -> Self {
		let (sinh, cosh) = self.sinh_cosh();
		if sinh.is_infinite() && cosh.is_infinite() {
			return if self.is_sign_negative() { Self::NEG_ONE } else { Self::ONE };
		}
		sinh.div(cosh)
	}

	/// Inverse hyperbolic sine, `ln(x + sqrt(x^2 + 1))`.
	#[must_use]
	pub fn asinh(self) -> Self {
		if self.is_nan() {
			return self;
		}
		self.add(self.mul(self).add(Self::ONE).sqrt()).ln()
	}

	/// Inverse hyperbolic cosine. Domain `x >= 1`, else [`Sf32::NAN`].
	#[must_use]
	pub fn acosh(self) -> Self {
		if self.is_nan() {
			return self;
		}
		if self.total_cmp(Self::ONE) == Ordering::Less {
			return Self::NAN;
		}
		self.add(self.sub(Self::ONE).mul(self.add(Self::ONE)).sqrt()).ln()
	}

	/// Inverse hyperbolic tangent. Domain `|x| < 1`, else [`Sf32::NAN`].
	#[must_use]
	pub fn atanh(self) -> Self {
		if self.is_nan() {
			return self;
		}
		if self.abs().total_cmp(Self::ONE) != Ordering::Less {
			return Self::NAN;
		}
		Self::HALF.mul(Self::ONE.add(self).div(Self::ONE.sub(self)).ln())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn close(a: Sf32, b: Sf32, ulp: i64) -> bool {
		(a.to_bits() as i64 - b.to_bits() as i64).abs() <= ulp
	}

	#[test]
	fn sinh_of_zero_is_zero() {
		assert_eq!(Sf32::ZERO.sinh().to_bits(), Sf32::ZERO.to_bits());
	}

	#[test]
	fn cosh_of_zero_is_one() {
		assert_eq!(Sf32::ZERO.cosh().to_bits(), Sf32::ONE.to_bits());
	}

	#[test]
	fn hyperbolic_pythagorean_identity_holds() {
		let x = Sf32::from_i32(2);
		let (s, c) = x.sinh_cosh();
		let diff = c.mul(c).sub(s.mul(s));
		assert!(close(diff, Sf32::ONE, 64));
	}

	#[test]
	fn sinh_is_odd() {
		let x = Sf32::from_i32(3);
		assert!(close(x.sinh().neg(), x.neg().sinh(), 8));
	}

	#[test]
	fn tanh_of_atanh_round_trips() {
		let x = Sf32::from_bits(0x3F00_0000); // 0.5
		assert!(close(x.atanh().tanh(), x, 32));
	}

	#[test]
	fn acosh_rejects_below_one() {
		assert!(Sf32::ZERO.acosh().is_nan());
	}

	#[test]
	fn atanh_rejects_out_of_domain() {
		assert!(Sf32::ONE.atanh().is_nan());
		assert!(Sf32::TWO.atanh().is_nan());
	}

	#[test]
	fn asinh_of_zero_is_zero() {
		assert_eq!(Sf32::ZERO.asinh().to_bits(), Sf32::ZERO.to_bits());
	}

	#[test]
	fn tanh_saturates_instead_of_propagating_nan() {
		assert_eq!(Sf32::from_i32(200).tanh().to_bits(), Sf32::ONE.to_bits());
		assert_eq!(Sf32::from_i32(-200).tanh().to_bits(), Sf32::NEG_ONE.to_bits());
	}

	#[test]
	fn large_x_uses_half_angle_path_without_premature_overflow() {
		// Just above `LARGE_X`: `e^x` alone already exceeds `Sf32::MAX`, but `cosh(x) = e^x / 2`
		// is still finite, so the half-angle path must divide before squaring back up.
		let x = Sf32::from_i32(89);
		let (s, c) = x.sinh_cosh();
		assert!(s.is_finite() && c.is_finite());
		assert!(close(s, c, 1 << 16));
	}

	#[test]
	fn very_large_x_overflows_to_infinity() {
		let x = Sf32::from_i32(200);
		let (s, c) = x.sinh_cosh();
		assert!(s.is_infinite());
		assert!(c.is_infinite());
	}

	#[cfg(feature = "libm-check")]
	#[test]
	fn sinh_cosh_match_libm_across_a_sweep() {
		for i in -20_i16..=20 {
			let x = f32::from(i) / 5.0;
			let (got_s, got_c) = Sf32::from_bits(x.to_bits()).sinh_cosh();
			let want_s = libm::sinhf(x).to_bits();
			let want_c = libm::coshf(x).to_bits();
			assert!(
				(i64::from(got_s.to_bits()) - i64::from(want_s)).abs() <= 1 << 12,
				"sinh({x}): got {:#010x}, libm {want_s:#010x}",
				got_s.to_bits()
			);
			assert!(
				(i64::from(got_c.to_bits()) - i64::from(want_c)).abs() <= 1 << 12,
				"cosh({x}): got {:#010x}, libm {want_c:#010x}",
				got_c.to_bits()
			);
		}
	}
}
