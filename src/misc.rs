// Copyright © 2021 Rouven Spreckels <rs@qu1x.dev>
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Miscellaneous routines that don't belong to a single engine: `hypot`, `modf`, `frexp`,
//! `ldexp`/`scalbn`, `copysign`, `min`/`max`/`clamp`, and the degree/radian conversions.

use core::cmp::Ordering;

use crate::Sf32;

/// `scalbn`'s repeated-multiplication fallback never needs more steps than this to drive any
/// finite value to `0` or `±∞`: the full normal-plus-subnormal exponent range is under 300 powers
/// of two wide.
const SCALE_STEP_LIMIT: u32 = 300;

impl Sf32 {
	/// $\sqrt{a^2+b^2}$ computed without intermediate overflow by factoring out the larger
	/// magnitude first.
	#[must_use]
	pub fn hypot(self, other: Self) -> Self {
		if self.is_nan() || other.is_nan() {
			return Self::NAN;
		}
		let (u, v) = if self.abs().total_cmp(other.abs()) == Ordering::Less {
			(other.abs(), self.abs())
		} else {
			(self.abs(), other.abs())
		};
		if u.is_zero() {
			return Self::ZERO;
		}
		if u.is_infinite() {
			return Self::INFINITY;
		}
		let ratio = v.div(u);
		u.mul(Self::ONE.add(ratio.mul(ratio)).sqrt())
	}

	/// Splits `self` into its fractional and integer parts, `(self - ip, ip)`, with `ip` truncated
	/// toward zero.
	#[must_use]
	pub fn modf(self) -> (Self, Self) {
		if !self.is_finite() {
			return (if self.is_nan() { self } else { Self::ZERO }, self);
		}
		let ip = self.trunc();
		(self.sub(ip), ip)
	}

	/// Decomposes `self` into a normalized mantissa in $[0.5, 1)$ and an integer exponent such
	/// that `self == mantissa * 2^exponent`. Subnormal bit patterns are renormalized by counting
	/// leading zeros of the raw fraction field.
	#[must_use]
	pub fn frexp(self) -> (Self, i32) {
		if !self.is_finite() || self.is_zero() {
			return (self, 0);
		}
		let (sign, exp, frac) = self.decompose();
		if exp == 0 {
			// Subnormal: no hidden bit. Renormalize by shifting the fraction's highest set bit up
			// to where a hidden bit would sit, bounded by the field's 23-bit width.
			let position = 31 - frac.leading_zeros(); // 0..=22
			#[allow(clippy::cast_possible_wrap)]
			let position = position as i32;
			let new_frac = (frac << (23 - position)) & Self::FRAC;
			let exponent = position - 148;
			return (Self::compose(sign, Self::BIAS - 1, new_frac), exponent);
		}
		let e = exp - Self::BIAS;
		(Self::compose(sign, Self::BIAS - 1, frac), e + 1)
	}

	/// Multiplies `self` by $2^n$. An alias for [`Sf32::scalbn`], matching the original library's
	/// `spfldp` delegating to `spfscb`.
	#[must_use]
	pub fn ldexp(self, n: i32) -> Self {
		self.scalbn(n)
	}

	/// Multiplies `self` by $2^n$, taking the fast path of assembling the result directly from the
	/// exponent field when it stays in the normal range, and falling back to repeated
	/// multiplication by `2`/`0.5` (which naturally over/underflows to `±∞`/`±0`) otherwise.
	#[must_use]
	pub fn scalbn(self, n: i32) -> Self {
		if !self.is_finite() || self.is_zero() {
			return self;
		}
		let (sign, exp, frac) = self.decompose();
		let new_exp = exp + n;
		if (1..=254).contains(&new_exp) {
			return Self::compose(sign, new_exp, frac);
		}
		let factor = if n > 0 { Self::TWO } else { Self::HALF };
		let steps = n.unsigned_abs().min(SCALE_STEP_LIMIT);
		let mut result = self;
		for _ in 0..steps {
			result = result.mul(factor);
			if result.is_zero() || result.is_infinite() {
				break;
			}
		}
		result
	}

	/// `self`'s magnitude with `other`'s sign bit. `self == `[`Sf32::NAN`] passes through
	/// unchanged, since the sentinel carries no meaningful sign.
	#[must_use]
	pub fn copysign(self, other: Self) -> Self {
		if self.is_nan() {
			return self;
		}
		let mag = self.abs();
		if other.is_sign_negative() {
			Self(mag.0 | Self::SIGN)
		} else {
			mag
		}
	}

	/// Returns the smaller of two values. If either is [`Sf32::NAN`], returns the other.
	#[must_use]
	pub fn min(self, other: Self) -> Self {
		if self.is_nan() {
			return other;
		}
		if other.is_nan() {
			return self;
		}
		if self < other {
			self
		} else {
			other
		}
	}

	/// Returns the larger of two values. If either is [`Sf32::NAN`], returns the other.
	#[must_use]
	pub fn max(self, other: Self) -> Self {
		if self.is_nan() {
			return other;
		}
		if other.is_nan() {
			return self;
		}
		if self > other {
			self
		} else {
			other
		}
	}

	/// Restricts `self` to the interval `[min, max]`, passing `self` through unchanged if it is
	/// [`Sf32::NAN`].
	#[must_use]
	pub fn clamp(self, min: Self, max: Self) -> Self {
		if self.is_nan() {
			return self;
		}
		if self < min {
			min
		} else if self > max {
			max
		} else {
			self
		}
	}

	/// Converts degrees to radians.
	#[must_use]
	pub fn to_radians(self) -> Self {
		self.mul(Self::DEG_TO_RAD)
	}

	/// Converts radians to degrees.
	#[must_use]
	pub fn to_degrees(self) -> Self {
		self.mul(Self::RAD_TO_DEG)
	}
}
