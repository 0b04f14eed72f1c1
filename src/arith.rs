// Copyright © 2021 Rouven Spreckels <rs@qu1x.dev>
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Core [IEEE-754] arithmetic: add, subtract, multiply, divide, modulus, negate, absolute value.
//!
//! [IEEE-754]: https://en.wikipedia.org/wiki/IEEE_754

use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Rem, RemAssign, Sub, SubAssign};

use crate::bits::round_shift_right_u64;
use crate::Sf32;

impl Sf32 {
	/// Negates the value. Collapses either zero to `+0`, matching the one-true-zero convention
	/// used throughout this crate's rounding and comparison routines.
	#[must_use]
	pub fn neg(self) -> Self {
		if self.is_nan() {
			self
		} else if self.is_zero() {
			Self::ZERO
		} else {
			Self(self.0 ^ Self::SIGN)
		}
	}

	/// Clears the sign bit.
	#[must_use]
	pub fn abs(self) -> Self {
		if self.is_nan() {
			self
		} else {
			Self(self.0 & !Self::SIGN)
		}
	}

	/// Adds two values with round-to-nearest-even on the discarded mantissa bit.
	#[must_use]
	pub fn add(self, other: Self) -> Self {
		if self.is_nan() || other.is_nan() {
			return Self::NAN;
		}
		if self.is_infinite() || other.is_infinite() {
			return match (self.is_infinite(), other.is_infinite()) {
				(true, true) if self.is_sign_negative() == other.is_sign_negative() => self,
				(true, true) => Self::NAN,
				(true, false) => self,
				(false, true) => other,
				(false, false) => unreachable!(),
			};
		}
		if other.is_zero() {
			return if self.is_zero() {
				if self.is_sign_negative() && other.is_sign_negative() {
					Self::NEG_ZERO
				} else {
					Self::ZERO
				}
			} else {
				self
			};
		}
		if self.is_zero() {
			return other;
		}
		let (dominant, subordinate) = if (self.0 & !Self::SIGN) < (other.0 & !Self::SIGN) {
			(other, self)
		} else {
			(self, other)
		};
		let (dsign, dexp, dfrac) = dominant.decompose();
		let (ssign, sexp, sfrac) = subordinate.decompose();
		let mut dmant: i64 = i64::from(dfrac | 0x0080_0000) << 1;
		let mut smant: i64 = i64::from(sfrac | 0x0080_0000) << 1;
		let mut exp = dexp - Self::BIAS;
		let shift = exp - (sexp - Self::BIAS);
		if shift >= 24 {
			return dominant;
		}
		smant >>= shift;
		if dsign == ssign {
			dmant += smant;
			if dmant == 0 {
				return Self::ZERO;
			}
			while dmant >= 0x0200_0000 {
				dmant >>= 1;
				exp += 1;
			}
		} else {
			dmant -= smant;
			if dmant == 0 {
				return Self::ZERO;
			}
			while dmant < 0x0100_0000 {
				dmant <<= 1;
				exp -= 1;
			}
		}
		if dmant & 3 == 1 {
			dmant += 1;
		}
		dmant >>= 1;
		if dmant & 0x0100_0000 != 0 {
			dmant >>= 1;
			exp += 1;
		}
		#[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
		Self::compose(dsign, exp + Self::BIAS, dmant as u32)
	}

	/// `self - other`.
	#[must_use]
	pub fn sub(self, other: Self) -> Self {
		if self.is_nan() {
			return self;
		}
		if other.is_nan() {
			return other;
		}
		let result = self.add(other.neg());
		if result.0 == Self::SIGN {
			Self::ZERO
		} else {
			result
		}
	}

	/// Multiplies two values. Absent from the original library's surviving source; designed
	/// directly from the specification: XOR signs, add unbiased exponents, multiply 24-bit
	/// significands into a 48-bit product, normalize, round-to-nearest-even, reassemble.
	#[must_use]
	pub fn mul(self, other: Self) -> Self {
		if self.is_nan() || other.is_nan() {
			return Self::NAN;
		}
		let sign = self.is_sign_negative() != other.is_sign_negative();
		if self.is_zero() || other.is_zero() {
			return if self.is_infinite() || other.is_infinite() {
				Self::NAN
			} else if sign {
				Self::NEG_ZERO
			} else {
				Self::ZERO
			};
		}
		if self.is_infinite() || other.is_infinite() {
			return if sign { Self::NEG_INFINITY } else { Self::INFINITY };
		}
		let (_, aexp, afrac) = self.decompose();
		let (_, bexp, bfrac) = other.decompose();
		let amant = u64::from(afrac | 0x0080_0000);
		let bmant = u64::from(bfrac | 0x0080_0000);
		let product = amant * bmant;
		let mut exp = (aexp - Self::BIAS) + (bexp - Self::BIAS);
		let mut mant = if product & (1u64 << 47) != 0 {
			exp += 1;
			round_shift_right_u64(product, 24)
		} else {
			round_shift_right_u64(product, 23)
		};
		if mant & 0x0100_0000 != 0 {
			mant >>= 1;
			exp += 1;
		}
		#[allow(clippy::cast_possible_truncation)]
		Self::compose(sign, exp + Self::BIAS, mant as u32)
	}

	/// Divides `self` by `other`. Division by zero yields [`Sf32::NAN`].
	#[must_use]
	pub fn div(self, other: Self) -> Self {
		if self.is_nan() || other.is_nan() {
			return Self::NAN;
		}
		if other.is_zero() {
			return Self::NAN;
		}
		let sign = self.is_sign_negative() != other.is_sign_negative();
		if self.is_zero() {
			return if sign { Self::NEG_ZERO } else { Self::ZERO };
		}
		if other.is_infinite() {
			return if self.is_infinite() {
				Self::NAN
			} else if sign {
				Self::NEG_ZERO
			} else {
				Self::ZERO
			};
		}
		if self.is_infinite() {
			return if sign { Self::NEG_INFINITY } else { Self::INFINITY };
		}
		let (_, dexp, dfrac) = self.decompose();
		let (_, sexp, sfrac) = other.decompose();
		let mut divmant: i64 = i64::from(dfrac | 0x0080_0000);
		let dismant: i64 = i64::from(sfrac | 0x0080_0000);
		let mut quotient: i64 = 0;
		for _ in 0_u32..27 {
			quotient <<= 1;
			if divmant >= dismant {
				quotient += 1;
				divmant -= dismant;
			}
			divmant <<= 1;
		}
		// The original library's guard/round/sticky extraction has an operator-precedence bug
		// (`& 0x4 >> 2` parses as `& (0x4 >> 2)`); this restores the intended semantics.
		let guard = (quotient >> 2) & 1;
		let round = (quotient >> 1) & 1;
		let sticky = (quotient & 1) | i64::from(divmant != 0);
		if guard != 0 && (round != 0 || sticky != 0 || (quotient & 0x8) != 0) {
			quotient += 0x8;
		}
		quotient >>= 3;
		let mut qexp = (dexp - Self::BIAS) - (sexp - Self::BIAS);
		if quotient & 0x0100_0000 != 0 {
			quotient >>= 1;
			qexp += 1;
		}
		while quotient < 0x0080_0000 {
			quotient <<= 1;
			qexp -= 1;
		}
		#[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
		Self::compose(sign, qexp + Self::BIAS, quotient as u32)
	}

	/// `self - trunc(self / other) * other`.
	#[must_use]
	pub fn rem(self, other: Self) -> Self {
		if self.is_nan() || other.is_nan() || other.is_zero() || self.is_infinite() {
			return Self::NAN;
		}
		if other.is_infinite() {
			return self;
		}
		let quotient = self.div(other).trunc();
		self.sub(quotient.mul(other))
	}
}

impl Add for Sf32 {
	type Output = Self;
	fn add(self, rhs: Self) -> Self {
		Self::add(self, rhs)
	}
}
impl Sub for Sf32 {
	type Output = Self;
	fn sub(self, rhs: Self) -> Self {
		Self::sub(self, rhs)
	}
}
impl Mul for Sf32 {
	type Output = Self;
	fn mul(self, rhs: Self) -> Self {
		Self::mul(self, rhs)
	}
}
impl Div for Sf32 {
	type Output = Self;
	fn div(self, rhs: Self) -> Self {
		Self::div(self, rhs)
	}
}
impl Rem for Sf32 {
	type Output = Self;
	fn rem(self, rhs: Self) -> Self {
		Self::rem(self, rhs)
	}
}
impl Neg for Sf32 {
	type Output = Self;
	fn neg(self) -> Self {
		Self::neg(self)
	}
}

impl AddAssign for Sf32 {
	fn add_assign(&mut self, rhs: Self) {
		*self = *self + rhs;
	}
}
impl SubAssign for Sf32 {
	fn sub_assign(&mut self, rhs: Self) {
		*self = *self - rhs;
	}
}
impl MulAssign for Sf32 {
	fn mul_assign(&mut self, rhs: Self) {
		*self = *self * rhs;
	}
}
impl DivAssign for Sf32 {
	fn div_assign(&mut self, rhs: Self) {
		*self = *self / rhs;
	}
}
impl RemAssign for Sf32 {
	fn rem_assign(&mut self, rhs: Self) {
		*self = *self % rhs;
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn one_plus_one_is_two() {
		assert_eq!(Sf32::ONE.add(Sf32::ONE).to_bits(), Sf32::TWO.to_bits());
	}

	#[test]
	fn two_times_two_is_four() {
		assert_eq!(Sf32::TWO.mul(Sf32::TWO).to_bits(), 0x4080_0000);
	}

	#[test]
	fn one_over_two_is_half() {
		assert_eq!(Sf32::ONE.div(Sf32::TWO).to_bits(), Sf32::HALF.to_bits());
	}

	#[test]
	fn div_by_zero_is_nan() {
		assert!(Sf32::ONE.div(Sf32::ZERO).is_nan());
	}

	#[test]
	fn sub_yielding_exact_cancellation_is_positive_zero() {
		assert_eq!(Sf32::ONE.sub(Sf32::ONE).to_bits(), Sf32::ZERO.to_bits());
	}

	#[test]
	fn neg_of_either_zero_is_positive_zero() {
		assert_eq!(Sf32::ZERO.neg().to_bits(), Sf32::ZERO.to_bits());
		assert_eq!(Sf32::NEG_ZERO.neg().to_bits(), Sf32::ZERO.to_bits());
	}

	#[test]
	fn abs_clears_sign() {
		assert_eq!(Sf32::NEG_ONE.abs().to_bits(), Sf32::ONE.to_bits());
	}

	#[test]
	fn operators_match_inherent_methods() {
		assert_eq!((Sf32::ONE + Sf32::ONE).to_bits(), Sf32::ONE.add(Sf32::ONE).to_bits());
		assert_eq!((Sf32::TWO * Sf32::TWO).to_bits(), Sf32::TWO.mul(Sf32::TWO).to_bits());
	}
}
