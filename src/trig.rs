// Copyright © 2021 Rouven Spreckels <rs@qu1x.dev>
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Circular trigonometry: octant reduction, angle locking at the canonical angles, and CORDIC
//! rotation in `Q2.62`.

use core::cmp::Ordering;

use crate::atan::{ATAN_TABLE, CORDIC_GAIN};
use crate::qformat::Q2_62;
use crate::Sf32;

/// Tangent pole guard, distinct from and looser than [`EPSTINY`] used by `cot`/`sec`/`csc`.
const TANEPS: Sf32 = Sf32::from_bits(0x3400_0000);
/// Pole guard shared by `cot`, `sec`, and `csc`.
const EPSTINY: Sf32 = Sf32::from_bits(0x3380_0000);
/// Tolerance for snapping a reduced angle to one of the canonical angle locks.
const LOCK_EPS: Sf32 = Sf32::from_bits(0x3586_37BD);

/// `(sin, cos)` of `octant * pi/4` for `octant = 0..8`.
const OCTANT_TABLE: [(Sf32, Sf32); 8] = [
	(Sf32::ZERO, Sf32::ONE),
	(Sf32::FRAC_SQRT_2_2, Sf32::FRAC_SQRT_2_2),
	(Sf32::ONE, Sf32::ZERO),
	(Sf32::FRAC_SQRT_2_2, Sf32::from_bits(Sf32::FRAC_SQRT_2_2.to_bits() | Sf32::SIGN)),
	(Sf32::ZERO, Sf32::from_bits(Sf32::ONE.to_bits() | Sf32::SIGN)),
	(
		Sf32::from_bits(Sf32::FRAC_SQRT_2_2.to_bits() | Sf32::SIGN),
		Sf32::from_bits(Sf32::FRAC_SQRT_2_2.to_bits() | Sf32::SIGN),
	),
	(Sf32::from_bits(Sf32::ONE.to_bits() | Sf32::SIGN), Sf32::ZERO),
	(Sf32::from_bits(Sf32::FRAC_SQRT_2_2.to_bits() | Sf32::SIGN), Sf32::FRAC_SQRT_2_2),
];

/// Reduces any finite angle to an octant index `0..8` and a remainder in `[0, pi/4)`.
fn reduce(a: Sf32) -> (usize, Sf32) {
	let mut x = a.rem(Sf32::TAU);
	if x.is_sign_negative() {
		x = x.add(Sf32::TAU);
	}
	let mut oct = x.div(Sf32::FRAC_PI_4).trunc().to_i32();
	oct = oct.clamp(0, 7);
	#[allow(clippy::cast_sign_loss)]
	let oct = oct as usize;
	#[allow(clippy::cast_possible_wrap)]
	let r = x.sub(Sf32::FRAC_PI_4.mul(Sf32::from_i32(oct as i32)));
	(oct, r)
}

/// Substitutes the exact rational `(sin, cos)` pair at the canonical angles `0`, `pi/6`, `pi/4`
/// if `r` is within [`LOCK_EPS`] of one of them.
fn angle_lock(r: Sf32) -> Option<(Sf32, Sf32)> {
	if r.abs().total_cmp(LOCK_EPS) != Ordering::Greater {
		return Some((Sf32::ZERO, Sf32::ONE));
	}
	if r.sub(Sf32::FRAC_PI_6).abs().total_cmp(LOCK_EPS) != Ordering::Greater {
		return Some((Sf32::HALF, Sf32::FRAC_SQRT_3_2));
	}
	if r.sub(Sf32::FRAC_PI_4).abs().total_cmp(LOCK_EPS) != Ordering::Greater {
		return Some((Sf32::FRAC_SQRT_2_2, Sf32::FRAC_SQRT_2_2));
	}
	None
}

/// CORDIC rotation of the seed vector `(K, 0)` by `r`, 26 steps, yielding `(sin r, cos r)`.
fn cordic_rotate(r: Sf32) -> (Sf32, Sf32) {
	let mut x = Q2_62::from_raw(CORDIC_GAIN);
	let mut y = Q2_62::from_raw(0);
	let mut z = Q2_62::from_sf32(r);
	for (i, &ai) in ATAN_TABLE.iter().take(26).enumerate() {
		#[allow(clippy::cast_possible_truncation)]
		let i = i as u32;
		let xi = x.shr(i);
		let yi = y.shr(i);
		let ai = Q2_62::from_raw(ai);
		if z.is_negative() {
			x = x.add(yi);
			y = y.sub(xi);
			z = z.add(ai);
		} else {
			x = x.sub(yi);
			y = y.add(xi);
			z = z.sub(ai);
		}
	}
	(y.to_sf32(), x.to_sf32())
}

impl Sf32 {
	/// Sine and cosine of `self` radians in a single CORDIC pass.
	#[must_use]
	pub fn sin_cos(self) -> (Self, Self) {
		if !self.is_finite() {
			return (Self::NAN, Self::NAN);
		}
		let (oct, r) = reduce(self);
		let (s0, c0) = angle_lock(r).unwrap_or_else(|| cordic_rotate(r));
		let (sin_oct, cos_oct) = OCTANT_TABLE[oct];
		let sin = sin_oct.mul(c0).add(cos_oct.mul(s0));
		let cos = cos_oct.mul(c0).sub(sin_oct.mul(s0));
		(sin, cos)
	}

	/// Sine.
	#[must_use]
	pub fn sin(self) -> Self {
		self.sin_cos().0
	}

	/// Cosine.
	#[must_use]
	pub fn cos(self) -> Self {
		self.sin_cos().1
	}

	/// Tangent. Returns signed infinity within [`TANEPS`] of a pole.
	#[must_use]
	pub fn tan(self) -> Self {
		let (s, c) = self.sin_cos();
		if c.abs().total_cmp(TANEPS) != Ordering::Greater {
			return if s.is_sign_negative() { Self::NEG_INFINITY } else { Self::INFINITY };
		}
		s.div(c)
	}

	/// Cotangent. Returns signed infinity within [`EPSTINY`] of a pole.
	#[must_use]
	pub fn cot(self) -> Self {
		let (s, c) = self.sin_cos();
		if s.abs().total_cmp(EPSTINY) != Ordering::Greater {
			return if c.is_sign_negative() { Self::NEG_INFINITY } else { Self::INFINITY };
		}
		c.div(s)
	}

	/// Secant, `1 / cos(self)`.
	#[must_use]
	pub fn sec(self) -> Self {
		let c = self.cos();
		if c.abs().total_cmp(EPSTINY) != Ordering::Greater {
			return if c.is_sign_negative() { Self::NEG_INFINITY } else { Self::INFINITY };
		}
		Self::ONE.div(c)
	}

	/// Cosecant, `1 / sin(self)`.
	#[must_use]
	pub fn csc(self) -> Self {
		let s = self.sin();
		if s.abs().total_cmp(EPSTINY) != Ordering::Greater {
			return if s.is_sign_negative() { Self::NEG_INFINITY } else { Self::INFINITY };
		}
		Self::ONE.div(s)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn close(a: Sf32, b: Sf32, ulp: i64) -> bool {
		(a.to_bits() as i64 - b.to_bits() as i64).abs() <= ulp
	}

	#[test]
	fn sin_of_pi_over_2_is_one() {
		assert!(close(Sf32::FRAC_PI_2.sin(), Sf32::ONE, 8));
	}

	#[test]
	fn cos_of_zero_is_one() {
		assert_eq!(Sf32::ZERO.cos().to_bits(), Sf32::ONE.to_bits());
	}

	#[test]
	fn pythagorean_identity_holds() {
		let x = Sf32::from_bits(0x3FC0_0000); // 1.5
		let (s, c) = x.sin_cos();
		let sum = s.mul(s).add(c.mul(c));
		assert!(close(sum, Sf32::ONE, 16));
	}

	#[test]
	fn sin_is_odd_cos_is_even() {
		let x = Sf32::from_bits(0x3FC0_0000);
		assert!(close(x.sin().neg(), x.neg().sin(), 8));
		assert!(close(x.cos(), x.neg().cos(), 8));
	}

	#[test]
	fn tan_of_half_pi_is_infinite() {
		assert!(Sf32::FRAC_PI_2.tan().is_infinite());
	}

	#[test]
	fn angle_lock_produces_exact_pi_over_6() {
		let (s, c) = Sf32::FRAC_PI_6.sin_cos();
		assert_eq!(s.to_bits(), Sf32::HALF.to_bits());
		assert_eq!(c.to_bits(), Sf32::FRAC_SQRT_3_2.to_bits());
	}

	#[cfg(feature = "libm-check")]
	#[test]
	fn sin_cos_match_libm_across_a_sweep() {
		for i in -30_i16..=30 {
			let x = f32::from(i) / 10.0;
			let (got_s, got_c) = Sf32::from_bits(x.to_bits()).sin_cos();
			let want_s = libm::sinf(x).to_bits();
			let want_c = libm::cosf(x).to_bits();
			assert!(
				(i64::from(got_s.to_bits()) - i64::from(want_s)).abs() <= 1 << 12,
				"sin({x}): got {:#010x}, libm {want_s:#010x}",
				got_s.to_bits()
			);
			assert!(
				(i64::from(got_c.to_bits()) - i64::from(want_c)).abs() <= 1 << 12,
				"cos({x}): got {:#010x}, libm {want_c:#010x}",
				got_c.to_bits()
			);
		}
	}
}
