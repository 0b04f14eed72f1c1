// Copyright © 2021 Rouven Spreckels <rs@qu1x.dev>
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Arctangent by CORDIC vectoring, and the shared `atan(2^-i)` table also used by the circular
//! rotation kernel in [`crate::trig`].

use core::cmp::Ordering;

use crate::bits::sra64;
use crate::qformat::{Q2_30, Q2_62};
use crate::Sf32;

/// Scales a fractional double to a `Q2.62` raw word. Evaluated entirely at compile time, so the
/// shipped binary carries only the resulting integer table — no floating-point code runs on the
/// target.
const fn q62(x: f64) -> i64 {
	(x * 4_611_686_018_427_387_904.0) as i64
}

/// `atan(2^-i)` for `i = 0..32`, in `Q2.62`. Steps `0..26` double as the rotation kernel's table
/// in [`crate::trig`]; the original library kept two independently-rounded copies of this table,
/// one per CORDIC mode, which this crate unifies since both compute the same mathematical
/// constants.
pub(crate) const ATAN_TABLE: [i64; 32] = [
	q62(0.785_398_163_397_448_3),
	q62(0.463_647_609_000_806_1),
	q62(0.244_978_663_126_864_14),
	q62(0.124_354_994_546_761_44),
	q62(0.062_418_809_995_957_35),
	q62(0.031_239_833_430_268_277),
	q62(0.015_623_728_620_476_831),
	q62(0.007_812_341_060_101_111),
	q62(0.003_906_230_131_966_972),
	q62(0.001_953_122_516_478_819),
	q62(0.000_976_562_189_559_320),
	q62(0.000_488_281_211_194_898),
	q62(0.000_244_140_620_149_362),
	q62(0.000_122_070_311_893_670),
	q62(0.000_061_035_156_174_209),
	q62(0.000_030_517_578_115_526),
	q62(0.000_015_258_789_061_316),
	q62(0.000_007_629_394_531_102),
	q62(0.000_003_814_697_265_620),
	q62(0.000_001_907_348_632_811),
	q62(0.000_000_953_674_316_406),
	q62(0.000_000_476_837_158_203),
	q62(0.000_000_238_418_579_102),
	q62(0.000_000_119_209_289_551),
	q62(0.000_000_059_604_644_775),
	q62(0.000_000_029_802_322_388),
	q62(0.000_000_014_901_161_194),
	q62(0.000_000_007_450_580_597),
	q62(0.000_000_003_725_290_298),
	q62(0.000_000_001_862_645_149),
	q62(0.000_000_000_931_322_575),
	q62(0.000_000_000_465_661_287),
];

/// CORDIC gain $K_\infty = \prod_{i=0}^{\infty} (1+2^{-2i})^{-1/2}$, in `Q2.62`.
pub(crate) const CORDIC_GAIN: i64 = q62(0.607_252_935_008_881_26);

/// Drives `yq` to zero by rotating `(xq, yq)`, accumulating the rotation angle into a `Q2.62`
/// raw word.
fn vectoring(mut xq: i64, mut yq: i64) -> i64 {
	let mut z: i64 = 0;
	for (i, &ai) in ATAN_TABLE.iter().enumerate() {
		#[allow(clippy::cast_possible_truncation)]
		let i = i as u32;
		let xi = sra64(xq, i);
		let yi = sra64(yq, i);
		match yq.cmp(&0) {
			Ordering::Greater => {
				xq = xq.wrapping_add(yi);
				yq = yq.wrapping_sub(xi);
				z = z.wrapping_add(ai);
			}
			Ordering::Less => {
				xq = xq.wrapping_sub(yi);
				yq = yq.wrapping_add(xi);
				z = z.wrapping_sub(ai);
			}
			Ordering::Equal => break,
		}
	}
	z
}

/// $\tan(30°) = \frac{1}{\sqrt3}$, the slope threshold above which the vectoring seed coordinates
/// are pre-halved.
fn tan_30() -> Sf32 {
	Sf32::ONE.div(Sf32::from_i32(3).sqrt())
}

impl Sf32 {
	/// Arctangent, via CORDIC vectoring in `Q2.30`. For $|x| \ge 1$ the computation is run on
	/// $1/|x|$ and finished as $\frac\pi2 - z$ so the vectoring loop always sees an input in
	/// $[0, 1]$.
	#[must_use]
	pub fn atan(self) -> Self {
		if self.is_nan() {
			return self;
		}
		if self.is_zero() {
			return self;
		}
		if self.is_infinite() {
			return if self.is_sign_negative() { Self::FRAC_PI_2.neg() } else { Self::FRAC_PI_2 };
		}
		let sign = self.is_sign_negative();
		let ax = self.abs();
		let (swapped, t) = if ax.total_cmp(Self::ONE) == Ordering::Greater {
			(true, Self::ONE.div(ax))
		} else {
			(false, ax)
		};
		let (x_seed, y_seed) = if t.total_cmp(tan_30()) == Ordering::Greater {
			(Self::HALF, t.mul(Self::HALF))
		} else {
			(Self::ONE, t)
		};
		let xq = i64::from(Q2_30::from_sf32(x_seed).raw());
		let yq = i64::from(Q2_30::from_sf32(y_seed).raw());
		let mut z = Q2_62::from_raw(vectoring(xq, yq)).to_sf32();
		if swapped {
			z = Self::FRAC_PI_2.sub(z);
		}
		if sign {
			z = z.neg();
		}
		z
	}

	/// Arctangent of `self / x`, using the sign of each argument to pick the correct quadrant.
	/// `atan2(0, 0)` is defined as `+0`, matching the original library.
	#[must_use]
	pub fn atan2(self, x: Self) -> Self {
		let y = self;
		if y.is_nan() || x.is_nan() {
			return Self::NAN;
		}
		if x.is_zero() {
			return if y.is_zero() {
				Self::ZERO
			} else if y.is_sign_negative() {
				Self::FRAC_PI_2.neg()
			} else {
				Self::FRAC_PI_2
			};
		}
		if x.is_sign_negative() {
			let base = y.div(x).atan();
			return if y.is_sign_negative() { base.sub(Self::PI) } else { base.add(Self::PI) };
		}
		y.div(x).atan()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn close(a: Sf32, b: Sf32, ulp: i64) -> bool {
		(a.to_bits() as i64 - b.to_bits() as i64).abs() <= ulp
	}

	#[test]
	fn atan_of_one_is_pi_over_4() {
		assert!(close(Sf32::ONE.atan(), Sf32::FRAC_PI_4, 32));
	}

	#[test]
	fn atan_is_odd() {
		let x = Sf32::from_bits(0x3F00_0000); // 0.5
		assert!(close(x.atan().neg(), x.neg().atan(), 4));
	}

	#[test]
	fn atan_complement_identity() {
		let x = Sf32::from_i32(4);
		let sum = x.atan().add(Sf32::ONE.div(x).atan());
		assert!(close(sum, Sf32::FRAC_PI_2, 32));
	}

	#[test]
	fn atan2_axis_cases() {
		assert!(close(Sf32::ONE.atan2(Sf32::ZERO), Sf32::FRAC_PI_2, 8));
		assert!(close(Sf32::NEG_ONE.atan2(Sf32::ZERO), Sf32::FRAC_PI_2.neg(), 8));
		assert_eq!(Sf32::ZERO.atan2(Sf32::ZERO).to_bits(), Sf32::ZERO.to_bits());
		assert!(close(Sf32::ZERO.atan2(Sf32::NEG_ONE), Sf32::PI, 8));
	}
}
