// Copyright © 2021 Rouven Spreckels <rs@qu1x.dev>
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Single-precision [IEEE-754] arithmetic and transcendentals for targets without a hardware
//! FPU and without a standard math library, built exclusively from 32-bit integer operations.
//!
//!   * [`Sf32`] wraps the raw `u32` bit pattern and never touches the host's own `f32`
//!     arithmetic: every operator, every transcendental, and every rounding mode is implemented
//!     by hand over the bit fields.
//!   * Circular trigonometry ([`Sf32::sin`], [`Sf32::cos`], [`Sf32::tan`] and friends) is
//!     computed by [CORDIC] rotation in `Q2.62` fixed point; [`Sf32::atan`] and [`Sf32::atan2`]
//!     by CORDIC vectoring in `Q2.30`.
//!   * [`Sf32::exp`] and [`Sf32::ln`] are a continued-fraction kernel and an arctanh-series
//!     kernel respectively, from which [`Sf32::pow`], [`Sf32::log10`] and [`Sf32::log2`] are
//!     composed.
//!   * [`Sf32::sqrt`] is a bitwise bit-at-a-time extraction over a `Q4.28` significand.
//!   * Parsing ([`core::str::FromStr`]) and formatting ([`Sf32::format_to`]) are allocation-free
//!     and never borrow the host's float-to-string machinery.
//!
//! This crate is `no_std` unconditionally: there is no FPU to fall back to and no `libm` to
//! delegate to, which is the entire point of the exercise. The optional `libm-check` feature
//! pulls in [`libm`] as a dev-only reference oracle for a handful of differential tests; it is
//! never used by the library itself.
//!
//! Domain and range errors are carried in the value domain rather than a side channel: a quiet
//! NaN sentinel for domain errors, signed infinity for range overflow, saturated integers for
//! out-of-range conversions. The one exception is text parsing, which returns a typed
//! [`ParseSf32Error`] rather than silently producing zero.
//!
//! [IEEE-754]: https://en.wikipedia.org/wiki/IEEE_754
//! [CORDIC]: https://en.wikipedia.org/wiki/CORDIC
//! [`libm`]: https://docs.rs/libm

#![forbid(missing_docs)]
#![forbid(unsafe_code)]
#![allow(clippy::tabs_in_doc_comments)]
#![cfg_attr(not(feature = "std"), no_std)]

mod arith;
mod atan;
mod bits;
mod convert;
mod error;
mod explog;
mod hyperbolic;
mod misc;
mod power;
mod qformat;
mod round;
mod sf32;
mod sqrt;
mod text;
mod trig;

pub use error::{FormatSf32Error, ParseSf32Error};
pub use sf32::Sf32;
pub use text::NumberFormat;
