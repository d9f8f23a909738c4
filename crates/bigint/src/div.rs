// Copyright 2025 Irreducible Inc.

//! Division layer.
//!
//! Four implementations coexist and are selected by operand size and limb
//! width:
//!
//! - [`BigInt::div_eq_basic`]: single-limb divisor, with a shift fast path
//!   for powers of two;
//! - [`BigInt::div_eq_plain`]: both operands assembled into 64-bit words and
//!   divided natively;
//! - [`BigInt::div_eq_alg_a`]: Knuth long division with a normalization shift
//!   and the 3-by-2 quotient-digit estimate;
//! - [`BigInt::div_eq_alg_b`]: the same scaffold with an unnormalized
//!   estimate that divides the top three remainder limbs by the top two
//!   divisor limbs. The estimate window needs `3W <= 63`, so widths above 21
//!   bits fall back to the normalized variant.
//!
//! Division is truncated: the quotient rounds toward zero and the remainder
//! takes the sign of the dividend, with `|r| < |b|`. Division by zero leaves
//! the dividend untouched; callers must check.

use std::ops::{Div, DivAssign, Rem, RemAssign};

use tracing::trace;

use crate::{bigint::BigInt, limb::Limb};

/// Quotient-digit estimation strategy for the Knuth scaffold.
#[derive(Clone, Copy, PartialEq, Eq)]
enum DigitEstimate {
	/// 3-by-2 estimate against a divisor normalized so its top bit is set.
	Normalized,
	/// Top-three-limbs over top-two-limbs estimate, no normalization.
	Unnormalized,
}

impl<L: Limb> BigInt<L> {
	/// Divides by a single unsigned limb in place and returns `|self| mod rhs`.
	///
	/// Division by zero or one is a no-op returning zero. The quotient is
	/// truncated; the in-value remainder convention (sign of the dividend)
	/// is recovered by negating the returned magnitude when the dividend was
	/// negative.
	pub fn div_eq_basic(&mut self, rhs: L) -> L {
		if rhs == L::ZERO || rhs == L::ONE {
			return L::ZERO;
		}
		let sign = self.sign();
		if sign {
			self.negate();
		}
		let rem = self.div_mag_by_limb(rhs);
		if sign {
			self.negate();
		}
		self.shrink_len();
		rem
	}

	/// Single-limb division of a non-negative value.
	fn div_mag_by_limb(&mut self, rhs: L) -> L {
		debug_assert!(!self.sign());
		let d = rhs.to_u64();
		if self.len == 1 {
			let a = self.buf[0].to_u64();
			self.buf[0] = L::from_u64(a / d);
			return L::from_u64(a % d);
		}
		if rhs.is_power_of_two() {
			let rem = self.buf[0].to_u64() & (d - 1);
			*self >>= rhs.trailing_zeros() as usize;
			return L::from_u64(rem);
		}
		let mut t = 0u64;
		for i in (0..self.len).rev() {
			t = ((t % d) << L::BITS) | self.buf[i].to_u64();
			self.buf[i] = L::from_u64(t / d);
		}
		self.shrink_len();
		L::from_u64(t % d)
	}

	/// Division over operands that both fit a 64-bit accumulator
	/// (`len * W <= 64`), handled by native division.
	///
	/// When `rem` is given it receives the remainder, carrying the sign of
	/// the dividend.
	pub fn div_eq_plain(&mut self, rhs: &Self, rem: Option<&mut Self>) {
		if rhs.is_zero() {
			return;
		}
		let x = self.to_i64();
		let y = rhs.to_i64();
		let sign_x = x < 0;
		let q = x.unsigned_abs() / y.unsigned_abs();
		let r = x.unsigned_abs() % y.unsigned_abs();
		self.assign_u64(q);
		if sign_x != (y < 0) {
			self.negate();
		}
		if let Some(m) = rem {
			m.assign_u64(r);
			if sign_x {
				m.negate();
			}
		}
	}

	/// Knuth long division with normalization and the 3-by-2 estimate.
	pub fn div_eq_alg_a(&mut self, rhs: &Self, rem: Option<&mut Self>) {
		self.div_eq_knuth(rhs, rem, DigitEstimate::Normalized);
	}

	/// Knuth long division with the unnormalized two-limb-divisor estimate.
	///
	/// At limb widths above 21 bits the three-limb estimate window no longer
	/// fits a `u64`, and the call silently runs the normalized variant.
	pub fn div_eq_alg_b(&mut self, rhs: &Self, rem: Option<&mut Self>) {
		let estimate = if L::SHORT_ESTIMATE_SAFE {
			DigitEstimate::Unnormalized
		} else {
			DigitEstimate::Normalized
		};
		self.div_eq_knuth(rhs, rem, estimate);
	}

	/// Shared scaffold of the two long-division variants: sign unfolding,
	/// the small-operand guards, the quotient-digit loop, sign restoration.
	fn div_eq_knuth(&mut self, rhs: &Self, mut rem: Option<&mut Self>, estimate: DigitEstimate) {
		if rhs.is_zero() {
			return;
		}
		let sign_a = self.sign();
		let sign_b = rhs.sign();
		if sign_a {
			self.negate();
		}
		let divisor_store;
		let d = if sign_b {
			divisor_store = -rhs;
			&divisor_store
		} else {
			rhs
		};

		// From here on self and d hold the magnitudes.
		if &*self < d {
			if let Some(m) = rem.as_deref_mut() {
				m.clone_from(self);
			}
			self.set_zero();
		} else if self.fits_u64() && d.fits_u64() {
			let x = self.mag_u64();
			let y = d.mag_u64();
			self.assign_u64(x / y);
			if let Some(m) = rem.as_deref_mut() {
				m.assign_u64(x % y);
			}
		} else if d.mag_len() == 1 {
			let r = self.div_mag_by_limb(d.buf[0]);
			if let Some(m) = rem.as_deref_mut() {
				m.assign_u64(r.to_u64());
			}
		} else {
			let quotient = self.div_mag_knuth_core(d, estimate);
			if let Some(m) = rem.as_deref_mut() {
				m.clone_from(self);
			}
			*self = quotient;
		}

		if sign_a != sign_b {
			self.negate();
		}
		if let Some(m) = rem {
			if sign_a {
				m.negate();
			}
			m.shrink_len();
		}
		self.shrink_len();
	}

	/// The quotient-digit loop over magnitudes. On entry `self >= d`,
	/// `d` spans at least two magnitude limbs and the operands exceed the
	/// 64-bit fast path. Returns the quotient and leaves the remainder in
	/// `self`.
	fn div_mag_knuth_core(&mut self, d: &Self, estimate: DigitEstimate) -> Self {
		let w = L::BITS;
		let b = 1u64 << w;
		let mask = b - 1;
		let dl = d.mag_len() as isize;
		let la = self.mag_len() as isize;

		let mut quotient = Self::new();
		quotient.set_len((la - dl + 2) as usize, false);

		// Divisor top pair, virtually left-shifted by `shift` so the top bit
		// is set (Normalized), or assembled into one 2W-bit word
		// (Unnormalized, where `v2` is unused).
		let (shift, v1, v2) = match estimate {
			DigitEstimate::Normalized => {
				let top = d.buf[(dl - 1) as usize];
				let shift = top.leading_zeros();
				if shift > 0 {
					let v1 = ((top.to_u64() << shift) & mask)
						| (d.buf[(dl - 2) as usize].to_u64() >> (w - shift));
					let v2 = ((d.buf[(dl - 2) as usize].to_u64() << shift) & mask)
						| (d.limb_or_zero(dl - 3).to_u64() >> (w - shift));
					(shift, v1, v2)
				} else {
					(0, top.to_u64(), d.buf[(dl - 2) as usize].to_u64())
				}
			}
			DigitEstimate::Unnormalized => {
				let v = (d.buf[(dl - 1) as usize].to_u64() << w)
					| d.buf[(dl - 2) as usize].to_u64();
				(0, v, 0)
			}
		};

		// Running top window of the remainder; its role differs per estimate.
		let mut u1 = match estimate {
			DigitEstimate::Normalized => self.buf[(la - 1) as usize].to_u64(),
			DigitEstimate::Unnormalized => {
				(self.buf[(la - 1) as usize].to_u64() << w)
					| self.buf[(la - 2) as usize].to_u64()
			}
		};

		for i in (0..=(la - dl)).rev() {
			let mut q = match estimate {
				DigitEstimate::Normalized => {
					let u2;
					if shift > 0 {
						u1 = (u1 << shift)
							| (self.limb_or_zero(i + dl - 2).to_u64() >> (w - shift));
						u2 = ((self.limb_or_zero(i + dl - 2).to_u64() << shift) & mask)
							| (self.limb_or_zero(i + dl - 3).to_u64() >> (w - shift));
					} else {
						u2 = self.limb_or_zero(i + dl - 2).to_u64();
					}
					let mut q = u1 / v1;
					if q >= b {
						q = b - 1;
					}
					let mut r = u1 - q * v1;
					// Standard 3-by-2 refinement; fires at most twice.
					while (q as u128) * (v2 as u128) > ((r as u128) << w) + u2 as u128 {
						q -= 1;
						r += v1;
						if r >= b {
							break;
						}
					}
					q
				}
				DigitEstimate::Unnormalized => {
					let mut q = u1 / v1;
					if q >= b {
						q = b - 1;
					}
					q
				}
			};

			let mut shifted = d.clone();
			shifted <<= i as usize * w as usize;
			let mut t = shifted.clone();
			t *= L::from_u64(q);
			*self -= &t;
			// Overestimated digit: add the divisor back.
			while self.sign() {
				q -= 1;
				*self += &shifted;
			}
			if estimate == DigitEstimate::Unnormalized {
				// The unnormalized estimate can also land one short.
				while &*self >= &shifted {
					q += 1;
					*self -= &shifted;
				}
			}
			quotient.buf[i as usize] = L::from_u64(q);

			u1 = match estimate {
				DigitEstimate::Normalized => {
					(self.limb_or_zero(i + dl - 1).to_u64() << w)
						| self.limb_or_zero(i + dl - 2).to_u64()
				}
				DigitEstimate::Unnormalized => {
					(self.limb_or_zero(i + dl - 1).to_u64() << (2 * w))
						| (self.limb_or_zero(i + dl - 2).to_u64() << w)
						| self.limb_or_zero(i + dl - 3).to_u64()
				}
			};
		}
		quotient
	}

	/// Truncated quotient and remainder. With a zero divisor returns the
	/// dividend and zero, matching the no-op division contract.
	pub fn div_rem(&self, rhs: &Self) -> (Self, Self) {
		let mut q = self.clone();
		let mut r = Self::new();
		if rhs.is_zero() {
			return (q, r);
		}
		if q.len <= L::LIMBS_PER_U64 && rhs.len <= L::LIMBS_PER_U64 {
			q.div_eq_plain(rhs, Some(&mut r));
		} else if L::SHORT_ESTIMATE_SAFE {
			q.div_eq_alg_b(rhs, Some(&mut r));
		} else {
			q.div_eq_alg_a(rhs, Some(&mut r));
		}
		(q, r)
	}

	/// By-value form of [`Self::div_eq_basic`].
	pub fn basic_div(mut lhs: Self, rhs: L) -> (Self, L) {
		let r = lhs.div_eq_basic(rhs);
		(lhs, r)
	}

	/// By-value form of [`Self::div_eq_plain`].
	pub fn plain_div(mut lhs: Self, rhs: &Self) -> (Self, Self) {
		let mut r = Self::new();
		lhs.div_eq_plain(rhs, Some(&mut r));
		(lhs, r)
	}

	/// By-value form of [`Self::div_eq_alg_a`].
	pub fn div_alg_a(mut lhs: Self, rhs: &Self) -> (Self, Self) {
		let mut r = Self::new();
		lhs.div_eq_alg_a(rhs, Some(&mut r));
		(lhs, r)
	}

	/// By-value form of [`Self::div_eq_alg_b`].
	pub fn div_alg_b(mut lhs: Self, rhs: &Self) -> (Self, Self) {
		let mut r = Self::new();
		lhs.div_eq_alg_b(rhs, Some(&mut r));
		(lhs, r)
	}
}

impl<L: Limb> DivAssign<&BigInt<L>> for BigInt<L> {
	fn div_assign(&mut self, rhs: &BigInt<L>) {
		if rhs.is_zero() {
			return;
		}
		if self.len <= L::LIMBS_PER_U64 && rhs.len <= L::LIMBS_PER_U64 {
			trace!(len_a = self.len, len_b = rhs.len, "plain divide");
			self.div_eq_plain(rhs, None);
		} else if rhs.len == 1 && !rhs.sign() {
			trace!(len_a = self.len, "single-limb divide");
			self.div_eq_basic(rhs.buf[0]);
		} else if L::SHORT_ESTIMATE_SAFE {
			trace!(len_a = self.len, len_b = rhs.len, "long divide, unnormalized estimate");
			self.div_eq_alg_b(rhs, None);
		} else {
			trace!(len_a = self.len, len_b = rhs.len, "long divide, normalized estimate");
			self.div_eq_alg_a(rhs, None);
		}
	}
}

impl<L: Limb> RemAssign<&BigInt<L>> for BigInt<L> {
	fn rem_assign(&mut self, rhs: &BigInt<L>) {
		if rhs.is_zero() {
			return;
		}
		let mut m = BigInt::new();
		if self.len <= L::LIMBS_PER_U64 && rhs.len <= L::LIMBS_PER_U64 {
			self.div_eq_plain(rhs, Some(&mut m));
		} else if L::SHORT_ESTIMATE_SAFE {
			self.div_eq_alg_b(rhs, Some(&mut m));
		} else {
			self.div_eq_alg_a(rhs, Some(&mut m));
		}
		*self = m;
	}
}

impl<L: Limb> DivAssign<L> for BigInt<L> {
	fn div_assign(&mut self, rhs: L) {
		self.div_eq_basic(rhs);
	}
}

impl<L: Limb> RemAssign<L> for BigInt<L> {
	/// Remainder by an unsigned limb via accumulation of `2^W mod rhs`
	/// powers, without computing the quotient.
	fn rem_assign(&mut self, rhs: L) {
		if rhs == L::ZERO {
			return;
		}
		let d = rhs.to_u64();
		let sign = self.sign();
		if sign {
			self.negate();
		}
		let base_mod = (1u64 << L::BITS) % d;
		let mut tot = 0u64;
		if base_mod == 0 {
			tot = self.buf[0].to_u64() % d;
		} else {
			let mut cur = 1u64;
			for i in 0..self.len {
				tot = (tot + cur * self.buf[i].to_u64()) % d;
				cur = cur * base_mod % d;
			}
		}
		self.assign_u64(tot);
		if sign {
			self.negate();
		}
		self.shrink_len();
	}
}

forward_val_assign!(DivAssign, div_assign);
forward_val_assign!(RemAssign, rem_assign);

forward_binop!(Div, div, DivAssign, div_assign);
forward_binop!(Rem, rem, RemAssign, rem_assign);
forward_scalar_binop!(Div, div, DivAssign, div_assign);
forward_scalar_binop!(Rem, rem, RemAssign, rem_assign);
