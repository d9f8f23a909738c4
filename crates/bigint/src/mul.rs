// Copyright 2025 Irreducible Inc.

//! Multiplicative layer: schoolbook and FFT convolution multiplies with an
//! operand-size dispatcher.
//!
//! Both algorithms work on magnitudes and restore the product sign as the
//! XOR of the input signs afterwards.

use std::ops::{Mul, MulAssign};

use bytemuck::zeroed_vec;
use num_complex::Complex64;
use tracing::trace;

use crate::{
	bigint::BigInt,
	fft::fft,
	limb::Limb,
};

/// Operand size in limbs at which the dispatcher switches from schoolbook to
/// the FFT convolution. Tuned for 16-bit limbs.
pub const FFT_THRESHOLD_LIMBS: usize = 64;

impl<L: Limb> BigInt<L> {
	/// Schoolbook `self *= rhs` in `O(len_a * len_b)` limb products.
	pub fn plain_mul_eq(&mut self, rhs: &Self) {
		let sign_a = self.sign();
		let sign_b = rhs.sign();
		if sign_a {
			self.negate();
		}
		let rhs_store;
		let rhs_mag = if sign_b {
			rhs_store = -rhs;
			&rhs_store
		} else {
			rhs
		};

		let la = self.len;
		let lb = rhs_mag.len;
		let mut prod: Vec<L> = zeroed_vec((la + lb + 1).next_power_of_two());
		for i in 0..la {
			let a = self.buf[i].to_u64();
			if a == 0 {
				continue;
			}
			let mut carry = 0u64;
			for j in 0..lb {
				let acc = prod[i + j].to_u64() + a * rhs_mag.buf[j].to_u64() + carry;
				prod[i + j] = L::from_u64(acc);
				carry = acc >> L::BITS;
			}
			let mut k = i + lb;
			while carry != 0 {
				let acc = prod[k].to_u64() + carry;
				prod[k] = L::from_u64(acc);
				carry = acc >> L::BITS;
				k += 1;
			}
		}
		self.buf = prod;
		self.len = la + lb;
		self.install_product_sign(sign_a != sign_b);
	}

	/// `self *= rhs` via complex-FFT polynomial convolution.
	///
	/// Falls back to schoolbook at limb widths where the `f64` mantissa
	/// cannot absorb the coefficient magnitudes.
	pub fn fft_mul_eq(&mut self, rhs: &Self) {
		if !L::FFT_SAFE {
			return self.plain_mul_eq(rhs);
		}
		let sign_a = self.sign();
		let sign_b = rhs.sign();
		if sign_a {
			self.negate();
		}
		let rhs_store;
		let rhs_mag = if sign_b {
			rhs_store = -rhs;
			&rhs_store
		} else {
			rhs
		};

		let la = self.len;
		let lb = rhs_mag.len;
		let n = (2 * la.max(lb)).next_power_of_two();
		let mut fa: Vec<Complex64> = (0..n)
			.map(|i| Complex64::new(self.limb_or_zero(i as isize).to_u64() as f64, 0.0))
			.collect();
		let mut fb: Vec<Complex64> = (0..n)
			.map(|i| Complex64::new(rhs_mag.limb_or_zero(i as isize).to_u64() as f64, 0.0))
			.collect();
		fft(&mut fa, false);
		fft(&mut fb, false);
		for (x, y) in fa.iter_mut().zip(&fb) {
			*x *= *y;
		}
		fft(&mut fa, true);

		let mut prod: Vec<L> = zeroed_vec((la + lb + 1).next_power_of_two());
		let mut carry = 0u64;
		for (k, slot) in prod.iter_mut().enumerate().take(la + lb) {
			carry += fa[k].re.round() as u64;
			*slot = L::from_u64(carry);
			carry >>= L::BITS;
		}
		debug_assert_eq!(carry, 0, "convolution carry must not escape the product");
		self.buf = prod;
		self.len = la + lb;
		self.install_product_sign(sign_a != sign_b);
	}

	/// Canonicalizes a freshly written magnitude product and applies the
	/// result sign.
	fn install_product_sign(&mut self, negative: bool) {
		if self.sign() {
			// A magnitude reaching into the top bit needs a sign pad.
			let padded = self.len + 1;
			self.set_len(padded, false);
		}
		if negative {
			self.negate();
		}
		self.shrink_len();
	}

	/// Schoolbook product of `lhs` and `rhs`.
	pub fn plain_mul(mut lhs: Self, rhs: &Self) -> Self {
		lhs.plain_mul_eq(rhs);
		lhs
	}

	/// FFT convolution product of `lhs` and `rhs`.
	pub fn fft_mul(mut lhs: Self, rhs: &Self) -> Self {
		lhs.fft_mul_eq(rhs);
		lhs
	}

	/// The two's-complement magnitude of a single-limb value.
	fn single_limb_mag(&self) -> L {
		debug_assert_eq!(self.len, 1);
		if self.sign() {
			L::from_u64(self.buf[0].to_u64().wrapping_neg())
		} else {
			self.buf[0]
		}
	}
}

impl<L: Limb> MulAssign<L> for BigInt<L> {
	/// Multiplies by an unsigned limb.
	fn mul_assign(&mut self, rhs: L) {
		let sign = self.sign();
		if sign {
			self.negate();
		}
		let new_len = self.len + 1;
		self.set_len(new_len, false);
		let mut carry = 0u64;
		for i in 0..new_len {
			let acc = self.buf[i].to_u64() * rhs.to_u64() + carry;
			self.buf[i] = L::from_u64(acc);
			carry = acc >> L::BITS;
		}
		self.install_product_sign(sign);
	}
}

impl<L: Limb> MulAssign<&BigInt<L>> for BigInt<L> {
	fn mul_assign(&mut self, rhs: &BigInt<L>) {
		if rhs.len == 1 {
			let neg = rhs.sign();
			let mag = rhs.single_limb_mag();
			trace!(len = self.len, "limb multiply");
			*self *= mag;
			if neg {
				self.negate();
			}
		} else if self.len == 1 {
			let neg = self.sign();
			let mag = self.single_limb_mag();
			trace!(len = rhs.len, "limb multiply");
			*self = rhs.clone();
			*self *= mag;
			if neg {
				self.negate();
			}
		} else if !L::FFT_SAFE || self.len.min(rhs.len) < FFT_THRESHOLD_LIMBS {
			trace!(len_a = self.len, len_b = rhs.len, "schoolbook multiply");
			self.plain_mul_eq(rhs);
		} else {
			trace!(len_a = self.len, len_b = rhs.len, "fft multiply");
			self.fft_mul_eq(rhs);
		}
	}
}

forward_val_assign!(MulAssign, mul_assign);

forward_binop!(Mul, mul, MulAssign, mul_assign);
forward_scalar_binop!(Mul, mul, MulAssign, mul_assign);
