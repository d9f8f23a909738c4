// Copyright 2025 Irreducible Inc.

//! Additive layer: ripple-carry addition and subtraction, negation,
//! increment/decrement and absolute value.
//!
//! All of these run directly on the two's-complement encoding, so sign
//! handling falls out of limb-width modular arithmetic. Subtraction is
//! addition of the bitwise complement with an incoming carry.

use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

use crate::{bigint::BigInt, limb::Limb};

impl<L: Limb> BigInt<L> {
	/// `self += rhs` when `invert_rhs` is false, `self += !rhs + carry_in`
	/// when it is true (two's-complement subtraction for `carry_in == 1`).
	fn ripple_add(&mut self, rhs: &Self, mut carry: u64, invert_rhs: bool) {
		let new_len = self.len.max(rhs.len) + 1;
		self.set_len(new_len, true);
		for i in 0..new_len {
			let b = if invert_rhs {
				(!rhs.ext_limb(i)).to_u64()
			} else {
				rhs.ext_limb(i).to_u64()
			};
			let acc = self.buf[i].to_u64() + b + carry;
			self.buf[i] = L::from_u64(acc);
			carry = acc >> L::BITS;
		}
		// The carry out of the top limb is the wrap of the infinite
		// sign extension and is discarded.
		self.shrink_len();
	}

	/// Negates in place: bitwise NOT plus one.
	///
	/// The length is grown first so that negating the minimum-negative
	/// pattern widens instead of wrapping onto itself.
	pub fn negate(&mut self) {
		let new_len = self.len + 1;
		self.set_len(new_len, true);
		for i in 0..new_len {
			self.buf[i] = !self.buf[i];
		}
		let mut carry = 1u64;
		for i in 0..new_len {
			if carry == 0 {
				break;
			}
			let acc = self.buf[i].to_u64() + carry;
			self.buf[i] = L::from_u64(acc);
			carry = acc >> L::BITS;
		}
		self.shrink_len();
	}

	/// The absolute value.
	pub fn abs(&self) -> Self {
		let mut out = self.clone();
		out.abs_assign();
		out
	}

	/// Replaces the value by its absolute value.
	pub fn abs_assign(&mut self) {
		if self.sign() {
			self.negate();
		}
	}

	/// Adds one, as a specialised single-limb update.
	pub fn inc(&mut self) {
		*self += L::ONE;
	}

	/// Subtracts one, as a specialised single-limb update.
	pub fn dec(&mut self) {
		*self -= L::ONE;
	}
}

impl<L: Limb> AddAssign<&BigInt<L>> for BigInt<L> {
	fn add_assign(&mut self, rhs: &BigInt<L>) {
		self.ripple_add(rhs, 0, false);
	}
}

impl<L: Limb> SubAssign<&BigInt<L>> for BigInt<L> {
	fn sub_assign(&mut self, rhs: &BigInt<L>) {
		self.ripple_add(rhs, 1, true);
	}
}

forward_val_assign!(AddAssign, add_assign);
forward_val_assign!(SubAssign, sub_assign);

forward_binop!(Add, add, AddAssign, add_assign);
forward_binop!(Sub, sub, SubAssign, sub_assign);

impl<L: Limb> AddAssign<L> for BigInt<L> {
	fn add_assign(&mut self, rhs: L) {
		let new_len = self.len + 1;
		self.set_len(new_len, true);
		let mut carry = rhs.to_u64();
		for i in 0..new_len {
			if carry == 0 {
				break;
			}
			let acc = self.buf[i].to_u64() + carry;
			self.buf[i] = L::from_u64(acc);
			carry = acc >> L::BITS;
		}
		self.shrink_len();
	}
}

impl<L: Limb> SubAssign<L> for BigInt<L> {
	fn sub_assign(&mut self, rhs: L) {
		let new_len = self.len + 1;
		self.set_len(new_len, true);
		let base = 1u64 << L::BITS;
		let mut borrow = rhs.to_u64();
		for i in 0..new_len {
			if borrow == 0 {
				break;
			}
			let acc = base + self.buf[i].to_u64() - borrow;
			self.buf[i] = L::from_u64(acc);
			borrow = 1 - (acc >> L::BITS);
		}
		self.shrink_len();
	}
}

forward_scalar_binop!(Add, add, AddAssign, add_assign);
forward_scalar_binop!(Sub, sub, SubAssign, sub_assign);

impl<L: Limb> Neg for BigInt<L> {
	type Output = BigInt<L>;

	fn neg(mut self) -> BigInt<L> {
		self.negate();
		self
	}
}

impl<L: Limb> Neg for &BigInt<L> {
	type Output = BigInt<L>;

	fn neg(self) -> BigInt<L> {
		let mut out = self.clone();
		out.negate();
		out
	}
}
