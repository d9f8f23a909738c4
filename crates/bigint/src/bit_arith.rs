// Copyright 2025 Irreducible Inc.

//! Bitwise operators and shifts.
//!
//! The binary operators act on the conceptually infinite two's-complement
//! expansion: where one operand is shorter, its sign extension participates.
//! Shifts are arithmetic; bits pushed past the stored top limb land in fresh
//! limbs rather than being discarded.

use std::ops::{
	BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Not, Shl, ShlAssign, Shr,
	ShrAssign,
};

use crate::{bigint::BigInt, limb::Limb};

impl<L: Limb> BigInt<L> {
	/// Inverts every stored limb, which negates-minus-one the value.
	pub fn invert_bits(&mut self) {
		for i in 0..self.len {
			self.buf[i] = !self.buf[i];
		}
	}
}

impl<L: Limb> Not for BigInt<L> {
	type Output = BigInt<L>;

	fn not(mut self) -> BigInt<L> {
		self.invert_bits();
		self
	}
}

impl<L: Limb> Not for &BigInt<L> {
	type Output = BigInt<L>;

	fn not(self) -> BigInt<L> {
		let mut out = self.clone();
		out.invert_bits();
		out
	}
}

impl<L: Limb> BitAndAssign<&BigInt<L>> for BigInt<L> {
	fn bitand_assign(&mut self, rhs: &BigInt<L>) {
		if self.len < rhs.len {
			self.set_len(rhs.len, true);
		}
		for i in 0..rhs.len {
			self.buf[i] &= rhs.buf[i];
		}
		if self.len > rhs.len && !rhs.sign() {
			// The zero extension of rhs clears the tail.
			self.buf[rhs.len..self.len].fill(L::ZERO);
			self.len = rhs.len;
		}
		self.shrink_len();
	}
}

impl<L: Limb> BitOrAssign<&BigInt<L>> for BigInt<L> {
	fn bitor_assign(&mut self, rhs: &BigInt<L>) {
		if self.len < rhs.len {
			self.set_len(rhs.len, true);
		}
		for i in 0..rhs.len {
			self.buf[i] |= rhs.buf[i];
		}
		if self.len > rhs.len && rhs.sign() {
			// The sign extension of rhs saturates the tail.
			self.buf[rhs.len..self.len].fill(L::MAX);
		}
		self.shrink_len();
	}
}

impl<L: Limb> BitXorAssign<&BigInt<L>> for BigInt<L> {
	fn bitxor_assign(&mut self, rhs: &BigInt<L>) {
		if self.len < rhs.len {
			self.set_len(rhs.len, true);
		}
		for i in 0..rhs.len {
			self.buf[i] ^= rhs.buf[i];
		}
		if self.len > rhs.len && rhs.sign() {
			for i in rhs.len..self.len {
				self.buf[i] = !self.buf[i];
			}
		}
		self.shrink_len();
	}
}

forward_val_assign!(BitAndAssign, bitand_assign);
forward_val_assign!(BitOrAssign, bitor_assign);
forward_val_assign!(BitXorAssign, bitxor_assign);

forward_binop!(BitAnd, bitand, BitAndAssign, bitand_assign);
forward_binop!(BitOr, bitor, BitOrAssign, bitor_assign);
forward_binop!(BitXor, bitxor, BitXorAssign, bitxor_assign);

impl<L: Limb> ShlAssign<usize> for BigInt<L> {
	fn shl_assign(&mut self, rhs: usize) {
		let w = L::BITS as usize;
		let q = rhs / w;
		let r = (rhs % w) as u32;
		let new_len = self.len + q + usize::from(r > 0);
		self.auto_expand(new_len);
		let fill = self.sign_fill();
		let old_len = self.len;
		// Walk down from the top so the still-unshifted low limbs are read
		// before they are overwritten.
		for i in (0..new_len).rev() {
			let hi = if i >= q {
				if i - q < old_len { self.buf[i - q] } else { fill }
			} else {
				L::ZERO
			};
			self.buf[i] = if r == 0 {
				hi
			} else {
				let lo = if i > q {
					if i - q - 1 < old_len { self.buf[i - q - 1] } else { fill }
				} else {
					L::ZERO
				};
				(hi << r) | (lo >> (L::BITS - r))
			};
		}
		self.len = new_len;
		self.shrink_len();
	}
}

impl<L: Limb> ShrAssign<usize> for BigInt<L> {
	fn shr_assign(&mut self, rhs: usize) {
		let w = L::BITS as usize;
		let q = rhs / w;
		let r = (rhs % w) as u32;
		let fill = self.sign_fill();
		if q >= self.len {
			// Everything shifted out: all that remains is the extension.
			let len = self.len;
			self.buf[..len].fill(L::ZERO);
			self.buf[0] = fill;
			self.len = 1;
			self.auto_shrink();
			return;
		}
		let new_len = self.len - q;
		for i in 0..new_len {
			let lo = self.buf[i + q];
			self.buf[i] = if r == 0 {
				lo
			} else {
				let hi = if i + q + 1 < self.len { self.buf[i + q + 1] } else { fill };
				(lo >> r) | (hi << (L::BITS - r))
			};
		}
		self.buf[new_len..self.len].fill(L::ZERO);
		self.len = new_len;
		self.shrink_len();
	}
}

forward_shift_binop!(Shl, shl, ShlAssign, shl_assign);
forward_shift_binop!(Shr, shr, ShrAssign, shr_assign);
