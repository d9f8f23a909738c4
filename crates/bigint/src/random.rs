// Copyright 2025 Irreducible Inc.

//! Uniform random fill.

use rand::Rng;

use crate::{bigint::BigInt, limb::Limb};

impl<L: Limb> BigInt<L> {
	/// Fills with `length` uniform limbs from the process-wide generator.
	///
	/// See [`Self::gen_random_with`] for the semantics of `length` and
	/// `fixed`.
	pub fn gen_random(&mut self, length: usize, fixed: u32) {
		self.gen_random_with(&mut rand::rng(), length, fixed);
	}

	/// Fills with `length` uniform limbs drawn from `rng`.
	///
	/// A `length` of zero keeps the current limb count. With `fixed == 0`
	/// the top bit is cleared so the value is non-negative; otherwise the
	/// top limb is masked so its bit length is exactly `fixed` (taken
	/// modulo the limb width, with `fixed == W` mapping to `W`), which for
	/// `fixed == W` always produces a negative value.
	pub fn gen_random_with<R: Rng + ?Sized>(&mut self, rng: &mut R, length: usize, fixed: u32) {
		let length = if length == 0 { self.len } else { length };
		self.set_len(length, false);
		for i in 0..length {
			self.buf[i] = L::from_u64(rng.random::<u64>());
		}
		let top = self.buf[length - 1].to_u64();
		if fixed == 0 {
			self.buf[length - 1] = L::from_u64(top & !L::SIGN_BIT.to_u64());
		} else {
			let f = (fixed - 1) % L::BITS + 1;
			let mask = if f == L::BITS { L::MAX.to_u64() } else { (1u64 << f) - 1 };
			self.buf[length - 1] = L::from_u64((top & mask) | (1u64 << (f - 1)));
		}
		self.shrink_len();
	}
}
