// Copyright 2025 Irreducible Inc.

//! Three-way comparison over the canonical representation.

use std::cmp::Ordering;

use crate::{bigint::BigInt, limb::Limb};

impl<L: Limb> Ord for BigInt<L> {
	fn cmp(&self, rhs: &Self) -> Ordering {
		match (self.sign(), rhs.sign()) {
			(true, false) => return Ordering::Less,
			(false, true) => return Ordering::Greater,
			_ => {}
		}
		// Same sign: for non-negative values a longer canonical form is
		// larger, for negative values it is smaller.
		let by_len = if self.sign() {
			rhs.len.cmp(&self.len)
		} else {
			self.len.cmp(&rhs.len)
		};
		if by_len != Ordering::Equal {
			return by_len;
		}
		for i in (0..self.len).rev() {
			match self.buf[i].cmp(&rhs.buf[i]) {
				Ordering::Equal => {}
				ord => return ord,
			}
		}
		Ordering::Equal
	}
}

impl<L: Limb> PartialOrd for BigInt<L> {
	fn partial_cmp(&self, rhs: &Self) -> Option<Ordering> {
		Some(self.cmp(rhs))
	}
}

impl<L: Limb> PartialEq for BigInt<L> {
	fn eq(&self, rhs: &Self) -> bool {
		self.cmp(rhs) == Ordering::Equal
	}
}

impl<L: Limb> Eq for BigInt<L> {}
