// Copyright 2025 Irreducible Inc.

//! The [`BigInt`] value type and its limb store.

use bytemuck::zeroed_vec;

use crate::limb::Limb;

/// Capacities never shrink below this many limbs.
pub(crate) const MIN_CAP: usize = 1;

/// An arbitrary-precision signed integer.
///
/// The value is stored as a little-endian sequence of limbs encoding the
/// integer in two's complement with infinite sign extension: beyond the top
/// stored limb the number conceptually continues with `0x00…` or `0xFF…`
/// repetitions of the top bit. The buffer capacity is a power of two and is
/// managed independently of the in-use length.
///
/// Canonical form, restored after every public operation:
/// - `len >= 1`, and the top limb is non-redundant (dropping it would change
///   the value);
/// - limbs at indices `>= len` are zero;
/// - zero is `len == 1` with a zero limb.
#[derive(Clone, Debug)]
pub struct BigInt<L: Limb = u16> {
	pub(crate) buf: Vec<L>,
	pub(crate) len: usize,
	/// Whether the top stored bit is interpreted as a sign. Defaults to
	/// `true`; with `false` the value is read as a plain magnitude.
	/// Arithmetic on unsigned values that would turn negative is unspecified.
	pub is_signed: bool,
}

impl<L: Limb> Default for BigInt<L> {
	fn default() -> Self {
		BigInt {
			buf: zeroed_vec(MIN_CAP),
			len: 1,
			is_signed: true,
		}
	}
}

impl<L: Limb> BigInt<L> {
	/// Creates a zero value.
	pub fn new() -> Self {
		Self::default()
	}

	/// Constructs a value from its raw two's-complement limbs, least
	/// significant first.
	///
	/// The limbs are copied verbatim and then normalized; an input already in
	/// canonical form round-trips unchanged through [`Self::data`].
	pub fn from_raw(data: &[L]) -> Self {
		let len = data.len().max(1);
		let mut buf = zeroed_vec(len.next_power_of_two().max(MIN_CAP));
		buf[..data.len()].copy_from_slice(data);
		let mut out = BigInt {
			buf,
			len,
			is_signed: true,
		};
		out.shrink_len();
		out
	}

	/// The stored limbs, least significant first.
	pub fn data(&self) -> &[L] {
		&self.buf[..self.len]
	}

	/// Number of limbs in use.
	pub fn len(&self) -> usize {
		self.len
	}

	/// Allocated capacity in limbs. Always a power of two.
	pub fn capacity(&self) -> usize {
		self.buf.len()
	}

	pub fn is_zero(&self) -> bool {
		self.len == 1 && self.buf[0] == L::ZERO
	}

	/// The sign probe: true iff the value is interpreted as negative.
	pub fn sign(&self) -> bool {
		self.is_signed && self.buf[self.len - 1].high_bit()
	}

	/// Moves the value out, leaving a canonical zero behind.
	pub fn take(&mut self) -> Self {
		std::mem::take(self)
	}

	/// Resets to zero without releasing more capacity than the shrink policy
	/// allows.
	pub fn set_zero(&mut self) {
		let len = self.len;
		self.buf[..len].fill(L::ZERO);
		self.len = 1;
		self.auto_shrink();
	}

	/// The limb the infinite sign extension repeats beyond `len`.
	pub(crate) fn sign_fill(&self) -> L {
		if self.sign() { L::MAX } else { L::ZERO }
	}

	/// Reads limb `i` of the conceptually infinite representation.
	pub(crate) fn ext_limb(&self, i: usize) -> L {
		if i < self.len {
			self.buf[i]
		} else {
			self.sign_fill()
		}
	}

	/// Reads limb `i` treating out-of-range indices (both ends) as zero.
	/// Only meaningful on non-negative values.
	pub(crate) fn limb_or_zero(&self, i: isize) -> L {
		if i >= 0 && (i as usize) < self.len {
			self.buf[i as usize]
		} else {
			L::ZERO
		}
	}

	/// Adjusts `len`, reallocating if the new length exceeds the capacity.
	///
	/// An expansion pads with the current sign extension when `preserve_sign`
	/// is set and with zeros otherwise; a contraction zeroes the dropped
	/// limbs. `new_len` is clamped to at least one limb.
	pub(crate) fn set_len(&mut self, new_len: usize, preserve_sign: bool) {
		let new_len = new_len.max(1);
		self.auto_expand(new_len);
		if new_len > self.len {
			let fill = if preserve_sign { self.sign_fill() } else { L::ZERO };
			self.buf[self.len..new_len].fill(fill);
		} else {
			self.buf[new_len..self.len].fill(L::ZERO);
		}
		self.len = new_len;
	}

	/// Removes redundant sign-extension limbs from the top and lets the
	/// capacity policy reclaim space.
	pub(crate) fn shrink_len(&mut self) {
		if self.is_signed {
			while self.len > 1 {
				let ext = if self.buf[self.len - 2].high_bit() { L::MAX } else { L::ZERO };
				if self.buf[self.len - 1] != ext {
					break;
				}
				self.buf[self.len - 1] = L::ZERO;
				self.len -= 1;
			}
		} else {
			while self.len > 1 && self.buf[self.len - 1] == L::ZERO {
				self.len -= 1;
			}
		}
		self.auto_shrink();
	}

	/// Grows the capacity to the smallest power of two holding `target_len`.
	pub(crate) fn auto_expand(&mut self, target_len: usize) {
		if target_len > self.buf.len() {
			self.resize(target_len.next_power_of_two());
		}
	}

	/// Halves the capacity while utilisation stays below one quarter.
	pub(crate) fn auto_shrink(&mut self) {
		let mut cap = self.buf.len();
		while cap > MIN_CAP && self.len <= cap / 4 {
			cap /= 2;
		}
		if cap < self.buf.len() {
			self.buf.truncate(cap);
		}
	}

	fn resize(&mut self, new_cap: usize) {
		debug_assert!(new_cap.is_power_of_two());
		self.buf.resize(new_cap, L::ZERO);
	}

	/// Installs the two's-complement bit pattern of `v`.
	pub(crate) fn assign_i64(&mut self, v: i64) {
		let n = L::LIMBS_PER_U64;
		self.auto_expand(n);
		let old = self.len;
		let bits = v as u64;
		for i in 0..n {
			self.buf[i] = L::from_u64(bits >> (i as u32 * L::BITS));
		}
		if old > n {
			self.buf[n..old].fill(L::ZERO);
		}
		self.len = n;
		self.shrink_len();
	}

	/// Installs a non-negative value, padding with a zero limb when the
	/// magnitude reaches into the top bit.
	pub(crate) fn assign_u64(&mut self, v: u64) {
		let n = L::LIMBS_PER_U64;
		self.auto_expand(n);
		let old = self.len;
		for i in 0..n {
			self.buf[i] = L::from_u64(v >> (i as u32 * L::BITS));
		}
		if old > n {
			self.buf[n..old].fill(L::ZERO);
		}
		self.len = n;
		if self.sign() {
			self.set_len(n + 1, false);
		}
		self.shrink_len();
	}

	/// Length of the magnitude, ignoring a canonical zero sign pad on top.
	/// Only meaningful on non-negative values.
	pub(crate) fn mag_len(&self) -> usize {
		if self.len > 1 && self.buf[self.len - 1] == L::ZERO {
			self.len - 1
		} else {
			self.len
		}
	}

	/// Whether the magnitude fits a 64-bit accumulator.
	pub(crate) fn fits_u64(&self) -> bool {
		self.mag_len() as u32 * L::BITS <= 64
	}

	/// Assembles the magnitude into a `u64`. Requires [`Self::fits_u64`].
	pub(crate) fn mag_u64(&self) -> u64 {
		debug_assert!(self.fits_u64());
		let mut acc = 0u64;
		for i in (0..self.mag_len()).rev() {
			acc = (acc << L::BITS) | self.buf[i].to_u64();
		}
		acc
	}

	/// Assembles the signed value into an `i64`. Requires `len * W <= 64`.
	pub(crate) fn to_i64(&self) -> i64 {
		debug_assert!(self.len <= L::LIMBS_PER_U64);
		let mut raw = 0u64;
		for i in (0..self.len).rev() {
			raw = (raw << L::BITS) | self.buf[i].to_u64();
		}
		let used = self.len as u32 * L::BITS;
		if self.is_signed && used < 64 {
			let shift = 64 - used;
			((raw << shift) as i64) >> shift
		} else {
			raw as i64
		}
	}
}

#[cfg(test)]
impl<L: Limb> BigInt<L> {
	/// Asserts every representation invariant of the canonical form.
	pub(crate) fn assert_canonical(&self) {
		assert!(self.len >= 1, "len must be at least one");
		assert!(self.len <= self.buf.len(), "len must not exceed capacity");
		assert!(self.buf.len().is_power_of_two(), "capacity must be a power of two");
		for (i, &l) in self.buf[self.len..].iter().enumerate() {
			assert!(l == L::ZERO, "limb {} beyond len is not zero", self.len + i);
		}
		if self.len > 1 {
			let ext = if self.buf[self.len - 2].high_bit() { L::MAX } else { L::ZERO };
			assert!(
				!self.is_signed || self.buf[self.len - 1] != ext,
				"top limb is a redundant sign extension"
			);
		}
	}
}
