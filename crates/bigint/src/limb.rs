// Copyright 2025 Irreducible Inc.

//! Machine-word limb types backing [`BigInt`](crate::BigInt).
//!
//! A limb is one digit of the radix-`2^W` representation. All intermediate
//! arithmetic runs in a `u64` accumulator, which is wide enough to hold the
//! product of two limbs for every supported width.

use std::{
	fmt::{Debug, Display},
	hash::Hash,
	ops::{
		BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Not, Shl, Shr,
	},
};

mod sealed {
	pub trait Sealed {}

	impl Sealed for u8 {}
	impl Sealed for u16 {}
	impl Sealed for u32 {}
}

/// An unsigned machine word usable as a [`BigInt`](crate::BigInt) limb.
///
/// Implemented for `u8`, `u16` and `u32`. Wider words are excluded because the
/// division estimates and the schoolbook accumulator must fit twice the limb
/// width into a `u64`.
pub trait Limb:
	sealed::Sealed
	+ Copy
	+ Eq
	+ Ord
	+ Hash
	+ Debug
	+ Display
	+ Send
	+ Sync
	+ bytemuck::Zeroable
	+ Not<Output = Self>
	+ BitAnd<Output = Self>
	+ BitOr<Output = Self>
	+ BitXor<Output = Self>
	+ BitAndAssign
	+ BitOrAssign
	+ BitXorAssign
	+ Shl<u32, Output = Self>
	+ Shr<u32, Output = Self>
	+ 'static
{
	/// Bit width `W` of the limb.
	const BITS: u32;
	const ZERO: Self;
	const ONE: Self;
	const MAX: Self;
	/// The top bit, which doubles as the sign probe of the top limb.
	const SIGN_BIT: Self;
	/// How many limbs fit into a 64-bit accumulator without truncation.
	const LIMBS_PER_U64: usize = (64 / Self::BITS) as usize;
	/// Whether an `f64` mantissa has enough headroom for the FFT convolution
	/// at this width.
	const FFT_SAFE: bool = Self::BITS <= 16;
	/// Whether the unnormalized quotient estimate keeps its three-limb window
	/// inside a single `u64`.
	const SHORT_ESTIMATE_SAFE: bool = Self::BITS <= 21;

	/// Truncating conversion from the accumulator.
	fn from_u64(v: u64) -> Self;
	fn to_u64(self) -> u64;
	fn leading_zeros(self) -> u32;
	fn trailing_zeros(self) -> u32;
	fn is_power_of_two(self) -> bool;

	/// Whether the top bit is set.
	fn high_bit(self) -> bool {
		self & Self::SIGN_BIT != Self::ZERO
	}
}

macro_rules! impl_limb {
	($ty:ty) => {
		impl Limb for $ty {
			const BITS: u32 = <$ty>::BITS;
			const ZERO: Self = 0;
			const ONE: Self = 1;
			const MAX: Self = <$ty>::MAX;
			const SIGN_BIT: Self = 1 << (<$ty>::BITS - 1);

			fn from_u64(v: u64) -> Self {
				v as $ty
			}

			fn to_u64(self) -> u64 {
				self as u64
			}

			fn leading_zeros(self) -> u32 {
				<$ty>::leading_zeros(self)
			}

			fn trailing_zeros(self) -> u32 {
				<$ty>::trailing_zeros(self)
			}

			fn is_power_of_two(self) -> bool {
				<$ty>::is_power_of_two(self)
			}
		}
	};
}

impl_limb!(u8);
impl_limb!(u16);
impl_limb!(u32);
