// Copyright 2025 Irreducible Inc.

//! Arbitrary-precision signed integers over two's-complement limb buffers.
//!
//! The value type [`BigInt`] is generic over its limb width (8, 16 or 32
//! bits) and carries the full operator surface of a built-in integer:
//! arithmetic, bitwise logic, shifts, ordering and radix-2..36 textual I/O.
//! Multiplication dispatches between a schoolbook product and a complex-FFT
//! convolution; division selects between a single-limb pass, a native 64-bit
//! fast path and two variants of Knuth long division, all keyed on operand
//! size and limb width.
//!
//! Division is truncated (the remainder takes the dividend's sign) and
//! division by zero is a documented no-op, so the operators stay total and
//! composable inside expression trees.

#[macro_use]
mod macros;

mod addsub;
mod bigint;
mod bit_arith;
mod cmp;
mod convert;
mod div;
mod error;
mod fft;
mod limb;
mod mul;
mod random;

#[cfg(test)]
mod tests;

pub use bigint::BigInt;
pub use convert::ShowBase;
pub use error::ParseBigIntError;
pub use limb::Limb;
pub use mul::FFT_THRESHOLD_LIMBS;

/// The limb widths the dispatch tables are tuned for.
pub type BigInt8 = BigInt<u8>;
pub type BigInt16 = BigInt<u16>;
pub type BigInt32 = BigInt<u32>;
