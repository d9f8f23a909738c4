// Copyright 2025 Irreducible Inc.

//! In-place iterative radix-2 complex FFT used by the convolution multiply.

use std::f64::consts::PI;

use num_complex::Complex64;

/// Reverses the low `bits` bits of an unsigned integer.
pub(crate) fn reverse_bits(x: usize, bits: u32) -> usize {
	x.reverse_bits().unbounded_shr(usize::BITS - bits)
}

/// Applies the bit-reversal permutation to a power-of-two-sized slice.
pub(crate) fn bit_rev_sort<T>(a: &mut [T]) {
	debug_assert!(a.len().is_power_of_two());
	let bits = a.len().trailing_zeros();
	for i in 0..a.len() {
		let i_rev = reverse_bits(i, bits);
		if i < i_rev {
			a.swap(i, i_rev);
		}
	}
}

/// In-place radix-2 transform over a power-of-two-sized slice.
///
/// The inverse transform also applies the `1/n` scaling, so a forward
/// transform followed by an inverse one is the identity up to rounding.
pub(crate) fn fft(a: &mut [Complex64], inverse: bool) {
	bit_rev_sort(a);
	let n = a.len();
	let mut m = 2;
	while m <= n {
		let angle = if inverse { -2.0 * PI / m as f64 } else { 2.0 * PI / m as f64 };
		let w_m = Complex64::from_polar(1.0, angle);
		for block in (0..n).step_by(m) {
			let mut w = Complex64::new(1.0, 0.0);
			for j in block..block + m / 2 {
				// butterfly
				let t = w * a[j + m / 2];
				let u = a[j];
				a[j] = u + t;
				a[j + m / 2] = u - t;
				w *= w_m;
			}
		}
		m <<= 1;
	}
	if inverse {
		let scale = 1.0 / n as f64;
		for x in a.iter_mut() {
			*x *= scale;
		}
	}
}
