// Copyright 2025 Irreducible Inc.

//! Prints `n!` in a chosen base.

use anyhow::ensure;
use calc_bigint::{BigInt32, ShowBase};
use clap::Parser;

#[derive(Parser)]
struct Args {
	/// Factorial argument.
	n: u32,

	/// Output base, 2 to 36.
	#[arg(long, default_value_t = 10)]
	base: usize,
}

fn main() -> anyhow::Result<()> {
	let args = Args::parse();
	ensure!((2..=36).contains(&args.base), "base must lie in 2..=36");

	let mut acc = BigInt32::from(1u8);
	for k in 2..=args.n {
		acc *= k;
	}
	println!("{}", acc.to_string_base(args.base, false, ShowBase::None));
	Ok(())
}
