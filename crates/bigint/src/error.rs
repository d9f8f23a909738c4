// Copyright 2025 Irreducible Inc.

/// Error of the strict [`FromStr`](std::str::FromStr) parse.
///
/// The lenient [`BigInt::parse`](crate::BigInt::parse) front end never fails;
/// this is only reported when the input contains no digit at all.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseBigIntError {
	#[error("no digits found in the input")]
	NoDigits,
}
