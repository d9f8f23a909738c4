// Copyright 2025 Irreducible Inc.

//! Operator-forwarding macros.
//!
//! Each arithmetic operation is implemented once as a `*Assign` trait; these
//! macros derive the by-value and by-reference operator forms from it.

macro_rules! forward_binop {
	($imp:ident, $method:ident, $assign_imp:ident, $assign_method:ident) => {
		impl<L: Limb> $imp<&BigInt<L>> for BigInt<L> {
			type Output = BigInt<L>;

			fn $method(mut self, rhs: &BigInt<L>) -> BigInt<L> {
				$assign_imp::$assign_method(&mut self, rhs);
				self
			}
		}

		impl<L: Limb> $imp<BigInt<L>> for BigInt<L> {
			type Output = BigInt<L>;

			fn $method(mut self, rhs: BigInt<L>) -> BigInt<L> {
				$assign_imp::$assign_method(&mut self, &rhs);
				self
			}
		}

		impl<L: Limb> $imp<&BigInt<L>> for &BigInt<L> {
			type Output = BigInt<L>;

			fn $method(self, rhs: &BigInt<L>) -> BigInt<L> {
				let mut lhs = self.clone();
				$assign_imp::$assign_method(&mut lhs, rhs);
				lhs
			}
		}

		impl<L: Limb> $imp<BigInt<L>> for &BigInt<L> {
			type Output = BigInt<L>;

			fn $method(self, rhs: BigInt<L>) -> BigInt<L> {
				let mut lhs = self.clone();
				$assign_imp::$assign_method(&mut lhs, &rhs);
				lhs
			}
		}
	};
}

macro_rules! forward_val_assign {
	($assign_imp:ident, $assign_method:ident) => {
		impl<L: Limb> $assign_imp<BigInt<L>> for BigInt<L> {
			fn $assign_method(&mut self, rhs: BigInt<L>) {
				$assign_imp::$assign_method(self, &rhs);
			}
		}
	};
}

macro_rules! forward_scalar_binop {
	($imp:ident, $method:ident, $assign_imp:ident, $assign_method:ident) => {
		impl<L: Limb> $imp<L> for BigInt<L> {
			type Output = BigInt<L>;

			fn $method(mut self, rhs: L) -> BigInt<L> {
				$assign_imp::$assign_method(&mut self, rhs);
				self
			}
		}

		impl<L: Limb> $imp<L> for &BigInt<L> {
			type Output = BigInt<L>;

			fn $method(self, rhs: L) -> BigInt<L> {
				let mut lhs = self.clone();
				$assign_imp::$assign_method(&mut lhs, rhs);
				lhs
			}
		}
	};
}

macro_rules! forward_shift_binop {
	($imp:ident, $method:ident, $assign_imp:ident, $assign_method:ident) => {
		impl<L: Limb> $imp<usize> for BigInt<L> {
			type Output = BigInt<L>;

			fn $method(mut self, rhs: usize) -> BigInt<L> {
				$assign_imp::$assign_method(&mut self, rhs);
				self
			}
		}

		impl<L: Limb> $imp<usize> for &BigInt<L> {
			type Output = BigInt<L>;

			fn $method(self, rhs: usize) -> BigInt<L> {
				let mut lhs = self.clone();
				$assign_imp::$assign_method(&mut lhs, rhs);
				lhs
			}
		}
	};
}
