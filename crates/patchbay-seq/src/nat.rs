//! Type-level natural numbers naming argument positions.
//!
//! Positions are Peano-encoded: [`Z`] is the first argument, `S<Z>` the
//! second, and so on. The [`N0`]..=[`N12`] aliases cover every position a
//! twelve-argument pack can have.

use std::marker::PhantomData;

/// Zero; the first argument position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Z;

/// Successor of `N`; the position one past `N`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct S<N>(PhantomData<fn() -> N>);

/// A type-level natural number with a runtime value.
pub trait Nat {
	/// Runtime value of this number.
	const USIZE: usize;
}

impl Nat for Z {
	const USIZE: usize = 0;
}

impl<N: Nat> Nat for S<N> {
	const USIZE: usize = N::USIZE + 1;
}

/// Position `0`.
pub type N0 = Z;
/// Position `1`.
pub type N1 = S<N0>;
/// Position `2`.
pub type N2 = S<N1>;
/// Position `3`.
pub type N3 = S<N2>;
/// Position `4`.
pub type N4 = S<N3>;
/// Position `5`.
pub type N5 = S<N4>;
/// Position `6`.
pub type N6 = S<N5>;
/// Position `7`.
pub type N7 = S<N6>;
/// Position `8`.
pub type N8 = S<N7>;
/// Position `9`.
pub type N9 = S<N8>;
/// Position `10`.
pub type N10 = S<N9>;
/// Position `11`.
pub type N11 = S<N10>;
/// Position `12`.
pub type N12 = S<N11>;

/// Type-level subtraction: `Self - M`.
///
/// Unsatisfiable when `M` exceeds `Self`, which is what rejects an
/// inverted range at compile time.
pub trait NatSub<M>: Nat {
	/// The difference.
	type Output: Nat;
}

impl<N: Nat> NatSub<Z> for N {
	type Output = N;
}

impl<N, M> NatSub<S<M>> for S<N>
where
	N: NatSub<M>,
{
	type Output = <N as NatSub<M>>::Output;
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_nat_runtime_values() {
		// Assert
		assert_eq!(N0::USIZE, 0);
		assert_eq!(N1::USIZE, 1);
		assert_eq!(N7::USIZE, 7);
		assert_eq!(N12::USIZE, 12);
	}

	#[rstest]
	fn test_subtraction_runtime_values() {
		// Arrange
		type Diff = <N5 as NatSub<N2>>::Output;

		// Assert
		assert_eq!(Diff::USIZE, 3);
		assert_eq!(<N4 as NatSub<N4>>::Output::USIZE, 0);
		assert_eq!(<N9 as NatSub<Z>>::Output::USIZE, 9);
	}
}
