//! Heterogeneous list machinery behind every selection operation.
//!
//! Argument packs enter as tuples, convert into cons-lists for type-level
//! traversal, and flatten back into tuples at each call boundary. Both
//! directions are implemented for arities 0 through 12, and the
//! [`Tuple`]/[`HList`] associated types tie each pair together so a
//! round trip is an identity the compiler can see.

/// The empty heterogeneous list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HNil;

/// A cons cell: one value in front of the rest of the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HCons<H, T> {
	/// First element.
	pub head: H,
	/// Everything after the first element.
	pub tail: T,
}

/// An ordered heterogeneous list.
///
/// Implemented for nil-terminated [`HCons`] chains of up to twelve
/// elements, mirroring the [`Tuple`] impls.
pub trait HList: Sized {
	/// Number of elements.
	const LEN: usize;
	/// The tuple carrying the same element types in the same order.
	type Tuple: Tuple<HList = Self>;
	/// Convert back into the equivalent tuple.
	fn flatten(self) -> Self::Tuple;
}

/// A tuple viewed as an argument pack.
///
/// Implemented for arities 0 through 12.
pub trait Tuple: Sized {
	/// The equivalent cons-list representation.
	type HList: HList<Tuple = Self>;
	/// Number of elements.
	const ARITY: usize;
	/// Convert into the cons-list representation.
	fn into_hlist(self) -> Self::HList;
}

/// List concatenation. [`HNil`] is the left identity.
pub trait Combine<Rhs> {
	/// The concatenated list.
	type Output;
	/// Append `rhs` after every element of `self`.
	fn combine(self, rhs: Rhs) -> Self::Output;
}

impl<Rhs> Combine<Rhs> for HNil {
	type Output = Rhs;

	#[inline]
	fn combine(self, rhs: Rhs) -> Rhs {
		rhs
	}
}

impl<H, T, Rhs> Combine<Rhs> for HCons<H, T>
where
	T: Combine<Rhs>,
{
	type Output = HCons<H, <T as Combine<Rhs>>::Output>;

	#[inline]
	fn combine(self, rhs: Rhs) -> Self::Output {
		HCons {
			head: self.head,
			tail: self.tail.combine(rhs),
		}
	}
}

/// Build an hlist value from a comma-separated element list.
///
/// # Examples
///
/// ```
/// use patchbay_seq::hlist;
///
/// let list = hlist![1_u8, "two", 3.5_f64];
/// assert_eq!(list.head, 1);
/// assert_eq!(list.tail.head, "two");
/// ```
#[macro_export]
macro_rules! hlist {
	() => { $crate::hlist::HNil };
	($head:expr $(, $rest:expr)* $(,)?) => {
		$crate::hlist::HCons {
			head: $head,
			tail: $crate::hlist![$($rest),*],
		}
	};
}

/// Destructure an hlist with positional patterns.
///
/// # Examples
///
/// ```
/// use patchbay_seq::{hlist, hlist_pat};
///
/// let hlist_pat![a, b] = hlist![10, "ten"];
/// assert_eq!(a, 10);
/// assert_eq!(b, "ten");
/// ```
#[macro_export]
macro_rules! hlist_pat {
	() => { $crate::hlist::HNil };
	($head:pat $(, $rest:pat)* $(,)?) => {
		$crate::hlist::HCons {
			head: $head,
			tail: $crate::hlist_pat![$($rest),*],
		}
	};
}

/// Name an hlist type from a comma-separated element-type list.
///
/// # Examples
///
/// ```
/// use patchbay_seq::{hlist, HList};
///
/// let list: HList![u8, &str] = hlist![1, "one"];
/// assert_eq!(list.flatten(), (1, "one"));
/// ```
#[macro_export]
macro_rules! HList {
	() => { $crate::hlist::HNil };
	($head:ty $(, $rest:ty)* $(,)?) => {
		$crate::hlist::HCons<$head, $crate::HList![$($rest),*]>
	};
}

macro_rules! count_idents {
	() => { 0 };
	($head:ident $(, $rest:ident)*) => { 1 + count_idents!($($rest),*) };
}

macro_rules! tuple_impls {
	() => {
		impl HList for HNil {
			const LEN: usize = 0;
			type Tuple = ();

			#[inline]
			fn flatten(self) -> Self::Tuple {}
		}

		impl Tuple for () {
			type HList = HNil;
			const ARITY: usize = 0;

			#[inline]
			fn into_hlist(self) -> Self::HList {
				HNil
			}
		}
	};
	($head:ident $(, $rest:ident)*) => {
		impl<$head $(, $rest)*> HList for crate::HList![$head $(, $rest)*] {
			const LEN: usize = count_idents!($head $(, $rest)*);
			type Tuple = ($head, $($rest,)*);

			#[inline]
			#[allow(non_snake_case)]
			fn flatten(self) -> Self::Tuple {
				let crate::hlist_pat![$head $(, $rest)*] = self;
				($head, $($rest,)*)
			}
		}

		impl<$head $(, $rest)*> Tuple for ($head, $($rest,)*) {
			type HList = crate::HList![$head $(, $rest)*];
			const ARITY: usize = count_idents!($head $(, $rest)*);

			#[inline]
			#[allow(non_snake_case)]
			fn into_hlist(self) -> Self::HList {
				let ($head, $($rest,)*) = self;
				crate::hlist![$head $(, $rest)*]
			}
		}

		tuple_impls!($($rest),*);
	};
}

tuple_impls!(T1, T2, T3, T4, T5, T6, T7, T8, T9, T10, T11, T12);
