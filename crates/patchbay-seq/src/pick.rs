//! Position- and type-directed extraction from heterogeneous lists.
//!
//! Positional traits ([`At`], [`SplitAt`], [`ExtractAt`],
//! [`SelectIndices`]) walk Peano indices. Type-directed traits
//! ([`PickOne`], [`PickSubset`]) leave the indices to the trait solver,
//! which is how a reduced callable's parameters are located inside a full
//! signature without the caller spelling positions out. Every
//! out-of-range, repeated or unmatchable request is an unsatisfied bound,
//! surfacing at compile time.

use crate::hlist::{HCons, HList, HNil};
use crate::nat::{S, Z};

/// Hole left where a value has been moved out of a list.
///
/// Keeping a placeholder in place preserves the positions of the
/// remaining elements, so later indices keep naming the same argument. A
/// `Taken` can never satisfy a callable's parameter type, which is what
/// rejects an index list naming the same position twice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Taken;

/// Positional selection: the element at index `N`, consuming the list.
pub trait At<N> {
	/// Element type at `N`.
	type Output;
	/// Move out the element at `N`, dropping the rest.
	fn at(self) -> Self::Output;
}

impl<H, T> At<Z> for HCons<H, T> {
	type Output = H;

	#[inline]
	fn at(self) -> H {
		self.head
	}
}

impl<H, T, N> At<S<N>> for HCons<H, T>
where
	T: At<N>,
{
	type Output = <T as At<N>>::Output;

	#[inline]
	fn at(self) -> Self::Output {
		self.tail.at()
	}
}

/// Slice a list at position `N` into the first `N` elements and the
/// rest. Unsatisfiable when `N` exceeds the list length.
pub trait SplitAt<N> {
	/// The first `N` elements.
	type Front;
	/// Everything from position `N` on.
	type Back;
	/// Split into `(front, back)`.
	fn split_at(self) -> (Self::Front, Self::Back);
}

impl<L: HList> SplitAt<Z> for L {
	type Front = HNil;
	type Back = L;

	#[inline]
	fn split_at(self) -> (HNil, L) {
		(HNil, self)
	}
}

impl<H, T, N> SplitAt<S<N>> for HCons<H, T>
where
	T: SplitAt<N>,
{
	type Front = HCons<H, <T as SplitAt<N>>::Front>;
	type Back = <T as SplitAt<N>>::Back;

	#[inline]
	fn split_at(self) -> (Self::Front, Self::Back) {
		let (front, back) = self.tail.split_at();
		(
			HCons {
				head: self.head,
				tail: front,
			},
			back,
		)
	}
}

/// Move the element at `N` out of a list, leaving a [`Taken`] hole in its
/// place so the remaining positions stay stable.
pub trait ExtractAt<N> {
	/// The extracted element.
	type Value;
	/// The list with the hole punched in.
	type Rest;
	/// Extract into `(value, rest)`.
	fn extract_at(self) -> (Self::Value, Self::Rest);
}

impl<H, T> ExtractAt<Z> for HCons<H, T> {
	type Value = H;
	type Rest = HCons<Taken, T>;

	#[inline]
	fn extract_at(self) -> (H, Self::Rest) {
		(
			self.head,
			HCons {
				head: Taken,
				tail: self.tail,
			},
		)
	}
}

impl<H, T, N> ExtractAt<S<N>> for HCons<H, T>
where
	T: ExtractAt<N>,
{
	type Value = <T as ExtractAt<N>>::Value;
	type Rest = HCons<H, <T as ExtractAt<N>>::Rest>;

	#[inline]
	fn extract_at(self) -> (Self::Value, Self::Rest) {
		let (value, rest) = self.tail.extract_at();
		(
			value,
			HCons {
				head: self.head,
				tail: rest,
			},
		)
	}
}

/// Gather the elements at an index list, in index-list order.
///
/// Each index is extracted through [`ExtractAt`], so a repeated index
/// meets the [`Taken`] hole left by its first use and fails to compile.
/// The unselected remainder is dropped.
pub trait SelectIndices<Is> {
	/// The selected elements, ordered as `Is`.
	type Output;
	/// Select, consuming the list.
	fn select(self) -> Self::Output;
}

impl<L: HList> SelectIndices<HNil> for L {
	type Output = HNil;

	#[inline]
	fn select(self) -> HNil {
		HNil
	}
}

impl<L, N, Ns> SelectIndices<HCons<N, Ns>> for L
where
	L: ExtractAt<N>,
	<L as ExtractAt<N>>::Rest: SelectIndices<Ns>,
{
	type Output = HCons<<L as ExtractAt<N>>::Value, <<L as ExtractAt<N>>::Rest as SelectIndices<Ns>>::Output>;

	#[inline]
	fn select(self) -> Self::Output {
		let (value, rest) = self.extract_at();
		HCons {
			head: value,
			tail: rest.select(),
		}
	}
}

/// Find the first element of type `T` and move it out, with `I` inferred
/// as its position.
///
/// The solver discards every candidate position whose element type
/// differs, so `I` needs no annotation when `T` occurs once. Two
/// occurrences of `T` leave the position ambiguous and fail to compile.
pub trait PickOne<T, I> {
	/// The list with a [`Taken`] hole where `T` was.
	type Rest;
	/// Extract into `(value, rest)`.
	fn pick_one(self) -> (T, Self::Rest);
}

impl<T, Tail> PickOne<T, Z> for HCons<T, Tail> {
	type Rest = HCons<Taken, Tail>;

	#[inline]
	fn pick_one(self) -> (T, Self::Rest) {
		(
			self.head,
			HCons {
				head: Taken,
				tail: self.tail,
			},
		)
	}
}

impl<T, Head, Tail, I> PickOne<T, S<I>> for HCons<Head, Tail>
where
	Tail: PickOne<T, I>,
{
	type Rest = HCons<Head, <Tail as PickOne<T, I>>::Rest>;

	#[inline]
	fn pick_one(self) -> (T, Self::Rest) {
		let (value, rest) = self.tail.pick_one();
		(
			value,
			HCons {
				head: self.head,
				tail: rest,
			},
		)
	}
}

/// Extract the sublist `Ts` from a list, one [`PickOne`] per element,
/// with `Is` inferred as the positions used.
///
/// `Ts` may name the elements in any order; each pick leaves a hole, so
/// an element can back at most one parameter. The inferred `Is` is the
/// position mapping a matched callable runs under.
pub trait PickSubset<Ts, Is> {
	/// The list with holes where `Ts` were.
	type Rest;
	/// Extract into `(sublist, rest)`.
	fn pick_subset(self) -> (Ts, Self::Rest);
}

impl<L: HList> PickSubset<HNil, HNil> for L {
	type Rest = L;

	#[inline]
	fn pick_subset(self) -> (HNil, L) {
		(HNil, self)
	}
}

impl<L, T, Ts, I, Is> PickSubset<HCons<T, Ts>, HCons<I, Is>> for L
where
	L: PickOne<T, I>,
	<L as PickOne<T, I>>::Rest: PickSubset<Ts, Is>,
{
	type Rest = <<L as PickOne<T, I>>::Rest as PickSubset<Ts, Is>>::Rest;

	#[inline]
	fn pick_subset(self) -> (HCons<T, Ts>, Self::Rest) {
		let (head, rest) = self.pick_one();
		let (tail, rest) = rest.pick_subset();
		(HCons { head, tail }, rest)
	}
}

/// The index list `[0, 1, …]` covering every position of a list.
pub trait IndicesOf {
	/// One [`crate::nat::Nat`] per element, in order.
	type Indices;
}

impl IndicesOf for HNil {
	type Indices = HNil;
}

impl<H, T> IndicesOf for HCons<H, T>
where
	T: IndicesOf,
	<T as IndicesOf>::Indices: MapSucc,
{
	type Indices = HCons<Z, <<T as IndicesOf>::Indices as MapSucc>::Output>;
}

/// Successor mapping over an index list; shifts every position by one.
pub trait MapSucc {
	/// The shifted index list.
	type Output;
}

impl MapSucc for HNil {
	type Output = HNil;
}

impl<N, T> MapSucc for HCons<N, T>
where
	T: MapSucc,
{
	type Output = HCons<S<N>, <T as MapSucc>::Output>;
}

/// Identity index list of `L`: `[0, 1, …, len - 1]`.
pub type Indices<L> = <L as IndicesOf>::Indices;
