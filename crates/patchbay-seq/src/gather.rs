//! Group-wise argument mapping.
//!
//! [`gather`] splits a flat pack into consecutive equal-size groups, maps
//! every group through one callable, and hands the per-group results to a
//! receiver in group order.

use crate::func::Func;
use crate::hlist::{HCons, HList, HNil, Tuple};
use crate::nat::S;
use crate::pick::SplitAt;

/// Type-level partition of a list into consecutive `K`-sized chunks.
///
/// Only exact partitions exist: a remainder, or a zero `K` against a
/// nonempty list, leaves the trait unimplemented.
pub trait ChunksOf<K> {
	/// List of `K`-sized chunk lists.
	type Chunks;
	/// Split into chunks.
	fn chunks(self) -> Self::Chunks;
}

impl<K> ChunksOf<K> for HNil {
	type Chunks = HNil;

	#[inline]
	fn chunks(self) -> HNil {
		HNil
	}
}

impl<H, T, K1> ChunksOf<S<K1>> for HCons<H, T>
where
	HCons<H, T>: SplitAt<S<K1>>,
	<HCons<H, T> as SplitAt<S<K1>>>::Back: ChunksOf<S<K1>>,
{
	type Chunks = HCons<
		<HCons<H, T> as SplitAt<S<K1>>>::Front,
		<<HCons<H, T> as SplitAt<S<K1>>>::Back as ChunksOf<S<K1>>>::Chunks,
	>;

	#[inline]
	fn chunks(self) -> Self::Chunks {
		let (front, back) = self.split_at();
		HCons {
			head: front,
			tail: back.chunks(),
		}
	}
}

/// Map each chunk of a chunk list through one callable, keeping outputs
/// in chunk order.
pub trait GatherChunks<F> {
	/// Per-chunk outputs as a list.
	type Output;
	/// Call `f` on every chunk, left to right.
	fn gather_chunks(self, f: &F) -> Self::Output;
}

impl<F> GatherChunks<F> for HNil {
	type Output = HNil;

	#[inline]
	fn gather_chunks(self, _f: &F) -> HNil {
		HNil
	}
}

impl<F, C, Rest> GatherChunks<F> for HCons<C, Rest>
where
	C: HList,
	F: Func<<C as HList>::Tuple>,
	Rest: GatherChunks<F>,
{
	type Output = HCons<<F as Func<<C as HList>::Tuple>>::Output, <Rest as GatherChunks<F>>::Output>;

	#[inline]
	fn gather_chunks(self, f: &F) -> Self::Output {
		let head = f.call(self.head.flatten());
		HCons {
			head,
			tail: self.tail.gather_chunks(f),
		}
	}
}

/// Chunk list of pack `T` split into groups of `K`.
pub type Chunked<T, K> = <<T as Tuple>::HList as ChunksOf<K>>::Chunks;

/// Per-group outputs of `F` over the chunks of pack `T`.
pub type Grouped<T, K, F> = <Chunked<T, K> as GatherChunks<F>>::Output;

/// Partition `args` into consecutive groups of `K`, map each group
/// through `per_group`, then call `receiver` once with every group
/// result in order.
///
/// Groups are evaluated left to right, so a stateful `per_group` sees
/// them in pack order.
///
/// # Examples
///
/// ```
/// use patchbay_seq::{gather, N1, N2};
///
/// fn sum(a: i32, b: i32) -> i32 {
/// 	a + b
/// }
///
/// fn pair(a: i32, b: i32) -> (i32, i32) {
/// 	(a, b)
/// }
///
/// let grouped = gather::<N2, _, _, _>(pair, sum, (0, 1, 2, 3));
/// assert_eq!(grouped, (1, 5));
///
/// fn double(x: i32) -> i32 {
/// 	2 * x
/// }
///
/// fn quad(a: i32, b: i32, c: i32, d: i32) -> (i32, i32, i32, i32) {
/// 	(a, b, c, d)
/// }
///
/// let doubled = gather::<N1, _, _, _>(quad, double, (0, 1, 2, 3));
/// assert_eq!(doubled, (0, 2, 4, 6));
/// ```
///
/// A pack that does not divide evenly into groups of `K` is rejected:
///
/// ```compile_fail
/// use patchbay_seq::{gather, N2};
///
/// fn sum(a: i32, b: i32) -> i32 {
/// 	a + b
/// }
///
/// fn first(a: i32) -> i32 {
/// 	a
/// }
///
/// let _ = gather::<N2, _, _, _>(first, sum, (0, 1, 2));
/// ```
///
/// So is a zero group size over a nonempty pack:
///
/// ```compile_fail
/// use patchbay_seq::{gather, N0};
///
/// fn sole(a: i32) -> i32 {
/// 	a
/// }
///
/// let _ = gather::<N0, _, _, _>(sole, sole, (1,));
/// ```
pub fn gather<K, R, F, T>(
	receiver: R,
	per_group: F,
	args: T,
) -> <R as Func<<Grouped<T, K, F> as HList>::Tuple>>::Output
where
	T: Tuple,
	<T as Tuple>::HList: ChunksOf<K>,
	Chunked<T, K>: GatherChunks<F>,
	Grouped<T, K, F>: HList,
	R: Func<<Grouped<T, K, F> as HList>::Tuple>,
{
	let results = args.into_hlist().chunks().gather_chunks(&per_group);
	receiver.call(results.flatten())
}
