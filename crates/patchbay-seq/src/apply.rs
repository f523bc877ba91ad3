//! Pack-level selection operations.
//!
//! Each operation consumes an argument pack, carves out the positions it
//! was asked for and forwards them — to the caller for [`get`], to a
//! callable for the `apply_*` family. Selection is by move; values the
//! selection drops are gone, values it keeps arrive exactly as passed,
//! references included.

use crate::func::Func;
use crate::hlist::{HList, Tuple};
use crate::nat::NatSub;
use crate::pick::{At, SelectIndices, SplitAt};

/// Select the `N`-th element of a pack, 0-based, consuming the pack.
///
/// Reference arguments come through as references, so a caller observes
/// mutations made through a selected `&mut`.
///
/// # Examples
///
/// ```
/// use patchbay_seq::{get, N1};
///
/// let picked = get::<N1, _>((1, "middle", 3.5));
/// assert_eq!(picked, "middle");
/// ```
///
/// Selection past the end of the pack does not compile:
///
/// ```compile_fail
/// use patchbay_seq::{get, N3};
///
/// let _ = get::<N3, _>((1, 2));
/// ```
pub fn get<N, T>(args: T) -> <<T as Tuple>::HList as At<N>>::Output
where
	T: Tuple,
	<T as Tuple>::HList: At<N>,
{
	args.into_hlist().at()
}

/// Call `f` with the first `Count` elements of the pack, dropping the
/// rest.
///
/// # Examples
///
/// ```
/// use patchbay_seq::{apply_front, N2};
///
/// fn label(id: u32, name: &str) -> String {
/// 	format!("{id}: {name}")
/// }
///
/// let line = apply_front::<N2, _, _>(label, (7, "alpha", 0.25));
/// assert_eq!(line, "7: alpha");
/// ```
pub fn apply_front<Count, F, T>(
	f: F,
	args: T,
) -> <F as Func<<<<T as Tuple>::HList as SplitAt<Count>>::Front as HList>::Tuple>>::Output
where
	T: Tuple,
	<T as Tuple>::HList: SplitAt<Count>,
	<<T as Tuple>::HList as SplitAt<Count>>::Front: HList,
	F: Func<<<<T as Tuple>::HList as SplitAt<Count>>::Front as HList>::Tuple>,
{
	let (front, _back) = args.into_hlist().split_at();
	f.call(front.flatten())
}

/// Call `f` with everything after the first `Skip` elements of the pack.
///
/// # Examples
///
/// ```
/// use patchbay_seq::{apply_back, N1};
///
/// fn sum(a: i32, b: i32) -> i32 {
/// 	a + b
/// }
///
/// let total = apply_back::<N1, _, _>(sum, ("skipped", 2, 3));
/// assert_eq!(total, 5);
/// ```
pub fn apply_back<Skip, F, T>(
	f: F,
	args: T,
) -> <F as Func<<<<T as Tuple>::HList as SplitAt<Skip>>::Back as HList>::Tuple>>::Output
where
	T: Tuple,
	<T as Tuple>::HList: SplitAt<Skip>,
	<<T as Tuple>::HList as SplitAt<Skip>>::Back: HList,
	F: Func<<<<T as Tuple>::HList as SplitAt<Skip>>::Back as HList>::Tuple>,
{
	let (_front, back) = args.into_hlist().split_at();
	f.call(back.flatten())
}

/// Call `f` with the half-open position range `Begin..End` of the pack.
///
/// `apply_range::<N0, N2, _, _>` is the first two arguments;
/// `apply_range` over the full length is the whole pack.
///
/// # Examples
///
/// ```
/// use patchbay_seq::{apply_range, N1, N3};
///
/// fn pair(a: i32, b: i32) -> (i32, i32) {
/// 	(a, b)
/// }
///
/// let picked = apply_range::<N1, N3, _, _>(pair, (0, 1, 2, 3));
/// assert_eq!(picked, (1, 2));
/// ```
///
/// An inverted range is rejected at compile time:
///
/// ```compile_fail
/// use patchbay_seq::{apply_range, N1, N3};
///
/// fn pair(a: i32, b: i32) -> (i32, i32) {
/// 	(a, b)
/// }
///
/// let _ = apply_range::<N3, N1, _, _>(pair, (0, 1, 2, 3));
/// ```
pub fn apply_range<Begin, End, F, T>(
	f: F,
	args: T,
) -> <F as Func<RangeTuple<T, Begin, End>>>::Output
where
	T: Tuple,
	End: NatSub<Begin>,
	<T as Tuple>::HList: SplitAt<Begin>,
	<<T as Tuple>::HList as SplitAt<Begin>>::Back: SplitAt<<End as NatSub<Begin>>::Output>,
	RangeList<T, Begin, End>: HList,
	F: Func<RangeTuple<T, Begin, End>>,
{
	let (_front, back) = args.into_hlist().split_at();
	let (range, _rest) = back.split_at();
	f.call(range.flatten())
}

/// The sublist of pack `T` covering positions `Begin..End`.
pub type RangeList<T, Begin, End> = <<<T as Tuple>::HList as SplitAt<Begin>>::Back as SplitAt<
	<End as NatSub<Begin>>::Output,
>>::Front;

/// [`RangeList`] flattened back to a tuple.
pub type RangeTuple<T, Begin, End> = <RangeList<T, Begin, End> as HList>::Tuple;

/// Call `f` with the elements at `Is`, in index-list order.
///
/// Indices may repeat a position's *type* but not the position itself:
/// selection moves each element out, so naming a position twice fails to
/// compile.
///
/// # Examples
///
/// ```
/// use patchbay_seq::{apply, HList, N0, N2};
///
/// fn swap(a: f64, b: i32) -> (f64, i32) {
/// 	(a, b)
/// }
///
/// let out = apply::<HList![N2, N0], _, _>(swap, (1, "unused", 2.5));
/// assert_eq!(out, (2.5, 1));
/// ```
///
/// An empty index list ignores every supplied argument:
///
/// ```
/// use patchbay_seq::{apply, HList};
///
/// let out = apply::<HList![], _, _>(|| "nothing", (1, 2, 3));
/// assert_eq!(out, "nothing");
/// ```
///
/// A repeated index would move the same argument twice and is rejected:
///
/// ```compile_fail
/// use patchbay_seq::{apply, HList, N0};
///
/// fn both(a: i32, b: i32) -> i32 {
/// 	a + b
/// }
///
/// let _ = apply::<HList![N0, N0], _, _>(both, (1, 2));
/// ```
pub fn apply<Is, F, T>(
	f: F,
	args: T,
) -> <F as Func<<<<T as Tuple>::HList as SelectIndices<Is>>::Output as HList>::Tuple>>::Output
where
	T: Tuple,
	<T as Tuple>::HList: SelectIndices<Is>,
	<<T as Tuple>::HList as SelectIndices<Is>>::Output: HList,
	F: Func<<<<T as Tuple>::HList as SelectIndices<Is>>::Output as HList>::Tuple>,
{
	f.call(args.into_hlist().select().flatten())
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::nat::{N0, N1, N2, N3, N4};
	use rstest::rstest;

	fn pair(a: i32, b: i32) -> (i32, i32) {
		(a, b)
	}

	fn triple(a: i32, b: &str, c: f64) -> (i32, &str, f64) {
		(a, b, c)
	}

	#[rstest]
	fn test_get_selects_each_position() {
		// Act & Assert
		assert_eq!(get::<N0, _>((1, "two", 3.5)), 1);
		assert_eq!(get::<N1, _>((1, "two", 3.5)), "two");
		assert_eq!(get::<N2, _>((1, "two", 3.5)), 3.5);
	}

	#[rstest]
	fn test_get_moves_ownership() {
		// Arrange
		let pack = (String::from("owned"), 2);

		// Act
		let s = get::<N0, _>(pack);

		// Assert
		assert_eq!(s, "owned");
	}

	#[rstest]
	fn test_apply_front_takes_prefix() {
		// Act
		let out = apply_front::<N2, _, _>(pair, (1, 2, 3, 4));

		// Assert
		assert_eq!(out, (1, 2));
	}

	#[rstest]
	fn test_apply_front_zero_takes_nothing() {
		// Act
		let out = apply_front::<N0, _, _>(|| 7, (1, 2));

		// Assert
		assert_eq!(out, 7);
	}

	#[rstest]
	fn test_apply_back_skips_prefix() {
		// Act
		let out = apply_back::<N2, _, _>(pair, (9, 9, 1, 2));

		// Assert
		assert_eq!(out, (1, 2));
	}

	#[rstest]
	fn test_apply_back_zero_forwards_everything() {
		// Act
		let out = apply_back::<N0, _, _>(triple, (1, "two", 3.5));

		// Assert
		assert_eq!(out, (1, "two", 3.5));
	}

	#[rstest]
	fn test_apply_range_inner_window() {
		// Act
		let out = apply_range::<N1, N3, _, _>(pair, (0, 1, 2, 3));

		// Assert
		assert_eq!(out, (1, 2));
	}

	#[rstest]
	fn test_apply_range_empty_window() {
		// Act
		let out = apply_range::<N2, N2, _, _>(|| "empty", (0, 1, 2, 3));

		// Assert
		assert_eq!(out, "empty");
	}

	#[rstest]
	fn test_apply_range_full_width_is_whole_pack() {
		// Act
		let out = apply_range::<N0, N4, _, _>(|a: i32, b: i32, c: i32, d: i32| a + b + c + d, (1, 2, 3, 4));

		// Assert
		assert_eq!(out, 10);
	}

	#[rstest]
	fn test_apply_reorders_by_index() {
		// Act
		let out = apply::<crate::HList![N2, N0], _, _>(|c: f64, a: i32| (c, a), (1, "skip", 2.5));

		// Assert
		assert_eq!(out, (2.5, 1));
	}

	#[rstest]
	fn test_apply_empty_indices_ignores_pack() {
		// Act
		let out = apply::<crate::HList![], _, _>(|| 42, (1, 2, 3));

		// Assert
		assert_eq!(out, 42);
	}

	#[rstest]
	fn test_apply_identity_indices() {
		// Act
		let out = apply::<crate::HList![N0, N1, N2], _, _>(triple, (1, "two", 3.5));

		// Assert
		assert_eq!(out, (1, "two", 3.5));
	}
}
