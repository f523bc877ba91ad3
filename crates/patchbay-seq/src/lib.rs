//! Compile-time argument lists and the selection algebra over them.
//!
//! Everything here resolves at type-check time; the runtime cost of a
//! selection is the moves it forwards. Argument packs are plain tuples
//! at the API surface and cons-lists ([`HCons`]/[`HNil`]) underneath,
//! with Peano numbers ([`N0`]..=[`N12`]) naming positions.
//!
//! # Features
//!
//! - **Positional selection**: [`get`], [`apply_front`], [`apply_back`],
//!   [`apply_range`] and index-list [`apply()`] carve a pack up by
//!   position, by move, with out-of-range and repeated positions
//!   rejected at compile time.
//! - **Type-directed matching**: [`PickOne`] and [`PickSubset`] let the
//!   trait solver find where a callable's parameters live inside a
//!   larger signature.
//! - **Grouping**: [`gather()`] maps consecutive equal-size argument
//!   groups through one callable and forwards the results.
//! - **Callable reflection**: [`Func`] and [`Method`] describe closures
//!   and `fn` pointers by parameter tuple and return type.
//!
//! # Quick Start
//!
//! ```
//! use patchbay_seq::{apply_front, gather, get, N1, N2};
//!
//! fn label(id: u32, name: &str) -> String {
//! 	format!("{id}:{name}")
//! }
//!
//! assert_eq!(get::<N1, _>((4_u32, "lines")), "lines");
//! assert_eq!(apply_front::<N2, _, _>(label, (4_u32, "lines", 0.5)), "4:lines");
//!
//! fn sum(a: i32, b: i32) -> i32 {
//! 	a + b
//! }
//!
//! fn pair(a: i32, b: i32) -> (i32, i32) {
//! 	(a, b)
//! }
//!
//! assert_eq!(gather::<N2, _, _, _>(pair, sum, (0, 1, 2, 3)), (1, 5));
//! ```

pub mod hlist;
pub mod nat;
pub mod pick;

pub mod apply;
pub mod func;
pub mod gather;

pub use apply::{apply, apply_back, apply_front, apply_range, get, RangeList, RangeTuple};
pub use func::{Func, Method};
pub use gather::{gather, Chunked, ChunksOf, GatherChunks, Grouped};
pub use hlist::{Combine, HCons, HList, HNil, Tuple};
pub use nat::{Nat, NatSub, S, Z};
pub use nat::{N0, N1, N10, N11, N12, N2, N3, N4, N5, N6, N7, N8, N9};
pub use pick::{
	At, ExtractAt, Indices, IndicesOf, MapSucc, PickOne, PickSubset, SelectIndices, SplitAt, Taken,
};
