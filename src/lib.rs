//! # Patchbay
//!
//! Compile-time argument routing and signal/slot dispatch.
//!
//! Named after the studio patchbay: a panel that routes any output jack
//! to any input jack without resoldering. Here the jacks are argument
//! positions — callables declare the parameters they want, and the
//! routing from a broadcast signature to each callable is worked out by
//! the trait solver, before the program runs.
//!
//! ## Core Principles
//!
//! - **Selection is compile time**: positions, subsets and groupings
//!   resolve during type checking; delivery is plain moves and calls
//! - **Mismatch is a build failure**: an out-of-range index, a repeated
//!   position or an unmatchable parameter never reaches runtime
//! - **Expiry is reported**: weak receiver bindings skip, and every
//!   broadcast accounts for who ran and who was skipped
//!
//! ## Crates
//!
//! - [`patchbay_seq`](seq) - argument packs, positions and the
//!   selection algebra (`get`, `apply_*`, `gather`)
//! - [`patchbay_slot`](slots) - the [`Signal`] facade, slot adapters,
//!   registration keys and storage
//!
//! ## Quick Example
//!
//! ```
//! use patchbay::prelude::*;
//! use std::sync::atomic::{AtomicUsize, Ordering};
//! use std::sync::Arc;
//!
//! // Pick apart a pack by position.
//! assert_eq!(get::<N1, _>((7, "mid", 0.5)), "mid");
//!
//! // Group-wise mapping: sum adjacent pairs, then combine the sums.
//! fn sum(a: i32, b: i32) -> i32 {
//! 	a + b
//! }
//! assert_eq!(gather::<N2, _, _, _>(sum, sum, (0, 1, 2, 3)), 6);
//!
//! // A signal routes each slot the parameters it declared.
//! let total = Arc::new(AtomicUsize::new(0));
//! let mut on_event = Signal::<(usize, &'static str)>::new();
//! {
//! 	let total = total.clone();
//! 	on_event.connect(move |amount: usize| {
//! 		total.fetch_add(amount, Ordering::SeqCst);
//! 	});
//! }
//! on_event.emit((5, "startup"));
//! assert_eq!(total.load(Ordering::SeqCst), 5);
//! ```

pub use patchbay_seq as seq;
pub use patchbay_slot as slots;

pub use patchbay_seq::{
	apply, apply_back, apply_front, apply_range, gather, get, Func, HCons, HList, HNil, Method,
	Nat, NatSub, PickOne, PickSubset, Tuple, N0, N1, N10, N11, N12, N2, N3, N4, N5, N6, N7, N8,
	N9, S, Z,
};
pub use patchbay_slot::{
	bind, comparable, slot, Broadcast, ComparableSlot, Delivery, IntoSlot, KeyError, Signal, Slot,
	SlotKey, SlotList, SlotRegistry,
};

/// Single-import surface for the common types and operations.
pub mod prelude {
	pub use patchbay_seq::{
		apply, apply_back, apply_front, apply_range, gather, get, hlist, hlist_pat, Func, HCons,
		HList, HNil, Method, Tuple, N0, N1, N10, N11, N12, N2, N3, N4, N5, N6, N7, N8, N9,
	};
	pub use patchbay_slot::{
		bind, comparable, slot, Broadcast, Delivery, Signal, SlotKey, SlotList, SlotRegistry,
	};
}
