//! Signal/slot routing over compile-time argument matching.
//!
//! A [`Signal`] broadcasts a fixed argument signature to registered
//! slots. Slots need not take the whole signature: a callable declares
//! the parameters it wants, and the positions are matched by type at
//! compile time — reduced, reordered and receiver-bound callables all
//! register through the same [`Signal::connect`].
//!
//! # Features
//!
//! - **Subset matching**: a slot's parameters are located inside the
//!   signal signature by the trait solver; nothing is looked up at
//!   delivery time.
//! - **Registration forms**: anonymous closures, comparable `fn`
//!   pointers, strong and weak receiver bindings ([`bind`]), keyed
//!   registrations ([`SlotKey`]) and full-signature escapes.
//! - **Accountable delivery**: [`Signal::emit`] reports a
//!   [`Delivery`] per slot, with expired weak bindings skipped, not
//!   hidden.
//! - **Pluggable storage**: signals delegate to any [`SlotList`];
//!   [`SlotRegistry`] is the insertion-ordered default.
//!
//! # Quick Start
//!
//! ```
//! use patchbay_slot::{bind, Signal};
//! use std::sync::atomic::{AtomicUsize, Ordering};
//! use std::sync::Arc;
//!
//! struct Meter {
//! 	total: AtomicUsize,
//! }
//!
//! impl Meter {
//! 	fn add(&self, amount: usize) {
//! 		self.total.fetch_add(amount, Ordering::SeqCst);
//! 	}
//! }
//!
//! let meter = Arc::new(Meter {
//! 	total: AtomicUsize::new(0),
//! });
//! let mut on_sale = Signal::<(usize, f32)>::new();
//!
//! // Bound method taking only the `usize`; the `f32` is not its concern.
//! on_sale.connect(bind::method1(&meter, Meter::add));
//!
//! on_sale.emit((3, 0.2));
//! on_sale.emit((4, 0.3));
//! assert_eq!(meter.total.load(Ordering::SeqCst), 7);
//!
//! // The same binding compares equal, so it can be disconnected.
//! assert!(on_sale.disconnect(bind::method1(&meter, Meter::add)));
//! assert!(on_sale.is_empty());
//! ```

pub mod adapter;
pub mod bind;
pub mod key;
pub mod method;
pub mod registry;
pub mod signal;
pub mod slot;

pub use adapter::{CmpSlot, ExactSlot, FnSlot};
pub use key::{KeyError, SlotKey};
pub use method::{MethodSlot, WeakSlot};
pub use registry::{Broadcast, SlotEntry, SlotList, SlotRegistry};
pub use signal::{comparable, slot, Signal};
pub use slot::{ComparableSlot, Delivery, IntoSlot, Slot};
