//! The slot contract.
//!
//! A slot is a registered callback normalized to the signal's signature.
//! The registry stores slots type-erased; everything it later needs —
//! delivery, liveness, equality — goes through this trait.

use std::any::Any;
use std::marker::PhantomData;

/// Outcome of delivering one broadcast to one slot.
///
/// `Skipped` is the expired-weak-binding case: the call had no effect,
/// and that fact is reported instead of being swallowed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delivery {
	/// The slot ran.
	Delivered,
	/// The slot's weak target was gone; nothing ran.
	Skipped,
}

impl Delivery {
	/// Whether the slot actually ran.
	pub fn is_delivered(self) -> bool {
		matches!(self, Self::Delivered)
	}
}

/// A registered callback normalized to signature `Args`.
///
/// Implementations wrap the user callable together with whatever
/// parameter mapping or receiver binding it needs.
pub trait Slot<Args>: 'static {
	/// Deliver one broadcast to this slot.
	fn invoke(&self, args: Args) -> Delivery;

	/// The concrete adapter, for equality downcasts.
	fn as_any(&self) -> &dyn Any;

	/// Equality across type-erased registrations.
	///
	/// True only when `other` wraps the same adapter type and that
	/// adapter defines value equality. Anonymous adapters are never
	/// equal to anything, themselves included.
	fn slot_eq(&self, other: &dyn Slot<Args>) -> bool;

	/// Whether delivery can currently reach this slot's target.
	///
	/// Only weak receiver bindings ever answer `false`.
	fn is_live(&self) -> bool {
		true
	}
}

/// Marker for slots with dependable value equality.
///
/// Removal by value requires the probe's adapter to implement this,
/// turning "this callable cannot be compared" into a type error instead
/// of a removal that silently never matches.
pub trait ComparableSlot<Args>: Slot<Args> {}

/// Conversion of a callable, or a bound wrapper around one, into its
/// slot adapter.
///
/// `M` is an inference-only marker carrying the callable's parameter
/// tuple, return type and position mapping; callers leave it to the
/// solver. Each registration form has its own marker type, which keeps
/// the blanket closure conversion and the wrapper conversions from
/// overlapping.
pub trait IntoSlot<Args, M> {
	/// Adapter this callable registers as.
	type Slot: Slot<Args>;
	/// Build the adapter.
	fn into_slot(self) -> Self::Slot;
}

/// [`IntoSlot`] marker for plain closures and fn items.
pub struct ClosureMarker<P, R, Ix>(PhantomData<fn() -> (P, R, Ix)>);

/// [`IntoSlot`] marker for comparable callables wrapped by
/// [`bind::eq`](crate::bind::eq) or the `bind::funcN` constructors.
pub struct EqMarker<P, R, Ix>(PhantomData<fn() -> (P, R, Ix)>);

/// [`IntoSlot`] marker for strong receiver bindings.
pub struct MethodMarker<P, R, Ix>(PhantomData<fn() -> (P, R, Ix)>);

/// [`IntoSlot`] marker for weak receiver bindings.
pub struct WeakMarker<P, R, Ix>(PhantomData<fn() -> (P, R, Ix)>);

/// [`IntoSlot`] marker for full-signature registrations.
pub struct ExactMarker(());
