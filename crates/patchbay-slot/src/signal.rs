//! The signal facade.
//!
//! [`Signal`] owns a slot collection and normalizes every incoming
//! callable through [`IntoSlot`] before delegating, so the collection
//! only ever sees finished adapters.

use std::fmt;
use std::marker::PhantomData;
use std::ops::{AddAssign, SubAssign};

use patchbay_seq::{Func, Tuple};
use tracing::trace;

use crate::adapter::ExactSlot;
use crate::key::SlotKey;
use crate::registry::{Broadcast, SlotEntry, SlotList, SlotRegistry};
use crate::slot::{ComparableSlot, IntoSlot, Slot};

/// A broadcast endpoint with argument signature `Args`.
///
/// Connected callables declare any subset of `Args` by type, in any
/// order; delivery routes each one the positions it asked for. The
/// second type parameter is the slot collection and defaults to
/// [`SlotRegistry`].
///
/// # Examples
///
/// ```
/// use patchbay_slot::Signal;
/// use std::sync::atomic::{AtomicU32, Ordering};
/// use std::sync::Arc;
///
/// let total = Arc::new(AtomicU32::new(0));
/// let mut on_frame = Signal::<(u32, f32)>::new();
///
/// // Takes only the `u32`, by type; position is inferred.
/// {
/// 	let total = total.clone();
/// 	on_frame.connect(move |ticks: u32| {
/// 		total.fetch_add(ticks, Ordering::SeqCst);
/// 	});
/// }
///
/// on_frame.emit((3, 0.25));
/// on_frame.emit((4, 0.5));
/// assert_eq!(total.load(Ordering::SeqCst), 7);
/// ```
pub struct Signal<Args, L = SlotRegistry<Args>> {
	list: L,
	_args: PhantomData<fn(Args)>,
}

impl<Args> Signal<Args>
where
	Args: Tuple + Clone + 'static,
{
	/// Signal over the default registry.
	pub fn new() -> Self {
		Self::with_list(SlotRegistry::new())
	}
}

impl<Args> Default for Signal<Args>
where
	Args: Tuple + Clone + 'static,
{
	fn default() -> Self {
		Self::new()
	}
}

impl<Args, L> Signal<Args, L>
where
	Args: Tuple + Clone + 'static,
	L: SlotList<Args>,
{
	/// Signal over a caller-supplied collection.
	pub fn with_list(list: L) -> Self {
		Self {
			list,
			_args: PhantomData,
		}
	}

	/// Adapt `f` and register it anonymously.
	///
	/// `f` may be a closure, fn item or bound wrapper; its parameters
	/// are located inside `Args` by type. Each parameter type must
	/// occur unambiguously — a signature repeating a type needs
	/// [`connect_exact`](Self::connect_exact) instead.
	///
	/// ```compile_fail
	/// use patchbay_slot::Signal;
	///
	/// let mut sig = Signal::<(u32, String)>::new();
	/// // `bool` appears nowhere in the signature.
	/// sig.connect(|flag: bool| drop(flag));
	/// ```
	pub fn connect<F, M>(&mut self, f: F)
	where
		F: IntoSlot<Args, M>,
	{
		self.list
			.insert(SlotEntry::anonymous(Box::new(f.into_slot())));
	}

	/// Adapt `f` and register it under `key`, replacing any existing
	/// registration with the same key.
	pub fn connect_keyed<F, M>(&mut self, key: SlotKey, f: F)
	where
		F: IntoSlot<Args, M>,
	{
		trace!(key = %key, "connecting keyed slot");
		self.list
			.insert(SlotEntry::keyed(key, Box::new(f.into_slot())));
	}

	/// Register a callable taking the full signature, bypassing
	/// parameter matching.
	pub fn connect_exact<F>(&mut self, f: F)
	where
		F: Func<Args> + 'static,
	{
		self.list
			.insert(SlotEntry::anonymous(Box::new(ExactSlot::new(f))));
	}

	/// Adapt `f` and remove the first equal registration, reporting
	/// whether one was found.
	///
	/// Removal needs value equality; a plain closure registration has
	/// none and is rejected:
	///
	/// ```compile_fail
	/// use patchbay_slot::Signal;
	///
	/// let mut sig = Signal::<(u32,)>::new();
	/// sig.disconnect(|v: u32| drop(v));
	/// ```
	pub fn disconnect<F, M>(&mut self, f: F) -> bool
	where
		F: IntoSlot<Args, M>,
		<F as IntoSlot<Args, M>>::Slot: ComparableSlot<Args>,
	{
		let probe = f.into_slot();
		self.list.remove_first(&probe)
	}

	/// Adapt `f` and remove every equal registration, returning how
	/// many went.
	pub fn disconnect_all_of<F, M>(&mut self, f: F) -> usize
	where
		F: IntoSlot<Args, M>,
		<F as IntoSlot<Args, M>>::Slot: ComparableSlot<Args>,
	{
		let probe = f.into_slot();
		self.list.remove_matching(&probe)
	}

	/// Remove the registration under `key`, reporting whether one was
	/// found.
	pub fn disconnect_key(&mut self, key: &SlotKey) -> bool {
		self.list.remove_key(key)
	}

	/// Remove every registration.
	pub fn disconnect_all(&mut self) {
		self.list.clear();
	}

	/// Drop weak registrations whose targets are gone, returning how
	/// many went.
	pub fn prune_expired(&mut self) -> usize {
		self.list.prune_expired()
	}

	/// Broadcast to every registration in collection order, cloning the
	/// arguments per slot.
	pub fn emit(&self, args: Args) -> Broadcast {
		self.list.broadcast(args)
	}

	/// Number of registrations.
	pub fn len(&self) -> usize {
		self.list.len()
	}

	/// Whether nothing is registered.
	pub fn is_empty(&self) -> bool {
		self.list.is_empty()
	}

	/// The underlying collection.
	pub fn list(&self) -> &L {
		&self.list
	}
}

impl<Args, L> fmt::Debug for Signal<Args, L>
where
	L: fmt::Debug,
{
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Signal").field("list", &self.list).finish()
	}
}

/// Erase a callable into a boxed slot for `+=` registration.
///
/// # Examples
///
/// ```
/// use patchbay_slot::{slot, Signal};
///
/// let mut on_change = Signal::<(u32,)>::new();
/// on_change += slot(|v: u32| drop(v));
/// assert_eq!(on_change.len(), 1);
/// ```
pub fn slot<Args, F, M>(f: F) -> Box<dyn Slot<Args>>
where
	F: IntoSlot<Args, M>,
{
	Box::new(f.into_slot())
}

/// Erase a comparable callable into a probe for `-=` removal.
///
/// # Examples
///
/// ```
/// use patchbay_slot::{bind, comparable, slot, Signal};
///
/// fn on_tick(_v: u32) {}
///
/// let mut sig = Signal::<(u32,)>::new();
/// sig += slot(bind::func1(on_tick));
/// sig -= comparable(bind::func1(on_tick));
/// assert!(sig.is_empty());
/// ```
pub fn comparable<Args, F, M>(f: F) -> Box<dyn ComparableSlot<Args>>
where
	F: IntoSlot<Args, M>,
	<F as IntoSlot<Args, M>>::Slot: ComparableSlot<Args>,
{
	Box::new(f.into_slot())
}

impl<Args, L> AddAssign<Box<dyn Slot<Args>>> for Signal<Args, L>
where
	Args: Tuple + Clone + 'static,
	L: SlotList<Args>,
{
	fn add_assign(&mut self, slot: Box<dyn Slot<Args>>) {
		self.list.insert(SlotEntry::anonymous(slot));
	}
}

impl<Args, L> SubAssign<Box<dyn ComparableSlot<Args>>> for Signal<Args, L>
where
	Args: Tuple + Clone + 'static,
	L: SlotList<Args>,
{
	fn sub_assign(&mut self, probe: Box<dyn ComparableSlot<Args>>) {
		let probe: &dyn Slot<Args> = &*probe;
		self.list.remove_first(probe);
	}
}
