//! Slot storage and broadcast.
//!
//! [`SlotList`] is the collection contract a signal delegates to;
//! [`SlotRegistry`] is the provided insertion-ordered implementation.
//! Mutation goes through `&mut self`: sharing a registry across threads
//! is its owner's concern, not this module's.

use std::fmt;

use tracing::trace;

use crate::key::SlotKey;
use crate::slot::{Delivery, Slot};

/// One registration: an optional key plus the boxed adapter.
pub struct SlotEntry<Args> {
	key: Option<SlotKey>,
	slot: Box<dyn Slot<Args>>,
}

impl<Args> SlotEntry<Args> {
	/// Entry without a key.
	pub fn anonymous(slot: Box<dyn Slot<Args>>) -> Self {
		Self { key: None, slot }
	}

	/// Entry that replaces any same-keyed registration on insert.
	pub fn keyed(key: SlotKey, slot: Box<dyn Slot<Args>>) -> Self {
		Self {
			key: Some(key),
			slot,
		}
	}

	/// The registration key, if any.
	pub fn key(&self) -> Option<&SlotKey> {
		self.key.as_ref()
	}

	/// The adapter.
	pub fn slot(&self) -> &dyn Slot<Args> {
		&*self.slot
	}
}

impl<Args> fmt::Debug for SlotEntry<Args> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("SlotEntry").field("key", &self.key).finish()
	}
}

/// Ordered per-slot outcomes of one broadcast.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Broadcast {
	outcomes: Vec<Delivery>,
}

impl Broadcast {
	/// Outcomes in registration order.
	pub fn outcomes(&self) -> &[Delivery] {
		&self.outcomes
	}

	/// Number of slots that ran.
	pub fn delivered(&self) -> usize {
		self.outcomes.iter().filter(|d| d.is_delivered()).count()
	}

	/// Number of slots skipped over expired targets.
	pub fn skipped(&self) -> usize {
		self.outcomes.len() - self.delivered()
	}

	/// Number of registrations the broadcast visited.
	pub fn len(&self) -> usize {
		self.outcomes.len()
	}

	/// Whether the broadcast visited no registrations.
	pub fn is_empty(&self) -> bool {
		self.outcomes.is_empty()
	}
}

impl IntoIterator for Broadcast {
	type Item = Delivery;
	type IntoIter = std::vec::IntoIter<Delivery>;

	fn into_iter(self) -> Self::IntoIter {
		self.outcomes.into_iter()
	}
}

impl FromIterator<Delivery> for Broadcast {
	fn from_iter<I: IntoIterator<Item = Delivery>>(iter: I) -> Self {
		Self {
			outcomes: iter.into_iter().collect(),
		}
	}
}

/// Collection contract behind a signal.
///
/// The signal adapts callables and hands finished entries down; the
/// collection owns ordering, replacement and removal.
pub trait SlotList<Args> {
	/// Store an entry. A keyed entry replaces any existing entry under
	/// the same key; order is otherwise insertion order.
	fn insert(&mut self, entry: SlotEntry<Args>);

	/// Remove the first entry equal to `probe`, reporting whether one
	/// was found.
	fn remove_first(&mut self, probe: &dyn Slot<Args>) -> bool;

	/// Remove every entry equal to `probe`, returning how many went.
	fn remove_matching(&mut self, probe: &dyn Slot<Args>) -> usize;

	/// Remove the entry under `key`, reporting whether one was found.
	fn remove_key(&mut self, key: &SlotKey) -> bool;

	/// Drop entries whose targets have expired, returning how many went.
	fn prune_expired(&mut self) -> usize;

	/// Remove everything.
	fn clear(&mut self);

	/// Number of registrations.
	fn len(&self) -> usize;

	/// Whether no registrations exist.
	fn is_empty(&self) -> bool {
		self.len() == 0
	}

	/// Invoke every registration in collection order, cloning the
	/// arguments per slot.
	fn broadcast(&self, args: Args) -> Broadcast
	where
		Args: Clone;
}

/// Insertion-ordered slot collection.
pub struct SlotRegistry<Args> {
	entries: Vec<SlotEntry<Args>>,
}

impl<Args> SlotRegistry<Args> {
	/// Empty registry.
	pub fn new() -> Self {
		Self {
			entries: Vec::new(),
		}
	}

	/// Registered entries in order.
	pub fn entries(&self) -> &[SlotEntry<Args>] {
		&self.entries
	}
}

impl<Args> Default for SlotRegistry<Args> {
	fn default() -> Self {
		Self::new()
	}
}

impl<Args> fmt::Debug for SlotRegistry<Args> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("SlotRegistry")
			.field("len", &self.entries.len())
			.finish()
	}
}

impl<Args: 'static> SlotList<Args> for SlotRegistry<Args> {
	fn insert(&mut self, entry: SlotEntry<Args>) {
		// Remove any existing registration under the same key
		if let Some(key) = entry.key() {
			let before = self.entries.len();
			self.entries.retain(|e| e.key() != Some(key));
			if self.entries.len() < before {
				trace!(key = %key, "replaced keyed slot");
			}
		}
		self.entries.push(entry);
	}

	fn remove_first(&mut self, probe: &dyn Slot<Args>) -> bool {
		match self.entries.iter().position(|e| e.slot().slot_eq(probe)) {
			Some(index) => {
				self.entries.remove(index);
				true
			}
			None => false,
		}
	}

	fn remove_matching(&mut self, probe: &dyn Slot<Args>) -> usize {
		let before = self.entries.len();
		self.entries.retain(|e| !e.slot().slot_eq(probe));
		before - self.entries.len()
	}

	fn remove_key(&mut self, key: &SlotKey) -> bool {
		match self.entries.iter().position(|e| e.key() == Some(key)) {
			Some(index) => {
				self.entries.remove(index);
				true
			}
			None => false,
		}
	}

	fn prune_expired(&mut self) -> usize {
		let before = self.entries.len();
		self.entries.retain(|e| e.slot().is_live());
		let removed = before - self.entries.len();
		if removed > 0 {
			trace!(removed, "pruned expired slots");
		}
		removed
	}

	fn clear(&mut self) {
		self.entries.clear();
	}

	fn len(&self) -> usize {
		self.entries.len()
	}

	fn broadcast(&self, args: Args) -> Broadcast
	where
		Args: Clone,
	{
		trace!(slots = self.entries.len(), "broadcasting");
		self.entries
			.iter()
			.map(|e| e.slot().invoke(args.clone()))
			.collect()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::bind;
	use crate::slot::IntoSlot;
	use rstest::rstest;
	use std::sync::atomic::{AtomicUsize, Ordering};
	use std::sync::Arc;

	fn tick(_: u32) {}

	fn tock(_: u32) {}

	fn keyed_tick(key: &'static str) -> SlotEntry<(u32,)> {
		SlotEntry::keyed(
			SlotKey::new(key),
			Box::new(IntoSlot::<(u32,), _>::into_slot(bind::func1(tick))),
		)
	}

	#[rstest]
	fn test_keyed_insert_replaces_same_key() {
		// Arrange
		let mut registry = SlotRegistry::new();
		registry.insert(keyed_tick("refresh"));

		// Act
		registry.insert(keyed_tick("refresh"));

		// Assert
		assert_eq!(registry.len(), 1);
	}

	#[rstest]
	fn test_keyed_insert_keeps_other_keys() {
		// Arrange
		let mut registry = SlotRegistry::new();
		registry.insert(keyed_tick("refresh"));

		// Act
		registry.insert(keyed_tick("persist"));

		// Assert
		assert_eq!(registry.len(), 2);
	}

	#[rstest]
	fn test_remove_first_takes_one_duplicate() {
		// Arrange
		let mut registry: SlotRegistry<(u32,)> = SlotRegistry::new();
		let entry = || {
			SlotEntry::anonymous(Box::new(IntoSlot::<(u32,), _>::into_slot(bind::func1(
				tick,
			))))
		};
		registry.insert(entry());
		registry.insert(entry());

		// Act
		let probe = IntoSlot::<(u32,), _>::into_slot(bind::func1(tick));
		let removed = registry.remove_first(&probe);

		// Assert
		assert!(removed);
		assert_eq!(registry.len(), 1);
	}

	#[rstest]
	fn test_remove_matching_takes_all_duplicates() {
		// Arrange
		let mut registry: SlotRegistry<(u32,)> = SlotRegistry::new();
		for _ in 0..3 {
			registry.insert(SlotEntry::anonymous(Box::new(
				IntoSlot::<(u32,), _>::into_slot(bind::func1(tick)),
			)));
		}
		registry.insert(SlotEntry::anonymous(Box::new(
			IntoSlot::<(u32,), _>::into_slot(bind::func1(tock)),
		)));

		// Act
		let probe = IntoSlot::<(u32,), _>::into_slot(bind::func1(tick));
		let removed = registry.remove_matching(&probe);

		// Assert
		assert_eq!(removed, 3);
		assert_eq!(registry.len(), 1);
	}

	#[rstest]
	fn test_remove_key_misses_absent_key() {
		// Arrange
		let mut registry: SlotRegistry<(u32,)> = SlotRegistry::new();
		registry.insert(keyed_tick("present"));

		// Act & Assert
		assert!(!registry.remove_key(&SlotKey::new("absent")));
		assert!(registry.remove_key(&SlotKey::new("present")));
		assert!(registry.is_empty());
	}

	#[rstest]
	fn test_broadcast_visits_in_insertion_order() {
		// Arrange
		let seen = Arc::new(AtomicUsize::new(0));
		let mut registry = SlotRegistry::new();
		for weight in [1_usize, 10, 100] {
			let seen = seen.clone();
			registry.insert(SlotEntry::anonymous(Box::new(
				IntoSlot::<(usize,), _>::into_slot(move |by: usize| {
					// Shift earlier sums left so order is visible
					seen.store(seen.load(Ordering::SeqCst) * 10 + weight * by, Ordering::SeqCst);
				}),
			)));
		}

		// Act
		let outcome = registry.broadcast((1,));

		// Assert: 1, then 1 * 10 + 10, then 20 * 10 + 100
		assert_eq!(outcome.delivered(), 3);
		assert_eq!(seen.load(Ordering::SeqCst), 300);
	}

	#[rstest]
	fn test_broadcast_on_empty_registry() {
		// Arrange
		let registry: SlotRegistry<(u32,)> = SlotRegistry::new();

		// Act
		let outcome = registry.broadcast((7,));

		// Assert
		assert!(outcome.is_empty());
		assert_eq!(outcome.delivered(), 0);
	}

	#[rstest]
	fn test_prune_expired_keeps_live_entries() {
		// Arrange
		struct Sink;
		impl Sink {
			fn accept(&self, _v: u32) {}
		}
		let kept = Arc::new(Sink);
		let dropped = Arc::new(Sink);
		let mut registry: SlotRegistry<(u32,)> = SlotRegistry::new();
		registry.insert(SlotEntry::anonymous(Box::new(
			IntoSlot::<(u32,), _>::into_slot(bind::weak_method1(&kept, Sink::accept)),
		)));
		registry.insert(SlotEntry::anonymous(Box::new(
			IntoSlot::<(u32,), _>::into_slot(bind::weak_method1(&dropped, Sink::accept)),
		)));

		// Act
		drop(dropped);
		let removed = registry.prune_expired();

		// Assert
		assert_eq!(removed, 1);
		assert_eq!(registry.len(), 1);
	}
}
