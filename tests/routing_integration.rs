//! Integration tests for the facade crate
//!
//! Tests that the selection algebra and the signal surface compose
//! through the prelude:
//! - Selection feeding values into signal emissions
//! - Signals registering reduced, bound and keyed slots together
//! - Broadcast accounting across mixed registration forms

use patchbay::prelude::*;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

struct Mixer {
	level: AtomicUsize,
}

impl Mixer {
	fn new() -> Arc<Self> {
		Arc::new(Self {
			level: AtomicUsize::new(0),
		})
	}

	fn raise(&self, by: usize) {
		self.level.fetch_add(by, Ordering::SeqCst);
	}
}

fn silence(_by: usize) {}

#[test]
fn test_selection_feeds_signal_emission() {
	// Setup a signal fed from a wider pack
	let mixer = Mixer::new();
	let mut on_level = Signal::<(usize,)>::new();
	on_level.connect(bind::method1(&mixer, Mixer::raise));

	// Select the payload out of a transport-shaped pack and emit it
	let payload = get::<N2, _>(("header", 0xFF_u8, 12_usize));
	on_level.emit((payload,));

	// Verify the routed value arrived
	assert_eq!(mixer.level.load(Ordering::SeqCst), 12);
}

#[test]
fn test_gather_output_drives_signal() {
	// Setup a signal whose slot records the gathered result
	let mixer = Mixer::new();
	let mut on_total = Signal::<(usize,)>::new();
	on_total.connect(bind::method1(&mixer, Mixer::raise));

	// Sum adjacent pairs, then emit the combined total
	fn sum(a: usize, b: usize) -> usize {
		a + b
	}
	let total = gather::<N2, _, _, _>(sum, sum, (1_usize, 2_usize, 3_usize, 4_usize));
	on_total.emit((total,));

	// Verify 3 + 7 arrived as one emission
	assert_eq!(mixer.level.load(Ordering::SeqCst), 10);
}

#[test]
fn test_mixed_registration_forms_share_a_signal() {
	// Setup one signal carrying every registration form
	let mixer = Mixer::new();
	let seen = Arc::new(AtomicUsize::new(0));
	let mut on_level = Signal::<(usize, &'static str)>::new();

	on_level.connect(bind::method1(&mixer, Mixer::raise));
	on_level.connect_keyed(SlotKey::new("trace_tag"), {
		let seen = seen.clone();
		move |_tag: &'static str| {
			seen.fetch_add(1, Ordering::SeqCst);
		}
	});
	on_level += slot(bind::func1(silence));

	// Emit once
	let outcome = on_level.emit((6, "fade"));

	// Verify every form delivered
	assert_eq!(outcome.delivered(), 3);
	assert_eq!(mixer.level.load(Ordering::SeqCst), 6);
	assert_eq!(seen.load(Ordering::SeqCst), 1);

	// Unwind each form its own way
	assert!(on_level.disconnect(bind::method1(&mixer, Mixer::raise)));
	assert!(on_level.disconnect_key(&SlotKey::new("trace_tag")));
	on_level -= comparable(bind::func1(silence));
	assert!(on_level.is_empty());
}

#[test]
fn test_apply_reorders_into_slot_signature() {
	// Setup a signal over a (name, id) pair
	let log = Arc::new(AtomicUsize::new(0));
	let mut on_pair = Signal::<(usize, usize)>::new();
	{
		let log = log.clone();
		on_pair.connect_exact(move |a: usize, b: usize| {
			log.store(a * 100 + b, Ordering::SeqCst);
		});
	}

	// Reorder a pack before emission
	let flipped = apply::<HList![N1, N0], _, _>(|a: usize, b: usize| (a, b), (2_usize, 9_usize));
	on_pair.emit(flipped);

	// Verify the reordered pair came through intact
	assert_eq!(log.load(Ordering::SeqCst), 902);
}
