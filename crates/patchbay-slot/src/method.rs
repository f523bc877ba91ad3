//! Receiver-bound slots.
//!
//! Strong bindings keep their receiver alive for the registration's
//! lifetime; weak bindings let it go and report
//! [`Delivery::Skipped`] once it has. Equality is receiver identity plus
//! method pointer equality, so re-binding the same method to the same
//! object compares equal.

use std::any::Any;
use std::marker::PhantomData;
use std::sync::{Arc, Weak};

use patchbay_seq::{HList, Method, PickSubset, Tuple};

use crate::slot::{ComparableSlot, Delivery, Slot};

/// Strong receiver binding.
pub struct MethodSlot<T, F, P, Ix> {
	target: Arc<T>,
	method: F,
	_marker: PhantomData<fn() -> (P, Ix)>,
}

impl<T, F, P, Ix> MethodSlot<T, F, P, Ix> {
	pub(crate) fn new(target: Arc<T>, method: F) -> Self {
		Self {
			target,
			method,
			_marker: PhantomData,
		}
	}
}

impl<Args, T, F, P, Ix> Slot<Args> for MethodSlot<T, F, P, Ix>
where
	Args: Tuple + 'static,
	<Args as Tuple>::HList: PickSubset<<P as Tuple>::HList, Ix>,
	T: 'static,
	F: Method<T, P> + PartialEq + 'static,
	P: Tuple + 'static,
	Ix: 'static,
{
	fn invoke(&self, args: Args) -> Delivery {
		let (picked, _rest) = args.into_hlist().pick_subset();
		self.method.invoke(&self.target, picked.flatten());
		Delivery::Delivered
	}

	fn as_any(&self) -> &dyn Any {
		self
	}

	fn slot_eq(&self, other: &dyn Slot<Args>) -> bool {
		other
			.as_any()
			.downcast_ref::<Self>()
			.is_some_and(|other| Arc::ptr_eq(&self.target, &other.target) && self.method == other.method)
	}
}

impl<Args, T, F, P, Ix> ComparableSlot<Args> for MethodSlot<T, F, P, Ix>
where
	Args: Tuple + 'static,
	<Args as Tuple>::HList: PickSubset<<P as Tuple>::HList, Ix>,
	T: 'static,
	F: Method<T, P> + PartialEq + 'static,
	P: Tuple + 'static,
	Ix: 'static,
{
}

/// Weak receiver binding: expiry turns deliveries into skips.
pub struct WeakSlot<T, F, P, Ix> {
	target: Weak<T>,
	method: F,
	_marker: PhantomData<fn() -> (P, Ix)>,
}

impl<T, F, P, Ix> WeakSlot<T, F, P, Ix> {
	pub(crate) fn new(target: Weak<T>, method: F) -> Self {
		Self {
			target,
			method,
			_marker: PhantomData,
		}
	}
}

impl<Args, T, F, P, Ix> Slot<Args> for WeakSlot<T, F, P, Ix>
where
	Args: Tuple + 'static,
	<Args as Tuple>::HList: PickSubset<<P as Tuple>::HList, Ix>,
	T: 'static,
	F: Method<T, P> + PartialEq + 'static,
	P: Tuple + 'static,
	Ix: 'static,
{
	fn invoke(&self, args: Args) -> Delivery {
		let Some(target) = self.target.upgrade() else {
			return Delivery::Skipped;
		};
		let (picked, _rest) = args.into_hlist().pick_subset();
		self.method.invoke(&target, picked.flatten());
		Delivery::Delivered
	}

	fn as_any(&self) -> &dyn Any {
		self
	}

	fn slot_eq(&self, other: &dyn Slot<Args>) -> bool {
		other
			.as_any()
			.downcast_ref::<Self>()
			.is_some_and(|other| Weak::ptr_eq(&self.target, &other.target) && self.method == other.method)
	}

	fn is_live(&self) -> bool {
		self.target.strong_count() > 0
	}
}

impl<Args, T, F, P, Ix> ComparableSlot<Args> for WeakSlot<T, F, P, Ix>
where
	Args: Tuple + 'static,
	<Args as Tuple>::HList: PickSubset<<P as Tuple>::HList, Ix>,
	T: 'static,
	F: Method<T, P> + PartialEq + 'static,
	P: Tuple + 'static,
	Ix: 'static,
{
}
