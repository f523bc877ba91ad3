//! Functor adapters: a user callable normalized to the signal signature.
//!
//! Three forms, by how much the solver is asked to do:
//!
//! - [`ExactSlot`] invokes with the full argument tuple, no parameter
//!   analysis. It is the escape hatch for signatures whose repeated
//!   parameter types make subset inference ambiguous.
//! - [`FnSlot`] carries an inferred position mapping and feeds the
//!   callable exactly the parameters it declared, in its own order.
//!   Anonymous: never equal to anything.
//! - [`CmpSlot`] is the same matched form for callables with
//!   `PartialEq`. Equality delegates to the wrapped values, which for
//!   `fn` pointers is pointer identity.
//!
//! Plain closures and fn items convert to [`FnSlot`] implicitly; the
//! other forms are opted into through [`crate::bind`].

use std::any::Any;
use std::marker::PhantomData;

use patchbay_seq::{Func, HList, PickSubset, Tuple};

use crate::slot::{ClosureMarker, ComparableSlot, Delivery, IntoSlot, Slot};

/// Direct-invoke adapter: the callable takes the full signature.
pub struct ExactSlot<F> {
	f: F,
}

impl<F> ExactSlot<F> {
	pub(crate) fn new(f: F) -> Self {
		Self { f }
	}
}

impl<Args, F> Slot<Args> for ExactSlot<F>
where
	Args: Tuple + 'static,
	F: Func<Args> + 'static,
{
	fn invoke(&self, args: Args) -> Delivery {
		self.f.call(args);
		Delivery::Delivered
	}

	fn as_any(&self) -> &dyn Any {
		self
	}

	fn slot_eq(&self, _other: &dyn Slot<Args>) -> bool {
		false
	}
}

/// Matched adapter without equality; an anonymous registration.
pub struct FnSlot<F, P, Ix> {
	f: F,
	_marker: PhantomData<fn() -> (P, Ix)>,
}

impl<F, P, Ix> FnSlot<F, P, Ix> {
	pub(crate) fn new(f: F) -> Self {
		Self {
			f,
			_marker: PhantomData,
		}
	}
}

impl<Args, F, P, Ix> Slot<Args> for FnSlot<F, P, Ix>
where
	Args: Tuple + 'static,
	<Args as Tuple>::HList: PickSubset<<P as Tuple>::HList, Ix>,
	P: Tuple + 'static,
	F: Func<P> + 'static,
	Ix: 'static,
{
	fn invoke(&self, args: Args) -> Delivery {
		let (picked, _rest) = args.into_hlist().pick_subset();
		self.f.call(picked.flatten());
		Delivery::Delivered
	}

	fn as_any(&self) -> &dyn Any {
		self
	}

	fn slot_eq(&self, _other: &dyn Slot<Args>) -> bool {
		false
	}
}

/// Matched adapter over a `PartialEq` callable.
pub struct CmpSlot<F, P, Ix> {
	f: F,
	_marker: PhantomData<fn() -> (P, Ix)>,
}

impl<F, P, Ix> CmpSlot<F, P, Ix> {
	pub(crate) fn new(f: F) -> Self {
		Self {
			f,
			_marker: PhantomData,
		}
	}
}

impl<Args, F, P, Ix> Slot<Args> for CmpSlot<F, P, Ix>
where
	Args: Tuple + 'static,
	<Args as Tuple>::HList: PickSubset<<P as Tuple>::HList, Ix>,
	P: Tuple + 'static,
	F: Func<P> + PartialEq + 'static,
	Ix: 'static,
{
	fn invoke(&self, args: Args) -> Delivery {
		let (picked, _rest) = args.into_hlist().pick_subset();
		self.f.call(picked.flatten());
		Delivery::Delivered
	}

	fn as_any(&self) -> &dyn Any {
		self
	}

	fn slot_eq(&self, other: &dyn Slot<Args>) -> bool {
		other
			.as_any()
			.downcast_ref::<Self>()
			.is_some_and(|other| self.f == other.f)
	}
}

impl<Args, F, P, Ix> ComparableSlot<Args> for CmpSlot<F, P, Ix>
where
	Args: Tuple + 'static,
	<Args as Tuple>::HList: PickSubset<<P as Tuple>::HList, Ix>,
	P: Tuple + 'static,
	F: Func<P> + PartialEq + 'static,
	Ix: 'static,
{
}

macro_rules! closure_adapters {
	($(($($P:ident $I:ident),*));* $(;)?) => {$(
		impl<Args, F, R $(, $P, $I)*> IntoSlot<Args, ClosureMarker<($($P,)*), R, patchbay_seq::HList![$($I),*]>> for F
		where
			Args: Tuple + 'static,
			<Args as Tuple>::HList: PickSubset<patchbay_seq::HList![$($P),*], patchbay_seq::HList![$($I),*]>,
			F: Fn($($P),*) -> R + 'static,
			$($P: 'static, $I: 'static,)*
		{
			type Slot = FnSlot<F, ($($P,)*), patchbay_seq::HList![$($I),*]>;

			fn into_slot(self) -> Self::Slot {
				FnSlot::new(self)
			}
		}
	)*};
}

closure_adapters! {
	();
	(P1 I1);
	(P1 I1, P2 I2);
	(P1 I1, P2 I2, P3 I3);
	(P1 I1, P2 I2, P3 I3, P4 I4);
	(P1 I1, P2 I2, P3 I3, P4 I4, P5 I5);
	(P1 I1, P2 I2, P3 I3, P4 I4, P5 I5, P6 I6);
	(P1 I1, P2 I2, P3 I3, P4 I4, P5 I5, P6 I6, P7 I7);
	(P1 I1, P2 I2, P3 I3, P4 I4, P5 I5, P6 I6, P7 I7, P8 I8);
	(P1 I1, P2 I2, P3 I3, P4 I4, P5 I5, P6 I6, P7 I7, P8 I8, P9 I9);
	(P1 I1, P2 I2, P3 I3, P4 I4, P5 I5, P6 I6, P7 I7, P8 I8, P9 I9, P10 I10);
	(P1 I1, P2 I2, P3 I3, P4 I4, P5 I5, P6 I6, P7 I7, P8 I8, P9 I9, P10 I10, P11 I11);
	(P1 I1, P2 I2, P3 I3, P4 I4, P5 I5, P6 I6, P7 I7, P8 I8, P9 I9, P10 I10, P11 I11, P12 I12);
}
