//! Constructors fixing a callable's registration form.
//!
//! [`Signal::connect`](crate::Signal::connect) takes plain closures as
//! anonymous registrations. The constructors here opt a callable into
//! something more: value equality ([`eq`] and the `funcN` family),
//! strong or weak receiver bindings (`methodN`, `weak_methodN`), or
//! full-signature direct invocation ([`exact`]). The numbered
//! constructors take genuine `fn` pointers, so passing a named function
//! coerces it to a pointer value at the call site — the moment equality
//! becomes pointer identity.

use std::sync::{Arc, Weak};

use patchbay_seq::{Func, PickSubset, Tuple};

use crate::adapter::{CmpSlot, ExactSlot};
use crate::method::{MethodSlot, WeakSlot};
use crate::slot::{EqMarker, ExactMarker, IntoSlot, MethodMarker, WeakMarker};

/// A callable registered with value equality.
pub struct Comparable<F> {
	f: F,
}

/// A callable invoked with the signal's full argument tuple.
pub struct Exact<F> {
	f: F,
}

/// A strong receiver binding awaiting registration.
pub struct BoundMethod<T, F> {
	target: Arc<T>,
	method: F,
}

/// A weak receiver binding awaiting registration.
pub struct BoundWeakMethod<T, F> {
	target: Weak<T>,
	method: F,
}

/// Opt any `PartialEq` callable into comparable registration.
pub fn eq<F>(f: F) -> Comparable<F>
where
	F: PartialEq,
{
	Comparable { f }
}

/// Register a callable against the full signature, bypassing parameter
/// matching.
///
/// This is the way around inference ambiguity: a signature like
/// `(i32, i32)` repeats a type, so a reduced callable cannot name which
/// `i32` it wants — a full-signature callable takes both.
pub fn exact<F>(f: F) -> Exact<F> {
	Exact { f }
}

impl<Args, F> IntoSlot<Args, ExactMarker> for Exact<F>
where
	Args: Tuple + 'static,
	F: Func<Args> + 'static,
{
	type Slot = ExactSlot<F>;

	fn into_slot(self) -> Self::Slot {
		ExactSlot::new(self.f)
	}
}

macro_rules! bind_ptrs {
	($($func:ident $method:ident $weak_method:ident => ($($P:ident),*));* $(;)?) => {$(
		/// Comparable registration of a `fn` pointer; equality is pointer
		/// identity.
		pub fn $func<$($P,)* R>(f: fn($($P),*) -> R) -> Comparable<fn($($P),*) -> R> {
			Comparable { f }
		}

		/// Strong binding of a receiver-first `fn` pointer to `target`.
		pub fn $method<T, $($P,)* R>(
			target: &Arc<T>,
			method: fn(&T $(, $P)*) -> R,
		) -> BoundMethod<T, fn(&T $(, $P)*) -> R> {
			BoundMethod {
				target: Arc::clone(target),
				method,
			}
		}

		/// Weak binding of a receiver-first `fn` pointer to `target`;
		/// expiry turns deliveries into skips.
		pub fn $weak_method<T, $($P,)* R>(
			target: &Arc<T>,
			method: fn(&T $(, $P)*) -> R,
		) -> BoundWeakMethod<T, fn(&T $(, $P)*) -> R> {
			BoundWeakMethod {
				target: Arc::downgrade(target),
				method,
			}
		}
	)*};
}

bind_ptrs! {
	func0 method0 weak_method0 => ();
	func1 method1 weak_method1 => (P1);
	func2 method2 weak_method2 => (P1, P2);
	func3 method3 weak_method3 => (P1, P2, P3);
	func4 method4 weak_method4 => (P1, P2, P3, P4);
	func5 method5 weak_method5 => (P1, P2, P3, P4, P5);
	func6 method6 weak_method6 => (P1, P2, P3, P4, P5, P6);
	func7 method7 weak_method7 => (P1, P2, P3, P4, P5, P6, P7);
	func8 method8 weak_method8 => (P1, P2, P3, P4, P5, P6, P7, P8);
	func9 method9 weak_method9 => (P1, P2, P3, P4, P5, P6, P7, P8, P9);
	func10 method10 weak_method10 => (P1, P2, P3, P4, P5, P6, P7, P8, P9, P10);
	func11 method11 weak_method11 => (P1, P2, P3, P4, P5, P6, P7, P8, P9, P10, P11);
	func12 method12 weak_method12 => (P1, P2, P3, P4, P5, P6, P7, P8, P9, P10, P11, P12);
}

macro_rules! bound_adapters {
	($(($($P:ident $I:ident),*));* $(;)?) => {$(
		impl<Args, F, R $(, $P, $I)*> IntoSlot<Args, EqMarker<($($P,)*), R, patchbay_seq::HList![$($I),*]>> for Comparable<F>
		where
			Args: Tuple + 'static,
			<Args as Tuple>::HList: PickSubset<patchbay_seq::HList![$($P),*], patchbay_seq::HList![$($I),*]>,
			F: Fn($($P),*) -> R + PartialEq + 'static,
			$($P: 'static, $I: 'static,)*
		{
			type Slot = CmpSlot<F, ($($P,)*), patchbay_seq::HList![$($I),*]>;

			fn into_slot(self) -> Self::Slot {
				CmpSlot::new(self.f)
			}
		}

		impl<Args, T, F, R $(, $P, $I)*> IntoSlot<Args, MethodMarker<($($P,)*), R, patchbay_seq::HList![$($I),*]>> for BoundMethod<T, F>
		where
			Args: Tuple + 'static,
			<Args as Tuple>::HList: PickSubset<patchbay_seq::HList![$($P),*], patchbay_seq::HList![$($I),*]>,
			T: 'static,
			F: Fn(&T $(, $P)*) -> R + PartialEq + 'static,
			$($P: 'static, $I: 'static,)*
		{
			type Slot = MethodSlot<T, F, ($($P,)*), patchbay_seq::HList![$($I),*]>;

			fn into_slot(self) -> Self::Slot {
				MethodSlot::new(self.target, self.method)
			}
		}

		impl<Args, T, F, R $(, $P, $I)*> IntoSlot<Args, WeakMarker<($($P,)*), R, patchbay_seq::HList![$($I),*]>> for BoundWeakMethod<T, F>
		where
			Args: Tuple + 'static,
			<Args as Tuple>::HList: PickSubset<patchbay_seq::HList![$($P),*], patchbay_seq::HList![$($I),*]>,
			T: 'static,
			F: Fn(&T $(, $P)*) -> R + PartialEq + 'static,
			$($P: 'static, $I: 'static,)*
		{
			type Slot = WeakSlot<T, F, ($($P,)*), patchbay_seq::HList![$($I),*]>;

			fn into_slot(self) -> Self::Slot {
				WeakSlot::new(self.target, self.method)
			}
		}
	)*};
}

bound_adapters! {
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

#[cfg(test)]
mod tests {
	use super::*;
	use crate::slot::{Delivery, Slot};
	use rstest::rstest;
	use std::sync::atomic::{AtomicUsize, Ordering};

	struct Gauge {
		level: AtomicUsize,
	}

	impl Gauge {
		fn raise(&self, by: usize) {
			self.level.fetch_add(by, Ordering::SeqCst);
		}
	}

	fn tick(_: u32) {}

	#[rstest]
	fn test_func1_builds_comparable_slot() {
		// Arrange
		let a = IntoSlot::<(u32,), _>::into_slot(func1(tick));
		let b = IntoSlot::<(u32,), _>::into_slot(func1(tick));

		// Assert
		assert!(Slot::<(u32,)>::slot_eq(&a, &b));
	}

	#[rstest]
	fn test_eq_wraps_fn_pointers_too() {
		// Arrange
		let a = IntoSlot::<(u32,), _>::into_slot(eq(tick as fn(u32)));
		let b = IntoSlot::<(u32,), _>::into_slot(func1(tick));

		// Assert: both roads lead to the same adapter value.
		assert!(Slot::<(u32,)>::slot_eq(&a, &b));
	}

	#[rstest]
	fn test_method1_invokes_bound_target() {
		// Arrange
		let gauge = std::sync::Arc::new(Gauge {
			level: AtomicUsize::new(0),
		});
		let slot = IntoSlot::<(usize,), _>::into_slot(method1(&gauge, Gauge::raise));

		// Act
		Slot::<(usize,)>::invoke(&slot, (4,));

		// Assert
		assert_eq!(gauge.level.load(Ordering::SeqCst), 4);
	}

	#[rstest]
	fn test_weak_method1_skips_after_drop() {
		// Arrange
		let gauge = std::sync::Arc::new(Gauge {
			level: AtomicUsize::new(0),
		});
		let slot = IntoSlot::<(usize,), _>::into_slot(weak_method1(&gauge, Gauge::raise));

		// Act
		drop(gauge);
		let outcome = Slot::<(usize,)>::invoke(&slot, (4,));

		// Assert
		assert_eq!(outcome, Delivery::Skipped);
	}

	#[rstest]
	fn test_exact_invokes_with_full_tuple() {
		// Arrange
		let seen = std::sync::Arc::new(AtomicUsize::new(0));
		let slot = {
			let seen = seen.clone();
			IntoSlot::<(usize, usize), _>::into_slot(exact(move |a: usize, b: usize| {
				seen.store(a * 10 + b, Ordering::SeqCst);
			}))
		};

		// Act
		Slot::<(usize, usize)>::invoke(&slot, (2, 5));

		// Assert
		assert_eq!(seen.load(Ordering::SeqCst), 25);
	}
}
