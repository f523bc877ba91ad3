//! Callable reflection: what a callable takes and what it returns.
//!
//! [`Func`] is the free-callable view, [`Method`] the receiver-first
//! view. Both are implemented for closures and `fn` pointers of up to
//! twelve parameters. The implementing `Fn` bound is what pins a
//! callable to a single parameter list, so anything the solver cannot
//! pin fails to compile instead of guessing.

/// A callable taking its arguments as a tuple.
pub trait Func<Args> {
	/// Return type.
	type Output;
	/// Invoke with the packed arguments.
	fn call(&self, args: Args) -> Self::Output;
}

/// A callable invoked against a separate receiver, receiver-first.
///
/// `fn(&T, …)` pointers and closures over `&T` both qualify; this is the
/// shape of a method detached from its object.
pub trait Method<R, Args> {
	/// Return type.
	type Output;
	/// Invoke against `receiver` with the packed arguments.
	fn invoke(&self, receiver: &R, args: Args) -> Self::Output;
}

macro_rules! func_impls {
	() => {
		impl<F, R> Func<()> for F
		where
			F: Fn() -> R,
		{
			type Output = R;

			#[inline]
			fn call(&self, _args: ()) -> R {
				(*self)()
			}
		}

		impl<F, Recv, R> Method<Recv, ()> for F
		where
			F: Fn(&Recv) -> R,
		{
			type Output = R;

			#[inline]
			fn invoke(&self, receiver: &Recv, _args: ()) -> R {
				(*self)(receiver)
			}
		}
	};
	($head:ident $(, $rest:ident)*) => {
		impl<F, R, $head $(, $rest)*> Func<($head, $($rest,)*)> for F
		where
			F: Fn($head $(, $rest)*) -> R,
		{
			type Output = R;

			#[inline]
			#[allow(non_snake_case)]
			fn call(&self, args: ($head, $($rest,)*)) -> R {
				let ($head, $($rest,)*) = args;
				(*self)($head $(, $rest)*)
			}
		}

		impl<F, Recv, R, $head $(, $rest)*> Method<Recv, ($head, $($rest,)*)> for F
		where
			F: Fn(&Recv, $head $(, $rest)*) -> R,
		{
			type Output = R;

			#[inline]
			#[allow(non_snake_case)]
			fn invoke(&self, receiver: &Recv, args: ($head, $($rest,)*)) -> R {
				let ($head, $($rest,)*) = args;
				(*self)(receiver, $head $(, $rest)*)
			}
		}

		func_impls!($($rest),*);
	};
}

func_impls!(T1, T2, T3, T4, T5, T6, T7, T8, T9, T10, T11, T12);

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	struct Counter {
		hits: std::cell::Cell<u32>,
	}

	impl Counter {
		fn bump(&self, by: u32) {
			self.hits.set(self.hits.get() + by);
		}
	}

	#[rstest]
	fn test_fn_item_is_func() {
		// Arrange
		fn join(a: u32, b: &str) -> String {
			format!("{a}-{b}")
		}

		// Act
		let out = Func::call(&join, (4, "beat"));

		// Assert
		assert_eq!(out, "4-beat");
	}

	#[rstest]
	fn test_closure_is_func() {
		// Arrange
		let offset = 10;
		let add = move |x: i32| x + offset;

		// Act & Assert
		assert_eq!(Func::call(&add, (5,)), 15);
	}

	#[rstest]
	fn test_zero_arity_func() {
		// Arrange
		let ping = || "ping";

		// Act & Assert
		assert_eq!(Func::call(&ping, ()), "ping");
	}

	#[rstest]
	fn test_method_invokes_against_receiver() {
		// Arrange
		let counter = Counter {
			hits: std::cell::Cell::new(0),
		};
		let bump = Counter::bump as fn(&Counter, u32);

		// Act
		bump.invoke(&counter, (3,));
		bump.invoke(&counter, (4,));

		// Assert
		assert_eq!(counter.hits.get(), 7);
	}

	#[rstest]
	fn test_closure_as_method() {
		// Arrange
		let counter = Counter {
			hits: std::cell::Cell::new(1),
		};
		let read = |c: &Counter| c.hits.get();

		// Act & Assert
		assert_eq!(read.invoke(&counter, ()), 1);
	}
}
