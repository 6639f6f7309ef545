//! Per-arity shape mapping.
//!
//! ```text
//! (A0, A1)  ->  Function<R>      = fn(A0, A1) -> R
//!           ->  Method<C, R>     = fn(&C, A0, A1) -> R
//!           ->  MethodMut<C, R>  = fn(&mut C, A0, A1) -> R
//! ```
//!
//! The impls are generated by `impl_arguments!`, which uses `paste` to turn
//! the type parameters into binding names for unpacking the tuple.

/// An argument list, expressed as a tuple.
///
/// The associated `fn` pointer types are the "shapes" a delegate can be
/// built from. Naming them through the tuple lets `fn` items coerce at the
/// factory call site without a cast.
pub trait Arguments: Sized {
    /// Free function taking these arguments.
    type Function<R>: Copy;

    /// Method taking a shared receiver followed by these arguments.
    type Method<C: ?Sized, R>: Copy;

    /// Method taking an exclusive receiver followed by these arguments.
    type MethodMut<C: ?Sized, R>: Copy;

    fn apply<R>(function: Self::Function<R>, args: Self) -> R;

    fn apply_method<C: ?Sized, R>(method: Self::Method<C, R>, receiver: &C, args: Self) -> R;

    fn apply_method_mut<C: ?Sized, R>(
        method: Self::MethodMut<C, R>,
        receiver: &mut C,
        args: Self,
    ) -> R;
}

/// A callable object invocable with the unpacked argument list `Args`.
///
/// Implemented for every `FnMut` of matching arity: closures, `fn` items,
/// `fn` pointers and anything else that is callable.
pub trait Callable<Args, R> {
    fn call_with(&mut self, args: Args) -> R;
}

macro_rules! impl_arguments {
    ($($A:ident),*) => {
        ::paste::paste! {
            impl<$($A),*> Arguments for ($($A,)*) {
                type Function<R> = fn($($A),*) -> R;
                type Method<C: ?Sized, R> = fn(&C $(, $A)*) -> R;
                type MethodMut<C: ?Sized, R> = fn(&mut C $(, $A)*) -> R;

                #[inline(always)]
                fn apply<R>(function: Self::Function<R>, ($([<$A:lower>],)*): Self) -> R {
                    function($([<$A:lower>]),*)
                }

                #[inline(always)]
                fn apply_method<C: ?Sized, R>(
                    method: Self::Method<C, R>,
                    receiver: &C,
                    ($([<$A:lower>],)*): Self,
                ) -> R {
                    method(receiver $(, [<$A:lower>])*)
                }

                #[inline(always)]
                fn apply_method_mut<C: ?Sized, R>(
                    method: Self::MethodMut<C, R>,
                    receiver: &mut C,
                    ($([<$A:lower>],)*): Self,
                ) -> R {
                    method(receiver $(, [<$A:lower>])*)
                }
            }

            impl<F, R $(, $A)*> Callable<($($A,)*), R> for F
            where
                F: FnMut($($A),*) -> R,
            {
                #[inline(always)]
                fn call_with(&mut self, ($([<$A:lower>],)*): ($($A,)*)) -> R {
                    (self)($([<$A:lower>]),*)
                }
            }
        }
    };
}

impl_arguments!();
impl_arguments!(A0);
impl_arguments!(A0, A1);
impl_arguments!(A0, A1, A2);
impl_arguments!(A0, A1, A2, A3);
impl_arguments!(A0, A1, A2, A3, A4);
impl_arguments!(A0, A1, A2, A3, A4, A5);
impl_arguments!(A0, A1, A2, A3, A4, A5, A6);
impl_arguments!(A0, A1, A2, A3, A4, A5, A6, A7);

#[cfg(test)]
mod tests {
    use super::*;

    fn add(a: i32, b: i32) -> i32 {
        a + b
    }

    struct Scale(i32);

    impl Scale {
        fn apply(&self, x: i32) -> i32 {
            self.0 * x
        }

        fn grow(&mut self, by: i32) -> i32 {
            self.0 += by;
            self.0
        }
    }

    #[test]
    fn test_apply_function() {
        let f: <(i32, i32) as Arguments>::Function<i32> = add;
        assert_eq!(<(i32, i32)>::apply(f, (2, 3)), 5);
    }

    #[test]
    fn test_apply_methods() {
        let mut scale = Scale(3);
        let m: <(i32,) as Arguments>::Method<Scale, i32> = Scale::apply;
        assert_eq!(<(i32,)>::apply_method(m, &scale, (4,)), 12);

        let m: <(i32,) as Arguments>::MethodMut<Scale, i32> = Scale::grow;
        assert_eq!(<(i32,)>::apply_method_mut(m, &mut scale, (2,)), 5);
        assert_eq!(scale.0, 5);
    }

    #[test]
    fn test_callable_closure() {
        let mut calls = 0;
        let mut counter = |step: i32| {
            calls += step;
            calls
        };
        assert_eq!(counter.call_with((2,)), 2);
        assert_eq!(counter.call_with((3,)), 5);
    }

    #[test]
    fn test_callable_zero_arity() {
        let mut answer = || 42;
        assert_eq!(answer.call_with(()), 42);
    }
}
