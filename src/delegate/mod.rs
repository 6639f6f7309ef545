//! # Layer 1: Callable Dispatch
//!
//! One invocation interface over three callable shapes.
//!
//! ```text
//! Delegate::function(f)          -> FunctionInvoker   f(args..)
//! Delegate::member(&c, m)        -> MemberInvoker     m(&c, args..)
//! Delegate::member_mut(&mut c, m)-> MemberMutInvoker  m(&mut c, args..)
//! Delegate::object(o)            -> ObjectInvoker     o(args..)
//!                 \_______________________/
//!                   Box<dyn Invoke<Args, R> + 'a>
//! ```
//!
//! The variant is picked by which factory is called and is not observable
//! afterwards. Receivers are borrowed for `'a`, so the compiler rejects any
//! handle that would outlive its receiver.

pub mod invokers;

use alloc::boxed::Box;
use core::fmt;

use crate::primitives::{Arguments, Callable};
use crate::trace::trace_bound;
use invokers::{FunctionInvoker, MemberInvoker, MemberMutInvoker, ObjectInvoker};

/// The abstract invocation interface.
///
/// `Args` is the argument tuple, `R` the return type. Implementors forward
/// to their target with no validation or translation of failures.
pub trait Invoke<Args, R = ()> {
    fn invoke(&mut self, args: Args) -> R;
}

/// Owning handle over any [`Invoke`] variant.
///
/// Built through one of the factories, then used only through
/// [`invoke`](Delegate::invoke). Dropping the handle drops the wrapped
/// target (and never the receiver, which is only borrowed).
///
/// # Example
///
/// ```
/// use simple_delegation::Delegate;
///
/// fn add(a: i32, b: i32) -> i32 { a + b }
///
/// let offset = 10;
/// let mut direct = Delegate::<(i32, i32), i32>::function(add);
/// let mut closure = Delegate::<(i32, i32), i32>::object(move |a: i32, b: i32| a + b + offset);
///
/// assert_eq!(direct.invoke((1, 2)), 3);
/// assert_eq!(closure.invoke((1, 2)), 13);
/// ```
pub struct Delegate<'a, Args, R = ()> {
    invoker: Box<dyn Invoke<Args, R> + 'a>,
}

/// Zero-argument delegate producing a `T`.
pub type Getter<'a, T> = Delegate<'a, (), T>;

/// One-argument delegate consuming a `T`.
pub type Setter<'a, T> = Delegate<'a, (T,), ()>;

/// Zero-argument delegate with no result.
pub type Action<'a> = Delegate<'a, (), ()>;

impl<'a, Args: Arguments + 'a, R: 'a> Delegate<'a, Args, R> {
    /// Wrap a free function.
    pub fn function(function: Args::Function<R>) -> Self {
        trace_bound!("delegate", "function");
        Self {
            invoker: Box::new(FunctionInvoker::<Args, R>::new(function)),
        }
    }

    /// Bind a `&self` method to a shared receiver.
    ///
    /// Several handles may share the receiver. Methods that need to mutate
    /// it go through interior mutability, or use [`member_mut`](Self::member_mut).
    pub fn member<C: ?Sized>(receiver: &'a C, method: Args::Method<C, R>) -> Self {
        trace_bound!("delegate", "member");
        Self {
            invoker: Box::new(MemberInvoker::<C, Args, R>::new(receiver, method)),
        }
    }

    /// Bind a `&mut self` method to an exclusively borrowed receiver.
    pub fn member_mut<C: ?Sized>(receiver: &'a mut C, method: Args::MethodMut<C, R>) -> Self {
        trace_bound!("delegate", "member_mut");
        Self {
            invoker: Box::new(MemberMutInvoker::<C, Args, R>::new(receiver, method)),
        }
    }

    /// Take ownership of a callable object.
    ///
    /// The handle owns its own value: pass `value.clone()` to keep an
    /// independent original around.
    pub fn object<O>(object: O) -> Self
    where
        O: Callable<Args, R> + 'a,
    {
        trace_bound!("delegate", "object");
        Self {
            invoker: Box::new(ObjectInvoker::<O, Args, R>::new(object)),
        }
    }
}

impl<Args, R> Delegate<'_, Args, R> {
    /// Call the wrapped target with `args` and return its result unchanged.
    #[inline]
    pub fn invoke(&mut self, args: Args) -> R {
        self.invoker.invoke(args)
    }
}

impl<Args, R> Invoke<Args, R> for Delegate<'_, Args, R> {
    #[inline]
    fn invoke(&mut self, args: Args) -> R {
        self.invoker.invoke(args)
    }
}

impl<Args, R> fmt::Debug for Delegate<'_, Args, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Delegate").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::format;
    use alloc::string::String;
    use alloc::vec::Vec;
    use core::cell::Cell;

    fn double(x: i32) -> i32 {
        x * 2
    }

    struct Doubler {
        calls: Cell<u32>,
    }

    impl Doubler {
        fn double(&self, x: i32) -> i32 {
            self.calls.set(self.calls.get() + 1);
            x * 2
        }
    }

    #[test]
    fn test_function_variant() {
        let mut d = Delegate::<(i32,), i32>::function(double);
        assert_eq!(d.invoke((21,)), 42);
    }

    #[test]
    fn test_shared_member_variant() {
        let doubler = Doubler {
            calls: Cell::new(0),
        };
        let mut first = Delegate::<(i32,), i32>::member(&doubler, Doubler::double);
        let mut second = Delegate::<(i32,), i32>::member(&doubler, Doubler::double);

        assert_eq!(first.invoke((1,)), 2);
        assert_eq!(second.invoke((2,)), 4);
        assert_eq!(doubler.calls.get(), 2);
    }

    #[test]
    fn test_member_mut_variant() {
        let mut log: Vec<i32> = Vec::new();
        {
            let mut push = Delegate::<(i32,)>::member_mut(&mut log, Vec::push);
            push.invoke((1,));
            push.invoke((2,));
        }
        assert_eq!(log, [1, 2]);
    }

    #[test]
    fn test_nested_delegate() {
        let inner = Delegate::<(i32,), i32>::function(double);
        let mut outer = Delegate::<(i32,), i32>::object({
            let mut inner = inner;
            move |x: i32| inner.invoke((x,)) + 1
        });
        assert_eq!(outer.invoke((5,)), 11);
    }

    #[test]
    fn test_debug_is_opaque() {
        let d = Action::object(|| {});
        let shown: String = format!("{:?}", d);
        assert_eq!(shown, "Delegate { .. }");
    }
}
