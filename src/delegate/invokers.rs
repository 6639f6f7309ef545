//! Concrete invocation variants.
//!
//! Each one adapts a single callable shape to [`Invoke`]. They are public so
//! they can be named in bounds, but callers normally only see them through
//! [`Delegate`](super::Delegate).

use core::marker::PhantomData;

use super::Invoke;
use crate::primitives::{Arguments, Callable};

/// Free function variant.
pub struct FunctionInvoker<Args: Arguments, R> {
    function: Args::Function<R>,
}

impl<Args: Arguments, R> FunctionInvoker<Args, R> {
    pub fn new(function: Args::Function<R>) -> Self {
        Self { function }
    }
}

impl<Args: Arguments, R> Invoke<Args, R> for FunctionInvoker<Args, R> {
    #[inline(always)]
    fn invoke(&mut self, args: Args) -> R {
        Args::apply(self.function, args)
    }
}

/// Bound method variant over a shared receiver.
pub struct MemberInvoker<'a, C: ?Sized, Args: Arguments, R> {
    receiver: &'a C,
    method: Args::Method<C, R>,
}

impl<'a, C: ?Sized, Args: Arguments, R> MemberInvoker<'a, C, Args, R> {
    pub fn new(receiver: &'a C, method: Args::Method<C, R>) -> Self {
        Self { receiver, method }
    }
}

impl<C: ?Sized, Args: Arguments, R> Invoke<Args, R> for MemberInvoker<'_, C, Args, R> {
    #[inline(always)]
    fn invoke(&mut self, args: Args) -> R {
        Args::apply_method(self.method, self.receiver, args)
    }
}

/// Bound method variant over an exclusively borrowed receiver.
pub struct MemberMutInvoker<'a, C: ?Sized, Args: Arguments, R> {
    receiver: &'a mut C,
    method: Args::MethodMut<C, R>,
}

impl<'a, C: ?Sized, Args: Arguments, R> MemberMutInvoker<'a, C, Args, R> {
    pub fn new(receiver: &'a mut C, method: Args::MethodMut<C, R>) -> Self {
        Self { receiver, method }
    }
}

impl<C: ?Sized, Args: Arguments, R> Invoke<Args, R> for MemberMutInvoker<'_, C, Args, R> {
    #[inline(always)]
    fn invoke(&mut self, args: Args) -> R {
        Args::apply_method_mut(self.method, self.receiver, args)
    }
}

/// Owned callable object variant.
pub struct ObjectInvoker<O, Args, R> {
    object: O,
    _signature: PhantomData<fn(Args) -> R>,
}

impl<O, Args, R> ObjectInvoker<O, Args, R>
where
    O: Callable<Args, R>,
{
    pub fn new(object: O) -> Self {
        Self {
            object,
            _signature: PhantomData,
        }
    }
}

impl<O, Args, R> Invoke<Args, R> for ObjectInvoker<O, Args, R>
where
    O: Callable<Args, R>,
{
    #[inline(always)]
    fn invoke(&mut self, args: Args) -> R {
        self.object.call_with(args)
    }
}
