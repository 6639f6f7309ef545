//! Concrete property variants.
//!
//! | Variant | Getter | Setter |
//! |---------|--------|--------|
//! | `DelegateGet` | owned `Getter` | none |
//! | `DelegateGetSet` | owned `Getter` | owned `Setter` |
//! | `MemberGet` | `fn(&C) -> T` on `&C` | none |
//! | `MemberGetMut` | `fn(&mut C) -> T` on `&mut C` | none |
//! | `MemberGetSet` | `fn(&C) -> T` on `&C` | `fn(&C, T)` on `&C` |
//! | `MemberGetSetMut` | `fn(&C) -> T` on `&mut C` | `fn(&mut C, T)` on `&mut C` |

use super::Accessor;
use crate::delegate::{Getter, Setter};

/// Read-only variant over an owned getter delegate.
pub struct DelegateGet<'a, T> {
    getter: Getter<'a, T>,
}

impl<'a, T> DelegateGet<'a, T> {
    pub fn new(getter: Getter<'a, T>) -> Self {
        Self { getter }
    }
}

impl<T> Accessor<T> for DelegateGet<'_, T> {
    fn get(&mut self) -> T {
        self.getter.invoke(())
    }
}

/// Read-write variant over owned getter and setter delegates.
pub struct DelegateGetSet<'a, T> {
    getter: Getter<'a, T>,
    setter: Setter<'a, T>,
}

impl<'a, T> DelegateGetSet<'a, T> {
    pub fn new(getter: Getter<'a, T>, setter: Setter<'a, T>) -> Self {
        Self { getter, setter }
    }
}

impl<T> Accessor<T> for DelegateGetSet<'_, T> {
    fn get(&mut self) -> T {
        self.getter.invoke(())
    }

    fn set(&mut self, value: T) {
        self.setter.invoke((value,))
    }

    fn is_writable(&self) -> bool {
        true
    }
}

/// Read-only variant bound to a receiver's getter.
pub struct MemberGet<'a, C: ?Sized, T> {
    receiver: &'a C,
    getter: fn(&C) -> T,
}

impl<'a, C: ?Sized, T> MemberGet<'a, C, T> {
    pub fn new(receiver: &'a C, getter: fn(&C) -> T) -> Self {
        Self { receiver, getter }
    }
}

impl<C: ?Sized, T> Accessor<T> for MemberGet<'_, C, T> {
    fn get(&mut self) -> T {
        (self.getter)(self.receiver)
    }
}

/// Read-only variant whose getter needs an exclusive receiver.
pub struct MemberGetMut<'a, C: ?Sized, T> {
    receiver: &'a mut C,
    getter: fn(&mut C) -> T,
}

impl<'a, C: ?Sized, T> MemberGetMut<'a, C, T> {
    pub fn new(receiver: &'a mut C, getter: fn(&mut C) -> T) -> Self {
        Self { receiver, getter }
    }
}

impl<C: ?Sized, T> Accessor<T> for MemberGetMut<'_, C, T> {
    fn get(&mut self) -> T {
        (self.getter)(&mut *self.receiver)
    }
}

/// Read-write variant bound to a shared receiver.
///
/// The setter takes `&C`, so the receiver mutates through interior
/// mutability and can be shared with other handles.
pub struct MemberGetSet<'a, C: ?Sized, T> {
    receiver: &'a C,
    getter: fn(&C) -> T,
    setter: fn(&C, T),
}

impl<'a, C: ?Sized, T> MemberGetSet<'a, C, T> {
    pub fn new(receiver: &'a C, getter: fn(&C) -> T, setter: fn(&C, T)) -> Self {
        Self {
            receiver,
            getter,
            setter,
        }
    }
}

impl<C: ?Sized, T> Accessor<T> for MemberGetSet<'_, C, T> {
    fn get(&mut self) -> T {
        (self.getter)(self.receiver)
    }

    fn set(&mut self, value: T) {
        (self.setter)(self.receiver, value)
    }

    fn is_writable(&self) -> bool {
        true
    }
}

/// Read-write variant bound to an exclusively borrowed receiver.
pub struct MemberGetSetMut<'a, C: ?Sized, T> {
    receiver: &'a mut C,
    getter: fn(&C) -> T,
    setter: fn(&mut C, T),
}

impl<'a, C: ?Sized, T> MemberGetSetMut<'a, C, T> {
    pub fn new(receiver: &'a mut C, getter: fn(&C) -> T, setter: fn(&mut C, T)) -> Self {
        Self {
            receiver,
            getter,
            setter,
        }
    }
}

impl<C: ?Sized, T> Accessor<T> for MemberGetSetMut<'_, C, T> {
    fn get(&mut self) -> T {
        (self.getter)(&*self.receiver)
    }

    fn set(&mut self, value: T) {
        (self.setter)(&mut *self.receiver, value)
    }

    fn is_writable(&self) -> bool {
        true
    }
}
