//! # Layer 2: Property Dispatch
//!
//! One get/set interface over two backing styles.
//!
//! ```text
//!                    read-only              read-write
//! delegate-backed    Property::read_only    Property::read_write
//! member-backed      Property::member       Property::member_read_write
//!                    Property::member_mut_read_only
//!                                           Property::member_mut
//! ```
//!
//! Delegate-backed properties own their getter/setter [`Delegate`]s.
//! Member-backed properties call the receiver's accessors directly and
//! allocate nothing beyond the handle itself.
//!
//! `set` on a read-only property does nothing. Use
//! [`Property::try_set`] when the write must not be lost silently.
//!
//! [`Delegate`]: crate::Delegate

pub mod accessors;
mod error;

use alloc::boxed::Box;
use core::fmt;

use crate::delegate::{Getter, Setter};
use crate::trace::{debug_ignored_set, trace_bound};
use accessors::{
    DelegateGet, DelegateGetSet, MemberGet, MemberGetMut, MemberGetSet, MemberGetSetMut,
};

pub use error::ReadOnly;

/// The abstract property interface.
pub trait Accessor<T> {
    /// Read the current value. Every call goes to the underlying getter.
    fn get(&mut self) -> T;

    /// Write a value. Read-only implementors keep this default, which
    /// ignores the value.
    fn set(&mut self, value: T) {
        let _ = value;
        debug_ignored_set!();
    }

    /// Whether [`set`](Accessor::set) has an effect.
    fn is_writable(&self) -> bool {
        false
    }
}

/// Owning handle over any [`Accessor`] variant.
///
/// # Example
///
/// ```
/// use simple_delegation::Property;
///
/// struct Config { retries: u32 }
///
/// impl Config {
///     fn retries(&self) -> u32 { self.retries }
///     fn set_retries(&mut self, retries: u32) { self.retries = retries; }
/// }
///
/// let mut config = Config { retries: 3 };
/// let mut retries = Property::member_mut(&mut config, Config::retries, Config::set_retries);
/// retries.set(5);
/// assert_eq!(retries.get(), 5);
/// ```
pub struct Property<'a, T> {
    accessor: Box<dyn Accessor<T> + 'a>,
}

impl<'a, T: 'a> Property<'a, T> {
    /// Read-only property over a getter delegate.
    pub fn read_only(getter: Getter<'a, T>) -> Self {
        trace_bound!("property", "delegate_get");
        Self {
            accessor: Box::new(DelegateGet::new(getter)),
        }
    }

    /// Read-write property over a getter and a setter delegate.
    pub fn read_write(getter: Getter<'a, T>, setter: Setter<'a, T>) -> Self {
        trace_bound!("property", "delegate_get_set");
        Self {
            accessor: Box::new(DelegateGetSet::new(getter, setter)),
        }
    }

    /// Read-only property bound to a receiver's getter.
    pub fn member<C: ?Sized>(receiver: &'a C, getter: fn(&C) -> T) -> Self {
        trace_bound!("property", "member_get");
        Self {
            accessor: Box::new(MemberGet::new(receiver, getter)),
        }
    }

    /// Read-only property bound to a getter that takes `&mut C`.
    pub fn member_mut_read_only<C: ?Sized>(receiver: &'a mut C, getter: fn(&mut C) -> T) -> Self {
        trace_bound!("property", "member_get_mut");
        Self {
            accessor: Box::new(MemberGetMut::new(receiver, getter)),
        }
    }

    /// Read-write property bound to a shared receiver.
    ///
    /// The setter takes `&C`; the receiver is expected to use interior
    /// mutability.
    pub fn member_read_write<C: ?Sized>(
        receiver: &'a C,
        getter: fn(&C) -> T,
        setter: fn(&C, T),
    ) -> Self {
        trace_bound!("property", "member_get_set");
        Self {
            accessor: Box::new(MemberGetSet::new(receiver, getter, setter)),
        }
    }

    /// Read-write property bound to an exclusively borrowed receiver.
    pub fn member_mut<C: ?Sized>(
        receiver: &'a mut C,
        getter: fn(&C) -> T,
        setter: fn(&mut C, T),
    ) -> Self {
        trace_bound!("property", "member_get_set_mut");
        Self {
            accessor: Box::new(MemberGetSetMut::new(receiver, getter, setter)),
        }
    }
}

impl<T> Property<'_, T> {
    /// Read the current value by calling the getter.
    #[inline]
    pub fn get(&mut self) -> T {
        self.accessor.get()
    }

    /// Write through the setter, or do nothing if there is none.
    #[inline]
    pub fn set(&mut self, value: T) {
        self.accessor.set(value)
    }

    /// Write through the setter, handing the value back if there is none.
    pub fn try_set(&mut self, value: T) -> Result<(), ReadOnly<T>> {
        if !self.accessor.is_writable() {
            return Err(ReadOnly(value));
        }
        self.accessor.set(value);
        Ok(())
    }

    #[inline]
    pub fn is_writable(&self) -> bool {
        self.accessor.is_writable()
    }
}

impl<T> Accessor<T> for Property<'_, T> {
    fn get(&mut self) -> T {
        self.accessor.get()
    }

    fn set(&mut self, value: T) {
        self.accessor.set(value)
    }

    fn is_writable(&self) -> bool {
        self.accessor.is_writable()
    }
}

impl<T> fmt::Debug for Property<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Property")
            .field("writable", &self.accessor.is_writable())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::cell::Cell;

    struct Temperature {
        celsius: Cell<i32>,
    }

    impl Temperature {
        fn celsius(&self) -> i32 {
            self.celsius.get()
        }

        fn set_celsius(&self, value: i32) {
            self.celsius.set(value);
        }
    }

    #[test]
    fn test_default_set_is_noop() {
        let temp = Temperature {
            celsius: Cell::new(20),
        };
        let mut prop = Property::member(&temp, Temperature::celsius);

        assert!(!prop.is_writable());
        prop.set(99);
        assert_eq!(prop.get(), 20);
    }

    #[test]
    fn test_try_set_returns_value() {
        let mut prop = Property::read_only(Getter::object(|| 7));
        let err = prop.try_set(8).unwrap_err();
        assert_eq!(err.into_inner(), 8);
        assert_eq!(prop.get(), 7);
    }

    #[test]
    fn test_try_set_on_writable() {
        let temp = Temperature {
            celsius: Cell::new(0),
        };
        let mut prop =
            Property::member_read_write(&temp, Temperature::celsius, Temperature::set_celsius);
        assert!(prop.try_set(15).is_ok());
        assert_eq!(temp.celsius.get(), 15);
    }

    #[test]
    fn test_read_write_delegates() {
        let temp = Temperature {
            celsius: Cell::new(1),
        };
        let mut prop = Property::read_write(
            Getter::member(&temp, Temperature::celsius),
            Setter::member(&temp, Temperature::set_celsius),
        );
        prop.set(30);
        assert_eq!(prop.get(), 30);
        assert!(prop.is_writable());
    }

    #[test]
    fn test_debug_shows_writability() {
        let prop = Property::read_only(Getter::object(|| 0u8));
        assert_eq!(alloc::format!("{:?}", prop), "Property { writable: false, .. }");
    }
}
