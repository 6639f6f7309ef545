#![cfg_attr(not(feature = "std"), no_std)]

// Feature flags handled:
// - std: default, enables std::error::Error for ReadOnly
// - derive: default, re-exports #[derive(Accessors)]
// - trace: tracing events on construction and ignored writes

//! # simple-delegation
//!
//! Delegates and properties: one invocation interface over free functions,
//! bound methods and callable objects, and one get/set interface on top.
//!
//! ## Architecture
//!
//! ```text
//! +-------------------------------------------------------------------+
//! |  Layer 0: Primitives                                              |
//! |  - Arguments (tuple -> fn pointer shapes), Callable (FnMut)       |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 1: Callable Dispatch                                       |
//! |  - Invoke trait, Delegate handle                                  |
//! |  - Function / Member / MemberMut / Object invokers                |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 2: Property Dispatch                                       |
//! |  - Accessor trait, Property handle                                |
//! |  - Delegate-backed and member-backed accessors                    |
//! +-------------------------------------------------------------------+
//! ```
//!
//! Every handle owns exactly one boxed variant. Receivers are borrowed for
//! the handle's lifetime `'a` and never owned, so a handle cannot outlive
//! the object it is bound to.
//!
//! Failures are not touched: a panic or an `Err` from the wrapped target
//! reaches the caller exactly as the target produced it.
//!
//! ## Quick Start
//!
//! ```
//! use simple_delegation::prelude::*;
//! use std::cell::Cell;
//!
//! struct Counter { hits: Cell<u32> }
//!
//! impl Counter {
//!     fn hits(&self) -> u32 { self.hits.get() }
//!     fn set_hits(&self, hits: u32) { self.hits.set(hits) }
//!     fn bump(&self, by: u32) -> u32 { self.hits.set(self.hits.get() + by); self.hits.get() }
//! }
//!
//! let counter = Counter { hits: Cell::new(0) };
//!
//! let mut bump = Delegate::<(u32,), u32>::member(&counter, Counter::bump);
//! assert_eq!(bump.invoke((2,)), 2);
//!
//! let mut hits = Property::member_read_write(&counter, Counter::hits, Counter::set_hits);
//! hits.set(10);
//! assert_eq!(hits.get(), 10);
//! ```

// Allow `::simple_delegation` to work inside the crate itself
extern crate self as simple_delegation;

extern crate alloc;

mod trace;

// =============================================================================
// Layer 0: Primitives
// =============================================================================
pub mod primitives;

// =============================================================================
// Layer 1: Callable Dispatch
// =============================================================================
pub mod delegate;

// =============================================================================
// Layer 2: Property Dispatch
// =============================================================================
pub mod property;

// =============================================================================
// Re-exports at Crate Root
// =============================================================================

pub use primitives::{Arguments, Callable};
pub use delegate::{Action, Delegate, Getter, Invoke, Setter};
pub use property::{Accessor, Property, ReadOnly};

#[cfg(feature = "derive")]
pub use macros::Accessors;

/// Common items for delegates and properties.
pub mod prelude {
    pub use crate::delegate::{Action, Delegate, Getter, Invoke, Setter};
    pub use crate::property::{Accessor, Property, ReadOnly};
    #[cfg(feature = "derive")]
    pub use macros::Accessors;
}

#[cfg(all(test, feature = "derive"))]
mod tests {
    use crate::prelude::*;

    #[derive(Accessors)]
    struct Window {
        #[accessor(get, set)]
        title: alloc::string::String,
        #[accessor(get)]
        id: u64,
    }

    #[test]
    fn test_derive_inside_crate() {
        let mut window = Window {
            title: "main".into(),
            id: 7,
        };
        assert_eq!(window.id_property().get(), 7);

        let mut title = window.title_property();
        title.set("settings".into());
        assert_eq!(title.get(), "settings");
    }
}
