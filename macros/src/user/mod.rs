//! User-facing macro implementations
//!
//! | Macro | Usage | Purpose |
//! |-------|-------|---------|
//! | `#[derive(Accessors)]` | on struct | Field getters, setters and properties |

mod accessors;

pub use accessors::expand_derive_accessors;
