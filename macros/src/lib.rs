//! Procedural macros for simple-delegation
//!
//! | Macro | Target | Purpose |
//! |-------|--------|---------|
//! | `#[derive(Accessors)]` | struct | Generate getters, setters and `Property` constructors |
//!
//! ## Example
//!
//! ```ignore
//! #[derive(Accessors)]
//! struct Player {
//!     #[accessor(get, set)]
//!     score: u32,
//!     #[accessor(get)]
//!     name: String,
//! }
//!
//! let mut player = Player { score: 0, name: "ada".into() };
//! player.score_property().set(10);
//! assert_eq!(player.score(), 10);
//! ```

use proc_macro::TokenStream;
use syn::parse_macro_input;

// =============================================================================
// Module Declarations (common / user)
// =============================================================================

mod common;
mod user;

/// Derive accessor methods for annotated fields.
///
/// For each field marked `#[accessor(...)]`:
///
/// - `get` generates `fn field(&self) -> T`, returning a clone of the field.
/// - `set` generates `fn set_field(&mut self, value: T)`.
/// - `get` alone also generates `fn field_property(&self) -> Property<'_, T>`
///   (read-only, via `Property::member`).
/// - `get, set` generates `fn field_property(&mut self) -> Property<'_, T>`
///   instead (read-write, via `Property::member_mut`).
///
/// Generated methods take the visibility of the struct.
///
/// # Usage
/// ```ignore
/// #[derive(Accessors)]
/// struct Volume {
///     #[accessor(get, set)]
///     level: u8,
/// }
/// ```
#[proc_macro_derive(Accessors, attributes(accessor))]
pub fn derive_accessors(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as syn::DeriveInput);
    user::expand_derive_accessors(input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}
