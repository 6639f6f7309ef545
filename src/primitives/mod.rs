//! # Layer 0: Primitives
//!
//! Argument-list plumbing shared by delegates and properties.
//!
//! Rust has no variadic generics, so an argument list is a tuple:
//! `()`, `(A0,)`, `(A0, A1)`, ... Every tuple up to eight elements
//! implements [`Arguments`], which maps it to the matching `fn` pointer
//! shapes, and every `FnMut` of matching arity implements [`Callable`].

pub mod arity;

pub use arity::{Arguments, Callable};
