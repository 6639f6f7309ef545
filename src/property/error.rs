use thiserror::Error;

/// A write was rejected because the property has no setter.
///
/// Only produced by [`Property::try_set`](super::Property::try_set); plain
/// `set` on a read-only property is silently ignored. Carries the rejected
/// value back to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("property is read-only")]
pub struct ReadOnly<T>(pub T);

impl<T> ReadOnly<T> {
    /// The value that was not written.
    pub fn into_inner(self) -> T {
        self.0
    }
}
