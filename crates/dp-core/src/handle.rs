//! `Handle<'a, T>`: a borrowed reference to a shared value that compares by
//! identity.
//!
//! Singletons hand out handles rather than owned values. Two handles are
//! equal exactly when they point at the same object, regardless of whether
//! `T` implements `PartialEq`.
//!
//! | Operation | Meaning |
//! |-----------|---------|
//! | `a == b` | same address |
//! | `a.id()` | the address as an integer |
//! | `*a` | the shared value |

use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::Deref;

/// A `Copy` handle to a value owned elsewhere (typically by a
/// [`DoubleChecked`][crate::patterns::singleton::DoubleChecked] cell).
pub struct Handle<'a, T> {
    inner: &'a T,
}

impl<'a, T> Handle<'a, T> {
    /// Wrap a shared reference.
    pub fn new(value: &'a T) -> Self {
        Self { inner: value }
    }

    /// Borrow the shared value for the full lifetime of the handle.
    pub fn get(&self) -> &'a T {
        self.inner
    }

    /// The address of the shared value, usable as an identity key.
    pub fn id(&self) -> usize {
        self.inner as *const T as usize
    }

    /// Return `true` if both handles point at the same object.
    pub fn ptr_eq(a: &Self, b: &Self) -> bool {
        std::ptr::eq(a.inner, b.inner)
    }
}

impl<T> Clone for Handle<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Handle<'_, T> {}

impl<T> Deref for Handle<'_, T> {
    type Target = T;

    fn deref(&self) -> &T {
        self.inner
    }
}

impl<T> PartialEq for Handle<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        Self::ptr_eq(self, other)
    }
}

impl<T> Eq for Handle<'_, T> {}

impl<T> Hash for Handle<'_, T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id().hash(state);
    }
}

impl<T: fmt::Debug> fmt::Debug for Handle<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Handle({:?})", self.inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[derive(Debug, PartialEq)]
    struct Unit(u8);

    #[test]
    fn equal_values_at_different_addresses_differ() {
        let a = Unit(1);
        let b = Unit(1);
        assert_eq!(a, b);
        assert_ne!(Handle::new(&a), Handle::new(&b));
    }

    #[test]
    fn copies_share_identity() {
        let a = Unit(7);
        let h = Handle::new(&a);
        let copy = h;
        assert_eq!(h, copy);
        assert_eq!(h.id(), copy.id());
        assert_eq!(copy.0, 7);
        assert!(std::ptr::eq(h.get(), &a));
    }

    #[test]
    fn hashes_by_identity() {
        let a = Unit(1);
        let b = Unit(1);
        let set: HashSet<_> = [Handle::new(&a), Handle::new(&a), Handle::new(&b)]
            .into_iter()
            .collect();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn debug_shows_value() {
        let a = Unit(3);
        assert_eq!(format!("{:?}", Handle::new(&a)), "Handle(Unit(3))");
    }
}
