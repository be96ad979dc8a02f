//! Singleton pattern: lazy, thread-safe, constructed exactly once.
//!
//! [`DoubleChecked<T>`] is a `const`-constructible cell meant to live in a
//! `static`. The first caller of [`DoubleChecked::get_or_init`] builds the
//! value under a mutex; every later caller takes a lock-free fast path.
//!
//! The protocol is classic double-checked locking with explicit ordering:
//!
//! 1. `Acquire`-load the pointer. Non-null means initialized: return it.
//! 2. Otherwise take the init lock and load again, since another thread may
//!    have finished while this one waited.
//! 3. Still null: construct, box, and publish with a `Release` store.
//!
//! The `Release` store pairs with the `Acquire` load of step 1, so a thread
//! that sees the pointer also sees every write the constructor made.
//!
//! The [`define_singleton!`] macro wraps a function-local cell in an accessor
//! returning a [`Handle`].

use std::convert::Infallible;
use std::fmt;
use std::marker::PhantomData;
use std::ptr;
use std::sync::atomic::{AtomicPtr, AtomicUsize, Ordering};
use std::sync::{Mutex, PoisonError};

use log::{debug, trace, warn};

use crate::handle::Handle;

/// A lazily-initialised value guarded by double-checked locking.
///
/// Once a value has been published it is never replaced. A cell stored in a
/// `static` is never dropped, so the value lives until process teardown.
///
/// # Example
/// ```
/// use dp_core::patterns::singleton::DoubleChecked;
///
/// static GREETING: DoubleChecked<String> = DoubleChecked::new();
///
/// let a = GREETING.get_or_init(|| "hello".to_string());
/// let b = GREETING.get_or_init(|| unreachable!());
/// assert!(std::ptr::eq(a, b));
/// assert_eq!(GREETING.lock_acquisitions(), 1);
/// ```
pub struct DoubleChecked<T> {
    value: AtomicPtr<T>,
    init_lock: Mutex<()>,
    lock_acquisitions: AtomicUsize,
    _owns: PhantomData<Box<T>>,
}

// The value may be built on one thread and read or dropped on another.
unsafe impl<T: Send> Send for DoubleChecked<T> {}
unsafe impl<T: Send + Sync> Sync for DoubleChecked<T> {}

impl<T> DoubleChecked<T> {
    /// Create an uninitialised cell.
    pub const fn new() -> Self {
        Self {
            value: AtomicPtr::new(ptr::null_mut()),
            init_lock: Mutex::new(()),
            lock_acquisitions: AtomicUsize::new(0),
            _owns: PhantomData,
        }
    }

    /// Return the value if it has been published. Never locks or constructs.
    pub fn get(&self) -> Option<&T> {
        let raw = self.value.load(Ordering::Acquire);
        // SAFETY: a non-null pointer comes from `Box::into_raw` in
        // `init_slow`, is stored at most once, and is only freed by `drop`,
        // which needs `&mut self`.
        unsafe { raw.as_ref() }
    }

    /// Return `true` once a value has been published.
    pub fn is_initialized(&self) -> bool {
        !self.value.load(Ordering::Acquire).is_null()
    }

    /// Return the value, constructing it with `f` if this is the first call.
    ///
    /// Concurrent first callers block on the init lock; exactly one of them
    /// runs `f`, the rest receive its result.
    pub fn get_or_init<F>(&self, f: F) -> &T
    where
        F: FnOnce() -> T,
    {
        match self.get_or_try_init(|| Ok::<T, Infallible>(f())) {
            Ok(value) => value,
            Err(never) => match never {},
        }
    }

    /// Fallible variant of [`get_or_init`][Self::get_or_init].
    ///
    /// An error is handed back to the caller whose constructor failed and
    /// nothing is cached: the next caller runs its own constructor. A
    /// constructor that panics leaves the cell uninitialised as well.
    pub fn get_or_try_init<F, E>(&self, f: F) -> Result<&T, E>
    where
        F: FnOnce() -> Result<T, E>,
    {
        if let Some(value) = self.get() {
            return Ok(value);
        }
        self.init_slow(f)
    }

    /// Like [`get_or_init`][Self::get_or_init], wrapped in an identity
    /// [`Handle`].
    pub fn handle<F>(&self, f: F) -> Handle<'_, T>
    where
        F: FnOnce() -> T,
    {
        Handle::new(self.get_or_init(f))
    }

    /// Number of times the slow path has taken the init lock.
    pub fn lock_acquisitions(&self) -> usize {
        self.lock_acquisitions.load(Ordering::Relaxed)
    }

    #[cold]
    fn init_slow<F, E>(&self, f: F) -> Result<&T, E>
    where
        F: FnOnce() -> Result<T, E>,
    {
        // The mutex guards no data, so a panic in an earlier constructor
        // leaves nothing inconsistent behind.
        let _guard = self
            .init_lock
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        let acquisitions = self.lock_acquisitions.fetch_add(1, Ordering::Relaxed) + 1;
        trace!(
            "init lock for {} acquired ({acquisitions} total)",
            std::any::type_name::<T>()
        );

        if let Some(value) = self.get() {
            return Ok(value);
        }

        let value = match f() {
            Ok(value) => value,
            Err(err) => {
                warn!(
                    "constructor for {} failed, cell left uninitialised",
                    std::any::type_name::<T>()
                );
                return Err(err);
            }
        };
        let raw = Box::into_raw(Box::new(value));
        self.value.store(raw, Ordering::Release);
        debug!("constructed singleton {}", std::any::type_name::<T>());

        // SAFETY: `raw` was just produced by `Box::into_raw`; it stays alive
        // for as long as `self` does.
        Ok(unsafe { &*raw })
    }
}

impl<T> Default for DoubleChecked<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for DoubleChecked<T> {
    fn drop(&mut self) {
        let raw = *self.value.get_mut();
        if !raw.is_null() {
            // SAFETY: `&mut self` rules out outstanding borrows, and the
            // pointer was produced by `Box::into_raw`.
            drop(unsafe { Box::from_raw(raw) });
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for DoubleChecked<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.get() {
            Some(v) => write!(f, "DoubleChecked({:?})", v),
            None => write!(f, "DoubleChecked(<uninit>)"),
        }
    }
}

/// Define an accessor function for a lazily-initialised global of type `$ty`.
///
/// The generated function owns a function-local `static`
/// [`DoubleChecked`] cell and returns a `Handle<'static, $ty>`. It can be
/// used at module level or inside an `impl` block.
///
/// # Example
/// ```
/// use dp_core::define_singleton;
///
/// struct Registry { data: Vec<String> }
/// define_singleton!(fn registry() -> Registry = Registry { data: Vec::new() });
///
/// assert!(registry().data.is_empty());
/// assert!(registry() == registry());
/// ```
#[macro_export]
macro_rules! define_singleton {
    ($(#[$meta:meta])* $vis:vis fn $name:ident() -> $ty:ty = $init:expr $(;)?) => {
        $(#[$meta])*
        $vis fn $name() -> $crate::handle::Handle<'static, $ty> {
            static CELL: $crate::patterns::singleton::DoubleChecked<$ty> =
                $crate::patterns::singleton::DoubleChecked::new();
            CELL.handle(|| $init)
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn starts_uninitialised() {
        let cell: DoubleChecked<u32> = DoubleChecked::new();
        assert!(!cell.is_initialized());
        assert!(cell.get().is_none());
        assert_eq!(cell.lock_acquisitions(), 0);
        assert_eq!(format!("{:?}", cell), "DoubleChecked(<uninit>)");
    }

    #[test]
    fn first_value_wins() {
        let cell = DoubleChecked::new();
        assert_eq!(*cell.get_or_init(|| 1), 1);
        assert_eq!(*cell.get_or_init(|| 2), 1);
        assert_eq!(cell.get(), Some(&1));
        assert!(cell.is_initialized());
        assert_eq!(format!("{:?}", cell), "DoubleChecked(1)");
    }

    #[test]
    fn fast_path_does_not_lock() {
        let cell = DoubleChecked::new();
        cell.get_or_init(|| "x");
        for _ in 0..1_000 {
            cell.get_or_init(|| "y");
        }
        assert_eq!(cell.lock_acquisitions(), 1);
    }

    #[test]
    fn failed_construction_is_retried() {
        let cell: DoubleChecked<u8> = DoubleChecked::new();
        let first: Result<&u8, &str> = cell.get_or_try_init(|| Err("boom"));
        assert_eq!(first, Err("boom"));
        assert!(!cell.is_initialized());

        let second: Result<&u8, &str> = cell.get_or_try_init(|| Ok(9));
        assert_eq!(second, Ok(&9));
        assert_eq!(cell.lock_acquisitions(), 2);
    }

    #[test]
    fn panicking_constructor_does_not_poison() {
        let cell: DoubleChecked<u8> = DoubleChecked::new();
        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            cell.get_or_init(|| panic!("constructor panicked"));
        }));
        assert!(result.is_err());
        assert!(!cell.is_initialized());
        assert_eq!(*cell.get_or_init(|| 5), 5);
    }

    #[test]
    fn dropping_cell_drops_value() {
        let tracker = Arc::new(());
        {
            let cell = DoubleChecked::new();
            cell.get_or_init(|| Arc::clone(&tracker));
            assert_eq!(Arc::strong_count(&tracker), 2);
        }
        assert_eq!(Arc::strong_count(&tracker), 1);
    }

    #[test]
    fn handles_share_identity() {
        let cell = DoubleChecked::new();
        let a = cell.handle(|| vec![1, 2, 3]);
        let b = cell.handle(Vec::new);
        assert_eq!(a, b);
        assert_eq!(b.len(), 3);
    }

    crate::define_singleton!(fn answer() -> u64 = 6 * 7);

    #[test]
    fn macro_accessor_returns_same_instance() {
        assert_eq!(*answer(), 42);
        assert_eq!(answer(), answer());
    }
}
