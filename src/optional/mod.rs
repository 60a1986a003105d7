//! `Optional` — zero or one value of `T`, stored inline (no heap).
//!
//! The element lives in a `MaybeUninit<T>` slot next to a presence flag. The
//! slot holds a live `T` if and only if the flag is set; every operation
//! below keeps that invariant at its boundaries.
//!
//! Access comes in two flavours that are deliberately kept apart:
//! - checked: [`value`](Optional::value), [`value_mut`](Optional::value_mut),
//!   [`into_value`](Optional::into_value) report [`BadOptionalAccess`] when empty;
//! - unchecked: [`get_unchecked`](Optional::get_unchecked),
//!   [`get_unchecked_mut`](Optional::get_unchecked_mut),
//!   [`into_inner_unchecked`](Optional::into_inner_unchecked) are `unsafe` and
//!   perform no presence check in release builds.

mod inner;

use core::fmt;

use crate::raw::slot;
use crate::trace::lifecycle;
use crate::BadOptionalAccess;
use inner::Inner;

/// An optional `T` stored inline.
///
/// ```rust
/// use inplace_optional::Optional;
///
/// let mut c = Optional::<i32>::new();
/// assert!(!c.has_value());
///
/// c.assign(5);
/// assert_eq!(c.value(), Ok(&5));
///
/// c.reset();
/// assert!(!c.has_value());
///
/// c.emplace(7_i32);
/// assert_eq!(c.value(), Ok(&7));
///
/// let d = Optional::new();
/// c.assign_from(d);
/// assert!(!c.has_value());
/// ```
pub struct Optional<T> {
    inner: Inner<T>,
}

impl<T> Optional<T> {
    /// Creates an empty `Optional`. No element is constructed.
    #[inline]
    pub const fn new() -> Self {
        Self { inner: Inner::empty() }
    }

    /// Creates an `Optional` holding `value`.
    #[inline]
    pub const fn some(value: T) -> Self {
        Self { inner: Inner::occupied(value) }
    }

    /// Creates an `Optional` holding a clone of `value`.
    ///
    /// If `T::clone` panics nothing has been stored yet.
    pub fn some_cloned(value: &T) -> Self
    where
        T: Clone,
    {
        Self::some(value.clone())
    }

    /// Move-constructs from `source`, leaving `source` empty.
    ///
    /// An empty `source` yields an empty result.
    pub fn take_from(source: &mut Self) -> Self {
        match source.take() {
            Some(value) => Self::some(value),
            None => Self::new(),
        }
    }

    /// Returns `true` if a value is present.
    #[inline(always)]
    pub const fn has_value(&self) -> bool {
        self.inner.present
    }

    /// Returns `true` if no value is present.
    #[inline(always)]
    pub const fn is_empty(&self) -> bool {
        !self.inner.present
    }

    /// Constructs `value` into the empty slot and raises the presence flag.
    #[inline]
    fn construct(&mut self, value: T) -> &mut T {
        debug_assert!(!self.inner.present, "construct over a live value");
        lifecycle!("constructed in place", T);
        let stored = slot::write(&mut self.inner.value, value);
        self.inner.present = true;
        stored
    }

    /// Stores `value`, moving it in.
    ///
    /// If empty, `value` is moved into the slot. If a value is already
    /// present, `value` is assigned over it with `=` rather than the old value
    /// being reset and a new one constructed.
    pub fn assign(&mut self, value: T) -> &mut T {
        if self.inner.present {
            lifecycle!("assigned in place", T);
            // SAFETY: `present` is set.
            let current = unsafe { slot::assume_init_mut(&mut self.inner.value) };
            *current = value;
            current
        } else {
            self.construct(value)
        }
    }

    /// Stores a copy of `value`.
    ///
    /// If empty, a clone is constructed into the slot. If a value is already
    /// present, [`Clone::clone_from`] reuses the existing value's resources.
    pub fn assign_cloned(&mut self, value: &T) -> &mut T
    where
        T: Clone,
    {
        if self.inner.present {
            lifecycle!("clone-assigned in place", T);
            // SAFETY: `present` is set.
            let current = unsafe { slot::assume_init_mut(&mut self.inner.value) };
            current.clone_from(value);
            current
        } else {
            let value = value.clone();
            self.construct(value)
        }
    }

    /// Move-assigns from another `Optional`.
    ///
    /// An empty `source` resets `self`; otherwise this behaves like
    /// [`assign`](Self::assign) with the source's value.
    pub fn assign_from(&mut self, source: Self) {
        match source.into_option() {
            Some(value) => {
                self.assign(value);
            }
            None => self.reset(),
        }
    }

    /// Move-assigns from `source`, leaving `source` empty.
    pub fn move_from(&mut self, source: &mut Self) {
        match source.take() {
            Some(value) => {
                self.assign(value);
            }
            None => self.reset(),
        }
    }

    /// Resets, then constructs a new value from `args` via `T::from`.
    ///
    /// Multi-argument construction goes through a tuple `From` impl, or
    /// through [`emplace_with`](Self::emplace_with).
    pub fn emplace<A>(&mut self, args: A) -> &mut T
    where
        T: From<A>,
    {
        self.emplace_with(|| T::from(args))
    }

    /// Resets, then constructs a new value from `make`.
    ///
    /// The old value is dropped before `make` runs. If `make` panics the
    /// `Optional` is left empty.
    pub fn emplace_with<F>(&mut self, make: F) -> &mut T
    where
        F: FnOnce() -> T,
    {
        self.reset();
        lifecycle!("emplacing", T);
        let value = make();
        self.construct(value)
    }

    /// Drops the contained value, if any. Idempotent.
    pub fn reset(&mut self) {
        if !self.inner.present {
            return;
        }
        lifecycle!("reset", T);
        // Clear the flag first: a panicking `Drop` must not run again from our own drop.
        self.inner.present = false;
        // SAFETY: the flag was set, so the slot is initialized; it is now marked empty.
        unsafe { slot::drop_in_place(&mut self.inner.value) }
    }

    /// Takes the value out, leaving the `Optional` empty.
    pub fn take(&mut self) -> Option<T> {
        if !self.inner.present {
            return None;
        }
        self.inner.present = false;
        // SAFETY: the flag was set; ownership moves to the caller.
        Some(unsafe { slot::read(&self.inner.value) })
    }

    /// Returns a shared reference to the value without checking presence.
    ///
    /// # Safety
    /// A value must be present ([`has_value`](Self::has_value) returns `true`).
    #[inline(always)]
    pub unsafe fn get_unchecked(&self) -> &T {
        debug_assert!(self.inner.present, "unchecked access on an empty Optional");
        // SAFETY: caller guarantees presence.
        unsafe { slot::assume_init_ref(&self.inner.value) }
    }

    /// Returns an exclusive reference to the value without checking presence.
    ///
    /// # Safety
    /// A value must be present ([`has_value`](Self::has_value) returns `true`).
    #[inline(always)]
    pub unsafe fn get_unchecked_mut(&mut self) -> &mut T {
        debug_assert!(self.inner.present, "unchecked access on an empty Optional");
        // SAFETY: caller guarantees presence.
        unsafe { slot::assume_init_mut(&mut self.inner.value) }
    }

    /// Moves the value out without checking presence.
    ///
    /// # Safety
    /// A value must be present ([`has_value`](Self::has_value) returns `true`).
    #[inline(always)]
    pub unsafe fn into_inner_unchecked(mut self) -> T {
        debug_assert!(self.inner.present, "unchecked access on an empty Optional");
        self.inner.present = false;
        // SAFETY: caller guarantees presence; the flag is cleared so `Drop` skips it.
        unsafe { slot::read(&self.inner.value) }
    }

    /// Returns a shared reference to the value.
    ///
    /// # Errors
    /// Returns [`BadOptionalAccess`] if no value is present.
    #[inline]
    pub fn value(&self) -> Result<&T, BadOptionalAccess> {
        if self.inner.present {
            // SAFETY: `present` is set.
            Ok(unsafe { slot::assume_init_ref(&self.inner.value) })
        } else {
            lifecycle!("checked access on empty", T);
            Err(BadOptionalAccess)
        }
    }

    /// Returns an exclusive reference to the value.
    ///
    /// # Errors
    /// Returns [`BadOptionalAccess`] if no value is present.
    #[inline]
    pub fn value_mut(&mut self) -> Result<&mut T, BadOptionalAccess> {
        if self.inner.present {
            // SAFETY: `present` is set.
            Ok(unsafe { slot::assume_init_mut(&mut self.inner.value) })
        } else {
            lifecycle!("checked access on empty", T);
            Err(BadOptionalAccess)
        }
    }

    /// Moves the value out.
    ///
    /// # Errors
    /// Returns [`BadOptionalAccess`] if no value is present.
    pub fn into_value(mut self) -> Result<T, BadOptionalAccess> {
        self.take().ok_or_else(|| {
            lifecycle!("checked access on empty", T);
            BadOptionalAccess
        })
    }

    /// Borrows the value as a standard `Option`.
    #[inline]
    pub fn as_option(&self) -> Option<&T> {
        if self.inner.present {
            // SAFETY: `present` is set.
            Some(unsafe { slot::assume_init_ref(&self.inner.value) })
        } else {
            None
        }
    }

    /// Mutably borrows the value as a standard `Option`.
    #[inline]
    pub fn as_mut_option(&mut self) -> Option<&mut T> {
        if self.inner.present {
            // SAFETY: `present` is set.
            Some(unsafe { slot::assume_init_mut(&mut self.inner.value) })
        } else {
            None
        }
    }

    /// Converts into a standard `Option`.
    pub fn into_option(mut self) -> Option<T> {
        self.take()
    }
}

impl<T> Default for Optional<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for Optional<T> {
    fn drop(&mut self) {
        self.reset();
    }
}

impl<T: Clone> Clone for Optional<T> {
    fn clone(&self) -> Self {
        match self.as_option() {
            Some(value) => Self::some(value.clone()),
            None => Self::new(),
        }
    }

    fn clone_from(&mut self, source: &Self) {
        match source.as_option() {
            Some(value) => {
                self.assign_cloned(value);
            }
            None => self.reset(),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Optional<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.as_option() {
            Some(value) => f.debug_tuple("Optional::some").field(value).finish(),
            None => f.write_str("Optional::empty"),
        }
    }
}

impl<T> From<T> for Optional<T> {
    fn from(value: T) -> Self {
        Self::some(value)
    }
}

impl<T> From<Option<T>> for Optional<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Self::some(value),
            None => Self::new(),
        }
    }
}

impl<T> From<Optional<T>> for Option<T> {
    fn from(optional: Optional<T>) -> Self {
        optional.into_option()
    }
}
