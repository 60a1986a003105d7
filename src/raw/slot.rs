//! Unsafe, centralized operations on `MaybeUninit<T>` slots.
//!
//! `Optional<T>` keeps its element in a `MaybeUninit<T>` slot next to a
//! presence flag. Every raw operation on that slot goes through this module:
//! - writes (`write`)
//! - reads (`read`)
//! - drops (`drop_in_place`)
//! - conversion to references (`assume_init_ref` / `assume_init_mut`)
//!
//! ## Core invariant
//! A slot is initialized *exactly when* its owner's presence flag is set.
//! Every function here documents which side of that invariant it requires.

use core::{mem::MaybeUninit, ptr};

/// Interprets an initialized slot as `&T`.
///
/// # Safety
/// - `slot` must be initialized.
#[inline(always)]
pub(crate) unsafe fn assume_init_ref<T>(slot: &MaybeUninit<T>) -> &T {
    // SAFETY: caller asserts `slot` is initialized.
    unsafe { slot.assume_init_ref() }
}

/// Interprets an initialized slot as `&mut T`.
///
/// # Safety
/// - `slot` must be initialized.
#[inline(always)]
pub(crate) unsafe fn assume_init_mut<T>(slot: &mut MaybeUninit<T>) -> &mut T {
    // SAFETY: caller asserts `slot` is initialized; `&mut` gives exclusivity.
    unsafe { slot.assume_init_mut() }
}

/// Writes a value into an uninitialized slot and returns a reference to it.
///
/// Never drops the previous bytes. Writing over a live value leaks it, which
/// is safe but wrong; callers only write while the presence flag is clear.
#[inline(always)]
pub(crate) fn write<T>(slot: &mut MaybeUninit<T>, value: T) -> &mut T {
    slot.write(value)
}

/// Bitwise-moves an initialized value out of a slot.
///
/// # Safety
/// - `slot` must be initialized.
/// - The caller must treat the slot as uninitialized afterwards (clear the
///   presence flag), otherwise the value is dropped twice.
#[inline(always)]
pub(crate) unsafe fn read<T>(slot: &MaybeUninit<T>) -> T {
    // SAFETY: caller asserts initialization and takes over ownership.
    unsafe { ptr::read(slot.as_ptr()) }
}

/// Drops an initialized value in place.
///
/// # Safety
/// - `slot` must be initialized.
/// - Must not be called more than once for the same logical value.
#[inline(always)]
pub(crate) unsafe fn drop_in_place<T>(slot: &mut MaybeUninit<T>) {
    // SAFETY: caller asserts initialization and drop uniqueness.
    unsafe { ptr::drop_in_place(slot.as_mut_ptr()) }
}
