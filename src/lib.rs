//! # `inplace_optional` - Inline Optional Values
//!
//! An optional-value container that stores its element inline, with no heap
//! allocation and no sentinel value of the element type.
//!
//! ## Guarantees
//!
//! ### Storage
//! - **Inline**: the element lives in a `MaybeUninit<T>` slot inside the
//!   [`Optional`] itself, sized and aligned for exactly one `T`.
//! - **Presence flag**: the slot holds a live `T` if and only if the flag is set.
//!   Nothing reads, writes or drops the slot as a `T` while the flag is clear.
//!
//! ### Lifecycle
//! - **Single drop**: a contained value is dropped exactly once, by
//!   [`Optional::reset`], by [`Optional::emplace_with`], or when the
//!   `Optional` itself is dropped (including during unwinding).
//! - **No half-built state**: if an element constructor panics (a `clone`,
//!   a `From` conversion, an `emplace_with` closure) the `Optional` is left
//!   empty, never occupied over an uninitialized slot.
//! - **Assignment reuses the value**: storing into an occupied `Optional`
//!   assigns into the existing element ([`Optional::assign`],
//!   [`Optional::assign_cloned`] through [`Clone::clone_from`]).
//! - **Moves empty the source**: [`Optional::take_from`] and
//!   [`Optional::move_from`] leave the source empty.
//!
//! ### Access
//! - **Checked**: [`Optional::value`], [`Optional::value_mut`] and
//!   [`Optional::into_value`] return [`BadOptionalAccess`] when empty.
//! - **Unchecked**: [`Optional::get_unchecked`], [`Optional::get_unchecked_mut`]
//!   and [`Optional::into_inner_unchecked`] are `unsafe` and skip the check in
//!   release builds.
//!
//! ## Features
//!
//! - `tracing`: emit `TRACE` events for lifecycle transitions.
//! - `proptest`: export [`testing`] strategies.
//!
//! ## Example
//!
//! ```rust
//! use inplace_optional::{BadOptionalAccess, Optional};
//!
//! let mut name: Optional<String> = Optional::new();
//! assert_eq!(name.value(), Err(BadOptionalAccess));
//!
//! name.emplace("hello");
//! name.value_mut().unwrap().push_str(", world");
//! assert_eq!(name.value().map(String::as_str), Ok("hello, world"));
//!
//! if name.has_value() {
//!     // SAFETY: presence checked above.
//!     let len = unsafe { name.get_unchecked() }.len();
//!     assert_eq!(len, 12);
//! }
//! ```

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

mod error;
pub mod optional;
mod raw;
#[cfg(feature = "proptest")]
pub mod testing;
mod trace;

pub use error::BadOptionalAccess;
pub use optional::Optional;

// Compile-time assertions for memory layout
const _: () = {
    use core::mem;

    // The slot comes first and the flag sits in tail padding, so alignment
    // never grows past the element's own.
    assert!(mem::align_of::<Optional<u64>>() == mem::align_of::<u64>());
    assert!(mem::align_of::<Optional<u8>>() == mem::align_of::<u8>());

    // One element plus a flag, rounded up to the element's alignment.
    assert!(mem::size_of::<Optional<u8>>() == 2);
    assert!(mem::size_of::<Optional<u32>>() == 8);
    assert!(mem::size_of::<Optional<u64>>() == 16);
    assert!(mem::size_of::<Optional<[u8; 3]>>() == 4);

    // Zero-sized elements cost only the flag.
    assert!(mem::size_of::<Optional<()>>() == 1);

    // The error carries no payload.
    assert!(mem::size_of::<BadOptionalAccess>() == 0);
};
