//! Lifecycle event hooks.
//!
//! With the `tracing` feature enabled, `lifecycle!` emits a `TRACE` level
//! event tagged with the element type. Without it the macro expands to
//! nothing and its arguments are never evaluated.

#[cfg(feature = "tracing")]
macro_rules! lifecycle {
    ($event:tt, $ty:ty) => {
        ::tracing::trace!(
            target: "inplace_optional",
            element = ::core::any::type_name::<$ty>(),
            $event
        )
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! lifecycle {
    ($event:tt, $ty:ty) => {};
}

pub(crate) use lifecycle;
