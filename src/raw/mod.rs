//! Raw building blocks.
//!
//! This layer exposes no public surface and concentrates the crate's unsafe
//! slot handling in a single module that can be audited on its own.

pub(crate) mod slot;
