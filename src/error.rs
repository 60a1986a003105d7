//! Error type reported by checked access on an empty [`Optional`](crate::Optional).

/// Returned by [`Optional::value`](crate::Optional::value) and its mutable
/// and consuming counterparts when no value is present.
///
/// Carries no payload: the only thing it reports is that access was
/// attempted on an absent value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BadOptionalAccess;

impl core::fmt::Display for BadOptionalAccess {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("bad optional access")
    }
}

impl std::error::Error for BadOptionalAccess {}
