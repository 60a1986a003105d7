//! `proptest` strategies for `Optional` (enabled with the `proptest` feature).

use proptest::prelude::*;

use crate::Optional;

/// Generates empty and occupied `Optional`s whose values come from `element`.
///
/// ```rust
/// use inplace_optional::testing::optional_of;
/// use proptest::prelude::*;
///
/// proptest!(|(opt in optional_of(any::<u8>()))| {
///     prop_assert_eq!(opt.has_value(), opt.value().is_ok());
/// });
/// ```
pub fn optional_of<S>(element: S) -> impl Strategy<Value = Optional<S::Value>>
where
    S: Strategy,
{
    proptest::option::of(element).prop_map(Optional::<S::Value>::from)
}
