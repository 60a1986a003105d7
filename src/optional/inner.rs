use core::mem::MaybeUninit;

/// Layout note: store `value` first; keep `present` in tail padding.
pub(super) struct Inner<T> {
    pub(super) value: MaybeUninit<T>,
    pub(super) present: bool,
}

impl<T> Inner<T> {
    pub(super) const fn empty() -> Self {
        Self {
            value: MaybeUninit::uninit(),
            present: false,
        }
    }

    pub(super) const fn occupied(value: T) -> Self {
        Self {
            value: MaybeUninit::new(value),
            present: true,
        }
    }
}
