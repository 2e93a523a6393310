//! Tagged inherit/override values and their sentinel encoding.

/// A single overridable setting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Setting<T> {
    /// Keep the base value.
    Inherit,
    /// Replace the base value.
    Override(T),
}

impl<T> Setting<T> {
    /// The override if present, otherwise `base`.
    pub fn apply(self, base: T) -> T {
        match self {
            Setting::Inherit => base,
            Setting::Override(v) => v,
        }
    }

    pub fn is_inherit(&self) -> bool {
        matches!(self, Setting::Inherit)
    }
}

impl Setting<i16> {
    /// Decode a persisted integer field where `0` means inherit.
    pub fn from_sentinel(raw: i16) -> Self {
        if raw == 0 {
            Setting::Inherit
        } else {
            Setting::Override(raw)
        }
    }

    /// Encode back to the persisted integer form.
    pub fn to_sentinel(self) -> i16 {
        match self {
            Setting::Inherit => 0,
            Setting::Override(v) => v,
        }
    }
}
