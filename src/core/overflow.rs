use serde::{Deserialize, Serialize};

/// Computed `overflow-x` / `overflow-y` value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Overflow {
    #[default]
    Visible,
    Hidden,
    Clip,
    Scroll,
    Auto,
}

impl Overflow {
    /// Whether content overflowing on this axis can be reached by scrolling.
    ///
    /// `visible` and `clip` never form a scrolling box. `hidden` does (it can
    /// still be scrolled programmatically) unless the caller opted to skip it.
    #[must_use]
    pub fn can_overflow(self, skip_overflow_hidden: bool) -> bool {
        match self {
            Self::Visible | Self::Clip => false,
            Self::Hidden => !skip_overflow_hidden,
            Self::Scroll | Self::Auto => true,
        }
    }
}
