//! Display mode: which slice of the data the site presents.

/// Browser storage key for the persisted mode. The stored values are the
/// legacy `"true"`/`"false"` strings, so previously saved preferences keep
/// loading.
pub const MODE_STORAGE_KEY: &str = "research-mode";

/// Which slice of the data the site is currently presenting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayMode {
    /// Expert-reviewed data only.
    Default,
    /// All public data, with per-source selection enabled.
    Research,
}

impl Default for DisplayMode {
    fn default() -> Self {
        DisplayMode::Default
    }
}

impl DisplayMode {
    pub fn is_research(&self) -> bool {
        matches!(self, DisplayMode::Research)
    }

    pub fn toggled(&self) -> DisplayMode {
        match self {
            DisplayMode::Default => DisplayMode::Research,
            DisplayMode::Research => DisplayMode::Default,
        }
    }

    /// Value stored under [`MODE_STORAGE_KEY`].
    pub fn storage_value(&self) -> &'static str {
        match self {
            DisplayMode::Research => "true",
            DisplayMode::Default => "false",
        }
    }

    /// Interpret a stored value; anything but `"true"` is the default mode.
    pub fn from_storage(value: &str) -> DisplayMode {
        if value == "true" {
            DisplayMode::Research
        } else {
            DisplayMode::Default
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_round_trip() {
        for mode in [DisplayMode::Default, DisplayMode::Research] {
            assert_eq!(DisplayMode::from_storage(mode.storage_value()), mode);
        }
    }

    #[test]
    fn test_unknown_storage_value_is_default() {
        assert_eq!(DisplayMode::from_storage("yes"), DisplayMode::Default);
        assert_eq!(DisplayMode::from_storage(""), DisplayMode::Default);
    }

    #[test]
    fn test_toggle() {
        assert_eq!(DisplayMode::Default.toggled(), DisplayMode::Research);
        assert_eq!(DisplayMode::Research.toggled(), DisplayMode::Default);
    }
}
