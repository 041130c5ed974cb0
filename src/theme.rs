use serde::{Deserialize, Serialize};

use crate::content::Icon;

/// Local storage key holding the visitor's choice.
pub const STORAGE_KEY: &str = "theme";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Root class; tailwind's `dark:` variants key off it.
    pub fn class(self) -> &'static str {
        match self {
            Theme::Light => "",
            Theme::Dark => "dark",
        }
    }

    /// Icon for the toggle: shows what clicking switches to.
    pub fn toggle_icon(self) -> Icon {
        match self {
            Theme::Light => Icon::Moon,
            Theme::Dark => Icon::Sun,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle() {
        assert_eq!(Theme::default(), Theme::Light);
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Dark.toggled().toggled(), Theme::Dark);
        assert_eq!(Theme::Dark.class(), "dark");
        assert_eq!(Theme::Light.toggle_icon(), Icon::Moon);
    }

    #[test]
    fn test_storage_format() {
        assert_eq!(serde_json::to_string(&Theme::Dark).unwrap(), "\"dark\"");
        let stored: Theme = serde_json::from_str("\"light\"").unwrap();
        assert_eq!(stored, Theme::Light);
    }
}
