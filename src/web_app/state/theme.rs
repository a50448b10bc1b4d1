// web_app/state/theme.rs - Dark/light theme preference
//
// Resolution order on first use: persisted "theme" value, then the OS
// color-scheme preference, then light. Every change is mirrored to the
// root element's "dark" class and written back to storage.

use std::sync::Arc;

use crate::web_app::platform::Platform;

/// Storage key holding "dark" or "light"
pub const THEME_STORAGE_KEY: &str = "theme";

/// Class toggled on the document root while dark mode is active
pub const DARK_CLASS: &str = "dark";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Anything other than "dark" reads as light
    pub fn parse(s: &str) -> Self {
        if s == "dark" {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    pub fn is_dark(&self) -> bool {
        matches!(self, Theme::Dark)
    }
}

/// Theme flag owned by the application state
#[derive(Clone)]
pub struct ThemePreference {
    theme: Theme,
    resolved: bool,
    platform: Arc<dyn Platform>,
}

impl std::fmt::Debug for ThemePreference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThemePreference")
            .field("theme", &self.theme)
            .field("resolved", &self.resolved)
            .finish_non_exhaustive()
    }
}

impl ThemePreference {
    /// Unresolved preference; light until [`Self::resolve`] runs
    pub fn new(platform: Arc<dyn Platform>) -> Self {
        Self {
            theme: Theme::Light,
            resolved: false,
            platform,
        }
    }

    /// Loads the initial theme and applies it
    ///
    /// Runs once; later calls return the current theme. Outside an
    /// interactive context nothing is read and the theme stays light.
    pub fn resolve(&mut self) -> Theme {
        if self.resolved || !self.platform.is_interactive() {
            return self.theme;
        }
        self.resolved = true;

        self.theme = match self.platform.storage_get(THEME_STORAGE_KEY) {
            Some(stored) if !stored.is_empty() => Theme::parse(&stored),
            _ if self.platform.prefers_dark() => Theme::Dark,
            _ => Theme::Light,
        };
        tracing::debug!("Resolved theme: {}", self.theme.as_str());
        self.apply();
        self.theme
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn is_dark(&self) -> bool {
        self.theme.is_dark()
    }

    pub fn is_resolved(&self) -> bool {
        self.resolved
    }

    pub fn toggle(&mut self) {
        self.set_dark(!self.is_dark());
    }

    /// Side effects only run when the value actually changes
    pub fn set_dark(&mut self, dark: bool) {
        if self.is_dark() == dark {
            return;
        }
        self.theme = if dark { Theme::Dark } else { Theme::Light };
        self.apply();
    }

    fn apply(&self) {
        if !self.platform.is_interactive() {
            return;
        }
        self.platform.set_root_class(DARK_CLASS, self.is_dark());
        self.platform
            .storage_set(THEME_STORAGE_KEY, self.theme.as_str());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::web_app::platform::{MemoryPlatform, NoopPlatform};

    fn preference(platform: &MemoryPlatform) -> ThemePreference {
        ThemePreference::new(Arc::new(platform.clone()))
    }

    #[test]
    fn test_theme_parse() {
        assert_eq!(Theme::parse("dark"), Theme::Dark);
        assert_eq!(Theme::parse("light"), Theme::Light);
        assert_eq!(Theme::parse("sepia"), Theme::Light);
    }

    #[test]
    fn test_starts_light_and_unresolved() {
        let theme = preference(&MemoryPlatform::new().with_prefers_dark(true));
        assert!(!theme.is_dark());
        assert!(!theme.is_resolved());
    }

    #[test]
    fn test_resolve_prefers_stored_value() {
        let platform = MemoryPlatform::new()
            .with_prefers_dark(true)
            .with_stored(THEME_STORAGE_KEY, "light");
        let mut theme = preference(&platform);
        assert_eq!(theme.resolve(), Theme::Light);
        assert!(!platform.has_root_class(DARK_CLASS));
    }

    #[test]
    fn test_resolve_follows_os_when_nothing_stored() {
        let platform = MemoryPlatform::new().with_prefers_dark(true);
        let mut theme = preference(&platform);
        assert_eq!(theme.resolve(), Theme::Dark);
        assert!(platform.has_root_class(DARK_CLASS));
        assert_eq!(platform.stored(THEME_STORAGE_KEY).as_deref(), Some("dark"));
    }

    #[test]
    fn test_empty_stored_value_falls_through_to_os() {
        let platform = MemoryPlatform::new()
            .with_prefers_dark(true)
            .with_stored(THEME_STORAGE_KEY, "");
        assert_eq!(preference(&platform).resolve(), Theme::Dark);
    }

    #[test]
    fn test_resolve_defaults_to_light() {
        let platform = MemoryPlatform::new();
        let mut theme = preference(&platform);
        assert_eq!(theme.resolve(), Theme::Light);
        assert_eq!(platform.stored(THEME_STORAGE_KEY).as_deref(), Some("light"));
    }

    #[test]
    fn test_resolve_runs_once() {
        let platform = MemoryPlatform::new().with_stored(THEME_STORAGE_KEY, "dark");
        let mut theme = preference(&platform);
        theme.resolve();
        theme.toggle();
        assert_eq!(theme.resolve(), Theme::Light, "second resolve keeps current value");
    }

    #[test]
    fn test_toggle_persists_and_flips_class() {
        let platform = MemoryPlatform::new().with_stored(THEME_STORAGE_KEY, "dark");
        let mut theme = preference(&platform);
        theme.resolve();

        theme.toggle();
        assert!(!theme.is_dark());
        assert_eq!(platform.stored(THEME_STORAGE_KEY).as_deref(), Some("light"));
        assert!(!platform.has_root_class(DARK_CLASS));

        theme.toggle();
        assert!(theme.is_dark());
        assert_eq!(platform.stored(THEME_STORAGE_KEY).as_deref(), Some("dark"));
        assert!(platform.has_root_class(DARK_CLASS));
    }

    #[test]
    fn test_set_same_value_has_no_side_effect() {
        let platform = MemoryPlatform::new();
        let mut theme = preference(&platform);
        theme.set_dark(false);
        assert_eq!(platform.stored(THEME_STORAGE_KEY), None);
    }

    #[test]
    fn test_non_interactive_context_is_inert() {
        let mut theme = ThemePreference::new(Arc::new(NoopPlatform));
        assert_eq!(theme.resolve(), Theme::Light);
        assert!(!theme.is_resolved());
        theme.toggle();
        assert!(theme.is_dark(), "flag still flips without a browser");
    }
}
