// web_app/platform.rs - Browser side effects behind a trait
//
// Theme handling needs three browser facilities: key/value storage, the
// root element's class list and the OS color-scheme query. They are
// injected through `Platform` so the same state code runs during SSR
// (NoopPlatform), in tests (MemoryPlatform) and in the browser
// (BrowserPlatform, hydrate only).

use std::collections::{BTreeSet, HashMap};
use std::sync::{Arc, Mutex, PoisonError};

/// Browser facilities used by the state helpers
///
/// Every method must be a silent no-op when the facility is unavailable.
pub trait Platform: Send + Sync {
    /// Whether browser APIs are reachable (false during SSR)
    fn is_interactive(&self) -> bool;

    fn storage_get(&self, key: &str) -> Option<String>;

    fn storage_set(&self, key: &str, value: &str);

    /// Adds (`enabled`) or removes `class` on the document root element
    fn set_root_class(&self, class: &str, enabled: bool);

    /// `prefers-color-scheme: dark`
    fn prefers_dark(&self) -> bool;
}

/// Platform for non-interactive contexts: reads nothing, writes nothing
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopPlatform;

impl Platform for NoopPlatform {
    fn is_interactive(&self) -> bool {
        false
    }

    fn storage_get(&self, _key: &str) -> Option<String> {
        None
    }

    fn storage_set(&self, _key: &str, _value: &str) {}

    fn set_root_class(&self, _class: &str, _enabled: bool) {}

    fn prefers_dark(&self) -> bool {
        false
    }
}

#[derive(Debug, Default)]
struct MemoryInner {
    storage: HashMap<String, String>,
    root_classes: BTreeSet<String>,
    prefers_dark: bool,
}

/// In-memory platform; clones share the same storage and class list
#[derive(Clone, Debug, Default)]
pub struct MemoryPlatform {
    inner: Arc<Mutex<MemoryInner>>,
}

impl MemoryPlatform {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the simulated OS color-scheme preference
    pub fn with_prefers_dark(self, prefers_dark: bool) -> Self {
        self.with_inner(|inner| inner.prefers_dark = prefers_dark);
        self
    }

    /// Pre-populates a storage entry
    pub fn with_stored(self, key: &str, value: &str) -> Self {
        self.with_inner(|inner| {
            inner.storage.insert(key.to_string(), value.to_string());
        });
        self
    }

    pub fn has_root_class(&self, class: &str) -> bool {
        self.with_inner(|inner| inner.root_classes.contains(class))
    }

    pub fn stored(&self, key: &str) -> Option<String> {
        self.with_inner(|inner| inner.storage.get(key).cloned())
    }

    // A poisoned lock only means another test thread panicked mid-update;
    // the maps are still usable.
    fn with_inner<R>(&self, f: impl FnOnce(&mut MemoryInner) -> R) -> R {
        let mut guard = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut guard)
    }
}

impl Platform for MemoryPlatform {
    fn is_interactive(&self) -> bool {
        true
    }

    fn storage_get(&self, key: &str) -> Option<String> {
        self.stored(key)
    }

    fn storage_set(&self, key: &str, value: &str) {
        self.with_inner(|inner| {
            inner.storage.insert(key.to_string(), value.to_string());
        });
    }

    fn set_root_class(&self, class: &str, enabled: bool) {
        self.with_inner(|inner| {
            if enabled {
                inner.root_classes.insert(class.to_string());
            } else {
                inner.root_classes.remove(class);
            }
        });
    }

    fn prefers_dark(&self) -> bool {
        self.with_inner(|inner| inner.prefers_dark)
    }
}

/// Real browser APIs via web-sys
///
/// Holds no handles; every call looks up `window()` again, so the type is
/// `Send + Sync` and can live in Leptos context.
#[cfg(feature = "hydrate")]
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserPlatform;

#[cfg(feature = "hydrate")]
impl BrowserPlatform {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }

    fn root() -> Option<web_sys::Element> {
        web_sys::window()?.document()?.document_element()
    }
}

#[cfg(feature = "hydrate")]
impl Platform for BrowserPlatform {
    fn is_interactive(&self) -> bool {
        web_sys::window().is_some()
    }

    fn storage_get(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok().flatten()
    }

    fn storage_set(&self, key: &str, value: &str) {
        if let Some(storage) = Self::storage() {
            if let Err(e) = storage.set_item(key, value) {
                tracing::warn!("Failed to persist {}: {:?}", key, e);
            }
        }
    }

    fn set_root_class(&self, class: &str, enabled: bool) {
        if let Some(root) = Self::root() {
            let classes = root.class_list();
            let _ = if enabled {
                classes.add_1(class)
            } else {
                classes.remove_1(class)
            };
        }
    }

    fn prefers_dark(&self) -> bool {
        web_sys::window()
            .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
            .map(|mq| mq.matches())
            .unwrap_or(false)
    }
}

/// Platform for the current build target
pub fn default_platform() -> Arc<dyn Platform> {
    cfg_if::cfg_if! {
        if #[cfg(all(feature = "hydrate", target_arch = "wasm32"))] {
            Arc::new(BrowserPlatform)
        } else {
            Arc::new(NoopPlatform)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_noop_platform_does_nothing() {
        let platform = NoopPlatform;
        platform.storage_set("theme", "dark");
        platform.set_root_class("dark", true);
        assert!(!platform.is_interactive());
        assert_eq!(platform.storage_get("theme"), None);
        assert!(!platform.prefers_dark());
    }

    #[test]
    fn test_memory_platform_storage() {
        let platform = MemoryPlatform::new().with_stored("theme", "light");
        assert_eq!(platform.storage_get("theme").as_deref(), Some("light"));
        platform.storage_set("theme", "dark");
        assert_eq!(platform.stored("theme").as_deref(), Some("dark"));
    }

    #[test]
    fn test_memory_platform_root_class() {
        let platform = MemoryPlatform::new();
        platform.set_root_class("dark", true);
        assert!(platform.has_root_class("dark"));
        platform.set_root_class("dark", false);
        assert!(!platform.has_root_class("dark"));
    }

    #[test]
    fn test_memory_platform_clones_share_state() {
        let platform = MemoryPlatform::new().with_prefers_dark(true);
        let observer = platform.clone();
        platform.storage_set("theme", "dark");
        assert_eq!(observer.stored("theme").as_deref(), Some("dark"));
        assert!(observer.prefers_dark());
    }

    #[test]
    fn test_default_platform_is_inert_natively() {
        assert!(!default_platform().is_interactive());
    }
}
