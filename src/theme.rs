//! Dark/light theme preference store.
//!
//! A [`ThemeStore`] seeds itself from a previously persisted choice,
//! falling back to the system `prefers-color-scheme` signal, and mirrors
//! every mutation back to persistent storage before notifying subscribers.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use crate::observable::{Subscription, Writable};
use crate::platform::Platform;

/// Storage key for the persisted preference.
pub const STORAGE_KEY: &str = "theme";

const DARK: &str = "dark";
const LIGHT: &str = "light";

/// Reactive dark-mode preference (`true` = dark) backed by a [`Platform`].
///
/// Construct one at application start and thread it through explicitly;
/// there is no global instance.
pub struct ThemeStore<P: Platform> {
    platform: P,
    value: Writable<bool>,
}

impl<P: Platform> ThemeStore<P> {
    /// Build the store and determine the startup value.
    ///
    /// A persisted non-empty value wins: `true` iff it equals `"dark"`.
    /// Without one, the system preference decides. Platforms without
    /// storage or a preference signal therefore start light.
    pub fn new(platform: P) -> Self {
        let initial = read_preference(&platform);
        Self {
            platform,
            value: Writable::new(initial),
        }
    }

    /// Current preference.
    pub fn is_dark(&self) -> bool {
        self.value.get()
    }

    /// Register an observer. It fires immediately with the current value,
    /// then once per mutation until unsubscribed.
    pub fn subscribe(&self, callback: impl FnMut(bool) + 'static) -> Subscription {
        self.value.subscribe(callback)
    }

    /// Flip the preference.
    pub fn toggle(&self) {
        self.write_through(!self.value.get());
    }

    /// Set the preference unconditionally.
    pub fn set(&self, dark: bool) {
        self.write_through(dark);
    }

    // Write-then-notify: storage reflects the new value before any
    // subscriber observes it.
    fn write_through(&self, dark: bool) {
        self.platform.write(STORAGE_KEY, if dark { DARK } else { LIGHT });
        self.value.set(dark);
    }
}

/// Startup precedence: persisted choice first, then the system signal.
///
/// An empty stored string counts as absent.
fn read_preference<P: Platform>(platform: &P) -> bool {
    match platform.read(STORAGE_KEY) {
        Some(stored) if !stored.is_empty() => stored == DARK,
        _ => platform.prefers_dark(),
    }
}
