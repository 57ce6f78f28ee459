//! Platform capabilities the theme store depends on.
//!
//! The store never sniffs its environment; it is handed a [`Platform`]
//! implementation at construction. Browser builds use `BrowserPlatform`;
//! server-side rendering and tests use [`StubPlatform`] or a fake.

#[cfg(feature = "hydrate")]
mod browser;
mod stub;

#[cfg(feature = "hydrate")]
pub use browser::{BrowserPlatform, init_logging};
pub use stub::StubPlatform;

/// Capability set: origin-scoped key-value persistence plus the system
/// color-scheme preference signal.
pub trait Platform {
    /// Persisted value for `key`, or `None` when the key is absent or
    /// storage is unavailable.
    fn read(&self, key: &str) -> Option<String>;

    /// Persist `value` under `key`. Failures are not surfaced.
    fn write(&self, key: &str, value: &str);

    /// Whether the system currently prefers a dark color scheme.
    fn prefers_dark(&self) -> bool;
}
