//! No-op platform for non-interactive contexts.

#[cfg(test)]
#[path = "stub_test.rs"]
mod stub_test;

use super::Platform;

/// Platform for server-side rendering and other contexts without a
/// browser window. Reads see an empty store, writes vanish, and the
/// system preference reads light.
#[derive(Clone, Copy, Debug, Default)]
pub struct StubPlatform;

impl Platform for StubPlatform {
    fn read(&self, _key: &str) -> Option<String> {
        None
    }

    fn write(&self, _key: &str, _value: &str) {}

    fn prefers_dark(&self) -> bool {
        false
    }
}
