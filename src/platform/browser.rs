//! Browser platform backed by `localStorage` and `matchMedia`.
//!
//! Every accessor degrades to the absent/false case when the window,
//! storage, or media-query API is missing, so a headless or storage-less
//! session behaves like a fresh one.

use super::Platform;

/// Platform over the real browser window.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserPlatform;

/// Route `log` output to the browser console. Call once at hydration.
pub fn init_logging() {
    let _ = console_log::init_with_level(log::Level::Debug);
}

fn storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

impl Platform for BrowserPlatform {
    fn read(&self, key: &str) -> Option<String> {
        storage().and_then(|s| s.get_item(key).ok().flatten())
    }

    fn write(&self, key: &str, value: &str) {
        let Some(storage) = storage() else {
            log::warn!("localStorage unavailable, dropping write of {key:?}");
            return;
        };
        if let Err(err) = storage.set_item(key, value) {
            log::warn!("localStorage write of {key:?} failed: {err:?}");
        }
    }

    fn prefers_dark(&self) -> bool {
        let dark = web_sys::window()
            .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
            .map_or(false, |mq| mq.matches());
        log::debug!("system prefers-color-scheme dark: {dark}");
        dark
    }
}
