//! # theme-store
//!
//! Client-side dark/light theme preference for WASM UIs: a reactive
//! boolean seeded from a persisted choice in `localStorage` (falling back
//! to the system `prefers-color-scheme` signal) and mirrored back to
//! storage on every mutation.
//!
//! The store never sniffs its environment. It is constructed over a
//! [`platform::Platform`] implementation chosen by the caller:
//! `BrowserPlatform` under hydration, [`platform::StubPlatform`] for
//! server-side rendering and tests. The same store code runs in both.

pub mod observable;
pub mod platform;
pub mod theme;
