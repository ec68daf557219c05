//! System tray registration for the CodeFlare shell.
//!
//! The shell shows one tray icon with a small context menu: a version
//! entry linking to the homepage, the active profile directory, a
//! test-window launcher, a bug report link, and quit. Registration
//! happens at most once per process and only after the host GUI
//! signals readiness.
//!
//! The host GUI is abstracted behind the capability traits in this
//! crate ([`AppLifecycle`], [`TrayFactory`], [`MenuBuilder`],
//! [`UrlOpener`]); nothing here links against a specific toolkit,
//! which keeps the whole registration path testable with in-memory
//! fakes.

mod error;
mod host;
mod menu;
mod registrar;

pub use error::{ActionError, HostError, RegistrationError};
pub use host::{
    AppLifecycle, HostCapabilities, HostMenu, IconResource, MenuBuilder, ReadyFuture,
    SystemUrlOpener, TrayFactory, TrayHandle, UrlOpener, WindowFactory,
};
pub use menu::{
    ContextMenu, MenuAction, MenuEntry, TEST_WINDOW_ARGV, build_context_menu, profile_label,
};
pub use registrar::{Registration, RegistrationGuard, TrayAdapter};
