//! Host GUI capabilities used during tray registration.
//!
//! The surrounding desktop shell owns the real tray icon, native menus
//! and window lifecycle. This module narrows that surface to the
//! handful of capabilities registration needs, so the adapter can be
//! driven by the real shell in production and by in-memory fakes in
//! tests.

use std::future::Future;
use std::path::{Path, PathBuf};
use std::pin::Pin;
use std::sync::Arc;

use crate::error::HostError;
use crate::menu::ContextMenu;

/// Boxed future returned by [`AppLifecycle::when_ready`].
pub type ReadyFuture<'a> = Pin<Box<dyn Future<Output = ()> + Send + 'a>>;

/// Builds shell windows from an argument vector.
pub type WindowFactory = Box<dyn Fn(&[String]) -> Result<(), HostError> + Send + Sync>;

/// Application lifecycle of the host shell.
pub trait AppLifecycle: Send + Sync {
    /// Resolves once the host can create native UI objects.
    ///
    /// Tray icons created before this point crash on some platforms,
    /// so registration always awaits readiness first.
    fn when_ready(&self) -> ReadyFuture<'_>;

    /// Asks the host to quit the application.
    fn request_quit(&self);
}

/// Creates the native tray icon.
pub trait TrayFactory: Send + Sync {
    fn create_tray(&self, icon_path: &Path) -> Result<Box<dyn TrayHandle>, HostError>;
}

/// A live tray icon owned by the host.
pub trait TrayHandle: Send {
    fn set_tooltip(&mut self, tooltip: &str) -> Result<(), HostError>;
    fn set_context_menu(&mut self, menu: Box<dyn HostMenu>) -> Result<(), HostError>;
}

/// An opaque native menu realized by the host.
pub trait HostMenu: Send {
    /// Number of top-level entries, separators included.
    fn entry_count(&self) -> usize;
}

/// Realizes a declarative menu template as a native menu.
pub trait MenuBuilder: Send + Sync {
    fn build_from_template(&self, menu: &ContextMenu) -> Result<Box<dyn HostMenu>, HostError>;
}

/// Opens URLs with the operating system's default handler.
pub trait UrlOpener: Send + Sync {
    fn open(&self, url: &str) -> std::io::Result<()>;
}

/// [`UrlOpener`] backed by the platform's default browser.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemUrlOpener;

impl UrlOpener for SystemUrlOpener {
    fn open(&self, url: &str) -> std::io::Result<()> {
        open::that(url)
    }
}

/// Everything the tray adapter needs from the host shell.
#[derive(Clone)]
pub struct HostCapabilities {
    pub lifecycle: Arc<dyn AppLifecycle>,
    pub tray: Arc<dyn TrayFactory>,
    pub menus: Arc<dyn MenuBuilder>,
    pub urls: Arc<dyn UrlOpener>,
}

/// A named icon file resolved against a list of search directories.
///
/// Resolution is deferred until registration so a missing icon shows
/// up as a registration error rather than a construction failure at
/// startup.
#[derive(Debug, Clone)]
pub struct IconResource {
    name: String,
    search_dirs: Vec<PathBuf>,
}

impl IconResource {
    /// Creates an icon reference with the default `icons` search dir.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            search_dirs: vec![PathBuf::from("icons")],
        }
    }

    /// Replaces the search directories.
    pub fn with_search_dirs(mut self, dirs: Vec<PathBuf>) -> Self {
        self.search_dirs = dirs;
        self
    }

    /// Returns the first existing candidate file.
    pub fn resolve(&self) -> Result<PathBuf, HostError> {
        for dir in &self.search_dirs {
            let candidate = dir.join(&self.name);
            if candidate.is_file() {
                return Ok(candidate);
            }
        }
        Err(HostError::IconNotFound(self.name.clone()))
    }
}
