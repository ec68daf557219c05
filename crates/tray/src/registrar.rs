//! One-shot tray registration against the host shell.
//!
//! Registration runs once per process. The guard is claimed before the
//! host-ready wait, so overlapping initialize calls cannot both reach
//! the construction steps; every caller after the first sees
//! [`Registration::AlreadyRegistered`].

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use codeflare_client::ProductInfo;
use codeflare_profiles::{ResolveOptions, profile_data_path};

use crate::error::{ActionError, RegistrationError};
use crate::host::{HostCapabilities, IconResource, TrayHandle, WindowFactory};
use crate::menu::{MenuAction, TEST_WINDOW_ARGV, build_context_menu};

/// Tracks whether the process-wide tray registration has been claimed.
///
/// Claimed at most once; a claim is terminal even when the attempt
/// that made it later fails.
#[derive(Debug, Default)]
pub struct RegistrationGuard {
    registered: AtomicBool,
}

impl RegistrationGuard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a registration attempt has been claimed.
    pub fn is_registered(&self) -> bool {
        self.registered.load(Ordering::Acquire)
    }

    /// Claims the registration. Returns true for the first caller only.
    pub fn mark_registered(&self) -> bool {
        !self.registered.swap(true, Ordering::AcqRel)
    }
}

/// Outcome of a registration call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Registration {
    /// This call performed the registration.
    Registered,
    /// An earlier call already claimed the registration.
    AlreadyRegistered,
}

/// Registers the shell's tray icon and context menu, once.
///
/// The adapter holds no live UI objects until a registration attempt
/// succeeds; afterwards the tray handle lives for the rest of the
/// process.
pub struct TrayAdapter {
    product: ProductInfo,
    host: HostCapabilities,
    icon: IconResource,
    guard: Arc<RegistrationGuard>,
    tray: Mutex<Option<Box<dyn TrayHandle>>>,
    windows: Mutex<Option<Arc<WindowFactory>>>,
}

impl TrayAdapter {
    pub fn new(
        product: ProductInfo,
        host: HostCapabilities,
        icon: IconResource,
        guard: Arc<RegistrationGuard>,
    ) -> Self {
        Self {
            product,
            host,
            icon,
            guard,
            tray: Mutex::new(None),
            windows: Mutex::new(None),
        }
    }

    /// Registers the tray icon and menu after the host becomes ready.
    ///
    /// The guard is claimed synchronously before the readiness wait;
    /// later calls return [`Registration::AlreadyRegistered`] without
    /// side effects. A failed attempt keeps the guard claimed, so the
    /// process makes at most one attempt per guard. The window factory
    /// is stored for the "Test new window" menu entry.
    pub async fn initialize(
        &self,
        windows: WindowFactory,
    ) -> Result<Registration, RegistrationError> {
        if !self.guard.mark_registered() {
            tracing::debug!("tray already registered, skipping");
            return Ok(Registration::AlreadyRegistered);
        }

        self.host.lifecycle.when_ready().await;

        let icon_path = self.icon.resolve().map_err(RegistrationError::Icon)?;
        let mut tray = self
            .host
            .tray
            .create_tray(&icon_path)
            .map_err(RegistrationError::TrayConstruction)?;
        tray.set_tooltip(&self.product.name)
            .map_err(RegistrationError::TrayConstruction)?;

        let profile_dir = profile_data_path(&ResolveOptions { verbose: true });
        let template = build_context_menu(&self.product, &profile_dir);
        let menu = self
            .host
            .menus
            .build_from_template(&template)
            .map_err(RegistrationError::MenuConstruction)?;
        tray.set_context_menu(menu)
            .map_err(RegistrationError::MenuAttachment)?;

        if let Ok(mut slot) = self.windows.lock() {
            *slot = Some(Arc::new(windows));
        }
        if let Ok(mut slot) = self.tray.lock() {
            *slot = Some(tray);
        }

        tracing::info!(icon = %icon_path.display(), "tray registered");
        Ok(Registration::Registered)
    }

    /// Like [`TrayAdapter::initialize`], but degrades any failure to
    /// an error log. Tray problems must never take the host down.
    pub async fn initialize_or_log(&self, windows: WindowFactory) {
        if let Err(err) = self.initialize(windows).await {
            tracing::error!(error = %err, "error registering tray menu");
        }
    }

    /// Runs the action behind a context menu entry.
    pub fn dispatch(&self, action: &MenuAction) -> Result<(), ActionError> {
        match action {
            MenuAction::OpenHomepage => self.open_url(&self.product.homepage),
            MenuAction::OpenBugReport => self.open_url(&self.product.bugs_url),
            MenuAction::TestNewWindow => self.open_test_window(),
            MenuAction::Quit => {
                self.host.lifecycle.request_quit();
                Ok(())
            }
        }
    }

    /// Like [`TrayAdapter::dispatch`], but degrades any failure to an
    /// error log.
    pub fn dispatch_or_log(&self, action: &MenuAction) {
        if let Err(err) = self.dispatch(action) {
            tracing::error!(error = %err, action = ?action, "tray action failed");
        }
    }

    /// Whether a registration attempt has been claimed.
    pub fn is_registered(&self) -> bool {
        self.guard.is_registered()
    }

    /// Whether a live tray handle is held, i.e. registration fully
    /// succeeded.
    pub fn has_tray(&self) -> bool {
        self.tray.lock().map(|slot| slot.is_some()).unwrap_or(false)
    }

    fn open_url(&self, url: &str) -> Result<(), ActionError> {
        self.host
            .urls
            .open(url)
            .map_err(|source| ActionError::UrlOpen {
                url: url.to_string(),
                source,
            })
    }

    fn open_test_window(&self) -> Result<(), ActionError> {
        // The factory runs with the slot lock released; a panicking or
        // reentrant factory must not wedge later dispatches.
        let factory = self
            .windows
            .lock()
            .map_err(|_| ActionError::NotRegistered)?
            .clone()
            .ok_or(ActionError::NotRegistered)?;
        let argv: Vec<String> = TEST_WINDOW_ARGV.iter().map(|s| s.to_string()).collect();
        factory(&argv).map_err(ActionError::WindowCreation)
    }
}
