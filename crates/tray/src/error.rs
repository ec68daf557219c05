//! Error types for tray registration and menu actions.

/// Errors surfaced by the host GUI shell.
#[derive(Debug, thiserror::Error)]
pub enum HostError {
    /// No icon file with the requested name exists in the search path.
    #[error("tray icon not found: {0}")]
    IconNotFound(String),

    /// The host refused the operation.
    #[error("host rejected operation: {0}")]
    Rejected(String),

    /// Underlying I/O failure.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors produced while registering the tray.
///
/// Each variant names the registration step that failed, so the owner
/// can tell a missing icon apart from a host that refused the menu.
#[derive(Debug, thiserror::Error)]
pub enum RegistrationError {
    #[error("icon resolution failed: {0}")]
    Icon(HostError),

    #[error("tray construction failed: {0}")]
    TrayConstruction(HostError),

    #[error("context menu construction failed: {0}")]
    MenuConstruction(HostError),

    #[error("context menu attachment failed: {0}")]
    MenuAttachment(HostError),
}

/// Errors produced while dispatching a context menu action.
#[derive(Debug, thiserror::Error)]
pub enum ActionError {
    #[error("window creation failed: {0}")]
    WindowCreation(HostError),

    #[error("failed to open {url}: {source}")]
    UrlOpen {
        url: String,
        source: std::io::Error,
    },

    #[error("tray is not registered")]
    NotRegistered,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registration_error_names_the_step() {
        let err = RegistrationError::Icon(HostError::IconNotFound("tray.png".into()));
        assert!(err.to_string().contains("icon resolution"));
        assert!(err.to_string().contains("tray.png"));

        let err = RegistrationError::MenuAttachment(HostError::Rejected("no session".into()));
        assert!(err.to_string().contains("attachment"));
    }

    #[test]
    fn action_error_url_open_names_the_url() {
        let err = ActionError::UrlOpen {
            url: "https://example.com".into(),
            source: std::io::Error::other("no browser"),
        };
        assert!(err.to_string().contains("https://example.com"));
        assert!(err.to_string().contains("no browser"));
    }

    #[test]
    fn host_error_from_io() {
        let err: HostError = std::io::Error::other("boom").into();
        assert!(matches!(err, HostError::Io(_)));
    }
}
