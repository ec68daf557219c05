use serde::{Deserialize, Serialize};

/// Module that owns the tray registration entry point.
pub const TRAY_MODULE: &str = "plugin-codeflare";

/// Exported entry point the main process invokes.
pub const TRAY_MAIN: &str = "initTray";

/// Command routed to the tray entry point.
pub const TRAY_INIT_COMMAND: &str = "/tray/init";

/// Arguments carried by a plugin invocation request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvokeArgs {
    pub command: String,
}

/// Request asking the main process to invoke a plugin entry point.
///
/// Serialized as a JSON string and sent over the `/exec/invoke`
/// channel. Field names are part of the wire format shared with the
/// main-process dispatcher.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecInvoke {
    pub module: String,
    pub main: String,
    pub args: InvokeArgs,
}

impl ExecInvoke {
    /// Creates the invocation that registers the tray menu.
    pub fn tray_init() -> Self {
        Self {
            module: TRAY_MODULE.into(),
            main: TRAY_MAIN.into(),
            args: InvokeArgs {
                command: TRAY_INIT_COMMAND.into(),
            },
        }
    }

    /// Serializes the request to its wire form.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Parses a request from its wire form.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
