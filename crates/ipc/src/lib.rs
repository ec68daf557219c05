//! Renderer-to-main IPC for tray registration.
//!
//! The renderer process cannot create tray icons itself. Instead it
//! sends a plugin invocation request over the `/exec/invoke` channel,
//! asking the main process to run the tray registration entry point.
//! The message is fire-and-forget: no acknowledgement comes back, and
//! duplicates are absorbed by the registration guard on the receiving
//! side.

pub mod channel;
pub mod payload;

// Re-export primary types for convenience.
pub use channel::{EXEC_INVOKE_CHANNEL, IpcSender, request_tray_init};
pub use payload::{ExecInvoke, InvokeArgs};
