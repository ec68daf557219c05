use crate::payload::ExecInvoke;

/// Channel carrying plugin invocation requests to the main process.
pub const EXEC_INVOKE_CHANNEL: &str = "/exec/invoke";

/// One-way message transport from the renderer to the main process.
///
/// Implemented by the host shell. Sends are fire-and-forget and must
/// not block the caller.
pub trait IpcSender: Send + Sync {
    fn send(&self, channel: &str, payload: &str);
}

/// Asks the main process to register the tray menu.
///
/// Safe to call more than once: every invocation sends the same
/// payload, and the receiving side registers at most one tray.
pub fn request_tray_init(ipc: &dyn IpcSender) -> Result<(), serde_json::Error> {
    let payload = ExecInvoke::tray_init().to_json()?;
    ipc.send(EXEC_INVOKE_CHANNEL, &payload);
    tracing::debug!(channel = EXEC_INVOKE_CHANNEL, "tray registration requested");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingSender {
        sent: Mutex<Vec<(String, String)>>,
    }

    impl IpcSender for RecordingSender {
        fn send(&self, channel: &str, payload: &str) {
            self.sent
                .lock()
                .unwrap()
                .push((channel.to_string(), payload.to_string()));
        }
    }

    #[test]
    fn request_sends_one_message() {
        let sender = RecordingSender::default();
        request_tray_init(&sender).unwrap();

        let sent = sender.sent.lock().unwrap();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].0, EXEC_INVOKE_CHANNEL);
    }

    #[test]
    fn request_payload_is_tray_init() {
        let sender = RecordingSender::default();
        request_tray_init(&sender).unwrap();

        let sent = sender.sent.lock().unwrap();
        let parsed = ExecInvoke::from_json(&sent[0].1).unwrap();
        assert_eq!(parsed, ExecInvoke::tray_init());
    }

    #[test]
    fn repeated_requests_send_identical_payloads() {
        let sender = RecordingSender::default();
        request_tray_init(&sender).unwrap();
        request_tray_init(&sender).unwrap();

        let sent = sender.sent.lock().unwrap();
        assert_eq!(sent.len(), 2);
        assert_eq!(sent[0], sent[1]);
    }
}
