fn main() {
    println!("Run `cargo test -p ipc-compat` to execute IPC compatibility tests.");
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::PathBuf;

    use codeflare_ipc::{EXEC_INVOKE_CHANNEL, ExecInvoke};

    /// Returns the path to the fixtures directory.
    fn fixtures_dir() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("fixtures")
    }

    /// Loads a fixture file as a raw string.
    fn load_fixture(name: &str) -> String {
        let path = fixtures_dir().join(name);
        fs::read_to_string(&path)
            .unwrap_or_else(|e| panic!("failed to read fixture {}: {e}", path.display()))
    }

    // --- Tray init payload ---

    #[test]
    fn fixture_decodes_to_tray_init() {
        let raw = load_fixture("exec_invoke_tray_init.json");
        let parsed = ExecInvoke::from_json(raw.trim_end()).unwrap();
        assert_eq!(parsed, ExecInvoke::tray_init());
    }

    #[test]
    fn payload_bytes_match_fixture() {
        // The fixture holds the payload exactly as the original
        // renderer emitted it, field order included.
        let raw = load_fixture("exec_invoke_tray_init.json");
        let encoded = ExecInvoke::tray_init().to_json().unwrap();
        assert_eq!(encoded, raw.trim_end());
    }

    #[test]
    fn fixture_roundtrips_as_value() {
        let raw = load_fixture("exec_invoke_tray_init.json");
        let fixture: serde_json::Value = serde_json::from_str(&raw).unwrap();
        let parsed: ExecInvoke = serde_json::from_value(fixture.clone()).unwrap();
        let reserialized = serde_json::to_value(&parsed).unwrap();
        assert_eq!(fixture, reserialized);
    }

    #[test]
    fn channel_name_is_pinned() {
        assert_eq!(EXEC_INVOKE_CHANNEL, "/exec/invoke");
    }

    #[test]
    fn field_order_does_not_matter_for_decoding() {
        let json = r#"{
            "args": { "command": "/tray/init" },
            "main": "initTray",
            "module": "plugin-codeflare"
        }"#;
        let parsed: ExecInvoke = serde_json::from_str(json).unwrap();
        assert_eq!(parsed, ExecInvoke::tray_init());
    }
}
