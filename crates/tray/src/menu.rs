//! Declarative context menu for the shell tray.

use std::path::Path;

use codeflare_client::ProductInfo;

/// Actions that can be triggered from the tray context menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    /// Open the product homepage in the default browser.
    OpenHomepage,
    /// Launch a throwaway window to verify window creation works.
    TestNewWindow,
    /// Open the issue tracker in the default browser.
    OpenBugReport,
    /// Quit the application.
    Quit,
}

/// Argument vector handed to the window factory by the test entry.
pub const TEST_WINDOW_ARGV: [&str; 2] = ["echo", "hello"];

/// A single entry in the declarative menu template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuEntry {
    /// Clickable item bound to an action.
    Item { label: String, action: MenuAction },
    /// Horizontal separator.
    Separator,
    /// Nested submenu.
    Submenu {
        label: String,
        entries: Vec<MenuEntry>,
    },
    /// Radio-style display item.
    Radio { label: String, selected: bool },
}

/// Declarative template realized by the host's menu builder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContextMenu {
    entries: Vec<MenuEntry>,
}

impl ContextMenu {
    /// Top-level entries in display order.
    pub fn entries(&self) -> &[MenuEntry] {
        &self.entries
    }

    /// Number of top-level entries, separators included.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Builds the standard seven-entry tray menu.
///
/// Layout, in order: version entry (opens the homepage), separator,
/// Profiles submenu, separator, test-window entry, bug report entry,
/// quit entry.
pub fn build_context_menu(product: &ProductInfo, profile_dir: &Path) -> ContextMenu {
    ContextMenu {
        entries: vec![
            MenuEntry::Item {
                label: format!("{} v{}", product.name, product.version),
                action: MenuAction::OpenHomepage,
            },
            MenuEntry::Separator,
            MenuEntry::Submenu {
                label: "Profiles".into(),
                entries: vec![MenuEntry::Radio {
                    label: profile_label(profile_dir),
                    selected: true,
                }],
            },
            MenuEntry::Separator,
            MenuEntry::Item {
                label: "Test new window".into(),
                action: MenuAction::TestNewWindow,
            },
            MenuEntry::Item {
                label: "Report a Bug".into(),
                action: MenuAction::OpenBugReport,
            },
            MenuEntry::Item {
                label: format!("Quit {}", product.name),
                action: MenuAction::Quit,
            },
        ],
    }
}

/// Menu label for a profile directory: its final path segment, or the
/// whole path when there is no separator to split on.
pub fn profile_label(path: &Path) -> String {
    match path.file_name() {
        Some(name) => name.to_string_lossy().into_owned(),
        None => path.to_string_lossy().into_owned(),
    }
}
