//! VS Code setup: extensions, setup walkthrough and tips

use serde::Serialize;

use crate::platform::Platform;

/// A marketplace extension worth installing
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EditorExtension {
    pub name: &'static str,
    /// Marketplace identifier, usable with `code --install-extension`
    pub identifier: &'static str,
    pub description: &'static str,
}

impl EditorExtension {
    pub fn install_command(&self) -> String {
        format!("code --install-extension {}", self.identifier)
    }
}

/// A short labelled hint
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProTip {
    pub title: &'static str,
    pub body: &'static str,
}

pub const EDITOR_SETUP_TITLE: &str = "VS Code Setup for Flutter";
pub const EDITOR_SETUP_SUBTITLE: &str =
    "Configure Visual Studio Code for optimal Flutter development experience";

const EXTENSIONS: [EditorExtension; 3] = [
    EditorExtension {
        name: "Flutter",
        identifier: "Dart-Code.flutter",
        description: "Official Flutter extension with Dart support, debugging, and hot reload",
    },
    EditorExtension {
        name: "Dart",
        identifier: "Dart-Code.dart-code",
        description: "Dart language support with syntax highlighting and IntelliSense",
    },
    EditorExtension {
        name: "Flutter Widget Snippets",
        identifier: "alexisvt.flutter-snippets",
        description: "Code snippets for faster Flutter development",
    },
];

const PRO_TIPS: [ProTip; 3] = [
    ProTip {
        title: "Hot Reload",
        body: "Use Ctrl+F5 or 'r' in terminal for instant updates",
    },
    ProTip {
        title: "Widget Inspector",
        body: "Use Flutter Inspector to debug UI layouts",
    },
    ProTip {
        title: "Shortcuts",
        body: "Type 'stless' for StatelessWidget snippet",
    },
];

/// Essential extensions, most important first
pub fn editor_extensions() -> &'static [EditorExtension] {
    &EXTENSIONS
}

/// Editor pro tips
pub fn editor_pro_tips() -> &'static [ProTip] {
    &PRO_TIPS
}

/// Walkthrough for configuring the editor, with shortcuts for `platform`
pub fn editor_setup_steps(platform: Platform) -> Vec<String> {
    let m = platform.shortcut_modifier();
    vec![
        "Open VS Code".to_string(),
        format!("Go to Extensions ({m}+Shift+X)"),
        "Search for 'Flutter' and install the official extension".to_string(),
        "Restart VS Code".to_string(),
        format!("Open Command Palette ({m}+Shift+P)"),
        "Type 'Flutter: New Project' to create your first app".to_string(),
    ]
}
