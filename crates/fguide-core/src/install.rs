//! Flutter SDK installation steps per platform

use serde::Serialize;

use crate::platform::Platform;

/// What a step does, used to pick its icon
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StepKind {
    Download,
    Terminal,
    Verify,
}

/// One numbered installation step
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InstallStep {
    pub title: &'static str,
    pub description: &'static str,
    pub command: &'static str,
    pub kind: StepKind,
}

/// Shown below the steps of every platform
pub const INSTALLATION_NOTE: &str = "After installation, restart your terminal or IDE to ensure \
the PATH changes take effect. You may also need to install additional dependencies like Android \
Studio or Xcode depending on your target platforms.";

pub fn installation_title(platform: Platform) -> String {
    format!("Installation Steps for {}", platform.label())
}

pub fn installation_subtitle(platform: Platform) -> String {
    format!(
        "Follow these steps to install Flutter on your {} system",
        platform.label()
    )
}

/// Short overview listed under the platform selector
pub const QUICK_INSTALL_OVERVIEW: [&str; 5] = [
    "Download and install VS Code",
    "Install Flutter SDK",
    "Install Flutter and Dart extensions",
    "Configure environment variables",
    "Run flutter doctor to verify setup",
];

const WINDOWS_STEPS: [InstallStep; 3] = [
    InstallStep {
        title: "Download Flutter SDK",
        description: "Download the Flutter SDK for Windows from the official website",
        command: "Download from https://flutter.dev/docs/get-started/install/windows",
        kind: StepKind::Download,
    },
    InstallStep {
        title: "Extract and Set PATH",
        description: "Extract the zip file and add Flutter to your PATH environment variable",
        command: r#"setx PATH "%PATH%;C:\flutter\bin""#,
        kind: StepKind::Terminal,
    },
    InstallStep {
        title: "Run Flutter Doctor",
        description:
            "Check your environment and see if there are any dependencies you need to install",
        command: "flutter doctor",
        kind: StepKind::Verify,
    },
];

const MACOS_STEPS: [InstallStep; 3] = [
    InstallStep {
        title: "Install using Homebrew",
        description: "Install Flutter using Homebrew package manager",
        command: "brew install --cask flutter",
        kind: StepKind::Download,
    },
    InstallStep {
        title: "Update PATH",
        description: "Add Flutter to your PATH in your shell configuration",
        command: r#"export PATH="$PATH:`pwd`/flutter/bin""#,
        kind: StepKind::Terminal,
    },
    InstallStep {
        title: "Run Flutter Doctor",
        description: "Verify your installation and check for any missing dependencies",
        command: "flutter doctor",
        kind: StepKind::Verify,
    },
];

const LINUX_STEPS: [InstallStep; 3] = [
    InstallStep {
        title: "Download Flutter SDK",
        description: "Download and extract the Flutter SDK for Linux",
        command: "wget https://storage.googleapis.com/flutter_infra_release/releases/stable/linux/flutter_linux_3.x.x-stable.tar.xz",
        kind: StepKind::Download,
    },
    InstallStep {
        title: "Extract and Set PATH",
        description: "Extract the tarball and add Flutter to your PATH",
        command: r#"export PATH="$PATH:`pwd`/flutter/bin""#,
        kind: StepKind::Terminal,
    },
    InstallStep {
        title: "Run Flutter Doctor",
        description: "Check your environment setup",
        command: "flutter doctor",
        kind: StepKind::Verify,
    },
];

/// Installation steps for a platform, in order
pub fn installation_steps(platform: Platform) -> &'static [InstallStep] {
    match platform {
        Platform::Windows => &WINDOWS_STEPS,
        Platform::MacOs => &MACOS_STEPS,
        Platform::Linux => &LINUX_STEPS,
    }
}

/// Installation steps looked up by raw platform id.
///
/// Unknown ids yield an empty list rather than an error.
pub fn installation_steps_for_id(id: &str) -> &'static [InstallStep] {
    id.parse::<Platform>()
        .map(installation_steps)
        .unwrap_or(&[])
}
