//! Flutter project layout reference
//!
//! A fixed directory tree of a freshly created Flutter app plus the places a
//! newcomer will actually edit.

use serde::Serialize;

use crate::platform::Platform;

/// File or folder
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    File,
    Folder,
}

/// A node of the project tree
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TreeNode {
    pub name: &'static str,
    pub kind: NodeKind,
    pub description: &'static str,
    /// Highlighted as a place the user will edit
    pub important: bool,
    /// Desktop platform this folder belongs to, if any
    pub platform: Option<Platform>,
    #[serde(skip_serializing_if = "has_no_children")]
    pub children: &'static [TreeNode],
}

impl TreeNode {
    const fn file(name: &'static str, description: &'static str) -> Self {
        Self {
            name,
            kind: NodeKind::File,
            description,
            important: false,
            platform: None,
            children: &[],
        }
    }

    const fn folder(
        name: &'static str,
        description: &'static str,
        children: &'static [TreeNode],
    ) -> Self {
        Self {
            name,
            kind: NodeKind::Folder,
            description,
            important: false,
            platform: None,
            children,
        }
    }

    const fn important(mut self) -> Self {
        self.important = true;
        self
    }

    const fn for_platform(mut self, platform: Platform) -> Self {
        self.platform = Some(platform);
        self
    }

    pub fn is_folder(&self) -> bool {
        self.kind == NodeKind::Folder
    }
}

fn has_no_children(children: &&'static [TreeNode]) -> bool {
    children.is_empty()
}

/// A location in the project worth knowing about
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KeyLocation {
    pub path: &'static str,
    pub description: &'static str,
    pub usage: &'static str,
}

/// Organisation advice shown below the tree
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrganizationTip {
    pub title: &'static str,
    pub body: &'static str,
}

pub const PROJECT_STRUCTURE_TITLE: &str = "Flutter Project Structure";
pub const PROJECT_STRUCTURE_SUBTITLE: &str =
    "Understanding your Flutter project folder structure and where to find everything";

const TREE: [TreeNode; 12] = [
    TreeNode::folder(
        "android/",
        "Android platform specific code and configurations",
        &[
            TreeNode::folder("app/", "Main Android app module", &[]),
            TreeNode::file("build.gradle.kts", "Android build configuration"),
            TreeNode::file("gradle.properties", "Gradle properties and settings"),
        ],
    ),
    TreeNode::folder(
        "ios/",
        "iOS platform specific code (Xcode project)",
        &[
            TreeNode::folder("Runner/", "iOS app target", &[]),
            TreeNode::folder("Runner.xcodeproj/", "Xcode project file", &[]),
        ],
    ),
    TreeNode::folder(
        "lib/",
        "Main Dart code - This is where you write your Flutter app!",
        &[TreeNode::file("main.dart", "Entry point of your Flutter application").important()],
    )
    .important(),
    TreeNode::folder(
        "test/",
        "Unit and widget tests for your application",
        &[TreeNode::file("widget_test.dart", "Default widget test file")],
    ),
    TreeNode::folder(
        "web/",
        "Web platform specific files and assets",
        &[
            TreeNode::file("index.html", "Main HTML file for web app"),
            TreeNode::file("favicon.png", "Web app favicon"),
        ],
    ),
    TreeNode::folder(
        "windows/",
        "Windows platform specific code and configurations",
        &[
            TreeNode::folder("runner/", "Windows app runner", &[]),
            TreeNode::file("CMakeLists.txt", "CMake build configuration"),
        ],
    )
    .for_platform(Platform::Windows),
    TreeNode::folder(
        "macos/",
        "macOS platform specific code (Xcode project)",
        &[
            TreeNode::folder("Runner/", "macOS app target", &[]),
            TreeNode::folder("Runner.xcodeproj/", "Xcode project file", &[]),
        ],
    )
    .for_platform(Platform::MacOs),
    TreeNode::folder(
        "linux/",
        "Linux platform specific code and configurations",
        &[
            TreeNode::folder("runner/", "Linux app runner", &[]),
            TreeNode::file("CMakeLists.txt", "CMake build configuration"),
        ],
    )
    .for_platform(Platform::Linux),
    TreeNode::file(
        "pubspec.yaml",
        "Package configuration - Add dependencies here!",
    )
    .important(),
    TreeNode::file(
        "pubspec.lock",
        "Locked versions of dependencies (auto-generated)",
    ),
    TreeNode::file(
        "analysis_options.yaml",
        "Dart analyzer configuration and linting rules",
    ),
    TreeNode::file("README.md", "Project documentation and setup instructions"),
];

const KEY_LOCATIONS: [KeyLocation; 5] = [
    KeyLocation {
        path: "/lib/main.dart",
        description: "Your app's entry point - where the magic begins!",
        usage: "Contains main() function and app initialization",
    },
    KeyLocation {
        path: "/lib/pages/",
        description: "Create this folder for different app screens",
        usage: "home_page.dart, login_page.dart, etc.",
    },
    KeyLocation {
        path: "/lib/widgets/",
        description: "Custom reusable widgets go here",
        usage: "custom_button.dart, user_card.dart, etc.",
    },
    KeyLocation {
        path: "/lib/models/",
        description: "Data models and classes",
        usage: "user.dart, product.dart, etc.",
    },
    KeyLocation {
        path: "/assets/",
        description: "Images, fonts, and other static files",
        usage: "images/, fonts/, data/ folders",
    },
];

const ORGANIZATION_TIPS: [OrganizationTip; 4] = [
    OrganizationTip {
        title: "lib/ folder structure",
        body: "Organize your Dart code into logical folders like pages/, widgets/, models/, \
               and services/",
    },
    OrganizationTip {
        title: "pubspec.yaml",
        body: "Always run `flutter pub get` after adding new dependencies to this file",
    },
    OrganizationTip {
        title: "Platform folders",
        body: "android/, ios/, web/, windows/, macos/, linux/ contain platform-specific \
               configurations - modify carefully!",
    },
    OrganizationTip {
        title: "test/ folder",
        body: "Write unit and widget tests here to ensure your app works correctly",
    },
];

/// Top-level entries of a new Flutter project
pub fn project_tree() -> &'static [TreeNode] {
    &TREE
}

/// Places a newcomer edits most
pub fn key_locations() -> &'static [KeyLocation] {
    &KEY_LOCATIONS
}

pub fn organization_tips() -> &'static [OrganizationTip] {
    &ORGANIZATION_TIPS
}

/// Depth-first walk of the tree as `(depth, node)` pairs
pub fn flatten_tree(nodes: &'static [TreeNode]) -> Vec<(usize, &'static TreeNode)> {
    fn walk(
        nodes: &'static [TreeNode],
        depth: usize,
        out: &mut Vec<(usize, &'static TreeNode)>,
    ) {
        for node in nodes {
            out.push((depth, node));
            walk(node.children, depth + 1, out);
        }
    }

    let mut out = Vec::new();
    walk(nodes, 0, &mut out);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lib_and_pubspec_are_important() {
        let important: Vec<_> = project_tree()
            .iter()
            .filter(|n| n.important)
            .map(|n| n.name)
            .collect();
        assert_eq!(important, ["lib/", "pubspec.yaml"]);
    }

    #[test]
    fn test_main_dart_lives_in_lib() {
        let lib = project_tree().iter().find(|n| n.name == "lib/").unwrap();
        assert!(lib.is_folder());
        assert_eq!(lib.children.len(), 1);
        assert_eq!(lib.children[0].name, "main.dart");
        assert!(lib.children[0].important);
    }

    #[test]
    fn test_each_desktop_platform_has_a_folder() {
        for platform in Platform::ALL {
            let count = project_tree()
                .iter()
                .filter(|n| n.platform == Some(platform))
                .count();
            assert_eq!(count, 1, "{platform} should own exactly one folder");
        }
    }

    #[test]
    fn test_flatten_is_depth_first() {
        let rows = flatten_tree(project_tree());
        assert_eq!(rows[0], (0, &project_tree()[0]));
        assert_eq!(rows[1].0, 1);
        assert_eq!(rows[1].1.name, "app/");
        let total_children: usize = project_tree().iter().map(|n| n.children.len()).sum();
        assert_eq!(rows.len(), project_tree().len() + total_children);
    }

    #[test]
    fn test_files_have_no_children() {
        for (_, node) in flatten_tree(project_tree()) {
            if node.kind == NodeKind::File {
                assert!(node.children.is_empty(), "{} is a file", node.name);
            }
        }
    }

    #[test]
    fn test_key_locations() {
        assert_eq!(key_locations().len(), 5);
        assert_eq!(key_locations()[0].path, "/lib/main.dart");
        assert_eq!(organization_tips().len(), 4);
    }
}
