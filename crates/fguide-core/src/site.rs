//! Page chrome: sections, anchors, hero copy and outbound links

use serde::Serialize;

/// Product name shown in the header
pub const BRAND: &str = "Flutter Guide";

pub const HERO_TITLE: &str = "Learn Flutter Development with VS Code";
/// Typed out character by character in the hero banner
pub const HERO_SUBTITLE: &str = "Build Beautiful Cross-Platform Apps with Flutter & VS Code";
/// Value the hero counter counts up to
pub const HERO_COUNTER_TARGET: u32 = 42;
pub const HERO_COUNTER_LABEL: &str = "You have pushed the button this many times:";
/// Title bar of the demo phone in the hero
pub const HERO_DEMO_TITLE: &str = "Flutter Counter App";

/// `(badge, caption)` pairs under the hero title
pub const HERO_FEATURES: [(&str, &str); 3] = [
    ("VS Code Only", "No Android Studio needed"),
    ("Easy Setup", "Step-by-step instructions"),
    ("Mobile Ready", "Build for iOS & Android"),
];

/// Hero call-to-action buttons and the section each one jumps to
pub const HERO_ACTIONS: [(&str, PageSection); 2] = [
    ("Get Started", PageSection::Platforms),
    ("Build Your First App", PageSection::FirstApp),
];

pub const FOOTER_TAGLINE: &str =
    "Your complete guide to Flutter development with VS Code. No Android Studio required!";
pub const FOOTER_CREDIT: &str = "Made with ♥ for Flutter developers";
pub const FOOTER_COPYRIGHT: &str = "© 2025 Flutter Guide. Open source and free to use.";

/// A section of the page, in page order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PageSection {
    Hero,
    Comparison,
    Platforms,
    Installation,
    EditorSetup,
    ProjectStructure,
    FirstApp,
    Footer,
}

impl PageSection {
    /// Every section in page order
    pub const ALL: [PageSection; 8] = [
        PageSection::Hero,
        PageSection::Comparison,
        PageSection::Platforms,
        PageSection::Installation,
        PageSection::EditorSetup,
        PageSection::ProjectStructure,
        PageSection::FirstApp,
        PageSection::Footer,
    ];

    /// Sections listed in the navigation bar, in menu order
    pub const NAVIGABLE: [PageSection; 6] = [
        PageSection::Platforms,
        PageSection::Comparison,
        PageSection::Installation,
        PageSection::EditorSetup,
        PageSection::ProjectStructure,
        PageSection::FirstApp,
    ];

    /// In-page anchor id
    pub fn anchor_id(&self) -> &'static str {
        match self {
            PageSection::Hero => "hero",
            PageSection::Comparison => "comparison",
            PageSection::Platforms => "platforms",
            PageSection::Installation => "installation",
            PageSection::EditorSetup => "vscode",
            PageSection::ProjectStructure => "structure",
            PageSection::FirstApp => "first-app",
            PageSection::Footer => "footer",
        }
    }

    /// Label in the navigation bar and menu
    pub fn nav_label(&self) -> &'static str {
        match self {
            PageSection::Hero => "Home",
            PageSection::Comparison => "Why VS Code?",
            PageSection::Platforms => "Platforms",
            PageSection::Installation => "Installation",
            PageSection::EditorSetup => "VS Code",
            PageSection::ProjectStructure => "Project Structure",
            PageSection::FirstApp => "First App",
            PageSection::Footer => "Resources",
        }
    }

    /// Only rendered once a platform has been selected
    pub fn is_gated(&self) -> bool {
        matches!(
            self,
            PageSection::Installation
                | PageSection::EditorSetup
                | PageSection::ProjectStructure
                | PageSection::FirstApp
        )
    }

    pub fn is_navigable(&self) -> bool {
        Self::NAVIGABLE.contains(self)
    }
}

/// Where a footer link points
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LinkKind {
    Resource,
    Social,
}

/// An outbound link
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Link {
    pub label: &'static str,
    pub url: &'static str,
    pub kind: LinkKind,
}

/// Outbound links, resources first
pub static LINKS: [Link; 6] = [
    Link {
        label: "Flutter Documentation",
        url: "https://flutter.dev",
        kind: LinkKind::Resource,
    },
    Link {
        label: "Dart Language",
        url: "https://dart.dev",
        kind: LinkKind::Resource,
    },
    Link {
        label: "VS Code",
        url: "https://code.visualstudio.com",
        kind: LinkKind::Resource,
    },
    Link {
        label: "GitHub",
        url: "https://github.com/D3-crypto",
        kind: LinkKind::Social,
    },
    Link {
        label: "LinkedIn",
        url: "https://www.linkedin.com/in/sonu-jha-692708248/",
        kind: LinkKind::Social,
    },
    Link {
        label: "Instagram",
        url: "https://www.instagram.com/sonu.106/",
        kind: LinkKind::Social,
    },
];

/// Links of one kind, keeping their order
pub fn links_of(kind: LinkKind) -> impl Iterator<Item = &'static Link> {
    LINKS.iter().filter(move |l| l.kind == kind)
}
