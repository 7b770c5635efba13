//! Widget components for the TUI

pub mod comparison;
pub mod editor_setup;
pub mod first_app;
pub mod footer;
pub mod header;
pub mod hero;
pub mod installation;
pub mod key_hints;
pub mod links;
pub mod modal_overlay;
pub mod nav_menu;
pub mod page;
pub mod platform_selector;
pub mod project_structure;
pub mod text;

pub use comparison::Comparison;
pub use editor_setup::EditorSetup;
pub use first_app::FirstApp;
pub use footer::Footer;
pub use header::MainHeader;
pub use hero::Hero;
pub use installation::Installation;
pub use key_hints::KeyHints;
pub use links::LinksOverlay;
pub use nav_menu::NavMenu;
pub use page::{GuidePage, PageContent, SectionView};
pub use platform_selector::PlatformSelector;
pub use project_structure::ProjectStructure;
