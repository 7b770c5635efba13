//! # fguide-core - Core Domain Types and Guide Content
//!
//! Foundation crate for Flutter Guide. Provides the platform model, every
//! static content record the guide shows, error handling and logging setup.
//!
//! This crate has **zero internal dependencies** -- it only depends on external
//! crates (serde, thiserror, toml, tracing).
//!
//! ## Public API
//!
//! ### Platforms (`platform`)
//! - [`Platform`] - Target operating system (Windows, macOS, Linux)
//! - [`SystemRequirements`] - Minimum machine requirements per platform
//!
//! ### Content (`install`, `comparison`, `editor`, `project`, `sample_app`, `site`)
//! - [`installation_steps()`] - Ordered install steps for a platform
//! - [`comparison_table()`] - Android Studio vs VS Code rows
//! - [`editor_extensions()`], [`editor_setup_steps()`] - VS Code setup
//! - [`project_tree()`], [`key_locations()`] - Flutter project layout
//! - [`run_targets()`], [`COUNTER_APP_SOURCE`] - The sample counter app
//! - [`PageSection`], [`Link`] - Page sections, anchors and outbound links
//!
//! ### Snapshot (`guide`)
//! - [`Guide`] - Everything the page shows for one platform, serialisable
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum with `fatal` vs `recoverable` classification
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Extension trait for adding error context
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use fguide_core::prelude::*;
//! ```

pub mod comparison;
pub mod editor;
pub mod error;
pub mod guide;
pub mod install;
pub mod logging;
pub mod platform;
pub mod prelude;
pub mod project;
pub mod sample_app;
pub mod site;

// Re-export commonly used types at crate root for convenience
pub use comparison::{comparison_table, ComparisonRow, Winner, COMPARISON_VERDICT};
pub use editor::{
    editor_extensions, editor_pro_tips, editor_setup_steps, EditorExtension, ProTip,
};
pub use error::{Error, Result, ResultExt};
pub use guide::Guide;
pub use install::{
    installation_steps, installation_steps_for_id, InstallStep, INSTALLATION_NOTE,
    QUICK_INSTALL_OVERVIEW,
};
pub use platform::{Platform, SystemRequirements};
pub use project::{
    key_locations, organization_tips, project_tree, KeyLocation, NodeKind, TreeNode,
};
pub use sample_app::{
    run_targets, RunTarget, CREATE_COMMANDS, COUNTER_APP_SOURCE, PHONE_SETUP_STEPS,
};
pub use site::{Link, LinkKind, PageSection, BRAND, LINKS};
