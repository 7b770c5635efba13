//! Serialisable snapshot of everything the page shows for one platform

use serde::Serialize;

use crate::comparison::{comparison_table, ComparisonRow, COMPARISON_VERDICT};
use crate::editor::{
    editor_extensions, editor_pro_tips, editor_setup_steps, EditorExtension, ProTip,
};
use crate::install::{installation_steps, InstallStep, INSTALLATION_NOTE, QUICK_INSTALL_OVERVIEW};
use crate::platform::{Platform, SystemRequirements};
use crate::project::{
    key_locations, organization_tips, project_tree, KeyLocation, OrganizationTip, TreeNode,
};
use crate::sample_app::{
    run_targets, RunTarget, COUNTER_APP_SOURCE, CREATE_COMMANDS, PHONE_SETUP_STEPS,
};
use crate::site::{Link, BRAND, LINKS};

/// Guide content for a single platform
#[derive(Debug, Clone, Serialize)]
pub struct Guide {
    pub brand: &'static str,
    pub platform: Platform,
    pub requirements: &'static SystemRequirements,
    pub quick_overview: &'static [&'static str],
    pub installation: &'static [InstallStep],
    pub installation_note: &'static str,
    pub comparison: &'static [ComparisonRow],
    pub comparison_verdict: &'static str,
    pub editor_setup: Vec<String>,
    pub extensions: &'static [EditorExtension],
    pub pro_tips: &'static [ProTip],
    pub project_tree: &'static [TreeNode],
    pub key_locations: &'static [KeyLocation],
    pub organization_tips: &'static [OrganizationTip],
    pub create_commands: &'static [&'static str],
    pub sample_source: &'static str,
    pub run_targets: Vec<RunTarget>,
    pub phone_setup: Vec<PhoneStep>,
    pub links: &'static [Link],
}

#[derive(Debug, Clone, Serialize)]
pub struct PhoneStep {
    pub title: &'static str,
    pub body: &'static str,
}

impl Guide {
    pub fn for_platform(platform: Platform) -> Self {
        Self {
            brand: BRAND,
            platform,
            requirements: platform.requirements(),
            quick_overview: &QUICK_INSTALL_OVERVIEW,
            installation: installation_steps(platform),
            installation_note: INSTALLATION_NOTE,
            comparison: comparison_table(),
            comparison_verdict: COMPARISON_VERDICT,
            editor_setup: editor_setup_steps(platform),
            extensions: editor_extensions(),
            pro_tips: editor_pro_tips(),
            project_tree: project_tree(),
            key_locations: key_locations(),
            organization_tips: organization_tips(),
            create_commands: &CREATE_COMMANDS,
            sample_source: COUNTER_APP_SOURCE,
            run_targets: run_targets(platform),
            phone_setup: PHONE_SETUP_STEPS
                .iter()
                .map(|&(title, body)| PhoneStep { title, body })
                .collect(),
            links: &LINKS,
        }
    }

    pub fn to_json_pretty(&self) -> crate::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
