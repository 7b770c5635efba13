//! Android Studio vs VS Code comparison table

use serde::Serialize;

/// Which side of a comparison row comes out ahead
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Winner {
    /// The reference IDE (Android Studio)
    Reference,
    /// The lightweight editor this guide recommends (VS Code)
    Target,
    Tie,
}

/// What the row measures, used to pick its icon
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    Size,
    Startup,
    Memory,
    Capability,
}

/// One row of the comparison table
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComparisonRow {
    pub feature: &'static str,
    pub reference_value: &'static str,
    pub target_value: &'static str,
    pub winner: Winner,
    pub metric: Metric,
}

/// Column headings, reference side first
pub const REFERENCE_IDE: &str = "Android Studio";
pub const TARGET_EDITOR: &str = "VS Code";

pub const COMPARISON_TITLE: &str = "Why Choose VS Code Over Android Studio?";
pub const COMPARISON_SUBTITLE: &str =
    "While Android Studio is excellent, VS Code offers a lightweight alternative for Flutter \
     development";

pub const COMPARISON_VERDICT: &str = "For Flutter development, VS Code provides everything you \
need with significantly less resource usage. Perfect for developers who prefer a fast, \
lightweight IDE without compromising on functionality.";

const ROWS: [ComparisonRow; 5] = [
    ComparisonRow {
        feature: "Installation Size",
        reference_value: "3-4 GB",
        target_value: "200 MB",
        winner: Winner::Target,
        metric: Metric::Size,
    },
    ComparisonRow {
        feature: "Startup Time",
        reference_value: "30-60 seconds",
        target_value: "2-5 seconds",
        winner: Winner::Target,
        metric: Metric::Startup,
    },
    ComparisonRow {
        feature: "Memory Usage",
        reference_value: "2-4 GB RAM",
        target_value: "300-500 MB",
        winner: Winner::Target,
        metric: Metric::Memory,
    },
    ComparisonRow {
        feature: "Flutter Development",
        reference_value: "Excellent",
        target_value: "Excellent",
        winner: Winner::Tie,
        metric: Metric::Capability,
    },
    ComparisonRow {
        feature: "Built-in Emulator",
        reference_value: "Yes",
        target_value: "No (use external)",
        winner: Winner::Reference,
        metric: Metric::Capability,
    },
];

/// The fixed comparison table, in display order
pub fn comparison_table() -> &'static [ComparisonRow] {
    &ROWS
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(feature: &str) -> &'static ComparisonRow {
        comparison_table()
            .iter()
            .find(|r| r.feature == feature)
            .unwrap_or_else(|| panic!("missing row {feature}"))
    }

    #[test]
    fn test_table_has_five_rows() {
        assert_eq!(comparison_table().len(), 5);
    }

    #[test]
    fn test_emulator_row_favours_reference_ide() {
        assert_eq!(row("Built-in Emulator").winner, Winner::Reference);
    }

    #[test]
    fn test_resource_rows_favour_target_editor() {
        for metric in [Metric::Memory, Metric::Size, Metric::Startup] {
            let r = comparison_table()
                .iter()
                .find(|r| r.metric == metric)
                .unwrap();
            assert_eq!(r.winner, Winner::Target, "{} should go to VS Code", r.feature);
        }
    }

    #[test]
    fn test_flutter_support_is_a_tie() {
        assert_eq!(row("Flutter Development").winner, Winner::Tie);
    }
}
