//! The six wizard steps.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A wizard screen, in navigation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WizardStep {
    #[default]
    Upload,
    Preview,
    TargetSelection,
    Analysis,
    Training,
    Results,
}

impl WizardStep {
    pub const ALL: [WizardStep; 6] = [
        WizardStep::Upload,
        WizardStep::Preview,
        WizardStep::TargetSelection,
        WizardStep::Analysis,
        WizardStep::Training,
        WizardStep::Results,
    ];

    /// 1-based position shown in the step indicator.
    pub fn number(&self) -> usize {
        match self {
            WizardStep::Upload => 1,
            WizardStep::Preview => 2,
            WizardStep::TargetSelection => 3,
            WizardStep::Analysis => 4,
            WizardStep::Training => 5,
            WizardStep::Results => 6,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            WizardStep::Upload => "Upload Data",
            WizardStep::Preview => "Preview Data",
            WizardStep::TargetSelection => "Select Target",
            WizardStep::Analysis => "Data Analysis",
            WizardStep::Training => "Model Training",
            WizardStep::Results => "Results",
        }
    }

    pub fn next(&self) -> Option<WizardStep> {
        WizardStep::ALL.get(self.number()).copied()
    }

    pub fn previous(&self) -> Option<WizardStep> {
        self.number()
            .checked_sub(2)
            .and_then(|i| WizardStep::ALL.get(i).copied())
    }
}

impl fmt::Display for WizardStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Step {}: {}", self.number(), self.title())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numbers_follow_order() {
        for (i, step) in WizardStep::ALL.iter().enumerate() {
            assert_eq!(step.number(), i + 1);
        }
    }

    #[test]
    fn test_next_and_previous() {
        assert_eq!(WizardStep::Upload.next(), Some(WizardStep::Preview));
        assert_eq!(WizardStep::Results.next(), None);
        assert_eq!(WizardStep::Upload.previous(), None);
        assert_eq!(WizardStep::Training.previous(), Some(WizardStep::Analysis));
    }

    #[test]
    fn test_display() {
        assert_eq!(WizardStep::TargetSelection.to_string(), "Step 3: Select Target");
    }
}
