use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SegmentationCriterion {
    UserStatus,
    UsageRate,
    Loyalty,
    Attitude,
    Demographic,
    Psychographic,
}

impl SegmentationCriterion {
    pub const ALL: [SegmentationCriterion; 6] = [
        SegmentationCriterion::UserStatus,
        SegmentationCriterion::UsageRate,
        SegmentationCriterion::Loyalty,
        SegmentationCriterion::Attitude,
        SegmentationCriterion::Demographic,
        SegmentationCriterion::Psychographic,
    ];

    pub fn from_str(value: &str) -> Option<Self> {
        let value = value.trim().to_lowercase().replace('_', "-");
        Self::ALL.into_iter().find(|criterion| criterion.key() == value)
    }

    pub fn key(self) -> &'static str {
        match self {
            SegmentationCriterion::UserStatus => "user-status",
            SegmentationCriterion::UsageRate => "usage-rate",
            SegmentationCriterion::Loyalty => "loyalty",
            SegmentationCriterion::Attitude => "attitude",
            SegmentationCriterion::Demographic => "demographic",
            SegmentationCriterion::Psychographic => "psychographic",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            SegmentationCriterion::UserStatus => "User Status",
            SegmentationCriterion::UsageRate => "Usage Rate",
            SegmentationCriterion::Loyalty => "Loyalty",
            SegmentationCriterion::Attitude => "Attitude",
            SegmentationCriterion::Demographic => "Demographic",
            SegmentationCriterion::Psychographic => "Psychographic",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            SegmentationCriterion::UserStatus => "Non-users, potential users, regular users",
            SegmentationCriterion::UsageRate => "Light, medium, heavy users",
            SegmentationCriterion::Loyalty => "Brand loyal, switchers, competitors",
            SegmentationCriterion::Attitude => "Enthusiastic, positive, negative",
            SegmentationCriterion::Demographic => "Age, income, education, family size",
            SegmentationCriterion::Psychographic => "Lifestyle, values, personality",
        }
    }
}
