use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::reference::{find_tool, Affinity, CommunicationTool, DesignResource, ToolCategory};

pub const AUDIENCE_PRESETS: [&str; 3] = [
    "Customer Centric (B2C)",
    "Partner Centric (B2B)",
    "Mixed Audience",
];

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PromotionConfig {
    pub max_results: usize,
}

impl Default for PromotionConfig {
    fn default() -> Self {
        Self { max_results: 12 }
    }
}

/// Audience a descriptor is scored for. `Mixed` is what any descriptor without a
/// customer or partner keyword falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AudienceMode {
    Customer,
    Partner,
    Mixed,
}

impl AudienceMode {
    /// Customer keywords win over partner keywords.
    pub fn classify(descriptor: &str) -> Self {
        let lowered = descriptor.to_lowercase();
        if lowered.contains("customer") || lowered.contains("b2c") {
            AudienceMode::Customer
        } else if lowered.contains("partner") || lowered.contains("b2b") {
            AudienceMode::Partner
        } else {
            AudienceMode::Mixed
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            AudienceMode::Customer => "customer",
            AudienceMode::Partner => "partner",
            AudienceMode::Mixed => "mixed",
        }
    }

    pub fn score(self, tool: &CommunicationTool) -> u8 {
        match self {
            AudienceMode::Customer => tool.customer.score(),
            AudienceMode::Partner => tool.partner.score(),
            AudienceMode::Mixed => tool.partner.score().max(tool.customer.score()),
        }
    }

    pub fn reasoning(self, score: u8) -> &'static str {
        match (self, score) {
            (AudienceMode::Customer, 3) => "Highly effective for customer-centric approach",
            (AudienceMode::Customer, _) => "Moderately effective for customers",
            (AudienceMode::Partner, 3) => "Highly effective for partner-centric approach",
            (AudienceMode::Partner, _) => "Moderately effective for partners",
            (AudienceMode::Mixed, _) => "Balanced approach for mixed audience",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Priority {
    High,
    Medium,
}

impl Priority {
    pub fn label(self) -> &'static str {
        match self {
            Priority::High => "High Priority",
            Priority::Medium => "Medium Priority",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ScoredRecommendation<'a> {
    #[serde(flatten)]
    pub tool: &'a CommunicationTool,
    pub score: u8,
    pub reasoning: &'static str,
}

impl<'a> ScoredRecommendation<'a> {
    pub fn name(&self) -> &'a str {
        self.tool.name
    }

    pub fn partner(&self) -> Affinity {
        self.tool.partner
    }

    pub fn customer(&self) -> Affinity {
        self.tool.customer
    }

    pub fn category(&self) -> ToolCategory {
        self.tool.category
    }

    pub fn resources(&self) -> &'a [DesignResource] {
        self.tool.resources
    }

    pub fn priority(&self) -> Priority {
        if self.score == 3 {
            Priority::High
        } else {
            Priority::Medium
        }
    }
}

#[derive(Debug, Clone)]
pub struct PromotionRecommender {
    config: PromotionConfig,
}

impl PromotionRecommender {
    pub fn new(config: PromotionConfig) -> Self {
        Self { config }
    }

    pub fn recommend<'a>(
        &self,
        descriptor: &str,
        catalog: &'a [CommunicationTool],
    ) -> Vec<ScoredRecommendation<'a>> {
        if descriptor.is_empty() {
            return Vec::new();
        }

        let mode = AudienceMode::classify(descriptor);
        let mut recommendations: Vec<ScoredRecommendation<'a>> = catalog
            .iter()
            .filter_map(|tool| {
                let score = mode.score(tool);
                if score == 0 {
                    return None;
                }
                Some(ScoredRecommendation {
                    tool,
                    score,
                    reasoning: mode.reasoning(score),
                })
            })
            .collect();

        // sort_by is stable: equal scores keep catalog order.
        recommendations.sort_by(|a, b| b.score.cmp(&a.score));
        recommendations.truncate(self.config.max_results);

        tracing::debug!(
            mode = mode.label(),
            qualifying = recommendations.len(),
            "scored promotion mix"
        );
        recommendations
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ActivityError {
    #[error("unknown promotional activity: {0}")]
    UnknownActivity(String),
}

/// Activities the user has picked for their mix, in the order they were added.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ActivitySelection {
    activities: Vec<String>,
}

impl ActivitySelection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, name: &str) -> Result<(), ActivityError> {
        let tool = find_tool(name).ok_or_else(|| ActivityError::UnknownActivity(name.to_string()))?;
        if !self.contains(tool.name) {
            self.activities.push(tool.name.to_string());
        }
        Ok(())
    }

    pub fn remove(&mut self, name: &str) -> bool {
        let before = self.activities.len();
        self.activities.retain(|activity| activity != name);
        self.activities.len() != before
    }

    /// Returns whether the activity is selected after the toggle.
    pub fn toggle(&mut self, name: &str) -> Result<bool, ActivityError> {
        if self.remove(name) {
            return Ok(false);
        }
        self.add(name)?;
        Ok(true)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.activities.iter().any(|activity| activity == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.activities.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.activities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.activities.is_empty()
    }

    pub fn clear(&mut self) {
        self.activities.clear();
    }
}
