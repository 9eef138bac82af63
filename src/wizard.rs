use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use thiserror::Error;

use crate::reference::{
    CompetitiveForce, CompetitiveForces, CustomizationLevel, DistributionChannelProfile,
    DistributionConfig, ForceRating, LifecycleStage, MarketConcentration, MarketType,
    ProductType, SegmentationCriterion,
};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WizardError {
    #[error("select a product type and a lifecycle stage to continue")]
    ProductIncomplete,
    #[error("select a market strategy to continue")]
    MarketTypeMissing,
    #[error("select at least one segmentation criterion to continue")]
    SegmentationEmpty,
    #[error("rate all five competitive forces to continue ({rated}/5 rated)")]
    ForcesIncomplete { rated: usize },
    #[error("choose a customization level and a market concentration to continue")]
    DistributionIncomplete,
    #[error("results is the last step; restart to begin a new analysis")]
    AtFinalStep,
    #[error("already at the first step")]
    AtFirstStep,
    #[error("complete the distribution configuration before choosing a channel")]
    ChannelUnavailable,
    #[error("channel `{channel}` is not offered by {profile}")]
    UnknownChannel {
        channel: String,
        profile: &'static str,
    },
    #[error("invalid step number: {0}")]
    InvalidStep(u8),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum Step {
    Product = 1,
    Market = 2,
    Segments = 3,
    Forces = 4,
    Distribution = 5,
    Results = 6,
}

impl Step {
    pub const ALL: [Step; 6] = [
        Step::Product,
        Step::Market,
        Step::Segments,
        Step::Forces,
        Step::Distribution,
        Step::Results,
    ];

    pub fn number(self) -> u8 {
        self as u8
    }

    pub fn label(self) -> &'static str {
        match self {
            Step::Product => "Product",
            Step::Market => "Market",
            Step::Segments => "Segments",
            Step::Forces => "Forces",
            Step::Distribution => "Distribution",
            Step::Results => "Results",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Step::Product => "Product Information",
            Step::Market => "Market Strategy (Ansoff Matrix)",
            Step::Segments => "Customer Segmentation",
            Step::Forces => "Porter's 5 Forces Analysis",
            Step::Distribution => "Distribution Channel Strategy",
            Step::Results => "Complete Marketing Recommendations",
        }
    }

    pub fn following(self) -> Option<Step> {
        Step::try_from(self.number() + 1).ok()
    }

    pub fn preceding(self) -> Option<Step> {
        Step::try_from(self.number().saturating_sub(1)).ok()
    }

    /// Fraction of the flow completed when this step is current, 0.0 at step 1 and 1.0 at results.
    pub fn progress(self) -> f64 {
        (self.number() - 1) as f64 / 5.0
    }
}

impl From<Step> for u8 {
    fn from(step: Step) -> Self {
        step.number()
    }
}

impl TryFrom<u8> for Step {
    type Error = WizardError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Step::Product),
            2 => Ok(Step::Market),
            3 => Ok(Step::Segments),
            4 => Ok(Step::Forces),
            5 => Ok(Step::Distribution),
            6 => Ok(Step::Results),
            other => Err(WizardError::InvalidStep(other)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StepStatus {
    Done,
    Current,
    Pending,
}

/// One user action on the strategy flow. Selections are accepted at any step so
/// earlier answers can be revised after navigating back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "field", content = "value", rename_all = "snake_case")]
pub enum Selection {
    ProductType(ProductType),
    ProductStage(LifecycleStage),
    MarketType(MarketType),
    ToggleSegment(SegmentationCriterion),
    AddSegment(SegmentationCriterion),
    RemoveSegment(SegmentationCriterion),
    Force {
        force: CompetitiveForce,
        rating: ForceRating,
    },
    Customization(CustomizationLevel),
    Concentration(MarketConcentration),
    Channel(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WizardState {
    pub step: Step,
    pub product_type: Option<ProductType>,
    pub product_stage: Option<LifecycleStage>,
    pub market_type: Option<MarketType>,
    pub segmentation: BTreeSet<SegmentationCriterion>,
    pub competitive_forces: CompetitiveForces,
    pub distribution: DistributionConfig,
    pub selected_channel: Option<String>,
}

impl Default for WizardState {
    fn default() -> Self {
        Self {
            step: Step::Product,
            product_type: None,
            product_stage: None,
            market_type: None,
            segmentation: BTreeSet::new(),
            competitive_forces: CompetitiveForces::new(),
            distribution: DistributionConfig::default(),
            selected_channel: None,
        }
    }
}

impl WizardState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn apply(&mut self, selection: Selection) -> Result<(), WizardError> {
        match selection {
            Selection::ProductType(product) => self.product_type = Some(product),
            Selection::ProductStage(stage) => self.product_stage = Some(stage),
            Selection::MarketType(market) => self.market_type = Some(market),
            Selection::ToggleSegment(criterion) => {
                self.toggle_segment(criterion);
            }
            Selection::AddSegment(criterion) => {
                self.segmentation.insert(criterion);
            }
            Selection::RemoveSegment(criterion) => {
                self.segmentation.remove(&criterion);
            }
            Selection::Force { force, rating } => self.competitive_forces.rate(force, rating),
            Selection::Customization(level) => self.set_customization(level),
            Selection::Concentration(concentration) => self.set_concentration(concentration),
            Selection::Channel(channel) => self.select_channel(&channel)?,
        }
        Ok(())
    }

    /// Returns whether the criterion is selected after the toggle.
    pub fn toggle_segment(&mut self, criterion: SegmentationCriterion) -> bool {
        if self.segmentation.remove(&criterion) {
            false
        } else {
            self.segmentation.insert(criterion);
            true
        }
    }

    pub fn set_customization(&mut self, level: CustomizationLevel) {
        self.distribution.customization = Some(level);
        self.reconcile_channel();
    }

    pub fn set_concentration(&mut self, concentration: MarketConcentration) {
        self.distribution.concentration = Some(concentration);
        self.reconcile_channel();
    }

    pub fn select_channel(&mut self, channel: &str) -> Result<(), WizardError> {
        let profile = self
            .distribution_channel()
            .ok_or(WizardError::ChannelUnavailable)?;
        if !profile.offers(channel) {
            return Err(WizardError::UnknownChannel {
                channel: channel.to_string(),
                profile: profile.display_name,
            });
        }
        self.selected_channel = Some(channel.to_string());
        Ok(())
    }

    pub fn distribution_channel(&self) -> Option<&'static DistributionChannelProfile> {
        self.distribution.resolve()
    }

    pub fn check_advance(&self) -> Result<(), WizardError> {
        match self.step {
            Step::Product => {
                if self.product_type.is_some() && self.product_stage.is_some() {
                    Ok(())
                } else {
                    Err(WizardError::ProductIncomplete)
                }
            }
            Step::Market => self.market_type.map(|_| ()).ok_or(WizardError::MarketTypeMissing),
            Step::Segments => {
                if self.segmentation.is_empty() {
                    Err(WizardError::SegmentationEmpty)
                } else {
                    Ok(())
                }
            }
            Step::Forces => {
                if self.competitive_forces.is_complete() {
                    Ok(())
                } else {
                    Err(WizardError::ForcesIncomplete {
                        rated: self.competitive_forces.rated_count(),
                    })
                }
            }
            Step::Distribution => {
                if self.distribution.is_complete() {
                    Ok(())
                } else {
                    Err(WizardError::DistributionIncomplete)
                }
            }
            Step::Results => Err(WizardError::AtFinalStep),
        }
    }

    pub fn can_advance(&self) -> bool {
        self.check_advance().is_ok()
    }

    pub fn next(&mut self) -> Result<Step, WizardError> {
        self.check_advance()?;
        let next = self.step.following().ok_or(WizardError::AtFinalStep)?;
        tracing::debug!(from = self.step.number(), to = next.number(), "wizard advanced");
        self.step = next;
        Ok(next)
    }

    pub fn previous(&mut self) -> Result<Step, WizardError> {
        let previous = self.step.preceding().ok_or(WizardError::AtFirstStep)?;
        tracing::debug!(from = self.step.number(), to = previous.number(), "wizard went back");
        self.step = previous;
        Ok(previous)
    }

    pub fn restart(&mut self) {
        tracing::debug!(from = self.step.number(), "wizard restarted");
        *self = Self::default();
    }

    pub fn step_statuses(&self) -> Vec<(Step, StepStatus)> {
        Step::ALL
            .iter()
            .map(|step| {
                let status = if *step < self.step {
                    StepStatus::Done
                } else if *step == self.step {
                    StepStatus::Current
                } else {
                    StepStatus::Pending
                };
                (*step, status)
            })
            .collect()
    }

    fn reconcile_channel(&mut self) {
        let still_offered = match (&self.selected_channel, self.distribution_channel()) {
            (Some(channel), Some(profile)) => profile.offers(channel),
            (Some(_), None) => false,
            (None, _) => true,
        };
        if !still_offered {
            self.selected_channel = None;
        }
    }
}
