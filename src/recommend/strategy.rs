use serde::Serialize;

use crate::reference::{CompetitiveForce, LifecycleStage, ProductType, SegmentationCriterion};
use crate::wizard::WizardState;

pub const DISTRIBUTION_PENDING: &str = "Complete distribution configuration to get recommendation";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Recommendations {
    pub strategy: String,
    pub promotion: String,
    pub pricing: String,
    pub distribution: String,
    pub messaging: Vec<String>,
}

pub fn recommend_strategy(state: &WizardState) -> Recommendations {
    let strategy = state
        .market_type
        .map(|market| market.entry().strategy_label.to_string())
        .unwrap_or_default();

    let (promotion, pricing) = state
        .product_stage
        .map(stage_guidance)
        .unwrap_or(("", ""));

    let distribution = match state.distribution_channel() {
        Some(profile) => format!("{} - {}", profile.display_name, profile.description),
        None => DISTRIBUTION_PENDING.to_string(),
    };

    Recommendations {
        strategy,
        promotion: promotion.to_string(),
        pricing: pricing.to_string(),
        distribution,
        messaging: messaging_insights(state),
    }
}

/// Returns `(promotion, pricing)` guidance for a lifecycle stage.
pub fn stage_guidance(stage: LifecycleStage) -> (&'static str, &'static str) {
    match stage {
        LifecycleStage::Introduction => (
            "Focus on Information & Advertising to build awareness. Use promotion to induce trial. Less sales promotion, more advertising investment.",
            "Penetration pricing (low to gain market share) or Skimming pricing (high for innovative products)",
        ),
        LifecycleStage::Growth => (
            "Increase advertising to build preference. Sales promotions to attract new consumers and increase consumption.",
            "Maintain or slightly reduce prices to match competition and maximize market share",
        ),
        LifecycleStage::Maturity => (
            "Effort to induce different usages. More sales promotion, less advertising. Focus on attracting marginal customers and brand switching.",
            "Competitive pricing, promotional pricing to defend market share",
        ),
        LifecycleStage::Decline => (
            "Frequent sales promotions to liquidate stock. Extremely low advertising spend. Minimal promotional investment.",
            "Discount pricing to clear inventory, harvest profits",
        ),
    }
}

// Order matters: forces, then product type, then segmentation.
pub fn messaging_insights(state: &WizardState) -> Vec<String> {
    let mut messaging = Vec::new();
    let forces = &state.competitive_forces;

    if forces.is_high(CompetitiveForce::Rivalry) {
        messaging.push("Differentiate strongly - high rivalry requires clear positioning");
    }
    if forces.is_high(CompetitiveForce::Buyers) {
        messaging.push("Focus on value proposition - buyers have strong bargaining power");
    }
    if forces.is_high(CompetitiveForce::NewEntrants) {
        messaging.push("Build brand loyalty quickly - threat of new entrants is high");
    }
    if forces.is_high(CompetitiveForce::Substitutes) {
        messaging.push("Emphasize unique benefits - substitutes pose a threat");
    }

    match state.product_type {
        Some(ProductType::Luxury) => {
            messaging.push("Premium positioning, emotional branding, exclusivity messaging")
        }
        Some(ProductType::Fmcg) => {
            messaging.push("Mass market appeal, convenience, value for money")
        }
        Some(ProductType::Electronics) => {
            messaging.push("Innovation focus, feature benefits, early adopter targeting")
        }
        Some(ProductType::Service) | None => {}
    }

    let segments = &state.segmentation;
    if segments.contains(&SegmentationCriterion::Loyalty) {
        messaging.push("Implement loyalty programs and retention marketing");
    }
    if segments.contains(&SegmentationCriterion::UsageRate) {
        messaging.push("Tailor messaging for heavy vs. light users differently");
    }
    if segments.contains(&SegmentationCriterion::Psychographic) {
        messaging.push("Create lifestyle-based campaigns aligned with values");
    }

    messaging.into_iter().map(str::to_string).collect()
}
