//! Marketing strategy and promotion mix decision engine.
//!
//! Pure lookups and scoring over static marketing frameworks (Ansoff matrix,
//! Porter's five forces, product lifecycle, distribution channel fit). The
//! caller owns a [`WizardState`] per session and passes it in by reference.

pub mod config;
pub mod recommend;
pub mod reference;
pub mod wizard;

use serde::Serialize;

use crate::config::EngineConfig;
use crate::recommend::{
    stage_advice, type_advice, AudienceMode, PromotionRecommender, ScoredRecommendation,
    ShareContext, ShareLinkBuilder,
};
use crate::reference::{LifecycleStage, COMMUNICATION_TOOLS};

pub use crate::recommend::{recommend_strategy, Recommendations};
pub use crate::wizard::{Selection, Step, StepStatus, WizardError, WizardState};

pub fn recommend_promotion_mix(descriptor: &str) -> Vec<ScoredRecommendation<'static>> {
    recommend_promotion_mix_with_config(descriptor, &EngineConfig::default())
}

pub fn recommend_promotion_mix_with_config(
    descriptor: &str,
    config: &EngineConfig,
) -> Vec<ScoredRecommendation<'static>> {
    PromotionRecommender::new(config.promotion.clone()).recommend(descriptor, &COMMUNICATION_TOOLS)
}

pub fn build_share_link(context: &ShareContext<'_>) -> String {
    build_share_link_with_config(context, &EngineConfig::default())
}

pub fn build_share_link_with_config(context: &ShareContext<'_>, config: &EngineConfig) -> String {
    ShareLinkBuilder::new(&config.share).build(context)
}

#[derive(Debug, Clone, Default)]
pub struct PromotionMixInput {
    pub audience: String,
    pub product_type: String,
    pub product_stage: Option<LifecycleStage>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PromotionMixOutput {
    pub mode: Option<AudienceMode>,
    pub stage_advice: &'static str,
    pub type_advice: &'static str,
    pub recommendations: Vec<ScoredRecommendation<'static>>,
}

/// Everything the promotion mix view shows for one set of inputs.
pub fn plan_promotion_mix(input: &PromotionMixInput, config: &EngineConfig) -> PromotionMixOutput {
    let recommendations = recommend_promotion_mix_with_config(&input.audience, config);
    let mode = if input.audience.is_empty() {
        None
    } else {
        Some(AudienceMode::classify(&input.audience))
    };

    PromotionMixOutput {
        mode,
        stage_advice: stage_advice(input.product_stage),
        type_advice: type_advice(&input.product_type),
        recommendations,
    }
}

pub fn format_percent(value: f64) -> String {
    format!("{:.0}%", value * 100.0)
}
