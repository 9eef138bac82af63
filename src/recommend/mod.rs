pub mod advice;
pub mod promotion;
pub mod share;
pub mod strategy;

pub use advice::{stage_advice, type_advice};
pub use promotion::{
    ActivityError, ActivitySelection, AudienceMode, Priority, PromotionConfig,
    PromotionRecommender, ScoredRecommendation, AUDIENCE_PRESETS,
};
pub use share::{
    decode_share_message, encode_text, ShareConfig, ShareContext, ShareLinkBuilder,
    ShareLinkError,
};
pub use strategy::{messaging_insights, recommend_strategy, stage_guidance, Recommendations};
