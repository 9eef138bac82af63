pub mod distribution;
pub mod forces;
pub mod market;
pub mod products;
pub mod segmentation;
pub mod tools;

use serde::Serialize;

pub use distribution::{
    distribution_channels, resolve_distribution_channel, CustomizationLevel,
    DistributionChannelProfile, DistributionConfig, MarketConcentration,
};
pub use forces::{CompetitiveForce, CompetitiveForces, ForceRating};
pub use market::{market_strategy, MarketStrategyEntry, MarketType};
pub use products::{LifecycleStage, ProductType};
pub use segmentation::SegmentationCriterion;
pub use tools::{
    find_tool, Affinity, CommunicationTool, DesignResource, ToolCategory, COMMUNICATION_TOOLS,
};

#[derive(Debug, Clone, Serialize)]
pub struct KeyedEntry {
    pub key: &'static str,
    pub name: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct MarketEntry {
    pub key: &'static str,
    pub new_market: bool,
    pub new_product: bool,
    pub name: &'static str,
    pub strategy: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct ForceEntry {
    pub key: &'static str,
    pub label: &'static str,
}

/// Every static table in one serialisable value, for browsing and for the HTTP host.
#[derive(Debug, Clone, Serialize)]
pub struct ReferenceData {
    pub product_types: Vec<KeyedEntry>,
    pub lifecycle_stages: Vec<&'static str>,
    pub market_types: Vec<MarketEntry>,
    pub segmentation: Vec<KeyedEntry>,
    pub competitive_forces: Vec<ForceEntry>,
    pub force_ratings: Vec<&'static str>,
    pub distribution_channels: Vec<&'static DistributionChannelProfile>,
    pub communication_tools: &'static [CommunicationTool],
}

impl ReferenceData {
    pub fn builtin() -> Self {
        Self {
            product_types: ProductType::ALL
                .iter()
                .map(|product| KeyedEntry {
                    key: product.key(),
                    name: product.display_name(),
                    description: product.description(),
                })
                .collect(),
            lifecycle_stages: LifecycleStage::ALL.iter().map(|stage| stage.label()).collect(),
            market_types: MarketType::ALL
                .iter()
                .map(|market| {
                    let (new_market, new_product) = market.flags();
                    let entry = market.entry();
                    MarketEntry {
                        key: market.key(),
                        new_market,
                        new_product,
                        name: entry.display_name,
                        strategy: entry.strategy_label,
                    }
                })
                .collect(),
            segmentation: SegmentationCriterion::ALL
                .iter()
                .map(|criterion| KeyedEntry {
                    key: criterion.key(),
                    name: criterion.display_name(),
                    description: criterion.description(),
                })
                .collect(),
            competitive_forces: CompetitiveForce::ALL
                .iter()
                .map(|force| ForceEntry {
                    key: force.key(),
                    label: force.label(),
                })
                .collect(),
            force_ratings: ForceRating::ALL.iter().map(|rating| rating.label()).collect(),
            distribution_channels: distribution_channels().to_vec(),
            communication_tools: &COMMUNICATION_TOOLS,
        }
    }
}
