use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductType {
    Fmcg,
    Luxury,
    Electronics,
    Service,
}

impl ProductType {
    pub const ALL: [ProductType; 4] = [
        ProductType::Fmcg,
        ProductType::Luxury,
        ProductType::Electronics,
        ProductType::Service,
    ];

    pub fn from_str(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "fmcg" | "consumer" | "consumer-goods" => Some(ProductType::Fmcg),
            "luxury" | "premium" => Some(ProductType::Luxury),
            "electronics" | "gadgets" => Some(ProductType::Electronics),
            "service" | "services" => Some(ProductType::Service),
            _ => None,
        }
    }

    pub fn key(self) -> &'static str {
        match self {
            ProductType::Fmcg => "fmcg",
            ProductType::Luxury => "luxury",
            ProductType::Electronics => "electronics",
            ProductType::Service => "service",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            ProductType::Fmcg => "FMCG/Consumer Goods",
            ProductType::Luxury => "Luxury Products",
            ProductType::Electronics => "Electronics/Gadgets",
            ProductType::Service => "Service",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            ProductType::Fmcg => "Fast-moving consumer products",
            ProductType::Luxury => "Premium, high-differentiation items",
            ProductType::Electronics => "Technology products",
            ProductType::Service => "Intangible offerings",
        }
    }
}

/// Product lifecycle stage. Declaration order is the progression order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum LifecycleStage {
    Introduction,
    Growth,
    Maturity,
    Decline,
}

impl LifecycleStage {
    pub const ALL: [LifecycleStage; 4] = [
        LifecycleStage::Introduction,
        LifecycleStage::Growth,
        LifecycleStage::Maturity,
        LifecycleStage::Decline,
    ];

    pub fn from_str(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "introduction" | "intro" => Some(LifecycleStage::Introduction),
            "growth" => Some(LifecycleStage::Growth),
            "maturity" | "mature" => Some(LifecycleStage::Maturity),
            "decline" => Some(LifecycleStage::Decline),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            LifecycleStage::Introduction => "Introduction",
            LifecycleStage::Growth => "Growth",
            LifecycleStage::Maturity => "Maturity",
            LifecycleStage::Decline => "Decline",
        }
    }
}
