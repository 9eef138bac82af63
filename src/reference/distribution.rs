use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CustomizationLevel {
    High,
    Low,
}

impl CustomizationLevel {
    pub fn from_str(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "high" => Some(CustomizationLevel::High),
            "low" => Some(CustomizationLevel::Low),
            _ => None,
        }
    }

    pub fn key(self) -> &'static str {
        match self {
            CustomizationLevel::High => "high",
            CustomizationLevel::Low => "low",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            CustomizationLevel::High => "High Customization",
            CustomizationLevel::Low => "Low Customization",
        }
    }

    pub fn hint(self) -> &'static str {
        match self {
            CustomizationLevel::High => "Tailored products, bespoke services",
            CustomizationLevel::Low => "Standardized products, mass market",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MarketConcentration {
    Concentrated,
    Fragmented,
}

impl MarketConcentration {
    pub fn from_str(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "concentrated" => Some(MarketConcentration::Concentrated),
            "fragmented" => Some(MarketConcentration::Fragmented),
            _ => None,
        }
    }

    pub fn key(self) -> &'static str {
        match self {
            MarketConcentration::Concentrated => "concentrated",
            MarketConcentration::Fragmented => "fragmented",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            MarketConcentration::Concentrated => "Concentrated Market",
            MarketConcentration::Fragmented => "Fragmented Market",
        }
    }

    pub fn hint(self) -> &'static str {
        match self {
            MarketConcentration::Concentrated => "Few large customers, B2B, niche segments",
            MarketConcentration::Fragmented => "Many small customers, B2C, mass market",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DistributionConfig {
    pub customization: Option<CustomizationLevel>,
    pub concentration: Option<MarketConcentration>,
}

impl DistributionConfig {
    pub fn is_complete(&self) -> bool {
        self.customization.is_some() && self.concentration.is_some()
    }

    pub fn resolve(&self) -> Option<&'static DistributionChannelProfile> {
        match (self.customization, self.concentration) {
            (Some(customization), Some(concentration)) => {
                Some(resolve_distribution_channel(customization, concentration))
            }
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct DistributionChannelProfile {
    pub key: &'static str,
    pub display_name: &'static str,
    pub model_label: &'static str,
    pub description: &'static str,
    pub pros: &'static [&'static str],
    pub cons: &'static [&'static str],
    pub examples: &'static [&'static str],
}

impl DistributionChannelProfile {
    pub fn offers(&self, channel: &str) -> bool {
        self.examples.iter().any(|example| *example == channel)
    }
}

static DIRECT_DISTRIBUTION: DistributionChannelProfile = DistributionChannelProfile {
    key: "high-concentrated",
    display_name: "Direct Distribution",
    model_label: "VMS (Vertical Marketing System)",
    description: "Direct sales to concentrated customer base",
    pros: &[
        "Perfect control over placement and quality",
        "Enhanced consumer satisfaction",
        "Less response time to grievances",
    ],
    cons: &[
        "Requires huge investments",
        "May not be viable for low-margin products",
        "Potential loss of flexibility",
    ],
    examples: &[
        "Company-owned stores",
        "Direct sales force",
        "E-commerce platform",
        "B2B direct sales",
    ],
};

static FRANCHISE_OPERATIONS: DistributionChannelProfile = DistributionChannelProfile {
    key: "high-fragmented",
    display_name: "Franchise Operations",
    model_label: "Hybrid VMS",
    description: "Standardized operations through franchise network",
    pros: &[
        "Rapid market expansion",
        "Controlled brand experience",
        "Shared investment with franchisees",
        "Local market expertise",
    ],
    cons: &[
        "Franchisee management complexity",
        "Quality control challenges",
        "Profit sharing with franchisees",
    ],
    examples: &[
        "Fast food franchises",
        "Retail chain franchises",
        "Service franchises",
        "Master franchise model",
    ],
};

static DISTRIBUTION_PERSONAL_SELLING: DistributionChannelProfile = DistributionChannelProfile {
    key: "low-concentrated",
    display_name: "Distribution + Personal Selling",
    model_label: "Hybrid Traditional",
    description: "Selected distributors with sales force support",
    pros: &[
        "Market access without heavy investment",
        "Sales force ensures customer relationships",
        "Flexibility in market coverage",
    ],
    cons: &[
        "Moderate control over distribution",
        "Coordination complexity",
        "Channel conflict potential",
    ],
    examples: &[
        "Industrial distributors",
        "B2B dealers with sales support",
        "Authorized dealers",
        "Value-added resellers",
    ],
};

static THIRD_PARTY_INTENSIVE: DistributionChannelProfile = DistributionChannelProfile {
    key: "low-fragmented",
    display_name: "Third-Party Intensive Distribution",
    model_label: "Traditional Channel",
    description: "Maximum market coverage through multiple retailers",
    pros: &[
        "Better market access by appointing more retailers",
        "Low investment in distribution",
        "Wide availability",
    ],
    cons: &[
        "Focus on volume, not customer satisfaction",
        "Slow information flow",
        "Manufacturer has minimal or no control",
        "Frequent conflicts among channel members",
    ],
    examples: &[
        "Mass retailers",
        "Supermarkets",
        "Online marketplaces",
        "Wholesaler networks",
        "Multi-brand outlets",
    ],
};

pub fn resolve_distribution_channel(
    customization: CustomizationLevel,
    concentration: MarketConcentration,
) -> &'static DistributionChannelProfile {
    match (customization, concentration) {
        (CustomizationLevel::High, MarketConcentration::Concentrated) => &DIRECT_DISTRIBUTION,
        (CustomizationLevel::High, MarketConcentration::Fragmented) => &FRANCHISE_OPERATIONS,
        (CustomizationLevel::Low, MarketConcentration::Concentrated) => {
            &DISTRIBUTION_PERSONAL_SELLING
        }
        (CustomizationLevel::Low, MarketConcentration::Fragmented) => &THIRD_PARTY_INTENSIVE,
    }
}

pub fn distribution_channels() -> [&'static DistributionChannelProfile; 4] {
    [
        &DIRECT_DISTRIBUTION,
        &FRANCHISE_OPERATIONS,
        &DISTRIBUTION_PERSONAL_SELLING,
        &THIRD_PARTY_INTENSIVE,
    ]
}
