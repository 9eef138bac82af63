use serde::{Deserialize, Serialize};

/// Ansoff matrix cell: (new or existing market) x (new or existing product).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MarketType {
    #[serde(rename = "new-new")]
    NewMarketNewProduct,
    #[serde(rename = "new-existing")]
    NewMarketExistingProduct,
    #[serde(rename = "existing-new")]
    ExistingMarketNewProduct,
    #[serde(rename = "existing-existing")]
    ExistingMarketExistingProduct,
}

#[derive(Debug, Clone, Serialize)]
pub struct MarketStrategyEntry {
    pub display_name: &'static str,
    pub strategy_label: &'static str,
}

static DIVERSIFICATION: MarketStrategyEntry = MarketStrategyEntry {
    display_name: "New Market + New Product",
    strategy_label: "Diversification",
};

static MARKET_DEVELOPMENT: MarketStrategyEntry = MarketStrategyEntry {
    display_name: "New Market + Existing Product",
    strategy_label: "Market Development",
};

static PRODUCT_DEVELOPMENT: MarketStrategyEntry = MarketStrategyEntry {
    display_name: "Existing Market + New Product",
    strategy_label: "Product Development",
};

static MARKET_PENETRATION: MarketStrategyEntry = MarketStrategyEntry {
    display_name: "Existing Market + Existing Product",
    strategy_label: "Market Penetration",
};

impl MarketType {
    pub const ALL: [MarketType; 4] = [
        MarketType::NewMarketNewProduct,
        MarketType::NewMarketExistingProduct,
        MarketType::ExistingMarketNewProduct,
        MarketType::ExistingMarketExistingProduct,
    ];

    pub fn from_flags(new_market: bool, new_product: bool) -> Self {
        match (new_market, new_product) {
            (true, true) => MarketType::NewMarketNewProduct,
            (true, false) => MarketType::NewMarketExistingProduct,
            (false, true) => MarketType::ExistingMarketNewProduct,
            (false, false) => MarketType::ExistingMarketExistingProduct,
        }
    }

    /// Returns `(is_new_market, is_new_product)`.
    pub fn flags(self) -> (bool, bool) {
        match self {
            MarketType::NewMarketNewProduct => (true, true),
            MarketType::NewMarketExistingProduct => (true, false),
            MarketType::ExistingMarketNewProduct => (false, true),
            MarketType::ExistingMarketExistingProduct => (false, false),
        }
    }

    pub fn from_str(value: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|market| market.key() == value.trim().to_lowercase())
    }

    pub fn key(self) -> &'static str {
        match self {
            MarketType::NewMarketNewProduct => "new-new",
            MarketType::NewMarketExistingProduct => "new-existing",
            MarketType::ExistingMarketNewProduct => "existing-new",
            MarketType::ExistingMarketExistingProduct => "existing-existing",
        }
    }

    pub fn entry(self) -> &'static MarketStrategyEntry {
        market_strategy(self)
    }
}

pub fn market_strategy(market: MarketType) -> &'static MarketStrategyEntry {
    match market {
        MarketType::NewMarketNewProduct => &DIVERSIFICATION,
        MarketType::NewMarketExistingProduct => &MARKET_DEVELOPMENT,
        MarketType::ExistingMarketNewProduct => &PRODUCT_DEVELOPMENT,
        MarketType::ExistingMarketExistingProduct => &MARKET_PENETRATION,
    }
}
