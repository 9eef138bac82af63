use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Porter's five competitive forces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CompetitiveForce {
    Rivalry,
    Suppliers,
    Buyers,
    NewEntrants,
    Substitutes,
}

impl CompetitiveForce {
    pub const ALL: [CompetitiveForce; 5] = [
        CompetitiveForce::Rivalry,
        CompetitiveForce::Suppliers,
        CompetitiveForce::Buyers,
        CompetitiveForce::NewEntrants,
        CompetitiveForce::Substitutes,
    ];

    pub fn from_str(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().replace(['-', '_'], "").as_str() {
            "rivalry" => Some(CompetitiveForce::Rivalry),
            "suppliers" => Some(CompetitiveForce::Suppliers),
            "buyers" | "customers" => Some(CompetitiveForce::Buyers),
            "newentrants" | "entrants" => Some(CompetitiveForce::NewEntrants),
            "substitutes" => Some(CompetitiveForce::Substitutes),
            _ => None,
        }
    }

    pub fn key(self) -> &'static str {
        match self {
            CompetitiveForce::Rivalry => "rivalry",
            CompetitiveForce::Suppliers => "suppliers",
            CompetitiveForce::Buyers => "buyers",
            CompetitiveForce::NewEntrants => "newEntrants",
            CompetitiveForce::Substitutes => "substitutes",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            CompetitiveForce::Rivalry => "Existing Rivalry Between Firms",
            CompetitiveForce::Suppliers => "Bargaining Power of Suppliers",
            CompetitiveForce::Buyers => "Bargaining Power of Customers",
            CompetitiveForce::NewEntrants => "Threat of New Entrants",
            CompetitiveForce::Substitutes => "Threat of Substitutes",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ForceRating {
    Low,
    Medium,
    High,
}

impl ForceRating {
    pub const ALL: [ForceRating; 3] = [ForceRating::Low, ForceRating::Medium, ForceRating::High];

    pub fn from_str(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "low" => Some(ForceRating::Low),
            "medium" | "med" => Some(ForceRating::Medium),
            "high" => Some(ForceRating::High),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ForceRating::Low => "Low",
            ForceRating::Medium => "Medium",
            ForceRating::High => "High",
        }
    }
}

/// Ratings recorded so far. A force missing from the map has not been rated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CompetitiveForces {
    ratings: BTreeMap<CompetitiveForce, ForceRating>,
}

impl CompetitiveForces {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rate(&mut self, force: CompetitiveForce, rating: ForceRating) {
        self.ratings.insert(force, rating);
    }

    pub fn get(&self, force: CompetitiveForce) -> Option<ForceRating> {
        self.ratings.get(&force).copied()
    }

    pub fn is_high(&self, force: CompetitiveForce) -> bool {
        self.get(force) == Some(ForceRating::High)
    }

    pub fn rated_count(&self) -> usize {
        self.ratings.len()
    }

    pub fn is_complete(&self) -> bool {
        CompetitiveForce::ALL
            .iter()
            .all(|force| self.ratings.contains_key(force))
    }

    pub fn iter(&self) -> impl Iterator<Item = (CompetitiveForce, ForceRating)> + '_ {
        self.ratings.iter().map(|(force, rating)| (*force, *rating))
    }

    pub fn clear(&mut self) {
        self.ratings.clear();
    }
}
