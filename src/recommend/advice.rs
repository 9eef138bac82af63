use crate::reference::LifecycleStage;

pub fn stage_advice(stage: Option<LifecycleStage>) -> &'static str {
    match stage {
        Some(LifecycleStage::Introduction) => {
            "Focus on awareness building through mass media, sampling, and trade shows. Consider promotional pricing."
        }
        Some(LifecycleStage::Growth) => {
            "Expand distribution through trade incentives. Build brand loyalty with loyalty programs and CSR activities."
        }
        Some(LifecycleStage::Maturity) => {
            "Maintain market share through competitive pricing, loyalty programs, and sustained advertising."
        }
        Some(LifecycleStage::Decline) => {
            "Focus on cost efficiency. Use targeted promotions, liquidation sales, and focus on loyal customer base."
        }
        None => "Consider your product lifecycle stage when allocating marketing budget.",
    }
}

/// Advice for a free-text product type such as "FMCG", "Industrial" or "Service".
pub fn type_advice(product_type: &str) -> &'static str {
    let lowered = product_type.to_lowercase();
    let mentions = |needles: &[&str]| needles.iter().any(|needle| lowered.contains(needle));

    if mentions(&["fmcg", "consumer"]) {
        "Consumer goods benefit from mass media advertising, POP displays, sampling events, and loyalty programs."
    } else if mentions(&["industrial", "b2b"]) {
        "Industrial products require trade shows, facility tours, trade discounts, and direct relationship building."
    } else if mentions(&["luxury", "premium"]) {
        "Premium products benefit from selective advertising, experiential events, and exclusive partnerships."
    } else if mentions(&["service"]) {
        "Services require demonstration through sampling, testimonials, community engagement, and relationship marketing."
    } else {
        "Tailor your communication mix to your product characteristics and target market."
    }
}
