use mixplan::config::EngineConfig;
use mixplan::recommend::{
    stage_advice, type_advice, ActivityError, ActivitySelection, AudienceMode, Priority,
    PromotionConfig, PromotionRecommender, AUDIENCE_PRESETS,
};
use mixplan::reference::{
    Affinity, CommunicationTool, LifecycleStage, ToolCategory, COMMUNICATION_TOOLS,
};
use mixplan::{plan_promotion_mix, recommend_promotion_mix, PromotionMixInput};
use proptest::prelude::*;

static TIED_CATALOG: [CommunicationTool; 4] = [
    CommunicationTool {
        name: "Alpha",
        partner: Affinity::Partly,
        customer: Affinity::Largely,
        category: ToolCategory::Print,
        resources: &[],
    },
    CommunicationTool {
        name: "Beta",
        partner: Affinity::Largely,
        customer: Affinity::Partly,
        category: ToolCategory::Events,
        resources: &[],
    },
    CommunicationTool {
        name: "Gamma",
        partner: Affinity::Absent,
        customer: Affinity::Largely,
        category: ToolCategory::Direct,
        resources: &[],
    },
    CommunicationTool {
        name: "Delta",
        partner: Affinity::Absent,
        customer: Affinity::Partly,
        category: ToolCategory::Pr,
        resources: &[],
    },
];

fn names(descriptor: &str, recommender: &PromotionRecommender) -> Vec<&'static str> {
    recommender
        .recommend(descriptor, &TIED_CATALOG)
        .iter()
        .map(|recommendation| recommendation.name())
        .collect()
}

#[test]
fn empty_descriptor_recommends_nothing() {
    assert!(recommend_promotion_mix("").is_empty());
}

#[test]
fn whitespace_descriptor_falls_back_to_mixed_audience() {
    let results = recommend_promotion_mix("   ");
    assert_eq!(results.len(), 12);
    assert!(results
        .iter()
        .all(|r| r.reasoning == "Balanced approach for mixed audience"));

    let input = PromotionMixInput {
        audience: " \t".to_string(),
        ..PromotionMixInput::default()
    };
    let output = plan_promotion_mix(&input, &EngineConfig::default());
    assert_eq!(output.mode, Some(AudienceMode::Mixed));
    assert_eq!(output.recommendations.len(), 12);
}

#[test]
fn customer_descriptor_puts_largely_before_partly() {
    let recommender = PromotionRecommender::new(PromotionConfig { max_results: 20 });
    let results = recommender.recommend("I want to reach B2C customers", &COMMUNICATION_TOOLS);

    assert_eq!(results.len(), 14);
    assert!(results[..12].iter().all(|r| r.score == 3));
    assert_eq!(results[12].name(), "Trade Shows");
    assert_eq!(results[13].name(), "Trade Discount/Rebates");
    assert_eq!(results[13].score, 1);
    assert_eq!(results[13].reasoning, "Moderately effective for customers");
    assert_eq!(results[13].priority(), Priority::Medium);
    assert_eq!(results[0].reasoning, "Highly effective for customer-centric approach");
}

#[test]
fn default_cap_keeps_twelve_customer_activities() {
    let results = recommend_promotion_mix("Customer Centric (B2C)");
    assert_eq!(results.len(), 12);
    assert_eq!(
        results[0].name(),
        "Advertisements on TV/Newspaper/Magazines/Radio"
    );
    assert!(results.iter().all(|r| r.priority() == Priority::High));
}

#[test]
fn partner_descriptor_drops_tools_partners_ignore() {
    let results = recommend_promotion_mix("Partner Centric (B2B)");
    let names: Vec<_> = results.iter().map(|r| r.name()).collect();

    assert_eq!(names.len(), 10);
    assert_eq!(names[0], "Trade Shows");
    assert_eq!(names[1], "Trade Discount/Rebates");
    assert_eq!(names[2], "Advertisements on TV/Newspaper/Magazines/Radio");
    assert!(!names.contains(&"Sampling Events"));
    assert!(!names.contains(&"Community Relations/CSR Drives"));
    assert!(results.iter().all(|r| r.score > 0));
    assert_eq!(results[2].reasoning, "Moderately effective for partners");
}

#[test]
fn customer_keyword_wins_over_partner_keyword() {
    assert_eq!(
        AudienceMode::classify("partners and customers"),
        AudienceMode::Customer
    );
    assert_eq!(AudienceMode::classify("our B2B partners"), AudienceMode::Partner);
    assert_eq!(AudienceMode::classify("Mixed Audience"), AudienceMode::Mixed);
    assert_eq!(AudienceMode::classify("everyone"), AudienceMode::Mixed);
}

#[test]
fn presets_cover_each_audience_mode() {
    let modes: Vec<_> = AUDIENCE_PRESETS
        .iter()
        .map(|preset| AudienceMode::classify(preset))
        .collect();
    assert_eq!(
        modes,
        vec![AudienceMode::Customer, AudienceMode::Partner, AudienceMode::Mixed]
    );
}

#[test]
fn mixed_audience_scores_the_better_affinity_and_keeps_catalog_order() {
    let results = recommend_promotion_mix("Mixed Audience");
    assert_eq!(results.len(), 12);
    assert!(results
        .iter()
        .all(|r| r.reasoning == "Balanced approach for mixed audience" && r.score == 3));
    let expected: Vec<_> = COMMUNICATION_TOOLS[..12].iter().map(|tool| tool.name).collect();
    let actual: Vec<_> = results.iter().map(|r| r.name()).collect();
    assert_eq!(actual, expected);
}

#[test]
fn equal_scores_keep_catalog_order() {
    let recommender = PromotionRecommender::new(PromotionConfig::default());
    assert_eq!(
        names("customer", &recommender),
        vec!["Alpha", "Gamma", "Beta", "Delta"]
    );
    assert_eq!(names("partner", &recommender), vec!["Beta", "Alpha"]);
    assert_eq!(
        names("anyone", &recommender),
        vec!["Alpha", "Beta", "Gamma", "Delta"]
    );
}

#[test]
fn configured_cap_truncates_after_sorting() {
    let recommender = PromotionRecommender::new(PromotionConfig { max_results: 2 });
    assert_eq!(names("customer", &recommender), vec!["Alpha", "Gamma"]);
}

#[test]
fn plan_reports_mode_and_advice() {
    let input = PromotionMixInput {
        audience: "b2c shoppers".to_string(),
        product_type: "FMCG snacks".to_string(),
        product_stage: Some(LifecycleStage::Decline),
    };
    let output = plan_promotion_mix(&input, &EngineConfig::default());
    assert_eq!(output.mode, Some(AudienceMode::Customer));
    assert!(output.stage_advice.starts_with("Focus on cost efficiency"));
    assert!(output.type_advice.starts_with("Consumer goods"));
    assert_eq!(output.recommendations.len(), 12);

    let empty = plan_promotion_mix(&PromotionMixInput::default(), &EngineConfig::default());
    assert_eq!(empty.mode, None);
    assert!(empty.recommendations.is_empty());
    assert_eq!(
        empty.stage_advice,
        "Consider your product lifecycle stage when allocating marketing budget."
    );
}

#[test]
fn type_advice_matches_first_keyword_group() {
    assert!(type_advice("Industrial pumps").starts_with("Industrial products"));
    assert!(type_advice("premium watches").starts_with("Premium products"));
    assert!(type_advice("Cleaning service").starts_with("Services require"));
    assert!(type_advice("consumer b2b hybrid").starts_with("Consumer goods"));
    assert_eq!(
        type_advice(""),
        "Tailor your communication mix to your product characteristics and target market."
    );
    assert!(stage_advice(Some(LifecycleStage::Growth)).starts_with("Expand distribution"));
}

#[test]
fn activity_selection_only_accepts_catalog_tools() {
    let mut selection = ActivitySelection::new();
    selection.add("Trade Shows").unwrap();
    selection.add("Trade Shows").unwrap();
    assert_eq!(selection.len(), 1);
    assert_eq!(
        selection.add("Skywriting"),
        Err(ActivityError::UnknownActivity("Skywriting".to_string()))
    );

    assert_eq!(selection.toggle("Loyalty Programs"), Ok(true));
    assert_eq!(
        selection.iter().collect::<Vec<_>>(),
        vec!["Trade Shows", "Loyalty Programs"]
    );
    assert_eq!(selection.toggle("Trade Shows"), Ok(false));
    assert!(!selection.contains("Trade Shows"));
    assert!(!selection.remove("Trade Shows"));

    selection.clear();
    assert!(selection.is_empty());
}

proptest! {
    #[test]
    fn never_more_than_twelve_recommendations(descriptor in ".*") {
        let results = recommend_promotion_mix(&descriptor);
        prop_assert!(results.len() <= 12);
        prop_assert!(results.iter().all(|r| r.score > 0));
        prop_assert!(results.windows(2).all(|pair| pair[0].score >= pair[1].score));
    }
}
