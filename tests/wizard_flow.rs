use mixplan::reference::{
    CompetitiveForce, CustomizationLevel, ForceRating, LifecycleStage, MarketConcentration,
    MarketType, ProductType, SegmentationCriterion,
};
use mixplan::{Selection, Step, StepStatus, WizardError, WizardState};

fn completed_state() -> WizardState {
    let mut state = WizardState::new();
    state.apply(Selection::ProductType(ProductType::Luxury)).unwrap();
    state.apply(Selection::ProductStage(LifecycleStage::Growth)).unwrap();
    state.next().unwrap();
    state
        .apply(Selection::MarketType(MarketType::NewMarketExistingProduct))
        .unwrap();
    state.next().unwrap();
    state
        .apply(Selection::AddSegment(SegmentationCriterion::Loyalty))
        .unwrap();
    state.next().unwrap();
    for force in CompetitiveForce::ALL {
        state
            .apply(Selection::Force {
                force,
                rating: ForceRating::High,
            })
            .unwrap();
    }
    state.next().unwrap();
    state.set_customization(CustomizationLevel::High);
    state.set_concentration(MarketConcentration::Concentrated);
    state.select_channel("Direct sales force").unwrap();
    state.next().unwrap();
    state
}

#[test]
fn product_step_blocks_until_type_and_stage_are_set() {
    let mut state = WizardState::new();
    assert_eq!(state.step, Step::Product);
    assert_eq!(state.next(), Err(WizardError::ProductIncomplete));
    assert_eq!(state.step, Step::Product);

    state.apply(Selection::ProductType(ProductType::Fmcg)).unwrap();
    assert!(!state.can_advance());

    state
        .apply(Selection::ProductStage(LifecycleStage::Introduction))
        .unwrap();
    assert_eq!(state.next(), Ok(Step::Market));
    assert_eq!(state.step.number(), 2);
}

#[test]
fn forces_step_requires_all_five_ratings() {
    let mut state = WizardState::new();
    state.step = Step::Forces;
    for force in [
        CompetitiveForce::Rivalry,
        CompetitiveForce::Suppliers,
        CompetitiveForce::Buyers,
        CompetitiveForce::NewEntrants,
    ] {
        state.competitive_forces.rate(force, ForceRating::Medium);
    }
    assert_eq!(state.next(), Err(WizardError::ForcesIncomplete { rated: 4 }));

    state
        .competitive_forces
        .rate(CompetitiveForce::Substitutes, ForceRating::Low);
    assert_eq!(state.next(), Ok(Step::Distribution));
}

#[test]
fn rating_a_force_twice_keeps_one_rating() {
    let mut state = WizardState::new();
    state
        .competitive_forces
        .rate(CompetitiveForce::Rivalry, ForceRating::Low);
    state
        .competitive_forces
        .rate(CompetitiveForce::Rivalry, ForceRating::High);
    assert_eq!(state.competitive_forces.rated_count(), 1);
    assert_eq!(
        state.competitive_forces.get(CompetitiveForce::Rivalry),
        Some(ForceRating::High)
    );
}

#[test]
fn segment_and_distribution_guards_name_what_is_missing() {
    let mut state = WizardState::new();
    state.step = Step::Market;
    assert_eq!(state.next(), Err(WizardError::MarketTypeMissing));

    state.step = Step::Segments;
    assert_eq!(state.next(), Err(WizardError::SegmentationEmpty));
    assert!(state.toggle_segment(SegmentationCriterion::Demographic));
    assert!(!state.toggle_segment(SegmentationCriterion::Demographic));
    assert_eq!(state.next(), Err(WizardError::SegmentationEmpty));

    state.step = Step::Distribution;
    state.set_customization(CustomizationLevel::Low);
    assert_eq!(state.next(), Err(WizardError::DistributionIncomplete));
    state.set_concentration(MarketConcentration::Fragmented);
    assert_eq!(state.next(), Ok(Step::Results));
}

#[test]
fn results_step_has_no_next_and_first_step_has_no_previous() {
    let mut state = completed_state();
    assert_eq!(state.step, Step::Results);
    assert_eq!(state.next(), Err(WizardError::AtFinalStep));

    let mut fresh = WizardState::new();
    assert_eq!(fresh.previous(), Err(WizardError::AtFirstStep));
}

#[test]
fn going_back_keeps_later_selections() {
    let mut state = completed_state();
    let snapshot = state.clone();

    assert_eq!(state.previous(), Ok(Step::Distribution));
    assert_eq!(state.previous(), Ok(Step::Forces));
    assert_eq!(state.step, Step::Forces);
    assert_eq!(state.product_type, snapshot.product_type);
    assert_eq!(state.distribution, snapshot.distribution);
    assert_eq!(state.selected_channel, snapshot.selected_channel);
    assert_eq!(state.competitive_forces, snapshot.competitive_forces);
}

#[test]
fn restart_clears_every_field() {
    let mut state = completed_state();
    assert!(state.selected_channel.is_some());

    state.restart();

    assert_eq!(state.step, Step::Product);
    assert_eq!(state.product_type, None);
    assert_eq!(state.product_stage, None);
    assert_eq!(state.market_type, None);
    assert!(state.segmentation.is_empty());
    assert_eq!(state.competitive_forces.rated_count(), 0);
    assert_eq!(state.distribution.customization, None);
    assert_eq!(state.distribution.concentration, None);
    assert_eq!(state.selected_channel, None);
    assert_eq!(state, WizardState::new());
}

#[test]
fn channel_must_come_from_the_resolved_profile() {
    let mut state = WizardState::new();
    assert_eq!(
        state.select_channel("Supermarkets"),
        Err(WizardError::ChannelUnavailable)
    );

    state.set_customization(CustomizationLevel::Low);
    state.set_concentration(MarketConcentration::Fragmented);
    assert!(matches!(
        state.select_channel("Company-owned stores"),
        Err(WizardError::UnknownChannel { .. })
    ));
    state.select_channel("Supermarkets").unwrap();
    assert_eq!(state.selected_channel.as_deref(), Some("Supermarkets"));

    state.set_concentration(MarketConcentration::Concentrated);
    assert_eq!(state.selected_channel, None);
}

#[test]
fn step_statuses_track_the_current_step() {
    let mut state = WizardState::new();
    state.step = Step::Segments;
    let statuses = state.step_statuses();
    assert_eq!(statuses.len(), 6);
    assert_eq!(statuses[0], (Step::Product, StepStatus::Done));
    assert_eq!(statuses[2], (Step::Segments, StepStatus::Current));
    assert_eq!(statuses[5], (Step::Results, StepStatus::Pending));
    assert!((Step::Segments.progress() - 0.4).abs() < 1e-9);
    assert!((Step::Results.progress() - 1.0).abs() < 1e-9);
}

#[test]
fn selections_deserialize_from_tagged_json() {
    let selection: Selection = serde_json::from_str(
        r#"{"field":"force","value":{"force":"newEntrants","rating":"High"}}"#,
    )
    .unwrap();
    assert_eq!(
        selection,
        Selection::Force {
            force: CompetitiveForce::NewEntrants,
            rating: ForceRating::High,
        }
    );

    let state: WizardState =
        serde_json::from_str(r#"{"step": 3, "product_type": "service"}"#).unwrap();
    assert_eq!(state.step, Step::Segments);
    assert_eq!(state.product_type, Some(ProductType::Service));
    assert!(serde_json::from_str::<WizardState>(r#"{"step": 9}"#).is_err());
}
