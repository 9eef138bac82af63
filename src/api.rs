use serde::{Deserialize, Serialize};

use mixplan::recommend::ActivitySelection;
use mixplan::reference::LifecycleStage;
use mixplan::{PromotionMixInput, Step, StepStatus, WizardState};

#[derive(Debug, Deserialize)]
pub struct ApiPromotionRequest {
    pub audience: Option<String>,
    pub product_type: Option<String>,
    pub product_stage: Option<String>,
}

impl ApiPromotionRequest {
    pub fn into_input(self) -> Result<PromotionMixInput, String> {
        let product_stage = match self.product_stage.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(stage) => Some(
                LifecycleStage::from_str(stage)
                    .ok_or_else(|| format!("invalid product stage: {}", stage))?,
            ),
        };

        Ok(PromotionMixInput {
            audience: self.audience.unwrap_or_default(),
            product_type: self.product_type.unwrap_or_default().trim().to_string(),
            product_stage,
        })
    }
}

#[derive(Debug, Serialize)]
pub struct ApiShareResponse {
    pub url: String,
    pub message: String,
}

#[derive(Debug, Deserialize)]
pub struct ApiActivityRequest {
    pub name: String,
}

#[derive(Debug, Serialize)]
pub struct ApiActivitiesResponse {
    /// Whether the toggled activity ended up selected; absent on plain reads.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selected: Option<bool>,
    pub count: usize,
    pub activities: ActivitySelection,
}

impl ApiActivitiesResponse {
    pub fn new(selected: Option<bool>, activities: &ActivitySelection) -> Self {
        Self {
            selected,
            count: activities.len(),
            activities: activities.clone(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ApiStepView {
    pub number: u8,
    pub label: &'static str,
    pub status: StepStatus,
}

#[derive(Debug, Serialize)]
pub struct ApiSessionResponse {
    pub session_id: String,
    pub title: &'static str,
    pub progress: f64,
    pub can_advance: bool,
    pub blocker: Option<String>,
    pub steps: Vec<ApiStepView>,
    pub state: WizardState,
    pub activities: ActivitySelection,
}

impl ApiSessionResponse {
    pub fn from_state(
        session_id: String,
        state: &WizardState,
        activities: &ActivitySelection,
    ) -> Self {
        let blocker = match state.check_advance() {
            Ok(()) => None,
            Err(err) => Some(err.to_string()),
        };
        let steps = state
            .step_statuses()
            .into_iter()
            .map(|(step, status): (Step, StepStatus)| ApiStepView {
                number: step.number(),
                label: step.label(),
                status,
            })
            .collect();

        Self {
            session_id,
            title: state.step.title(),
            progress: state.step.progress(),
            can_advance: blocker.is_none(),
            blocker,
            steps,
            state: state.clone(),
            activities: activities.clone(),
        }
    }
}
