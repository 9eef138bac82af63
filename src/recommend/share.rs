use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::reference::{DistributionChannelProfile, LifecycleStage};
use crate::wizard::WizardState;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShareConfig {
    pub base_url: String,
}

impl Default for ShareConfig {
    fn default() -> Self {
        Self {
            base_url: "https://wa.me/?text=".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShareLinkError {
    #[error("share link has no text parameter")]
    MissingText,
    #[error("share link text is not valid UTF-8: {0}")]
    InvalidEncoding(String),
}

#[derive(Debug, Clone, Default)]
pub struct ShareContext<'a> {
    pub product_type_name: &'a str,
    pub product_stage: Option<LifecycleStage>,
    pub channel_profile: Option<&'a DistributionChannelProfile>,
    pub selected_channel: Option<&'a str>,
}

impl<'a> ShareContext<'a> {
    pub fn from_state(state: &'a WizardState) -> Self {
        Self {
            product_type_name: state
                .product_type
                .map(|product| product.display_name())
                .unwrap_or(""),
            product_stage: state.product_stage,
            channel_profile: state.distribution_channel(),
            selected_channel: state.selected_channel.as_deref(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ShareLinkBuilder {
    base_url: String,
}

impl ShareLinkBuilder {
    pub fn new(config: &ShareConfig) -> Self {
        Self {
            base_url: config.base_url.clone(),
        }
    }

    pub fn message(&self, context: &ShareContext<'_>) -> String {
        let stage = context.product_stage.map(|stage| stage.label()).unwrap_or("");
        let channel_name = context
            .channel_profile
            .map(|profile| profile.display_name)
            .unwrap_or("");
        let channel_model = context
            .channel_profile
            .map(|profile| profile.model_label)
            .unwrap_or("");
        let selected = context.selected_channel.unwrap_or("");

        format!(
            "Hi! I'd like to discuss distribution channel setup:\n\
             \n\
             Product Type: {}\n\
             Product Stage: {}\n\
             Recommended Channel: {}\n\
             Channel Model: {}\n\
             Selected Option: {}\n\
             \n\
             I'm interested in learning more about implementation.",
            context.product_type_name, stage, channel_name, channel_model, selected
        )
    }

    pub fn build(&self, context: &ShareContext<'_>) -> String {
        let message = self.message(context);
        format!("{}{}", self.base_url, encode_text(&message))
    }
}

/// Percent-encodes everything except `A-Z a-z 0-9 - _ . ~` and `/`.
pub fn encode_text(text: &str) -> String {
    // A literal '%' comes out as "%25", so every "%2F" here was a '/'.
    urlencoding::encode(text).replace("%2F", "/")
}

/// Recovers the message text from a link produced by [`ShareLinkBuilder::build`].
pub fn decode_share_message(url: &str) -> Result<String, ShareLinkError> {
    let (_, query) = url.split_once('?').ok_or(ShareLinkError::MissingText)?;
    let encoded = query
        .split('&')
        .find_map(|pair| pair.strip_prefix("text="))
        .ok_or(ShareLinkError::MissingText)?;
    urlencoding::decode(encoded)
        .map(|decoded| decoded.into_owned())
        .map_err(|err| ShareLinkError::InvalidEncoding(err.to_string()))
}
