//! Submission boundary for finished drafts.
//!
//! [`ListingSink`] is where a persistence/API service is meant to plug in.
//! No such service is part of this workspace; [`LogSink`] records the payload
//! in the log and reports success.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use thiserror::Error;

use marketplace_core::{DraftId, Price};

use crate::draft::DraftError;
use crate::images::EncodedImage;
use crate::taxonomy::{Condition, ListingCategory};

/// Snapshot of a validated draft.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListingPayload {
    pub draft_id: DraftId,
    pub title: String,
    pub category: Option<ListingCategory>,
    pub description: String,
    pub price: Price,
    pub condition: Option<Condition>,
    pub images: Vec<EncodedImage>,
    pub submitted_at: DateTime<Utc>,
}

impl ListingPayload {
    /// JSON summary with image blobs replaced by their media types and sizes.
    pub fn summary(&self) -> Value {
        let images: Vec<Value> = self
            .images
            .iter()
            .map(|img| json!({ "mime": img.mime_type(), "encoded_len": img.payload_len() }))
            .collect();
        json!({
            "draft_id": self.draft_id,
            "title": self.title,
            "category": self.category,
            "description": self.description,
            "price": self.price,
            "condition": self.condition,
            "images": images,
            "submitted_at": self.submitted_at,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionReceipt {
    pub draft_id: DraftId,
    pub image_count: usize,
    pub submitted_at: DateTime<Utc>,
}

impl SubmissionReceipt {
    pub fn for_payload(payload: &ListingPayload) -> Self {
        Self {
            draft_id: payload.draft_id,
            image_count: payload.images.len(),
            submitted_at: payload.submitted_at,
        }
    }
}

#[derive(Debug, Error)]
pub enum SubmitError {
    #[error(transparent)]
    Invalid(#[from] DraftError),

    #[error("listing rejected: {0}")]
    Rejected(String),
}

/// Receives finished listings.
pub trait ListingSink {
    fn submit(&self, payload: &ListingPayload) -> Result<SubmissionReceipt, SubmitError>;
}

/// Placeholder sink: logs the payload summary at `info`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSink;

impl ListingSink for LogSink {
    fn submit(&self, payload: &ListingPayload) -> Result<SubmissionReceipt, SubmitError> {
        tracing::info!(
            draft_id = %payload.draft_id,
            title = %payload.title,
            price_cents = payload.price.cents(),
            image_count = payload.images.len(),
            payload = %payload.summary(),
            "listing submitted"
        );
        Ok(SubmissionReceipt::for_payload(payload))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload() -> ListingPayload {
        ListingPayload {
            draft_id: DraftId::new(),
            title: "Desk".to_string(),
            category: Some(ListingCategory::HomeAndGarden),
            description: "Oak".to_string(),
            price: Price::from_cents(12000),
            condition: Some(Condition::LikeNew),
            images: vec![
                EncodedImage::from_data_url("data:image/png;base64,AAAA").unwrap(),
                EncodedImage::from_data_url("data:image/webp;base64,BBBBBBBB").unwrap(),
            ],
            submitted_at: Utc::now(),
        }
    }

    #[test]
    fn summary_omits_image_payloads() {
        let summary = payload().summary();
        let text = summary.to_string();
        assert!(!text.contains("AAAA"));
        assert_eq!(summary["images"][0]["mime"], "image/png");
        assert_eq!(summary["images"][1]["encoded_len"], 8);
        assert_eq!(summary["condition"], "like-new");
        assert_eq!(summary["price"], 12000);
    }

    #[test]
    fn log_sink_acknowledges_every_payload() {
        let payload = payload();
        let receipt = LogSink.submit(&payload).unwrap();
        assert_eq!(receipt.draft_id, payload.draft_id);
        assert_eq!(receipt.image_count, 2);
    }

    #[test]
    fn sink_is_object_safe() {
        let sink: Box<dyn ListingSink> = Box::new(LogSink);
        assert!(sink.submit(&payload()).is_ok());
    }
}
