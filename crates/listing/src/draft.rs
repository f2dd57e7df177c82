//! The transient "add product" form state.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use marketplace_core::{DomainError, DraftId, Entity, Price};

use crate::images::{EncodedImage, ImageError, ImageList};
use crate::submission::{ListingPayload, ListingSink, SubmissionReceipt, SubmitError};
use crate::taxonomy::{Condition, ListingCategory};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DraftField {
    Title,
    Category,
    Description,
    Price,
    Condition,
    Images,
}

impl DraftField {
    pub fn as_str(&self) -> &'static str {
        match self {
            DraftField::Title => "title",
            DraftField::Category => "category",
            DraftField::Description => "description",
            DraftField::Price => "price",
            DraftField::Condition => "condition",
            DraftField::Images => "images",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub field: DraftField,
    pub message: String,
}

/// Every field that failed validation, in form order.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("draft is incomplete: {}", describe(.errors))]
pub struct DraftError {
    pub errors: Vec<FieldError>,
}

impl DraftError {
    pub fn for_field(&self, field: DraftField) -> Option<&str> {
        self.errors
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message.as_str())
    }
}

fn describe(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(|e| format!("{}: {}", e.field.as_str(), e.message))
        .collect::<Vec<_>>()
        .join("; ")
}

/// Receipt for a batch of in-flight decodes, bound to the draft that started them.
///
/// A decode that finishes after its draft was submitted or discarded carries a
/// stale ticket and is dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntakeTicket {
    draft_id: DraftId,
}

/// Unsaved listing. Created empty on form mount.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DraftProduct {
    id: DraftId,
    created_at: DateTime<Utc>,
    title: String,
    category: Option<ListingCategory>,
    description: String,
    price: String,
    condition: Option<Condition>,
    images: ImageList,
    pending_decodes: usize,
}

impl DraftProduct {
    pub fn new() -> Self {
        Self::with_id(DraftId::new(), Utc::now())
    }

    pub fn with_id(id: DraftId, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            created_at,
            title: String::new(),
            category: None,
            description: String::new(),
            price: String::new(),
            condition: None,
            images: ImageList::new(),
            pending_decodes: 0,
        }
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn category(&self) -> Option<ListingCategory> {
        self.category
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Price exactly as typed; parsed only on validation.
    pub fn price_text(&self) -> &str {
        &self.price
    }

    pub fn condition(&self) -> Option<Condition> {
        self.condition
    }

    pub fn images(&self) -> &ImageList {
        &self.images
    }

    /// Decodes started but not yet finished.
    pub fn pending_decodes(&self) -> usize {
        self.pending_decodes
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    pub fn set_category(&mut self, category: Option<ListingCategory>) {
        self.category = category;
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
    }

    pub fn set_price_text(&mut self, price: impl Into<String>) {
        self.price = price.into();
    }

    pub fn set_condition(&mut self, condition: Option<Condition>) {
        self.condition = condition;
    }

    /// Register `count` files about to be decoded (picker or drop).
    pub fn begin_intake(&mut self, count: usize) -> IntakeTicket {
        self.pending_decodes += count;
        tracing::debug!(draft_id = %self.id, count, pending = self.pending_decodes, "image intake started");
        IntakeTicket { draft_id: self.id }
    }

    /// Record one finished decode. Successful images are appended in
    /// completion order; failures only release the pending slot.
    ///
    /// Returns the index of the appended image.
    pub fn complete_decode(
        &mut self,
        ticket: IntakeTicket,
        decoded: Result<EncodedImage, ImageError>,
    ) -> Option<usize> {
        if ticket.draft_id != self.id {
            tracing::debug!(draft_id = %ticket.draft_id, "dropping decode for a discarded draft");
            return None;
        }
        self.pending_decodes = self.pending_decodes.saturating_sub(1);

        match decoded {
            Ok(image) => Some(self.images.push(image)),
            Err(e) => {
                tracing::warn!(draft_id = %self.id, error = %e, "image decode failed");
                None
            }
        }
    }

    pub fn remove_image(&mut self, index: usize) -> Option<EncodedImage> {
        self.images.remove(index)
    }

    /// Required-field and numeric checks, mirroring native form validation.
    pub fn validate(&self) -> Result<Price, DraftError> {
        let mut errors = Vec::new();

        if self.title.trim().is_empty() {
            errors.push(FieldError {
                field: DraftField::Title,
                message: "title is required".to_string(),
            });
        }

        let price = match Price::parse(&self.price) {
            Ok(price) => Some(price),
            Err(e) => {
                let message = match e {
                    DomainError::Validation(msg) => msg,
                    other => other.to_string(),
                };
                errors.push(FieldError {
                    field: DraftField::Price,
                    message,
                });
                None
            }
        };

        if self.description.trim().is_empty() {
            errors.push(FieldError {
                field: DraftField::Description,
                message: "description is required".to_string(),
            });
        }

        match price {
            Some(price) if errors.is_empty() => Ok(price),
            _ => Err(DraftError { errors }),
        }
    }

    /// Capture the current values as a submission payload.
    pub fn to_payload(&self, submitted_at: DateTime<Utc>) -> Result<ListingPayload, DraftError> {
        let price = self.validate()?;
        Ok(ListingPayload {
            draft_id: self.id,
            title: self.title.trim().to_string(),
            category: self.category,
            description: self.description.trim().to_string(),
            price,
            condition: self.condition,
            images: self.images.as_slice().to_vec(),
            submitted_at,
        })
    }

    /// Validate, hand the payload to `sink`, and on success replace `self`
    /// with a fresh empty draft. On failure the draft is left as it was.
    pub fn submit<S>(&mut self, sink: &S, submitted_at: DateTime<Utc>) -> Result<SubmissionReceipt, SubmitError>
    where
        S: ListingSink + ?Sized,
    {
        let payload = self.to_payload(submitted_at)?;
        let receipt = sink.submit(&payload)?;
        *self = DraftProduct::new();
        Ok(receipt)
    }
}

impl Default for DraftProduct {
    fn default() -> Self {
        Self::new()
    }
}

impl Entity for DraftProduct {
    type Id = DraftId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    fn image(tag: &str) -> EncodedImage {
        EncodedImage::from_data_url(format!("data:image/jpeg;base64,{tag}")).unwrap()
    }

    fn filled() -> DraftProduct {
        let mut draft = DraftProduct::new();
        draft.set_title("  Road Bike ");
        draft.set_description("Aluminium frame, 21 gears");
        draft.set_price_text("450.00");
        draft.set_category(Some(ListingCategory::SportsAndOutdoors));
        draft.set_condition(Some(Condition::Good));
        draft
    }

    #[derive(Default)]
    struct RecordingSink {
        received: RefCell<Vec<ListingPayload>>,
    }

    impl ListingSink for RecordingSink {
        fn submit(&self, payload: &ListingPayload) -> Result<SubmissionReceipt, SubmitError> {
            self.received.borrow_mut().push(payload.clone());
            Ok(SubmissionReceipt::for_payload(payload))
        }
    }

    struct RejectingSink;

    impl ListingSink for RejectingSink {
        fn submit(&self, _payload: &ListingPayload) -> Result<SubmissionReceipt, SubmitError> {
            Err(SubmitError::Rejected("service unavailable".to_string()))
        }
    }

    #[test]
    fn new_draft_is_empty() {
        let draft = DraftProduct::new();
        assert!(draft.title().is_empty());
        assert!(draft.images().is_empty());
        assert_eq!(draft.category(), None);
        assert_eq!(draft.pending_decodes(), 0);
    }

    #[test]
    fn empty_draft_reports_required_fields_in_form_order() {
        let err = DraftProduct::new().validate().unwrap_err();
        let fields: Vec<DraftField> = err.errors.iter().map(|e| e.field).collect();
        assert_eq!(fields, vec![DraftField::Title, DraftField::Price, DraftField::Description]);
        assert!(err.to_string().starts_with("draft is incomplete: title:"));
    }

    #[test]
    fn non_numeric_price_is_rejected() {
        let mut draft = filled();
        draft.set_price_text("cheap");
        let err = draft.validate().unwrap_err();
        assert!(err.for_field(DraftField::Price).is_some());
        assert_eq!(err.errors.len(), 1);
    }

    #[test]
    fn category_and_condition_are_optional() {
        let mut draft = filled();
        draft.set_category(None);
        draft.set_condition(None);
        assert_eq!(draft.validate().unwrap(), Price::from_cents(45000));
    }

    #[test]
    fn decodes_append_in_completion_order() {
        let mut draft = filled();
        let ticket = draft.begin_intake(3);
        assert_eq!(draft.pending_decodes(), 3);

        // Third file finishes first, then the first; the second fails.
        assert_eq!(draft.complete_decode(ticket, Ok(image("third"))), Some(0));
        assert_eq!(draft.complete_decode(ticket, Ok(image("first"))), Some(1));
        assert_eq!(draft.complete_decode(ticket, Err(ImageError::Read("corrupt".into()))), None);

        assert_eq!(draft.pending_decodes(), 0);
        let order: Vec<&EncodedImage> = draft.images().iter().collect();
        assert_eq!(order, vec![&image("third"), &image("first")]);
    }

    #[test]
    fn add_then_remove_restores_previous_images() {
        let mut draft = filled();
        let ticket = draft.begin_intake(2);
        draft.complete_decode(ticket, Ok(image("a")));
        draft.complete_decode(ticket, Ok(image("b")));
        let before = draft.images().clone();

        let ticket = draft.begin_intake(1);
        let index = draft.complete_decode(ticket, Ok(image("c"))).unwrap();
        draft.remove_image(index);

        assert_eq!(draft.images(), &before);
    }

    #[test]
    fn submit_hands_payload_to_sink_and_resets() {
        let sink = RecordingSink::default();
        let mut draft = filled();
        let ticket = draft.begin_intake(1);
        draft.complete_decode(ticket, Ok(image("x")));
        let original_id = *draft.id();

        let receipt = draft.submit(&sink, Utc::now()).unwrap();
        assert_eq!(receipt.draft_id, original_id);
        assert_eq!(receipt.image_count, 1);

        let received = sink.received.borrow();
        assert_eq!(received.len(), 1);
        assert_eq!(received[0].title, "Road Bike");
        assert_eq!(received[0].price, Price::from_cents(45000));
        assert_eq!(received[0].condition, Some(Condition::Good));

        assert_ne!(*draft.id(), original_id);
        assert!(draft.title().is_empty());
        assert!(draft.images().is_empty());
    }

    #[test]
    fn invalid_submit_keeps_the_draft() {
        let sink = RecordingSink::default();
        let mut draft = filled();
        draft.set_title("");
        let before = draft.clone();

        match draft.submit(&sink, Utc::now()) {
            Err(SubmitError::Invalid(e)) => assert!(e.for_field(DraftField::Title).is_some()),
            other => panic!("Expected Invalid, got {other:?}"),
        }
        assert_eq!(draft, before);
        assert!(sink.received.borrow().is_empty());
    }

    #[test]
    fn rejected_submit_keeps_the_draft() {
        let mut draft = filled();
        let before = draft.clone();
        assert!(matches!(
            draft.submit(&RejectingSink, Utc::now()),
            Err(SubmitError::Rejected(_))
        ));
        assert_eq!(draft, before);
    }

    #[test]
    fn late_decode_for_submitted_draft_is_dropped() {
        let sink = RecordingSink::default();
        let mut draft = filled();
        let stale = draft.begin_intake(1);
        draft.submit(&sink, Utc::now()).unwrap();

        assert_eq!(draft.complete_decode(stale, Ok(image("late"))), None);
        assert!(draft.images().is_empty());
        assert_eq!(draft.pending_decodes(), 0);
    }

    #[tokio::test]
    async fn concurrent_reads_land_in_completion_order() {
        use std::time::Duration;
        use tokio::sync::mpsc;

        let mut draft = filled();
        let ticket = draft.begin_intake(3);
        let (tx, mut rx) = mpsc::unbounded_channel();

        // Selection order a, b, c; read latency makes c finish first and a last.
        for (tag, delay_ms) in [("a", 60u64), ("b", 30), ("c", 5)] {
            let tx = tx.clone();
            tokio::spawn(async move {
                tokio::time::sleep(Duration::from_millis(delay_ms)).await;
                let _ = tx.send(EncodedImage::from_data_url(format!("data:image/png;base64,{tag}")));
            });
        }
        drop(tx);

        while let Some(decoded) = rx.recv().await {
            draft.complete_decode(ticket, decoded);
        }

        assert_eq!(draft.pending_decodes(), 0);
        let tags: Vec<&str> = draft
            .images()
            .iter()
            .map(|i| i.as_str().rsplit(',').next().unwrap_or_default())
            .collect();
        assert_eq!(tags, vec!["c", "b", "a"]);
    }
}
