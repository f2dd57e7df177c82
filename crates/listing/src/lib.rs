//! Listing domain module: the "add product" draft.
//!
//! A [`DraftProduct`] lives from form mount until submit or navigation. It
//! collects field text, an ordered list of decoded images, and hands a
//! validated [`ListingPayload`] to a [`ListingSink`] on submit.

pub mod draft;
pub mod images;
pub mod submission;
pub mod taxonomy;

pub use draft::{DraftError, DraftField, DraftProduct, FieldError, IntakeTicket};
pub use images::{EncodedImage, ImageError, ImageList};
pub use submission::{ListingPayload, ListingSink, LogSink, SubmissionReceipt, SubmitError};
pub use taxonomy::{Condition, ListingCategory};
