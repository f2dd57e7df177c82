//! Decoded image previews held by a draft.

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ImageError {
    #[error("not a data URL")]
    NotDataUrl,

    #[error("file could not be read: {0}")]
    Read(String),
}

/// An image held in memory as a `data:` URL, ready to use as `<img src>`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EncodedImage(String);

impl EncodedImage {
    /// Wrap a `data:[<mime>][;base64],<payload>` string.
    pub fn from_data_url(url: impl Into<String>) -> Result<Self, ImageError> {
        let url = url.into();
        match url.strip_prefix("data:") {
            Some(rest) if rest.contains(',') => Ok(Self(url)),
            _ => Err(ImageError::NotDataUrl),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Media type from the header, e.g. `image/png`. `None` when omitted.
    pub fn mime_type(&self) -> Option<&str> {
        let header = self.header();
        let mime = header.split(';').next().unwrap_or_default();
        (!mime.is_empty()).then_some(mime)
    }

    /// Length of the encoded payload after the comma.
    pub fn payload_len(&self) -> usize {
        self.0.split_once(',').map_or(0, |(_, payload)| payload.len())
    }

    fn header(&self) -> &str {
        self.0
            .strip_prefix("data:")
            .and_then(|rest| rest.split_once(','))
            .map_or("", |(header, _)| header)
    }
}

/// Ordered preview list. Indices are display positions.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ImageList {
    images: Vec<EncodedImage>,
}

impl ImageList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append at the end; returns the new index.
    pub fn push(&mut self, image: EncodedImage) -> usize {
        self.images.push(image);
        self.images.len() - 1
    }

    /// Remove by index. Out-of-range indices leave the list untouched.
    pub fn remove(&mut self, index: usize) -> Option<EncodedImage> {
        (index < self.images.len()).then(|| self.images.remove(index))
    }

    pub fn get(&self, index: usize) -> Option<&EncodedImage> {
        self.images.get(index)
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &EncodedImage> {
        self.images.iter()
    }

    pub fn as_slice(&self) -> &[EncodedImage] {
        &self.images
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn png(tag: &str) -> EncodedImage {
        EncodedImage::from_data_url(format!("data:image/png;base64,{tag}")).unwrap()
    }

    #[test]
    fn data_url_header_is_parsed() {
        let img = png("iVBORw0KGgo=");
        assert_eq!(img.mime_type(), Some("image/png"));
        assert_eq!(img.payload_len(), 12);

        let bare = EncodedImage::from_data_url("data:,hello").unwrap();
        assert_eq!(bare.mime_type(), None);
    }

    #[test]
    fn non_data_urls_are_rejected() {
        assert_eq!(
            EncodedImage::from_data_url("https://example.com/a.png"),
            Err(ImageError::NotDataUrl)
        );
        assert_eq!(EncodedImage::from_data_url("data:image/png"), Err(ImageError::NotDataUrl));
    }

    #[test]
    fn remove_by_index_keeps_remaining_order() {
        let mut list = ImageList::new();
        for tag in ["a", "b", "c", "d"] {
            list.push(png(tag));
        }
        let removed = list.remove(1).unwrap();
        assert_eq!(removed, png("b"));
        let left: Vec<&EncodedImage> = list.iter().collect();
        assert_eq!(left, vec![&png("a"), &png("c"), &png("d")]);
    }

    #[test]
    fn out_of_range_remove_is_a_noop() {
        let mut list = ImageList::new();
        list.push(png("a"));
        assert_eq!(list.remove(5), None);
        assert_eq!(list.len(), 1);
    }

    #[cfg(test)]
    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 300,
                ..ProptestConfig::default()
            })]

            /// Property: push then remove of the pushed index restores the list.
            #[test]
            fn push_then_remove_restores_list(existing in proptest::collection::vec("[a-z]{1,4}", 0..8)) {
                let mut list = ImageList::new();
                for tag in &existing {
                    list.push(png(tag));
                }
                let before = list.clone();

                let index = list.push(png("extra"));
                prop_assert_eq!(list.len(), before.len() + 1);
                list.remove(index);

                prop_assert_eq!(list, before);
            }
        }
    }
}
