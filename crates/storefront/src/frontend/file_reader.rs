//! `FileReader` bridged to a future.

use thiserror::Error;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{File, FileList, FileReader, ProgressEvent};

use marketplace_listing::{EncodedImage, ImageError};

#[derive(Debug, Error)]
pub enum FileReadError {
    #[error("FileReader failed: {0}")]
    Js(String),

    #[error("FileReader produced no text result")]
    NoResult,
}

impl From<FileReadError> for ImageError {
    fn from(value: FileReadError) -> Self {
        ImageError::Read(value.to_string())
    }
}

fn js_error(value: JsValue) -> FileReadError {
    FileReadError::Js(format!("{value:?}"))
}

/// Handles from a picker or a drop, in selection order.
pub fn collect_files(list: Option<FileList>) -> Vec<File> {
    let Some(list) = list else {
        return Vec::new();
    };
    (0..list.length()).filter_map(|i| list.get(i)).collect()
}

/// Read `file` as a `data:` URL.
///
/// Both reader callbacks live in this future and are detached from the
/// reader before they drop, whichever way the read ends.
pub async fn read_as_data_url(file: &File) -> Result<String, FileReadError> {
    let reader = FileReader::new().map_err(js_error)?;

    let mut settle = None;
    let promise = js_sys::Promise::new(&mut |resolve, reject| settle = Some((resolve, reject)));
    let (resolve, reject) = settle.ok_or_else(|| FileReadError::Js("promise executor did not run".to_string()))?;

    let on_load = {
        let reader = reader.clone();
        Closure::<dyn FnMut(ProgressEvent)>::new(move |_event: ProgressEvent| {
            let result = reader.result().unwrap_or(JsValue::NULL);
            let _ = resolve.call1(&JsValue::UNDEFINED, &result);
        })
    };
    let on_error = {
        let reader = reader.clone();
        Closure::<dyn FnMut(ProgressEvent)>::new(move |_event: ProgressEvent| {
            let error = reader.error().map(JsValue::from).unwrap_or(JsValue::NULL);
            let _ = reject.call1(&JsValue::UNDEFINED, &error);
        })
    };
    reader.set_onload(Some(on_load.as_ref().unchecked_ref()));
    reader.set_onerror(Some(on_error.as_ref().unchecked_ref()));

    let outcome = match reader.read_as_data_url(file) {
        Ok(()) => JsFuture::from(promise).await.map_err(js_error),
        Err(e) => Err(js_error(e)),
    };

    reader.set_onload(None);
    reader.set_onerror(None);
    drop(on_load);
    drop(on_error);

    outcome?.as_string().ok_or(FileReadError::NoResult)
}

/// Read and wrap as a preview image.
pub async fn read_image(file: File) -> Result<EncodedImage, ImageError> {
    let url = read_as_data_url(&file).await?;
    EncodedImage::from_data_url(url)
}
