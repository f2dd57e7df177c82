#![cfg(target_arch = "wasm32")]

use js_sys::Array;
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;
use web_sys::File;

use marketplace_storefront::frontend::file_reader::{collect_files, read_as_data_url, read_image};

wasm_bindgen_test_configure!(run_in_browser);

fn text_file(body: &str, name: &str) -> File {
    File::new_with_str_sequence(&Array::of1(&JsValue::from_str(body)), name).unwrap()
}

#[wasm_bindgen_test]
async fn reads_a_file_as_data_url() {
    let url = read_as_data_url(&text_file("hi", "a.txt")).await.unwrap();
    assert!(url.starts_with("data:"));
    assert!(url.ends_with("base64,aGk="));
}

#[wasm_bindgen_test]
async fn sequential_reads_each_settle() {
    // Each read owns and releases its own callbacks.
    for body in ["one", "two", "three"] {
        let image = read_image(text_file(body, "x.txt")).await.unwrap();
        assert!(image.as_str().starts_with("data:"));
    }
}

#[wasm_bindgen_test]
fn no_file_list_yields_nothing() {
    assert!(collect_files(None).is_empty());
}
