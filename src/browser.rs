use js_sys::Array;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url, Window};

use crate::error::BrowserError;

fn window() -> Result<Window, BrowserError> {
    web_sys::window().ok_or(BrowserError::NoWindow)
}

pub fn download(filename: &str, mime: &str, content: &str) -> Result<(), BrowserError> {
    let parts = Array::new();
    parts.push(&JsValue::from_str(content));

    let props = BlobPropertyBag::new();
    props.set_type(mime);

    let blob = Blob::new_with_str_sequence_and_options(&parts, &props)
        .map_err(BrowserError::download)?;
    let url = Url::create_object_url_with_blob(&blob).map_err(BrowserError::download)?;

    let document = window()?.document().ok_or(BrowserError::NoDocument)?;
    let anchor = document
        .create_element("a")
        .map_err(BrowserError::download)?
        .dyn_into::<HtmlAnchorElement>()
        .map_err(|_| BrowserError::Download("anchor element unavailable".into()))?;
    anchor.set_href(&url);
    anchor.set_download(filename);
    anchor.click();

    Url::revoke_object_url(&url).map_err(BrowserError::download)?;
    log::debug!("downloaded {} ({} bytes)", filename, content.len());
    Ok(())
}

pub fn open_tab(url: &str) -> Result<Window, BrowserError> {
    window()?
        .open_with_url_and_target(url, "_blank")
        .ok()
        .flatten()
        .ok_or_else(|| BrowserError::Popup(url.to_string()))
}

pub fn print_tab(url: &str) -> Result<(), BrowserError> {
    let tab = open_tab(url)?;
    let target = tab.clone();
    let on_load = Closure::once_into_js(move || {
        if let Err(err) = target.print() {
            log::warn!("print failed: {:?}", err);
        }
    });
    tab.set_onload(Some(on_load.unchecked_ref()));
    Ok(())
}
