use wasm_bindgen::JsCast;

pub const NOTHING_TO_EXPORT: &str = "No hay datos para exportar";

/// Hands `contents` to the browser as a `text/csv` file download.
pub fn save_csv(filename: &str, contents: &str) -> Result<(), String> {
    let parts = js_sys::Array::new();
    parts.push(&wasm_bindgen::JsValue::from_str(contents));
    let options = web_sys::BlobPropertyBag::new();
    options.set_type("text/csv;charset=utf-8");
    let blob = web_sys::Blob::new_with_str_sequence_and_options(&parts, &options)
        .map_err(|_| "No se pudo preparar el archivo".to_string())?;

    let url = web_sys::Url::create_object_url_with_blob(&blob)
        .map_err(|_| "No se pudo crear el enlace de descarga".to_string())?;

    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or("No document")?;
    let anchor = document
        .create_element("a")
        .map_err(|_| "No se pudo crear el enlace".to_string())?
        .dyn_into::<web_sys::HtmlAnchorElement>()
        .map_err(|_| "No se pudo crear el enlace".to_string())?;
    anchor.set_href(&url);
    anchor.set_download(filename);
    anchor.style().set_property("display", "none").ok();
    let body = document.body().ok_or("No body")?;
    body.append_child(&anchor)
        .map_err(|_| "No se pudo iniciar la descarga".to_string())?;
    anchor.click();
    anchor.remove();
    let _ = web_sys::Url::revoke_object_url(&url);
    Ok(())
}
