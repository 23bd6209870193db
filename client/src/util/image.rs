//! Client-side image attachment: file bytes to a `data:` URL.
//!
//! SYSTEM CONTEXT
//! ==============
//! Animal and horseshoe forms preview a picked image without uploading it.
//! The encoded URL is stored directly on the record.

#[cfg(test)]
#[path = "image_test.rs"]
mod image_test;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;

/// MIME filter handed to the file picker.
pub const IMAGE_ACCEPT: &str = "image/*";

const FALLBACK_MIME: &str = "application/octet-stream";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ImageError {
    #[error("No se pudo leer la imagen seleccionada")]
    Read,
}

/// Encode raw bytes as `data:<mime>;base64,<payload>`.
pub fn data_url(mime: &str, bytes: &[u8]) -> String {
    let mime = mime.trim();
    let mime = if mime.is_empty() { FALLBACK_MIME } else { mime };
    format!("data:{mime};base64,{}", STANDARD.encode(bytes))
}

/// Read a picked browser file into a data URL.
///
/// # Errors
///
/// Returns [`ImageError::Read`] if the browser fails to produce the file contents.
#[cfg(feature = "hydrate")]
pub async fn read_file(file: web_sys::File) -> Result<String, ImageError> {
    let buffer = wasm_bindgen_futures::JsFuture::from(file.array_buffer())
        .await
        .map_err(|_| ImageError::Read)?;
    let bytes = js_sys::Uint8Array::new(&buffer).to_vec();
    Ok(data_url(&file.type_(), &bytes))
}

/// Pull the first file out of an `<input type="file">` change event.
#[cfg(feature = "hydrate")]
pub fn first_file(ev: &leptos::ev::Event) -> Option<web_sys::File> {
    use wasm_bindgen::JsCast;

    let input = ev.target()?.dyn_into::<web_sys::HtmlInputElement>().ok()?;
    input.files()?.get(0)
}
