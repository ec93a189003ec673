//! Reading dropped or picked image files into data URLs.

use stockmanager::image::to_data_url;
use wasm_bindgen_futures::JsFuture;

/// Read `file` fully and encode it as a `data:` URL. `None` when the browser
/// refuses to read it.
pub async fn read_data_url(file: web_sys::File) -> Option<String> {
    let buffer = match JsFuture::from(file.array_buffer()).await {
        Ok(buffer) => buffer,
        Err(e) => {
            log::warn!("failed to read {}: {e:?}", file.name());
            return None;
        }
    };
    let bytes = js_sys::Uint8Array::new(&buffer).to_vec();
    Some(to_data_url(&file.type_(), &bytes))
}

/// First file of a `FileList`, if any.
pub fn first_file(files: Option<web_sys::FileList>) -> Option<web_sys::File> {
    files.and_then(|list| list.get(0))
}
