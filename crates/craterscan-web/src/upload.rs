//! Browser file reading
//!
//! Collapses the FileReader callback dance into a single await point:
//! the caller either gets the file's bytes or a [`DecodeError`].

use craterscan_core::error::DecodeError;
use craterscan_core::models::SourceImage;
use js_sys::Uint8Array;
use wasm_bindgen_futures::JsFuture;
use web_sys::File;

use crate::state::MAX_UPLOAD_BYTES;

/// Read a picked file into a [`SourceImage`], enforcing the size ceiling.
pub async fn read_source_image(file: &File) -> Result<SourceImage, DecodeError> {
    let size = file.size() as u64;
    if size > MAX_UPLOAD_BYTES {
        return Err(DecodeError(format!(
            "{} is {:.1} MB; the limit is 50 MB",
            file.name(),
            size as f64 / 1024.0 / 1024.0
        )));
    }

    let buffer = JsFuture::from(file.array_buffer())
        .await
        .map_err(|_| DecodeError(format!("Could not read {}", file.name())))?;
    let bytes = Uint8Array::new(&buffer).to_vec();

    Ok(SourceImage {
        bytes,
        media_type: file.type_(),
        filename: file.name(),
    })
}
