//! JSON response bodies.

use std::any::Any;

use axum::body::Bytes;
use serde::Serialize;

/// Encode `value` as a JSON response body.
///
/// Strings (`String`, `&'static str`) and byte buffers (`Vec<u8>`,
/// `&'static [u8]`) are taken as already-encoded documents and used
/// verbatim. Every other type goes through `serde_json`.
pub fn encode_body<T: Serialize + 'static>(value: T) -> Result<Bytes, serde_json::Error> {
    let any = &value as &dyn Any;
    if let Some(raw) = any.downcast_ref::<String>() {
        return Ok(Bytes::from(raw.clone()));
    }
    if let Some(raw) = any.downcast_ref::<&'static str>() {
        return Ok(Bytes::from_static(raw.as_bytes()));
    }
    if let Some(raw) = any.downcast_ref::<Vec<u8>>() {
        return Ok(Bytes::from(raw.clone()));
    }
    if let Some(raw) = any.downcast_ref::<&'static [u8]>() {
        return Ok(Bytes::from_static(raw));
    }
    Ok(Bytes::from(serde_json::to_vec(&value)?))
}
