use crate::item::ItemData;
use eyre::{Context, ContextCompat};
use lambda_http::http::StatusCode;
use lambda_http::{Body, Error, Request, Response};
use serde::Serialize;

/// Parse request body as a JSON object, an absent body is an empty object
pub fn body(event: &Request) -> eyre::Result<ItemData> {
    let raw: &[u8] = event.body().as_ref();

    if raw.iter().all(u8::is_ascii_whitespace) {
        return Ok(ItemData::new());
    }

    serde_json::from_slice::<serde_json::Value>(raw)
        .wrap_err("Failed to parse request body as JSON")?
        .as_object()
        .cloned()
        .wrap_err("Request body is not a JSON object")
}

pub fn response<T: Serialize>(body: T, status: StatusCode) -> Result<Response<Body>, Error> {
    Ok(Response::builder()
        .status(status)
        .header("content-type", "application/json")
        .body(serde_json::to_string(&body)?.into())?)
}

#[derive(Debug, Serialize)]
pub struct SuccessResponse<'a> {
    pub request_id: &'a str,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse<'a> {
    pub error: &'a str,
    pub message: &'a str,
}
