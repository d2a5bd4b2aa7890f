use crate::item::{self, ItemData, ItemKeys};
use crate::json::{self, ErrorResponse, SuccessResponse};
use crate::State;
use lambda_http::http::StatusCode;
use lambda_http::{Body, Error, Request, RequestExt, Response};

/// Create an item with a random id (POST)
///
/// Responds with 201 and the request id, or with an error envelope.
pub async fn create(state: &State, event: Request) -> Result<Response<Body>, Error> {
    tracing::debug!(method = %event.method(), path = event.uri().path(), "Received event");

    let data = match json::body(&event) {
        Ok(data) => data,
        Err(e) => return bad_request(&format!("{e:#}")),
    };

    put(state, &event, item::create_keys(None), &data, false).await
}

/// Create or replace the item with the id from the path (PUT)
///
/// The id is validated by the gateway, its absence is still answered with 400.
pub async fn upsert(state: &State, event: Request) -> Result<Response<Body>, Error> {
    tracing::debug!(method = %event.method(), path = event.uri().path(), "Received event");

    let data = match json::body(&event) {
        Ok(data) => data,
        Err(e) => return bad_request(&format!("{e:#}")),
    };

    let keys = match event.path_parameters().first("id") {
        Some(id) => item::get_keys(id),
        None => return bad_request("The id path parameter is missing"),
    };

    put(state, &event, keys, &data, true).await
}

async fn put(
    state: &State,
    event: &Request,
    keys: ItemKeys,
    data: &ItemData,
    upsert: bool,
) -> Result<Response<Body>, Error> {
    match state.writer.put_item(&keys, data, upsert).await {
        Ok(()) => {
            let status = if upsert {
                StatusCode::OK
            } else {
                StatusCode::CREATED
            };

            json::response(
                SuccessResponse {
                    request_id: &request_id(event),
                },
                status,
            )
        }

        Err(error) => {
            tracing::error!(method = %event.method(), path = event.uri().path(), "Operation failed");

            json::response(
                ErrorResponse {
                    error: &error.kind,
                    message: &error.message,
                },
                error.fault.status(),
            )
        }
    }
}

fn bad_request(message: &str) -> Result<Response<Body>, Error> {
    tracing::error!(reason = message, "Rejected request");

    json::response(
        ErrorResponse {
            error: "BadRequest",
            message,
        },
        StatusCode::BAD_REQUEST,
    )
}

/// Id of the Lambda invocation, empty outside of the runtime
fn request_id(event: &Request) -> String {
    event
        .lambda_context_ref()
        .map(|context| context.request_id.clone())
        .unwrap_or_default()
}
