use lambda_http::{run, service_fn, Error};
use stuff_backend::{handler, State};

#[tokio::main]
async fn main() -> Result<(), Error> {
    let state = State::init().await;
    run(service_fn(|event| handler::upsert(&state, event))).await
}
