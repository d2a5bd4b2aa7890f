use aws_sdk_dynamodb::error::{ProvideErrorMetadata, SdkError};
use aws_sdk_dynamodb::operation::put_item::PutItemError;
use lambda_http::http::StatusCode;
use std::fmt::Display;

/// Name of the error DynamoDB returns when a create hits an existing key
pub const CONFLICT: &str = "ConditionalCheckFailedException";

/// Capacity errors, returned with a 4xx status but caused by the service
const THROTTLING: [&str; 3] = [
    "ProvisionedThroughputExceededException",
    "ThrottlingException",
    "RequestLimitExceeded",
];

/// Who is to blame for a failed write
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fault {
    /// The request was invalid, including an attempt to create an existing item
    Client,
    /// The backend failed on its own
    Server,
    /// Failure without an origin, e.g. a network error before any response
    Unknown,
}

impl Fault {
    pub fn status(&self) -> StatusCode {
        match self {
            Fault::Client => StatusCode::BAD_REQUEST,
            Fault::Server | Fault::Unknown => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl Display for Fault {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Fault::Client => write!(f, "client"),
            Fault::Server => write!(f, "server"),
            Fault::Unknown => write!(f, "unknown"),
        }
    }
}

/// Failed write to the table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriteError {
    /// Machine readable error name
    pub kind: String,
    pub message: String,
    pub fault: Fault,
}

impl WriteError {
    pub fn new(kind: &str, message: &str, fault: Fault) -> Self {
        Self {
            kind: kind.to_string(),
            message: message.to_string(),
            fault,
        }
    }

    /// An item with the same key already exists
    #[cfg(test)]
    pub(crate) fn conflict() -> Self {
        Self::new(CONFLICT, "The conditional request failed", Fault::Client)
    }

    pub fn is_conflict(&self) -> bool {
        self.kind == CONFLICT
    }
}

impl Display for WriteError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {} ({} fault)", self.kind, self.message, self.fault)
    }
}

impl std::error::Error for WriteError {}

impl From<SdkError<PutItemError>> for WriteError {
    fn from(error: SdkError<PutItemError>) -> Self {
        match &error {
            SdkError::ServiceError(context) => {
                let service_error = context.err();
                let kind = service_error.code().unwrap_or_else(|| modeled_code(service_error));

                let fault = if THROTTLING.contains(&kind) {
                    Fault::Server
                } else {
                    match context.raw().status().as_u16() {
                        400..=499 => Fault::Client,
                        500..=599 => Fault::Server,
                        _ => match service_error {
                            PutItemError::ConditionalCheckFailedException(_) => Fault::Client,
                            PutItemError::InternalServerError(_) => Fault::Server,
                            _ => Fault::Unknown,
                        },
                    }
                };

                Self::new(
                    kind,
                    service_error
                        .message()
                        .unwrap_or("The service returned an error"),
                    fault,
                )
            }

            SdkError::ConstructionFailure(_) => {
                Self::new("ConstructionFailure", &error_chain(&error), Fault::Unknown)
            }

            SdkError::TimeoutError(_) => {
                Self::new("TimeoutError", &error_chain(&error), Fault::Unknown)
            }

            SdkError::DispatchFailure(_) => {
                Self::new("DispatchFailure", &error_chain(&error), Fault::Unknown)
            }

            SdkError::ResponseError(_) => {
                Self::new("ResponseError", &error_chain(&error), Fault::Unknown)
            }

            _ => Self::new("UnknownError", &error_chain(&error), Fault::Unknown),
        }
    }
}

/// Name of a modeled error which came without metadata
fn modeled_code(error: &PutItemError) -> &'static str {
    match error {
        PutItemError::ConditionalCheckFailedException(_) => CONFLICT,
        PutItemError::InternalServerError(_) => "InternalServerError",
        PutItemError::ProvisionedThroughputExceededException(_) => {
            "ProvisionedThroughputExceededException"
        }
        PutItemError::RequestLimitExceeded(_) => "RequestLimitExceeded",
        PutItemError::ResourceNotFoundException(_) => "ResourceNotFoundException",
        _ => "ServiceError",
    }
}

/// Message of the error followed by the messages of its sources
fn error_chain(error: &dyn std::error::Error) -> String {
    let mut message = error.to_string();
    let mut source = error.source();

    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }

    message
}
