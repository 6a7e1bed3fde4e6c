use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct Message {
    pub message: String,
}

impl Message {
    pub fn new(message: &str) -> Self {
        Self {
            message: message.to_string(),
        }
    }
}

/// Body of every failed request
#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct ErrorMessage {
    #[schema(example = "Account not found")]
    pub error: String,
}

impl ErrorMessage {
    pub fn new(error: &str) -> Self {
        Self {
            error: error.to_string(),
        }
    }
}
