use serde::{Deserialize, Serialize};

/// Uniform body of every API response.
#[derive(Debug, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> Envelope<T> {
    pub fn ok(data: T) -> Self {
        Envelope {
            success: true,
            data: Some(data),
            error: None,
        }
    }
}

impl Envelope<()> {
    pub fn done() -> Self {
        Envelope {
            success: true,
            data: None,
            error: None,
        }
    }

    pub fn failed(error: impl Into<String>) -> Self {
        Envelope {
            success: false,
            data: None,
            error: Some(error.into()),
        }
    }
}
