use serde::Serialize;

pub mod contact;

/// Body of every generic failure response. The original cause is logged, never
/// serialized.
#[derive(Debug, Serialize)]
pub struct ApiError {
    pub error: &'static str,
}
