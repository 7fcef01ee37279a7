use serde::Serialize;

pub const SERVICE_NAME: &str = "etl-preprocessing";
pub const NO_JSON_DATA: &str = "No JSON data provided";
pub const METHOD_NOT_ALLOWED: &str = "Method not allowed";

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
    pub version: &'static str,
}

impl Default for HealthResponse {
    fn default() -> Self {
        Self {
            status: "ok",
            service: SERVICE_NAME,
            version: env!("CARGO_PKG_VERSION"),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct SuccessResponse<T: Serialize> {
    pub success: bool,
    pub data: TimedResult<T>,
}

/// A pipeline result with the handler's processing time appended
#[derive(Debug, Serialize)]
pub struct TimedResult<T: Serialize> {
    #[serde(flatten)]
    pub result: T,
    #[serde(rename = "processingTimeMs")]
    pub processing_time_ms: f64,
}

#[derive(Debug, Serialize)]
pub struct FailureResponse {
    pub success: bool,
    pub error: String,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl<T: Serialize> SuccessResponse<T> {
    pub fn new(result: T, processing_time_ms: f64) -> Self {
        Self {
            success: true,
            data: TimedResult {
                result,
                processing_time_ms,
            },
        }
    }
}

impl FailureResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: error.into(),
        }
    }
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}
