use serde::Serialize;

/// Successful extraction response body.
#[derive(Debug, Serialize)]
pub struct ParsedTextResponse {
    #[serde(rename = "parsedText")]
    pub parsed_text: String,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}
