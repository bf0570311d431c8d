use serde_json::Value;

/// Why an exchange did not produce a usable response.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ProbeError {
    #[error("request failed: {0}")]
    Transport(String),
    #[error("response body is not valid JSON: {0}")]
    Parse(String),
}

#[derive(Clone, Debug, PartialEq)]
pub enum ResponseBody {
    Json(Value),
    /// Raw body text that could not be parsed as JSON.
    Text(String),
}

/// How a failed probe went wrong.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Failure {
    Transport,
    UnexpectedStatus(u16),
    Parse,
}

/// The outcome of one HTTP exchange with the service under test.
#[derive(Clone, Debug, PartialEq)]
pub struct ProbeResult {
    status_code: Option<u16>,
    body: Option<ResponseBody>,
    error: Option<ProbeError>,
}

impl ProbeResult {
    pub fn transport_failure(description: impl Into<String>) -> Self {
        Self {
            status_code: None,
            body: None,
            error: Some(ProbeError::Transport(description.into())),
        }
    }

    /// Fails the probe when the body is not JSON, whatever the status.
    pub fn with_json_body(status_code: u16, raw: String) -> Self {
        match serde_json::from_str(&raw) {
            Ok(value) => Self {
                status_code: Some(status_code),
                body: Some(ResponseBody::Json(value)),
                error: None,
            },
            Err(e) => Self {
                status_code: Some(status_code),
                body: Some(ResponseBody::Text(raw)),
                error: Some(ProbeError::Parse(e.to_string())),
            },
        }
    }

    pub fn status_code(&self) -> Option<u16> {
        self.status_code
    }

    pub fn body(&self) -> Option<&ResponseBody> {
        self.body.as_ref()
    }

    pub fn json(&self) -> Option<&Value> {
        match &self.body {
            Some(ResponseBody::Json(value)) => Some(value),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&ProbeError> {
        self.error.as_ref()
    }

    pub fn succeeded(&self) -> bool {
        self.status_code == Some(200) && self.error.is_none()
    }

    pub fn failure(&self) -> Option<Failure> {
        match (&self.error, self.status_code) {
            (Some(ProbeError::Transport(_)), _) => Some(Failure::Transport),
            (Some(ProbeError::Parse(_)), _) => Some(Failure::Parse),
            (None, Some(200)) => None,
            (None, Some(status)) => Some(Failure::UnexpectedStatus(status)),
            (None, None) => Some(Failure::Transport),
        }
    }
}
