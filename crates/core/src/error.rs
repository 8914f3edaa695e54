use thiserror::Error;

pub type CampaignResult<T> = Result<T, CampaignError>;

#[derive(Error, Debug)]
pub enum CampaignError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("{0}")]
    Validation(String),

    #[error("AI service is not configured.")]
    AiNotConfigured,

    #[error("AI service error: {0}")]
    AiService(String),

    #[error("AI response error: {0}")]
    AiResponse(String),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl CampaignError {
    /// True when the caller supplied a structurally invalid request.
    pub fn is_client_error(&self) -> bool {
        matches!(self, CampaignError::Validation(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_is_client_error() {
        let err = CampaignError::Validation("goal is required".to_string());
        assert!(err.is_client_error());
        assert_eq!(err.to_string(), "goal is required");
    }

    #[test]
    fn test_internal_is_not_client_error() {
        let err = CampaignError::Internal(anyhow::anyhow!("boom"));
        assert!(!err.is_client_error());
        assert!(CampaignError::AiNotConfigured
            .to_string()
            .contains("not configured"));
    }

    #[test]
    fn test_upstream_failures_are_server_errors() {
        for err in [
            CampaignError::Config("HTTP client: bad TLS".to_string()),
            CampaignError::AiService("timeout".to_string()),
            CampaignError::AiResponse("not JSON".to_string()),
        ] {
            assert!(!err.is_client_error());
        }
        assert_eq!(
            CampaignError::AiService("timeout".to_string()).to_string(),
            "AI service error: timeout"
        );
    }
}
