use thiserror::Error;

/// CLI-level error categories mapped to exit codes.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Iss(#[from] issmoex_core::IssError),

    #[error("passport rejected the credentials for '{username}'")]
    AuthenticationFailed { username: String },

    #[error("login needs both --username and --password")]
    MissingCredentials,

    #[error(transparent)]
    Serialization(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl CliError {
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::MissingCredentials => 2,
            Self::Iss(_) => 3,
            Self::Serialization(_) => 4,
            Self::AuthenticationFailed { .. } => 5,
            Self::Io(_) => 10,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use issmoex_core::IssError;

    #[test]
    fn exit_codes_follow_error_category() {
        let missing = CliError::from(IssError::missing_table("history"));
        assert_eq!(missing.exit_code(), 3);

        let rejected = CliError::AuthenticationFailed {
            username: String::from("trader"),
        };
        assert_eq!(rejected.exit_code(), 5);
        assert_eq!(CliError::MissingCredentials.exit_code(), 2);
    }

    #[test]
    fn invalid_path_input_is_an_iss_error() {
        let error = issmoex_core::EndpointRequest::new(issmoex_core::EndpointId::BoardHistory)
            .security("SBER")
            .board("")
            .compile()
            .map_err(CliError::from)
            .expect_err("empty board is rejected");

        assert!(matches!(error, CliError::Iss(_)));
        assert_eq!(error.exit_code(), 3);
    }
}
