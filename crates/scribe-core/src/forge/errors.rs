#[derive(Debug, thiserror::Error)]
pub enum ForgeError {
    #[error("Forge CLI not available: {tool}")]
    CliUnavailable { tool: String },

    #[error("Authentication failed: {message}")]
    AuthFailed { message: String },

    #[error("Repository creation failed: {message}")]
    CreateFailed { message: String },

    #[error("IO error during forge operation: {source}")]
    IoError {
        #[from]
        source: std::io::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_forge_error_display() {
        let error = ForgeError::CliUnavailable {
            tool: "gh".to_string(),
        };
        assert_eq!(error.to_string(), "Forge CLI not available: gh");

        let error = ForgeError::AuthFailed {
            message: "no token".to_string(),
        };
        assert_eq!(error.to_string(), "Authentication failed: no token");
    }
}
