//! Forge backend trait definition.

use crate::forge::errors::ForgeError;

/// Interface to a code-hosting forge for the two operations the tracker
/// needs: acquiring a credential and the one-time log-repository bootstrap.
///
/// Both results are cached in persisted state by the caller, so each backend
/// method runs at most a handful of times per installation.
pub trait ForgeBackend: Send + Sync {
    /// The canonical name of this forge (e.g., "github").
    fn name(&self) -> &'static str;

    /// The user-facing display name (e.g., "GitHub").
    fn display_name(&self) -> &'static str;

    /// Whether this forge's CLI tooling is available on the system.
    fn is_available(&self) -> bool;

    /// Acquire a bearer credential usable for repository creation and
    /// authenticated push URLs.
    fn auth_token(&self) -> Result<String, ForgeError>;

    /// Create a remote repository and return its clone URL.
    fn create_repository(
        &self,
        token: &str,
        name: &str,
        description: &str,
        private: bool,
    ) -> Result<String, ForgeError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    struct MockForge;

    impl ForgeBackend for MockForge {
        fn name(&self) -> &'static str {
            "mock"
        }

        fn display_name(&self) -> &'static str {
            "Mock Forge"
        }

        fn is_available(&self) -> bool {
            true
        }

        fn auth_token(&self) -> Result<String, ForgeError> {
            Ok("mock-token".to_string())
        }

        fn create_repository(
            &self,
            _token: &str,
            name: &str,
            _description: &str,
            _private: bool,
        ) -> Result<String, ForgeError> {
            Ok(format!("https://example.com/user/{}.git", name))
        }
    }

    #[test]
    fn test_forge_backend_basic_methods() {
        let backend = MockForge;
        assert_eq!(backend.name(), "mock");
        assert_eq!(backend.display_name(), "Mock Forge");
        assert!(backend.is_available());
    }

    #[test]
    fn test_forge_backend_bootstrap_flow() {
        let backend = MockForge;
        let token = backend.auth_token().unwrap();
        let url = backend
            .create_repository(&token, "activity-log", "Daily log", true)
            .unwrap();
        assert_eq!(url, "https://example.com/user/activity-log.git");
    }
}
