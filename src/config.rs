/// Placeholder substituted when no client id was provided at build time.
/// Sign-in then fails at the provider, not locally.
const PLACEHOLDER_CLIENT_ID: &str = "YOUR_CLIENT_ID_HERE";

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Application identifier passed to the identity provider
    pub google_client_id: String,
}

impl Config {
    /// Load configuration baked in at compile time.
    ///
    /// `GOOGLE_CLIENT_ID` is read from the build environment via
    /// `option_env!`; browser WASM has no process environment to consult at
    /// runtime.
    pub fn load() -> Self {
        let google_client_id = option_env!("GOOGLE_CLIENT_ID")
            .filter(|value| !value.is_empty())
            .unwrap_or(PLACEHOLDER_CLIENT_ID)
            .to_string();

        Config { google_client_id }
    }

    /// True when a real client id was supplied at build time.
    pub fn has_client_id(&self) -> bool {
        self.google_client_id != PLACEHOLDER_CLIENT_ID
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_always_yields_a_client_id() {
        let config = Config::load();
        assert!(!config.google_client_id.is_empty());
    }

    #[test]
    fn test_placeholder_is_not_a_real_client_id() {
        let config = Config {
            google_client_id: PLACEHOLDER_CLIENT_ID.to_string(),
        };
        assert!(!config.has_client_id());

        let config = Config {
            google_client_id: "1234.apps.googleusercontent.com".to_string(),
        };
        assert!(config.has_client_id());
    }
}
