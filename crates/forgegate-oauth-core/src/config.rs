//! Broker configuration

/// OAuth broker configuration
///
/// Injected at construction time so tests run with fixed URLs instead
/// of ambient process state.
#[derive(Debug, Clone)]
pub struct BrokerConfig {
    /// Frontend origin the provider redirects back to, e.g. `http://localhost`
    pub frontend_host: String,
    /// Frontend port
    pub frontend_port: u16,
}

impl BrokerConfig {
    /// Create a new broker config
    pub fn new(frontend_host: impl Into<String>, frontend_port: u16) -> Self {
        Self {
            frontend_host: frontend_host.into(),
            frontend_port,
        }
    }

    /// Callback URL registered with every provider application
    pub fn redirect_url(&self) -> String {
        format!("{}:{}/oauth/callback", self.frontend_host, self.frontend_port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_redirect_url() {
        let config = BrokerConfig::new("http://localhost", 3000);
        assert_eq!(config.redirect_url(), "http://localhost:3000/oauth/callback");
    }
}
