//! Server configuration loaded from environment variables.

/// Runtime configuration for the HTTP server.
#[derive(Clone, Debug)]
pub struct ServerConfig {
    /// Port to bind (from PORT, default 8000).
    pub port: u16,
    /// Origins allowed to make credentialed browser requests
    /// (from CLOUDCOST_CORS_ORIGINS, comma-separated).
    pub cors_origins: Vec<String>,
}

impl ServerConfig {
    /// Load configuration from environment variables, falling back to the
    /// defaults for anything unset or unparseable.
    pub fn from_env() -> Self {
        let port = std::env::var("PORT")
            .ok()
            .and_then(|s| s.parse::<u16>().ok())
            .unwrap_or(8000);

        let cors_origins = std::env::var("CLOUDCOST_CORS_ORIGINS")
            .ok()
            .map(|s| s.split(',').map(|s| s.trim().to_string()).collect())
            .unwrap_or_else(Self::default_origins);

        Self { port, cors_origins }
    }

    /// The fixed allow-list used when no override is configured.
    pub fn default_origins() -> Vec<String> {
        vec![
            "https://cloud-cost-frontend.vercel.app".to_string(),
            "http://localhost:3000".to_string(),
        ]
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self::from_env()
    }
}
