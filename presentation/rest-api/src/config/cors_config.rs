use poem::middleware::Cors;
use std::env;

/// Initialize CORS middleware for cross-origin requests
///
/// Environment variables:
/// - CORS_ALLOWED_ORIGINS: Comma-separated list of allowed origins.
///   When unset, any origin is allowed so browser frontends can call the
///   API without extra setup.
///
/// Configuration:
/// - Methods: GET, POST, OPTIONS
/// - Headers: content-type
/// - Credentials: Enabled
///
pub fn init_cors() -> Cors {
    let cors = Cors::new()
        .allow_methods(vec!["GET", "POST", "OPTIONS"])
        .allow_headers(vec!["content-type"])
        .allow_credentials(true);

    match env::var("CORS_ALLOWED_ORIGINS") {
        Ok(allowed_origins) => {
            let origins: Vec<String> = allowed_origins
                .split(',')
                .map(|origin| origin.trim().to_string())
                .collect();
            cors.allow_origins(origins)
        }
        Err(_) => cors,
    }
}
