use poem::middleware::Cors;
use std::env;

const DEFAULT_ORIGINS: &str = "http://localhost:8081,http://localhost:19006";

/// Initialize CORS middleware for the mobile client and its web preview
///
/// Environment variables:
/// - CORS_ALLOWED_ORIGINS: Comma-separated list of allowed origins
///   (default: "http://localhost:8081,http://localhost:19006")
///
/// Configuration:
/// - Methods: GET, POST, DELETE, OPTIONS
/// - Headers: content-type
pub fn init_cors() -> Cors {
    let allowed_origins =
        env::var("CORS_ALLOWED_ORIGINS").unwrap_or_else(|_| DEFAULT_ORIGINS.to_string());

    Cors::new()
        .allow_origins(parse_origins(&allowed_origins))
        .allow_methods(vec!["GET", "POST", "DELETE", "OPTIONS"])
        .allow_headers(vec!["content-type"])
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_split_and_trim_origins() {
        let origins = parse_origins(" http://a.test , http://b.test,,");

        assert_eq!(origins, vec!["http://a.test", "http://b.test"]);
    }

    #[test]
    fn should_parse_default_origins() {
        assert_eq!(parse_origins(DEFAULT_ORIGINS).len(), 2);
    }
}
