/// Application configuration module
use std::env;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub port: u16,
    pub spacex_graphql_url: String,
    pub default_limit: u32,
    pub upcoming_supports_offset: bool,
}

impl AppConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let port = env_parse("PORT", 3000);

        let spacex_graphql_url = env::var("SPACEX_GRAPHQL_URL").unwrap_or_else(|_| {
            "https://main--spacex-l4uc6p.apollographos.net/graphql".to_string()
        });

        let default_limit = env_parse("DEFAULT_LIMIT", 5);

        // Some upstream deployments reject an offset variable on the
        // upcoming query, so support is opt-in.
        let upcoming_supports_offset = env::var("UPCOMING_SUPPORTS_OFFSET")
            .map(|s| s == "1" || s.eq_ignore_ascii_case("true"))
            .unwrap_or(false);

        Ok(Self {
            port,
            spacex_graphql_url,
            default_limit,
            upcoming_supports_offset,
        })
    }
}

fn env_parse<T: std::str::FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(default)
}
