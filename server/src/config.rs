use std::env;

const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub bind_address: String,
    pub client_host: Option<String>,
    /// Cap on the index listing, applied after filtering and ordering.
    pub index_limit: Option<usize>,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            bind_address: DEFAULT_BIND_ADDRESS.to_string(),
            client_host: None,
            index_limit: None,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        AppConfig {
            bind_address: env::var("BIND_ADDRESS")
                .unwrap_or_else(|_| DEFAULT_BIND_ADDRESS.to_string()),
            client_host: env::var("CLIENT_HOST").ok(),
            index_limit: parse_index_limit(env::var("POLLS_INDEX_LIMIT").ok()),
        }
    }
}

fn parse_index_limit(value: Option<String>) -> Option<usize> {
    let value = value?;
    match value.trim().parse::<usize>() {
        Ok(0) => None,
        Ok(limit) => Some(limit),
        Err(err) => {
            warn!("Ignoring POLLS_INDEX_LIMIT={:?} - {}", value, err);
            None
        }
    }
}
