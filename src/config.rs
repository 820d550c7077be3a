use std::{env, net::SocketAddr};

pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_RECOMMEND_URL: &str = "https://seproject-t9fv.onrender.com";
pub const DEFAULT_AUTH_URL: &str = "https://backendofse.onrender.com";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub port: u16,
    /// Base URL of the service behind `/recommend` and `/download-pdf`.
    pub recommend_url: String,
    /// Base URL of the service behind `/login` and `/signup`.
    pub auth_url: String,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let port = lookup("PORT")
            .and_then(|value| value.parse::<u16>().ok())
            .unwrap_or(DEFAULT_PORT);
        let recommend_url = lookup("SCHEMELY_RECOMMEND_URL")
            .map(|value| trim_base(&value))
            .unwrap_or_else(|| DEFAULT_RECOMMEND_URL.to_string());
        let auth_url = lookup("SCHEMELY_AUTH_URL")
            .map(|value| trim_base(&value))
            .unwrap_or_else(|| DEFAULT_AUTH_URL.to_string());

        Self {
            port,
            recommend_url,
            auth_url,
        }
    }

    pub fn addr(&self) -> SocketAddr {
        SocketAddr::from(([0, 0, 0, 0], self.port))
    }
}

fn trim_base(value: &str) -> String {
    value.trim().trim_end_matches('/').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn defaults_when_unset() {
        let config = Config::from_lookup(|_| None);
        assert_eq!(config.port, DEFAULT_PORT);
        assert_eq!(config.recommend_url, DEFAULT_RECOMMEND_URL);
        assert_eq!(config.auth_url, DEFAULT_AUTH_URL);
    }

    #[test]
    fn overrides_trim_trailing_slash_and_bad_port_falls_back() {
        let vars: HashMap<&str, &str> = HashMap::from([
            ("PORT", "not-a-port"),
            ("SCHEMELY_RECOMMEND_URL", "http://127.0.0.1:9000/"),
            ("SCHEMELY_AUTH_URL", "http://auth.local//"),
        ]);
        let config = Config::from_lookup(|key| vars.get(key).map(|v| v.to_string()));
        assert_eq!(config.port, DEFAULT_PORT);
        assert_eq!(config.recommend_url, "http://127.0.0.1:9000");
        assert_eq!(config.auth_url, "http://auth.local");
    }
}
