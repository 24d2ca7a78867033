use crate::error::{Error, Result};
use dotenvy::dotenv;
use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    pub server_address: String,
    pub database_url: String,
    pub database_max_connections: u32,
    pub public_rps: u32,
    pub api_rps: u32,
    pub log_format: LogFormat,
    pub cors_origins: Vec<String>,
    pub static_dir: String,
    pub auth: AuthConfig,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Pretty,
    Json,
}

/// How bearer tokens issued by the identity provider are verified.
#[derive(Debug, Clone)]
pub enum AuthConfig {
    SharedSecret {
        secret: String,
        issuer: Option<String>,
        audience: Option<String>,
    },
    Jwks {
        jwks_url: String,
        issuer: String,
        audience: Option<String>,
    },
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenv().ok();

        Ok(Self {
            server_address: get_env("SERVER_ADDRESS")?,
            database_url: get_env("DATABASE_URL")?,
            database_max_connections: get_env_parse_or("DATABASE_MAX_CONNECTIONS", 10)?,
            public_rps: get_env_parse_or("PUBLIC_RPS", 50)?,
            api_rps: get_env_parse_or("API_RPS", 20)?,
            log_format: parse_log_format(env::var("LOG_FORMAT").ok().as_deref())?,
            cors_origins: parse_list(env::var("CORS_ORIGINS").ok().as_deref()),
            static_dir: env::var("STATIC_DIR").unwrap_or_else(|_| "./static".to_string()),
            auth: auth_from_env()?,
        })
    }
}

fn auth_from_env() -> Result<AuthConfig> {
    let issuer = get_env_opt("AUTH0_ISSUER");
    let audience = get_env_opt("AUTH0_AUDIENCE");

    if let Some(jwks_url) = get_env_opt("AUTH0_JWKS_URL") {
        let issuer = issuer.ok_or_else(|| {
            Error::Config("AUTH0_ISSUER is required when AUTH0_JWKS_URL is set".to_string())
        })?;
        return Ok(AuthConfig::Jwks {
            jwks_url,
            issuer,
            audience,
        });
    }

    match get_env_opt("AUTH_JWT_SECRET") {
        Some(secret) => Ok(AuthConfig::SharedSecret {
            secret,
            issuer,
            audience,
        }),
        None => Err(Error::Config(
            "Either AUTH0_JWKS_URL or AUTH_JWT_SECRET must be set".to_string(),
        )),
    }
}

fn parse_log_format(raw: Option<&str>) -> Result<LogFormat> {
    match raw.map(str::trim) {
        None | Some("") => Ok(LogFormat::Pretty),
        Some(v) if v.eq_ignore_ascii_case("pretty") => Ok(LogFormat::Pretty),
        Some(v) if v.eq_ignore_ascii_case("json") => Ok(LogFormat::Json),
        Some(other) => Err(Error::Config(format!(
            "Invalid value for LOG_FORMAT: {}",
            other
        ))),
    }
}

fn parse_list(raw: Option<&str>) -> Vec<String> {
    raw.unwrap_or_default()
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

fn get_env(name: &str) -> Result<String> {
    env::var(name).map_err(|_| Error::Config(format!("Missing environment variable: {}", name)))
}

fn get_env_opt(name: &str) -> Option<String> {
    env::var(name).ok().filter(|v| !v.trim().is_empty())
}

fn get_env_parse_or<T>(name: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match get_env_opt(name) {
        Some(raw) => raw
            .parse()
            .map_err(|e| Error::Config(format!("Invalid value for {}: {}", name, e))),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_format_defaults_to_pretty() {
        assert_eq!(parse_log_format(None).unwrap(), LogFormat::Pretty);
        assert_eq!(parse_log_format(Some("")).unwrap(), LogFormat::Pretty);
        assert_eq!(parse_log_format(Some("JSON")).unwrap(), LogFormat::Json);
        assert!(parse_log_format(Some("xml")).is_err());
    }

    #[test]
    fn cors_list_skips_blanks() {
        let origins = parse_list(Some("https://a.example, ,https://b.example,"));
        assert_eq!(origins, vec!["https://a.example", "https://b.example"]);
        assert!(parse_list(None).is_empty());
    }
}
