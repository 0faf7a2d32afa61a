use std::env;
use thiserror::Error;

const DEFAULT_PORT: u16 = 5000;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("environment variable {0} not set")]
    Missing(&'static str),
    #[error("environment variable {key} is invalid: {value}")]
    Invalid { key: &'static str, value: String },
}

#[derive(Clone, Debug)]
pub struct EnvConfig {
    pub port: u16,
    pub db_url: String,
    pub jwt_secret: String,
    pub admin: AdminConfig,
}

/// Account ensured to exist at startup. See [`crate::bootstrap::seed_admin`].
#[derive(Clone, Debug)]
pub struct AdminConfig {
    pub name: String,
    pub email: String,
    pub password: String,
}

impl Default for AdminConfig {
    fn default() -> Self {
        Self {
            name: "Admin".to_string(),
            email: "admin@gmail.com".to_string(),
            password: "123456789".to_string(),
        }
    }
}

impl EnvConfig {
    fn get_env(key: &'static str) -> Result<String, ConfigError> {
        env::var(key).map_err(|_| ConfigError::Missing(key))
    }

    fn get_env_or(key: &'static str, default: String) -> String {
        env::var(key).unwrap_or(default)
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv::dotenv().ok();

        let port = match env::var("PORT") {
            Ok(raw) => raw
                .parse()
                .map_err(|_| ConfigError::Invalid { key: "PORT", value: raw })?,
            Err(_) => DEFAULT_PORT,
        };

        let defaults = AdminConfig::default();

        Ok(EnvConfig {
            port,
            db_url: Self::get_env("POSTGRES_URI")?,
            jwt_secret: Self::get_env("JWT_SECRET")?,
            admin: AdminConfig {
                name: Self::get_env_or("ADMIN_NAME", defaults.name),
                email: Self::get_env_or("ADMIN_EMAIL", defaults.email),
                password: Self::get_env_or("ADMIN_PASSWORD", defaults.password),
            },
        })
    }
}
