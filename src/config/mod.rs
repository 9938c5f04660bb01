use std::env;
use tracing::error;
use url::Url;

use crate::error::{FixtureError, FixtureResult};

pub const HOST_VAR: &str = "PGHOST";
pub const PORT_VAR: &str = "PGPORT";
pub const USER_VAR: &str = "PGUSER";
pub const PASSWORD_VAR: &str = "PGPASSWORD";
pub const DATABASE_VAR: &str = "PGDATABASE";

/// Database configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatabaseConfig {
    /// Database host
    pub host: String,
    /// Database port
    pub port: String,
    /// Database name
    pub name: String,
    /// Database user
    pub user: String,
    /// Database password
    pub password: String,
}

impl DatabaseConfig {
    /// Load database configuration from environment variables
    pub fn from_env() -> FixtureResult<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load database configuration through an arbitrary key lookup.
    ///
    /// Only presence is checked here. Values are validated when the
    /// connection URL is built.
    pub fn from_lookup<F>(lookup: F) -> FixtureResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let require = |key: &str| {
            lookup(key).ok_or_else(|| {
                error!("{} environment variable not set", key);
                FixtureError::Config(format!("{} environment variable not set", key))
            })
        };

        Ok(Self {
            host: require(HOST_VAR)?,
            port: require(PORT_VAR)?,
            name: require(DATABASE_VAR)?,
            user: require(USER_VAR)?,
            password: require(PASSWORD_VAR)?,
        })
    }

    /// Connection URL in the form the postgres driver expects.
    ///
    /// Credentials and database name are percent-encoded, so any password
    /// the server accepts survives the round trip. An empty host or a port
    /// that is not a number is rejected here instead of inside the driver.
    pub fn url(&self) -> FixtureResult<String> {
        if self.host.is_empty() {
            return Err(invalid(HOST_VAR, "host is empty"));
        }
        let port = self
            .port
            .parse::<u16>()
            .map_err(|e| invalid(PORT_VAR, &e.to_string()))?;

        let mut url = Url::parse("postgres://").map_err(|e| invalid("url", &e.to_string()))?;
        url.set_host(Some(&self.host))
            .map_err(|e| invalid(HOST_VAR, &e.to_string()))?;
        url.set_port(Some(port))
            .map_err(|_| invalid(PORT_VAR, "port rejected"))?;
        url.set_username(&self.user)
            .map_err(|_| invalid(USER_VAR, "user rejected"))?;
        url.set_password(Some(&self.password))
            .map_err(|_| invalid(PASSWORD_VAR, "password rejected"))?;
        url.set_path(&format!("/{}", self.name));

        Ok(url.to_string())
    }

    /// Connection URL with the password masked, for logging
    pub fn redacted_url(&self) -> String {
        format!(
            "postgres://{}:***@{}:{}/{}",
            self.user, self.host, self.port, self.name
        )
    }
}

fn invalid(key: &str, reason: &str) -> FixtureError {
    error!("Invalid {}: {}", key, reason);
    FixtureError::Config(format!("invalid {}: {}", key, reason))
}
