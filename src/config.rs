use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct JwtConfig {
    pub secret: String,
    pub ttl_days: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub database_url: String,
    pub jwt: JwtConfig,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let database_url = std::env::var("DATABASE_URL")
            .map_err(|_| anyhow::anyhow!("DATABASE_URL is not set"))?;

        // No fallback secret: an unset or weak JWT_SECRET must fail startup.
        let secret =
            std::env::var("JWT_SECRET").map_err(|_| anyhow::anyhow!("JWT_SECRET is not set"))?;
        if secret.len() < 16 {
            anyhow::bail!("JWT_SECRET must be at least 16 bytes");
        }

        let jwt = JwtConfig {
            secret,
            ttl_days: std::env::var("JWT_TTL_DAYS")
                .ok()
                .and_then(|v| v.parse::<i64>().ok())
                .unwrap_or(7),
        };
        Ok(Self { database_url, jwt })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Env is process-global; these tests must not interleave.
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    fn with_env(secret: Option<&str>, ttl_days: Option<&str>, f: impl FnOnce()) {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        std::env::set_var("DATABASE_URL", "postgres://postgres@localhost:5432/postgres");
        match secret {
            Some(s) => std::env::set_var("JWT_SECRET", s),
            None => std::env::remove_var("JWT_SECRET"),
        }
        match ttl_days {
            Some(d) => std::env::set_var("JWT_TTL_DAYS", d),
            None => std::env::remove_var("JWT_TTL_DAYS"),
        }
        f();
    }

    #[test]
    fn missing_secret_fails_startup() {
        with_env(None, None, || {
            let err = AppConfig::from_env().unwrap_err();
            assert!(err.to_string().contains("JWT_SECRET is not set"));
        });
    }

    #[test]
    fn short_secret_fails_startup() {
        with_env(Some("too-short"), None, || {
            let err = AppConfig::from_env().unwrap_err();
            assert!(err.to_string().contains("at least 16 bytes"));
        });
    }

    #[test]
    fn ttl_defaults_to_seven_days() {
        with_env(Some("a-secret-of-adequate-length"), None, || {
            let config = AppConfig::from_env().expect("valid config");
            assert_eq!(config.jwt.ttl_days, 7);
            assert_eq!(config.jwt.secret, "a-secret-of-adequate-length");
        });
    }

    #[test]
    fn ttl_is_configurable() {
        with_env(Some("a-secret-of-adequate-length"), Some("1"), || {
            let config = AppConfig::from_env().expect("valid config");
            assert_eq!(config.jwt.ttl_days, 1);
        });
    }
}
