use std::{net::SocketAddr, time::Duration};

use anyhow::Context;

use crate::auth::decode_secret_key;

pub struct Config {
    pub listen_addr: SocketAddr,
    pub db_path: String,
    pub cors_allow: Vec<String>,
    pub request_timeout: Duration,
    /// Decoded HS256 key used to verify identity-provider tokens.
    pub jwt_secret: Vec<u8>,
    pub identity_admin_url: Option<String>,
    pub identity_admin_token: Option<String>,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        let listen_addr: SocketAddr = std::env::var("SM_LISTEN_ADDR")
            .unwrap_or_else(|_| "0.0.0.0:8080".to_string())
            .parse()
            .context("Invalid SM_LISTEN_ADDR")?;
        let db_path = std::env::var("SM_DB_PATH").unwrap_or_else(|_| "./db/app.db".into());
        let cors_allow = std::env::var("SM_CORS_ALLOW_ORIGINS")
            .unwrap_or_else(|_| "*".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        let timeout_ms: u64 = std::env::var("SM_REQUEST_TIMEOUT_MS")
            .unwrap_or_else(|_| "30000".into())
            .parse()
            .unwrap_or(30000);
        let raw_secret = std::env::var("SM_JWT_SECRET").context("SM_JWT_SECRET must be set")?;
        let jwt_secret = decode_secret_key(&raw_secret).context("Invalid SM_JWT_SECRET")?;
        let identity_admin_url = non_empty_var("SM_IDENTITY_ADMIN_URL");
        let identity_admin_token = non_empty_var("SM_IDENTITY_ADMIN_TOKEN");
        if identity_admin_url.is_some() && identity_admin_token.is_none() {
            anyhow::bail!("SM_IDENTITY_ADMIN_TOKEN is required when SM_IDENTITY_ADMIN_URL is set");
        }

        Ok(Self {
            listen_addr,
            db_path,
            cors_allow,
            request_timeout: Duration::from_millis(timeout_ms),
            jwt_secret,
            identity_admin_url,
            identity_admin_token,
        })
    }
}

fn non_empty_var(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
