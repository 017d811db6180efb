//! Configuration module
//!
//! Environment-driven configuration for the API and the contact relay.
//! `.env` files are honored via dotenvy; every value has a development
//! default except the SMTP credentials, which are optional (the contact
//! relay is disabled without them).

use std::env;

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_MEDIA_DIR: &str = "uploads";
const DEFAULT_MAX_UPLOAD_SIZE_MB: usize = 25;
const DEFAULT_SMTP_PORT: u16 = 587;

/// Application configuration.
#[derive(Clone, Debug)]
pub struct Config {
    pub server_port: u16,
    pub environment: String,
    pub cors_origins: Vec<String>,
    pub media_dir: String,
    pub public_base_url: String,
    pub max_upload_size_bytes: usize,
    // SMTP / contact relay
    pub smtp_host: Option<String>,
    pub smtp_port: Option<u16>,
    pub smtp_user: Option<String>,
    pub smtp_password: Option<String>,
    pub smtp_from: Option<String>,
    pub smtp_tls: bool,
    pub contact_recipient: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, anyhow::Error> {
        dotenvy::dotenv().ok();

        let environment = env::var("ENVIRONMENT")
            .or_else(|_| env::var("APP_ENV"))
            .unwrap_or_else(|_| "development".to_string());

        let cors_origins_str = env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5173".to_string());
        let is_production =
            environment.to_lowercase() == "production" || environment.to_lowercase() == "prod";
        if is_production && cors_origins_str.trim() == "*" {
            return Err(anyhow::anyhow!(
                "CORS_ORIGINS cannot be '*' in production. Please specify explicit origins."
            ));
        }

        let cors_origins: Vec<String> = cors_origins_str
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let server_port = env::var("PORT")
            .or_else(|_| env::var("SERVER_PORT"))
            .unwrap_or_else(|_| DEFAULT_PORT.to_string())
            .parse()
            .map_err(|_| anyhow::anyhow!("PORT must be a valid number"))?;

        let media_dir = env::var("MEDIA_DIR").unwrap_or_else(|_| DEFAULT_MEDIA_DIR.to_string());

        let public_base_url = env::var("PUBLIC_BASE_URL")
            .unwrap_or_else(|_| format!("http://localhost:{}/uploads", server_port));

        let max_upload_size_mb = env::var("MAX_UPLOAD_SIZE_MB")
            .unwrap_or_else(|_| DEFAULT_MAX_UPLOAD_SIZE_MB.to_string())
            .parse::<usize>()
            .unwrap_or(DEFAULT_MAX_UPLOAD_SIZE_MB);

        let smtp_user = env::var("SMTP_USER").ok().filter(|s| !s.is_empty());
        let contact_recipient = env::var("CONTACT_RECIPIENT")
            .ok()
            .filter(|s| !s.is_empty())
            .or_else(|| smtp_user.clone());

        Ok(Config {
            server_port,
            environment,
            cors_origins,
            media_dir,
            public_base_url,
            max_upload_size_bytes: max_upload_size_mb * 1024 * 1024,
            smtp_host: env::var("SMTP_HOST").ok().filter(|s| !s.is_empty()),
            smtp_port: env::var("SMTP_PORT").ok().and_then(|s| s.parse().ok()),
            smtp_user,
            smtp_password: env::var("SMTP_PASSWORD").ok().filter(|s| !s.is_empty()),
            smtp_from: env::var("SMTP_FROM").ok().filter(|s| !s.is_empty()),
            smtp_tls: env::var("SMTP_TLS")
                .unwrap_or_else(|_| "true".to_string())
                .to_lowercase()
                .parse()
                .unwrap_or(true),
            contact_recipient,
        })
    }

    /// Check if the application is running in production mode
    pub fn is_production(&self) -> bool {
        let env = self.environment.to_lowercase();
        env == "production" || env == "prod"
    }

    pub fn server_port(&self) -> u16 {
        self.server_port
    }

    pub fn cors_origins(&self) -> &[String] {
        &self.cors_origins
    }

    pub fn media_dir(&self) -> &str {
        &self.media_dir
    }

    pub fn public_base_url(&self) -> &str {
        &self.public_base_url
    }

    pub fn max_upload_size_bytes(&self) -> usize {
        self.max_upload_size_bytes
    }

    pub fn smtp_host(&self) -> Option<&str> {
        self.smtp_host.as_deref()
    }

    pub fn smtp_port(&self) -> Option<u16> {
        self.smtp_port
    }

    pub fn smtp_user(&self) -> Option<&str> {
        self.smtp_user.as_deref()
    }

    pub fn smtp_password(&self) -> Option<&str> {
        self.smtp_password.as_deref()
    }

    pub fn smtp_from(&self) -> Option<&str> {
        self.smtp_from.as_deref()
    }

    pub fn smtp_tls(&self) -> bool {
        self.smtp_tls
    }

    pub fn smtp_default_port() -> u16 {
        DEFAULT_SMTP_PORT
    }

    pub fn contact_recipient(&self) -> Option<&str> {
        self.contact_recipient.as_deref()
    }

    /// Fail fast on misconfiguration. Called once at startup.
    pub fn validate(&self) -> Result<(), anyhow::Error> {
        if self.server_port == 0 {
            return Err(anyhow::anyhow!("PORT must be non-zero"));
        }
        if self.media_dir.trim().is_empty() {
            return Err(anyhow::anyhow!("MEDIA_DIR must not be empty"));
        }
        if self.max_upload_size_bytes == 0 {
            return Err(anyhow::anyhow!("MAX_UPLOAD_SIZE_MB must be non-zero"));
        }
        for origin in &self.cors_origins {
            if origin != "*" && !origin.starts_with("http://") && !origin.starts_with("https://") {
                return Err(anyhow::anyhow!(
                    "CORS origin '{}' must start with http:// or https://",
                    origin
                ));
            }
        }
        // SMTP is optional as a whole, but partial configuration is a mistake
        if self.smtp_host.is_some() && self.smtp_from.is_none() {
            return Err(anyhow::anyhow!("SMTP_FROM must be set when SMTP_HOST is set"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_config() -> Config {
        Config {
            server_port: 3000,
            environment: "development".to_string(),
            cors_origins: vec!["http://localhost:5173".to_string()],
            media_dir: "uploads".to_string(),
            public_base_url: "http://localhost:3000/uploads".to_string(),
            max_upload_size_bytes: 25 * 1024 * 1024,
            smtp_host: None,
            smtp_port: None,
            smtp_user: None,
            smtp_password: None,
            smtp_from: None,
            smtp_tls: true,
            contact_recipient: None,
        }
    }

    #[test]
    fn validate_accepts_default_development_config() {
        assert!(base_config().validate().is_ok());
    }

    #[test]
    fn validate_rejects_malformed_origin() {
        let mut config = base_config();
        config.cors_origins = vec!["localhost:5173".to_string()];
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_rejects_partial_smtp_config() {
        let mut config = base_config();
        config.smtp_host = Some("smtp.example.com".to_string());
        assert!(config.validate().is_err());

        config.smtp_from = Some("folio@example.com".to_string());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn is_production_matches_both_spellings() {
        let mut config = base_config();
        assert!(!config.is_production());
        config.environment = "production".to_string();
        assert!(config.is_production());
        config.environment = "prod".to_string();
        assert!(config.is_production());
    }
}
