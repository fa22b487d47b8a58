use rust_decimal::Decimal;
use std::env;
use std::str::FromStr;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct Config {
    pub app: AppConfig,
    pub database: DatabaseConfig,
    pub auth: AuthConfig,
    pub platform: PlatformConfig,
    pub admin_bootstrap: AdminBootstrapConfig,
    pub swagger: SwaggerConfig,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub cors_allowed_origins: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
    pub acquire_timeout_secs: u64,
    pub idle_timeout_secs: u64,
    pub max_lifetime_secs: u64,
}

/// Settings for the self-issued HS256 access and refresh tokens
#[derive(Clone, Debug)]
pub struct AuthConfig {
    pub jwt_secret: String,
    pub issuer: String,
    pub audience: String,
    pub access_ttl: Duration,
    pub refresh_ttl: Duration,
    pub jwt_leeway: Duration,
}

/// Marketplace-wide business settings
#[derive(Debug, Clone)]
pub struct PlatformConfig {
    /// Percentage of every investment kept as platform fee (0..=100)
    pub fee_percentage: Decimal,
    /// Default size of the featured projects list
    pub featured_limit: i64,
}

/// Admin account created at startup when it does not exist yet
#[derive(Debug, Clone)]
pub struct AdminBootstrapConfig {
    pub email: Option<String>,
    pub password: Option<String>,
    pub name: String,
}

#[derive(Debug, Clone)]
pub struct SwaggerConfig {
    pub username: Option<String>,
    pub password: Option<String>,
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        // Load .env file if exists, ignore if not found (optional for production)
        if let Err(e) = dotenvy::dotenv() {
            if !e.to_string().contains("not found") {
                eprintln!("Warning: Error loading .env file: {}", e);
            }
        }

        Ok(Config {
            app: AppConfig::from_env()?,
            database: DatabaseConfig::from_env()?,
            auth: AuthConfig::from_env()?,
            platform: PlatformConfig::from_env()?,
            admin_bootstrap: AdminBootstrapConfig::from_env()?,
            swagger: SwaggerConfig::from_env()?,
        })
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, String> {
        let host = env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()
            .map_err(|e| format!("Invalid PORT: {}", e))?;

        // Parse CORS allowed origins from comma-separated string
        let cors_allowed_origins = env::var("CORS_ALLOWED_ORIGINS")
            .unwrap_or_else(|_| "*".to_string())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        Ok(Self {
            host,
            port,
            cors_allowed_origins,
        })
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl DatabaseConfig {
    const DEFAULT_MAX_CONNECTIONS: u32 = 10;
    const DEFAULT_MIN_CONNECTIONS: u32 = 1;
    const DEFAULT_ACQUIRE_TIMEOUT_SECS: u64 = 5;
    const DEFAULT_IDLE_TIMEOUT_SECS: u64 = 600; // 10 minutes
    const DEFAULT_MAX_LIFETIME_SECS: u64 = 1800; // 30 minutes

    pub fn from_env() -> Result<Self, String> {
        let url = env::var("DATABASE_URL").map_err(|_| "DATABASE_URL must be set".to_string())?;

        let max_connections = env::var("DB_MAX_CONNECTIONS")
            .unwrap_or_else(|_| Self::DEFAULT_MAX_CONNECTIONS.to_string())
            .parse::<u32>()
            .map_err(|_| "DB_MAX_CONNECTIONS must be a valid number".to_string())?;

        let min_connections = env::var("DB_MIN_CONNECTIONS")
            .unwrap_or_else(|_| Self::DEFAULT_MIN_CONNECTIONS.to_string())
            .parse::<u32>()
            .map_err(|_| "DB_MIN_CONNECTIONS must be a valid number".to_string())?;

        let acquire_timeout_secs = env::var("DB_ACQUIRE_TIMEOUT_SECS")
            .unwrap_or_else(|_| Self::DEFAULT_ACQUIRE_TIMEOUT_SECS.to_string())
            .parse::<u64>()
            .map_err(|_| "DB_ACQUIRE_TIMEOUT_SECS must be a valid number".to_string())?;

        let idle_timeout_secs = env::var("DB_IDLE_TIMEOUT_SECS")
            .unwrap_or_else(|_| Self::DEFAULT_IDLE_TIMEOUT_SECS.to_string())
            .parse::<u64>()
            .map_err(|_| "DB_IDLE_TIMEOUT_SECS must be a valid number".to_string())?;

        let max_lifetime_secs = env::var("DB_MAX_LIFETIME_SECS")
            .unwrap_or_else(|_| Self::DEFAULT_MAX_LIFETIME_SECS.to_string())
            .parse::<u64>()
            .map_err(|_| "DB_MAX_LIFETIME_SECS must be a valid number".to_string())?;

        Ok(Self {
            url,
            max_connections,
            min_connections,
            acquire_timeout_secs,
            idle_timeout_secs,
            max_lifetime_secs,
        })
    }
}

impl AuthConfig {
    const MIN_SECRET_LEN: usize = 32;
    const DEFAULT_ISSUER: &'static str = "launchtribe";
    const DEFAULT_AUDIENCE: &'static str = "launchtribe-api";
    const DEFAULT_ACCESS_TTL_MINUTES: u64 = 60;
    const DEFAULT_REFRESH_TTL_MINUTES: u64 = 43_200; // 30 days
    const DEFAULT_JWT_LEEWAY_SECS: u64 = 60;

    pub fn from_env() -> Result<Self, String> {
        let jwt_secret = env::var("JWT_SECRET")
            .map_err(|_| "JWT_SECRET environment variable is required".to_string())?;
        if jwt_secret.len() < Self::MIN_SECRET_LEN {
            return Err(format!(
                "JWT_SECRET must be at least {} bytes long",
                Self::MIN_SECRET_LEN
            ));
        }

        let issuer = env::var("JWT_ISSUER").unwrap_or_else(|_| Self::DEFAULT_ISSUER.to_string());
        let audience =
            env::var("JWT_AUDIENCE").unwrap_or_else(|_| Self::DEFAULT_AUDIENCE.to_string());

        let access_ttl_minutes = env::var("JWT_ACCESS_TTL_MINUTES")
            .unwrap_or_else(|_| Self::DEFAULT_ACCESS_TTL_MINUTES.to_string())
            .parse::<u64>()
            .map_err(|_| "JWT_ACCESS_TTL_MINUTES must be a valid number".to_string())?;

        let refresh_ttl_minutes = env::var("JWT_REFRESH_TTL_MINUTES")
            .unwrap_or_else(|_| Self::DEFAULT_REFRESH_TTL_MINUTES.to_string())
            .parse::<u64>()
            .map_err(|_| "JWT_REFRESH_TTL_MINUTES must be a valid number".to_string())?;

        let jwt_leeway_secs = env::var("JWT_LEEWAY")
            .unwrap_or_else(|_| Self::DEFAULT_JWT_LEEWAY_SECS.to_string())
            .parse::<u64>()
            .map_err(|_| "JWT_LEEWAY must be a valid number".to_string())?;

        Ok(Self {
            jwt_secret,
            issuer,
            audience,
            access_ttl: Duration::from_secs(access_ttl_minutes * 60),
            refresh_ttl: Duration::from_secs(refresh_ttl_minutes * 60),
            jwt_leeway: Duration::from_secs(jwt_leeway_secs),
        })
    }
}

impl PlatformConfig {
    const DEFAULT_FEE_PERCENTAGE: &'static str = "5";
    const DEFAULT_FEATURED_LIMIT: i64 = 6;

    pub fn from_env() -> Result<Self, String> {
        let raw_fee = env::var("PLATFORM_FEE_PERCENTAGE")
            .unwrap_or_else(|_| Self::DEFAULT_FEE_PERCENTAGE.to_string());
        let fee_percentage = Self::parse_fee_percentage(&raw_fee)?;

        let featured_limit = env::var("FEATURED_PROJECTS_LIMIT")
            .unwrap_or_else(|_| Self::DEFAULT_FEATURED_LIMIT.to_string())
            .parse::<i64>()
            .map_err(|_| "FEATURED_PROJECTS_LIMIT must be a valid number".to_string())?;

        Ok(Self {
            fee_percentage,
            featured_limit,
        })
    }

    fn parse_fee_percentage(raw: &str) -> Result<Decimal, String> {
        let value = Decimal::from_str(raw.trim())
            .map_err(|_| "PLATFORM_FEE_PERCENTAGE must be a valid decimal number".to_string())?;
        if value < Decimal::ZERO || value > Decimal::ONE_HUNDRED {
            return Err("PLATFORM_FEE_PERCENTAGE must be between 0 and 100".to_string());
        }
        Ok(value)
    }
}

impl Default for PlatformConfig {
    fn default() -> Self {
        Self {
            fee_percentage: Decimal::from(5),
            featured_limit: Self::DEFAULT_FEATURED_LIMIT,
        }
    }
}

impl AdminBootstrapConfig {
    pub fn from_env() -> Result<Self, String> {
        let email = env::var("ADMIN_EMAIL").ok().filter(|s| !s.trim().is_empty());
        let password = env::var("ADMIN_PASSWORD").ok().filter(|s| !s.is_empty());
        let name = env::var("ADMIN_NAME").unwrap_or_else(|_| "Administrator".to_string());

        if email.is_some() != password.is_some() {
            return Err("ADMIN_EMAIL and ADMIN_PASSWORD must be set together".to_string());
        }

        Ok(Self {
            email,
            password,
            name,
        })
    }

    /// Returns (email, password) when bootstrap is enabled
    pub fn credentials(&self) -> Option<(&str, &str)> {
        match (&self.email, &self.password) {
            (Some(email), Some(password)) => Some((email.as_str(), password.as_str())),
            _ => None,
        }
    }
}

impl SwaggerConfig {
    pub fn from_env() -> Result<Self, String> {
        // Only use credentials if they are non-empty
        let username = env::var("SWAGGER_USERNAME").ok().filter(|s| !s.is_empty());
        let password = env::var("SWAGGER_PASSWORD").ok().filter(|s| !s.is_empty());
        let title = env::var("SWAGGER_TITLE").unwrap_or_else(|_| "Launch Tribe API".to_string());
        let version = env::var("SWAGGER_VERSION").unwrap_or_else(|_| "0.1.0".to_string());
        let description = env::var("SWAGGER_DESCRIPTION")
            .unwrap_or_else(|_| "API documentation for the Launch Tribe marketplace".to_string());

        Ok(Self {
            username,
            password,
            title,
            version,
            description,
        })
    }

    /// Returns credentials in "username:password" format if auth is enabled
    pub fn credentials(&self) -> Option<String> {
        match (&self.username, &self.password) {
            (Some(user), Some(pass)) => Some(format!("{}:{}", user, pass)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_fee_percentage() {
        assert_eq!(
            PlatformConfig::parse_fee_percentage("5").unwrap(),
            Decimal::from(5)
        );
        assert_eq!(
            PlatformConfig::parse_fee_percentage(" 2.5 ").unwrap(),
            Decimal::new(25, 1)
        );
        assert_eq!(
            PlatformConfig::parse_fee_percentage("0").unwrap(),
            Decimal::ZERO
        );
        assert_eq!(
            PlatformConfig::parse_fee_percentage("100").unwrap(),
            Decimal::ONE_HUNDRED
        );
    }

    #[test]
    fn test_parse_fee_percentage_rejects_out_of_range() {
        assert!(PlatformConfig::parse_fee_percentage("-1").is_err());
        assert!(PlatformConfig::parse_fee_percentage("100.01").is_err());
        assert!(PlatformConfig::parse_fee_percentage("five").is_err());
    }

    #[test]
    fn test_admin_bootstrap_credentials() {
        let config = AdminBootstrapConfig {
            email: Some("admin@launchtribe.test".to_string()),
            password: Some("s3cret-pass".to_string()),
            name: "Administrator".to_string(),
        };
        assert_eq!(
            config.credentials(),
            Some(("admin@launchtribe.test", "s3cret-pass"))
        );

        let disabled = AdminBootstrapConfig {
            email: None,
            password: None,
            name: "Administrator".to_string(),
        };
        assert!(disabled.credentials().is_none());
    }

    #[test]
    fn test_swagger_credentials() {
        let config = SwaggerConfig {
            username: Some("docs".to_string()),
            password: Some("pw".to_string()),
            title: String::new(),
            version: String::new(),
            description: String::new(),
        };
        assert_eq!(config.credentials(), Some("docs:pw".to_string()));
    }
}
