use std::env;

use crate::shared::constants::{DEFAULT_MAP_ZOOM, MAX_IMAGE_SIZE_BYTES};

#[derive(Debug, Clone)]
pub struct Config {
    pub app: AppConfig,
    pub upload: UploadConfig,
    pub map: MapConfig,
    pub seed: SeedConfig,
    pub signup: SignupConfig,
    pub swagger: SwaggerConfig,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub cors_allowed_origins: Vec<String>,
    pub max_request_body_size: usize,
}

/// Limits applied to report photo attachments
#[derive(Debug, Clone)]
pub struct UploadConfig {
    /// Largest accepted image, in bytes (inclusive)
    pub max_image_bytes: usize,
}

/// Tile layer and zoom handed to the map widget
#[derive(Debug, Clone)]
pub struct MapConfig {
    pub tile_url: String,
    pub tile_attribution: String,
    pub default_zoom: u8,
}

#[derive(Debug, Clone)]
pub struct SeedConfig {
    /// Load the sample users and reports into the store at startup
    pub sample_data: bool,
}

#[derive(Debug, Clone)]
pub struct SignupConfig {
    /// Add resident signups to the user directory instead of only logging them
    pub register_users: bool,
}

#[derive(Debug, Clone)]
pub struct SwaggerConfig {
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
            upload: UploadConfig::from_env()?,
            map: MapConfig::from_env()?,
            seed: SeedConfig::from_env()?,
            signup: SignupConfig::from_env()?,
            swagger: SwaggerConfig::from_env(),
        })
    }

    /// Defaults without reading the environment; empty store, logging sink
    #[cfg(test)]
    pub fn for_tests() -> Self {
        Config {
            app: AppConfig {
                host: "127.0.0.1".to_string(),
                port: 0,
                cors_allowed_origins: vec!["*".to_string()],
                max_request_body_size: AppConfig::DEFAULT_MAX_REQUEST_BODY_SIZE,
            },
            upload: UploadConfig {
                max_image_bytes: MAX_IMAGE_SIZE_BYTES,
            },
            map: MapConfig {
                tile_url: MapConfig::DEFAULT_TILE_URL.to_string(),
                tile_attribution: MapConfig::DEFAULT_TILE_ATTRIBUTION.to_string(),
                default_zoom: DEFAULT_MAP_ZOOM,
            },
            seed: SeedConfig { sample_data: false },
            signup: SignupConfig {
                register_users: false,
            },
            swagger: SwaggerConfig {
                title: "FixEgypt API".to_string(),
                version: "0.1.0".to_string(),
                description: "Civic issue reporting API".to_string(),
            },
        }
    }
}

impl AppConfig {
    // Large enough for a 10MB photo plus multipart framing
    const DEFAULT_MAX_REQUEST_BODY_SIZE: usize = 16 * 1024 * 1024;

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

        let max_request_body_size = env::var("MAX_REQUEST_BODY_SIZE")
            .unwrap_or_else(|_| Self::DEFAULT_MAX_REQUEST_BODY_SIZE.to_string())
            .parse::<usize>()
            .map_err(|_| "MAX_REQUEST_BODY_SIZE must be a valid number".to_string())?;

        Ok(Self {
            host,
            port,
            cors_allowed_origins,
            max_request_body_size,
        })
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl UploadConfig {
    pub fn from_env() -> Result<Self, String> {
        let max_image_bytes = env::var("MAX_IMAGE_SIZE_BYTES")
            .unwrap_or_else(|_| MAX_IMAGE_SIZE_BYTES.to_string())
            .parse::<usize>()
            .map_err(|_| "MAX_IMAGE_SIZE_BYTES must be a valid number".to_string())?;

        Ok(Self { max_image_bytes })
    }
}

impl MapConfig {
    const DEFAULT_TILE_URL: &'static str = "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png";
    const DEFAULT_TILE_ATTRIBUTION: &'static str =
        "&copy; <a href=\"https://www.openstreetmap.org/copyright\">OpenStreetMap</a> contributors";

    pub fn from_env() -> Result<Self, String> {
        let tile_url =
            env::var("MAP_TILE_URL").unwrap_or_else(|_| Self::DEFAULT_TILE_URL.to_string());

        let tile_attribution = env::var("MAP_TILE_ATTRIBUTION")
            .unwrap_or_else(|_| Self::DEFAULT_TILE_ATTRIBUTION.to_string());

        let default_zoom = env::var("MAP_DEFAULT_ZOOM")
            .unwrap_or_else(|_| DEFAULT_MAP_ZOOM.to_string())
            .parse::<u8>()
            .map_err(|_| "MAP_DEFAULT_ZOOM must be a number between 0 and 255".to_string())?;

        Ok(Self {
            tile_url,
            tile_attribution,
            default_zoom,
        })
    }
}

impl SeedConfig {
    pub fn from_env() -> Result<Self, String> {
        let sample_data = env::var("SEED_SAMPLE_DATA")
            .unwrap_or_else(|_| "true".to_string())
            .parse::<bool>()
            .map_err(|_| "SEED_SAMPLE_DATA must be true or false".to_string())?;

        Ok(Self { sample_data })
    }
}

impl SignupConfig {
    pub fn from_env() -> Result<Self, String> {
        let register_users = env::var("SIGNUP_REGISTER_USERS")
            .unwrap_or_else(|_| "false".to_string())
            .parse::<bool>()
            .map_err(|_| "SIGNUP_REGISTER_USERS must be true or false".to_string())?;

        Ok(Self { register_users })
    }
}

impl SwaggerConfig {
    pub fn from_env() -> Self {
        Self {
            title: env::var("SWAGGER_TITLE").unwrap_or_else(|_| "FixEgypt API".to_string()),
            version: env::var("SWAGGER_VERSION").unwrap_or_else(|_| "0.1.0".to_string()),
            description: env::var("SWAGGER_DESCRIPTION")
                .unwrap_or_else(|_| "Civic issue reporting API".to_string()),
        }
    }
}
