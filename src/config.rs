use anyhow::{Context, Result};

#[derive(Debug, Clone)]
pub struct Config {
    // Site
    pub base_url: String,
    pub site_name: String,
    pub logo_url: Option<String>,
    pub default_og_image: String,

    // Business details for structured data
    pub phone: Option<String>,
    pub city: Option<String>,
    pub country: Option<String>,

    // Content sources (embedded defaults when unset)
    pub locales_dir: Option<String>,
    pub catalog_file: Option<String>,

    // Server
    pub port: u16,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let base_url = std::env::var("SITE_BASE_URL").context("SITE_BASE_URL not set")?;
        let base_url = base_url.trim_end_matches('/').to_string();
        if base_url.is_empty() {
            anyhow::bail!("SITE_BASE_URL is empty");
        }

        Ok(Self {
            default_og_image: std::env::var("DEFAULT_OG_IMAGE")
                .unwrap_or_else(|_| format!("{}/images/og-default.jpg", base_url)),
            base_url,
            site_name: std::env::var("SITE_NAME").unwrap_or_else(|_| "Clinic".to_string()),
            logo_url: optional_var("SITE_LOGO_URL"),

            phone: optional_var("SITE_PHONE"),
            city: optional_var("SITE_CITY"),
            country: optional_var("SITE_COUNTRY"),

            locales_dir: optional_var("LOCALES_DIR"),
            catalog_file: optional_var("CATALOG_FILE"),

            port: std::env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(8080),
        })
    }
}

/// Read an environment variable, treating empty values as unset.
fn optional_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    const VARS: &[&str] = &[
        "SITE_BASE_URL",
        "SITE_NAME",
        "SITE_LOGO_URL",
        "DEFAULT_OG_IMAGE",
        "SITE_PHONE",
        "SITE_CITY",
        "SITE_COUNTRY",
        "LOCALES_DIR",
        "CATALOG_FILE",
        "PORT",
    ];

    fn clear_env() {
        for var in VARS {
            std::env::remove_var(var);
        }
    }

    #[test]
    #[serial]
    fn test_from_env_requires_base_url() {
        clear_env();
        let err = Config::from_env().unwrap_err();
        assert!(err.to_string().contains("SITE_BASE_URL"));
    }

    #[test]
    #[serial]
    fn test_from_env_defaults() {
        clear_env();
        std::env::set_var("SITE_BASE_URL", "https://clinic.example/");

        let config = Config::from_env().unwrap();
        assert_eq!(config.base_url, "https://clinic.example");
        assert_eq!(config.site_name, "Clinic");
        assert_eq!(
            config.default_og_image,
            "https://clinic.example/images/og-default.jpg"
        );
        assert_eq!(config.port, 8080);
        assert!(config.locales_dir.is_none());
        clear_env();
    }

    #[test]
    #[serial]
    fn test_from_env_overrides() {
        clear_env();
        std::env::set_var("SITE_BASE_URL", "https://clinic.example");
        std::env::set_var("SITE_NAME", "Smile Istanbul");
        std::env::set_var("SITE_PHONE", "+90 212 000 00 00");
        std::env::set_var("SITE_CITY", "  ");
        std::env::set_var("PORT", "3000");

        let config = Config::from_env().unwrap();
        assert_eq!(config.site_name, "Smile Istanbul");
        assert_eq!(config.phone.as_deref(), Some("+90 212 000 00 00"));
        assert!(config.city.is_none());
        assert_eq!(config.port, 3000);
        clear_env();
    }

    #[test]
    #[serial]
    fn test_from_env_invalid_port_uses_default() {
        clear_env();
        std::env::set_var("SITE_BASE_URL", "https://clinic.example");
        std::env::set_var("PORT", "not-a-port");

        assert_eq!(Config::from_env().unwrap().port, 8080);
        clear_env();
    }
}
