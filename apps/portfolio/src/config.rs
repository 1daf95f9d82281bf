use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Every variable has a default; malformed values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    pub profile_api_base_url: String,
    pub site: SiteConfig,
    /// Hosts the image proxy will fetch from. Empty means any host.
    pub image_proxy_allowed_hosts: Vec<String>,
    pub fetch_timeout_secs: u64,
    pub static_dir: Option<String>,
}

/// Branding and URLs used when composing page metadata.
#[derive(Debug, Clone)]
pub struct SiteConfig {
    pub site_url: String,
    pub brand_name: String,
    pub brand_url: String,
    pub default_og_image: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            site_url: "https://zapfolio.vercel.app".to_string(),
            brand_name: "Zapfolio".to_string(),
            brand_url: "https://zapfolio.in".to_string(),
            default_og_image: "/zapfolio-og.jpg".to_string(),
        }
    }
}

const DEFAULT_PROFILE_API: &str = "https://zapfolio-app.vercel.app/api/get-user-data";
const DEFAULT_PROXY_HOSTS: &str = "media.licdn.com,img.clerk.com";

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let defaults = SiteConfig::default();

        Ok(Config {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            profile_api_base_url: env_or("PROFILE_API_BASE_URL", DEFAULT_PROFILE_API),
            site: SiteConfig {
                site_url: env_or("SITE_URL", &defaults.site_url)
                    .trim_end_matches('/')
                    .to_string(),
                brand_name: env_or("BRAND_NAME", &defaults.brand_name),
                brand_url: env_or("BRAND_URL", &defaults.brand_url),
                default_og_image: env_or("DEFAULT_OG_IMAGE", &defaults.default_og_image),
            },
            image_proxy_allowed_hosts: parse_host_list(&env_or(
                "IMAGE_PROXY_ALLOWED_HOSTS",
                DEFAULT_PROXY_HOSTS,
            )),
            fetch_timeout_secs: std::env::var("FETCH_TIMEOUT_SECS")
                .unwrap_or_else(|_| "10".to_string())
                .parse::<u64>()
                .context("FETCH_TIMEOUT_SECS must be a whole number of seconds")?,
            static_dir: std::env::var("STATIC_DIR").ok().filter(|s| !s.is_empty()),
        })
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Splits a comma-separated host list, lowercasing and dropping blanks.
pub fn parse_host_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|h| h.trim().to_ascii_lowercase())
        .filter(|h| !h.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_host_list_trims_and_lowercases() {
        assert_eq!(
            parse_host_list(" Media.Licdn.com , img.clerk.com,,"),
            vec!["media.licdn.com", "img.clerk.com"]
        );
    }

    #[test]
    fn test_parse_host_list_empty() {
        assert!(parse_host_list("").is_empty());
    }

    #[test]
    fn test_default_site_config() {
        let site = SiteConfig::default();
        assert_eq!(site.brand_name, "Zapfolio");
        assert!(!site.site_url.ends_with('/'));
    }
}
