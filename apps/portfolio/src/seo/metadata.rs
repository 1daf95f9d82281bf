//! Search-engine and social-preview metadata for a portfolio page.

use serde::Serialize;
use url::Url;

use crate::config::SiteConfig;
use crate::models::profile::{items, text, ProfileDocument};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageMetadata {
    pub title: String,
    pub description: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub keywords: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub open_graph: Option<OpenGraph>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub twitter: Option<TwitterCard>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub canonical: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub robots: Option<Robots>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OpenGraph {
    pub title: String,
    pub description: String,
    pub images: Vec<String>,
    #[serde(rename = "type")]
    pub og_type: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TwitterCard {
    pub card: &'static str,
    pub title: String,
    pub description: String,
    pub images: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Robots {
    pub index: bool,
    pub follow: bool,
}

impl Robots {
    /// Content of the `<meta name="robots">` tag.
    pub fn directive(&self) -> String {
        format!(
            "{}, {}",
            if self.index { "index" } else { "noindex" },
            if self.follow { "follow" } else { "nofollow" }
        )
    }
}

/// Builds full metadata for a successfully fetched profile.
pub fn build_metadata(profile: &ProfileDocument, username: &str, site: &SiteConfig) -> PageMetadata {
    let name = profile.full_name();
    let headline = text(&profile.headline);
    let brand = &site.brand_name;

    let description = match headline {
        Some(h) => h.to_string(),
        None => format!(
            "View {name}'s professional portfolio. {} based in {}. Built with {brand}.",
            text(&profile.industry).unwrap_or("Professional"),
            profile.address().unwrap_or("the world"),
        ),
    };

    let social_title = format!("{name} | Professional Portfolio");
    let social_description = headline
        .map(str::to_string)
        .unwrap_or_else(|| format!("Professional portfolio of {name}"));
    let images = vec![text(&profile.image)
        .unwrap_or(&site.default_og_image)
        .to_string()];

    PageMetadata {
        title: format!("{name} - Professional Portfolio | {brand}"),
        description,
        keywords: build_keywords(profile, brand),
        open_graph: Some(OpenGraph {
            title: social_title.clone(),
            description: social_description.clone(),
            images: images.clone(),
            og_type: "profile",
        }),
        twitter: Some(TwitterCard {
            card: "summary_large_image",
            title: social_title,
            description: social_description,
            images,
        }),
        canonical: Some(canonical_url(&site.site_url, username)),
        robots: Some(Robots {
            index: true,
            follow: true,
        }),
    }
}

/// Generic metadata used when the profile could not be fetched.
pub fn fallback_metadata(site: &SiteConfig) -> PageMetadata {
    PageMetadata {
        title: format!("Professional Portfolio | {}", site.brand_name),
        description: format!(
            "Create your professional portfolio in two clicks with {}",
            site.brand_name
        ),
        keywords: Vec::new(),
        open_graph: None,
        twitter: None,
        canonical: None,
        robots: None,
    }
}

/// Site URL plus the trimmed username as one percent-encoded path segment.
fn canonical_url(site_url: &str, username: &str) -> String {
    let username = username.trim();
    match Url::parse(site_url) {
        Ok(mut url) if !url.cannot_be_a_base() => {
            if let Ok(mut segments) = url.path_segments_mut() {
                segments.pop_if_empty().push(username);
            }
            url.to_string()
        }
        _ => {
            let encoded: String = url::form_urlencoded::byte_serialize(username.as_bytes())
                .collect();
            format!("{}/{}", site_url.trim_end_matches('/'), encoded)
        }
    }
}

fn build_keywords(profile: &ProfileDocument, brand: &str) -> Vec<String> {
    let identity = [
        profile.first_name(),
        profile.last_name(),
        text(&profile.industry).unwrap_or_default(),
        "portfolio",
        "professional",
        "resume",
        "career",
    ];
    let skills = items(&profile.skills).unwrap_or_default();

    identity
        .into_iter()
        .chain(skills.iter().map(String::as_str))
        .map(str::to_string)
        .chain(std::iter::once(brand.to_lowercase()))
        .filter(|k| !k.is_empty())
        .collect()
}
