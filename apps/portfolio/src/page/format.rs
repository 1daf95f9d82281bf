//! Fallback text and display formatting for profile fields.

use chrono::{DateTime, Utc};

use crate::models::profile::{text, MonthYear, ProfileDocument, Tenure};

pub const PROXY_IMAGE_PATH: &str = "/api/proxy-image";

const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Hero subtitle: the headline, else "{industry} professional", else "professional".
pub fn hero_subtitle(profile: &ProfileDocument) -> String {
    if let Some(headline) = text(&profile.headline) {
        return headline.to_string();
    }
    match text(&profile.industry) {
        Some(industry) => format!("{industry} professional"),
        None => "professional".to_string(),
    }
}

/// About paragraph: the summary, else a generic paragraph naming the industry.
pub fn about_text(profile: &ProfileDocument) -> String {
    if let Some(summary) = text(&profile.summary) {
        return summary.to_string();
    }
    let industry = text(&profile.industry).unwrap_or("professional");
    format!(
        "I'm a {industry} passionate about building impactful products that leverage \
         technology to make a difference. I often share my work to contribute to the \
         community. In addition to my development work, I'm always exploring new ideas, \
         particularly in areas like machine learning and robotics."
    )
}

/// First character of the first and last name, for the avatar placeholder.
pub fn initials(profile: &ProfileDocument) -> String {
    profile
        .first_name()
        .chars()
        .next()
        .into_iter()
        .chain(profile.last_name().chars().next())
        .collect()
}

/// "Address, CC", or just the address. Nothing without an address.
pub fn location_line(profile: &ProfileDocument) -> Option<String> {
    let address = profile.address()?;
    Some(match profile.country_code() {
        Some(cc) => format!("{address}, {cc}"),
        None => address.to_string(),
    })
}

/// "HH:MM {CC} time", with "local" standing in for a missing country code.
pub fn local_clock(now: DateTime<Utc>, country_code: Option<&str>) -> String {
    format!(
        "{} {} time",
        now.format("%H:%M"),
        country_code.unwrap_or("local")
    )
}

pub fn short_month_name(month: u32) -> Option<&'static str> {
    month
        .checked_sub(1)
        .and_then(|i| MONTHS.get(i as usize))
        .copied()
}

/// "Mon/YYYY" when both month and year are present, "YYYY" when the month is unusable.
fn month_year(date: Option<&MonthYear>) -> Option<String> {
    let date = date?;
    let month = date.month.as_ref().and_then(|m| m.as_u32()).filter(|m| *m > 0)?;
    let year = date.year.as_ref().and_then(|y| y.display())?;
    Some(match short_month_name(month) {
        Some(name) => format!("{name}/{year}"),
        None => year,
    })
}

/// Position date range, e.g. "Mar/2019 - Nov/2021" or "Mar/2019 - Present".
pub fn position_tenure(tenure: &Tenure) -> String {
    let start = month_year(tenure.start.as_ref()).unwrap_or_default();
    let end = month_year(tenure.end.as_ref()).unwrap_or_else(|| "Present".to_string());
    format!("{start} - {end}").trim().to_string()
}

/// Education year range. Empty when neither year is known.
pub fn education_tenure(tenure: &Tenure) -> String {
    let start = tenure
        .start
        .as_ref()
        .and_then(|d| d.year.as_ref())
        .and_then(|y| y.display());
    let end = tenure
        .end
        .as_ref()
        .and_then(|d| d.year.as_ref())
        .and_then(|y| y.display());

    match (start, end) {
        (Some(s), Some(e)) => format!("{s} - {e}"),
        (Some(s), None) => format!("{s} - Present"),
        (None, Some(e)) => format!("- {e}"),
        (None, None) => String::new(),
    }
}

/// Width of the proficiency bar. `None` means no indicator is drawn.
pub fn proficiency_percent(proficiency: Option<&str>) -> Option<u8> {
    let label = proficiency.filter(|p| !p.is_empty())?;
    Some(match label {
        "Native" => 100,
        "Fluent" => 90,
        "Professional" => 75,
        "Intermediate" => 50,
        _ => 25,
    })
}

/// Routes an external image through the service's own image proxy.
pub fn proxied_image_url(url: &str) -> String {
    let encoded: String = url::form_urlencoded::byte_serialize(url.as_bytes()).collect();
    format!("{PROXY_IMAGE_PATH}?url={encoded}")
}

/// Accepts only web and mail links from profile data; anything else is dropped.
pub fn safe_href(url: Option<&str>) -> Option<String> {
    let url = url?.trim();
    let lower = url.to_ascii_lowercase();
    ["https://", "http://", "mailto:"]
        .iter()
        .any(|scheme| lower.starts_with(scheme))
        .then(|| url.to_string())
}
