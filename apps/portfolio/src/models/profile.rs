//! Profile document as served by the upstream profile API.
//!
//! Every field is optional and unknown keys are ignored: the contract is owned
//! upstream and this service only reads it.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProfileDocument {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub headline: Option<String>,
    pub image: Option<String>,
    pub industry: Option<String>,
    pub summary: Option<String>,
    pub location: Option<Location>,
    pub job_experience: Option<Vec<JobExperience>>,
    pub education: Option<Vec<Education>>,
    pub skills: Option<Vec<String>>,
    pub languages: Option<Vec<Language>>,
    pub projects: Option<Vec<Project>>,
    pub research_papers: Option<Vec<ResearchPaper>>,
    pub social_links: Option<Vec<SocialLink>>,
    pub services: Option<Vec<FreelanceService>>,
    pub clients: Option<Vec<Client>>,
    pub articles: Option<Vec<Article>>,
    pub gallery: Option<Vec<GalleryItem>>,
    pub certifications: Option<Vec<Certification>>,
    pub awards: Option<Vec<Award>>,
    pub contact: Option<Contact>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Location {
    pub address: Option<String>,
    pub country_code: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Organization {
    pub name: Option<String>,
    pub image_url: Option<String>,
    pub url: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct JobExperience {
    pub company: Option<Organization>,
    pub employment_type: Option<String>,
    pub positions: Option<Vec<Position>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Position {
    /// Job title; the upstream API calls it `function`.
    pub function: Option<String>,
    pub tenure: Option<Tenure>,
    pub location: Option<String>,
    pub description: Option<String>,
    pub skills: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Tenure {
    pub start: Option<MonthYear>,
    pub end: Option<MonthYear>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MonthYear {
    pub month: Option<LooseNumber>,
    pub year: Option<LooseNumber>,
}

/// A numeric field the upstream API sometimes encodes as a string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LooseNumber {
    Int(i64),
    Float(f64),
    Text(String),
}

impl LooseNumber {
    pub fn as_u32(&self) -> Option<u32> {
        match self {
            LooseNumber::Int(n) => u32::try_from(*n).ok(),
            LooseNumber::Float(f) if f.fract() == 0.0 && *f >= 0.0 && *f <= u32::MAX as f64 => {
                Some(*f as u32)
            }
            LooseNumber::Float(_) => None,
            LooseNumber::Text(s) => s.trim().parse().ok(),
        }
    }

    /// Display form: numbers as digits, strings verbatim. Empty strings and zero read as absent.
    pub fn display(&self) -> Option<String> {
        match self {
            LooseNumber::Int(0) => None,
            LooseNumber::Int(n) => Some(n.to_string()),
            LooseNumber::Float(f) if *f == 0.0 => None,
            LooseNumber::Float(f) if f.fract() == 0.0 => Some(format!("{}", *f as i64)),
            LooseNumber::Float(f) => Some(f.to_string()),
            LooseNumber::Text(s) if s.is_empty() => None,
            LooseNumber::Text(s) => Some(s.clone()),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Education {
    pub company: Option<Organization>,
    pub subject: Option<String>,
    pub tenure: Option<Tenure>,
    pub course_description: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Language {
    pub language: Option<String>,
    pub proficiency: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Project {
    pub name: Option<String>,
    pub description: Option<String>,
    pub url: Option<String>,
    pub image: Option<String>,
    pub technologies: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ResearchPaper {
    pub title: Option<String>,
    pub publisher: Option<String>,
    pub published_date: Option<String>,
    pub url: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SocialLink {
    pub platform: Option<String>,
    pub url: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FreelanceService {
    pub title: Option<String>,
    pub description: Option<String>,
    pub price: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Client {
    pub name: Option<String>,
    pub logo: Option<String>,
    pub url: Option<String>,
    pub testimonial: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Article {
    pub title: Option<String>,
    pub url: Option<String>,
    pub published_at: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GalleryItem {
    pub image_url: Option<String>,
    pub caption: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Certification {
    pub name: Option<String>,
    pub issuer: Option<String>,
    pub issue_date: Option<String>,
    pub url: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Award {
    pub title: Option<String>,
    pub issuer: Option<String>,
    pub date: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Contact {
    pub email: Option<String>,
    pub phone: Option<String>,
    pub website: Option<String>,
}

/// Treats an empty string the same as an absent one.
pub fn text(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

/// Borrows a collection only when it has at least one element.
pub fn items<T>(value: &Option<Vec<T>>) -> Option<&[T]> {
    value.as_deref().filter(|v| !v.is_empty())
}

impl ProfileDocument {
    pub fn first_name(&self) -> &str {
        text(&self.first_name).unwrap_or_default()
    }

    pub fn last_name(&self) -> &str {
        text(&self.last_name).unwrap_or_default()
    }

    /// "First Last", trimmed when either half is missing.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name(), self.last_name())
            .trim()
            .to_string()
    }

    pub fn address(&self) -> Option<&str> {
        self.location.as_ref().and_then(|l| text(&l.address))
    }

    pub fn country_code(&self) -> Option<&str> {
        self.location.as_ref().and_then(|l| text(&l.country_code))
    }

    /// Name of the first listed employer, used as the current one.
    pub fn current_employer(&self) -> Option<&str> {
        items(&self.job_experience)?
            .first()
            .and_then(|job| job.company.as_ref())
            .and_then(|c| text(&c.name))
    }
}
