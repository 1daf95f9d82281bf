//! schema.org `ProfilePage` JSON-LD for search engines.
//!
//! Absent profile fields are left out of the object entirely rather than
//! emitted as `null`.

use serde_json::{json, Map, Value};

use crate::config::SiteConfig;
use crate::models::profile::{items, text, ProfileDocument};

const PROVIDER_DESCRIPTION: &str = "Build your professional portfolio in two clicks";

pub fn build_profile_page_ld(profile: &ProfileDocument, site: &SiteConfig) -> Value {
    let mut person = Map::new();
    person.insert("@type".into(), json!("Person"));
    person.insert("name".into(), json!(profile.full_name()));
    insert_opt(&mut person, "headline", text(&profile.headline));
    insert_opt(&mut person, "image", text(&profile.image));
    insert_opt(&mut person, "jobTitle", text(&profile.headline));
    insert_opt(&mut person, "worksFor", profile.current_employer());
    insert_opt(&mut person, "description", text(&profile.summary));

    if let Some(languages) = items(&profile.languages) {
        let names: Vec<&str> = languages
            .iter()
            .filter_map(|l| text(&l.language))
            .collect();
        person.insert("knowsLanguage".into(), json!(names));
    }
    if let Some(skills) = items(&profile.skills) {
        person.insert("knowsAbout".into(), json!(skills));
    }
    if let Some(education) = items(&profile.education) {
        let schools: Vec<&str> = education
            .iter()
            .filter_map(|e| e.company.as_ref().and_then(|c| text(&c.name)))
            .collect();
        person.insert("alumniOf".into(), json!(schools));
    }

    let mut address = Map::new();
    address.insert("@type".into(), json!("PostalAddress"));
    insert_opt(&mut address, "addressLocality", profile.address());
    insert_opt(&mut address, "addressCountry", profile.country_code());
    person.insert("address".into(), Value::Object(address));

    json!({
        "@context": "https://schema.org",
        "@type": "ProfilePage",
        "mainEntity": Value::Object(person),
        "provider": {
            "@type": "Organization",
            "name": site.brand_name,
            "description": PROVIDER_DESCRIPTION,
        }
    })
}

fn insert_opt(map: &mut Map<String, Value>, key: &str, value: Option<&str>) {
    if let Some(v) = value {
        map.insert(key.to_string(), json!(v));
    }
}

/// Serializes JSON-LD for a `<script>` body. `<`, `>` and `&` are written as
/// unicode escapes so user text cannot close the script element.
pub fn to_script_json(value: &Value) -> String {
    let raw = value.to_string();
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '<' => out.push_str("\\u003c"),
            '>' => out.push_str("\\u003e"),
            '&' => out.push_str("\\u0026"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::profile::{Education, JobExperience, Language, Organization};

    #[test]
    fn test_minimal_profile_omits_absent_fields() {
        let ld = build_profile_page_ld(&ProfileDocument::default(), &SiteConfig::default());
        let person = &ld["mainEntity"];
        assert_eq!(ld["@type"], "ProfilePage");
        assert_eq!(person["@type"], "Person");
        assert_eq!(person["name"], "");
        assert!(person.get("headline").is_none());
        assert!(person.get("knowsAbout").is_none());
        assert_eq!(person["address"], json!({"@type": "PostalAddress"}));
        assert_eq!(ld["provider"]["name"], "Zapfolio");
    }

    #[test]
    fn test_full_profile_fields() {
        let profile = ProfileDocument {
            first_name: Some("Grace".into()),
            last_name: Some("Hopper".into()),
            headline: Some("Rear Admiral".into()),
            summary: Some("Compiler pioneer".into()),
            skills: Some(vec!["COBOL".into()]),
            languages: Some(vec![Language {
                language: Some("English".into()),
                proficiency: Some("Native".into()),
            }]),
            job_experience: Some(vec![JobExperience {
                company: Some(Organization {
                    name: Some("US Navy".into()),
                    ..Default::default()
                }),
                ..Default::default()
            }]),
            education: Some(vec![Education {
                company: Some(Organization {
                    name: Some("Yale".into()),
                    ..Default::default()
                }),
                ..Default::default()
            }]),
            ..Default::default()
        };
        let ld = build_profile_page_ld(&profile, &SiteConfig::default());
        let person = &ld["mainEntity"];
        assert_eq!(person["name"], "Grace Hopper");
        assert_eq!(person["jobTitle"], "Rear Admiral");
        assert_eq!(person["worksFor"], "US Navy");
        assert_eq!(person["description"], "Compiler pioneer");
        assert_eq!(person["knowsLanguage"], json!(["English"]));
        assert_eq!(person["knowsAbout"], json!(["COBOL"]));
        assert_eq!(person["alumniOf"], json!(["Yale"]));
    }

    #[test]
    fn test_script_json_cannot_close_script() {
        let profile = ProfileDocument {
            summary: Some("</script><script>alert(1)</script>".into()),
            ..Default::default()
        };
        let out = to_script_json(&build_profile_page_ld(&profile, &SiteConfig::default()));
        assert!(!out.contains("</script"));
        let round: Value = serde_json::from_str(&out).unwrap();
        assert_eq!(
            round["mainEntity"]["description"],
            "</script><script>alert(1)</script>"
        );
    }
}
