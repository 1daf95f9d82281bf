//! View-model for a portfolio page: every string the renderer prints, already
//! resolved against fallbacks and formatted.

use chrono::{DateTime, Datelike, Utc};

use crate::config::SiteConfig;
use crate::models::profile::{items, text, Education, JobExperience, Language, ProfileDocument};
use crate::page::format::{
    about_text, education_tenure, hero_subtitle, initials, local_clock, location_line,
    position_tenure, proficiency_percent, proxied_image_url, safe_href,
};
use crate::page::sections::{nav_links, NavLink, SectionVisibility};
use crate::seo::{build_metadata, build_profile_page_ld, to_script_json, PageMetadata};

#[derive(Debug, Clone, PartialEq)]
pub enum Avatar {
    Image { src: String, alt: String },
    Initials(String),
}

#[derive(Debug, Clone)]
pub struct JobView {
    pub company: Option<String>,
    pub employment_type: Option<String>,
    pub positions: Vec<PositionView>,
}

#[derive(Debug, Clone)]
pub struct PositionView {
    pub title: Option<String>,
    pub tenure: Option<String>,
    pub location: Option<String>,
    pub description: Option<String>,
    pub skills: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct EducationView {
    pub school: Option<String>,
    pub logo: Option<String>,
    pub subject: Option<String>,
    pub tenure: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone)]
pub struct LanguageView {
    pub name: Option<String>,
    pub proficiency: Option<String>,
    /// Bar width; `None` draws no bar.
    pub percent: Option<u8>,
}

/// Shared shape for the richer, list-style sections.
#[derive(Debug, Clone, Default)]
pub struct CardView {
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub meta: Option<String>,
    pub body: Option<String>,
    pub href: Option<String>,
    pub image: Option<String>,
    pub tags: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct LinkView {
    pub label: String,
    pub href: String,
}

#[derive(Debug, Clone, Default)]
pub struct ContactView {
    pub email: Option<String>,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub social: Vec<LinkView>,
}

#[derive(Debug, Clone)]
pub struct PortfolioView {
    pub display_name: String,
    pub subtitle: String,
    pub about: String,
    pub avatar: Avatar,
    pub location: Option<String>,
    pub clock: String,
    pub industry: Option<String>,
    pub career: Vec<JobView>,
    pub education: Vec<EducationView>,
    pub skills: Vec<String>,
    pub languages: Vec<LanguageView>,
    pub projects: Vec<CardView>,
    pub research: Vec<CardView>,
    pub services: Vec<CardView>,
    pub clients: Vec<CardView>,
    pub articles: Vec<CardView>,
    pub gallery: Vec<CardView>,
    pub certifications: Vec<CardView>,
    pub awards: Vec<CardView>,
    pub contact: ContactView,
    pub visibility: SectionVisibility,
    pub nav: Vec<NavLink>,
    pub metadata: PageMetadata,
    pub json_ld: String,
    pub footer_year: i32,
    pub brand_url: String,
}

fn owned(value: &Option<String>) -> Option<String> {
    text(value).map(str::to_string)
}

fn list<T, U>(value: &Option<Vec<T>>, f: impl Fn(&T) -> U) -> Vec<U> {
    items(value).unwrap_or_default().iter().map(f).collect()
}

impl PortfolioView {
    pub fn build(
        profile: &ProfileDocument,
        username: &str,
        site: &SiteConfig,
        now: DateTime<Utc>,
    ) -> Self {
        let display_name = profile.full_name();
        let visibility = SectionVisibility::from_profile(profile);

        let avatar = match text(&profile.image) {
            Some(src) => Avatar::Image {
                src: proxied_image_url(src),
                alt: display_name.clone(),
            },
            None => Avatar::Initials(initials(profile)),
        };

        PortfolioView {
            subtitle: hero_subtitle(profile),
            about: about_text(profile),
            avatar,
            location: location_line(profile),
            clock: local_clock(now, profile.country_code()),
            industry: owned(&profile.industry),
            career: list(&profile.job_experience, job_view),
            education: list(&profile.education, education_view),
            skills: list(&profile.skills, |s| s.clone()),
            languages: list(&profile.languages, language_view),
            projects: list(&profile.projects, |p| CardView {
                title: owned(&p.name),
                body: owned(&p.description),
                href: safe_href(text(&p.url)),
                image: text(&p.image).map(proxied_image_url),
                tags: items(&p.technologies).unwrap_or_default().to_vec(),
                ..Default::default()
            }),
            research: list(&profile.research_papers, |r| CardView {
                title: owned(&r.title),
                subtitle: owned(&r.publisher),
                meta: owned(&r.published_date),
                body: owned(&r.description),
                href: safe_href(text(&r.url)),
                ..Default::default()
            }),
            services: list(&profile.services, |s| CardView {
                title: owned(&s.title),
                meta: owned(&s.price),
                body: owned(&s.description),
                ..Default::default()
            }),
            clients: list(&profile.clients, |c| CardView {
                title: owned(&c.name),
                body: owned(&c.testimonial),
                href: safe_href(text(&c.url)),
                image: text(&c.logo).map(proxied_image_url),
                ..Default::default()
            }),
            articles: list(&profile.articles, |a| CardView {
                title: owned(&a.title),
                meta: owned(&a.published_at),
                body: owned(&a.description),
                href: safe_href(text(&a.url)),
                ..Default::default()
            }),
            gallery: list(&profile.gallery, |g| CardView {
                body: owned(&g.caption),
                image: text(&g.image_url).map(proxied_image_url),
                ..Default::default()
            }),
            certifications: list(&profile.certifications, |c| CardView {
                title: owned(&c.name),
                subtitle: owned(&c.issuer),
                meta: owned(&c.issue_date),
                href: safe_href(text(&c.url)),
                ..Default::default()
            }),
            awards: list(&profile.awards, |a| CardView {
                title: owned(&a.title),
                subtitle: owned(&a.issuer),
                meta: owned(&a.date),
                body: owned(&a.description),
                ..Default::default()
            }),
            contact: contact_view(profile),
            nav: nav_links(&visibility),
            visibility,
            metadata: build_metadata(profile, username, site),
            json_ld: to_script_json(&build_profile_page_ld(profile, site)),
            footer_year: now.year(),
            brand_url: site.brand_url.clone(),
            display_name,
        }
    }
}

fn job_view(job: &JobExperience) -> JobView {
    JobView {
        company: job.company.as_ref().and_then(|c| owned(&c.name)),
        employment_type: owned(&job.employment_type),
        positions: list(&job.positions, |p| PositionView {
            title: owned(&p.function),
            tenure: p.tenure.as_ref().map(position_tenure),
            location: owned(&p.location),
            description: owned(&p.description),
            skills: items(&p.skills).unwrap_or_default().to_vec(),
        }),
    }
}

fn education_view(edu: &Education) -> EducationView {
    let company = edu.company.as_ref();
    EducationView {
        school: company.and_then(|c| owned(&c.name)),
        logo: company
            .and_then(|c| text(&c.image_url))
            .map(proxied_image_url),
        subject: owned(&edu.subject),
        tenure: edu
            .tenure
            .as_ref()
            .map(education_tenure)
            .filter(|t| !t.is_empty()),
        description: owned(&edu.course_description),
    }
}

fn language_view(lang: &Language) -> LanguageView {
    LanguageView {
        name: owned(&lang.language),
        proficiency: owned(&lang.proficiency),
        percent: proficiency_percent(lang.proficiency.as_deref()),
    }
}

fn contact_view(profile: &ProfileDocument) -> ContactView {
    let social: Vec<LinkView> = list(&profile.social_links, |l| {
        safe_href(text(&l.url)).map(|href| LinkView {
            label: text(&l.platform).unwrap_or(&href).to_string(),
            href,
        })
    })
    .into_iter()
    .flatten()
    .collect();

    match &profile.contact {
        Some(c) => ContactView {
            email: owned(&c.email),
            phone: owned(&c.phone),
            website: safe_href(text(&c.website)),
            social,
        },
        None => ContactView {
            social,
            ..Default::default()
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::profile::{Organization, Position, SocialLink, Tenure};
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 14, 15, 9, 26).unwrap()
    }

    #[test]
    fn test_avatar_initials_without_image() {
        let profile = ProfileDocument {
            first_name: Some("Linus".into()),
            last_name: Some("Torvalds".into()),
            ..Default::default()
        };
        let view = PortfolioView::build(&profile, "linus", &SiteConfig::default(), now());
        assert_eq!(view.avatar, Avatar::Initials("LT".into()));
        assert_eq!(view.footer_year, 2025);
        assert_eq!(view.clock, "15:09 local time");
    }

    #[test]
    fn test_avatar_image_is_proxied() {
        let profile = ProfileDocument {
            first_name: Some("Linus".into()),
            image: Some("https://media.licdn.com/l.jpg".into()),
            ..Default::default()
        };
        let view = PortfolioView::build(&profile, "linus", &SiteConfig::default(), now());
        match view.avatar {
            Avatar::Image { src, alt } => {
                assert!(src.starts_with("/api/proxy-image?url=https%3A%2F%2Fmedia.licdn.com"));
                assert_eq!(alt, "Linus");
            }
            other => panic!("expected image avatar, got {other:?}"),
        }
    }

    #[test]
    fn test_career_positions_formatted() {
        let profile: ProfileDocument = serde_json::from_str(
            r#"{"jobExperience":[{"company":{"name":"Acme"},"employmentType":"Full-time",
                "positions":[{"function":"Engineer","tenure":{"start":{"month":2,"year":2020}},
                "skills":["Rust"]},{"function":"Intern"}]}]}"#,
        )
        .unwrap();
        let view = PortfolioView::build(&profile, "u", &SiteConfig::default(), now());
        let job = &view.career[0];
        assert_eq!(job.company.as_deref(), Some("Acme"));
        assert_eq!(job.positions[0].tenure.as_deref(), Some("Feb/2020 - Present"));
        assert_eq!(job.positions[0].skills, vec!["Rust"]);
        assert!(job.positions[1].tenure.is_none());
    }

    #[test]
    fn test_education_empty_tenure_hidden() {
        let profile = ProfileDocument {
            education: Some(vec![Education {
                company: Some(Organization {
                    name: Some("MIT".into()),
                    image_url: Some("https://media.licdn.com/mit.png".into()),
                    url: None,
                }),
                tenure: Some(Tenure::default()),
                ..Default::default()
            }]),
            ..Default::default()
        };
        let view = PortfolioView::build(&profile, "u", &SiteConfig::default(), now());
        assert!(view.education[0].tenure.is_none());
        assert!(view.education[0].logo.is_some());
    }

    #[test]
    fn test_language_indicator() {
        let profile = ProfileDocument {
            languages: Some(vec![
                Language {
                    language: Some("Hindi".into()),
                    proficiency: Some("Native".into()),
                },
                Language {
                    language: Some("French".into()),
                    proficiency: None,
                },
            ]),
            ..Default::default()
        };
        let view = PortfolioView::build(&profile, "u", &SiteConfig::default(), now());
        assert_eq!(view.languages[0].percent, Some(100));
        assert_eq!(view.languages[1].percent, None);
    }

    #[test]
    fn test_social_links_drop_unsafe_urls() {
        let profile = ProfileDocument {
            social_links: Some(vec![
                SocialLink {
                    platform: Some("GitHub".into()),
                    url: Some("https://github.com/u".into()),
                },
                SocialLink {
                    platform: Some("Evil".into()),
                    url: Some("javascript:alert(1)".into()),
                },
                SocialLink {
                    platform: None,
                    url: Some("https://example.com".into()),
                },
            ]),
            ..Default::default()
        };
        let view = PortfolioView::build(&profile, "u", &SiteConfig::default(), now());
        let labels: Vec<_> = view.contact.social.iter().map(|l| l.label.as_str()).collect();
        assert_eq!(labels, vec!["GitHub", "https://example.com"]);
    }

    #[test]
    fn test_position_without_title_still_listed() {
        let profile = ProfileDocument {
            job_experience: Some(vec![JobExperience {
                positions: Some(vec![Position::default()]),
                ..Default::default()
            }]),
            ..Default::default()
        };
        let view = PortfolioView::build(&profile, "u", &SiteConfig::default(), now());
        assert_eq!(view.career[0].positions.len(), 1);
        assert!(view.visibility.career);
    }

    #[test]
    fn test_richer_sections_mapped_to_cards() {
        let profile: ProfileDocument = serde_json::from_str(
            r#"{"firstName":"Grace","lastName":"Hopper",
            "projects":[{"name":"COBOL <v1>","description":"Tom & Jerry","url":"javascript:alert(1)",
                "image":"https://media.licdn.com/p.png","technologies":["Fortran"]},
                {"name":"Compiler","url":"https://example.com/a-0"}],
            "researchPapers":[{"title":"Paper","publisher":"ACM","publishedDate":"1952",
                "url":"https://doi.org/x"}],
            "services":[{"title":"Consulting","price":"$100"}],
            "clients":[{"name":"Navy","logo":"https://img.clerk.com/n.png","url":"https://navy.mil",
                "testimonial":"Great"}],
            "articles":[{"title":"Bugs","url":"http://example.com/bug","publishedAt":"1947-09-09"}],
            "gallery":[{"imageUrl":"https://media.licdn.com/g.jpg","caption":"Moth"},{"caption":"Lost"}],
            "certifications":[{"name":"Rear Admiral","issuer":"USN","issueDate":"1985","url":"ftp://x"}],
            "awards":[{"title":"Medal","issuer":"US","date":"2016"}]}"#,
        )
        .unwrap();
        let view = PortfolioView::build(&profile, "grace", &SiteConfig::default(), now());

        let labels: Vec<_> = view.nav.iter().map(|l| l.label).collect();
        assert_eq!(
            labels,
            vec![
                "About", "Projects", "Research", "Services", "Clients", "Articles", "Gallery",
                "Certifications", "Awards"
            ]
        );

        let project = &view.projects[0];
        assert!(project.href.is_none());
        assert_eq!(
            project.image.as_deref(),
            Some("/api/proxy-image?url=https%3A%2F%2Fmedia.licdn.com%2Fp.png")
        );
        assert_eq!(project.tags, vec!["Fortran"]);
        assert_eq!(view.projects[1].href.as_deref(), Some("https://example.com/a-0"));

        assert_eq!(view.research[0].subtitle.as_deref(), Some("ACM"));
        assert_eq!(view.services[0].meta.as_deref(), Some("$100"));
        assert_eq!(
            view.clients[0].image.as_deref(),
            Some("/api/proxy-image?url=https%3A%2F%2Fimg.clerk.com%2Fn.png")
        );
        assert_eq!(view.articles[0].href.as_deref(), Some("http://example.com/bug"));
        assert!(view.gallery[1].image.is_none());
        assert!(view.certifications[0].href.is_none());
        assert_eq!(view.awards[0].meta.as_deref(), Some("2016"));
    }
}
