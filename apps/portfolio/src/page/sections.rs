use serde::Serialize;

use crate::models::profile::{items, text, Contact, ProfileDocument};
use crate::page::format::safe_href;

/// Page sections in render order. About is unconditional.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Section {
    About,
    Career,
    Education,
    Skills,
    Projects,
    Research,
    Services,
    Clients,
    Articles,
    Gallery,
    Certifications,
    Awards,
    Contact,
}

impl Section {
    /// Fragment id used for in-page anchors.
    pub fn anchor(&self) -> &'static str {
        match self {
            Section::About => "about",
            Section::Career => "career",
            Section::Education => "education",
            Section::Skills => "skills",
            Section::Projects => "projects",
            Section::Research => "research",
            Section::Services => "services",
            Section::Clients => "clients",
            Section::Articles => "articles",
            Section::Gallery => "gallery",
            Section::Certifications => "certifications",
            Section::Awards => "awards",
            Section::Contact => "contact",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Section::About => "About",
            Section::Career => "Career",
            Section::Education => "Education",
            Section::Skills => "Skills",
            Section::Projects => "Projects",
            Section::Research => "Research",
            Section::Services => "Services",
            Section::Clients => "Clients",
            Section::Articles => "Articles",
            Section::Gallery => "Gallery",
            Section::Certifications => "Certifications",
            Section::Awards => "Awards",
            Section::Contact => "Contact",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SectionVisibility {
    pub career: bool,
    pub education: bool,
    pub skills: bool,
    pub languages: bool,
    pub projects: bool,
    pub research: bool,
    pub services: bool,
    pub clients: bool,
    pub articles: bool,
    pub gallery: bool,
    pub certifications: bool,
    pub awards: bool,
    pub social: bool,
    pub contact: bool,
}

impl SectionVisibility {
    pub fn from_profile(profile: &ProfileDocument) -> Self {
        Self {
            career: items(&profile.job_experience).is_some(),
            education: items(&profile.education).is_some(),
            skills: items(&profile.skills).is_some(),
            languages: items(&profile.languages).is_some(),
            projects: items(&profile.projects).is_some(),
            research: items(&profile.research_papers).is_some(),
            services: items(&profile.services).is_some(),
            clients: items(&profile.clients).is_some(),
            articles: items(&profile.articles).is_some(),
            gallery: items(&profile.gallery).is_some(),
            certifications: items(&profile.certifications).is_some(),
            awards: items(&profile.awards).is_some(),
            social: items(&profile.social_links)
                .is_some_and(|links| links.iter().any(|l| safe_href(text(&l.url)).is_some())),
            contact: profile.contact.as_ref().is_some_and(has_renderable_contact),
        }
    }

    /// Skills and languages share one section.
    pub fn skills_block(&self) -> bool {
        self.skills || self.languages
    }

    pub fn is_visible(&self, section: Section) -> bool {
        match section {
            Section::About => true,
            Section::Career => self.career,
            Section::Education => self.education,
            Section::Skills => self.skills_block(),
            Section::Projects => self.projects,
            Section::Research => self.research,
            Section::Services => self.services,
            Section::Clients => self.clients,
            Section::Articles => self.articles,
            Section::Gallery => self.gallery,
            Section::Certifications => self.certifications,
            Section::Awards => self.awards,
            // Social links render inside the contact block.
            Section::Contact => self.contact || self.social,
        }
    }

    /// Visible sections in page order, About first.
    pub fn visible_sections(&self) -> Vec<Section> {
        ALL_SECTIONS
            .iter()
            .copied()
            .filter(|s| self.is_visible(*s))
            .collect()
    }
}

/// Websites are shown only when their link survives `safe_href`.
fn has_renderable_contact(contact: &Contact) -> bool {
    text(&contact.email).is_some()
        || text(&contact.phone).is_some()
        || safe_href(text(&contact.website)).is_some()
}

const ALL_SECTIONS: [Section; 13] = [
    Section::About,
    Section::Career,
    Section::Education,
    Section::Skills,
    Section::Projects,
    Section::Research,
    Section::Services,
    Section::Clients,
    Section::Articles,
    Section::Gallery,
    Section::Certifications,
    Section::Awards,
    Section::Contact,
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavLink {
    pub href: String,
    pub label: &'static str,
}

pub fn nav_links(visibility: &SectionVisibility) -> Vec<NavLink> {
    visibility
        .visible_sections()
        .into_iter()
        .map(|s| NavLink {
            href: format!("#{}", s.anchor()),
            label: s.label(),
        })
        .collect()
}
