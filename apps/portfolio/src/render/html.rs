//! HTML document rendering for portfolio and not-found pages.
//!
//! All profile text passes through `Escaped`; the JSON-LD body is already
//! script-safe from `seo::to_script_json`.

use std::fmt::{self, Write};

use crate::config::SiteConfig;
use crate::page::view::{Avatar, CardView, PortfolioView};
use crate::page::Section;
use crate::render::escape::Escaped;
use crate::render::style::STYLESHEET;
use crate::seo::{fallback_metadata, PageMetadata};

pub fn render_page(view: &PortfolioView) -> Result<String, fmt::Error> {
    let mut out = String::with_capacity(16 * 1024);
    write_document_start(&mut out, &view.metadata)?;

    out.push_str("<main class=\"container\">\n");
    write_hero(&mut out, view)?;
    write_about(&mut out, view)?;

    for section in view.visibility.visible_sections() {
        match section {
            Section::About => {}
            Section::Career => write_career(&mut out, view)?,
            Section::Education => write_education(&mut out, view)?,
            Section::Skills => write_skills(&mut out, view)?,
            Section::Projects => write_cards(&mut out, section, &view.projects)?,
            Section::Research => write_cards(&mut out, section, &view.research)?,
            Section::Services => write_cards(&mut out, section, &view.services)?,
            Section::Clients => write_cards(&mut out, section, &view.clients)?,
            Section::Articles => write_cards(&mut out, section, &view.articles)?,
            Section::Gallery => write_gallery(&mut out, view)?,
            Section::Certifications => write_cards(&mut out, section, &view.certifications)?,
            Section::Awards => write_cards(&mut out, section, &view.awards)?,
            Section::Contact => write_contact(&mut out, view)?,
        }
    }

    out.push_str("<nav class=\"floating-nav\">");
    for link in &view.nav {
        write!(
            out,
            "<a href=\"{}\">{}</a>",
            Escaped(&link.href),
            Escaped(link.label)
        )?;
    }
    out.push_str("</nav>\n</main>\n");

    write!(
        out,
        "<footer><div class=\"container footer-row\"><span>&copy; {} {}</span>\
         <a href=\"{}\">Build Your Portfolio</a></div></footer>\n",
        view.footer_year,
        Escaped(&view.display_name),
        Escaped(&view.brand_url),
    )?;

    write!(
        out,
        "<script type=\"application/ld+json\">{}</script>\n",
        view.json_ld
    )?;
    out.push_str("</body>\n</html>\n");
    Ok(out)
}

/// 404 page carrying the generic fallback metadata.
pub fn render_not_found(site: &SiteConfig) -> Result<String, fmt::Error> {
    let mut out = String::new();
    write_document_start(&mut out, &fallback_metadata(site))?;
    write!(
        out,
        "<main class=\"container not-found\"><h1>Portfolio not found</h1>\
         <p>We couldn't find a portfolio for this address.</p>\
         <p><a href=\"{}\">Create your professional portfolio with {}</a></p></main>\n",
        Escaped(&site.brand_url),
        Escaped(&site.brand_name),
    )?;
    out.push_str("</body>\n</html>\n");
    Ok(out)
}

fn write_document_start(out: &mut String, meta: &PageMetadata) -> fmt::Result {
    out.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    out.push_str("<meta charset=\"utf-8\">\n");
    out.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    write_head_metadata(out, meta)?;
    write!(out, "<style>{STYLESHEET}</style>\n")?;
    out.push_str("</head>\n<body>\n");
    Ok(())
}

pub fn write_head_metadata(out: &mut String, meta: &PageMetadata) -> fmt::Result {
    writeln!(out, "<title>{}</title>", Escaped(&meta.title))?;
    write_meta(out, "name", "description", &meta.description)?;
    if !meta.keywords.is_empty() {
        write_meta(out, "name", "keywords", &meta.keywords.join(", "))?;
    }
    if let Some(canonical) = &meta.canonical {
        writeln!(out, "<link rel=\"canonical\" href=\"{}\">", Escaped(canonical))?;
    }
    if let Some(robots) = &meta.robots {
        write_meta(out, "name", "robots", &robots.directive())?;
    }
    if let Some(og) = &meta.open_graph {
        write_meta(out, "property", "og:title", &og.title)?;
        write_meta(out, "property", "og:description", &og.description)?;
        write_meta(out, "property", "og:type", og.og_type)?;
        for image in &og.images {
            write_meta(out, "property", "og:image", image)?;
        }
    }
    if let Some(tw) = &meta.twitter {
        write_meta(out, "name", "twitter:card", tw.card)?;
        write_meta(out, "name", "twitter:title", &tw.title)?;
        write_meta(out, "name", "twitter:description", &tw.description)?;
        for image in &tw.images {
            write_meta(out, "name", "twitter:image", image)?;
        }
    }
    Ok(())
}

fn write_meta(out: &mut String, attr: &str, key: &str, content: &str) -> fmt::Result {
    writeln!(
        out,
        "<meta {attr}=\"{}\" content=\"{}\">",
        Escaped(key),
        Escaped(content)
    )
}

fn write_hero(out: &mut String, view: &PortfolioView) -> fmt::Result {
    out.push_str("<section class=\"hero\">\n<div class=\"hero-text\">\n");
    writeln!(out, "<h1>Hi, I&#39;m {}</h1>", Escaped(&view.display_name))?;
    writeln!(out, "<p class=\"subtitle\">{}</p>", Escaped(&view.subtitle))?;

    out.push_str("<div class=\"badges\">");
    if let Some(location) = &view.location {
        write!(out, "<span class=\"badge location\">{}</span>", Escaped(location))?;
    }
    write!(out, "<span class=\"badge clock\">{}</span>", Escaped(&view.clock))?;
    if let Some(industry) = &view.industry {
        write!(out, "<span class=\"badge industry\">{}</span>", Escaped(industry))?;
    }
    out.push_str("</div>\n</div>\n");

    out.push_str("<div class=\"avatar\">");
    match &view.avatar {
        Avatar::Image { src, alt } => write!(
            out,
            "<img src=\"{}\" alt=\"{}\" width=\"160\" height=\"160\">",
            Escaped(src),
            Escaped(alt)
        )?,
        Avatar::Initials(initials) => write!(
            out,
            "<span class=\"initials\">{}</span>",
            Escaped(initials)
        )?,
    }
    out.push_str("</div>\n</section>\n");
    Ok(())
}

fn write_about(out: &mut String, view: &PortfolioView) -> fmt::Result {
    write!(
        out,
        "<section id=\"{}\">\n<h2>About</h2>\n<p class=\"prose\">{}</p>\n</section>\n",
        Section::About.anchor(),
        Escaped(&view.about)
    )
}

fn open_section(out: &mut String, section: Section) -> fmt::Result {
    write!(
        out,
        "<section id=\"{}\">\n<h2>{}</h2>\n",
        section.anchor(),
        section.label()
    )
}

fn write_tags(out: &mut String, class: &str, tags: &[String]) -> fmt::Result {
    if tags.is_empty() {
        return Ok(());
    }
    write!(out, "<div class=\"{class}\">")?;
    for tag in tags {
        write!(out, "<span class=\"tag\">{}</span>", Escaped(tag))?;
    }
    out.push_str("</div>");
    Ok(())
}

fn write_opt(out: &mut String, tag: &str, class: &str, value: Option<&String>) -> fmt::Result {
    match value {
        Some(v) => write!(out, "<{tag} class=\"{class}\">{}</{tag}>", Escaped(v)),
        None => Ok(()),
    }
}

fn write_career(out: &mut String, view: &PortfolioView) -> fmt::Result {
    open_section(out, Section::Career)?;
    out.push_str("<p class=\"lead\">Get to know how I started my career</p>\n");
    for job in &view.career {
        out.push_str("<article class=\"card job\">");
        write_opt(out, "h3", "company", job.company.as_ref())?;
        write_opt(out, "p", "employment-type", job.employment_type.as_ref())?;
        for position in &job.positions {
            out.push_str("<div class=\"position\"><div class=\"position-head\">");
            write_opt(out, "h4", "role", position.title.as_ref())?;
            write_opt(out, "span", "tenure", position.tenure.as_ref())?;
            out.push_str("</div>");
            write_opt(out, "p", "position-location", position.location.as_ref())?;
            write_opt(out, "p", "description", position.description.as_ref())?;
            write_tags(out, "tags pills", &position.skills)?;
            out.push_str("</div>");
        }
        out.push_str("</article>\n");
    }
    out.push_str("</section>\n");
    Ok(())
}

fn write_education(out: &mut String, view: &PortfolioView) -> fmt::Result {
    open_section(out, Section::Education)?;
    out.push_str("<div class=\"grid\">\n");
    for edu in &view.education {
        out.push_str("<article class=\"card school\"><div class=\"logo\">");
        match &edu.logo {
            Some(logo) => write!(
                out,
                "<img src=\"{}\" alt=\"{}\" width=\"48\" height=\"48\">",
                Escaped(logo),
                Escaped(edu.school.as_deref().unwrap_or_default())
            )?,
            None => out.push_str("<span class=\"logo-placeholder\">&#127891;</span>"),
        }
        out.push_str("</div><div>");
        write_opt(out, "h3", "school", edu.school.as_ref())?;
        write_opt(out, "p", "subject", edu.subject.as_ref())?;
        write_opt(out, "p", "tenure", edu.tenure.as_ref())?;
        write_opt(out, "p", "description", edu.description.as_ref())?;
        out.push_str("</div></article>\n");
    }
    out.push_str("</div>\n</section>\n");
    Ok(())
}

fn write_skills(out: &mut String, view: &PortfolioView) -> fmt::Result {
    write!(
        out,
        "<section id=\"{}\">\n<div class=\"grid\">\n",
        Section::Skills.anchor()
    )?;
    if view.visibility.skills {
        out.push_str("<div><h2>Skills</h2>");
        write_tags(out, "tags skills", &view.skills)?;
        out.push_str("</div>\n");
    }
    if view.visibility.languages {
        out.push_str("<div><h2>Languages</h2>");
        for lang in &view.languages {
            out.push_str("<div class=\"card language\"><div class=\"language-head\">");
            write_opt(out, "span", "language-name", lang.name.as_ref())?;
            write_opt(out, "span", "proficiency", lang.proficiency.as_ref())?;
            out.push_str("</div>");
            if let Some(percent) = lang.percent {
                write!(
                    out,
                    "<div class=\"bar\"><div class=\"bar-fill\" style=\"width: {percent}%\"></div></div>"
                )?;
            }
            out.push_str("</div>");
        }
        out.push_str("</div>\n");
    }
    out.push_str("</div>\n</section>\n");
    Ok(())
}

fn write_cards(out: &mut String, section: Section, cards: &[CardView]) -> fmt::Result {
    open_section(out, section)?;
    out.push_str("<div class=\"grid\">\n");
    for card in cards {
        out.push_str("<article class=\"card\">");
        if let Some(image) = &card.image {
            write!(
                out,
                "<img class=\"card-image\" src=\"{}\" alt=\"{}\" loading=\"lazy\">",
                Escaped(image),
                Escaped(card.title.as_deref().unwrap_or_default())
            )?;
        }
        match (&card.title, &card.href) {
            (Some(title), Some(href)) => write!(
                out,
                "<h3><a href=\"{}\" rel=\"noopener\" target=\"_blank\">{}</a></h3>",
                Escaped(href),
                Escaped(title)
            )?,
            (Some(title), None) => write!(out, "<h3>{}</h3>", Escaped(title))?,
            (None, _) => {}
        }
        write_opt(out, "p", "card-subtitle", card.subtitle.as_ref())?;
        write_opt(out, "p", "card-meta", card.meta.as_ref())?;
        write_opt(out, "p", "card-body", card.body.as_ref())?;
        write_tags(out, "tags pills", &card.tags)?;
        out.push_str("</article>\n");
    }
    out.push_str("</div>\n</section>\n");
    Ok(())
}

fn write_gallery(out: &mut String, view: &PortfolioView) -> fmt::Result {
    open_section(out, Section::Gallery)?;
    out.push_str("<div class=\"gallery\">\n");
    for item in view.gallery.iter().filter(|g| g.image.is_some()) {
        let caption = item.body.as_deref().unwrap_or_default();
        write!(
            out,
            "<figure><img src=\"{}\" alt=\"{}\" loading=\"lazy\">",
            Escaped(item.image.as_deref().unwrap_or_default()),
            Escaped(caption)
        )?;
        if !caption.is_empty() {
            write!(out, "<figcaption>{}</figcaption>", Escaped(caption))?;
        }
        out.push_str("</figure>\n");
    }
    out.push_str("</div>\n</section>\n");
    Ok(())
}

fn write_contact(out: &mut String, view: &PortfolioView) -> fmt::Result {
    let contact = &view.contact;
    open_section(out, Section::Contact)?;
    out.push_str("<ul class=\"contact\">");
    if let Some(email) = &contact.email {
        write!(
            out,
            "<li><a href=\"mailto:{}\">{}</a></li>",
            Escaped(email),
            Escaped(email)
        )?;
    }
    if let Some(phone) = &contact.phone {
        write!(out, "<li>{}</li>", Escaped(phone))?;
    }
    if let Some(website) = &contact.website {
        write!(
            out,
            "<li><a href=\"{}\" rel=\"noopener\">{}</a></li>",
            Escaped(website),
            Escaped(website)
        )?;
    }
    out.push_str("</ul>");
    write!(out, "<div class=\"social\">")?;
    for link in &contact.social {
        write!(
            out,
            "<a href=\"{}\" rel=\"me noopener\" target=\"_blank\">{}</a>",
            Escaped(&link.href),
            Escaped(&link.label)
        )?;
    }
    out.push_str("</div>\n</section>\n");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::profile::{Language, Location, ProfileDocument, SocialLink};
    use chrono::{TimeZone, Utc};

    fn render(profile: &ProfileDocument) -> String {
        let now = Utc.with_ymd_and_hms(2025, 1, 2, 3, 4, 5).unwrap();
        let view = PortfolioView::build(profile, "someone", &SiteConfig::default(), now);
        render_page(&view).unwrap()
    }

    #[test]
    fn test_bare_profile_renders_about_only() {
        let html = render(&ProfileDocument {
            first_name: Some("Ada".into()),
            ..Default::default()
        });
        assert!(html.contains("<section id=\"about\">"));
        assert!(!html.contains("id=\"career\""));
        assert!(!html.contains("id=\"education\""));
        assert!(!html.contains("id=\"skills\""));
        assert!(html.contains("<nav class=\"floating-nav\"><a href=\"#about\">About</a></nav>"));
    }

    #[test]
    fn test_head_contains_social_tags_and_json_ld() {
        let html = render(&ProfileDocument {
            first_name: Some("Ada".into()),
            last_name: Some("Lovelace".into()),
            ..Default::default()
        });
        assert!(html.contains("<title>Ada Lovelace - Professional Portfolio | Zapfolio</title>"));
        assert!(html.contains("<meta property=\"og:type\" content=\"profile\">"));
        assert!(html.contains("<meta name=\"twitter:card\" content=\"summary_large_image\">"));
        assert!(html.contains("<link rel=\"canonical\" href=\"https://zapfolio.vercel.app/someone\">"));
        assert!(html.contains("<script type=\"application/ld+json\">{"));
        assert!(html.contains("&copy; 2025 Ada Lovelace"));
    }

    #[test]
    fn test_user_text_is_escaped() {
        let html = render(&ProfileDocument {
            first_name: Some("<img src=x onerror=alert(1)>".into()),
            summary: Some("Tom & Jerry".into()),
            ..Default::default()
        });
        assert!(!html.contains("<img src=x"));
        assert!(html.contains("&lt;img src=x onerror=alert(1)&gt;"));
        assert!(html.contains("Tom &amp; Jerry"));
    }

    #[test]
    fn test_language_bar_only_with_proficiency() {
        let html = render(&ProfileDocument {
            languages: Some(vec![
                Language {
                    language: Some("Spanish".into()),
                    proficiency: Some("Fluent".into()),
                },
                Language {
                    language: Some("Latin".into()),
                    proficiency: None,
                },
            ]),
            ..Default::default()
        });
        assert!(html.contains("style=\"width: 90%\""));
        assert_eq!(html.matches("class=\"bar\"").count(), 1);
        assert!(html.contains("<h2>Languages</h2>"));
        assert!(!html.contains("<h2>Skills</h2>"));
    }

    #[test]
    fn test_hero_location_and_subtitle() {
        let html = render(&ProfileDocument {
            industry: Some("Design".into()),
            location: Some(Location {
                address: Some("Lisbon".into()),
                country_code: Some("PT".into()),
            }),
            ..Default::default()
        });
        assert!(html.contains("<p class=\"subtitle\">Design professional</p>"));
        assert!(html.contains("Lisbon, PT"));
        assert!(html.contains("03:04 PT time"));
    }

    #[test]
    fn test_not_found_page_uses_fallback_metadata() {
        let html = render_not_found(&SiteConfig::default()).unwrap();
        assert!(html.contains("<title>Professional Portfolio | Zapfolio</title>"));
        assert!(html.contains(
            "content=\"Create your professional portfolio in two clicks with Zapfolio\""
        ));
        assert!(!html.contains("og:title"));
    }

    #[test]
    fn test_richer_sections_render_in_order() {
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
        let html = render(&profile);

        let positions: Vec<usize> = [
            "projects",
            "research",
            "services",
            "clients",
            "articles",
            "gallery",
            "certifications",
            "awards",
        ]
        .iter()
        .map(|id| html.find(&format!("<section id=\"{id}\">")).unwrap())
        .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
        assert!(!html.contains("id=\"contact\""));

        assert!(html.contains("<h3>COBOL &lt;v1&gt;</h3>"));
        assert!(html.contains("<p class=\"card-body\">Tom &amp; Jerry</p>"));
        assert!(!html.contains("javascript:"));
        assert!(!html.contains("ftp://x"));
        assert!(html.contains(
            "src=\"/api/proxy-image?url=https%3A%2F%2Fmedia.licdn.com%2Fp.png\" alt=\"COBOL &lt;v1&gt;\""
        ));
        assert!(html.contains(
            "<h3><a href=\"https://example.com/a-0\" rel=\"noopener\" target=\"_blank\">Compiler</a></h3>"
        ));
        assert_eq!(html.matches("<figure>").count(), 1);
        assert!(html.contains("<figcaption>Moth</figcaption>"));
    }

    #[test]
    fn test_unlinkable_social_links_render_no_contact() {
        let html = render(&ProfileDocument {
            social_links: Some(vec![SocialLink {
                platform: Some("LinkedIn".into()),
                url: Some("linkedin.com/in/ada".into()),
            }]),
            ..Default::default()
        });
        assert!(!html.contains("id=\"contact\""));
        assert!(html.contains("<nav class=\"floating-nav\"><a href=\"#about\">About</a></nav>"));
    }
}
