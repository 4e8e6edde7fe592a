use std::sync::{Arc, LazyLock};

use dashmap::DashMap;
use pulldown_cmark::{Options, Parser};

use crate::catalog::{Catalog, CatalogError, Category, ExternalLink, LinkKind};

/// Rendered Markdown keyed by its source text.
pub static GLOBAL_DESCRIPTION_CACHE: LazyLock<DashMap<&'static str, Arc<str>>> =
    LazyLock::new(DashMap::new);

/// Everything the detail page shows, derived from one catalog record.
#[derive(Debug, Clone, PartialEq)]
pub struct DetailView {
    pub slug: &'static str,
    pub title: &'static str,
    pub subtitle: Option<&'static str>,
    pub category: Category,
    pub image: &'static str,
    pub description_html: Arc<str>,
    pub features: &'static [&'static str],
    pub technologies: &'static [&'static str],
    pub link: Option<ExternalLink>,
}

impl DetailView {
    pub fn link_label(&self) -> Option<&'static str> {
        self.link.map(|link| match link.kind {
            LinkKind::Repository => "Explorez le projet",
            LinkKind::StoreListing => "Voir dans le Chrome Web Store",
        })
    }
}

pub fn render_markdown(source: &'static str) -> Arc<str> {
    GLOBAL_DESCRIPTION_CACHE
        .entry(source)
        .or_insert_with(|| {
            let parser = Parser::new_ext(source, Options::ENABLE_STRIKETHROUGH);
            let mut html_output = String::new();
            pulldown_cmark::html::push_html(&mut html_output, parser);
            html_output.into()
        })
        .clone()
}

pub fn render_detail(catalog: &Catalog<'_>, slug: &str) -> Result<DetailView, CatalogError> {
    let project = catalog.project_by_slug(slug).ok_or_else(|| {
        log::debug!("no detail page for slug {slug}");
        CatalogError::UnknownSlug(slug.to_string())
    })?;
    // project_by_slug only matches projects that carry a slug
    let slug = project.slug.unwrap_or_default();

    let view = match project.details {
        Some(details) => DetailView {
            slug,
            title: project.title,
            subtitle: Some(details.subtitle),
            category: project.category,
            image: project.thumbnail(),
            description_html: render_markdown(details.description),
            features: details.features,
            technologies: details.technologies,
            link: details.link,
        },
        None => DetailView {
            slug,
            title: project.title,
            subtitle: None,
            category: project.category,
            image: project.thumbnail(),
            description_html: render_markdown(project.description),
            features: &[],
            technologies: &[],
            link: None,
        },
    };
    Ok(view)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Project, ProjectDetails, CATALOG, PLACEHOLDER_IMAGE};

    #[test]
    fn test_every_slug_resolves_to_matching_title() {
        for project in CATALOG.projects {
            let Some(slug) = project.slug else {
                continue;
            };
            let view = render_detail(&CATALOG, slug).expect("slugged project should resolve");
            assert_eq!(view.title, project.title);
            assert_eq!(view.slug, slug);
            assert_eq!(view.category, project.category);
            assert_eq!(view.image, project.thumbnail());
            let pages = CATALOG
                .projects
                .iter()
                .filter(|p| p.slug == Some(slug))
                .count();
            assert_eq!(pages, 1);
        }
    }

    #[test]
    fn test_unknown_slug() {
        assert_eq!(
            render_detail(&CATALOG, "unknown-slug"),
            Err(CatalogError::UnknownSlug("unknown-slug".to_string()))
        );
    }

    #[test]
    fn test_detail_lists_come_from_catalog() {
        let view = render_detail(&CATALOG, "nuage-air").expect("nuage-air should resolve");
        let details = CATALOG
            .project_by_slug("nuage-air")
            .and_then(|p| p.details)
            .expect("nuage-air has details");
        assert_eq!(view.features, details.features);
        assert_eq!(view.technologies, details.technologies);
        assert_eq!(view.subtitle, Some(details.subtitle));
        assert_eq!(view.link_label(), Some("Explorez le projet"));
    }

    #[test]
    fn test_store_listing_label() {
        let view =
            render_detail(&CATALOG, "youtube_cleaner").expect("youtube_cleaner should resolve");
        assert_eq!(view.title, "YouTube Cleaner");
        assert_eq!(view.link_label(), Some("Voir dans le Chrome Web Store"));
    }

    #[test]
    fn test_description_is_rendered_markdown() {
        let html = render_markdown("Premier *paragraphe*.\n\nSecond & dernier.");
        assert_eq!(
            &*html,
            "<p>Premier <em>paragraphe</em>.</p>\n<p>Second &amp; dernier.</p>\n"
        );
        // served from the cache on the second call
        let again = render_markdown("Premier *paragraphe*.\n\nSecond & dernier.");
        assert!(Arc::ptr_eq(&html, &again));
    }

    #[test]
    fn test_project_without_details_still_has_page() {
        let projects = [Project {
            title: "Sans détails",
            description: "Résumé court.",
            image: "",
            category: Category::Bot,
            slug: Some("sans-details"),
            details: None::<ProjectDetails>,
        }];
        let catalog = Catalog {
            projects: &projects,
            experiences: &[],
            skills: &[],
            diplomas: &[],
            certifications: &[],
        };
        let view = render_detail(&catalog, "sans-details").expect("should resolve");
        assert_eq!(view.image, PLACEHOLDER_IMAGE);
        assert_eq!(view.subtitle, None);
        assert!(view.features.is_empty());
        assert_eq!(&*view.description_html, "<p>Résumé court.</p>\n");
    }
}
