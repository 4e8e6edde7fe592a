use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::catalog::{Category, Project};

pub const TAB_QUERY_KEY: &str = "tab";

/// Tab selection of the project gallery.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ProjectFilter {
    #[default]
    All,
    Category(Category),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown project tab `{0}`")]
pub struct FilterParseError(pub String);

impl ProjectFilter {
    /// Every tab, in display order.
    pub fn tabs() -> impl Iterator<Item = ProjectFilter> {
        std::iter::once(ProjectFilter::All)
            .chain(Category::ALL.into_iter().map(ProjectFilter::Category))
    }

    pub fn key(self) -> &'static str {
        match self {
            ProjectFilter::All => "all",
            ProjectFilter::Category(Category::Application) => "application",
            ProjectFilter::Category(Category::SiteWeb) => "web",
            ProjectFilter::Category(Category::Bot) => "bot",
            ProjectFilter::Category(Category::ExtensionChrome) => "extension",
        }
    }

    pub fn tab_label(self) -> &'static str {
        match self {
            ProjectFilter::All => "Tous",
            ProjectFilter::Category(Category::Application) => "Applications",
            ProjectFilter::Category(Category::SiteWeb) => "Sites Web",
            ProjectFilter::Category(Category::Bot) => "Bots",
            ProjectFilter::Category(Category::ExtensionChrome) => "Extensions",
        }
    }

    /// Home page link selecting this tab.
    pub fn href(self) -> String {
        format!("/?{TAB_QUERY_KEY}={self}")
    }

    /// Tab named by the `tab` query value. Missing or unknown keys show
    /// every project.
    pub fn from_query(value: Option<&str>) -> ProjectFilter {
        match value.map(str::parse::<ProjectFilter>) {
            Some(Ok(filter)) => filter,
            Some(Err(e)) => {
                log::debug!("{e}, showing all projects");
                ProjectFilter::All
            }
            None => ProjectFilter::All,
        }
    }

    pub fn matches(self, project: &Project) -> bool {
        match self {
            ProjectFilter::All => true,
            ProjectFilter::Category(c) => project.category == c,
        }
    }
}

impl fmt::Display for ProjectFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for ProjectFilter {
    type Err = FilterParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ProjectFilter::tabs()
            .find(|tab| tab.key() == s)
            .ok_or_else(|| FilterParseError(s.to_string()))
    }
}

/// Stable projection of `projects` onto `filter`: items are only ever
/// excluded, never reordered.
pub fn select(projects: &[Project], filter: ProjectFilter) -> Vec<&Project> {
    projects.iter().filter(|p| filter.matches(p)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CATALOG;

    fn project(title: &'static str, category: Category, slug: Option<&'static str>) -> Project {
        Project {
            title,
            description: "",
            image: "",
            category,
            slug,
            details: None,
        }
    }

    fn five_projects() -> Vec<Project> {
        vec![
            project("HSP", Category::SiteWeb, Some("hsp")),
            project("Convertisseur GIF", Category::Application, None),
            project("Nuage Air", Category::SiteWeb, Some("nuage-air")),
            project("RSS Bot pour Discord", Category::Bot, Some("rss_bot")),
            project("HSPJAVAFX", Category::Application, None),
        ]
    }

    fn titles(projects: &[&Project]) -> Vec<&'static str> {
        projects.iter().map(|p| p.title).collect()
    }

    #[test]
    fn test_all_is_identity() {
        let projects = five_projects();
        let selected = select(&projects, ProjectFilter::All);
        assert_eq!(selected.len(), projects.len());
        for (a, b) in selected.iter().zip(projects.iter()) {
            assert_eq!(*a, b);
        }
    }

    #[test]
    fn test_site_web_scenario() {
        let projects = five_projects();
        let selected = select(&projects, ProjectFilter::Category(Category::SiteWeb));
        assert_eq!(titles(&selected), vec!["HSP", "Nuage Air"]);
        assert!(!titles(&selected).contains(&"RSS Bot pour Discord"));
    }

    #[test]
    fn test_category_is_stable_subsequence() {
        for category in Category::ALL {
            let selected = select(CATALOG.projects, ProjectFilter::Category(category));
            let expected = CATALOG
                .projects
                .iter()
                .filter(|p| p.category == category)
                .collect::<Vec<_>>();
            assert_eq!(selected, expected);
            assert!(selected.iter().all(|p| p.category == category));
        }
    }

    #[test]
    fn test_empty_bucket_is_empty_not_error() {
        let projects = five_projects();
        let selected = select(&projects, ProjectFilter::Category(Category::ExtensionChrome));
        assert!(selected.is_empty());
    }

    #[test]
    fn test_tabs_are_exhaustive() {
        let tabs = ProjectFilter::tabs().collect::<Vec<_>>();
        assert_eq!(tabs.len(), Category::ALL.len() + 1);
        assert_eq!(tabs[0], ProjectFilter::All);
        for category in Category::ALL {
            assert!(tabs.contains(&ProjectFilter::Category(category)));
        }
    }

    #[test]
    fn test_key_round_trips_and_rejects_unknown() {
        for tab in ProjectFilter::tabs() {
            assert_eq!(tab.key().parse::<ProjectFilter>(), Ok(tab));
        }
        assert_eq!(
            "Site Web".parse::<ProjectFilter>(),
            Err(FilterParseError("Site Web".to_string()))
        );
    }

    #[test]
    fn test_tab_from_query() {
        assert_eq!(ProjectFilter::from_query(None), ProjectFilter::All);
        assert_eq!(
            ProjectFilter::from_query(Some("bot")),
            ProjectFilter::Category(Category::Bot)
        );
        assert_eq!(ProjectFilter::from_query(Some("Bots")), ProjectFilter::All);
        assert_eq!(ProjectFilter::from_query(Some("")), ProjectFilter::All);
    }

    #[test]
    fn test_href_selects_the_same_tab() {
        assert_eq!(ProjectFilter::Category(Category::SiteWeb).href(), "/?tab=web");
        for tab in ProjectFilter::tabs() {
            let href = tab.href();
            let (_, value) = href.split_once('=').expect("href carries a value");
            assert_eq!(ProjectFilter::from_query(Some(value)), tab);
        }
    }
}
