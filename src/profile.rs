//! Site owner identity and links, shared by the header, hero, contact
//! section, footer and document metadata.

use chrono::{DateTime, Datelike, Utc};

pub const FIRST_NAME: &str = "Samy";
pub const LAST_NAME: &str = "Abdelmalek";
pub const ROLE: &str = "Développeur Junior";

pub const SITE_URL: &str = "https://samyabdelmalek.fr";
pub const SITE_NAME: &str = "Portfolio de Samy Abdelmalek";
pub const SITE_DESCRIPTION: &str = "Portfolio de Samy Abdelmalek, développeur junior passionné par la création d'applications web performantes et innovantes.";
pub const SOCIAL_IMAGE: &str = "/icons/main.png";

pub const EMAIL: &str = "ismail.scy@gmail.com";
pub const GITHUB_URL: &str = "https://github.com/itsaam";
pub const LINKEDIN_URL: &str = "https://www.linkedin.com/in/samy-abdelmalek/";
pub const BENTO_URL: &str = "https://bento.me/itsaam";

pub const CV_PATH: &str = "/icons/Cv_AbdelmalekSamy_LettreMotivation.pdf";
pub const SYNTHESIS_PATH: &str = "/icons/Tableau de synthèse - Epreuve E4.xlsx";

/// Suggested names for the downloads above.
pub const CV_FILE_NAME: &str = "Cv_AbdelmalekSamy.pdf";
pub const SYNTHESIS_FILE_NAME: &str = "Tableau de synthèse - Epreuve E4.xlsx";

pub fn full_name() -> String {
    format!("{FIRST_NAME} {LAST_NAME}")
}

/// `<title>` of the home page; other pages use `page | Samy Abdelmalek`.
pub fn site_title() -> String {
    format!("{} | {ROLE}", full_name())
}

pub fn mailto() -> String {
    format!("mailto:{EMAIL}")
}

/// Year shown in the footer notice, taken from the build timestamp so that
/// server and browser render the same text.
pub fn copyright_year() -> i32 {
    year_of(env!("BUILD_TIME")).unwrap_or_else(|| Utc::now().year())
}

fn year_of(timestamp: &str) -> Option<i32> {
    DateTime::parse_from_rfc3339(timestamp).ok().map(|dt| dt.year())
}

pub fn copyright_notice() -> String {
    format!(
        "© {} {LAST_NAME} {FIRST_NAME}. Tous droits réservés.",
        copyright_year()
    )
}

/// Displayed form of a profile URL, without scheme, `www.` or trailing `/`.
pub fn display_url(url: &str) -> &str {
    let url = url
        .strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"))
        .unwrap_or(url);
    let url = url.strip_prefix("www.").unwrap_or(url);
    url.strip_suffix('/').unwrap_or(url)
}
