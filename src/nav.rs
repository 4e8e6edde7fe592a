/// In-page anchors of the home page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    About,
    Projects,
    Experiences,
    Contact,
}

impl Section {
    pub const ALL: [Section; 4] = [
        Section::About,
        Section::Projects,
        Section::Experiences,
        Section::Contact,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Section::About => "about",
            Section::Projects => "projects",
            Section::Experiences => "experiences",
            Section::Contact => "contact",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Section::About => "À propos",
            Section::Projects => "Projets",
            Section::Experiences => "Expériences",
            Section::Contact => "Contact",
        }
    }

    /// Link to the section from another page.
    pub fn href(self) -> String {
        format!("/#{}", self.id())
    }

    /// Accepts a URL fragment with or without the leading `#`.
    pub fn from_fragment(fragment: &str) -> Option<Section> {
        let id = fragment.strip_prefix('#').unwrap_or(fragment);
        Section::ALL.into_iter().find(|s| s.id() == id)
    }
}

/// Open/closed state of the mobile menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MenuState {
    open: bool,
}

impl MenuState {
    pub fn is_open(self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    /// Choosing an entry always leaves the menu closed.
    pub fn select(&mut self, section: Section) -> Section {
        self.close();
        section
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_twice_returns_to_closed() {
        let mut menu = MenuState::default();
        assert!(!menu.is_open());
        menu.toggle();
        assert!(menu.is_open());
        menu.toggle();
        assert!(!menu.is_open());
    }

    #[test]
    fn test_select_closes_menu() {
        let mut menu = MenuState::default();
        menu.toggle();
        assert_eq!(menu.select(Section::Projects), Section::Projects);
        assert!(!menu.is_open());

        // selecting with the menu already closed keeps it closed
        menu.select(Section::Contact);
        assert!(!menu.is_open());
    }

    #[test]
    fn test_from_fragment() {
        assert_eq!(Section::from_fragment("#about"), Some(Section::About));
        assert_eq!(Section::from_fragment("experiences"), Some(Section::Experiences));
        assert_eq!(Section::from_fragment("#skills"), None);
        assert_eq!(Section::from_fragment(""), None);
        assert_eq!(Section::from_fragment("#"), None);
    }

    #[test]
    fn test_ids_and_hrefs() {
        for section in Section::ALL {
            assert_eq!(Section::from_fragment(&section.href()[1..]), Some(section));
        }
        assert_eq!(Section::Contact.href(), "/#contact");
    }
}
