use log::debug;

/// The five top-level views of the page, in navigation order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Section {
    #[default]
    Home,
    About,
    Services,
    Portfolio,
    Contact,
}

impl Section {
    pub const ALL: [Section; 5] = [
        Section::Home,
        Section::About,
        Section::Services,
        Section::Portfolio,
        Section::Contact,
    ];

    /// Resolves a section key. Anything unrecognised lands on Home.
    pub fn parse(key: &str) -> Section {
        match key.trim().to_ascii_lowercase().as_str() {
            "home" => Section::Home,
            "about" => Section::About,
            "services" => Section::Services,
            "portfolio" => Section::Portfolio,
            "contact" => Section::Contact,
            other => {
                debug!("Unknown section key {:?}, falling back to home", other);
                Section::Home
            }
        }
    }

    /// DOM id of the `<section>` element, also used as the scroll target.
    pub fn dom_id(self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::About => "about",
            Section::Services => "services",
            Section::Portfolio => "portfolio",
            Section::Contact => "contact",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Section::Home => "Home",
            Section::About => "About",
            Section::Services => "Services",
            Section::Portfolio => "Portfolio",
            Section::Contact => "Contact",
        }
    }

    pub fn heading(self) -> &'static str {
        match self {
            Section::Home => "Crafting Visual Stories",
            Section::About => "About Director Brad",
            Section::Services => "Services Offered & Rate Card",
            Section::Portfolio => "Portfolio",
            Section::Contact => "Let's Collaborate",
        }
    }
}

/// Navigation UI state: which section is shown and whether the mobile
/// drawer is open. `scroll_seq` changes on every navigation so the
/// post-render effect scrolls even when the same section is picked twice.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NavState {
    pub current: Section,
    pub menu_open: bool,
    pub scroll_seq: u32,
}

impl NavState {
    pub fn navigate(&self, section: Section) -> NavState {
        NavState {
            current: section,
            menu_open: false,
            scroll_seq: self.scroll_seq.wrapping_add(1),
        }
    }

    pub fn toggle_menu(&self) -> NavState {
        NavState {
            menu_open: !self.menu_open,
            ..self.clone()
        }
    }

    pub fn is_active(&self, section: Section) -> bool {
        self.current == section
    }

    pub fn wants_scroll(&self) -> bool {
        self.scroll_seq > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_known_keys() {
        for section in Section::ALL {
            assert_eq!(Section::parse(section.dom_id()), section);
        }
        assert_eq!(Section::parse(" Contact "), Section::Contact);
    }

    #[test]
    fn parse_unknown_falls_back_to_home() {
        assert_eq!(Section::parse("blog"), Section::Home);
        assert_eq!(Section::parse(""), Section::Home);
        assert_eq!(Section::default(), Section::Home);
    }

    #[test]
    fn headings_are_distinct() {
        let mut headings: Vec<_> = Section::ALL.iter().map(|s| s.heading()).collect();
        headings.sort();
        headings.dedup();
        assert_eq!(headings.len(), Section::ALL.len());
    }

    #[test]
    fn navigate_closes_menu_and_requests_scroll() {
        let state = NavState::default().toggle_menu();
        assert!(state.menu_open);
        assert!(!state.wants_scroll());

        let next = state.navigate(Section::Services);
        assert_eq!(next.current, Section::Services);
        assert!(!next.menu_open);
        assert!(next.wants_scroll());
    }

    #[test]
    fn renavigating_same_section_bumps_scroll() {
        let first = NavState::default().navigate(Section::About);
        let second = first.navigate(Section::About);
        assert_eq!(second.current, first.current);
        assert_ne!(second.scroll_seq, first.scroll_seq);
    }

    #[test]
    fn contact_cta_marks_contact_active() {
        let state = NavState::default()
            .navigate(Section::Portfolio)
            .toggle_menu();
        let next = state.navigate(Section::Contact);
        assert!(next.is_active(Section::Contact));
        assert!(!next.is_active(Section::Portfolio));
        assert!(!next.menu_open);
    }

    #[test]
    fn toggle_menu_keeps_section() {
        let state = NavState::default().navigate(Section::Portfolio);
        let toggled = state.toggle_menu();
        assert_eq!(toggled.current, Section::Portfolio);
        assert_eq!(toggled.scroll_seq, state.scroll_seq);
        assert!(!toggled.toggle_menu().menu_open);
    }
}
