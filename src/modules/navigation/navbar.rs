use serde::Serialize;

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub path: &'static str,
}

pub const BRAND: &str = "EventHub";

pub const LINKS: [NavLink; 5] = [
    NavLink { label: "Home", path: "/" },
    NavLink { label: "About", path: "/about" },
    NavLink { label: "Events", path: "/events" },
    NavLink { label: "Create Event", path: "/create-event" },
    NavLink { label: "Contact", path: "/contact" },
];

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct NavbarView {
    pub brand: &'static str,
    pub links: Vec<NavLink>,
    pub menu_open: bool,
}

/// Collapsible menu state of the navigation bar.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Navbar {
    menu_open: bool,
}

impl Navbar {
    pub fn is_open(&self) -> bool {
        self.menu_open
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    /// Following any link closes the menu.
    pub fn follow_link(&mut self) {
        self.menu_open = false;
    }

    pub fn view(&self) -> NavbarView {
        NavbarView {
            brand: BRAND,
            links: LINKS.to_vec(),
            menu_open: self.menu_open,
        }
    }
}
