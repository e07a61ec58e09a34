//! Mobile menu state and the navigable section anchors.
//!
//! DESIGN
//! ======
//! The menu flag is the only interactive state on the site. It lives in an
//! `RwSignal<MenuState>` provided from the page shell so header chrome and
//! panel buttons all drive one shared flag.

#[cfg(test)]
#[path = "menu_test.rs"]
mod menu_test;

/// Mobile navigation menu state. Created closed on page load, discarded on
/// unload.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MenuState {
    pub open: bool,
}

impl MenuState {
    /// Flip the menu between open and closed.
    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    /// Force the menu closed. Idempotent.
    pub fn close(&mut self) {
        self.open = false;
    }
}

/// In-page anchors reachable from the navigation chrome.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SectionId {
    Services,
    Contact,
}

impl SectionId {
    /// DOM id of the matching section element.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            SectionId::Services => "services",
            SectionId::Contact => "contact",
        }
    }
}
