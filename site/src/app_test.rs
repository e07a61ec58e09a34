use leptos::prelude::*;

use super::navigate_to_section;
use crate::state::menu::{MenuState, SectionId};

#[test]
fn navigate_closes_menu_from_any_prior_state() {
    let owner = Owner::new();
    owner.set();

    for start_open in [false, true] {
        for section in [SectionId::Services, SectionId::Contact] {
            let menu = RwSignal::new(MenuState { open: start_open });
            navigate_to_section(menu, section);
            assert!(!menu.get_untracked().open, "menu must close for {section:?}");
        }
    }
}

#[test]
fn navigate_leaves_menu_closed_when_repeated() {
    let owner = Owner::new();
    owner.set();

    let menu = RwSignal::new(MenuState { open: true });
    navigate_to_section(menu, SectionId::Services);
    navigate_to_section(menu, SectionId::Contact);
    assert!(!menu.get_untracked().open);
}
