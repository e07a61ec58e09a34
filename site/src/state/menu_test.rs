use super::*;

// =============================================================
// MenuState
// =============================================================

#[test]
fn menu_starts_closed() {
    let state = MenuState::default();
    assert!(!state.open);
}

#[test]
fn toggle_flips_state() {
    let mut state = MenuState::default();
    state.toggle();
    assert!(state.open);
    state.toggle();
    assert!(!state.open);
}

#[test]
fn double_toggle_restores_prior_state() {
    for start in [false, true] {
        let mut state = MenuState { open: start };
        state.toggle();
        state.toggle();
        assert_eq!(state.open, start);
    }
}

#[test]
fn close_forces_closed_from_any_prior_state() {
    for start in [false, true] {
        let mut state = MenuState { open: start };
        state.close();
        assert!(!state.open);
    }
}

#[test]
fn close_is_idempotent() {
    let mut state = MenuState { open: true };
    state.close();
    state.close();
    assert!(!state.open);
}

// =============================================================
// SectionId
// =============================================================

#[test]
fn section_ids_match_dom_anchors() {
    assert_eq!(SectionId::Services.as_str(), "services");
    assert_eq!(SectionId::Contact.as_str(), "contact");
}

#[test]
fn section_variants_are_distinct() {
    assert_ne!(SectionId::Services, SectionId::Contact);
}
