use super::*;

// =============================================================
// Business identity literals
// =============================================================

#[test]
fn phone_and_email_literals() {
    assert_eq!(PHONE, "123-456-7890");
    assert_eq!(EMAIL, "help@samimservices.com");
}

#[test]
fn business_name_and_address_literals() {
    assert_eq!(BUSINESS_NAME, "Samim Services");
    assert_eq!(ADDRESS, "123 Main Street, City, Country");
}

// =============================================================
// Service offerings
// =============================================================

#[test]
fn three_offerings_in_display_order() {
    let titles: Vec<&str> = SERVICES.iter().map(|s| s.title).collect();
    assert_eq!(titles, ["Form Filling", "Document Translation", "Phone Call Assistance"]);
}

#[test]
fn every_offering_has_a_description() {
    for offering in &SERVICES {
        assert!(!offering.description.is_empty());
    }
}

// =============================================================
// Contact methods
// =============================================================

#[test]
fn three_methods_in_display_order() {
    let labels: Vec<&str> = CONTACT_METHODS.iter().map(|m| m.label).collect();
    assert_eq!(labels, ["Phone", "Email", "Address"]);
}

#[test]
fn phone_method_uses_tel_scheme() {
    let phone = CONTACT_METHODS.iter().find(|m| m.kind == ContactKind::Phone).unwrap();
    assert_eq!(phone.href().as_deref(), Some("tel:123-456-7890"));
}

#[test]
fn email_method_uses_mailto_scheme() {
    let email = CONTACT_METHODS.iter().find(|m| m.kind == ContactKind::Email).unwrap();
    assert_eq!(email.href().as_deref(), Some("mailto:help@samimservices.com"));
}

#[test]
fn address_method_has_no_link() {
    let address = CONTACT_METHODS.iter().find(|m| m.kind == ContactKind::Address).unwrap();
    assert_eq!(address.href(), None);
}
