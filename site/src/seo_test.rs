use super::*;

// =============================================================
// Head metadata literals
// =============================================================

#[test]
fn home_title_matches_published_value() {
    assert_eq!(HOME.title, "Samim Services - Assistance with Forms, Documents, and Communication");
}

#[test]
fn home_description_matches_published_value() {
    assert_eq!(
        HOME.description,
        "Samim Services helps with form filling, document translation, and phone call \
         assistance for those who need support with paperwork and communication."
    );
}

#[test]
fn home_canonical_url_matches_published_value() {
    assert_eq!(HOME.canonical_url, "https://www.samimservices.com");
}

// =============================================================
// LocalBusiness JSON-LD
// =============================================================

#[test]
fn jsonld_declares_local_business_type() {
    let value: serde_json::Value = serde_json::from_str(&local_business_jsonld()).unwrap();
    assert_eq!(value["@context"], "https://schema.org");
    assert_eq!(value["@type"], "LocalBusiness");
}

#[test]
fn jsonld_carries_contact_fields() {
    let value: serde_json::Value = serde_json::from_str(&local_business_jsonld()).unwrap();
    assert_eq!(value["name"], content::BUSINESS_NAME);
    assert_eq!(value["telephone"], content::PHONE);
    assert_eq!(value["email"], content::EMAIL);
    assert_eq!(value["address"], content::ADDRESS);
    assert_eq!(value["url"], HOME.canonical_url);
}

#[test]
fn jsonld_carries_opening_hours() {
    let value: serde_json::Value = serde_json::from_str(&local_business_jsonld()).unwrap();
    assert_eq!(value["openingHours"], "Mo-Fr 09:00-17:00");
}
