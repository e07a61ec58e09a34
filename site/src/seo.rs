//! Document-head metadata and the LocalBusiness structured-data descriptor.
//!
//! DESIGN
//! ======
//! Metadata literals live here as constants so snapshot tests can pin the
//! published values. The `Seo` component injects them through `leptos_meta`;
//! the JSON-LD descriptor is serialized once per render and embedded as an
//! `application/ld+json` script.

use leptos::prelude::*;
use leptos_meta::{Link, Meta, Title};
use serde::Serialize;

use crate::content;

#[cfg(test)]
#[path = "seo_test.rs"]
mod seo_test;

/// Head metadata for one page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SeoMeta {
    pub title: &'static str,
    pub description: &'static str,
    pub canonical_url: &'static str,
}

/// Home page metadata. Must match the published values exactly.
pub const HOME: SeoMeta = SeoMeta {
    title: "Samim Services - Assistance with Forms, Documents, and Communication",
    description: "Samim Services helps with form filling, document translation, and phone call assistance for those who need support with paperwork and communication.",
    canonical_url: "https://www.samimservices.com",
};

/// Schema.org `LocalBusiness` descriptor with fixed contact and hours fields.
#[derive(Debug, Serialize)]
pub struct LocalBusiness {
    #[serde(rename = "@context")]
    pub context: &'static str,
    #[serde(rename = "@type")]
    pub business_type: &'static str,
    pub name: &'static str,
    pub telephone: &'static str,
    pub email: &'static str,
    pub address: &'static str,
    pub url: &'static str,
    #[serde(rename = "openingHours")]
    pub opening_hours: &'static str,
}

#[must_use]
pub fn local_business() -> LocalBusiness {
    LocalBusiness {
        context: "https://schema.org",
        business_type: "LocalBusiness",
        name: content::BUSINESS_NAME,
        telephone: content::PHONE,
        email: content::EMAIL,
        address: content::ADDRESS,
        url: HOME.canonical_url,
        opening_hours: "Mo-Fr 09:00-17:00",
    }
}

/// JSON-LD source text for the descriptor.
#[must_use]
pub fn local_business_jsonld() -> String {
    serde_json::to_string(&local_business()).unwrap_or_default()
}

/// Injects title, description, canonical link, and Open Graph / Twitter card
/// tags into the document head.
#[component]
pub fn Seo(meta: SeoMeta) -> impl IntoView {
    view! {
        <Title text=meta.title/>
        <Meta name="description" content=meta.description/>
        <Link rel="canonical" href=meta.canonical_url/>
        <Meta property="og:title" content=meta.title/>
        <Meta property="og:description" content=meta.description/>
        <Meta property="og:url" content=meta.canonical_url/>
        <Meta property="og:type" content="website"/>
        <Meta name="twitter:card" content="summary_large_image"/>
        <Meta name="twitter:title" content=meta.title/>
        <Meta name="twitter:description" content=meta.description/>
    }
}
