//! The `/` route: hero, services, and contact panels in order, plus the
//! LocalBusiness JSON-LD descriptor.

use leptos::prelude::*;

use crate::components::contact::ContactPanel;
use crate::components::hero::Hero;
use crate::components::services::ServicesPanel;
use crate::seo;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <script type="application/ld+json" inner_html=seo::local_business_jsonld()></script>
        <Hero/>
        <ServicesPanel/>
        <ContactPanel/>
    }
}
