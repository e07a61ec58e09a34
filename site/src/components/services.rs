//! Services panel: the three offering cards, rendered from the static
//! content table. Anchored at `id="services"` for in-page navigation.

use leptos::prelude::*;

use crate::components::icons::Icon;
use crate::content;

#[component]
pub fn ServicesPanel() -> impl IntoView {
    view! {
        <section id="services" class="services">
            <div class="services__inner">
                <h2 class="services__title">"Our Services"</h2>
                <div class="services__grid">
                    {content::SERVICES
                        .iter()
                        .map(|offering| view! {
                            <div class="service-card">
                                <Icon kind=offering.icon class="icon icon--xl"/>
                                <h3 class="service-card__title">{offering.title}</h3>
                                <p class="service-card__description">{offering.description}</p>
                            </div>
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
