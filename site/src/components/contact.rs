//! Contact panel: phone, email, and address cards. Anchored at
//! `id="contact"` for in-page navigation.

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use crate::components::icons::Icon;
use crate::content;

#[component]
pub fn ContactPanel() -> impl IntoView {
    view! {
        <section id="contact" class="contact">
            <div class="contact__inner">
                <h2 class="contact__title">"Contact Us"</h2>
                <div class="contact__list">
                    {content::CONTACT_METHODS
                        .iter()
                        .map(|method| {
                            let value = match method.href() {
                                Some(href) => view! {
                                    <a class="contact-card__value" href=href>{method.value}</a>
                                }
                                .into_any(),
                                None => view! {
                                    <p class="contact-card__value">{method.value}</p>
                                }
                                .into_any(),
                            };
                            view! {
                                <div class="contact-card">
                                    <Icon kind=method.icon class="icon icon--md"/>
                                    <p class="contact-card__label">{method.label}</p>
                                    {value}
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
