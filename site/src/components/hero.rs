//! Hero panel: headline, direct contact links, and the primary call to
//! action.

use leptos::prelude::*;

use crate::app::navigate_to_section;
use crate::components::icons::Icon;
use crate::content;
use crate::state::menu::{MenuState, SectionId};

#[component]
pub fn Hero() -> impl IntoView {
    let menu = expect_context::<RwSignal<MenuState>>();
    let on_get_help = move |_| navigate_to_section(menu, SectionId::Contact);

    view! {
        <section class="hero">
            <div class="hero__inner">
                <h1 class="hero__title">"Welcome to Samim Services"</h1>
                <p class="hero__lead">
                    "We help you with important paperwork and communication. Easy to understand, quick to use."
                </p>
                <div class="hero__contact">
                    <p class="hero__contact-label">"Contact us now:"</p>
                    {content::CONTACT_METHODS
                        .iter()
                        .filter_map(|method| method.href().map(|href| (href, method)))
                        .map(|(href, method)| view! {
                            <a class="hero__contact-link" href=href>
                                <Icon kind=method.icon class="icon icon--sm"/>
                                <span>{method.value}</span>
                            </a>
                        })
                        .collect_view()}
                </div>
                <button class="hero__cta" on:click=on_get_help>"Get Help Now"</button>
            </div>
        </section>
    }
}
