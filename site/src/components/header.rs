//! Fixed top bar: brand link, section nav, and the mobile menu toggle.
//!
//! The mobile nav list renders only while the menu is open. Every navigation
//! action closes the menu before scrolling.

use leptos::prelude::*;

use crate::app::navigate_to_section;
use crate::components::icons::{Icon, IconKind};
use crate::content;
use crate::state::menu::{MenuState, SectionId};

#[component]
pub fn Header() -> impl IntoView {
    let menu = expect_context::<RwSignal<MenuState>>();

    let on_brand = move |_| menu.update(MenuState::close);
    let on_toggle = move |_| menu.update(MenuState::toggle);
    let on_services = move |_| navigate_to_section(menu, SectionId::Services);
    let on_contact = move |_| navigate_to_section(menu, SectionId::Contact);

    view! {
        <header class="site-header">
            <a class="site-header__brand" href="/" on:click=on_brand>
                <span class="sr-only">{content::BUSINESS_NAME}</span>
                <Icon kind=IconKind::Language class="icon icon--brand"/>
                <span class="site-header__brand-name">{content::BUSINESS_NAME}</span>
            </a>
            <nav class="site-header__nav">
                <button class="site-header__nav-item" on:click=on_services>"Services"</button>
                <button class="site-header__nav-item" on:click=on_contact>"Contact"</button>
            </nav>
            <button class="site-header__toggle" aria-label="Toggle menu" on:click=on_toggle>
                <Show
                    when=move || menu.get().open
                    fallback=|| view! { <Icon kind=IconKind::Bars class="icon"/> }
                >
                    <Icon kind=IconKind::XMark class="icon"/>
                </Show>
            </button>
        </header>
        <Show when=move || menu.get().open>
            <div class="mobile-nav">
                <nav class="mobile-nav__list">
                    <button class="mobile-nav__item" on:click=on_services>"Services"</button>
                    <button class="mobile-nav__item" on:click=on_contact>"Contact"</button>
                </nav>
            </div>
        </Show>
    }
}
