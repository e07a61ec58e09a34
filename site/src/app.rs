//! Page shell: routing, shared menu state, SEO, and layout chrome.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` owns the one piece of interactive state on the site (the mobile menu
//! flag) and provides it through context so header chrome and panel buttons
//! drive the same signal. `shell` is the SSR document wrapper consumed by the
//! server binary.

use leptos::prelude::*;
use leptos_meta::{MetaTags, provide_meta_context};
use leptos_router::components::{Route, Router, Routes};
use leptos_router::hooks::use_location;
use leptos_router::path;

use crate::components::footer::Footer;
use crate::components::header::Header;
use crate::pages::home::HomePage;
use crate::seo::{self, Seo};
use crate::state::menu::{MenuState, SectionId};
use crate::util::scroll;

#[cfg(test)]
#[path = "app_test.rs"]
mod app_test;

/// HTML document wrapper for server-side rendering.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
                <link rel="stylesheet" href="/public/style.css"/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Close the menu, then smooth-scroll to the section anchor.
///
/// Closing happens unconditionally; a missing anchor element is a silent
/// no-op rather than an error.
pub fn navigate_to_section(menu: RwSignal<MenuState>, section: SectionId) {
    menu.update(MenuState::close);
    scroll::to_section(section.as_str());
}

/// Top-level composition: SEO metadata, header/nav, routed content, footer.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_context(RwSignal::new(MenuState::default()));

    view! {
        <Seo meta=seo::HOME/>
        <Router>
            <ScrollToTop/>
            <div class="page">
                <Header/>
                <main class="page__main">
                    <Routes fallback=|| view! { <HomePage/> }>
                        <Route path=path!("/") view=HomePage/>
                    </Routes>
                </main>
                <Footer/>
            </div>
        </Router>
    }
}

/// Resets scroll to the origin whenever the route path changes.
#[component]
fn ScrollToTop() -> impl IntoView {
    let location = use_location();
    Effect::new(move || {
        location.pathname.track();
        scroll::to_top();
    });
}
