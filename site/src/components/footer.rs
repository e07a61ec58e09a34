//! Page footer: copyright line and legal placeholder links.

use leptos::prelude::*;

use crate::content;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="site-footer">
            <div class="site-footer__inner">
                <p class="site-footer__copyright">{content::COPYRIGHT}</p>
                <nav class="site-footer__nav">
                    <a class="site-footer__link" href="#">"Terms of Service"</a>
                    <a class="site-footer__link" href="#">"Privacy"</a>
                </nav>
            </div>
        </footer>
    }
}
