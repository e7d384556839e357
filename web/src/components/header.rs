use leptos::prelude::*;

/// Top brand bar for the single booking page.
#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="site-header">
            <div class="site-header-inner">
                <span class="site-logo">"📅"</span>
                <span class="site-name">"BookEase"</span>
            </div>
        </header>
    }
}
