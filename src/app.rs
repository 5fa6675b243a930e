//! Root application shell.
//!
//! SYSTEM CONTEXT
//! ==============
//! The shell is the only view in the page today: a header with the title and
//! prompt, and two placeholder cards that later hold the check-in form and
//! the last submitted check-in. It takes no props and reads no context, so
//! it renders identically everywhere.

use leptos::prelude::*;

#[cfg(test)]
#[path = "app_test.rs"]
mod app_test;

pub const TITLE: &str = "Daily Check-in";
pub const PROMPT: &str = "How are you feeling today?";

pub const FORM_LABEL: &str = "Check-in form";
pub const FORM_PLACEHOLDER: &str = "Form goes here (next steps: mood, note, tags, submit).";

pub const SUMMARY_LABEL: &str = "Last submitted check-in";
pub const SUMMARY_PLACEHOLDER: &str = "Summary goes here.";

/// Root application component.
#[component]
pub fn App() -> impl IntoView {
    view! {
        <div class="App">
            <header class="AppHeader">
                <h1 class="AppTitle">{TITLE}</h1>
                <p class="AppPrompt">{PROMPT}</p>
            </header>

            <main class="AppMain">
                <PlaceholderCard label=FORM_LABEL text=FORM_PLACEHOLDER/>
                <PlaceholderCard label=SUMMARY_LABEL text=SUMMARY_PLACEHOLDER/>
            </main>
        </div>
    }
}

/// Labeled card holding placeholder copy until its feature lands.
#[component]
fn PlaceholderCard(label: &'static str, text: &'static str) -> impl IntoView {
    view! {
        <section class="AppCard" aria-label=label>
            <p class="AppPlaceholder">{text}</p>
        </section>
    }
}

/// Render the shell to an HTML string.
///
/// Server-side helper; HTML output needs `leptos/ssr`, so this only exists
/// in `ssr` and test builds.
#[cfg(any(feature = "ssr", test))]
pub fn render_static_html() -> String {
    view! { <App/> }.to_html()
}
