//! Dark/light toggle button with moon and sun icons.

use leptos::prelude::*;

use crate::state::theme::ThemeController;

/// Theme toggle control. Shows the moon while the page is light and the
/// sun while it is dark; the accessible label always names the mode a
/// click switches to.
#[component]
pub fn ThemeToggle() -> impl IntoView {
    let theme = expect_context::<RwSignal<ThemeController>>();

    let dark = move || theme.get().effective().is_dark();
    let label = move || theme.get().effective().toggle_label();

    let on_click = move |_| crate::util::theme_dom::toggle(theme);

    view! {
        <button id="theme-toggle" class="theme-toggle" aria-label=label on:click=on_click>
            <Show when=move || !dark()>
                <svg class="icon icon-moon" viewBox="0 0 24 24" aria-hidden="true">
                    <path d="M21 12.8A9 9 0 1 1 11.2 3a7 7 0 0 0 9.8 9.8z"></path>
                </svg>
            </Show>
            <Show when=dark>
                <svg class="icon icon-sun" viewBox="0 0 24 24" aria-hidden="true">
                    <circle cx="12" cy="12" r="4"></circle>
                    <path d="M12 2v2m0 16v2M4.9 4.9l1.4 1.4m11.3 11.3 1.4 1.4M2 12h2m16 0h2M4.9 19.1l1.4-1.4M17.7 6.3l1.4-1.4"></path>
                </svg>
            </Show>
        </button>
    }
}
