//! Fixed site header: brand, section nav, theme toggle, mobile menu.

use leptos::prelude::*;

use crate::components::theme_toggle::ThemeToggle;
use crate::content::{OWNER_NAME, SECTIONS};
use crate::state::ui::UiState;

/// Page header. Compacts once the page scrolls past the threshold and
/// collapses the nav into a hamburger menu on small screens.
#[component]
pub fn Header() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    let header_class = move || {
        if ui.get().header_scrolled {
            "site-header scrolled"
        } else {
            "site-header"
        }
    };
    let toggle_class = move || {
        if ui.get().nav_open {
            "mobile-nav-toggle active"
        } else {
            "mobile-nav-toggle"
        }
    };
    let mobile_class = move || {
        if ui.get().nav_open {
            "nav-mobile active"
        } else {
            "nav-mobile"
        }
    };

    let follow = move |section: &'static str| {
        ui.update(|u| u.follow_link(section));
        crate::util::scroll::scroll_to_section(section);
    };

    let nav_links = move || {
        SECTIONS
            .iter()
            .map(|(id, title)| {
                let id = *id;
                let title = *title;
                view! {
                    <a
                        class=move || {
                            if ui.get().active_section == Some(id) {
                                "nav-link active"
                            } else {
                                "nav-link"
                            }
                        }
                        href=format!("#{id}")
                        on:click=move |ev: leptos::ev::MouseEvent| {
                            ev.prevent_default();
                            follow(id);
                        }
                    >
                        {title}
                    </a>
                }
            })
            .collect::<Vec<_>>()
    };

    view! {
        <header class=header_class>
            <div class="header__inner">
                <a
                    class="brand"
                    href="#home"
                    on:click=move |ev: leptos::ev::MouseEvent| {
                        ev.prevent_default();
                        follow("home");
                    }
                >
                    {OWNER_NAME}
                </a>
                <nav class="nav-links">{nav_links}</nav>
                <ThemeToggle/>
                <button
                    class=toggle_class
                    aria-label="Toggle navigation"
                    on:click=move |_| ui.update(UiState::toggle_nav)
                >
                    <span class="bar"></span>
                    <span class="bar"></span>
                    <span class="bar"></span>
                </button>
            </div>
            <div class=mobile_class>
                <nav class="nav-links">{nav_links}</nav>
            </div>
        </header>
    }
}
