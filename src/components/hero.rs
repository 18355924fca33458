//! Hero section: greeting, name, call-to-action buttons.

use leptos::prelude::*;

use crate::content::{OWNER_NAME, OWNER_TITLE};
use crate::state::ui::UiState;

#[component]
pub fn Hero() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    let jump = move |section: &'static str| {
        ui.update(|u| u.follow_link(section));
        crate::util::scroll::scroll_to_section(section);
    };

    view! {
        <section id="home" class="hero reveal-element">
            <div class="hero__background" aria-hidden="true"></div>
            <div class="hero__text">
                <p class="greeting">"Hello, I am"</p>
                <h1 class="name">{OWNER_NAME}</h1>
                <h2 class="hero__subtitle">{OWNER_TITLE}</h2>
                <p class="hero__description">
                    "I design and build fast, accessible web experiences, \
                     from brand sites to data-heavy product surfaces."
                </p>
                <div class="hero__cta">
                    <a
                        class="btn btn--primary"
                        href="#projects"
                        on:click=move |ev: leptos::ev::MouseEvent| {
                            ev.prevent_default();
                            jump("projects");
                        }
                    >
                        "See my work"
                    </a>
                    <a
                        class="btn"
                        href="#contact"
                        on:click=move |ev: leptos::ev::MouseEvent| {
                            ev.prevent_default();
                            jump("contact");
                        }
                    >
                        "Get in touch"
                    </a>
                </div>
            </div>
            <div class="scroll-indicator" aria-hidden="true"></div>
        </section>
    }
}
