//! Startup preloader overlay.

use leptos::prelude::*;

use crate::state::ui::{PreloaderPhase, UiState};

/// How long the preloader lingers after mount (ms).
#[cfg(feature = "csr")]
const LINGER_MS: u64 = 500;
/// Fade-out time before the node leaves the tree (ms).
#[cfg(feature = "csr")]
const FADE_MS: u64 = 300;

/// Full-screen spinner shown until the page has settled, then faded out
/// and removed.
#[component]
pub fn Preloader() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    #[cfg(feature = "csr")]
    {
        use gloo_timers::future::sleep;
        use std::time::Duration;

        leptos::task::spawn_local(async move {
            sleep(Duration::from_millis(LINGER_MS)).await;
            ui.update(|u| u.preloader = u.preloader.advance());
            sleep(Duration::from_millis(FADE_MS)).await;
            ui.update(|u| u.preloader = u.preloader.advance());
        });
    }

    let class = move || {
        if ui.get().preloader == PreloaderPhase::Loading {
            "preloader"
        } else {
            "preloader hidden"
        }
    };

    view! {
        <Show when=move || ui.get().preloader != PreloaderPhase::Hidden>
            <div class=class aria-hidden="true">
                <div class="preloader__spinner"></div>
            </div>
        </Show>
    }
}
