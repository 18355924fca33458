//! Scroll-driven reveal sweep.
//!
//! Elements opt in with the `reveal-element` class and receive `revealed`
//! once they enter the viewport band; skill bars
//! (`.skill-progress .progress[data-width]`) get their target width set
//! when they reveal. The sweep runs on every scroll event plus once at
//! startup. Revealed elements stay revealed.

/// Delay before re-sweeping after a project-filter change (ms), giving
/// the stripped classes a frame to take effect so the animation replays.
#[cfg(feature = "csr")]
const CARD_REPLAY_DELAY_MS: u64 = 10;

/// Reveal every opted-in element currently inside the viewport band.
pub fn sweep() {
    #[cfg(feature = "csr")]
    {
        use wasm_bindgen::JsCast;

        use crate::state::ui::in_reveal_zone;

        let Some(window) = web_sys::window() else {
            return;
        };
        let Some(document) = window.document() else {
            return;
        };
        let viewport = window
            .inner_height()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(0.0);

        if let Ok(nodes) = document.query_selector_all(".reveal-element") {
            for i in 0..nodes.length() {
                let Some(el) = nodes
                    .item(i)
                    .and_then(|n| n.dyn_into::<web_sys::Element>().ok())
                else {
                    continue;
                };
                let classes = el.class_list();
                if classes.contains("revealed") {
                    continue;
                }
                let rect = el.get_bounding_client_rect();
                if in_reveal_zone(rect.top(), rect.bottom(), viewport) {
                    let _ = classes.add_1("revealed");
                }
            }
        }

        // Skill bars animate to their target width on first reveal.
        if let Ok(bars) = document.query_selector_all(".skill-progress .progress") {
            for i in 0..bars.length() {
                let Some(el) = bars
                    .item(i)
                    .and_then(|n| n.dyn_into::<web_sys::HtmlElement>().ok())
                else {
                    continue;
                };
                if el.class_list().contains("animated") {
                    continue;
                }
                let rect = el.get_bounding_client_rect();
                if !in_reveal_zone(rect.top(), rect.bottom(), viewport) {
                    continue;
                }
                if let Some(width) = el.get_attribute("data-width") {
                    let _ = el.style().set_property("width", &width);
                    let _ = el.class_list().add_1("animated");
                }
            }
        }
    }
}

/// Replay the entry animation of the project cards after a filter change:
/// strip `revealed`, let the style settle, then sweep again.
pub fn replay_cards() {
    #[cfg(feature = "csr")]
    {
        use wasm_bindgen::JsCast;

        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };
        if let Ok(cards) = document.query_selector_all(".project-card") {
            for i in 0..cards.length() {
                if let Some(el) = cards
                    .item(i)
                    .and_then(|n| n.dyn_into::<web_sys::Element>().ok())
                {
                    let _ = el.class_list().remove_1("revealed");
                }
            }
        }
        leptos::task::spawn_local(async move {
            gloo_timers::future::sleep(std::time::Duration::from_millis(CARD_REPLAY_DELAY_MS))
                .await;
            sweep();
        });
    }
}
