//! Theme persistence and DOM application.
//!
//! Reads the visitor's preference from `localStorage` and applies the
//! `dark-mode` / `light-mode` marker to `<body>`. Toggle writes back to
//! `localStorage`, updates the marker, and runs the decorative transition
//! pass. Requires a browser environment; every entry point here no-ops
//! when compiled without the `csr` feature.
//!
//! ERROR HANDLING
//! ==============
//! Everything is best-effort against optional browser state: a missing
//! `<body>`, overlay target, or storage area no-ops the dependent step.
//! A failed storage write leaves the preference unset for the session;
//! the in-memory theme still applies, it just will not survive a reload.

use leptos::prelude::{GetUntracked, RwSignal, Set, Update};

use crate::state::theme::{EffectiveTheme, ThemeController};

/// localStorage key holding the explicit preference.
#[cfg(feature = "csr")]
const STORAGE_KEY: &str = "theme";

/// Overlay fade-in time before the fade-out starts (ms).
#[cfg(feature = "csr")]
const OVERLAY_IN_MS: u64 = 300;
/// Overlay fade-out time before the node is removed (ms).
#[cfg(feature = "csr")]
const OVERLAY_OUT_MS: u64 = 500;
/// Lifetime of the `theme-transition` body class (ms).
#[cfg(feature = "csr")]
const TRANSITION_CLASS_MS: u64 = 1000;
/// Lifetime of the surface pulse class (ms).
#[cfg(feature = "csr")]
const PULSE_MS: u64 = 600;

/// Surfaces that get the decorative pulse on toggle.
#[cfg(feature = "csr")]
const SURFACE_SELECTOR: &str = ".card-front, .card-back, .testimonial-content, .form-field";

/// Page-load initialization: resolve the starting theme from storage and
/// the OS signal, apply the marker, and subscribe to OS scheme changes
/// for the rest of the session. Never writes storage.
pub fn boot(theme: RwSignal<ThemeController>) {
    let stored = read_stored();
    let controller = ThemeController::initialize(stored.as_deref(), system_prefers_dark());
    theme.set(controller);
    apply(controller.effective());
    watch_system(theme);
    observe_marker();
}

/// Explicit user toggle: flip the machine, apply and persist the result,
/// and run the decorative transition pass.
pub fn toggle(theme: RwSignal<ThemeController>) {
    let mut written = "";
    theme.update(|t| written = t.toggle());
    let effective = theme.get_untracked().effective();
    apply(effective);
    persist(written);
    spawn_toggle_transition(effective);
}

/// Read the raw stored preference, if storage is reachable.
pub fn read_stored() -> Option<String> {
    #[cfg(feature = "csr")]
    {
        let window = web_sys::window()?;
        let storage = window.local_storage().ok().flatten()?;
        storage.get_item(STORAGE_KEY).ok().flatten()
    }
    #[cfg(not(feature = "csr"))]
    {
        None
    }
}

/// Persist an explicit choice. Failures (privacy mode, quota) are logged
/// and dropped.
pub fn persist(value: &str) {
    #[cfg(feature = "csr")]
    {
        let Some(window) = web_sys::window() else {
            return;
        };
        match window.local_storage() {
            Ok(Some(storage)) => {
                if storage.set_item(STORAGE_KEY, value).is_err() {
                    log::warn!("theme preference not persisted: storage write failed");
                }
            }
            _ => log::warn!("theme preference not persisted: storage unavailable"),
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = value;
    }
}

/// Set the marker for a theme on `<body>`: the opposing marker is removed
/// first, so exactly one of the two classes is ever present.
pub fn apply(theme: EffectiveTheme) {
    #[cfg(feature = "csr")]
    {
        if let Some(body) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.body())
        {
            let classes = body.class_list();
            let _ = classes.remove_1(theme.cleared_class());
            let _ = classes.add_1(theme.marker_class());
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = theme;
    }
}

/// Whether the OS currently prefers a dark color scheme.
pub fn system_prefers_dark() -> bool {
    #[cfg(feature = "csr")]
    {
        web_sys::window()
            .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
            .is_some_and(|mq| mq.matches())
    }
    #[cfg(not(feature = "csr"))]
    {
        false
    }
}

/// Subscribe to OS color-scheme changes for the lifetime of the page.
/// The controller ignores the event once an explicit preference exists.
fn watch_system(theme: RwSignal<ThemeController>) {
    #[cfg(feature = "csr")]
    {
        use wasm_bindgen::JsCast;
        use wasm_bindgen::closure::Closure;

        let Some(query) = web_sys::window()
            .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
        else {
            return;
        };

        let on_change = Closure::<dyn FnMut(web_sys::MediaQueryListEvent)>::new(
            move |event: web_sys::MediaQueryListEvent| {
                let mut changed = false;
                theme.update(|t| changed = t.on_system_preference_change(event.matches()));
                if changed {
                    apply(theme.get_untracked().effective());
                }
            },
        );
        query.set_onchange(Some(on_change.as_ref().unchecked_ref()));
        // Subscription lives for the page session.
        on_change.forget();
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = theme;
    }
}

/// Watch the body marker and re-apply presentation details plain CSS
/// cannot express (header backdrop, card shadows). One-way: the observer
/// reads the marker, never writes it.
fn observe_marker() {
    #[cfg(feature = "csr")]
    {
        use wasm_bindgen::JsCast;
        use wasm_bindgen::closure::Closure;

        let Some(body) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.body())
        else {
            return;
        };

        let callback = Closure::<dyn FnMut(js_sys::Array, web_sys::MutationObserver)>::new(
            move |mutations: js_sys::Array, _observer: web_sys::MutationObserver| {
                let class_changed = mutations.iter().any(|m| {
                    m.dyn_into::<web_sys::MutationRecord>()
                        .ok()
                        .and_then(|r| r.attribute_name())
                        .is_some_and(|name| name == "class")
                });
                if class_changed {
                    reconcile_marker_styles();
                }
            },
        );
        if let Ok(observer) = web_sys::MutationObserver::new(callback.as_ref().unchecked_ref()) {
            let options = web_sys::MutationObserverInit::new();
            options.set_attributes(true);
            let _ = observer.observe_with_options(&body, &options);
        }
        callback.forget();

        // Initial pass for the marker boot() just applied.
        reconcile_marker_styles();
    }
}

#[cfg(feature = "csr")]
fn reconcile_marker_styles() {
    use wasm_bindgen::JsCast;

    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let dark = document
        .body()
        .is_some_and(|b| b.class_list().contains("dark-mode"));

    // The compact header's backdrop tracks the theme.
    if let Ok(Some(header)) = document.query_selector(".site-header.scrolled") {
        if let Ok(el) = header.dyn_into::<web_sys::HtmlElement>() {
            let color = if dark {
                "rgba(18, 18, 18, 0.95)"
            } else {
                "rgba(255, 255, 255, 0.95)"
            };
            let _ = el.style().set_property("background-color", color);
        }
    }

    // Card shadows need more depth on dark surfaces.
    if let Ok(cards) = document.query_selector_all(".card-front, .card-back") {
        let shadow = if dark {
            "0 8px 30px rgba(0, 0, 0, 0.5)"
        } else {
            "0 8px 30px rgba(0, 0, 0, 0.1)"
        };
        for i in 0..cards.length() {
            if let Some(el) = cards
                .item(i)
                .and_then(|n| n.dyn_into::<web_sys::HtmlElement>().ok())
            {
                let _ = el.style().set_property("box-shadow", shadow);
            }
        }
    }
}

/// Decorative transition on toggle: a short-lived `theme-transition` body
/// class, a full-screen fade overlay removed after its two-step fade
/// (~800 ms total), and a pulse over the fixed surface set. All delays
/// are fire-and-forget and uncancelled; a second rapid toggle issues its
/// own timers and the last marker write wins.
fn spawn_toggle_transition(to: EffectiveTheme) {
    #[cfg(feature = "csr")]
    {
        use gloo_timers::future::sleep;
        use std::time::Duration;

        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };
        let Some(body) = document.body() else {
            return;
        };

        let _ = body.class_list().add_1("theme-transition");
        {
            let body = body.clone();
            leptos::task::spawn_local(async move {
                sleep(Duration::from_millis(TRANSITION_CLASS_MS)).await;
                let _ = body.class_list().remove_1("theme-transition");
            });
        }

        if let Ok(overlay) = document.create_element("div") {
            let _ = overlay.set_attribute("class", "theme-overlay");
            let background = if to.is_dark() { "#121212" } else { "#ffffff" };
            let _ = overlay.set_attribute("style", &format!("background-color: {background};"));
            if body.append_child(&overlay).is_ok() {
                leptos::task::spawn_local(async move {
                    let _ = overlay.class_list().add_1("theme-overlay--visible");
                    sleep(Duration::from_millis(OVERLAY_IN_MS)).await;
                    let _ = overlay.class_list().remove_1("theme-overlay--visible");
                    sleep(Duration::from_millis(OVERLAY_OUT_MS)).await;
                    overlay.remove();
                });
            }
        }

        pulse_surfaces(&document);
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = to;
    }
}

#[cfg(feature = "csr")]
fn pulse_surfaces(document: &web_sys::Document) {
    use gloo_timers::future::sleep;
    use std::time::Duration;
    use wasm_bindgen::JsCast;

    let Ok(nodes) = document.query_selector_all(SURFACE_SELECTOR) else {
        return;
    };
    for i in 0..nodes.length() {
        let Some(el) = nodes
            .item(i)
            .and_then(|n| n.dyn_into::<web_sys::Element>().ok())
        else {
            continue;
        };
        let _ = el.class_list().add_1("theme-pulse");
        leptos::task::spawn_local(async move {
            sleep(Duration::from_millis(PULSE_MS)).await;
            let _ = el.class_list().remove_1("theme-pulse");
        });
    }
}
