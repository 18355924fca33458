//! The single portfolio page: every section plus the global scroll wiring.

use leptos::prelude::*;

use crate::components::about::About;
use crate::components::contact::Contact;
use crate::components::footer::Footer;
use crate::components::header::Header;
use crate::components::hero::Hero;
use crate::components::preloader::Preloader;
use crate::components::projects::Projects;
use crate::components::testimonials::Testimonials;
#[cfg(feature = "csr")]
use crate::state::ui::UiState;

#[component]
pub fn HomePage() -> impl IntoView {
    // One window scroll listener drives both the header state and the
    // reveal sweep, and runs once at startup to settle the initial state.
    #[cfg(feature = "csr")]
    {
        use wasm_bindgen::JsCast;
        use wasm_bindgen::closure::Closure;

        let ui = expect_context::<RwSignal<UiState>>();
        let on_scroll = move || {
            let y = crate::util::scroll::scroll_y();
            ui.update(|u| {
                u.on_scroll(y);
            });
            crate::util::reveal::sweep();
        };
        on_scroll();

        let listener = Closure::<dyn FnMut()>::new(on_scroll);
        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback("scroll", listener.as_ref().unchecked_ref());
        }
        // Listens for the page session.
        listener.forget();
    }

    view! {
        <Preloader/>
        <Header/>
        <main>
            <Hero/>
            <About/>
            <Projects/>
            <Testimonials/>
            <Contact/>
        </main>
        <Footer/>
    }
}
