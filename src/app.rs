//! Root application component and startup wiring.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};

use crate::content::TESTIMONIALS;
use crate::pages::home::HomePage;
use crate::state::cards::ProjectFilter;
use crate::state::form::FormState;
use crate::state::slider::SliderState;
use crate::state::theme::ThemeController;
use crate::state::ui::UiState;

/// Root application component.
///
/// Provides all shared state contexts, resolves the starting theme, and
/// renders the single page.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // Reactive state contexts for all child components.
    let theme = RwSignal::new(ThemeController::default());
    let ui = RwSignal::new(UiState::default());
    let filter = RwSignal::new(ProjectFilter::default());
    let form = RwSignal::new(FormState::default());
    let slider = RwSignal::new(SliderState::new(TESTIMONIALS.len()));

    provide_context(theme);
    provide_context(ui);
    provide_context(filter);
    provide_context(form);
    provide_context(slider);

    // Apply the stored or OS-derived theme and follow OS changes from
    // here on. Explicit toggles pin the OS signal off.
    crate::util::theme_dom::boot(theme);

    view! {
        <Title text="Alex Morgan | Creative Developer"/>
        <HomePage/>
    }
}
