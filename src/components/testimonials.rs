//! Testimonial slider with dot navigation and timed auto-advance.

use leptos::prelude::*;

use crate::content::TESTIMONIALS;
use crate::state::slider::SliderState;
#[cfg(feature = "csr")]
use crate::state::slider::AUTO_ADVANCE_MS;

#[component]
pub fn Testimonials() -> impl IntoView {
    let slider = expect_context::<RwSignal<SliderState>>();

    // Auto-advance task. A dot click bumps the epoch, so the tick that was
    // already sleeping when the visitor clicked skips its advance and the
    // clock effectively restarts from the manual selection.
    #[cfg(feature = "csr")]
    {
        leptos::task::spawn_local(async move {
            loop {
                let before = slider.get_untracked().epoch();
                gloo_timers::future::sleep(std::time::Duration::from_millis(u64::from(
                    AUTO_ADVANCE_MS,
                )))
                .await;
                if slider.get_untracked().epoch() == before {
                    slider.update(SliderState::advance);
                }
            }
        });
    }

    let slides = TESTIMONIALS
        .iter()
        .enumerate()
        .map(|(i, t)| {
            view! {
                <figure class=move || {
                    if slider.get().is_active(i) {
                        "testimonial-slide active"
                    } else {
                        "testimonial-slide"
                    }
                }>
                    <blockquote class="testimonial-content">{t.quote}</blockquote>
                    <figcaption>
                        <span class="testimonial-name">{t.name}</span>
                        <span class="testimonial-role">{t.role}</span>
                    </figcaption>
                </figure>
            }
        })
        .collect::<Vec<_>>();

    let dots = (0..TESTIMONIALS.len())
        .map(|i| {
            view! {
                <button
                    class=move || {
                        if slider.get().is_active(i) { "slider-dot active" } else { "slider-dot" }
                    }
                    aria-label=format!("Show testimonial {}", i + 1)
                    on:click=move |_| slider.update(|s| s.select(i))
                ></button>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <section id="testimonials" class="section testimonials">
            <div class="section-header reveal-element">
                <p class="section-subtitle">"Kind words"</p>
                <h2 class="section-title">"Testimonials"</h2>
                <span class="title-underline" aria-hidden="true"></span>
            </div>
            <div class="testimonial-slider reveal-element">
                <div class="testimonial-slides">{slides}</div>
                <div class="slider-dots">{dots}</div>
            </div>
        </section>
    }
}
