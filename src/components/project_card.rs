//! Flip card for a single project.

use leptos::prelude::*;

use crate::content::Project;
#[cfg(feature = "csr")]
use crate::state::cards::FLIP_LOCK_MS;
use crate::state::cards::{FlipCard, ProjectFilter};

/// A project card with a front face (image and blurb) and a back face
/// (detail, tags, links). Clicking either face flips the card; flips are
/// refused while the 800 ms turn is still running, and clicks on links
/// never flip.
#[component]
pub fn ProjectCard(project: &'static Project) -> impl IntoView {
    let filter = expect_context::<RwSignal<ProjectFilter>>();
    let card = RwSignal::new(FlipCard::default());

    let visible = move || filter.get().admits(project.category);

    let flip = move |to_back: bool| {
        let mut granted = false;
        card.update(|c| {
            granted = if to_back {
                c.flip_to_back()
            } else {
                c.flip_to_front()
            };
        });
        if granted {
            #[cfg(feature = "csr")]
            {
                leptos::task::spawn_local(async move {
                    gloo_timers::future::sleep(std::time::Duration::from_millis(u64::from(
                        FLIP_LOCK_MS,
                    )))
                    .await;
                    card.update(FlipCard::settle);
                });
            }
        }
    };

    let inner_class = move || {
        if card.get().flipped {
            "card-inner flipped"
        } else {
            "card-inner"
        }
    };

    // Links act as links; they must not reach the card's flip handler.
    let shield = |ev: leptos::ev::MouseEvent| ev.stop_propagation();

    view! {
        <article
            class="project-card reveal-element"
            style:display=move || if visible() { String::new() } else { "none".to_owned() }
        >
            <div class=inner_class>
                <div class="card-front" on:click=move |_| flip(true)>
                    <div class="project-image">
                        <img src=project.image alt=project.title loading="lazy"/>
                    </div>
                    <div class="project-info">
                        <h3>{project.title}</h3>
                        <p>{project.blurb}</p>
                        <span class="flip-hint" aria-hidden="true">"Click to flip"</span>
                    </div>
                </div>
                <div class="card-back" on:click=move |_| flip(false)>
                    <h3>{project.title}</h3>
                    <p>{project.detail}</p>
                    <ul class="project-tags">
                        {project.tags.iter().map(|tag| view! { <li>{*tag}</li> }).collect::<Vec<_>>()}
                    </ul>
                    <div class="card-back__links">
                        <a href=project.demo_url target="_blank" rel="noreferrer" on:click=shield>
                            "Live demo"
                        </a>
                        <a href=project.source_url target="_blank" rel="noreferrer" on:click=shield>
                            "Source"
                        </a>
                        <button
                            class="flip-back"
                            on:click=move |ev: leptos::ev::MouseEvent| {
                                ev.stop_propagation();
                                flip(false);
                            }
                        >
                            "Back"
                        </button>
                    </div>
                </div>
            </div>
        </article>
    }
}
