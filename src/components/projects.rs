//! Projects section: category filters over the flip-card grid.

use leptos::prelude::*;

use crate::components::project_card::ProjectCard;
use crate::content::PROJECTS;
use crate::state::cards::ProjectFilter;

#[component]
pub fn Projects() -> impl IntoView {
    let filter = expect_context::<RwSignal<ProjectFilter>>();

    let buttons = ProjectFilter::ALL
        .iter()
        .map(|f| {
            let f = *f;
            view! {
                <button
                    class=move || {
                        if filter.get() == f { "filter-btn active" } else { "filter-btn" }
                    }
                    on:click=move |_| {
                        filter.set(f);
                        crate::util::reveal::replay_cards();
                    }
                >
                    {f.label()}
                </button>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <section id="projects" class="section projects">
            <div class="section-header reveal-element">
                <p class="section-subtitle">"What I have built"</p>
                <h2 class="section-title">"Projects"</h2>
                <span class="title-underline" aria-hidden="true"></span>
            </div>
            <div class="project-filters">{buttons}</div>
            <div class="projects__grid">
                {PROJECTS
                    .iter()
                    .map(|project| view! { <ProjectCard project=project/> })
                    .collect::<Vec<_>>()}
            </div>
        </section>
    }
}
