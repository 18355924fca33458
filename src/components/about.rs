//! About section: skill progress bars and the career timeline.

use leptos::prelude::*;

use crate::content::{SKILLS, TIMELINE};

#[component]
pub fn About() -> impl IntoView {
    let skills = SKILLS
        .iter()
        .map(|skill| {
            let width = format!("{}%", skill.level);
            view! {
                <div class="skill-progress reveal-element">
                    <div class="skill-progress__label">
                        <span>{skill.name}</span>
                        <span>{width.clone()}</span>
                    </div>
                    <div class="skill-progress__track">
                        <div class="progress" data-width=width></div>
                    </div>
                </div>
            }
        })
        .collect::<Vec<_>>();

    let timeline = TIMELINE
        .iter()
        .map(|entry| {
            view! {
                <div class="timeline-item reveal-element">
                    <span class="timeline-marker" aria-hidden="true"></span>
                    <div class="timeline-item__body">
                        <span class="timeline-item__years">{entry.years}</span>
                        <h4>{format!("{}, {}", entry.role, entry.org)}</h4>
                        <p>{entry.summary}</p>
                    </div>
                </div>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <section id="about" class="section about">
            <div class="section-header reveal-element">
                <p class="section-subtitle">"Who I am"</p>
                <h2 class="section-title">"About Me"</h2>
                <span class="title-underline" aria-hidden="true"></span>
            </div>
            <div class="about__layout">
                <div class="about__intro reveal-element">
                    <p>
                        "Nine years of building for the web, the last three of \
                         them spent shipping Rust to browsers. I care about \
                         interfaces that stay fast under real data and stay \
                         readable under real users."
                    </p>
                </div>
                <div class="about__skills">{skills}</div>
                <div class="about__timeline">{timeline}</div>
            </div>
        </section>
    }
}
