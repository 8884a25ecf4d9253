//! Project card grid.

use leptos::prelude::*;

use crate::content::{PROJECTS, Project};
use crate::state::sections::SectionId;

#[component]
pub fn Projects() -> impl IntoView {
    view! {
        <section id=SectionId::Projects.dom_id() class="section">
            <h2 class="section__title section__title--centered">"My Projects"</h2>
            <div class="card-grid">
                {PROJECTS.iter().map(|&project| view! { <ProjectCard project/> }).collect::<Vec<_>>()}
            </div>
        </section>
    }
}

#[component]
fn ProjectCard(project: Project) -> impl IntoView {
    view! {
        <article class="card card--project">
            <img class="card__image" src=project.image alt=project.title width="400" height="200"/>
            <div class="card__body">
                <h3 class="card__title">{project.title}</h3>
                <p class="card__text">{project.description}</p>
                <button class="btn btn--outline" type="button">
                    "View Project"
                </button>
            </div>
        </article>
    }
}
