use leptos::prelude::*;

use crate::content::{HERO_CTA, HERO_HEADLINE, HERO_TAGLINE};
use crate::state::sections::SectionId;

/// Opening section with the headline and a jump to the projects.
#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section id=SectionId::Hero.dom_id() class="section section--hero">
            <h2 class="section__headline">{HERO_HEADLINE}</h2>
            <p class="section__tagline">{HERO_TAGLINE}</p>
            <a href=SectionId::Projects.href() class="btn btn--primary">
                {HERO_CTA}
            </a>
        </section>
    }
}
