use leptos::prelude::*;

use crate::components::icons::AwardIcon;
use crate::content::CERTIFICATIONS;
use crate::state::sections::SectionId;

/// Certification cards: name, issuer, and year obtained.
#[component]
pub fn Certifications() -> impl IntoView {
    view! {
        <section id=SectionId::Certifications.dom_id() class="section">
            <h2 class="section__title section__title--centered">"Certifications"</h2>
            <div class="card-grid">
                {CERTIFICATIONS
                    .iter()
                    .map(|cert| {
                        view! {
                            <article class="card card--padded">
                                <AwardIcon/>
                                <h3 class="card__title">{cert.name}</h3>
                                <p class="card__text">{cert.issuer}</p>
                                <p class="card__meta">{format!("Obtained in {}", cert.year)}</p>
                            </article>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
        </section>
    }
}
