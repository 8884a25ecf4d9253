use leptos::prelude::*;

use crate::content::ABOUT_TEXT;
use crate::state::sections::SectionId;

#[component]
pub fn About() -> impl IntoView {
    view! {
        <section id=SectionId::About.dom_id() class="section">
            <div class="panel">
                <h2 class="section__title">"About Me"</h2>
                <p class="section__text">{ABOUT_TEXT}</p>
            </div>
        </section>
    }
}
