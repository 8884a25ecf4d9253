use leptos::prelude::*;

use crate::components::icons::SkillGlyph;
use crate::content::SKILLS;
use crate::state::sections::SectionId;

#[component]
pub fn Skills() -> impl IntoView {
    view! {
        <section id=SectionId::Skills.dom_id() class="section">
            <h2 class="section__title section__title--centered">"Skills"</h2>
            <div class="panel">
                <div class="skill-grid">
                    {SKILLS
                        .iter()
                        .map(|skill| {
                            view! {
                                <div class="skill">
                                    <span class="skill__icon">
                                        <SkillGlyph icon=skill.icon/>
                                    </span>
                                    <span class="skill__name">{skill.name}</span>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </div>
        </section>
    }
}
