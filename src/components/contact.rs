//! Contact section. The form is display-only; nothing is sent anywhere.

use leptos::prelude::*;

use crate::state::sections::SectionId;

#[component]
pub fn Contact() -> impl IntoView {
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        log::info!("contact form submission ignored: no backend configured");
    };

    view! {
        <section id=SectionId::Contact.dom_id() class="section">
            <div class="panel">
                <h2 class="section__title">"Get in Touch"</h2>
                <form class="contact-form" on:submit=on_submit>
                    <input class="contact-form__field" type="text" name="name" placeholder="Your Name"/>
                    <input class="contact-form__field" type="email" name="email" placeholder="Your Email"/>
                    <textarea class="contact-form__field" name="message" placeholder="Your Message"></textarea>
                    <button class="btn btn--primary" type="submit">
                        "Send Message"
                    </button>
                </form>
            </div>
        </section>
    }
}
