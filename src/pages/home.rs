//! Home page: header, content sections, footer.

use leptos::prelude::*;

use crate::components::about::About;
use crate::components::certifications::Certifications;
use crate::components::contact::Contact;
use crate::components::footer::Footer;
use crate::components::hero::Hero;
use crate::components::projects::Projects;
use crate::components::site_header::SiteHeader;
use crate::components::skills::Skills;

/// The single page of the site.
///
/// Owns the scroll listener that drives the active section: registered
/// when the page mounts, removed in `on_cleanup`.
#[component]
pub fn HomePage() -> impl IntoView {
    #[cfg(feature = "csr")]
    {
        use crate::state::sections::SectionTracker;
        use crate::util::dom::{DomSectionGeometry, watch_scroll};

        let tracker = expect_context::<RwSignal<SectionTracker>>();
        let mut listener = watch_scroll(move || {
            tracker.maybe_update(|t| t.recompute(&DomSectionGeometry));
        });
        on_cleanup(move || listener.release());
    }

    view! {
        <div class="page">
            <SiteHeader/>
            <main class="page__main">
                <Hero/>
                <About/>
                <Projects/>
                <Certifications/>
                <Skills/>
                <Contact/>
            </main>
            <Footer/>
        </div>
    }
}
