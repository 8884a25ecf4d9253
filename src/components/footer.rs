use leptos::prelude::*;

use crate::content::copyright_line;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="site-footer">
            <p>{copyright_line()}</p>
        </footer>
    }
}
