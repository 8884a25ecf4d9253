//! Root application component and context providers.

use leptos::prelude::*;
use leptos_meta::{Meta, Stylesheet, Title, provide_meta_context};

use crate::components::splash_screen::SplashScreen;
use crate::config::{self, SiteConfig};
use crate::content::{OWNER_NAME, SITE_DESCRIPTION};
use crate::pages::home::HomePage;
use crate::state::sections::SectionTracker;
use crate::state::splash::SplashController;
use crate::state::theme::ThemeStore;
use crate::state::ui::UiState;
use crate::util::dom;
use crate::util::storage::LocalStorage;

/// Theme store backed by `window.localStorage`.
pub type SiteTheme = ThemeStore<LocalStorage>;

/// Root application component.
///
/// Resolves config, builds one store per piece of view state, and provides
/// each through context. The `<html>` dark class follows the theme store.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = config::load();
    provide_app_state(&config);
    provide_context(config);

    let theme = expect_context::<RwSignal<SiteTheme>>();
    let splash = expect_context::<RwSignal<SplashController>>();

    Effect::new(move || dom::apply_theme(theme.with(SiteTheme::current_theme)));

    view! {
        <Stylesheet id="folio" href="/style/folio.css"/>
        <Title text=OWNER_NAME/>
        <Meta name="description" content=SITE_DESCRIPTION/>

        <Show when=move || splash.with(SplashController::is_mounted)>
            <SplashScreen/>
        </Show>
        <HomePage/>
    }
}

/// Create the view-state stores for one page lifetime and provide them.
fn provide_app_state(config: &SiteConfig) {
    let theme = ThemeStore::load(LocalStorage, config.theme_storage_key.clone(), dom::prefers_dark());

    provide_context(RwSignal::new(theme));
    provide_context(RwSignal::new(SectionTracker::new(config.activation_offset_px)));
    provide_context(RwSignal::new(SplashController::new(config.splash_delay_ms, config.splash_exit_ms)));
    provide_context(RwSignal::new(UiState::default()));
}
