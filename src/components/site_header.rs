//! Sticky header: owner name, section navigation, theme and menu toggles.

use leptos::prelude::*;

use crate::app::SiteTheme;
use crate::components::icons::{CloseIcon, MenuIcon, MoonIcon, SunIcon};
use crate::content::OWNER_NAME;
use crate::state::sections::{SectionId, SectionTracker};
use crate::state::theme::Theme;
use crate::state::ui::UiState;

/// Sticky top header.
///
/// The inline nav is shown on wide viewports; narrow viewports get a menu
/// button that expands the same links in a stacked list.
#[component]
pub fn SiteHeader() -> impl IntoView {
    let theme = expect_context::<RwSignal<SiteTheme>>();
    let ui = expect_context::<RwSignal<UiState>>();

    let current = move || theme.with(SiteTheme::current_theme);
    let menu_open = move || ui.get().menu_open;

    let on_toggle_theme = move |_| {
        theme.update(|t| {
            t.toggle();
        });
    };
    let on_toggle_menu = move |_| ui.update(UiState::toggle_menu);

    view! {
        <header class="site-header">
            <nav class="site-nav">
                <div class="site-nav__bar">
                    <a href=SectionId::Hero.href() class="site-nav__brand">
                        {OWNER_NAME}
                    </a>
                    <div class="site-nav__actions">
                        <ul class="site-nav__links">
                            <NavLinks stacked=false/>
                        </ul>
                        <button
                            class="icon-button"
                            title="Toggle theme"
                            aria-label="Toggle theme"
                            on:click=on_toggle_theme
                        >
                            {move || match current() {
                                Theme::Light => view! { <MoonIcon/> }.into_any(),
                                Theme::Dark => view! { <SunIcon/> }.into_any(),
                            }}
                        </button>
                        <button
                            class="icon-button site-nav__menu-button"
                            aria-label="Toggle menu"
                            aria-expanded=move || menu_open().to_string()
                            on:click=on_toggle_menu
                        >
                            {move || {
                                if menu_open() {
                                    view! { <CloseIcon/> }.into_any()
                                } else {
                                    view! { <MenuIcon/> }.into_any()
                                }
                            }}
                        </button>
                    </div>
                </div>
                <Show when=menu_open>
                    <ul class="site-nav__mobile-links">
                        <NavLinks stacked=true/>
                    </ul>
                </Show>
            </nav>
        </header>
    }
}

/// One link per navigable section, highlighted when that section is active.
///
/// Following a stacked (mobile) link also collapses the menu.
#[component]
fn NavLinks(stacked: bool) -> impl IntoView {
    let tracker = expect_context::<RwSignal<SectionTracker>>();
    let ui = expect_context::<RwSignal<UiState>>();

    SectionId::NAV
        .into_iter()
        .map(|section| {
            let is_active = move || tracker.get().is_active(section);
            let on_click = move |_| {
                if stacked {
                    ui.update(UiState::close_menu);
                }
            };
            view! {
                <li class="site-nav__item">
                    <a
                        href=section.href()
                        class="site-nav__link"
                        class:site-nav__link--stacked=stacked
                        class:site-nav__link--active=is_active
                        on:click=on_click
                    >
                        {section.label()}
                    </a>
                </li>
            }
        })
        .collect::<Vec<_>>()
}
