//! Inline stroke icons (24×24, `currentColor`).

use leptos::prelude::*;

use crate::content::SkillIcon;

/// Shared `<svg>` wrapper for the stroke icons below.
#[component]
fn StrokeIcon(kind: &'static str, children: Children) -> impl IntoView {
    view! {
        <svg
            class=format!("icon icon--{kind}")
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
        >
            {children()}
        </svg>
    }
}

#[component]
pub fn MoonIcon() -> impl IntoView {
    view! {
        <StrokeIcon kind="toggle">
            <path d="M12 3a6 6 0 0 0 9 9 9 9 0 1 1-9-9Z"></path>
        </StrokeIcon>
    }
}

#[component]
pub fn SunIcon() -> impl IntoView {
    view! {
        <StrokeIcon kind="toggle">
            <circle cx="12" cy="12" r="4"></circle>
            <path d="M12 2v2"></path>
            <path d="M12 20v2"></path>
            <path d="m4.93 4.93 1.41 1.41"></path>
            <path d="m17.66 17.66 1.41 1.41"></path>
            <path d="M2 12h2"></path>
            <path d="M20 12h2"></path>
            <path d="m6.34 17.66-1.41 1.41"></path>
            <path d="m19.07 4.93-1.41 1.41"></path>
        </StrokeIcon>
    }
}

#[component]
pub fn MenuIcon() -> impl IntoView {
    view! {
        <StrokeIcon kind="menu">
            <path d="M4 6h16"></path>
            <path d="M4 12h16"></path>
            <path d="M4 18h16"></path>
        </StrokeIcon>
    }
}

#[component]
pub fn CloseIcon() -> impl IntoView {
    view! {
        <StrokeIcon kind="menu">
            <path d="M18 6 6 18"></path>
            <path d="m6 6 12 12"></path>
        </StrokeIcon>
    }
}

#[component]
pub fn AwardIcon() -> impl IntoView {
    view! {
        <StrokeIcon kind="award">
            <circle cx="12" cy="8" r="6"></circle>
            <path d="M15.477 12.89 17 22l-5-3-5 3 1.523-9.11"></path>
        </StrokeIcon>
    }
}

/// Glyph for a skill card.
#[component]
pub fn SkillGlyph(icon: SkillIcon) -> impl IntoView {
    match icon {
        SkillIcon::Code => view! {
            <StrokeIcon kind="skill">
                <polyline points="16 18 22 12 16 6"></polyline>
                <polyline points="8 6 2 12 8 18"></polyline>
            </StrokeIcon>
        }
        .into_any(),
        SkillIcon::Server => view! {
            <StrokeIcon kind="skill">
                <rect x="2" y="2" width="20" height="8" rx="2"></rect>
                <rect x="2" y="14" width="20" height="8" rx="2"></rect>
                <line x1="6" y1="6" x2="6.01" y2="6"></line>
                <line x1="6" y1="18" x2="6.01" y2="18"></line>
            </StrokeIcon>
        }
        .into_any(),
        SkillIcon::Cloud => view! {
            <StrokeIcon kind="skill">
                <path d="M17.5 19H9a7 7 0 1 1 6.71-9h1.79a4.5 4.5 0 1 1 0 9Z"></path>
            </StrokeIcon>
        }
        .into_any(),
        SkillIcon::Database => view! {
            <StrokeIcon kind="skill">
                <ellipse cx="12" cy="5" rx="9" ry="3"></ellipse>
                <path d="M3 5V19A9 3 0 0 0 21 19V5"></path>
                <path d="M3 12A9 3 0 0 0 21 12"></path>
            </StrokeIcon>
        }
        .into_any(),
        SkillIcon::GitBranch => view! {
            <StrokeIcon kind="skill">
                <line x1="6" y1="3" x2="6" y2="15"></line>
                <circle cx="18" cy="6" r="3"></circle>
                <circle cx="6" cy="18" r="3"></circle>
                <path d="M18 9a9 9 0 0 1-9 9"></path>
            </StrokeIcon>
        }
        .into_any(),
    }
}
