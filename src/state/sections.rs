//! Scroll-linked active section tracking.
//!
//! The page is a fixed, ordered list of sections. On every scroll event
//! the tracker reads each section's viewport-relative box and picks the
//! first one that straddles the activation line, a fixed distance below
//! the top of the viewport. When nothing straddles the line (overscroll,
//! gaps, missing elements) the previous answer stands.

#[cfg(test)]
#[path = "sections_test.rs"]
mod sections_test;

/// Distance in CSS pixels from the viewport top to the activation line.
pub const DEFAULT_ACTIVATION_OFFSET: f64 = 100.0;

/// Page sections, in document order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum SectionId {
    #[default]
    Hero,
    About,
    Projects,
    Certifications,
    Skills,
    Contact,
}

impl SectionId {
    /// Every section in declared order. Selection ties resolve in this order.
    pub const ALL: [Self; 6] = [
        Self::Hero,
        Self::About,
        Self::Projects,
        Self::Certifications,
        Self::Skills,
        Self::Contact,
    ];

    /// Sections with a navigation link. The hero is reached by scrolling to top.
    pub const NAV: [Self; 5] = [Self::About, Self::Projects, Self::Certifications, Self::Skills, Self::Contact];

    /// DOM element id, also used as the `#fragment` in nav links.
    #[must_use]
    pub fn dom_id(self) -> &'static str {
        match self {
            Self::Hero => "hero",
            Self::About => "about",
            Self::Projects => "projects",
            Self::Certifications => "certifications",
            Self::Skills => "skills",
            Self::Contact => "contact",
        }
    }

    /// Navigation label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Hero => "Hero",
            Self::About => "About",
            Self::Projects => "Projects",
            Self::Certifications => "Certifications",
            Self::Skills => "Skills",
            Self::Contact => "Contact",
        }
    }

    #[must_use]
    pub fn href(self) -> String {
        format!("#{}", self.dom_id())
    }
}

/// Vertical extent of a section relative to the viewport top, in CSS pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SectionBounds {
    pub top: f64,
    pub bottom: f64,
}

impl SectionBounds {
    #[must_use]
    pub fn new(top: f64, bottom: f64) -> Self {
        Self { top, bottom }
    }

    /// Whether the horizontal line at `y` falls within this extent (inclusive).
    #[must_use]
    pub fn contains_line(&self, y: f64) -> bool {
        self.top <= y && self.bottom >= y
    }
}

/// Source of section geometry, normally the live DOM.
pub trait SectionGeometry {
    /// Current bounds of `section`, or `None` if no element is registered for it.
    fn bounds(&self, section: SectionId) -> Option<SectionBounds>;
}

/// First section, in declared order, whose bounds contain the activation line.
pub fn find_active(geometry: &impl SectionGeometry, offset: f64) -> Option<SectionId> {
    SectionId::ALL
        .into_iter()
        .find(|&section| geometry.bounds(section).is_some_and(|b| b.contains_line(offset)))
}

/// Sole owner of the active section value.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SectionTracker {
    active: SectionId,
    offset: f64,
}

impl Default for SectionTracker {
    fn default() -> Self {
        Self::new(DEFAULT_ACTIVATION_OFFSET)
    }
}

impl SectionTracker {
    #[must_use]
    pub fn new(offset: f64) -> Self {
        Self { active: SectionId::default(), offset }
    }

    #[must_use]
    pub fn active(&self) -> SectionId {
        self.active
    }

    #[must_use]
    pub fn is_active(&self, section: SectionId) -> bool {
        self.active == section
    }

    /// Recompute from current geometry. Returns `true` if the active section changed.
    ///
    /// Idempotent for unchanged geometry, so callers may drop or coalesce
    /// intermediate scroll events.
    pub fn recompute(&mut self, geometry: &impl SectionGeometry) -> bool {
        match find_active(geometry, self.offset) {
            Some(section) if section != self.active => {
                log::debug!("active section: {} -> {}", self.active.dom_id(), section.dom_id());
                self.active = section;
                true
            }
            _ => false,
        }
    }
}
