//! UI components, one per file.

pub mod about;
pub mod certifications;
pub mod contact;
pub mod footer;
pub mod hero;
pub mod icons;
pub mod projects;
pub mod site_header;
pub mod skills;
pub mod splash_screen;
