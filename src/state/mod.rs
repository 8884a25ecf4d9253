//! View-state stores.
//!
//! DESIGN
//! ======
//! Each store has exactly one writer and is held in its own `RwSignal`,
//! provided via context from the root component. The types here are plain
//! Rust with no browser dependencies so they test natively.

pub mod sections;
pub mod splash;
pub mod theme;
pub mod ui;
