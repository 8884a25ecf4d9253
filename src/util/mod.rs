//! Browser helpers and the seams the stores are tested through.

pub mod dom;
pub mod lifecycle;
pub mod storage;
