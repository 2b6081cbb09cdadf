//! Report module - tables and JSON exports of run results

pub mod export;
pub mod scores;
pub mod summary;

pub use export::*;
pub use scores::*;
pub use summary::*;
