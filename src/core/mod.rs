pub mod backup;
pub mod check;
pub mod merge;
pub mod photo;
pub mod progress;
pub mod reset;
pub mod stats;
pub mod tracker;

pub use tracker::Tracker;
