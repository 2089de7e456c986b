//! Pages
//!
//! Top-level page components for each route.

pub mod alerts;
pub mod board;
pub mod projects;
pub mod timeline;

pub use alerts::Alerts;
pub use board::Board;
pub use projects::Projects;
pub use timeline::Timeline;
