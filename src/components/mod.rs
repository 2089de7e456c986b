//! UI Components
//!
//! Reusable Leptos components for the dashboard.

pub mod charts;
pub mod kanban;
pub mod nav;
pub mod summary_card;
pub mod toast;

pub use charts::{BarChart, LineChart, PieChart};
pub use kanban::KanbanBoard;
pub use nav::Sidebar;
pub use summary_card::SummaryCard;
pub use toast::Toast;
