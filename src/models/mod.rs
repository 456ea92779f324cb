// Derived, read-only models rendered by the UI and the text report

pub mod dashboard;

pub use dashboard::{DashboardModel, YearWindow};
