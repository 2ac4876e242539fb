//! Presentational components shared by the site and the dashboard.

pub mod cards;
pub mod communication;
pub mod dashboard_shell;
pub mod faq;
pub mod hero;
pub mod navbar;
pub mod pricing;
