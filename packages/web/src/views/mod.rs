mod dashboard_layout;
pub use dashboard_layout::DashboardLayout;

mod site_layout;
pub use site_layout::SiteLayout;

mod login;
pub use login::Login;

mod pages;
pub use pages::{
    Communication, Faq, Home, Leadership, NotFound, OrganizationDashboard, Pricing,
    StudentDashboard, Team,
};

use crate::Route;

/// Resolve an in-app path to a route, falling back to the landing page.
pub(crate) fn route_for_path(path: &str) -> Route {
    path.parse::<Route>().unwrap_or_else(|e| {
        tracing::warn!("Unroutable path {}: {}", path, e);
        Route::Home {}
    })
}
