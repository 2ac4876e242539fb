//! Page bodies. Routing, guarding and navigation live in the platform package.

mod communication;
mod content;
mod dashboard;
mod faq;
mod home;
mod leadership;
mod login;
mod not_found;
mod pricing;
mod team;

pub use communication::CommunicationView;
pub use dashboard::{OrganizationOverviewView, StudentOverviewView};
pub use faq::FaqView;
pub use home::HomeView;
pub use leadership::LeadershipView;
pub use login::LoginView;
pub use not_found::NotFoundView;
pub use pricing::PricingView;
pub use team::TeamView;
