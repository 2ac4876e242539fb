//! Data models shared by the server functions and the UI.

mod client;
mod user;

pub use client::ClientSettings;
pub use store::AccountType;
pub use user::UserInfo;
