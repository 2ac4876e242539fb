use dioxus::prelude::*;

use api::AccountType;
use ui::{AuthProvider, SettingsProvider};
use views::{
    Communication, DashboardLayout, Faq, Home, Leadership, Login, NotFound, OrganizationDashboard,
    Pricing, SiteLayout, StudentDashboard, Team,
};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(SiteLayout)]
        #[route("/")]
        Home {},
        #[route("/team")]
        Team {},
        #[route("/leadership")]
        Leadership {},
        #[route("/pricing")]
        Pricing {},
        #[route("/faq")]
        Faq {},
        #[route("/login?:redirect")]
        Login { redirect: String },
    #[end_layout]
    #[layout(DashboardLayout)]
        #[route("/dashboard")]
        StudentDashboard {},
        #[route("/dashboard/communication")]
        Communication {},
        #[route("/admin")]
        OrganizationDashboard {},
    #[end_layout]
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

impl Route {
    /// Home area of an account type.
    pub fn home_for(account_type: AccountType) -> Self {
        match account_type {
            AccountType::Student => Route::StudentDashboard {},
            AccountType::Organization => Route::OrganizationDashboard {},
        }
    }
}

/// Account types allowed on a dashboard route. `None` admits any signed-in
/// user; public routes are never guarded.
pub fn required_account_types(route: &Route) -> Option<&'static [AccountType]> {
    match route {
        Route::StudentDashboard {} => Some(&[AccountType::Student]),
        Route::OrganizationDashboard {} => Some(&[AccountType::Organization]),
        _ => None,
    }
}

fn main() {
    #[cfg(feature = "server")]
    {
        let result = tokio::runtime::Runtime::new()
            .map_err(BoxError::from)
            .and_then(|runtime| runtime.block_on(launch_server()));
        if let Err(e) = result {
            tracing::error!("Server failed: {}", e);
            std::process::exit(1);
        }
    }

    #[cfg(not(feature = "server"))]
    {
        dioxus::launch(App);
    }
}

#[cfg(feature = "server")]
type BoxError = Box<dyn std::error::Error>;

#[cfg(feature = "server")]
async fn launch_server() -> Result<(), BoxError> {
    use axum::routing::get;
    use dioxus::server::{DioxusRouterExt, ServeConfig};
    use std::time::Duration;
    use tower_sessions::cookie::SameSite;
    use tower_sessions::{Expiry, MemoryStore, SessionManagerLayer};

    tracing_subscriber::fmt::init();
    dotenvy::dotenv().ok();

    // Fail fast on a broken site.toml instead of on the first request
    let config = api::settings::get_settings().await?;

    let session_layer = SessionManagerLayer::new(MemoryStore::default())
        .with_secure(false) // Set to true in production with HTTPS
        .with_same_site(SameSite::Lax)
        .with_expiry(Expiry::OnInactivity(
            Duration::from_secs(60 * 60 * 24 * 7).try_into()?,
        )); // 7 days

    let router = axum::Router::new()
        .route("/sitemap.xml", get(sitemap_xml))
        .serve_dioxus_application(ServeConfig::new(), App)
        .layer(session_layer);

    // Use the address from dx serve or default to localhost:8080
    let addr = dioxus::cli_config::fullstack_address_or_localhost();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("{} listening on {}", config.site.name, addr);

    axum::serve(listener, router.into_make_service()).await?;
    Ok(())
}

#[cfg(feature = "server")]
async fn sitemap_xml() -> axum::response::Response {
    use axum::http::{header, StatusCode};
    use axum::response::IntoResponse;

    let config = match api::settings::get_settings().await {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Sitemap unavailable: {}", e);
            return StatusCode::INTERNAL_SERVER_ERROR.into_response();
        }
    };

    let entries = api::sitemap::generate(&config.site.base_url, &config.sitemap, api::sitemap::today());
    (
        [(header::CONTENT_TYPE, "application/xml; charset=utf-8")],
        api::sitemap::to_xml(&entries),
    )
        .into_response()
}

#[component]
fn App() -> Element {
    rsx! {
        document::Title { "Campus" }
        document::Script { src: ui::TAILWIND_CDN }
        style { {ui::THEME_CSS} }

        SettingsProvider {
            AuthProvider {
                Router::<Route> {}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_home_routes_match_account_home_paths() {
        for account_type in AccountType::ALL {
            assert_eq!(Route::home_for(account_type).to_string(), account_type.home_path());
        }
    }

    #[test]
    fn test_required_account_types() {
        assert_eq!(
            required_account_types(&Route::StudentDashboard {}),
            Some(&[AccountType::Student][..])
        );
        assert_eq!(
            required_account_types(&Route::OrganizationDashboard {}),
            Some(&[AccountType::Organization][..])
        );
        assert_eq!(required_account_types(&Route::Communication {}), None);
    }

    #[test]
    fn test_paths_parse_to_routes() {
        assert_eq!("/dashboard/communication".parse::<Route>().ok(), Some(Route::Communication {}));
        assert_eq!("/admin".parse::<Route>().ok(), Some(Route::OrganizationDashboard {}));
        assert_eq!(
            "/no/such/page".parse::<Route>().ok(),
            Some(Route::NotFound {
                segments: vec!["no".to_string(), "such".to_string(), "page".to_string()]
            })
        );
    }
}
