//! Router configuration

use letsgo_common::session::SessionId;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::pages::*;

/// Application routes
#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/otp")]
    Otp,
    #[at("/user-dashboard")]
    UserDashboard,
    #[not_found]
    #[at("/404")]
    NotFound,
}

/// Switch function to render pages
pub fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! { <home::Home /> },
        Route::Otp => html! { <otp::OtpVerify /> },
        Route::UserDashboard => html! { <dashboard::UserDashboard /> },
        Route::NotFound => html! { <h1>{"404 - Page Not Found"}</h1> },
    }
}

/// Session identifier from the current location's `mobileNumber` parameter
#[hook]
pub fn use_session() -> Option<SessionId> {
    let location = use_location();
    location.and_then(|location| SessionId::from_query(location.query_str()))
}

/// Send the user home once if the page was opened without a session.
///
/// `replace` avoids leaving the session-less URL in history.
#[hook]
pub fn use_require_session(session: &Option<SessionId>, replace: bool) {
    let navigator = use_navigator();

    use_effect_with(session.is_none(), move |missing| {
        if *missing {
            tracing::debug!("No mobileNumber in query, redirecting home");
            if let Some(navigator) = navigator {
                if replace {
                    navigator.replace(&Route::Home);
                } else {
                    navigator.push(&Route::Home);
                }
            }
        }
    });
}
