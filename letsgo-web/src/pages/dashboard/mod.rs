//! User dashboard page
//!
//! Profile editing, booking history and the cab tracking panel, all backed
//! by local storage through
//! [`DashboardState`](letsgo_common::dashboard::DashboardState).

mod booking;
mod history;
mod model;
mod profile;

use letsgo_common::dashboard::{MenuItem, ProfileField};
use web_sys::File;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::browser::read_as_data_url;
use crate::components::{Loading, NoticeToast};
use crate::config::use_config;
use crate::router::{use_require_session, use_session, Route};

use booking::BookingCard;
use history::BookingHistory;
use model::{DashboardAction, DashboardModel};
use profile::ProfilePanel;

#[function_component(UserDashboard)]
pub fn user_dashboard() -> Html {
    let config = use_config();
    let navigator = use_navigator();
    let session = use_session();
    let model = {
        let keys = config.storage.clone();
        use_reducer(move || DashboardModel::new(keys))
    };

    use_require_session(&session, false);

    // Load from storage on mount and whenever the session changes
    {
        let dispatcher = model.dispatcher();

        use_effect_with(session.clone(), move |session| {
            if let Some(session) = session.clone() {
                dispatcher.dispatch(DashboardAction::Load(session));
            }
        });
    }

    let Some(current) = model.dashboard.clone() else {
        return html! { <Loading /> };
    };

    let on_select = {
        let dispatcher = model.dispatcher();
        Callback::from(move |item: MenuItem| dispatcher.dispatch(DashboardAction::SelectMenu(item)))
    };

    let on_edit = {
        let dispatcher = model.dispatcher();
        Callback::from(move |_: ()| dispatcher.dispatch(DashboardAction::BeginEdit))
    };

    let on_cancel = {
        let dispatcher = model.dispatcher();
        Callback::from(move |_: ()| dispatcher.dispatch(DashboardAction::CancelEdit))
    };

    let on_field = {
        let dispatcher = model.dispatcher();
        Callback::from(move |(field, value): (ProfileField, String)| {
            dispatcher.dispatch(DashboardAction::UpdateDraft(field, value))
        })
    };

    let on_save = {
        let dispatcher = model.dispatcher();
        Callback::from(move |_: ()| dispatcher.dispatch(DashboardAction::SaveProfile))
    };

    let on_image_selected = {
        let dispatcher = model.dispatcher();
        Callback::from(move |file: File| {
            let dispatcher = dispatcher.clone();
            let on_loaded = Callback::from(move |result: letsgo_common::Result<String>| match result {
                Ok(data_url) => dispatcher.dispatch(DashboardAction::StageImage(data_url)),
                Err(e) => tracing::error!(error = %e, "Error reading profile image"),
            });

            if let Err(e) = read_as_data_url(&file, on_loaded) {
                tracing::error!(error = %e, "Error reading profile image");
            }
        })
    };

    let on_save_image = {
        let dispatcher = model.dispatcher();
        Callback::from(move |_: ()| dispatcher.dispatch(DashboardAction::SaveImage))
    };

    let on_toggle_map = {
        let dispatcher = model.dispatcher();
        Callback::from(move |_: ()| dispatcher.dispatch(DashboardAction::ToggleMap))
    };

    let on_logout = {
        let dispatcher = model.dispatcher();
        Callback::from(move |_: MouseEvent| {
            dispatcher.dispatch(DashboardAction::Logout);
            if let Some(navigator) = &navigator {
                navigator.push(&Route::Home);
            }
        })
    };

    let on_dismiss = {
        let dispatcher = model.dispatcher();
        Callback::from(move |_: ()| dispatcher.dispatch(DashboardAction::DismissNotice))
    };

    let content = match current.menu {
        MenuItem::MyProfile => html! {
            <ProfilePanel
                profile={current.profile.clone()}
                draft={current.draft.clone()}
                editing={current.editing}
                image={current.profile_image.clone().map(AttrValue::from)}
                initial={current.avatar_initial().map(AttrValue::from)}
                has_staged_image={current.has_staged_image()}
                on_edit={on_edit}
                on_cancel={on_cancel}
                on_save={on_save}
                on_save_image={on_save_image}
                on_field={on_field}
                on_image_selected={on_image_selected}
            />
        },
        MenuItem::BookingHistory => html! {
            <BookingHistory bookings={current.bookings.clone()} />
        },
    };

    html! {
        <div class="dashboard-page">
            <aside class="sidebar">
                <Link<Route> to={Route::Home} classes="sidebar-link">
                    {"← Back to Home"}
                </Link<Route>>
                <hr />
                <span class={if current.authenticated { "auth-badge signed-in" } else { "auth-badge guest" }}>
                    {if current.authenticated { "Signed in" } else { "Guest" }}
                </span>
                <ul class="menu">
                    {for MenuItem::ALL.iter().copied().map(|item| {
                        let onclick = on_select.reform(move |_: MouseEvent| item);
                        let active = (item == current.menu).then_some("active");
                        html! {
                            <li>
                                <button class={classes!("menu-button", active)} onclick={onclick}>
                                    {item.label()}
                                </button>
                            </li>
                        }
                    })}
                    <li>
                        <button class="menu-button" onclick={on_logout}>{"Logout"}</button>
                    </li>
                </ul>
            </aside>

            <main class="dashboard-main">
                {content}
                <BookingCard
                    session={current.session.clone()}
                    booking={current.booking.clone()}
                    show_map={current.show_map}
                    track_label={current.track_button_label()}
                    tracking={config.tracking.clone()}
                    on_toggle_map={on_toggle_map}
                />
            </main>

            <NoticeToast
                notice={model.notice.clone()}
                timeout_ms={config.ui.notice_timeout_ms}
                on_dismiss={on_dismiss}
            />
        </div>
    }
}
