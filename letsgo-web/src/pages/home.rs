//! Home page: the redirect target, and where a ride session starts

use letsgo_common::session::SessionId;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::{Card, Header};
use crate::router::Route;

#[function_component(Home)]
pub fn home() -> Html {
    let navigator = use_navigator();
    let mobile_number = use_state(String::new);

    let on_input = {
        let mobile_number = mobile_number.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            mobile_number.set(input.value());
        })
    };

    let on_submit = {
        let mobile_number = mobile_number.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let Some(session) = SessionId::new((*mobile_number).clone()) else {
                return;
            };
            if let Some(navigator) = &navigator {
                if let Err(e) = navigator.push_with_query(&Route::Otp, &session.query()) {
                    tracing::error!(error = ?e, "Failed to open OTP page");
                }
            }
        })
    };

    html! {
        <div class="home-page">
            <main class="page-content centered">
                <Header slogan="Book a cab in seconds" />
                <Card title="Sign in" description="We'll send a one-time code to your phone.">
                    <form class="stack" onsubmit={on_submit}>
                        <label for="mobile-number">{"Mobile number"}</label>
                        <input
                            id="mobile-number"
                            type="tel"
                            placeholder="Enter mobile number"
                            value={(*mobile_number).clone()}
                            oninput={on_input}
                            class="text-input"
                        />
                        <button
                            type="submit"
                            class="button primary"
                            disabled={mobile_number.is_empty()}
                        >
                            {"Get OTP"}
                        </button>
                    </form>
                </Card>
            </main>
        </div>
    }
}
