//! OTP verification page

use letsgo_common::session::OtpVerifier;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::browser::alert;
use crate::components::{Card, Header, Loading};
use crate::config::use_config;
use crate::router::{use_require_session, use_session, Route};

#[function_component(OtpVerify)]
pub fn otp_verify() -> Html {
    let config = use_config();
    let navigator = use_navigator();
    let session = use_session();
    let otp = use_state(String::new);

    use_require_session(&session, true);

    let Some(session) = session else {
        return html! { <Loading /> };
    };

    let on_input = {
        let otp = otp.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            otp.set(input.value());
        })
    };

    let on_submit = {
        let otp = otp.clone();
        let session = session.clone();
        let verifier = OtpVerifier::new(&config.otp);

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let outcome = verifier.verify(&otp);
            alert(outcome.message());

            if !outcome.is_verified() {
                return;
            }

            tracing::debug!(session = %session, "Opening dashboard");
            if let Some(navigator) = &navigator {
                if let Err(e) = navigator.push_with_query(&Route::UserDashboard, &session.query()) {
                    tracing::error!(error = ?e, "Failed to open dashboard");
                }
            }
        })
    };

    html! {
        <div class="otp-page">
            <main class="page-content centered">
                <Header />
                <Card
                    title="Verify OTP"
                    description={format!("Enter the OTP sent to your mobile number {}.", session)}
                >
                    <form class="stack" onsubmit={on_submit}>
                        <label for="otp">{"OTP"}</label>
                        <input
                            id="otp"
                            type="text"
                            placeholder="Enter OTP"
                            value={(*otp).clone()}
                            oninput={on_input}
                            required={true}
                            class="text-input"
                        />
                        <button type="submit" class="button primary" disabled={otp.is_empty()}>
                            {"Verify OTP"}
                        </button>
                        <Link<Route> to={Route::Home} classes="muted-link">
                            {"Back to Home"}
                        </Link<Route>>
                    </form>
                </Card>
            </main>
        </div>
    }
}
