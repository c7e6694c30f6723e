//! Active booking card with the "Track Cab" panel

use letsgo_common::config::TrackingConfig;
use letsgo_common::session::SessionId;
use letsgo_common::BookingDetails;
use yew::prelude::*;

use crate::components::Card;

#[derive(Properties, PartialEq)]
pub struct BookingCardProps {
    pub session: SessionId,
    pub booking: Option<BookingDetails>,
    pub show_map: bool,
    pub track_label: AttrValue,
    pub tracking: TrackingConfig,
    pub on_toggle_map: Callback<()>,
}

fn detail(label: &'static str, value: Option<String>) -> Html {
    html! {
        <p><b>{label}{": "}</b>{value.unwrap_or_default()}</p>
    }
}

#[function_component(BookingCard)]
pub fn booking_card(props: &BookingCardProps) -> Html {
    let description = format!("For mobile: {}", props.session);

    let Some(ref booking) = props.booking else {
        return html! {
            <Card title="Your Booking Details" description={description}>
                <p class="empty-state">{"No active booking."}</p>
            </Card>
        };
    };

    let tracking = &props.tracking;

    html! {
        <Card title="Your Booking Details" description={description}>
            {detail("User", booking.user())}
            {detail("Name", booking.user_name())}
            {detail("Email", booking.email())}
            {detail("Source", booking.source())}
            {detail("Destination", booking.destination())}
            {detail("Cab Type", booking.cab_model())}
            {detail("Fare", booking.fare().map(|fare| format!("₹{}", fare)))}
            {detail("Driver Name", booking.driver_name())}

            <button class="button primary" onclick={props.on_toggle_map.reform(|_: MouseEvent| ())}>
                {&props.track_label}
            </button>

            {if props.show_map {
                html! {
                    <div class="tracking-panel">
                        <iframe
                            src={tracking.map_embed_url.clone()}
                            width="100%"
                            height="400"
                            style="border: 0;"
                            allowfullscreen={true}
                            loading="lazy"
                        />
                        {detail("Cab Location", Some(tracking.location.clone()))}
                        {detail("Vehicle No", Some(tracking.vehicle_number.clone()))}
                        {detail("Driver", Some(tracking.driver.clone()))}
                    </div>
                }
            } else {
                html! {}
            }}
        </Card>
    }
}
