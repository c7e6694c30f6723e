//! Booking status badge

use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct StatusBadgeProps {
    pub status: AttrValue,
}

#[function_component(StatusBadge)]
pub fn status_badge(props: &StatusBadgeProps) -> Html {
    let class = match props.status.to_lowercase().as_str() {
        "completed" => "status-badge status-completed",
        "ongoing" | "confirmed" | "booked" => "status-badge status-active",
        "cancelled" | "canceled" => "status-badge status-cancelled",
        _ => "status-badge status-unknown",
    };

    html! {
        <span class={class}>{&props.status}</span>
    }
}
