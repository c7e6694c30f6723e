//! Booking history table

use letsgo_common::BookingRecord;
use yew::prelude::*;

use crate::components::{Card, StatusBadge};

#[derive(Properties, PartialEq)]
pub struct BookingHistoryProps {
    pub bookings: Vec<BookingRecord>,
}

#[function_component(BookingHistory)]
pub fn booking_history(props: &BookingHistoryProps) -> Html {
    if props.bookings.is_empty() {
        return html! {
            <Card title="Booking History">
                <p class="empty-state">{"No bookings yet."}</p>
            </Card>
        };
    }

    html! {
        <Card title="Booking History">
            <div class="table-scroll">
                <table class="table">
                    <thead>
                        <tr>
                            <th>{"Date"}</th>
                            <th>{"Source"}</th>
                            <th>{"Destination"}</th>
                            <th>{"Status"}</th>
                        </tr>
                    </thead>
                    <tbody>
                        {for props.bookings.iter().map(|booking| html! {
                            <tr>
                                <td>{&booking.date}</td>
                                <td>{&booking.source}</td>
                                <td>{&booking.destination}</td>
                                <td><StatusBadge status={booking.status.clone()} /></td>
                            </tr>
                        })}
                    </tbody>
                </table>
            </div>
        </Card>
    }
}
