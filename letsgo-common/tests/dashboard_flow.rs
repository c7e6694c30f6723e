//! Verifier -> dashboard flow over an in-memory store

use letsgo_common::config::AppConfig;
use letsgo_common::dashboard::{DashboardState, MenuItem, ProfileField};
use letsgo_common::session::{OtpOutcome, OtpVerifier, SessionId};
use letsgo_common::storage::{KeyValueStore, MemoryStore};
use serde_json::{json, Value};

const PHONE: &str = "9876543210";

fn seeded(config: &AppConfig) -> MemoryStore {
    let keys = &config.storage;
    let store = MemoryStore::new();

    store.set_item(&keys.auth_token, "opaque-token").unwrap();
    store
        .set_item(
            &keys.booking_details,
            &json!({
                "user": "rider-7",
                "userName": "Asha",
                "email": "asha@example.com",
                "source": "Kollam",
                "destination": "Punalur",
                "cabModel": "Sedan",
                "fare": 420,
                "driverName": "Anoop",
                "paymentMode": "cash"
            })
            .to_string(),
        )
        .unwrap();
    store
        .set_item(
            &keys.bookings,
            &json!([
                {"id": 1, "date": "2024-05-01", "source": "Kollam", "destination": "Punalur", "status": "completed", "mobileNumber": PHONE},
                {"id": 2, "date": "2024-05-02", "source": "Kochi", "destination": "Aluva", "status": "completed", "mobileNumber": "9000000000"},
                {"id": 3, "date": "2024-05-03", "source": "Punalur", "destination": "Kollam", "status": "cancelled", "mobileNumber": PHONE}
            ])
            .to_string(),
        )
        .unwrap();
    store
}

fn stored_details(store: &MemoryStore, config: &AppConfig) -> Value {
    let raw = store
        .get_item(&config.storage.booking_details)
        .unwrap()
        .unwrap();
    serde_json::from_str(&raw).unwrap()
}

#[test]
fn missing_session_parameter_means_redirect() {
    // Both pages redirect home when this yields None
    assert!(SessionId::from_query("").is_none());
    assert!(SessionId::from_query("?other=1").is_none());
    assert!(SessionId::from_query("?mobileNumber=").is_none());
}

#[test]
fn correct_code_forwards_same_phone_number() {
    let config = AppConfig::default();
    let session = SessionId::from_query(&format!("?mobileNumber={PHONE}")).unwrap();
    let verifier = OtpVerifier::new(&config.otp);

    assert_eq!(verifier.verify("123456"), OtpOutcome::Verified);

    let forwarded = SessionId::from_query(&session.to_query_string()).unwrap();
    assert_eq!(forwarded, session);
    assert_eq!(forwarded.as_str(), PHONE);
}

#[test]
fn wrong_code_stays_on_verifier() {
    let verifier = OtpVerifier::new(&AppConfig::default().otp);

    for attempt in ["", "12345", "654321", "123456 ", "abcdef"] {
        assert_eq!(verifier.verify(attempt), OtpOutcome::Rejected, "{attempt:?}");
    }
}

#[test]
fn save_updates_profile_and_stored_blob_only_for_name_and_email() {
    let config = AppConfig::default();
    let store = seeded(&config);
    let session = SessionId::new(PHONE).unwrap();
    let before = stored_details(&store, &config);

    let mut state = DashboardState::load(&store, &config.storage, session);
    state.begin_edit();
    state.update_draft(ProfileField::Name, "Meera".to_string());
    state.update_draft(ProfileField::Email, "meera@example.com".to_string());
    state.update_draft(ProfileField::Address, "Kochi".to_string());

    assert!(state.save_profile(&store, &config.storage).unwrap());

    assert!(!state.editing);
    assert_eq!(state.profile.name, "Meera");
    assert_eq!(state.profile.email, "meera@example.com");
    assert_eq!(state.profile.address, "Kochi");

    let after = stored_details(&store, &config);
    assert_eq!(after["userName"], "Meera");
    assert_eq!(after["email"], "meera@example.com");
    assert!(after.get("address").is_none());

    let after_obj = after.as_object().unwrap();
    for (key, value) in before.as_object().unwrap() {
        if key != "userName" && key != "email" {
            assert_eq!(after_obj.get(key), Some(value), "field {key} changed");
        }
    }

    let booking = state.booking.as_ref().unwrap();
    assert_eq!(booking.user_name().as_deref(), Some("Meera"));
    assert_eq!(booking.driver_name().as_deref(), Some("Anoop"));
}

#[test]
fn cancel_restores_displayed_values() {
    let config = AppConfig::default();
    let store = seeded(&config);
    let mut state = DashboardState::load(&store, &config.storage, SessionId::new(PHONE).unwrap());
    let displayed = state.profile.clone();
    let image = state.profile_image.clone();

    state.begin_edit();
    state.update_draft(ProfileField::Name, "Someone Else".to_string());
    state.update_draft(ProfileField::Email, "else@example.com".to_string());
    state.stage_image("data:image/png;base64,AAAA".to_string());
    state.cancel_edit();

    assert!(!state.editing);
    assert_eq!(state.profile, displayed);
    assert_eq!(state.draft, displayed);
    assert_eq!(state.profile_image, image);
    assert!(!state.has_staged_image());
    assert_eq!(stored_details(&store, &config)["userName"], "Asha");
}

#[test]
fn history_shows_only_session_bookings() {
    let config = AppConfig::default();
    let store = seeded(&config);
    let state = DashboardState::load(&store, &config.storage, SessionId::new(PHONE).unwrap());

    assert_eq!(state.bookings.len(), 2);
    assert!(state
        .bookings
        .iter()
        .all(|b| b.mobile_number == PHONE));

    let other = DashboardState::load(&store, &config.storage, SessionId::new("1111").unwrap());
    assert!(other.bookings.is_empty());
}

#[test]
fn track_cab_toggle_leaves_other_state_alone() {
    let config = AppConfig::default();
    let store = seeded(&config);
    let mut state = DashboardState::load(&store, &config.storage, SessionId::new(PHONE).unwrap());
    state.select_menu(MenuItem::BookingHistory);

    let before = state.clone();
    state.toggle_map();
    assert!(state.show_map);

    let mut expected = before.clone();
    expected.show_map = true;
    assert_eq!(state, expected);

    state.toggle_map();
    assert_eq!(state, before);
}

#[test]
fn malformed_sections_fall_back_independently() {
    let config = AppConfig::default();
    let keys = &config.storage;
    let store = seeded(&config);
    store.set_item(&keys.booking_details, "{oops").unwrap();

    let state = DashboardState::load(&store, keys, SessionId::new(PHONE).unwrap());
    assert!(state.booking.is_none());
    assert_eq!(state.profile.name, "");
    assert!(state.authenticated);
    assert_eq!(state.bookings.len(), 2);

    let store = seeded(&config);
    store.set_item(&keys.bookings, r#"{"not":"a list"}"#).unwrap();

    let state = DashboardState::load(&store, keys, SessionId::new(PHONE).unwrap());
    assert!(state.bookings.is_empty());
    assert_eq!(state.profile.name, "Asha");
}

#[test]
fn save_with_malformed_blob_reports_error_and_keeps_blob() {
    let config = AppConfig::default();
    let keys = &config.storage;
    let store = seeded(&config);
    let mut state = DashboardState::load(&store, keys, SessionId::new(PHONE).unwrap());
    store.set_item(&keys.booking_details, "{oops").unwrap();

    state.begin_edit();
    state.update_draft(ProfileField::Name, "Meera".to_string());

    assert!(state.save_profile(&store, keys).is_err());
    assert_eq!(state.profile.name, "Meera");
    assert_eq!(
        store.get_item(&keys.booking_details).unwrap().as_deref(),
        Some("{oops")
    );
}

#[test]
fn image_persists_only_on_explicit_save() {
    let config = AppConfig::default();
    let keys = &config.storage;
    let store = seeded(&config);
    let mut state = DashboardState::load(&store, keys, SessionId::new(PHONE).unwrap());
    let data_url = "data:image/png;base64,iVBORw0KGgo=";

    state.begin_edit();
    state.stage_image(data_url.to_string());
    assert_eq!(state.profile_image.as_deref(), Some(data_url));
    assert_eq!(store.get_item(&keys.profile_image).unwrap(), None);

    assert!(state.save_image(&store, keys).unwrap());
    assert!(!state.editing);
    assert_eq!(store.get_item(&keys.profile_image).unwrap().as_deref(), Some(data_url));

    let reloaded = DashboardState::load(&store, keys, SessionId::new(PHONE).unwrap());
    assert_eq!(reloaded.profile_image.as_deref(), Some(data_url));
}

#[test]
fn logout_removes_token() {
    let config = AppConfig::default();
    let keys = &config.storage;
    let store = seeded(&config);
    let mut state = DashboardState::load(&store, keys, SessionId::new(PHONE).unwrap());
    assert!(state.authenticated);

    state.logout(&store, keys).unwrap();

    assert!(!state.authenticated);
    assert_eq!(store.get_item(&keys.auth_token).unwrap(), None);
    assert!(store.get_item(&keys.booking_details).unwrap().is_some());
}

#[test]
fn history_survives_entries_of_other_shapes() {
    let config = AppConfig::default();
    let keys = &config.storage;
    let store = seeded(&config);
    store
        .set_item(
            &keys.bookings,
            &json!([
                {"id": 1, "date": "2024-05-01", "source": "Kollam", "destination": "Punalur", "status": "completed", "mobileNumber": PHONE},
                {"id": 2, "date": 20240502, "status": null, "mobileNumber": 9000000000u64},
                {"id": 3, "date": "2024-05-03", "source": "Punalur", "destination": "Kollam", "status": null, "mobileNumber": PHONE}
            ])
            .to_string(),
        )
        .unwrap();

    let state = DashboardState::load(&store, keys, SessionId::new(PHONE).unwrap());

    let ids: Vec<_> = state.bookings.iter().filter_map(|b| b.id.clone()).collect();
    assert_eq!(ids, vec!["1", "3"]);
    assert_eq!(state.bookings[1].status, "");
}

#[test]
fn non_string_fields_still_load_and_save() {
    let config = AppConfig::default();
    let keys = &config.storage;
    let store = MemoryStore::new();
    let original = json!({
        "user": 42,
        "userName": "Asha",
        "email": "asha@example.com",
        "source": {"lat": 9.03, "lng": 76.91},
        "fare": "420",
        "driverName": null
    });
    store.set_item(&keys.booking_details, &original.to_string()).unwrap();

    let mut state = DashboardState::load(&store, keys, SessionId::new(PHONE).unwrap());
    let booking = state.booking.as_ref().unwrap();
    assert_eq!(booking.user().as_deref(), Some("42"));
    assert_eq!(booking.driver_name(), None);
    assert_eq!(state.profile.name, "Asha");

    state.begin_edit();
    state.update_draft(ProfileField::Email, "asha@letsgo.example".to_string());
    assert!(state.save_profile(&store, keys).unwrap());

    let mut expected = original;
    expected["email"] = json!("asha@letsgo.example");
    assert_eq!(stored_details(&store, &config), expected);
}
