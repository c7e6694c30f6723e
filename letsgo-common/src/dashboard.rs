//! User dashboard model
//!
//! Holds everything the dashboard page renders. Storage is touched only on
//! load and on the explicit save/logout actions; everything else is
//! in-memory state.

use crate::config::StorageKeys;
use crate::session::SessionId;
use crate::storage::{BookingStore, KeyValueStore};
use crate::{BookingDetails, BookingRecord, Profile, Result};

/// Sidebar selector. Exactly one view is active at a time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MenuItem {
    #[default]
    MyProfile,
    BookingHistory,
}

impl MenuItem {
    pub const ALL: [MenuItem; 2] = [MenuItem::MyProfile, MenuItem::BookingHistory];

    pub fn slug(&self) -> &'static str {
        match self {
            Self::MyProfile => "my-profile",
            Self::BookingHistory => "booking-history",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::MyProfile => "My Profile",
            Self::BookingHistory => "Booking History",
        }
    }
}

/// Draft fields the profile editor exposes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileField {
    Name,
    Email,
    Address,
}

impl ProfileField {
    /// Map an input's `name` attribute to a field
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "name" => Some(Self::Name),
            "email" => Some(Self::Email),
            "address" => Some(Self::Address),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardState {
    pub session: SessionId,
    pub booking: Option<BookingDetails>,
    /// Values currently displayed
    pub profile: Profile,
    /// Working copy while editing
    pub draft: Profile,
    pub editing: bool,
    /// Image as displayed, including an unsaved preview
    pub profile_image: Option<String>,
    stored_image: Option<String>,
    staged_image: Option<String>,
    pub bookings: Vec<BookingRecord>,
    pub authenticated: bool,
    pub menu: MenuItem,
    pub show_map: bool,
}

impl DashboardState {
    /// Empty dashboard for a session, before anything is read from storage
    pub fn new(session: SessionId) -> Self {
        Self {
            session,
            booking: None,
            profile: Profile::default(),
            draft: Profile::default(),
            editing: false,
            profile_image: None,
            stored_image: None,
            staged_image: None,
            bookings: Vec::new(),
            authenticated: false,
            menu: MenuItem::default(),
            show_map: false,
        }
    }

    /// Load the four stored pieces independently. A failure in one is logged
    /// and leaves that piece empty without affecting the others.
    pub fn load<S: KeyValueStore + ?Sized>(
        store: &S,
        keys: &StorageKeys,
        session: SessionId,
    ) -> Self {
        let records = BookingStore::new(store, keys);
        let mut state = Self::new(session);

        match records.auth_token() {
            Ok(token) => state.authenticated = token.is_some(),
            Err(e) => tracing::error!(error = %e, "Failed to read auth token"),
        }

        match records.booking_details() {
            Ok(Some(details)) => {
                state.profile = Profile::from_booking(&details);
                state.draft = state.profile.clone();
                state.booking = Some(details);
            }
            Ok(None) => tracing::debug!("No booking details stored"),
            Err(e) => tracing::error!(error = %e, "Error parsing booking details"),
        }

        match records.profile_image() {
            Ok(image) => {
                state.stored_image = image.clone();
                state.profile_image = image;
            }
            Err(e) => tracing::error!(error = %e, "Failed to read profile image"),
        }

        match records.bookings_for(state.session.as_str()) {
            Ok(bookings) => state.bookings = bookings,
            Err(e) => tracing::error!(error = %e, "Error parsing bookings"),
        }

        tracing::debug!(
            session = %state.session,
            authenticated = state.authenticated,
            bookings = state.bookings.len(),
            "Dashboard loaded"
        );

        state
    }

    pub fn select_menu(&mut self, item: MenuItem) {
        self.menu = item;
    }

    pub fn begin_edit(&mut self) {
        self.editing = true;
    }

    pub fn update_draft(&mut self, field: ProfileField, value: String) {
        match field {
            ProfileField::Name => self.draft.name = value,
            ProfileField::Email => self.draft.email = value,
            ProfileField::Address => self.draft.address = value,
        }
    }

    /// Leave edit mode, discarding the draft and any unsaved image preview
    pub fn cancel_edit(&mut self) {
        self.editing = false;
        self.draft = self.profile.clone();
        self.staged_image = None;
        self.profile_image = self.stored_image.clone();
    }

    /// Commit the draft and rewrite the stored booking record.
    ///
    /// The displayed profile is always updated. Returns `Ok(true)` when a
    /// stored record existed and was rewritten with the new name and email.
    pub fn save_profile<S: KeyValueStore + ?Sized>(
        &mut self,
        store: &S,
        keys: &StorageKeys,
    ) -> Result<bool> {
        self.profile = self.draft.clone();
        self.editing = false;

        let records = BookingStore::new(store, keys);
        let Some(stored) = records.booking_details()? else {
            return Ok(false);
        };

        let updated = stored.with_profile(&self.profile);
        records.save_booking_details(&updated)?;
        self.booking = Some(updated);

        tracing::info!(session = %self.session, "Profile updated");
        Ok(true)
    }

    /// Show a freshly read image without persisting it.
    ///
    /// A read that finishes after the editor was closed is dropped.
    pub fn stage_image(&mut self, data_url: String) -> bool {
        if !self.editing {
            tracing::debug!(session = %self.session, "Ignoring image read outside edit mode");
            return false;
        }
        self.profile_image = Some(data_url.clone());
        self.staged_image = Some(data_url);
        true
    }

    pub fn has_staged_image(&self) -> bool {
        self.staged_image.is_some()
    }

    /// Persist the staged image, if any, and leave edit mode.
    ///
    /// Returns `Ok(true)` when an image was written.
    pub fn save_image<S: KeyValueStore + ?Sized>(
        &mut self,
        store: &S,
        keys: &StorageKeys,
    ) -> Result<bool> {
        self.editing = false;

        let Some(image) = self.staged_image.take() else {
            return Ok(false);
        };

        BookingStore::new(store, keys).save_profile_image(&image)?;
        self.stored_image = Some(image);

        tracing::info!(session = %self.session, "Profile image updated");
        Ok(true)
    }

    pub fn toggle_map(&mut self) {
        self.show_map = !self.show_map;
    }

    pub fn track_button_label(&self) -> &'static str {
        if self.show_map {
            "Hide Map"
        } else {
            "Track Cab"
        }
    }

    /// Drop the auth token. The caller navigates home afterwards.
    pub fn logout<S: KeyValueStore + ?Sized>(
        &mut self,
        store: &S,
        keys: &StorageKeys,
    ) -> Result<()> {
        BookingStore::new(store, keys).clear_auth_token()?;
        self.authenticated = false;

        tracing::info!(session = %self.session, "Logged out");
        Ok(())
    }

    pub fn avatar_initial(&self) -> Option<String> {
        self.profile.initial()
    }
}
