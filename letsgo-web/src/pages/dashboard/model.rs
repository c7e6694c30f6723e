//! Dashboard page state as a reducer
//!
//! Every change goes through [`DashboardAction`], so callbacks that fire
//! late (the FileReader) act on the current state, not the one captured
//! when they were created.

use std::rc::Rc;

use letsgo_common::config::StorageKeys;
use letsgo_common::dashboard::{DashboardState, MenuItem, ProfileField};
use letsgo_common::session::SessionId;
use yew::prelude::*;

use crate::components::Notice;
use crate::storage::BrowserStore;

pub enum DashboardAction {
    Load(SessionId),
    SelectMenu(MenuItem),
    BeginEdit,
    CancelEdit,
    UpdateDraft(ProfileField, String),
    SaveProfile,
    StageImage(String),
    SaveImage,
    ToggleMap,
    Logout,
    DismissNotice,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardModel {
    pub keys: StorageKeys,
    /// `None` until storage has been read for a session
    pub dashboard: Option<DashboardState>,
    pub notice: Option<Notice>,
}

impl DashboardModel {
    pub fn new(keys: StorageKeys) -> Self {
        Self {
            keys,
            dashboard: None,
            notice: None,
        }
    }

    fn apply(&mut self, action: DashboardAction) {
        let keys = &self.keys;

        let state = match action {
            DashboardAction::Load(session) => {
                self.dashboard = Some(DashboardState::load(&BrowserStore, keys, session));
                return;
            }
            DashboardAction::DismissNotice => {
                self.notice = None;
                return;
            }
            _ => match self.dashboard.as_mut() {
                Some(state) => state,
                None => return,
            },
        };

        match action {
            DashboardAction::SelectMenu(item) => state.select_menu(item),
            DashboardAction::BeginEdit => state.begin_edit(),
            DashboardAction::CancelEdit => state.cancel_edit(),
            DashboardAction::UpdateDraft(field, value) => state.update_draft(field, value),
            DashboardAction::SaveProfile => match state.save_profile(&BrowserStore, keys) {
                Ok(true) => {
                    self.notice = Some(Notice::new(
                        "Profile Updated",
                        "Your profile has been updated successfully.",
                    ))
                }
                Ok(false) => tracing::debug!("No stored booking details to update"),
                Err(e) => tracing::error!(error = %e, "Error updating booking details"),
            },
            DashboardAction::StageImage(data_url) => {
                state.stage_image(data_url);
            }
            DashboardAction::SaveImage => match state.save_image(&BrowserStore, keys) {
                Ok(true) => {
                    self.notice = Some(Notice::new(
                        "Profile Image Updated",
                        "Your profile image has been updated successfully.",
                    ))
                }
                Ok(false) => {}
                Err(e) => tracing::error!(error = %e, "Error saving profile image"),
            },
            DashboardAction::ToggleMap => state.toggle_map(),
            DashboardAction::Logout => {
                if let Err(e) = state.logout(&BrowserStore, keys) {
                    tracing::error!(error = %e, "Failed to remove auth token");
                }
            }
            DashboardAction::Load(_) | DashboardAction::DismissNotice => {}
        }
    }
}

impl Reducible for DashboardModel {
    type Action = DashboardAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let needs_dashboard = !matches!(
            action,
            DashboardAction::Load(_) | DashboardAction::DismissNotice
        );
        if needs_dashboard && self.dashboard.is_none() {
            return self;
        }

        let mut next = (*self).clone();
        next.apply(action);
        Rc::new(next)
    }
}
