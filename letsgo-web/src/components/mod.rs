//! Reusable UI components

pub mod avatar;
pub mod card;
pub mod header;
pub mod loading;
pub mod notice;
pub mod status_badge;

pub use avatar::Avatar;
pub use card::Card;
pub use header::Header;
pub use loading::Loading;
pub use notice::{Notice, NoticeToast};
pub use status_badge::StatusBadge;
