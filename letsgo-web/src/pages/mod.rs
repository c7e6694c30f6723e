//! Pages

pub mod dashboard;
pub mod home;
pub mod otp;
