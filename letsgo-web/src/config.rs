//! Configuration wiring for the front end

use std::rc::Rc;

use letsgo_common::config::AppConfig;
use letsgo_common::Result;
use yew::prelude::*;

/// Configuration compiled into the bundle
const EMBEDDED_CONFIG: &str = include_str!("../letsgo.toml");

pub fn load_embedded() -> Result<AppConfig> {
    AppConfig::from_toml_str(EMBEDDED_CONFIG)
}

/// Configuration provided by [`crate::App`], or the defaults outside of it
#[hook]
pub fn use_config() -> Rc<AppConfig> {
    use_context::<Rc<AppConfig>>().unwrap_or_default()
}
