//! Brand header shown above the entry pages

use yew::prelude::*;

use crate::config::use_config;

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    #[prop_or_default]
    pub slogan: Option<AttrValue>,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let config = use_config();

    html! {
        <header class="brand-header">
            <h1 class="brand-title">{&config.ui.brand}</h1>
            {if let Some(ref slogan) = props.slogan {
                html! { <p class="brand-slogan">{slogan}</p> }
            } else {
                html! {}
            }}
        </header>
    }
}
