//! Profile avatar: the stored image, or the name's initial

use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct AvatarProps {
    #[prop_or_default]
    pub image: Option<AttrValue>,
    #[prop_or_default]
    pub initial: Option<AttrValue>,
}

#[function_component(Avatar)]
pub fn avatar(props: &AvatarProps) -> Html {
    html! {
        <div class="avatar">
            {match (&props.image, &props.initial) {
                (Some(src), _) => html! { <img class="avatar-image" src={src.clone()} alt="Profile" /> },
                (None, Some(initial)) => html! { <span class="avatar-fallback">{initial}</span> },
                (None, None) => html! { <span class="avatar-fallback"></span> },
            }}
        </div>
    }
}
