//! Card component

use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct CardProps {
    #[prop_or_default]
    pub title: Option<AttrValue>,
    #[prop_or_default]
    pub description: Option<AttrValue>,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(Card)]
pub fn card(props: &CardProps) -> Html {
    let has_header = props.title.is_some() || props.description.is_some();

    html! {
        <div class={classes!("card", props.class.clone())}>
            {if has_header {
                html! {
                    <div class="card-header">
                        {if let Some(ref title) = props.title {
                            html! { <div class="card-title">{title}</div> }
                        } else {
                            html! {}
                        }}
                        {if let Some(ref description) = props.description {
                            html! { <p class="card-description">{description}</p> }
                        } else {
                            html! {}
                        }}
                    </div>
                }
            } else {
                html! {}
            }}
            <div class="card-content">
                {props.children.clone()}
            </div>
        </div>
    }
}
