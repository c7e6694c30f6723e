//! Profile view and draft editor

use letsgo_common::dashboard::ProfileField;
use letsgo_common::Profile;
use web_sys::{File, HtmlInputElement};
use yew::prelude::*;

use crate::components::{Avatar, Card};

#[derive(Properties, PartialEq)]
pub struct ProfilePanelProps {
    pub profile: Profile,
    pub draft: Profile,
    pub editing: bool,
    #[prop_or_default]
    pub image: Option<AttrValue>,
    #[prop_or_default]
    pub initial: Option<AttrValue>,
    pub has_staged_image: bool,
    pub on_edit: Callback<()>,
    pub on_cancel: Callback<()>,
    pub on_save: Callback<()>,
    pub on_save_image: Callback<()>,
    pub on_field: Callback<(ProfileField, String)>,
    pub on_image_selected: Callback<File>,
}

#[function_component(ProfilePanel)]
pub fn profile_panel(props: &ProfilePanelProps) -> Html {
    let body = if props.editing {
        let on_input = {
            let on_field = props.on_field.clone();
            Callback::from(move |e: InputEvent| {
                let input: HtmlInputElement = e.target_unchecked_into();
                if let Some(field) = ProfileField::from_name(&input.name()) {
                    on_field.emit((field, input.value()));
                }
            })
        };

        let on_file_change = {
            let on_image_selected = props.on_image_selected.clone();
            Callback::from(move |e: Event| {
                let input: HtmlInputElement = e.target_unchecked_into();
                if let Some(file) = input.files().and_then(|files| files.get(0)) {
                    on_image_selected.emit(file);
                }
            })
        };

        html! {
            <div class="stack">
                <input
                    name="name"
                    class="text-input"
                    placeholder="Name"
                    value={props.draft.name.clone()}
                    oninput={on_input.clone()}
                />
                <input
                    name="email"
                    class="text-input"
                    placeholder="Email"
                    value={props.draft.email.clone()}
                    oninput={on_input.clone()}
                />
                <input
                    name="address"
                    class="text-input"
                    placeholder="Address"
                    value={props.draft.address.clone()}
                    oninput={on_input}
                />
                <input type="file" accept="image/*" onchange={on_file_change} />
                <div class="button-row">
                    <button
                        class="button secondary"
                        disabled={!props.has_staged_image}
                        onclick={props.on_save_image.reform(|_: MouseEvent| ())}
                    >
                        {"Save Image"}
                    </button>
                    <button class="button secondary" onclick={props.on_cancel.reform(|_: MouseEvent| ())}>
                        {"Cancel"}
                    </button>
                    <button class="button primary" onclick={props.on_save.reform(|_: MouseEvent| ())}>
                        {"Save"}
                    </button>
                </div>
            </div>
        }
    } else {
        html! {
            <div class="stack">
                <p><b>{"Name: "}</b>{&props.profile.name}</p>
                <p><b>{"Email: "}</b>{&props.profile.email}</p>
                <p><b>{"Address: "}</b>{&props.profile.address}</p>
                <button class="button primary" onclick={props.on_edit.reform(|_: MouseEvent| ())}>
                    {"Edit Profile"}
                </button>
            </div>
        }
    };

    html! {
        <Card title="User Profile" description="Manage your profile details.">
            <Avatar image={props.image.clone()} initial={props.initial.clone()} />
            {body}
        </Card>
    }
}
