//! Transient toast notices

use gloo_timers::callback::Timeout;
use yew::prelude::*;

#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub title: AttrValue,
    pub description: AttrValue,
}

impl Notice {
    pub fn new(title: &'static str, description: &'static str) -> Self {
        Self {
            title: AttrValue::Static(title),
            description: AttrValue::Static(description),
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct NoticeToastProps {
    pub notice: Option<Notice>,
    pub timeout_ms: u32,
    pub on_dismiss: Callback<()>,
}

/// Shows `notice` until `timeout_ms` elapses or the user closes it
#[function_component(NoticeToast)]
pub fn notice_toast(props: &NoticeToastProps) -> Html {
    {
        let on_dismiss = props.on_dismiss.clone();
        let timeout_ms = props.timeout_ms;

        use_effect_with(props.notice.clone(), move |notice| {
            let timeout = notice
                .as_ref()
                .map(|_| Timeout::new(timeout_ms, move || on_dismiss.emit(())));

            move || drop(timeout)
        });
    }

    let Some(ref notice) = props.notice else {
        return html! {};
    };

    let close = {
        let on_dismiss = props.on_dismiss.clone();
        Callback::from(move |_: MouseEvent| on_dismiss.emit(()))
    };

    html! {
        <div class="toast" role="status">
            <div class="toast-title">{&notice.title}</div>
            <div class="toast-description">{&notice.description}</div>
            <button class="toast-close" onclick={close}>{"×"}</button>
        </div>
    }
}
