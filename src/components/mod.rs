mod create;
mod history;
mod icons;
mod layout;
mod modal;
mod settings;
mod success;
mod toast;

pub use create::CreatePage;
pub use history::HistoryPage;
pub use layout::Layout;
pub use modal::ConfirmModal;
pub use settings::SettingsPage;
pub use success::SuccessPage;
pub use toast::ToastStack;

use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::state::Msg;

const INPUT_CLASS: &str =
    "w-full rounded-lg border border-slate-200 px-4 py-2.5 text-sm focus:outline-none focus:ring-2 focus:ring-primary";

fn page_shell(title: &'static str, actions: Html, children: Html) -> Html {
    html! {
        <div class="p-6 max-w-7xl mx-auto">
            <div class="flex items-center justify-between pb-4 border-b border-slate-200">
                <h1 class="text-2xl font-bold text-slate-900">{ title }</h1>
                { actions }
            </div>
            <div class="pt-5 space-y-6">
                { children }
            </div>
        </div>
    }
}

fn input_msg<F>(on_msg: &Callback<Msg>, make: F) -> Callback<InputEvent>
where
    F: Fn(String) -> Msg + 'static,
{
    let on_msg = on_msg.clone();
    Callback::from(move |e: InputEvent| {
        if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
            on_msg.emit(make(input.value()));
        }
    })
}

fn textarea_msg<F>(on_msg: &Callback<Msg>, make: F) -> Callback<InputEvent>
where
    F: Fn(String) -> Msg + 'static,
{
    let on_msg = on_msg.clone();
    Callback::from(move |e: InputEvent| {
        if let Some(area) = e.target_dyn_into::<HtmlTextAreaElement>() {
            on_msg.emit(make(area.value()));
        }
    })
}

fn click_msg(on_msg: &Callback<Msg>, msg: Msg) -> Callback<MouseEvent> {
    let on_msg = on_msg.clone();
    Callback::from(move |_| on_msg.emit(msg.clone()))
}

fn error_text(error: Option<&str>) -> Html {
    match error {
        Some(message) => html! { <p class="error-text text-xs text-red-600 mt-1">{ message.to_string() }</p> },
        None => html! {},
    }
}
