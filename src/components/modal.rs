use yew::prelude::*;

use super::click_msg;
use crate::modal::PendingConfirmation;
use crate::state::Msg;

#[derive(Properties, PartialEq)]
pub struct ConfirmModalProps {
    pub pending: Option<PendingConfirmation>,
    pub busy: bool,
    pub on_msg: Callback<Msg>,
}

#[function_component(ConfirmModal)]
pub fn confirm_modal(props: &ConfirmModalProps) -> Html {
    let Some(pending) = &props.pending else {
        return html! {};
    };
    let on_msg = &props.on_msg;

    html! {
        <div id="confirm-modal" class="fixed inset-0 z-40 flex items-center justify-center bg-slate-900/40 p-4" role="dialog" aria-modal="true">
            <div class="bg-white rounded-xl shadow-xl w-full max-w-md p-6 space-y-4">
                <h3 id="modal-title" class="text-lg font-bold text-slate-900">{ pending.title.clone() }</h3>
                <p id="modal-message" class="text-sm text-slate-600">{ pending.message.clone() }</p>
                <div class="flex justify-end gap-3">
                    <button id="modal-cancel" type="button" disabled={props.busy}
                        class="px-4 py-2 rounded-lg bg-slate-100 text-slate-700 text-sm font-bold disabled:opacity-60"
                        onclick={click_msg(on_msg, Msg::CancelModal)}>
                        {"Cancel"}
                    </button>
                    <button id="modal-confirm" type="button" disabled={props.busy}
                        class="px-4 py-2 rounded-lg bg-red-600 text-white text-sm font-bold disabled:opacity-60"
                        onclick={click_msg(on_msg, Msg::ConfirmModal)}>
                        { if props.busy { "Working...".to_string() } else { pending.confirm_label.clone() } }
                    </button>
                </div>
            </div>
        </div>
    }
}
