use yew::prelude::*;

use super::icons::{icon_check, icon_file, icon_plus, icon_printer};
use super::{click_msg, page_shell};
use crate::router::View;
use crate::state::{Msg, SuccessView};

#[derive(Properties, PartialEq)]
pub struct SuccessPageProps {
    pub view: Option<SuccessView>,
    pub on_msg: Callback<Msg>,
}

#[function_component(SuccessPage)]
pub fn success_page(props: &SuccessPageProps) -> Html {
    let on_msg = &props.on_msg;
    let Some(view) = &props.view else {
        return page_shell(
            View::Success.title(),
            html! {},
            html! { <p class="text-sm text-slate-500">{"No receipt generated yet."}</p> },
        );
    };

    page_shell(
        View::Success.title(),
        html! {},
        html! {
            <div class="bg-white rounded-xl border border-slate-200 p-8 max-w-xl mx-auto text-center space-y-6">
                <div class="mx-auto size-14 rounded-full bg-green-100 text-green-700 flex items-center justify-center">
                    { icon_check() }
                </div>
                <dl class="grid grid-cols-2 gap-y-3 text-sm text-left">
                    <dt class="text-slate-500">{"Receipt No"}</dt>
                    <dd id="success-receipt-no" class="font-mono font-bold">{ view.receipt_number.clone() }</dd>
                    <dt class="text-slate-500">{"Student"}</dt>
                    <dd id="success-student-name">{ view.student_name.clone() }</dd>
                    <dt class="text-slate-500">{"Total"}</dt>
                    <dd id="success-total" class="font-bold">{ view.total.clone() }</dd>
                    <dt class="text-slate-500">{"Date"}</dt>
                    <dd id="success-date">{ view.issued.clone() }</dd>
                </dl>
                <div class="flex justify-center gap-3 flex-wrap">
                    <button id="open-pdf-btn" class="flex items-center gap-2 px-4 py-2 rounded-lg bg-primary text-white text-sm font-bold" onclick={click_msg(on_msg, Msg::OpenLatestPdf)}>
                        { icon_file() }{"Open PDF"}
                    </button>
                    <button id="print-pdf-btn" class="flex items-center gap-2 px-4 py-2 rounded-lg bg-slate-100 text-slate-700 text-sm font-bold" onclick={click_msg(on_msg, Msg::PrintLatestPdf)}>
                        { icon_printer() }{"Print"}
                    </button>
                    <button id="new-receipt-btn" class="flex items-center gap-2 px-4 py-2 rounded-lg bg-slate-100 text-slate-700 text-sm font-bold" onclick={click_msg(on_msg, Msg::NewReceipt)}>
                        { icon_plus() }{"New Receipt"}
                    </button>
                </div>
            </div>
        },
    )
}
