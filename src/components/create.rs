use yew::prelude::*;

use super::icons::{icon_plus, icon_trash};
use super::{click_msg, error_text, input_msg, page_shell, INPUT_CLASS};
use crate::form::{FormCommand, ReceiptField, ReceiptForm, TotalsView};
use crate::router::View;
use crate::state::Msg;

#[derive(Properties, PartialEq)]
pub struct CreatePageProps {
    pub form: ReceiptForm,
    pub totals: TotalsView,
    pub currency: String,
    pub on_msg: Callback<Msg>,
}

fn labelled(label: &'static str, field: Html, error: Option<&str>) -> Html {
    html! {
        <div class="flex flex-col gap-2">
            <label class="text-sm font-medium text-slate-700">{ label }</label>
            { field }
            { error_text(error) }
        </div>
    }
}

#[function_component(CreatePage)]
pub fn create_page(props: &CreatePageProps) -> Html {
    let on_msg = &props.on_msg;
    let form = &props.form;
    let errors = &form.errors;

    let on_submit = {
        let on_msg = on_msg.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            on_msg.emit(Msg::SubmitReceipt);
        })
    };

    let student_fields = html! {
        <div class="grid grid-cols-1 md:grid-cols-3 gap-4">
            { labelled("Student Name", html! {
                <input id="student-name" class={errors.input_class(ReceiptField::StudentName, INPUT_CLASS)}
                    value={form.student_name.clone()}
                    oninput={input_msg(on_msg, |v| Msg::Form(FormCommand::SetStudentName(v)))} />
            }, errors.get(ReceiptField::StudentName)) }
            { labelled("Class", html! {
                <input id="student-class" class={errors.input_class(ReceiptField::StudentClass, INPUT_CLASS)}
                    value={form.student_class.clone()}
                    oninput={input_msg(on_msg, |v| Msg::Form(FormCommand::SetStudentClass(v)))} />
            }, errors.get(ReceiptField::StudentClass)) }
            { labelled("Department", html! {
                <input id="department" class={INPUT_CLASS}
                    value={form.department.clone()}
                    oninput={input_msg(on_msg, |v| Msg::Form(FormCommand::SetDepartment(v)))} />
            }, None) }
        </div>
    };

    let expense_rows = html! {
        <div id="expenses-list" class="space-y-3">
            { for form.rows().iter().map(|row| {
                let id = row.id;
                html! {
                    <div key={id} class="expense-row grid grid-cols-12 gap-3 items-start">
                        <div class="col-span-7 space-y-1">
                            <input class={errors.input_class(ReceiptField::ItemName(id), INPUT_CLASS)} placeholder="Item name"
                                value={row.item_name.clone()}
                                oninput={input_msg(on_msg, move |v| Msg::Form(FormCommand::SetItemName(id, v)))} />
                            { error_text(errors.get(ReceiptField::ItemName(id))) }
                        </div>
                        <div class="col-span-4 space-y-1">
                            <input type="number" min="0" step="0.01" class={errors.input_class(ReceiptField::Amount(id), INPUT_CLASS)}
                                placeholder={format!("Amount ({})", props.currency)}
                                value={row.amount.clone()}
                                oninput={input_msg(on_msg, move |v| Msg::Form(FormCommand::SetAmount(id, v)))} />
                            { error_text(errors.get(ReceiptField::Amount(id))) }
                        </div>
                        <button type="button" class="col-span-1 h-10 flex items-center justify-center rounded-lg text-red-600 hover:bg-red-50" aria-label="Remove expense"
                            onclick={click_msg(on_msg, Msg::RequestRemoveRow(id))}>
                            { icon_trash() }
                        </button>
                    </div>
                }
            }) }
        </div>
    };

    let summary = html! {
        <div class="bg-slate-50 rounded-xl p-5 space-y-2 text-sm">
            <div class="flex justify-between"><span class="text-slate-500">{"Subtotal"}</span><span id="subtotal-amount">{ props.totals.subtotal.clone() }</span></div>
            <div class="flex justify-between"><span class="text-slate-500">{"Tax"}</span><span id="tax-amount">{ props.totals.tax.clone() }</span></div>
            <div class="flex justify-between text-base font-bold border-t border-slate-200 pt-2">
                <span>{"Total "}<span id="currency-label" class="text-xs text-slate-400">{ props.currency.clone() }</span></span>
                <span id="total-amount">{ props.totals.total.clone() }</span>
            </div>
        </div>
    };

    page_shell(
        View::Create.title(),
        html! {},
        html! {
            <form id="receipt-form" class="bg-white rounded-xl border border-slate-200 p-6 space-y-6" onsubmit={on_submit} novalidate={true}>
                { student_fields }
                <div class="space-y-3">
                    <div class="flex items-center justify-between">
                        <h3 class="font-bold text-slate-900">{"Expenses"}</h3>
                        <button id="add-expense-btn" type="button" class="flex items-center gap-1 text-sm font-bold text-primary"
                            onclick={click_msg(on_msg, Msg::Form(FormCommand::AddRow))}>
                            { icon_plus() }{"Add Expense"}
                        </button>
                    </div>
                    { expense_rows }
                </div>
                { summary }
                <div class="flex justify-end gap-3">
                    <button id="clear-form-btn" type="button" class="px-4 py-2 rounded-lg bg-slate-100 text-slate-700 text-sm font-bold"
                        onclick={click_msg(on_msg, Msg::Form(FormCommand::Reset))}>
                        {"Clear"}
                    </button>
                    <button type="submit" class="px-4 py-2 rounded-lg bg-primary text-white text-sm font-bold hover:opacity-90">
                        {"Generate Receipt"}
                    </button>
                </div>
            </form>
        },
    )
}
