use yew::prelude::*;

use super::icons::{icon_download, icon_plus};
use super::{click_msg, input_msg, page_shell, INPUT_CLASS};
use crate::api::ReceiptFilter;
use crate::history::{DetailView, FilterField, HistoryFooter, HistoryRowView};
use crate::router::View;
use crate::state::Msg;

const ACTION_BTN: &str =
    "inline-flex items-center justify-center rounded-lg h-8 px-3 text-xs font-bold transition-all";

#[derive(Properties, PartialEq)]
pub struct HistoryPageProps {
    pub rows: Vec<HistoryRowView>,
    pub footer: HistoryFooter,
    pub detail: Option<DetailView>,
    pub filter: ReceiptFilter,
    pub on_msg: Callback<Msg>,
}

fn row_actions(on_msg: &Callback<Msg>, id: i64) -> Html {
    html! {
        <>
            <button class={classes!(ACTION_BTN, "text-primary", "bg-primary/10")} onclick={click_msg(on_msg, Msg::ViewPdf(id))}>{"View"}</button>
            <button class={classes!(ACTION_BTN, "text-slate-700", "bg-slate-100")} onclick={click_msg(on_msg, Msg::Regenerate(id))}>{"Re-gen"}</button>
            <button class={classes!(ACTION_BTN, "text-slate-700", "bg-slate-100")} onclick={click_msg(on_msg, Msg::ExportJson(id))}>{"JSON"}</button>
        </>
    }
}

fn history_table(rows: &[HistoryRowView], on_msg: &Callback<Msg>) -> Html {
    if rows.is_empty() {
        return html! { <div class="p-8 text-slate-500 text-sm">{"No receipts found."}</div> };
    }

    html! {
        <table class="w-full text-left border-collapse">
            <thead>
                <tr class="bg-slate-50 border-b border-slate-200 text-xs font-bold uppercase tracking-wider text-slate-500">
                    <th class="px-6 py-4">{"Receipt No"}</th>
                    <th class="px-6 py-4">{"Student Name"}</th>
                    <th class="px-6 py-4">{"Class"}</th>
                    <th class="px-6 py-4">{"Total Amount"}</th>
                    <th class="px-6 py-4">{"Date Issued"}</th>
                    <th class="px-6 py-4 text-right">{"Actions"}</th>
                </tr>
            </thead>
            <tbody class="divide-y divide-slate-100">
                { for rows.iter().map(|row| html! {
                    <tr key={row.id} class="hover:bg-slate-50 transition-colors">
                        <td class="px-6 py-4">
                            <button class="font-mono text-sm font-bold text-primary" onclick={click_msg(on_msg, Msg::ShowDetails(row.id))}>
                                { row.receipt_label.clone() }
                            </button>
                        </td>
                        <td class="px-6 py-4">
                            <div class="flex items-center gap-3">
                                <div class="size-8 rounded-full bg-primary/10 flex items-center justify-center text-primary font-bold text-xs">
                                    { row.initials.clone() }
                                </div>
                                <span class="text-sm font-medium text-slate-900">{ row.student_name.clone() }</span>
                            </div>
                        </td>
                        <td class="px-6 py-4 text-sm text-slate-600">{ row.student_class.clone() }</td>
                        <td class="px-6 py-4 text-sm font-bold text-slate-900">{ row.total.clone() }</td>
                        <td class="px-6 py-4 text-sm text-slate-500">{ row.issued.clone() }</td>
                        <td class="px-6 py-4 text-right">
                            <div class="flex justify-end gap-2 flex-wrap">
                                { row_actions(on_msg, row.id) }
                                <button class={classes!(ACTION_BTN, "text-red-700", "bg-red-50")} onclick={click_msg(on_msg, Msg::RequestDelete(row.id))}>{"Delete"}</button>
                            </div>
                        </td>
                    </tr>
                }) }
            </tbody>
        </table>
    }
}

fn detail_panel(detail: &DetailView, on_msg: &Callback<Msg>) -> Html {
    html! {
        <div id="history-detail" class="bg-white rounded-xl border border-slate-200 p-6">
            <h3 class="text-lg font-bold text-slate-900 mb-2">{ detail.heading.clone() }</h3>
            <p class="text-sm text-slate-600 mb-4">{ detail.subheading.clone() }</p>
            <div class="overflow-x-auto">
                <table class="w-full text-sm">
                    <thead><tr><th class="text-left py-2">{"Item"}</th><th class="text-left py-2">{"Amount"}</th></tr></thead>
                    <tbody>
                        { for detail.items.iter().map(|(name, amount)| html! {
                            <tr><td class="py-2 pr-4">{ name.clone() }</td><td class="py-2">{ amount.clone() }</td></tr>
                        }) }
                    </tbody>
                </table>
            </div>
            <p class="mt-4 font-bold">{ detail.total.clone() }</p>
            <div class="mt-4 flex gap-2 flex-wrap">
                { row_actions(on_msg, detail.id) }
            </div>
        </div>
    }
}

#[function_component(HistoryPage)]
pub fn history_page(props: &HistoryPageProps) -> Html {
    let on_msg = &props.on_msg;

    let actions = html! {
        <div class="flex gap-2">
            <button id="export-csv-btn" class="flex items-center gap-2 bg-slate-100 text-slate-700 px-4 py-2 rounded-xl font-bold text-sm" onclick={click_msg(on_msg, Msg::ExportCsv)}>
                { icon_download() }{"Export CSV"}
            </button>
            <button id="goto-create-btn" class="flex items-center gap-2 bg-primary text-white px-4 py-2 rounded-xl font-bold text-sm hover:opacity-90" onclick={click_msg(on_msg, Msg::Navigate(View::Create))}>
                { icon_plus() }{"New Receipt"}
            </button>
        </div>
    };

    page_shell(
        View::History.title(),
        actions,
        html! {
            <>
                <div class="grid grid-cols-1 md:grid-cols-4 gap-3">
                    <input id="search-input" class={INPUT_CLASS} placeholder="Search name, class or receipt no"
                        value={props.filter.search.clone()}
                        oninput={input_msg(on_msg, |v| Msg::SetFilter(FilterField::Search, v))} />
                    <input id="date-from" type="date" class={INPUT_CLASS}
                        value={props.filter.date_from.clone()}
                        oninput={input_msg(on_msg, |v| Msg::SetFilter(FilterField::DateFrom, v))} />
                    <input id="date-to" type="date" class={INPUT_CLASS}
                        value={props.filter.date_to.clone()}
                        oninput={input_msg(on_msg, |v| Msg::SetFilter(FilterField::DateTo, v))} />
                    <button id="apply-filters-btn" class="bg-primary text-white rounded-lg px-4 py-2 text-sm font-bold" onclick={click_msg(on_msg, Msg::ApplyFilters)}>
                        {"Apply Filters"}
                    </button>
                </div>

                <div class="bg-white rounded-xl shadow-sm border border-slate-200 overflow-hidden">
                    <div id="history-table-wrap" class="overflow-x-auto">
                        { history_table(&props.rows, on_msg) }
                    </div>
                    <div class="flex items-center justify-between px-6 py-4 border-t border-slate-200 text-sm">
                        <span id="history-summary" class="text-slate-500">{ props.footer.summary.clone() }</span>
                        <div class="flex gap-6">
                            <span>{"Receipts: "}<strong id="footer-count">{ props.footer.count.clone() }</strong></span>
                            <span>{"Total: "}<strong id="footer-total">{ props.footer.total.clone() }</strong></span>
                        </div>
                    </div>
                </div>

                {
                    match &props.detail {
                        Some(detail) => detail_panel(detail, on_msg),
                        None => html! {},
                    }
                }
            </>
        },
    )
}
