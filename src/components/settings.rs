use yew::prelude::*;

use super::{click_msg, error_text, input_msg, page_shell, textarea_msg, INPUT_CLASS};
use crate::router::View;
use crate::settings::{SettingsField, SettingsPanel};
use crate::state::Msg;

#[derive(Properties, PartialEq)]
pub struct SettingsPageProps {
    pub panel: SettingsPanel,
    pub on_msg: Callback<Msg>,
}

#[function_component(SettingsPage)]
pub fn settings_page(props: &SettingsPageProps) -> Html {
    let on_msg = &props.on_msg;
    let draft = &props.panel.draft;
    let errors = &props.panel.errors;

    let on_submit = {
        let on_msg = on_msg.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            on_msg.emit(Msg::SaveSettings);
        })
    };

    let text_field = |id: &'static str, label: &'static str, field: SettingsField, value: &str| {
        html! {
            <div class="space-y-1">
                <label for={id} class="block text-sm font-medium text-slate-700">{ label }</label>
                <input id={id} class={errors.input_class(field, INPUT_CLASS)}
                    value={value.to_string()}
                    oninput={input_msg(on_msg, move |v| Msg::SetSetting(field, v))} />
                { error_text(errors.get(field)) }
            </div>
        }
    };

    let text_area = |id: &'static str, label: &'static str, field: SettingsField, value: &str| {
        html! {
            <div class="space-y-1 md:col-span-2">
                <label for={id} class="block text-sm font-medium text-slate-700">{ label }</label>
                <textarea id={id} rows="2" class={INPUT_CLASS}
                    value={value.to_string()}
                    oninput={textarea_msg(on_msg, move |v| Msg::SetSetting(field, v))} />
            </div>
        }
    };

    let status_class = if props.panel.saved_notice {
        "text-sm text-green-600 transition-opacity"
    } else {
        "text-sm text-green-600 transition-opacity opacity-0"
    };

    page_shell(
        View::Settings.title(),
        html! {},
        html! {
            <form id="settings-form" class="bg-white rounded-xl border border-slate-200 p-6 space-y-6" onsubmit={on_submit} novalidate={true}>
                <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                    { text_field("school-name", "School Name", SettingsField::SchoolName, &draft.school_name) }
                    { text_field("school-contact", "Contact", SettingsField::SchoolContact, &draft.school_contact) }
                    { text_field("currency-symbol", "Currency Symbol", SettingsField::CurrencySymbol, &draft.currency_symbol) }
                    { text_field("default-pdf-folder", "Default PDF Folder", SettingsField::DefaultPdfFolder, &draft.default_pdf_folder) }
                    { text_area("school-address", "Address", SettingsField::SchoolAddress, &draft.school_address) }
                    { text_area("footer-text", "Receipt Footer", SettingsField::FooterText, &draft.footer_text) }
                </div>
                <div class="flex items-center justify-end gap-3">
                    <span id="status-message" class={status_class}>{"Settings saved"}</span>
                    <button id="cancel-settings-btn" type="button" class="px-4 py-2 rounded-lg bg-slate-100 text-slate-700 text-sm font-bold"
                        onclick={click_msg(on_msg, Msg::CancelSettings)}>
                        {"Cancel"}
                    </button>
                    <button type="submit" class="px-4 py-2 rounded-lg bg-primary text-white text-sm font-bold hover:opacity-90">
                        {"Save Settings"}
                    </button>
                </div>
            </form>
        },
    )
}
