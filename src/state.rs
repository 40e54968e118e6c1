use serde_json::Value;

use crate::api::{pdf_path, ReceiptFilter};
use crate::error::{ApiError, ApiResult};
use crate::export::{self, CSV_FILENAME, CSV_MIME, JSON_MIME};
use crate::form::{FormCommand, ReceiptForm, RowId};
use crate::history::{FilterField, HistoryState};
use crate::modal::{ConfirmAction, ModalState, PendingConfirmation};
use crate::models::{
    datetime_label, Ack, CreatedReceipt, Health, NewReceipt, Receipt, ReceiptSummary, Settings,
};
use crate::money::{format_money, Currency};
use crate::router::{View, ViewLoad};
use crate::settings::{SettingsField, SettingsPanel};
use crate::toast::{ToastKind, ToastQueue};

const FIX_ERRORS: &str = "Please fix form validation errors";

#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    Navigate(View),
    ToggleMobileMenu,

    Form(FormCommand),
    RequestRemoveRow(RowId),
    SubmitReceipt,
    ReceiptCreated(ApiResult<CreatedReceipt>),
    OpenLatestPdf,
    PrintLatestPdf,
    NewReceipt,

    SetFilter(FilterField, String),
    ApplyFilters,
    HistoryLoaded {
        ticket: u64,
        result: ApiResult<Vec<ReceiptSummary>>,
    },
    ShowDetails(i64),
    DetailsLoaded(ApiResult<Receipt>),
    ViewPdf(i64),
    Regenerate(i64),
    Regenerated(ApiResult<Ack>),
    ExportJson(i64),
    Exported(ApiResult<Value>),
    RequestDelete(i64),
    Deleted {
        id: i64,
        result: ApiResult<Ack>,
    },
    ExportCsv,

    SetSetting(SettingsField, String),
    SaveSettings,
    SettingsLoaded(ApiResult<Settings>),
    SettingsSaved {
        payload: Settings,
        result: ApiResult<Settings>,
    },
    CancelSettings,

    ConfirmModal,
    CancelModal,

    Notify(String, ToastKind),
    DismissToast(u32),
    HealthChecked(ApiResult<Health>),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    CheckHealth,
    LoadHistory { ticket: u64, filter: ReceiptFilter },
    LoadReceipt(i64),
    CreateReceipt(NewReceipt),
    Regenerate(i64),
    ExportReceipt(i64),
    DeleteReceipt(i64),
    LoadSettings,
    SaveSettings(Settings),
    OpenTab(String),
    PrintTab(String),
    Download {
        filename: String,
        mime: &'static str,
        content: String,
    },
    ExpireToast(u32),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SuccessView {
    pub receipt_number: String,
    pub student_name: String,
    pub total: String,
    pub issued: String,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct AppState {
    pub view: View,
    pub mobile_menu_open: bool,
    pub form: ReceiptForm,
    pub history: HistoryState,
    pub settings: SettingsPanel,
    pub modal: ModalState,
    pub toasts: ToastQueue,
    pub latest: Option<CreatedReceipt>,
    pub currency: Currency,
}

impl AppState {
    pub fn start() -> (Self, Vec<Effect>) {
        let mut state = AppState::default();
        let mut effects = vec![Effect::CheckHealth, Effect::LoadSettings];
        effects.extend(state.navigate(View::History));
        (state, effects)
    }

    pub fn success_view(&self) -> Option<SuccessView> {
        self.latest.as_ref().map(|created| {
            let r = &created.receipt;
            SuccessView {
                receipt_number: r.receipt_number.clone(),
                student_name: r.student_name.clone(),
                total: format_money(r.total.value(), &self.currency),
                issued: datetime_label(r.created_at),
            }
        })
    }

    fn toast(&mut self, message: impl Into<String>, kind: ToastKind) -> Effect {
        Effect::ExpireToast(self.toasts.push(message, kind))
    }

    fn fail(&mut self, err: impl ToString) -> Vec<Effect> {
        vec![self.toast(err.to_string(), ToastKind::Error)]
    }

    fn load_history(&mut self) -> Effect {
        Effect::LoadHistory {
            ticket: self.history.begin_load(),
            filter: self.history.filter.clone(),
        }
    }

    fn navigate(&mut self, view: View) -> Vec<Effect> {
        self.view = view;
        self.mobile_menu_open = false;
        match view.on_enter() {
            Some(ViewLoad::History) => vec![self.load_history()],
            Some(ViewLoad::Settings) => vec![Effect::LoadSettings],
            None => Vec::new(),
        }
    }

    pub fn update(&mut self, msg: Msg) -> Vec<Effect> {
        match msg {
            Msg::Navigate(view) => self.navigate(view),
            Msg::ToggleMobileMenu => {
                self.mobile_menu_open = !self.mobile_menu_open;
                Vec::new()
            }

            Msg::Form(command) => match self.form.apply(command) {
                Ok(()) => Vec::new(),
                Err(err) => self.fail(err),
            },
            Msg::RequestRemoveRow(row) => match self.form.check_removal(row) {
                Ok(()) => {
                    self.modal.open(PendingConfirmation::remove_expense_row(row));
                    Vec::new()
                }
                Err(err) => self.fail(err),
            },
            Msg::SubmitReceipt => {
                if !self.form.validate() {
                    return vec![self.toast(FIX_ERRORS, ToastKind::Error)];
                }
                vec![Effect::CreateReceipt(self.form.payload())]
            }
            Msg::ReceiptCreated(Ok(created)) => {
                log::info!("created receipt {}", created.receipt.receipt_number);
                self.latest = Some(created);
                let mut effects = self.navigate(View::Success);
                effects.push(self.load_history());
                effects.push(self.toast("Receipt generated successfully", ToastKind::Success));
                effects
            }
            Msg::ReceiptCreated(Err(err)) => self.fail(err),
            Msg::OpenLatestPdf => self
                .latest
                .as_ref()
                .map(|c| vec![Effect::OpenTab(c.pdf_url.clone())])
                .unwrap_or_default(),
            Msg::PrintLatestPdf => self
                .latest
                .as_ref()
                .map(|c| vec![Effect::PrintTab(c.pdf_url.clone())])
                .unwrap_or_default(),
            Msg::NewReceipt => {
                // Reset never fails.
                let _ = self.form.apply(FormCommand::Reset);
                self.navigate(View::Create)
            }

            Msg::SetFilter(field, value) => {
                self.history.set_filter(field, value);
                Vec::new()
            }
            Msg::ApplyFilters => vec![self.load_history()],
            Msg::HistoryLoaded { ticket, result } => match result {
                Ok(rows) => {
                    self.history.apply(ticket, rows);
                    Vec::new()
                }
                Err(err) => self.fail(err),
            },
            Msg::ShowDetails(id) => vec![Effect::LoadReceipt(id)],
            Msg::DetailsLoaded(Ok(receipt)) => {
                self.history.show_detail(receipt);
                Vec::new()
            }
            Msg::DetailsLoaded(Err(err)) => self.fail(err),
            Msg::ViewPdf(id) => vec![Effect::OpenTab(pdf_path(id))],
            Msg::Regenerate(id) => vec![Effect::Regenerate(id)],
            Msg::Regenerated(Ok(ack)) => {
                log::info!("{} ({})", ack.message, ack.pdf_url.as_deref().unwrap_or("no pdf url"));
                vec![
                    self.toast("PDF regenerated successfully", ToastKind::Success),
                    self.load_history(),
                ]
            }
            Msg::Regenerated(Err(err)) => self.fail(err),
            Msg::ExportJson(id) => vec![Effect::ExportReceipt(id)],
            Msg::Exported(Ok(document)) => vec![Effect::Download {
                filename: export::json_filename(&document),
                mime: JSON_MIME,
                content: export::pretty_json(&document),
            }],
            Msg::Exported(Err(err)) => self.fail(err),
            Msg::RequestDelete(id) => {
                self.modal.open(PendingConfirmation::delete_receipt(id));
                Vec::new()
            }
            Msg::Deleted { id, result } => {
                self.modal.finish(ConfirmAction::DeleteReceipt(id));
                match result {
                    Ok(ack) => {
                        log::info!("{}", ack.message);
                        vec![
                            self.toast("Receipt deleted", ToastKind::Success),
                            self.load_history(),
                        ]
                    }
                    Err(err) => {
                        let mut effects = self.fail(&err);
                        // Already gone on the server: the listed row is stale.
                        if matches!(err, ApiError::Status { status: 404, .. }) {
                            effects.push(self.load_history());
                        }
                        effects
                    }
                }
            }
            Msg::ExportCsv => {
                if self.history.rows().is_empty() {
                    return vec![self.toast("No receipts to export", ToastKind::Error)];
                }
                match export::history_csv(self.history.rows()) {
                    Ok(content) => vec![Effect::Download {
                        filename: CSV_FILENAME.to_string(),
                        mime: CSV_MIME,
                        content,
                    }],
                    Err(err) => self.fail(err),
                }
            }

            Msg::SetSetting(field, value) => {
                self.settings.set_field(field, value);
                Vec::new()
            }
            Msg::SaveSettings => {
                if !self.settings.validate() {
                    return vec![self.toast(FIX_ERRORS, ToastKind::Error)];
                }
                vec![Effect::SaveSettings(self.settings.payload())]
            }
            Msg::SettingsLoaded(Ok(settings)) => {
                self.currency = self.settings.loaded(settings);
                Vec::new()
            }
            Msg::SettingsLoaded(Err(err)) => self.fail(err),
            Msg::SettingsSaved { payload, result } => match result {
                Ok(_) => {
                    self.currency = self.settings.saved(payload);
                    vec![self.toast("Settings saved successfully", ToastKind::Success)]
                }
                Err(err) => self.fail(err),
            },
            Msg::CancelSettings => match self.settings.revert() {
                Some(currency) => {
                    self.currency = currency;
                    Vec::new()
                }
                None => vec![Effect::LoadSettings],
            },

            Msg::ConfirmModal => match self.modal.confirm() {
                Some(ConfirmAction::RemoveExpenseRow(row)) => {
                    let outcome = self.form.apply(FormCommand::RemoveRow(row));
                    self.modal.close();
                    match outcome {
                        Ok(()) => Vec::new(),
                        Err(err) => self.fail(err),
                    }
                }
                // The dialog stays open until `Deleted` arrives.
                Some(ConfirmAction::DeleteReceipt(id)) => vec![Effect::DeleteReceipt(id)],
                None => Vec::new(),
            },
            Msg::CancelModal => {
                self.modal.cancel();
                Vec::new()
            }

            Msg::Notify(message, kind) => vec![self.toast(message, kind)],
            Msg::DismissToast(id) => {
                self.toasts.dismiss(id);
                Vec::new()
            }
            Msg::HealthChecked(Ok(health)) => {
                log::info!("backend status: {}", health.status);
                Vec::new()
            }
            Msg::HealthChecked(Err(err)) => {
                log::warn!("backend health check failed: {}", err);
                Vec::new()
            }
        }
    }
}
