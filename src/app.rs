use gloo_timers::future::TimeoutFuture;
use yew::prelude::*;

use crate::api::ApiClient;
use crate::browser;
use crate::components::{
    ConfirmModal, CreatePage, HistoryPage, Layout, SettingsPage, SuccessPage, ToastStack,
};
use crate::config::AppConfig;
use crate::router::View;
use crate::state::{AppState, Effect, Msg};
use crate::toast::ToastKind;

#[derive(Properties, PartialEq)]
pub struct AppProps {
    pub config: AppConfig,
}

pub struct App {
    state: AppState,
    client: ApiClient,
    toast_ms: u32,
}

impl App {
    fn run(&self, ctx: &Context<Self>, effect: Effect) {
        let link = ctx.link();
        let client = self.client.clone();
        match effect {
            Effect::CheckHealth => {
                link.send_future(async move { Msg::HealthChecked(client.health().await) })
            }
            Effect::LoadHistory { ticket, filter } => link.send_future(async move {
                Msg::HistoryLoaded {
                    ticket,
                    result: client.list_receipts(&filter).await,
                }
            }),
            Effect::LoadReceipt(id) => {
                link.send_future(async move { Msg::DetailsLoaded(client.get_receipt(id).await) })
            }
            Effect::CreateReceipt(payload) => link.send_future(async move {
                Msg::ReceiptCreated(client.create_receipt(&payload).await)
            }),
            Effect::Regenerate(id) => {
                link.send_future(async move { Msg::Regenerated(client.regenerate_pdf(id).await) })
            }
            Effect::ExportReceipt(id) => {
                link.send_future(async move { Msg::Exported(client.export_receipt(id).await) })
            }
            Effect::DeleteReceipt(id) => link.send_future(async move {
                Msg::Deleted {
                    id,
                    result: client.delete_receipt(id).await,
                }
            }),
            Effect::LoadSettings => {
                link.send_future(async move { Msg::SettingsLoaded(client.get_settings().await) })
            }
            Effect::SaveSettings(payload) => link.send_future(async move {
                let result = client.save_settings(&payload).await;
                Msg::SettingsSaved { payload, result }
            }),
            Effect::OpenTab(path) => {
                if let Err(err) = browser::open_tab(&client.url(&path)) {
                    link.send_message(Msg::Notify(err.to_string(), ToastKind::Error));
                }
            }
            Effect::PrintTab(path) => {
                if let Err(err) = browser::print_tab(&client.url(&path)) {
                    link.send_message(Msg::Notify(err.to_string(), ToastKind::Error));
                }
            }
            Effect::Download {
                filename,
                mime,
                content,
            } => {
                if let Err(err) = browser::download(&filename, mime, &content) {
                    link.send_message(Msg::Notify(err.to_string(), ToastKind::Error));
                }
            }
            Effect::ExpireToast(id) => {
                let ms = self.toast_ms;
                link.send_future(async move {
                    TimeoutFuture::new(ms).await;
                    Msg::DismissToast(id)
                })
            }
        }
    }
}

impl Component for App {
    type Message = Msg;
    type Properties = AppProps;

    fn create(ctx: &Context<Self>) -> Self {
        let config = &ctx.props().config;
        let (state, effects) = AppState::start();
        let app = App {
            state,
            client: ApiClient::new(&config.api_base),
            toast_ms: config.toast_duration_ms,
        };
        for effect in effects {
            app.run(ctx, effect);
        }
        app
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Msg) -> bool {
        let before = self.state.clone();
        for effect in self.state.update(msg) {
            self.run(ctx, effect);
        }
        self.state != before
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let state = &self.state;
        let on_msg = ctx.link().callback(|msg: Msg| msg);
        let currency = &state.currency;

        let page = match state.view {
            View::History => html! {
                <HistoryPage
                    rows={state.history.row_views(currency)}
                    footer={state.history.footer(currency)}
                    detail={state.history.detail_view(currency)}
                    filter={state.history.filter.clone()}
                    on_msg={on_msg.clone()}
                />
            },
            View::Create => html! {
                <CreatePage
                    form={state.form.clone()}
                    totals={state.form.totals().labels(currency)}
                    currency={currency.symbol().to_string()}
                    on_msg={on_msg.clone()}
                />
            },
            View::Success => html! {
                <SuccessPage view={state.success_view()} on_msg={on_msg.clone()} />
            },
            View::Settings => html! {
                <SettingsPage panel={state.settings.clone()} on_msg={on_msg.clone()} />
            },
        };

        html! {
            <>
                <Layout active={state.view} mobile_menu_open={state.mobile_menu_open} on_msg={on_msg.clone()}>
                    { page }
                </Layout>
                <ConfirmModal
                    pending={state.modal.pending().cloned()}
                    busy={state.modal.is_busy()}
                    on_msg={on_msg}
                />
                <ToastStack toasts={state.toasts.items().to_vec()} />
            </>
        }
    }

    fn rendered(&mut self, _ctx: &Context<Self>, _first_render: bool) {
        if let Some(document) = web_sys::window().and_then(|w| w.document()) {
            document.set_title(&format!("{} | Receipt Desk", self.state.view.title()));
        }
    }
}
