use yew::prelude::*;

use super::icons::{icon_menu, icon_receipt};
use crate::router::{nav_class, View, NAV_ITEMS};
use crate::state::Msg;

#[derive(Properties, PartialEq)]
pub struct LayoutProps {
    pub children: Children,
    pub active: View,
    pub mobile_menu_open: bool,
    pub on_msg: Callback<Msg>,
}

#[function_component(Layout)]
pub fn layout(props: &LayoutProps) -> Html {
    let nav_buttons = |extra: &'static str| -> Html {
        html! {
            <>{ for NAV_ITEMS.iter().map(|item| {
                let on_msg = props.on_msg.clone();
                let view = item.view;
                html! {
                    <button
                        type="button"
                        class={classes!(nav_class(item.view, props.active), extra)}
                        onclick={Callback::from(move |_| on_msg.emit(Msg::Navigate(view)))}
                    >
                        { item.label }
                    </button>
                }
            }) }</>
        }
    };

    let on_toggle_menu = {
        let on_msg = props.on_msg.clone();
        Callback::from(move |_| on_msg.emit(Msg::ToggleMobileMenu))
    };

    html! {
        <div class="min-h-screen bg-slate-50 flex flex-col">
            <header class="bg-white border-b border-slate-200">
                <div class="max-w-7xl mx-auto h-16 px-6 flex items-center justify-between">
                    <div class="flex items-center gap-3 text-primary">
                        { icon_receipt() }
                        <span class="text-lg font-black tracking-tight text-slate-900">{"Receipt Desk"}</span>
                    </div>
                    <nav class="hidden md:flex items-center gap-6">
                        { nav_buttons("") }
                    </nav>
                    <button id="mobile-menu-btn" type="button" class="md:hidden p-2 rounded-lg hover:bg-slate-100" aria-label="Menu" onclick={on_toggle_menu}>
                        { icon_menu() }
                    </button>
                </div>
                {
                    if props.mobile_menu_open {
                        html! {
                            <nav id="mobile-menu" class="md:hidden flex flex-col gap-2 px-6 pb-4">
                                { nav_buttons("text-left py-2") }
                            </nav>
                        }
                    } else {
                        html! {}
                    }
                }
            </header>
            <main class="flex-1">
                { for props.children.iter() }
            </main>
        </div>
    }
}
