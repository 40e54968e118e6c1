use yew::prelude::*;

use crate::toast::Toast;

#[derive(Properties, PartialEq)]
pub struct ToastStackProps {
    pub toasts: Vec<Toast>,
}

#[function_component(ToastStack)]
pub fn toast_stack(props: &ToastStackProps) -> Html {
    html! {
        <div id="toast-container" class="fixed bottom-6 right-6 z-50 flex flex-col gap-2">
            { for props.toasts.iter().map(|toast| html! {
                <div key={toast.id} class={classes!(toast.class(), "rounded-lg", "px-4", "py-3", "text-sm", "shadow-lg")}>
                    { toast.message.clone() }
                </div>
            }) }
        </div>
    }
}
