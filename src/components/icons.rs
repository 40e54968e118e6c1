use yew::prelude::*;

fn icon_base(path: &'static str) -> Html {
    html! {
        <svg width="18" height="18" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
            <path d={path}></path>
        </svg>
    }
}

pub fn icon_receipt() -> Html {
    icon_base("M6 2h12v20l-3-2-3 2-3-2-3 2zM9 7h6M9 11h6M9 15h4")
}
pub fn icon_plus() -> Html {
    icon_base("M12 5v14M5 12h14")
}
pub fn icon_trash() -> Html {
    icon_base("M3 6h18M8 6V4h8v2M6 6l1 14h10l1-14")
}
pub fn icon_download() -> Html {
    icon_base("M12 3v12M7 10l5 5 5-5M4 21h16")
}
pub fn icon_menu() -> Html {
    icon_base("M3 6h18M3 12h18M3 18h18")
}
pub fn icon_check() -> Html {
    icon_base("M5 13l4 4L19 7")
}
pub fn icon_printer() -> Html {
    icon_base("M6 9V2h12v7M6 18H4v-7h16v7h-2M8 14h8v8H8z")
}
pub fn icon_file() -> Html {
    icon_base("M14 2H6v20h12V6zM14 2v4h4")
}
