use yew::prelude::*;

use crate::constants::PRODUCT_NAME;

#[function_component(Header)]
pub fn header() -> Html {
    html! {
        <header style="padding:20px 32px; display:flex; align-items:center; gap:10px;">
            <span style="font-size:20px; font-weight:800; letter-spacing:-0.5px;">
                { PRODUCT_NAME }
            </span>
            <span style="font-size:12px; color:#34d399; border:1px solid #34d399; border-radius:999px; padding:2px 10px;">
                { "LIVE WEBINAR" }
            </span>
        </header>
    }
}
