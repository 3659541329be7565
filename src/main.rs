// xClass NOW — webinar landing page with a password-gated admin panel.

use std::rc::Rc;

use yew::prelude::*;

mod components;
mod config;
mod constants;
mod export;
mod gateway;
mod types;

use components::admin::AdminPage;
use components::header::Header;
use components::hero::Hero;
use components::registration_form::RegistrationForm;
use components::webinar_info::WebinarInfoSection;
use config::{BrowserConfig, ConfigStore};
use gateway::RegistrationGateway;

#[derive(Clone, Copy, PartialEq, Eq)]
enum View {
    Landing,
    Admin,
}

#[function_component(App)]
fn app() -> Html {
    let view = use_state(|| View::Landing);
    let store: Rc<dyn ConfigStore> = use_memo((), |_| BrowserConfig::default());

    let to_admin = {
        let view = view.clone();
        Callback::from(move |_: MouseEvent| view.set(View::Admin))
    };
    let on_back = {
        let view = view.clone();
        Callback::from(move |_: ()| view.set(View::Landing))
    };

    let body = match *view {
        View::Landing => {
            let topic = store.webinar_info();
            let live_link = store.live_link();
            let gateway = RegistrationGateway::new(store.backend_settings());
            html! {
                <>
                    <Hero topic={topic.clone()} {live_link} />
                    <WebinarInfoSection {topic} />
                    <RegistrationForm {gateway} />
                </>
            }
        }
        View::Admin => html! {
            <AdminPage store={store.clone()} {on_back} />
        },
    };

    let year = js_sys::Date::new_0().get_full_year();

    html! {
        <div style="min-height:100vh;">
            <Header />
            <main style="padding:0 16px 64px; max-width:1080px; margin:0 auto;">
                { body }
                <div style="margin-top:80px; text-align:center;">
                    <p style="color:#475569; font-size:13px;">
                        { format!("© {year} {}. All rights reserved.", constants::PRODUCT_NAME) }
                    </p>
                    <button
                        onclick={to_admin}
                        style="border:none; background:transparent; color:#334155; font-size:12px; cursor:pointer;"
                    >
                        { "Admin Panel" }
                    </button>
                </div>
            </main>
        </div>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
