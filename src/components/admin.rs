//! Admin panel: shared-secret gate, registrant report (sort + CSV export),
//! webinar settings editor, and backend connection editor.

use std::rc::Rc;

use gloo::console::log;
use gloo_timers::callback::Timeout;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::config::ConfigStore;
use crate::constants::ADMIN_PASSWORD;
use crate::export::{build_csv, csv_filename, download_csv, locale_timestamp, today_ymd};
use crate::gateway::RegistrationGateway;
use crate::types::{BackendSettings, RegistrationRecord, WebinarTopic};

/// Exact, case-sensitive comparison against the build-time secret. A match
/// flips a session-local flag; there is no token and no expiry.
pub fn authenticate(candidate: &str) -> bool {
    candidate == ADMIN_PASSWORD
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Tab {
    List,
    Webinar,
    Backend,
}

fn tab_label(t: Tab) -> &'static str {
    match t {
        Tab::List => "참가자 명단",
        Tab::Webinar => "웨비나 정보 설정",
        Tab::Backend => "DB 설정",
    }
}

// Store writes are synchronous, so there is no in-between state to show;
// `Success` holds for a short confirmation window and reverts.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum SaveStatus {
    Idle,
    Success,
}

fn save_button_label(status: SaveStatus) -> &'static str {
    match status {
        SaveStatus::Idle => "정보 업데이트",
        SaveStatus::Success => "저장 완료!",
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    fn flipped(self) -> Self {
        match self {
            SortOrder::Asc => SortOrder::Desc,
            SortOrder::Desc => SortOrder::Asc,
        }
    }

    fn arrow(self) -> &'static str {
        match self {
            SortOrder::Asc => "↑",
            SortOrder::Desc => "↓",
        }
    }
}

/// Stable in-memory sort by timestamp; ties keep their relative order.
fn sort_registrations(records: &mut [RegistrationRecord], order: SortOrder) {
    records.sort_by(|a, b| {
        let ord = a
            .timestamp_ms
            .partial_cmp(&b.timestamp_ms)
            .unwrap_or(std::cmp::Ordering::Equal);
        match order {
            SortOrder::Asc => ord,
            SortOrder::Desc => ord.reverse(),
        }
    });
}

/// Explicit (label, accessor, mutator) bindings for the backend settings
/// form; no dynamic key indexing.
type BackendField = (
    &'static str,
    fn(&BackendSettings) -> &str,
    fn(&mut BackendSettings, String),
);

fn backend_fields() -> [BackendField; 7] {
    [
        ("apiKey", |s| &s.api_key, |s, v| s.api_key = v),
        ("projectId", |s| &s.project_id, |s, v| s.project_id = v),
        ("authDomain", |s| &s.auth_domain, |s, v| s.auth_domain = v),
        ("appId", |s| &s.app_id, |s, v| s.app_id = v),
        (
            "storageBucket",
            |s| &s.storage_bucket,
            |s, v| s.storage_bucket = v,
        ),
        (
            "messagingSenderId",
            |s| &s.messaging_sender_id,
            |s, v| s.messaging_sender_id = v,
        ),
        (
            "measurementId",
            |s| &s.measurement_id,
            |s, v| s.measurement_id = v,
        ),
    ]
}

fn alert(message: &str) {
    if let Some(w) = web_sys::window() {
        let _ = w.alert_with_message(message);
    }
}

#[derive(Properties)]
pub struct AdminProps {
    pub store: Rc<dyn ConfigStore>,
    pub on_back: Callback<()>,
}

impl PartialEq for AdminProps {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.store, &other.store) && self.on_back == other.on_back
    }
}

#[function_component(AdminPage)]
pub fn admin_page(props: &AdminProps) -> Html {
    let authenticated = use_state(|| false);
    let password = use_state(String::new);
    let tab = use_state(|| Tab::List);

    // Drafts for the two editors, seeded from the store.
    let url = use_state(String::new);
    let topic = use_state(WebinarTopic::default);
    let backend = use_state(BackendSettings::default);

    // Report state.
    let registrations = use_state(Vec::<RegistrationRecord>::new);
    let is_fetching = use_state(|| false);
    let sort_order = use_state(|| SortOrder::Desc);
    let save_status = use_state(|| SaveStatus::Idle);

    let gateway = {
        let store = props.store.clone();
        use_state(move || RegistrationGateway::new(store.backend_settings()))
    };

    // Whole-set replace; no cancellation. A second load racing the first is
    // last-resolved-wins, same as the original page.
    let load = {
        let gateway = gateway.clone();
        let registrations = registrations.clone();
        let is_fetching = is_fetching.clone();
        Callback::from(move |_: ()| {
            let gw = (*gateway).clone();
            let registrations = registrations.clone();
            let is_fetching = is_fetching.clone();
            is_fetching.set(true);
            spawn_local(async move {
                let rows = gw.fetch_all_registrations().await;
                registrations.set(rows);
                is_fetching.set(false);
            });
        })
    };

    // Seed drafts on mount and fetch once the gate opens.
    {
        let store = props.store.clone();
        let url = url.clone();
        let topic = topic.clone();
        let backend = backend.clone();
        let load = load.clone();
        use_effect_with(*authenticated, move |authed| {
            url.set(store.live_link());
            topic.set(store.webinar_info());
            backend.set(store.backend_settings());
            if *authed {
                load.emit(());
            }
            || ()
        });
    }

    let on_login = {
        let authenticated = authenticated.clone();
        let password = password.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if authenticate(&password) {
                authenticated.set(true);
            } else {
                alert("비밀번호가 올바르지 않습니다.");
            }
        })
    };

    let on_toggle_sort = {
        let registrations = registrations.clone();
        let sort_order = sort_order.clone();
        Callback::from(move |_: MouseEvent| {
            let next = sort_order.flipped();
            let mut rows = (*registrations).clone();
            sort_registrations(&mut rows, next);
            sort_order.set(next);
            registrations.set(rows);
        })
    };

    let on_download = {
        let registrations = registrations.clone();
        Callback::from(move |_: MouseEvent| {
            if registrations.is_empty() {
                return;
            }
            let csv = build_csv(&registrations, |r| locale_timestamp(r.timestamp_ms));
            if let Err(e) = download_csv(&csv_filename(&today_ymd()), &csv) {
                log!(format!("CSV 다운로드 실패: {e}"));
            }
        })
    };

    // The write completes before the label flips; the timer only reverts
    // the confirmation.
    let on_webinar_save = {
        let store = props.store.clone();
        let url = url.clone();
        let topic = topic.clone();
        let save_status = save_status.clone();
        Callback::from(move |_: MouseEvent| {
            store.set_live_link(&url);
            store.set_webinar_info(&topic);
            save_status.set(SaveStatus::Success);
            let save_status = save_status.clone();
            Timeout::new(2000, move || save_status.set(SaveStatus::Idle)).forget();
        })
    };

    // Persist, then tear down and rebuild the gateway with the new
    // parameters and refetch. No page reload.
    let on_backend_save = {
        let store = props.store.clone();
        let backend = backend.clone();
        let gateway = gateway.clone();
        let registrations = registrations.clone();
        let is_fetching = is_fetching.clone();
        Callback::from(move |_: MouseEvent| {
            store.set_backend_settings(&backend);
            let gw = RegistrationGateway::new((*backend).clone());
            gateway.set(gw.clone());
            alert("설정이 저장되었습니다. 새 설정으로 다시 연결합니다.");
            let registrations = registrations.clone();
            let is_fetching = is_fetching.clone();
            is_fetching.set(true);
            spawn_local(async move {
                let rows = gw.fetch_all_registrations().await;
                registrations.set(rows);
                is_fetching.set(false);
            });
        })
    };

    if !*authenticated {
        let on_back = {
            let on_back = props.on_back.clone();
            Callback::from(move |_: MouseEvent| on_back.emit(()))
        };
        let on_password = {
            let password = password.clone();
            Callback::from(move |e: InputEvent| {
                let v = e.target_unchecked_into::<HtmlInputElement>().value();
                password.set(v);
            })
        };
        return html! {
            <div style="display:flex; align-items:center; justify-content:center; min-height:60vh;">
                <div style={panel()}>
                    <h2 style="margin:0 0 20px 0; text-align:center;">{ "Admin Access" }</h2>
                    <form onsubmit={on_login} style="display:flex; flex-direction:column; gap:12px;">
                        <input
                            type="password"
                            placeholder="Password"
                            value={(*password).clone()}
                            oninput={on_password}
                            style={input_style()}
                        />
                        <button type="submit" style={btn_primary()}>{ "로그인" }</button>
                        <button type="button" onclick={on_back} style={btn_ghost()}>{ "돌아가기" }</button>
                    </form>
                </div>
            </div>
        };
    }

    let set_tab = {
        let tab = tab.clone();
        Callback::from(move |t: Tab| tab.set(t))
    };

    let list_view = {
        let rows = (*registrations).clone();
        let refresh = {
            let load = load.clone();
            Callback::from(move |_: MouseEvent| load.emit(()))
        };
        html! {
            <div>
                <div style="display:flex; justify-content:space-between; align-items:center; margin-bottom:16px;">
                    <h2 style="margin:0;">{ format!("참가자 명단 ({})", rows.len()) }</h2>
                    <div style="display:flex; gap:8px;">
                        <button onclick={refresh} style={btn()}>
                            { if *is_fetching { "불러오는 중…" } else { "새로고침" } }
                        </button>
                        <button onclick={on_download} style={btn_primary()}>{ "CSV 다운로드" }</button>
                    </div>
                </div>
                <table style="width:100%; border-collapse:collapse; text-align:left;">
                    <thead>
                        <tr style="background:#1e293b; font-size:14px;">
                            <th style={th()}>{ "소속" }</th>
                            <th style={th()}>{ "사번" }</th>
                            <th style={th()}>{ "성함" }</th>
                            <th style={th()}>{ "직책" }</th>
                            <th style={format!("{} cursor:pointer;", th())} onclick={on_toggle_sort}>
                                { format!("참여 시간 {}", sort_order.arrow()) }
                            </th>
                        </tr>
                    </thead>
                    <tbody>
                        { for rows.iter().enumerate().map(|(idx, r)| html! {
                            <tr key={idx} style="border-bottom:1px solid #1e293b;">
                                <td style={td()}>{ &r.affiliation }</td>
                                <td style={td()}>{ &r.employee_id }</td>
                                <td style={td()}>{ &r.name }</td>
                                <td style={td()}>{ &r.position }</td>
                                <td style={td()} title={r.timestamp.clone()}>{ locale_timestamp(r.timestamp_ms) }</td>
                            </tr>
                        }) }
                    </tbody>
                </table>
            </div>
        }
    };

    let webinar_view = {
        let draft = (*topic).clone();
        let on_url = {
            let url = url.clone();
            Callback::from(move |e: InputEvent| {
                url.set(e.target_unchecked_into::<HtmlInputElement>().value());
            })
        };
        let on_title = bind_topic_input(topic.clone(), |t, v| t.title = v);
        let on_image = bind_topic_input(topic.clone(), |t, v| t.image_url = v);
        let on_description = bind_topic_textarea(topic.clone(), |t, v| t.description = v);
        let on_schedule = bind_topic_textarea(topic.clone(), |t, v| t.schedule = v);
        let on_speaker = bind_topic_textarea(topic.clone(), |t, v| t.speaker = v);

        html! {
            <div style="max-width:640px; display:flex; flex-direction:column; gap:14px;">
                <h2 style="margin:0;">{ "콘텐츠 상세 설정" }</h2>
                { text_field("유튜브 라이브 링크", &url, on_url) }
                { text_field("웨비나 메인 주제", &draft.title, on_title) }
                { area_field("상세 설명", &draft.description, on_description, "") }
                { area_field("세션 일정 (한 줄씩 입력)", &draft.schedule, on_schedule, "14:00 - 오프닝") }
                { area_field("연사 정보 (첫 줄은 이름, 둘째 줄부터 이력)", &draft.speaker, on_speaker, "홍길동 소장 (OO연구소)") }
                { text_field("메인 이미지 URL", &draft.image_url, on_image) }
                <div>
                    <button onclick={on_webinar_save} style={btn_primary()}>
                        { save_button_label(*save_status) }
                    </button>
                </div>
            </div>
        }
    };

    let backend_view = {
        let draft = (*backend).clone();
        html! {
            <div style="display:flex; flex-direction:column; gap:14px;">
                <h2 style="margin:0;">{ "DB 설정" }</h2>
                <div style="display:grid; grid-template-columns:1fr 1fr; gap:14px;">
                    { for backend_fields().into_iter().map(|(label, get, set)| {
                        let value = get(&draft).to_string();
                        let backend = backend.clone();
                        let oninput = Callback::from(move |e: InputEvent| {
                            let v = e.target_unchecked_into::<HtmlInputElement>().value();
                            let mut next = (*backend).clone();
                            set(&mut next, v);
                            backend.set(next);
                        });
                        html! {
                            <div>
                                <label style={label_style()}>{ label }</label>
                                <input value={value} {oninput} style={input_style()} />
                            </div>
                        }
                    }) }
                </div>
                <button onclick={on_backend_save} style={btn_primary()}>
                    { "DB 설정 저장 및 재연결" }
                </button>
            </div>
        }
    };

    let body = match *tab {
        Tab::List => list_view,
        Tab::Webinar => webinar_view,
        Tab::Backend => backend_view,
    };

    html! {
        <div style="max-width:960px; margin:32px auto;">
            <div style="background:#0b1120; border:1px solid #1e293b; border-radius:16px; overflow:hidden;">
                <div style="display:flex; background:#111a2e; border-bottom:1px solid #1e293b;">
                    { for [Tab::List, Tab::Webinar, Tab::Backend].into_iter().map(|t| {
                        let active = *tab == t;
                        let set_tab = set_tab.clone();
                        let style = if active {
                            "flex:1; padding:14px; font-weight:700; color:#60a5fa; background:#0b1120; border:none; border-bottom:2px solid #60a5fa; cursor:pointer;"
                        } else {
                            "flex:1; padding:14px; font-weight:700; color:#64748b; background:transparent; border:none; cursor:pointer;"
                        };
                        html! {
                            <button {style} onclick={Callback::from(move |_| set_tab.emit(t))}>
                                { tab_label(t) }
                            </button>
                        }
                    }) }
                </div>
                <div style="padding:28px;">
                    { body }
                </div>
            </div>
        </div>
    }
}

fn bind_topic_input(
    draft: UseStateHandle<WebinarTopic>,
    mutator: fn(&mut WebinarTopic, String),
) -> Callback<InputEvent> {
    Callback::from(move |e: InputEvent| {
        let v = e.target_unchecked_into::<HtmlInputElement>().value();
        let mut next = (*draft).clone();
        mutator(&mut next, v);
        draft.set(next);
    })
}

fn bind_topic_textarea(
    draft: UseStateHandle<WebinarTopic>,
    mutator: fn(&mut WebinarTopic, String),
) -> Callback<InputEvent> {
    Callback::from(move |e: InputEvent| {
        let v = e.target_unchecked_into::<HtmlTextAreaElement>().value();
        let mut next = (*draft).clone();
        mutator(&mut next, v);
        draft.set(next);
    })
}

fn text_field(label: &str, value: &str, oninput: Callback<InputEvent>) -> Html {
    html! {
        <div>
            <label style={label_style()}>{ label }</label>
            <input value={value.to_string()} {oninput} style={input_style()} />
        </div>
    }
}

fn area_field(label: &str, value: &str, oninput: Callback<InputEvent>, placeholder: &str) -> Html {
    html! {
        <div>
            <label style={label_style()}>{ label }</label>
            <textarea
                value={value.to_string()}
                {oninput}
                rows="4"
                placeholder={placeholder.to_string()}
                style={input_style()}
            />
        </div>
    }
}

fn panel() -> String {
    "background:#0b1120; border:1px solid #1e293b; border-radius:16px; padding:32px; width:100%; max-width:360px;".into()
}

fn input_style() -> String {
    "width:100%; box-sizing:border-box; background:#0f172a; border:1px solid #334155; border-radius:8px; padding:10px 12px; color:#e2e8f0; outline:none;".into()
}

fn label_style() -> String {
    "display:block; font-size:13px; color:#94a3b8; margin-bottom:6px;".into()
}

fn btn() -> String {
    "padding:8px 16px; border-radius:8px; border:1px solid #334155; background:#1e293b; color:#e2e8f0; cursor:pointer;".into()
}

fn btn_primary() -> String {
    "padding:10px 20px; border-radius:8px; border:1px solid #2563eb; background:#2563eb; color:#fff; font-weight:700; cursor:pointer;".into()
}

fn btn_ghost() -> String {
    "padding:8px; border:none; background:transparent; color:#64748b; cursor:pointer;".into()
}

fn th() -> String {
    "padding:12px 16px;".into()
}

fn td() -> String {
    "padding:12px 16px; font-size:14px;".into()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stamped(name: &str, ms: f64) -> RegistrationRecord {
        RegistrationRecord {
            affiliation: String::new(),
            employee_id: String::new(),
            name: name.into(),
            position: String::new(),
            timestamp: String::new(),
            timestamp_ms: ms,
        }
    }

    #[test]
    fn authenticate_requires_an_exact_match() {
        assert!(authenticate(ADMIN_PASSWORD));
        assert!(!authenticate(""));
        assert!(!authenticate(&ADMIN_PASSWORD.to_uppercase()));
        assert!(!authenticate(&format!("{ADMIN_PASSWORD} ")));
    }

    #[test]
    fn toggling_from_default_desc_yields_asc_then_desc() {
        let mut rows = vec![stamped("a", 3.0), stamped("b", 1.0), stamped("c", 2.0)];

        let order = SortOrder::Desc.flipped();
        sort_registrations(&mut rows, order);
        let asc: Vec<f64> = rows.iter().map(|r| r.timestamp_ms).collect();
        assert_eq!(asc, vec![1.0, 2.0, 3.0]);

        let order = order.flipped();
        sort_registrations(&mut rows, order);
        let desc: Vec<f64> = rows.iter().map(|r| r.timestamp_ms).collect();
        assert_eq!(desc, vec![3.0, 2.0, 1.0]);
    }

    #[test]
    fn equal_timestamps_keep_their_relative_order() {
        let mut rows = vec![stamped("first", 5.0), stamped("second", 5.0)];
        sort_registrations(&mut rows, SortOrder::Asc);
        assert_eq!(rows[0].name, "first");
        assert_eq!(rows[1].name, "second");
    }

    #[test]
    fn save_feedback_confirms_and_reverts() {
        assert_eq!(save_button_label(SaveStatus::Success), "저장 완료!");
        assert_eq!(save_button_label(SaveStatus::Idle), "정보 업데이트");
    }

    #[test]
    fn backend_field_bindings_cover_every_setting() {
        let mut settings = BackendSettings::default();
        for (i, (_, _, set)) in backend_fields().into_iter().enumerate() {
            set(&mut settings, format!("v{i}"));
        }
        assert_eq!(settings.api_key, "v0");
        assert_eq!(settings.project_id, "v1");
        assert_eq!(settings.auth_domain, "v2");
        assert_eq!(settings.app_id, "v3");
        assert_eq!(settings.storage_bucket, "v4");
        assert_eq!(settings.messaging_sender_id, "v5");
        assert_eq!(settings.measurement_id, "v6");
    }
}
