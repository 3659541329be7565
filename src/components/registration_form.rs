use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::gateway::RegistrationGateway;

#[derive(Properties, PartialEq)]
pub struct RegistrationFormProps {
    pub gateway: RegistrationGateway,
}

/// Sign-up form on the landing view. Submits one document through the
/// gateway with the submission instant as the timestamp.
#[function_component(RegistrationForm)]
pub fn registration_form(props: &RegistrationFormProps) -> Html {
    let affiliation = use_state(String::new);
    let employee_id = use_state(String::new);
    let name = use_state(String::new);
    let position = use_state(String::new);
    let submitting = use_state(|| false);
    let message = use_state(String::new);

    let onsubmit = {
        let gateway = props.gateway.clone();
        let affiliation = affiliation.clone();
        let employee_id = employee_id.clone();
        let name = name.clone();
        let position = position.clone();
        let submitting = submitting.clone();
        let message = message.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let fields = [
                (*affiliation).clone(),
                (*employee_id).clone(),
                (*name).clone(),
                (*position).clone(),
            ];
            if fields.iter().any(|f| f.trim().is_empty()) {
                message.set("모든 항목을 입력해 주세요.".to_string());
                return;
            }

            submitting.set(true);
            message.set(String::new());

            let gw = gateway.clone();
            let affiliation = affiliation.clone();
            let employee_id = employee_id.clone();
            let name = name.clone();
            let position = position.clone();
            let submitting = submitting.clone();
            let message = message.clone();
            spawn_local(async move {
                let timestamp: String = js_sys::Date::new_0().to_iso_string().into();
                let [a, e, n, p] = fields;
                match gw
                    .submit_registration(a.trim(), e.trim(), n.trim(), p.trim(), &timestamp)
                    .await
                {
                    Ok(()) => {
                        affiliation.set(String::new());
                        employee_id.set(String::new());
                        name.set(String::new());
                        position.set(String::new());
                        message.set("등록이 완료되었습니다. 참여해 주셔서 감사합니다!".to_string());
                    }
                    Err(err) => {
                        message.set(format!("등록에 실패했습니다: {err}"));
                    }
                }
                submitting.set(false);
            });
        })
    };

    let bind = |state: UseStateHandle<String>| {
        Callback::from(move |e: InputEvent| {
            state.set(e.target_unchecked_into::<HtmlInputElement>().value());
        })
    };

    html! {
        <section style="max-width:480px; margin:24px auto 0; background:#0b1120; border:1px solid #1e293b; border-radius:16px; padding:28px;">
            <h2 style="margin:0 0 16px 0; font-size:20px;">{ "사전 등록" }</h2>
            <form {onsubmit} style="display:flex; flex-direction:column; gap:12px;">
                { field("소속", &affiliation, bind(affiliation.clone())) }
                { field("사번", &employee_id, bind(employee_id.clone())) }
                { field("성함", &name, bind(name.clone())) }
                { field("직책", &position, bind(position.clone())) }
                <button type="submit" disabled={*submitting} style={submit_style()}>
                    { if *submitting { "등록 중…" } else { "등록하기" } }
                </button>
            </form>
            if !message.is_empty() {
                <p style="margin:14px 0 0; font-size:14px; color:#94a3b8;">{ (*message).clone() }</p>
            }
        </section>
    }
}

fn field(label: &str, value: &str, oninput: Callback<InputEvent>) -> Html {
    html! {
        <div>
            <label style="display:block; font-size:13px; color:#94a3b8; margin-bottom:6px;">
                { label }
            </label>
            <input
                value={value.to_string()}
                {oninput}
                style="width:100%; box-sizing:border-box; background:#0f172a; border:1px solid #334155; border-radius:8px; padding:10px 12px; color:#e2e8f0; outline:none;"
            />
        </div>
    }
}

fn submit_style() -> String {
    "margin-top:8px; padding:12px; border-radius:8px; border:1px solid #2563eb; background:#2563eb; color:#fff; font-weight:700; cursor:pointer;".into()
}
