use yew::prelude::*;

use crate::types::WebinarTopic;

#[derive(Properties, PartialEq)]
pub struct HeroProps {
    pub topic: WebinarTopic,
    pub live_link: String,
}

/// Landing hero: main title, description, optional key visual, and the join
/// button once a live link has been configured.
#[function_component(Hero)]
pub fn hero(props: &HeroProps) -> Html {
    let title = if props.topic.title.trim().is_empty() {
        "곧 공개되는 웨비나"
    } else {
        props.topic.title.trim()
    };

    html! {
        <section style="text-align:center; padding:64px 16px 32px;">
            <h1 style="font-size:40px; margin:0 0 16px 0; letter-spacing:-1px;">{ title }</h1>
            if !props.topic.description.trim().is_empty() {
                <p style="max-width:640px; margin:0 auto 24px; color:#94a3b8; line-height:1.7; white-space:pre-line;">
                    { props.topic.description.trim() }
                </p>
            }
            if !props.live_link.trim().is_empty() {
                <a
                    href={props.live_link.trim().to_string()}
                    target="_blank"
                    style="display:inline-block; background:#2563eb; color:#fff; font-weight:700; padding:14px 32px; border-radius:10px; text-decoration:none;"
                >
                    { "라이브 방송 바로가기" }
                </a>
            }
            if !props.topic.image_url.trim().is_empty() {
                <div style="margin-top:40px;">
                    <img
                        src={props.topic.image_url.trim().to_string()}
                        alt="웨비나 대표 이미지"
                        style="max-width:100%; max-height:420px; border-radius:16px; border:1px solid #1e293b;"
                    />
                </div>
            }
        </section>
    }
}
