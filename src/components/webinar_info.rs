use yew::prelude::*;

use crate::types::WebinarTopic;

/// Session entries, one per non-empty line of the schedule text.
fn schedule_entries(schedule: &str) -> Vec<String> {
    schedule
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(String::from)
        .collect()
}

/// First line is the speaker's name, the remaining lines the bio.
fn speaker_name_bio(speaker: &str) -> (String, String) {
    let mut lines = speaker.lines().map(str::trim);
    let name = lines.next().unwrap_or("").to_string();
    let bio = lines
        .filter(|l| !l.is_empty())
        .collect::<Vec<_>>()
        .join("\n");
    (name, bio)
}

#[derive(Properties, PartialEq)]
pub struct WebinarInfoProps {
    pub topic: WebinarTopic,
}

#[function_component(WebinarInfoSection)]
pub fn webinar_info_section(props: &WebinarInfoProps) -> Html {
    let sessions = schedule_entries(&props.topic.schedule);
    let (speaker_name, speaker_bio) = speaker_name_bio(&props.topic.speaker);

    if sessions.is_empty() && speaker_name.is_empty() {
        return html! {};
    }

    html! {
        <section style="max-width:720px; margin:0 auto; padding:24px 16px; display:flex; flex-direction:column; gap:24px;">
            if !sessions.is_empty() {
                <div style={card()}>
                    <h2 style="margin:0 0 16px 0; font-size:20px;">{ "세션 일정" }</h2>
                    { for sessions.iter().map(|s| html! {
                        <div style="padding:10px 0; border-bottom:1px solid #1e293b; color:#cbd5e1;">
                            { s }
                        </div>
                    }) }
                </div>
            }
            if !speaker_name.is_empty() {
                <div style={card()}>
                    <h2 style="margin:0 0 12px 0; font-size:20px;">{ "연사 소개" }</h2>
                    <div style="font-weight:700; margin-bottom:6px;">{ speaker_name }</div>
                    if !speaker_bio.is_empty() {
                        <div style="color:#94a3b8; white-space:pre-line; line-height:1.6;">
                            { speaker_bio }
                        </div>
                    }
                </div>
            }
        </section>
    }
}

fn card() -> String {
    "background:#0b1120; border:1px solid #1e293b; border-radius:16px; padding:24px;".into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schedule_splits_per_line_and_drops_blanks() {
        let entries = schedule_entries("14:00 - 오프닝\n\n  14:30 - 세션 1  \n");
        assert_eq!(entries, vec!["14:00 - 오프닝", "14:30 - 세션 1"]);
    }

    #[test]
    fn speaker_first_line_is_the_name() {
        let (name, bio) = speaker_name_bio("홍길동 소장\nOO연구소 15년\n저서 다수");
        assert_eq!(name, "홍길동 소장");
        assert_eq!(bio, "OO연구소 15년\n저서 다수");
    }

    #[test]
    fn empty_speaker_yields_empty_parts() {
        let (name, bio) = speaker_name_bio("");
        assert_eq!(name, "");
        assert_eq!(bio, "");
    }
}
