use claude_bell::hooks::{parse_event, HookEvent};
use claude_bell::sounds::SoundType;

#[test]
fn stop_payload_maps_to_stop() {
    let payload = r#"{"hook_event_name":"Stop","session_id":"abc"}"#;
    assert_eq!(parse_event(payload).unwrap(), Some(HookEvent::Stop));
}

#[test]
fn post_tool_use_payload_maps_to_tool_complete_sound() {
    let payload = r#"{"hook_event_name":"PostToolUse","tool_name":"Bash"}"#;
    let event = parse_event(payload).unwrap().unwrap();
    assert_eq!(event, HookEvent::PostToolUse);
    assert_eq!(event.sound(), SoundType::ToolComplete);
}

#[test]
fn unknown_or_missing_event_name_is_none() {
    assert_eq!(parse_event(r#"{"hook_event_name":"SessionStart"}"#).unwrap(), None);
    assert_eq!(parse_event(r#"{"type":"agent-turn-complete"}"#).unwrap(), None);
}

#[test]
fn malformed_payload_is_an_error() {
    assert!(parse_event("not json").is_err());
}

#[test]
fn only_stop_and_notification_default_on() {
    let enabled: Vec<_> = HookEvent::ALL
        .into_iter()
        .filter(|event| event.enabled_by_default())
        .collect();
    assert_eq!(enabled, vec![HookEvent::Stop, HookEvent::Notification]);
}
