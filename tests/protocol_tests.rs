use vizbridge::protocol::{AiMessage, AssistantStatus, AudioData, StatusUpdate, UserMessage};

#[test]
fn test_user_message_full() {
    let json = r#"{
        "type": "user_message",
        "text": "hello world",
        "user": "alice",
        "definite": true,
        "paragraph": false
    }"#;

    let msg: UserMessage = serde_json::from_str(json).unwrap();
    assert_eq!(msg.text, "hello world");
    assert_eq!(msg.user, "alice");
    assert!(msg.definite);
    assert!(!msg.paragraph);
}

#[test]
fn test_user_message_defaults() {
    let msg: UserMessage = serde_json::from_str(r#"{"type": "user_message"}"#).unwrap();
    assert_eq!(msg.text, "");
    assert_eq!(msg.user, "");
    assert!(!msg.definite);
    assert!(!msg.paragraph);
}

#[test]
fn test_ai_message_interrupted_wire_name() {
    // The wire uses camelCase for this one field
    let json = r#"{"type": "ai_message", "text": "as I was saying", "isInterrupted": true}"#;

    let msg: AiMessage = serde_json::from_str(json).unwrap();
    assert_eq!(msg.text, "as I was saying");
    assert!(msg.is_interrupted);

    let serialized = serde_json::to_string(&msg).unwrap();
    assert!(serialized.contains("\"isInterrupted\":true"));
}

#[test]
fn test_ai_message_defaults() {
    let msg: AiMessage = serde_json::from_str("{}").unwrap();
    assert_eq!(msg.text, "");
    assert!(!msg.is_interrupted);
}

#[test]
fn test_status_update_missing_field_is_idle() {
    let msg: StatusUpdate = serde_json::from_str(r#"{"type": "status_update"}"#).unwrap();
    assert_eq!(msg.status, "idle");
}

#[test]
fn test_status_update_preserves_unknown_values() {
    // Unknown strings survive deserialization; the dispatcher decides what
    // to do with them
    let msg: StatusUpdate = serde_json::from_str(r#"{"status": "confused"}"#).unwrap();
    assert_eq!(msg.status, "confused");
    assert_eq!(AssistantStatus::parse(&msg.status), None);
}

#[test]
fn test_assistant_status_parse() {
    assert_eq!(AssistantStatus::parse("idle"), Some(AssistantStatus::Idle));
    assert_eq!(
        AssistantStatus::parse("listening"),
        Some(AssistantStatus::Listening)
    );
    assert_eq!(
        AssistantStatus::parse("thinking"),
        Some(AssistantStatus::Thinking)
    );
    assert_eq!(
        AssistantStatus::parse("speaking"),
        Some(AssistantStatus::Speaking)
    );
    assert_eq!(AssistantStatus::parse("Speaking"), None);
    assert_eq!(AssistantStatus::parse(""), None);
}

#[test]
fn test_assistant_status_serializes_lowercase() {
    let json = serde_json::to_string(&AssistantStatus::Speaking).unwrap();
    assert_eq!(json, "\"speaking\"");

    let parsed: AssistantStatus = serde_json::from_str("\"thinking\"").unwrap();
    assert_eq!(parsed, AssistantStatus::Thinking);
}

#[test]
fn test_audio_data_defaults() {
    let msg: AudioData = serde_json::from_str(r#"{"type": "audio_data"}"#).unwrap();
    assert_eq!(msg.volume, 0.0);
    assert!(msg.spectrum.is_empty());
}

#[test]
fn test_audio_data_accepts_integer_levels() {
    // Frontends send integer byte values; fractional levels work too
    let msg: AudioData =
        serde_json::from_str(r#"{"volume": 128, "spectrum": [0, 64.5, 255]}"#).unwrap();
    assert_eq!(msg.volume, 128.0);
    assert_eq!(msg.spectrum, vec![0.0, 64.5, 255.0]);
}

#[test]
fn test_unknown_fields_are_ignored() {
    let json = r#"{"type": "user_message", "text": "hi", "extra": {"nested": true}}"#;
    let msg: UserMessage = serde_json::from_str(json).unwrap();
    assert_eq!(msg.text, "hi");
}
