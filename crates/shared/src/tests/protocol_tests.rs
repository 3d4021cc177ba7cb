use super::*;

#[test]
fn actor_state_line_matches_console_text() {
    let event = LogEvent::ActorState {
        style: ConstructionStyle::Class,
        state: Some(ActorState::Woofing),
    };
    assert_eq!(event.line(), "woofing");

    let unset = LogEvent::ActorState {
        style: ConstructionStyle::Literal,
        state: None,
    };
    assert_eq!(unset.line(), "null");
}

#[test]
fn field_and_render_lines_use_raw_values() {
    let field = LogEvent::Field {
        name: "user".into(),
        value: Some("Douglas Pires".into()),
    };
    assert_eq!(field.line(), "Douglas Pires");

    let rendered = LogEvent::Rendered {
        target: "reduce_fruits".into(),
        text: String::new(),
    };
    assert_eq!(rendered.line(), "");
}

#[test]
fn json_line_is_tagged_with_snake_case_type() {
    let event = LogEvent::ActorState {
        style: ConstructionStyle::Prototype,
        state: Some(ActorState::Walking),
    };
    let json: serde_json::Value =
        serde_json::from_str(&event.to_json_line().expect("serialize")).expect("parse");
    assert_eq!(json["type"], "actor_state");
    assert_eq!(json["payload"]["style"], "prototype");
    assert_eq!(json["payload"]["state"], "walking");
}

#[test]
fn record_uses_type_as_wire_field() {
    let record: crate::domain::Record =
        serde_json::from_str(r#"{"name":"Banana","type":"fruit"}"#).expect("record");
    assert_eq!(record.kind, "fruit");

    let missing = serde_json::from_str::<crate::domain::Record>(r#"{"name":"Banana"}"#);
    assert!(missing.is_err());
}
