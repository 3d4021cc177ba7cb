use super::*;
use shared::domain::{ActorState, ConstructionStyle};

fn state_event(state: ActorState) -> LogEvent {
    LogEvent::ActorState {
        style: ConstructionStyle::Literal,
        state: Some(state),
    }
}

#[test]
fn memory_sink_clones_share_one_buffer() {
    let sink = MemorySink::new();
    let clone = sink.clone();
    clone.emit(state_event(ActorState::Eating));
    sink.emit(state_event(ActorState::Walking));

    assert_eq!(sink.lines(), vec!["eating", "walking"]);
    assert_eq!(clone.len(), 2);
}

#[test]
fn tee_forwards_to_both_sides_in_order() {
    let left = MemorySink::new();
    let right = MemorySink::new();
    let tee = Tee(left.clone(), right.clone());

    tee.emit(state_event(ActorState::Woofing));

    assert_eq!(left.events(), right.events());
    assert_eq!(left.lines(), vec!["woofing"]);
}

#[test]
fn references_and_arcs_are_sinks_too() {
    let sink = MemorySink::new();
    let by_ref: &dyn LogSink = &sink;
    by_ref.emit(state_event(ActorState::Woofing));
    Arc::new(sink.clone()).emit(state_event(ActorState::Eating));

    assert_eq!(sink.lines(), vec!["woofing", "eating"]);
}

#[test]
fn tracing_sink_accepts_every_event_kind() {
    let sink = TracingSink;
    sink.emit(state_event(ActorState::Walking));
    sink.emit(LogEvent::Field {
        name: "user".into(),
        value: None,
    });
    sink.emit(LogEvent::Rendered {
        target: "reduce_fruits".into(),
        text: "fruit,candy".into(),
    });
}
