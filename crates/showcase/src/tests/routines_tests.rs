use super::*;
use crate::{display::MemoryDisplay, sink::MemorySink};
use shared::domain::ActorState;

#[test]
fn reduce_fruits_renders_fruit_then_candy() {
    let display = MemoryDisplay::new();
    let sink = MemorySink::new();

    let kinds = reduce_fruits(&display, &sink).expect("reduce");

    assert_eq!(kinds, vec!["fruit", "candy"]);
    assert_eq!(
        display.get(REDUCE_FRUITS_TARGET).as_deref(),
        Some("fruit,candy")
    );
    assert_eq!(sink.lines(), vec!["fruit,candy"]);
}

#[test]
fn reduce_over_no_records_renders_empty_text() {
    let display = MemoryDisplay::new();
    display.render(REDUCE_FRUITS_TARGET, "previous").expect("seed");

    let kinds = reduce_records(&[], &display, MemorySink::new()).expect("reduce");

    assert!(kinds.is_empty());
    assert_eq!(display.get(REDUCE_FRUITS_TARGET).as_deref(), Some(""));
}

#[test]
fn chaining_routines_all_end_walking() {
    let sink = MemorySink::new();
    let dogs = [
        create_doggo(&sink),
        class_syntax(&sink),
        create_doggo_with_prototype(&sink),
    ];

    for dog in &dogs {
        assert_eq!(dog.state(), Some(ActorState::Walking));
    }
    let styles: Vec<_> = dogs.iter().map(|dog| dog.style()).collect();
    assert_eq!(styles, ConstructionStyle::ALL.to_vec());
    assert_eq!(sink.len(), 9);
}

#[tokio::test(start_paused = true)]
async fn user_action_reads_both_fields_after_completion() {
    let sink = MemorySink::new();

    let requests = user_action(sink.clone()).await;

    assert_eq!(requests.user(), Some("Douglas Pires"));
    assert_eq!(requests.action(), Some("programming stuff"));
    assert_eq!(
        sink.lines(),
        vec![
            "Douglas Pires",
            "programming stuff",
            "Douglas Pires",
            "programming stuff",
        ]
    );
}

#[tokio::test(start_paused = true)]
async fn run_routine_dispatches_every_kind() {
    let display = MemoryDisplay::new();
    let sink = MemorySink::new();

    for kind in RoutineKind::ALL {
        run_routine(kind, &display, &sink).await.expect("routine");
    }

    assert_eq!(
        display.get(REDUCE_FRUITS_TARGET).as_deref(),
        Some("fruit,candy")
    );
    // one render, three dogs with three states each, four request lines
    assert_eq!(sink.len(), 1 + 9 + 4);
}

#[tokio::test]
async fn dog_routines_use_the_style_of_their_kind() {
    for kind in RoutineKind::ALL {
        let Some(style) = kind.construction_style() else {
            continue;
        };
        let sink = MemorySink::new();
        run_routine(kind, MemoryDisplay::new(), &sink)
            .await
            .expect("routine");

        let events = sink.events();
        assert_eq!(events.len(), 3, "kind {kind}");
        assert!(events.iter().all(|event| matches!(
            event,
            LogEvent::ActorState { style: logged, .. } if *logged == style
        )));
    }
}

#[test]
fn named_dog_routines_match_kind_styles() {
    let sink = MemorySink::new();
    let pairs = [
        (RoutineKind::CreateDoggo, create_doggo(&sink).style()),
        (RoutineKind::ClassSyntax, class_syntax(&sink).style()),
        (
            RoutineKind::CreateDoggoWithPrototype,
            create_doggo_with_prototype(&sink).style(),
        ),
    ];
    for (kind, style) in pairs {
        assert_eq!(kind.construction_style(), Some(style));
    }
    assert_eq!(RoutineKind::ReduceFruits.construction_style(), None);
    assert_eq!(RoutineKind::UserAction.construction_style(), None);
}
