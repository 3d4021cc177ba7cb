use shared::{
    domain::{fixed_food, ConstructionStyle, Record, RoutineKind},
    error::Result,
    protocol::LogEvent,
};
use tracing::info;

use crate::{
    actor::{Dog, Fluent},
    dedup::{render_kinds, unique_kinds},
    display::DisplaySurface,
    sequencer::{RequestField, Requests},
    sink::LogSink,
};

pub const REDUCE_FRUITS_TARGET: &str = "reduce_fruits";

/// Renders the unique kinds of the fixed food list to [`REDUCE_FRUITS_TARGET`].
pub fn reduce_fruits<D, S>(display: D, sink: S) -> Result<Vec<String>>
where
    D: DisplaySurface,
    S: LogSink,
{
    reduce_records(&fixed_food(), display, sink)
}

pub fn reduce_records<D, S>(records: &[Record], display: D, sink: S) -> Result<Vec<String>>
where
    D: DisplaySurface,
    S: LogSink,
{
    let kinds = unique_kinds(records);
    let text = render_kinds(&kinds);
    display.render(REDUCE_FRUITS_TARGET, &text)?;
    sink.emit(LogEvent::Rendered {
        target: REDUCE_FRUITS_TARGET.to_string(),
        text,
    });
    Ok(kinds)
}

fn walk_the_dog<S: LogSink>(style: ConstructionStyle, sink: S) -> Dog<S> {
    let mut dog = Dog::new(style, sink);
    dog.bark().eat().walk();
    dog
}

pub fn create_doggo<S: LogSink>(sink: S) -> Dog<S> {
    walk_the_dog(ConstructionStyle::Literal, sink)
}

pub fn class_syntax<S: LogSink>(sink: S) -> Dog<S> {
    walk_the_dog(ConstructionStyle::Class, sink)
}

pub fn create_doggo_with_prototype<S: LogSink>(sink: S) -> Dog<S> {
    walk_the_dog(ConstructionStyle::Prototype, sink)
}

/// Fetches the user, then registers the action, then reads both back.
pub async fn user_action<S: LogSink>(sink: S) -> Requests<S> {
    let mut requests = Requests::new(sink);
    requests.get_user().await;
    requests.register_action().await;
    requests.log(RequestField::User);
    requests.log(RequestField::Action);
    requests
}

/// Runs one routine against the given display and sink.
pub async fn run_routine<D, S>(kind: RoutineKind, display: D, sink: S) -> Result<()>
where
    D: DisplaySurface,
    S: LogSink,
{
    info!(routine = %kind, "running");
    if let Some(style) = kind.construction_style() {
        walk_the_dog(style, sink);
        return Ok(());
    }
    match kind {
        RoutineKind::ReduceFruits => {
            reduce_fruits(display, sink)?;
        }
        RoutineKind::UserAction => {
            user_action(sink).await;
        }
        RoutineKind::CreateDoggo
        | RoutineKind::ClassSyntax
        | RoutineKind::CreateDoggoWithPrototype => {}
    }
    Ok(())
}

#[cfg(test)]
#[path = "tests/routines_tests.rs"]
mod tests;
