//! Small self-contained routines: a stable dedup over a record list, a
//! fluent stateful actor, and a two-step timed request sequence.
//!
//! Each routine owns everything it creates. Output goes to a
//! [`display::DisplaySurface`] and a [`sink::LogSink`], both of which the
//! caller picks.

pub mod actor;
pub mod dedup;
pub mod display;
pub mod routines;
pub mod sequencer;
pub mod sink;

pub use actor::{Dog, Fluent};
pub use display::{ConsoleDisplay, ConsoleStream, DisplaySurface, FileDisplay, MemoryDisplay};
pub use routines::{
    class_syntax, create_doggo, create_doggo_with_prototype, reduce_fruits, reduce_records,
    run_routine, user_action, REDUCE_FRUITS_TARGET,
};
pub use sequencer::{RequestField, Requests, Resolver, TimerResolver};
pub use sink::{LogSink, MemorySink, Tee, TracingSink};
