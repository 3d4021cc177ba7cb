use shared::{
    domain::{ActorState, ConstructionStyle},
    protocol::LogEvent,
};

use crate::sink::{LogSink, TracingSink};

/// Fluent actions on a single state field. Every action replaces the state,
/// logs it, and hands back the receiver so calls can be chained.
pub trait Fluent {
    fn state(&self) -> Option<ActorState>;

    fn set_state(&mut self, state: ActorState);

    /// Reports the current state. Never changes it.
    fn log(&self);

    fn bark(&mut self) -> &mut Self {
        self.set_state(ActorState::Woofing);
        self.log();
        self
    }

    fn walk(&mut self) -> &mut Self {
        self.set_state(ActorState::Walking);
        self.log();
        self
    }

    fn eat(&mut self) -> &mut Self {
        self.set_state(ActorState::Eating);
        self.log();
        self
    }
}

#[derive(Debug)]
pub struct Dog<S = TracingSink> {
    is: Option<ActorState>,
    style: ConstructionStyle,
    sink: S,
}

impl<S: LogSink> Dog<S> {
    pub fn new(style: ConstructionStyle, sink: S) -> Self {
        Self {
            is: None,
            style,
            sink,
        }
    }

    pub fn style(&self) -> ConstructionStyle {
        self.style
    }
}

impl<S: LogSink> Fluent for Dog<S> {
    fn state(&self) -> Option<ActorState> {
        self.is
    }

    fn set_state(&mut self, state: ActorState) {
        self.is = Some(state);
    }

    fn log(&self) {
        self.sink.emit(LogEvent::ActorState {
            style: self.style,
            state: self.is,
        });
    }
}

#[cfg(test)]
#[path = "tests/actor_tests.rs"]
mod tests;
