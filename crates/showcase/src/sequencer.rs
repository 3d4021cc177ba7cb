use std::{fmt, time::Duration};

use async_trait::async_trait;
use shared::protocol::LogEvent;

use crate::sink::{LogSink, TracingSink};

/// How long each simulated request takes.
pub const RESOLVE_DELAY: Duration = Duration::from_millis(1000);
pub const RESOLVED_USER: &str = "Douglas Pires";
pub const RESOLVED_ACTION: &str = "programming stuff";

/// Produces a request's value once it is ready.
#[async_trait]
pub trait Resolver: Send + Sync {
    async fn resolve(&self, value: &'static str) -> String;
}

/// Resolves after a fixed sleep. Always succeeds.
#[derive(Debug, Clone, Copy)]
pub struct TimerResolver {
    delay: Duration,
}

impl Default for TimerResolver {
    fn default() -> Self {
        Self {
            delay: RESOLVE_DELAY,
        }
    }
}

impl TimerResolver {
    pub fn delay(&self) -> Duration {
        self.delay
    }
}

#[async_trait]
impl Resolver for TimerResolver {
    async fn resolve(&self, value: &'static str) -> String {
        tokio::time::sleep(self.delay).await;
        value.to_string()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestField {
    User,
    Action,
}

impl RequestField {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Action => "action",
        }
    }
}

impl fmt::Display for RequestField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug)]
pub struct Requests<S = TracingSink, R = TimerResolver> {
    user: Option<String>,
    action: Option<String>,
    sink: S,
    resolver: R,
}

impl<S: LogSink> Requests<S, TimerResolver> {
    pub fn new(sink: S) -> Self {
        Self::with_resolver(sink, TimerResolver::default())
    }
}

impl<S: LogSink, R: Resolver> Requests<S, R> {
    pub fn with_resolver(sink: S, resolver: R) -> Self {
        Self {
            user: None,
            action: None,
            sink,
            resolver,
        }
    }

    pub fn user(&self) -> Option<&str> {
        self.user.as_deref()
    }

    pub fn action(&self) -> Option<&str> {
        self.action.as_deref()
    }

    pub fn field(&self, field: RequestField) -> Option<&str> {
        match field {
            RequestField::User => self.user(),
            RequestField::Action => self.action(),
        }
    }

    pub fn log(&self, field: RequestField) {
        self.sink.emit(LogEvent::Field {
            name: field.as_str().to_string(),
            value: self.field(field).map(str::to_string),
        });
    }

    pub async fn get_user(&mut self) -> &mut Self {
        let user = self.resolver.resolve(RESOLVED_USER).await;
        self.user = Some(user);
        self.log(RequestField::User);
        self
    }

    pub async fn register_action(&mut self) -> &mut Self {
        let action = self.resolver.resolve(RESOLVED_ACTION).await;
        self.action = Some(action);
        self.log(RequestField::Action);
        self
    }
}

#[cfg(test)]
#[path = "tests/sequencer_tests.rs"]
mod tests;
