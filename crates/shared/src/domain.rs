use std::fmt;

use serde::{Deserialize, Serialize};

/// A named item tagged with a category label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
}

impl Record {
    pub fn new(name: impl Into<String>, kind: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: kind.into(),
        }
    }
}

/// The fixed food list the dedup routine works on.
pub fn fixed_food() -> Vec<Record> {
    vec![
        Record::new("Banana", "fruit"),
        Record::new("Apple", "fruit"),
        Record::new("Chocolate", "candy"),
        Record::new("Orange", "fruit"),
    ]
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActorState {
    Woofing,
    Walking,
    Eating,
}

impl ActorState {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Woofing => "woofing",
            Self::Walking => "walking",
            Self::Eating => "eating",
        }
    }
}

impl fmt::Display for ActorState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How a fluent actor was put together. Purely a label: every style
/// shares the same behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConstructionStyle {
    Literal,
    Class,
    Prototype,
}

impl ConstructionStyle {
    pub const ALL: [Self; 3] = [Self::Literal, Self::Class, Self::Prototype];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Literal => "literal",
            Self::Class => "class",
            Self::Prototype => "prototype",
        }
    }
}

impl fmt::Display for ConstructionStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoutineKind {
    ReduceFruits,
    CreateDoggo,
    ClassSyntax,
    CreateDoggoWithPrototype,
    UserAction,
}

impl RoutineKind {
    pub const ALL: [Self; 5] = [
        Self::ReduceFruits,
        Self::CreateDoggo,
        Self::ClassSyntax,
        Self::CreateDoggoWithPrototype,
        Self::UserAction,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::ReduceFruits => "reduce_fruits",
            Self::CreateDoggo => "create_doggo",
            Self::ClassSyntax => "class_syntax",
            Self::CreateDoggoWithPrototype => "create_doggo_with_prototype",
            Self::UserAction => "user_action",
        }
    }

    /// Style of the actor a chaining routine builds, if any.
    pub fn construction_style(self) -> Option<ConstructionStyle> {
        match self {
            Self::CreateDoggo => Some(ConstructionStyle::Literal),
            Self::ClassSyntax => Some(ConstructionStyle::Class),
            Self::CreateDoggoWithPrototype => Some(ConstructionStyle::Prototype),
            Self::ReduceFruits | Self::UserAction => None,
        }
    }
}

impl fmt::Display for RoutineKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
