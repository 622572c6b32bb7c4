//! Type-string facts
//!
//! Pure value types derived from generic type strings such as
//! `Stream<T, Tick<Process<'a, Leader>>, Unbounded, TotalOrder>`.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Whether a collection is finite within its scope
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Boundedness {
    Bounded,
    Unbounded,
}

impl Boundedness {
    pub fn as_str(&self) -> &'static str {
        match self {
            Boundedness::Bounded => "Bounded",
            Boundedness::Unbounded => "Unbounded",
        }
    }
}

impl fmt::Display for Boundedness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ordering guarantee of a stream
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StreamOrder {
    TotalOrder,
    NoOrder,
}

impl StreamOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            StreamOrder::TotalOrder => "TotalOrder",
            StreamOrder::NoOrder => "NoOrder",
        }
    }
}

impl fmt::Display for StreamOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Live collection type constructors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CollectionKind {
    Stream,
    KeyedStream,
    Singleton,
    Optional,
    KeyedSingleton,
}

impl CollectionKind {
    pub const ALL: [CollectionKind; 5] = [
        CollectionKind::Stream,
        CollectionKind::KeyedStream,
        CollectionKind::Singleton,
        CollectionKind::Optional,
        CollectionKind::KeyedSingleton,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CollectionKind::Stream => "Stream",
            CollectionKind::KeyedStream => "KeyedStream",
            CollectionKind::Singleton => "Singleton",
            CollectionKind::Optional => "Optional",
            CollectionKind::KeyedSingleton => "KeyedSingleton",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.as_str() == name)
    }

    pub fn is_keyed(&self) -> bool {
        matches!(
            self,
            CollectionKind::KeyedStream | CollectionKind::KeyedSingleton
        )
    }

    /// Index of the location parameter: `Stream<T, L, ..>` vs `KeyedStream<K, V, L, ..>`
    pub fn location_param_index(&self) -> usize {
        if self.is_keyed() {
            2
        } else {
            1
        }
    }
}

impl fmt::Display for CollectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Direct location constructors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LocationConstructor {
    Process,
    Cluster,
    External,
}

impl LocationConstructor {
    pub fn as_str(&self) -> &'static str {
        match self {
            LocationConstructor::Process => "Process",
            LocationConstructor::Cluster => "Cluster",
            LocationConstructor::External => "External",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "Process" => Some(LocationConstructor::Process),
            "Cluster" => Some(LocationConstructor::Cluster),
            "External" => Some(LocationConstructor::External),
            _ => None,
        }
    }
}

/// Shape facts about a collection-typed pipeline stage
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollectionSemantics {
    pub kind: CollectionKind,
    pub boundedness: Option<Boundedness>,
    pub ordering: Option<StreamOrder>,
}

impl CollectionSemantics {
    pub fn is_keyed(&self) -> bool {
        self.kind.is_keyed()
    }
}

/// Human-readable location grouping key plus tick nesting depth
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LocationLabel {
    pub base: String,
    pub tick_depth: usize,
}

impl LocationLabel {
    pub fn new(base: impl Into<String>, tick_depth: usize) -> Self {
        Self {
            base: base.into(),
            tick_depth,
        }
    }
}
