use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

/// One of the eight operations the engine exposes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Operation {
    InsertAtHead,
    InsertAtTail,
    InsertAtPosition,
    DeleteFromHead,
    DeleteFromTail,
    DeleteAtPosition,
    Reverse,
    Search,
}

impl Operation {
    /// All operations, in the order a control panel usually lists them.
    pub const ALL: [Operation; 8] = [
        Self::InsertAtHead,
        Self::InsertAtTail,
        Self::InsertAtPosition,
        Self::DeleteFromHead,
        Self::DeleteFromTail,
        Self::DeleteAtPosition,
        Self::Reverse,
        Self::Search,
    ];

    /// Short caption suitable for a button.
    pub fn label(self) -> &'static str {
        match self {
            Self::InsertAtHead => "Add at Head",
            Self::InsertAtTail => "Add at Tail",
            Self::InsertAtPosition => "Add at Position",
            Self::DeleteFromHead => "Delete from Head",
            Self::DeleteFromTail => "Delete from Tail",
            Self::DeleteAtPosition => "Delete at Position",
            Self::Reverse => "Reverse List",
            Self::Search => "Search Value",
        }
    }

    /// Time complexity of the operation on a singly linked list (with a tail pointer).
    pub fn complexity(self) -> &'static str {
        match self {
            Self::InsertAtHead | Self::DeleteFromHead => "O(1)",
            Self::InsertAtTail => "O(1) with tail pointer",
            Self::InsertAtPosition
            | Self::DeleteFromTail
            | Self::DeleteAtPosition
            | Self::Reverse
            | Self::Search => "O(n)",
        }
    }

    pub fn is_mutation(self) -> bool {
        !matches!(self, Self::Search)
    }

    /// Whether the operation takes a value argument.
    pub fn needs_value(self) -> bool {
        matches!(
            self,
            Self::InsertAtHead | Self::InsertAtTail | Self::InsertAtPosition | Self::Search
        )
    }

    /// Whether the operation takes a position argument.
    pub fn needs_position(self) -> bool {
        matches!(self, Self::InsertAtPosition | Self::DeleteAtPosition)
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// How an operation ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Outcome {
    Ok,
    /// The position was outside the operation's valid range. Nothing changed.
    InvalidPosition,
    /// Delete from an empty list. Nothing to do, and not an error.
    Noop,
    /// The searched value is not in the list.
    NotFound,
}

impl Outcome {
    pub fn is_ok(self) -> bool {
        matches!(self, Self::Ok)
    }

    /// `Ok` and `Noop` map to `Ok(())`; the rest to the matching [`OpError`].
    pub fn into_result(self) -> Result<(), OpError> {
        match self {
            Self::Ok | Self::Noop => Ok(()),
            Self::InvalidPosition => Err(OpError::InvalidPosition),
            Self::NotFound => Err(OpError::NotFound),
        }
    }
}

/// The non-fatal failures an operation can report.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OpError {
    InvalidPosition,
    NotFound,
}

impl fmt::Display for OpError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidPosition => f.write_str("invalid position"),
            Self::NotFound => f.write_str("value not found"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for OpError {}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MessageKind {
    Info,
    Error,
}

/// A short, human-readable report of an operation's outcome.
///
/// `dwell_ms` is how long a view should keep the message on screen. The engine never clears
/// messages itself.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatusMessage {
    pub kind: MessageKind,
    pub text: String,
    pub dwell_ms: u64,
}

impl StatusMessage {
    pub fn is_error(&self) -> bool {
        self.kind == MessageKind::Error
    }
}

impl fmt::Display for StatusMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// The result of a single engine operation.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Report {
    pub op: Operation,
    pub outcome: Outcome,
    /// The affected index: where a value was inserted/removed, or where a search matched.
    pub index: Option<usize>,
    /// Whether the sequence itself changed. `false` means "unchanged".
    pub changed: bool,
    /// `None` only for [`Outcome::Noop`].
    pub message: Option<StatusMessage>,
}

impl Report {
    /// The affected index on success.
    pub fn result(&self) -> Result<Option<usize>, OpError> {
        self.outcome.into_result().map(|()| self.index)
    }
}

/// Per-node render flags, derived from the node's index and the engine's markers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NodeView {
    pub index: usize,
    pub value: i64,
    pub is_head: bool,
    pub is_tail: bool,
    pub is_highlighted: bool,
    pub is_new: bool,
}

impl NodeView {
    /// Whether an arrow to a following node should be drawn.
    pub fn has_next(&self) -> bool {
        !self.is_tail
    }
}

/// An owned copy of the engine's observable state.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Snapshot {
    pub values: Vec<i64>,
    pub highlight_index: Option<usize>,
    pub new_index: Option<usize>,
}
