use listviz::{Engine, Operation, Report};

/// An engine operation together with its arguments.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Command {
    InsertAtHead(i64),
    InsertAtTail(i64),
    InsertAtPosition { value: i64, pos: i64 },
    DeleteFromHead,
    DeleteFromTail,
    DeleteAtPosition(i64),
    Reverse,
    Search(i64),
}

impl Command {
    pub fn op(&self) -> Operation {
        match self {
            Self::InsertAtHead(_) => Operation::InsertAtHead,
            Self::InsertAtTail(_) => Operation::InsertAtTail,
            Self::InsertAtPosition { .. } => Operation::InsertAtPosition,
            Self::DeleteFromHead => Operation::DeleteFromHead,
            Self::DeleteFromTail => Operation::DeleteFromTail,
            Self::DeleteAtPosition(_) => Operation::DeleteAtPosition,
            Self::Reverse => Operation::Reverse,
            Self::Search(_) => Operation::Search,
        }
    }

    pub fn apply(self, engine: &mut Engine) -> Report {
        match self {
            Self::InsertAtHead(value) => engine.insert_at_head(value),
            Self::InsertAtTail(value) => engine.insert_at_tail(value),
            Self::InsertAtPosition { value, pos } => engine.insert_at_position(value, pos),
            Self::DeleteFromHead => engine.delete_from_head(),
            Self::DeleteFromTail => engine.delete_from_tail(),
            Self::DeleteAtPosition(pos) => engine.delete_at_position(pos),
            Self::Reverse => engine.reverse(),
            Self::Search(value) => engine.search(value),
        }
    }

    /// Builds a command from the raw text of the value and position fields.
    ///
    /// Returns `None` when an argument the operation needs is blank or not a number; the click
    /// is then ignored and no message is shown. Arguments the operation does not need are not
    /// looked at.
    pub fn from_input(op: Operation, value: &str, position: &str) -> Option<Self> {
        let read_value = || parse_number(value);
        let read_pos = || parse_number(position);
        Some(match op {
            Operation::InsertAtHead => Self::InsertAtHead(read_value()?),
            Operation::InsertAtTail => Self::InsertAtTail(read_value()?),
            Operation::InsertAtPosition => Self::InsertAtPosition {
                value: read_value()?,
                pos: read_pos()?,
            },
            Operation::DeleteFromHead => Self::DeleteFromHead,
            Operation::DeleteFromTail => Self::DeleteFromTail,
            Operation::DeleteAtPosition => Self::DeleteAtPosition(read_pos()?),
            Operation::Reverse => Self::Reverse,
            Operation::Search => Self::Search(read_value()?),
        })
    }
}

/// Parses the leading integer of `text`, the way numeric text fields are usually read.
///
/// Leading whitespace and one sign are accepted; parsing stops at the first non-digit
/// (`"12.5"` reads as 12). Returns `None` if no digit is found or the value overflows `i64`.
pub fn parse_number(text: &str) -> Option<i64> {
    let text = text.trim_start();
    let digits_from = usize::from(text.starts_with(['+', '-']));
    let end = text[digits_from..]
        .find(|c: char| !c.is_ascii_digit())
        .map_or(text.len(), |i| digits_from + i);
    if end == digits_from {
        return None;
    }
    text[..end].parse().ok()
}
