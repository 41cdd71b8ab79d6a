//! A headless singly-linked-list engine for algorithm visualizers.
//!
//! For adapter-level utilities (dwell timers, text input parsing), see the `listviz-adapter`
//! crate.
//!
//! The engine owns an ordered sequence of integers and implements the classic list operations
//! with strict positional semantics: insert at head/tail/position, delete at head/tail/position,
//! search, and reverse. Each operation is atomic and returns a [`Report`] with an [`Outcome`] and
//! a human-readable [`StatusMessage`].
//!
//! It is UI-agnostic. A view layer is expected to:
//! - call operations in response to user actions
//! - render nodes from [`Engine::for_each_node`] (head/tail/highlight/new flags)
//! - show status messages and clear markers after its own dwell windows
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod engine;
mod options;
mod types;


pub use engine::Engine;
pub use options::{EmptyDeletePolicy, EngineOptions, OnChangeCallback};
pub use types::{
    MessageKind, NodeView, OpError, Operation, Outcome, Report, Snapshot, StatusMessage,
};
