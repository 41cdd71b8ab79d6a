//! Adapter utilities for the `listviz` crate.
//!
//! The `listviz` crate is UI-agnostic and only exposes set/clear primitives for its transient
//! markers. This crate provides small, framework-neutral helpers commonly needed by views:
//!
//! - Dwell timers that clear status messages and markers on a caller-driven clock
//! - Parsing of numeric text fields into engine commands
//! - A mutex-guarded handle for sharing one list between threads (`std` only)
//!
//! This crate is intentionally framework-agnostic (no egui/web bindings).
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod command;
mod controller;
mod dwell;
#[cfg(feature = "std")]
mod shared;

#[cfg(test)]
mod tests;

pub use command::{Command, parse_number};
pub use controller::Controller;
pub use dwell::Dwell;
#[cfg(feature = "std")]
pub use shared::SharedEngine;
