use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use crate::{
    EmptyDeletePolicy, EngineOptions, MessageKind, NodeView, Operation, Outcome, Report, Snapshot,
    StatusMessage,
};

/// A headless singly-linked-list engine.
///
/// This type is UI-agnostic:
/// - It owns the ordered values and the two transient markers (`highlight_index`, `new_index`).
/// - Every operation is synchronous and atomic, and returns a [`Report`].
/// - Markers are only set by operations or explicit setters; clearing them after a dwell window
///   is up to the caller (see the `listviz-adapter` crate).
#[derive(Clone, Debug, Default)]
pub struct Engine {
    options: EngineOptions,
    values: Vec<i64>,
    highlight_index: Option<usize>,
    new_index: Option<usize>,

    notify_depth: usize,
    notify_pending: bool,
    last_report: Option<Report>,
}

impl Engine {
    /// Creates an empty engine with default options.
    pub fn new() -> Self {
        Self::with_options(EngineOptions::new())
    }

    pub fn with_options(options: EngineOptions) -> Self {
        ldebug!(
            mark_positional_inserts = options.mark_positional_inserts,
            "Engine::new"
        );
        Self {
            options,
            values: Vec::new(),
            highlight_index: None,
            new_index: None,
            notify_depth: 0,
            notify_pending: false,
            last_report: None,
        }
    }

    /// Creates an engine pre-filled with `values` (head first). No markers are set.
    pub fn from_values(values: impl IntoIterator<Item = i64>, options: EngineOptions) -> Self {
        let mut engine = Self::with_options(options);
        engine.values.extend(values);
        engine
    }

    pub fn options(&self) -> &EngineOptions {
        &self.options
    }

    pub fn set_options(&mut self, options: EngineOptions) {
        self.options = options;
        ltrace!(
            mark_positional_inserts = self.options.mark_positional_inserts,
            "Engine::set_options"
        );
    }

    /// Clones the current options, applies `f`, then delegates to `set_options`.
    pub fn update_options(&mut self, f: impl FnOnce(&mut EngineOptions)) {
        let mut next = self.options.clone();
        f(&mut next);
        self.set_options(next);
    }

    pub fn set_on_change(
        &mut self,
        on_change: Option<impl Fn(&Engine, Option<&Report>) + Send + Sync + 'static>,
    ) {
        self.options.on_change = on_change.map(|f| alloc::sync::Arc::new(f) as _);
    }

    fn notify_now(&self, report: Option<&Report>) {
        if let Some(cb) = &self.options.on_change {
            cb(self, report);
        }
    }

    fn notify(&mut self, report: Option<&Report>) {
        if self.options.on_change.is_none() {
            return;
        }
        if self.notify_depth > 0 {
            if let Some(report) = report {
                self.last_report = Some(report.clone());
            }
            self.notify_pending = true;
            return;
        }
        self.notify_now(report);
    }

    /// Batches multiple operations into a single `on_change` notification.
    ///
    /// The callback then receives the last report produced inside the batch, or `None` if only
    /// marker setters ran.
    pub fn batch_update(&mut self, f: impl FnOnce(&mut Self)) {
        if self.notify_depth == 0 {
            self.last_report = None;
        }
        self.notify_depth = self.notify_depth.saturating_add(1);

        f(self);

        debug_assert!(self.notify_depth > 0, "notify_depth underflow");
        self.notify_depth = self.notify_depth.saturating_sub(1);

        if self.notify_depth == 0 && core::mem::take(&mut self.notify_pending) {
            let report = self.last_report.take();
            self.notify_now(report.as_ref());
        }
    }

    pub fn values(&self) -> &[i64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<i64> {
        self.values.get(index).copied()
    }

    pub fn head(&self) -> Option<i64> {
        self.values.first().copied()
    }

    pub fn tail(&self) -> Option<i64> {
        self.values.last().copied()
    }

    pub fn highlight_index(&self) -> Option<usize> {
        self.highlight_index
    }

    pub fn new_index(&self) -> Option<usize> {
        self.new_index
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            values: self.values.clone(),
            highlight_index: self.highlight_index,
            new_index: self.new_index,
        }
    }

    /// Sets the highlight marker. Returns `false` (and changes nothing) if `index` is out of range.
    pub fn set_highlight_index(&mut self, index: usize) -> bool {
        if index >= self.values.len() {
            lwarn!(index, len = self.values.len(), "set_highlight_index: out of range");
            return false;
        }
        if self.highlight_index != Some(index) {
            self.highlight_index = Some(index);
            self.notify(None);
        }
        true
    }

    /// Returns `true` if a marker was set.
    pub fn clear_highlight(&mut self) -> bool {
        let cleared = self.highlight_index.take().is_some();
        if cleared {
            self.notify(None);
        }
        cleared
    }

    /// Sets the new-node marker. Returns `false` (and changes nothing) if `index` is out of range.
    pub fn set_new_index(&mut self, index: usize) -> bool {
        if index >= self.values.len() {
            lwarn!(index, len = self.values.len(), "set_new_index: out of range");
            return false;
        }
        if self.new_index != Some(index) {
            self.new_index = Some(index);
            self.notify(None);
        }
        true
    }

    /// Returns `true` if a marker was set.
    pub fn clear_new_index(&mut self) -> bool {
        let cleared = self.new_index.take().is_some();
        if cleared {
            self.notify(None);
        }
        cleared
    }

    pub fn node(&self, index: usize) -> Option<NodeView> {
        let value = self.get(index)?;
        Some(NodeView {
            index,
            value,
            is_head: index == 0,
            is_tail: index + 1 == self.values.len(),
            is_highlighted: self.highlight_index == Some(index),
            is_new: self.new_index == Some(index),
        })
    }

    /// Calls `f` for every node, head first.
    pub fn for_each_node(&self, mut f: impl FnMut(NodeView)) {
        for index in 0..self.values.len() {
            if let Some(node) = self.node(index) {
                f(node);
            }
        }
    }

    pub fn insert_at_head(&mut self, value: i64) -> Report {
        self.run(|e| {
            e.values.insert(0, value);
            e.new_index = Some(0);
            e.done(Operation::InsertAtHead, Some(0), "Node added at head!".into())
        })
    }

    pub fn insert_at_tail(&mut self, value: i64) -> Report {
        self.run(|e| {
            e.values.push(value);
            let index = e.values.len() - 1;
            e.new_index = Some(index);
            e.done(Operation::InsertAtTail, Some(index), "Node added at tail!".into())
        })
    }

    /// Inserts `value` so that it becomes element `pos`. Valid for `0 <= pos <= len`.
    pub fn insert_at_position(&mut self, value: i64, pos: i64) -> Report {
        let op = Operation::InsertAtPosition;
        self.run(|e| {
            let Some(index) = e.slot(pos, e.values.len() + 1) else {
                return e.invalid_position(op);
            };
            e.values.insert(index, value);
            if e.options.mark_positional_inserts {
                e.new_index = Some(index);
            }
            e.done(op, Some(index), format!("Node added at position {index}!"))
        })
    }

    pub fn delete_from_head(&mut self) -> Report {
        let op = Operation::DeleteFromHead;
        self.run(|e| {
            if e.values.is_empty() {
                return Self::noop(op);
            }
            e.values.remove(0);
            e.done(op, Some(0), "Node deleted from head!".into())
        })
    }

    pub fn delete_from_tail(&mut self) -> Report {
        let op = Operation::DeleteFromTail;
        self.run(|e| {
            if e.values.pop().is_none() {
                return Self::noop(op);
            }
            let index = e.values.len();
            e.done(op, Some(index), "Node deleted from tail!".into())
        })
    }

    /// Removes element `pos`. Valid for `0 <= pos < len`.
    pub fn delete_at_position(&mut self, pos: i64) -> Report {
        let op = Operation::DeleteAtPosition;
        self.run(|e| {
            if e.values.is_empty() && e.options.empty_positional_delete == EmptyDeletePolicy::Noop
            {
                return Self::noop(op);
            }
            let Some(index) = e.slot(pos, e.values.len()) else {
                return e.invalid_position(op);
            };
            e.values.remove(index);
            e.done(op, Some(index), format!("Node deleted from position {index}!"))
        })
    }

    pub fn reverse(&mut self) -> Report {
        let op = Operation::Reverse;
        self.run(|e| {
            e.values.reverse();
            let mut report = e.done(op, None, "List reversed!".into());
            report.changed = e.values.len() > 1;
            report
        })
    }

    /// Finds the first index holding `value`, scanning from the head.
    pub fn search(&mut self, value: i64) -> Report {
        let op = Operation::Search;
        self.run(|e| match e.values.iter().position(|&v| v == value) {
            Some(index) => {
                e.highlight_index = Some(index);
                Report {
                    op,
                    outcome: Outcome::Ok,
                    index: Some(index),
                    changed: false,
                    message: Some(e.message(
                        MessageKind::Info,
                        format!("Value found at position {index}!"),
                        e.options.alert_dwell_ms,
                    )),
                }
            }
            None => Report {
                op,
                outcome: Outcome::NotFound,
                index: None,
                changed: false,
                message: Some(e.message(
                    MessageKind::Error,
                    "Value not found!".into(),
                    e.options.alert_dwell_ms,
                )),
            },
        })
    }

    fn run(&mut self, f: impl FnOnce(&mut Self) -> Report) -> Report {
        let markers = (self.highlight_index, self.new_index);
        let report = f(self);
        if report.changed {
            self.drop_stale_markers();
        }
        ldebug!(
            op = ?report.op,
            outcome = ?report.outcome,
            index = ?report.index,
            len = self.values.len(),
            "Engine::run"
        );
        if report.changed || markers != (self.highlight_index, self.new_index) {
            self.notify(Some(&report));
        }
        report
    }

    /// Maps a signed position onto `0..bound`.
    fn slot(&self, pos: i64, bound: usize) -> Option<usize> {
        usize::try_from(pos).ok().filter(|&index| index < bound)
    }

    fn drop_stale_markers(&mut self) {
        let len = self.values.len();
        if self.highlight_index.is_some_and(|i| i >= len) {
            self.highlight_index = None;
        }
        if self.new_index.is_some_and(|i| i >= len) {
            self.new_index = None;
        }
    }

    fn message(&self, kind: MessageKind, text: String, dwell_ms: u64) -> StatusMessage {
        StatusMessage {
            kind,
            text,
            dwell_ms,
        }
    }

    fn done(&self, op: Operation, index: Option<usize>, text: String) -> Report {
        Report {
            op,
            outcome: Outcome::Ok,
            index,
            changed: true,
            message: Some(self.message(MessageKind::Info, text, self.options.info_dwell_ms)),
        }
    }

    fn invalid_position(&self, op: Operation) -> Report {
        Report {
            op,
            outcome: Outcome::InvalidPosition,
            index: None,
            changed: false,
            message: Some(self.message(
                MessageKind::Error,
                "Invalid position!".into(),
                self.options.alert_dwell_ms,
            )),
        }
    }

    fn noop(op: Operation) -> Report {
        Report {
            op,
            outcome: Outcome::Noop,
            index: None,
            changed: false,
            message: None,
        }
    }
}

impl Extend<i64> for Engine {
    /// Appends values without setting any marker or firing `on_change`.
    fn extend<I: IntoIterator<Item = i64>>(&mut self, iter: I) {
        self.values.extend(iter);
    }
}
