use listviz::{Engine, EngineOptions, Operation, Report, StatusMessage};

use crate::dwell::Deadline;
use crate::{Command, Dwell};

/// A framework-neutral controller that wraps a `listviz::Engine` and owns the dwell timers
/// the engine deliberately leaves out.
///
/// This type does not hold any UI objects. Adapters drive it by calling:
/// - `apply` / `submit` when the user triggers an operation
/// - `tick(now_ms)` each frame/timer tick, which clears expired status messages and markers
///
/// `next_deadline()` tells a timer-based view when the next `tick` will have something to do.
#[derive(Clone, Debug, Default)]
pub struct Controller {
    engine: Engine,
    dwell: Dwell,
    status: Option<StatusMessage>,
    status_until: Deadline,
    new_until: Deadline,
    highlight_until: Deadline,
}

impl Controller {
    pub fn new(options: EngineOptions, dwell: Dwell) -> Self {
        Self::from_engine(Engine::with_options(options), dwell)
    }

    pub fn from_engine(engine: Engine, dwell: Dwell) -> Self {
        Self {
            engine,
            dwell,
            status: None,
            status_until: Deadline::default(),
            new_until: Deadline::default(),
            highlight_until: Deadline::default(),
        }
    }

    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut Engine {
        &mut self.engine
    }

    pub fn into_engine(self) -> Engine {
        self.engine
    }

    pub fn dwell(&self) -> Dwell {
        self.dwell
    }

    /// Changes marker dwells. Deadlines that are already armed keep their time.
    pub fn set_dwell(&mut self, dwell: Dwell) {
        self.dwell = dwell;
    }

    /// The status message currently on screen, if any.
    pub fn status(&self) -> Option<&StatusMessage> {
        self.status.as_ref()
    }

    /// Runs `command` and arms the dwell timers for whatever it produced.
    ///
    /// A new message replaces the one on screen, along with its deadline.
    pub fn apply(&mut self, command: Command, now_ms: u64) -> Report {
        let report = command.apply(&mut self.engine);

        if let Some(message) = &report.message {
            self.status = Some(message.clone());
            self.status_until.arm(now_ms, message.dwell_ms);
        }

        if report.outcome.is_ok() {
            match report.op {
                Operation::Search => self.highlight_until.arm(now_ms, self.dwell.highlight_ms),
                Operation::InsertAtHead | Operation::InsertAtTail => {
                    self.new_until.arm(now_ms, self.dwell.new_marker_ms);
                }
                // Without `mark_positional_inserts` the marker belongs to an earlier insert.
                Operation::InsertAtPosition if self.engine.options().mark_positional_inserts => {
                    self.new_until.arm(now_ms, self.dwell.new_marker_ms);
                }
                _ => {}
            }
        }

        atrace!(
            op = ?report.op,
            outcome = ?report.outcome,
            now_ms,
            "Controller::apply"
        );
        report
    }

    /// Parses raw field text into a command and applies it.
    ///
    /// Returns `None` (and changes nothing) when a required field is blank or not a number.
    pub fn submit(
        &mut self,
        op: Operation,
        value: &str,
        position: &str,
        now_ms: u64,
    ) -> Option<Report> {
        let command = Command::from_input(op, value, position)?;
        Some(self.apply(command, now_ms))
    }

    /// Clears the status message and markers whose dwell has elapsed.
    ///
    /// Returns `true` if a message or marker was actually removed.
    pub fn tick(&mut self, now_ms: u64) -> bool {
        let mut cleared = false;

        if self.status_until.fire(now_ms) {
            self.status = None;
            cleared = true;
        }
        if self.new_until.fire(now_ms) {
            cleared |= self.engine.clear_new_index();
        }
        if self.highlight_until.fire(now_ms) {
            cleared |= self.engine.clear_highlight();
        }

        if cleared {
            atrace!(now_ms, "Controller::tick cleared");
        }
        cleared
    }

    /// The earliest armed deadline, or `None` when nothing is pending.
    pub fn next_deadline(&self) -> Option<u64> {
        [self.status_until, self.new_until, self.highlight_until]
            .into_iter()
            .filter_map(Deadline::at)
            .min()
    }

    pub fn is_idle(&self) -> bool {
        self.next_deadline().is_none()
    }

    /// Clears the status message and both markers immediately.
    pub fn clear_transients(&mut self) {
        self.status = None;
        self.status_until.disarm();
        self.new_until.disarm();
        self.highlight_until.disarm();
        self.engine.batch_update(|e| {
            e.clear_new_index();
            e.clear_highlight();
        });
    }
}
