/// How long the view keeps transient markers before the controller clears them.
///
/// Status messages carry their own dwell (see `listviz::StatusMessage::dwell_ms`).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Dwell {
    /// Entry animation window for the new-node marker.
    pub new_marker_ms: u64,
    /// How long a search hit stays highlighted.
    pub highlight_ms: u64,
}

impl Default for Dwell {
    fn default() -> Self {
        Self {
            new_marker_ms: 300,
            highlight_ms: 3000,
        }
    }
}

/// A single pending clear, armed at `now + dwell`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) struct Deadline(Option<u64>);

impl Deadline {
    pub(crate) fn arm(&mut self, now_ms: u64, dwell_ms: u64) {
        self.0 = Some(now_ms.saturating_add(dwell_ms));
    }

    pub(crate) fn disarm(&mut self) {
        self.0 = None;
    }

    pub(crate) fn at(self) -> Option<u64> {
        self.0
    }

    /// Disarms and returns `true` if the deadline has passed.
    pub(crate) fn fire(&mut self, now_ms: u64) -> bool {
        match self.0 {
            Some(at) if now_ms >= at => {
                self.0 = None;
                true
            }
            _ => false,
        }
    }
}
