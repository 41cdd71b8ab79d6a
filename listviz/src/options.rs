use alloc::sync::Arc;

use crate::engine::Engine;
use crate::Report;

/// A callback fired after the sequence or a marker changed.
///
/// The report is `None` when the change came from an explicit marker setter.
pub type OnChangeCallback = Arc<dyn Fn(&Engine, Option<&Report>) + Send + Sync>;

/// What `delete_at_position` reports when the list is empty.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EmptyDeletePolicy {
    /// Report `InvalidPosition`, like any other out-of-range position.
    #[default]
    InvalidPosition,
    /// Report `Noop`, like `delete_from_head`/`delete_from_tail` do.
    Noop,
}

/// Configuration for [`crate::Engine`].
///
/// Cheap to clone: the callback is stored in an `Arc`.
pub struct EngineOptions {
    /// Set `new_index` after `insert_at_position`, the way head/tail inserts do.
    ///
    /// Disable to leave `new_index` untouched by positional inserts.
    pub mark_positional_inserts: bool,

    pub empty_positional_delete: EmptyDeletePolicy,

    /// Dwell attached to informational messages.
    pub info_dwell_ms: u64,
    /// Dwell attached to errors and search results.
    pub alert_dwell_ms: u64,

    pub on_change: Option<OnChangeCallback>,
}

impl EngineOptions {
    pub fn new() -> Self {
        Self {
            mark_positional_inserts: true,
            empty_positional_delete: EmptyDeletePolicy::default(),
            info_dwell_ms: 2000,
            alert_dwell_ms: 3000,
            on_change: None,
        }
    }

    /// Options that reproduce the classic widget exactly: positional inserts do not set the
    /// new-node marker.
    pub fn reference() -> Self {
        Self {
            mark_positional_inserts: false,
            ..Self::new()
        }
    }

    pub fn with_on_change(
        mut self,
        on_change: impl Fn(&Engine, Option<&Report>) + Send + Sync + 'static,
    ) -> Self {
        self.on_change = Some(Arc::new(on_change));
        self
    }
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for EngineOptions {
    fn clone(&self) -> Self {
        Self {
            mark_positional_inserts: self.mark_positional_inserts,
            empty_positional_delete: self.empty_positional_delete,
            info_dwell_ms: self.info_dwell_ms,
            alert_dwell_ms: self.alert_dwell_ms,
            on_change: self.on_change.clone(),
        }
    }
}

impl core::fmt::Debug for EngineOptions {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("EngineOptions")
            .field("mark_positional_inserts", &self.mark_positional_inserts)
            .field("empty_positional_delete", &self.empty_positional_delete)
            .field("info_dwell_ms", &self.info_dwell_ms)
            .field("alert_dwell_ms", &self.alert_dwell_ms)
            .field("on_change", &self.on_change.as_ref().map(|_| ".."))
            .finish()
    }
}
