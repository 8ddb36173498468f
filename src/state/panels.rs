//! Panel activation state machine.
//!
//! DESIGN
//! ======
//! Each lazily loaded panel moves Uninitialized → Initializing → Ready at
//! most once per session under the default policy. A failed load still lands
//! on Ready, so re-activating a panel never retries on its own; the refresh
//! policy decides whether activating a Ready panel re-runs its load routine.
//! Switching tabs only toggles visibility and never touches another panel's
//! phase.

#[cfg(test)]
#[path = "panels_test.rs"]
mod panels_test;

/// Console tabs. `Compose` is always live; the other three initialize lazily
/// on first activation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PanelTab {
    #[default]
    Compose,
    Graph,
    Data,
    Queue,
}

/// Lifecycle of one lazily loaded panel.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum PanelPhase {
    #[default]
    Uninitialized,
    /// Load routine in flight; activation never re-enters it.
    Initializing,
    /// Load routine finished, successfully or not, at `loaded_at` ms.
    Ready { loaded_at: f64 },
}

/// Whether activating an already-Ready panel re-runs its load routine.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum RefreshPolicy {
    /// Load exactly once per session; revisits are pure visibility toggles.
    #[default]
    LoadOnce,
    /// Every activation reloads.
    EveryActivation,
    /// Reload when the last load is at least `ms` old.
    Ttl { ms: f64 },
}

impl RefreshPolicy {
    fn wants_refresh(self, loaded_at: f64, now_ms: f64) -> bool {
        match self {
            Self::LoadOnce => false,
            Self::EveryActivation => true,
            Self::Ttl { ms } => now_ms - loaded_at >= ms,
        }
    }
}

/// What the caller must do after an activation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Activation {
    /// Visibility toggle only.
    ShowOnly,
    /// Run the panel's load routine, then call [`PanelsState::finish_init`].
    BeginInit,
}

/// Activation state for every panel, provided through context.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PanelsState {
    /// The single visible panel.
    pub active: PanelTab,
    pub policy: RefreshPolicy,
    graph: PanelPhase,
    data: PanelPhase,
    queue: PanelPhase,
}

impl PanelsState {
    /// Current phase of a panel. `Compose` needs no initialization and always
    /// reads as Ready.
    #[must_use]
    pub fn phase(&self, tab: PanelTab) -> PanelPhase {
        match tab {
            PanelTab::Compose => PanelPhase::Ready { loaded_at: 0.0 },
            PanelTab::Graph => self.graph,
            PanelTab::Data => self.data,
            PanelTab::Queue => self.queue,
        }
    }

    /// Makes `tab` the visible panel and reports whether its load routine
    /// must run now. Only the activated panel's phase can change.
    pub fn activate(&mut self, tab: PanelTab, now_ms: f64) -> Activation {
        self.active = tab;
        if tab == PanelTab::Compose {
            return Activation::ShowOnly;
        }
        match self.phase(tab) {
            PanelPhase::Uninitialized => {
                self.set_phase(tab, PanelPhase::Initializing);
                Activation::BeginInit
            }
            PanelPhase::Initializing => Activation::ShowOnly,
            PanelPhase::Ready { loaded_at } => {
                if self.policy.wants_refresh(loaded_at, now_ms) {
                    self.set_phase(tab, PanelPhase::Initializing);
                    Activation::BeginInit
                } else {
                    Activation::ShowOnly
                }
            }
        }
    }

    /// Marks a load routine complete. Called on success and failure alike, so
    /// a failed load is never retried by activation under `LoadOnce`.
    pub fn finish_init(&mut self, tab: PanelTab, now_ms: f64) {
        if tab == PanelTab::Compose {
            return;
        }
        self.set_phase(tab, PanelPhase::Ready { loaded_at: now_ms });
    }

    fn set_phase(&mut self, tab: PanelTab, phase: PanelPhase) {
        match tab {
            PanelTab::Compose => {}
            PanelTab::Graph => self.graph = phase,
            PanelTab::Data => self.data = phase,
            PanelTab::Queue => self.queue = phase,
        }
    }
}
