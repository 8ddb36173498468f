//! Agent-graph panel state.

/// Diagram definition as served by the backend, kept so re-activation is a
/// pure visibility toggle.
#[derive(Clone, Debug, Default)]
pub struct GraphState {
    pub definition: Option<String>,
    pub failed: bool,
}
