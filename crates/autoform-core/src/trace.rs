//! Form-build tracing boundary.
//!
//! Tracing is optional, injected by the caller, and must not affect
//! planning semantics.

///
/// PlanTraceSink
///

pub trait PlanTraceSink: Send + Sync {
    fn on_event(&self, event: PlanTraceEvent);
}

///
/// PlanTraceEvent
///

#[derive(Clone, Debug, Eq, PartialEq)]
#[remain::sorted]
pub enum PlanTraceEvent {
    FieldResolved {
        name: String,
        component: &'static str,
        required: Option<bool>,
    },
    FieldsetEntered {
        name: String,
        fields: usize,
    },
    OverrideApplied {
        name: String,
        kind: &'static str,
    },
}
