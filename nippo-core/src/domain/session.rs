/// Highest number of record slots a session may grow to.
pub const DEFAULT_SLOT_CAP: usize = 10;

/// Where a form session currently is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionPhase {
    #[default]
    CollectingInput,
    Validating,
    Submitting,
    Resolved {
        success: bool,
    },
}

/// Per-session mutable state. One instance per human session, owned by the
/// session's controller; never shared process-wide.
#[derive(Debug, Clone)]
pub struct SessionState {
    slot_count: usize,
    slot_cap: usize,
    is_submitting: bool,
    just_submitted: bool,
    phase: SessionPhase,
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new(DEFAULT_SLOT_CAP)
    }
}

impl SessionState {
    pub fn new(slot_cap: usize) -> Self {
        Self {
            slot_count: 1,
            slot_cap: slot_cap.max(1),
            is_submitting: false,
            just_submitted: false,
            phase: SessionPhase::default(),
        }
    }

    pub fn slot_count(&self) -> usize {
        self.slot_count
    }

    pub fn slot_cap(&self) -> usize {
        self.slot_cap
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn is_submitting(&self) -> bool {
        self.is_submitting
    }

    /// Whether the "add slot" control should still be offered.
    pub fn can_add_slot(&self) -> bool {
        self.slot_count < self.slot_cap
    }

    /// Grow the form by one slot. Silently does nothing at the cap.
    pub fn add_slot(&mut self) {
        if self.slot_count < self.slot_cap {
            self.slot_count += 1;
        }
    }

    /// Enter the validation step; ignored while a submit is in flight so a
    /// late redraw cannot disturb the phase.
    pub fn mark_validating(&mut self) {
        if !self.is_submitting {
            self.phase = SessionPhase::Validating;
        }
    }

    pub fn mark_collecting(&mut self) {
        if !self.is_submitting {
            self.phase = SessionPhase::CollectingInput;
        }
    }

    /// Advisory gate against re-entrant submission from the same session.
    /// Returns false when a submit is already in flight.
    pub fn begin_submit(&mut self) -> bool {
        if self.is_submitting {
            return false;
        }
        self.is_submitting = true;
        self.phase = SessionPhase::Submitting;
        true
    }

    /// Close out an in-flight submit. The gate is always released; success
    /// additionally arms the one-shot acknowledgment and shrinks the form
    /// back to a single slot.
    pub fn end_submit(&mut self, success: bool) {
        self.is_submitting = false;
        self.phase = SessionPhase::Resolved { success };
        if success {
            self.just_submitted = true;
            self.slot_count = 1;
        }
    }

    /// Read-and-clear the one-shot success acknowledgment. The first
    /// observation after a confirmed write sees true and returns the
    /// session to collecting; every later observation sees false.
    pub fn consume_just_submitted(&mut self) -> bool {
        let observed = self.just_submitted;
        self.just_submitted = false;
        if observed {
            self.phase = SessionPhase::CollectingInput;
        }
        observed
    }
}
