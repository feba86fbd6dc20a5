/// The schedule awaiting delete confirmation. Holds at most one id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PendingDeletion {
    target: Option<String>,
}

impl PendingDeletion {
    /// Replaces any earlier request; an empty id is ignored.
    pub fn request(&mut self, schedule_id: impl Into<String>) {
        let schedule_id = schedule_id.into();
        if schedule_id.is_empty() {
            return;
        }
        self.target = Some(schedule_id);
    }

    pub fn clear(&mut self) {
        self.target = None;
    }

    pub fn target(&self) -> Option<&str> {
        self.target.as_deref()
    }

    pub fn is_pending(&self) -> bool {
        self.target.is_some()
    }
}
