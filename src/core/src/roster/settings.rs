#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RosterSettings {
    /// Inserts reuse no existing name. Turning this off accepts duplicates,
    /// which leaves later edits ambiguous: an update replaces every record with that name.
    /// Duplicates still count towards their team's captain and vice-captain slots.
    pub reject_duplicate_names: bool,
}

impl RosterSettings {
    pub fn allow_duplicate_names() -> Self {
        RosterSettings {
            reject_duplicate_names: false,
        }
    }
}

impl Default for RosterSettings {
    fn default() -> Self {
        RosterSettings {
            reject_duplicate_names: true,
        }
    }
}
