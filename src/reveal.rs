#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClassChange {
    Add,
    Remove,
}

/// How an element's class follows its visibility.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealPolicy {
    /// Class present only while intersecting.
    Toggle,
    /// Class added on first intersection and kept.
    Sticky,
}

impl RevealPolicy {
    pub fn change(self, is_intersecting: bool) -> Option<ClassChange> {
        match (self, is_intersecting) {
            (_, true) => Some(ClassChange::Add),
            (RevealPolicy::Toggle, false) => Some(ClassChange::Remove),
            (RevealPolicy::Sticky, false) => None,
        }
    }
}
