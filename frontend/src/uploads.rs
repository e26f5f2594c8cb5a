/// One file staged by the user for submission. The handle is an opaque
/// reference to the native binary payload; this module never inspects it.
#[derive(Clone, Debug, PartialEq)]
pub struct PendingUpload<H> {
    pub name: String,
    pub size_bytes: u64,
    pub handle: H,
}

/// Ordered set of staged files. Insertion order drives both display order and
/// submission order.
///
/// The set has exactly one writer (the bridge) and is replaced wholesale on
/// every mutation, so readers re-deriving from it between events never see a
/// partial update.
#[derive(Clone, Debug, PartialEq)]
pub struct PendingUploadSet<H> {
    entries: Vec<PendingUpload<H>>,
}

/// Submit-control availability, derived purely from the set.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GateState {
    pub enabled: bool,
    pub count: usize,
}

impl<H> Default for PendingUploadSet<H> {
    fn default() -> Self {
        PendingUploadSet { entries: Vec::new() }
    }
}

impl<H> PendingUploadSet<H> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the entire selection with a freshly obtained batch. No
    /// filtering and no deduplication; duplicate names and sizes are allowed.
    pub fn set_all(&mut self, entries: Vec<PendingUpload<H>>) {
        self.entries = entries;
    }

    /// Excises the entry at `index`, preserving the relative order of the
    /// rest. Out-of-range indices are a silent no-op; they can only come from
    /// stale UI state, which the full re-render per mutation already rules out.
    pub fn remove_at(&mut self, index: usize) {
        if index < self.entries.len() {
            self.entries.remove(index);
        }
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PendingUpload<H>> {
        self.entries.iter()
    }

    /// The submit control is available exactly when something is staged.
    pub fn gate(&self) -> GateState {
        let count = self.entries.len();
        GateState {
            enabled: count > 0,
            count,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn upload(name: &str) -> PendingUpload<()> {
        PendingUpload {
            name: name.to_string(),
            size_bytes: 1024,
            handle: (),
        }
    }

    fn names(set: &PendingUploadSet<()>) -> Vec<&str> {
        set.iter().map(|u| u.name.as_str()).collect()
    }

    #[test]
    fn starts_empty_and_gated_off() {
        let set: PendingUploadSet<()> = PendingUploadSet::new();
        assert!(set.is_empty());
        assert_eq!(set.gate(), GateState { enabled: false, count: 0 });
    }

    #[test]
    fn set_all_replaces_rather_than_appends() {
        let mut set = PendingUploadSet::new();
        set.set_all(vec![upload("a.jpg"), upload("b.jpg")]);
        assert_eq!(set.len(), 2);

        set.set_all(vec![upload("c.jpg")]);
        assert_eq!(names(&set), vec!["c.jpg"]);
    }

    #[test]
    fn duplicates_are_permitted() {
        let mut set = PendingUploadSet::new();
        set.set_all(vec![upload("menu.png"), upload("menu.png")]);
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn remove_at_excises_and_preserves_order() {
        let mut set = PendingUploadSet::new();
        set.set_all(vec![upload("a"), upload("b"), upload("c"), upload("d")]);

        set.remove_at(1);
        assert_eq!(names(&set), vec!["a", "c", "d"]);

        set.remove_at(0);
        assert_eq!(names(&set), vec!["c", "d"]);

        set.remove_at(1);
        assert_eq!(names(&set), vec!["c"]);
    }

    #[test]
    fn remove_at_out_of_range_is_a_no_op() {
        let mut set = PendingUploadSet::new();
        set.set_all(vec![upload("a"), upload("b")]);

        set.remove_at(2);
        set.remove_at(usize::MAX);
        assert_eq!(names(&set), vec!["a", "b"]);

        let mut empty: PendingUploadSet<()> = PendingUploadSet::new();
        empty.remove_at(0);
        assert!(empty.is_empty());
    }

    #[test]
    fn gate_tracks_count_through_mutations() {
        let mut set = PendingUploadSet::new();
        set.set_all(vec![upload("a"), upload("b")]);
        assert_eq!(set.gate(), GateState { enabled: true, count: 2 });

        set.remove_at(0);
        assert_eq!(set.gate(), GateState { enabled: true, count: 1 });

        set.remove_at(0);
        assert_eq!(set.gate(), GateState { enabled: false, count: 0 });
    }

    #[test]
    fn clear_resets_the_selection() {
        let mut set = PendingUploadSet::new();
        set.set_all(vec![upload("a")]);
        set.clear();
        assert!(set.is_empty());
        assert!(!set.gate().enabled);
    }
}
