/// Insertion-ordered mapping from label to focusable handle.
///
/// The order of first insertion is the navigation order and is preserved
/// across mutations: re-subscribing a label replaces its handle in
/// place, while removing a label and subscribing it again appends it at
/// the end (mirroring a natural unmount/remount).
#[derive(Debug)]
pub struct Registry<H> {
    entries: Vec<(String, H)>,
}

impl<H> Default for Registry<H> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<H> Registry<H> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace the handle registered under `label`.
    /// Replacing keeps the label's position in navigation order.
    pub fn subscribe(&mut self, label: impl Into<String>, handle: H) {
        let label = label.into();
        if let Some(entry) = self.entries.iter_mut().find(|(name, _)| *name == label) {
            log::debug!("[registry] replacing handle for {label}");
            entry.1 = handle;
        } else {
            log::debug!("[registry] subscribing {label}");
            self.entries.push((label, handle));
        }
    }

    /// Remove the entry for `label`. No-op if absent.
    pub fn unsubscribe(&mut self, label: &str) {
        let before = self.entries.len();
        self.entries.retain(|(name, _)| name != label);
        if self.entries.len() != before {
            log::debug!("[registry] unsubscribed {label}");
        }
    }

    /// Registered labels in navigation order. This sequence is the
    /// single source of truth for first/last/next/previous computations.
    pub fn labels(&self) -> Vec<&str> {
        self.entries.iter().map(|(name, _)| name.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, label: &str) -> Option<&H> {
        self.entries
            .iter()
            .find(|(name, _)| name == label)
            .map(|(_, handle)| handle)
    }

    pub fn index_of(&self, label: &str) -> Option<usize> {
        self.entries.iter().position(|(name, _)| name == label)
    }

    pub fn label_at(&self, index: usize) -> Option<&str> {
        self.entries.get(index).map(|(name, _)| name.as_str())
    }

    pub fn handle_at(&self, index: usize) -> Option<&H> {
        self.entries.get(index).map(|(_, handle)| handle)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &H)> {
        self.entries
            .iter()
            .map(|(name, handle)| (name.as_str(), handle))
    }

    /// Log the current navigation order at debug level.
    pub fn dump(&self) {
        log::debug!("[registry] order: {:?}", self.labels());
    }
}
