use rustc_hash::FxHashSet;
use std::sync::Arc;

/// Ordered set of blocked names, matched exactly and ASCII case-insensitively.
///
/// Entries keep their configured order and spelling for display; lookups go
/// through a lowercase index. There is no wildcard or suffix matching:
/// blocking `example.com` does not block `www.example.com`.
#[derive(Debug, Clone, Default)]
pub struct Blocklist {
    entries: Vec<Arc<str>>,
    index: FxHashSet<Box<str>>,
}

impl Blocklist {
    pub fn new<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut blocklist = Self::default();
        for entry in entries {
            blocklist.push(entry.as_ref());
        }
        blocklist
    }

    fn push(&mut self, entry: &str) {
        let entry = entry.trim();
        if entry.is_empty() {
            return;
        }
        self.index.insert(entry.to_ascii_lowercase().into_boxed_str());
        self.entries.push(Arc::from(entry));
    }

    pub fn is_blocked(&self, name: &str) -> bool {
        if name.bytes().any(|b| b.is_ascii_uppercase()) {
            self.index.contains(name.to_ascii_lowercase().as_str())
        } else {
            self.index.contains(name)
        }
    }

    pub fn entries(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|entry| &**entry)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Linear-scan form of [`Blocklist::is_blocked`] over a plain list.
pub fn is_blocked<S: AsRef<str>>(name: &str, blocklist: &[S]) -> bool {
    blocklist
        .iter()
        .any(|entry| entry.as_ref().eq_ignore_ascii_case(name))
}
