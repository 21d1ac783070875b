use serde::{Deserialize, Serialize};

/// A single project known to the current workspace
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectEntry {
    pub name: String,
}

impl ProjectEntry {
    pub fn new(name: impl Into<String>) -> Self {
        ProjectEntry { name: name.into() }
    }
}

/// Read-only, ordered view of the projects the host application knows about.
///
/// The host owns and refreshes it; lookups never mutate it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectDirectory {
    entries: Vec<ProjectEntry>,
}

impl ProjectDirectory {
    pub fn new(entries: Vec<ProjectEntry>) -> Self {
        ProjectDirectory { entries }
    }

    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        ProjectDirectory {
            entries: names.into_iter().map(ProjectEntry::new).collect(),
        }
    }

    pub fn entries(&self) -> &[ProjectEntry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// First entry whose lower-cased name contains `query` (lower-cased)
    pub fn find_containing(&self, query: &str) -> Option<&ProjectEntry> {
        let q = query.to_lowercase();
        self.entries
            .iter()
            .find(|e| e.name.to_lowercase().contains(&q))
    }

    /// Names of all entries containing `query`, in directory order
    pub fn names_containing<'a>(&'a self, query: &str) -> impl Iterator<Item = &'a str> + 'a {
        let q = query.to_lowercase();
        self.entries
            .iter()
            .filter(move |e| e.name.to_lowercase().contains(&q))
            .map(|e| e.name.as_str())
    }

    /// Entry whose name equals `name` ignoring case
    pub fn find_exact(&self, name: &str) -> Option<&ProjectEntry> {
        let n = name.to_lowercase();
        self.entries.iter().find(|e| e.name.to_lowercase() == n)
    }
}
