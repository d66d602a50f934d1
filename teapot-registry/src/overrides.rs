//! Special-case name resolution.

use indexmap::IndexMap;

/// Name substitutions applied to canonical codes without altering their
/// documentation. The registry lists a few codes under names that make
/// poor display text (306 is registered as "(Unused)"); an override maps
/// such a code to the name the generated member should carry.
#[derive(Debug, Clone, Default)]
pub struct NameOverrides {
    names: IndexMap<u16, String>,
}

impl NameOverrides {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an override for a code.
    pub fn insert(&mut self, code: u16, display_name: impl Into<String>) {
        self.names.insert(code, display_name.into());
    }

    /// Resolve the rendered name for a canonical entry: the override if
    /// one is registered for the code, the official name otherwise.
    pub fn resolve<'a>(&'a self, code: u16, official_name: &'a str) -> &'a str {
        match self.names.get(&code) {
            Some(display_name) => display_name,
            None => official_name,
        }
    }

    pub fn contains(&self, code: u16) -> bool {
        self.names.contains_key(&code)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl FromIterator<(u16, String)> for NameOverrides {
    fn from_iter<T: IntoIterator<Item = (u16, String)>>(iter: T) -> Self {
        Self {
            names: iter.into_iter().collect(),
        }
    }
}
