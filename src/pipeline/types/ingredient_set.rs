use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

/// Deduplicated set of lowercase ingredient names.
///
/// Iteration follows insertion order, so the first match wins when a set is
/// truncated and display order stays stable across runs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IngredientSet {
    items: IndexSet<String>,
}

impl IngredientSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts the lowercased name. Returns false if it was already present.
    pub fn insert(&mut self, name: &str) -> bool {
        self.items.insert(name.trim().to_lowercase())
    }

    pub fn extend<'a, I>(&mut self, names: I)
    where
        I: IntoIterator<Item = &'a str>,
    {
        for name in names {
            self.insert(name);
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.items.contains(name.to_lowercase().as_str())
    }

    pub fn truncate(&mut self, max: usize) {
        self.items.truncate(max);
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.items.iter().map(String::as_str)
    }

    pub fn to_vec(&self) -> Vec<String> {
        self.items.iter().cloned().collect()
    }
}

impl<'a> FromIterator<&'a str> for IngredientSet {
    fn from_iter<T: IntoIterator<Item = &'a str>>(iter: T) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

/// Capitalizes each word for display: "bell pepper" -> "Bell Pepper".
pub fn title_case(name: &str) -> String {
    name.split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
