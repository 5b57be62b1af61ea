use crate::options::DEFAULT_MAX_VARIABLES;
use smallvec::SmallVec;

/// Ordered, duplicate-free variable names in first-declaration order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VariableSet {
    names: SmallVec<[String; DEFAULT_MAX_VARIABLES]>,
}

impl VariableSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.names
    }

    /// Appends `name` unless already present; returns whether it was added.
    pub fn insert<S: Into<String>>(&mut self, name: S) -> bool {
        let name = name.into();
        if self.contains(&name) {
            return false;
        }
        self.names.push(name);
        true
    }
}

impl<S: Into<String>> FromIterator<S> for VariableSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = VariableSet::new();
        for name in iter {
            set.insert(name);
        }
        set
    }
}

impl<'a> IntoIterator for &'a VariableSet {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.names.iter()
    }
}

impl IntoIterator for VariableSet {
    type Item = String;
    type IntoIter = smallvec::IntoIter<[String; DEFAULT_MAX_VARIABLES]>;

    fn into_iter(self) -> Self::IntoIter {
        self.names.into_iter()
    }
}
