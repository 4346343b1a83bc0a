//! Sets of assemblies.
//!
//! Every parser maps a set of assemblies to a set of assemblies. The set
//! remembers insertion order, which is what breaks ties when picking the
//! [`best`][AssemblySet::best] assembly, so the results of matching are
//! deterministic.

use crate::Assembly;

/// An insertion-ordered set of [`Assembly`]s.
///
/// The sets we see are small (a handful of ways to match at once) so a plain
/// vector with a linear membership check does fine.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AssemblySet<'a> {
    assemblies: Vec<Assembly<'a>>,
}

impl<'a> AssemblySet<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// A set with just `assembly` in it.
    pub fn singleton(assembly: Assembly<'a>) -> Self {
        AssemblySet {
            assemblies: vec![assembly],
        }
    }

    /// Add an assembly unless an equal one is already here. Returns `true` if
    /// it was added.
    pub fn insert(&mut self, assembly: Assembly<'a>) -> bool {
        if self.contains(&assembly) {
            false
        } else {
            self.assemblies.push(assembly);
            true
        }
    }

    pub fn contains(&self, assembly: &Assembly<'a>) -> bool {
        self.assemblies.iter().any(|a| a == assembly)
    }

    pub fn len(&self) -> usize {
        self.assemblies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assemblies.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Assembly<'a>> {
        self.assemblies.iter()
    }

    /// The assembly with the fewest tokens left. Ties go to the one which was
    /// inserted first.
    pub fn best(&self) -> Option<&Assembly<'a>> {
        let mut best: Option<&Assembly<'a>> = None;
        for assembly in &self.assemblies {
            match best {
                Some(b) if b.remaining_count() <= assembly.remaining_count() => {}
                _ => best = Some(assembly),
            }
        }
        best
    }

    /// How far the least advanced assembly has got, or `None` if the set is
    /// empty.
    pub fn min_consumed(&self) -> Option<usize> {
        self.assemblies.iter().map(Assembly::consumed_count).min()
    }
}

impl<'a> Extend<Assembly<'a>> for AssemblySet<'a> {
    fn extend<I: IntoIterator<Item = Assembly<'a>>>(&mut self, iter: I) {
        for assembly in iter {
            self.insert(assembly);
        }
    }
}

impl<'a> FromIterator<Assembly<'a>> for AssemblySet<'a> {
    fn from_iter<I: IntoIterator<Item = Assembly<'a>>>(iter: I) -> Self {
        let mut set = AssemblySet::new();
        set.extend(iter);
        set
    }
}

impl<'a> IntoIterator for AssemblySet<'a> {
    type Item = Assembly<'a>;
    type IntoIter = std::vec::IntoIter<Assembly<'a>>;

    fn into_iter(self) -> Self::IntoIter {
        self.assemblies.into_iter()
    }
}

impl<'s, 'a> IntoIterator for &'s AssemblySet<'a> {
    type Item = &'s Assembly<'a>;
    type IntoIter = std::slice::Iter<'s, Assembly<'a>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
