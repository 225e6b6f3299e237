use std::sync::Arc;

/// Index of a category within an `AffiliationSet`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Affiliation(pub(crate) usize);

impl Affiliation {
    #[inline] pub fn index(self) -> usize { self.0 }
}

/// The closed, ordered set of affiliation categories a run tallies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AffiliationSet {
    names: Vec<Arc<str>>,
}

impl AffiliationSet {
    /// Build a set from category names. Blank and repeated names are dropped, order is kept.
    pub fn new<I, S>(names: I) -> Self where I: IntoIterator<Item = S>, S: AsRef<str> {
        let mut out: Vec<Arc<str>> = Vec::new();
        for name in names {
            let name = name.as_ref().trim();
            if !name.is_empty() && !out.iter().any(|n| n.as_ref() == name) {
                out.push(Arc::from(name));
            }
        }
        Self { names: out }
    }

    #[inline] pub fn len(&self) -> usize { self.names.len() }

    #[inline] pub fn is_empty(&self) -> bool { self.names.is_empty() }

    /// Look up a category by name (exact match after trimming).
    pub fn find(&self, name: &str) -> Option<Affiliation> {
        let name = name.trim();
        self.names.iter().position(|n| n.as_ref() == name).map(Affiliation)
    }

    /// Name of a category.
    #[inline] pub fn name(&self, affiliation: Affiliation) -> &str { &self.names[affiliation.0] }

    /// All categories in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (Affiliation, &str)> + '_ {
        self.names.iter().enumerate().map(|(i, n)| (Affiliation(i), n.as_ref()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drops_blank_and_duplicate_names() {
        let set = AffiliationSet::new(["progressive", " ", "patriot", "progressive"]);
        assert_eq!(set.len(), 2);
        let names: Vec<&str> = set.iter().map(|(_, n)| n).collect();
        assert_eq!(names, ["progressive", "patriot"]);
    }

    #[test]
    fn find_trims_input() {
        let set = AffiliationSet::new(["progressive", "patriot"]);
        let patriot = set.find(" patriot ").unwrap();
        assert_eq!(patriot.index(), 1);
        assert_eq!(set.name(patriot), "patriot");
        assert!(set.find("whig").is_none());
    }
}
