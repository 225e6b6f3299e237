use std::{fmt, sync::Arc};

/// Identifier of a district within its jurisdiction.
/// Numbered districts sort before named ones, numbers compare numerically.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LocalId {
    Number(u32),
    Name(Arc<str>),
}

impl LocalId {
    /// Parse a local id, preferring the numeric form ("07" becomes 7).
    pub fn parse(text: &str) -> Self {
        let text = text.trim();
        match text.parse::<u32>() {
            Ok(n) => LocalId::Number(n),
            Err(_) => LocalId::Name(Arc::from(text)),
        }
    }
}

impl From<u32> for LocalId {
    fn from(n: u32) -> Self { LocalId::Number(n) }
}

impl From<&str> for LocalId {
    fn from(s: &str) -> Self { LocalId::parse(s) }
}

impl fmt::Display for LocalId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LocalId::Number(n) => write!(f, "{n}"),
            LocalId::Name(s) => f.write_str(s),
        }
    }
}

/// Stable key for a district: jurisdiction abbreviation plus local id.
/// Ordered by abbreviation, then local id.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DistrictKey {
    pub jurisdiction: Arc<str>, // e.g., "CA"
    pub local_id: LocalId,
}

impl DistrictKey {
    pub fn new(jurisdiction: &str, local_id: impl Into<LocalId>) -> Self {
        Self {
            jurisdiction: Arc::from(jurisdiction.trim().to_ascii_uppercase()),
            local_id: local_id.into(),
        }
    }

    /// Key for a numbered district.
    pub fn numbered(jurisdiction: &str, n: u32) -> Self { Self::new(jurisdiction, LocalId::Number(n)) }

    #[inline] pub fn jurisdiction(&self) -> &str { &self.jurisdiction }

    #[inline] pub fn local_id(&self) -> &LocalId { &self.local_id }
}

impl fmt::Display for DistrictKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.jurisdiction, self.local_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_ids_sort_numerically() {
        let mut keys = vec![
            DistrictKey::numbered("CA", 10),
            DistrictKey::numbered("AL", 2),
            DistrictKey::numbered("CA", 9),
            DistrictKey::new("AL", "north"),
        ];
        keys.sort();
        let shown: Vec<String> = keys.iter().map(|k| k.to_string()).collect();
        assert_eq!(shown, ["AL-2", "AL-north", "CA-9", "CA-10"]);
    }

    #[test]
    fn parse_strips_leading_zeros() {
        assert_eq!(LocalId::parse("07"), LocalId::Number(7));
        assert_eq!(LocalId::parse(" 3 "), LocalId::Number(3));
        assert_eq!(LocalId::parse("At-Large"), LocalId::Name("At-Large".into()));
    }

    #[test]
    fn abbreviation_is_normalized() {
        assert_eq!(DistrictKey::numbered(" ny", 1), DistrictKey::numbered("NY", 1));
    }
}
