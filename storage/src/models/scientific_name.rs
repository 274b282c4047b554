/// A scientific species name ("Genus epithet ...") with genus derivation.
///
/// Point resolution falls back from species level to genus level, so the
/// genus must be separable from the full name. A name without at least two
/// whitespace-delimited tokens has no derivable genus and callers must
/// treat it as a catalog-data error rather than guessing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScientificName(String);

impl ScientificName {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The genus token, i.e. the first whitespace-delimited token.
    ///
    /// Returns `None` for mononomials and blank names: a name that is all
    /// one token cannot be split into genus + epithet.
    pub fn genus(&self) -> Option<&str> {
        let mut tokens = self.0.split_whitespace();
        let genus = tokens.next()?;
        tokens.next()?;
        Some(genus)
    }

    /// Prefix used to match all catalog species of the same genus,
    /// e.g. `"Aulonocara "`.
    pub fn genus_prefix(genus: &str) -> String {
        format!("{} ", genus)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_binomial_name() {
        let name = ScientificName::new("Aulonocara jacobfreibergi");
        assert_eq!(name.genus(), Some("Aulonocara"));
    }

    #[test]
    fn test_trinomial_name() {
        let name = ScientificName::new("Poecilia reticulata var. endleri");
        assert_eq!(name.genus(), Some("Poecilia"));
    }

    #[test]
    fn test_mononomial_has_no_genus() {
        let name = ScientificName::new("Ancistrus");
        assert_eq!(name.genus(), None);
    }

    #[test]
    fn test_blank_name_has_no_genus() {
        assert_eq!(ScientificName::new("").genus(), None);
        assert_eq!(ScientificName::new("   ").genus(), None);
    }

    #[test]
    fn test_surrounding_whitespace_ignored() {
        let name = ScientificName::new("  Betta splendens ");
        assert_eq!(name.genus(), Some("Betta"));
    }

    #[test]
    fn test_genus_prefix() {
        assert_eq!(ScientificName::genus_prefix("Betta"), "Betta ");
    }
}
