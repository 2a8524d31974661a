/// An immutable table of factors keyed by a keyword (e.g. `diesel`, `organic_anaerobic`).
/// Keys are matched exactly.
#[derive(Debug, Clone, Copy)]
pub struct FactorTable {
    entries: &'static [(&'static str, f64)],
    default: f64,
}

impl FactorTable {
    pub const fn new(entries: &'static [(&'static str, f64)], default: f64) -> Self {
        Self { entries, default }
    }

    /// The factor of `key`, if the table has it
    pub fn get(&self, key: &str) -> Option<f64> {
        self.entries
            .iter()
            .find_map(|(k, v)| (*k == key).then_some(*v))
    }

    /// The factor of `key`, or the default of the table
    pub fn get_or_default(&self, key: &str) -> f64 {
        self.get(key).unwrap_or_else(|| {
            log::debug!("no factor for \"{key}\"; using default {}", self.default);
            self.default
        })
    }

    pub fn default(&self) -> f64 {
        self.default
    }

    pub fn keys(&self) -> impl Iterator<Item = &'static str> {
        self.entries.iter().map(|(k, _)| *k)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    static TABLE: FactorTable = FactorTable::new(&[("a", 1.0), ("b", -2.0)], 0.5);

    #[test]
    fn lookup() {
        assert_eq!(TABLE.get("b"), Some(-2.0));
        assert_eq!(TABLE.get("c"), None);
        assert_eq!(TABLE.get_or_default("c"), 0.5);
        assert_eq!(TABLE.keys().collect::<Vec<_>>(), vec!["a", "b"]);
    }
}
