//! Country directory and search
//!
//! Holds the ordered country list (built-ins first, then any custom entries)
//! and answers substring queries. Queries never reorder results.

use crate::countries;
use crate::country::CountryPhoneFormat;

/// Ordered, immutable collection of supported countries.
#[derive(Debug, Clone)]
pub struct CountryDirectory {
    countries: Vec<CountryPhoneFormat>,
}

impl Default for CountryDirectory {
    fn default() -> Self {
        Self::builtin()
    }
}

impl CountryDirectory {
    /// Directory holding only the built-in table.
    pub fn builtin() -> Self {
        Self {
            countries: countries::builtin().to_vec(),
        }
    }

    /// Directory from an explicit list, order preserved.
    pub fn from_countries(countries: Vec<CountryPhoneFormat>) -> Self {
        Self { countries }
    }

    /// Built-ins followed by custom entries.
    ///
    /// Custom entries whose id collides with an earlier entry are skipped.
    pub fn with_custom(custom: impl IntoIterator<Item = CountryPhoneFormat>) -> Self {
        let mut directory = Self::builtin();
        for country in custom {
            let country = country.with_default_flag();
            if directory.index_of(&country.id).is_some() {
                tracing::warn!("Skipping custom country with duplicate id {:?}", country.id);
                continue;
            }
            if let Err(e) = country.validate() {
                // Kept so the failure surfaces at generation time
                tracing::warn!("Custom country {:?} is malformed: {}", country.id, e);
            }
            directory.countries.push(country);
        }
        directory
    }

    pub fn len(&self) -> usize {
        self.countries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.countries.is_empty()
    }

    pub fn all(&self) -> &[CountryPhoneFormat] {
        &self.countries
    }

    pub fn get(&self, index: usize) -> Option<&CountryPhoneFormat> {
        self.countries.get(index)
    }

    /// Position of the entry with the given identifier.
    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.countries.iter().position(|c| c.id == id)
    }

    pub fn by_id(&self, id: &str) -> Option<&CountryPhoneFormat> {
        self.index_of(id).and_then(|i| self.countries.get(i))
    }

    /// Indices of entries matching `query`, in directory order.
    ///
    /// Matches when the lowercased name contains the lowercased query, or the
    /// dialing code contains the query verbatim. An empty query matches all.
    pub fn search(&self, query: &str) -> Vec<usize> {
        if query.is_empty() {
            return (0..self.countries.len()).collect();
        }

        let query_lower = query.to_lowercase();
        self.countries
            .iter()
            .enumerate()
            .filter(|(_, c)| {
                c.name.to_lowercase().contains(&query_lower) || c.dial_code.contains(query)
            })
            .map(|(i, _)| i)
            .collect()
    }

    /// Entries matching `query`, in directory order.
    pub fn search_entries(&self, query: &str) -> Vec<&CountryPhoneFormat> {
        self.search(query)
            .into_iter()
            .filter_map(|i| self.countries.get(i))
            .collect()
    }

    /// Resolve a command-line key to a single entry.
    ///
    /// Tries the identifier, then the exact name, then the exact dialing
    /// code, all case-insensitively. The first entry in order wins.
    pub fn find(&self, key: &str) -> Option<&CountryPhoneFormat> {
        let key = key.trim();
        if key.is_empty() {
            return None;
        }

        self.countries
            .iter()
            .find(|c| c.id.eq_ignore_ascii_case(key))
            .or_else(|| {
                self.countries
                    .iter()
                    .find(|c| c.name.to_lowercase() == key.to_lowercase())
            })
            .or_else(|| {
                let code = if key.starts_with('+') {
                    key.to_string()
                } else {
                    format!("+{}", key)
                };
                self.countries.iter().find(|c| c.dial_code == code)
            })
    }
}
