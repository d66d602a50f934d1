//! Generation timestamp embedded in the file header.

use chrono::Local;

/// The date and year rendered into the generated file header.
///
/// Computed once per run. [`Stamp::now`] reads the wall clock, which is
/// the only ambient input of a generation run; [`Stamp::fixed`] makes
/// output byte-for-byte reproducible for tests and pinned builds.
#[derive(Debug, Clone)]
pub struct Stamp {
    date: String,
    year: String,
}

impl Stamp {
    /// Stamp for the current date.
    pub fn now() -> Self {
        let now = Local::now();
        Self {
            date: now.format("%d/%m/%Y").to_string(),
            year: now.format("%Y").to_string(),
        }
    }

    /// Stamp with explicit values.
    pub fn fixed(date: impl Into<String>, year: impl Into<String>) -> Self {
        Self {
            date: date.into(),
            year: year.into(),
        }
    }

    /// Generation date, `dd/mm/yyyy`.
    pub fn date(&self) -> &str {
        &self.date
    }

    /// Copyright year.
    pub fn year(&self) -> &str {
        &self.year
    }
}
