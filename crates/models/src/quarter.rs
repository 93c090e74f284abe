use strum::{Display, EnumIter, IntoEnumIterator};

/// The three terms offered in each academic year of the planning horizon
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum Term {
    #[strum(serialize = "fall")]
    Fall,
    #[strum(serialize = "winter")]
    Winter,
    #[strum(serialize = "spring")]
    Spring,
}

/// Number of academic years the fixed quarter sequence spans
pub const PLAN_YEARS: u8 = 2;

/// Returns the fixed quarter-name sequence, e.g. `"fall 1"` through
/// `"spring 2"`. A quarter's stable code is its index in this sequence.
pub fn quarter_names() -> Vec<String> {
    (1..=PLAN_YEARS)
        .flat_map(|year| Term::iter().map(move |term| format!("{term} {year}")))
        .collect()
}

/// Number of quarters in the fixed sequence
pub fn quarter_count() -> usize {
    Term::iter().count() * PLAN_YEARS as usize
}
