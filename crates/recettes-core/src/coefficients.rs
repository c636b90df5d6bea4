//! Eater categories and their per-person multipliers.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Built-in appetite tiers, in form display order.
fn builtin_entries() -> Vec<(&'static str, Decimal)> {
    vec![
        ("orange", dec!(0.6)),
        ("bleu_fille", dec!(0.8)),
        ("bleu_garcon", dec!(1.0)),
        ("rouge_fille", dec!(1.0)),
        ("rouge_garcon", dec!(1.2)),
        ("cheffe", dec!(1.0)),
        ("chef", dec!(1.2)),
        ("maxi_gros_mangeur", dec!(1.5)),
    ]
}

/// Read-only mapping from category label to coefficient.
#[derive(Clone, Debug, Default)]
pub struct CoefficientTable {
    entries: Vec<(String, Decimal)>,
}

impl CoefficientTable {
    /// Create a table from explicit `(label, coefficient)` pairs.
    pub fn new(entries: Vec<(String, Decimal)>) -> Self {
        Self { entries }
    }

    /// The table the service ships with.
    pub fn builtin() -> Self {
        Self::new(
            builtin_entries()
                .into_iter()
                .map(|(label, coef)| (label.to_string(), coef))
                .collect(),
        )
    }

    /// Coefficient for a category, if known.
    pub fn get(&self, label: &str) -> Option<Decimal> {
        self.entries
            .iter()
            .find(|(l, _)| l == label)
            .map(|(_, c)| *c)
    }

    /// Whether the category is known.
    pub fn contains(&self, label: &str) -> bool {
        self.get(label).is_some()
    }

    /// Categories and coefficients in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Decimal)> {
        self.entries.iter().map(|(l, c)| (l.as_str(), *c))
    }

    /// Category labels in declaration order.
    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(l, _)| l.as_str())
    }

    /// Number of categories.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
