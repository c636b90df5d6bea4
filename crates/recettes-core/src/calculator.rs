//! Quantity calculator.
//!
//! A submission is a headcount per eater category. The counts are folded
//! into a single total coefficient, which then scales every per-serving
//! quantity of the chosen recipe:
//!
//! ```text
//! total = Σ count(category) × coefficient(category)
//! row   = round2(per_serving × total)
//! ```
//!
//! All arithmetic is exact decimal arithmetic, so a product that lands
//! on a half hundredth is a true tie. Rounding is half away from zero at
//! two decimals (see [`round2`]).

use std::collections::BTreeMap;

use rust_decimal::{Decimal, RoundingStrategy};

use crate::catalog::Catalog;
use crate::coefficients::CoefficientTable;

/// Headcount per eater category.
///
/// Counts are unsigned, so a negative headcount cannot be represented.
/// Labels absent from the map count as zero; labels unknown to the
/// coefficient table are carried but contribute nothing.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CategoryCounts {
    counts: BTreeMap<String, u32>,
}

impl CategoryCounts {
    /// Create an empty set of counts (everyone at zero).
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style setter.
    pub fn with(mut self, category: impl Into<String>, count: u32) -> Self {
        self.set(category, count);
        self
    }

    /// Set the headcount of a category, replacing any previous value.
    pub fn set(&mut self, category: impl Into<String>, count: u32) {
        self.counts.insert(category.into(), count);
    }

    /// Headcount of a category; zero when absent.
    pub fn get(&self, category: &str) -> u32 {
        self.counts.get(category).copied().unwrap_or(0)
    }

    /// Submitted `(category, count)` pairs, sorted by label.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.counts.iter().map(|(k, v)| (k.as_str(), *v))
    }

    /// Sum of all submitted headcounts, known categories or not.
    pub fn headcount(&self) -> u64 {
        self.counts.values().map(|c| u64::from(*c)).sum()
    }

    /// Multiply every count by `factor`, saturating at `u32::MAX`.
    pub fn scaled(&self, factor: u32) -> Self {
        Self {
            counts: self
                .counts
                .iter()
                .map(|(k, v)| (k.clone(), v.saturating_mul(factor)))
                .collect(),
        }
    }
}

impl<K: Into<String>> FromIterator<(K, u32)> for CategoryCounts {
    fn from_iter<I: IntoIterator<Item = (K, u32)>>(iter: I) -> Self {
        let mut counts = Self::new();
        for (k, v) in iter {
            counts.set(k, v);
        }
        counts
    }
}

/// One line of the result: an ingredient and its scaled total.
#[derive(Clone, Debug, PartialEq)]
pub struct IngredientRow {
    /// Ingredient label, unit included.
    pub label: String,
    /// Total quantity, rounded to two decimals.
    pub quantity: Decimal,
}

impl IngredientRow {
    /// Create a row.
    pub fn new(label: impl Into<String>, quantity: Decimal) -> Self {
        Self {
            label: label.into(),
            quantity,
        }
    }
}

/// Outcome of a computation.
///
/// An unknown recipe is not an error at this level: the caller decides
/// whether to stop there or carry on with an empty result.
#[derive(Clone, Debug, PartialEq)]
pub enum Computation {
    /// The recipe exists; one row per ingredient, in declaration order.
    Found(Vec<IngredientRow>),
    /// No recipe by that name.
    NotFound,
}

impl Computation {
    /// Whether the recipe was found.
    pub fn is_found(&self) -> bool {
        matches!(self, Computation::Found(_))
    }

    /// Borrow the rows; empty for [`Computation::NotFound`].
    pub fn rows(&self) -> &[IngredientRow] {
        match self {
            Computation::Found(rows) => rows,
            Computation::NotFound => &[],
        }
    }

    /// Take the rows; empty for [`Computation::NotFound`].
    pub fn into_rows(self) -> Vec<IngredientRow> {
        match self {
            Computation::Found(rows) => rows,
            Computation::NotFound => Vec::new(),
        }
    }
}

/// Round to two decimals, ties away from zero.
///
/// `0.125` becomes `0.13`, `2.175` becomes `2.18` and `-0.125` becomes
/// `-0.13`.
pub fn round2(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Sum of `count × coefficient` over every category of the table.
///
/// Categories of the table that were not submitted count as zero.
pub fn total_coefficient(table: &CoefficientTable, counts: &CategoryCounts) -> Decimal {
    table
        .iter()
        .map(|(label, coef)| Decimal::from(counts.get(label)) * coef)
        .sum()
}

/// Scales recipes from the catalog using the coefficient table.
#[derive(Clone, Debug, Default)]
pub struct Calculator {
    catalog: Catalog,
    coefficients: CoefficientTable,
}

impl Calculator {
    /// Create a calculator over the given tables.
    pub fn new(catalog: Catalog, coefficients: CoefficientTable) -> Self {
        Self {
            catalog,
            coefficients,
        }
    }

    /// Calculator over the built-in catalog and coefficient table.
    pub fn builtin() -> Self {
        Self::new(Catalog::builtin(), CoefficientTable::builtin())
    }

    /// The recipe catalog.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// The coefficient table.
    pub fn coefficients(&self) -> &CoefficientTable {
        &self.coefficients
    }

    /// Total coefficient of a submission against this calculator's table.
    pub fn total_coefficient(&self, counts: &CategoryCounts) -> Decimal {
        total_coefficient(&self.coefficients, counts)
    }

    /// Compute the scaled ingredient rows for a recipe.
    pub fn compute(&self, recipe_name: &str, counts: &CategoryCounts) -> Computation {
        let Some(recipe) = self.catalog.get(recipe_name) else {
            tracing::debug!(recipe = recipe_name, "recipe not in catalog");
            return Computation::NotFound;
        };

        let total = self.total_coefficient(counts);
        tracing::debug!(recipe = recipe_name, %total, "computed total coefficient");

        Computation::Found(
            recipe
                .ingredients
                .iter()
                .map(|i| IngredientRow::new(i.label.clone(), round2(i.per_serving * total)))
                .collect(),
        )
    }
}
