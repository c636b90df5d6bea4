//! Property-based tests for the calculator.

#[allow(clippy::unwrap_used)]
mod tests {
    use crate::{round2, total_coefficient, Calculator, CategoryCounts, CoefficientTable};
    use proptest::prelude::*;
    use rust_decimal::Decimal;

    fn counts_strategy() -> impl Strategy<Value = CategoryCounts> {
        let labels: Vec<String> = CoefficientTable::builtin()
            .categories()
            .map(str::to_string)
            .collect();
        proptest::collection::vec(0u32..1_000, labels.len()).prop_map(move |values| {
            labels.iter().cloned().zip(values).collect::<CategoryCounts>()
        })
    }

    fn recipe_strategy() -> impl Strategy<Value = String> {
        let names: Vec<String> = Calculator::builtin()
            .catalog()
            .names()
            .map(str::to_string)
            .collect();
        proptest::sample::select(names)
    }

    proptest! {
        #[test]
        fn test_doubling_counts_doubles_total(counts in counts_strategy()) {
            let table = CoefficientTable::builtin();
            let total = total_coefficient(&table, &counts);
            let doubled = total_coefficient(&table, &counts.scaled(2));
            prop_assert_eq!(doubled, Decimal::TWO * total);
        }

        #[test]
        fn test_doubling_counts_doubles_unrounded_quantities(
            name in recipe_strategy(),
            counts in counts_strategy(),
        ) {
            let calc = Calculator::builtin();
            let recipe = calc.catalog().get(&name).unwrap();
            let total = calc.total_coefficient(&counts);
            let doubled = calc.total_coefficient(&counts.scaled(2));
            for ingredient in &recipe.ingredients {
                prop_assert_eq!(
                    ingredient.per_serving * doubled,
                    Decimal::TWO * (ingredient.per_serving * total)
                );
            }
        }

        #[test]
        fn test_one_row_per_ingredient(name in recipe_strategy(), counts in counts_strategy()) {
            let calc = Calculator::builtin();
            let rows = calc.compute(&name, &counts).into_rows();
            let recipe = calc.catalog().get(&name).unwrap();
            prop_assert_eq!(rows.len(), recipe.ingredients.len());
            for (row, ingredient) in rows.iter().zip(&recipe.ingredients) {
                prop_assert_eq!(&row.label, &ingredient.label);
                prop_assert!(row.quantity >= Decimal::ZERO);
                prop_assert!(row.quantity.scale() <= 2);
            }
        }

        #[test]
        fn test_round2_idempotent(mantissa in -1_000_000_000i64..1_000_000_000, scale in 0u32..6) {
            let once = round2(Decimal::new(mantissa, scale));
            prop_assert_eq!(round2(once), once);
        }
    }
}
