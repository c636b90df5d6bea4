//! Built-in recipe catalog.
//!
//! Each recipe lists its ingredients with the quantity needed for one
//! standard portion. Declaration order is significant: it is the row order
//! of the exported spreadsheet.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// One ingredient line of a recipe.
#[derive(Clone, Debug, PartialEq)]
pub struct Ingredient {
    /// Display label, unit included (e.g. `"Semoule (g)"`).
    pub label: String,
    /// Quantity for one standard portion.
    pub per_serving: Decimal,
}

impl Ingredient {
    /// Create an ingredient line.
    pub fn new(label: impl Into<String>, per_serving: Decimal) -> Self {
        Self {
            label: label.into(),
            per_serving,
        }
    }
}

/// A named recipe and its ordered ingredient lines.
#[derive(Clone, Debug, PartialEq)]
pub struct Recipe {
    /// Recipe name as shown to users and submitted by the form.
    pub name: String,
    /// Ingredients in declaration order.
    pub ingredients: Vec<Ingredient>,
}

impl Recipe {
    fn from_table(name: &str, table: Vec<(&str, Decimal)>) -> Self {
        Self {
            name: name.to_string(),
            ingredients: table
                .into_iter()
                .map(|(label, qty)| Ingredient::new(label, qty))
                .collect(),
        }
    }
}

/// Read-only collection of recipes, keyed by exact name.
#[derive(Clone, Debug, Default)]
pub struct Catalog {
    recipes: Vec<Recipe>,
}

fn ratatouille_semoule() -> Vec<(&'static str, Decimal)> {
    vec![
        ("Poivrons rouges (unités)", dec!(0.25)),
        ("Poivrons jaunes (unités)", dec!(0.25)),
        ("Oignons (unités)", dec!(0.125)),
        ("Ail (gousses)", dec!(0.25)),
        ("Herbes de Provence (g)", dec!(1)),
        ("Tomates (unités)", dec!(0.5)),
        ("Courgettes (unités)", dec!(0.25)),
        ("Aubergines (unités)", dec!(0.25)),
        ("Semoule (g)", dec!(90)),
        ("Huile d'olive (cl)", dec!(2)),
    ]
}

fn risotto_champignons() -> Vec<(&'static str, Decimal)> {
    vec![
        ("Riz à risotto (g)", dec!(60)),
        ("Champignons de Paris (g)", dec!(70)),
        ("Oignon (unités)", dec!(0.5)),
        ("Ail (gousses)", dec!(0.5)),
        ("Bouillon de légumes ou de volaille (cl)", dec!(250)),
        ("Huile d'olive (cl)", dec!(10)),
        ("Parmesan (g)", dec!(20)),
    ]
}

fn riz_poulet_curry() -> Vec<(&'static str, Decimal)> {
    vec![
        ("Riz basmati ou thaï (g)", dec!(60)),
        ("Filet de Blanc de Poulet (filets)", dec!(1.5)),
        ("Crème liquide (cl)", dec!(20)),
        ("Oignon (unités)", dec!(0.5)),
        ("Ail (gousses)", dec!(0.5)),
        ("Poivron jaune ou rouge (unités)", dec!(0.5)),
        ("Huile d'olive (cl)", dec!(2)),
        ("Curcuma (g)", dec!(1)),
        ("Curry (g)", dec!(2)),
    ]
}

fn pates_aux_legumes() -> Vec<(&'static str, Decimal)> {
    vec![
        ("Pâtes (g)", dec!(90)),
        ("Courgette (unités)", dec!(0.25)),
        ("Poivron rouge (unités)", dec!(0.25)),
        ("Oignon (unités)", dec!(0.25)),
        ("Tomates concassées (cl)", dec!(10)),
        ("Huile d'olive (cl)", dec!(2)),
        ("Herbes de Provence (g)", dec!(1)),
    ]
}

fn spaghetti_carbonara() -> Vec<(&'static str, Decimal)> {
    vec![
        ("Spaghetti (g)", dec!(100)),
        ("Lardons fumés (g)", dec!(50)),
        ("Crème liquide (cl)", dec!(20)),
        ("Parmesan râpé (g)", dec!(15)),
    ]
}

impl Catalog {
    /// Create a catalog from explicit recipes.
    ///
    /// When two recipes share a name, lookups return the first one.
    pub fn new(recipes: Vec<Recipe>) -> Self {
        Self { recipes }
    }

    /// The catalog the service ships with.
    pub fn builtin() -> Self {
        Self::new(vec![
            Recipe::from_table("Ratatouille semoule", ratatouille_semoule()),
            Recipe::from_table("Risotto champignons", risotto_champignons()),
            Recipe::from_table("Riz poulet curry", riz_poulet_curry()),
            Recipe::from_table("Pates aux legumes", pates_aux_legumes()),
            Recipe::from_table("Spaghetti carbonara", spaghetti_carbonara()),
        ])
    }

    /// Look up a recipe by exact name.
    pub fn get(&self, name: &str) -> Option<&Recipe> {
        self.recipes.iter().find(|r| r.name == name)
    }

    /// Recipe names in declaration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.recipes.iter().map(|r| r.name.as_str())
    }

    /// All recipes in declaration order.
    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    /// Number of recipes.
    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    /// Whether the catalog holds no recipe.
    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }
}
