//! Recipe name normalization.
//!
//! The same normalized form names the static document on disk and both
//! entries of the downloaded archive, so every caller goes through
//! [`normalize_name`].

/// Normalize a recipe name to lowercase snake form.
///
/// Performs the following transformations:
/// 1. Trims leading/trailing whitespace
/// 2. Converts to lowercase
/// 3. Collapses each run of whitespace into a single underscore
///
/// # Examples
///
/// ```
/// use recettes_core::names::normalize_name;
///
/// assert_eq!(normalize_name("Ratatouille semoule"), "ratatouille_semoule");
/// assert_eq!(normalize_name("  Riz   poulet curry "), "riz_poulet_curry");
/// assert_eq!(normalize_name("CARBONARA"), "carbonara");
/// ```
pub fn normalize_name(name: &str) -> String {
    name.trim()
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<&str>>()
        .join("_")
}
