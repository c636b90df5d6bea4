//! HTML pages: recipe list and headcount form.

use std::fmt::Write;

use recettes_core::{Catalog, CoefficientTable};

use crate::request::RECIPE_FIELD;

const HEAD: &str = r#"<!DOCTYPE html>
<html lang="fr">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>Recettes</title>
</head>
<body>
"#;

const FOOT: &str = "</body>\n</html>\n";

/// Landing page: one link per recipe of the catalog.
pub fn landing(catalog: &Catalog) -> String {
    let mut html = String::from(HEAD);
    html.push_str("<h1>Choisissez une recette</h1>\n<ul>\n");
    for name in catalog.names() {
        let _ = writeln!(
            html,
            r#"<li><a href="/form?{RECIPE_FIELD}={}">{}</a></li>"#,
            encode_query_value(name),
            escape_html(name),
        );
    }
    html.push_str("</ul>\n");
    html.push_str(FOOT);
    html
}

/// Headcount form for one recipe, posting to `/submit`.
pub fn form(recipe: &str, table: &CoefficientTable) -> String {
    let recipe = escape_html(recipe);
    let mut html = String::from(HEAD);
    let _ = writeln!(html, "<h1>{recipe}</h1>");
    html.push_str("<form method=\"post\" action=\"/submit\">\n");
    let _ = writeln!(
        html,
        r#"<input type="hidden" name="{RECIPE_FIELD}" value="{recipe}">"#
    );
    for (category, coefficient) in table.iter() {
        let id = escape_html(category);
        let _ = writeln!(
            html,
            r#"<p><label for="{id}">{} (×{coefficient})</label> <input type="number" id="{id}" name="{id}" min="0" step="1" value="0"></p>"#,
            escape_html(&display_label(category)),
        );
    }
    html.push_str("<button type=\"submit\">Télécharger</button>\n</form>\n");
    html.push_str("<p><a href=\"/\">Retour</a></p>\n");
    html.push_str(FOOT);
    html
}

/// Human label for a category key: `bleu_garcon` → `Bleu garcon`.
fn display_label(category: &str) -> String {
    let spaced = category.replace('_', " ");
    let mut chars = spaced.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Escape text for HTML element content and quoted attributes.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Percent-encode a query-string value (RFC 3986 unreserved set kept as is).
pub fn encode_query_value(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for b in value.bytes() {
        if b.is_ascii_alphanumeric() || matches!(b, b'-' | b'_' | b'.' | b'~') {
            out.push(char::from(b));
        } else {
            let _ = write!(out, "%{b:02X}");
        }
    }
    out
}
