//! Integration tests for `POST /submit`.

use axum::http::{header, StatusCode};

use crate::common::{document_bytes, entry, entry_names, shared_strings, sheet_xml, TestHarness};

#[tokio::test]
async fn test_submit_returns_archive() {
    let harness = TestHarness::new();
    let resp = harness
        .submit("recette=Ratatouille+semoule&bleu_garcon=2&cheffe=1")
        .await;

    assert_eq!(resp.status, StatusCode::OK);
    assert_eq!(resp.header(header::CONTENT_TYPE), "application/zip");
    assert_eq!(
        resp.header(header::CONTENT_DISPOSITION),
        "attachment; filename=\"ratatouille_semoule_recette.zip\"; \
         filename*=UTF-8''ratatouille_semoule_recette.zip"
    );
    assert_eq!(
        entry_names(&resp.body),
        vec![
            "ingredients_ratatouille_semoule.xlsx".to_string(),
            "ratatouille_semoule.pdf".to_string(),
        ]
    );
}

#[tokio::test]
async fn test_submit_scales_quantities() {
    let harness = TestHarness::new();
    let resp = harness
        .submit("recette=Ratatouille%20semoule&bleu_garcon=2&cheffe=1")
        .await;
    assert_eq!(resp.status, StatusCode::OK);

    let xlsx = entry(&resp.body, "ingredients_ratatouille_semoule.xlsx");
    let sheet = sheet_xml(&xlsx);
    // header + 10 ingredients
    assert_eq!(sheet.matches("<row ").count(), 11);
    assert!(sheet.contains("<v>270</v>"));
    assert!(sheet.contains("<v>6</v>"));
    assert!(sheet.contains("<v>0.75</v>"));

    let strings = shared_strings(&xlsx);
    assert!(strings.contains("Ingrédient"));
    assert!(strings.contains("Quantité totale"));
    assert!(strings.contains("Semoule (g)"));
}

#[tokio::test]
async fn test_submit_rounds_decimal_ties_up() {
    let harness = TestHarness::new();
    // total 8.7, Poivrons 0.25 × 8.7 = 2.175
    let resp = harness
        .submit("recette=Ratatouille+semoule&rouge_garcon=1&maxi_gros_mangeur=5")
        .await;
    assert_eq!(resp.status, StatusCode::OK);

    let sheet = sheet_xml(&entry(&resp.body, "ingredients_ratatouille_semoule.xlsx"));
    assert!(sheet.contains("<v>2.18</v>"));
    assert!(!sheet.contains("<v>2.17</v>"));
}

#[tokio::test]
async fn test_submit_non_ascii_name_has_encoded_filename() {
    let harness = TestHarness::new();
    harness.add_document("Crème brûlée");
    let resp = harness.submit("recette=Cr%C3%A8me+br%C3%BBl%C3%A9e").await;

    assert_eq!(resp.status, StatusCode::OK);
    assert_eq!(
        resp.header(header::CONTENT_DISPOSITION),
        "attachment; filename=\"cr_me_br_l_e_recette.zip\"; \
         filename*=UTF-8''cr%C3%A8me_br%C3%BBl%C3%A9e_recette.zip"
    );
    assert!(entry_names(&resp.body).contains(&"crème_brûlée.pdf".to_string()));
}

#[tokio::test]
async fn test_submit_includes_document_bytes() {
    let harness = TestHarness::new();
    let resp = harness.submit("recette=Spaghetti+carbonara&chef=3").await;
    assert_eq!(resp.status, StatusCode::OK);
    assert_eq!(
        entry(&resp.body, "spaghetti_carbonara.pdf"),
        document_bytes("Spaghetti carbonara")
    );
}

#[tokio::test]
async fn test_submit_all_zero_still_produces_archive() {
    let harness = TestHarness::new();
    let resp = harness.submit("recette=Risotto+champignons").await;
    assert_eq!(resp.status, StatusCode::OK);

    let xlsx = entry(&resp.body, "ingredients_risotto_champignons.xlsx");
    let sheet = sheet_xml(&xlsx);
    assert_eq!(sheet.matches("<row ").count(), 8);
    assert!(!sheet.contains("<v>60</v>"));
}

#[tokio::test]
async fn test_submit_unknown_recipe_is_404() {
    let harness = TestHarness::new();
    let resp = harness.submit("recette=Tarte+tatin&chef=2").await;

    assert_eq!(resp.status, StatusCode::NOT_FOUND);
    let expected = harness.dir.path().join("tarte_tatin.pdf");
    assert_eq!(
        resp.text(),
        format!("Erreur : le fichier {} est introuvable.", expected.display())
    );
}

#[tokio::test]
async fn test_submit_missing_document_is_404() {
    let harness = TestHarness::without_documents();
    let resp = harness.submit("recette=Riz+poulet+curry&orange=4").await;

    assert_eq!(resp.status, StatusCode::NOT_FOUND);
    assert!(resp.text().starts_with("Erreur : le fichier "));
    assert!(resp.text().ends_with("riz_poulet_curry.pdf est introuvable."));
}

#[tokio::test]
async fn test_submit_document_added_later_is_found() {
    let harness = TestHarness::without_documents();
    assert_eq!(
        harness.submit("recette=Pates+aux+legumes").await.status,
        StatusCode::NOT_FOUND
    );

    harness.add_document("Pates aux legumes");
    assert_eq!(
        harness.submit("recette=Pates+aux+legumes").await.status,
        StatusCode::OK
    );
}

#[tokio::test]
async fn test_submit_non_numeric_count_is_400() {
    let harness = TestHarness::new();
    let resp = harness
        .submit("recette=Ratatouille+semoule&cheffe=beaucoup")
        .await;
    assert_eq!(resp.status, StatusCode::BAD_REQUEST);
    assert!(resp.text().contains("cheffe"));
}

#[tokio::test]
async fn test_submit_negative_count_is_400() {
    let harness = TestHarness::new();
    let resp = harness.submit("recette=Ratatouille+semoule&chef=-2").await;
    assert_eq!(resp.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_submit_missing_recipe_is_400() {
    let harness = TestHarness::new();
    let resp = harness.submit("chef=2").await;
    assert_eq!(resp.status, StatusCode::BAD_REQUEST);
    assert!(resp.text().contains("recette"));
}

#[tokio::test]
async fn test_submit_traversal_name_is_404() {
    let harness = TestHarness::new();
    let resp = harness.submit("recette=..%2F..%2Fetc%2Fpasswd").await;
    assert_eq!(resp.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_submit_get_not_allowed() {
    let harness = TestHarness::new();
    let resp = harness.get("/submit").await;
    assert_eq!(resp.status, StatusCode::METHOD_NOT_ALLOWED);
}
