use build_estimator::linker::{rewrite_links, LinkOptions};
use build_estimator::parser::parse_link_rules_file;
use pretty_assertions::assert_eq;

fn fixture(name: &str) -> String {
    format!("{}/tests/fixtures/{name}", env!("CARGO_MANIFEST_DIR"))
}

fn article() -> String {
    std::fs::read_to_string(fixture("article.html")).unwrap()
}

fn inserted_urls(options: &LinkOptions) -> Vec<String> {
    let rules = parse_link_rules_file(fixture("link_rules.json")).unwrap();
    rewrite_links(&article(), &rules, options)
        .unwrap()
        .inserted
        .into_iter()
        .map(|link| link.url)
        .collect()
}

#[test]
fn links_article_in_document_order() {
    assert_eq!(
        inserted_urls(&LinkOptions::default()),
        vec![
            "/services/extension",
            "/devis",
            "/blog/permis-de-construire",
            "/services/maison-passive",
        ]
    );
}

#[test]
fn rewritten_article_keeps_headings_and_existing_links() {
    let rules = parse_link_rules_file(fixture("link_rules.json")).unwrap();
    let rewrite = rewrite_links(&article(), &rules, &LinkOptions::default()).unwrap();

    assert!(rewrite.html.contains("<h1>Réussir son extension</h1>"));
    assert!(rewrite
        .html
        .contains("Une <a href=\"/services/extension\">extension</a> bien pensée"));
    assert!(rewrite
        .html
        .contains("Pour une extension en bois"));
    assert!(rewrite
        .html
        .contains("<a href=\"/contact\">Contactez-nous pour un devis</a>"));
    assert_eq!(rewrite.html.matches("href=\"/devis\"").count(), 1);
}

#[test]
fn limit_and_current_page() {
    let limited = LinkOptions {
        max_links: 2,
        ..LinkOptions::default()
    };
    assert_eq!(
        inserted_urls(&limited),
        vec!["/services/extension", "/devis"]
    );

    let on_devis_page = LinkOptions {
        current_path: Some("/devis".to_string()),
        ..LinkOptions::default()
    };
    assert_eq!(
        inserted_urls(&on_devis_page),
        vec![
            "/services/extension",
            "/blog/permis-de-construire",
            "/services/maison-passive",
        ]
    );
}
