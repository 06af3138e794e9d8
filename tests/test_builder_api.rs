use recipe_intake::{
    BoundingBox, ImportError, ImportResult, IntakeConfig, LineClassification, RecipeImporter,
    RecognizedCandidate, RecognizedObservation,
};
use std::time::Duration;

const RECIPE_HTML: &str = r#"
    <!DOCTYPE html>
    <html>
    <head>
        <script type="application/ld+json">
        {
            "@context": "https://schema.org",
            "@type": "Recipe",
            "name": "Builder Brownies",
            "recipeIngredient": ["200g chocolate", "3 eggs"],
            "recipeInstructions": "Melt the chocolate.\nBeat in the eggs.",
            "cookTime": "PT25M"
        }
        </script>
    </head>
    <body></body>
    </html>
"#;

#[tokio::test]
async fn test_builder_url_to_recipe() {
    let mut server = mockito::Server::new_async().await;
    let _m = server
        .mock("GET", "/brownies")
        .with_status(200)
        .with_header("content-type", "text/html")
        .with_body(RECIPE_HTML)
        .create_async()
        .await;

    let url = format!("{}/brownies", server.url());
    let result = RecipeImporter::builder()
        .url(&url)
        .timeout(Duration::from_secs(5))
        .config(IntakeConfig::default())
        .build()
        .await;

    match result.unwrap() {
        ImportResult::Recipe(recipe) => {
            assert_eq!(recipe.title, "Builder Brownies");
            assert_eq!(recipe.cook_duration, 1500);
            assert_eq!(recipe.source_url, url);
        }
        ImportResult::Lines(_) => panic!("Expected Recipe result"),
    }
}

#[tokio::test]
async fn test_builder_http_error() {
    let mut server = mockito::Server::new_async().await;
    let _m = server
        .mock("GET", "/missing")
        .with_status(404)
        .create_async()
        .await;

    let result = RecipeImporter::builder()
        .url(format!("{}/missing", server.url()))
        .config(IntakeConfig::default())
        .build()
        .await;

    assert!(matches!(result, Err(ImportError::FetchError(_))));
}

#[tokio::test]
async fn test_builder_page_without_recipe() {
    let mut server = mockito::Server::new_async().await;
    let _m = server
        .mock("GET", "/blog")
        .with_status(200)
        .with_body("<html><body><p>Just a blog post.</p></body></html>")
        .create_async()
        .await;

    let result = RecipeImporter::builder()
        .url(format!("{}/blog", server.url()))
        .config(IntakeConfig::default())
        .build()
        .await;

    assert!(matches!(result, Err(ImportError::NoRecipeFound)));
}

#[tokio::test]
async fn test_builder_sends_configured_user_agent() {
    let mut server = mockito::Server::new_async().await;
    let m = server
        .mock("GET", "/ua")
        .match_header("user-agent", "TestAgent/1.0")
        .with_status(200)
        .with_body(RECIPE_HTML)
        .create_async()
        .await;

    let mut config = IntakeConfig::default();
    config.fetch.user_agent = "TestAgent/1.0".to_string();

    let result = RecipeImporter::builder()
        .url(format!("{}/ua", server.url()))
        .config(config)
        .build()
        .await;

    assert!(result.is_ok());
    m.assert_async().await;
}

#[tokio::test]
async fn test_builder_html_source() {
    let result = RecipeImporter::builder()
        .html(RECIPE_HTML, "https://example.com/brownies")
        .config(IntakeConfig::default())
        .build()
        .await
        .unwrap();

    match result {
        ImportResult::Recipe(recipe) => {
            assert_eq!(recipe.ingredients, vec!["200g chocolate", "3 eggs"]);
            assert_eq!(recipe.directions, vec!["Melt the chocolate.", "Beat in the eggs."]);
        }
        ImportResult::Lines(_) => panic!("Expected Recipe result"),
    }
}

#[tokio::test]
async fn test_builder_scanned_text() {
    let result = RecipeImporter::builder()
        .scanned_text("Hummus\nIngredients\n1 can chickpeas\nDirections\nBlend until smooth.")
        .config(IntakeConfig::default())
        .build()
        .await
        .unwrap();

    match result {
        ImportResult::Lines(lines) => {
            let kinds: Vec<_> = lines.iter().map(|l| l.classification).collect();
            assert_eq!(
                kinds,
                vec![
                    LineClassification::Title,
                    LineClassification::Skip,
                    LineClassification::Ingredient,
                    LineClassification::Skip,
                    LineClassification::Direction,
                ]
            );
        }
        ImportResult::Recipe(_) => panic!("Expected Lines result"),
    }
}

#[tokio::test]
async fn test_builder_observations() {
    let observation = |text: &str, y: f64| RecognizedObservation {
        bounding_box: BoundingBox {
            x: 0.1,
            y,
            width: 0.6,
            height: 0.03,
        },
        candidates: vec![RecognizedCandidate {
            text: text.to_string(),
            confidence: 0.9,
        }],
    };

    let result = RecipeImporter::builder()
        .observations(vec![
            observation("2 cups oats", 0.4),
            observation("Overnight Oats", 0.1),
        ])
        .config(IntakeConfig::default())
        .build()
        .await
        .unwrap();

    match result {
        ImportResult::Lines(lines) => {
            assert_eq!(lines[0].text, "Overnight Oats");
            assert_eq!(lines[0].classification, LineClassification::Title);
            assert_eq!(lines[1].classification, LineClassification::Ingredient);
        }
        ImportResult::Recipe(_) => panic!("Expected Lines result"),
    }
}

#[tokio::test]
async fn test_builder_without_source() {
    let result = RecipeImporter::builder().build().await;
    assert!(matches!(result, Err(ImportError::BuilderError(_))));
}

#[tokio::test]
async fn test_builder_empty_inputs() {
    let result = RecipeImporter::builder()
        .scanned_text("   ")
        .config(IntakeConfig::default())
        .build()
        .await;
    assert!(matches!(result, Err(ImportError::InvalidInput(_))));

    let result = RecipeImporter::builder()
        .html("", "https://example.com")
        .config(IntakeConfig::default())
        .build()
        .await;
    assert!(matches!(result, Err(ImportError::InvalidInput(_))));

    let result = RecipeImporter::builder()
        .observations(Vec::new())
        .config(IntakeConfig::default())
        .build()
        .await;
    assert!(matches!(result, Err(ImportError::InvalidInput(_))));
}
