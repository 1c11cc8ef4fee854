use mockito::{Matcher, Server};

use culinary_companion::{
    CompanionError, GeminiProvider, MealPlanner, MeasurementSystem,
};

fn mock_model_path() -> &'static str {
    "/v1beta/models/gemini-2.5-flash:generateContent?key=fake_api_key"
}

fn planner_against(server: &Server) -> MealPlanner {
    let provider = GeminiProvider::with_base_url(
        "fake_api_key".to_string(),
        server.url(),
        "gemini-2.5-flash".to_string(),
    );
    MealPlanner::new(Box::new(provider))
}

fn candidate_body(inner_json: &str) -> String {
    serde_json::json!({
        "candidates": [{
            "content": { "parts": [{ "text": inner_json }] }
        }]
    })
    .to_string()
}

#[tokio::test]
async fn full_text_flow_over_http() {
    let mut server = Server::new_async().await;
    let inner = r#"{
        "recipes": [{
            "name": "Shakshuka",
            "description": "Eggs in tomato sauce.",
            "ingredientsYouHave": ["eggs", "tomatoes"],
            "ingredientsToBuy": ["feta"],
            "instructions": ["Simmer sauce.", "Poach eggs."]
        }],
        "shoppingList": [{ "category": "Dairy & Eggs", "items": ["feta"] }]
    }"#;
    let mock = server
        .mock("POST", mock_model_path())
        .match_body(Matcher::PartialJson(serde_json::json!({
            "generationConfig": { "responseMimeType": "application/json" }
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(candidate_body(inner))
        .create_async()
        .await;

    let planner = planner_against(&server);
    let response = planner
        .generate_recipes_from_text("eggs, tomatoes", MeasurementSystem::Imperial, None)
        .await
        .unwrap();

    assert_eq!(response.recipes.len(), 1);
    assert_eq!(response.recipes[0].name, "Shakshuka");
    assert_eq!(response.shopping_list[0].items, vec!["feta"]);
    mock.assert_async().await;
}

#[tokio::test]
async fn upstream_error_surfaces_as_ai_service_error() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", mock_model_path())
        .with_status(500)
        .with_body("internal error")
        .create_async()
        .await;

    let planner = planner_against(&server);
    let result = planner
        .generate_recipes_from_text("eggs", MeasurementSystem::Imperial, None)
        .await;

    match result {
        Err(CompanionError::AiService(msg)) => assert!(msg.contains("500")),
        other => panic!("expected AiService error, got {:?}", other.map(|_| ())),
    }
    mock.assert_async().await;
}

#[tokio::test]
async fn model_reply_missing_field_fails_validation_not_parse() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", mock_model_path())
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(candidate_body(r#"{"recipes": []}"#))
        .create_async()
        .await;

    let planner = planner_against(&server);
    let result = planner
        .generate_recipes_from_text("eggs", MeasurementSystem::Imperial, None)
        .await;

    match result {
        Err(CompanionError::Validation(msg)) => assert!(msg.contains("shoppingList")),
        other => panic!("expected Validation error, got {:?}", other.map(|_| ())),
    }
    mock.assert_async().await;
}
