//! Response parsing and validation.
//!
//! Validation is deliberately shallow: the structured-output schema sent
//! with the request constrains the model's reply, so only the presence and
//! shape of the required top-level arrays is checked here before the typed
//! decode. No semantic checks (recipe counts, plan length, item
//! uniqueness) are applied.

use serde_json::Value;

use crate::error::CompanionError;
use crate::model::{RecipeResponse, WeekPlanResponse};

/// Check that `field` exists on `value` and is an array.
fn require_array(value: &Value, field: &str) -> Result<(), CompanionError> {
    match value.get(field) {
        Some(v) if v.is_array() => Ok(()),
        _ => Err(CompanionError::Validation(format!(
            "missing {} array",
            field
        ))),
    }
}

/// Parse and validate a single-meal response.
///
/// # Errors
/// - `CompanionError::Parse` if the raw text is not valid JSON
/// - `CompanionError::Validation` naming the specific missing field if
///   `recipes` or `shoppingList` is absent or not an array
pub fn parse_recipe_response(raw: &str) -> Result<RecipeResponse, CompanionError> {
    let value: Value = serde_json::from_str(raw.trim())?;
    require_array(&value, "recipes")?;
    require_array(&value, "shoppingList")?;
    serde_json::from_value(value).map_err(|e| CompanionError::Validation(e.to_string()))
}

/// Parse and validate a weekly-plan response.
///
/// # Errors
/// - `CompanionError::Parse` if the raw text is not valid JSON
/// - `CompanionError::Validation` naming the specific missing field if
///   `dailyPlan` or `shoppingList` is absent or not an array
pub fn parse_week_plan_response(raw: &str) -> Result<WeekPlanResponse, CompanionError> {
    let value: Value = serde_json::from_str(raw.trim())?;
    require_array(&value, "dailyPlan")?;
    require_array(&value, "shoppingList")?;
    serde_json::from_value(value).map_err(|e| CompanionError::Validation(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Recipe;

    fn recipe_json(name: &str) -> String {
        format!(
            r#"{{
                "name": "{}",
                "description": "desc",
                "ingredientsYouHave": ["rice"],
                "ingredientsToBuy": ["soy sauce"],
                "instructions": ["Cook.", "Eat."]
            }}"#,
            name
        )
    }

    #[test]
    fn test_valid_recipe_response() {
        let raw = format!(
            r#"{{
                "recipes": [{}],
                "shoppingList": [{{ "category": "Pantry", "items": ["soy sauce"] }}]
            }}"#,
            recipe_json("Fried Rice")
        );

        let response = parse_recipe_response(&raw).unwrap();
        assert_eq!(response.recipes.len(), 1);
        assert_eq!(response.recipes[0].name, "Fried Rice");
        assert_eq!(response.shopping_list[0].category, "Pantry");
    }

    #[test]
    fn test_missing_recipes_names_the_field() {
        let result = parse_recipe_response(r#"{"shoppingList": []}"#);
        match result {
            Err(CompanionError::Validation(msg)) => assert_eq!(msg, "missing recipes array"),
            other => panic!("expected Validation error, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn test_missing_shopping_list_names_the_field() {
        let result = parse_recipe_response(r#"{"recipes": []}"#);
        match result {
            Err(CompanionError::Validation(msg)) => {
                assert_eq!(msg, "missing shoppingList array")
            }
            other => panic!("expected Validation error, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn test_non_array_field_is_rejected() {
        let result = parse_recipe_response(r#"{"recipes": "lots", "shoppingList": []}"#);
        assert!(matches!(result, Err(CompanionError::Validation(_))));
    }

    #[test]
    fn test_malformed_json_is_a_parse_error() {
        let result = parse_recipe_response("not json");
        assert!(matches!(result, Err(CompanionError::Parse(_))));

        let weekly = parse_week_plan_response("not json");
        assert!(matches!(weekly, Err(CompanionError::Parse(_))));
    }

    #[test]
    fn test_week_plan_preserves_day_order() {
        let days = [
            "Monday", "Tuesday", "Wednesday", "Thursday", "Friday", "Saturday", "Sunday",
        ];
        let plan_items: Vec<String> = days
            .iter()
            .map(|day| format!(r#"{{ "day": "{}", "recipe": {} }}"#, day, recipe_json(day)))
            .collect();
        let raw = format!(
            r#"{{ "dailyPlan": [{}], "shoppingList": [{{ "category": "Produce", "items": ["onion"] }}] }}"#,
            plan_items.join(",")
        );

        let response = parse_week_plan_response(&raw).unwrap();
        assert_eq!(response.daily_plan.len(), 7);
        for (item, day) in response.daily_plan.iter().zip(days.iter()) {
            assert_eq!(item.day, *day);
        }
    }

    #[test]
    fn test_week_plan_missing_daily_plan_names_the_field() {
        let result = parse_week_plan_response(r#"{"shoppingList": []}"#);
        match result {
            Err(CompanionError::Validation(msg)) => assert_eq!(msg, "missing dailyPlan array"),
            other => panic!("expected Validation error, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn test_recipe_round_trip_through_validator() {
        let recipe = Recipe {
            name: "Stew".to_string(),
            description: "Hearty.".to_string(),
            ingredients_you_have: vec![],
            ingredients_to_buy: vec!["beef".to_string(), "carrots".to_string()],
            instructions: (1..=9).map(|i| format!("Step {}", i)).collect(),
        };
        let raw = serde_json::to_string(&serde_json::json!({
            "recipes": [recipe.clone()],
            "shoppingList": []
        }))
        .unwrap();

        let response = parse_recipe_response(&raw).unwrap();
        assert_eq!(response.recipes[0], recipe);
    }
}
