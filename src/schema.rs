//! Structured-output schema descriptors.
//!
//! These are handed to the generative model as a response-shape constraint
//! so the reply is expected to arrive as already-valid JSON matching one of
//! the two top-level shapes. Validation stays shallow on our side because
//! of this contract (see `validate`).

use serde_json::{json, Value};

/// Schema for a single recipe object.
fn recipe_object_schema() -> Value {
    json!({
        "type": "object",
        "properties": {
            "name": { "type": "string", "description": "The title of the recipe." },
            "description": { "type": "string", "description": "A brief, enticing description of the dish." },
            "ingredientsYouHave": {
                "type": "array",
                "description": "List of ingredients from the input that are used in this recipe.",
                "items": { "type": "string" }
            },
            "ingredientsToBuy": {
                "type": "array",
                "description": "List of ingredients required for the recipe that are not in the input list.",
                "items": { "type": "string" }
            },
            "instructions": {
                "type": "array",
                "description": "Step-by-step cooking instructions.",
                "items": { "type": "string" }
            }
        },
        "required": ["name", "description", "ingredientsYouHave", "ingredientsToBuy", "instructions"]
    })
}

/// Schema for the consolidated, categorized shopping list.
fn shopping_list_schema() -> Value {
    json!({
        "type": "array",
        "description": "A consolidated list of all unique ingredients to buy, grouped by category (e.g., Produce, Dairy, Meat, Pantry).",
        "items": {
            "type": "object",
            "properties": {
                "category": { "type": "string", "description": "The category of the ingredients (e.g., 'Produce', 'Dairy & Eggs', 'Meat & Fish', 'Pantry Staples')." },
                "items": {
                    "type": "array",
                    "description": "A list of ingredients in this category.",
                    "items": { "type": "string" }
                }
            },
            "required": ["category", "items"]
        }
    })
}

/// Top-level shape for the single-meal operations.
pub fn recipe_response_schema() -> Value {
    json!({
        "type": "object",
        "properties": {
            "recipes": {
                "type": "array",
                "description": "A list of 3-5 recipe suggestions.",
                "items": recipe_object_schema()
            },
            "shoppingList": shopping_list_schema()
        },
        "required": ["recipes", "shoppingList"]
    })
}

/// Top-level shape for the weekly-plan operation.
pub fn week_plan_schema() -> Value {
    json!({
        "type": "object",
        "properties": {
            "dailyPlan": {
                "type": "array",
                "description": "A 7-day meal plan, with one recipe per day.",
                "items": {
                    "type": "object",
                    "properties": {
                        "day": { "type": "string", "description": "The day of the week (e.g., 'Monday')." },
                        "recipe": recipe_object_schema()
                    },
                    "required": ["day", "recipe"]
                }
            },
            "shoppingList": shopping_list_schema()
        },
        "required": ["dailyPlan", "shoppingList"]
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recipe_schema_required_fields() {
        let schema = recipe_response_schema();
        let required = schema["required"].as_array().unwrap();
        assert!(required.contains(&json!("recipes")));
        assert!(required.contains(&json!("shoppingList")));

        let recipe_required = schema["properties"]["recipes"]["items"]["required"]
            .as_array()
            .unwrap();
        assert_eq!(recipe_required.len(), 5);
        assert!(recipe_required.contains(&json!("ingredientsYouHave")));
    }

    #[test]
    fn test_week_plan_schema_shape() {
        let schema = week_plan_schema();
        assert_eq!(schema["properties"]["dailyPlan"]["type"], "array");
        let item_required = schema["properties"]["dailyPlan"]["items"]["required"]
            .as_array()
            .unwrap();
        assert!(item_required.contains(&json!("day")));
        assert!(item_required.contains(&json!("recipe")));
    }

    #[test]
    fn test_schemas_are_deterministic() {
        assert_eq!(recipe_response_schema(), recipe_response_schema());
        assert_eq!(week_plan_schema(), week_plan_schema());
    }
}
