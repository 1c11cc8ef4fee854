use serde::{Deserialize, Serialize};
use std::fmt;

/// A single suggested recipe.
///
/// All five fields are required by the response contract; the ingredient
/// and instruction sequences may be empty but are never absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub name: String,
    pub description: String,
    /// Ingredients from the user's input that this recipe uses.
    pub ingredients_you_have: Vec<String>,
    /// Ingredients the recipe needs that the user must buy.
    pub ingredients_to_buy: Vec<String>,
    /// Step-by-step cooking instructions, order significant.
    pub instructions: Vec<String>,
}

/// A named grouping of shopping-list items (e.g. "Produce").
///
/// Item uniqueness is not enforced here; the model is trusted to
/// deduplicate when consolidating.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShoppingListCategory {
    pub category: String,
    pub items: Vec<String>,
}

/// Typed reply for the single-meal operations.
///
/// 3-5 recipes are expected but the count is not enforced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeResponse {
    pub recipes: Vec<Recipe>,
    pub shopping_list: Vec<ShoppingListCategory>,
}

/// One day of a weekly plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyPlanItem {
    /// Day label, e.g. "Monday".
    pub day: String,
    pub recipe: Recipe,
}

/// Typed reply for the weekly-plan operation.
///
/// 7 plan entries are expected but the length is not enforced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeekPlanResponse {
    pub daily_plan: Vec<DailyPlanItem>,
    pub shopping_list: Vec<ShoppingListCategory>,
}

/// Household composition used to scale recipe and shopping-list quantities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Household {
    pub adults: u32,
    pub teens: u32,
    pub toddlers: u32,
}

impl Default for Household {
    fn default() -> Self {
        Household {
            adults: 2,
            teens: 0,
            toddlers: 0,
        }
    }
}

/// Unit convention applied to every ingredient quantity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum MeasurementSystem {
    #[default]
    Imperial,
    Metric,
}

impl MeasurementSystem {
    pub fn as_str(&self) -> &'static str {
        match self {
            MeasurementSystem::Imperial => "imperial",
            MeasurementSystem::Metric => "metric",
        }
    }
}

impl fmt::Display for MeasurementSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
