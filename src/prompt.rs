//! Prompt construction for the generative model.
//!
//! Everything in this module is pure string formatting: identical inputs
//! always produce byte-identical prompts, and building a prompt never
//! fails. Input preconditions (non-empty ingredients etc.) are enforced by
//! the planner before these functions are reached.

use crate::model::{Household, MeasurementSystem, Recipe};

/// Persona preamble shared by the single-meal prompts.
const ASSISTANT_PERSONA: &str =
    "You are a helpful culinary assistant specializing in budget-friendly meals.";

/// Fixed portion-scaling rule embedded in every weekly-plan prompt.
pub const PORTION_RULE: &str =
    "Teens generally eat adult-sized portions, while toddlers eat much smaller portions.";

fn measurement_instruction(system: MeasurementSystem) -> String {
    format!(
        "All ingredient quantities in recipes and the shopping list must be in the {} system.",
        system
    )
}

/// Avoidance clause for disliked ingredients.
///
/// Returns `None` when the dislikes text is absent or blank, so no
/// avoidance clause appears in the prompt at all.
fn dislikes_instruction(dislikes: Option<&str>) -> Option<String> {
    let trimmed = dislikes.map(str::trim).filter(|d| !d.is_empty())?;
    Some(format!(
        "Strictly avoid the following disliked ingredients in every recipe and in the shopping list: {}.",
        trimmed
    ))
}

fn household_description(household: &Household) -> String {
    format!(
        "The household consists of {} adult(s), {} teen(s), and {} toddler(s). {}",
        household.adults, household.teens, household.toddlers, PORTION_RULE
    )
}

/// Prompt for suggesting recipes from a free-text ingredient list.
pub fn single_meal_text_prompt(
    ingredients: &str,
    system: MeasurementSystem,
    dislikes: Option<&str>,
) -> String {
    let mut prompt = format!(
        "{persona} Based on the following ingredients: {ingredients}, suggest 3-5 delicious, \
         easy-to-make, and low-cost recipes for lunch or dinner. For each recipe, list the \
         ingredients I have, the ingredients I need to buy, and the step-by-step instructions. \
         Also, provide a simple consolidated shopping list of all the items I need to buy, \
         grouped by category (e.g., Produce, Dairy, Meat, Pantry Staples). {measurement}",
        persona = ASSISTANT_PERSONA,
        ingredients = ingredients,
        measurement = measurement_instruction(system),
    );
    if let Some(avoid) = dislikes_instruction(dislikes) {
        prompt.push(' ');
        prompt.push_str(&avoid);
    }
    prompt
}

/// Prompt for suggesting recipes from a photo of the user's fridge or pantry.
pub fn single_meal_image_prompt(system: MeasurementSystem, dislikes: Option<&str>) -> String {
    let mut prompt = format!(
        "{persona} Analyze the attached image of the inside of a fridge and/or cupboard. \
         Identify the available ingredients. Based on what you see, suggest 3-5 delicious, \
         easy-to-make, and low-cost recipes for lunch or dinner. For each recipe, list the \
         ingredients I have, the ingredients I need to buy, and the step-by-step instructions. \
         Also, provide a simple consolidated shopping list of all the items I need to buy, \
         grouped by category (e.g., Produce, Dairy, Meat, Pantry Staples). If the image is \
         unclear, make your best guess or state that you cannot identify the ingredients \
         clearly. {measurement}",
        persona = ASSISTANT_PERSONA,
        measurement = measurement_instruction(system),
    );
    if let Some(avoid) = dislikes_instruction(dislikes) {
        prompt.push(' ');
        prompt.push_str(&avoid);
    }
    prompt
}

/// Parameters for the weekly-plan prompt.
#[derive(Debug, Clone, Default)]
pub struct WeekPlanParams<'a> {
    /// Free-text pantry ingredients; may be empty when images carry the input.
    pub ingredients: &'a str,
    /// Whether images are attached to the request.
    pub has_images: bool,
    pub favorites: &'a [Recipe],
    pub household: Household,
    /// Free-text craving, e.g. "pasta"; blank means none.
    pub craving: &'a str,
    pub system: MeasurementSystem,
    pub dislikes: Option<&'a str>,
}

/// Prompt for the 7-day dinner plan.
pub fn week_plan_prompt(params: &WeekPlanParams<'_>) -> String {
    let favorite_names = params
        .favorites
        .iter()
        .map(|f| f.name.as_str())
        .collect::<Vec<_>>()
        .join(", ");

    let ingredients = if params.ingredients.trim().is_empty() {
        "None listed."
    } else {
        params.ingredients
    };
    let image_note = if params.has_images {
        "Analyze the attached images of the user's fridge and pantry to identify more ingredients."
    } else {
        "No images provided."
    };
    let favorites = if favorite_names.is_empty() {
        "None listed.".to_string()
    } else {
        favorite_names
    };
    let craving = if params.craving.trim().is_empty() {
        "None specified."
    } else {
        params.craving
    };

    let mut prompt = format!(
        "You are an expert meal planner helping users create a budget-friendly 7-day dinner plan.\n\
         \n\
         Here is the context:\n\
         1. **Household Size:** {household} This is a critical instruction. All ingredient \
         quantities for recipes AND the final shopping list MUST be adjusted to feed this number \
         of people accurately.\n\
         2. **Measurement System:** {measurement} This is also a critical instruction. Ensure all \
         units are correct.\n\
         3. **Available Ingredients (from text):** {ingredients}\n\
         4. **Available Ingredients (from images):** {image_note}\n\
         5. **User's Favorite Recipes:** {favorites} Please try to incorporate one or two of \
         these favorites into the plan if they are a good fit with the available ingredients.\n\
         6. **User's Craving:** \"{craving}\" If the user has specified a craving, please include \
         at least one meal in the weekly plan that satisfies it (e.g., if they crave \"pasta\", \
         include a pasta dish).\n\
         \n\
         Your task:\n\
         - Create a 7-day dinner plan with a unique, delicious, and easy-to-make recipe for each day.\n\
         - For each recipe, detail the ingredients the user has and what they need to buy. Ensure \
         the ingredient amounts are scaled for the specified household size and are in the \
         requested measurement system.\n\
         - Provide a single, consolidated shopping list for the entire week, containing all unique \
         ingredients the user needs to buy. Group this list by category. Ensure the shopping list \
         quantities are also scaled and in the correct measurement system.\n\
         - Ensure the plan is varied and cost-effective.",
        household = household_description(&params.household),
        measurement = measurement_instruction(params.system),
        ingredients = ingredients,
        image_note = image_note,
        favorites = favorites,
        craving = craving,
    );
    if let Some(avoid) = dislikes_instruction(params.dislikes) {
        prompt.push('\n');
        prompt.push_str("- ");
        prompt.push_str(&avoid);
    }
    prompt
}

#[cfg(test)]
mod tests {
    use super::*;

    fn favorite(name: &str) -> Recipe {
        Recipe {
            name: name.to_string(),
            description: String::new(),
            ingredients_you_have: vec![],
            ingredients_to_buy: vec![],
            instructions: vec![],
        }
    }

    #[test]
    fn test_text_prompt_is_deterministic() {
        let a = single_meal_text_prompt("eggs, rice", MeasurementSystem::Metric, Some("cilantro"));
        let b = single_meal_text_prompt("eggs, rice", MeasurementSystem::Metric, Some("cilantro"));
        assert_eq!(a, b);
    }

    #[test]
    fn test_text_prompt_embeds_ingredients_and_system() {
        let prompt = single_meal_text_prompt("eggs, rice", MeasurementSystem::Metric, None);
        assert!(prompt.contains("eggs, rice"));
        assert!(prompt.contains("metric system"));
        assert!(prompt.contains("3-5"));
        assert!(prompt.contains("shopping list"));
    }

    #[test]
    fn test_dislikes_clause_present_only_when_set() {
        let with = single_meal_text_prompt("eggs", MeasurementSystem::Imperial, Some("mushrooms, olives"));
        assert!(with.contains("mushrooms, olives"));
        assert!(with.contains("Strictly avoid"));

        let without = single_meal_text_prompt("eggs", MeasurementSystem::Imperial, None);
        assert!(!without.contains("Strictly avoid"));

        let blank = single_meal_text_prompt("eggs", MeasurementSystem::Imperial, Some("   "));
        assert_eq!(blank, without);
    }

    #[test]
    fn test_image_prompt_mentions_unclear_image_fallback() {
        let prompt = single_meal_image_prompt(MeasurementSystem::Imperial, None);
        assert!(prompt.contains("attached image"));
        assert!(prompt.contains("cannot identify the ingredients"));
    }

    #[test]
    fn test_week_plan_embeds_household_counts_and_portion_rule() {
        let params = WeekPlanParams {
            ingredients: "potatoes",
            household: Household {
                adults: 3,
                teens: 1,
                toddlers: 2,
            },
            system: MeasurementSystem::Metric,
            ..Default::default()
        };
        let prompt = week_plan_prompt(&params);
        assert!(prompt.contains("3 adult(s), 1 teen(s), and 2 toddler(s)"));
        assert!(prompt.contains(PORTION_RULE));
        assert!(prompt.contains("7-day dinner plan"));
    }

    #[test]
    fn test_week_plan_favorites_and_craving() {
        let favorites = vec![favorite("Chili"), favorite("Pad Thai")];
        let params = WeekPlanParams {
            ingredients: "rice",
            favorites: &favorites,
            craving: "tacos",
            ..Default::default()
        };
        let prompt = week_plan_prompt(&params);
        assert!(prompt.contains("Chili, Pad Thai"));
        assert!(prompt.contains("\"tacos\""));
    }

    #[test]
    fn test_week_plan_empty_optionals_get_placeholders() {
        let params = WeekPlanParams::default();
        let prompt = week_plan_prompt(&params);
        assert!(prompt.contains("None listed."));
        assert!(prompt.contains("None specified."));
        assert!(prompt.contains("No images provided."));
        assert!(!prompt.contains("Strictly avoid"));
    }

    #[test]
    fn test_week_plan_image_note_when_images_attached() {
        let params = WeekPlanParams {
            has_images: true,
            ..Default::default()
        };
        let prompt = week_plan_prompt(&params);
        assert!(prompt.contains("attached images"));
    }
}
