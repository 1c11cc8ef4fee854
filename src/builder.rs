use std::path::PathBuf;

use crate::config::CompanionConfig;
use crate::error::CompanionError;
use crate::model::{Household, MeasurementSystem, Recipe, RecipeResponse, WeekPlanResponse};
use crate::planner::MealPlanner;
use crate::store::{KeyValueStore, Settings};

/// Result of a suggestion request
#[derive(Debug, Clone)]
pub enum SuggestionResult {
    /// 3-5 single-meal recipe suggestions with a shopping list
    Recipes(RecipeResponse),
    /// A 7-day dinner plan with a weekly shopping list
    WeekPlan(WeekPlanResponse),
}

/// Builder for configuring and executing a suggestion request
///
/// # Example
/// ```no_run
/// use culinary_companion::Companion;
///
/// # #[tokio::main]
/// # async fn main() -> Result<(), culinary_companion::CompanionError> {
/// let result = Companion::builder()
///     .ingredients("eggs, rice, spring onions")
///     .dislikes("cilantro")
///     .build()
///     .await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Default)]
pub struct CompanionBuilder {
    ingredients: Option<String>,
    images: Vec<PathBuf>,
    weekly: bool,
    favorites: Vec<Recipe>,
    household: Household,
    craving: Option<String>,
    system: MeasurementSystem,
    dislikes: Option<String>,
    api_key: Option<String>,
    model: Option<String>,
}

impl CompanionBuilder {
    /// Set the free-text ingredient list
    pub fn ingredients(mut self, ingredients: impl Into<String>) -> Self {
        self.ingredients = Some(ingredients.into());
        self
    }

    /// Attach an image of the user's fridge or pantry
    ///
    /// May be called repeatedly in weekly mode; single-meal mode accepts
    /// exactly one image.
    pub fn image(mut self, path: impl Into<PathBuf>) -> Self {
        self.images.push(path.into());
        self
    }

    /// Request a 7-day dinner plan instead of single-meal suggestions
    pub fn weekly(mut self) -> Self {
        self.weekly = true;
        self
    }

    /// Set the favorite recipes the plan should try to include
    pub fn favorites(mut self, favorites: Vec<Recipe>) -> Self {
        self.favorites = favorites;
        self
    }

    /// Set the household composition used to scale quantities
    pub fn household(mut self, household: Household) -> Self {
        self.household = household;
        self
    }

    /// Set a craving at least one planned meal should satisfy
    pub fn craving(mut self, craving: impl Into<String>) -> Self {
        self.craving = Some(craving.into());
        self
    }

    /// Set the measurement system (imperial by default)
    pub fn measurement(mut self, system: MeasurementSystem) -> Self {
        self.system = system;
        self
    }

    /// Set disliked ingredients the model must avoid
    pub fn dislikes(mut self, dislikes: impl Into<String>) -> Self {
        self.dislikes = Some(dislikes.into());
        self
    }

    /// Apply persisted settings as request defaults
    ///
    /// Fills measurement system, dislikes, favorites, and household from
    /// the store; explicit setter calls made afterwards take precedence.
    pub fn with_settings<S: KeyValueStore>(mut self, settings: &mut Settings<S>) -> Self {
        self.system = settings.measurement_system();
        let dislikes = settings.dislikes();
        if !dislikes.trim().is_empty() {
            self.dislikes = Some(dislikes);
        }
        self.favorites = settings.favorites();
        self.household = settings.household();
        self
    }

    /// Set the API key directly instead of relying on configuration or
    /// the GEMINI_API_KEY environment variable
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Set the model name
    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    /// Build and execute the suggestion request
    ///
    /// # Errors
    /// Returns `CompanionError` if no usable input was supplied, the API
    /// key is missing, or any downstream encoding/service/validation step
    /// fails.
    pub async fn build(self) -> Result<SuggestionResult, CompanionError> {
        let mut config = CompanionConfig::load()?;
        if self.api_key.is_some() {
            config.provider.api_key = self.api_key.clone();
        }
        if let Some(model) = &self.model {
            config.provider.model = model.clone();
        }

        let planner = MealPlanner::from_config(&config)?;
        let ingredients = self.ingredients.unwrap_or_default();
        let dislikes = self.dislikes.as_deref();

        if self.weekly {
            let plan = planner
                .generate_weekly_plan(
                    &ingredients,
                    &self.images,
                    &self.favorites,
                    self.household,
                    self.craving.as_deref().unwrap_or(""),
                    self.system,
                    dislikes,
                )
                .await?;
            return Ok(SuggestionResult::WeekPlan(plan));
        }

        match self.images.len() {
            0 => {
                let response = planner
                    .generate_recipes_from_text(&ingredients, self.system, dislikes)
                    .await?;
                Ok(SuggestionResult::Recipes(response))
            }
            1 => {
                // Text and image inputs are exclusive in single-meal mode,
                // as in the UI's input tabs; only weekly mode combines them.
                if !ingredients.trim().is_empty() {
                    return Err(CompanionError::Precondition(
                        "single-meal mode takes ingredients text or an image, not both. \
                         Use .weekly() to combine them"
                            .to_string(),
                    ));
                }
                let response = planner
                    .generate_recipes_from_image(&self.images[0], self.system, dislikes)
                    .await?;
                Ok(SuggestionResult::Recipes(response))
            }
            n => Err(CompanionError::Precondition(format!(
                "single-meal mode accepts one image, got {}. Use .weekly() for multiple images",
                n
            ))),
        }
    }
}

/// Main entry point for the builder API
pub struct Companion;

impl Companion {
    /// Creates a new builder for a suggestion request
    pub fn builder() -> CompanionBuilder {
        CompanionBuilder::default()
    }
}
