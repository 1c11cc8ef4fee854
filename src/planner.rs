//! The three user-facing operations.
//!
//! Each call is single-shot and stateless: build the prompt (encoding any
//! images first), issue exactly one request through the provider, validate
//! the reply, and return the typed result or the first error. Nothing is
//! retried and no partial result is ever handed back.

use log::{debug, info};
use std::path::Path;

use crate::config::CompanionConfig;
use crate::error::CompanionError;
use crate::media::{encode_image_file, encode_image_files};
use crate::model::{Household, MeasurementSystem, Recipe, RecipeResponse, WeekPlanResponse};
use crate::prompt::{self, WeekPlanParams};
use crate::providers::{GeminiProvider, GenerativeProvider};
use crate::schema;
use crate::validate;

pub struct MealPlanner {
    provider: Box<dyn GenerativeProvider>,
}

impl MealPlanner {
    /// Create a planner with an injected provider.
    pub fn new(provider: Box<dyn GenerativeProvider>) -> Self {
        MealPlanner { provider }
    }

    /// Create a planner from layered configuration.
    ///
    /// Fails when no API key is available, so a misconfigured process
    /// stops at startup rather than on the first request.
    pub fn from_config(config: &CompanionConfig) -> Result<Self, CompanionError> {
        let provider = GeminiProvider::new(&config.provider)?;
        Ok(MealPlanner::new(Box::new(provider)))
    }

    /// Suggest 3-5 recipes from a free-text ingredient list.
    ///
    /// # Errors
    /// `CompanionError::Precondition` when `ingredients` is blank; any
    /// downstream gateway, parse, or validation error otherwise.
    pub async fn generate_recipes_from_text(
        &self,
        ingredients: &str,
        system: MeasurementSystem,
        dislikes: Option<&str>,
    ) -> Result<RecipeResponse, CompanionError> {
        if ingredients.trim().is_empty() {
            return Err(CompanionError::Precondition(
                "no ingredients provided".to_string(),
            ));
        }

        let prompt = prompt::single_meal_text_prompt(ingredients, system, dislikes);
        debug!("Single-meal text prompt: {} chars", prompt.len());

        let raw = self
            .provider
            .generate(&prompt, &[], &schema::recipe_response_schema())
            .await?;
        let response = validate::parse_recipe_response(&raw)?;
        info!(
            "Received {} recipe suggestions from {}",
            response.recipes.len(),
            self.provider.provider_name()
        );
        Ok(response)
    }

    /// Suggest 3-5 recipes from a photo of the user's fridge or pantry.
    pub async fn generate_recipes_from_image(
        &self,
        image: &Path,
        system: MeasurementSystem,
        dislikes: Option<&str>,
    ) -> Result<RecipeResponse, CompanionError> {
        let part = encode_image_file(image).await?;
        let prompt = prompt::single_meal_image_prompt(system, dislikes);

        let raw = self
            .provider
            .generate(&prompt, &[part], &schema::recipe_response_schema())
            .await?;
        let response = validate::parse_recipe_response(&raw)?;
        info!(
            "Received {} recipe suggestions from {}",
            response.recipes.len(),
            self.provider.provider_name()
        );
        Ok(response)
    }

    /// Build a 7-day dinner plan with a consolidated weekly shopping list.
    ///
    /// Ingredients may come from text, images, or both; supplying neither
    /// is a precondition failure raised before any file is read or any
    /// request is sent.
    #[allow(clippy::too_many_arguments)]
    pub async fn generate_weekly_plan(
        &self,
        ingredients: &str,
        images: &[impl AsRef<Path>],
        favorites: &[Recipe],
        household: Household,
        craving: &str,
        system: MeasurementSystem,
        dislikes: Option<&str>,
    ) -> Result<WeekPlanResponse, CompanionError> {
        if ingredients.trim().is_empty() && images.is_empty() {
            return Err(CompanionError::Precondition(
                "no ingredients or images provided".to_string(),
            ));
        }

        let media = encode_image_files(images).await?;
        let prompt = prompt::week_plan_prompt(&WeekPlanParams {
            ingredients,
            has_images: !media.is_empty(),
            favorites,
            household,
            craving,
            system,
            dislikes,
        });
        debug!(
            "Weekly-plan prompt: {} chars, {} images",
            prompt.len(),
            media.len()
        );

        let raw = self
            .provider
            .generate(&prompt, &media, &schema::week_plan_schema())
            .await?;
        let response = validate::parse_week_plan_response(&raw)?;
        info!(
            "Received {}-day plan from {}",
            response.daily_plan.len(),
            self.provider.provider_name()
        );
        Ok(response)
    }
}
