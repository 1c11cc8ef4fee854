//! AI-assisted recipe suggestions and weekly dinner planning.
//!
//! The crate turns pantry ingredients (text or photos) and planning
//! context (household size, favorites, cravings) into a schema-constrained
//! request to a hosted generative model, then validates and types the JSON
//! reply. See [`Companion::builder`] for the fluent entry point or
//! [`MealPlanner`] for direct use with an injected provider.

pub mod builder;
pub mod config;
pub mod error;
pub mod media;
pub mod model;
pub mod planner;
pub mod prompt;
pub mod providers;
pub mod schema;
pub mod store;
pub mod validate;

pub use builder::{Companion, CompanionBuilder, SuggestionResult};
pub use config::{CompanionConfig, ProviderConfig};
pub use error::CompanionError;
pub use media::MediaPart;
pub use model::{
    DailyPlanItem, Household, MeasurementSystem, Recipe, RecipeResponse, ShoppingListCategory,
    WeekPlanResponse,
};
pub use planner::MealPlanner;
pub use providers::{GeminiProvider, GenerativeProvider};
