//! # Domain Models
//!
//! These structs represent the core entities of rusty-recipes. Recipes are
//! keyed by an integer id assigned by the caller; the store never allocates
//! ids itself.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::date;

/// A single recipe record as it appears in the data feed.
///
/// `average_rate` is derived state: it always equals the arithmetic mean of
/// every rating recorded for this recipe, or 0 when unrated. The rating
/// history itself is private and only ever surfaced through the aggregate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    pub id: i64,
    #[serde(with = "date")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "date")]
    pub uploaded_at: DateTime<Utc>,
    /// Subscription box this recipe ships in (e.g. "vegetarian", "gourmet")
    pub box_type: String,
    pub title: String,
    pub slug: String,
    pub short_title: String,
    pub marketing_description: String,
    pub calories_kcal: u32,
    pub protein_grams: u32,
    pub fat_grams: u32,
    pub carbs_grams: u32,
    pub bulletpoint1: String,
    pub bulletpoint2: String,
    pub bulletpoint3: String,
    pub diet_type: String,
    pub season: String,
    pub base: String,
    pub protein_source: String,
    pub preparation_time_minutes: u32,
    pub shelf_life_days: u32,
    pub equipment_needed: String,
    pub origin_country: String,
    pub cuisine: String,
    /// Comma-separated ingredient list as shipped
    pub in_your_box: String,
    pub reference: i64,

    /// Mean of all recorded ratings; 0 when unrated.
    #[serde(default)]
    pub average_rate: f32,
    #[serde(skip)]
    ratings: Vec<RecipeRate>,
}

impl Recipe {
    /// Appends a rating and recomputes `average_rate` over the full history.
    ///
    /// This is the only way ratings enter a recipe, which keeps the mean and
    /// the history in lockstep.
    pub fn record_rating(&mut self, rating: RecipeRate) {
        self.ratings.push(rating);
        let sum: i64 = self.ratings.iter().map(|r| i64::from(r.rate)).sum();
        self.average_rate = sum as f32 / self.ratings.len() as f32;
    }

    /// Read-only view of the rating history, in insertion order.
    pub fn ratings(&self) -> &[RecipeRate] {
        &self.ratings
    }
}

#[cfg(any(test, feature = "testing"))]
impl Recipe {
    /// Minimal valid record for tests; every string field carries a
    /// recognizable placeholder and both timestamps are the feed epoch
    /// `30/06/2015 17:58:00`.
    pub fn fixture(id: i64) -> Self {
        use chrono::TimeZone;
        let stamp = Utc.with_ymd_and_hms(2015, 6, 30, 17, 58, 0).unwrap();
        Recipe {
            id,
            created_at: stamp,
            uploaded_at: stamp,
            box_type: "vegetarian".to_string(),
            title: format!("recipe-{id}"),
            slug: format!("recipe-{id}"),
            short_title: String::new(),
            marketing_description: String::new(),
            calories_kcal: 400,
            protein_grams: 12,
            fat_grams: 35,
            carbs_grams: 0,
            bulletpoint1: String::new(),
            bulletpoint2: String::new(),
            bulletpoint3: String::new(),
            diet_type: "meat".to_string(),
            season: "all".to_string(),
            base: "noodles".to_string(),
            protein_source: "beef".to_string(),
            preparation_time_minutes: 35,
            shelf_life_days: 4,
            equipment_needed: String::new(),
            origin_country: "Great Britain".to_string(),
            cuisine: "asian".to_string(),
            in_your_box: String::new(),
            reference: id,
            average_rate: 0.0,
            ratings: Vec::new(),
        }
    }
}

#[cfg(any(test, feature = "testing"))]
impl RecipeRate {
    pub fn fixture(rate: i32) -> Self {
        use chrono::TimeZone;
        RecipeRate {
            rate,
            rated_at: Utc.with_ymd_and_hms(2015, 6, 30, 17, 58, 0).unwrap(),
            rated_by: "tester".to_string(),
        }
    }
}

/// One scored rating attached to a recipe. Append-only once recorded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeRate {
    pub rate: i32,
    #[serde(with = "date")]
    pub rated_at: DateTime<Utc>,
    pub rated_by: String,
}

/// Pagination request for recipe listings.
///
/// A `limit` of 0 disables pagination and returns everything; a `page` of 0
/// is treated as page 1. Pages are 1-based.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Limiter {
    pub limit: usize,
    pub page: usize,
}
