//! Daily summary
//!
//! Derives the body-fat-mass change from caloric balance and the share of
//! calories coming from each macronutrient.

use serde::Serialize;

use crate::error::{DiaryError, DiaryResult};
use crate::models::{DailyTotal, NutrientKind};

/// Assumed basal metabolic rate in kcal/day
pub const DEFAULT_BMR: f64 = 1400.0;

/// Energy density of body fat in kcal/g
pub const KCAL_PER_G_FAT_MASS: f64 = 9.0;

/// A macronutrient with a fixed energy density
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Macro {
    Carbs,
    Fat,
    Protein,
}

impl Macro {
    pub const ALL: [Macro; 3] = [Macro::Carbs, Macro::Fat, Macro::Protein];

    pub fn kcal_per_gram(&self) -> f64 {
        match self {
            Macro::Carbs => 4.0,
            Macro::Fat => 9.0,
            Macro::Protein => 4.0,
        }
    }

    /// The tracked nutrient holding this macro's grams
    pub fn nutrient(&self) -> NutrientKind {
        match self {
            Macro::Carbs => NutrientKind::TotalCarbs,
            Macro::Fat => NutrientKind::TotalFat,
            Macro::Protein => NutrientKind::Protein,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Macro::Carbs => "Carbs",
            Macro::Fat => "Fat",
            Macro::Protein => "Protein",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MacroShare {
    #[serde(rename = "macro")]
    pub macronutrient: Macro,
    pub calories: f64,
    /// Fraction of total calories, 0.0 to 1.0 in the common case
    pub share: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    pub total_calories: f64,
    pub bmr: f64,
    /// Positive means gain
    pub body_fat_delta_grams: f64,
    /// Absent when the day has zero calories
    pub macro_shares: Option<[MacroShare; 3]>,
}

#[derive(Debug, Clone, Copy)]
pub struct SummaryCalculator {
    bmr: f64,
}

impl Default for SummaryCalculator {
    fn default() -> Self {
        Self::new(DEFAULT_BMR)
    }
}

impl SummaryCalculator {
    pub fn new(bmr: f64) -> Self {
        Self { bmr }
    }

    pub fn bmr(&self) -> f64 {
        self.bmr
    }

    pub fn body_fat_delta(&self, total: &DailyTotal) -> f64 {
        (total[NutrientKind::Calories] - self.bmr) / KCAL_PER_G_FAT_MASS
    }

    /// Share of calories from carbs, fat and protein, in that order
    pub fn macro_calorie_shares(&self, total: &DailyTotal) -> DiaryResult<[MacroShare; 3]> {
        let calories = total[NutrientKind::Calories];
        if calories == 0.0 {
            return Err(DiaryError::ZeroCalories);
        }

        Ok(Macro::ALL.map(|m| {
            let macro_calories = total[m.nutrient()] * m.kcal_per_gram();
            MacroShare {
                macronutrient: m,
                calories: macro_calories,
                share: macro_calories / calories,
            }
        }))
    }

    pub fn summarize(&self, total: &DailyTotal) -> Summary {
        let macro_shares = match self.macro_calorie_shares(total) {
            Ok(shares) => Some(shares),
            Err(err) => {
                tracing::warn!("{}", err);
                None
            }
        };

        Summary {
            total_calories: total[NutrientKind::Calories],
            bmr: self.bmr,
            body_fat_delta_grams: self.body_fat_delta(total),
            macro_shares,
        }
    }
}
