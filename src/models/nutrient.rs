//! Tracked nutrients and fixed-order nutrient vectors
//!
//! Shared by the profile store, the aggregator, the summary and the report.

use std::collections::HashMap;

use serde::{Serialize, Serializer};
use serde::ser::SerializeMap;

/// A nutrient tracked in every vector, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum NutrientKind {
    Calories,
    TotalCarbs,
    TotalFat,
    Protein,
    Sugar,
    Fiber,
}

impl NutrientKind {
    /// All tracked kinds in vector order
    pub const ALL: [NutrientKind; 6] = [
        NutrientKind::Calories,
        NutrientKind::TotalCarbs,
        NutrientKind::TotalFat,
        NutrientKind::Protein,
        NutrientKind::Sugar,
        NutrientKind::Fiber,
    ];

    pub const COUNT: usize = Self::ALL.len();

    /// Stable nutrient code used by the nutrient-amount data source
    pub fn code(&self) -> u32 {
        match self {
            NutrientKind::Calories => 1008,
            NutrientKind::TotalCarbs => 1005,
            NutrientKind::TotalFat => 1004,
            NutrientKind::Protein => 1003,
            NutrientKind::Sugar => 2000,
            NutrientKind::Fiber => 1079,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            NutrientKind::Calories => "Calories",
            NutrientKind::TotalCarbs => "Total Carbs",
            NutrientKind::TotalFat => "Total Fat",
            NutrientKind::Protein => "Protein",
            NutrientKind::Sugar => "Sugar",
            NutrientKind::Fiber => "Fiber",
        }
    }

    /// Look up a tracked kind by its nutrient code
    pub fn from_code(code: u32) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.code() == code)
    }

    /// Position of this kind inside a `NutrientVector`
    pub fn index(&self) -> usize {
        *self as usize
    }
}

/// Per-100g nutrient amounts for one food
///
/// Only strictly positive amounts are ever stored.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NutrientProfile {
    amounts: HashMap<NutrientKind, f64>,
}

impl NutrientProfile {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an amount, discarding non-positive values
    ///
    /// A later positive amount for the same kind replaces the earlier one.
    pub fn record(&mut self, kind: NutrientKind, amount: f64) {
        if amount > 0.0 {
            self.amounts.insert(kind, amount);
        }
    }

    /// Amount per 100 g; 0 for any kind the profile does not hold
    pub fn amount_of(&self, kind: NutrientKind) -> f64 {
        self.amounts.get(&kind).copied().unwrap_or(0.0)
    }

    /// Project into the fixed vector order, still per 100 g
    pub fn to_vector(&self) -> NutrientVector {
        let mut vector = NutrientVector::zero();
        for kind in NutrientKind::ALL {
            vector[kind] = self.amount_of(kind);
        }
        vector
    }
}

/// Nutrient amounts aligned 1:1 with `NutrientKind::ALL`
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct NutrientVector([f64; NutrientKind::COUNT]);

/// The element-wise sum of every entry vector for one diary
pub type DailyTotal = NutrientVector;

impl NutrientVector {
    pub fn zero() -> Self {
        Self::default()
    }

    pub fn from_array(values: [f64; NutrientKind::COUNT]) -> Self {
        Self(values)
    }

    pub fn as_array(&self) -> &[f64; NutrientKind::COUNT] {
        &self.0
    }

    /// Scale every amount by a multiplier
    pub fn scale(&self, multiplier: f64) -> Self {
        Self(self.0.map(|v| v * multiplier))
    }

    /// Pairs of (kind, amount) in vector order
    pub fn iter(&self) -> impl Iterator<Item = (NutrientKind, f64)> + '_ {
        NutrientKind::ALL.into_iter().zip(self.0.iter().copied())
    }
}

impl std::ops::Index<NutrientKind> for NutrientVector {
    type Output = f64;

    fn index(&self, kind: NutrientKind) -> &f64 {
        &self.0[kind.index()]
    }
}

impl std::ops::IndexMut<NutrientKind> for NutrientVector {
    fn index_mut(&mut self, kind: NutrientKind) -> &mut f64 {
        &mut self.0[kind.index()]
    }
}

impl std::ops::Add for NutrientVector {
    type Output = NutrientVector;

    fn add(mut self, other: NutrientVector) -> NutrientVector {
        self += other;
        self
    }
}

impl std::ops::AddAssign for NutrientVector {
    fn add_assign(&mut self, other: NutrientVector) {
        for (a, b) in self.0.iter_mut().zip(other.0) {
            *a += b;
        }
    }
}

impl std::ops::Mul<f64> for NutrientVector {
    type Output = NutrientVector;

    fn mul(self, multiplier: f64) -> NutrientVector {
        self.scale(multiplier)
    }
}

impl std::iter::Sum for NutrientVector {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(NutrientVector::zero(), |acc, v| acc + v)
    }
}

// Serialized as an ordered label -> amount map for the JSON report
impl Serialize for NutrientVector {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(NutrientKind::COUNT))?;
        for (kind, amount) in self.iter() {
            map.serialize_entry(kind.label(), &amount)?;
        }
        map.end()
    }
}
