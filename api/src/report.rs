//! Report data model returned by the analysis model.
//!
//! Field names follow the JSON the model is instructed to emit (camelCase).
//! Proportion shares are taken as-is; nothing here checks that they add up to 100.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FacialAnalysisReport {
    pub overall_score: f64,
    pub proportions: Proportions,
    pub features: FeatureNotes,
    pub suggestions: Suggestions,
    pub summary: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Proportions {
    pub three_parts: ThreeParts,
    pub five_eyes: FiveEyes,
}

/// Vertical thirds (upper / middle / lower face).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThreeParts {
    pub upper: f64,
    pub middle: f64,
    pub lower: f64,
    pub description: String,
}

/// Horizontal fifths, read left to right.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FiveEyes {
    pub left_side: f64,
    pub left_eye: f64,
    pub middle: f64,
    pub right_eye: f64,
    pub right_side: f64,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureNotes {
    pub eyes: String,
    pub nose: String,
    pub lips: String,
    pub jawline: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Suggestions {
    pub makeup: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub medical_beauty: Option<Vec<String>>,
    pub lifestyle: Vec<String>,
}

impl Suggestions {
    /// Medical items, treating an absent list the same as an empty one.
    pub fn medical_beauty_items(&self) -> &[String] {
        self.medical_beauty.as_deref().unwrap_or(&[])
    }
}
