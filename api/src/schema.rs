//! Response schema sent with every request so the model answers in the report shape.
//!
//! Uses the Gemini OpenAPI-subset type names (`OBJECT`, `NUMBER`, ...).

use serde_json::{json, Value};

fn number() -> Value {
    json!({ "type": "NUMBER" })
}

fn string() -> Value {
    json!({ "type": "STRING" })
}

fn string_list() -> Value {
    json!({ "type": "ARRAY", "items": { "type": "STRING" } })
}

/// Schema mirroring [`crate::FacialAnalysisReport`]. Every field is required
/// except `suggestions.medicalBeauty`.
pub fn response_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "overallScore": number(),
            "proportions": {
                "type": "OBJECT",
                "properties": {
                    "threeParts": {
                        "type": "OBJECT",
                        "properties": {
                            "upper": number(),
                            "middle": number(),
                            "lower": number(),
                            "description": string()
                        },
                        "required": ["upper", "middle", "lower", "description"]
                    },
                    "fiveEyes": {
                        "type": "OBJECT",
                        "properties": {
                            "leftSide": number(),
                            "leftEye": number(),
                            "middle": number(),
                            "rightEye": number(),
                            "rightSide": number(),
                            "description": string()
                        },
                        "required": ["leftSide", "leftEye", "middle", "rightEye", "rightSide", "description"]
                    }
                },
                "required": ["threeParts", "fiveEyes"]
            },
            "features": {
                "type": "OBJECT",
                "properties": {
                    "eyes": string(),
                    "nose": string(),
                    "lips": string(),
                    "jawline": string()
                },
                "required": ["eyes", "nose", "lips", "jawline"]
            },
            "suggestions": {
                "type": "OBJECT",
                "properties": {
                    "medicalBeauty": string_list(),
                    "makeup": string_list(),
                    "lifestyle": string_list()
                },
                "required": ["makeup", "lifestyle"]
            },
            "summary": string()
        },
        "required": ["overallScore", "proportions", "features", "suggestions", "summary"]
    })
}
