//! Analysis client for Pro Aesthetic Lab.
//!
//! Holds everything that talks to (or describes) the hosted model: the report
//! data model, the response schema, the fixed prompt, the encoded image type,
//! configuration and the `generateContent` call itself.

pub mod client;
pub mod config;
pub mod error;
pub mod image;
pub mod report;
pub mod schema;

mod http;
mod prompt;

pub use client::AnalysisClient;
pub use config::AnalysisConfig;
pub use error::AnalysisError;
pub use image::EncodedImage;
pub use prompt::ANALYSIS_PROMPT;
pub use report::{FacialAnalysisReport, FeatureNotes, FiveEyes, Proportions, Suggestions, ThreeParts};
