//! Scoring engine for The Great Lock-In weekly surveys.
//!
//! A [`catalog::Catalog`] describes the survey; [`scoring::score_question`] and
//! [`scoring::score_total`] turn raw answers into points, and
//! [`submission::score_submission`] bundles per-answer points, the total and
//! the per-category breakdown for one week.

pub mod catalog;
pub mod config;
pub mod output;
pub mod scoring;
pub mod submission;
