//! Wire models shared by the SmritiWeb client.
//!
//! - `model`: entities and response bodies returned by the heritage API.
//! - `requests`: JSON bodies the client sends.
//! - `catalog`: fixed client-side catalogs (languages, scripts, badges, ...).
//! - `display`: small formatting helpers used by the views.

pub mod catalog;
pub mod display;
pub mod model;
pub mod requests;
