//! Presentation of lookup outcomes: console table or JSON.

mod console;
mod json;

pub use console::{render_candidates, render_outcome};
pub use json::render_json;
