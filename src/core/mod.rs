pub mod comprehension;
pub mod fulfillment;
pub mod nested;
pub mod render;
pub mod runner;
pub mod snippets;
pub mod stats;

pub use crate::domain::model::{SnippetInputs, SnippetReport, Stats};
pub use crate::domain::ports::{Snippet, Storage};
pub use crate::utils::error::Result;
