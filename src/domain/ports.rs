use crate::domain::model::{SnippetInputs, SnippetReport};
use crate::utils::error::Result;

/// One self-contained demonstration.
pub trait Snippet {
    fn name(&self) -> &'static str;
    fn description(&self) -> &'static str;
    fn run(&self, inputs: &SnippetInputs) -> Result<SnippetReport>;
}

pub trait Storage {
    fn write_file(&self, path: &str, data: &[u8]) -> Result<()>;
}
