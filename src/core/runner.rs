use crate::core::snippets;
use crate::domain::model::{SnippetInputs, SnippetReport};
use crate::domain::ports::Snippet;
use crate::utils::error::Result;

pub struct SnippetRunner {
    snippets: Vec<Box<dyn Snippet>>,
}

impl SnippetRunner {
    pub fn new(snippets: Vec<Box<dyn Snippet>>) -> Self {
        Self { snippets }
    }

    /// Runner over the whole catalog.
    pub fn all() -> Self {
        Self::new(snippets::catalog())
    }

    /// Runner over the named snippets, in the order given. Empty selects all.
    pub fn select(names: &[String]) -> Result<Self> {
        if names.is_empty() {
            return Ok(Self::all());
        }

        let selected = names
            .iter()
            .map(|name| snippets::find(name))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self::new(selected))
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.snippets.iter().map(|snippet| snippet.name()).collect()
    }

    /// Runs every snippet; the first failure stops the run.
    pub fn run(&self, inputs: &SnippetInputs) -> Result<Vec<SnippetReport>> {
        let mut reports = Vec::with_capacity(self.snippets.len());

        tracing::info!("Running {} snippet(s)", self.snippets.len());

        for snippet in &self.snippets {
            tracing::debug!("Running snippet '{}': {}", snippet.name(), snippet.description());

            let report = snippet.run(inputs).map_err(|e| {
                tracing::error!("Snippet '{}' failed: {}", snippet.name(), e);
                e
            })?;

            tracing::debug!(
                "Snippet '{}' produced {} line(s)",
                snippet.name(),
                report.lines.len()
            );
            reports.push(report);
        }

        tracing::info!("Completed {} snippet(s)", reports.len());
        Ok(reports)
    }
}
