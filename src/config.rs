//! Options for a single run of the front-end pipeline.

/// Pipeline options passed to [`crate::analyze`].
#[derive(Debug, Clone, Default)]
pub struct FrontendConfig {
    /// Name reported in token and error positions. `None` reports `shell`.
    pub file_name: Option<String>,
    /// Fail with `UnresolvedTypes` when any expression is still `Unknown`
    /// after type assignment.
    pub require_fully_typed: bool,
}

impl FrontendConfig {
    pub fn named(file_name: &str) -> Self {
        FrontendConfig {
            file_name: Some(file_name.to_string()),
            ..Default::default()
        }
    }

    pub fn strict(mut self) -> Self {
        self.require_fully_typed = true;
        self
    }

    pub fn display_name(&self) -> String {
        self.file_name
            .clone()
            .unwrap_or_else(|| String::from("shell"))
    }
}
