use std::borrow::Cow;

/// Errors from sourcing the build environment.
///
/// The resolver itself has no failure path; only the config/environment
/// lookup can fail, and only on malformed input.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("Build environment error{}: {source}", format_context(context))]
    Config { source: config::ConfigError, context: Option<Cow<'static, str>> },
}

impl SourceError {
    fn set_context(&mut self, context: Cow<'static, str>) {
        match self {
            Self::Config { context: c, .. } => *c = Some(context),
        }
    }
}

impl From<config::ConfigError> for SourceError {
    fn from(source: config::ConfigError) -> Self {
        Self::Config { source, context: None }
    }
}

/// Attaches human-readable context to a fallible sourcing step.
pub trait SourceErrorExt<T> {
    fn context(self, context: impl Into<Cow<'static, str>>) -> Result<T, SourceError>;
}

impl<T, E: Into<SourceError>> SourceErrorExt<T> for Result<T, E> {
    fn context(self, context: impl Into<Cow<'static, str>>) -> Result<T, SourceError> {
        self.map_err(|e| {
            let mut err = e.into();
            err.set_context(context.into());
            err
        })
    }
}

fn format_context(context: &Option<Cow<'static, str>>) -> Cow<'static, str> {
    context.as_ref().map_or(Cow::Borrowed(""), |c| Cow::Owned(format!(" ({c})")))
}
