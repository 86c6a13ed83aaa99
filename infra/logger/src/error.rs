use std::borrow::Cow;

/// Errors that can occur during logger initialization.
#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// Failure when configuring the rolling file appender (e.g., invalid path).
    #[error("Rolling file appender error{}: {source}", format_context(context))]
    Appender { source: tracing_appender::rolling::InitError, context: Option<Cow<'static, str>> },

    /// Occurs if a global tracing subscriber has already been initialized in the current process.
    #[error("Tracing subscriber error{}: {source}", format_context(context))]
    Subscriber {
        source: tracing_subscriber::util::TryInitError,
        context: Option<Cow<'static, str>>,
    },

    /// Internal logic errors.
    #[error("Internal logger error{}: {message}", format_context(context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// Invalid configuration supplied to the logger builder.
    #[error("Invalid logger configuration{}: {message}", format_context(context))]
    InvalidConfiguration { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

pub type Result<T> = std::result::Result<T, LoggerError>;

fn format_context(context: &Option<Cow<'static, str>>) -> String {
    context.as_ref().map_or_else(String::new, |c| format!(" ({c})"))
}

impl LoggerError {
    pub(crate) fn invalid(message: impl Into<Cow<'static, str>>) -> Self {
        Self::InvalidConfiguration { message: message.into(), context: None }
    }
}

impl From<tracing_appender::rolling::InitError> for LoggerError {
    fn from(source: tracing_appender::rolling::InitError) -> Self {
        Self::Appender { source, context: None }
    }
}

impl From<tracing_subscriber::util::TryInitError> for LoggerError {
    fn from(source: tracing_subscriber::util::TryInitError) -> Self {
        Self::Subscriber { source, context: None }
    }
}

impl From<std::io::Error> for LoggerError {
    fn from(err: std::io::Error) -> Self {
        Self::Internal { message: err.to_string().into(), context: None }
    }
}

/// Adds a human-readable context to logger failures.
pub trait LoggerErrorExt<T> {
    /// Attaches `context` to the error, if any.
    ///
    /// # Errors
    /// Returns the error converted into [`LoggerError`] with the context set.
    fn context(self, context: impl Into<Cow<'static, str>>) -> Result<T>;
}

impl<T, E> LoggerErrorExt<T> for std::result::Result<T, E>
where
    E: Into<LoggerError>,
{
    fn context(self, context: impl Into<Cow<'static, str>>) -> Result<T> {
        self.map_err(|err| {
            let context = Some(context.into());
            match err.into() {
                LoggerError::Appender { source, .. } => LoggerError::Appender { source, context },
                LoggerError::Subscriber { source, .. } => LoggerError::Subscriber { source, context },
                LoggerError::Internal { message, .. } => LoggerError::Internal { message, context },
                LoggerError::InvalidConfiguration { message, .. } => {
                    LoggerError::InvalidConfiguration { message, context }
                }
            }
        })
    }
}
