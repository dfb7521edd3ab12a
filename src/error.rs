use colored::Colorize;
use std::fmt;

use crate::validate::ValidationError;

#[derive(Debug)]
pub enum SplitError {
    /// A form field failed validation; carries the field tag, error kind and
    /// the localized message rendered by the validator.
    Validation(ValidationError),
    MissingApiKey {
        variable: String,
    },
    Http {
        operation: String,
        source: reqwest::Error,
    },
    /// The places service answered with a non-OK status string.
    Service {
        service: String,
        status: String,
    },
    /// The distance service found no driving route between two places.
    NoRoute {
        from: String,
        to: String,
    },
    Cache {
        path: String,
        message: String,
    },
    IoError {
        operation: String,
        path: Option<String>,
        source: std::io::Error,
    },
    Other(anyhow::Error),
}

impl SplitError {
    pub fn missing_api_key(variable: impl Into<String>) -> Self {
        Self::MissingApiKey {
            variable: variable.into(),
        }
    }

    pub fn http(operation: impl Into<String>, source: reqwest::Error) -> Self {
        Self::Http {
            operation: operation.into(),
            source,
        }
    }

    pub fn service(service: impl Into<String>, status: impl Into<String>) -> Self {
        Self::Service {
            service: service.into(),
            status: status.into(),
        }
    }

    pub fn no_route(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self::NoRoute {
            from: from.into(),
            to: to.into(),
        }
    }

    pub fn cache(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Cache {
            path: path.into(),
            message: message.into(),
        }
    }

    pub fn io_error(
        operation: impl Into<String>,
        path: Option<String>,
        source: std::io::Error,
    ) -> Self {
        Self::IoError {
            operation: operation.into(),
            path,
            source,
        }
    }
}

impl fmt::Display for SplitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Validation(err) => {
                write!(
                    f,
                    "{} {}: {}",
                    "✗".red().bold(),
                    err.field().name().yellow(),
                    err.message()
                )
            }
            Self::MissingApiKey { variable } => {
                writeln!(f, "{} Missing API key", "✗".red().bold())?;
                writeln!(
                    f,
                    "  {} Set the {} environment variable to a Google Maps API key",
                    "→".blue(),
                    variable.yellow()
                )?;
                write!(
                    f,
                    "  {} Place search and distance lookups need it; manual --distance does not",
                    "→".blue()
                )
            }
            Self::Http { operation, source } => {
                writeln!(
                    f,
                    "{} Request failed: {}",
                    "✗".red().bold(),
                    operation.yellow()
                )?;
                write!(f, "  {} Error: {}", "→".blue(), source)
            }
            Self::Service { service, status } => {
                writeln!(f, "{} Service error: {}", "✗".red().bold(), service.yellow())?;
                write!(f, "  {} Status: {}", "→".blue(), status.red())
            }
            Self::NoRoute { from, to } => {
                writeln!(f, "{} No driving route found", "✗".red().bold())?;
                writeln!(f, "  {} From: {}", "→".blue(), from)?;
                write!(f, "  {} To: {}", "→".blue(), to)
            }
            Self::Cache { path, message } => {
                writeln!(f, "{} Cache error", "✗".red().bold())?;
                writeln!(f, "  {} Path: {}", "→".blue(), path.yellow())?;
                write!(f, "  {} Error: {}", "→".blue(), message)
            }
            Self::IoError {
                operation,
                path,
                source,
            } => {
                writeln!(
                    f,
                    "{} I/O error during: {}",
                    "✗".red().bold(),
                    operation.yellow()
                )?;
                if let Some(path) = path {
                    writeln!(f, "  {} Path: {}", "→".blue(), path)?;
                }
                write!(f, "  {} Error: {}", "→".blue(), source)
            }
            Self::Other(err) => write!(f, "{} {}", "✗".red().bold(), err),
        }
    }
}

impl std::error::Error for SplitError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Http { source, .. } => Some(source),
            Self::IoError { source, .. } => Some(source),
            Self::Other(err) => Some(err.as_ref()),
            _ => None,
        }
    }
}

impl From<ValidationError> for SplitError {
    fn from(err: ValidationError) -> Self {
        Self::Validation(err)
    }
}

impl From<std::io::Error> for SplitError {
    fn from(err: std::io::Error) -> Self {
        Self::IoError {
            operation: "unknown".to_string(),
            path: None,
            source: err,
        }
    }
}

impl From<anyhow::Error> for SplitError {
    fn from(err: anyhow::Error) -> Self {
        Self::Other(err)
    }
}

impl From<dialoguer::Error> for SplitError {
    fn from(err: dialoguer::Error) -> Self {
        Self::Other(anyhow::anyhow!("Dialog error: {}", err))
    }
}

pub type Result<T> = std::result::Result<T, SplitError>;
