//! Error types for profile generation

use thiserror::Error;

// POSIX errno values reported as process exit statuses. Only
// `exit_code` below reads them; everything else matches on the variant.
const EPERM: u8 = 1;
const ENOENT: u8 = 2;
const EIO: u8 = 5;
const EACCES: u8 = 13;
const ENOTDIR: u8 = 20;
const EINVAL: u8 = 22;
const ENOSYS: u8 = 38;
// User-specified exit code for uncategorized failures
// http://www.tldp.org/LDP/abs/html/exitcodes.html
const OTHER_ERROR: u8 = 166;

/// Main error type for profile generation operations
#[derive(Error, Debug)]
pub enum ProfileGenError {
    /// Unexpected internal fault
    #[error("unhandled error: {message}")]
    Unhandled {
        /// Error message
        message: String,
    },

    /// Malformed schema.org type argument
    #[error("invalid schema.org type {name:?}")]
    InvalidType {
        /// The rejected type argument
        name: String,
    },

    /// Vocabulary source unreachable
    #[error("failed to fetch '{location}': {reason}")]
    Fetch {
        /// URL or path that could not be fetched
        location: String,
        /// Reason for failure
        reason: String,
    },

    /// Vocabulary document could not be parsed
    #[error("failed to parse vocabulary: {message}")]
    Parse {
        /// Error message
        message: String,
        /// Location in the document if available
        location: Option<String>,
    },

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Requested version absent from the source's known set
    #[error("schema.org version '{version}' not found")]
    VersionNotFound {
        /// The requested version selector
        version: String,
    },

    /// Requested type absent from the fetched vocabulary
    #[error("type '{schema_type}' not found in schema.org {version}")]
    TypeNotFound {
        /// The requested type name
        schema_type: String,
        /// The vocabulary version that was searched
        version: String,
    },

    /// Path expected to be a directory is not one
    #[error("not a directory: {path}")]
    NotADirectory {
        /// The offending path
        path: String,
    },

    /// Local vocabulary files are unreadable
    #[error("permission denied: {path}")]
    PermissionDenied {
        /// The offending path
        path: String,
    },

    /// Feature not implemented
    #[error("not implemented: {0}")]
    NotImplemented(String),

    /// Generic errors with context
    #[error("{message}")]
    Other {
        /// Error message
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

/// Result type alias for profile generation operations
pub type Result<T> = std::result::Result<T, ProfileGenError>;

impl ProfileGenError {
    /// Create an unhandled error
    #[must_use]
    pub fn unhandled(message: impl Into<String>) -> Self {
        Self::Unhandled {
            message: message.into(),
        }
    }

    /// Create an invalid type error
    #[must_use]
    pub fn invalid_type(name: impl Into<String>) -> Self {
        Self::InvalidType { name: name.into() }
    }

    /// Create a fetch error
    #[must_use]
    pub fn fetch(location: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Fetch {
            location: location.into(),
            reason: reason.into(),
        }
    }

    /// Create a parse error
    #[must_use]
    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse {
            message: message.into(),
            location: None,
        }
    }

    /// Create a parse error with location
    #[must_use]
    pub fn parse_at(message: impl Into<String>, location: impl Into<String>) -> Self {
        Self::Parse {
            message: message.into(),
            location: Some(location.into()),
        }
    }

    /// Create a version not found error
    #[must_use]
    pub fn version_not_found(version: impl Into<String>) -> Self {
        Self::VersionNotFound {
            version: version.into(),
        }
    }

    /// Create a type not found error
    #[must_use]
    pub fn type_not_found(schema_type: impl Into<String>, version: impl Into<String>) -> Self {
        Self::TypeNotFound {
            schema_type: schema_type.into(),
            version: version.into(),
        }
    }

    /// Create a not-a-directory error
    #[must_use]
    pub fn not_a_directory(path: impl Into<String>) -> Self {
        Self::NotADirectory { path: path.into() }
    }

    /// Create a permission denied error
    #[must_use]
    pub fn permission_denied(path: impl Into<String>) -> Self {
        Self::PermissionDenied { path: path.into() }
    }

    /// Create a not implemented error
    #[must_use]
    pub fn not_implemented(feature: impl Into<String>) -> Self {
        Self::NotImplemented(feature.into())
    }

    /// Create a generic error
    #[must_use]
    pub fn other(message: impl Into<String>) -> Self {
        Self::Other {
            message: message.into(),
            source: None,
        }
    }

    /// Create a generic error with source
    #[must_use]
    pub fn other_with_source<E>(message: impl Into<String>, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Other {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Process exit status for this error kind.
    ///
    /// This is the only place the numeric codes are read; callers map a
    /// failed run to an exit status at the process boundary and branch on
    /// the variant everywhere else.
    #[must_use]
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::Unhandled { .. } => EPERM,
            Self::InvalidType { .. } => EINVAL,
            Self::Fetch { .. } | Self::Parse { .. } | Self::Io(_) => EIO,
            Self::VersionNotFound { .. } | Self::TypeNotFound { .. } => ENOENT,
            Self::NotADirectory { .. } => ENOTDIR,
            Self::PermissionDenied { .. } => EACCES,
            Self::NotImplemented(_) => ENOSYS,
            Self::Other { .. } => OTHER_ERROR,
        }
    }
}

impl From<serde_json::Error> for ProfileGenError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse {
            message: err.to_string(),
            location: Some(format!("line {}, column {}", err.line(), err.column())),
        }
    }
}
