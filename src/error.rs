//! Error types for courier.
//!
//! Every failure is grouped by concern and folded into [`Error`]. Callers that
//! need to branch on the failure (exit codes, hints) use [`Error::kind`] and
//! [`Error::hint`] instead of matching on message text.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// Top-level error type.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Remote(#[from] RemoteError),

    #[error(transparent)]
    Codec(#[from] CodecError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Load(#[from] LoadError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Credential resolution failures.
#[derive(Error, Debug)]
pub enum AuthError {
    #[error("No authorization data found.")]
    NoAuthorizationData,

    #[error("Invalid input.")]
    InvalidInput,

    /// Wrong passkey or corrupted ciphertext. The cipher error is never kept.
    #[error("Error during decryption")]
    Decryption,

    #[error("Alias not found: {0}")]
    AliasNotFound(String),

    #[error("unable to read input: {0}")]
    Prompt(String),
}

/// Location classification and HTTP failures.
#[derive(Error, Debug)]
pub enum RemoteError {
    #[error("could not find the remote resource location")]
    NotFound { location: String },

    #[error("{source}")]
    Fetch {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{reason}")]
    InvalidBody { url: String, reason: String },

    /// Non-2xx response. `message` is the server's own message when it sent one.
    #[error("{message}")]
    Api {
        resource: String,
        name: String,
        status: u16,
        message: String,
        operation: Operation,
    },

    #[error("unable to initialise HTTP client: {0}")]
    Client(#[source] reqwest::Error),
}

/// Which remote operation failed, for messages and hints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Fetch,
    Sync,
}

impl Operation {
    /// Gerund used in synthesized messages ("Error fetching collection").
    pub fn verb(self) -> &'static str {
        match self {
            Operation::Fetch => "fetching",
            Operation::Sync => "updating",
        }
    }

    /// Suffix of the synthesized error name ("CollectionFetchError").
    pub fn noun(self) -> &'static str {
        match self {
            Operation::Fetch => "Fetch",
            Operation::Sync => "Sync",
        }
    }
}

/// Obfuscation and encryption failures.
#[derive(Error, Debug)]
pub enum CodecError {
    #[error("invalid encoded text: {0}")]
    InvalidEncoding(String),

    #[error("invalid ciphertext: {0}")]
    InvalidCiphertext(String),

    #[error("decryption failed")]
    DecryptionFailed,

    #[error("encryption failed: {0}")]
    EncryptionFailed(String),
}

/// Profile file failures.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("unable to determine home directory")]
    NoHomeDir,

    #[error("failed to read {}: {source}", path.display())]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid data in {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("unable to create config directory {}: {source}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {}: {source}", path.display())]
    WriteFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to serialize profiles: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Local data file failures.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("{source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Stable classification of an [`Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    NoAuthorizationData,
    InvalidInput,
    DecryptionError,
    RemoteResourceNotFound,
    RemoteFetchError,
    InvalidResponseBody,
    RemoteApiError,
    AliasNotFound,
    Prompt,
    Codec,
    Storage,
    LocalFile,
    Io,
}

impl ErrorKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorKind::NoAuthorizationData => "NoAuthorizationData",
            ErrorKind::InvalidInput => "InvalidInput",
            ErrorKind::DecryptionError => "DecryptionError",
            ErrorKind::RemoteResourceNotFound => "RemoteResourceNotFound",
            ErrorKind::RemoteFetchError => "RemoteFetchError",
            ErrorKind::InvalidResponseBody => "InvalidResponseBody",
            ErrorKind::RemoteApiError => "RemoteAPIError",
            ErrorKind::AliasNotFound => "AliasNotFound",
            ErrorKind::Prompt => "PromptError",
            ErrorKind::Codec => "CodecError",
            ErrorKind::Storage => "StorageError",
            ErrorKind::LocalFile => "LocalFileError",
            ErrorKind::Io => "IoError",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Auth(e) => match e {
                AuthError::NoAuthorizationData => ErrorKind::NoAuthorizationData,
                AuthError::InvalidInput => ErrorKind::InvalidInput,
                AuthError::Decryption => ErrorKind::DecryptionError,
                AuthError::AliasNotFound(_) => ErrorKind::AliasNotFound,
                AuthError::Prompt(_) => ErrorKind::Prompt,
            },
            Error::Remote(e) => match e {
                RemoteError::NotFound { .. } => ErrorKind::RemoteResourceNotFound,
                RemoteError::Fetch { .. } | RemoteError::Client(_) => ErrorKind::RemoteFetchError,
                RemoteError::InvalidBody { .. } => ErrorKind::InvalidResponseBody,
                RemoteError::Api { .. } => ErrorKind::RemoteApiError,
            },
            Error::Codec(_) => ErrorKind::Codec,
            Error::Store(_) => ErrorKind::Storage,
            Error::Load(_) => ErrorKind::LocalFile,
            Error::Io(_) => ErrorKind::Io,
        }
    }

    /// Remediation hint shown under the error message, if any.
    pub fn hint(&self) -> Option<String> {
        match self {
            Error::Auth(AuthError::NoAuthorizationData) => {
                Some("pass --api-key or run: courier login".to_string())
            }
            Error::Auth(AuthError::Decryption) => {
                Some("verify the key entered is correct".to_string())
            }
            Error::Auth(AuthError::AliasNotFound(_)) => {
                Some("run: courier profiles".to_string())
            }
            Error::Remote(RemoteError::NotFound { location }) => Some(format!(
                "\"{}\" is neither a Postman ID/UID nor an http(s) URL",
                location
            )),
            Error::Remote(RemoteError::Fetch { url, .. }) => {
                Some(format!("unable to fetch data from url \"{}\"", url))
            }
            Error::Remote(RemoteError::InvalidBody { url, .. }) => {
                Some(format!("the url \"{}\" did not provide valid JSON data", url))
            }
            Error::Remote(RemoteError::Api {
                resource,
                operation,
                ..
            }) => Some(match operation {
                Operation::Fetch => format!(
                    "Error fetching the {} from the provided URL. Ensure that the URL is valid.",
                    resource
                ),
                Operation::Sync => format!(
                    "Error synchronizing the {} with the provided URL. Ensure that the URL is valid.",
                    resource
                ),
            }),
            Error::Codec(CodecError::InvalidEncoding(_)) => {
                Some("the stored profile is corrupt; run: courier login".to_string())
            }
            Error::Load(LoadError::Read { path, .. }) => Some(format!(
                "unable to read data from file \"{}\"",
                path.display()
            )),
            Error::Load(LoadError::Parse { path, .. }) => Some(format!(
                "the file at \"{}\" does not contain valid JSON data",
                path.display()
            )),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
