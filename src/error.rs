use reqwest::StatusCode;
use std::fmt;
use std::num::ParseIntError;

/// Any error that can occur within the crate.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// An invalid or missing parameter.
    #[error("Invalid parameter: {}", .0)]
    Parameter(#[from] ParameterError),
    /// The request could not be completed.
    #[error("Request error: {}", .0)]
    Reqwest(#[from] reqwest::Error),
    /// A middleware of the client failed to complete the request.
    #[error("Request middleware error: {}", .0)]
    ReqwestMiddleware(anyhow::Error),
    /// The response carried an unexpected status code.
    #[error("Error {}", .0)]
    Http(StatusCode),
    /// The request was redirected to the login page or the response said we need to log in.
    #[error("Not logged in")]
    NotLoggedIn,
    /// The body of the response could not be parsed.
    #[error("Error parsing response: {}", .0)]
    Parse(#[from] serde_json::Error),
    /// An HTML page did not have the expected contents.
    #[error("Error parsing HTML document: {}", .0)]
    Html(#[from] ParseHtmlError),
    /// The response was parsed but is missing something it promised to include.
    #[error("Malformed response: {}", .0)]
    MalformedResponse(&'static str),
    /// The response said more items are available but did not give a usable cursor to get them.
    #[error("Invalid cursor for next inventory page: {:?}", .0)]
    InvalidCursor(String),
    /// An unexpected response. Usually an error page.
    #[error("Unexpected response: {}", .0)]
    Response(String),
    /// Steam reported an error loading the inventory. Contains the message from Steam.
    #[error("{}", .0)]
    Inventory(String),
    /// The identity secret is not valid base64.
    #[error("Invalid identity secret: {}", .0)]
    InvalidIdentitySecret(#[from] base64::DecodeError),
    /// Steam responded that the confirmation was not successful.
    #[error("Confirmation unsuccessful: {}", .0.as_deref().unwrap_or("unknown reason"))]
    ConfirmationUnsuccessful(Option<String>),
    /// A step of a confirmation request failed.
    #[error("Confirmation failed while {step}: {source}")]
    Confirmation {
        /// The step which failed.
        step: ConfirmationStep,
        /// The underlying error.
        #[source]
        source: Box<Error>,
    },
    /// Steam did not return prices for the item.
    #[error("Unable to load prices at this time")]
    CannotLoadPrices,
}

impl Error {
    /// Whether this error occurred while reaching Steam's servers, such as a connection failure
    /// or a timeout.
    pub fn is_transport(&self) -> bool {
        match self {
            Self::Reqwest(_) |
            Self::ReqwestMiddleware(_) => true,
            Self::Confirmation { source, .. } => source.is_transport(),
            _ => false,
        }
    }

    /// Wraps this error with the confirmation step it occurred at.
    pub(crate) fn during(self, step: ConfirmationStep) -> Self {
        Self::Confirmation {
            step,
            source: Box::new(self),
        }
    }
}

impl From<reqwest_middleware::Error> for Error {
    fn from(error: reqwest_middleware::Error) -> Error {
        match error {
            reqwest_middleware::Error::Reqwest(e) => Error::Reqwest(e),
            reqwest_middleware::Error::Middleware(e) => Error::ReqwestMiddleware(e),
        }
    }
}

/// The steps of a confirmation request, in the order they are performed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmationStep {
    /// Getting the current time from Steam's servers.
    FetchTime,
    /// Generating the confirmation key from the identity secret.
    DeriveKey,
    /// Sending the request.
    Request,
    /// Decoding the response.
    Decode,
}

impl fmt::Display for ConfirmationStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FetchTime => write!(f, "fetching server time"),
            Self::DeriveKey => write!(f, "generating confirmation key"),
            Self::Request => write!(f, "sending request"),
            Self::Decode => write!(f, "decoding response"),
        }
    }
}

/// An invalid or missing parameter.
#[derive(thiserror::Error, Debug)]
pub enum ParameterError {
    /// A session ID is required for this request.
    #[error("No session ID set")]
    NoSessionId,
    /// A SteamID is required for this request.
    #[error("No SteamID set")]
    NoSteamId,
    /// A client with the session's cookies is required for this request.
    #[error("No client set")]
    NoClient,
    /// The URL could not be built.
    #[error("{}", .0)]
    UrlParse(#[from] url::ParseError),
}

/// An error parsing an HTML document.
#[derive(thiserror::Error, Debug)]
pub enum ParseHtmlError {
    /// The document did not have the expected contents.
    #[error("{}", .0)]
    Malformed(&'static str),
    /// A CSS selector could not be parsed.
    #[error("Could not parse selector")]
    ParseSelector,
    /// A number in the document could not be parsed.
    #[error("{}", .0)]
    ParseInt(#[from] ParseIntError),
    /// Embedded JSON in the document could not be parsed.
    #[error("{}", .0)]
    Json(#[from] serde_json::Error),
}
