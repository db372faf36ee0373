//! The seam between this crate and whatever performs authenticated requests.
//!
//! Everything in this crate talks to Steam through an [`HttpExecutor`]. The executor owns the
//! session (cookies), the transport and any timeouts. It is implemented for
//! [`reqwest_middleware::ClientWithMiddleware`] and [`reqwest::Client`], so in most cases you
//! can pass a client built with [`get_default_client`](crate::helpers::get_default_client).

use crate::error::Error;
use async_trait::async_trait;
use bytes::Bytes;
use lazy_regex::{regex_captures, regex_is_match};
use reqwest::header::{self, HeaderMap, HeaderName, HeaderValue};
use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;

/// A request to be performed by an [`HttpExecutor`].
#[derive(Debug, Clone)]
pub struct HttpRequest {
    /// The request method.
    pub method: Method,
    /// The full URL, including the query string.
    pub url: String,
    /// Headers to add to the request.
    pub headers: HeaderMap,
    /// Form fields to send as an `application/x-www-form-urlencoded` body.
    pub form: Option<Vec<(&'static str, String)>>,
}

impl HttpRequest {
    /// Creates a GET request.
    pub fn get<U>(url: U) -> Self
    where
        U: Into<String>,
    {
        Self::new(Method::GET, url)
    }

    /// Creates a POST request.
    pub fn post<U>(url: U) -> Self
    where
        U: Into<String>,
    {
        Self::new(Method::POST, url)
    }

    fn new<U>(method: Method, url: U) -> Self
    where
        U: Into<String>,
    {
        Self {
            method,
            url: url.into(),
            headers: HeaderMap::new(),
            form: None,
        }
    }

    /// Adds a header. Values which are not valid header values are skipped.
    pub fn header(mut self, name: HeaderName, value: &str) -> Self {
        match HeaderValue::from_str(value) {
            Ok(value) => {
                self.headers.insert(name, value);
            },
            Err(_error) => log::warn!("Skipping invalid value for header {name}"),
        }

        self
    }

    /// Sets the form body.
    pub fn form(mut self, form: Vec<(&'static str, String)>) -> Self {
        self.form = Some(form);
        self
    }
}

/// A response whose body has been read in full.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    /// The status code.
    pub status: StatusCode,
    /// The response headers.
    pub headers: HeaderMap,
    /// The response body.
    pub body: Bytes,
}

/// Performs requests on behalf of the APIs in this crate.
///
/// Implementations must read the response body to completion before returning and should
/// report failures to reach the server as [`Error::Reqwest`] or [`Error::ReqwestMiddleware`].
#[async_trait]
pub trait HttpExecutor: Send + Sync {
    /// Performs the request.
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, Error>;
}

#[async_trait]
impl HttpExecutor for reqwest_middleware::ClientWithMiddleware {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, Error> {
        let mut builder = self.request(request.method, &request.url)
            .headers(request.headers);

        if let Some(form) = &request.form {
            builder = builder.form(form);
        }

        let response = builder.send().await?;

        read_response(response).await
    }
}

#[async_trait]
impl HttpExecutor for reqwest::Client {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, Error> {
        let mut builder = self.request(request.method, &request.url)
            .headers(request.headers);

        if let Some(form) = &request.form {
            builder = builder.form(form);
        }

        let response = builder.send().await?;

        read_response(response).await
    }
}

async fn read_response(response: reqwest::Response) -> Result<HttpResponse, Error> {
    let status = response.status();
    let headers = response.headers().clone();
    let body = response.bytes().await?;

    Ok(HttpResponse {
        status,
        headers,
        body,
    })
}

fn is_login(location: Option<&HeaderValue>) -> bool {
    location
        .and_then(|location| location.to_str().ok())
        .map(|location| regex_is_match!("/login", location))
        .unwrap_or(false)
}

/// Checks the status of the response, returning its body if the status is acceptable.
pub fn check_response(response: HttpResponse) -> Result<Bytes, Error> {
    match response.status.as_u16() {
        300..=399 if is_login(response.headers.get(header::LOCATION)) => {
            Err(Error::NotLoggedIn)
        },
        400..=599 => {
            Err(Error::Http(response.status))
        },
        _ => {
            Ok(response.body)
        },
    }
}

/// Checks that the response has a `200 OK` status, returning its body.
pub fn check_ok(response: HttpResponse) -> Result<Bytes, Error> {
    match response.status {
        StatusCode::OK => Ok(response.body),
        status if status.is_redirection() && is_login(response.headers.get(header::LOCATION)) => {
            Err(Error::NotLoggedIn)
        },
        status => Err(Error::Http(status)),
    }
}

/// Parses a JSON body.
///
/// Steam sometimes serves an HTML error page where JSON is expected. When the body can't be
/// parsed the page is checked for a known error so the message can be surfaced.
pub fn parse_body<D>(body: &[u8]) -> Result<D, Error>
where
    D: DeserializeOwned,
{
    match serde_json::from_slice::<D>(body) {
        Ok(body) => Ok(body),
        Err(parse_error) => {
            let html = String::from_utf8_lossy(body);

            if regex_is_match!(r#"<h1>Sorry!</h1>"#, &html) {
                if let Some((_, message)) = regex_captures!("<h3>(.+)</h3>", &html) {
                    Err(Error::Response(message.into()))
                } else {
                    Err(Error::Response("Unexpected error".into()))
                }
            } else if regex_is_match!(r#"<h1>Sign In</h1>"#, &html) && regex_is_match!(r#"g_steamID = false;"#, &html) {
                Err(Error::NotLoggedIn)
            } else {
                Err(Error::Parse(parse_error))
            }
        },
    }
}

/// Checks the response and parses its JSON body.
pub fn parses_response<D>(response: HttpResponse) -> Result<D, Error>
where
    D: DeserializeOwned,
{
    let body = check_response(response)?;

    parse_body(&body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    struct Body {
        success: bool,
    }

    fn response(status: StatusCode, body: &'static str) -> HttpResponse {
        HttpResponse {
            status,
            headers: HeaderMap::new(),
            body: Bytes::from_static(body.as_bytes()),
        }
    }

    #[test]
    fn parses_json_response() {
        let body: Body = parses_response(response(StatusCode::OK, r#"{"success":true}"#)).unwrap();

        assert!(body.success);
    }

    #[test]
    fn server_error_is_http_error() {
        let result = parses_response::<Body>(response(StatusCode::BAD_GATEWAY, ""));

        assert!(matches!(result, Err(Error::Http(StatusCode::BAD_GATEWAY))));
    }

    #[test]
    fn login_redirect_is_not_logged_in() {
        let mut redirect = response(StatusCode::FOUND, "");

        redirect.headers.insert(
            header::LOCATION,
            HeaderValue::from_static("https://steamcommunity.com/login/home/"),
        );

        assert!(matches!(check_response(redirect), Err(Error::NotLoggedIn)));
    }

    #[test]
    fn surfaces_error_page_message() {
        let html = "<html><h1>Sorry!</h1><h3>An error was encountered while processing your request.</h3></html>";
        let result = parses_response::<Body>(response(StatusCode::OK, html));

        match result {
            Err(Error::Response(message)) => {
                assert_eq!(message, "An error was encountered while processing your request.");
            },
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn malformed_json_is_parse_error() {
        let result = parses_response::<Body>(response(StatusCode::OK, "{\"success\":"));

        assert!(matches!(result, Err(Error::Parse(_))));
    }

    #[test]
    fn check_ok_rejects_other_success_statuses() {
        let result = check_ok(response(StatusCode::NO_CONTENT, ""));

        assert!(matches!(result, Err(Error::Http(StatusCode::NO_CONTENT))));
    }
}
