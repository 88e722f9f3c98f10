//! HTTP client for the Advent of Code site

use crate::error::AocError;
use crate::identity::PuzzleId;
use crate::parser::ResponseParser;
use reqwest::StatusCode;
use reqwest::header::HeaderValue;
use zeroize::Zeroize;

/// Fixed identifying user-agent, so the site operator can tell the tool apart
pub const USER_AGENT: &str = "aoc-tools by hlyndon20@gmail.com";

/// Classified outcome of an answer submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionResult {
    /// "That's the right answer"
    Correct,
    /// "That's not the right answer"
    Incorrect,
    /// Anything else (throttled, already solved, wrong level); carries the
    /// full message text verbatim, not parsed further
    Other(String),
}

/// HTTP client for fetching puzzle inputs and submitting answers.
///
/// The client carries the session token as a cookie and a fixed identifying
/// user-agent. Redirects are never followed: the site answers an input
/// request with a redirect when the session cookie has gone stale, and that
/// signal must reach the status mapping intact.
///
/// # Example
///
/// ```no_run
/// use aoc_client::{AocClient, PuzzleId};
///
/// # fn main() -> Result<(), aoc_client::AocError> {
/// let client = AocClient::new()?;
/// let id = PuzzleId::new(2023, 1)?;
/// let input = client.fetch_input(id, "your_session_cookie")?;
/// println!("{} bytes of input", input.len());
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct AocClient {
    client: reqwest::blocking::Client,
    base_url: reqwest::Url,
    parser: ResponseParser,
}

impl AocClient {
    /// Create a client with the default configuration
    ///
    /// # Errors
    ///
    /// Returns `AocError::ClientInit` if the HTTP client cannot be built.
    pub fn new() -> Result<Self, AocError> {
        Self::builder().build()
    }

    /// Create a builder for configuring the client
    pub fn builder() -> AocClientBuilder {
        AocClientBuilder::new()
    }

    /// Build the session cookie header, marked sensitive; the temporary
    /// cookie string is zeroized after use.
    fn cookie_header(session: &str) -> Result<HeaderValue, AocError> {
        let mut cookie = format!("session={}", session);
        let value = HeaderValue::from_bytes(cookie.as_bytes())
            .map_err(|_| AocError::ClientInit("invalid session cookie format".to_string()));
        cookie.zeroize();

        let mut value = value?;
        value.set_sensitive(true);
        Ok(value)
    }

    /// URL for `/{year}/day/{day}/{leaf}`
    fn puzzle_url(&self, id: PuzzleId, leaf: &str) -> Result<reqwest::Url, AocError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| AocError::ClientInit("cannot modify base URL path".to_string()))?
            .clear()
            .extend(&[&id.year().to_string(), "day", &id.day().to_string(), leaf]);
        Ok(url)
    }

    /// Fetch the puzzle input text for an identity.
    ///
    /// Status mapping: 200 is the input body; 302 means the session expired;
    /// 404 means the puzzle does not exist or has not unlocked; 400 means the
    /// session is invalid; any other status is a generic fetch failure.
    ///
    /// # Errors
    ///
    /// `ExpiredSession`, `InputNotFound`, `InvalidSession`,
    /// `FetchFailed { status }`, `Request`, or `Encoding`.
    pub fn fetch_input(&self, id: PuzzleId, session: &str) -> Result<String, AocError> {
        let cookie = Self::cookie_header(session)?;
        let url = self.puzzle_url(id, "input")?;

        let response = self.client.get(url).header("Cookie", cookie).send()?;

        match response.status() {
            StatusCode::OK => response.text().map_err(|_| AocError::Encoding),
            StatusCode::FOUND => Err(AocError::ExpiredSession),
            StatusCode::NOT_FOUND => Err(AocError::InputNotFound),
            StatusCode::BAD_REQUEST => Err(AocError::InvalidSession),
            status => Err(AocError::FetchFailed { status }),
        }
    }

    /// Submit an answer for a puzzle part and classify the site's verdict.
    ///
    /// Posts form fields `level` and `answer`, then matches the message text
    /// of the HTML response body.
    ///
    /// # Errors
    ///
    /// `FetchFailed { status }` on a non-200 response, `Request`, `Encoding`,
    /// or `HtmlParse` when the body carries no message element.
    pub fn submit_answer(
        &self,
        id: PuzzleId,
        part: u8,
        answer: &str,
        session: &str,
    ) -> Result<SubmissionResult, AocError> {
        let cookie = Self::cookie_header(session)?;
        let url = self.puzzle_url(id, "answer")?;

        let form = [("level", part.to_string()), ("answer", answer.to_string())];

        let response = self
            .client
            .post(url)
            .header("Cookie", cookie)
            .form(&form)
            .send()?;

        if response.status() != StatusCode::OK {
            return Err(AocError::FetchFailed {
                status: response.status(),
            });
        }

        let html = response.text().map_err(|_| AocError::Encoding)?;
        self.parser.classify(&html)
    }
}

/// Builder for configuring an [`AocClient`].
///
/// The base URL can be overridden for tests against a mock server. The
/// redirect policy is always forced to `none` and the identifying user-agent
/// is always applied, whatever the provided builder configures.
///
/// # Example
///
/// ```no_run
/// use aoc_client::AocClient;
/// use std::time::Duration;
///
/// # fn main() -> Result<(), aoc_client::AocError> {
/// let client = AocClient::builder()
///     .base_url("http://localhost:1234")?
///     .client_builder(
///         reqwest::blocking::Client::builder().timeout(Duration::from_secs(10)),
///     )
///     .build()?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct AocClientBuilder {
    base_url: Option<reqwest::Url>,
    client_builder: Option<reqwest::blocking::ClientBuilder>,
}

impl AocClientBuilder {
    /// Create a new builder with default settings
    pub fn new() -> Self {
        Self {
            base_url: None,
            client_builder: None,
        }
    }

    /// Set a custom base URL, parsed and validated at builder time
    ///
    /// # Errors
    ///
    /// Returns an error if the URL cannot be parsed.
    pub fn base_url(mut self, url: impl reqwest::IntoUrl) -> Result<Self, AocError> {
        self.base_url = Some(url.into_url()?);
        Ok(self)
    }

    /// Set a custom HTTP client builder (timeouts, proxies, ...)
    pub fn client_builder(mut self, builder: reqwest::blocking::ClientBuilder) -> Self {
        self.client_builder = Some(builder);
        self
    }

    /// Build the client
    ///
    /// # Errors
    ///
    /// Returns `AocError::ClientInit` if the HTTP client cannot be built.
    pub fn build(self) -> Result<AocClient, AocError> {
        let base_url = self.base_url.unwrap_or_else(|| {
            reqwest::Url::parse("https://adventofcode.com")
                .expect("default base URL should always be valid")
        });

        let builder = self
            .client_builder
            .unwrap_or_else(|| reqwest::blocking::Client::builder().use_rustls_tls());

        let client = builder
            .user_agent(USER_AGENT)
            .redirect(reqwest::redirect::Policy::none())
            .build()
            .map_err(|e| AocError::ClientInit(e.to_string()))?;

        Ok(AocClient {
            client,
            base_url,
            parser: ResponseParser::new(),
        })
    }
}

impl Default for AocClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn id(year: u16, day: u8) -> PuzzleId {
        PuzzleId::new(year, day).unwrap()
    }

    fn client_for(server: &mockito::Server) -> AocClient {
        AocClient::builder()
            .base_url(server.url())
            .unwrap()
            .build()
            .unwrap()
    }

    #[test]
    fn test_default_base_url() {
        let client = AocClient::builder().build().unwrap();
        assert_eq!(client.base_url.as_str(), "https://adventofcode.com/");
    }

    #[test]
    fn test_invalid_base_url() {
        assert!(AocClient::builder().base_url("not a valid url").is_err());
    }

    #[test]
    fn test_fetch_sends_cookie_and_user_agent() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("GET", "/2023/day/1/input")
            .match_header("cookie", "session=sekrit")
            .match_header("user-agent", USER_AGENT)
            .with_status(200)
            .with_body("1\n2\n3\n")
            .expect(1)
            .create();

        let input = client_for(&server).fetch_input(id(2023, 1), "sekrit").unwrap();
        assert_eq!(input, "1\n2\n3\n");
        mock.assert();
    }

    #[test]
    fn test_redirect_maps_to_expired_session_without_following() {
        let mut server = mockito::Server::new();
        // The redirect target must never be requested
        let home = server
            .mock("GET", "/")
            .with_status(200)
            .expect(0)
            .create();
        let input = server
            .mock("GET", "/2023/day/1/input")
            .with_status(302)
            .with_header("location", "/")
            .expect(1)
            .create();

        let result = client_for(&server).fetch_input(id(2023, 1), "stale");
        assert!(matches!(result, Err(AocError::ExpiredSession)));
        home.assert();
        input.assert();
    }

    #[test]
    fn test_status_mapping() {
        let cases: [(usize, fn(&AocError) -> bool); 3] = [
            (404, |e| matches!(e, AocError::InputNotFound)),
            (400, |e| matches!(e, AocError::InvalidSession)),
            (500, |e| {
                matches!(e, AocError::FetchFailed { status } if status.as_u16() == 500)
            }),
        ];

        for (status, check) in cases {
            let mut server = mockito::Server::new();
            let mock = server
                .mock("GET", "/2023/day/1/input")
                .with_status(status)
                .expect(1)
                .create();

            let err = client_for(&server)
                .fetch_input(id(2023, 1), "token")
                .unwrap_err();
            assert!(check(&err), "status {} mapped to {:?}", status, err);
            mock.assert();
        }
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(10))]

        #[test]
        fn prop_input_url_construction(
            year in 2015u16..=2025u16,
            day in 1u8..=25u8,
            session in "[a-f0-9]{32,128}",
        ) {
            let mut server = mockito::Server::new();
            let expected_path = format!("/{}/day/{}/input", year, day);
            let mock = server
                .mock("GET", expected_path.as_str())
                .with_status(200)
                .with_body("test input data")
                .expect(1)
                .create();

            let result = client_for(&server).fetch_input(id(year, day), &session);
            prop_assert!(result.is_ok());
            prop_assert_eq!(result.unwrap(), "test input data");
            mock.assert();
        }

        #[test]
        fn prop_submission_form_fields(
            year in 2015u16..=2025u16,
            day in 1u8..=25u8,
            part in 1u8..=2u8,
            answer in "[0-9]{1,10}",
        ) {
            let mut server = mockito::Server::new();
            let expected_path = format!("/{}/day/{}/answer", year, day);
            let mock = server
                .mock("POST", expected_path.as_str())
                .match_body(mockito::Matcher::AllOf(vec![
                    mockito::Matcher::UrlEncoded("level".into(), part.to_string()),
                    mockito::Matcher::UrlEncoded("answer".into(), answer.clone()),
                ]))
                .with_status(200)
                .with_body(
                    r#"<html><body><article>That's the right answer!</article></body></html>"#,
                )
                .expect(1)
                .create();

            let result = client_for(&server).submit_answer(id(year, day), part, &answer, "tok");
            prop_assert!(result.is_ok());
            prop_assert_eq!(result.unwrap(), SubmissionResult::Correct);
            mock.assert();
        }
    }

    #[test]
    fn test_submit_non_200_is_fetch_failed() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("POST", "/2023/day/1/answer")
            .with_status(503)
            .expect(1)
            .create();

        let err = client_for(&server)
            .submit_answer(id(2023, 1), 1, "42", "tok")
            .unwrap_err();
        assert!(matches!(err, AocError::FetchFailed { status } if status.as_u16() == 503));
        mock.assert();
    }
}
