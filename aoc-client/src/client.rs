//! AOC HTTP client implementation

use crate::error::ClientError;
use crate::response::{ResponseParser, Verdict};
use reqwest::header::HeaderValue;
use zeroize::Zeroize;

const DEFAULT_BASE_URL: &str = "https://adventofcode.com";

/// Blocking HTTP client for one Advent of Code event year.
///
/// Endpoints are `{base}/{year}/day/{day}/input` (GET) and
/// `{base}/{year}/day/{day}/answer` (POST), both authenticated with the
/// session cookie.
#[derive(Clone, Debug)]
pub struct AocClient {
    client: reqwest::blocking::Client,
    base_url: reqwest::Url,
    year: u16,
    parser: ResponseParser,
}

impl AocClient {
    /// Create a builder for configuring the client
    pub fn builder() -> AocClientBuilder {
        AocClientBuilder::new()
    }

    /// The event year this client talks to
    pub fn year(&self) -> u16 {
        self.year
    }

    /// The puzzle page URL for a day, with the part-2 anchor
    pub fn part2_url(&self, day: u8) -> String {
        format!("{}/{}/day/{}#part2", self.base_url.as_str().trim_end_matches('/'), self.year, day)
    }

    /// Create a cookie header from the session token, marked sensitive so it
    /// never appears in logs; the temporary string is zeroized after use.
    fn create_cookie_header(session: &str) -> Result<HeaderValue, ClientError> {
        let mut cookie_string = format!("session={}", session);
        let header_value = HeaderValue::from_bytes(cookie_string.as_bytes())
            .map_err(|_| ClientError::Init("Invalid session cookie format".to_string()))?;

        let mut sensitive_header = header_value;
        sensitive_header.set_sensitive(true);
        cookie_string.zeroize();

        Ok(sensitive_header)
    }

    fn day_url(&self, day: u8, endpoint: &str) -> Result<reqwest::Url, ClientError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ClientError::Init("Cannot modify base URL path".to_string()))?
            .clear()
            .extend(&[&self.year.to_string(), "day", &day.to_string(), endpoint]);
        Ok(url)
    }

    /// Fetch the raw puzzle input for a day.
    ///
    /// # Errors
    ///
    /// * [`ClientError::Request`] — network failure
    /// * [`ClientError::BadStatus`] — non-2xx response (includes the body)
    /// * [`ClientError::Encoding`] — response is not valid UTF-8
    pub fn fetch_input(&self, day: u8, session: &str) -> Result<String, ClientError> {
        let cookie_header = Self::create_cookie_header(session)?;

        let response = self
            .client
            .get(self.day_url(day, "input")?)
            .header("Cookie", cookie_header)
            .send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::BadStatus {
                status,
                body: response.text().unwrap_or_default(),
            });
        }

        response.text().map_err(|_| ClientError::Encoding)
    }

    /// Submit an answer for a part and classify the response.
    ///
    /// The answer goes in form fields `level` (the part number) and `answer`.
    /// Rate limiting is reported as a [`Verdict::RateLimited`], not an error;
    /// retrying is the caller's decision.
    pub fn post_answer(
        &self,
        day: u8,
        part: u8,
        answer: &str,
        session: &str,
    ) -> Result<Verdict, ClientError> {
        let cookie_header = Self::create_cookie_header(session)?;
        let form = [("level", part.to_string()), ("answer", answer.to_string())];

        let response = self
            .client
            .post(self.day_url(day, "answer")?)
            .header("Cookie", cookie_header)
            .form(&form)
            .send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::BadStatus {
                status,
                body: response.text().unwrap_or_default(),
            });
        }

        let html = response.text().map_err(|_| ClientError::Encoding)?;
        self.parser.parse_submission_response(&html)
    }
}

/// Builder for [`AocClient`]
#[derive(Debug)]
pub struct AocClientBuilder {
    base_url: Option<reqwest::Url>,
    year: u16,
    client_builder: Option<reqwest::blocking::ClientBuilder>,
}

impl AocClientBuilder {
    pub fn new() -> Self {
        Self {
            base_url: None,
            year: 2016,
            client_builder: None,
        }
    }

    /// Set a custom base URL (useful for testing against a mock server).
    /// Parsed and validated at builder time so errors surface early.
    pub fn base_url(mut self, url: impl reqwest::IntoUrl) -> Result<Self, ClientError> {
        self.base_url = Some(url.into_url()?);
        Ok(self)
    }

    /// Set the event year
    pub fn year(mut self, year: u16) -> Self {
        self.year = year;
        self
    }

    /// Set a custom HTTP client builder (timeouts, proxies, ...)
    pub fn client_builder(mut self, builder: reqwest::blocking::ClientBuilder) -> Self {
        self.client_builder = Some(builder);
        self
    }

    /// Build the client with the configured settings
    pub fn build(self) -> Result<AocClient, ClientError> {
        let base_url = self.base_url.unwrap_or_else(|| {
            reqwest::Url::parse(DEFAULT_BASE_URL).expect("Default base URL should always be valid")
        });

        let builder = self
            .client_builder
            .unwrap_or_else(|| reqwest::blocking::Client::builder().use_rustls_tls());

        let client = builder
            .build()
            .map_err(|e| ClientError::Init(e.to_string()))?;

        Ok(AocClient {
            client,
            base_url,
            year: self.year,
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

    const CORRECT_PAGE: &str =
        r#"<html><body><article>That's the right answer!</article></body></html>"#;

    #[test]
    fn test_default_base_url_and_year() {
        let client = AocClient::builder().build().unwrap();
        assert_eq!(client.base_url.as_str(), "https://adventofcode.com/");
        assert_eq!(client.year(), 2016);
    }

    #[test]
    fn test_invalid_base_url() {
        assert!(AocClient::builder().base_url("not a valid url").is_err());
    }

    #[test]
    fn test_part2_url() {
        let client = AocClient::builder().year(2016).build().unwrap();
        assert_eq!(client.part2_url(25), "https://adventofcode.com/2016/day/25#part2");
    }

    #[test]
    fn test_fetch_input_url_and_body() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("GET", "/2016/day/7/input")
            .match_header("cookie", "session=token")
            .with_status(200)
            .with_body("abba[mnop]qrst\n")
            .expect(1)
            .create();

        let client = AocClient::builder()
            .base_url(server.url())
            .unwrap()
            .year(2016)
            .build()
            .unwrap();

        let input = client.fetch_input(7, "token").unwrap();
        assert_eq!(input, "abba[mnop]qrst\n");
        mock.assert();
    }

    #[test]
    fn test_bad_status_includes_body() {
        let mut server = mockito::Server::new();
        server
            .mock("GET", "/2016/day/1/input")
            .with_status(400)
            .with_body("Please log in first")
            .create();

        let client = AocClient::builder()
            .base_url(server.url())
            .unwrap()
            .build()
            .unwrap();

        match client.fetch_input(1, "token").unwrap_err() {
            ClientError::BadStatus { status, body } => {
                assert_eq!(status.as_u16(), 400);
                assert_eq!(body, "Please log in first");
            }
            other => panic!("expected BadStatus, got {other:?}"),
        }
    }

    #[test]
    fn test_post_answer_form_fields() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("POST", "/2016/day/3/answer")
            .match_body(mockito::Matcher::AllOf(vec![
                mockito::Matcher::UrlEncoded("level".into(), "2".into()),
                mockito::Matcher::UrlEncoded("answer".into(), "1719".into()),
            ]))
            .with_status(200)
            .with_body(CORRECT_PAGE)
            .expect(1)
            .create();

        let client = AocClient::builder()
            .base_url(server.url())
            .unwrap()
            .year(2016)
            .build()
            .unwrap();

        let verdict = client.post_answer(3, 2, "1719", "token").unwrap();
        assert!(verdict.is_correct());
        mock.assert();
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(10))]

        #[test]
        fn prop_base_url_configuration(
            scheme in prop::sample::select(vec!["http", "https"]),
            host in "[a-z]{3,10}",
            port in 1000u16..10000u16,
        ) {
            let base_url = format!("{}://{}:{}", scheme, host, port);

            let client = AocClient::builder()
                .base_url(&base_url)
                .unwrap()
                .build()
                .unwrap();

            prop_assert_eq!(client.base_url.scheme(), scheme);
            prop_assert_eq!(client.base_url.host_str(), Some(host.as_str()));
            prop_assert_eq!(client.base_url.port(), Some(port));
        }

        #[test]
        fn prop_year_lands_in_path(year in 2015u16..2030u16, day in 1u8..=25u8) {
            let mut server = mockito::Server::new();
            let expected_path = format!("/{}/day/{}/input", year, day);
            let mock = server
                .mock("GET", expected_path.as_str())
                .with_status(200)
                .with_body("data")
                .expect(1)
                .create();

            let client = AocClient::builder()
                .base_url(server.url())
                .unwrap()
                .year(year)
                .build()
                .unwrap();

            prop_assert!(client.fetch_input(day, "s").is_ok());
            mock.assert();
        }
    }
}
