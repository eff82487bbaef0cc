//! HTTP client for the Advent of Code website.
//!
//! Fetches puzzle input and submits answers for one event year, classifying
//! the submission response page into a [`Verdict`]. Uses blocking I/O and
//! rustls (no OpenSSL dependencies); the session cookie is passed per call
//! and never logged.
//!
//! ```no_run
//! use aoc_client::AocClient;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let client = AocClient::builder().year(2016).build()?;
//! let session = "your_session_cookie";
//!
//! let input = client.fetch_input(25, session)?;
//! let verdict = client.post_answer(25, 1, "42", session)?;
//! println!("{}", verdict.message());
//! # Ok(())
//! # }
//! ```

mod client;
mod error;
mod response;

pub use client::{AocClient, AocClientBuilder};
pub use error::ClientError;
pub use response::Verdict;
