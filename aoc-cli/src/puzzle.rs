//! Input fetching with cache replay

use crate::cache::PuzzleCache;
use crate::error::CliError;
use aoc_client::AocClient;

/// Get the raw input for a day.
///
/// The cache is the source of truth for repeat invocations: each day is
/// fetched over the network at most once, ever. Freshly fetched input has its
/// trailing newlines stripped before being stored.
pub fn get_input(
    client: &AocClient,
    cache: &mut PuzzleCache,
    session: &str,
    day: u8,
) -> Result<String, CliError> {
    if let Some(text) = cache.input(day) {
        return Ok(text.to_string());
    }
    let fetched = client.fetch_input(day, session)?;
    let text = fetched.trim_end_matches('\n').to_string();
    cache.store_input(day, text.clone());
    cache.commit()?;
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_fetches_once_then_replays_from_cache() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("GET", "/2016/day/9/input")
            .with_status(200)
            .with_body("decompress me\n\n")
            .expect(1)
            .create();

        let client = AocClient::builder()
            .base_url(server.url())
            .unwrap()
            .year(2016)
            .build()
            .unwrap();
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("cache.json");

        let mut cache = PuzzleCache::load(path.clone()).unwrap();
        let first = get_input(&client, &mut cache, "token", 9).unwrap();
        assert_eq!(first, "decompress me");

        // A fresh process sees the committed cache and never hits the network.
        let mut cache = PuzzleCache::load(path).unwrap();
        let second = get_input(&client, &mut cache, "token", 9).unwrap();
        assert_eq!(second, "decompress me");

        mock.assert();
    }

    #[test]
    fn test_fetch_error_propagates() {
        let mut server = mockito::Server::new();
        server
            .mock("GET", "/2016/day/2/input")
            .with_status(404)
            .with_body("Not found")
            .create();

        let client = AocClient::builder()
            .base_url(server.url())
            .unwrap()
            .year(2016)
            .build()
            .unwrap();
        let temp = TempDir::new().unwrap();
        let mut cache = PuzzleCache::load(temp.path().join("cache.json")).unwrap();

        let result = get_input(&client, &mut cache, "token", 2);
        assert!(matches!(
            result,
            Err(CliError::Http(aoc_client::ClientError::BadStatus { .. }))
        ));
        // Failed fetches are not cached.
        assert!(cache.input(2).is_none());
    }
}
