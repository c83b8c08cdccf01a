use url::Url;

/// Pull the invite token out of an invite link's query string. Returns
/// `None` when the link doesn't parse or carries no `token` parameter;
/// callers treat that as the empty token and let the server turn it away.
///
/// This happens once at startup. The token is immutable for the life of
/// the app.
#[must_use]
pub fn token_from_url(link: &str) -> Option<String> {
    let url = Url::parse(link).ok()?;

    url.query_pairs()
        .find_map(|(key, value)| (key == "token").then(|| value.into_owned()))
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn extracts_token() {
        assert_eq!(
            token_from_url("https://enroll.example.com/register?token=abc123"),
            Some("abc123".to_string())
        );
    }

    #[test]
    fn first_token_wins() {
        assert_eq!(
            token_from_url("https://enroll.example.com/register?token=one&token=two"),
            Some("one".to_string())
        );
    }

    #[test]
    fn missing_token_is_none() {
        assert_eq!(
            token_from_url("https://enroll.example.com/register?ref=mail"),
            None
        );
    }

    #[test]
    fn garbage_is_none() {
        assert_eq!(token_from_url("not a url"), None);
    }
}
