//! This module is necessary to hand the callback query back to the browser
//! exactly as the authorization server sent it.

use std::convert::Infallible;

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use tracing::instrument;


/// The query string of a callback request, preserved as-is.
///
/// Nothing is percent-decoded; the navigation target handed back to the
/// browser must match what the authorization server sent byte for byte.
#[derive(Debug, PartialEq, Eq)]
pub struct CallbackQuery {
    raw: String,
    parameters: Vec<(String, String)>,
}

impl CallbackQuery {
    /// Splits a still percent-encoded query into key/value pairs without
    /// decoding anything. Keys may repeat and order is preserved; a part
    /// with no `=` is kept as a key with an empty value.
    pub(crate) fn parse(raw_query: &str) -> Self {
        let parameters = if raw_query.is_empty() {
            vec![]
        } else {
            raw_query
                .split('&')
                .map(|part| match part.split_once('=') {
                    Some((key, value)) => (key.to_owned(), value.to_owned()),
                    None => (part.to_owned(), String::new()),
                })
                .collect()
        };

        Self {
            raw: raw_query.to_owned(),
            parameters,
        }
    }

    /// The query exactly as received, still percent-encoded. Empty when the
    /// request carried no query at all.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// The split key/value pairs, still percent-encoded.
    pub fn parameters(&self) -> &[(String, String)] {
        &self.parameters
    }
}

#[async_trait::async_trait]
impl<S> FromRequestParts<S> for CallbackQuery
where
    S: Send + Sync,
{
    /// Extraction cannot fail; a request without a query is an empty query.
    type Rejection = Infallible;

    #[instrument(name = "extract_callback_query", skip_all)]
    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        // this string is still percent-encoded. keep it that way!
        let query = parts.uri.query().unwrap_or_default();

        tracing::trace!("Started to parse query: {:?}", query);

        let result = Self::parse(query);

        tracing::trace!("Resulted in: {:?}", result);

        Ok(result)
    }
}
