//! Reqwest-backed PostgREST profile store.
//!
//! This adapter owns transport details only: URL and filter rendering,
//! `Prefer` negotiation, row counting through `Content-Range`, and mapping
//! HTTP failures onto [`StoreError`] with the store's own message text.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_RANGE, CONTENT_TYPE, HeaderMap};
use reqwest::{Client, RequestBuilder, StatusCode, Url};
use serde::Deserialize;
use serde_json::Value;

use crate::domain::ports::{Filter, ProfileStore, StoreError, StoreRow};

const PREFER: &str = "Prefer";
const API_KEY: &str = "apikey";

/// Profile store adapter for one Supabase project.
pub struct PostgrestProfileStore {
    client: Client,
    base: Url,
    service_role_key: String,
}

impl PostgrestProfileStore {
    /// Build an adapter using a reqwest client with an explicit request timeout.
    ///
    /// # Errors
    ///
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn new(
        base: Url,
        service_role_key: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base,
            service_role_key: service_role_key.into(),
        })
    }

    fn request(
        &self,
        method: reqwest::Method,
        table: &str,
        filters: &[Filter],
    ) -> Result<RequestBuilder, StoreError> {
        let url = table_url(&self.base, table, filters)?;
        Ok(self
            .client
            .request(method, url)
            .header(API_KEY, self.service_role_key.as_str())
            .header(AUTHORIZATION, format!("Bearer {}", self.service_role_key))
            .header(ACCEPT, "application/json"))
    }

    async fn send(request: RequestBuilder) -> Result<(HeaderMap, Vec<u8>), StoreError> {
        let response = request.send().await.map_err(map_transport_error)?;
        let status = response.status();
        let headers = response.headers().clone();
        let body = response.bytes().await.map_err(map_transport_error)?;
        if !status.is_success() {
            return Err(map_status_error(status, body.as_ref()));
        }
        Ok((headers, body.to_vec()))
    }
}

#[async_trait]
impl ProfileStore for PostgrestProfileStore {
    async fn count_where(&self, table: &str, filters: &[Filter]) -> Result<u64, StoreError> {
        let request = self
            .request(reqwest::Method::GET, table, filters)?
            .query(&[("select", "id"), ("limit", "1")])
            .header(PREFER, "count=exact");
        let (headers, _) = Self::send(request).await?;
        content_range_total(&headers)
    }

    async fn insert_batch(&self, table: &str, rows: &[StoreRow]) -> Result<(), StoreError> {
        let request = self
            .request(reqwest::Method::POST, table, &[])?
            .header(CONTENT_TYPE, "application/json")
            .header(PREFER, "return=minimal")
            .json(rows);
        Self::send(request).await.map(|_| ())
    }

    async fn upsert_batch(
        &self,
        table: &str,
        rows: &[StoreRow],
        on_conflict: &str,
    ) -> Result<Vec<StoreRow>, StoreError> {
        let request = self
            .request(reqwest::Method::POST, table, &[])?
            .query(&[("on_conflict", on_conflict)])
            .header(CONTENT_TYPE, "application/json")
            .header(PREFER, "resolution=merge-duplicates,return=representation")
            .json(rows);
        let (_, body) = Self::send(request).await?;
        serde_json::from_slice(&body).map_err(|error| {
            StoreError::decode(format!("invalid upsert representation: {error}"))
        })
    }

    async fn delete_where(&self, table: &str, filters: &[Filter]) -> Result<u64, StoreError> {
        let request = self
            .request(reqwest::Method::DELETE, table, filters)?
            .header(PREFER, "count=exact,return=minimal");
        let (headers, _) = Self::send(request).await?;
        content_range_total(&headers)
    }
}

fn table_url(base: &Url, table: &str, filters: &[Filter]) -> Result<Url, StoreError> {
    let mut url = base.clone();
    url.path_segments_mut()
        .map_err(|()| StoreError::transport(format!("{base} cannot be a base URL")))?
        .pop_if_empty()
        .extend(["rest", "v1", table]);
    if !filters.is_empty() {
        let mut pairs = url.query_pairs_mut();
        for filter in filters {
            pairs.append_pair(filter.column(), &render_filter(filter));
        }
    }
    Ok(url)
}

fn render_filter(filter: &Filter) -> String {
    match filter {
        Filter::Eq {
            value: Value::Null, ..
        } => "is.null".to_owned(),
        Filter::Eq {
            value: Value::String(text),
            ..
        } => format!("eq.{text}"),
        Filter::Eq { value, .. } => format!("eq.{value}"),
        Filter::NonEmpty { .. } => "neq.{}".to_owned(),
    }
}

/// Total from a `Content-Range: <range>/<total>` header.
fn content_range_total(headers: &HeaderMap) -> Result<u64, StoreError> {
    let raw = headers
        .get(CONTENT_RANGE)
        .and_then(|value| value.to_str().ok())
        .ok_or_else(|| StoreError::decode("response carried no Content-Range header"))?;
    raw.rsplit_once('/')
        .and_then(|(_, total)| total.trim().parse::<u64>().ok())
        .ok_or_else(|| StoreError::decode(format!("unreadable Content-Range: {raw}")))
}

#[derive(Debug, Deserialize)]
struct PostgrestErrorBody {
    message: Option<String>,
}

fn map_transport_error(error: reqwest::Error) -> StoreError {
    if error.is_timeout() {
        StoreError::timeout(error.to_string())
    } else {
        StoreError::transport(error.to_string())
    }
}

fn map_status_error(status: StatusCode, body: &[u8]) -> StoreError {
    if let Some(message) = serde_json::from_slice::<PostgrestErrorBody>(body)
        .ok()
        .and_then(|decoded| decoded.message)
    {
        return StoreError::rejected(status.as_u16(), message);
    }

    let body_preview = body_preview(body);
    let message = if body_preview.is_empty() {
        format!("status {}", status.as_u16())
    } else {
        format!("status {}: {}", status.as_u16(), body_preview)
    };
    match status {
        StatusCode::REQUEST_TIMEOUT | StatusCode::GATEWAY_TIMEOUT => StoreError::timeout(message),
        _ => StoreError::rejected(status.as_u16(), message),
    }
}

fn body_preview(body: &[u8]) -> String {
    const PREVIEW_CHAR_LIMIT: usize = 160;

    let compact = String::from_utf8_lossy(body)
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");
    let preview = compact.chars().take(PREVIEW_CHAR_LIMIT).collect::<String>();
    if compact.chars().count() > PREVIEW_CHAR_LIMIT {
        format!("{preview}...")
    } else {
        preview
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for non-network PostgREST mapping helpers.

    use super::*;
    use reqwest::header::HeaderValue;
    use rstest::rstest;

    #[rstest]
    #[case("https://abc.supabase.co")]
    #[case("https://abc.supabase.co/")]
    fn table_urls_land_under_rest_v1(#[case] base: &str) {
        let base = Url::parse(base).expect("base url");
        let url = table_url(&base, "profiles", &[]).expect("table url");
        assert_eq!(url.as_str(), "https://abc.supabase.co/rest/v1/profiles");
    }

    #[rstest]
    fn filters_render_as_query_operators() {
        let base = Url::parse("https://abc.supabase.co").expect("base url");
        let filters = [
            Filter::eq("label", "DEMO_SEED"),
            Filter::eq("country", "South Africa"),
            Filter::eq("is_active", true),
            Filter::non_empty("photos"),
        ];
        let url = table_url(&base, "profiles", &filters).expect("table url");
        let pairs: Vec<(String, String)> = url
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();
        assert_eq!(
            pairs,
            vec![
                ("label".to_owned(), "eq.DEMO_SEED".to_owned()),
                ("country".to_owned(), "eq.South Africa".to_owned()),
                ("is_active".to_owned(), "eq.true".to_owned()),
                ("photos".to_owned(), "neq.{}".to_owned()),
            ]
        );
    }

    #[rstest]
    #[case("0-0/64", 64)]
    #[case("*/0", 0)]
    #[case("*/12", 12)]
    fn content_range_totals_are_parsed(#[case] raw: &str, #[case] expected: u64) {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_RANGE, HeaderValue::from_str(raw).expect("header value"));
        assert_eq!(content_range_total(&headers).expect("total"), expected);
    }

    #[rstest]
    fn missing_content_range_is_a_decode_error() {
        let error = content_range_total(&HeaderMap::new()).expect_err("no header");
        assert!(matches!(error, StoreError::Decode { .. }));
    }

    #[rstest]
    fn store_messages_are_surfaced_verbatim() {
        let error = map_status_error(
            StatusCode::BAD_REQUEST,
            br#"{"code":"42703","message":"column profiles.tagline does not exist"}"#,
        );
        assert_eq!(error.message(), "column profiles.tagline does not exist");
        assert!(matches!(error, StoreError::Rejected { status: 400, .. }));
    }

    #[rstest]
    #[case::gateway_timeout(StatusCode::GATEWAY_TIMEOUT, true)]
    #[case::server_error(StatusCode::BAD_GATEWAY, false)]
    fn non_json_failures_keep_a_preview(#[case] status: StatusCode, #[case] timeout: bool) {
        let error = map_status_error(status, b"<html>  upstream   down </html>");
        assert_eq!(matches!(error, StoreError::Timeout { .. }), timeout);
        assert!(error.message().ends_with("<html> upstream down </html>"));
    }
}
