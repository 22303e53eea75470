//! HTTP client of the console API.
//!
//! Every operation returns display-ready messages on failure: the raw
//! [`ApiError`] is logged to the browser console and mapped through the
//! error catalog with the `"{VERB}:{path}"` key of the logical endpoint.

use gloo_net::http::{Request, RequestBuilder};
use param_console_shared::{
    error::endpoint_key, ApiError, ConfigRecord, HttpVerb, SearchRequest, SearchResponse,
};
use serde::{de::DeserializeOwned, Serialize};

use crate::{
    config::{api_url, Endpoints, MOCK_SERVER_MODE},
    messages,
};

/// Result of an API call; errors are messages ready for display.
pub type ApiResult<T> = Result<T, Vec<String>>;

/// One page of a resource list.
pub async fn search<T>(endpoints: Endpoints, request: &SearchRequest) -> ApiResult<SearchResponse<T>>
where
    T: DeserializeOwned,
{
    let text = call(HttpVerb::Post, endpoints.search, None, Some(request)).await?;
    decode(HttpVerb::Post, endpoints.search, &text)
}

/// Full record behind a row.
pub async fn details<T>(endpoints: Endpoints, id: i64) -> ApiResult<T>
where
    T: DeserializeOwned,
{
    let text = call::<()>(HttpVerb::Get, endpoints.details, Some(id), None).await?;
    decode(HttpVerb::Get, endpoints.details, &text)
}

/// Child rows of one parent; a missing or empty body is an empty table.
pub async fn sub_table<B, T>(endpoints: Endpoints, body: &B) -> ApiResult<Vec<T>>
where
    B: Serialize,
    T: DeserializeOwned,
{
    let text = call(HttpVerb::Post, endpoints.sub_table, None, Some(body)).await?;
    if text.trim().is_empty() {
        return Ok(Vec::new());
    }
    decode::<Option<Vec<T>>>(HttpVerb::Post, endpoints.sub_table, &text)
        .map(Option::unwrap_or_default)
}

/// Delete one record.
pub async fn delete_record(endpoints: Endpoints, id: i64) -> ApiResult<()> {
    call::<()>(HttpVerb::Delete, endpoints.record, Some(id), None).await?;
    Ok(())
}

/// Create the record when it has no id yet, update it otherwise. The
/// response body is ignored; the caller refreshes what it shows.
pub async fn save_record<T>(endpoints: Endpoints, record: &T) -> ApiResult<()>
where
    T: ConfigRecord + Serialize,
{
    let verb = match record.id() {
        Some(_) => HttpVerb::Put,
        None => HttpVerb::Post,
    };
    call(verb, endpoints.record, record.id(), Some(record)).await?;
    Ok(())
}

async fn call<B>(verb: HttpVerb, path: &str, id: Option<i64>, body: Option<&B>) -> ApiResult<String>
where
    B: Serialize + ?Sized,
{
    exchange(verb, path, id, body).await.map_err(|err| report(verb, path, &err))
}

async fn exchange<B>(
    verb: HttpVerb,
    path: &str,
    id: Option<i64>,
    body: Option<&B>,
) -> Result<String, ApiError>
where
    B: Serialize + ?Sized,
{
    // The mock server answers the logical endpoint only: no id, no body.
    let (verb, id, body) = if MOCK_SERVER_MODE { (HttpVerb::Get, None, None) } else { (verb, id, body) };
    let url = match id {
        Some(id) => format!("{}/{id}", api_url(path)),
        None => api_url(path),
    };

    let builder = builder(verb, &url);
    let response = match body {
        Some(body) => builder
            .json(body)
            .map_err(|e| ApiError::Parse(format!("Serialize error: {:?}", e)))?
            .send()
            .await,
        None => builder.send().await,
    }
    .map_err(|e| ApiError::Network(format!("{:?}", e)))?;

    let status = response.status();
    let ok = response.ok();
    let text = response
        .text()
        .await
        .map_err(|e| ApiError::Network(format!("{:?}", e)))?;
    if !ok {
        return Err(ApiError::from_response(status, &text));
    }
    Ok(text)
}

fn builder(verb: HttpVerb, url: &str) -> RequestBuilder {
    match verb {
        HttpVerb::Get => Request::get(url),
        HttpVerb::Post => Request::post(url),
        HttpVerb::Put => Request::put(url),
        HttpVerb::Delete => Request::delete(url),
    }
}

fn decode<T>(verb: HttpVerb, path: &str, text: &str) -> ApiResult<T>
where
    T: DeserializeOwned,
{
    serde_json::from_str(text).map_err(|e| report(verb, path, &ApiError::Parse(e.to_string())))
}

fn report(verb: HttpVerb, path: &str, err: &ApiError) -> Vec<String> {
    web_sys::console::error_1(&format!("{verb} {path} failed: {err}").into());
    messages::catalog().messages_for(&endpoint_key(verb, path), err)
}
