//! Thin JSON client over `gloo-net`.
//!
//! Every failure comes back as one banner-ready `String`: transport errors,
//! validation payloads and opaque server errors alike.

use super::api_utils::api_url;
use contracts::shared::api_error::{compose_error_message, decode_error, delete_outcome, transport_error};
use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Verbs the client wraps
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Patch => "PATCH",
            Method::Delete => "DELETE",
        }
    }

    fn request(&self, url: &str) -> RequestBuilder {
        match self {
            Method::Get => Request::get(url),
            Method::Post => Request::post(url),
            Method::Put => Request::put(url),
            Method::Patch => Request::patch(url),
            Method::Delete => Request::delete(url),
        }
    }
}

async fn send(method: Method, path: &str) -> Result<Response, String> {
    let verb = method.as_str();
    log::debug!("{} {}", verb, path);
    method
        .request(&api_url(path))
        .header("Accept", "application/json")
        .send()
        .await
        .map_err(|e| {
            let msg = transport_error(e);
            log::warn!("{} {} failed: {}", verb, path, msg);
            msg
        })
}

async fn send_json<B: Serialize>(method: Method, path: &str, body: &B) -> Result<Response, String> {
    let verb = method.as_str();
    log::debug!("{} {}", verb, path);
    let request = method
        .request(&api_url(path))
        .header("Accept", "application/json")
        .json(body)
        .map_err(|e| format!("İstek hazırlanamadı: {}", e))?;
    request.send().await.map_err(|e| {
        let msg = transport_error(e);
        log::warn!("{} {} failed: {}", verb, path, msg);
        msg
    })
}

async fn read_json<T: DeserializeOwned>(method: Method, path: &str, response: Response) -> Result<T, String> {
    let verb = method.as_str();
    if !response.ok() {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        let msg = compose_error_message(status, &body);
        log::warn!("{} {} -> HTTP {}: {}", verb, path, status, msg);
        return Err(msg);
    }
    response.json::<T>().await.map_err(|e| {
        let msg = decode_error(e);
        log::warn!("{} {}: {}", verb, path, msg);
        msg
    })
}

pub async fn api_get<T: DeserializeOwned>(path: &str) -> Result<T, String> {
    let response = send(Method::Get, path).await?;
    read_json(Method::Get, path, response).await
}

pub async fn api_post<B: Serialize, T: DeserializeOwned>(path: &str, body: &B) -> Result<T, String> {
    let response = send_json(Method::Post, path, body).await?;
    read_json(Method::Post, path, response).await
}

/// Full replacement of a record
pub async fn api_put<B: Serialize, T: DeserializeOwned>(path: &str, body: &B) -> Result<T, String> {
    let response = send_json(Method::Put, path, body).await?;
    read_json(Method::Put, path, response).await
}

pub async fn api_patch<B: Serialize, T: DeserializeOwned>(path: &str, body: &B) -> Result<T, String> {
    let response = send_json(Method::Patch, path, body).await?;
    read_json(Method::Patch, path, response).await
}

/// Succeeds on any 2xx, including an empty 204
pub async fn api_delete(path: &str) -> Result<(), String> {
    let response = send(Method::Delete, path).await?;
    let status = response.status();
    let body = if response.ok() {
        String::new()
    } else {
        response.text().await.unwrap_or_default()
    };
    delete_outcome(status, &body).map_err(|msg| {
        log::warn!("DELETE {} -> HTTP {}: {}", path, status, msg);
        msg
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_wrapped_verb_has_its_wire_name() {
        let verbs: Vec<_> = [Method::Get, Method::Post, Method::Put, Method::Patch, Method::Delete]
            .iter()
            .map(|m| m.as_str())
            .collect();
        assert_eq!(verbs, vec!["GET", "POST", "PUT", "PATCH", "DELETE"]);
    }
}
