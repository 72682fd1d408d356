//! HTTP record source for JSON APIs shaped like JSONPlaceholder / DummyJSON.

use async_trait::async_trait;
use reqwest::{Client, Response, Url};
use serde::Serialize;
use serde_json::Value;

use super::traits::{IdAssignment, RecordSource};
use crate::domain::{NewRecord, Record, RecordId};
use crate::error::{SyncError, SyncResult};

#[derive(Serialize)]
struct CreateBody<'a> {
    title: &'a str,
    body: &'a str,
    #[serde(rename = "userId", skip_serializing_if = "Option::is_none")]
    user_id: Option<i64>,
}

#[derive(Serialize)]
struct UpdateBody<'a> {
    id: &'a RecordId,
    title: &'a str,
    body: &'a str,
}

/// Remote source: every operation is a real request and the API assigns ids
#[derive(Debug, Clone)]
pub struct HttpSource {
    client: Client,
    api_url: String,
    list_key: Option<String>,
    user_id: Option<i64>,
}

impl HttpSource {
    pub fn new(api_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_url: api_url.into().trim_end_matches('/').to_string(),
            list_key: None,
            user_id: None,
        }
    }

    /// Read the list from `{ "<key>": [...] }` instead of a bare array
    pub fn with_list_key(mut self, key: Option<String>) -> Self {
        self.list_key = key;
        self
    }

    pub fn with_user_id(mut self, user_id: Option<i64>) -> Self {
        self.user_id = user_id;
        self
    }

    /// `<api_url>/<id>`, with the id escaped as a single path segment
    fn record_url(&self, id: &RecordId) -> SyncResult<Url> {
        let invalid =
            |reason: String| SyncError::Config(format!("invalid api url {}: {}", self.api_url, reason));
        let mut url = Url::parse(&self.api_url).map_err(|e| invalid(e.to_string()))?;
        url.path_segments_mut()
            .map_err(|_| invalid("cannot be a base".to_string()))?
            .pop_if_empty()
            .push(&id.to_string());
        Ok(url)
    }

    /// Pull the record list out of a response body
    fn extract_list(&self, payload: Value) -> SyncResult<Vec<Record>> {
        let list = match (payload, self.list_key.as_deref()) {
            (Value::Array(items), _) => Value::Array(items),
            (Value::Object(mut map), Some(key)) => map
                .remove(key)
                .ok_or_else(|| SyncError::Decode(format!("response has no '{}' field", key)))?,
            (Value::Object(_), None) => {
                return Err(SyncError::Decode(
                    "expected a list of records, got an object".to_string(),
                ))
            }
            (other, _) => {
                return Err(SyncError::Decode(format!(
                    "expected a list of records, got {}",
                    other
                )))
            }
        };
        Ok(serde_json::from_value(list)?)
    }
}

/// Turn a non-2xx response into a `Status` error
fn check_status(response: Response) -> SyncResult<Response> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        Err(SyncError::Status {
            status: status.as_u16(),
            url: response.url().to_string(),
        })
    }
}

#[async_trait(?Send)]
impl RecordSource for HttpSource {
    fn id_assignment(&self) -> IdAssignment {
        IdAssignment::Remote
    }

    async fn fetch_all(&self) -> SyncResult<Vec<Record>> {
        log::debug!("GET {}", self.api_url);
        let response = check_status(self.client.get(&self.api_url).send().await?)?;
        let payload: Value = response.json().await?;
        self.extract_list(payload)
    }

    async fn create(&self, record: &NewRecord) -> SyncResult<Record> {
        log::debug!("POST {}", self.api_url);
        let body = CreateBody {
            title: &record.title,
            body: &record.body,
            user_id: self.user_id,
        };
        let response = check_status(self.client.post(&self.api_url).json(&body).send().await?)?;
        Ok(response.json::<Record>().await?)
    }

    async fn update(&self, id: &RecordId, title: &str, body: &str) -> SyncResult<()> {
        let url = self.record_url(id)?;
        log::debug!("PUT {}", url);
        let body = UpdateBody { id, title, body };
        check_status(self.client.put(url).json(&body).send().await?)?;
        Ok(())
    }

    async fn delete(&self, id: &RecordId) -> SyncResult<()> {
        let url = self.record_url(id)?;
        log::debug!("DELETE {}", url);
        check_status(self.client.delete(url).send().await?)?;
        Ok(())
    }
}
