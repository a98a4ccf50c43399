use log::debug;
use reqwest::{Client, Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::core::models::application::{ApplicationId, ApplicationInsert, ApplicationRow, ApplicationStatus, Query};
use crate::core::ports::repository::ApplicationCommon;
use crate::error::Error;

const TABLE_PATH: &str = "rest/v1/applications";

/// The hosted `applications` table, reached through its PostgREST interface.
#[derive(Clone)]
pub struct RestStore {
    client: Client,
    endpoint: Url,
    key: String,
}

/// Error body returned by the REST interface.
#[derive(Debug, Deserialize)]
struct RestError {
    message: String,
}

#[derive(Serialize)]
struct StatusPatch {
    status: ApplicationStatus,
}

impl RestStore {
    pub fn new(url: &str, key: &str) -> Result<Self, Error> {
        let mut base = Url::parse(url).map_err(|e| Error::Configuration(format!("invalid store url {url:?}: {e}")))?;
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }
        let endpoint = base
            .join(TABLE_PATH)
            .map_err(|e| Error::Configuration(format!("invalid store url {url:?}: {e}")))?;
        Ok(Self {
            client: Client::new(),
            endpoint,
            key: key.to_owned(),
        })
    }

    fn request(&self, method: Method) -> RequestBuilder {
        self.client
            .request(method, self.endpoint.clone())
            .header("apikey", &self.key)
            .bearer_auth(&self.key)
            .header("Prefer", "return=representation")
    }

    async fn send<T: DeserializeOwned>(builder: RequestBuilder) -> Result<T, Error> {
        let resp = builder.send().await?;
        let body = Self::check(resp).await?.text().await?;
        Ok(serde_json::from_str(&body)?)
    }

    async fn check(resp: Response) -> Result<Response, Error> {
        let status = resp.status();
        if status.is_success() {
            return Ok(resp);
        }
        let body = resp.text().await?;
        let message = match serde_json::from_str::<RestError>(&body) {
            Ok(e) => e.message,
            Err(_) if body.trim().is_empty() => status.to_string(),
            Err(_) => body,
        };
        Err(Error::Store(message))
    }
}

impl ApplicationCommon for RestStore {
    async fn insert(&self, data: ApplicationInsert) -> Result<ApplicationRow, Error> {
        let rows: Vec<ApplicationRow> = Self::send(self.request(Method::POST).query(&[("select", "*")]).json(&[data])).await?;
        rows.into_iter().next().ok_or_else(|| Error::Store("insert returned no rows".into()))
    }

    async fn query(&self, query: &Query) -> Result<Vec<ApplicationRow>, Error> {
        let mut params = vec![("select", "*".to_owned())];
        if let Some(t) = query.type_eq {
            params.push(("type", format!("eq.{}", t.as_str())));
        }
        params.push(("order", "created_at.desc".to_owned()));
        let rows: Vec<ApplicationRow> = Self::send(self.request(Method::GET).query(&params)).await?;
        debug!("fetched {} application(s)", rows.len());
        Ok(rows)
    }

    async fn update_status(&self, id: ApplicationId, status: ApplicationStatus) -> Result<Option<ApplicationRow>, Error> {
        let rows: Vec<ApplicationRow> = Self::send(
            self.request(Method::PATCH)
                .query(&[("id", format!("eq.{id}")), ("select", "*".to_owned())])
                .json(&StatusPatch { status }),
        )
        .await?;
        Ok(rows.into_iter().next())
    }

    async fn delete(&self, id: ApplicationId) -> Result<u64, Error> {
        let resp = self.request(Method::DELETE).query(&[("id", format!("eq.{id}"))]).send().await?;
        let body = Self::check(resp).await?.text().await?;
        if body.trim().is_empty() {
            return Ok(0);
        }
        let rows: Vec<serde_json::Value> = serde_json::from_str(&body)?;
        Ok(rows.len() as u64)
    }
}
