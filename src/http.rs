use async_trait::async_trait;
use reqwest::{Client, StatusCode};

use crate::backend::TrackerBackend;
use crate::config::ClientConfig;
use crate::constants::*;
use crate::errors::{ClientError, ClientResult};
use crate::models::{SearchCriteria, UserProfile, WorkId, WorkPayload, WorksPage};
use crate::utils::{format_query_date, format_query_time};

/// Talks to the tracker's REST API. The session cookie is kept by the client's cookie store.
#[derive(Debug, Clone)]
pub struct HttpBackend {
    client: Client,
    config: ClientConfig,
}

impl HttpBackend {
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        let client = Client::builder().cookie_store(true).build()?;
        Ok(HttpBackend {
            client,
            config: config.clone(),
        })
    }
}

pub fn search_query(
    criteria: &SearchCriteria,
    page_number: u32,
) -> ClientResult<Vec<(&'static str, String)>> {
    let mut query = Vec::new();
    if let Some(date) = criteria.from_date {
        query.push(("fromDate", format_query_date(date)?));
    }
    if let Some(date) = criteria.to_date {
        query.push(("toDate", format_query_date(date)?));
    }
    if let Some(time) = criteria.from_time {
        query.push(("fromTime", format_query_time(time)?));
    }
    if let Some(time) = criteria.to_time {
        query.push(("toTime", format_query_time(time)?));
    }
    query.push(("pageNumber", page_number.to_string()));
    Ok(query)
}

fn transport_error(context: &str, error: reqwest::Error) -> ClientError {
    ClientError::network(format!("{}: {}", context, error))
}

#[async_trait]
impl TrackerBackend for HttpBackend {
    async fn fetch_works(
        &self,
        criteria: &SearchCriteria,
        page_number: u32,
    ) -> ClientResult<WorksPage> {
        let query = search_query(criteria, page_number)?;
        let response = self
            .client
            .get(self.config.endpoint("/work/"))
            .query(&query)
            .send()
            .await
            .map_err(|e| transport_error(ERR_FETCH_WORKS, e))?;

        if !response.status().is_success() {
            return Err(ClientError::network(ERR_FETCH_WORKS));
        }

        response
            .json::<WorksPage>()
            .await
            .map_err(|e| transport_error(ERR_FETCH_WORKS, e))
    }

    async fn save_works(&self, works: &[WorkPayload]) -> ClientResult<()> {
        let response = self
            .client
            .post(self.config.endpoint("/work"))
            .header(reqwest::header::ACCEPT, "text/plain, application/json")
            .json(works)
            .send()
            .await
            .map_err(|e| transport_error(ERR_SAVE_WORKS, e))?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        let body = response.text().await.unwrap_or_default();
        let message = format!("{}: {}", ERR_SAVE_WORKS, body);
        if status == StatusCode::BAD_REQUEST {
            Err(ClientError::Validation(message))
        } else {
            Err(ClientError::Network(message))
        }
    }

    async fn delete_works(&self, ids: &[WorkId]) -> ClientResult<()> {
        let response = self
            .client
            .delete(self.config.endpoint("/work"))
            .json(ids)
            .send()
            .await
            .map_err(|e| transport_error(ERR_DELETE_WORKS, e))?;

        if !response.status().is_success() {
            return Err(ClientError::network(ERR_DELETE_WORKS));
        }
        Ok(())
    }

    async fn get_user_profile(&self) -> ClientResult<UserProfile> {
        let response = self
            .client
            .get(self.config.endpoint("/user"))
            .send()
            .await
            .map_err(|e| transport_error(ERR_USER_INFO, e))?;

        if !response.status().is_success() {
            return Err(ClientError::network(ERR_USER_INFO));
        }

        response
            .json::<UserProfile>()
            .await
            .map_err(|e| transport_error(ERR_USER_INFO, e))
    }

    async fn update_threshold(&self, max_minutes_per_day: u64) -> ClientResult<()> {
        let response = self
            .client
            .put(self.config.endpoint("/user"))
            .json(&max_minutes_per_day)
            .send()
            .await
            .map_err(|e| transport_error(ERR_UPDATE_THRESHOLD, e))?;

        if !response.status().is_success() {
            return Err(ClientError::network(ERR_UPDATE_THRESHOLD));
        }
        Ok(())
    }

    async fn logout(&self) -> ClientResult<()> {
        let response = self
            .client
            .post(self.config.endpoint("/logout"))
            .send()
            .await
            .map_err(|e| transport_error(ERR_LOGOUT, e))?;

        if !response.status().is_success() {
            return Err(ClientError::network(ERR_LOGOUT));
        }
        Ok(())
    }
}
