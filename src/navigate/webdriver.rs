//! WebDriver-backed navigator.
//!
//! Talks the W3C WebDriver REST protocol directly over HTTP, the same wire
//! protocol a chromedriver endpoint exposes.

use std::time::Duration;

use serde::Deserialize;
use serde_json::{json, Value};
use tracing::debug;

use super::{DetailTable, Level, NavOption, Navigator};
use crate::error::HarvestError;

/// Landing page of the NOAA normals tool.
pub const PORTAL_URL: &str = "https://www.ncdc.noaa.gov/cdo-web/datatools/normals";

/// Default chromedriver endpoint.
pub const DEFAULT_WEBDRIVER_URL: &str = "http://localhost:9515";

const LOADING_OVERLAY: &str = ".loadingOverlay";
const DETAILS_TABLE: &str = ".detailsTable";

/// W3C element reference key in find-element responses.
const ELEMENT_KEY: &str = "element-6066-11e4-a52e-4f735466cecf";

const IDLE_POLL: Duration = Duration::from_millis(250);

pub struct WebDriverNavigator {
    client: reqwest::Client,
    /// `<endpoint>/session/<id>`, the prefix of every session-scoped route.
    session_url: String,
    portal_url: String,
}

impl WebDriverNavigator {
    /// Open a fresh WebDriver session against `webdriver_url`.
    pub async fn connect(webdriver_url: &str, portal_url: &str) -> Result<Self, HarvestError> {
        let client = reqwest::Client::new();
        let value = post(
            &client,
            &format!("{webdriver_url}/session"),
            json!({ "capabilities": {} }),
        )
        .await?;
        let session_id = session_id(&value)?;
        debug!(%session_id, "webdriver session created");

        Ok(WebDriverNavigator {
            client,
            session_url: format!("{webdriver_url}/session/{session_id}"),
            portal_url: portal_url.to_string(),
        })
    }

    async fn find(&self, selector: &str) -> Result<String, HarvestError> {
        let value = post(
            &self.client,
            &format!("{}/element", self.session_url),
            locator(selector),
        )
        .await?;

        element_id(&value)
    }

    async fn find_all_within(
        &self,
        element: &str,
        selector: &str,
    ) -> Result<Vec<String>, HarvestError> {
        let value = post(
            &self.client,
            &format!("{}/element/{element}/elements", self.session_url),
            locator(selector),
        )
        .await?;

        value
            .as_array()
            .ok_or_else(|| HarvestError::Session("element list was not an array".to_string()))?
            .iter()
            .map(element_id)
            .collect()
    }

    async fn text(&self, element: &str) -> Result<String, HarvestError> {
        let value = get(
            &self.client,
            &format!("{}/element/{element}/text", self.session_url),
        )
        .await?;

        value
            .as_str()
            .map(str::to_string)
            .ok_or_else(|| HarvestError::Session("element text was not a string".to_string()))
    }

    async fn displayed(&self, element: &str) -> Result<bool, HarvestError> {
        let value = get(
            &self.client,
            &format!("{}/element/{element}/displayed", self.session_url),
        )
        .await?;

        Ok(value.as_bool().unwrap_or(false))
    }
}

impl Navigator for WebDriverNavigator {
    async fn open(&mut self) -> Result<(), HarvestError> {
        post(
            &self.client,
            &format!("{}/url", self.session_url),
            json!({ "url": self.portal_url }),
        )
        .await?;

        Ok(())
    }

    async fn list_options(&mut self, level: Level) -> Result<Vec<NavOption>, HarvestError> {
        let select = self.find(level.selector()).await?;
        let ids = self.find_all_within(&select, "option").await?;

        let mut options = Vec::with_capacity(ids.len());
        for id in ids {
            let text = self.text(&id).await?;
            options.push(NavOption { id, text });
        }

        Ok(options)
    }

    async fn select(&mut self, option: &NavOption) -> Result<(), HarvestError> {
        post(
            &self.client,
            &format!("{}/element/{}/click", self.session_url, option.id),
            json!({}),
        )
        .await?;

        Ok(())
    }

    async fn wait_idle(&mut self, timeout: Duration) -> Result<(), HarvestError> {
        let overlay = self.find(LOADING_OVERLAY).await?;
        let started = tokio::time::Instant::now();

        while self.displayed(&overlay).await? {
            if started.elapsed() >= timeout {
                return Err(HarvestError::NavigationTimeout { waited: timeout });
            }
            tokio::time::sleep(IDLE_POLL).await;
        }

        Ok(())
    }

    async fn read_table(&mut self) -> Result<DetailTable, HarvestError> {
        let table = self.find(DETAILS_TABLE).await?;

        let header_ids = self.find_all_within(&table, "th").await?;
        let mut headers = Vec::with_capacity(header_ids.len());
        for id in header_ids {
            headers.push(self.text(&id).await?);
        }

        let body = self.text(&table).await?;

        Ok(DetailTable { headers, body })
    }

    async fn quit(&mut self) -> Result<(), HarvestError> {
        self.client
            .delete(self.session_url.as_str())
            .send()
            .await
            .map_err(transport)?;

        Ok(())
    }
}

#[derive(Deserialize)]
struct WireResponse {
    value: Value,
}

fn locator(selector: &str) -> Value {
    json!({ "using": "css selector", "value": selector })
}

async fn post(client: &reqwest::Client, url: &str, body: Value) -> Result<Value, HarvestError> {
    let response = client.post(url).json(&body).send().await.map_err(transport)?;
    decode(response).await
}

async fn get(client: &reqwest::Client, url: &str) -> Result<Value, HarvestError> {
    let response = client.get(url).send().await.map_err(transport)?;
    decode(response).await
}

async fn decode(response: reqwest::Response) -> Result<Value, HarvestError> {
    let status = response.status();
    let body: WireResponse = response.json().await.map_err(transport)?;

    if !status.is_success() {
        let message = body
            .value
            .get("message")
            .and_then(Value::as_str)
            .unwrap_or("unknown webdriver error");
        return Err(HarvestError::Session(message.to_string()));
    }

    Ok(body.value)
}

fn transport(e: reqwest::Error) -> HarvestError {
    HarvestError::Session(e.to_string())
}

fn session_id(value: &Value) -> Result<String, HarvestError> {
    value
        .get("sessionId")
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or_else(|| HarvestError::Session("no session id in response".to_string()))
}

fn element_id(value: &Value) -> Result<String, HarvestError> {
    value
        .get(ELEMENT_KEY)
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or_else(|| HarvestError::Session("missing element reference".to_string()))
}

// -- Tests -------------------------------------------------------------------

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn should_extract_session_id() {
        let value = json!({ "sessionId": "abc123", "capabilities": {} });

        assert_eq!(session_id(&value).unwrap(), "abc123");
        assert!(session_id(&json!({})).is_err());
    }

    #[test]
    fn should_extract_element_reference() {
        let value = json!({ (ELEMENT_KEY): "node-7" });

        assert_eq!(element_id(&value).unwrap(), "node-7");
        assert!(element_id(&json!({ "element": "node-7" })).is_err());
    }

    #[test]
    fn should_build_css_locator() {
        let value = locator(".locationSelect");

        assert_eq!(value["using"], "css selector");
        assert_eq!(value["value"], ".locationSelect");
    }
}
