use regex::Regex;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use serde::Deserialize;
use serde_json::{Map, Value};

use crate::api::{Endpoint, Method};
use crate::constants::API_SUCCESS_CODE;
use crate::error::{TagOpsError, TagOpsResult};
use crate::logging::log_debug;
use crate::models::ApiResponse;

lazy_static::lazy_static! {
    static ref PLACEHOLDER: Regex = Regex::new(r"\{([A-Za-z][A-Za-z0-9]*)\}").unwrap();
}

/// Shared HTTP caller. Substitutes `{name}` placeholders in an endpoint's
/// path template from the supplied parameter object and sends the remaining
/// parameters as the query string (GET/DELETE) or the JSON body (POST).
pub struct ApiClient {
    client: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: String, token: String) -> TagOpsResult<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&token)
                .map_err(|_| TagOpsError::ConfigError("Invalid token format".to_string()))?,
        );

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub async fn send<T: for<'de> Deserialize<'de>>(
        &self,
        endpoint: Endpoint,
        params: Option<Value>,
    ) -> TagOpsResult<T> {
        let data = self.dispatch(endpoint, params).await?;
        let data = data.ok_or_else(|| {
            TagOpsError::ApiError {
                code: API_SUCCESS_CODE,
                msg: format!("No data returned from {}", endpoint.name),
            }
        })?;
        Ok(serde_json::from_value(data)?)
    }

    /// For save/delete operations whose response carries no payload.
    pub async fn send_no_content(
        &self,
        endpoint: Endpoint,
        params: Option<Value>,
    ) -> TagOpsResult<()> {
        self.dispatch(endpoint, params).await?;
        Ok(())
    }

    async fn dispatch(
        &self,
        endpoint: Endpoint,
        params: Option<Value>,
    ) -> TagOpsResult<Option<Value>> {
        let params = into_object(params)?;
        let (path, rest) = render_path(endpoint.path, params)?;
        let url = format!("{}{}", self.base_url, path);

        log_debug(&format!("{} {} {}", endpoint.name, endpoint.method.as_str(), url));

        let request = match endpoint.method {
            Method::Get => self.client.get(&url).query(&query_pairs(&rest)?),
            Method::Delete => self.client.delete(&url).query(&query_pairs(&rest)?),
            Method::Post => self.client.post(&url).json(&Value::Object(rest)),
        };

        let response = request.send().await?;

        if !response.status().is_success() {
            return Err(TagOpsError::HttpError(format!(
                "{} returned {}",
                url,
                response.status()
            )));
        }

        let envelope: ApiResponse<Value> = response.json().await?;

        if envelope.code != API_SUCCESS_CODE {
            return Err(TagOpsError::ApiError {
                code: envelope.code,
                msg: envelope.msg,
            });
        }

        Ok(envelope.data)
    }
}

fn into_object(params: Option<Value>) -> TagOpsResult<Map<String, Value>> {
    match params {
        None | Some(Value::Null) => Ok(Map::new()),
        Some(Value::Object(map)) => Ok(map),
        Some(other) => Err(TagOpsError::InvalidInput(format!(
            "Parameters must be a JSON object, got: {}",
            other
        ))),
    }
}

/// Substitutes every `{name}` placeholder in `template` from `params`,
/// returning the rendered path and the parameters left over. A placeholder
/// with no matching parameter is an error.
pub fn render_path(
    template: &str,
    mut params: Map<String, Value>,
) -> TagOpsResult<(String, Map<String, Value>)> {
    let mut rendered = String::with_capacity(template.len());
    let mut last = 0;

    for caps in PLACEHOLDER.captures_iter(template) {
        let whole = caps.get(0).unwrap();
        let name = &caps[1];

        let value = params
            .remove(name)
            .ok_or_else(|| TagOpsError::MissingPathParam(name.to_string()))?;

        rendered.push_str(&template[last..whole.start()]);
        rendered.push_str(&scalar_to_string(name, &value)?);
        last = whole.end();
    }
    rendered.push_str(&template[last..]);

    Ok((rendered, params))
}

fn query_pairs(params: &Map<String, Value>) -> TagOpsResult<Vec<(String, String)>> {
    params
        .iter()
        .map(|(k, v)| Ok((k.clone(), scalar_to_string(k, v)?)))
        .collect()
}

fn scalar_to_string(name: &str, value: &Value) -> TagOpsResult<String> {
    match value {
        Value::String(s) => Ok(s.clone()),
        Value::Number(n) => Ok(n.to_string()),
        Value::Bool(b) => Ok(b.to_string()),
        _ => Err(TagOpsError::InvalidInput(format!(
            "Parameter '{}' must be a scalar, got: {}",
            name, value
        ))),
    }
}
