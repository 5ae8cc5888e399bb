//! Wire format of the `/measurements` endpoint.

use hackair_core::{HackairError, Reading};
use serde::Deserialize;

/// A field the API sends either as a JSON string or as a bare number.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum TextOrNumber {
    Text(String),
    Number(serde_json::Number),
}

impl From<TextOrNumber> for String {
    fn from(v: TextOrNumber) -> Self {
        match v {
            TextOrNumber::Text(s) => s,
            TextOrNumber::Number(n) => n.to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct Payload {
    #[serde(default)]
    status_code: Option<u16>,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    data: Vec<Item>,
}

#[derive(Debug, Deserialize)]
struct Item {
    source_info: SourceInfo,
    pollutant_q: PollutantQ,
    date_str: String,
}

#[derive(Debug, Deserialize)]
struct SourceInfo {
    sensor: Sensor,
}

#[derive(Debug, Deserialize)]
struct Sensor {
    id: TextOrNumber,
}

#[derive(Debug, Deserialize)]
struct PollutantQ {
    name: String,
    value: TextOrNumber,
}

impl From<Item> for Reading {
    fn from(item: Item) -> Self {
        Self {
            sensor_id: item.source_info.sensor.id.into(),
            pollutant: item.pollutant_q.name,
            value: item.pollutant_q.value.into(),
            date_str: item.date_str,
        }
    }
}

/// Decode a response body into readings.
///
/// - A missing `status_code` means success; any other code than 200 becomes
///   `RemoteStatus`, whatever the HTTP status was.
/// - A body that does not decode is a transport failure when the HTTP status was
///   not 2xx, and a data issue otherwise.
pub(crate) fn decode(
    provider: &str,
    http_status: reqwest::StatusCode,
    body: &[u8],
) -> Result<Vec<Reading>, HackairError> {
    let payload: Payload = match serde_json::from_slice(body) {
        Ok(p) => p,
        Err(e) if http_status.is_success() => {
            return Err(HackairError::Data(format!("undecodable payload: {e}")));
        }
        Err(_) => return Err(HackairError::remote(provider, format!("HTTP {http_status}"))),
    };

    match payload.status_code {
        None | Some(200) => {}
        Some(code) => {
            return Err(HackairError::RemoteStatus {
                code,
                message: payload.message.unwrap_or_default(),
            });
        }
    }
    if !http_status.is_success() {
        return Err(HackairError::remote(provider, format!("HTTP {http_status}")));
    }
    Ok(payload.data.into_iter().map(Reading::from).collect())
}
