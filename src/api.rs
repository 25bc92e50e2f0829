//! HTTP client for the temperature backend. On wasm, reqwest lowers to the
//! browser fetch API, so requests run to completion without blocking the UI.

use crate::state::{Conversion, HistoryEntry, Unit};
use leptos::window;
use serde::Serialize;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Reqwest(#[from] reqwest::Error),
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ConvertRequest {
    value: f64,
    from_unit: Unit,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SaveRequest {
    input_value: f64,
    input_unit: Unit,
    output_value: f64,
    output_unit: Unit,
    // Serialized as `null` when absent, matching what the backend expects.
    nickname: Option<String>,
}

/// Origin the API lives on. Normally the page's own origin; a `?api=<origin>`
/// query parameter overrides it so the widget can be pointed at a backend on
/// another port during development.
fn base_url() -> String {
    let location = window().location();
    if let Ok(search) = location.search() {
        if let Ok(parsed) = url::Url::parse(&format!("http://localhost{search}")) {
            for (key, value) in parsed.query_pairs() {
                if key == "api" {
                    return value.trim_end_matches('/').to_string();
                }
            }
        }
    }
    let protocol = location.protocol().expect("protocol");
    let host = location.host().expect("host");
    format!("{protocol}//{host}")
}

fn endpoint(path: &str) -> String {
    format!("{}{path}", base_url())
}

pub async fn convert(value: f64, from_unit: Unit) -> Result<Conversion, Error> {
    let client = reqwest::Client::new();
    let payload = ConvertRequest { value, from_unit };
    let res = client
        .post(endpoint("/api/temperature/convert"))
        .json(&payload)
        .send()
        .await?
        .error_for_status()?;
    Ok(res.json().await?)
}

pub async fn save(conversion: &Conversion, nickname: Option<String>) -> Result<(), Error> {
    let client = reqwest::Client::new();
    let payload = SaveRequest {
        input_value: conversion.input_value,
        input_unit: conversion.input_unit,
        output_value: conversion.output_value,
        output_unit: conversion.output_unit,
        nickname,
    };
    client
        .post(endpoint("/api/temperature/save"))
        .json(&payload)
        .send()
        .await?
        .error_for_status()?;
    Ok(())
}

pub async fn history() -> Result<Vec<HistoryEntry>, Error> {
    let client = reqwest::Client::new();
    let res = client
        .get(endpoint("/api/temperature/history"))
        .send()
        .await?
        .error_for_status()?;
    Ok(res.json().await?)
}

pub async fn delete_entry(id: i64) -> Result<(), Error> {
    let client = reqwest::Client::new();
    client
        .delete(endpoint(&format!("/api/temperature/history/{id}")))
        .send()
        .await?
        .error_for_status()?;
    Ok(())
}

pub async fn clear_history() -> Result<(), Error> {
    let client = reqwest::Client::new();
    client
        .delete(endpoint("/api/temperature/history"))
        .send()
        .await?
        .error_for_status()?;
    Ok(())
}
