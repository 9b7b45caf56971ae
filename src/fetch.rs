//! `window.fetch` wrapped into plain async functions.

use prism_core::content::FUN_FACT_URL;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

async fn get(url: &str) -> anyhow::Result<web::Response> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let init = web::RequestInit::new();
    init.set_method("GET");
    let resp = JsFuture::from(window.fetch_with_str_and_init(url, &init))
        .await
        .map_err(|e| anyhow::anyhow!("fetch {url}: {:?}", e))?;
    let resp: web::Response = resp
        .dyn_into()
        .map_err(|e| anyhow::anyhow!("fetch {url}: not a Response: {:?}", e))?;
    if !resp.ok() {
        anyhow::bail!("fetch {url}: HTTP {}", resp.status());
    }
    Ok(resp)
}

/// GET `url` and return the body, failing on network errors and non-2xx.
pub async fn fetch_text(url: &str) -> anyhow::Result<String> {
    let resp = get(url).await?;
    let body = resp.text().map_err(|e| anyhow::anyhow!("{:?}", e))?;
    let body = JsFuture::from(body)
        .await
        .map_err(|e| anyhow::anyhow!("read {url}: {:?}", e))?;
    body.as_string()
        .ok_or_else(|| anyhow::anyhow!("read {url}: body is not text"))
}

/// GET `url` as raw bytes, for images.
pub async fn fetch_bytes(url: &str) -> anyhow::Result<Vec<u8>> {
    let resp = get(url).await?;
    let body = resp.array_buffer().map_err(|e| anyhow::anyhow!("{:?}", e))?;
    let body = JsFuture::from(body)
        .await
        .map_err(|e| anyhow::anyhow!("read {url}: {:?}", e))?;
    Ok(js_sys::Uint8Array::new(&body).to_vec())
}

/// One request to the fun-fact endpoint; the outcome only reaches the console.
pub async fn log_fun_fact() {
    match fetch_text(FUN_FACT_URL).await {
        Ok(body) => log::info!("[fun-fact] {}", body),
        Err(e) => log::warn!("[fun-fact] {}", e),
    }
}
