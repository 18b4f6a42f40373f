use showcase_core::{decode_glb, loaded_model_transform, substitute, Mesh};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

/// Fetch and decode the product model, placed for the viewer.
pub async fn fetch_model(url: &str) -> anyhow::Result<Mesh> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    log::info!("[loader] fetching {}", url);
    let response: web::Response = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(|e| anyhow::anyhow!("fetch {}: {:?}", url, e))?
        .dyn_into()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    if !response.ok() {
        anyhow::bail!("fetch {}: HTTP {}", url, response.status());
    }
    let buffer = JsFuture::from(
        response
            .array_buffer()
            .map_err(|e| anyhow::anyhow!("{:?}", e))?,
    )
    .await
    .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    let bytes = js_sys::Uint8Array::new(&buffer).to_vec();
    log::info!("[loader] received {} bytes (100%)", bytes.len());

    let mut mesh = decode_glb(&bytes)?;
    mesh.transform(loaded_model_transform());
    Ok(mesh)
}

/// The product model, or the stand-in headphones when it cannot be loaded.
pub async fn load_or_substitute(url: &str) -> Mesh {
    match fetch_model(url).await {
        Ok(mesh) => mesh,
        Err(e) => {
            log::warn!("[loader] failed to load model, using substitute: {:#}", e);
            substitute::headphones()
        }
    }
}
