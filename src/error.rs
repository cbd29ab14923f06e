use thiserror::Error;

#[derive(Debug, Error)]
pub enum LayerError {
    #[error("no global window is available")]
    MissingWindow,
    #[error("window has no document")]
    MissingDocument,
    #[error("DOM call failed: {0}")]
    Js(String),
    #[error("invalid interaction config: {0}")]
    Config(#[from] serde_json::Error),
}

#[cfg(target_arch = "wasm32")]
impl From<wasm_bindgen::JsValue> for LayerError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        Self::Js(
            value
                .as_string()
                .unwrap_or_else(|| format!("{value:?}")),
        )
    }
}
