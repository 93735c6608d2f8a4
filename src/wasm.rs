//! WebAssembly bindings.
//!
//! Asset identity cannot cross the JS boundary, so the binding returns
//! the index of the suggested asset within the array it was given.

use wasm_bindgen::prelude::*;

use crate::asset::Asset;
use crate::keeper::AssetRanker;

/// Suggests which asset of a duplicate group to keep.
///
/// `assets` is an array of catalog asset objects (camelCase fields).
/// Resolves to the index of the asset to keep, or `undefined` for an
/// empty array.
#[wasm_bindgen(js_name = suggestDuplicate)]
pub fn suggest_duplicate(assets: JsValue) -> Result<Option<usize>, JsValue> {
    let assets: Vec<Asset> = serde_wasm_bindgen::from_value(assets)
        .map_err(|e| JsValue::from_str(&format!("invalid asset list: {e}")))?;
    Ok(AssetRanker::new().select_best_index(&assets))
}
