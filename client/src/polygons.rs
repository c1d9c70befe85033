use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use dongmap_shared::DistrictPolygon;

/// Static resource holding the district boundary rings.
pub const POLYGON_RESOURCE_PATH: &str = "/seoul_gu_polygons.json";

/// One-shot boundary load at mount. Fire-and-forget: no retry, no timeout,
/// no cancellation. On any failure the overlay stays empty and the panel list
/// remains the selection path; the error only reaches the console.
pub fn fetch_district_polygons(polygons: RwSignal<Vec<DistrictPolygon>>) {
    spawn_local(async move {
        let resp = match gloo_net::http::Request::get(POLYGON_RESOURCE_PATH).send().await {
            Ok(resp) => resp,
            Err(e) => {
                web_sys::console::warn_1(&format!("polygon fetch failed: {e}").into());
                return;
            }
        };
        if !resp.ok() {
            web_sys::console::warn_1(&format!("polygon fetch: HTTP {}", resp.status()).into());
            return;
        }
        match resp.json::<Vec<DistrictPolygon>>().await {
            Ok(data) => polygons.set(data),
            Err(e) => {
                web_sys::console::warn_1(&format!("polygon parse failed: {e}").into());
            }
        }
    });
}
