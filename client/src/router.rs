use leptos::prelude::*;
use wasm_bindgen::JsValue;

use dongmap_shared::ReportRequest;

pub const REPORT_PATH: &str = "/re";

/// The two screens this bundle knows about. Navigation is one-way: once a
/// report is requested the selection screen unmounts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    MapSelect,
    Report(ReportRequest),
}

/// Newtype so the route signal has a distinct context type.
#[derive(Clone, Copy)]
pub struct CurrentRoute(pub RwSignal<Route>);

/// Navigate to the report screen: push a history entry carrying the
/// `{guId, dongId}` payload as history state, then swap the mounted screen.
pub fn navigate_to_report(route: RwSignal<Route>, request: ReportRequest) {
    push_history_state(&request, REPORT_PATH);
    route.set(Route::Report(request));
}

fn push_history_state(request: &ReportRequest, path: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let Ok(history) = window.history() else {
        return;
    };
    let state = serde_wasm_bindgen::to_value(request).unwrap_or(JsValue::NULL);
    history.push_state_with_url(&state, "", Some(path)).ok();
}
