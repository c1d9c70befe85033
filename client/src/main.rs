mod app;
mod colors;
mod map_canvas;
mod panel;
mod polygons;
mod router;
mod viewport;

use leptos::mount::mount_to;
use wasm_bindgen::JsCast;

fn main() {
    console_error_panic_hook::set_once();
    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(document) = window.document() else {
        return;
    };
    let mount_target = document
        .get_element_by_id("app")
        .and_then(|node| node.dyn_into::<web_sys::HtmlElement>().ok())
        .or_else(|| document.body());
    let Some(target) = mount_target else {
        return;
    };

    // The app lives for the whole page; keep the mount alive past main().
    mount_to(target, app::App).forget();
}
