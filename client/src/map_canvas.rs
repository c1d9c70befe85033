use std::cell::Cell;
use std::rc::Rc;

use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent, PointerEvent, WheelEvent};

use dongmap_shared::geo::ring_contains;
use dongmap_shared::{DistrictPolygon, LatLng, SelectionState};

use crate::colors::{
    POLYGON_FILL_DEFAULT, POLYGON_FILL_OPACITY, POLYGON_FILL_SELECTED, POLYGON_STROKE,
    POLYGON_STROKE_OPACITY, POLYGON_STROKE_WEIGHT, rgba_css,
};
use crate::viewport::Viewport;

/// Pointer travel below this distance still counts as a click, not a drag.
const CLICK_SLOP_PX: f64 = 5.0;

const MAP_BACKGROUND: &str = "#eef3f7";

fn canvas_css_size(canvas: &HtmlCanvasElement) -> (f64, f64) {
    let rect = canvas.get_bounding_client_rect();
    (rect.width().max(1.0), rect.height().max(1.0))
}

/// First district boundary containing the point, in resource order.
fn hit_district(polygons: &[DistrictPolygon], point: LatLng) -> Option<&DistrictPolygon> {
    polygons.iter().find(|poly| ring_contains(&poly.polygon, point))
}

fn draw_map(
    canvas: &HtmlCanvasElement,
    vp: &Viewport,
    polygons: &[DistrictPolygon],
    selected_id: Option<&str>,
) {
    let (w, h) = canvas_css_size(canvas);
    let dpr = web_sys::window()
        .map(|window| window.device_pixel_ratio())
        .unwrap_or(1.0)
        .max(1.0);
    canvas.set_width((w * dpr) as u32);
    canvas.set_height((h * dpr) as u32);

    let Some(ctx) = canvas
        .get_context("2d")
        .ok()
        .flatten()
        .and_then(|ctx| ctx.dyn_into::<CanvasRenderingContext2d>().ok())
    else {
        return;
    };
    // Draw in CSS pixel coordinates on a device-pixel backing store.
    ctx.scale(dpr, dpr).ok();

    ctx.set_fill_style_str(MAP_BACKGROUND);
    ctx.fill_rect(0.0, 0.0, w, h);

    let (sr, sg, sb) = POLYGON_STROKE;
    let stroke = rgba_css(sr, sg, sb, POLYGON_STROKE_OPACITY);
    let (dr, dg, db) = POLYGON_FILL_DEFAULT;
    let fill_default = rgba_css(dr, dg, db, POLYGON_FILL_OPACITY);
    let (hr, hg, hb) = POLYGON_FILL_SELECTED;
    let fill_selected = rgba_css(hr, hg, hb, POLYGON_FILL_OPACITY);

    ctx.set_line_width(POLYGON_STROKE_WEIGHT);
    ctx.set_stroke_style_str(&stroke);

    for poly in polygons {
        if poly.polygon.len() < 3 {
            continue;
        }
        ctx.begin_path();
        for (i, &[lat, lng]) in poly.polygon.iter().enumerate() {
            let (x, y) = vp.to_screen(LatLng::new(lat, lng), w, h);
            if i == 0 {
                ctx.move_to(x, y);
            } else {
                ctx.line_to(x, y);
            }
        }
        ctx.close_path();
        if selected_id == Some(poly.id.as_str()) {
            ctx.set_fill_style_str(&fill_selected);
        } else {
            ctx.set_fill_style_str(&fill_default);
        }
        ctx.fill();
        ctx.stroke();
    }
}

/// Canvas map rendering the district boundary overlay. Dragging pans, the
/// wheel steps the zoom level, and a (non-drag) click selects the district
/// whose boundary contains the clicked coordinate.
#[component]
pub fn MapCanvas(#[prop(default = true)] draggable: bool) -> impl IntoView {
    let selection: RwSignal<SelectionState> = expect_context();
    let polygons: RwSignal<Vec<DistrictPolygon>> = expect_context();
    let viewport: RwSignal<Viewport> = expect_context();

    let canvas_ref = NodeRef::<leptos::html::Canvas>::new();

    // Drag state
    let is_dragging = Rc::new(Cell::new(false));
    let drag_start_x = Rc::new(Cell::new(0.0f64));
    let drag_start_y = Rc::new(Cell::new(0.0f64));
    let last_x = Rc::new(Cell::new(0.0f64));
    let last_y = Rc::new(Cell::new(0.0f64));

    // Fill highlight follows the picked district only; search keystrokes and
    // dong picks inside the same district don't repaint.
    let selected_district = Memo::new(move |_| selection.with(|s| s.district_id().map(String::from)));

    Effect::new(move || {
        let Some(canvas) = canvas_ref.get() else {
            return;
        };
        let vp = viewport.get();
        let selected = selected_district.get();
        polygons.with(|polys| draw_map(&canvas, &vp, polys, selected.as_deref()));
    });

    let on_pointer_down = {
        let is_dragging = is_dragging.clone();
        let drag_start_x = drag_start_x.clone();
        let drag_start_y = drag_start_y.clone();
        let last_x = last_x.clone();
        let last_y = last_y.clone();
        move |e: PointerEvent| {
            drag_start_x.set(e.client_x() as f64);
            drag_start_y.set(e.client_y() as f64);
            last_x.set(e.client_x() as f64);
            last_y.set(e.client_y() as f64);
            if !draggable {
                return;
            }
            is_dragging.set(true);
            if let Some(target) = e.target()
                && let Ok(el) = target.dyn_into::<web_sys::HtmlElement>()
            {
                el.set_pointer_capture(e.pointer_id()).ok();
                el.style().set_property("cursor", "grabbing").ok();
            }
        }
    };

    let on_pointer_move = {
        let is_dragging = is_dragging.clone();
        let last_x = last_x.clone();
        let last_y = last_y.clone();
        move |e: PointerEvent| {
            if !is_dragging.get() {
                return;
            }
            let dx = e.client_x() as f64 - last_x.get();
            let dy = e.client_y() as f64 - last_y.get();
            last_x.set(e.client_x() as f64);
            last_y.set(e.client_y() as f64);
            viewport.update(|vp| vp.pan(dx, dy));
        }
    };

    let on_pointer_up = {
        let is_dragging = is_dragging.clone();
        move |e: PointerEvent| {
            is_dragging.set(false);
            if let Some(target) = e.target()
                && let Ok(el) = target.dyn_into::<web_sys::HtmlElement>()
            {
                el.style().set_property("cursor", "grab").ok();
            }
        }
    };

    let on_wheel = move |e: WheelEvent| {
        e.prevent_default();
        let Some(canvas) = canvas_ref.get_untracked() else {
            return;
        };
        let (w, h) = canvas_css_size(&canvas);
        let delta = e.delta_y();
        let x = e.offset_x() as f64;
        let y = e.offset_y() as f64;
        viewport.update(|vp| vp.zoom_at(delta, x, y, w, h));
    };

    let on_click = {
        let drag_start_x = drag_start_x.clone();
        let drag_start_y = drag_start_y.clone();
        move |e: MouseEvent| {
            let dx = (e.client_x() as f64 - drag_start_x.get()).abs();
            let dy = (e.client_y() as f64 - drag_start_y.get()).abs();
            if dx >= CLICK_SLOP_PX || dy >= CLICK_SLOP_PX {
                return;
            }
            let Some(canvas) = canvas_ref.get_untracked() else {
                return;
            };
            let rect = canvas.get_bounding_client_rect();
            let local_x = e.client_x() as f64 - rect.left();
            let local_y = e.client_y() as f64 - rect.top();
            let (w, h) = canvas_css_size(&canvas);
            let vp = viewport.get_untracked();
            let point = vp.to_latlng(local_x, local_y, w, h);
            let hit = polygons.with_untracked(|polys| hit_district(polys, point).map(|p| p.id.clone()));
            if let Some(id) = hit {
                selection.update(|s| s.select_district(&id));
            }
        }
    };

    view! {
        <div
            class="kmap-mapWrapper"
            style="position: relative; width: 100%; height: 100%; overflow: hidden;"
            on:wheel=on_wheel
            on:pointerdown=on_pointer_down
            on:pointermove=on_pointer_move
            on:pointerup=on_pointer_up
            on:click=on_click
        >
            <canvas
                node_ref=canvas_ref
                style="position: absolute; inset: 0; width: 100%; height: 100%; touch-action: none; cursor: grab;"
            />
        </div>
    }
}
