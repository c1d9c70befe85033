use leptos::prelude::*;

use dongmap_shared::{DistrictPolygon, SelectionState, Stage};

use crate::map_canvas::MapCanvas;
use crate::panel::{ConfirmCard, Panel};
use crate::polygons;
use crate::router::{CurrentRoute, Route};
use crate::viewport::Viewport;

pub(crate) const PANEL_WIDTH: f64 = 340.0;

/// Root component. Owns the global signals and provides them via context.
#[component]
pub fn App() -> impl IntoView {
    let selection: RwSignal<SelectionState> = RwSignal::new(SelectionState::default());
    let polygons: RwSignal<Vec<DistrictPolygon>> = RwSignal::new(Vec::new());
    let viewport: RwSignal<Viewport> = RwSignal::new(Viewport::default());
    let route: RwSignal<Route> = RwSignal::new(Route::MapSelect);

    provide_context(selection);
    provide_context(polygons);
    provide_context(viewport);
    provide_context(CurrentRoute(route));

    // One-shot boundary overlay load at mount.
    Effect::new(move || {
        polygons::fetch_district_polygons(polygons);
    });

    // Every transition that moves the map center lands here and re-centers
    // the canvas. Keystrokes and same-center transitions don't.
    let map_center = Memo::new(move |_| selection.with(|s| s.map_center));
    Effect::new(move || {
        let center = map_center.get();
        viewport.update(|vp| vp.center_on(center));
    });

    view! {
        {move || match route.get() {
            Route::MapSelect => view! { <MapSelectScreen /> }.into_any(),
            Route::Report(_) => view! { <ReportScreen /> }.into_any(),
        }}
    }
}

#[component]
fn MapSelectScreen() -> impl IntoView {
    let selection: RwSignal<SelectionState> = expect_context();
    let stage = Memo::new(move |_| selection.with(|s| s.stage()));

    view! {
        <div
            class="kmap-container"
            style="position: relative; width: 100%; height: 100%; overflow: hidden;"
        >
            <TopNav />
            <div style=format!("position: absolute; inset: 0; right: {PANEL_WIDTH}px;")>
                <MapCanvas />
            </div>
            <div style=format!("position: absolute; top: 0; right: 0; bottom: 0; width: {PANEL_WIDTH}px;")>
                <Panel />
            </div>
            {move || (stage.get() == Stage::Confirm).then(|| view! { <ConfirmCard /> })}
        </div>
    }
}

/// Menu links to the other screens of the host application.
#[component]
fn TopNav() -> impl IntoView {
    view! {
        <div
            class="kmap-nav"
            style=format!("position: absolute; top: 16px; right: {}px; z-index: 12;", PANEL_WIDTH + 16.0)
        >
            <nav
                class="kmap-navInner"
                style="display: flex; gap: 14px; background: rgba(255,255,255,0.92); border: 1px solid #d8dde3; border-radius: 8px; padding: 8px 14px; font-size: 0.85rem;"
            >
                <a href="/" style="color: #111827; text-decoration: none;">"홈"</a>
                <a href="/irq" style="color: #111827; text-decoration: none;">"업종추천"</a>
                <a href="/gu" style="color: #111827; text-decoration: none;">"정책안내"</a>
            </nav>
        </div>
    }
}

/// Handoff target for `/re`. The report screen itself ships separately; the
/// selection screen is gone once navigation lands here.
#[component]
fn ReportScreen() -> impl IntoView {
    view! { <div id="report-root"></div> }
}
