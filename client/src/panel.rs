use leptos::prelude::*;
use wasm_bindgen::JsCast;

use dongmap_shared::SelectionState;

use crate::router::{CurrentRoute, navigate_to_report};

/// Selection panel: search row, context text, the projected list, and the
/// back button. Which rows the list shows (districts, dongs, or search hits)
/// is entirely the state machine's projection; the panel just renders it.
#[component]
pub fn Panel() -> impl IntoView {
    let selection: RwSignal<SelectionState> = expect_context();

    let shown = Memo::new(move |_| selection.with(|s| s.shown_items()));
    let has_district = Memo::new(move |_| selection.with(|s| s.district_id().is_some()));

    let on_input = move |e: leptos::ev::Event| {
        let Some(target) = e.target() else {
            return;
        };
        let Ok(input) = target.dyn_into::<web_sys::HtmlInputElement>() else {
            return;
        };
        selection.update(|s| s.edit_search(input.value()));
    };

    view! {
        <div
            class="kmap-panel"
            style="display: flex; flex-direction: column; height: 100%; background: #ffffff; border-left: 1px solid #d8dde3; box-shadow: -4px 0 16px rgba(0,0,0,0.08); padding: 16px;"
        >
            <div class="kmap-searchRow" style="display: flex; gap: 8px;">
                <input
                    class="kmap-searchInput"
                    type="text"
                    placeholder="동 검색"
                    style="flex: 1; padding: 10px 12px; border: 1px solid #d8dde3; border-radius: 6px; font-size: 0.9rem; outline: none;"
                    prop:value=move || selection.with(|s| s.search_text.clone())
                    on:input=on_input
                />
                <button
                    class="kmap-searchBtn"
                    type="button"
                    style="padding: 0 12px; border: 1px solid #d8dde3; border-radius: 6px; background: #f6f8fa; cursor: pointer;"
                >
                    "\u{1F50D}"
                </button>
            </div>

            <div class="kmap-desc" style="margin-top: 14px; font-size: 0.8rem; color: #6b7280;">
                {move || {
                    if has_district.get() {
                        "아래 동을 선택 또는 지도에서 선택해주세요."
                    } else {
                        "검색어를 입력하거나 구를 선택해주세요."
                    }
                }}
            </div>
            <div class="kmap-title" style="margin-top: 4px; font-size: 1.05rem; font-weight: 700; color: #111827;">
                {move || {
                    if has_district.get() {
                        "분석할 동을 선택해주세요"
                    } else {
                        "분석할 구를 선택해주세요"
                    }
                }}
            </div>

            <div
                class="kmap-list"
                style="flex: 1; overflow-y: auto; margin-top: 12px; display: flex; flex-direction: column; gap: 6px;"
            >
                <For
                    each=move || shown.get()
                    key=|item| item.key().to_string()
                    children=move |item| {
                        let label = item.display_label();
                        let row_key = item.key().to_string();
                        let is_selected = Memo::new(move |_| {
                            selection.with(|s| {
                                s.sub_district().is_some_and(|(id, _)| id == row_key)
                            })
                        });
                        let on_click = move |_| selection.update(|s| s.apply_item_click(&item));
                        view! {
                            <button
                                type="button"
                                class="kmap-itemBtn"
                                class:selected=move || is_selected.get()
                                style="text-align: left; padding: 10px 12px; border: 1px solid #d8dde3; border-radius: 6px; background: #ffffff; font-size: 0.9rem; cursor: pointer; transition: background 0.15s, border-color 0.15s;"
                                style:background=move || if is_selected.get() { "#fdeaef" } else { "#ffffff" }
                                style:border-color=move || if is_selected.get() { "#EF476F" } else { "#d8dde3" }
                                on:click=on_click
                            >
                                {label}
                            </button>
                        }
                    }
                />
            </div>

            {move || {
                has_district
                    .get()
                    .then(|| {
                        view! {
                            <div class="kmap-backRow" style="margin-top: 12px;">
                                <button
                                    class="kmap-backBtn"
                                    type="button"
                                    style="width: 100%; padding: 10px 12px; border: 1px solid #d8dde3; border-radius: 6px; background: #f6f8fa; font-size: 0.85rem; cursor: pointer;"
                                    on:click=move |_| selection.update(|s| s.reset())
                                >
                                    "이전 페이지로 돌아가기"
                                </button>
                            </div>
                        }
                    })
            }}
        </div>
    }
}

/// Confirmation card shown once both a district and a dong are picked:
/// proceed to the report, or wipe the selection and start over.
#[component]
pub fn ConfirmCard() -> impl IntoView {
    let selection: RwSignal<SelectionState> = expect_context();
    let CurrentRoute(route) = expect_context();

    let title = Memo::new(move |_| {
        selection.with(|s| match s.sub_district() {
            Some((_, dong_label)) => {
                format!("서울특별시 {} {}", s.district_label(), dong_label)
            }
            None => String::new(),
        })
    });

    let on_yes = move |_| {
        let Some(request) = selection.with_untracked(|s| s.confirm()) else {
            return;
        };
        navigate_to_report(route, request);
    };
    let on_no = move |_| selection.update(|s| s.reset());

    view! {
        <div
            class="kmap-confirmWrap"
            style="position: absolute; left: 50%; bottom: 32px; transform: translateX(-50%); z-index: 20;"
        >
            <div
                class="kmap-confirmCard"
                style="background: #ffffff; border: 1px solid #d8dde3; border-radius: 10px; padding: 18px 22px; box-shadow: 0 8px 24px rgba(0,0,0,0.16); min-width: 320px;"
            >
                <div class="kmap-confirmTitle" style="font-size: 1rem; font-weight: 700; color: #111827;">
                    {move || title.get()}
                </div>
                <div class="kmap-confirmDesc" style="margin-top: 6px; font-size: 0.85rem; color: #6b7280;">
                    "상권 분석 리포트를 작성해드릴까요?"
                </div>
                <div class="kmap-confirmButtons" style="margin-top: 14px; display: flex; gap: 8px;">
                    <button
                        class="kmap-primaryBtn"
                        type="button"
                        style="flex: 1; padding: 10px 12px; border: none; border-radius: 6px; background: #EF476F; color: #ffffff; font-size: 0.9rem; cursor: pointer;"
                        on:click=on_yes
                    >
                        "네, 작성해주세요."
                    </button>
                    <button
                        class="kmap-secondaryBtn"
                        type="button"
                        style="flex: 1; padding: 10px 12px; border: 1px solid #d8dde3; border-radius: 6px; background: #f6f8fa; color: #374151; font-size: 0.9rem; cursor: pointer;"
                        on:click=on_no
                    >
                        "아니요, 다시 선택할래요."
                    </button>
                </div>
            </div>
        </div>
    }
}
