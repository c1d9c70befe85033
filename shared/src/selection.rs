//! Selection state for the map screen: which district ("gu") and sub-district
//! ("dong") the user has picked, the live search text, and the map center.
//!
//! The state is a plain value mutated by transition methods, so the whole
//! machine is host-testable without a browser. Derived views (the panel list,
//! search results) are pure functions of the state plus the static reference
//! data in [`crate::data`].

use serde::Serialize;

use crate::district::{District, SubDistrict, district_by_id, district_dong_map, sub_district, sub_districts_of};
use crate::geo::LatLng;

/// Citywide default map center, restored on every reset.
pub const DEFAULT_MAP_CENTER: LatLng = LatLng::new(37.566826, 126.9786567);

/// Default Kakao-style zoom level for the citywide view.
pub const DEFAULT_MAP_LEVEL: u8 = 8;

/// What the user currently has picked. A sub-district can only exist together
/// with its parent district; the variant encodes that invariant.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Picked {
    #[default]
    None,
    District {
        id: String,
    },
    SubDistrict {
        district_id: String,
        id: String,
        label: String,
    },
}

impl Picked {
    pub fn district_id(&self) -> Option<&str> {
        match self {
            Picked::None => None,
            Picked::District { id } => Some(id),
            Picked::SubDistrict { district_id, .. } => Some(district_id),
        }
    }
}

/// The four screen states, derived from the fields rather than stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Nothing picked, no search text: the full district list.
    Home,
    /// Non-empty search text; search results win regardless of any selection.
    Searching,
    /// District picked: its sub-district list.
    DistrictView,
    /// District and sub-district picked: the confirmation card.
    Confirm,
}

/// A search match: a dong whose label contains the query, annotated with its
/// parent gu for display and re-centering.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchHit {
    pub dong_id: &'static str,
    pub dong_label: &'static str,
    pub gu_id: &'static str,
    pub gu_label: &'static str,
    pub gu_center: LatLng,
}

/// One row of the panel list. The variant is the explicit tag that decides
/// what a click on the row means; the projection in [`SelectionState::shown_items`]
/// determines which variant appears in which stage.
#[derive(Debug, Clone, PartialEq)]
pub enum ListItem {
    District(&'static District),
    SubDistrict(&'static SubDistrict),
    SearchHit(SearchHit),
}

impl ListItem {
    /// Stable identity key for list rendering.
    pub fn key(&self) -> &str {
        match self {
            ListItem::District(gu) => gu.id,
            ListItem::SubDistrict(dong) => dong.id,
            ListItem::SearchHit(hit) => hit.dong_id,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            ListItem::District(gu) => gu.label,
            ListItem::SubDistrict(dong) => dong.label,
            ListItem::SearchHit(hit) => hit.dong_label,
        }
    }

    /// Label as shown in the panel; search hits carry their parent gu in
    /// parentheses.
    pub fn display_label(&self) -> String {
        match self {
            ListItem::SearchHit(hit) => format!("{} ({})", hit.dong_label, hit.gu_label),
            _ => self.label().to_string(),
        }
    }
}

/// Navigation payload for the report screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportRequest {
    #[serde(rename = "guId")]
    pub gu_id: String,
    #[serde(rename = "dongId")]
    pub dong_id: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SelectionState {
    pub search_text: String,
    pub picked: Picked,
    pub map_center: LatLng,
}

impl Default for SelectionState {
    fn default() -> Self {
        Self {
            search_text: String::new(),
            picked: Picked::None,
            map_center: DEFAULT_MAP_CENTER,
        }
    }
}

impl SelectionState {
    pub fn stage(&self) -> Stage {
        if !self.search_text.trim().is_empty() {
            return Stage::Searching;
        }
        match self.picked {
            Picked::None => Stage::Home,
            Picked::District { .. } => Stage::DistrictView,
            Picked::SubDistrict { .. } => Stage::Confirm,
        }
    }

    pub fn district_id(&self) -> Option<&str> {
        self.picked.district_id()
    }

    /// Label of the picked district, empty for a stale or absent id.
    pub fn district_label(&self) -> &'static str {
        self.district_id()
            .and_then(district_by_id)
            .map(|gu| gu.label)
            .unwrap_or("")
    }

    pub fn sub_district(&self) -> Option<(&str, &str)> {
        match &self.picked {
            Picked::SubDistrict { id, label, .. } => Some((id, label)),
            _ => None,
        }
    }

    /// Search-text edit. Deliberately touches nothing else: an existing
    /// selection survives typing and resurfaces when the text is cleared.
    pub fn edit_search(&mut self, text: impl Into<String>) {
        self.search_text = text.into();
    }

    /// District pick, from a polygon click or a district-list row. Clears any
    /// sub-district and the search text; re-centers when the district is known.
    pub fn select_district(&mut self, id: &str) {
        self.picked = Picked::District { id: id.to_string() };
        self.search_text.clear();
        if let Some(gu) = district_by_id(id) {
            self.map_center = gu.center();
        }
    }

    /// Sub-district pick from the district view. No-op without a picked
    /// district. Re-centering is skipped when the reference lookup has no
    /// coordinate; the selection itself still updates.
    pub fn select_sub_district(&mut self, id: &str, label: &str) {
        let Some(district_id) = self.district_id().map(str::to_string) else {
            return;
        };
        if let Some(coord) = sub_district(&district_id, id).and_then(|dong| dong.coord) {
            self.map_center = coord;
        }
        self.picked = Picked::SubDistrict {
            district_id,
            id: id.to_string(),
            label: label.to_string(),
        };
    }

    /// Search-result pick: adopts the hit's parent district and the dong in
    /// one step, clears the search, and re-centers on the parent district.
    pub fn select_search_hit(&mut self, hit: &SearchHit) {
        self.picked = Picked::SubDistrict {
            district_id: hit.gu_id.to_string(),
            id: hit.dong_id.to_string(),
            label: hit.dong_label.to_string(),
        };
        self.search_text.clear();
        self.map_center = hit.gu_center;
    }

    /// Single entry point for panel-row clicks. The variant carried by the
    /// projection decides the meaning; search hits adopt their parent district
    /// even though none is picked yet, which is why they are matched first.
    pub fn apply_item_click(&mut self, item: &ListItem) {
        match item {
            ListItem::SearchHit(hit) => self.select_search_hit(hit),
            ListItem::SubDistrict(dong) => self.select_sub_district(dong.id, dong.label),
            ListItem::District(gu) => self.select_district(gu.id),
        }
    }

    /// "Back" and "no, reselect": restore the mount-time defaults.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// "Yes, write the report": the navigation payload, only from the Confirm
    /// stage. State is left untouched; navigation unmounts the screen.
    pub fn confirm(&self) -> Option<ReportRequest> {
        if self.stage() != Stage::Confirm {
            return None;
        }
        match &self.picked {
            Picked::SubDistrict { district_id, id, .. } => Some(ReportRequest {
                gu_id: district_id.clone(),
                dong_id: id.clone(),
            }),
            _ => None,
        }
    }

    /// The panel list for the current state: search results while searching,
    /// the picked district's dongs in district view, otherwise every gu in
    /// static order.
    pub fn shown_items(&self) -> Vec<ListItem> {
        let query = self.search_text.trim();
        if !query.is_empty() {
            return search_sub_districts(query)
                .into_iter()
                .map(ListItem::SearchHit)
                .collect();
        }
        if let Some(district_id) = self.district_id() {
            return sub_districts_of(district_id)
                .iter()
                .map(ListItem::SubDistrict)
                .collect();
        }
        crate::district::districts()
            .iter()
            .map(ListItem::District)
            .collect()
    }
}

/// Case-sensitive substring search over every (gu, dong) pair, in the static
/// definition order of the reference mapping. Empty trimmed query means "not
/// searching", not "match everything". No ranking, no result limit.
pub fn search_sub_districts(query: &str) -> Vec<SearchHit> {
    let query = query.trim();
    if query.is_empty() {
        return Vec::new();
    }
    let mut hits = Vec::new();
    for &(gu_id, dongs) in district_dong_map() {
        let Some(gu) = district_by_id(gu_id) else {
            continue;
        };
        for dong in dongs {
            if dong.label.contains(query) {
                hits.push(SearchHit {
                    dong_id: dong.id,
                    dong_label: dong.label,
                    gu_id: gu.id,
                    gu_label: gu.label,
                    gu_center: gu.center(),
                });
            }
        }
    }
    hits
}

#[cfg(test)]
mod tests {
    use super::*;

    const GANGNAM: &str = "11680";
    const SEONGDONG: &str = "11200";

    #[test]
    fn mount_defaults() {
        let state = SelectionState::default();
        assert_eq!(state.stage(), Stage::Home);
        assert_eq!(state.search_text, "");
        assert_eq!(state.picked, Picked::None);
        assert_eq!(state.map_center, DEFAULT_MAP_CENTER);
    }

    #[test]
    fn every_search_hit_label_contains_the_query() {
        for query in ["동", "역", "수", "가"] {
            for hit in search_sub_districts(query) {
                assert!(
                    hit.dong_label.contains(query),
                    "{} does not contain {query}",
                    hit.dong_label
                );
            }
        }
    }

    #[test]
    fn search_is_case_sensitive_substring_with_trim() {
        assert_eq!(search_sub_districts(""), Vec::new());
        assert_eq!(search_sub_districts("   "), Vec::new());
        let trimmed = search_sub_districts("역삼");
        let padded = search_sub_districts("  역삼  ");
        assert_eq!(trimmed, padded);
        assert!(!trimmed.is_empty());
    }

    #[test]
    fn search_results_follow_reference_definition_order() {
        let hits = search_sub_districts("동");
        let gu_order: Vec<&str> = {
            let mut seen = Vec::new();
            for hit in &hits {
                if seen.last() != Some(&hit.gu_id) {
                    seen.push(hit.gu_id);
                }
            }
            seen
        };
        let reference_order: Vec<&str> = district_dong_map()
            .iter()
            .filter(|&&(gu_id, dongs)| {
                district_by_id(gu_id).is_some() && dongs.iter().any(|d| d.label.contains("동"))
            })
            .map(|&(gu_id, _)| gu_id)
            .collect();
        assert_eq!(gu_order, reference_order);
    }

    #[test]
    fn selecting_a_district_clears_search_and_sub_district() {
        let mut state = SelectionState::default();
        state.select_district(GANGNAM);
        state.select_sub_district("1168010100", "역삼동");
        state.edit_search("압구");
        state.select_district(SEONGDONG);
        assert_eq!(state.search_text, "");
        assert_eq!(state.picked, Picked::District { id: SEONGDONG.into() });
        assert_eq!(
            state.map_center,
            district_by_id(SEONGDONG).unwrap().center()
        );
    }

    #[test]
    fn selecting_a_stale_district_keeps_map_center() {
        let mut state = SelectionState::default();
        state.select_district("99999");
        assert_eq!(state.district_id(), Some("99999"));
        assert_eq!(state.map_center, DEFAULT_MAP_CENTER);
        assert_eq!(state.district_label(), "");
    }

    #[test]
    fn editing_search_keeps_the_current_selection() {
        let mut state = SelectionState::default();
        state.select_district(GANGNAM);
        state.edit_search("잠실");
        assert_eq!(state.stage(), Stage::Searching);
        assert_eq!(state.district_id(), Some(GANGNAM));
        state.edit_search("");
        assert_eq!(state.stage(), Stage::DistrictView);
    }

    #[test]
    fn sub_district_click_requires_a_district() {
        let mut state = SelectionState::default();
        state.select_sub_district("1168010100", "역삼동");
        assert_eq!(state, SelectionState::default());
    }

    #[test]
    fn sub_district_without_coordinate_skips_recentering() {
        let mut state = SelectionState::default();
        state.select_district(SEONGDONG);
        let district_center = state.map_center;
        // 사근동 carries no coordinate in the reference data.
        state.select_sub_district("1120010600", "사근동");
        assert_eq!(state.stage(), Stage::Confirm);
        assert_eq!(state.sub_district(), Some(("1120010600", "사근동")));
        assert_eq!(state.map_center, district_center);
    }

    #[test]
    fn back_and_no_restore_the_mount_defaults_exactly() {
        let mut state = SelectionState::default();
        state.select_district(GANGNAM);
        state.select_sub_district("1168010100", "역삼동");
        state.reset();
        assert_eq!(state, SelectionState::default());
        assert_eq!(state.map_center, LatLng::new(37.566826, 126.9786567));
    }

    #[test]
    fn projection_never_shows_district_list_while_searching() {
        let mut state = SelectionState::default();
        state.edit_search("동");
        for item in state.shown_items() {
            assert!(matches!(item, ListItem::SearchHit(_)));
        }
        state.select_district(GANGNAM);
        state.edit_search("x");
        // Search beats the district view even with a district picked.
        assert!(state.shown_items().is_empty());
    }

    #[test]
    fn projection_home_lists_all_districts_in_order() {
        let state = SelectionState::default();
        let items = state.shown_items();
        assert_eq!(items.len(), crate::district::districts().len());
        assert_eq!(items[0].label(), "종로구");
        assert!(matches!(items[0], ListItem::District(_)));
    }

    #[test]
    fn projection_with_stale_district_is_empty() {
        let mut state = SelectionState::default();
        state.select_district("99999");
        assert!(state.shown_items().is_empty());
    }

    #[test]
    fn search_hit_rows_show_parent_district_in_parentheses() {
        let hits = search_sub_districts("역삼");
        let row = ListItem::SearchHit(hits[0].clone());
        assert_eq!(row.display_label(), "역삼동 (강남구)");
        assert_eq!(row.key(), "1168010100");
    }

    // Scenario A: search for 역삼, click the hit.
    #[test]
    fn search_then_click_hit_adopts_parent_district() {
        let mut state = SelectionState::default();
        state.edit_search("역삼");
        let items = state.shown_items();
        let row = items
            .iter()
            .find(|item| item.label() == "역삼동")
            .expect("역삼동 in search results");
        match row {
            ListItem::SearchHit(hit) => assert_eq!(hit.gu_label, "강남구"),
            other => panic!("expected search hit, got {other:?}"),
        }

        state.apply_item_click(row);
        assert_eq!(state.district_id(), Some(GANGNAM));
        assert_eq!(state.sub_district(), Some(("1168010100", "역삼동")));
        assert_eq!(state.search_text, "");
        assert_eq!(state.map_center, district_by_id(GANGNAM).unwrap().center());
        assert_eq!(state.stage(), Stage::Confirm);
    }

    // Scenario B: click the 성동구 polygon.
    #[test]
    fn district_polygon_click_shows_its_dong_list_without_confirm() {
        let mut state = SelectionState::default();
        state.select_district(SEONGDONG);
        assert_eq!(state.district_id(), Some(SEONGDONG));
        assert_eq!(state.stage(), Stage::DistrictView);

        let items = state.shown_items();
        assert_eq!(items.len(), sub_districts_of(SEONGDONG).len());
        assert!(items.iter().all(|item| matches!(item, ListItem::SubDistrict(_))));
        assert!(state.confirm().is_none());
    }

    // Scenario C: confirm from the Confirm stage.
    #[test]
    fn confirm_yields_the_report_payload_once_and_leaves_state() {
        let mut state = SelectionState::default();
        state.select_district(GANGNAM);
        state.select_sub_district("1168010100", "역삼동");
        assert_eq!(state.stage(), Stage::Confirm);

        let before = state.clone();
        let request = state.confirm().expect("confirm available");
        assert_eq!(request.gu_id, GANGNAM);
        assert_eq!(request.dong_id, "1168010100");
        assert_eq!(state, before);
    }

    #[test]
    fn confirm_outside_confirm_stage_is_unavailable() {
        let mut state = SelectionState::default();
        assert!(state.confirm().is_none());
        state.select_district(GANGNAM);
        assert!(state.confirm().is_none());
        state.select_sub_district("1168010100", "역삼동");
        state.edit_search("다른");
        // Searching hides the confirm card.
        assert!(state.confirm().is_none());
    }

    #[test]
    fn report_request_serializes_with_original_field_names() {
        let request = ReportRequest {
            gu_id: GANGNAM.into(),
            dong_id: "1168010100".into(),
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(
            value,
            serde_json::json!({ "guId": "11680", "dongId": "1168010100" })
        );
    }

    #[test]
    fn district_row_click_from_home_picks_the_district() {
        let mut state = SelectionState::default();
        let items = state.shown_items();
        let row = items
            .iter()
            .find(|item| item.label() == "강남구")
            .expect("강남구 row");
        state.apply_item_click(row);
        assert_eq!(state.picked, Picked::District { id: GANGNAM.into() });
        assert_eq!(state.stage(), Stage::DistrictView);
    }

    #[test]
    fn dong_row_click_in_district_view_recenters_on_the_dong() {
        let mut state = SelectionState::default();
        state.select_district(GANGNAM);
        let items = state.shown_items();
        let row = items
            .iter()
            .find(|item| item.label() == "삼성동")
            .expect("삼성동 row");
        state.apply_item_click(row);
        assert_eq!(state.stage(), Stage::Confirm);
        let coord = sub_district(GANGNAM, "1168010500").unwrap().coord.unwrap();
        assert_eq!(state.map_center, coord);
    }
}
