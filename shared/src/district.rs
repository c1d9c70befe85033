use serde::{Deserialize, Serialize};

use crate::data;
use crate::geo::LatLng;

/// Top-level administrative region of the city ("gu"). Static reference data;
/// the full ordered list lives in [`data`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct District {
    pub id: &'static str,
    pub label: &'static str,
    pub lat: f64,
    pub lng: f64,
}

impl District {
    pub const fn center(&self) -> LatLng {
        LatLng::new(self.lat, self.lng)
    }
}

/// Administrative subdivision within a district ("dong"). Belongs to exactly
/// one district via the [`data`] mapping. Not every dong carries a coordinate;
/// re-centering is skipped for those.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SubDistrict {
    pub id: &'static str,
    pub label: &'static str,
    pub coord: Option<LatLng>,
}

/// District boundary as fetched from the static polygon resource.
/// `id` correlates with [`District::id`]; the ring is `[[lat, lng], ...]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DistrictPolygon {
    pub id: String,
    pub polygon: Vec<[f64; 2]>,
}

/// All districts in their static reference order.
pub fn districts() -> &'static [District] {
    data::SEOUL_GU
}

pub fn district_by_id(id: &str) -> Option<&'static District> {
    data::SEOUL_GU.iter().find(|gu| gu.id == id)
}

/// Ordered sub-districts of a district; empty for an unknown (stale) id.
pub fn sub_districts_of(district_id: &str) -> &'static [SubDistrict] {
    data::GU_DONG
        .iter()
        .find(|(gu_id, _)| *gu_id == district_id)
        .map(|(_, dongs)| *dongs)
        .unwrap_or(&[])
}

pub fn sub_district(district_id: &str, dong_id: &str) -> Option<&'static SubDistrict> {
    sub_districts_of(district_id)
        .iter()
        .find(|dong| dong.id == dong_id)
}

/// The district → sub-district mapping in its static definition order.
/// Iteration order here is the search matcher's result order.
pub fn district_dong_map() -> &'static [(&'static str, &'static [SubDistrict])] {
    data::GU_DONG
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn district_list_covers_all_25_gu() {
        assert_eq!(districts().len(), 25);
    }

    #[test]
    fn district_ids_are_unique() {
        let mut ids: Vec<&str> = districts().iter().map(|gu| gu.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 25);
    }

    #[test]
    fn every_district_has_a_dong_list() {
        for gu in districts() {
            assert!(
                !sub_districts_of(gu.id).is_empty(),
                "no dong list for {} ({})",
                gu.label,
                gu.id
            );
        }
    }

    #[test]
    fn dong_map_keys_match_district_list() {
        for &(gu_id, _) in district_dong_map() {
            assert!(district_by_id(gu_id).is_some(), "unknown gu id {gu_id}");
        }
    }

    #[test]
    fn seongdong_gu_has_expected_id() {
        let gu = district_by_id("11200").expect("성동구 present");
        assert_eq!(gu.label, "성동구");
    }

    #[test]
    fn stale_district_id_yields_empty_dong_list() {
        assert!(sub_districts_of("99999").is_empty());
        assert!(sub_district("99999", "1").is_none());
    }

    #[test]
    fn district_polygon_parses_from_resource_json() {
        let raw = serde_json::json!({
            "id": "11200",
            "polygon": [[37.54, 127.01], [37.56, 127.02], [37.55, 127.06]]
        });
        let poly: DistrictPolygon = serde_json::from_value(raw).expect("valid polygon record");
        assert_eq!(poly.id, "11200");
        assert_eq!(poly.polygon.len(), 3);
        assert_eq!(poly.polygon[0], [37.54, 127.01]);
    }
}
