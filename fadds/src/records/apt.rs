// SPDX-License-Identifier: Apache-2.0
// Copyright 2026 Joe Pearson
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Layouts of `APT.txt`, which contains landing facilities with their
//! attendance schedules, runways and remarks.
//!
//! All record types of the file are 1529 characters long.

use crate::convert::DatePattern;
use crate::{Enrichment, Layout};

/// The length of every record in `APT.txt`.
pub const APT_RECORD_LENGTH: usize = 1529;

/// Landing facility data.
pub const APT: Layout = layout![
    "record_type" => 3,
    "facility_site_number" => 11,
    "landing_facility_type" => 13,
    "location_identifier" => 4,
    "information_effective_date" => 10,
    "faa_region_code" => 3,
    "faa_district_office_code" => 4,
    "associated_state_post_office_code" => 2,
    "associated_state_name" => 20,
    "associated_county_name" => 21,
    "associated_county_state" => 2,
    "associated_city" => 40,
    "official_facility_name" => 50,
    "ownership_type" => 2,
    "facility_use" => 2,
    "owner_name" => 35,
    "owner_address" => 72,
    "owner_city_state_zip" => 45,
    "owner_phone" => 16,
    "manager_name" => 35,
    "manager_address" => 72,
    "manager_city_state_zip" => 45,
    "manager_phone" => 16,
    "point_latitude_formatted" => 15,
    "point_latitude_seconds" => 12,
    "point_longitude_formatted" => 15,
    "point_longitude_seconds" => 12,
    "point_determination_method" => 1,
    "elevation" => 7,
    "elevation_determination_method" => 1,
    "magnetic_variation" => 3,
    "magnetic_variation_epoch_year" => 4,
    "traffic_pattern_altitude" => 4,
    "sectional" => 30,
    "distance_from_cbd" => 2,
    "direction_from_cbd" => 3,
    "land_area_acres" => 5,
    "boundary_artcc_identifier" => 4,
    "boundary_artcc_computer_identifier" => 3,
    "boundary_artcc_name" => 30,
    "responsible_artcc_identifier" => 4,
    "responsible_artcc_computer_identifier" => 3,
    "responsible_artcc_name" => 30,
    "tie_in_fss_on_facility" => 1,
    "tie_in_fss_identifier" => 4,
    "tie_in_fss_name" => 30,
    "fss_local_phone" => 16,
    "fss_toll_free_phone" => 16,
    "alternate_fss_identifier" => 4,
    "alternate_fss_name" => 30,
    "alternate_fss_toll_free_phone" => 16,
    "notam_facility_identifier" => 4,
    "notam_d_available" => 1,
    "activation_date" => 7,
    "airport_status_code" => 2,
    "certification_type_date" => 15,
    "federal_agreements" => 7,
    "airspace_analysis_determination" => 13,
    "customs_airport_of_entry" => 1,
    "customs_landing_rights" => 1,
    "military_civil_joint_use" => 1,
    "military_landing_rights" => 1,
    "inspection_method" => 2,
    "inspector_agency" => 1,
    "last_inspection_date" => 8,
    "last_information_request_date" => 8,
    "fuel_types" => 40,
    "airframe_repair" => 5,
    "powerplant_repair" => 5,
    "bottled_oxygen" => 8,
    "bulk_oxygen" => 8,
    "lighting_schedule" => 7,
    "beacon_lighting_schedule" => 7,
    "control_tower" => 1,
    "unicom_frequency" => 7,
    "common_traffic_advisory_frequency" => 7,
    "segmented_circle" => 4,
    "beacon_color" => 3,
    "landing_fee" => 1,
    "medical_use" => 1,
    "singles_based" => 3,
    "multis_based" => 3,
    "jets_based" => 3,
    "helicopters_based" => 3,
    "gliders_based" => 3,
    "military_based" => 3,
    "ultralights_based" => 3,
    "operations_commercial" => 6,
    "operations_commuter" => 6,
    "operations_air_taxi" => 6,
    "operations_general_aviation_local" => 6,
    "operations_general_aviation_itinerant" => 6,
    "operations_military" => 6,
    "operations_date" => 10,
    "position_source" => 16,
    "position_source_date" => 10,
    "elevation_source" => 16,
    "elevation_source_date" => 10,
    "contract_fuel_available" => 1,
    "transient_storage" => 12,
    "other_services" => 71,
    "wind_indicator" => 3,
    "icao_identifier" => 7,
    "minimum_operational_network" => 1,
    _ => 311,
];

/// Attendance schedule of a landing facility.
pub const ATT: Layout = layout![
    "record_type" => 3,
    "facility_site_number" => 11,
    "state_post_office_code" => 2,
    "attendance_schedule_sequence" => 2,
    "attendance_schedule" => 108,
    _ => 1403,
];

/// Runway data, with both runway ends.
pub const RWY: Layout = layout![
    // runway
    "record_type" => 3,
    "facility_site_number" => 11,
    "state_post_office_code" => 2,
    "runway_identification" => 7,
    "runway_length" => 5,
    "runway_width" => 4,
    "surface_type_condition" => 12,
    "surface_treatment" => 5,
    "pavement_classification_number" => 11,
    "edge_lights_intensity" => 5,
    // base end
    "base_end_identifier" => 3,
    "base_end_true_alignment" => 3,
    "base_end_ils_type" => 10,
    "base_end_right_hand_traffic" => 1,
    "base_end_markings_type" => 5,
    "base_end_markings_condition" => 1,
    "base_end_latitude_physical_runway_end_formatted" => 15,
    "base_end_latitude_physical_runway_end_seconds" => 12,
    "base_end_longitude_physical_runway_end_formatted" => 15,
    "base_end_longitude_physical_runway_end_seconds" => 12,
    "base_end_elevation_physical_runway_end" => 7,
    "base_end_threshold_crossing_height" => 3,
    "base_end_visual_glide_path_angle" => 4,
    "base_end_latitude_displaced_threshold_formatted" => 15,
    "base_end_latitude_displaced_threshold_seconds" => 12,
    "base_end_longitude_displaced_threshold_formatted" => 15,
    "base_end_longitude_displaced_threshold_seconds" => 12,
    "base_end_elevation_displaced_threshold" => 7,
    "base_end_displaced_threshold_length" => 4,
    "base_end_elevation_touchdown_zone" => 7,
    "base_end_visual_glide_slope_indicators" => 5,
    "base_end_runway_visual_range_equipment" => 3,
    "base_end_runway_visibility_value_equipment" => 1,
    "base_end_approach_light_system" => 8,
    "base_end_runway_end_identifier_lights" => 1,
    "base_end_centerline_lights" => 1,
    "base_end_touchdown_lights" => 1,
    "base_end_controlling_object_description" => 11,
    "base_end_controlling_object_marking" => 4,
    "base_end_controlling_object_part77_category" => 5,
    "base_end_controlling_object_clearance_slope" => 2,
    "base_end_controlling_object_height" => 5,
    "base_end_controlling_object_distance" => 5,
    "base_end_controlling_object_centerline_offset" => 7,
    // reciprocal end
    "reciprocal_end_identifier" => 3,
    "reciprocal_end_true_alignment" => 3,
    "reciprocal_end_ils_type" => 10,
    "reciprocal_end_right_hand_traffic" => 1,
    "reciprocal_end_markings_type" => 5,
    "reciprocal_end_markings_condition" => 1,
    "reciprocal_end_latitude_physical_runway_end_formatted" => 15,
    "reciprocal_end_latitude_physical_runway_end_seconds" => 12,
    "reciprocal_end_longitude_physical_runway_end_formatted" => 15,
    "reciprocal_end_longitude_physical_runway_end_seconds" => 12,
    "reciprocal_end_elevation_physical_runway_end" => 7,
    "reciprocal_end_threshold_crossing_height" => 3,
    "reciprocal_end_visual_glide_path_angle" => 4,
    "reciprocal_end_latitude_displaced_threshold_formatted" => 15,
    "reciprocal_end_latitude_displaced_threshold_seconds" => 12,
    "reciprocal_end_longitude_displaced_threshold_formatted" => 15,
    "reciprocal_end_longitude_displaced_threshold_seconds" => 12,
    "reciprocal_end_elevation_displaced_threshold" => 7,
    "reciprocal_end_displaced_threshold_length" => 4,
    "reciprocal_end_elevation_touchdown_zone" => 7,
    "reciprocal_end_visual_glide_slope_indicators" => 5,
    "reciprocal_end_runway_visual_range_equipment" => 3,
    "reciprocal_end_runway_visibility_value_equipment" => 1,
    "reciprocal_end_approach_light_system" => 8,
    "reciprocal_end_runway_end_identifier_lights" => 1,
    "reciprocal_end_centerline_lights" => 1,
    "reciprocal_end_touchdown_lights" => 1,
    "reciprocal_end_controlling_object_description" => 11,
    "reciprocal_end_controlling_object_marking" => 4,
    "reciprocal_end_controlling_object_part77_category" => 5,
    "reciprocal_end_controlling_object_clearance_slope" => 2,
    "reciprocal_end_controlling_object_height" => 5,
    "reciprocal_end_controlling_object_distance" => 5,
    "reciprocal_end_controlling_object_centerline_offset" => 7,
    // runway, continued
    "runway_length_source" => 16,
    "runway_length_source_date" => 10,
    "weight_bearing_single_wheel" => 6,
    "weight_bearing_dual_wheel" => 6,
    "weight_bearing_two_dual_wheels" => 6,
    "weight_bearing_two_dual_tandem" => 6,
    // base end, continued
    "base_end_runway_end_gradient" => 5,
    "base_end_runway_end_gradient_direction" => 4,
    "base_end_position_source" => 16,
    "base_end_position_source_date" => 10,
    "base_end_elevation_source" => 16,
    "base_end_elevation_source_date" => 10,
    "base_end_displaced_threshold_position_source" => 16,
    "base_end_displaced_threshold_position_source_date" => 10,
    "base_end_displaced_threshold_elevation_source" => 16,
    "base_end_displaced_threshold_elevation_source_date" => 10,
    "base_end_touchdown_zone_elevation_source" => 16,
    "base_end_touchdown_zone_elevation_source_date" => 10,
    "base_end_takeoff_run_available" => 5,
    "base_end_takeoff_distance_available" => 5,
    "base_end_accelerate_stop_distance_available" => 5,
    "base_end_landing_distance_available" => 5,
    "base_end_lahso_distance" => 5,
    "base_end_lahso_intersecting_runway" => 7,
    "base_end_lahso_entity_description" => 40,
    "base_end_lahso_latitude_formatted" => 15,
    "base_end_lahso_latitude_seconds" => 12,
    "base_end_lahso_longitude_formatted" => 15,
    "base_end_lahso_longitude_seconds" => 12,
    "base_end_lahso_source" => 16,
    "base_end_lahso_source_date" => 10,
    // reciprocal end, continued
    "reciprocal_end_runway_end_gradient" => 5,
    "reciprocal_end_runway_end_gradient_direction" => 4,
    "reciprocal_end_position_source" => 16,
    "reciprocal_end_position_source_date" => 10,
    "reciprocal_end_elevation_source" => 16,
    "reciprocal_end_elevation_source_date" => 10,
    "reciprocal_end_displaced_threshold_position_source" => 16,
    "reciprocal_end_displaced_threshold_position_source_date" => 10,
    "reciprocal_end_displaced_threshold_elevation_source" => 16,
    "reciprocal_end_displaced_threshold_elevation_source_date" => 10,
    "reciprocal_end_touchdown_zone_elevation_source" => 16,
    "reciprocal_end_touchdown_zone_elevation_source_date" => 10,
    "reciprocal_end_takeoff_run_available" => 5,
    "reciprocal_end_takeoff_distance_available" => 5,
    "reciprocal_end_accelerate_stop_distance_available" => 5,
    "reciprocal_end_landing_distance_available" => 5,
    "reciprocal_end_lahso_distance" => 5,
    "reciprocal_end_lahso_intersecting_runway" => 7,
    "reciprocal_end_lahso_entity_description" => 40,
    "reciprocal_end_lahso_latitude_formatted" => 15,
    "reciprocal_end_lahso_latitude_seconds" => 12,
    "reciprocal_end_lahso_longitude_formatted" => 15,
    "reciprocal_end_lahso_longitude_seconds" => 12,
    "reciprocal_end_lahso_source" => 16,
    "reciprocal_end_lahso_source_date" => 10,
    _ => 388,
];

/// Remark on an element of a landing facility.
pub const RMK: Layout = layout![
    "record_type" => 3,
    "facility_site_number" => 11,
    "state_post_office_code" => 2,
    "element_name" => 13,
    "element_text" => 1500,
];

const _: () = assert!(APT.width() == APT_RECORD_LENGTH);
const _: () = assert!(ATT.width() == APT_RECORD_LENGTH);
const _: () = assert!(RWY.width() == APT_RECORD_LENGTH);
const _: () = assert!(RMK.width() == APT_RECORD_LENGTH);

pub const APT_ENRICHMENTS: &[Enrichment] = &[
    Enrichment::dms_dashed("point_latitude_formatted", "lat"),
    Enrichment::dms_dashed("point_longitude_formatted", "lon"),
    Enrichment::flag("control_tower", "has_control_tower"),
    Enrichment::flag("notam_d_available", "has_notam_d"),
    Enrichment::flag("customs_airport_of_entry", "is_customs_airport_of_entry"),
    Enrichment::date(
        "information_effective_date",
        DatePattern::MonthDayYear,
        "effective_date",
    ),
    Enrichment::date("activation_date", DatePattern::MonthYear, "activated"),
    Enrichment::date(
        "operations_date",
        DatePattern::MonthDayYear,
        "operations_as_of",
    ),
];

pub const RWY_ENRICHMENTS: &[Enrichment] = &[
    Enrichment::dms_dashed(
        "base_end_latitude_physical_runway_end_formatted",
        "base_end_lat",
    ),
    Enrichment::dms_dashed(
        "base_end_longitude_physical_runway_end_formatted",
        "base_end_lon",
    ),
    Enrichment::dms_dashed(
        "base_end_latitude_displaced_threshold_formatted",
        "base_end_displaced_threshold_lat",
    ),
    Enrichment::dms_dashed(
        "base_end_longitude_displaced_threshold_formatted",
        "base_end_displaced_threshold_lon",
    ),
    Enrichment::dms_dashed(
        "reciprocal_end_latitude_physical_runway_end_formatted",
        "reciprocal_end_lat",
    ),
    Enrichment::dms_dashed(
        "reciprocal_end_longitude_physical_runway_end_formatted",
        "reciprocal_end_lon",
    ),
    // displaced-threshold fields, not the physical runway end, as for the base end
    Enrichment::dms_dashed(
        "reciprocal_end_latitude_displaced_threshold_formatted",
        "reciprocal_end_displaced_threshold_lat",
    ),
    Enrichment::dms_dashed(
        "reciprocal_end_longitude_displaced_threshold_formatted",
        "reciprocal_end_displaced_threshold_lon",
    ),
    Enrichment::date(
        "runway_length_source_date",
        DatePattern::MonthDayYear,
        "runway_length_surveyed",
    ),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enrichment_sources_are_fields() {
        for (layout, enrichments) in [(&APT, APT_ENRICHMENTS), (&RWY, RWY_ENRICHMENTS)] {
            for enrichment in enrichments {
                assert!(
                    layout.position(enrichment.source).is_some(),
                    "{}",
                    enrichment.source
                );
                assert!(
                    layout.position(enrichment.target).is_none(),
                    "{}",
                    enrichment.target
                );
            }
        }
    }

    #[test]
    fn displaced_thresholds_read_displaced_threshold_fields() {
        let source = |target| {
            RWY_ENRICHMENTS
                .iter()
                .find(|enrichment| enrichment.target == target)
                .map(|enrichment| enrichment.source)
        };

        assert_eq!(
            source("base_end_displaced_threshold_lat"),
            Some("base_end_latitude_displaced_threshold_formatted")
        );
        assert_eq!(
            source("reciprocal_end_displaced_threshold_lat"),
            Some("reciprocal_end_latitude_displaced_threshold_formatted")
        );
        assert_eq!(
            source("reciprocal_end_displaced_threshold_lon"),
            Some("reciprocal_end_longitude_displaced_threshold_formatted")
        );
    }

    #[test]
    fn columns_match_published_positions() {
        // zero-based column ranges, end exclusive
        assert_eq!(APT.position("location_identifier"), Some((27, 31)));
        assert_eq!(APT.position("point_latitude_formatted"), Some((523, 538)));
        assert_eq!(APT.position("icao_identifier"), Some((1210, 1217)));
        assert_eq!(RWY.position("runway_identification"), Some((16, 23)));
        assert_eq!(RWY.position("reciprocal_end_identifier"), Some((287, 290)));
        assert_eq!(RMK.position("element_text"), Some((29, 1529)));
    }
}
