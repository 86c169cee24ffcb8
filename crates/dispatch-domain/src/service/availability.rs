//! Truck availability from scan-count parity

use dispatch_types::{collections, Result};

use crate::model::{AvailableTruck, TruckStatusRecord};
use crate::repository::StatusStore;

/// Read every parseable record in `truck_status`
///
/// Records that fail to parse are skipped with a warning. An absent
/// collection reads as empty.
pub fn read_truck_status<S: StatusStore + ?Sized>(store: &S) -> Result<Vec<TruckStatusRecord>> {
    let Some(trucks) = store.get_all(collections::TRUCK_STATUS)? else {
        log::debug!("{} is empty", collections::TRUCK_STATUS);
        return Ok(Vec::new());
    };

    let mut records = Vec::with_capacity(trucks.len());
    for (truck_id, value) in &trucks {
        match TruckStatusRecord::from_value(truck_id, value) {
            Ok(record) => records.push(record),
            Err(e) => log::warn!("Skipping malformed status for truck {}: {}", truck_id, e),
        }
    }
    Ok(records)
}

/// Trucks whose scan count is even, in store order
pub fn get_available_trucks<S: StatusStore + ?Sized>(store: &S) -> Result<Vec<AvailableTruck>> {
    let available: Vec<AvailableTruck> = read_truck_status(store)?
        .into_iter()
        .filter(|record| record.state().is_available())
        .map(AvailableTruck::from)
        .collect();
    log::debug!("{} trucks in station", available.len());
    Ok(available)
}

/// IDs of every truck with a status record, sorted
pub fn list_truck_ids<S: StatusStore + ?Sized>(store: &S) -> Result<Vec<String>> {
    let mut ids: Vec<String> = store
        .get_all(collections::TRUCK_STATUS)?
        .map(|trucks| trucks.keys().cloned().collect())
        .unwrap_or_default();
    ids.sort();
    Ok(ids)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::service::test_store::FakeStore;
    use dispatch_types::Error;
    use serde_json::json;

    fn fleet() -> FakeStore {
        FakeStore::with(
            collections::TRUCK_STATUS,
            json!({
                "A": {"scan_count": 2, "station_id": "S1", "latitude": 1.0, "longitude": 1.0},
                "B": {"scan_count": 3, "station_id": "S2", "latitude": 2.0, "longitude": 2.0},
                "C": {"scan_count": 0, "station_id": "S3", "latitude": 3.0, "longitude": 3.0},
                "D": {"station_id": "S4"}
            }),
        )
    }

    fn ids(trucks: &[AvailableTruck]) -> Vec<&str> {
        let mut ids: Vec<&str> = trucks.iter().map(|t| t.truck_id.as_str()).collect();
        ids.sort();
        ids
    }

    #[test]
    fn test_even_scan_counts_are_available() {
        let trucks = get_available_trucks(&fleet()).unwrap();
        assert_eq!(ids(&trucks), vec!["A", "C", "D"]);
    }

    #[test]
    fn test_flipping_parity_flips_availability() {
        let mut store = fleet();
        store
            .collections
            .get_mut(collections::TRUCK_STATUS)
            .unwrap()
            .insert("A".to_string(), json!({"scan_count": 3, "station_id": "S1"}));
        let trucks = get_available_trucks(&store).unwrap();
        assert_eq!(ids(&trucks), vec!["C", "D"]);
    }

    #[test]
    fn test_repeated_reads_agree() {
        let store = fleet();
        let first = get_available_trucks(&store).unwrap();
        let second = get_available_trucks(&store).unwrap();
        assert_eq!(ids(&first), ids(&second));
    }

    #[test]
    fn test_empty_store_yields_nothing() {
        assert!(get_available_trucks(&FakeStore::default()).unwrap().is_empty());
        let empty = FakeStore::with(collections::TRUCK_STATUS, json!({}));
        assert!(get_available_trucks(&empty).unwrap().is_empty());
    }

    #[test]
    fn test_malformed_record_is_skipped() {
        let store = FakeStore::with(
            collections::TRUCK_STATUS,
            json!({
                "A": {"scan_count": "two"},
                "B": {"scan_count": 4, "station_id": "S1"}
            }),
        );
        let trucks = get_available_trucks(&store).unwrap();
        assert_eq!(ids(&trucks), vec!["B"]);
    }

    #[test]
    fn test_mistyped_side_fields_keep_truck_available() {
        let store = FakeStore::with(
            collections::TRUCK_STATUS,
            json!({
                "E1": {"scan_count": 2, "timestamp": 1700000000000.5, "latitude": 35.6, "longitude": 139.7},
                "E2": {"scan_count": 4, "latitude": "35.6", "longitude": 139.7},
                "E3": {"scan_count": 5, "latitude": "35.6"}
            }),
        );
        let trucks = get_available_trucks(&store).unwrap();
        assert_eq!(ids(&trucks), vec!["E1", "E2"]);
    }

    #[test]
    fn test_unreachable_store_propagates() {
        let store = FakeStore {
            offline: true,
            ..FakeStore::default()
        };
        assert!(matches!(
            get_available_trucks(&store),
            Err(Error::StoreUnavailable(_))
        ));
    }

    #[test]
    fn test_list_truck_ids_includes_out_of_station() {
        assert_eq!(list_truck_ids(&fleet()).unwrap(), vec!["A", "B", "C", "D"]);
        assert!(list_truck_ids(&FakeStore::default()).unwrap().is_empty());
    }
}
