//! Live-database integration tests for the data-access core.
//!
//! These need a provisioned schema (see `migrations/`) and `DATABASE_URL`.
//! Run with: DATABASE_URL=postgres://... cargo test -p sensorhub-server -- --ignored

use sensorhub_server::db::repos::{SensorDataFilter, SensorRepo};
use sensorhub_server::db::{self, Db, DbError};
use sensorhub_server::models::{
    CreateSensor, CreateSensorData, CreateUnit, DataStatus, Page, SensorDataPatch, SensorStatus,
    SensorType, UnitPatch,
};
use sensorhub_server::services::{SensorDataService, SensorService, ServiceError, UnitService};
use sensorhub_server::DatabaseConfig;

async fn test_db() -> Db {
    db::connect(&DatabaseConfig::from_env())
        .await
        .expect("pool creation failed")
}

fn unit_payload(name: &str) -> CreateUnit {
    CreateUnit {
        name: name.into(),
        location: "Building 1".into(),
        description: Some("integration fixture".into()),
    }
}

fn sensor_payload(unit_id: i32) -> CreateSensor {
    CreateSensor {
        name: "Temp-1".into(),
        sensor_type: SensorType::Temperature,
        unit_id,
        status: SensorStatus::Active,
        description: None,
    }
}

fn reading_payload(sensor_id: i32) -> CreateSensorData {
    CreateSensorData {
        sensor_id,
        value: 23.5,
        unit: Some("°C".into()),
        status: DataStatus::Pending,
    }
}

#[tokio::test]
#[ignore = "requires database"]
async fn unit_round_trip() {
    let db = test_db().await;
    let service = UnitService::new(&db);

    let created = service.create(&unit_payload("Factory A")).await.unwrap();
    let fetched = service.get(created.id).await.unwrap();

    assert_eq!(fetched.id, created.id);
    assert_eq!(fetched.name, "Factory A");
    assert_eq!(fetched.location, "Building 1");
    assert_eq!(fetched.description.as_deref(), Some("integration fixture"));
    assert_eq!(fetched.created_at, created.created_at);

    service.delete(created.id).await.unwrap();
}

#[tokio::test]
#[ignore = "requires database"]
async fn partial_update_leaves_omitted_fields_untouched() {
    let db = test_db().await;
    let service = UnitService::new(&db);

    let created = service.create(&unit_payload("Factory B")).await.unwrap();
    let patch = UnitPatch {
        location: Some("Building 9".into()),
        ..Default::default()
    };
    let updated = service.update(created.id, &patch).await.unwrap();

    assert_eq!(updated.location, "Building 9");
    assert_eq!(updated.name, "Factory B");
    assert_eq!(updated.description.as_deref(), Some("integration fixture"));
    assert_eq!(updated.created_at, created.created_at);

    // An empty patch degenerates to a read.
    let unchanged = service.update(created.id, &UnitPatch::default()).await.unwrap();
    assert_eq!(unchanged.location, "Building 9");

    service.delete(created.id).await.unwrap();
}

#[tokio::test]
#[ignore = "requires database"]
async fn deleting_a_unit_cascades_to_sensors_and_readings() {
    let db = test_db().await;
    let units = UnitService::new(&db);
    let sensors = SensorService::new(&db);
    let readings = SensorDataService::new(&db);

    let unit = units.create(&unit_payload("Cascade site")).await.unwrap();
    let sensor = sensors.create(&sensor_payload(unit.id)).await.unwrap();
    let reading = readings.create(&reading_payload(sensor.id)).await.unwrap();

    units.delete(unit.id).await.unwrap();

    assert!(matches!(
        units.get(unit.id).await,
        Err(ServiceError::NotFound { .. })
    ));
    assert!(matches!(
        sensors.get(sensor.id).await,
        Err(ServiceError::NotFound { .. })
    ));
    assert!(matches!(
        readings.get(reading.id).await,
        Err(ServiceError::NotFound { .. })
    ));
}

#[tokio::test]
#[ignore = "requires database"]
async fn oversized_limit_is_clamped_to_100() {
    let db = test_db().await;
    let service = UnitService::new(&db);

    let unit = service.create(&unit_payload("Clamp probe")).await.unwrap();

    // Page::new clamps before the SQL is built; a 1000-row request must
    // come back with at most 100 rows.
    let rows = service.list(Page::new(0, 1000)).await.unwrap();
    assert!(rows.len() <= 100);

    service.delete(unit.id).await.unwrap();
}

#[tokio::test]
#[ignore = "requires database"]
async fn orphan_sensor_create_is_a_constraint_violation() {
    let db = test_db().await;
    let repo = SensorRepo::new(&db);

    // SERIAL ids start at 1, so 0 never references a live unit. Going
    // through the repository (not the service) exercises the store's FK.
    let err = repo.create(&sensor_payload(0)).await.unwrap_err();
    assert!(matches!(err, DbError::Constraint { .. }));

    // Nothing was persisted.
    let rows = repo.list(Some(0), Page::default()).await.unwrap();
    assert!(rows.is_empty());
}

#[tokio::test]
#[ignore = "requires database"]
async fn create_against_missing_parent_is_not_found_at_the_service() {
    let db = test_db().await;
    let sensors = SensorService::new(&db);

    let err = sensors.create(&sensor_payload(0)).await.unwrap_err();
    assert!(matches!(
        err,
        ServiceError::NotFound { resource: "Unit", id: 0 }
    ));
}

#[tokio::test]
#[ignore = "requires database"]
async fn validate_enforces_pending_only() {
    let db = test_db().await;
    let units = UnitService::new(&db);
    let sensors = SensorService::new(&db);
    let readings = SensorDataService::new(&db);

    let unit = units.create(&unit_payload("Workflow site")).await.unwrap();
    let sensor = sensors.create(&sensor_payload(unit.id)).await.unwrap();
    let reading = readings.create(&reading_payload(sensor.id)).await.unwrap();

    let archived = readings.archive(reading.id).await.unwrap();
    assert_eq!(archived.status, DataStatus::Archived);

    // The dedicated operation rejects archived -> validated...
    let err = readings.validate(reading.id).await.unwrap_err();
    assert!(matches!(
        err,
        ServiceError::InvalidTransition {
            action: "validate",
            from: DataStatus::Archived
        }
    ));
    assert_eq!(readings.get(reading.id).await.unwrap().status, DataStatus::Archived);

    // ...and archive refuses to run twice.
    let err = readings.archive(reading.id).await.unwrap_err();
    assert!(matches!(err, ServiceError::InvalidTransition { .. }));

    units.delete(unit.id).await.unwrap();
}

#[tokio::test]
#[ignore = "requires database"]
async fn generic_update_bypasses_the_workflow_guard() {
    let db = test_db().await;
    let units = UnitService::new(&db);
    let sensors = SensorService::new(&db);
    let readings = SensorDataService::new(&db);

    let unit = units.create(&unit_payload("Loophole site")).await.unwrap();
    let sensor = sensors.create(&sensor_payload(unit.id)).await.unwrap();
    let reading = readings.create(&reading_payload(sensor.id)).await.unwrap();

    readings.archive(reading.id).await.unwrap();

    // A field-level update may set any status, guard or no guard.
    let patch = SensorDataPatch {
        status: Some(DataStatus::Pending),
        ..Default::default()
    };
    let reverted = readings.update(reading.id, &patch).await.unwrap();
    assert_eq!(reverted.status, DataStatus::Pending);

    units.delete(unit.id).await.unwrap();
}

#[tokio::test]
#[ignore = "requires database"]
async fn listing_filters_are_conjunctive() {
    let db = test_db().await;
    let units = UnitService::new(&db);
    let sensors = SensorService::new(&db);
    let readings = SensorDataService::new(&db);

    let unit = units.create(&unit_payload("Filter site")).await.unwrap();
    let sensor = sensors.create(&sensor_payload(unit.id)).await.unwrap();
    let pending = readings.create(&reading_payload(sensor.id)).await.unwrap();
    let validated = readings.create(&reading_payload(sensor.id)).await.unwrap();
    readings.validate(validated.id).await.unwrap();

    let filter = SensorDataFilter {
        sensor_id: Some(sensor.id),
        status: Some(DataStatus::Pending),
    };
    let rows = readings.list(filter, Page::default()).await.unwrap();
    assert!(rows.iter().all(|r| r.sensor_id == sensor.id));
    assert!(rows.iter().all(|r| r.status == DataStatus::Pending));
    assert!(rows.iter().any(|r| r.id == pending.id));
    assert!(!rows.iter().any(|r| r.id == validated.id));

    units.delete(unit.id).await.unwrap();
}

#[tokio::test]
#[ignore = "requires database"]
async fn statistics_aggregate_matches_example_scenario() {
    let db = test_db().await;
    let units = UnitService::new(&db);
    let sensors = SensorService::new(&db);
    let readings = SensorDataService::new(&db);

    let unit = units.create(&unit_payload("Factory A")).await.unwrap();
    let sensor = sensors.create(&sensor_payload(unit.id)).await.unwrap();
    assert_eq!(sensor.status, SensorStatus::Active);

    let reading = readings.create(&reading_payload(sensor.id)).await.unwrap();
    assert_eq!(reading.status, DataStatus::Pending);

    let validated = readings.validate(reading.id).await.unwrap();
    assert_eq!(validated.status, DataStatus::Validated);

    let stats = units.statistics(unit.id).await.unwrap();
    assert_eq!(stats.unit_id, unit.id);
    assert_eq!(stats.unit_name, "Factory A");
    assert_eq!(stats.total_sensors, 1);
    assert_eq!(stats.active_sensors, 1);
    assert_eq!(stats.inactive_sensors, 0);
    assert_eq!(stats.maintenance_sensors, 0);
    assert_eq!(stats.total_data_points, 1);
    assert_eq!(stats.latest_data_timestamp, Some(reading.timestamp));

    units.delete(unit.id).await.unwrap();
}

#[tokio::test]
#[ignore = "requires database"]
async fn statistics_for_empty_unit_has_null_latest_timestamp() {
    let db = test_db().await;
    let units = UnitService::new(&db);

    let unit = units.create(&unit_payload("Empty site")).await.unwrap();
    let stats = units.statistics(unit.id).await.unwrap();

    assert_eq!(stats.total_sensors, 0);
    assert_eq!(stats.total_data_points, 0);
    assert_eq!(stats.latest_data_timestamp, None);

    units.delete(unit.id).await.unwrap();

    assert!(matches!(
        units.statistics(unit.id).await,
        Err(ServiceError::NotFound { .. })
    ));
}

#[tokio::test]
#[ignore = "requires database"]
async fn reading_lists_join_sensor_and_unit_names() {
    let db = test_db().await;
    let units = UnitService::new(&db);
    let sensors = SensorService::new(&db);
    let readings = SensorDataService::new(&db);

    let unit = units.create(&unit_payload("Join site")).await.unwrap();
    let sensor = sensors.create(&sensor_payload(unit.id)).await.unwrap();
    let reading = readings.create(&reading_payload(sensor.id)).await.unwrap();

    let detailed = readings.list_with_details(Page::default()).await.unwrap();
    let row = detailed
        .iter()
        .find(|r| r.id == reading.id)
        .expect("created reading missing from detailed listing");
    assert_eq!(row.sensor_name, "Temp-1");
    assert_eq!(row.sensor_type, SensorType::Temperature);
    assert_eq!(row.unit_name, "Join site");

    units.delete(unit.id).await.unwrap();
}
