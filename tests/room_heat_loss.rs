//! End-to-end scenario and persistence tests for the room heat-loss model.

use std::path::Path;

use heatloss::io::{from_vfs_string, read_vfs, to_vfs_string, write_vfs};
use heatloss::{HeatLossError, Room, SinkTemperatures};
use tempfile::tempdir;

fn assert_close(actual: f64, expected: f64, what: &str) {
    assert!(
        (actual - expected).abs() < 1e-10,
        "{what} should be {expected}, got {actual}"
    );
}

/// The reference room: 3 m × 4 m × 5 m at 25 °C with the reference U-values,
/// against ground at 10 °C and external air at 20 °C.
fn reference_room() -> Room {
    let mut room = Room::new(3.0, 4.0, 5.0).unwrap();
    room.set_room_temperature(25.0).unwrap();
    room.set_wall_uvalues([20.0, 5.0, 5.0, 5.0, 5.0, 10.0]).unwrap();
    room
}

#[test]
fn test_reference_scenario() {
    let room = reference_room();

    let expected_areas = [12.0, 20.0, 20.0, 15.0, 15.0, 12.0];
    let expected_q = [3600.0, 500.0, 500.0, 375.0, 375.0, 600.0];
    for ((wall, area), q) in room.walls().iter().zip(expected_areas).zip(expected_q) {
        assert_close(
            wall.area().unwrap(),
            area,
            &format!("area of wall {}", wall.index()),
        );
        assert_close(
            wall.heat_flow().unwrap(),
            q,
            &format!("Q of wall {}", wall.index()),
        );
    }
    assert_close(room.heat_loss(), 5950.0, "aggregate heat loss");
}

#[test]
fn test_widening_replaces_the_stale_aggregate() {
    let mut room = reference_room();
    room.set_width(10.0).unwrap();

    let expected_areas = [30.0, 50.0, 50.0, 15.0, 15.0, 30.0];
    for (wall, area) in room.walls().iter().zip(expected_areas) {
        assert_close(
            wall.area().unwrap(),
            area,
            &format!("area of wall {}", wall.index()),
        );
    }

    let sum: f64 = room.walls().iter().map(|w| w.heat_flow().unwrap()).sum();
    assert_close(room.heat_loss(), sum, "aggregate equals the fresh sum");
    assert_close(room.heat_loss(), 13750.0, "aggregate after widening");
}

#[test]
fn test_file_roundtrip_reproduces_every_field() {
    let dir = tempdir().unwrap();
    let room = reference_room();

    let path = write_vfs(&dir.path().join("reference.vfs"), &room).unwrap();
    let loaded = read_vfs(&path).unwrap();

    assert_eq!(loaded, room);
    assert_close(loaded.heat_loss(), 5950.0, "persisted aggregate");

    // A loaded model keeps computing like the original.
    let mut loaded = loaded;
    loaded.set_width(10.0).unwrap();
    assert_close(loaded.heat_loss(), 13750.0, "aggregate after widening the loaded model");
}

#[test]
fn test_failed_load_keeps_the_previous_model() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("broken.vfs");
    std::fs::write(&path, "{ this is not json").unwrap();

    let mut model = reference_room();
    match read_vfs(&path) {
        Ok(room) => model = room,
        Err(err) => assert!(matches!(err, HeatLossError::Serialization(_))),
    }

    // The replace-on-success discipline leaves the old model intact.
    assert_close(model.heat_loss(), 5950.0, "previous model");
}

#[test]
fn test_non_vfs_path_is_rejected_without_io() {
    let err = read_vfs(Path::new("/definitely/not/there/model.json")).unwrap_err();
    assert!(
        matches!(err, HeatLossError::Serialization(_)),
        "extension check must fire before the missing file is noticed"
    );
}

#[test]
fn test_load_trusts_persisted_values_until_recompute() {
    // Areas, heat flows, and the aggregate are inconsistent with the
    // geometry on purpose.
    let json = r#"{
        "length": 3.0, "width": 4.0, "height": 5.0,
        "temperature": 25.0, "heat_loss": 999.0,
        "walls": [
            {"index": 0, "Area": 1.0, "UValue": 1.0, "Q": 1.0},
            {"index": 1, "Area": 1.0, "UValue": 1.0, "Q": 1.0},
            {"index": 2, "Area": 1.0, "UValue": 1.0, "Q": 1.0},
            {"index": 3, "Area": 1.0, "UValue": 1.0, "Q": 1.0},
            {"index": 4, "Area": 1.0, "UValue": 1.0, "Q": 1.0},
            {"index": 5, "Area": 1.0, "UValue": 1.0, "Q": 1.0}
        ]
    }"#;

    let mut room = from_vfs_string(json).unwrap();
    assert_close(room.heat_loss(), 999.0, "persisted aggregate is trusted");
    assert_close(room.walls()[0].area().unwrap(), 1.0, "persisted area is trusted");

    // Recomputing uses the stored areas, not the dimensions: the floor sees
    // ΔT = 15 against the ground, the rest ΔT = 5 against external air.
    let fresh = room.recompute_heat_loss().unwrap();
    assert_close(fresh, 1.0 * 1.0 * 15.0 + 5.0 * (1.0 * 1.0 * 5.0), "recomputed aggregate");
}

#[test]
fn test_temperature_change_needs_an_explicit_recompute() {
    let mut room = reference_room();
    room.set_room_temperature(30.0).unwrap();
    assert_close(room.heat_loss(), 5950.0, "aggregate is stale by contract");

    room.recompute_heat_loss().unwrap();
    // ΔT grows by 5 everywhere: floor 12×20×20, side walls scale likewise.
    let sum: f64 = room.walls().iter().map(|w| w.heat_flow().unwrap()).sum();
    assert_close(room.heat_loss(), sum, "aggregate after recompute");
    assert!(room.heat_loss() > 5950.0);
}

#[test]
fn test_custom_sinks_change_the_balance_but_are_not_persisted() {
    let dir = tempdir().unwrap();

    let mut room = Room::with_sinks(3.0, 4.0, 5.0, SinkTemperatures::new(10.0, 25.0)).unwrap();
    room.set_room_temperature(25.0).unwrap();
    room.set_wall_uvalues([20.0, 5.0, 5.0, 5.0, 5.0, 10.0]).unwrap();

    // External ΔT is zero: only the floor loses heat.
    assert_close(room.heat_loss(), 3600.0, "floor-only heat loss");

    let path = write_vfs(&dir.path().join("sinks.vfs"), &room).unwrap();
    let loaded = read_vfs(&path).unwrap();
    assert_eq!(loaded.sinks(), SinkTemperatures::default());
    assert_close(loaded.heat_loss(), 3600.0, "persisted aggregate survives the load");
}

#[test]
fn test_string_roundtrip_matches_file_roundtrip() {
    let room = reference_room();
    let json = to_vfs_string(&room).unwrap();
    let loaded = from_vfs_string(&json).unwrap();
    assert_eq!(loaded, room);
}
