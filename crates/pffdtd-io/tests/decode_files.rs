//! File-level decoding tests for `.vc` and `.fd` outputs.
//!
//! Fixtures are written to temporary directories with the crate's own
//! encoders, mirroring what the simulator emits.

use std::fs;
use std::path::PathBuf;

use pffdtd_io::field::{
    FieldGroup, FieldId, OutputRegion, SpatialAxis, TimeSelector, column_layout, load_fields,
};
use pffdtd_io::trace::{current_column, load_trace, load_trace_set, voltage_column};
use pffdtd_io::writer::{encode_fields, write_field_file, write_trace_file};
use pffdtd_io::{Error, read_table};
use tempfile::TempDir;

/// Gaussian pulse centred on (5, 5, 2) on a 10x10x5 grid, Ey scaled by -0.5.
fn write_pulse_file(dir: &TempDir, name: &str) -> PathBuf {
    let region = OutputRegion::new([0, 0, 0], [9, 9, 4]).unwrap();
    let header = column_layout(&region, &[FieldGroup::Electric]);
    let time: Vec<f64> = (0..5).map(|t| t as f64 * 1e-9).collect();

    let path = dir.path().join(name);
    let file = fs::File::create(&path).unwrap();
    encode_fields(file, &header, &time, |t, c| {
        let d2 = ((c.x - 5).pow(2) + (c.y - 5).pow(2) + (c.z - 2).pow(2)) as f64;
        let v = (-d2 / 4.0).exp() * (1.0 + t as f64);
        match c.field.0 {
            12 => v * -0.5,
            13 => 0.0,
            _ => v,
        }
    })
    .unwrap();
    path
}

#[test]
fn test_pulse_grid_reconstruction() {
    let dir = TempDir::new().unwrap();
    let path = write_pulse_file(&dir, "pulse.fd");
    let set = load_fields(&path).unwrap();

    assert_eq!(set.topology().dims(), (10, 10, 5));
    assert_eq!(set.num_samples(), 5);
    assert_eq!(
        set.field_ids().collect::<Vec<_>>(),
        vec![FieldId::EX, FieldId::EY, FieldId::EZ]
    );

    let ex = set.field(FieldId::EX).unwrap();
    assert_eq!(ex.dims(), [5, 10, 10, 5]);
    assert_eq!(ex.get(4, 5, 5, 2), Some(5.0));
    assert_eq!(set.field(FieldId::EY).unwrap().get(0, 5, 5, 2), Some(-0.5));

    let cut = set
        .slice(FieldId::EX, SpatialAxis::Z, 2, TimeSelector::Last)
        .unwrap();
    assert_eq!(cut.values.shape(), (10, 10));
    assert_eq!(cut.values[(5, 5)], 5.0);
    assert_eq!(cut.time, 4e-9);
}

#[test]
fn test_round_trip_through_file() {
    let dir = TempDir::new().unwrap();
    let first = load_fields(&write_pulse_file(&dir, "a.fd")).unwrap();

    let copy = dir.path().join("b.fd");
    write_field_file(&copy, &first).unwrap();
    let second = load_fields(&copy).unwrap();

    assert_eq!(first.topology().dims(), second.topology().dims());
    assert_eq!(
        first.field_ids().collect::<Vec<_>>(),
        second.field_ids().collect::<Vec<_>>()
    );
    for id in first.field_ids() {
        assert_eq!(
            first.field(id).unwrap().as_slice(),
            second.field(id).unwrap().as_slice()
        );
    }
}

#[test]
fn test_sparse_grid_keeps_zero_default() {
    // Field 40 only at x=3; field 11 only at x=1. Grid spans both.
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("sparse.fd");
    fs::write(
        &path,
        "0\t11\t40\n0\t1\t3\n0\t0\t0\n0\t0\t0\n0.0\t2.5\t7.0\n1.0\t3.5\t8.0\n",
    )
    .unwrap();

    let set = load_fields(&path).unwrap();
    assert_eq!(set.topology().dims(), (2, 1, 1));
    let density = set.field(FieldId(40)).unwrap();
    assert_eq!(density.time_series(0, 0, 0), Some(vec![0.0, 0.0]));
    assert_eq!(density.time_series(1, 0, 0), Some(vec![7.0, 8.0]));
    assert!(!set.is_present(FieldId(40), 0, 0, 0));
}

#[test]
fn test_header_length_mismatch_is_format_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("bad.fd");
    fs::write(
        &path,
        "0\t11\t12\t13\n0\t0\t0\n0\t0\t0\t0\n0\t0\t0\t0\n0.0\t1.0\t2.0\t3.0\n",
    )
    .unwrap();

    match load_fields(&path) {
        Err(Error::Format { message, .. }) => assert!(message.contains("x 2")),
        other => panic!("expected format error, got {other:?}"),
    }
}

#[test]
fn test_missing_files() {
    let dir = TempDir::new().unwrap();
    assert!(load_fields(&dir.path().join("nope.fd")).unwrap_err().is_not_found());
    assert!(load_trace(&dir.path().join("nope.vc"), 1).unwrap_err().is_not_found());
    assert!(read_table(&dir.path().join("nope.vc"), 1).unwrap_err().is_not_found());
}

#[test]
fn test_empty_field_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("empty.fd");
    fs::write(&path, "").unwrap();
    assert!(load_fields(&path).unwrap_err().is_format());
}

#[test]
fn test_every_source_maps_to_its_column_pair() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("sources.vc");

    let time: Vec<f64> = (0..8).map(|n| n as f64 * 0.5e-10).collect();
    let columns: Vec<Vec<f64>> = (1..=6)
        .map(|c| time.iter().map(|t| c as f64 * 100.0 + t * 1e10).collect())
        .collect();
    let pairs: Vec<(&[f64], &[f64])> = columns
        .chunks(2)
        .map(|p| (p[0].as_slice(), p[1].as_slice()))
        .collect();
    write_trace_file(&path, &time, &pairs).unwrap();

    let set = load_trace_set(&path).unwrap();
    assert_eq!(set.num_sources(), 3);
    let table = read_table(&path, 1).unwrap();
    for source in 1..=set.num_sources() {
        let trace = load_trace(&path, source).unwrap();
        assert_eq!(trace.time, time);
        assert_eq!(trace.voltage, table.column(voltage_column(source).unwrap()).unwrap());
        assert_eq!(trace.current, table.column(current_column(source).unwrap()).unwrap());
        assert_eq!(trace.voltage, columns[2 * source - 2]);
        assert_eq!(trace.current, columns[2 * source - 1]);
    }
    assert!(load_trace(&path, 4).unwrap_err().is_format());
}
