use al_table::{InterpolationTable, TableError, interpolate};

#[test]
fn table_deserializes_from_point_list() {
    let yaml = "[[20.0, 0.99985], [18.0, 0.99986], [22.0, 0.99984]]";
    let table: InterpolationTable = serde_yaml::from_str(yaml).expect("table should parse");

    assert_eq!(table.keys(), &[18.0, 20.0, 22.0]);
    let y = interpolate(19.0, &table).unwrap();
    assert!((y - 0.999855).abs() < 1e-12, "got {y}");
}

#[test]
fn duplicate_keys_fail_deserialization() {
    let yaml = "[[1.0, 1.0], [1.0, 2.0]]";
    let result: Result<InterpolationTable, _> = serde_yaml::from_str(yaml);
    let err = result.unwrap_err().to_string();
    assert!(err.contains("Duplicate"), "unexpected error: {err}");
}

#[test]
fn serializes_sorted() {
    let table = InterpolationTable::new([(2.0, 4.0), (1.0, 2.0)]).unwrap();
    let yaml = serde_yaml::to_string(&table).unwrap();
    let back: InterpolationTable = serde_yaml::from_str(&yaml).unwrap();
    assert_eq!(back, table);
    assert_eq!(back.keys(), &[1.0, 2.0]);
}

#[test]
fn single_point_table_loads_but_cannot_interpolate() {
    let table: InterpolationTable = serde_yaml::from_str("[[1.0, 2.0]]").unwrap();
    assert_eq!(
        table.interpolate(1.0),
        Err(TableError::TooFewEntries { len: 1 })
    );
}
