use al_density::{EnvironmentalReading, ModelKind};
use al_lab::{LabConfig, TableDef, load_json, load_yaml, save_json, save_yaml};

fn sample_lab() -> LabConfig {
    LabConfig {
        version: 1,
        name: "Mass laboratory".to_string(),
        model: ModelKind::Cipm2007,
        co2_fraction: Some(0.00045),
        height_m: None,
        reading: Some(EnvironmentalReading::new(21.0, 0.45, 99_500.0)),
        tables: vec![TableDef {
            id: "buoyancy".to_string(),
            description: "K vs. temperature".to_string(),
            points: vec![(18.0, 0.999849), (20.0, 0.99985), (22.0, 0.999851)],
        }],
    }
}

#[test]
fn roundtrip_yaml() {
    let lab = sample_lab();
    let path = std::env::temp_dir().join("al_lab_roundtrip.yaml");

    save_yaml(&path, &lab).unwrap();
    let loaded = load_yaml(&path).unwrap();

    assert_eq!(lab, loaded);
}

#[test]
fn roundtrip_json() {
    let lab = sample_lab();
    let path = std::env::temp_dir().join("al_lab_roundtrip.json");

    save_json(&path, &lab).unwrap();
    let loaded = load_json(&path).unwrap();

    assert_eq!(lab, loaded);
}

#[test]
fn save_rejects_invalid_lab() {
    let mut lab = sample_lab();
    lab.tables[0].points.truncate(1);
    let path = std::env::temp_dir().join("al_lab_invalid.yaml");
    let _ = std::fs::remove_file(&path);

    assert!(save_yaml(&path, &lab).is_err());
    assert!(!path.exists());
}

#[test]
fn load_rejects_invalid_lab() {
    let path = std::env::temp_dir().join("al_lab_bad_reading.yaml");
    std::fs::write(
        &path,
        "version: 1\nname: Bad\nreading:\n  temperature_c: 20.0\n  relative_humidity: 0.5\n  pressure_pa: -5.0\n",
    )
    .unwrap();

    let err = load_yaml(&path).unwrap_err();
    assert!(err.to_string().contains("Validation"), "{err}");
}

#[test]
fn unknown_model_name_fails_to_parse() {
    let path = std::env::temp_dir().join("al_lab_unknown_model.yaml");
    std::fs::write(&path, "version: 1\nname: Lab\nmodel: cipm-1981\n").unwrap();

    let err = load_yaml(&path).unwrap_err();
    assert!(matches!(err, al_lab::LabError::Yaml(_)));
    assert!(err.to_string().contains("Unknown density model 'cipm-1981'"), "{err}");
}

#[test]
fn model_aliases_accepted_in_files() {
    let lab: LabConfig = serde_yaml::from_str("version: 1\nname: Lab\nmodel: CIPM2007\n").unwrap();
    assert_eq!(lab.model, ModelKind::Cipm2007);
}

#[test]
fn optional_sections_default() {
    let lab: LabConfig = serde_yaml::from_str("version: 1\nname: Lab\n").unwrap();
    assert_eq!(lab.model, ModelKind::Cipm2007);
    assert!(lab.reading.is_none());
    assert!(lab.tables.is_empty());

    let yaml = serde_yaml::to_string(&lab).unwrap();
    assert!(!yaml.contains("co2_fraction"));
    assert!(yaml.contains("cipm-2007"));
}
