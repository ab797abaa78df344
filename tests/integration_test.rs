// Integration tests for charmerge
use charmerge::{run, load_catalog, MergeConfig, MergeReport, PipelineConfig, StorageError, UnmatchedPolicy};
use serde_json::{json, Value};
use std::path::{Path, PathBuf};

fn write_json(dir: &Path, name: &str, value: &Value) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, serde_json::to_string_pretty(value).unwrap()).unwrap();
    path
}

fn jikan_catalog() -> Value {
    json!([
        {
            "character": {
                "mal_id": 40,
                "url": "https://myanimelist.net/character/40/Luffy_Monkey_D",
                "images": {
                    "jpg": {"image_url": "https://cdn.myanimelist.net/images/characters/9/310307.jpg"},
                    "webp": {"image_url": "https://cdn.myanimelist.net/images/characters/9/310307.webp"}
                },
                "name": "Monkey D., Luffy"
            }
        },
        {
            "character": {
                "mal_id": 62,
                "url": "https://myanimelist.net/character/62/Roronoa_Zoro",
                "images": {
                    "jpg": {"image_url": "https://cdn.myanimelist.net/images/characters/example_zoro.jpg"},
                    "webp": {"image_url": "https://cdn.myanimelist.net/images/characters/example_zoro.webp"}
                },
                "name": "Roronoa Zoro"
            }
        }
    ])
}

fn detailed_catalog() -> Value {
    json!([
        {"id": 1, "name": "Monkey D Luffy", "size": "174cm", "bounty": "3.000.000.000"},
        {"id": 2, "name": "Roronoa Zoro", "size": "181cm", "bounty": "1.111.000.000"},
        {"id": 3, "name": "Nami", "size": "170cm", "bounty": "366.000.000"}
    ])
}

fn pipeline(dir: &Path, images: &Value, details: &Value) -> PipelineConfig {
    PipelineConfig {
        images_path: write_json(dir, "personagens_one_piece.json", images),
        details_path: write_json(dir, "personagens_detalhados.json", details),
        output_path: dir.join("personagens_completos.json"),
        report_path: Some(dir.join("report.json")),
        merge: MergeConfig::default(),
    }
}

#[test]
fn test_merge_jikan_and_detailed() {
    let temp_dir = tempfile::tempdir().unwrap();
    let config = pipeline(temp_dir.path(), &jikan_catalog(), &detailed_catalog());

    let report = run(&config).unwrap();
    assert_eq!(report.total, 3);
    assert_eq!(report.matched, 2);
    assert_eq!(report.unmatched, 1);
    assert_eq!(report.indexed, 2);

    let merged = load_catalog(&config.output_path).unwrap();
    assert_eq!(merged.len(), 3);
    assert_eq!(
        merged[0]["images"]["jpg"]["image_url"],
        "https://cdn.myanimelist.net/images/characters/9/310307.jpg"
    );
    assert_eq!(
        merged[1]["images"]["webp"]["image_url"],
        "https://cdn.myanimelist.net/images/characters/example_zoro.webp"
    );
    assert!(merged[2].get("images").is_none());

    // Original fields untouched and in order, images appended last
    let keys: Vec<&str> = merged[0].as_object().unwrap().keys().map(String::as_str).collect();
    assert_eq!(keys, vec!["id", "name", "size", "bounty", "images"]);
    assert_eq!(merged[0]["bounty"], "3.000.000.000");

    let written: MergeReport =
        serde_json::from_str(&std::fs::read_to_string(config.report_path.unwrap()).unwrap()).unwrap();
    assert_eq!(written, report);
}

#[test]
fn test_merge_with_null_policy() {
    let temp_dir = tempfile::tempdir().unwrap();
    let mut config = pipeline(temp_dir.path(), &jikan_catalog(), &detailed_catalog());
    config.merge = MergeConfig::default().with_unmatched(UnmatchedPolicy::Null);

    run(&config).unwrap();

    let text = std::fs::read_to_string(&config.output_path).unwrap();
    assert!(text.contains("\"images\": null"));
}

#[test]
fn test_merge_data_wrapped_source() {
    let temp_dir = tempfile::tempdir().unwrap();
    let images = json!({"data": jikan_catalog()});
    let config = pipeline(temp_dir.path(), &images, &detailed_catalog());

    let report = run(&config).unwrap();
    assert_eq!(report.matched, 2);
}

#[test]
fn test_empty_sources() {
    let temp_dir = tempfile::tempdir().unwrap();

    let config = pipeline(temp_dir.path(), &json!([]), &detailed_catalog());
    let report = run(&config).unwrap();
    assert_eq!(report.matched, 0);
    assert_eq!(report.unmatched, 3);

    let config = pipeline(temp_dir.path(), &jikan_catalog(), &json!([]));
    let report = run(&config).unwrap();
    assert_eq!(report.total, 0);
    assert!(load_catalog(&config.output_path).unwrap().is_empty());
}

#[test]
fn test_non_ascii_written_unescaped() {
    let temp_dir = tempfile::tempdir().unwrap();
    let images = json!([{"name": "Chopper, Tony Tony", "images": {"jpg": "c.jpg"}}]);
    let details = json!([{"name": "Chopper Tony Tony", "fruit": "ヒトヒトの実"}]);
    let config = pipeline(temp_dir.path(), &images, &details);

    let report = run(&config).unwrap();
    assert_eq!(report.matched, 1);

    let text = std::fs::read_to_string(&config.output_path).unwrap();
    assert!(text.contains("ヒトヒトの実"));
}

#[test]
fn test_missing_source_reports_not_found() {
    let temp_dir = tempfile::tempdir().unwrap();
    let mut config = pipeline(temp_dir.path(), &jikan_catalog(), &detailed_catalog());
    config.images_path = temp_dir.path().join("absent.json");

    let err = run(&config).unwrap_err();
    let storage_err = err.downcast_ref::<StorageError>().unwrap();
    assert!(storage_err.is_not_found());
    assert!(!config.output_path.exists());
}

#[test]
fn test_malformed_source_reports_malformed() {
    let temp_dir = tempfile::tempdir().unwrap();
    let config = pipeline(temp_dir.path(), &jikan_catalog(), &detailed_catalog());
    std::fs::write(&config.details_path, "[{\"name\": ").unwrap();

    let err = run(&config).unwrap_err();
    let storage_err = err.downcast_ref::<StorageError>().unwrap();
    assert!(storage_err.is_malformed());
    assert!(!config.output_path.exists());
}

#[test]
fn test_invalid_merge_config() {
    let temp_dir = tempfile::tempdir().unwrap();
    let mut config = pipeline(temp_dir.path(), &jikan_catalog(), &detailed_catalog());
    config.merge.image_field = String::new();

    let err = run(&config).unwrap_err();
    assert!(err.downcast_ref::<charmerge::Error>().is_some());
}
