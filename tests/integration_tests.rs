use plan_tree::adapters::codec::{CsvCodec, JsonCodec};
use plan_tree::domain::ports::RecordCodec;
use plan_tree::{CliConfig, LocalStorage, PlanEngine, RunSummary, SchedulePipeline};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn config_for(root: &str) -> CliConfig {
    CliConfig {
        months: "styczeń,luty".to_string(),
        days: "pn-wt,pt".to_string(),
        times: "r,w".to_string(),
        create: false,
        csv: false,
        json: false,
        root: root.to_string(),
        no_overwrite: false,
        seed: Some(5),
        config: None,
        verbose: false,
        monitor: false,
    }
}

async fn run(config: CliConfig) -> RunSummary {
    let storage = LocalStorage::new(config.root.clone());
    let pipeline = SchedulePipeline::new(storage, config);
    let engine = PlanEngine::new(pipeline);
    engine.run().await.unwrap()
}

#[tokio::test]
async fn create_then_aggregate_round_trip() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().to_str().unwrap().to_string();

    let mut create_config = config_for(&root);
    create_config.create = true;

    let summary = run(create_config).await;
    assert_eq!(
        summary,
        RunSummary::Created {
            files_written: 3,
            files_skipped: 0
        }
    );

    // The plan covers styczeń pn-wt (r, w) and luty pt (padded to rano).
    let leaf_files = [
        "styczeń/poniedziałek/rano/Dane.csv",
        "styczeń/wtorek/wieczór/Dane.csv",
        "luty/piątek/rano/Dane.csv",
    ];
    let mut expected_total = 0;
    for rel in leaf_files {
        let path = temp_dir.path().join(rel);
        assert!(path.exists(), "missing {}", rel);
        let record = CsvCodec.decode(&fs::read(&path).unwrap()).unwrap();
        if record.is_tracked() {
            expected_total += record.time_secs().unwrap();
        }
    }

    let summary = run(config_for(&root)).await;
    match summary {
        RunSummary::Aggregated { total_secs, .. } => assert_eq!(total_secs, expected_total),
        other => panic!("expected aggregate summary, got {:?}", other),
    }
}

#[tokio::test]
async fn aggregate_over_an_empty_tree_is_zero() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().to_str().unwrap().to_string();

    let summary = run(config_for(&root)).await;
    assert_eq!(
        summary,
        RunSummary::Aggregated {
            total_secs: 0,
            files_counted: 0
        }
    );
}

#[tokio::test]
async fn aggregate_sums_known_records_and_skips_the_rest() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().to_str().unwrap().to_string();

    // Tracked record, other-model record, malformed file.
    write_file(
        temp_dir.path(),
        "luty/piątek/rano/Dane.csv",
        b"Model; Wynik; Czas; \nA ; 17 ; 465s;\n",
    );
    write_file(
        temp_dir.path(),
        "luty/sobota/rano/Dane.csv",
        b"Model; Wynik; Czas; \nC ; 900 ; 999s;\n",
    );
    write_file(temp_dir.path(), "luty/niedziela/rano/Dane.csv", b"garbage");

    let mut config = config_for(&root);
    config.months = "luty".to_string();
    config.days = "pt-nd".to_string();
    config.times = String::new();

    let summary = run(config).await;
    assert_eq!(
        summary,
        RunSummary::Aggregated {
            total_secs: 465,
            files_counted: 1
        }
    );
}

#[tokio::test]
async fn no_overwrite_keeps_existing_records() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().to_str().unwrap().to_string();
    let rel = "styczeń/poniedziałek/rano/Dane.csv";
    write_file(temp_dir.path(), rel, b"sentinel");

    let mut config = config_for(&root);
    config.months = "styczeń".to_string();
    config.days = "pn".to_string();
    config.times = String::new();
    config.create = true;
    config.no_overwrite = true;

    let summary = run(config.clone()).await;
    assert_eq!(
        summary,
        RunSummary::Created {
            files_written: 0,
            files_skipped: 1
        }
    );
    assert_eq!(fs::read(temp_dir.path().join(rel)).unwrap(), b"sentinel");

    // Without the flag the file is replaced by a real record.
    config.no_overwrite = false;
    run(config).await;
    let data = fs::read(temp_dir.path().join(rel)).unwrap();
    assert!(String::from_utf8(data)
        .unwrap()
        .starts_with("Model; Wynik; Czas; "));
}

#[tokio::test]
async fn json_mode_end_to_end() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().to_str().unwrap().to_string();

    let mut config = config_for(&root);
    config.months = "maj".to_string();
    config.days = "cz".to_string();
    config.times = "w".to_string();
    config.create = true;
    config.json = true;

    run(config.clone()).await;

    let path = temp_dir.path().join("maj/czwartek/wieczór/Dane.json");
    let record = JsonCodec.decode(&fs::read(&path).unwrap()).unwrap();
    assert!(record.time.ends_with('s'));
    // No CSV file appears when only JSON was requested.
    assert!(!temp_dir
        .path()
        .join("maj/czwartek/wieczór/Dane.csv")
        .exists());

    config.create = false;
    let summary = run(config).await;
    let expected = if record.is_tracked() {
        record.time_secs().unwrap()
    } else {
        0
    };
    match summary {
        RunSummary::Aggregated { total_secs, .. } => assert_eq!(total_secs, expected),
        other => panic!("expected aggregate summary, got {:?}", other),
    }
}

#[tokio::test]
async fn both_formats_write_independent_records() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().to_str().unwrap().to_string();

    let mut config = config_for(&root);
    config.months = "maj".to_string();
    config.days = "pn".to_string();
    config.times = String::new();
    config.create = true;
    config.csv = true;
    config.json = true;

    let summary = run(config).await;
    assert_eq!(
        summary,
        RunSummary::Created {
            files_written: 2,
            files_skipped: 0
        }
    );

    let leaf = temp_dir.path().join("maj/poniedziałek/rano");
    assert!(leaf.join("Dane.csv").exists());
    assert!(leaf.join("Dane.json").exists());
}

#[tokio::test]
async fn invalid_schedule_aborts_without_touching_the_tree() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().to_str().unwrap().to_string();

    let mut config = config_for(&root);
    config.months = "styczeń".to_string();
    config.days = "pn-xx".to_string();
    config.create = true;

    let storage = LocalStorage::new(config.root.clone());
    let pipeline = SchedulePipeline::new(storage, config);
    let engine = PlanEngine::new(pipeline);
    assert!(engine.run().await.is_err());

    // All-or-nothing: nothing was created for the valid prefix either.
    assert!(fs::read_dir(temp_dir.path()).unwrap().next().is_none());
}

fn write_file(root: &Path, rel: &str, data: &[u8]) {
    let path = root.join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, data).unwrap();
}
