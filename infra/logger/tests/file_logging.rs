use atelier_domain::config::LogConfig;
use atelier_logger::Logger;
use std::fs;
use std::time::Duration;
use tempfile::tempdir;

#[test]
fn file_logging_from_config_writes_json_lines() -> Result<(), Box<dyn std::error::Error>> {
    let tmp_dir = tempdir()?;
    let log_dir = tmp_dir.path().join("logs");

    let config = LogConfig {
        level: "debug".to_owned(),
        filter: None,
        path: Some(log_dir.clone()),
        json: true,
    };
    let logger = Logger::from_config("integration-file-logging", &config)?;
    assert!(logger.writes_files());

    tracing::info!(doll = "Classic Fashion Doll", "hello from integration test");

    std::thread::sleep(Duration::from_millis(30));
    drop(logger);

    let log_file = fs::read_dir(&log_dir)?
        .flatten()
        .map(|entry| entry.path())
        .find(|path| path.extension().and_then(|ext| ext.to_str()) == Some("log"))
        .expect("log file should be created");

    let contents = fs::read_to_string(&log_file)?;
    let first = contents.lines().next().expect("log file should not be empty");
    assert!(first.starts_with('{'), "expected a JSON line, got {first}");
    assert!(contents.contains("hello from integration test"));

    Ok(())
}
