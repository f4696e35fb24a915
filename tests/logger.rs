use getitdone::logger::Logger;

#[test]
fn test_config_based_logging_disabled() {
    let logger = Logger::from_config(false).unwrap();
    assert!(!logger.is_enabled());

    logger.log("Test message".to_string());
    let logs = logger.get_logs();
    assert_eq!(logs.len(), 1);
    assert!(logs[0].contains("Test message"));
}

#[test]
fn test_logs_are_returned_newest_first() {
    let logger = Logger::new();
    logger.log("first".to_string());
    logger.log("second".to_string());

    let logs = logger.get_logs();
    assert_eq!(logs.len(), 2);
    assert!(logs[0].contains("second"));
    assert!(logs[1].contains("first"));
}

#[test]
fn test_clear_removes_all_logs() {
    let logger = Logger::new();
    logger.log("entry".to_string());
    logger.clear();
    assert!(logger.get_logs().is_empty());
}

#[test]
fn test_cloned_loggers_share_the_trail() {
    let logger = Logger::new();
    let clone = logger.clone();

    clone.log("shared".to_string());
    assert_eq!(logger.get_logs().len(), 1);
}

#[test]
fn test_log_file_path_points_into_app_dir() {
    let path = Logger::get_log_file_path().unwrap();
    assert!(path.ends_with("getitdone/getitdone.log"));
}
