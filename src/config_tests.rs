#![allow(clippy::unwrap_used)]

use super::*;

#[test]
fn test_shellexpand_plain_path() {
    assert_eq!(shellexpand("/tmp/out.csv"), "/tmp/out.csv");
    assert_eq!(shellexpand("out.csv"), "out.csv");
}

#[test]
fn test_shellexpand_home() {
    let expanded = shellexpand("~/out.csv");
    assert!(expanded.ends_with("/out.csv"));
    assert!(!expanded.starts_with('~'));
}

#[test]
fn test_shellexpand_and_export_path_share_home() {
    let home = home_dir();
    assert_eq!(PathBuf::from(shellexpand("~/out.csv")), home.join("out.csv"));

    let config = Config {
        data_dir: PathBuf::from("/data"),
        currency: "Rp".into(),
    };
    assert_eq!(
        PathBuf::from(config.default_export_path("all", "csv")),
        home.join("cashbook-all.csv")
    );
}

#[test]
fn test_derived_paths() {
    let config = Config {
        data_dir: PathBuf::from("/data"),
        currency: "Rp".into(),
    };
    assert_eq!(config.db_path(), PathBuf::from("/data/cashbook.db"));
    assert_eq!(config.log_path(), PathBuf::from("/data/cashbook.log"));
    assert!(config
        .default_export_path("monthly", "csv")
        .ends_with("cashbook-monthly.csv"));
}
