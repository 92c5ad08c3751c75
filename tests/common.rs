#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::NaiveDateTime;
use rshoptrace::models::{RawEvent, RawTimestamp};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

pub fn rst() -> Command {
    cargo_bin_cmd!("rshoptrace")
}

/// Parse "YYYY-MM-DD HH:MM[:SS]".
pub fn ts(s: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S")
        .or_else(|_| NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M"))
        .expect("valid test timestamp")
}

pub fn raw(customer: &str, at: &str, location: &str) -> RawEvent {
    RawEvent::new(customer, RawTimestamp::DateTime(ts(at)), Some(location))
}

/// Fresh, empty directory inside the system temp dir.
pub fn setup_test_dir(name: &str) -> PathBuf {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rshoptrace", name));
    fs::remove_dir_all(&path).ok();
    fs::create_dir_all(&path).expect("create test dir");
    path
}

/// Path of a config file that does not exist: defaults apply.
pub fn no_conf(dir: &Path) -> String {
    dir.join("missing.conf").to_string_lossy().to_string()
}

pub fn write_log(dir: &Path, name: &str, content: &str) -> PathBuf {
    let p = dir.join(name);
    fs::write(&p, content).expect("write log");
    p
}

/// Two weekdays of a small store, `;`-separated like the raw exports.
pub fn write_sample_logs(dir: &Path) {
    write_log(
        dir,
        "monday.csv",
        "timestamp;customer_no;location\n\
         2019-09-02 10:02:00;7;dairy\n\
         2019-09-02 10:05:00;7;checkout\n\
         2019-09-02 09:00:00;8;fruit\n",
    );
    write_log(
        dir,
        "tuesday.csv",
        "timestamp;customer_no;location\n\
         2019-09-03 07:05:00;7;spices\n\
         2019-09-03 07:07:00;7;drinks\n",
    );
}
