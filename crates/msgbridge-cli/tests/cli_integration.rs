//! Integration tests for the msgbridge binary.
//!
//! Covers output layout, per-file failure handling, configuration and the
//! check and inspect commands.

#![allow(non_snake_case)]

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

fn schemas() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/schemas")
}

fn schema(relative: &str) -> PathBuf {
    schemas().join(relative)
}

fn msgbridge(args: &[&str], cwd: &Path) -> Output {
    Command::new(env!("CARGO_BIN_EXE_msgbridge"))
        .args(args)
        .current_dir(cwd)
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

fn arg(path: &Path) -> &str {
    path.to_str().unwrap()
}

/// Copy fixture schemas into `<dir>/<pkg>/<kind>/<Name>.json`
fn copy_layout(dir: &TempDir, relatives: &[&str]) -> Vec<PathBuf> {
    relatives
        .iter()
        .map(|relative| {
            let target = dir.path().join(relative);
            fs::create_dir_all(target.parent().unwrap()).unwrap();
            fs::copy(schema(relative), &target).unwrap();
            target
        })
        .collect()
}

// =============================================================================
// generate
// =============================================================================

mod generate {
    use super::*;

    #[test]
    fn generate___output_dir___writes_package_tree() {
        let out = TempDir::new().unwrap();
        let point = schema("geometry_msgs/msg/Point.json");
        let sample = schema("test_pkg/msg/Sample.json");

        let output = msgbridge(
            &["generate", arg(&point), arg(&sample), "--output-dir", arg(out.path())],
            out.path(),
        );

        assert!(output.status.success(), "{output:?}");
        assert!(out.path().join("geometry_msgs/msg/point.rs").is_file());
        assert!(out.path().join("test_pkg/msg/sample.rs").is_file());
    }

    #[test]
    fn generate___package_layout___writes_under_pkg_src() {
        let work = TempDir::new().unwrap();
        let files = copy_layout(&work, &["test_pkg/msg/Sample.json", "test_pkg/srv/AddTwoInts.json"]);

        let output = msgbridge(&["generate", arg(&files[0]), arg(&files[1])], work.path());

        assert!(output.status.success(), "{output:?}");
        assert!(work.path().join("test_pkg/src/test_pkg/msg/sample.rs").is_file());
        assert!(work.path().join("test_pkg/src/test_pkg/srv/add_two_ints.rs").is_file());
    }

    #[test]
    fn generate___missing_dependency___fails_that_file_only() {
        let out = TempDir::new().unwrap();
        let stamped = schema("test_pkg/msg/Stamped.json");
        let sample = schema("test_pkg/msg/Sample.json");

        let output = msgbridge(
            &["generate", arg(&stamped), arg(&sample), "-o", arg(out.path())],
            out.path(),
        );

        assert!(!output.status.success());
        assert!(out.path().join("test_pkg/msg/sample.rs").is_file());
        assert!(!out.path().join("test_pkg/msg/stamped.rs").exists());
        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(stderr.contains("Stamped.json"), "{stderr}");
    }

    #[test]
    fn generate___registry_documents___resolve_without_generating() {
        let out = TempDir::new().unwrap();
        let stamped = schema("test_pkg/msg/Stamped.json");
        let header = schema("std_msgs/msg/Header.json");
        let point = schema("geometry_msgs/msg/Point.json");

        let output = msgbridge(
            &[
                "generate",
                arg(&stamped),
                "-o",
                arg(out.path()),
                "--registry",
                arg(&header),
                "--registry",
                arg(&point),
            ],
            out.path(),
        );

        assert!(output.status.success(), "{output:?}");
        assert!(out.path().join("test_pkg/msg/stamped.rs").is_file());
        assert!(!out.path().join("geometry_msgs").exists());
    }

    #[test]
    fn generate___malformed_document___reported_and_batch_continues() {
        let work = TempDir::new().unwrap();
        let broken = work.path().join("test_pkg/msg/Broken.json");
        fs::create_dir_all(broken.parent().unwrap()).unwrap();
        fs::write(&broken, "{ not json").unwrap();
        let sample = copy_layout(&work, &["test_pkg/msg/Sample.json"]);

        let output = msgbridge(&["generate", arg(&broken), arg(&sample[0])], work.path());

        assert!(!output.status.success());
        assert!(work.path().join("test_pkg/src/test_pkg/msg/sample.rs").is_file());
    }

    #[test]
    fn generate___generate_root___writes_indexes_only() {
        let out = TempDir::new().unwrap();
        let sample = schema("test_pkg/msg/Sample.json");
        let service = schema("test_pkg/srv/AddTwoInts.json");

        let output = msgbridge(
            &["generate", arg(&sample), arg(&service), "-o", arg(out.path()), "--generate-root"],
            out.path(),
        );

        assert!(output.status.success(), "{output:?}");
        let msg_index = fs::read_to_string(out.path().join("test_pkg/msg.rs")).unwrap();
        let srv_index = fs::read_to_string(out.path().join("test_pkg/srv.rs")).unwrap();
        assert!(msg_index.contains("pub mod sample;"));
        assert!(srv_index.contains("pub mod add_two_ints;"));
        assert!(!out.path().join("test_pkg/msg/sample.rs").exists());
    }

    #[test]
    fn generate___config_file___sets_crate_root() {
        let out = TempDir::new().unwrap();
        let config = out.path().join("msgbridge.toml");
        fs::write(&config, "crate_root = \"crate::generated\"\n").unwrap();
        let stamped = schema("test_pkg/msg/Stamped.json");
        let header = schema("std_msgs/msg/Header.json");
        let point = schema("geometry_msgs/msg/Point.json");

        let output = msgbridge(
            &["generate", arg(&stamped), arg(&header), arg(&point), "-o", arg(out.path())],
            out.path(),
        );

        assert!(output.status.success(), "{output:?}");
        let unit = fs::read_to_string(out.path().join("test_pkg/msg/stamped.rs")).unwrap();
        assert!(unit.contains("use crate::generated::std_msgs::msg as StdMsgs;"));
        assert!(unit.contains("use crate::generated::geometry_msgs::msg as GeometryMsgs;"));
    }

    #[test]
    fn generate___invalid_config___fails_before_generating() {
        let out = TempDir::new().unwrap();
        let config = out.path().join("custom.toml");
        fs::write(&config, "crate_root = \"not a path\"\n").unwrap();
        let sample = schema("test_pkg/msg/Sample.json");

        let output = msgbridge(
            &["generate", arg(&sample), "-o", arg(out.path()), "--config", arg(&config)],
            out.path(),
        );

        assert!(!output.status.success());
        assert!(!out.path().join("test_pkg").exists());
    }
}

// =============================================================================
// check
// =============================================================================

mod check {
    use super::*;

    #[test]
    fn check___resolvable_batch___succeeds_without_writing() {
        let work = TempDir::new().unwrap();
        let files = copy_layout(
            &work,
            &[
                "std_msgs/msg/Header.json",
                "geometry_msgs/msg/Point.json",
                "test_pkg/msg/Stamped.json",
            ],
        );
        let args: Vec<&str> = std::iter::once("check").chain(files.iter().map(|f| arg(f))).collect();

        let output = msgbridge(&args, work.path());

        assert!(output.status.success(), "{output:?}");
        assert!(!work.path().join("test_pkg/src").exists());
    }

    #[test]
    fn check___unresolved_type___fails() {
        let work = TempDir::new().unwrap();
        let stamped = schema("test_pkg/msg/Stamped.json");

        let output = msgbridge(&["check", arg(&stamped)], work.path());

        assert!(!output.status.success());
        let stdout = String::from_utf8_lossy(&output.stdout);
        assert!(stdout.contains("cannot resolve type"), "{stdout}");
    }
}

// =============================================================================
// inspect
// =============================================================================

mod inspect {
    use super::*;

    #[test]
    fn inspect___payload___prints_fields_as_json() {
        let work = TempDir::new().unwrap();
        let payload = work.path().join("sample.bin");
        fs::write(&payload, [0x78, 0x56, 0x34, 0x12, 0x02, 0x00, 0x00, 0x00, 0x68, 0x69]).unwrap();
        let sample = schema("test_pkg/msg/Sample.json");

        let output = msgbridge(
            &["inspect", "--type", "test_pkg/Sample", "--input", arg(&payload), arg(&sample)],
            work.path(),
        );

        assert!(output.status.success(), "{output:?}");
        let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
        assert_eq!(json["value"], 0x1234_5678);
        assert_eq!(json["label"], "hi");
    }

    #[test]
    fn inspect___truncated_payload___fails() {
        let work = TempDir::new().unwrap();
        let payload = work.path().join("short.bin");
        fs::write(&payload, [0x78, 0x56]).unwrap();
        let sample = schema("test_pkg/msg/Sample.json");

        let output = msgbridge(
            &["inspect", "-t", "test_pkg/Sample", "-i", arg(&payload), arg(&sample)],
            work.path(),
        );

        assert!(!output.status.success());
    }
}
