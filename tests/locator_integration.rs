mod common;

use common::{write_full_bundle, write_zip};
use sdk_tools_locator::ToolLocator;
use sdk_tools_locator::archive::{BundleSource, ResourceTree};
use sdk_tools_locator::error::LocatorError;
use sdk_tools_locator::locator::{MAX_SEARCH_DEPTH, PLATFORM_TOOLS_DIR};
use sdk_tools_locator::platform::PlatformTag;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn locator_for(bundle: &Path, platform: PlatformTag) -> ToolLocator {
    ToolLocator::new()
        .with_bundle(BundleSource::Archive(bundle.to_path_buf()))
        .with_platform(platform)
}

#[test]
fn test_every_platform_extracts_its_own_binary() {
    let temp_dir = TempDir::new().unwrap();
    let bundle = temp_dir.path().join("bundle.zip");
    write_full_bundle(&bundle);

    for platform in PlatformTag::ALL {
        let output = temp_dir.path().join(format!("out-{platform}"));
        let path = locator_for(&bundle, platform)
            .extract_aapt2(&output)
            .unwrap()
            .unwrap();

        let expected = format!("{} aapt2", platform.archive_dir_name());
        assert_eq!(fs::read(&path).unwrap(), expected.as_bytes());
        assert!(path.starts_with(output.join(platform.archive_dir_name())));
    }
}

#[test]
fn test_distinct_output_roots_are_independent() {
    let temp_dir = TempDir::new().unwrap();
    let bundle = temp_dir.path().join("bundle.zip");
    write_full_bundle(&bundle);
    let locator = locator_for(&bundle, PlatformTag::Linux);

    let first = locator
        .extract_aapt2(&temp_dir.path().join("first"))
        .unwrap()
        .unwrap();
    let second = locator
        .extract_aapt2(&temp_dir.path().join("second"))
        .unwrap()
        .unwrap();

    assert_ne!(first, second);
    fs::remove_file(&first).unwrap();
    assert!(second.is_file());
}

#[test]
fn test_reusing_output_root_fails() {
    let temp_dir = TempDir::new().unwrap();
    let bundle = temp_dir.path().join("bundle.zip");
    write_full_bundle(&bundle);
    let locator = locator_for(&bundle, PlatformTag::Linux);
    let output = temp_dir.path().join("out");

    locator.extract_aapt2(&output).unwrap();
    let err = locator.extract_aapt2(&output).unwrap_err();

    assert!(matches!(err, LocatorError::Extraction { .. }));
}

#[test]
fn test_binary_below_max_depth_is_missing() {
    let temp_dir = TempDir::new().unwrap();
    let bundle = temp_dir.path().join("bundle.zip");
    write_zip(
        &bundle,
        &[
            ("linux/README", b"readme"),
            ("linux/a/b/c/aapt2", b"too deep"),
        ],
    );
    let output = temp_dir.path().join("out");

    let err = locator_for(&bundle, PlatformTag::Linux)
        .extract_aapt2(&output)
        .unwrap_err();

    assert!(matches!(err, LocatorError::ToolMissing { .. }));
    assert!(!output.join("linux/a/b/c/aapt2").exists());
    assert_eq!(MAX_SEARCH_DEPTH, 3);
}

#[test]
fn test_binary_at_max_depth_is_found() {
    let temp_dir = TempDir::new().unwrap();
    let bundle = temp_dir.path().join("bundle.zip");
    write_zip(&bundle, &[("linux/a/aapt2", b"nested")]);

    let path = locator_for(&bundle, PlatformTag::Linux)
        .extract_aapt2(&temp_dir.path().join("out"))
        .unwrap()
        .unwrap();

    assert!(path.ends_with("linux/a/aapt2"));
}

#[test]
fn test_binary_one_level_past_max_depth_is_missing() {
    let temp_dir = TempDir::new().unwrap();
    let bundle = temp_dir.path().join("bundle.zip");
    write_zip(&bundle, &[("linux/a/b/aapt2", b"nested")]);
    let output = temp_dir.path().join("out");

    let err = locator_for(&bundle, PlatformTag::Linux)
        .extract_aapt2(&output)
        .unwrap_err();

    // out/linux/a/b/aapt2 sits four levels below the output root
    match err {
        LocatorError::ToolMissing { searched, .. } => assert_eq!(searched, output),
        other => panic!("Expected ToolMissing, got {other:?}"),
    }
}

#[test]
fn test_two_binaries_are_ambiguous() {
    let temp_dir = TempDir::new().unwrap();
    let bundle = temp_dir.path().join("bundle.zip");
    write_zip(
        &bundle,
        &[("macos/aapt2", b"one"), ("macos/bin/aapt2", b"two")],
    );

    match locator_for(&bundle, PlatformTag::MacOS).extract_aapt2(&temp_dir.path().join("out")) {
        Err(LocatorError::AmbiguousTool { tool, candidates }) => {
            assert_eq!(tool, "aapt2");
            assert_eq!(candidates.len(), 2);
        }
        other => panic!("Expected AmbiguousTool, got {other:?}"),
    }
}

#[test]
fn test_rooted_entry_paths_extract_under_output() {
    let temp_dir = TempDir::new().unwrap();
    let bundle = temp_dir.path().join("bundle.zip");
    write_zip(
        &bundle,
        &[("/linux/aapt2", b"rooted"), ("/linux/lib64/libc++.so", b"lib")],
    );
    let output = temp_dir.path().join("out");

    let tree = BundleSource::Archive(bundle.clone())
        .open()
        .unwrap()
        .unwrap();
    assert!(tree.entry("/linux").is_some());

    let path = locator_for(&bundle, PlatformTag::Linux)
        .extract_aapt2(&output)
        .unwrap()
        .unwrap();

    assert_eq!(fs::read(&path).unwrap(), b"rooted");
    assert!(output.join("linux/lib64/libc++.so").is_file());
}

#[test]
fn test_locate_adb_missing_sdk() {
    let sdk = TempDir::new().unwrap();
    let missing = sdk.path().join("not-an-sdk");

    assert!(ToolLocator::new().locate_adb(&missing).unwrap().is_none());
    assert!(!missing.join(PLATFORM_TOOLS_DIR).exists());
}

#[test]
#[cfg(unix)]
fn test_locate_adb_is_repeatable() {
    let sdk = TempDir::new().unwrap();
    let adb = common::create_sdk_tool(sdk.path(), "adb", true);
    let locator = ToolLocator::new();

    assert_eq!(locator.locate_adb(sdk.path()).unwrap(), Some(adb.clone()));
    assert_eq!(locator.locate_adb(sdk.path()).unwrap(), Some(adb));
}
