// Copyright 2025 dentsusoken
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Shared fixtures for building tool bundles and fake SDK layouts.

#![allow(dead_code)]

use assert_cmd::Command;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Isolated environment for running the binary.
///
/// The config directory points into a private temporary home so a user's own
/// config file never leaks into a test, and the SDK variables are cleared.
pub struct TestEnv {
    home: TempDir,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            home: TempDir::new().expect("Failed to create test home"),
        }
    }

    pub fn path(&self) -> &Path {
        self.home.path()
    }

    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("sdk-tools-locator").expect("binary should build");
        cmd.env("HOME", self.path())
            .env("XDG_CONFIG_HOME", self.path().join(".config"))
            .env("APPDATA", self.path().join("AppData"))
            .env_remove("ANDROID_HOME")
            .env_remove("ANDROID_SDK_ROOT")
            .env_remove("RUST_LOG");
        cmd
    }

    pub fn write_config(&self, contents: &str) -> PathBuf {
        let path = self.path().join("locator.toml");
        fs::write(&path, contents).expect("Failed to write config");
        path
    }
}

/// Directory name the bundle uses for the platform the tests run on.
pub fn host_platform_dir() -> &'static str {
    if cfg!(target_os = "windows") {
        "windows"
    } else if cfg!(target_os = "macos") {
        "macos"
    } else {
        "linux"
    }
}

/// aapt2 file name inside the host platform directory.
pub fn host_aapt2_name() -> &'static str {
    if cfg!(windows) { "aapt2.exe" } else { "aapt2" }
}

/// Writes a zip archive holding `files`, given as `(entry path, contents)`.
/// Entry paths ending in `/` become directory entries.
pub fn write_zip(path: &Path, files: &[(&str, &[u8])]) {
    let file = File::create(path).expect("Failed to create zip");
    let mut zip = zip::ZipWriter::new(file);
    let options: zip::write::FileOptions<'_, ()> = zip::write::FileOptions::default()
        .compression_method(zip::CompressionMethod::Deflated);

    for (name, data) in files {
        if name.ends_with('/') {
            zip.add_directory(*name, options).expect("Failed to add directory");
        } else {
            zip.start_file(*name, options).expect("Failed to start file");
            zip.write_all(data).expect("Failed to write file");
        }
    }
    zip.finish().expect("Failed to finish zip");
}

/// A bundle carrying aapt2 plus a shared library for every platform.
pub fn write_full_bundle(path: &Path) {
    write_zip(
        path,
        &[
            ("linux/", b""),
            ("linux/aapt2", b"linux aapt2"),
            ("linux/lib64/", b""),
            ("linux/lib64/libc++.so", b"linux lib"),
            ("macos/", b""),
            ("macos/aapt2", b"macos aapt2"),
            ("macos/lib64/libc++.dylib", b"macos lib"),
            ("windows/", b""),
            ("windows/aapt2.exe", b"windows aapt2"),
            ("windows/libwinpthread-1.dll", b"windows lib"),
        ],
    );
}

/// Creates `<sdk>/platform-tools/<name>`, executable when `executable` is set.
pub fn create_sdk_tool(sdk: &Path, name: &str, executable: bool) -> PathBuf {
    let tools = sdk.join("platform-tools");
    fs::create_dir_all(&tools).expect("Failed to create platform-tools");
    let path = tools.join(name);
    fs::write(&path, b"#!/bin/sh\n").expect("Failed to write tool");

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let mode = if executable { 0o755 } else { 0o644 };
        fs::set_permissions(&path, fs::Permissions::from_mode(mode))
            .expect("Failed to set permissions");
    }
    #[cfg(not(unix))]
    let _ = executable;

    path
}

/// Name adb has in a real SDK on the host platform.
pub fn host_adb_name() -> &'static str {
    if cfg!(windows) { "adb.exe" } else { "adb" }
}
