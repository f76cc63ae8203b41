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

pub mod aapt2;
pub mod adb;

use crate::error::Result;
use serde::Serialize;
use std::path::Path;

/// How a tool path was obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LocatedSource {
    Override,
    Bundle,
    Sdk,
}

#[derive(Debug, Serialize)]
pub(crate) struct LocatedOutput<'a> {
    tool: &'a str,
    path: String,
    source: LocatedSource,
}

impl<'a> LocatedOutput<'a> {
    pub(crate) fn new(tool: &'a str, path: &Path, source: LocatedSource) -> Self {
        Self {
            tool,
            path: path.display().to_string(),
            source,
        }
    }

    pub(crate) fn render(&self, json: bool) -> Result<String> {
        if json {
            Ok(serde_json::to_string_pretty(self)?)
        } else {
            Ok(self.path.clone())
        }
    }

    pub(crate) fn print(&self, json: bool) -> Result<()> {
        println!("{}", self.render(json)?);
        Ok(())
    }
}
