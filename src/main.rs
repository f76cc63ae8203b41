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

use clap::{Parser, Subcommand};
use sdk_tools_locator::commands::aapt2::Aapt2Command;
use sdk_tools_locator::commands::adb::AdbCommand;
use sdk_tools_locator::config::LocatorConfig;
use sdk_tools_locator::error::{
    LocatorError, Result, format_error_chain, format_error_with_color, get_exit_code,
};
use sdk_tools_locator::logging;
use std::io::IsTerminal;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "sdk-tools-locator")]
#[command(author, version, about = "Locate the Android SDK tools used by a build", long_about = None)]
struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Read settings from this file instead of the per-user config
    #[arg(long, value_name = "FILE", global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the path of an aapt2 binary, extracting it from the bundle if needed
    Aapt2 {
        /// Use this aapt2 binary instead of the bundled one
        #[arg(long, value_name = "PATH")]
        aapt2: Option<PathBuf>,

        /// Directory to extract into (defaults to a new temporary directory)
        #[arg(long, value_name = "DIR")]
        output_dir: Option<PathBuf>,

        /// Zip archive to extract from (defaults to this executable)
        #[arg(long, value_name = "ZIP")]
        bundle: Option<PathBuf>,

        /// Output in JSON format
        #[arg(long)]
        json: bool,
    },

    /// Print the path of adb inside an Android SDK
    #[command(long_about = "Print the path of adb inside an Android SDK

The SDK directory is taken from --sdk-dir, then ANDROID_HOME, then
ANDROID_SDK_ROOT, then sdk_dir in the config file.")]
    Adb {
        /// Android SDK root directory
        #[arg(long, value_name = "DIR")]
        sdk_dir: Option<PathBuf>,

        /// Output in JSON format
        #[arg(long)]
        json: bool,
    },
}

fn report_and_exit(error: &LocatorError) -> ! {
    if std::io::stderr().is_terminal() {
        eprint!("{}", format_error_with_color(error, true));
    } else {
        eprintln!("{}", format_error_chain(error));
    }
    std::process::exit(get_exit_code(error));
}

fn main() {
    let cli = Cli::parse();

    logging::setup_logger(cli.verbose);

    let config = match LocatorConfig::load_or_default(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => report_and_exit(&e),
    };

    let result: Result<()> = (|| match cli.command {
        Commands::Aapt2 {
            aapt2,
            output_dir,
            bundle,
            json,
        } => {
            let command = Aapt2Command::new(&config)?;
            command.execute(
                aapt2.as_deref(),
                output_dir.as_deref(),
                bundle.as_deref(),
                json,
            )
        }
        Commands::Adb { sdk_dir, json } => {
            let command = AdbCommand::new(&config)?;
            command.execute(sdk_dir.as_deref(), json)
        }
    })();

    if let Err(e) = result {
        report_and_exit(&e);
    }
}
