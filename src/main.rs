use std::path::PathBuf;

use clap::Parser;

use pagestamp::automation::script::ScriptBridge;
use pagestamp::{walk, Config, EXTENSIONS};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Directory to process; a folder picker opens when omitted
    directory: Option<PathBuf>,
}

fn main() {
    env_logger::init();
    let args = Args::parse();
    let config = Config::load();
    let bridge = ScriptBridge::new();

    let interactive = args.directory.is_none();
    let root = match args.directory {
        Some(dir) => Some(dir),
        None => rfd::FileDialog::new()
            .set_title("Select the folder to process")
            .pick_folder(),
    };

    let Some(root) = root else {
        if interactive {
            rfd::MessageDialog::new()
                .set_level(rfd::MessageLevel::Warning)
                .set_title("No folder selected")
                .set_description("No folder was selected, exiting.")
                .show();
        }
        return;
    };

    let summary = walk(&root, &EXTENSIONS, &bridge, &config);

    let report = format!(
        "{} renamed, {} skipped, {} failed",
        summary.renamed, summary.skipped, summary.failed
    );
    if interactive {
        rfd::MessageDialog::new()
            .set_level(rfd::MessageLevel::Info)
            .set_title("Folder processed")
            .set_description(report.as_str())
            .show();
    } else {
        println!("{report}");
    }
}
