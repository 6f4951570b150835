use clap::Parser;
use std::path::PathBuf;

use sheetcheck::{FsImageSource, PlacementPipeline, StdoutSink};

#[derive(Parser)]
#[command(name = "sheetcheck")]
#[command(about = "Check whether objects on a photographed sheet fit inside the printed polygon")]
struct Cli {
    /// Path to an input image file or a directory of images
    #[arg(value_name = "PATH")]
    path: PathBuf,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Cli::parse();

    let pipeline = PlacementPipeline::new().with_verbose(args.verbose);
    let source = FsImageSource;
    let mut sink = StdoutSink;

    if args.path.is_dir() {
        for entry in std::fs::read_dir(&args.path)? {
            let entry = entry?;
            if !entry.file_type()?.is_file() {
                continue;
            }
            let path = entry.path();
            if args.verbose {
                println!("\nChecking {:?}", path);
            }
            let fits = pipeline.check_path(&source, &path, &mut sink)?;
            report(&path, fits);
        }
    } else {
        if args.verbose {
            println!("Checking {:?}", args.path);
        }
        let fits = pipeline.check_path(&source, &args.path, &mut sink)?;
        report(&args.path, fits);
    }

    Ok(())
}

fn report(path: &std::path::Path, fits: bool) {
    if fits {
        println!("{}: placement accepted", path.display());
    } else {
        println!("{}: placement rejected", path.display());
    }
}
