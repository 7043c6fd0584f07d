use clap::{Parser, Subcommand};
use photostamp::render::MagickBackend;
use photostamp::{annotate, renumber};
use std::path::PathBuf;

fn version_string() -> &'static str {
    let hash = env!("GIT_HASH");
    if hash.is_empty() {
        env!("CARGO_PKG_VERSION")
    } else {
        // Leaked once at startup — trivial, called exactly once
        Box::leak(format!("{} ({hash})", env!("CARGO_PKG_VERSION")).into_boxed_str())
    }
}

#[derive(Parser)]
#[command(name = "photostamp")]
#[command(about = "Timestamp overlays and sequence renumbering for photo files")]
#[command(long_about = "\
Timestamp overlays and sequence renumbering for photo files

annotate reads the capture time and pixel dimensions from a JPEG's EXIF
metadata, then asks ImageMagick's convert to burn the time of day into
the bottom-left corner of a copy:

  photostamp annotate DSC_0042.JPG stamped/
  → stamped/DSC_0042.JPG with \" 3:05:09 PM\" overlaid

renumber turns a shoot into a clean zero-padded sequence of symlinks,
so the originals stay untouched:

  photostamp renumber photos/ trip links/
  → links/trip00.JPG -> ../photos/DSC_0042.JPG, ...

Requires ImageMagick (the convert command) on PATH for annotate.")]
#[command(version = version_string())]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Burn the EXIF capture time into a copy of a photo
    Annotate {
        /// Source JPEG with EXIF metadata
        image: PathBuf,
        /// Directory for the annotated copy (created if absent)
        output_dir: PathBuf,
    },
    /// Renumber a directory of JPEGs into a prefixed symlink sequence
    Renumber {
        /// Directory holding the source JPEGs
        input_dir: PathBuf,
        /// File name prefix for the sequence
        prefix: String,
        /// Directory for the symlinks (created if absent)
        output_dir: PathBuf,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Command::Annotate { image, output_dir } => {
            if let Some(name) = image.file_name() {
                eprintln!("{}", name.to_string_lossy());
            }
            match annotate::annotate(&image, &output_dir, &MagickBackend::new()) {
                Ok(output) => println!("{}", output.display()),
                Err(err) => {
                    eprintln!("unable to process {}", image.display());
                    return Err(err.into());
                }
            }
        }
        Command::Renumber {
            input_dir,
            prefix,
            output_dir,
        } => {
            let links = renumber::renumber(&input_dir, &prefix, &output_dir)?;
            for link in &links {
                println!("{} -> {}", link.link.display(), link.source.display());
            }
            println!("{} files renumbered", links.len());
        }
    }

    Ok(())
}
