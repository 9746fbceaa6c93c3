use clap::Parser;
use dir_gallery::{config::GalleryConfig, generate, output, scan};

#[derive(Parser)]
#[command(name = "dir-gallery")]
#[command(version, about = "Static HTML photo gallery for the current directory")]
#[command(long_about = "\
Static HTML photo gallery for the current directory

Run it in the folder that holds your photo folders. Every visible
subdirectory with at least one image becomes a category page; the
current directory gets an index listing all categories.

  photos/
  ├── index.html           # Generated: one card per category
  ├── Beach/
  │   ├── index.html       # Generated: photo grid + lightbox
  │   ├── 01.Sunset.jpg    # Caption \"Sunset\" (numeric prefix dropped)
  │   └── waves.png        # Caption \"waves\"
  └── .drafts/             # Hidden: ignored

Recognized images: png, jpg, jpeg, gif, webp (any case).
Existing index.html files are overwritten.")]
struct Cli {}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    Cli::parse();

    let config = GalleryConfig::default();
    config.validate()?;

    let root = std::env::current_dir()?;

    println!("==> Scanning {}", root.display());
    let gallery = scan::scan(&root, &config)?;
    output::print_scan_output(&gallery);

    println!("==> Generating pages");
    generate::generate(&gallery, &config, output::print_generate_event)?;

    println!("Gallery generation complete!");
    Ok(())
}
