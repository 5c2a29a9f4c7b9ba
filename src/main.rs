//! Pixel Vault - password-keyed steganography for PNG images.
//!
//! Seals encrypted data into the pixels of a lossless image and opens it
//! again given the same credentials.

use anyhow::{anyhow, Context};
use clap::{Parser, Subcommand};
use image::RgbaImage;
use pixel_vault::envelope::HEADER_LEN;
use pixel_vault::{vault, PixelSurface};
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "pixel-vault")]
#[command(author, version, about, long_about = None)]
#[command(
    about = "Seal encrypted data inside PNG images",
    long_about = "Encrypts a payload with AES-256-GCM and scatters it bit by bit across \
                  password-chosen pixels of a PNG image. Only the same password (and \
                  optional context) can locate and decrypt it again."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encrypt and hide data inside an image
    Seal {
        /// Input image (any format image-rs can decode)
        image: PathBuf,

        /// Output path for the sealed image (always written as PNG)
        #[arg(short, long, default_value = "sealed.png")]
        output: PathBuf,

        /// File containing the secret payload
        #[arg(long, conflicts_with = "data")]
        input: Option<PathBuf>,

        /// Secret payload given directly as a string
        #[arg(long, conflicts_with = "input")]
        data: Option<String>,

        /// Optional context string; must be supplied again on open
        #[arg(short, long)]
        context: Option<String>,
    },

    /// Extract and decrypt data from a sealed image
    Open {
        /// Sealed PNG image
        image: PathBuf,

        /// Output file for the payload (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Context string used during sealing
        #[arg(short, long)]
        context: Option<String>,
    },

    /// Show embedding capacity of an image
    Info {
        /// Image to inspect
        image: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Commands::Seal {
            image,
            output,
            input,
            data,
            context,
        } => cmd_seal(&image, &output, input, data, context.as_deref()),

        Commands::Open {
            image,
            output,
            context,
        } => cmd_open(&image, output, context.as_deref()),

        Commands::Info { image } => cmd_info(&image),
    }
}

fn prompt_password(prompt: &str) -> String {
    rpassword::prompt_password(prompt).unwrap_or_else(|_| {
        eprint!("{}", prompt);
        io::stderr().flush().unwrap();
        let mut password = String::new();
        io::stdin().read_line(&mut password).unwrap();
        password.trim().to_string()
    })
}

fn load_surface(path: &Path) -> anyhow::Result<PixelSurface> {
    let img = image::open(path).with_context(|| format!("failed to read image {}", path.display()))?;
    let rgba = img.to_rgba8();
    let (width, height) = rgba.dimensions();
    Ok(PixelSurface::from_rgba(width, height, rgba.into_raw())?)
}

fn save_surface(surface: PixelSurface, path: &Path) -> anyhow::Result<()> {
    let (width, height) = (surface.width(), surface.height());
    let img = RgbaImage::from_raw(width, height, surface.into_rgba())
        .ok_or_else(|| anyhow!("surface buffer does not match its dimensions"))?;

    // Always PNG: a lossy container would destroy the embedded bits.
    img.save_with_format(path, image::ImageFormat::Png)
        .with_context(|| format!("failed to write image {}", path.display()))?;
    Ok(())
}

fn cmd_seal(
    image: &Path,
    output: &Path,
    input: Option<PathBuf>,
    data: Option<String>,
    context: Option<&str>,
) -> anyhow::Result<()> {
    let payload = match (input, data) {
        (Some(path), None) => std::fs::read(&path)
            .with_context(|| format!("failed to read payload {}", path.display()))?,
        (None, Some(s)) => s.into_bytes(),
        (None, None) => {
            // Read from stdin
            let mut buffer = Vec::new();
            io::stdin().read_to_end(&mut buffer)?;
            buffer
        }
        (Some(_), Some(_)) => unreachable!(),
    };

    let password = prompt_password("Enter password: ");
    let confirm = prompt_password("Confirm password: ");

    if password != confirm {
        eprintln!("Passwords do not match");
        std::process::exit(1);
    }

    let mut surface = load_surface(image)?;

    println!("Sealing {} bytes into {}...", payload.len(), image.display());
    vault::seal(&mut surface, &payload, &password, context)?;

    save_surface(surface, output)?;
    println!("Sealed image saved to {}", output.display());

    Ok(())
}

fn cmd_open(image: &Path, output: Option<PathBuf>, context: Option<&str>) -> anyhow::Result<()> {
    let password = prompt_password("Password: ");

    let surface = load_surface(image)?;
    let payload = vault::open(&surface, &password, context)?;

    match output {
        Some(path) => {
            std::fs::write(&path, &payload)
                .with_context(|| format!("failed to write payload {}", path.display()))?;
            println!("Recovered {} bytes to {}", payload.len(), path.display());
        }
        None => {
            io::stdout().write_all(&payload)?;
        }
    }

    Ok(())
}

fn cmd_info(image: &Path) -> anyhow::Result<()> {
    let surface = load_surface(image)?;
    let capacity = surface.capacity();
    let max_payload = (capacity / 8).saturating_sub(HEADER_LEN);

    println!("Image: {}", image.display());
    println!("  Dimensions: {}x{}", surface.width(), surface.height());
    println!("  Bit capacity: {} bits", capacity);
    println!("  Header overhead: {} bytes", HEADER_LEN);
    println!("  Max payload: {} bytes", max_payload);

    Ok(())
}
