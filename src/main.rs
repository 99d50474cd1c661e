use std::error::Error;
use std::io::Write;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;
use vaultqr::{QRBuilder, DEFAULT_CELL_SIZE, DEFAULT_MARGIN};

#[derive(Parser)]
#[command(name = "vaultqr", version, about = "Encode text as a version 4-L QR code")]
struct Cli {
    /// Text to encode, at most 78 chars in U+0000..=U+00FF
    text: String,

    /// Pixels per module
    #[arg(long, default_value_t = DEFAULT_CELL_SIZE)]
    cell_size: u32,

    /// Light border width in modules
    #[arg(long, default_value_t = DEFAULT_MARGIN)]
    margin: u32,

    #[arg(long, value_enum, default_value_t = Format::Svg)]
    format: Format,

    /// Write to a file instead of stdout
    #[arg(long, short)]
    output: Option<PathBuf>,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Svg,
    DataUrl,
    Png,
    Text,
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut builder = QRBuilder::new(&cli.text);
    builder.cell_size(cli.cell_size).margin(cli.margin);

    let bytes = match cli.format {
        Format::Svg => builder.render()?.into_bytes(),
        Format::DataUrl => builder.render_data_url()?.into_bytes(),
        Format::Png => builder.render_png()?,
        Format::Text => builder.build()?.to_str(cli.margin as usize).into_bytes(),
    };

    match cli.output {
        Some(path) => {
            std::fs::write(&path, &bytes)?;
            tracing::info!(path = %path.display(), bytes = bytes.len(), "QR written");
        }
        None => std::io::stdout().lock().write_all(&bytes)?,
    }

    Ok(())
}
