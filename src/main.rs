//! # Thermal Relay CLI
//!
//! Command-line interface for the local print service.
//!
//! ## Usage
//!
//! ```bash
//! # List printers known to the service
//! thermal-relay printers
//!
//! # Print a few lines and cut
//! thermal-relay text --printer EPSON1 --cut "Hello" "World"
//!
//! # Print an image file at double width
//! thermal-relay image --printer EPSON1 --mode IMG_DOUBLE_WIDTH logo.png
//!
//! # Submit a prepared job (same JSON as POST /print)
//! thermal-relay submit job.json
//!
//! # Talk to a service on another host
//! thermal-relay --url http://192.168.1.20:8000 printers
//! ```

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

use thermal_relay::{
    PrintService, Printer, PrinterOptions, RawPrintRequest, RelayError, ServiceConfig,
    action::ImageMode,
};

/// Thermal Relay - print through a local print service
#[derive(Parser, Debug)]
#[command(name = "thermal-relay")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Base URL of the print service (overrides THERMAL_RELAY_URL)
    #[arg(long, global = true)]
    url: Option<String>,

    /// Request timeout in seconds (overrides THERMAL_RELAY_TIMEOUT_SECS;
    /// default: wait indefinitely)
    #[arg(long, global = true)]
    timeout: Option<u64>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List printers available on the print service
    Printers,

    /// Submit a JSON print request file byte-for-byte
    Submit {
        /// Path to the request body
        file: PathBuf,
    },

    /// Print lines of text
    Text {
        /// Target printer name
        #[arg(long, default_value = "")]
        printer: String,

        /// Queue text through the asian-text path
        #[arg(long)]
        asian: bool,

        /// Ask the service to render text as Unicode
        #[arg(long)]
        special: bool,

        /// Unlock key
        #[arg(long)]
        key: Option<String>,

        /// Cut the paper afterwards
        #[arg(long)]
        cut: bool,

        /// Lines to print
        #[arg(required = true)]
        lines: Vec<String>,
    },

    /// Print an image file
    Image {
        /// Target printer name
        #[arg(long, default_value = "")]
        printer: String,

        /// Image sizing (IMG_DEFAULT, IMG_DOUBLE_HEIGHT, IMG_DOUBLE_WIDTH)
        #[arg(long)]
        mode: Option<ImageMode>,

        /// Unlock key
        #[arg(long)]
        key: Option<String>,

        /// Cut the paper afterwards
        #[arg(long)]
        cut: bool,

        /// Image file to send
        file: PathBuf,
    },
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<(), RelayError> {
    let cli = Cli::parse();

    let mut config = ServiceConfig::from_env()?;
    if let Some(url) = cli.url.as_deref() {
        config = config.with_base_url(url)?;
    }
    if let Some(secs) = cli.timeout {
        config = config.with_timeout(Duration::from_secs(secs));
    }
    let service = PrintService::new(config)?;

    match cli.command {
        Commands::Printers => {
            for name in service.printers().await? {
                println!("{}", name);
            }
        }
        Commands::Submit { file } => {
            let request = RawPrintRequest::parse(std::fs::read_to_string(&file)?)?;
            service.print_raw(&request).await?;
            println!("Printed successfully!");
        }
        Commands::Text {
            printer,
            asian,
            special,
            key,
            cut,
            lines,
        } => {
            let options = PrinterOptions {
                text_asian: asian,
                text_special: special,
                key,
            };
            let mut job = Printer::with_options(printer, options).with_service(service);
            for line in lines {
                job.text(format!("{}\n", line));
            }
            if cut {
                job.cut();
            }
            job.print().await?;
            println!("Printed successfully!");
        }
        Commands::Image {
            printer,
            mode,
            key,
            cut,
            file,
        } => {
            let bytes = std::fs::read(&file)?;
            let options = PrinterOptions {
                key,
                ..Default::default()
            };
            let mut job = Printer::with_options(printer, options).with_service(service);
            job.print_image_bytes(&bytes, mode);
            if cut {
                job.cut();
            }
            job.print().await?;
            println!("Printed successfully!");
        }
    }

    Ok(())
}
