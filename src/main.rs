use clap::{Parser, Subcommand};
use miette::{IntoDiagnostic, Result};
use qr_faktura::application::generator::InvoiceGenerator;
use qr_faktura::config::Settings;
use qr_faktura::domain::account::DomesticAccountReference;
use qr_faktura::domain::payment::{self, DEFAULT_CURRENCY};
use qr_faktura::infrastructure::fs::FileSink;
use qr_faktura::infrastructure::html::HtmlLayout;
use qr_faktura::infrastructure::qr::{QrCodeRenderer, render_to_terminal};
use qr_faktura::interfaces::csv::invoice_reader::InvoiceReader;
use qr_faktura::logging;
use rust_decimal::Decimal;
use std::fs::File;
use std::io;
use std::path::PathBuf;
use tracing::info;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable debug logging (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Convert a domestic account `<account>/<bank code>` into an IBAN
    Iban {
        account: String,

        /// Print in groups of four
        #[arg(long)]
        grouped: bool,
    },
    /// Print the QR payment payload for a domestic account
    Payment {
        account: String,

        #[arg(long)]
        amount: Decimal,

        /// Variable symbol, usually the invoice number
        #[arg(long = "vs")]
        variable_symbol: String,

        #[arg(long, default_value = DEFAULT_CURRENCY)]
        currency: String,

        /// Also print the QR code to the terminal
        #[arg(long)]
        qr: bool,
    },
    /// Generate one invoice document per row of an invoices CSV file
    Generate {
        input: PathBuf,

        /// Directory for generated documents (overrides the config file)
        #[arg(long)]
        output_dir: Option<PathBuf>,

        /// TOML settings file
        #[arg(long)]
        config: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    match cli.command {
        Command::Iban { account, grouped } => {
            let iban = DomesticAccountReference::parse(&account)
                .and_then(|reference| reference.to_iban())
                .into_diagnostic()?;
            if grouped {
                println!("{}", iban.to_grouped());
            } else {
                println!("{iban}");
            }
        }
        Command::Payment {
            account,
            amount,
            variable_symbol,
            currency,
            qr,
        } => {
            let iban = DomesticAccountReference::parse(&account)
                .and_then(|reference| reference.to_iban())
                .into_diagnostic()?;
            let code = payment::build(&iban, amount, &currency, &variable_symbol).into_diagnostic()?;
            println!("{code}");
            if qr {
                println!("{}", render_to_terminal(&code).into_diagnostic()?);
            }
        }
        Command::Generate {
            input,
            output_dir,
            config,
        } => {
            let mut settings = match config {
                Some(path) => Settings::load(&path).into_diagnostic()?,
                None => Settings::default(),
            };
            if let Some(output_dir) = output_dir {
                settings.output_dir = output_dir;
            }
            generate(input, settings).await?;
        }
    }

    Ok(())
}

async fn generate(input: PathBuf, settings: Settings) -> Result<()> {
    let generator = InvoiceGenerator::new(
        Box::new(QrCodeRenderer::new(settings.qr_size)),
        Box::new(HtmlLayout::new(settings.provider_note.as_str())),
        Box::new(FileSink::new(settings.output_dir.clone())),
        settings,
    );

    let file = File::open(&input).into_diagnostic()?;
    let reader = InvoiceReader::new(file);
    let stdout = io::stdout();
    let mut summary = csv::Writer::from_writer(stdout.lock());
    summary
        .write_record(["invoice_number", "iban", "path"])
        .into_diagnostic()?;

    let (mut generated, mut failed) = (0usize, 0usize);
    for invoice in reader.invoices() {
        match invoice {
            Ok(invoice) => match generator.generate(&invoice).await {
                Ok(outcome) => {
                    let path = outcome
                        .artifact
                        .location
                        .map(|path| path.display().to_string())
                        .unwrap_or(outcome.artifact.file_name);
                    summary
                        .write_record([
                            invoice.invoice_number.as_str(),
                            outcome.iban.as_str(),
                            path.as_str(),
                        ])
                        .into_diagnostic()?;
                    generated += 1;
                }
                Err(e) => {
                    eprintln!("Error generating invoice {}: {}", invoice.invoice_number, e);
                    failed += 1;
                }
            },
            Err(e) => {
                eprintln!("Error reading invoice: {}", e);
                failed += 1;
            }
        }
    }
    summary.flush().into_diagnostic()?;

    info!(generated, failed, "batch finished");
    Ok(())
}
