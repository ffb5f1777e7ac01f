use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use revenda_campos::app::config::Config;
use revenda_campos::app::logging::init_tracing;
use revenda_campos::models::{FieldKind, FormatterSession};
use revenda_campos::services::{CepField, LookupOutcome, NotFoundCallback, ViaCepClient};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{debug, info};

#[derive(Parser, Debug)]
#[command(name = "revenda", version, about = "Máscaras e validação dos campos de veículo")]
struct Cli {
    /// TOML config file; environment variables override its values
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the masked value (plate, renavam, currency or cep)
    Format { kind: FieldKind, value: String },
    /// Validate a value; exits with status 1 when invalid
    Validate { kind: FieldKind, value: String },
    /// Look up the address of a CEP
    Cep { value: String },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load(cli.config.as_deref()).context("failed to load configuration")?;
    init_tracing(config.log_format);
    debug!("Loaded config: {:?}", config);

    match cli.command {
        Command::Format { kind, value } => {
            let mut session = FormatterSession::new();
            let output = kind.process(&value, &mut session);
            println!("{}", output.formatted);
        }
        Command::Validate { kind, value } => match kind.validate(&value) {
            Ok(()) => println!("{}: {} ok", kind, kind.format(&value)),
            Err(e) => {
                eprintln!("{}: {}", kind, e);
                std::process::exit(1);
            }
        },
        Command::Cep { value } => {
            let client = ViaCepClient::from_config(&config)?;
            info!("Using CEP service at {}", config.cep_api_url);

            let on_not_found: NotFoundCallback = Arc::new(|cep: &str| {
                eprintln!("CEP {} não encontrado", cep);
            });
            let field = CepField::new(Arc::new(client), on_not_found);

            let input = field.input(&value);
            let Some(pending) = input.pending else {
                eprintln!("CEP incompleto: {}", input.formatted);
                std::process::exit(1);
            };

            match pending.wait().await {
                LookupOutcome::Found(address) => {
                    println!("{}", serde_json::to_string_pretty(&address)?);
                }
                LookupOutcome::NotFound | LookupOutcome::Superseded => std::process::exit(1),
            }
        }
    }

    Ok(())
}
