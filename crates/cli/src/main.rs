use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use vna_id::{ObjectId, store_key_for};

#[derive(Parser)]
#[command(name = "vna")]
#[command(about = "VNA identifier and datastore-key tools")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a fresh UUID identifier
    New,
    /// Check whether an identifier is acceptable
    Validate {
        /// Identifier to check
        id: String,
    },
    /// Convert an identifier to its datastore key
    Convert {
        /// Identifier to convert
        id: String,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::New) => {
            println!("{}", ObjectId::new());
        }
        Some(Commands::Validate { id }) => {
            if ObjectId::is_valid(&id) {
                println!("valid");
            } else {
                println!("invalid");
            }
        }
        Some(Commands::Convert { id }) => {
            let key = store_key_for(&id)?;
            println!("{}", key);
        }
        None => {
            println!("Use 'vna --help' for commands");
        }
    }

    Ok(())
}
