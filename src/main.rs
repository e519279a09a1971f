use bakeshop_daemon::logging::{init_logging, parse_rotation, LogConfig};
use bakeshop_daemon::utils::format_usd_cents;
use bakeshop_daemon::{hash_pin, init_shop, list_products, list_tiles};
use clap::{Parser, Subcommand};
use color_eyre::eyre::Result;
use std::path::PathBuf;
use tracing::info;

/// Bakeshop daemon - storefront data administration
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Shop root directory (the .bakeshop folder lives underneath)
    #[arg(short, long, env = "BAKESHOP_ROOT", default_value = ".")]
    root: PathBuf,

    /// Enable JSON log format (for production/log aggregation)
    #[arg(long, env = "BAKESHOP_LOG_JSON", default_value = "false")]
    log_json: bool,

    /// Log rotation period: daily, hourly, or never
    #[arg(long, env = "BAKESHOP_LOG_ROTATION", default_value = "daily")]
    log_rotation: String,

    /// Custom log directory (default: ~/.bakeshop/logs)
    #[arg(long, env = "BAKESHOP_LOG_DIR")]
    log_dir: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Initialize the shop data folder
    Init,
    /// Print the SHA-256 digest of a PIN, for the admin_pin_hash config field
    HashPin {
        /// The raw PIN to digest
        pin: String,
    },
    /// List hero tiles in rank order
    Tiles,
    /// List catalog products (admin view)
    Products,
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let args = Args::parse();

    let log_dir = args.log_dir.map(PathBuf::from).unwrap_or_else(|| {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".bakeshop")
            .join("logs")
    });

    init_logging(LogConfig {
        log_dir,
        json_format: args.log_json,
        rotation: parse_rotation(&args.log_rotation),
        ..Default::default()
    })?;

    match args.command {
        Command::Init => {
            let manifest = init_shop(&args.root).await?;
            info!(
                "Shop ready (schema v{}, created {})",
                manifest.schema_version, manifest.created_at
            );
        }
        Command::HashPin { pin } => {
            println!("{}", hash_pin(&pin));
        }
        Command::Tiles => {
            let tiles = list_tiles(&args.root).await?;
            if tiles.is_empty() {
                println!("No hero tiles yet.");
            }
            for ranked in tiles {
                println!("{:>3}. {} [{}]", ranked.rank, ranked.tile.title, ranked.tile.id);
            }
        }
        Command::Products => {
            let products = list_products(&args.root).await?;
            if products.is_empty() {
                println!("No products yet.");
            }
            for product in products {
                let status = if product.is_active { "active" } else { "hidden" };
                println!("{} ({status}) [{}]", product.title, product.id);
                for variation in product.variations {
                    println!(
                        "    - {} {}",
                        variation.name,
                        format_usd_cents(u64::from(variation.price_cents))
                    );
                }
            }
        }
    }

    Ok(())
}
