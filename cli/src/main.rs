//! Terminal client for the stock manager API.
//!
//! Drives the same core as the browser front-end: a `reqwest` transport and a
//! file-backed session stand in for `fetch` and `localStorage`.

mod session;
mod transport;


use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use stockmanager::config::DEFAULT_BASE_URL;
use stockmanager::dashboard::Mutation;
use stockmanager::image::to_data_url;
use stockmanager::types::{Credentials, NewProduct, NewUser, Product, ProductUpdate, StockMovement};
use stockmanager::{ApiClient, ApiConfig, ApiError, auth, messages};

use session::FileSession;
use transport::ReqwestTransport;

type Api = ApiClient<ReqwestTransport, FileSession>;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("{message} ({source})")]
    Feature {
        message: &'static str,
        #[source]
        source: ApiError,
    },
    #[error("request failed: {0}")]
    Api(#[from] ApiError),
    #[error("product {0} not found")]
    ProductNotFound(i64),
    #[error("failed to read image {path}: {source}")]
    Image {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid JSON payload: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

#[derive(Parser, Debug)]
#[command(name = "stockmanager", about = "Stock manager API CLI")]
struct Cli {
    #[arg(long, env = "STOCK_API_URL", default_value = DEFAULT_BASE_URL)]
    base_url: String,

    /// Base URL for `/api/products`; defaults to `--base-url`.
    #[arg(long, env = "STOCK_PRODUCTS_API_URL")]
    products_url: Option<String>,

    #[arg(long, env = "STOCK_SESSION_FILE", default_value = ".stockmanager-token")]
    session_file: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Log in and save the session token.
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    /// Create an account. Does not log in.
    Register {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    /// Forget the saved session token.
    Logout,
    Entry(MovementCommand),
    Exit(MovementCommand),
    /// Total quantity across all products.
    Stock,
    /// Per-product quantity and value.
    Inventory,
    Product(ProductCommand),
}

#[derive(Args, Debug)]
struct MovementCommand {
    #[command(subcommand)]
    command: MovementSubcommand,
}

#[derive(Subcommand, Debug)]
enum MovementSubcommand {
    List,
    Create(MovementArgs),
}

#[derive(Args, Debug, Clone, PartialEq)]
struct MovementArgs {
    #[arg(long)]
    product_id: i64,
    #[arg(long)]
    quantity: i64,
    #[arg(long)]
    price: f64,
    #[arg(long)]
    batch: String,
}

impl MovementArgs {
    fn to_movement(&self) -> StockMovement {
        StockMovement {
            product_id: self.product_id,
            quantity: self.quantity,
            price: self.price,
            batch: self.batch.clone(),
            ..StockMovement::default()
        }
    }
}

#[derive(Args, Debug)]
struct ProductCommand {
    #[command(subcommand)]
    command: ProductSubcommand,
}

#[derive(Subcommand, Debug)]
enum ProductSubcommand {
    List,
    Create {
        #[arg(long)]
        name: String,
        #[arg(long, default_value = "")]
        description: String,
        #[arg(long, default_value = "")]
        manufacturer: String,
        /// Image file, sent inline as a data URL.
        #[arg(long)]
        image: Option<PathBuf>,
    },
    /// Edit a product; omitted fields keep their current value.
    Update {
        id: i64,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        manufacturer: Option<String>,
    },
    Delete {
        id: i64,
    },
}

#[derive(Debug, Default)]
struct ProductEdits {
    name: Option<String>,
    description: Option<String>,
    manufacturer: Option<String>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let cli = Cli::parse();
    let api = build_api(&cli);
    match run(&api, cli.command).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn build_api(cli: &Cli) -> Api {
    let mut config = ApiConfig::with_base_url(&cli.base_url);
    if let Some(products_url) = &cli.products_url {
        products_url.trim().trim_end_matches('/').clone_into(&mut config.products_base_url);
    }
    ApiClient::new(config, ReqwestTransport::new(), FileSession::new(&cli.session_file))
}

async fn run(api: &Api, command: Command) -> Result<(), CliError> {
    match command {
        Command::Login { email, password } => {
            auth::login(api, &Credentials { email, password })
                .await
                .map_err(|source| CliError::Feature { message: messages::LOGIN_FAILED, source })?;
            println!("token saved to {}", api.session().path().display());
            Ok(())
        }
        Command::Register { name, email, password } => {
            let result = auth::register(api, &NewUser { name, email, password }).await;
            let message = auth::registration_message(&result);
            match result {
                Ok(()) => {
                    println!("{message}");
                    Ok(())
                }
                Err(source) => Err(CliError::Feature { message, source }),
            }
        }
        Command::Logout => {
            auth::logout(api.session());
            println!("logged out");
            Ok(())
        }
        Command::Entry(entry) => match entry.command {
            MovementSubcommand::List => print_json(&api.list_entries().await?),
            MovementSubcommand::Create(args) => mutate(api, Mutation::CreateEntry(args.to_movement())).await,
        },
        Command::Exit(exit) => match exit.command {
            MovementSubcommand::List => print_json(&api.list_exits().await?),
            MovementSubcommand::Create(args) => mutate(api, Mutation::CreateExit(args.to_movement())).await,
        },
        Command::Stock => print_json(&api.total_stock().await?),
        Command::Inventory => print_json(&api.inventory().await?),
        Command::Product(product) => run_product(api, product).await,
    }
}

async fn run_product(api: &Api, product: ProductCommand) -> Result<(), CliError> {
    match product.command {
        ProductSubcommand::List => print_json(&api.list_products().await?),
        ProductSubcommand::Create { name, description, manufacturer, image } => {
            let image = match image {
                Some(path) => read_image(&path)?,
                None => String::new(),
            };
            mutate(api, Mutation::CreateProduct(NewProduct { name, description, manufacturer, image })).await
        }
        ProductSubcommand::Update { id, name, description, manufacturer } => {
            let products = api.list_products().await?;
            let current = products.iter().find(|p| p.id == id).ok_or(CliError::ProductNotFound(id))?;
            let edits = ProductEdits { name, description, manufacturer };
            mutate(api, Mutation::UpdateProduct(merge_update(current, edits))).await
        }
        ProductSubcommand::Delete { id } => mutate(api, Mutation::DeleteProduct(id)).await,
    }
}

async fn mutate(api: &Api, mutation: Mutation) -> Result<(), CliError> {
    match api.execute(&mutation).await {
        Ok(()) => {
            println!("{}", mutation.success_message());
            Ok(())
        }
        Err(source) => Err(CliError::Feature { message: mutation.error_message(), source }),
    }
}

/// Start from the stored product, like the edit dialog does, then apply edits.
fn merge_update(current: &Product, edits: ProductEdits) -> ProductUpdate {
    let mut update = ProductUpdate::from(current);
    if let Some(name) = edits.name {
        update.name = name;
    }
    if let Some(description) = edits.description {
        update.description = description;
    }
    if let Some(manufacturer) = edits.manufacturer {
        update.manufacturer = manufacturer;
    }
    update
}

fn read_image(path: &Path) -> Result<String, CliError> {
    let bytes = std::fs::read(path).map_err(|source| CliError::Image { path: path.to_owned(), source })?;
    Ok(to_data_url(mime_for(path), &bytes))
}

fn mime_for(path: &Path) -> &'static str {
    let ext = path.extension().and_then(|e| e.to_str()).map(str::to_ascii_lowercase);
    match ext.as_deref() {
        Some("png") => "image/png",
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        Some("svg") => "image/svg+xml",
        _ => "application/octet-stream",
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<(), CliError> {
    let rendered = serde_json::to_string_pretty(value)?;
    println!("{rendered}");
    Ok(())
}
