// Command line catalog browser
//
// Loads categories and products through the same providers the web app
// uses, then prints one sorted page.
//
// Usage:
//   catalog [--offline] [--category NAME] [--sort OPTION] [--page N]
//
// Configuration comes from STORE_API_BASE / STORE_PER_PAGE (or .env).
// Set RUST_LOG=debug to see individual requests.

use anyhow::{bail, Context, Result};
use storefront_state::fixtures::SampleStoreApi;
use storefront_state::web_app::api::{HttpStoreApi, StoreApi};
use storefront_state::web_app::state::{CategoryProvider, PaginationSort, ProductProvider};
use storefront_state::{SortOption, StoreConfig};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Default)]
struct Args {
    offline: bool,
    category: Option<String>,
    sort: SortOption,
    page: u32,
}

fn parse_args() -> Result<Args> {
    let mut args = Args {
        page: 1,
        ..Args::default()
    };
    let mut iter = std::env::args().skip(1);
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--offline" => args.offline = true,
            "--category" => {
                args.category = Some(iter.next().context("--category needs a value")?);
            }
            "--sort" => {
                let value = iter.next().context("--sort needs a value")?;
                args.sort = SortOption::parse(&value);
            }
            "--page" => {
                let value = iter.next().context("--page needs a value")?;
                args.page = value
                    .parse()
                    .with_context(|| format!("invalid page {value:?}"))?;
            }
            other => bail!("unknown argument {other:?}"),
        }
    }
    Ok(args)
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();
    tracing_subscriber::fmt()
        .with_target(false)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = parse_args()?;
    let config = StoreConfig::from_env().context("invalid store configuration")?;

    if args.offline {
        tracing::info!("Browsing the sample catalog");
        browse(SampleStoreApi, &args, config.per_page).await
    } else {
        tracing::info!("Browsing {}", config.api_base);
        browse(HttpStoreApi::from_config(&config), &args, config.per_page).await
    }
}

async fn browse<A: StoreApi + Clone>(api: A, args: &Args, per_page: usize) -> Result<()> {
    let categories = CategoryProvider::new(api.clone());
    let products = ProductProvider::new(api);

    tokio::join!(categories.fetch(), products.fetch(args.category.as_deref()));

    if let Some(error) = categories.error() {
        tracing::warn!("{}", error);
    } else {
        println!("Categories: {}", categories.categories().join(", "));
    }
    if let Some(error) = products.error() {
        bail!(error);
    }

    let mut pagination = PaginationSort::new(per_page);
    pagination.set_sort(args.sort);
    pagination.set_page(args.page);

    let view = pagination.view(&products.products());
    println!(
        "Sorted by {} | page {} of {} | showing {}-{} of {}",
        pagination.sort_option(),
        pagination.current_page(),
        view.page_count.max(1),
        view.display_start,
        view.display_end,
        view.total
    );
    for product in &view.items {
        println!(
            "  #{:<4} ${:>8.2}  {:.1}★  {}",
            product.id.unwrap_or_default(),
            product.price_or_zero(),
            product.rating_rate(),
            product.title
        );
    }
    Ok(())
}
