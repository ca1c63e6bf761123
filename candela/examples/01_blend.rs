use std::sync::Arc;

use candela::{Candela, FetchOptions};
use candela_mock::{MemoryStore, MockSource};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    // 1. Build the orchestrator over the mock source and an in-memory store.
    let candela = Candela::builder()
        .with_source(Arc::new(MockSource::new()))
        .with_store(Arc::new(MemoryStore::new()))
        .build()?;

    // 2. Blend two tickers with explicit weights; an unweighted list
    //    ("AAPL,MSFT") would use the plain average instead.
    let blended = candela
        .download("AAPL:2,MSFT:3", &FetchOptions::default())
        .await;

    for c in &blended {
        println!(
            "{} open={:.2} close={:.2} vol={}",
            c.date, c.open, c.close, c.volume
        );
    }

    Ok(())
}
