//! Set Printer Demo
//!
//! Fetches the sets and usage statistics for a Gen 2 species from the public
//! content store and prints them.
//!
//! Usage: print_sets [species] [format]
//!
//! Set `RUST_LOG=pkstrat_smogon=debug` to see cache hits and fetches.

use std::env;

use anyhow::Result;
use pkstrat_dex::Dex;
use pkstrat_smogon::{HttpTransport, Smogon};
use tracing_subscriber::EnvFilter;

const GEN2_SPECIES: &str = r#"[
    {"name": "Snorlax", "tier": "OU"},
    {"name": "Zapdos", "tier": "OU"},
    {"name": "Blastoise", "tier": "UU"},
    {"name": "Nidoking", "tier": "OU"},
    {"name": "Mewtwo", "tier": "Uber"}
]"#;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let species = env::args().nth(1).unwrap_or_else(|| "Snorlax".to_string());
    let format = env::args().nth(2);

    let gen2 = Dex::from_json(2, GEN2_SPECIES)?;
    let smogon = Smogon::new(HttpTransport::new(), false);

    let sets = smogon.sets(&gen2, &species, format.as_deref()).await?;
    if sets.is_empty() {
        println!("No sets for {}", species);
    }
    for set in &sets {
        println!("┌─ {}", set.name.as_deref().unwrap_or("(unnamed)"));
        if let Some(item) = &set.item {
            println!("│  Item: {}", item);
        }
        if let Some(ivs) = &set.ivs {
            let ivs: Vec<String> = ivs
                .iter()
                .map(|(stat, iv)| format!("{} {}", iv, stat.as_str()))
                .collect();
            println!("│  IVs: {}", ivs.join(" / "));
        }
        for name in &set.moves {
            println!("│  - {}", name);
        }
        println!("└─");
    }

    match smogon.stats(&gen2, &species, format.as_deref()).await? {
        Some(stats) => {
            let mut moves: Vec<_> = stats.moves.iter().collect();
            moves.sort_by(|a, b| b.1.total_cmp(a.1));
            println!("\nMost used moves:");
            for (name, usage) in moves.into_iter().take(6) {
                println!("  {:>6.2}%  {}", usage * 100.0, name);
            }
        }
        None => println!("\nNo usage statistics for {}", species),
    }

    Ok(())
}
