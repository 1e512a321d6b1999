//! Mines the fifteen-basket grocery dataset and prints the search progress.
//!
//! ```text
//! RUST_LOG=debug cargo run --example market_basket -- 42
//! ```

use u_rulemine::data::{Dataset, ItemUniverse};
use u_rulemine::ga::{GaConfig, GaRunner, GenerationStats};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let seed = std::env::args()
        .nth(1)
        .map(|s| s.parse::<u64>())
        .transpose()?;

    let universe = ItemUniverse::new(["LEITE", "PAO", "MANTEIGA", "CAFE", "SUCO", "BOLO"])?;
    let data = Dataset::from_names(
        universe,
        &[
            vec!["LEITE", "PAO", "MANTEIGA"],
            vec!["PAO", "MANTEIGA", "CAFE"],
            vec!["PAO", "MANTEIGA"],
            vec!["LEITE", "PAO", "MANTEIGA", "BOLO"],
            vec!["PAO", "CAFE"],
            vec!["PAO", "SUCO"],
            vec!["LEITE", "PAO", "BOLO"],
            vec!["LEITE", "CAFE"],
            vec!["CAFE", "BOLO"],
            vec!["SUCO", "BOLO"],
            vec!["LEITE", "SUCO"],
            vec!["CAFE", "MANTEIGA", "LEITE"],
            vec!["LEITE", "BOLO"],
            vec!["CAFE", "SUCO"],
            vec!["LEITE", "CAFE", "BOLO"],
        ],
    )?;

    let mut config = GaConfig::default();
    config.seed = seed;

    let mut report = |s: &GenerationStats| {
        if s.generation % 10 == 0 {
            println!(
                "gen {:>3}  best {:.4}  mean {:.4}  support {:.4}  confidence {:.4}",
                s.generation, s.best_fitness, s.mean_fitness, s.best_support, s.best_confidence
            );
        }
    };
    let result = GaRunner::run_with_sink(&data, &config, &mut report)?;

    println!("\nbest rule: {}", result.best.describe(data.universe()));
    println!(
        "support {:.4}, confidence {:.4}",
        result.best.support(),
        result.best.confidence()
    );

    println!("\ntop rules:");
    for rule in result.top_rules(5) {
        println!("  {}", rule.describe(data.universe()));
    }

    Ok(())
}
