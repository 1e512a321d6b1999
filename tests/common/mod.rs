#![allow(dead_code)]

use u_rulemine::data::{Dataset, ItemUniverse};
use u_rulemine::ga::{Chromosome, Gene, Rule};

pub const ITEMS: [&str; 6] = ["LEITE", "PAO", "MANTEIGA", "CAFE", "SUCO", "BOLO"];

/// Fifteen baskets over six items.
///
/// PAO occurs in 7 baskets, 4 of which also hold MANTEIGA.
/// SUCO and MANTEIGA never occur together.
pub fn market_basket() -> Dataset {
    let universe = ItemUniverse::new(ITEMS).unwrap();
    Dataset::from_names(
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
    )
    .unwrap()
}

/// Builds a rule from antecedent and consequent item names.
pub fn rule(data: &Dataset, antecedent: &[&str], consequent: &[&str]) -> Rule {
    let universe = data.universe();
    let mut genes = vec![Gene::None; universe.len()];
    for name in antecedent {
        genes[universe.lookup(name).unwrap().index()] = Gene::Antecedent;
    }
    for name in consequent {
        genes[universe.lookup(name).unwrap().index()] = Gene::Consequent;
    }
    Rule::from_chromosome(Chromosome::new(genes))
}
