use std::process;

use conj_core::pos::{self, gloss};
use conj_core::{conjugate, Conjugations, Variant};

use super::config_ops::load_rules;

pub fn conjugate_cmd(word: &str, tag: &str, rules: Option<&str>, json: bool) {
    let table = load_rules(rules);
    let class = pos::resolve(tag);
    let Some(c) = conjugate(&table, word, class) else {
        eprintln!("{word}: no conjugations for '{tag}' ({class})");
        process::exit(1);
    };

    if json {
        let out = die!(serde_json::to_string_pretty(&c), "Error: {}");
        println!("{out}");
    } else {
        print_table(&c);
    }
}

fn print_table(c: &Conjugations) {
    println!(
        "{:<18} {:>2}  {} | {} | {} | {}",
        "category", "#", "plain", "formal", "negative", "negative formal"
    );
    for (category, variants) in c.iter() {
        for (i, v) in variants.iter().enumerate() {
            println!(
                "{:<18} {:>2}  {} | {} | {} | {}",
                category.name(),
                i + 1,
                face(v, false, false),
                face(v, false, true),
                face(v, true, false),
                face(v, true, true)
            );
        }
    }
}

fn face(v: &Variant, negative: bool, formal: bool) -> &str {
    v.face(negative, formal).unwrap_or("-")
}

pub fn pos_cmd(tag: &str) {
    let class = pos::resolve(tag);
    let label = gloss(tag).unwrap_or("-");
    if class.is_inflectable() {
        println!("{tag}: {class} (id {}), {label}", class.id());
    } else {
        println!("{tag}: uninflectable, {label}");
    }
}
