//! Embeds the word lists at compile time
//!
//! Each data/*.txt list becomes a generated module in OUT_DIR holding a
//! const string-slice array plus its length.

use std::env;
use std::fs;
use std::path::PathBuf;

const LISTS: &[(&str, &str, &str)] = &[
    ("data/roots.txt", "ROOTS", "Eight-letter root word candidates"),
    ("data/dictionary.txt", "DICTIONARY", "Accepted English words"),
];

fn main() {
    let out_dir = PathBuf::from(env::var_os("OUT_DIR").expect("OUT_DIR not set"));

    for &(input, const_name, doc) in LISTS {
        let module = render_list_module(input, const_name, doc);
        let target = out_dir.join(format!("{}.rs", const_name.to_lowercase()));
        fs::write(&target, module)
            .unwrap_or_else(|e| panic!("Failed to write {}: {e}", target.display()));
        println!("cargo:rerun-if-changed={input}");
    }
}

fn render_list_module(input: &str, const_name: &str, doc: &str) -> String {
    let raw =
        fs::read_to_string(input).unwrap_or_else(|e| panic!("Failed to read {input}: {e}"));

    let words: Vec<&str> = raw
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();

    let mut module = format!("/// {doc}\npub const {const_name}: &[&str] = &[\n");
    for word in &words {
        module.push_str("    ");
        module.push_str(&format!("{word:?}"));
        module.push_str(",\n");
    }
    module.push_str("];\n\n");
    module.push_str(&format!(
        "/// Number of words in {const_name}\npub const {const_name}_COUNT: usize = {};\n",
        words.len()
    ));
    module
}
