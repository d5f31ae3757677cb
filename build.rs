//! Build script to generate embedded word lists
//!
//! Reads the solution list and the guess lexicon and generates Rust source
//! code with const arrays.

use std::env;
use std::fs;
use std::io::Write;
use std::path::Path;

fn main() {
    let out_dir = env::var("OUT_DIR").expect("OUT_DIR is set by cargo");

    generate_word_list(
        "data/solutions.txt",
        &Path::new(&out_dir).join("solutions.rs"),
        "SOLUTIONS",
        "Words a round may pick as its solution",
    );

    generate_word_list(
        "data/lexicon.txt",
        &Path::new(&out_dir).join("lexicon.rs"),
        "LEXICON",
        "Words accepted as guesses (superset of SOLUTIONS)",
    );

    println!("cargo:rerun-if-changed=data/solutions.txt");
    println!("cargo:rerun-if-changed=data/lexicon.txt");
}

fn generate_word_list(input_path: &str, output_path: &Path, const_name: &str, doc_comment: &str) {
    let content = fs::read_to_string(input_path)
        .unwrap_or_else(|e| panic!("Failed to read {input_path}: {e}"));

    let words: Vec<&str> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();
    let count = words.len();

    let mut output = fs::File::create(output_path)
        .unwrap_or_else(|e| panic!("Failed to create {}: {e}", output_path.display()));

    let mut source = String::new();
    source.push_str("// Generated word list\n\n");
    source.push_str(&format!("/// {doc_comment}\n"));
    source.push_str(&format!("pub const {const_name}: &[&str] = &[\n"));
    for word in words {
        source.push_str(&format!("    \"{word}\",\n"));
    }
    source.push_str("];\n\n");
    source.push_str(&format!("/// Number of words in {const_name}\n"));
    source.push_str(&format!("pub const {const_name}_COUNT: usize = {count};\n"));

    output
        .write_all(source.as_bytes())
        .unwrap_or_else(|e| panic!("Failed to write {}: {e}", output_path.display()));
}
