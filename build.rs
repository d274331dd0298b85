//! Build script to generate embedded word lists
//!
//! Reads word list files and generates Rust source code with const arrays.

use std::env;
use std::fs;
use std::io::Write;
use std::path::Path;

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();

    // Generate target list (ordered, versioned)
    generate_word_list(
        "data/targets.txt",
        &Path::new(&out_dir).join("targets.rs"),
        "TARGETS",
        "Ordered target words, one round per entry",
    );

    // Generate allowed guess dictionary
    generate_word_list(
        "data/allowed.txt",
        &Path::new(&out_dir).join("allowed.rs"),
        "ALLOWED",
        "Dictionary of accepted guesses",
    );

    // Rebuild if word lists change
    println!("cargo:rerun-if-changed=data/targets.txt");
    println!("cargo:rerun-if-changed=data/allowed.txt");
}

fn generate_word_list(input_path: &str, output_path: &Path, const_name: &str, doc_comment: &str) {
    let content = fs::read_to_string(input_path)
        .unwrap_or_else(|e| panic!("Failed to read {input_path}: {e}"));

    // An optional `# version: <tag>` header names the list revision
    let mut version = String::from("0");
    let mut words: Vec<&str> = Vec::new();
    for line in content.lines() {
        let line = line.trim();
        if let Some(header) = line.strip_prefix('#') {
            if let Some(tag) = header.trim().strip_prefix("version:") {
                version = tag.trim().to_string();
            }
            continue;
        }
        if !line.is_empty() {
            words.push(line);
        }
    }
    let count = words.len();

    let mut output = fs::File::create(output_path)
        .unwrap_or_else(|e| panic!("Failed to create {}: {e}", output_path.display()));

    writeln!(output, "// Generated word list").unwrap();
    writeln!(output, "//").unwrap();
    writeln!(output, "// {doc_comment}").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// {doc_comment}").unwrap();
    writeln!(output, "pub const {const_name}: &[&str] = &[").unwrap();

    for word in words {
        writeln!(output, "    \"{word}\",").unwrap();
    }

    writeln!(output, "];").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// Number of words in {const_name}").unwrap();
    writeln!(output, "pub const {const_name}_COUNT: usize = {count};").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// Revision tag of {const_name}").unwrap();
    writeln!(output, "pub const {const_name}_VERSION: &str = \"{version}\";").unwrap();
}
