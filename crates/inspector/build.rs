//! Build script generating companion class descriptors from metadata JSON
//!
//! Every `metadata/*.json` file describes one companion class. All of them are
//! written as `'static` `ClassDescriptor` items into `OUT_DIR/companions_gen.rs`,
//! which the models module includes.

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

fn main() {
    println!("cargo:rerun-if-changed=metadata");

    let metadata_dir = Path::new("metadata");
    let out_dir = PathBuf::from(std::env::var("OUT_DIR").expect("OUT_DIR not set"));
    let output_rs = out_dir.join("companions_gen.rs");

    let mut files: Vec<PathBuf> = match fs::read_dir(metadata_dir) {
        Ok(entries) => entries
            .map(|entry| entry.expect("Failed to read entry").path())
            .filter(|path| path.extension().is_some_and(|ext| ext == "json"))
            .collect(),
        Err(_) => {
            println!("cargo:warning=Metadata directory not found, generating no companions");
            Vec::new()
        }
    };
    // Stable output regardless of directory order
    files.sort();

    let mut code = header();
    for path in &files {
        println!("cargo:rerun-if-changed={}", path.display());
        match load_companion(path) {
            Ok(companion) => {
                code.push_str(&generate_class(&companion));
                code.push('\n');
            }
            Err(e) => panic!("Failed to generate companion from {}: {}", path.display(), e),
        }
    }

    fs::write(&output_rs, code).expect("Failed to write companions_gen.rs");
}

// ============================================================================
// JSON Schema Types
// ============================================================================

#[derive(Debug, Deserialize)]
struct CompanionJson {
    class_name: String,
    const_name: String,
    #[serde(default)]
    members: Vec<MemberJson>,
}

#[derive(Debug, Deserialize)]
struct MemberJson {
    name: String,
    rust_type: String,
    #[serde(default)]
    visibility: Option<String>,
    #[serde(default)]
    binding: Option<String>,
    #[serde(default)]
    required: bool,
    display: Option<DisplayJson>,
    string_length: Option<StringLengthJson>,
}

#[derive(Debug, Deserialize, Default)]
struct DisplayJson {
    name: Option<String>,
    short_name: Option<String>,
    description: Option<String>,
}

#[derive(Debug, Deserialize)]
struct StringLengthJson {
    #[serde(default)]
    min: usize,
    max: usize,
}

fn load_companion(path: &Path) -> Result<CompanionJson, Box<dyn std::error::Error>> {
    let contents = fs::read_to_string(path)?;
    let companion: CompanionJson = serde_json::from_str(&contents)?;
    Ok(companion)
}

// ============================================================================
// Code Generation
// ============================================================================

fn header() -> String {
    String::from(
        "// ============================================================================\n\
         // AUTO-GENERATED FROM metadata/*.json - DO NOT EDIT MANUALLY\n\
         // ============================================================================\n\n\
         #[allow(unused_imports)]\n\
         use model_metadata::{Binding, ClassDescriptor, DisplayLabel, MemberDescriptor, Visibility};\n\
         #[allow(unused_imports)]\n\
         use crate::kinds::{Required, StringLength};\n\n",
    )
}

fn generate_class(companion: &CompanionJson) -> String {
    let mut code = format!(
        "/// Companion class {}\n\
         pub static {}: ClassDescriptor = ClassDescriptor {{\n\
         \x20   name: \"{}\",\n\
         \x20   annotations: &[],\n\
         \x20   members: &[\n",
        companion.class_name,
        companion.const_name,
        escape_string(&companion.class_name),
    );

    for member in &companion.members {
        code.push_str(&generate_member(member));
    }

    code.push_str("    ],\n};\n");
    code
}

fn generate_member(member: &MemberJson) -> String {
    let i = "        ";
    format!(
        "{i}MemberDescriptor {{\n\
         {i}    name: \"{}\",\n\
         {i}    rust_type: \"{}\",\n\
         {i}    visibility: Visibility::{},\n\
         {i}    binding: Binding::{},\n\
         {i}    annotations: &[{}],\n\
         {i}}},\n",
        escape_string(&member.name),
        escape_string(&member.rust_type),
        to_pascal_case(member.visibility.as_deref().unwrap_or("public")),
        to_pascal_case(member.binding.as_deref().unwrap_or("instance")),
        generate_annotations(member),
        i = i
    )
}

fn generate_annotations(member: &MemberJson) -> String {
    let mut annotations = Vec::new();

    if let Some(display) = &member.display {
        annotations.push(format!(
            "&DisplayLabel {{ name: {}, short_name: {}, description: {} }}",
            option_str(&display.name),
            option_str(&display.short_name),
            option_str(&display.description),
        ));
    }

    if let Some(length) = &member.string_length {
        annotations.push(format!(
            "&StringLength {{ min: {}, max: {} }}",
            length.min, length.max
        ));
    }

    if member.required {
        annotations.push("&Required".to_string());
    }

    annotations.join(", ")
}

// ============================================================================
// Helper functions
// ============================================================================

fn to_pascal_case(s: &str) -> String {
    s.split('_')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                None => String::new(),
                Some(c) => c.to_uppercase().chain(chars).collect(),
            }
        })
        .collect()
}

fn option_str(opt: &Option<String>) -> String {
    match opt {
        Some(s) => format!("Some(\"{}\")", escape_string(s)),
        None => "None".to_string(),
    }
}

fn escape_string(s: &str) -> String {
    s.replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
        .replace('\r', "\\r")
        .replace('\t', "\\t")
}
