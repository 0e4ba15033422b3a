use huffman_rs::{
    BitReader, BitWriter, ByteSink, CodeStats, CodeTable, FrequencyTable, HuffmanTree, Translator,
};
use std::env;
use std::fs::{self, File};
use std::io::BufReader;
use tracing_subscriber::EnvFilter;

/// Encodes a file, saves its code table next to it, reloads the table and
/// decodes the stream again.
///
/// Usage: cargo run --example roundtrip <filename>
fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args: Vec<String> = env::args().collect();

    if args.len() != 2 {
        eprintln!("Usage: {} <filename>", args[0]);
        std::process::exit(1);
    }

    let filename = &args[1];
    let data = fs::read(filename).unwrap_or_else(|_| {
        eprintln!("File \"{}\" not found.", filename);
        std::process::exit(1);
    });

    // Counting is the caller's job
    let mut counts = vec![0u64; 256];
    for &byte in &data {
        counts[byte as usize] += 1;
    }
    let table = FrequencyTable::from_counts(&counts).with_end_of_data();
    let config = *table.config();
    let tree = table.build().expect("Cannot build tree");

    let code_path = format!("{}.code", filename);
    let packed_path = format!("{}.short", filename);

    let mut code_file = File::create(&code_path).expect("Cannot create code file");
    tree.save(&mut code_file).expect("Error writing code file");

    let mut writer = BitWriter::new(File::create(&packed_path).expect("Cannot create output"));
    CodeTable::from_tree_with(&tree, config)
        .encode(data.iter().map(|&b| b as u32), &mut writer)
        .expect("Error encoding");
    drop(writer);

    // Decode with a tree rebuilt from the saved table
    let code_file = File::open(&code_path).expect("Cannot reopen code file");
    let reloaded =
        HuffmanTree::load_with(&config, BufReader::new(code_file)).expect("Invalid code file");

    let packed = File::open(&packed_path).expect("Cannot reopen output");
    let mut reader = BitReader::new(packed);
    let mut sink = ByteSink::new(Vec::with_capacity(data.len()));
    Translator::new(&reloaded)
        .with_config(config)
        .translate(&mut reader, &mut sink)
        .expect("Error decoding");

    if sink.into_inner() != data {
        eprintln!("Decoded output differs from the input");
        std::process::exit(1);
    }

    let stats = CodeStats::compute(&tree, &table);
    let packed_size = fs::metadata(&packed_path).map(|m| m.len()).unwrap_or(0);

    println!("\n=== Statistics ===");
    println!("Input bytes: {}", data.len());
    println!("Distinct symbols: {}", stats.leaves);
    println!("Longest code: {} bits", stats.max_depth);
    println!("Average code length: {:.3} bits", stats.average_code_length());
    println!("Packed bytes: {}", packed_size);
    println!("Compression ratio: {:.2}%", stats.compression_ratio());
}
