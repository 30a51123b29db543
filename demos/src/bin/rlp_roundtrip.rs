//! Encodes and decodes a small nested structure, printing each step.
//!
//! Run with `cargo run -p demos --bin rlp_roundtrip`.

use evmcodec_keccak::keccak256;
use evmcodec_rlp::{decode, encode, Encodable};

fn main() {
    tracing_subscriber::fmt::init();

    let value = Encodable::List(vec![
        Encodable::str("dog"),
        Encodable::from(1024u64),
        Encodable::List(vec![Encodable::str("cat"), Encodable::Bytes(vec![])]),
    ]);

    let encoded = encode(&value).expect("value is representable as RLP");
    println!("encoded: 0x{}", hex::encode(&encoded));
    println!("keccak256(encoded): 0x{}", hex::encode(keccak256(&encoded)));

    let decoded = decode(&encoded).expect("just-encoded bytes always decode");
    let top = decoded.as_list().expect("top-level value is a list");
    println!("decoded {} top-level items, raw len {}", top.len(), decoded.raw().unwrap().len());
    for (i, item) in top.iter().enumerate() {
        match item.as_bytes() {
            Some(bytes) => println!("  [{i}] bytes: 0x{}", hex::encode(bytes)),
            None => println!("  [{i}] list with {} children", item.as_list().unwrap().len()),
        }
    }
}
