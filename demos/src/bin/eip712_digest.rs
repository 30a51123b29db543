//! Computes the signing digest for the canonical EIP-712 "Mail" example.
//!
//! Run with `cargo run -p demos --bin eip712_digest`.

use evmcodec_eip712::{eip712_digest, eip712_encode_type, TypedData};
use serde_json::json;

fn main() {
    tracing_subscriber::fmt::init();

    let document = json!({
        "types": {
            "EIP712Domain": [
                {"name": "name", "type": "string"},
                {"name": "version", "type": "string"},
                {"name": "chainId", "type": "uint256"},
                {"name": "verifyingContract", "type": "address"}
            ],
            "Person": [
                {"name": "name", "type": "string"},
                {"name": "wallet", "type": "address"}
            ],
            "Mail": [
                {"name": "from", "type": "Person"},
                {"name": "to", "type": "Person"},
                {"name": "contents", "type": "string"}
            ]
        },
        "primaryType": "Mail",
        "domain": {
            "name": "Ether Mail",
            "version": "1",
            "chainId": 1,
            "verifyingContract": "0xCcCCccccCCCCcCCCCCCcCcCccCcCCCcCcccccccC"
        },
        "message": {
            "from": {"name": "Cow", "wallet": "0xCD2a3d9F938E13CD947Ec05AbC7FE734Df8DD826"},
            "to": {"name": "Bob", "wallet": "0xbBbBBBBbbBBBbbbBbbBbbbbBBbBbbbbBbBbbBBbB"},
            "contents": "Hello, Bob!"
        }
    });

    let typed_data: TypedData = serde_json::from_value(document).expect("well-formed typed-data document");

    let type_string = eip712_encode_type(&typed_data, "Mail").expect("Mail is declared in types");
    println!("canonical type string: {type_string}");

    let digest = eip712_digest(&typed_data).expect("all referenced types and fields resolve");
    println!("signing digest: 0x{}", hex::encode(digest));
}
