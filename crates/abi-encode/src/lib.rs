#![doc = include_str!("../README.md")]
#![doc(
    html_logo_url = "https://raw.githubusercontent.com/alloy-rs/core/main/assets/alloy.jpg",
    html_favicon_url = "https://raw.githubusercontent.com/alloy-rs/core/main/assets/favicon.ico"
)]
#![warn(missing_docs, rustdoc::all)]
#![cfg_attr(not(test), warn(unused_crate_dependencies))]

mod error;
pub use error::{AbiError, Result};

mod value;
pub use value::{abi_encode_single, AbiValue};

mod address;
pub use address::parse_address;
