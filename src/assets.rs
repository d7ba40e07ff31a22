/// Bundled assets for gendemo
/// This module contains files that are embedded into the binary at compile time

/// The stub written to `src/demo.cc`, byte for byte
pub const DEMO_CC: &str = include_str!("assets/demo.cc");

/// Project headers the stub pulls in, in emission order
pub const PROJECT_INCLUDES: [&str; 5] = [
    "cryptowallet/validator.h",
    "cryptowallet/wallet.h",
    "config/settings.h",
    "bracha/node.h",
    "bracha/logging.h",
];

/// Get the stub content that should be written by `generate`
pub fn get_demo_cc_content() -> &'static str {
    DEMO_CC
}
