//! CLI error handling specs.

use crate::prelude::*;

#[test]
fn hidori_rejects_a_destination_without_an_at_sign() {
    hidori()
        .args(&["web-1.example", "hello"])
        .fails()
        .stderr_has("must be `user@target[:port]`");
}

#[test]
fn hidori_rejects_an_unknown_module() {
    hidori()
        .args(&["deploy@web-1.example", "not-a-real-module"])
        .fails()
        .stderr_has("unknown module `not-a-real-module`");
}

#[test]
fn hidori_rejects_a_malformed_key_value_argument() {
    hidori()
        .args(&["deploy@web-1.example", "hello", "not-key-value"])
        .fails()
        .stderr_has("must be `key=value`");
}
