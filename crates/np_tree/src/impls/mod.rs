//! Provide [`Structure`](crate::Structure) implementations for foreign types.
//!
//! ## Implemented Menu
//!
//! - serde_json: ("json" feature)
//!     - `serde_json::Value`, with `serde_json::Map<String, Value>` as its mapping.

// -----------------------------------------------------------------------------
// Modules

crate::cfg::json! {
    mod json;
}
