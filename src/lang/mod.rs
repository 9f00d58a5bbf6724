//! # Language Module
//!
//! Language specific operations such as detokenization are in the submodules,
//! at present this is only `tibasic`.  Helpers shared by the settings parsers are here.

pub mod tibasic;

use thiserror::Error;

#[derive(Error,Debug)]
pub enum Error {
    #[error("Settings could not be parsed")]
    Settings
}

/// Try to update an integer from a serde `Value` presumed to be an object.
/// Nothing happens unless `key` is found and its value is an integer.
pub fn update_json_i64(maybe_obj: &serde_json::Value, key: &str, curr: &mut i64) {
    if let Some(obj) = maybe_obj.as_object() {
        if let Some(x) = obj.get(key) {
            if let Some(val) = x.as_i64() {
                *curr = val;
            }
        }
    }
}
