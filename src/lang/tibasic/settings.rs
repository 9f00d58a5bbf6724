//! Parse settings string sent by any client.
//!
//! The CLI checks for specific keys that may affect detokenization.
//! Keys that are not recognized are ignored, values with the wrong type leave the default.

use serde_json;
use log::{error,warn};
use crate::DYNERR;
use crate::lang::{self,update_json_i64};

#[derive(Clone)]
pub struct Detokenizer {
    /// size of the output buffer including the terminator, 0 means unbounded
    pub capacity: i64
}
#[derive(Clone)]
pub struct Settings {
    pub detokenizer: Detokenizer
}

impl Settings {
    pub fn new() -> Self {
        Self {
            detokenizer : Detokenizer {
                capacity: 0
            }
        }
    }
    /// Capacity in the form wanted by `Detokenizer::set_capacity`
    pub fn capacity(&self) -> Option<usize> {
        match self.detokenizer.capacity {
            0 => None,
            c => Some(c as usize)
        }
    }
}

pub fn parse(json: &str) -> Result<Settings,DYNERR> {
    let mut ans = Settings::new();
    let root = match serde_json::from_str::<serde_json::Value>(json) {
        Ok(root) => root,
        Err(e) => {
            error!("settings are not valid JSON: {}",e);
            return Err(Box::new(lang::Error::Settings));
        }
    };
    if let Some(obj) = root.as_object() {
        for (key,val) in obj {
            match key.as_str() {
                "detokenizer" => {
                    update_json_i64(val,"capacity",&mut ans.detokenizer.capacity);
                },
                _ => {}
            }
        }
    }
    if ans.detokenizer.capacity < 0 {
        warn!("negative capacity {} ignored",ans.detokenizer.capacity);
        ans.detokenizer.capacity = 0;
    }
    Ok(ans)
}
