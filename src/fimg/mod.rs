//! # File Images
//!
//! Containers that carry calculator variables between the calculator and a host.
//! At present this is the TI-83 Plus / TI-84 Plus variable file in `ti8x`,
//! which is read in order to get at the token stream of a program.

pub mod ti8x;

/// Enumerates file image errors.  The `Display` trait will print equivalent long message.
#[derive(thiserror::Error,Debug)]
pub enum Error {
    #[error("not a TI-83 Plus / TI-84 Plus variable file")]
    BadSignature,
    #[error("variable file is malformed: {0}")]
    Malformed(#[from] binrw::Error),
    #[error("no program variable found")]
    NoProgram,
    #[error("variable is not a program")]
    NotAProgram,
    #[error("token count runs past end of variable")]
    TokenCount
}
