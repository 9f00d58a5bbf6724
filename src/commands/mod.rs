//! # CLI Subcommands
//!
//! Contains modules that run the subcommands.

pub mod detokenize;
pub mod stat;
pub mod unpack;
pub mod completions;

use std::str::FromStr;

#[derive(thiserror::Error,Debug)]
pub enum CommandError {
    #[error("Item type is unknown")]
    UnknownItemType,
    #[error("Command could not be interpreted")]
    InvalidCommand
}

/// Kinds of input the subcommands distinguish.
#[derive(PartialEq,Clone,Copy,Debug)]
pub enum ItemType {
    /// decide from the content
    Auto,
    /// bare token stream
    Tokens,
    /// variable file wrapping one or more programs
    ProgramFile
}

impl FromStr for ItemType {
    type Err = CommandError;
    fn from_str(s: &str) -> Result<Self,Self::Err> {
        match s {
            "auto" => Ok(Self::Auto),
            "tok" => Ok(Self::Tokens),
            "8xp" => Ok(Self::ProgramFile),
            _ => Err(CommandError::UnknownItemType)
        }
    }
}

impl ItemType {
    /// Resolve `Auto` by looking for the variable file signature
    pub fn resolve(self,dat: &[u8]) -> Self {
        match self {
            Self::Auto => match crate::fimg::ti8x::ProgramFile::test(dat) {
                true => Self::ProgramFile,
                false => Self::Tokens
            },
            typ => typ
        }
    }
}

#[test]
fn test_item_type() {
    assert_eq!(ItemType::from_str("8xp").unwrap(),ItemType::ProgramFile);
    assert!(ItemType::from_str("atok").is_err());
    assert_eq!(ItemType::Auto.resolve(&[0x41,0x42]),ItemType::Tokens);
    assert_eq!(ItemType::Tokens.resolve(b"**TI83F*"),ItemType::Tokens);
}
