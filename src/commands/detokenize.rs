//! ## Detokenize subcommand
//!
//! Reads a token stream or variable file and writes the program text to stdout.

use std::str::FromStr;
use log::{debug,error};
use super::ItemType;
use crate::fimg::{self,ti8x::ProgramFile};
use crate::lang::tibasic::detokenizer::Detokenizer;
use crate::lang::tibasic::settings;
use crate::{STDRESULT,DYNERR};
const RCH: &str = "unreachable was reached";

/// Hex text to bytes, whitespace is ignored
fn from_hex_text(dat: &[u8]) -> Result<Vec<u8>,DYNERR> {
    let cleaned: Vec<u8> = dat.iter().filter(|b| !b.is_ascii_whitespace()).copied().collect();
    match hex::decode(&cleaned) {
        Ok(ans) => Ok(ans),
        Err(e) => {
            error!("input is not hex: {}",e);
            Err(Box::new(e))
        }
    }
}

fn output(program: &str) {
    for line in program.lines() {
        println!("{}",line);
    }
}

pub fn detokenize(cmd: &clap::ArgMatches) -> STDRESULT {
    let typ = ItemType::from_str(cmd.get_one::<String>("type").expect(RCH))?;
    let mut config = match cmd.get_one::<String>("config") {
        Some(json) => settings::parse(json)?,
        None => settings::Settings::new()
    };
    if let Some(capacity) = cmd.get_one::<usize>("capacity") {
        config.detokenizer.capacity = *capacity as i64;
    }
    let mut dat = crate::read_file_or_stdin(cmd.get_one::<String>("file"))?;
    if cmd.get_flag("hex") {
        dat = from_hex_text(&dat)?;
    }
    let mut detokenizer = Detokenizer::new();
    detokenizer.set_capacity(config.capacity());
    match typ.resolve(&dat) {
        ItemType::ProgramFile => {
            let file = ProgramFile::from_bytes(&dat)?;
            let programs = match cmd.get_one::<String>("name") {
                Some(name) => vec![file.program(Some(name))?],
                None => file.programs()
            };
            if programs.len()==0 {
                error!("variable file has no programs");
                return Err(Box::new(fimg::Error::NoProgram));
            }
            for prog in &programs {
                if programs.len() > 1 {
                    println!("PROGRAM:{}",prog.name);
                }
                output(&detokenizer.detokenize(prog.tokens()?));
            }
        },
        _ => {
            debug!("treating input as a bare token stream");
            output(&detokenizer.detokenize(&dat));
        }
    }
    Ok(())
}

#[test]
fn test_hex_text() {
    assert_eq!(from_hex_text(b"8D 41\n11\n").unwrap(),vec![0x8D,0x41,0x11]);
    assert!(from_hex_text(b"8D4").is_err());
}
