//! # `ti84kit` main library
//!
//! This library turns TI-83 Plus / TI-84 Plus BASIC programs back into readable text.
//! Programs reach the host either as a bare token stream (e.g. captured from a link cable)
//! or wrapped in a variable file (`.8xp`).
//!
//! ## Architecture
//!
//! * `lang::tibasic` holds the token maps and the detokenizer.  Detokenization is total,
//!   every byte sequence produces some text, and it can be bounded by an output capacity.
//! * `fimg::ti8x` reads variable files and hands out the token stream of each program.
//! * `commands` runs the CLI subcommands.
//!
//! The token table is built once per process and shared read-only, so detokenizers
//! can run on any number of threads.
//!
//! ## Example
//!
//! ```
//! let (text,len) = ti84kit::lang::tibasic::decode_token_string(&[0x8D,0x41,0x11],64);
//! assert_eq!(text,"sin(A)");
//! assert_eq!(len,6);
//! ```

pub mod lang;
pub mod fimg;
pub mod commands;

use std::io::Read;
use log::{info,error};

type DYNERR = Box<dyn std::error::Error>;
type STDRESULT = Result<(),Box<dyn std::error::Error>>;

/// Read all bytes from a file, or from stdin if there is no path.
/// Reading from a console is refused, input has to be piped.
pub fn read_file_or_stdin(maybe_path: Option<&String>) -> Result<Vec<u8>,DYNERR> {
    let dat = match maybe_path {
        Some(path) => {
            info!("reading {}",path);
            std::fs::read(path)?
        },
        None => {
            if atty::is(atty::Stream::Stdin) {
                error!("line entry is not supported, please pipe something in");
                return Err(Box::new(commands::CommandError::InvalidCommand));
            }
            let mut dat = Vec::new();
            std::io::stdin().read_to_end(&mut dat)?;
            dat
        }
    };
    if dat.len()==0 {
        error!("did not receive any data");
        return Err(Box::new(commands::CommandError::InvalidCommand));
    }
    Ok(dat)
}

/// Format binary in columns of hex and ascii
pub fn block_to_string(start_addr: u16,block: &[u8]) -> String {
    let mut ans = String::new();
    for (row,slice) in block.chunks(16).enumerate() {
        let row_label = start_addr as usize + row*16;
        let txt: Vec<u8> = slice.iter().map(|c| match *c {
            x if x<32 => '.' as u8,
            x if x<127 => x,
            _ => '.' as u8
        }).collect();
        ans += &format!("{:04X} : ",row_label);
        for byte in slice {
            ans += &format!("{:02X} ",byte);
        }
        for _blank in slice.len()..16 {
            ans += "   ";
        }
        ans += &format!("| {}\n",String::from_utf8_lossy(&txt));
    }
    ans
}

#[test]
fn test_block_to_string() {
    let block: Vec<u8> = (0x30..0x44).collect();
    let expected = "0000 : 30 31 32 33 34 35 36 37 38 39 3A 3B 3C 3D 3E 3F | 0123456789:;<=>?\n\
0010 : 40 41 42 43                                     | @ABC\n";
    assert_eq!(block_to_string(0,&block),expected);
}
