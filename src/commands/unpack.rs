use clap;
use std::io::Write;
use crate::fimg::ti8x::ProgramFile;
use crate::STDRESULT;

/// Write tokens as a hex dump if `console`, otherwise as raw bytes
fn write_tokens<W: Write>(out: &mut W,tokens: &[u8],console: bool) -> STDRESULT {
    if console {
        out.write_all(crate::block_to_string(0,tokens).as_bytes())?;
    } else {
        out.write_all(tokens)?;
    }
    Ok(())
}

/// Write the raw tokens of one program, hex dump if stdout is the console
pub fn unpack(cmd: &clap::ArgMatches) -> STDRESULT {
    let dat = crate::read_file_or_stdin(cmd.get_one::<String>("file"))?;
    let file = ProgramFile::from_bytes(&dat)?;
    let prog = file.program(cmd.get_one::<String>("name").map(|s| s.as_str()))?;
    let console = atty::is(atty::Stream::Stdout) && !cmd.get_flag("raw");
    write_tokens(&mut std::io::stdout(),prog.tokens()?,console)
}

#[test]
fn test_write_tokens() {
    let mut dump = Vec::new();
    write_tokens(&mut dump,&[0x41,0x3F,0x8D],true).unwrap();
    assert_eq!(String::from_utf8(dump).unwrap(),format!("0000 : 41 3F 8D {}| A?.\n"," ".repeat(39)));
    let mut raw = Vec::new();
    write_tokens(&mut raw,&[0x41,0x3F,0x8D],false).unwrap();
    assert_eq!(raw,vec![0x41,0x3F,0x8D]);
}
