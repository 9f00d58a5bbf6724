use clap;
use colored::Colorize;
use serde::Serialize;
use crate::fimg::ti8x::ProgramFile;
use crate::{STDRESULT,DYNERR};

fn json_string(obj: &serde_json::Value,indent: Option<u16>) -> Result<String,DYNERR> {
    match indent {
        Some(spaces) => {
            let indentation = vec![b' ';spaces as usize];
            let mut buf = Vec::new();
            let fmt = serde_json::ser::PrettyFormatter::with_indent(&indentation);
            let mut ser = serde_json::Serializer::with_formatter(&mut buf,fmt);
            obj.serialize(&mut ser)?;
            Ok(String::from_utf8(buf)?)
        },
        None => Ok(obj.to_string())
    }
}

pub fn stat(cmd: &clap::ArgMatches) -> STDRESULT {
    let dat = crate::read_file_or_stdin(cmd.get_one::<String>("file"))?;
    let file = ProgramFile::from_bytes(&dat)?;
    println!("{}",json_string(&file.to_json(),cmd.get_one::<u16>("indent").copied())?);
    if file.checksum_ok() {
        eprintln!("\u{2713} {}","checksum OK".green());
    } else {
        eprintln!("! {}","checksum mismatch".bright_yellow());
    }
    return Ok(());
}

#[test]
fn test_json_indent() {
    let obj = serde_json::json!({"a": [1]});
    assert_eq!(json_string(&obj,None).unwrap(),"{\"a\":[1]}");
    assert_eq!(json_string(&obj,Some(2)).unwrap(),"{\n  \"a\": [\n    1\n  ]\n}");
}
