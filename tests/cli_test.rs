use assert_cmd::prelude::*; // Add methods on commands
use predicates::prelude::*; // Used for writing assertions
use std::process::{Command,Stdio}; // Run programs
use std::fs::File;
use std::io::Write;
use tempfile;

type DYNERR = Box<dyn std::error::Error>;

/// variable file holding `(name,type,tokens)` entries, 13 byte headers
fn variable_file(vars: &[(&str,u8,&[u8])]) -> Vec<u8> {
    let mut data = Vec::new();
    for (name,type_id,tokens) in vars {
        let mut var_data = u16::to_le_bytes(tokens.len() as u16).to_vec();
        var_data.extend_from_slice(tokens);
        data.extend_from_slice(&[13,0]);
        data.extend_from_slice(&u16::to_le_bytes(var_data.len() as u16));
        data.push(*type_id);
        let mut name_bytes = name.as_bytes().to_vec();
        name_bytes.resize(8,0);
        data.append(&mut name_bytes);
        data.extend_from_slice(&[0,0]);
        data.extend_from_slice(&u16::to_le_bytes(var_data.len() as u16));
        data.append(&mut var_data);
    }
    let mut ans = b"**TI83F*\x1a\x0a\x00".to_vec();
    let mut comment = b"cli test".to_vec();
    comment.resize(42,0);
    ans.append(&mut comment);
    ans.extend_from_slice(&u16::to_le_bytes(data.len() as u16));
    let checksum = data.iter().fold(0u16,|sum,b| sum.wrapping_add(*b as u16));
    ans.append(&mut data);
    ans.extend_from_slice(&u16::to_le_bytes(checksum));
    ans
}

fn program_file(name: &str,tokens: &[u8]) -> Vec<u8> {
    variable_file(&[(name,0x05,tokens)])
}

fn save(dir: &tempfile::TempDir,fname: &str,dat: &[u8]) -> Result<std::path::PathBuf,DYNERR> {
    let path = dir.path().join(fname);
    let mut f = File::create(&path)?;
    f.write_all(dat)?;
    Ok(path)
}

#[test]
fn detokenize_piped_tokens() -> Result<(),DYNERR> {
    let dir = tempfile::tempdir()?;
    let path = save(&dir,"capture.bin",&[0x41,0x3F,0x42])?;
    let mut cmd = Command::cargo_bin("ti84kit")?;
    cmd.arg("detokenize")
        .stdin(Stdio::from(File::open(&path)?))
        .assert()
        .success()
        .stdout("A\nB\n");
    Ok(())
}

#[test]
fn detokenize_with_capacity() -> Result<(),DYNERR> {
    let dir = tempfile::tempdir()?;
    let path = save(&dir,"capture.bin",&[0x8D,0x41,0x11])?;
    let mut cmd = Command::cargo_bin("ti84kit")?;
    cmd.arg("dtok")
        .arg("-t").arg("tok")
        .arg("-f").arg(&path)
        .arg("--capacity").arg("6")
        .assert()
        .success()
        .stdout("sin(A\n");
    Ok(())
}

#[test]
fn capacity_from_config() -> Result<(),DYNERR> {
    let dir = tempfile::tempdir()?;
    let path = save(&dir,"capture.bin",&[0x41,0x42,0x43])?;
    let mut cmd = Command::cargo_bin("ti84kit")?;
    cmd.arg("dtok")
        .arg("-f").arg(&path)
        .arg("-c").arg("{\"detokenizer\":{\"capacity\":3}}")
        .assert()
        .success()
        .stdout("AB\n");
    Ok(())
}

#[test]
fn detokenize_hex_text() -> Result<(),DYNERR> {
    let dir = tempfile::tempdir()?;
    let path = save(&dir,"capture.txt",b"BB CE 70 5C 00\n")?;
    let mut cmd = Command::cargo_bin("ti84kit")?;
    cmd.arg("dtok")
        .arg("--hex")
        .arg("-f").arg(&path)
        .assert()
        .success()
        .stdout("alpha+[A]\n");
    Ok(())
}

#[test]
fn detokenize_program_file() -> Result<(),DYNERR> {
    let dir = tempfile::tempdir()?;
    let tokens = [0x2A,0x48,0x49,0x2A,0x3F,0x8D,0x41,0x11];
    let path = save(&dir,"HELLO.8xp",&program_file("HELLO",&tokens))?;
    let mut cmd = Command::cargo_bin("ti84kit")?;
    cmd.arg("detokenize")
        .arg("-f").arg(&path)
        .assert()
        .success()
        .stdout("\"HI\"\nsin(A)\n");
    Ok(())
}

#[test]
fn detokenize_every_program() -> Result<(),DYNERR> {
    let dir = tempfile::tempdir()?;
    let vars: [(&str,u8,&[u8]);3] = [("A",0x05,&[0x41]),("B",0x04,&[0x42]),("C",0x06,&[0x43])];
    let path = save(&dir,"ABC.8xp",&variable_file(&vars))?;
    let mut cmd = Command::cargo_bin("ti84kit")?;
    cmd.arg("detokenize")
        .arg("-f").arg(&path)
        .assert()
        .success()
        .stdout("PROGRAM:A\nA\nPROGRAM:C\nC\n");
    Ok(())
}

#[test]
fn detokenize_named_program() -> Result<(),DYNERR> {
    let dir = tempfile::tempdir()?;
    let vars: [(&str,u8,&[u8]);2] = [("A",0x05,&[0x41]),("C",0x05,&[0x43])];
    let path = save(&dir,"AC.8xp",&variable_file(&vars))?;
    let mut cmd = Command::cargo_bin("ti84kit")?;
    cmd.arg("detokenize")
        .arg("-f").arg(&path)
        .arg("-n").arg("c")
        .assert()
        .success()
        .stdout("C\n");
    Ok(())
}

#[test]
fn capacity_of_zero_rejected() -> Result<(),DYNERR> {
    let dir = tempfile::tempdir()?;
    let path = save(&dir,"capture.bin",&[0x8D,0x41,0x11])?;
    let mut cmd = Command::cargo_bin("ti84kit")?;
    cmd.arg("dtok")
        .arg("-f").arg(&path)
        .arg("--capacity").arg("0")
        .assert()
        .failure()
        .stderr(predicate::str::contains("capacity"));
    Ok(())
}

#[test]
fn capacity_of_one_is_empty() -> Result<(),DYNERR> {
    let dir = tempfile::tempdir()?;
    let path = save(&dir,"capture.bin",&[0x8D,0x41,0x11])?;
    let mut cmd = Command::cargo_bin("ti84kit")?;
    cmd.arg("dtok")
        .arg("-f").arg(&path)
        .arg("--capacity").arg("1")
        .assert()
        .success()
        .stdout("");
    Ok(())
}

#[test]
fn program_not_found() -> Result<(),DYNERR> {
    let dir = tempfile::tempdir()?;
    let path = save(&dir,"HELLO.8xp",&program_file("HELLO",&[0x41]))?;
    let mut cmd = Command::cargo_bin("ti84kit")?;
    cmd.arg("detokenize")
        .arg("-f").arg(&path)
        .arg("-n").arg("OTHER")
        .assert()
        .failure()
        .stderr(predicate::str::contains("NoProgram"));
    Ok(())
}

#[test]
fn stat_program_file() -> Result<(),DYNERR> {
    let dir = tempfile::tempdir()?;
    let path = save(&dir,"HELLO.8xp",&program_file("HELLO",&[0x41,0x42]))?;
    let mut cmd = Command::cargo_bin("ti84kit")?;
    cmd.arg("stat")
        .arg("-f").arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"name\":\"HELLO\""))
        .stdout(predicate::str::contains("\"comment\":\"cli test\""))
        .stderr(predicate::str::contains("checksum OK"));
    Ok(())
}

#[test]
fn unpack_raw_tokens() -> Result<(),DYNERR> {
    let dir = tempfile::tempdir()?;
    let path = save(&dir,"HELLO.8xp",&program_file("HELLO",&[0x41,0x3F,0x42]))?;
    let mut cmd = Command::cargo_bin("ti84kit")?;
    let output = cmd.arg("unpack")
        .arg("-f").arg(&path)
        .arg("--raw")
        .output()?;
    assert!(output.status.success());
    assert_eq!(output.stdout,vec![0x41,0x3F,0x42]);
    Ok(())
}

#[test]
fn invalid_item_type() -> Result<(),DYNERR> {
    let dir = tempfile::tempdir()?;
    let path = save(&dir,"capture.bin",&[0x41])?;
    let mut cmd = Command::cargo_bin("ti84kit")?;
    cmd.arg("detokenize")
        .arg("-t").arg("8xq")
        .arg("-f").arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("8xq"));
    Ok(())
}

#[test]
fn empty_input() -> Result<(),DYNERR> {
    let mut cmd = Command::cargo_bin("ti84kit")?;
    cmd.arg("detokenize")
        .stdin(Stdio::null())
        .assert()
        .failure();
    Ok(())
}

#[test]
fn bash_completions() -> Result<(),DYNERR> {
    let mut cmd = Command::cargo_bin("ti84kit")?;
    cmd.arg("completions")
        .arg("-s").arg("bash")
        .assert()
        .success()
        .stdout(predicate::str::contains("ti84kit"));
    Ok(())
}
