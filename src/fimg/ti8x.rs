//! ### TI-83 Plus / TI-84 Plus variable files (8xp)
//!
//! A variable file is a 55 byte header, a data section holding one or more variables,
//! and a checksum over the data section.  The `binrw` crate is used to read the binary
//! structures.  Only reading is supported.
//!
//! Program variables (type 5 or 6) hold a token count followed by the tokens, which can
//! be handed to `lang::tibasic::detokenizer::Detokenizer`.

use binrw::BinRead;
use binrw::io::Cursor;
use log::{info,warn,error};
use super::Error;

pub const SIGNATURE: &[u8;8] = b"**TI83F*";
pub const PROGRAM: u8 = 0x05;
pub const PROTECTED_PROGRAM: u8 = 0x06;
const HEADER_LEN: usize = 55;
const ARCHIVED: u8 = 0x80;

/// strings in the headers are NUL padded
fn padded_str(bytes: &[u8]) -> String {
    let end = bytes.iter().position(|b| *b==0).unwrap_or(bytes.len());
    String::from_utf8_lossy(&bytes[0..end]).to_string()
}

pub fn type_name(type_id: u8) -> &'static str {
    match type_id {
        0x00 => "real",
        0x01 => "list",
        0x02 => "matrix",
        0x03 => "equation",
        0x04 => "string",
        PROGRAM => "program",
        PROTECTED_PROGRAM => "protected program",
        0x07 => "picture",
        0x08 => "graph database",
        0x0C => "complex",
        0x0D => "complex list",
        0x15 => "application variable",
        0x17 => "group",
        _ => "unknown"
    }
}

#[derive(BinRead, Debug, Clone)]
#[br(little, magic = b"**TI83F*")]
struct Container {
    _signature2: [u8;3], // 1A 0A 00
    #[br(map = |bytes: [u8;42]| padded_str(&bytes))]
    comment: String,
    data_len: u16,
    #[br(count = data_len)]
    data: Vec<u8>,
    checksum: u16
}

#[derive(BinRead, Debug, Clone)]
#[br(little)]
#[br(assert(header_len == 11 || header_len == 13, "unexpected variable header length {}", header_len))]
pub struct Variable {
    header_len: u16,
    data_len: u16,
    pub type_id: u8,
    #[br(map = |bytes: [u8;8]| padded_str(&bytes))]
    pub name: String,
    /// only present with the 13 byte header
    #[br(if(header_len == 13))]
    pub version: u8,
    #[br(if(header_len == 13))]
    flags: u8,
    data_len2: u16,
    #[br(count = data_len)]
    pub data: Vec<u8>
}

impl Variable {
    pub fn is_program(&self) -> bool {
        self.type_id==PROGRAM || self.type_id==PROTECTED_PROGRAM
    }
    pub fn is_archived(&self) -> bool {
        self.flags & ARCHIVED > 0
    }
    /// Get the token stream of a program variable, which follows a 2 byte token count.
    pub fn tokens(&self) -> Result<&[u8],Error> {
        if !self.is_program() {
            error!("{} is a {}",self.name,type_name(self.type_id));
            return Err(Error::NotAProgram);
        }
        if self.data.len() < 2 {
            error!("program {} has no token count",self.name);
            return Err(Error::TokenCount);
        }
        let count = u16::from_le_bytes([self.data[0],self.data[1]]) as usize;
        if 2 + count > self.data.len() {
            error!("program {} claims {} tokens but has room for {}",self.name,count,self.data.len()-2);
            return Err(Error::TokenCount);
        }
        Ok(&self.data[2..2+count])
    }
}

/// Variable file as it was read, the checksum is not enforced.
pub struct ProgramFile {
    pub comment: String,
    pub variables: Vec<Variable>,
    /// checksum stored in the file
    pub checksum: u16,
    computed: u16
}

impl ProgramFile {
    /// is the data a variable file, checks the signature only
    pub fn test(dat: &[u8]) -> bool {
        dat.len() >= HEADER_LEN && dat[0..8] == SIGNATURE[..]
    }
    pub fn from_bytes(dat: &[u8]) -> Result<Self,Error> {
        if !Self::test(dat) {
            return Err(Error::BadSignature);
        }
        let container = Container::read(&mut Cursor::new(dat))?;
        info!("identified variable file `{}`",container.comment);
        let computed = container.data.iter().fold(0u16,|sum,b| sum.wrapping_add(*b as u16));
        if computed != container.checksum {
            warn!("checksum mismatch, stored {:04X}, computed {:04X}",container.checksum,computed);
        }
        let mut variables = Vec::new();
        let mut curs = Cursor::new(container.data.as_slice());
        while (curs.position() as usize) < container.data.len() {
            let var = Variable::read(&mut curs)?;
            if var.data_len != var.data_len2 {
                warn!("variable {} has inconsistent lengths {} and {}",var.name,var.data_len,var.data_len2);
            }
            variables.push(var);
        }
        if HEADER_LEN + container.data.len() + 2 < dat.len() {
            warn!("ignoring {} bytes after checksum",dat.len() - HEADER_LEN - container.data.len() - 2);
        }
        Ok(Self {
            comment: container.comment,
            variables,
            checksum: container.checksum,
            computed
        })
    }
    pub fn computed_checksum(&self) -> u16 {
        self.computed
    }
    pub fn checksum_ok(&self) -> bool {
        self.computed == self.checksum
    }
    /// Program variables in file order
    pub fn programs(&self) -> Vec<&Variable> {
        self.variables.iter().filter(|v| v.is_program()).collect()
    }
    /// Find a program by name, or the first program if `name` is None
    pub fn program(&self,name: Option<&str>) -> Result<&Variable,Error> {
        let found = match name {
            Some(n) => self.programs().into_iter().find(|v| v.name.eq_ignore_ascii_case(n)),
            None => self.programs().into_iter().next()
        };
        found.ok_or(Error::NoProgram)
    }
    pub fn to_json(&self) -> serde_json::Value {
        let vars: Vec<serde_json::Value> = self.variables.iter().map(|v| serde_json::json!({
            "name": v.name,
            "type": type_name(v.type_id),
            "type_id": v.type_id,
            "length": v.data.len(),
            "version": v.version,
            "archived": v.is_archived()
        })).collect();
        serde_json::json!({
            "comment": self.comment,
            "checksum": {
                "stored": format!("{:04X}",self.checksum),
                "computed": format!("{:04X}",self.computed),
                "ok": self.checksum_ok()
            },
            "variables": vars
        })
    }
}
