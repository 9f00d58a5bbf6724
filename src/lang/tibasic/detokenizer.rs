//! Module containing the TI-BASIC detokenizer

use log::{trace,debug};
use super::TokenTable;

/// Printable ASCII passes through when a byte is neither a prefix nor a mapped token.
const ASCII_RANGE: std::ops::RangeInclusive<u8> = 0x20..=0x7E;

/// Handles detokenization of TI-BASIC.
/// Decoding never fails, bytes that cannot be interpreted are dropped.
pub struct Detokenizer
{
	table: &'static TokenTable,
	capacity: Option<usize>
}

impl Detokenizer
{
	/// Create a new `Detokenizer` structure with unbounded output
	pub fn new() -> Self
	{
		Self {
			table: TokenTable::shared(),
			capacity: None
		}
	}
	/// Bound the output of `detokenize`, see `detokenize_bounded` for the meaning of `capacity`.
	pub fn set_capacity(&mut self,capacity: Option<usize>) {
		self.capacity = capacity;
	}
	/// Append `frag` if there is room for all of it
	fn append(code: &mut String,frag: &str,max_len: usize) {
		if code.len() + frag.len() <= max_len {
			*code += frag;
		} else {
			trace!("no room for `{}`, skipping",frag.escape_debug());
		}
	}
	fn scan(&self,img: &[u8],max_len: usize) -> String {
		let mut code = String::new();
		let mut addr = 0;
		let mut dropped = 0;
		while addr < img.len() && code.len() < max_len {
			let b = img[addr];
			// a prefix always takes the next byte with it, resolved or not
			if self.table.is_extended_prefix(b) && addr+1 < img.len() {
				match self.table.resolve_extended(b,img[addr+1]) {
					Some(frag) => Self::append(&mut code,&frag,max_len),
					None => {
						trace!("unknown token {:02X} {:02X} at offset {}",b,img[addr+1],addr);
						dropped += 2;
					}
				}
				addr += 2;
				continue;
			}
			if let Some(frag) = self.table.resolve_simple(b) {
				Self::append(&mut code,frag,max_len);
			} else if ASCII_RANGE.contains(&b) {
				code.push(b as char);
			} else {
				trace!("unknown token {:02X} at offset {}",b,addr);
				dropped += 1;
			}
			addr += 1;
		}
		if addr < img.len() {
			debug!("output limit reached after {} of {} bytes",addr,img.len());
		}
		debug!("detokenized {} bytes into {} characters, dropped {}",addr,code.len(),dropped);
		code
	}
	/// Detokenize from byte array into a UTF8 string, bounded by the capacity if one was set
	pub fn detokenize(&self,img: &[u8]) -> String {
		match self.capacity {
			Some(capacity) => self.detokenize_bounded(img,capacity).0,
			None => self.scan(img,usize::MAX)
		}
	}
	/// Detokenize as if writing into a terminated buffer of `capacity` bytes.
	/// The text is at most `capacity-1` bytes and ends on a token boundary.
	/// Returns the text and its length.
	pub fn detokenize_bounded(&self,img: &[u8],capacity: usize) -> (String,usize) {
		let code = self.scan(img,capacity.saturating_sub(1));
		let len = code.len();
		(code,len)
	}
}
