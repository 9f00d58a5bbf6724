//! # TI-BASIC detokenization
//!
//! Programs on the TI-83 Plus / TI-84 Plus are stored as a stream of one and two byte tokens.
//! A two-byte token starts with one of a closed set of prefix bytes, and the byte after the
//! prefix selects the token within that prefix's namespace.  One prefix (0xBB) is shared by
//! several namespaces, which are searched in a fixed order.  Two prefixes (0xAA, 0x60) are
//! numbered rather than mapped, e.g. `AA 03` is `Str3`.
//!
//! The maps live in `token_maps`, `TokenTable` arranges them into namespaces, and
//! `detokenizer::Detokenizer` walks a token stream.

mod token_maps;
pub mod detokenizer;
pub mod settings;

use std::borrow::Cow;
use std::collections::HashMap;
use std::sync::OnceLock;
use token_maps::*;

/// One way of resolving the byte that follows a prefix.
pub enum Namespace {
    /// suffix is looked up in a map
    Map(HashMap<u8,&'static str>),
    /// suffix 0-9 is appended to the stem, anything else is unresolved
    Numbered(&'static str)
}

impl Namespace {
    pub fn resolve(&self,suffix: u8) -> Option<Cow<'static,str>> {
        match self {
            Self::Map(map) => map.get(&suffix).map(|txt| Cow::Borrowed(*txt)),
            Self::Numbered(stem) if suffix <= MAX_NUMBERED_SUFFIX => Some(Cow::Owned(format!("{}{}",stem,suffix))),
            Self::Numbered(_) => None
        }
    }
}

/// Immutable registry of every token this crate can decode.
/// Build one with `new`, or borrow the process-wide instance with `shared`.
pub struct TokenTable {
    single: HashMap<u8,&'static str>,
    /// namespaces belonging to each prefix, in the order they are searched
    extended: HashMap<u8,Vec<Namespace>>
}

impl TokenTable {
    pub fn new() -> Self {
        let mut extended: HashMap<u8,Vec<Namespace>> = HashMap::new();
        extended.insert(MATRIX_PREFIX,vec![Namespace::Map(HashMap::from(MATRIX_MAP))]);
        extended.insert(LIST_PREFIX,vec![Namespace::Map(HashMap::from(LIST_MAP))]);
        extended.insert(EQUATION_PREFIX,vec![Namespace::Map(HashMap::from(EQUATION_MAP))]);
        extended.insert(STAT_PREFIX,vec![Namespace::Map(HashMap::from(STAT_MAP))]);
        // math and templates shadow the Greek letters
        extended.insert(EXTENDED_PREFIX,vec![
            Namespace::Map(HashMap::from(EXT_MATH_MAP)),
            Namespace::Map(HashMap::from(GREEK_MAP))
        ]);
        extended.insert(STRING_PREFIX,vec![Namespace::Numbered("Str")]);
        extended.insert(PICTURE_PREFIX,vec![Namespace::Numbered("Pic")]);
        Self {
            single: HashMap::from(SINGLE_MAP),
            extended
        }
    }
    /// The table shared by all detokenizers in this process, built on first use.
    pub fn shared() -> &'static TokenTable {
        static TABLE: OnceLock<TokenTable> = OnceLock::new();
        TABLE.get_or_init(TokenTable::new)
    }
    /// Is this byte one of the two-byte token introducers.
    /// This is true even for prefixes that have no namespace.
    pub fn is_extended_prefix(&self,byte: u8) -> bool {
        PREFIXES.contains(&byte)
    }
    pub fn resolve_simple(&self,byte: u8) -> Option<&'static str> {
        self.single.get(&byte).copied()
    }
    /// Search the namespaces of `prefix` in order, first match wins.
    pub fn resolve_extended(&self,prefix: u8,suffix: u8) -> Option<Cow<'static,str>> {
        self.extended.get(&prefix)?.iter().find_map(|ns| ns.resolve(suffix))
    }
}

/// Decode `tokens` into at most `capacity` bytes of C-style buffer, i.e., the text is
/// limited to `capacity-1` bytes with room left for a terminator.
/// Returns the text and its length.  Tokens that do not fit are skipped whole.
pub fn decode_token_string(tokens: &[u8],capacity: usize) -> (String,usize) {
    detokenizer::Detokenizer::new().detokenize_bounded(tokens,capacity)
}
