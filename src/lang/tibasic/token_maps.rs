//! Token maps for TI-83 Plus / TI-84 Plus BASIC.
//!
//! Each map pairs a code with the text that stands in for it.  Two-byte maps are keyed
//! by the byte that follows the prefix, the prefix itself is attached by `TokenTable`.

/// Bytes that introduce a two-byte token.  Some of these (0x62, 0x7E, 0xEF) have no
/// map in this token set, so a pair beginning with them never resolves.
pub const PREFIXES: [u8;10] = [0x5C, 0x5D, 0x5E, 0x60, 0x62, 0x63, 0x7E, 0xAA, 0xBB, 0xEF];

pub const MATRIX_PREFIX: u8 = 0x5C;
pub const LIST_PREFIX: u8 = 0x5D;
pub const EQUATION_PREFIX: u8 = 0x5E;
pub const PICTURE_PREFIX: u8 = 0x60;
pub const STAT_PREFIX: u8 = 0x63;
pub const STRING_PREFIX: u8 = 0xAA;
pub const EXTENDED_PREFIX: u8 = 0xBB;

/// Highest suffix accepted by the numbered namespaces (`Str0`-`Str9`, `Pic0`-`Pic9`)
pub const MAX_NUMBERED_SUFFIX: u8 = 9;

pub const SINGLE_MAP: [(u8,&str);101] = [
	(0x10, "("),
	(0x11, ")"),
	(0x2A, "\""),
	(0x2B, ","),
	(0x2C, "i"),
	(0x2D, "!"),
	(0x3A, "."),
	(0x3B, "E"), // scientific notation
	(0x3C, " or "),
	(0x3D, " xor "),
	(0x3E, ":"),
	(0x3F, "\n"), // statement separator
	(0x40, " and "),
	(0x41, "A"), (0x42, "B"), (0x43, "C"), (0x44, "D"), (0x45, "E"),
	(0x46, "F"), (0x47, "G"), (0x48, "H"), (0x49, "I"), (0x4A, "J"),
	(0x4B, "K"), (0x4C, "L"), (0x4D, "M"), (0x4E, "N"), (0x4F, "O"),
	(0x50, "P"), (0x51, "Q"), (0x52, "R"), (0x53, "S"), (0x54, "T"),
	(0x55, "U"), (0x56, "V"), (0x57, "W"), (0x58, "X"), (0x59, "Y"),
	(0x5A, "Z"),
	(0x5B, "theta"),
	(0x6A, "="),
	(0x6B, "<"),
	(0x6C, ">"),
	(0x6D, "<="),
	(0x6E, ">="),
	(0x6F, "!="),
	(0x70, "+"),
	(0x71, "-"),
	(0x72, "Ans"),
	(0x73, "Fix "),
	(0x74, "Horiz"),
	(0x80, "+"),
	(0x81, "-"),
	(0x82, "*"),
	(0x83, "/"),
	(0x84, "^"),
	(0x85, "xroot("),
	(0x86, "frac("),
	(0x87, "sqrt("),
	(0x88, "cubert("),
	(0x89, "ln("),
	(0x8A, "e^("),
	(0x8B, "log("),
	(0x8C, "10^("),
	(0x8D, "sin("),
	(0x8E, "cos("),
	(0x8F, "tan("),
	(0x90, "arcsin("),
	(0x91, "arccos("),
	(0x92, "arctan("),
	(0x93, "sinh("),
	(0x94, "cosh("),
	(0x95, "tanh("),
	(0x96, "arcsinh("),
	(0x97, "arccosh("),
	(0x98, "arctanh("),
	(0xB0, "-"), // negation
	(0xB1, "int("),
	(0xB2, "abs("),
	(0xB3, "det("),
	(0xB4, "identity("),
	(0xB5, "dim("),
	(0xB6, "sum("),
	(0xB7, "prod("),
	(0xB8, "not("),
	(0xB9, "iPart("),
	(0xBA, "fPart("),
	(0xBC, "sqrt("),
	(0xBD, "cubert("),
	(0xBE, "ln("),
	(0xBF, "e^"),
	(0xC0, "log("),
	(0xC1, "10^"),
	(0xC2, "sin("),
	(0xC3, "cos("),
	(0xC4, "tan("),
	(0xC5, "arcsin("),
	(0xC6, "arccos("),
	(0xC7, "arctan("),
	(0xF0, "nDeriv("),
	(0xF1, "fnInt(")
];

pub const MATRIX_MAP: [(u8,&str);10] = [
	(0x00, "[A]"), (0x01, "[B]"), (0x02, "[C]"), (0x03, "[D]"), (0x04, "[E]"),
	(0x05, "[F]"), (0x06, "[G]"), (0x07, "[H]"), (0x08, "[I]"), (0x09, "[J]")
];

pub const LIST_MAP: [(u8,&str);6] = [
	(0x00, "L1"), (0x01, "L2"), (0x02, "L3"), (0x03, "L4"), (0x04, "L5"), (0x05, "L6")
];

pub const EQUATION_MAP: [(u8,&str);23] = [
	(0x10, "Y1"), (0x11, "Y2"), (0x12, "Y3"), (0x13, "Y4"), (0x14, "Y5"),
	(0x15, "Y6"), (0x16, "Y7"), (0x17, "Y8"), (0x18, "Y9"), (0x19, "Y0"),
	// parametric
	(0x20, "X1T"), (0x21, "Y1T"), (0x22, "X2T"), (0x23, "Y2T"),
	// polar
	(0x40, "r1"), (0x41, "r2"), (0x42, "r3"), (0x43, "r4"), (0x44, "r5"), (0x45, "r6"),
	// sequence
	(0x80, "u"), (0x81, "v"), (0x82, "w")
];

pub const STAT_MAP: [(u8,&str);21] = [
	(0x00, "RegEQ"),
	(0x01, "n"),
	(0x02, "xbar"),
	(0x03, "sumX"),
	(0x04, "sumX2"),
	(0x05, "Sx"),
	(0x06, "sigmax"),
	(0x07, "minX"),
	(0x08, "maxX"),
	(0x09, "minY"),
	(0x0A, "maxY"),
	(0x0B, "ybar"),
	(0x0C, "sumY"),
	(0x0D, "sumY2"),
	(0x0E, "Sy"),
	(0x0F, "sigmay"),
	(0x10, "sumXY"),
	(0x11, "r"),
	(0x12, "Med"),
	(0x13, "Q1"),
	(0x14, "Q3")
];

/// Extended math, statistics, and MathPrint templates.
/// Shares the 0xBB prefix with `GREEK_MAP` and takes precedence over it.
pub const EXT_MATH_MAP: [(u8,&str);54] = [
	(0x00, "npv("),
	(0x01, "irr("),
	(0x02, "bal("),
	(0x03, "Sigma*Sigma("),
	(0x04, "stdDev("),
	(0x05, "variance("),
	(0x06, "inString("),
	(0x07, "normalcdf("),
	(0x08, "invNorm("),
	(0x09, "tcdf("),
	(0x0A, "X2cdf("),
	(0x0B, "Fcdf("),
	(0x0C, "binompdf("),
	(0x0D, "binomcdf("),
	(0x0E, "poissonpdf("),
	(0x0F, "poissoncdf("),
	(0x10, "geometpdf("),
	(0x11, "geometcdf("),
	(0x12, "normalpdf("),
	(0x13, "tpdf("),
	(0x14, "X2pdf("),
	(0x15, "Fpdf("),
	(0x16, "randNorm("),
	(0x17, "randBin("),
	(0x18, "randInt("),
	(0x19, "randIntNoRep("),
	(0x1A, "randM("),
	(0x1B, "randBin("),
	(0x1C, "mean("),
	(0x1D, "median("),
	(0x1E, "solve("),
	(0x1F, "seq("),
	(0x20, "fnInt("),
	(0x21, "nDeriv("),
	(0x22, "fMin("),
	(0x23, "fMax("),
	// MathPrint templates
	(0x2C, "d/dx("),
	(0x2D, "(d/d_)("),
	(0x2E, "integral("),
	(0x2F, "integral("),
	(0x30, "sum("),
	(0x31, "product("),
	(0x32, "nthroot("),
	(0x33, "logbase("),
	(0x34, "cubert("),
	(0x35, "sqrt("),
	(0x36, "^2"),
	(0x37, "^3"),
	(0x38, "^-1"),
	(0x3A, "/"),
	(0x3B, "mixedFrac("),
	(0x40, "piecewise("),
	(0x51, "|"), // such that
	(0x52, "e")
];

pub const GREEK_MAP: [(u8,&str);16] = [
	(0xCE, "alpha"),
	(0xCF, "beta"),
	(0xD0, "gamma"),
	(0xD1, "DELTA"),
	(0xD2, "delta"),
	(0xD3, "epsilon"),
	(0xD4, "lambda"),
	(0xD5, "mu"),
	(0xD6, "pi"),
	(0xD7, "rho"),
	(0xD8, "SIGMA"),
	(0xD9, "sigma"),
	(0xDA, "tau"),
	(0xDB, "phi"),
	(0xDC, "OMEGA"),
	(0xDD, "omega")
];
