use clap::{value_parser, crate_version, Arg, ArgAction, Command, ValueHint};
use clap::builder::RangedU64ValueParser;

const IN_HELP: &str = "if the input is piped, omit `--file` option";
const T_LONG_HELP: &str = "`tok` is a bare token stream, such as the bytes captured from a link cable.
`8xp` is a variable file, every program inside it is detokenized unless `--name` is given.
`auto` checks for the variable file signature and otherwise assumes `tok`.";
const CAP_LONG_HELP: &str = "Size of the output buffer in bytes, including one byte reserved for a terminator.
Tokens whose text does not fit are skipped whole, so the text is cut on a token boundary.
The smallest capacity is 1, which leaves no room for text.";

fn file_arg(help: &'static str) -> Arg {
    Arg::new("file").short('f').long("file").value_name("PATH").help(help)
        .value_hint(ValueHint::FilePath)
        .required(false)
}

fn name_arg() -> Arg {
    Arg::new("name").short('n').long("name").value_name("NAME").help("name of the program inside the variable file")
        .required(false)
}

fn indent_arg() -> Arg {
    Arg::new("indent").long("indent").help("JSON indentation, omit to minify")
        .value_name("SPACES")
        .value_parser(value_parser!(u16).range(0..16))
        .required(false)
}

pub fn build_cli() -> Command {
    let long_help = "ti84kit is always invoked with exactly one of several subcommands.
The subcommands are generally designed to function as nodes in a pipeline.
Set RUST_LOG environment variable to control logging level.
  levels: trace,debug,info,warn,error

Examples:
---------
detokenize a program file:  `ti84kit detokenize -f PRGM.8xp`
detokenize captured tokens: `cat capture.bin | ti84kit dtok -t tok`
limit the output:           `ti84kit dtok -f PRGM.8xp --capacity 256`
inspect a program file:     `ti84kit stat -f PRGM.8xp --indent 2`
extract the tokens:         `ti84kit unpack -f PRGM.8xp -n PRGM > prgm.tok`";

    let mut main_cmd = Command::new("ti84kit")
        .about("Detokenizes TI-83 Plus / TI-84 Plus BASIC programs.")
        .after_long_help(long_help)
        .version(crate_version!());

    main_cmd = main_cmd.subcommand(
        Command::new("detokenize")
            .arg(file_arg("path to token stream or variable file"))
            .arg(
                Arg::new("type").short('t').long("type").help("type of the input").value_name("TYPE")
                    .required(false)
                    .value_parser(["auto", "tok", "8xp"])
                    .default_value("auto")
                    .long_help(T_LONG_HELP),
            )
            .arg(name_arg())
            .arg(
                Arg::new("capacity").long("capacity").help("bound the output").value_name("BYTES")
                    .value_parser(RangedU64ValueParser::<usize>::new().range(1..))
                    .required(false)
                    .long_help(CAP_LONG_HELP),
            )
            .arg(
                Arg::new("config").long("config").short('c').value_name("JSON").help("detokenizer settings")
                    .required(false)
                    .long_help("JSON settings, e.g. `{\"detokenizer\": {\"capacity\": 256}}`, `--capacity` takes precedence"),
            )
            .arg(Arg::new("hex").long("hex").help("input is hex text").action(ArgAction::SetTrue))
            .visible_alias("dtok")
            .about("read tokens, detokenize, write program text to stdout")
            .after_help(IN_HELP),
    );
    main_cmd = main_cmd.subcommand(
        Command::new("stat")
            .arg(file_arg("path to variable file"))
            .arg(indent_arg())
            .about("write variable file information as a JSON string to stdout")
            .after_help(IN_HELP),
    );
    main_cmd = main_cmd.subcommand(
        Command::new("unpack")
            .arg(file_arg("path to variable file"))
            .arg(name_arg())
            .arg(Arg::new("raw").long("raw").help("write raw bytes even to the console").action(ArgAction::SetTrue))
            .about("write the tokens of one program to stdout")
            .after_help(IN_HELP),
    );
    main_cmd = main_cmd.subcommand(
        Command::new("completions")
            .arg(
                Arg::new("shell").short('s').long("shell").help("shell type").value_name("SHELL")
                    .required(true)
                    .value_parser(["bash", "elv", "fish", "ps1", "zsh"]),
            )
            .about("write completions script to stdout"),
    );
    main_cmd
}
