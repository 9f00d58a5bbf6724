use clap_complete::shells;
use crate::STDRESULT;

pub fn generate(mut main_cmd: clap::Command,cmd: &clap::ArgMatches) -> STDRESULT {
    let name = main_cmd.get_name().to_string();
    match cmd.get_one::<String>("shell").map(|s| s.as_str()) {
        Some("bash") => clap_complete::generate(shells::Bash,&mut main_cmd,name,&mut std::io::stdout()),
        Some("elv") => clap_complete::generate(shells::Elvish,&mut main_cmd,name,&mut std::io::stdout()),
        Some("fish") => clap_complete::generate(shells::Fish,&mut main_cmd,name,&mut std::io::stdout()),
        Some("ps1") => clap_complete::generate(shells::PowerShell,&mut main_cmd,name,&mut std::io::stdout()),
        Some("zsh") => clap_complete::generate(shells::Zsh,&mut main_cmd,name,&mut std::io::stdout()),
        _ => return Err(Box::new(super::CommandError::InvalidCommand))
    }
    Ok(())
}
