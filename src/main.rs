//! handctl - inspect hand-controller scan registers from the command line.

use anyhow::{Context, Result};
use clap::{Arg, ArgAction, ArgMatches, Command};
use handctl::codec::{self, DiscMatch, Reading};
use handctl::keys::{display_string_of, parse_keys};
use handctl::{expand, is_reserved, CodecConfig, KeySet, SensitivityRadius};

fn main() -> Result<()> {
    // Initialize logging, controlled by RUST_LOG
    env_logger::init();

    let matches = cli().get_matches();
    let config = load_config(matches.get_one::<String>("config"))?;
    log::debug!("base config: {:?}", config);

    match matches.subcommand() {
        Some(("decode", sub)) => run_decode(sub, config),
        Some(("encode", sub)) => run_encode(sub),
        Some(("expand", sub)) => run_expand(sub, config),
        Some(("reserved", sub)) => run_reserved(sub),
        Some(("table", sub)) => run_table(sub, config),
        _ => unreachable!("clap requires a subcommand"),
    }
}

fn cli() -> Command {
    Command::new("handctl")
        .version(handctl::VERSION)
        .about("Decode and encode hand-controller scan registers")
        .long_about(
            "handctl translates the 8-bit scan register of a hand controller into the \
             disc directions, keypad keys and action buttons it reports, and back. \
             Registers accept decimal, 0x hexadecimal or 0b binary; keys are \
             '+'-joined tokens such as 'nne+top' or '1+9'.",
        )
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("config")
                .long("config")
                .global(true)
                .value_name("PATH")
                .help("Read codec settings from a TOML file"),
        )
        .subcommand(
            Command::new("decode")
                .about("Show the keys a register reports")
                .arg(register_arg("register"))
                .arg(all_matches_arg())
                .arg(radius_arg()),
        )
        .subcommand(
            Command::new("encode")
                .about("Show the register a key combination produces")
                .arg(keys_arg()),
        )
        .subcommand(
            Command::new("expand")
                .about("Widen disc directions by a sensitivity radius")
                .arg(keys_arg())
                .arg(radius_arg()),
        )
        .subcommand(
            Command::new("reserved")
                .about("Check whether a register or key combination is ambiguous")
                .arg(
                    Arg::new("value")
                        .help("Register value or '+'-joined keys")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("keys")
                        .long("keys")
                        .short('k')
                        .action(ArgAction::SetTrue)
                        .help("Read the value as keys, so '9' is keypad 9, not register 9"),
                ),
        )
        .subcommand(
            Command::new("table")
                .about("Print the decode of every register value")
                .arg(all_matches_arg()),
        )
}

fn register_arg(name: &'static str) -> Arg {
    Arg::new(name)
        .help("Register value, e.g. 0xA5, 165 or 0b10100101")
        .required(true)
        .index(1)
}

fn keys_arg() -> Arg {
    Arg::new("keys")
        .help("'+'-joined key tokens, e.g. bl+s+clear")
        .required(true)
        .index(1)
}

fn all_matches_arg() -> Arg {
    Arg::new("all-matches")
        .long("all-matches")
        .action(ArgAction::SetTrue)
        .help("Report every disc direction the contacts cover")
}

fn radius_arg() -> Arg {
    Arg::new("radius")
        .long("radius")
        .short('r')
        .value_name("STEPS")
        .allow_negative_numbers(true)
        .value_parser(clap::value_parser!(i32))
        .help("Sensitivity radius in compass steps (clamped to 7)")
}

#[cfg(feature = "config")]
fn load_config(path: Option<&String>) -> Result<CodecConfig> {
    match path {
        Some(path) => CodecConfig::load_from_path(std::path::Path::new(path))
            .with_context(|| format!("loading config {path}")),
        None => CodecConfig::load_default().context("loading default config"),
    }
}

#[cfg(not(feature = "config"))]
fn load_config(path: Option<&String>) -> Result<CodecConfig> {
    if let Some(path) = path {
        anyhow::bail!("cannot read {path}: handctl was built without the `config` feature");
    }
    Ok(CodecConfig::default())
}

/// Apply `--radius` and `--all-matches` on top of the loaded config.
fn apply_overrides(config: CodecConfig, matches: &ArgMatches) -> Result<CodecConfig> {
    let mut sensitivity = config.sensitivity_feature()?;
    let mut disc_mode = config.disc_mode_feature()?;

    if let Ok(Some(radius)) = matches.try_get_one::<i32>("radius") {
        sensitivity.set(SensitivityRadius::new(*radius));
    }
    if let Ok(Some(true)) = matches.try_get_one::<bool>("all-matches") {
        disc_mode.set(DiscMatch::AllMatches);
    }
    Ok(CodecConfig::from_features(&sensitivity, &disc_mode))
}

fn parse_register_arg(matches: &ArgMatches, name: &str) -> Result<u8> {
    let text = matches
        .get_one::<String>(name)
        .with_context(|| format!("missing {name}"))?;
    Ok(codec::parse_register(text)?)
}

fn parse_keys_arg(matches: &ArgMatches) -> Result<KeySet> {
    let text = matches.get_one::<String>("keys").context("missing keys")?;
    let keys = parse_keys(text).with_context(|| format!("parsing keys {text:?}"))?;
    Ok(keys.into_iter().collect())
}

fn run_decode(matches: &ArgMatches, config: CodecConfig) -> Result<()> {
    let config = apply_overrides(config, matches)?;
    let register = parse_register_arg(matches, "register")?;
    let reading = Reading::new(register, &config);

    println!("register {:#04x}", reading.register);
    println!("keys     {}", display_string_of(reading.keys.keys()));
    if config.sensitivity.steps() > 0 {
        println!("window   {}", display_string_of(reading.disc_window.keys()));
    }
    println!("reserved {}", reading.reserved);
    Ok(())
}

fn run_encode(matches: &ArgMatches) -> Result<()> {
    let keys = parse_keys_arg(matches)?;
    let register = codec::encode(keys);
    println!("{register:#04x}");
    if is_reserved(&keys) {
        log::warn!("{} is a reserved combination", display_string_of(keys.keys()));
    }
    Ok(())
}

fn run_expand(matches: &ArgMatches, config: CodecConfig) -> Result<()> {
    let config = apply_overrides(config, matches)?;
    let keys = parse_keys_arg(matches)?;
    let window = expand(keys, config.sensitivity);
    println!("{}", display_string_of(window.keys()));
    Ok(())
}

fn run_reserved(matches: &ArgMatches) -> Result<()> {
    let text = matches.get_one::<String>("value").context("missing value")?;
    let reserved = reserved_value(text, matches.get_flag("keys"))?;
    println!("{reserved}");
    Ok(())
}

/// Registers win over keys unless `as_keys` is set, since digits are both.
fn reserved_value(text: &str, as_keys: bool) -> Result<bool> {
    if !as_keys {
        if let Ok(register) = codec::parse_register(text) {
            return Ok(is_reserved(&register));
        }
    }
    let keys: KeySet = parse_keys(text)
        .with_context(|| format!("{text:?} is neither a register nor keys"))?
        .into_iter()
        .collect();
    Ok(is_reserved(&keys))
}

fn run_table(matches: &ArgMatches, config: CodecConfig) -> Result<()> {
    let config = apply_overrides(config, matches)?;
    for register in 0..=u8::MAX {
        let keys = codec::decode_with(register, config.disc_mode);
        let flag = if is_reserved(&register) { " *" } else { "" };
        println!("{register:#04x}  {}{flag}", display_string_of(keys.keys()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_constant() {
        assert!(!handctl::VERSION.is_empty());
    }

    #[test]
    fn test_cli_definition_is_valid() {
        cli().debug_assert();
    }

    #[test]
    fn test_overrides_follow_flags() {
        let matches = cli().get_matches_from([
            "handctl",
            "decode",
            "0x04",
            "--radius",
            "-9",
            "--all-matches",
        ]);
        let (_, sub) = matches.subcommand().unwrap();
        let config = apply_overrides(CodecConfig::default(), sub).unwrap();
        assert_eq!(config.sensitivity.steps(), 7);
        assert_eq!(config.disc_mode, DiscMatch::AllMatches);
    }

    #[test]
    fn test_reserved_value_reads_digits_as_keys_on_request() {
        assert!(!reserved_value("9", false).unwrap());
        assert!(!reserved_value("9", true).unwrap());
        assert!(reserved_value("165", false).unwrap());
        // "165" is not a key token
        assert!(reserved_value("165", true).is_err());
        assert!(reserved_value("1+9", false).unwrap());
        assert!(reserved_value("n+s+top", true).unwrap());

        let matches = cli().get_matches_from(["handctl", "reserved", "--keys", "9"]);
        let (_, sub) = matches.subcommand().unwrap();
        assert!(sub.get_flag("keys"));
    }

    #[test]
    fn test_overrides_keep_config_without_flags() {
        let base = CodecConfig {
            sensitivity: SensitivityRadius::new(2),
            disc_mode: DiscMatch::AllMatches,
        };
        let matches = cli().get_matches_from(["handctl", "encode", "1+9"]);
        let (_, sub) = matches.subcommand().unwrap();
        assert_eq!(apply_overrides(base, sub).unwrap(), base);
    }
}
