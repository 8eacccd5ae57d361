// SPDX-License-Identifier: MPL-2.0
use iced_showroom::app::{self, paths, Flags};
use tracing_subscriber::EnvFilter;

const HELP: &str = "\
iced_showroom - furniture catalog browser

USAGE:
    iced_showroom [OPTIONS] [CATALOG]

ARGS:
    [CATALOG]              Catalog JSON file or directory of JSON files

OPTIONS:
    --catalog <PATH>       Same as the CATALOG argument
    --lang <LOCALE>        Interface language (e.g. en-US, id-ID)
    --route <PATH>         Initial page (e.g. /shop/chair)
    --config-dir <DIR>     Directory holding settings.toml
    -h, --help             Print this help

ENVIRONMENT:
    RUST_LOG                    Log filter (default: iced_showroom=info)
    ICED_SHOWROOM_CONFIG_DIR    Config directory override
";

const DEFAULT_LOG_FILTER: &str = "iced_showroom=info";

fn parse_args() -> Result<Option<(Flags, Option<String>)>, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        return Ok(None);
    }

    let lang = args.opt_value_from_str("--lang")?;
    let route = args.opt_value_from_str("--route")?;
    let config_dir = args.opt_value_from_str("--config-dir")?;
    let catalog_flag: Option<String> = args.opt_value_from_str("--catalog")?;
    let positional = args
        .finish()
        .into_iter()
        .next()
        .and_then(|s| s.into_string().ok());

    let flags = Flags {
        lang,
        catalog_path: catalog_flag.or(positional),
        route,
    };
    Ok(Some((flags, config_dir)))
}

fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .init();

    let (flags, config_dir) = match parse_args() {
        Ok(Some(parsed)) => parsed,
        Ok(None) => {
            print!("{HELP}");
            return Ok(());
        }
        Err(err) => {
            eprintln!("error: {err}\n\n{HELP}");
            std::process::exit(2);
        }
    };

    paths::init_cli_override(config_dir);
    app::run(flags)
}
