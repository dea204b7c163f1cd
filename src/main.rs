// SPDX-License-Identifier: MPL-2.0
use iced_gallery::app::{self, paths, Flags};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Environment variable holding the log filter, e.g. `iced_gallery=debug`.
const ENV_LOG: &str = "ICED_GALLERY_LOG";

const USAGE: &str = "\
Usage: iced_gallery [OPTIONS] [PAGE]

Arguments:
  [PAGE]                 HTML page to open

Options:
  --lang <ID>            Interface language (e.g. en-US, fr)
  --config-dir <DIR>     Directory holding settings.toml
  -h, --help             Print this help";

fn main() -> iced::Result {
    init_logging();

    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        println!("{USAGE}");
        return Ok(());
    }

    let (flags, config_dir) = match parse_args(args) {
        Ok(parsed) => parsed,
        Err(err) => {
            eprintln!("error: {err}\n\n{USAGE}");
            std::process::exit(2);
        }
    };

    paths::init_cli_overrides(config_dir);
    app::run(flags)
}

fn parse_args(mut args: pico_args::Arguments) -> Result<(Flags, Option<String>), pico_args::Error> {
    let lang = args.opt_value_from_str("--lang")?;
    let config_dir = args.opt_value_from_str("--config-dir")?;
    let file_path = args
        .finish()
        .into_iter()
        .next()
        .and_then(|s| s.into_string().ok());

    Ok((Flags { lang, file_path }, config_dir))
}

fn init_logging() {
    let filter = EnvFilter::try_from_env(ENV_LOG).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}
