// SPDX-License-Identifier: MPL-2.0
use feedback_form::app::{self, Flags};
use feedback_form::ui::theming::ThemeMode;
use tracing_subscriber::EnvFilter;

const HELP: &str = "\
Feedback & Rating form

USAGE:
  feedback_form [OPTIONS]

OPTIONS:
  --config-dir DIR   Directory holding settings.toml
  --theme MODE       Color theme: light, dark or system
  -h, --help         Print this help text

ENVIRONMENT:
  FEEDBACK_FORM_CONFIG_DIR   Config directory (overridden by --config-dir)
  RUST_LOG                   Log filter (default: feedback_form=info)
";

fn main() -> iced::Result {
    init_logging();

    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let flags = match parse_flags(&mut args) {
        Ok(flags) => flags,
        Err(error) => {
            eprintln!("error: {error}\n\n{HELP}");
            std::process::exit(2);
        }
    };

    let remaining = args.finish();
    if !remaining.is_empty() {
        tracing::warn!(?remaining, "Ignoring unexpected arguments");
    }

    app::run(flags)
}

fn parse_flags(args: &mut pico_args::Arguments) -> Result<Flags, pico_args::Error> {
    Ok(Flags {
        config_dir: args.opt_value_from_str("--config-dir")?,
        theme: args.opt_value_from_fn("--theme", str::parse::<ThemeMode>)?,
    })
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("feedback_form=info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}
