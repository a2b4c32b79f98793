use clap::Parser;
use miette::Result;
use xenrich::cli::commands::enrich::EnrichArgs;
use xenrich::cli::logging::init_logging;
use xenrich::cli::{Cli, Commands};

fn main() -> Result<()> {
    // Reset SIGPIPE to default behavior (terminate silently) for proper Unix piping.
    // Without this, piping to `head`, `grep -q`, etc. causes a panic on broken pipe.
    #[cfg(unix)]
    {
        unsafe {
            libc::signal(libc::SIGPIPE, libc::SIG_DFL);
        }
    }
    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .context_lines(2)
                .tab_width(4)
                .build(),
        )
    }))?;

    let cli = Cli::parse();
    let global = cli.global;
    init_logging(&global);

    match cli.command {
        None => xenrich::cli::commands::enrich::run(EnrichArgs::default(), &global),
        Some(Commands::Enrich(args)) => xenrich::cli::commands::enrich::run(args, &global),
        Some(Commands::Defaults(args)) => xenrich::cli::commands::defaults::run(args),
        Some(Commands::List(args)) => xenrich::cli::commands::list::run(args, &global),
        Some(Commands::Holes(args)) => xenrich::cli::commands::holes::run(args, &global),
        Some(Commands::Completions(args)) => xenrich::cli::commands::completions::run(args),
    }
}
