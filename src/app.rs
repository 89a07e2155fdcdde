//! Application orchestrator.
//! Resolves the target (argument or prompt), builds the logging dispatch,
//! runs the organizer inside it, and handles the final pause.

use anyhow::Result;
use std::ffi::OsString;
use tracing::debug;

use file_sorter::cli::Args;
use file_sorter::logging::build_dispatch;
use file_sorter::output as out;
use file_sorter::{
    CategoryTable, Config, Console, DEFAULT_LOG_FILE, FALLBACK_CATEGORY, Interact, Organizer,
    expand_home,
};

/// Run the CLI application.
pub fn run(args: Args) -> Result<()> {
    let mut console = Console::stdio();
    run_with(args, &mut console)
}

fn run_with(args: Args, console: &mut impl Interact) -> Result<()> {
    if args.list_categories {
        print_categories();
        return Ok(());
    }

    let mut cfg = Config::default();
    args.apply_overrides(&mut cfg);

    let target = match args.resolved_target() {
        Some(t) => Some(t),
        None => console.ask_target()?,
    };
    let Some(target) = target else {
        out::print_user("No directory specified. Exiting.");
        return Ok(());
    };
    let target = expand_home(&target);

    let (dispatch, guard) =
        build_dispatch(&cfg.log_level, cfg.log_file.as_deref()).map_err(|e| {
            out::print_error(&format!("Failed to initialize logging: {:#}", e));
            e
        })?;

    let mut organizer = Organizer::new(CategoryTable::builtin())
        .dry_run(cfg.dry_run)
        .exclude_name(DEFAULT_LOG_FILE)
        .exclude_current_exe();
    if let Some(name) = cfg.log_file.as_deref().and_then(|p| p.file_name()) {
        organizer = organizer.exclude_name(OsString::from(name));
    }

    let result = tracing::dispatcher::with_default(&dispatch, || {
        debug!("Starting file_sorter: {:?}", args);
        organizer.run(&target)
    });

    // Flush the file writer before anything else reaches the terminal.
    drop(guard);

    if let Ok(Some(report)) = &result {
        if !report.failures.is_empty() {
            out::print_warn(&format!(
                "{} of {} files could not be moved; see the log for details.",
                report.failures.len(),
                report.processed
            ));
        }
        if cfg.dry_run {
            out::print_info("Dry run: no folders were created and no files were moved.");
        }
    }

    result?;

    if cfg.wait_on_exit {
        console.pause()?;
    }
    Ok(())
}

fn print_categories() {
    let table = CategoryTable::builtin();
    for (category, exts) in table.categories() {
        out::print_user(&format!("{:<10} {}", category, exts.join(" ")));
    }
    out::print_user(&format!("{:<10} (any other extension)", FALLBACK_CATEGORY));
}
