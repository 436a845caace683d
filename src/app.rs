//! Application orchestrator.
//! Loads/merges config, initializes logging, installs the Ctrl-C handler,
//! runs the rename pass on the current directory and prints the completion line.

use anyhow::Result;
use std::sync::{Arc, Mutex};
use tracing::{debug, error, info};

use photo_rename::cli::Args;
use photo_rename::output as out;
use photo_rename::{COMPLETION_MESSAGE, RenameError, load_config, rename_current_dir, shutdown};

use crate::logging::init_tracing;

/// Run the CLI application.
pub fn run(args: Args) -> Result<()> {
    // Config file first, CLI wins.
    let mut cfg = load_config().inspect_err(|e| {
        out::print_error(&format!("Failed to load config: {e:#}"));
    })?;
    args.apply_overrides(&mut cfg);

    // Initialize logging and capture the guard so we can drop it on signal
    let guard_opt = init_tracing(&cfg.log_level, cfg.log_file.as_deref(), cfg.json).inspect_err(|e| {
        out::print_error(&format!("Failed to initialize logging: {e}"));
    })?;

    // Guard needs to be dropped on SIGINT to flush logs
    let guard_slot = Arc::new(Mutex::new(guard_opt));
    {
        let guard_slot = Arc::clone(&guard_slot);
        let installed = ctrlc::set_handler(move || {
            shutdown::request();
            out::print_warn("Received interrupt; stopping before the next rename...");
            if let Ok(mut g) = guard_slot.lock() {
                let _ = g.take(); // drop guard here to flush tracing_appender
            }
        });
        if let Err(e) = installed {
            debug!(error = %e, "could not install Ctrl-C handler; interrupts will not be cooperative");
        }
    }

    debug!(?args, ?cfg, "starting photo_rename");

    let result = match rename_current_dir() {
        Ok(report) => {
            info!(
                dir = %dunce::simplified(&report.dir).display(),
                stamp = %report.stamp,
                renamed = report.len(),
                "done"
            );
            out::print_user(COMPLETION_MESSAGE);
            Ok(())
        }
        Err(e) => {
            report_failure(&e);
            Err(e)
        }
    };

    // Ensure logs are flushed before exit
    if let Ok(mut g) = guard_slot.lock() {
        let _ = g.take();
    }

    result
}

fn report_failure(e: &anyhow::Error) {
    match e.downcast_ref::<RenameError>() {
        Some(re) => {
            let code = re.code();
            let kind = re.kind();
            match re {
                RenameError::ListDir { dir, .. } => {
                    error!(code, kind, dir = %dir.display(), error = %format_args!("{e:#}"), "Cannot list directory; nothing was renamed")
                }
                RenameError::Metadata { path, .. } => {
                    error!(code, kind, path = %path.display(), error = %format_args!("{e:#}"), "Cannot read file metadata; nothing was renamed")
                }
                RenameError::Rename { from, to, .. } => {
                    error!(code, kind, from = %from.display(), to = %to.display(), error = %format_args!("{e:#}"), "Rename failed; run stopped")
                }
                RenameError::Interrupted => {
                    error!(code, kind, "Run aborted by user")
                }
            }
        }
        None => error!(error = ?e, "Run failed"),
    }
}
