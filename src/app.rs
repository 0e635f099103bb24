//! Application dispatcher.
//! Initializes logging, runs the requested operation, prints the result
//! (human or JSON) and maps typed errors onto process exit codes.

use serde::Serialize;
use std::io;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::error;

use resfs::output as out;
use resfs::{CapacityUnit, ListingOptions, UNLIMITED_DEPTH};

use crate::cli::{Args, Command};
use crate::logging;

#[derive(Serialize)]
struct ListReport<'a> {
    path: &'a Path,
    count: usize,
    entries: &'a [PathBuf],
}

#[derive(Serialize)]
struct SizeReport<'a> {
    path: &'a Path,
    bytes: u64,
    value: f64,
    unit: CapacityUnit,
    scale: u32,
}

#[derive(Serialize)]
struct TypeReport<'a> {
    path: &'a Path,
    content_type: Option<String>,
}

#[derive(Serialize)]
struct HashReport<'a> {
    path: &'a Path,
    algorithm: &'static str,
    digest: Option<String>,
}

#[derive(Serialize)]
struct MutationReport<'a> {
    op: &'static str,
    src: &'a Path,
    dest: &'a Path,
}

/// Run the CLI application.
pub fn run(args: Args) -> ExitCode {
    let guard = match logging::init_tracing(
        args.effective_log_level(),
        args.log_file.as_deref(),
        args.json,
    ) {
        Ok(g) => g,
        Err(e) => {
            out::print_error(&format!("Failed to initialize logging: {e}"));
            return ExitCode::FAILURE;
        }
    };

    let outcome = dispatch(&args);

    // Drop the appender guard before exiting so file logs are flushed.
    drop(guard);

    match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(code = e.code(), kind = e.kind(), error = %e, "operation failed");
            out::print_error(&e.to_string());
            ExitCode::from(e.code() as u8)
        }
    }
}

fn dispatch(args: &Args) -> resfs::Result<()> {
    match &args.command {
        Command::List {
            path,
            depth,
            no_hidden,
            symlinks,
        } => {
            let options = ListingOptions {
                include_hidden: !no_hidden,
                include_symlinks: *symlinks,
            };
            let entries = resfs::list(path, depth.unwrap_or(UNLIMITED_DEPTH), options)?;
            if args.json {
                print_json(&ListReport {
                    path,
                    count: entries.len(),
                    entries: &entries,
                });
            } else {
                for entry in &entries {
                    out::print_user(&entry.display().to_string());
                }
            }
            Ok(())
        }

        Command::Size { path, unit, scale } => {
            let bytes = resfs::size_in_bytes(path)?;
            let value = unit.convert(bytes, *scale);
            if args.json {
                print_json(&SizeReport {
                    path,
                    bytes,
                    value,
                    unit: *unit,
                    scale: *scale,
                });
            } else {
                let digits = *scale as usize;
                out::print_user(&format!("{value:.digits$}"));
            }
            Ok(())
        }

        Command::Type { path } => {
            let content_type = resfs::content_type(path)?;
            if args.json {
                print_json(&TypeReport { path, content_type });
            } else {
                match content_type {
                    Some(t) => out::print_user(&t),
                    None => out::print_info("no content type detected"),
                }
            }
            Ok(())
        }

        Command::Hash { path, algorithm } => {
            let digest = resfs::content_hash(path, *algorithm)?;
            if args.json {
                print_json(&HashReport {
                    path,
                    algorithm: algorithm.canonical_name(),
                    digest,
                });
            } else {
                match digest {
                    Some(d) => out::print_user(&d),
                    None => out::print_info("directories have no content hash"),
                }
            }
            Ok(())
        }

        Command::Remove { path } => {
            resfs::remove(path)?;
            if args.json {
                print_json(&MutationReport {
                    op: "remove",
                    src: path,
                    dest: path,
                });
            } else {
                out::print_success(&format!("Removed '{}'", path.display()));
            }
            Ok(())
        }

        Command::Create { path } => {
            let created = resfs::create(path, io::stdin().lock())?;
            if args.json {
                print_json(&MutationReport {
                    op: "create",
                    src: path,
                    dest: &created,
                });
            } else {
                out::print_success(&format!("Created '{}'", created.display()));
            }
            Ok(())
        }

        Command::Copy {
            src,
            dest,
            into,
            replace,
        } => {
            let created = if *into {
                resfs::copy_to(src, dest, *replace)?
            } else {
                resfs::copy_as(src, dest, *replace)?
            };
            report_mutation(args, "copy", src, &created);
            Ok(())
        }

        Command::Move {
            src,
            dest,
            into,
            replace,
        } => {
            let created = if *into {
                resfs::move_to(src, dest, *replace)?
            } else {
                resfs::move_as(src, dest, *replace)?
            };
            report_mutation(args, "move", src, &created);
            Ok(())
        }

        Command::Rename { path, new_name } => {
            let created = resfs::rename_to(path, new_name)?;
            report_mutation(args, "rename", path, &created);
            Ok(())
        }
    }
}

fn report_mutation(args: &Args, op: &'static str, src: &Path, dest: &Path) {
    if args.json {
        print_json(&MutationReport { op, src, dest });
    } else {
        out::print_success(&format!(
            "{} '{}' -> '{}'",
            match op {
                "copy" => "Copied",
                "move" => "Moved",
                _ => "Renamed",
            },
            src.display(),
            dest.display()
        ));
    }
}

fn print_json<T: Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(s) => out::print_user(&s),
        Err(e) => out::print_error(&format!("failed to encode JSON output: {e}")),
    }
}
