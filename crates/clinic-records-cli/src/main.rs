//! `clinic` - terminal front end for school clinic visit records.

use std::cell::RefCell;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use anyhow::Context;
use clap::{Parser, Subcommand};
use clinic_records_core::{open_manager, ChangeEvent, RecordForm, RecordManager};

mod printout;
mod shell;
mod text;
mod ui;

#[derive(Parser)]
#[command(name = "clinic")]
#[command(about = "School clinic visit records")]
#[command(version)]
struct Args {
    /// Record database file
    #[arg(long, env = "CLINIC_DB_PATH", default_value = "clinic-records.db")]
    db: PathBuf,

    /// Directory printable records are written to (defaults to the system temp dir)
    #[arg(long, env = "CLINIC_PRINT_DIR")]
    print_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    #[command(flatten)]
    Records(RecordCommand),
    /// Interactive session (default)
    Shell,
}

#[derive(Subcommand)]
enum RecordCommand {
    /// Record a clinic visit
    Add {
        #[arg(long, default_value = "")]
        student_id: String,
        #[arg(long, default_value = "")]
        student_name: String,
        #[arg(long, default_value = "")]
        consultation: String,
        #[arg(long, default_value = "")]
        medicines: String,
    },
    /// List records, newest first
    List {
        /// Only show records whose student ID or name contains this
        #[arg(short, long, default_value = "")]
        search: String,
        /// Emit HTML cards instead of text
        #[arg(long)]
        html: bool,
    },
    /// Delete a record
    Delete { id: String },
    /// Remove a record and print its fields for re-entry
    Edit { id: String },
    /// Write a printable page for a record
    Print { id: String },
    /// Dump all records in the persisted JSON format
    Export {
        #[arg(short, long)]
        out: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("warn"));

    let args = Args::parse();
    let print_dir = args.print_dir.unwrap_or_else(std::env::temp_dir);

    let mut manager = open_manager(&args.db)
        .with_context(|| format!("Failed to open record database {}", args.db.display()))?;
    log::debug!("Using record database {}", args.db.display());

    match args.command.unwrap_or(Command::Shell) {
        Command::Records(command) => {
            run_command(&mut manager, command, &print_dir, &mut std::io::stdout())
        }
        Command::Shell => shell::run(shell::Session::new(manager, print_dir)),
    }
}

/// Run one record subcommand, writing its output and notices to `out`.
fn run_command<W: Write>(
    manager: &mut RecordManager,
    command: RecordCommand,
    print_dir: &Path,
    out: &mut W,
) -> anyhow::Result<()> {
    let notices = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&notices);
    manager.subscribe(move |event: &ChangeEvent| sink.borrow_mut().push(event.notice()));

    match command {
        RecordCommand::Add {
            student_id,
            student_name,
            consultation,
            medicines,
        } => {
            let record = manager.add(RecordForm::new(
                student_id,
                student_name,
                consultation,
                medicines,
            ))?;
            write!(out, "{}", text::render_card(&record))?;
        }
        RecordCommand::List { search, html } => {
            if html {
                write!(out, "{}", manager.render(&search))?;
            } else {
                write!(out, "{}", text::render_list(&manager.search(&search)))?;
            }
        }
        RecordCommand::Delete { id } => {
            manager.delete(&id)?;
        }
        RecordCommand::Edit { id } => {
            if let Some(form) = manager.edit(&id)? {
                write!(out, "{}", text::render_form(&form))?;
                writeln!(
                    out,
                    "Re-enter with: clinic add --student-id {} --student-name {} --consultation {} --medicines {}",
                    shell_quote(&form.student_id),
                    shell_quote(&form.student_name),
                    shell_quote(&form.consultation),
                    shell_quote(&form.medicines)
                )?;
            }
        }
        RecordCommand::Print { id } => {
            if let Some(document) = manager.print(&id) {
                let path = printout::write_document(print_dir, &document)?;
                writeln!(out, "{}", path.display())?;
            }
        }
        RecordCommand::Export { out: None } => {
            writeln!(out, "{}", manager.store().to_json()?)?;
        }
        RecordCommand::Export { out: Some(path) } => {
            fs::write(&path, manager.store().to_json()?)
                .with_context(|| format!("Failed to write export {}", path.display()))?;
        }
    }

    for notice in notices.borrow().iter() {
        writeln!(out, "{}", notice)?;
    }
    Ok(())
}

/// Quote a value for a POSIX shell command line.
fn shell_quote(value: &str) -> String {
    format!("'{}'", value.replace('\'', r"'\''"))
}
