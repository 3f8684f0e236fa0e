//! Interactive session: a form, a live search box and per-record actions.

use std::cell::RefCell;
use std::io::Write;
use std::path::PathBuf;
use std::rc::Rc;
use std::time::Instant;

use clinic_records_core::{RecordForm, RecordManager};
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

use crate::printout::write_document;
use crate::text::{render_form, render_list};
use crate::ui::{resolve_shortcut, Focus, FormField, Shortcut, ShortcutAction, ToastSlot};

const HELP: &str = "\
Form:
  id <text>             set Student ID
  name <text>           set Student Name
  consultation <text>   set consultation notes
  medicines <text>      set prescribed medicines
  form                  show the form
  submit                save the form as a new record
  reset                 clear the form
  blur                  leave the current field
Records:
  search [term]         filter by student ID or name (empty shows all)
  list                  show the filtered list
  delete <record-id>    delete a record
  edit <record-id>      load a record into the form and remove it
  print <record-id>     write a printable page for a record
Shortcuts:
  ctrl+s                submit the form (ignored while typing in a field)
  ctrl+f                focus the search box
  help, quit
";

/// Whether the session keeps reading input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// State shared with the manager's change listener.
#[derive(Default)]
struct Signals {
    toast: ToastSlot,
    announce: bool,
    stale: bool,
}

/// One interactive session over a record manager.
pub struct Session {
    manager: RecordManager,
    form: RecordForm,
    focus: Focus,
    search_term: String,
    awaiting_search: bool,
    print_dir: PathBuf,
    signals: Rc<RefCell<Signals>>,
}

impl Session {
    pub fn new(mut manager: RecordManager, print_dir: PathBuf) -> Self {
        let signals = Rc::new(RefCell::new(Signals::default()));
        let sink = Rc::clone(&signals);
        manager.subscribe(move |event| {
            let mut signals = sink.borrow_mut();
            signals.toast.show(event.notice(), Instant::now());
            signals.announce = true;
            if event.changes_records() {
                signals.stale = true;
            }
        });

        Self {
            manager,
            form: RecordForm::default(),
            focus: Focus::None,
            search_term: String::new(),
            awaiting_search: false,
            print_dir,
            signals,
        }
    }

    /// Prompt text, prefixed with the toast while it is visible.
    pub fn prompt(&self) -> String {
        let base = if self.awaiting_search {
            "search> "
        } else {
            "clinic> "
        };
        match self.signals.borrow().toast.visible(Instant::now()) {
            Some(message) => format!("({}) {}", message, base),
            None => base.to_string(),
        }
    }

    /// Handle one line of input.
    pub fn handle<W: Write>(&mut self, line: &str, out: &mut W) -> anyhow::Result<Flow> {
        let line = line.trim();

        if self.awaiting_search {
            self.awaiting_search = false;
            self.search_term = line.to_string();
            self.show_list(out)?;
            return Ok(Flow::Continue);
        }
        if line.is_empty() {
            return Ok(Flow::Continue);
        }

        let (command, rest) = line
            .split_once(char::is_whitespace)
            .map(|(command, rest)| (command, rest.trim()))
            .unwrap_or((line, ""));

        if let Ok(field) = command.parse::<FormField>() {
            field.set(&mut self.form, rest.to_string());
            self.focus = Focus::Field(field);
            return Ok(Flow::Continue);
        }

        match command {
            "form" => write!(out, "{}", render_form(&self.form))?,
            "submit" => self.submit()?,
            "reset" => {
                self.form.reset();
                self.focus = Focus::None;
            }
            "blur" => self.focus = Focus::None,
            "search" => {
                self.focus = Focus::Search;
                self.search_term = rest.to_string();
                self.show_list(out)?;
            }
            "list" => self.show_list(out)?,
            "delete" => {
                if let Some(id) = required_id(rest, "delete", out)? {
                    self.focus = Focus::None;
                    self.manager.delete(id)?;
                }
            }
            "edit" => {
                if let Some(id) = required_id(rest, "edit", out)? {
                    self.focus = Focus::None;
                    if let Some(form) = self.manager.edit(id)? {
                        self.form = form;
                        write!(out, "{}", render_form(&self.form))?;
                    }
                }
            }
            "print" => {
                if let Some(id) = required_id(rest, "print", out)? {
                    self.focus = Focus::None;
                    if let Some(document) = self.manager.print(id) {
                        let path = write_document(&self.print_dir, &document)?;
                        writeln!(out, "Printable record: {}", path.display())?;
                    }
                }
            }
            "help" => write!(out, "{}", HELP)?,
            "quit" | "exit" => return Ok(Flow::Quit),
            other => match other.parse::<Shortcut>() {
                Ok(shortcut) => self.apply_shortcut(shortcut, out)?,
                Err(_) => writeln!(out, "Unknown command: {} (try help)", other)?,
            },
        }

        self.flush(out)?;
        Ok(Flow::Continue)
    }

    /// Write the filtered record list.
    pub fn show_list<W: Write>(&self, out: &mut W) -> anyhow::Result<()> {
        if self.search_term.is_empty() {
            writeln!(out, "Records:")?;
        } else {
            writeln!(out, "Records matching '{}':", self.search_term)?;
        }
        write!(
            out,
            "{}",
            render_list(&self.manager.search(&self.search_term))
        )?;
        Ok(())
    }

    fn submit(&mut self) -> anyhow::Result<()> {
        let form = std::mem::take(&mut self.form);
        self.manager.add(form)?;
        self.focus = Focus::None;
        Ok(())
    }

    fn apply_shortcut<W: Write>(&mut self, shortcut: Shortcut, out: &mut W) -> anyhow::Result<()> {
        match resolve_shortcut(shortcut, self.focus) {
            Some(ShortcutAction::SubmitForm) => self.submit()?,
            Some(ShortcutAction::FocusSearch) => {
                self.focus = Focus::Search;
                self.awaiting_search = true;
            }
            None => writeln!(out, "Shortcut ignored while typing; use blur or submit")?,
        }
        Ok(())
    }

    /// Show the latest notice and re-render the list if it changed.
    fn flush<W: Write>(&mut self, out: &mut W) -> anyhow::Result<()> {
        let (notice, stale) = {
            let mut signals = self.signals.borrow_mut();
            let notice = if std::mem::take(&mut signals.announce) {
                signals.toast.visible(Instant::now()).map(str::to_string)
            } else {
                None
            };
            (notice, std::mem::take(&mut signals.stale))
        };

        if let Some(notice) = notice {
            writeln!(out, "» {}", notice)?;
        }
        if stale {
            self.show_list(out)?;
        }
        Ok(())
    }
}

fn required_id<'a, W: Write>(
    rest: &'a str,
    command: &str,
    out: &mut W,
) -> anyhow::Result<Option<&'a str>> {
    if rest.is_empty() {
        writeln!(out, "Usage: {} <record-id>", command)?;
        return Ok(None);
    }
    Ok(Some(rest))
}

/// Run the session against the terminal until EOF or `quit`.
pub fn run(mut session: Session) -> anyhow::Result<()> {
    let mut editor = DefaultEditor::new()?;
    let mut stdout = std::io::stdout();

    writeln!(stdout, "School Clinic Records (type help for commands)")?;
    session.show_list(&mut stdout)?;

    loop {
        match editor.readline(&session.prompt()) {
            Ok(line) => {
                if let Err(e) = editor.add_history_entry(line.as_str()) {
                    log::debug!("Failed to record history: {}", e);
                }
                if session.handle(&line, &mut stdout)? == Flow::Quit {
                    break;
                }
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(e) => return Err(e.into()),
        }
    }

    log::info!("Session closed");
    Ok(())
}
