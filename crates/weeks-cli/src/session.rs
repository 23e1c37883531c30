//! Line-oriented session over stdin that drives the same application state
//! the web UI uses: one command per line, one state transition per command.

use crate::render;
use chrono::NaiveDate;
use std::io::{BufRead, Write};
use weeks_core::calendar;
use weeks_core::state::{self, Action, AppState, Outcome};

pub const HELP: &str = "\
commands:
  born [YYYY-MM-DD]       set (or clear) the birth date
  lifespan N              set the lifespan in years (1-120)
  click WEEK              open the editor on a week index (0-based)
  by-date                 open the editor in date mode
  date [YYYY-MM-DD]       fill (or clear) the editor's date field
  picker open|close       toggle the date picker
  describe TEXT           fill the editor's description
  commit                  add the milestone
  cancel                  close the editor without adding
  show                    print the editor and grid status
  grid                    draw the grid
  milestones              list milestones
  help                    this text
  quit                    leave the session";

/// Result of one command line.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Reply {
    pub text: String,
    pub quit: bool,
}

impl Reply {
    fn say(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            quit: false,
        }
    }
}

pub struct Session {
    state: AppState,
    today: NaiveDate,
}

impl Session {
    pub fn new(state: AppState, today: NaiveDate) -> Self {
        Self { state, today }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Read commands until EOF or `quit`, writing one reply per command.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut out: W) -> anyhow::Result<()> {
        for line in input.lines() {
            let line = line?;
            let reply = self.execute(&line);
            if !reply.text.is_empty() {
                writeln!(out, "{}", reply.text)?;
            }
            if reply.quit {
                break;
            }
        }
        out.flush()?;
        Ok(())
    }

    pub fn execute(&mut self, line: &str) -> Reply {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return Reply::default();
        }
        let (cmd, rest) = match line.split_once(char::is_whitespace) {
            Some((cmd, rest)) => (cmd, rest.trim()),
            None => (line, ""),
        };
        tracing::debug!(cmd, rest, "session command");

        match self.dispatch(cmd, rest) {
            Ok(reply) => reply,
            Err(e) => Reply::say(format!("error: {e:#}")),
        }
    }

    fn dispatch(&mut self, cmd: &str, rest: &str) -> anyhow::Result<Reply> {
        let action = match cmd {
            "quit" | "exit" => {
                return Ok(Reply {
                    text: String::new(),
                    quit: true,
                })
            }
            "help" => return Ok(Reply::say(HELP)),
            "show" => return Ok(Reply::say(self.status())),
            "grid" => return Ok(Reply::say(self.grid())),
            "milestones" => return Ok(Reply::say(self.milestones())),
            "born" => Action::SetBirthDate {
                birth_date: state::parse_birth_date(rest)?,
            },
            "lifespan" => {
                let years: u32 = rest
                    .parse()
                    .map_err(|_| anyhow::anyhow!("'{rest}' is not a number of years"))?;
                if !calendar::lifespan_in_range(years) {
                    anyhow::bail!(
                        "lifespan must be between {} and {} years",
                        calendar::LIFESPAN_MIN,
                        calendar::LIFESPAN_MAX
                    );
                }
                Action::SetLifespan { years }
            }
            "click" => Action::SelectWeek {
                week: rest
                    .parse()
                    .map_err(|_| anyhow::anyhow!("'{rest}' is not a week index"))?,
            },
            "by-date" => Action::OpenByDate,
            "date" => Action::SetDate {
                text: rest.to_string(),
            },
            "picker" => Action::SetPickerOpen {
                open: match rest {
                    "open" => true,
                    "close" => false,
                    other => anyhow::bail!("expected 'open' or 'close', got '{other}'"),
                },
            },
            "describe" => Action::SetDescription {
                text: rest.to_string(),
            },
            "commit" => Action::Commit,
            "cancel" => Action::Cancel,
            other => anyhow::bail!("unknown command '{other}' (try 'help')"),
        };

        let outcome = self.state.apply(action, self.today)?;
        Ok(Reply::say(match outcome {
            Outcome::Committed(m) => format!(
                "Added milestone '{}' at week {}.",
                m.description, m.week_index
            ),
            Outcome::Cancelled => "Editor closed.".to_string(),
            Outcome::Updated => self.status(),
        }))
    }

    fn status(&self) -> String {
        let view = self.state.view(self.today);
        let mut lines = Vec::new();

        match (view.birth_date, &view.grid) {
            (Some(birth), Some(grid)) => lines.push(format!(
                "born {}, {} years: {} of {} weeks lived",
                birth,
                view.lifespan_years,
                grid.summary.weeks_lived,
                grid.summary.total_weeks
            )),
            _ => lines.push(format!(
                "no birth date, {} years",
                view.lifespan_years
            )),
        }

        let editor = &view.editor;
        match &editor.draft {
            None => lines.push("editor: idle".to_string()),
            Some(draft) => {
                let mut line = format!("editor: {}", editor.mode);
                if let Some(week) = editor.week {
                    line.push_str(&format!(" week={week}"));
                }
                line.push_str(&format!(
                    " description={:?} date={:?}",
                    draft.description, draft.date
                ));
                if draft.picker_open {
                    line.push_str(" picker=open");
                }
                lines.push(line);
                lines.push(match (&editor.target_week, &editor.blocked_by) {
                    (Some(week), _) => format!("ready: commit adds week {week}"),
                    (None, Some(reason)) => format!("not ready: {reason}"),
                    (None, None) => "not ready".to_string(),
                });
            }
        }
        lines.join("\n")
    }

    fn grid(&self) -> String {
        match self.state.birth_date {
            Some(birth) => render::render_grid(
                birth,
                self.state.lifespan_years,
                self.today,
                &self.state.milestones,
            )
            .trim_end()
            .to_string(),
            None => render::EMPTY_STATE.to_string(),
        }
    }

    fn milestones(&self) -> String {
        if self.state.milestones.is_empty() {
            return "No milestones.".to_string();
        }
        self.state
            .milestones
            .iter()
            .map(|m| format!("{:>6}  {}", m.week_index, m.description))
            .collect::<Vec<_>>()
            .join("\n")
    }
}
