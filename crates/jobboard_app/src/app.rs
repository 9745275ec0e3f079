use std::io::{self, BufRead, Write};
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use chrono::Local;
use jobboard_core::{render_page, update, AppState, Msg};
use jobboard_engine::{EngineHandle, PageWriter};
use jobboard_logging::{board_error, board_info};

use crate::cli::CliArgs;
use crate::commands::{parse_command, Command, HELP_TEXT};
use crate::console;
use crate::effects::{Completion, EffectRunner};

const POLL_INTERVAL: Duration = Duration::from_millis(50);

pub(crate) fn run_app(args: CliArgs) -> anyhow::Result<()> {
    let engine = EngineHandle::new(args.service_settings())?;
    let writer = PageWriter::new(args.output.clone());
    let mut app = App::new(EffectRunner::new(engine), writer, io::stdout());

    // Stdin is read off-thread so engine completions keep flowing while the user types.
    let (line_tx, line_rx) = mpsc::channel::<String>();
    thread::spawn(move || {
        for line in io::stdin().lock().lines() {
            let Ok(line) = line else { break };
            if line_tx.send(line).is_err() {
                break;
            }
        }
    });

    app.greet()?;
    loop {
        match line_rx.recv_timeout(POLL_INTERVAL) {
            Ok(line) => {
                if app.handle_line(&line)? == Flow::Quit {
                    break;
                }
            }
            Err(mpsc::RecvTimeoutError::Timeout) => {}
            Err(mpsc::RecvTimeoutError::Disconnected) => break,
        }
        app.pump_engine()?;
    }
    board_info!("Exiting");
    Ok(())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Flow {
    Continue,
    Quit,
}

/// Single owner of [`AppState`]; every mutation happens through [`App::dispatch`].
pub(crate) struct App<W: Write> {
    state: AppState,
    runner: EffectRunner,
    writer: PageWriter,
    out: W,
}

impl<W: Write> App<W> {
    pub(crate) fn new(runner: EffectRunner, writer: PageWriter, out: W) -> Self {
        Self {
            state: AppState::new(),
            runner,
            writer,
            out,
        }
    }

    #[cfg(test)]
    pub(crate) fn state(&self) -> &AppState {
        &self.state
    }

    fn greet(&mut self) -> io::Result<()> {
        writeln!(self.out, "Job board. Results page: {}", self.writer.target().display())?;
        writeln!(self.out, "Type `help` for commands.")?;
        self.publish()
    }

    pub(crate) fn handle_line(&mut self, line: &str) -> io::Result<Flow> {
        match parse_command(line) {
            Ok(None) => {}
            Ok(Some(Command::Dispatch(msg))) => self.dispatch(msg)?,
            Ok(Some(Command::Show)) => self.print_view()?,
            Ok(Some(Command::Ping)) => self.runner.check_health(),
            Ok(Some(Command::Help)) => writeln!(self.out, "{HELP_TEXT}")?,
            Ok(Some(Command::Quit)) => return Ok(Flow::Quit),
            Err(err) => writeln!(self.out, "{err}")?,
        }
        Ok(Flow::Continue)
    }

    /// Applies every completion the engine has ready.
    pub(crate) fn pump_engine(&mut self) -> io::Result<()> {
        while let Some(completion) = self.runner.poll() {
            self.complete(completion)?;
        }
        Ok(())
    }

    /// Blocks up to `timeout` for one completion. Returns whether one arrived.
    #[cfg(test)]
    pub(crate) fn wait_for_engine(&mut self, timeout: Duration) -> io::Result<bool> {
        match self.runner.wait(timeout) {
            Some(completion) => {
                self.complete(completion)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    fn complete(&mut self, completion: Completion) -> io::Result<()> {
        match completion {
            Completion::Msg(msg) => self.dispatch(msg),
            Completion::Notice(text) => writeln!(self.out, "{text}"),
        }
    }

    pub(crate) fn dispatch(&mut self, msg: Msg) -> io::Result<()> {
        let state = std::mem::take(&mut self.state);
        let (state, effects) = update(state, msg);
        self.state = state;
        self.runner.run(effects);

        if self.state.consume_dirty() {
            self.publish()?;
        }
        Ok(())
    }

    fn publish(&mut self) -> io::Result<()> {
        let view = self.state.view();
        match render_page(&view) {
            Ok(markup) => {
                if let Err(err) = self.writer.write(&markup) {
                    board_error!(
                        "Failed to write results page {:?}: {}",
                        self.writer.target(),
                        err
                    );
                }
            }
            Err(err) => board_error!("{}", err),
        }
        self.print_view()
    }

    fn print_view(&mut self) -> io::Result<()> {
        let view = self.state.view();
        writeln!(self.out, "-- {} --", Local::now().format("%H:%M:%S"))?;
        for line in console::render(&view) {
            writeln!(self.out, "{line}")?;
        }
        self.out.flush()
    }
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::sync::Arc;

    use jobboard_core::StatusStyle;
    use jobboard_engine::{
        FailureKind, FetchReply, JobPayload, SearchService, ServiceError, StartRequest,
        StatusReply,
    };
    use tempfile::TempDir;

    use super::*;

    struct CannedService;

    #[async_trait::async_trait]
    impl SearchService for CannedService {
        async fn start_search(&self, request: &StartRequest) -> Result<StatusReply, ServiceError> {
            Ok(StatusReply {
                message: format!("Started scraping {}", request.query),
            })
        }

        async fn fetch_results(&self, query: &str) -> Result<FetchReply, ServiceError> {
            match query {
                "empty" => Ok(FetchReply::Message("no jobs found".to_string())),
                "broken" => Err(ServiceError {
                    kind: FailureKind::Network,
                    message: "connection reset".to_string(),
                }),
                _ => Ok(FetchReply::Jobs(vec![JobPayload {
                    title: "Engineer".to_string(),
                    company: "Acme".to_string(),
                    location: "NYC".to_string(),
                    posted_date: Some("N/A".to_string()),
                    description: "Knows Go and Rust".to_string(),
                    source: "LinkedIn".to_string(),
                    job_url: "http://x".to_string(),
                }])),
            }
        }

        async fn health(&self) -> Result<StatusReply, ServiceError> {
            Ok(StatusReply {
                message: "up".to_string(),
            })
        }
    }

    fn test_app(dir: &TempDir) -> App<Vec<u8>> {
        jobboard_logging::initialize_for_tests();
        let engine = EngineHandle::with_service(Arc::new(CannedService)).unwrap();
        App::new(
            EffectRunner::new(engine),
            PageWriter::new(dir.path().join("jobs.html")),
            Vec::new(),
        )
    }

    fn run_lines(app: &mut App<Vec<u8>>, lines: &[&str]) {
        for line in lines {
            app.handle_line(line).unwrap();
        }
        assert!(app.wait_for_engine(Duration::from_secs(5)).unwrap());
    }

    #[test]
    fn fetch_writes_page_with_stats_and_tags() {
        let dir = TempDir::new().unwrap();
        let mut app = test_app(&dir);
        run_lines(&mut app, &["query rust", "fetch"]);

        let page = fs::read_to_string(dir.path().join("jobs.html")).unwrap();
        assert!(page.contains("1 jobs found | 1 companies | 1 locations"));
        assert!(page.contains("<span class=\"tag\">Go</span>"));
        assert!(page.contains("<span class=\"tag\">Rust</span>"));
        assert!(!app.state().is_loading());

        let console = String::from_utf8(app.out.clone()).unwrap();
        assert!(console.contains("  1. Engineer - Acme (NYC)"));
    }

    #[test]
    fn service_message_leaves_list_empty() {
        let dir = TempDir::new().unwrap();
        let mut app = test_app(&dir);
        run_lines(&mut app, &["query empty", "fetch"]);

        assert_eq!(app.state().status().text, "no jobs found");
        let page = fs::read_to_string(dir.path().join("jobs.html")).unwrap();
        assert!(!page.contains("statsSection"));
        assert!(!page.contains("job-card"));
    }

    #[test]
    fn fetch_failure_shows_error_style() {
        let dir = TempDir::new().unwrap();
        let mut app = test_app(&dir);
        run_lines(&mut app, &["query broken", "fetch"]);

        assert_eq!(app.state().status().style, StatusStyle::Error);
        assert!(!app.state().is_loading());
    }

    #[test]
    fn start_search_reports_service_message() {
        let dir = TempDir::new().unwrap();
        let mut app = test_app(&dir);
        run_lines(&mut app, &["query data engineer", "start"]);

        assert_eq!(app.state().status().text, "Started scraping data engineer");
        assert_eq!(app.state().status().style, StatusStyle::Success);
    }

    #[test]
    fn toggle_and_quit_lines() {
        let dir = TempDir::new().unwrap();
        let mut app = test_app(&dir);
        run_lines(&mut app, &["fetch"]);

        app.handle_line("toggle 1").unwrap();
        let page = fs::read_to_string(dir.path().join("jobs.html")).unwrap();
        assert!(page.contains("job-description expanded"));
        assert!(page.contains(">Show less</button>"));

        assert_eq!(app.handle_line("bogus").unwrap(), Flow::Continue);
        assert_eq!(app.handle_line("quit").unwrap(), Flow::Quit);
    }
}
