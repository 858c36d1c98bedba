use clap::{error::ErrorKind, CommandFactory, Parser};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    tty::IsTty,
};
use mathdash::{
    app::{App, Flow},
    config::{Config, ConfigStore, FileConfigStore},
    logging,
    question::{Category, Difficulty},
    runtime::{CrosstermEventSource, FixedTicker, QuizEvent, QuizEventSource, Runner, Ticker},
    session::SessionConfig,
    ui::screen::current_screen,
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use std::{
    error::Error,
    io::{self, stdin},
};

/// timed arithmetic quiz in the terminal
#[derive(Parser, Debug, Clone)]
#[clap(
    version,
    about,
    long_about = "A timed arithmetic quiz: randomized questions across arithmetic, series and sorting categories, a per-question countdown, and a scored review at the end."
)]
pub struct Cli {
    /// player name shown on the results screen
    #[clap(short = 'n', long)]
    name: Option<String>,

    /// question category to include (repeat for several; default: saved selection)
    #[clap(short = 'c', long = "category", value_enum)]
    categories: Vec<Category>,

    /// operand size profile
    #[clap(short = 'd', long, value_enum)]
    difficulty: Option<Difficulty>,

    /// number of questions in the session
    #[clap(short = 'q', long)]
    number_of_questions: Option<usize>,

    /// seconds allowed per question
    #[clap(short = 's', long)]
    number_of_secs: Option<u32>,

    /// keep questions in generation order
    #[clap(long)]
    no_shuffle: bool,

    /// skip questions whose prompt was already asked in this session
    #[clap(long)]
    skip_repeats: bool,

    /// remember these settings as the new defaults
    #[clap(long)]
    save_config: bool,

    /// print the final report as JSON after exiting
    #[clap(long)]
    json: bool,
}

impl Cli {
    /// Overlay command line flags on saved preferences
    fn to_session_config(&self, saved: &Config) -> SessionConfig {
        let mut config = SessionConfig::from(saved);

        if let Some(ref name) = self.name {
            config.user_name = name.clone();
        }
        if !self.categories.is_empty() {
            config.categories = self.categories.iter().copied().collect();
        }
        if let Some(difficulty) = self.difficulty {
            config.difficulty = difficulty;
        }
        if let Some(n) = self.number_of_questions {
            config.number_of_questions = n;
        }
        if let Some(secs) = self.number_of_secs {
            config.number_of_secs = secs;
        }
        if self.no_shuffle {
            config.shuffle = false;
        }
        if self.skip_repeats {
            config.skip_repeats = true;
        }

        config
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    let _log_guard = logging::init();

    let store = FileConfigStore::new();
    let session_config = cli.to_session_config(&store.load());

    if let Err(e) = session_config.validate() {
        let mut cmd = Cli::command();
        cmd.error(ErrorKind::InvalidValue, e).exit();
    }

    if cli.save_config {
        if let Err(e) = store.save(&Config::from(&session_config)) {
            tracing::warn!(path = %store.path().display(), error = %e, "could not save config");
        }
    }

    if !stdin().is_tty() {
        let mut cmd = Cli::command();
        cmd.error(ErrorKind::Io, "stdin must be a tty").exit();
    }

    let mut app = App::new(session_config)?;

    enable_raw_mode()?;

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = start_tui(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    result?;

    if cli.json {
        if let Some(report) = app.quiz.report() {
            println!("{}", report.to_json()?);
        }
    }

    Ok(())
}

fn start_tui<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<(), Box<dyn Error>> {
    let mut runner = Runner::new(CrosstermEventSource::new(), FixedTicker::default());
    run_loop(terminal, app, &mut runner)
}

fn run_loop<B: Backend, E: QuizEventSource, T: Ticker>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    runner: &mut Runner<E, T>,
) -> Result<(), Box<dyn Error>> {
    terminal.draw(|f| current_screen(&app.state).render(app, f))?;

    loop {
        match runner.step() {
            QuizEvent::Tick => app.on_tick(),
            QuizEvent::Resize => {}
            QuizEvent::Key(key) => {
                let shown = (app.quiz.current_index(), app.quiz.answers().len());
                if app.on_key(key)? == Flow::Quit {
                    break;
                }
                // a submission or restart armed a fresh countdown
                if (app.quiz.current_index(), app.quiz.answers().len()) != shown {
                    runner.reset_ticks();
                }
            }
        }

        terminal.draw(|f| current_screen(&app.state).render(app, f))?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use mathdash::{app::AppState, runtime::TestEventSource};
    use ratatui::backend::TestBackend;
    use std::{sync::mpsc, time::Duration};

    fn saved() -> Config {
        Config {
            user_name: "saved".into(),
            categories: vec![Category::Addition],
            difficulty: Difficulty::Medium,
            number_of_questions: 5,
            number_of_secs: 20,
            shuffle: true,
            skip_repeats: false,
        }
    }

    #[test]
    fn test_cli_defaults_keep_saved_config() {
        let cli = Cli::parse_from(["mathdash"]);
        let config = cli.to_session_config(&saved());

        assert_eq!(config.user_name, "saved");
        assert_eq!(config.difficulty, Difficulty::Medium);
        assert_eq!(config.number_of_questions, 5);
        assert_eq!(config.number_of_secs, 20);
        assert!(config.shuffle);
        assert!(!config.skip_repeats);
        assert!(!cli.json);
        assert!(!cli.save_config);
    }

    #[test]
    fn test_cli_overrides() {
        let cli = Cli::parse_from([
            "mathdash",
            "-n",
            "ada",
            "-c",
            "squares",
            "--category",
            "descending",
            "-d",
            "hard",
            "-q",
            "3",
            "-s",
            "7",
            "--no-shuffle",
            "--skip-repeats",
        ]);
        let config = cli.to_session_config(&saved());

        assert_eq!(config.user_name, "ada");
        assert_eq!(
            config.categories.iter().copied().collect::<Vec<_>>(),
            vec![Category::Squares, Category::DescendingSort]
        );
        assert_eq!(config.difficulty, Difficulty::Hard);
        assert_eq!(config.number_of_questions, 3);
        assert_eq!(config.number_of_secs, 7);
        assert!(!config.shuffle);
        assert!(config.skip_repeats);
    }

    #[test]
    fn test_cli_zero_count_fails_validation() {
        let cli = Cli::parse_from(["mathdash", "-q", "0"]);
        assert!(cli.to_session_config(&saved()).validate().is_err());
    }

    #[test]
    fn test_cli_rejects_unknown_category() {
        assert!(Cli::try_parse_from(["mathdash", "-c", "calculus"]).is_err());
    }

    #[test]
    fn test_run_loop_until_quit() {
        let config = SessionConfig {
            number_of_questions: 1,
            ..SessionConfig::from(&saved())
        };
        let mut app = App::new(config).unwrap();
        let answer = app.quiz.questions()[0].answer.to_string();

        let (tx, rx) = mpsc::channel();
        for c in answer.chars() {
            tx.send(QuizEvent::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE)))
                .unwrap();
        }
        tx.send(QuizEvent::Key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE)))
            .unwrap();
        tx.send(QuizEvent::Key(KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE)))
            .unwrap();

        let mut runner = Runner::new(
            TestEventSource::new(rx),
            FixedTicker::new(Duration::from_secs(60)),
        );
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        run_loop(&mut terminal, &mut app, &mut runner).unwrap();

        assert_eq!(app.state, AppState::Results);
        assert_eq!(app.quiz.report().unwrap().total_correct, 1);
    }
}
