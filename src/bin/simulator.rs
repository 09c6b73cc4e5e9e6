// Interactive keypad simulator.
// Run with: cargo run --bin keypad_simulator -- [config.json]
use crossterm::cursor::MoveTo;
use crossterm::execute;
use crossterm::style::Stylize;
use crossterm::terminal::{Clear, ClearType};
use keypad_core::core::codec;
use keypad_core::init;
use keypad_core::{KeypadError, PredictiveEngine, Session};
use std::io::{self, stdin, stdout, Write};
use std::path::PathBuf;
use std::process::ExitCode;

fn main() -> ExitCode {
    init::init_logger();

    let config_path = std::env::args().nth(1).map(PathBuf::from);
    let engine = init::load_config(config_path.as_deref()).and_then(|config| PredictiveEngine::open(&config));
    let mut engine = match engine {
        Ok(engine) => engine,
        Err(e) => {
            log::error!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = run(&mut engine) {
        log::error!("terminal error: {}", e);
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

fn run(engine: &mut PredictiveEngine) -> io::Result<()> {
    let mut session = Session::new();
    let mut text = String::new();
    let mut status = String::new();

    loop {
        print_ui(&text, &session, &status)?;
        status.clear();

        let mut input = String::new();
        if stdin().read_line(&mut input)? == 0 {
            break;
        }
        let cmd = input.trim();

        match cmd {
            "exit" => break,
            "" => {
                // Enter key - commit the top prediction
                if let Some(word) = session.commit() {
                    commit(&mut text, &word);
                }
            }
            "<" => session.backspace(engine),
            s if s.starts_with(':') && s.len() > 1 => {
                // Select prediction :1, :2 etc
                match s[1..].parse::<usize>() {
                    Ok(n) if n > 0 => match session.commit_at(n - 1) {
                        Some(word) => commit(&mut text, &word),
                        None => status = format!("no prediction {}", n),
                    },
                    _ => status = format!("bad selection '{}'", s),
                }
            }
            s if s.starts_with('!') => {
                let word = s[1..].to_lowercase();
                status = match engine.learn_word(&word) {
                    Ok(()) => format!("learned '{}'", word),
                    Err(e @ KeypadError::StorageAppendFailed { .. }) => format!("learned for this session only: {}", e),
                    Err(e) => e.to_string(),
                };
            }
            s => match codec::parse_keys(s) {
                Ok(digits) => {
                    for digit in digits {
                        if !session.press(engine, digit) {
                            status = format!("no word continues with {}", digit);
                            break;
                        }
                    }
                }
                Err(e) => status = e.to_string(),
            },
        }
    }
    Ok(())
}

fn commit(text: &mut String, word: &str) {
    text.push_str(word);
    text.push(' ');
}

fn print_ui(text: &str, session: &Session, status: &str) -> io::Result<()> {
    let mut out = stdout();
    execute!(out, Clear(ClearType::All), MoveTo(0, 0))?;

    writeln!(out, "{}", "KeyPad Simulator".bold())?;
    writeln!(out, "---------------------------------------------------------------")?;
    writeln!(out, "Type keys 2-9, then [Enter] to commit the first prediction.")?;
    writeln!(out, "Select with ':1', ':2'. '<' deletes a key, '!word' learns a word.")?;
    writeln!(out, "'exit' quits.\n")?;

    writeln!(out, "Text: {}", text)?;
    let keys: String = session.digits().iter().map(|d| d.to_string()).collect();
    let in_progress = session.word_in_progress().unwrap_or_default();
    writeln!(out, "Keys: [{}] {}", keys, in_progress.as_str().green())?;

    if session.predictions().is_empty() {
        writeln!(out, "\n{}", "No predictions.".dark_grey())?;
    } else {
        writeln!(out, "\nPredictions:")?;
        for (i, word) in session.predictions().iter().enumerate() {
            writeln!(out, "  :{}: {}", i + 1, word)?;
        }
    }

    if !status.is_empty() {
        writeln!(out, "\n{}", status.yellow())?;
    }
    write!(out, "\n> ")?;
    out.flush()
}
