use std::io;
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use console_client::ClientSettings;
use console_core::{update, AppState, ConsoleViewModel, Msg};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyModifiers};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::{Backend, CrosstermBackend};
use ratatui::Terminal;

use super::effects::EffectRunner;
use super::ui;
use crate::config::Cli;

const EVENT_POLL_INTERVAL: Duration = Duration::from_millis(100);

pub fn run_app(cli: Cli) -> anyhow::Result<()> {
    let settings = ClientSettings {
        base_url: cli.server_url.clone(),
        ..ClientSettings::default()
    };

    let (msg_tx, msg_rx) = mpsc::channel::<Msg>();
    let runner = EffectRunner::new(settings, msg_tx.clone())?;
    let ui_tx = msg_tx.clone();

    // The poll timer doubles as the startup fetch; with polling disabled the
    // stats are fetched once and then only after a crawl or clear.
    if cli.poll_secs > 0 {
        let interval = Duration::from_secs(cli.poll_secs);
        thread::spawn(move || {
            while msg_tx.send(Msg::StatsTick).is_ok() {
                thread::sleep(interval);
            }
        });
    } else {
        let _ = msg_tx.send(Msg::StatsTick);
    }

    let mut terminal = setup_terminal()?;
    let result = run_loop(&mut terminal, msg_rx, ui_tx, &runner, &cli.server_url);
    restore_terminal(&mut terminal)?;
    result
}

fn setup_terminal() -> anyhow::Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    Ok(Terminal::new(backend)?)
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> anyhow::Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

fn run_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    msg_rx: mpsc::Receiver<Msg>,
    msg_tx: mpsc::Sender<Msg>,
    runner: &EffectRunner,
    server: &str,
) -> anyhow::Result<()> {
    let mut state = AppState::new();
    let mut view = state.view();
    terminal.draw(|frame| ui::render(frame, &view, server))?;

    loop {
        if event::poll(EVENT_POLL_INTERVAL)? {
            match event::read()? {
                Event::Key(key) => match key_action(&view, key) {
                    KeyAction::Dispatch(msg) => {
                        let _ = msg_tx.send(msg);
                    }
                    KeyAction::Quit => return Ok(()),
                    KeyAction::Ignored => {}
                },
                Event::Resize(_, _) => {
                    terminal.draw(|frame| ui::render(frame, &view, server))?;
                }
                _ => {}
            }
        }

        let mut redraw = false;
        while let Ok(msg) = msg_rx.try_recv() {
            let (next, effects) = update(std::mem::take(&mut state), msg);
            state = next;
            runner.enqueue(effects);
            if state.consume_dirty() {
                redraw = true;
            }
        }
        if redraw {
            view = state.view();
            terminal.draw(|frame| ui::render(frame, &view, server))?;
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
enum KeyAction {
    Dispatch(Msg),
    Quit,
    Ignored,
}

/// Maps a key press to a message, honoring whichever modal is on top.
fn key_action(view: &ConsoleViewModel, key: KeyEvent) -> KeyAction {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return KeyAction::Quit;
    }

    if view.notice.is_some() {
        return match key.code {
            KeyCode::Enter | KeyCode::Esc => KeyAction::Dispatch(Msg::NoticeDismissed),
            _ => KeyAction::Ignored,
        };
    }

    if view.confirm_clear {
        return match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => {
                KeyAction::Dispatch(Msg::ClearConfirmed)
            }
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
                KeyAction::Dispatch(Msg::ClearDeclined)
            }
            _ => KeyAction::Ignored,
        };
    }

    match key.code {
        KeyCode::Esc => KeyAction::Quit,
        KeyCode::Tab => KeyAction::Dispatch(Msg::FocusNext),
        KeyCode::BackTab => KeyAction::Dispatch(Msg::FocusPrev),
        KeyCode::Enter => KeyAction::Dispatch(Msg::CrawlSubmitted),
        KeyCode::Backspace => KeyAction::Dispatch(Msg::FieldBackspace),
        KeyCode::Char('r') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            KeyAction::Dispatch(Msg::StatsTick)
        }
        KeyCode::Char('k') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            KeyAction::Dispatch(Msg::ClearRequested)
        }
        KeyCode::Char(c)
            if !key.modifiers.contains(KeyModifiers::CONTROL)
                && !key.modifiers.contains(KeyModifiers::ALT) =>
        {
            KeyAction::Dispatch(Msg::FieldInput(c))
        }
        _ => KeyAction::Ignored,
    }
}
