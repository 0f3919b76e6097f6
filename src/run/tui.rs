use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;

use crate::config::Config;
use crate::ledger::TransactionStore;
use crate::ui::app::{App, FormField, InputMode, Screen};
use crate::ui::commands;
use crate::ui::util::{scroll_down, scroll_to_bottom, scroll_to_top, scroll_up};

pub(crate) fn as_tui(config: Config, store: &mut TransactionStore) -> Result<()> {
    let mut app = App::new(config);
    app.refresh(store);

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app, store);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(ref e) = result {
        tracing::error!(error = %e, "TUI exited with an error");
        eprintln!("Error: {e:?}");
    }

    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    store: &mut TransactionStore,
) -> Result<()> {
    while app.running {
        terminal.draw(|f| {
            // tab + status + command bars, table borders and header
            let content_height = f.area().height.saturating_sub(6) as usize;
            app.visible_rows = content_height.max(1);
            crate::ui::render::render(f, app);
        })?;

        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }
        if app.show_help {
            app.show_help = false;
            continue;
        }
        match app.input_mode {
            InputMode::Normal => handle_normal_input(key, app, store)?,
            InputMode::Command => handle_command_input(key, app, store)?,
            InputMode::Editing => handle_editing_input(key, app, store)?,
            InputMode::Confirm => handle_confirm_input(key, app, store)?,
        }
    }
    Ok(())
}

fn handle_normal_input(key: KeyEvent, app: &mut App, store: &mut TransactionStore) -> Result<()> {
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('c')
            if key.modifiers.contains(KeyModifiers::CONTROL) =>
        {
            app.running = false;
        }
        KeyCode::Char(':') => {
            app.input_mode = InputMode::Command;
            app.command_input.clear();
        }
        KeyCode::Char('a') => app.open_form(),
        KeyCode::Char('f') => app.set_window(app.window.next(), store),
        KeyCode::Char('F') => app.set_window(app.window.prev(), store),
        KeyCode::Char('D') if app.screen == Screen::Transactions => {
            commands::handle_command("delete-txn", app, store)?;
        }
        KeyCode::Char('j') | KeyCode::Down if app.screen == Screen::Transactions => {
            let page = app.visible_rows.max(1);
            scroll_down(
                &mut app.transaction_index,
                &mut app.transaction_scroll,
                app.transactions.len(),
                page,
            );
        }
        KeyCode::Char('k') | KeyCode::Up if app.screen == Screen::Transactions => {
            scroll_up(&mut app.transaction_index, &mut app.transaction_scroll);
        }
        KeyCode::Char('g') if app.screen == Screen::Transactions => {
            scroll_to_top(&mut app.transaction_index, &mut app.transaction_scroll);
        }
        KeyCode::Char('G') if app.screen == Screen::Transactions => {
            let page = app.visible_rows.max(1);
            scroll_to_bottom(
                &mut app.transaction_index,
                &mut app.transaction_scroll,
                app.transactions.len(),
                page,
            );
        }
        KeyCode::Char('1') => switch_screen(app, store, Screen::Dashboard),
        KeyCode::Char('2') => switch_screen(app, store, Screen::Transactions),
        KeyCode::Tab | KeyCode::BackTab => {
            let screens = Screen::all();
            let idx = screens.iter().position(|s| *s == app.screen).unwrap_or(0);
            let step = if key.code == KeyCode::Tab { 1 } else { screens.len() - 1 };
            switch_screen(app, store, screens[(idx + step) % screens.len()]);
        }
        KeyCode::Enter if app.screen == Screen::Dashboard => {
            switch_screen(app, store, Screen::Transactions);
        }
        KeyCode::Char('?') => app.show_help = true,
        KeyCode::Esc => app.status_message.clear(),
        _ => {}
    }
    Ok(())
}

fn handle_command_input(key: KeyEvent, app: &mut App, store: &mut TransactionStore) -> Result<()> {
    match key.code {
        KeyCode::Enter => {
            let input = std::mem::take(&mut app.command_input);
            app.input_mode = InputMode::Normal;
            commands::handle_command(&input, app, store)?;
        }
        KeyCode::Esc => {
            app.input_mode = InputMode::Normal;
            app.command_input.clear();
        }
        KeyCode::Backspace => {
            app.command_input.pop();
            if app.command_input.is_empty() {
                app.input_mode = InputMode::Normal;
            }
        }
        KeyCode::Char(c) => app.command_input.push(c),
        _ => {}
    }
    Ok(())
}

fn handle_editing_input(key: KeyEvent, app: &mut App, store: &mut TransactionStore) -> Result<()> {
    match key.code {
        KeyCode::Enter => app.submit_form(store)?,
        KeyCode::Esc => {
            app.form.clear();
            app.input_mode = InputMode::Normal;
            app.set_status("Add cancelled");
        }
        KeyCode::Tab | KeyCode::Down => app.form.field = app.form.field.next(),
        KeyCode::BackTab | KeyCode::Up => app.form.field = app.form.field.prev(),
        KeyCode::Char(' ') | KeyCode::Left | KeyCode::Right
            if app.form.field == FormField::Kind =>
        {
            app.form.kind = app.form.kind.toggle();
        }
        KeyCode::Backspace => {
            if let Some(input) = app.form.input_mut() {
                input.pop();
            }
        }
        KeyCode::Char(c) => {
            if let Some(input) = app.form.input_mut() {
                input.push(c);
            }
        }
        _ => {}
    }
    Ok(())
}

fn handle_confirm_input(key: KeyEvent, app: &mut App, store: &mut TransactionStore) -> Result<()> {
    match key.code {
        KeyCode::Char('y') | KeyCode::Char('Y') => app.confirm_pending(store)?,
        _ => app.cancel_pending(),
    }
    Ok(())
}

fn switch_screen(app: &mut App, store: &TransactionStore, screen: Screen) {
    app.screen = screen;
    app.refresh(store);
}
