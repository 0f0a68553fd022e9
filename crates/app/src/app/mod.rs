//! Main application module.
//!
//! Contains the App struct and the frame loop; key routing, menu actions
//! and panel events live in the submodules.

use anyhow::Result;
use ratatui::{backend::Backend, Frame, Terminal};
use std::path::{Path, PathBuf};
use std::time::Instant;

use bitworks_clipboard::Clipboard;
use bitworks_config::Config;
use bitworks_core::{Event, EventHandler, Panel};
use bitworks_keyboard::KeyRepeater;
use bitworks_logger as logger;
use bitworks_panel_editor::{Editor, FsStorage, PrefixPolicy};
use bitworks_panel_file_list::FileList;
use bitworks_panel_inbox::{load_mailbox, welcome_mailbox, Inbox};
use bitworks_theme::Theme;

use crate::boot::BootScreen;
use crate::focus::{FocusState, PanelId};
use crate::state::AppState;

mod event_handler;
mod key_handler;
mod menu_actions;

/// The three base panels.
#[derive(Debug)]
pub struct Panels {
    pub editor: Editor,
    pub file_list: FileList,
    pub inbox: Inbox,
}

impl Panels {
    pub fn get_mut(&mut self, id: PanelId) -> &mut dyn Panel {
        match id {
            PanelId::Editor => &mut self.editor,
            PanelId::FileList => &mut self.file_list,
            PanelId::Inbox => &mut self.inbox,
        }
    }
}

/// Everything the renderer needs for one frame.
pub struct RenderParts<'a> {
    pub state: &'a AppState,
    pub focus: &'a mut FocusState,
    pub panels: &'a mut Panels,
    /// Present while the boot sequence is running
    pub boot: Option<&'a BootScreen>,
}

/// Main application
pub struct App {
    state: AppState,
    focus: FocusState,
    panels: Panels,
    storage: FsStorage,
    read_only_policy: PrefixPolicy,
    repeater: KeyRepeater,
    event_handler: EventHandler,
    boot: Option<BootScreen>,
}

impl App {
    /// Create the application from configuration.
    ///
    /// Synthetic key repeat stays off until [`set_release_reporting`]
    /// confirms the terminal reports key releases.
    ///
    /// [`set_release_reporting`]: App::set_release_reporting
    pub fn new(config: Config, theme: Theme) -> Self {
        let workspace = PathBuf::from(&config.workspace.dir);

        let clipboard = if config.editor.system_clipboard {
            Clipboard::with_system_mirror()
        } else {
            Clipboard::new()
        };

        let records = match config.workspace.mailbox.as_deref() {
            Some(path) => load_mailbox(Path::new(path)).unwrap_or_else(|e| {
                logger::warn(format!("{:#}; using the welcome mailbox", e));
                welcome_mailbox()
            }),
            None => welcome_mailbox(),
        };

        let panels = Panels {
            editor: Editor::new(clipboard),
            file_list: FileList::new(&workspace, config.workspace.extensions.clone()),
            inbox: Inbox::new(records),
        };

        let mut repeater = KeyRepeater::new(
            config.keyboard.initial_delay(),
            config.keyboard.repeat_interval(),
        );
        repeater.set_enabled(false);

        let boot = config.general.show_boot.then(|| {
            BootScreen::new(config.general.boot_line_interval(), Instant::now())
        });

        logger::info(format!("Workspace: {}", workspace.display()));

        Self {
            focus: FocusState::default(),
            panels,
            storage: FsStorage::new(workspace),
            read_only_policy: PrefixPolicy::new(config.editor.read_only_prefixes.clone()),
            repeater,
            event_handler: EventHandler::new(config.keyboard.frame_duration()),
            boot,
            state: AppState::new(config, theme),
        }
    }

    /// Tell the app whether the terminal reports key releases; synthetic
    /// repeat runs only when it does and `keyboard.key_repeat` is on.
    pub fn set_release_reporting(&mut self, supported: bool) {
        let enabled = supported && self.state.config.keyboard.key_repeat;
        self.repeater.set_enabled(enabled);
        logger::info(format!(
            "Key repeat {}",
            if enabled { "enabled" } else { "disabled" }
        ));
    }

    /// Run the main application loop
    pub fn run<B: Backend>(
        &mut self,
        terminal: &mut Terminal<B>,
        render_fn: impl Fn(&mut Frame<'_>, RenderParts<'_>),
    ) -> Result<()> {
        logger::info("Application started");

        while !self.state.should_quit {
            terminal.draw(|frame| render_fn(frame, self.render_parts()))?;

            let events = self.event_handler.next_frame()?;
            self.process_frame(events, Instant::now())?;
        }

        logger::info("Application finished");
        Ok(())
    }

    /// One tick: apply the frame's terminal events, then advance the repeat
    /// timer once and the boot sequence.
    pub fn process_frame(&mut self, events: Vec<Event>, now: Instant) -> Result<()> {
        for event in events {
            match event {
                Event::Key(key) => self.handle_key_press(key, now)?,
                Event::KeyRepeat(key) => self.handle_terminal_repeat(key, now)?,
                Event::KeyRelease(code) => self.repeater.release(code),
                Event::Resize(width, height) => {
                    logger::debug(format!("Resize: {}x{}", width, height));
                }
            }
        }

        if let Some(repeat) = self.repeater.tick(now) {
            self.handle_repeat(repeat, now)?;
        }

        if let Some(boot) = &mut self.boot {
            boot.tick(now);
            if boot.is_done() {
                self.boot = None;
                logger::debug("Boot sequence finished");
            }
        }

        Ok(())
    }

    pub fn render_parts(&mut self) -> RenderParts<'_> {
        RenderParts {
            state: &self.state,
            focus: &mut self.focus,
            panels: &mut self.panels,
            boot: self.boot.as_ref(),
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn focus(&self) -> &FocusState {
        &self.focus
    }

    pub fn panels(&self) -> &Panels {
        &self.panels
    }

    pub fn panels_mut(&mut self) -> &mut Panels {
        &mut self.panels
    }

    pub fn repeater(&self) -> &KeyRepeater {
        &self.repeater
    }

    pub fn is_booting(&self) -> bool {
        self.boot.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::focus::Focus;
    use crate::menu::MenuId;
    use bitworks_panel_editor::Cursor;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use std::time::Duration;

    fn test_app(workspace: &std::path::Path) -> App {
        let mut config = Config::default();
        config.general.show_boot = false;
        config.workspace.dir = workspace.display().to_string();
        App::new(config, Theme::default())
    }

    fn press(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn ctrl(c: char) -> Event {
        Event::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL))
    }

    fn status(app: &App) -> Option<String> {
        app.state().status.as_ref().map(|s| s.text.clone())
    }

    #[test]
    fn test_any_key_skips_boot() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = Config::default();
        config.workspace.dir = dir.path().display().to_string();
        let mut app = App::new(config, Theme::default());
        assert!(app.is_booting());

        let now = Instant::now();
        app.process_frame(vec![press(KeyCode::Char('x'))], now).unwrap();
        assert!(!app.is_booting());
        // The skipping key is not typed
        assert!(app.panels().editor.buffer().is_empty());
    }

    #[test]
    fn test_f2_twice_copies_selection() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = test_app(dir.path());
        app.panels_mut().editor = Editor::from_text("hello");
        let now = Instant::now();

        app.process_frame(vec![ctrl('a'), press(KeyCode::F(2))], now)
            .unwrap();
        assert_eq!(app.focus().focus(), Focus::Menu(MenuId::Edit));

        app.process_frame(vec![press(KeyCode::F(2))], now).unwrap();
        assert_eq!(app.focus().focus(), Focus::Panel(PanelId::Editor));
        assert_eq!(app.panels().editor.clipboard().get(), "hello");
        assert_eq!(
            status(&app).as_deref(),
            Some("Copied to clipboard: \"hello\" (5 chars)")
        );
    }

    #[test]
    fn test_held_key_repeats_until_release() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = test_app(dir.path());
        app.set_release_reporting(true);
        app.panels_mut().editor = Editor::from_text("abcdefghij");

        let start = Instant::now();
        app.process_frame(vec![press(KeyCode::Right)], start).unwrap();
        assert_eq!(app.panels().editor.cursor(), Cursor::at(0, 1));

        // 400ms delay then every 50ms: repeats at 400, 450, 500, 550
        for ms in (10..=550).step_by(10) {
            app.process_frame(Vec::new(), start + Duration::from_millis(ms))
                .unwrap();
        }
        assert_eq!(app.panels().editor.cursor(), Cursor::at(0, 5));

        let released = start + Duration::from_millis(560);
        app.process_frame(vec![Event::KeyRelease(KeyCode::Right)], released)
            .unwrap();
        app.process_frame(Vec::new(), released + Duration::from_secs(1))
            .unwrap();
        assert_eq!(app.panels().editor.cursor(), Cursor::at(0, 5));
    }

    #[test]
    fn test_repeat_disabled_without_release_reporting() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = test_app(dir.path());
        app.panels_mut().editor = Editor::from_text("abcdefghij");

        let start = Instant::now();
        app.process_frame(vec![press(KeyCode::Right)], start).unwrap();
        app.process_frame(Vec::new(), start + Duration::from_secs(2))
            .unwrap();
        assert!(!app.repeater().is_enabled());
        assert_eq!(app.panels().editor.cursor(), Cursor::at(0, 1));
    }

    #[test]
    fn test_menu_suspends_repeat() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = test_app(dir.path());
        app.set_release_reporting(true);
        app.panels_mut().editor = Editor::from_text("abcdefghij");

        let start = Instant::now();
        app.process_frame(vec![press(KeyCode::Right), press(KeyCode::F(1))], start)
            .unwrap();
        assert!(app.repeater().is_suspended());
        assert_eq!(app.repeater().held_count(), 0);

        app.process_frame(Vec::new(), start + Duration::from_secs(1))
            .unwrap();
        assert_eq!(app.panels().editor.cursor(), Cursor::at(0, 1));

        app.process_frame(vec![press(KeyCode::Esc)], start + Duration::from_secs(1))
            .unwrap();
        assert!(!app.repeater().is_suspended());
    }

    #[test]
    fn test_open_file_from_list() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("notes.txt"), "first\nsecond").unwrap();
        std::fs::write(dir.path().join("sys_boot.txt"), "locked").unwrap();
        let mut app = test_app(dir.path());
        let now = Instant::now();

        app.process_frame(vec![press(KeyCode::Tab), press(KeyCode::Enter)], now)
            .unwrap();
        assert_eq!(app.focus().focus(), Focus::Panel(PanelId::Editor));
        assert_eq!(app.panels().editor.buffer().to_text(), "first\nsecond");
        assert_eq!(status(&app).as_deref(), Some("Opened notes.txt"));

        // Second file is read-only by prefix; typing reports an error
        app.process_frame(
            vec![
                press(KeyCode::Tab),
                press(KeyCode::Down),
                press(KeyCode::Enter),
                press(KeyCode::Char('x')),
            ],
            now,
        )
        .unwrap();
        assert!(app.panels().editor.document().read_only);
        assert_eq!(app.panels().editor.buffer().to_text(), "locked");
        let message = app.state().status.clone().unwrap();
        assert!(message.is_error);
        assert_eq!(message.text, "Error: document is read-only");
    }

    #[test]
    fn test_save_untitled_document() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = test_app(dir.path());
        let now = Instant::now();

        app.process_frame(
            vec![press(KeyCode::Char('h')), press(KeyCode::Char('i')), ctrl('s')],
            now,
        )
        .unwrap();
        assert_eq!(
            std::fs::read_to_string(dir.path().join("untitled.txt")).unwrap(),
            "hi"
        );
        assert!(!app.panels().editor.document().modified);
        assert_eq!(status(&app).as_deref(), Some("Saved untitled.txt"));
        assert_eq!(app.panels().file_list.selected_name(), Some("untitled.txt"));
    }

    #[test]
    fn test_inbox_modal_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = test_app(dir.path());
        let now = Instant::now();

        app.process_frame(
            vec![press(KeyCode::Tab), press(KeyCode::Tab), press(KeyCode::Enter)],
            now,
        )
        .unwrap();
        assert_eq!(app.focus().focus(), Focus::EmailModal);
        assert!(app.panels().inbox.records()[0].read);
        assert!(app.repeater().is_suspended());

        app.process_frame(vec![press(KeyCode::Down)], now).unwrap();
        assert_eq!(app.focus().focus(), Focus::EmailModal);

        app.process_frame(vec![press(KeyCode::Char('x'))], now).unwrap();
        assert_eq!(app.focus().focus(), Focus::Panel(PanelId::Inbox));
    }

    #[test]
    fn test_menu_new_and_exit() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = test_app(dir.path());
        app.panels_mut().editor = Editor::from_text("draft");
        let now = Instant::now();

        app.process_frame(vec![press(KeyCode::F(1)), press(KeyCode::Char('1'))], now)
            .unwrap();
        assert!(app.panels().editor.buffer().is_empty());

        app.process_frame(vec![press(KeyCode::F(3)), press(KeyCode::F(1))], now)
            .unwrap();
        assert!(status(&app).unwrap().starts_with("BitWorks Text Editor v"));

        app.process_frame(vec![ctrl('q')], now).unwrap();
        assert!(app.state().should_quit);
    }

    /// Run empty frames every 33ms for `total`, starting after `start`.
    fn idle(app: &mut App, start: Instant, total: Duration) {
        let step = Duration::from_millis(33);
        let mut elapsed = step;
        while elapsed <= total {
            app.process_frame(Vec::new(), start + elapsed).unwrap();
            elapsed += step;
        }
    }

    #[test]
    fn test_tapped_keys_do_not_keep_repeating() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = test_app(dir.path());
        app.set_release_reporting(true);
        app.panels_mut().editor = Editor::from_text("important document");

        let start = Instant::now();
        app.process_frame(
            vec![
                press(KeyCode::End),
                Event::KeyRelease(KeyCode::End),
                press(KeyCode::Backspace),
                Event::KeyRelease(KeyCode::Backspace),
                press(KeyCode::Char('s')),
                Event::KeyRelease(KeyCode::Char('s')),
                Event::Key(KeyEvent::new(KeyCode::Char('!'), KeyModifiers::SHIFT)),
                // Shift is released before the key, so the release is unshifted
                Event::KeyRelease(KeyCode::Char('1')),
            ],
            start,
        )
        .unwrap();
        assert_eq!(app.repeater().held_count(), 0);

        idle(&mut app, start, Duration::from_secs(2));
        assert_eq!(
            app.panels().editor.buffer().to_text(),
            "important documens!"
        );
    }

    #[test]
    fn test_terminal_repeat_used_when_timer_off() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = Config::default();
        config.general.show_boot = false;
        config.keyboard.key_repeat = false;
        config.workspace.dir = dir.path().display().to_string();
        let mut app = App::new(config, Theme::default());
        app.set_release_reporting(true);
        app.panels_mut().editor = Editor::from_text("abcdef");

        let right = KeyEvent::new(KeyCode::Right, KeyModifiers::NONE);
        app.process_frame(
            vec![
                Event::Key(right),
                Event::KeyRepeat(right),
                Event::KeyRepeat(right),
            ],
            Instant::now(),
        )
        .unwrap();
        assert!(!app.repeater().is_enabled());
        assert_eq!(app.panels().editor.cursor(), Cursor::at(0, 3));
    }

    #[test]
    fn test_terminal_repeat_outside_timer_keys() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["a.txt", "b.txt", "c.txt"] {
            std::fs::write(dir.path().join(name), "").unwrap();
        }
        let mut app = test_app(dir.path());
        app.set_release_reporting(true);
        app.panels_mut().editor = Editor::from_text("abcdef");
        let now = Instant::now();

        // The editor's own timer owns repeats of its keys
        let right = KeyEvent::new(KeyCode::Right, KeyModifiers::NONE);
        app.process_frame(vec![Event::Key(right), Event::KeyRepeat(right)], now)
            .unwrap();
        assert_eq!(app.panels().editor.cursor(), Cursor::at(0, 1));

        // Lists are not timer-repeated, so terminal repeats move the highlight
        let down = KeyEvent::new(KeyCode::Down, KeyModifiers::NONE);
        app.process_frame(
            vec![press(KeyCode::Tab), Event::Key(down), Event::KeyRepeat(down)],
            now,
        )
        .unwrap();
        assert_eq!(app.panels().file_list.selected_name(), Some("c.txt"));
    }

    #[test]
    fn test_status_cleared_by_next_key() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = test_app(dir.path());
        let now = Instant::now();

        app.process_frame(vec![ctrl('v')], now).unwrap();
        assert_eq!(status(&app).as_deref(), Some("Clipboard is empty"));
        app.process_frame(vec![press(KeyCode::Left)], now).unwrap();
        assert_eq!(status(&app), None);
    }
}
