//! Application state and main event loop.

use crate::config::AppConfig;
use crate::domain::{Figure, NavEntry, NavState, Panel, PanelDeck, TabController, TabDescriptor};
use crate::error::{AppError, Result};
use crate::ui::input::{Action, InputHandler};
use crossterm::event::{self, Event, KeyEvent};
use ratatui::prelude::*;
use std::time::{Duration, Instant};

/// Application view state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppView {
    /// Main tabbed-panel browse view
    #[default]
    Browse,
    /// Help overlay showing keybindings
    Help,
}

/// Main application state
pub struct App {
    /// Navigation drawer
    pub nav: NavState,
    /// Tab focus and selection state
    pub tabs: TabController,
    /// Panels and figures the tabs switch between
    pub deck: PanelDeck,

    // UI State
    /// Current view
    pub view: AppView,
    /// Error message to display
    pub error_message: Option<String>,
    /// Should quit the application
    pub should_quit: bool,

    config: AppConfig,
    input_handler: InputHandler,
}

impl App {
    /// Create a new application instance.
    ///
    /// Validates every tab's panel and figure association against the deck
    /// before the event loop starts, so malformed content fails here instead
    /// of on the first activation. On success the deck is left showing the
    /// initially selected tab's content.
    pub fn new(
        config: AppConfig,
        tabs: TabController,
        mut deck: PanelDeck,
        nav_entries: Vec<NavEntry>,
    ) -> Result<Self> {
        tabs.validate_against(&mut deck)?;

        let nav = if config.nav.start_open {
            NavState::open(nav_entries)
        } else {
            NavState::closed(nav_entries)
        };

        let input_handler = InputHandler::new(config.ui.vim_navigation);

        Ok(Self {
            nav,
            tabs,
            deck,
            view: AppView::Browse,
            error_message: None,
            should_quit: false,
            config,
            input_handler,
        })
    }

    /// Build the bundled destination browser content.
    pub fn sample(config: AppConfig) -> Result<Self> {
        let tabs = TabController::new(
            vec![
                TabDescriptor::new("Moon", "panel-moon", "figure-moon"),
                TabDescriptor::new("Mars", "panel-mars", "figure-mars"),
                TabDescriptor::new("Europa", "panel-europa", "figure-europa"),
                TabDescriptor::new("Titan", "panel-titan", "figure-titan"),
            ],
            0,
        )?;

        let deck = PanelDeck::new(
            vec![
                Panel::new(
                    "panel-moon",
                    "MOON",
                    "See our planet as you have never seen it before. A perfect \
                     relaxing trip to help regain perspective. While you are \
                     there, take in some history by visiting the Luna 2 and \
                     Apollo 11 landing sites.",
                ),
                Panel::new(
                    "panel-mars",
                    "MARS",
                    "Don't forget to pack your hiking boots. You will need them \
                     to tackle Olympus Mons, the tallest planetary mountain in \
                     our solar system. It is two and a half times the size of \
                     Everest.",
                ),
                Panel::new(
                    "panel-europa",
                    "EUROPA",
                    "The smallest of the four Galilean moons orbiting Jupiter, \
                     Europa is a winter lover's dream. With an icy surface, it \
                     is perfect for a bit of ice skating, curling, hockey, or \
                     simple relaxation in your snug wintery cabin.",
                ),
                Panel::new(
                    "panel-titan",
                    "TITAN",
                    "The only moon known to have a dense atmosphere other than \
                     Earth, Titan is a home away from home. Just with a lot \
                     more rain and not the nicest of air.",
                ),
            ],
            vec![
                Figure::new(
                    "figure-moon",
                    "    _.._\n  .' .-'`\n /  /\n |  |\n \\  '.___.;\n  '._  _.'\n     ``",
                ),
                Figure::new(
                    "figure-mars",
                    "   .-~~-.\n  /  o o  \\\n |    ~    |\n  \\  ___  /\n   '-...-'",
                ),
                Figure::new(
                    "figure-europa",
                    "   .----.\n  / .-\"-.`\n | | icy ||\n  \\ '---' /\n   '----'",
                ),
                Figure::new(
                    "figure-titan",
                    "    ___\n .-'   '-.\n/  haze   \\\n\\         /\n '-.___.-'",
                ),
            ],
        );

        let nav_entries = vec![
            NavEntry::new("00", "Home"),
            NavEntry::new("01", "Destination"),
            NavEntry::new("02", "Crew"),
            NavEntry::new("03", "Technology"),
        ];

        Self::new(config, tabs, deck, nav_entries)
    }

    /// Handle a key event. Returns true when the application should exit.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        let action = match self.input_handler.handle_key(key) {
            Some(action) => action,
            None => return false,
        };

        match action {
            Action::Quit => {
                self.should_quit = true;
                return true;
            }
            Action::Back => {
                // Dismiss the topmost surface: error, then help, then drawer
                if self.error_message.take().is_some() {
                } else if self.view == AppView::Help {
                    self.view = AppView::Browse;
                } else if self.nav.is_open() {
                    self.nav.toggle();
                }
            }
            Action::Help => {
                self.view = match self.view {
                    AppView::Help => AppView::Browse,
                    AppView::Browse => AppView::Help,
                };
            }
            Action::ToggleNav => {
                self.nav.toggle();
            }
            Action::FocusPrev => {
                self.tabs.focus_prev();
            }
            Action::FocusNext => {
                self.tabs.focus_next();
            }
            Action::Activate => {
                self.activate(self.tabs.focused());
            }
            Action::ActivateIndex(index) => {
                // A digit with no corresponding tab is not a click on anything
                if index < self.tabs.len() {
                    self.activate(index);
                }
            }
        }

        false
    }

    /// Activate a tab and surface any failure in the error overlay.
    fn activate(&mut self, index: usize) {
        if let Err(e) = self.tabs.activate(index, &mut self.deck) {
            tracing::error!("Tab activation failed: {}", e);
            self.error_message = Some(format!("Tab activation failed: {}", e));
        }
    }

    /// Main event loop
    pub async fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        let tick_rate = Duration::from_millis(self.config.ui.refresh_rate_ms);
        let mut last_tick = Instant::now();

        loop {
            // Draw UI
            terminal.draw(|f| crate::ui::layout::draw(f, self))?;

            // Wait for event with timeout
            let timeout = tick_rate.saturating_sub(last_tick.elapsed());
            if event::poll(timeout).map_err(|e| AppError::Terminal(e.to_string()))? {
                match event::read().map_err(|e| AppError::Terminal(e.to_string()))? {
                    Event::Key(key) => {
                        if self.handle_key(key) {
                            break;
                        }
                    }
                    Event::Resize(width, height) => {
                        // The next draw picks up the new frame area
                        tracing::debug!("Terminal resized to {}x{}", width, height);
                    }
                    Event::FocusGained | Event::FocusLost => {
                        // Ignore focus events
                    }
                    Event::Mouse(_) | Event::Paste(_) => {
                        // Ignore mouse and paste events
                    }
                }
            }

            if last_tick.elapsed() >= tick_rate {
                last_tick = Instant::now();
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyModifiers};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn sample_app() -> App {
        App::sample(AppConfig::default()).unwrap()
    }

    #[test]
    fn test_sample_content_validates() {
        let app = sample_app();
        assert_eq!(app.tabs.len(), 4);
        // Construction leaves the selected tab's content revealed
        assert_eq!(app.deck.visible_panel().unwrap().id.as_str(), "panel-moon");
        assert_eq!(
            app.deck.visible_figure().unwrap().id.as_str(),
            "figure-moon"
        );
    }

    #[test]
    fn test_activating_second_tab_switches_content() {
        let mut app = sample_app();
        app.handle_key(key(KeyCode::Char('2')));

        assert_eq!(app.tabs.selected(), 1);
        assert_eq!(app.deck.visible_panel().unwrap().id.as_str(), "panel-mars");
        assert_eq!(
            app.deck.visible_figure().unwrap().id.as_str(),
            "figure-mars"
        );
        assert!(app.deck.is_consistent());
    }

    #[test]
    fn test_arrow_keys_move_focus_not_selection() {
        let mut app = sample_app();
        app.handle_key(key(KeyCode::Right));
        app.handle_key(key(KeyCode::Right));

        assert_eq!(app.tabs.focused(), 2);
        assert_eq!(app.tabs.selected(), 0);
        assert_eq!(app.deck.visible_panel().unwrap().id.as_str(), "panel-moon");
    }

    #[test]
    fn test_enter_activates_focused_tab() {
        let mut app = sample_app();
        app.handle_key(key(KeyCode::Right));
        app.handle_key(key(KeyCode::Enter));

        assert_eq!(app.tabs.selected(), 1);
        assert_eq!(app.deck.visible_panel().unwrap().id.as_str(), "panel-mars");
    }

    #[test]
    fn test_focus_wraps_around_the_tab_set() {
        let mut app = sample_app();
        for _ in 0..app.tabs.len() {
            app.handle_key(key(KeyCode::Right));
        }
        assert_eq!(app.tabs.focused(), 0);
    }

    #[test]
    fn test_nav_toggle_involution() {
        let mut app = sample_app();
        assert!(!app.nav.is_open());

        app.handle_key(key(KeyCode::Char('m')));
        assert!(app.nav.is_open());
        assert!(app.nav.is_expanded());

        app.handle_key(key(KeyCode::Char('m')));
        assert!(!app.nav.is_open());
        assert!(!app.nav.is_expanded());
    }

    #[test]
    fn test_digit_beyond_tab_count_is_ignored() {
        let mut app = sample_app();
        app.handle_key(key(KeyCode::Char('9')));
        assert_eq!(app.tabs.selected(), 0);
        assert!(app.error_message.is_none());
    }

    #[test]
    fn test_quit_key() {
        let mut app = sample_app();
        assert!(app.handle_key(key(KeyCode::Char('q'))));
        assert!(app.should_quit);
    }

    #[test]
    fn test_help_toggles() {
        let mut app = sample_app();
        app.handle_key(key(KeyCode::Char('?')));
        assert_eq!(app.view, AppView::Help);
        app.handle_key(key(KeyCode::Esc));
        assert_eq!(app.view, AppView::Browse);
    }

    #[test]
    fn test_esc_closes_open_drawer() {
        let mut app = sample_app();
        app.handle_key(key(KeyCode::Char('m')));
        app.handle_key(key(KeyCode::Esc));
        assert!(!app.nav.is_open());
    }

    #[test]
    fn test_construction_rejects_dangling_panel_reference() {
        let tabs = TabController::new(
            vec![TabDescriptor::new("Moon", "panel-moon", "figure-moon")],
            0,
        )
        .unwrap();
        let deck = PanelDeck::new(
            vec![Panel::new("panel-other", "Other", "body")],
            vec![Figure::new("figure-moon", "art")],
        );

        let result = App::new(AppConfig::default(), tabs, deck, vec![]);
        assert!(result.is_err());
    }

    #[test]
    fn test_reactivation_is_idempotent() {
        let mut app = sample_app();
        app.handle_key(key(KeyCode::Char('3')));
        let selected = app.tabs.selected();
        app.handle_key(key(KeyCode::Char('3')));

        assert_eq!(app.tabs.selected(), selected);
        assert_eq!(
            app.deck.visible_panel().unwrap().id.as_str(),
            "panel-europa"
        );
        assert!(app.deck.is_consistent());
    }
}
