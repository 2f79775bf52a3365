//! Key handling for one interactive session.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::dashboard::Dashboard;
use crate::navigation::{NavCommand, NavEvent, NavigationState};


#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyAction {
    Quit,
    Navigate(NavCommand),
    FocusNext,
    FocusPrev,
    OpenTile,
    None,
}


/// Map a key press to an action.
pub fn map_key(key: KeyEvent) -> KeyAction {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return KeyAction::Quit;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => KeyAction::Quit,
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Tab => {
            KeyAction::Navigate(NavCommand::Next)
        }
        KeyCode::Left | KeyCode::Char('h') | KeyCode::BackTab => {
            KeyAction::Navigate(NavCommand::Prev)
        }
        KeyCode::Down | KeyCode::Char('j') => KeyAction::FocusNext,
        KeyCode::Up | KeyCode::Char('k') => KeyAction::FocusPrev,
        KeyCode::Enter => KeyAction::OpenTile,
        KeyCode::Char(c @ '1'..='9') => {
            let pos = c as usize - '1' as usize;
            KeyAction::Navigate(NavCommand::SelectIndex(pos))
        }
        _ => KeyAction::None,
    }
}


/// State of one interactive run: selected view, focused tile, status line.
#[derive(Debug, Clone)]
pub struct Session {
    nav: NavigationState,
    focused_tile: usize,
    status: Option<String>,
    should_quit: bool,
}


impl Session {
    pub fn new(dashboard: &Dashboard) -> Self {
        Self {
            nav: dashboard.session(),
            focused_tile: 0,
            status: None,
            should_quit: false,
        }
    }

    pub fn nav(&self) -> &NavigationState {
        &self.nav
    }

    pub fn focused_tile(&self) -> usize {
        self.focused_tile
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn handle_key(&mut self, dashboard: &Dashboard, key: KeyEvent) {
        let action = map_key(key);
        self.handle(dashboard, action);
    }

    pub fn handle(&mut self, dashboard: &Dashboard, action: KeyAction) {
        match action {
            KeyAction::Quit => self.should_quit = true,
            KeyAction::Navigate(command) => self.navigate(dashboard, command),
            KeyAction::FocusNext => self.move_focus(dashboard, 1),
            KeyAction::FocusPrev => self.move_focus(dashboard, -1),
            KeyAction::OpenTile => self.open_tile(dashboard),
            KeyAction::None => {}
        }
    }

    fn navigate(&mut self, dashboard: &Dashboard, command: NavCommand) {
        match self.nav.apply(dashboard.registry(), command) {
            Ok(NavEvent::Changed { .. }) => {
                self.focused_tile = 0;
                self.status = None;
            }
            Ok(NavEvent::Unchanged(_)) => {}
            Err(e) => {
                tracing::debug!(error = %e, "navigation rejected");
                self.status = Some(e.to_string());
            }
        }
    }

    fn tile_count(&self, dashboard: &Dashboard) -> usize {
        dashboard
            .render_selected(&self.nav)
            .map(|output| output.tiles().len())
            .unwrap_or(0)
    }

    fn move_focus(&mut self, dashboard: &Dashboard, delta: isize) {
        let count = self.tile_count(dashboard);
        if count == 0 {
            return;
        }
        let next = (self.focused_tile as isize + delta).rem_euclid(count as isize);
        self.focused_tile = next as usize;
    }

    fn open_tile(&mut self, dashboard: &Dashboard) {
        let target = dashboard
            .render_selected(&self.nav)
            .ok()
            .and_then(|output| {
                output
                    .tiles()
                    .get(self.focused_tile)
                    .and_then(|tile| tile.target.clone())
            });

        if let Some(target) = target {
            self.navigate(dashboard, NavCommand::Select(target));
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::navigation::{DASHBOARD, INCIDENTS, MFA_ADOPTION, PHISHING, VULNERABILITIES};

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_key_map() {
        assert_eq!(map_key(press(KeyCode::Char('q'))), KeyAction::Quit);
        assert_eq!(
            map_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            KeyAction::Quit
        );
        assert_eq!(map_key(press(KeyCode::Right)), KeyAction::Navigate(NavCommand::Next));
        assert_eq!(map_key(press(KeyCode::BackTab)), KeyAction::Navigate(NavCommand::Prev));
        assert_eq!(
            map_key(press(KeyCode::Char('5'))),
            KeyAction::Navigate(NavCommand::SelectIndex(4))
        );
        assert_eq!(map_key(press(KeyCode::Char('x'))), KeyAction::None);
    }

    #[test]
    fn test_digit_selects_view() {
        let dashboard = Dashboard::builtin();
        let mut session = Session::new(&dashboard);

        session.handle_key(&dashboard, press(KeyCode::Char('5')));
        assert_eq!(session.nav().selected_view(), INCIDENTS);
    }

    #[test]
    fn test_out_of_range_digit_sets_status() {
        let dashboard = Dashboard::builtin();
        let mut session = Session::new(&dashboard);

        session.handle_key(&dashboard, press(KeyCode::Char('9')));
        assert_eq!(session.nav().selected_view(), DASHBOARD);
        assert_eq!(session.status(), Some("unknown view '#9'"));

        // A successful move clears the message.
        session.handle_key(&dashboard, press(KeyCode::Right));
        assert_eq!(session.status(), None);
    }

    #[test]
    fn test_open_focused_tile() {
        let dashboard = Dashboard::builtin();
        let mut session = Session::new(&dashboard);

        session.handle_key(&dashboard, press(KeyCode::Enter));
        assert_eq!(session.nav().selected_view(), VULNERABILITIES);

        session.handle_key(&dashboard, press(KeyCode::Char('1')));
        session.handle_key(&dashboard, press(KeyCode::Down));
        session.handle_key(&dashboard, press(KeyCode::Down));
        assert_eq!(session.focused_tile(), 2);
        session.handle_key(&dashboard, press(KeyCode::Enter));
        assert_eq!(session.nav().selected_view(), MFA_ADOPTION);
        assert_eq!(session.focused_tile(), 0);
    }

    #[test]
    fn test_focus_wraps_and_ignores_views_without_tiles() {
        let dashboard = Dashboard::builtin();
        let mut session = Session::new(&dashboard);

        session.handle_key(&dashboard, press(KeyCode::Up));
        assert_eq!(session.focused_tile(), 5);

        session.handle_key(&dashboard, press(KeyCode::Char('3')));
        assert_eq!(session.nav().selected_view(), PHISHING);
        session.handle_key(&dashboard, press(KeyCode::Down));
        assert_eq!(session.focused_tile(), 0);
        session.handle_key(&dashboard, press(KeyCode::Enter));
        assert_eq!(session.nav().selected_view(), PHISHING);
    }

    #[test]
    fn test_quit() {
        let dashboard = Dashboard::builtin();
        let mut session = Session::new(&dashboard);
        assert!(!session.should_quit());
        session.handle_key(&dashboard, press(KeyCode::Esc));
        assert!(session.should_quit());
    }
}
