use crate::view::history::HistoryView;
use crate::view::send_form::SendForm;

#[derive(Debug)]
/// The screen currently on display.
pub enum Screen {
    SendForm(SendForm),
    History(HistoryView),
}

#[derive(Debug)]
/// Top-level shell. Owns exactly one piece of state: the active screen.
///
/// Switching screens drops the previous screen's transient state and builds
/// the new one from scratch; selecting the screen that is already active
/// leaves it untouched. In-flight work is not cancelled on switch — a late
/// fetch applied against a rebuilt [`HistoryView`] is discarded by its
/// sequence guard.
pub struct Shell {
    screen: Screen,
}

impl Shell {
    /// The shell opens on the send form.
    pub fn new() -> Self {
        Self {
            screen: Screen::SendForm(SendForm::new()),
        }
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    pub fn screen_mut(&mut self) -> &mut Screen {
        &mut self.screen
    }

    pub fn show_send_form(&mut self) {
        if !matches!(self.screen, Screen::SendForm(_)) {
            self.screen = Screen::SendForm(SendForm::new());
        }
    }

    pub fn show_history(&mut self) {
        if !matches!(self.screen, Screen::History(_)) {
            self.screen = Screen::History(HistoryView::new());
        }
    }
}

impl Default for Shell {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use crate::view::history::Column;
    use crate::view::send_form::FormField;

    use super::*;

    #[test]
    fn shell_opens_on_the_send_form() {
        let shell = Shell::new();
        assert!(matches!(shell.screen(), Screen::SendForm(_)));
    }

    #[test]
    fn switching_screens_reinitializes_them() {
        let mut shell = Shell::new();
        if let Screen::SendForm(form) = shell.screen_mut() {
            form.update_field(FormField::Message, "draft in progress");
        }

        shell.show_history();
        if let Screen::History(view) = shell.screen_mut() {
            view.toggle_sort(Column::Date);
        } else {
            panic!("expected history screen");
        }

        // Coming back rebuilds the form; the draft is gone.
        shell.show_send_form();
        match shell.screen() {
            Screen::SendForm(form) => assert_eq!(form.field(FormField::Message), ""),
            Screen::History(_) => panic!("expected send form screen"),
        }

        // And the history sort state was dropped with its screen.
        shell.show_history();
        match shell.screen() {
            Screen::History(view) => assert!(view.sort().keys().is_empty()),
            Screen::SendForm(_) => panic!("expected history screen"),
        }
    }

    #[test]
    fn reselecting_the_active_screen_keeps_its_state() {
        let mut shell = Shell::new();
        if let Screen::SendForm(form) = shell.screen_mut() {
            form.update_field(FormField::AccountId, "acct-1");
        }

        shell.show_send_form();
        match shell.screen() {
            Screen::SendForm(form) => assert_eq!(form.field(FormField::AccountId), "acct-1"),
            Screen::History(_) => panic!("expected send form screen"),
        }
    }
}
