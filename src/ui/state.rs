use crate::models::{Entry, Library};

/// Centraliserat applikationstillstånd
///
/// Det aktiva biblioteket ägs här och är UI:ts enda sanningskälla —
/// tabellen ritas om från `active` varje bildruta.
#[derive(Debug, Default)]
pub struct AppState {
    /// Kända biblioteksnamn (katalogen)
    pub catalog: Vec<String>,

    /// Det aktiva biblioteket, `None` när inget är valt
    pub active: Option<Library>,

    /// Sökfråga för tabellfiltret
    pub search_query: String,

    /// Visar textprompten (nytt/byt namn)
    pub show_prompt_dialog: bool,
    pub prompt_action: Option<PromptAction>,

    /// Visar bekräftelsedialog
    pub show_confirm_dialog: bool,
    pub confirm_dialog_message: String,
    pub confirm_dialog_action: Option<ConfirmAction>,

    /// Post vars bild visas förstorad
    pub enlarged_image: Option<usize>,

    /// Statusmeddelande
    pub status_message: Option<StatusMessage>,

    /// Dark mode
    pub dark_mode: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn has_library(&self) -> bool {
        self.active.is_some()
    }

    pub fn active_name(&self) -> Option<&str> {
        self.active.as_ref().map(|lib| lib.name.as_str())
    }

    /// Gör ett bibliotek aktivt
    pub fn set_active(&mut self, library: Library) {
        self.active = Some(library);
        self.enlarged_image = None;
    }

    /// Återgå till "inget bibliotek valt"
    pub fn reset_active(&mut self) {
        self.active = None;
        self.enlarged_image = None;
    }

    /// Öppna textprompten
    pub fn open_prompt(&mut self, action: PromptAction) {
        self.prompt_action = Some(action);
        self.show_prompt_dialog = true;
    }

    pub fn close_prompt(&mut self) {
        self.show_prompt_dialog = false;
        self.prompt_action = None;
    }

    /// Visa bekräftelsedialog
    pub fn show_confirm(&mut self, message: &str, action: ConfirmAction) {
        self.confirm_dialog_message = message.to_string();
        self.confirm_dialog_action = Some(action);
        self.show_confirm_dialog = true;
    }

    pub fn close_confirm(&mut self) {
        self.show_confirm_dialog = false;
        self.confirm_dialog_action = None;
    }

    /// Visa statusmeddelande
    pub fn show_status(&mut self, message: &str, status_type: StatusType) {
        self.status_message = Some(StatusMessage {
            text: message.to_string(),
            status_type,
            created_at: std::time::Instant::now(),
        });
    }

    pub fn show_success(&mut self, message: &str) {
        self.show_status(message, StatusType::Success);
    }

    pub fn show_error(&mut self, message: &str) {
        self.show_status(message, StatusType::Error);
    }

    /// Rensa statusmeddelande om det är för gammalt
    pub fn clear_old_status(&mut self) {
        if let Some(ref status) = self.status_message {
            if status.created_at.elapsed().as_secs() >= 3 {
                self.status_message = None;
            }
        }
    }
}

/// Vad textprompten ska användas till
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptAction {
    CreateLibrary,
    RenameLibrary,
}

impl PromptAction {
    pub fn title(&self) -> &'static str {
        match self {
            Self::CreateLibrary => "Namn på det nya biblioteket:",
            Self::RenameLibrary => "Nytt namn:",
        }
    }
}

/// Typ av bekräftelseåtgärd
#[derive(Debug, Clone)]
pub enum ConfirmAction {
    /// Ta bort posten på positionen i det aktiva biblioteket
    DeleteEntry(usize),
    /// Ta bort hela det aktiva biblioteket
    DeleteLibrary,
    /// Ersätt det aktiva bibliotekets poster (import)
    ReplaceEntries(Vec<Entry>),
}

/// Statusmeddelande
#[derive(Debug, Clone)]
pub struct StatusMessage {
    pub text: String,
    pub status_type: StatusType,
    pub created_at: std::time::Instant,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusType {
    Success,
    Error,
    Info,
    Warning,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_and_reset_active() {
        let mut state = AppState::new();
        assert!(!state.has_library());

        state.set_active(Library::new("Test"));
        assert!(state.has_library());
        assert_eq!(state.active_name(), Some("Test"));

        state.enlarged_image = Some(0);
        state.reset_active();
        assert!(!state.has_library());
        assert!(state.enlarged_image.is_none());
    }

    #[test]
    fn test_confirm_dialog_lifecycle() {
        let mut state = AppState::new();
        state.show_confirm("Ta bort?", ConfirmAction::DeleteEntry(2));
        assert!(state.show_confirm_dialog);
        assert!(matches!(
            state.confirm_dialog_action,
            Some(ConfirmAction::DeleteEntry(2))
        ));

        state.close_confirm();
        assert!(!state.show_confirm_dialog);
        assert!(state.confirm_dialog_action.is_none());
    }
}
