use crate::FrontendResult;

/// The parts of the page the controller reads from and renders into.
pub trait View {
    /// Current text of the name input.
    fn input_value(&self) -> String;

    /// Replaces the text of the greeting message element.
    fn set_message(&self, text: &str);

    /// Appends one option to the end of the host API dropdown.
    fn append_option(&self, value: &str, text: &str) -> FrontendResult<()>;
}
