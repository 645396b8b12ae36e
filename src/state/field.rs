//! Text input field value object

/// A single-line text input with its label and placeholder
#[derive(Debug, Clone)]
pub struct InputField {
    pub label: String,
    pub placeholder: String,
    value: String,
}

impl InputField {
    /// Create an empty field
    pub fn new(label: &str, placeholder: &str) -> Self {
        Self {
            label: label.to_string(),
            placeholder: placeholder.to_string(),
            value: String::new(),
        }
    }

    /// Create the email field used by the waitlist form
    pub fn email() -> Self {
        Self::new("Email address", "Enter your email")
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn set_value(&mut self, value: &str) {
        self.value = value.to_string();
    }

    /// Push a character to the field value (control characters are dropped)
    pub fn push_char(&mut self, c: char) {
        if !c.is_control() {
            self.value.push(c);
        }
    }

    /// Remove the last character from the field value
    pub fn pop_char(&mut self) {
        self.value.pop();
    }

    pub fn clear(&mut self) {
        self.value.clear();
    }

    /// Value to render, and whether it is the placeholder
    pub fn display_value(&self) -> (&str, bool) {
        if self.value.is_empty() {
            (&self.placeholder, true)
        } else {
            (&self.value, false)
        }
    }
}
