use serde::Serialize;

/// Acknowledgement shown to the user after a registration toggle.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub enum Acknowledgement {
    Registered,
    Cancelled,
}

impl Acknowledgement {
    pub fn message(&self) -> &'static str {
        match self {
            Acknowledgement::Registered => "Registration successful!",
            Acknowledgement::Cancelled => "Registration cancelled successfully!",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistrationIntent {
    Acknowledge { acknowledgement: Acknowledgement },
}
