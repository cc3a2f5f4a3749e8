use std::fmt::{Display, Formatter};

/// Background actions the user can start from the main window.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum CommandType {
    OpenProject,
    CheckNow,
    Push,
}

impl Display for CommandType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            CommandType::OpenProject => "Open Project",
            CommandType::CheckNow => "Check Git Now",
            CommandType::Push => "Push to origin",
        };
        write!(f, "{}", name)
    }
}
