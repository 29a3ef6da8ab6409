use std::fmt;
use std::str::FromStr;

use clap::ValueEnum;

/// Label of the setup form entry that does not name a subject.
pub const SUBJECT_PLACEHOLDER: &str = "SELECT";

/// Exam subjects offered on the setup screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum Subject {
    Jee,
    Neet,
    CivilServices,
}

impl Subject {
    pub const ALL: [Subject; 3] = [Subject::Jee, Subject::Neet, Subject::CivilServices];

    pub fn label(self) -> &'static str {
        match self {
            Subject::Jee => "JEE",
            Subject::Neet => "NEET",
            Subject::CivilServices => "CIVIL SERVICES",
        }
    }

    /// Open Trivia Database category id.
    pub fn category_id(self) -> u32 {
        match self {
            // Science & Nature
            Subject::Jee | Subject::Neet => 17,
            // History
            Subject::CivilServices => 23,
        }
    }
}

impl fmt::Display for Subject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Subject {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Subject::ALL
            .into_iter()
            .find(|subject| subject.label().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| format!("unknown subject: {}", wanted))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_labels_case_insensitively() {
        assert_eq!("jee".parse::<Subject>(), Ok(Subject::Jee));
        assert_eq!("Civil Services".parse::<Subject>(), Ok(Subject::CivilServices));
        assert!(SUBJECT_PLACEHOLDER.parse::<Subject>().is_err());
    }

    #[test]
    fn maps_to_trivia_categories() {
        assert_eq!(Subject::Jee.category_id(), 17);
        assert_eq!(Subject::Neet.category_id(), 17);
        assert_eq!(Subject::CivilServices.category_id(), 23);
    }
}
