//! Parsing of one `surname given-name score` line.

use std::str::FromStr;

use crate::error::ParseError;
use crate::grade::LetterGrade;

/// One parsed line of the scores file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreRecord {
    pub surname: String,
    pub given_name: String,
    pub score: i32,
}

impl ScoreRecord {
    /// Parse a whitespace-separated record.
    ///
    /// The first three tokens are surname, given name and score; any further
    /// tokens are ignored.
    pub fn parse(line: &str) -> Result<Self, ParseError> {
        let mut tokens = line.split_whitespace();

        let surname = tokens.next().ok_or(ParseError::MissingField("surname"))?;
        let given_name = tokens
            .next()
            .ok_or(ParseError::MissingField("given name"))?;
        let token = tokens.next().ok_or(ParseError::MissingField("score"))?;

        let score = token
            .parse::<i32>()
            .map_err(|source| ParseError::InvalidScore {
                token: token.to_string(),
                source,
            })?;

        Ok(Self {
            surname: surname.to_string(),
            given_name: given_name.to_string(),
            score,
        })
    }

    /// `"<surname>, <given-name>"`, as shown in the student column.
    pub fn display_name(&self) -> String {
        format!("{}, {}", self.surname, self.given_name)
    }

    pub fn grade(&self) -> LetterGrade {
        LetterGrade::from_score(self.score)
    }
}

impl FromStr for ScoreRecord {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
