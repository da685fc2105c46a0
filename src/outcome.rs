use crate::Error;

/// Result of a single authentication attempt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// Identities to attach to the session. Always exactly the username.
    Granted(Vec<String>),
    Denied(Denial),
    SystemError(String),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Denial {
    InvalidCredentials,
    NotInGroup { username: String, group: String },
}

impl Outcome {
    pub fn is_granted(&self) -> bool {
        matches!(self, Outcome::Granted(_))
    }

    pub fn into_result(self) -> Result<Vec<String>, Error> {
        match self {
            Outcome::Granted(groups) => Ok(groups),
            Outcome::Denied(Denial::InvalidCredentials) => Err(Error::Unauthorized),
            Outcome::Denied(Denial::NotInGroup { username, group }) => {
                Err(Error::Forbidden { username, group })
            }
            Outcome::SystemError(detail) => Err(Error::Internal(detail)),
        }
    }
}
