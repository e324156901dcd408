use models::errors::FieldErrors;
use models::jersey::JerseyInput;
use uuid::Uuid;

use super::Jersey;

/// Where a finished action sends the browser next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Location {
    /// The catalog home page.
    List,
    /// Detail page of one jersey.
    Detail(Uuid),
    /// Empty admin form.
    BlankForm,
}

impl Location {
    pub fn path(&self) -> String {
        match self {
            Location::List => "/".to_string(),
            Location::Detail(id) => format!("/jersey/{id}"),
            Location::BlankForm => "/admin".to_string(),
        }
    }
}

/// What the admin form should show.
#[derive(Debug, Clone, PartialEq)]
pub enum AdminForm {
    Blank,
    Edit(Jersey),
}

/// Result of a catalog action, independent of HTTP.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome<T> {
    Ok(T),
    Redirect(Location),
    /// Submission rejected; carries the messages and the input as typed.
    ValidationFailed { errors: FieldErrors, input: JerseyInput },
    NotFound,
    Forbidden,
    Unavailable,
}

impl<T> Outcome<T> {
    pub fn is_ok(&self) -> bool {
        matches!(self, Outcome::Ok(_))
    }

    pub fn ok(self) -> Option<T> {
        match self {
            Outcome::Ok(v) => Some(v),
            _ => None,
        }
    }
}
