//! Submission validation.

use crate::{
  error::{Field, ValidationError},
  message::Submission,
};

/// Trim and check the three raw form fields.
///
/// The email check is a shape heuristic only: the address must contain an
/// `@` and a `.` somewhere. Nothing stricter is applied, so addresses such as
/// `a.b@c` are accepted.
pub fn validate(
  name: &str,
  email: &str,
  body: &str,
) -> Result<Submission, ValidationError> {
  let name = name.trim();
  let email = email.trim();
  let body = body.trim();

  for (field, value) in
    [(Field::Name, name), (Field::Email, email), (Field::Message, body)]
  {
    if value.is_empty() {
      return Err(ValidationError::MissingField(field));
    }
  }

  if !email.contains('@') || !email.contains('.') {
    return Err(ValidationError::InvalidEmailShape);
  }

  Ok(Submission {
    name:  name.to_owned(),
    email: email.to_owned(),
    body:  body.to_owned(),
  })
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn trims_surrounding_whitespace() {
    let s = validate("  Ana ", "\ta@b.com\n", " Hello\nWorld  ").unwrap();
    assert_eq!(s.name(), "Ana");
    assert_eq!(s.email(), "a@b.com");
    assert_eq!(s.body(), "Hello\nWorld");
  }

  #[test]
  fn reports_first_missing_field() {
    assert_eq!(
      validate("", "", "").unwrap_err(),
      ValidationError::MissingField(Field::Name)
    );
    assert_eq!(
      validate("Ana", "   ", "hi").unwrap_err(),
      ValidationError::MissingField(Field::Email)
    );
    assert_eq!(
      validate("Ana", "a@b.com", " \n ").unwrap_err(),
      ValidationError::MissingField(Field::Message)
    );
  }

  #[test]
  fn rejects_email_without_at_or_dot() {
    assert_eq!(
      validate("Ana", "not-an-email", "hi").unwrap_err(),
      ValidationError::InvalidEmailShape
    );
    assert_eq!(
      validate("Ana", "ana.example.com", "hi").unwrap_err(),
      ValidationError::InvalidEmailShape
    );
    assert_eq!(
      validate("Ana", "ana@localhost", "hi").unwrap_err(),
      ValidationError::InvalidEmailShape
    );
  }

  #[test]
  fn accepts_loosely_shaped_addresses() {
    // Structurally odd but containing both characters.
    assert!(validate("Ana", "a.b@c", "hi").is_ok());
    assert!(validate("Ana", "@.", "hi").is_ok());
  }
}
