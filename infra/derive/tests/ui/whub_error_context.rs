use std::borrow::Cow;
use whub_derive::whub_error;

#[whub_error]
pub enum LookupError {
    #[error("Not found{}: {message}", format_context(.context))]
    NotFound { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

fn find(id: &str) -> Result<(), LookupError> {
    Err(LookupError::NotFound { message: id.to_owned().into(), context: None })
}

fn main() {
    let err = find("mug").context("Catalog lookup").unwrap_err();
    assert_eq!(err.to_string(), "Not found (Catalog lookup): mug");
}
