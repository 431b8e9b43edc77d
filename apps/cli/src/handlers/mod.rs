pub mod lookup;
pub mod validate;

/// Whether a command succeeded from the user's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Success,
    Failure,
}

fn join(positions: &[String]) -> String {
    if positions.is_empty() { "-".to_owned() } else { positions.join(", ") }
}
