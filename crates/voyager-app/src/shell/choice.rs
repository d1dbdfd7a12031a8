//! Parsing the user's pick from the numbered candidate list.

/// Outcome of reading one menu answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice {
    /// Zero-based index of the chosen candidate.
    Selected(usize),
    OutOfRange,
    NotANumber,
    Cancel,
}

/// Interpret `input` as a 1-based pick among `count` candidates.
pub fn parse_choice(input: &str, count: usize) -> Choice {
    let input = input.trim();
    if input.eq_ignore_ascii_case("quit") || input.eq_ignore_ascii_case("q") {
        return Choice::Cancel;
    }
    match input.parse::<usize>() {
        Ok(n) if (1..=count).contains(&n) => Choice::Selected(n - 1),
        Ok(_) => Choice::OutOfRange,
        Err(_) => Choice::NotANumber,
    }
}
