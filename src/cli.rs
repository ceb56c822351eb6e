/// interactive question-and-answer session: acid or base, formula, K, M -> pH
pub mod cli_main;
