use concat_string::concat_string;

pub fn message(name: &str) -> String {
    concat_string!("Hello, ", name, "! Welcome to Go programming!")
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("Developer", "Hello, Developer! Welcome to Go programming!")]
    #[case("", "Hello, ! Welcome to Go programming!")]
    fn test_message(#[case] name: &str, #[case] expected: &str) {
        assert_eq!(message(name), expected);
    }
}
