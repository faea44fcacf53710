use std::io::{BufRead, Write};

use crate::core::{ProjectError, Result, db::Hours};

/// Prompts on `output` and reads one answer per line from `input`.
///
/// A blank line, or the end of input, means the user gave no value.
pub struct InputReader<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> InputReader<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }

    pub fn read_string(&mut self, prompt: &str) -> Result<Option<String>> {
        write!(self.output, "{}: ", prompt)?;
        self.output.flush()?;

        let mut bytes = Vec::new();
        self.input.read_until(b'\n', &mut bytes)?;
        let line = String::from_utf8(bytes)
            .map_err(|_| ProjectError::InvalidInput("input is not valid text".to_string()))?;
        let line = line.trim();
        Ok((!line.is_empty()).then(|| line.to_string()))
    }

    pub fn read_integer(&mut self, prompt: &str) -> Result<Option<i32>> {
        self.read_string(prompt)?
            .map(|text| {
                text.parse()
                    .map_err(|_| ProjectError::InvalidInput(format!("{} is not a valid number", text)))
            })
            .transpose()
    }

    pub fn read_decimal(&mut self, prompt: &str) -> Result<Option<Hours>> {
        self.read_string(prompt)?
            .map(|text| {
                text.parse().map_err(|_| {
                    ProjectError::InvalidInput(format!("{} is not a valid decimal number", text))
                })
            })
            .transpose()
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    fn reader(input: &str) -> InputReader<Cursor<Vec<u8>>, Vec<u8>> {
        InputReader::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    #[test]
    fn prompt_ends_with_colon_and_space() {
        let mut reader = reader("hello\n");
        reader.read_string("Enter the project name").unwrap();
        let (_, output) = reader.into_inner();
        assert_eq!(String::from_utf8(output).unwrap(), "Enter the project name: ");
    }

    #[test]
    fn string_is_trimmed() {
        let mut reader = reader("   Build shed \t\n");
        assert_eq!(reader.read_string("p").unwrap().as_deref(), Some("Build shed"));
    }

    #[test]
    fn blank_lines_are_absent_for_every_type() {
        let mut reader = reader("\n   \n\t\n");
        assert_eq!(reader.read_string("s").unwrap(), None);
        assert_eq!(reader.read_integer("i").unwrap(), None);
        assert_eq!(reader.read_decimal("d").unwrap(), None);
    }

    #[test]
    fn end_of_input_is_absent() {
        let mut reader = reader("");
        assert_eq!(reader.read_string("s").unwrap(), None);
        assert_eq!(reader.read_integer("i").unwrap(), None);
    }

    #[test]
    fn invalid_utf8_line_is_invalid_input_and_consumed() {
        let mut reader = InputReader::new(Cursor::new(b"\xff\xfe\n7\n".to_vec()), Vec::new());
        match reader.read_integer("i") {
            Err(ProjectError::InvalidInput(msg)) => assert_eq!(msg, "input is not valid text"),
            other => panic!("expected InvalidInput, got {:?}", other),
        }
        assert_eq!(reader.read_integer("i").unwrap(), Some(7));
    }

    #[test]
    fn integers_parse() {
        let mut reader = reader("42\n -7 \n");
        assert_eq!(reader.read_integer("i").unwrap(), Some(42));
        assert_eq!(reader.read_integer("i").unwrap(), Some(-7));
    }

    #[test]
    fn non_numeric_integer_names_the_text() {
        let mut reader = reader("abc\n");
        match reader.read_integer("i") {
            Err(ProjectError::InvalidInput(msg)) => assert_eq!(msg, "abc is not a valid number"),
            other => panic!("expected InvalidInput, got {:?}", other),
        }
    }

    #[test]
    fn fractional_integer_is_invalid() {
        let mut reader = reader("3.5\n");
        assert!(matches!(reader.read_integer("i"), Err(ProjectError::InvalidInput(_))));
    }

    #[test]
    fn decimals_always_have_two_fraction_digits() {
        let mut reader = reader("10\n10.5\n0.125\n");
        assert_eq!(reader.read_decimal("d").unwrap().unwrap().to_string(), "10.00");
        assert_eq!(reader.read_decimal("d").unwrap().unwrap().to_string(), "10.50");
        assert_eq!(reader.read_decimal("d").unwrap().unwrap().to_string(), "0.13");
    }

    #[test]
    fn non_numeric_decimal_names_the_text() {
        let mut reader = reader("ten hours\n");
        match reader.read_decimal("d") {
            Err(ProjectError::InvalidInput(msg)) => {
                assert_eq!(msg, "ten hours is not a valid decimal number")
            }
            other => panic!("expected InvalidInput, got {:?}", other),
        }
    }

    #[test]
    fn oversized_decimal_names_the_text() {
        let mut reader = reader("7922816251426433759354395033\n");
        match reader.read_decimal("d") {
            Err(ProjectError::InvalidInput(msg)) => assert_eq!(
                msg,
                "7922816251426433759354395033 is not a valid decimal number"
            ),
            other => panic!("expected InvalidInput, got {:?}", other),
        }
    }
}
