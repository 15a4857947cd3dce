// Interactive prompter: ask for URL and count until both are valid

use std::io::{self, BufRead, Write};

use crate::args::parse_count;
use crate::lister::ListingRequest;

const URL_PROMPT: &str = "Channel or playlist URL: ";
const COUNT_PROMPT: &str = "Number of videos: ";
const URL_HINT: &str = "The URL must not be empty.";
const COUNT_HINT: &str = "Please enter a positive whole number, e.g. 10.";

/// Prompt on `output` and read answers from `input` until a non-empty URL and
/// a positive count have been entered.
///
/// Invalid answers re-prompt. End of input is reported as `UnexpectedEof`.
pub fn prompt_request<R, W>(input: &mut R, output: &mut W) -> io::Result<ListingRequest>
where
    R: BufRead,
    W: Write,
{
    let url = loop {
        let answer = ask(input, output, URL_PROMPT)?;
        if !answer.is_empty() {
            break answer;
        }
        writeln!(output, "{}", URL_HINT)?;
    };

    loop {
        let answer = ask(input, output, COUNT_PROMPT)?;
        if let Some(request) = parse_count(&answer).and_then(|n| ListingRequest::new(url.as_str(), n)) {
            return Ok(request);
        }
        writeln!(output, "{}", COUNT_HINT)?;
    }
}

/// Print `prompt`, read one line, return it trimmed.
fn ask<R, W>(input: &mut R, output: &mut W, prompt: &str) -> io::Result<String>
where
    R: BufRead,
    W: Write,
{
    write!(output, "{}", prompt)?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "input closed before a valid answer was given",
        ));
    }
    Ok(line.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run(script: &str) -> (io::Result<ListingRequest>, String) {
        let mut input = Cursor::new(script.as_bytes().to_vec());
        let mut output = Vec::new();
        let result = prompt_request(&mut input, &mut output);
        (result, String::from_utf8(output).unwrap())
    }

    #[test]
    fn test_reprompts_until_valid() {
        let (result, transcript) = run("\nhttps://example.com/playlist\n-1\nabc\n3\n");

        let request = result.unwrap();
        assert_eq!(request.source_url(), "https://example.com/playlist");
        assert_eq!(request.max_count(), 3);

        assert_eq!(transcript.matches(URL_PROMPT).count(), 2);
        assert_eq!(transcript.matches(URL_HINT).count(), 1);
        assert_eq!(transcript.matches(COUNT_PROMPT).count(), 3);
        assert_eq!(transcript.matches(COUNT_HINT).count(), 2);
    }

    #[test]
    fn test_whitespace_url_is_empty() {
        let (result, transcript) = run("   \n\thttps://www.youtube.com/@chan \n1\n");
        assert_eq!(result.unwrap().source_url(), "https://www.youtube.com/@chan");
        assert_eq!(transcript.matches(URL_HINT).count(), 1);
    }

    #[test]
    fn test_zero_count_never_returned() {
        let (result, _) = run("https://example.com\n0\n-5\n 2 \n");
        assert_eq!(result.unwrap().max_count(), 2);
    }

    #[test]
    fn test_end_of_input() {
        let (result, _) = run("https://example.com\nabc\n");
        assert_eq!(result.unwrap_err().kind(), io::ErrorKind::UnexpectedEof);
    }

    #[test]
    fn test_windows_line_endings() {
        let (result, _) = run("https://example.com\r\n4\r\n");
        assert_eq!(result.unwrap().max_count(), 4);
    }
}
