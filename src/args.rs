// Argument resolver: `yttop` (interactive) or `yttop <url> <count>`

use std::path::Path;

use crate::error::AppError;
use crate::lister::ListingRequest;

const DEFAULT_PROGRAM: &str = "yttop";

/// How the listing request will be obtained
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputMode {
    /// No arguments: ask on the terminal
    Interactive,
    /// URL and count were given on the command line
    Direct(ListingRequest),
}

/// Decide the input mode from the raw argument list (program name first).
///
/// Fails before any network activity on a wrong arity or a count that is
/// not a positive integer.
pub fn resolve(args: &[String]) -> Result<InputMode, AppError> {
    match args {
        [_] | [] => Ok(InputMode::Interactive),
        [_, url, raw_count] => {
            let count =
                parse_count(raw_count).ok_or_else(|| AppError::InvalidCount(raw_count.clone()))?;
            ListingRequest::new(url.as_str(), count)
                .map(InputMode::Direct)
                .ok_or_else(|| AppError::Usage {
                    program: program_name(args),
                })
        }
        _ => Err(AppError::Usage {
            program: program_name(args),
        }),
    }
}

/// Base-10 integer, strictly positive
pub fn parse_count(raw: &str) -> Option<usize> {
    match raw.trim().parse::<i64>() {
        Ok(n) if n > 0 => usize::try_from(n).ok(),
        _ => None,
    }
}

fn program_name(args: &[String]) -> String {
    args.first()
        .and_then(|p| Path::new(p).file_name())
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| DEFAULT_PROGRAM.to_string())
}
