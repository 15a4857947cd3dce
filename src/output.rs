// Output writer: timestamp-named text snapshot of listed videos

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use time::format_description::BorrowedFormatItem;
use time::macros::format_description;
use time::OffsetDateTime;

use crate::error::AppError;
use crate::lister::VideoRecord;

const FILENAME_FORMAT: &[BorrowedFormatItem<'static>] =
    format_description!("[year]-[month]-[day]_[hour]-[minute]-[second]");

/// Current local time, or UTC when the local offset cannot be determined.
pub fn local_timestamp() -> OffsetDateTime {
    OffsetDateTime::now_local().unwrap_or_else(|e| {
        tracing::warn!(error = %e, "local UTC offset unavailable, naming output in UTC");
        OffsetDateTime::now_utc()
    })
}

/// `YYYY-MM-DD_HH-MM-SS.txt` for `timestamp`
pub fn output_filename(timestamp: OffsetDateTime) -> Result<String, AppError> {
    Ok(format!("{}.txt", timestamp.format(FILENAME_FORMAT)?))
}

/// Title, watch URL, and a blank separator line per record.
pub fn render_records(records: &[VideoRecord]) -> String {
    records
        .iter()
        .map(|r| format!("{}\n{}\n\n", r.title(), r.watch_url()))
        .collect()
}

/// Write `records` to `<out_dir>/<timestamp>.txt` and return the resolved path.
///
/// An existing file with the same name (same second) is overwritten. The
/// directory is resolved before anything is created; on a write failure the
/// partial file is removed.
pub fn write_output(
    records: &[VideoRecord],
    out_dir: &Path,
    timestamp: OffsetDateTime,
) -> Result<PathBuf, AppError> {
    let path = fs::canonicalize(out_dir)?.join(output_filename(timestamp)?);
    let contents = render_records(records);

    if let Err(e) = write_file(&path, contents.as_bytes()) {
        let _ = fs::remove_file(&path);
        return Err(AppError::Io(e));
    }

    tracing::debug!(path = %path.display(), records = records.len(), "output written");
    Ok(path)
}

fn write_file(path: &Path, contents: &[u8]) -> io::Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    writer.write_all(contents)?;
    writer.flush()?;
    writer.get_ref().sync_all()
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;
    use time::PrimitiveDateTime;

    fn sample() -> Vec<VideoRecord> {
        vec![
            VideoRecord::new("First video", "abc123").unwrap(),
            VideoRecord::new("第二部影片 🎬", "def456").unwrap(),
        ]
    }

    #[test]
    fn test_filename_format() {
        let ts = datetime!(2024-03-07 09:05:02 +8);
        assert_eq!(output_filename(ts).unwrap(), "2024-03-07_09-05-02.txt");
    }

    #[test]
    fn test_filename_parses_back() {
        let name = output_filename(datetime!(2023-12-31 23:59:59 UTC)).unwrap();
        let stem = name.trim_end_matches(".txt");
        let parsed = PrimitiveDateTime::parse(stem, FILENAME_FORMAT).unwrap();
        assert_eq!(parsed, datetime!(2023-12-31 23:59:59));
    }

    #[test]
    fn test_render_layout() {
        let text = render_records(&sample());
        assert_eq!(
            text,
            "First video\nhttps://www.youtube.com/watch?v=abc123\n\n\
             第二部影片 🎬\nhttps://www.youtube.com/watch?v=def456\n\n"
        );
    }

    #[test]
    fn test_write_output_line_count_and_location() {
        let dir = tempfile::tempdir().unwrap();
        let ts = datetime!(2024-01-02 03:04:05 UTC);

        let path = write_output(&sample(), dir.path(), ts).unwrap();

        assert!(path.is_absolute());
        assert_eq!(path.file_name().unwrap(), "2024-01-02_03-04-05.txt");
        assert_eq!(path.parent().unwrap(), fs::canonicalize(dir.path()).unwrap());

        let contents = fs::read_to_string(&path).unwrap();
        assert_eq!(contents.lines().count(), 3 * 2);
    }

    #[test]
    fn test_write_output_resolves_directory_first() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("sub")).unwrap();
        let indirect = dir.path().join("sub").join("..");

        let path = write_output(&sample(), &indirect, datetime!(2024-01-02 03:04:05 UTC)).unwrap();

        assert_eq!(
            path,
            fs::canonicalize(dir.path())
                .unwrap()
                .join("2024-01-02_03-04-05.txt")
        );
        assert!(path.is_file());
    }

    #[test]
    fn test_write_output_is_deterministic() {
        let first_dir = tempfile::tempdir().unwrap();
        let second_dir = tempfile::tempdir().unwrap();

        let a = write_output(&sample(), first_dir.path(), datetime!(2024-01-01 00:00:00 UTC))
            .unwrap();
        let b = write_output(&sample(), second_dir.path(), datetime!(2024-06-01 12:00:00 UTC))
            .unwrap();

        assert_eq!(fs::read(a).unwrap(), fs::read(b).unwrap());
    }

    #[test]
    fn test_same_second_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let ts = datetime!(2024-01-02 03:04:05 UTC);

        write_output(&sample(), dir.path(), ts).unwrap();
        let one = vec![VideoRecord::new("Only", "zzz").unwrap()];
        let path = write_output(&one, dir.path(), ts).unwrap();

        assert_eq!(
            fs::read_to_string(path).unwrap(),
            "Only\nhttps://www.youtube.com/watch?v=zzz\n\n"
        );
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
    }

    #[test]
    fn test_missing_directory_fails_without_file() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope");

        let err = write_output(&sample(), &missing, datetime!(2024-01-02 03:04:05 UTC));
        assert!(matches!(err, Err(AppError::Io(_))));
        assert!(!missing.exists());
    }
}
