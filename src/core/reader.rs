use crate::utils::error::{AggregateError, Result};
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// Opens `path` and yields its lines lazily, one pass only.
pub fn read_lines(path: &Path) -> Result<UniversalLines<BufReader<File>>> {
    let file = File::open(path).map_err(|source| AggregateError::FileAccess {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::debug!("Opened input file: {}", path.display());
    Ok(UniversalLines::new(BufReader::new(file)))
}

/// Line iterator that ends a line at `\n`, `\r\n` or a lone `\r`.
/// Terminators are stripped; a final line without one is still yielded.
#[derive(Debug)]
pub struct UniversalLines<R> {
    reader: R,
    // 上一行以 \r 結尾時，緊接的 \n 屬於同一個換行
    skip_lf: bool,
}

impl<R: BufRead> UniversalLines<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            skip_lf: false,
        }
    }

    fn next_line(&mut self) -> io::Result<Option<String>> {
        let mut bytes = Vec::new();

        loop {
            let available = match self.reader.fill_buf() {
                Ok(buf) => buf,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            };

            if available.is_empty() {
                if bytes.is_empty() {
                    return Ok(None);
                }
                return decode(bytes).map(Some);
            }

            if self.skip_lf {
                self.skip_lf = false;
                if available[0] == b'\n' {
                    self.reader.consume(1);
                    continue;
                }
            }

            match available.iter().position(|&b| b == b'\n' || b == b'\r') {
                Some(end) => {
                    bytes.extend_from_slice(&available[..end]);
                    self.skip_lf = available[end] == b'\r';
                    self.reader.consume(end + 1);
                    return decode(bytes).map(Some);
                }
                None => {
                    let len = available.len();
                    bytes.extend_from_slice(available);
                    self.reader.consume(len);
                }
            }
        }
    }
}

impl<R: BufRead> Iterator for UniversalLines<R> {
    type Item = io::Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_line().transpose()
    }
}

fn decode(bytes: Vec<u8>) -> io::Result<String> {
    String::from_utf8(bytes).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Cursor, Write};
    use tempfile::NamedTempFile;

    fn collect(reader: impl BufRead) -> Vec<String> {
        UniversalLines::new(reader)
            .collect::<io::Result<_>>()
            .unwrap()
    }

    #[test]
    fn test_read_lines_yields_each_line() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "1\n2\n\nlast").unwrap();

        let lines: Vec<String> = read_lines(file.path())
            .unwrap()
            .collect::<io::Result<_>>()
            .unwrap();

        assert_eq!(lines, vec!["1", "2", "", "last"]);
    }

    #[test]
    fn test_carriage_returns_end_lines() {
        assert_eq!(
            collect(Cursor::new("1\r2\r\n3\n\n4")),
            vec!["1", "2", "3", "", "4"]
        );
        assert_eq!(collect(Cursor::new("a\r\rb\r")), vec!["a", "", "b"]);
        assert!(collect(Cursor::new("")).is_empty());
    }

    #[test]
    fn test_crlf_split_across_buffer_refills() {
        // 容量 1 的緩衝區讓 \r 與 \n 落在不同次 fill_buf
        let reader = BufReader::with_capacity(1, Cursor::new("ab\r\ncd\r\n"));
        assert_eq!(collect(reader), vec!["ab", "cd"]);
    }

    #[test]
    fn test_invalid_utf8_is_an_io_error() {
        let mut lines = UniversalLines::new(Cursor::new(vec![0xff, b'\n']));
        let err = lines.next().unwrap().unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
    }

    #[test]
    fn test_missing_file_is_file_access_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_lines(&dir.path().join("nope.txt")).unwrap_err();
        assert!(matches!(err, AggregateError::FileAccess { .. }));
    }
}
