//! Text-protocol pixel dumps, as printed by `dbus-monitor` for a media
//! player's `image_data` property.
//!
//! A dump looks like:
//!
//! ```text
//! ... "image_data" ...
//!       array of bytes [
//!          ff 80 00 12 34 56
//!          ...
//!       ]
//! ```
//!
//! Every three bytes form one RGB pixel.

use std::io::BufRead;

use palette::Srgb;
use tracing::{debug, warn};

use crate::color::Sample;
use crate::error::DumpError;

type Result<T> = std::result::Result<T, DumpError>;

const PROPERTY_MARKER: &str = "image_data";
const ARRAY_MARKER: &str = "array of bytes";
const ARRAY_END: &str = "]";

/// Pulls successive pixel dumps out of a line-oriented stream.
pub struct DumpReader<R> {
    reader: R,
    player: Option<String>,
    line_no: usize,
}

impl<R: BufRead> DumpReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            player: None,
            line_no: 0,
        }
    }

    /// Only accept dumps that follow a line mentioning `player`.
    pub fn with_player(mut self, player: impl Into<String>) -> Self {
        self.player = Some(player.into());
        self
    }

    /// Read the next complete dump. Returns `None` at end of stream,
    /// including when the stream ends partway through a dump.
    ///
    /// A bad token yields [`DumpError::Malformed`] only after the rest of the
    /// dump has been consumed, so the next call starts on a fresh dump.
    pub fn next_dump(&mut self) -> Result<Option<Vec<Sample>>> {
        if let Some(player) = self.player.clone() {
            if !self.skip_past(|line| line.contains(player.as_str()))? {
                return Ok(None);
            }
        }
        if !self.skip_past(|line| line.contains(PROPERTY_MARKER))? {
            return Ok(None);
        }
        if !self.skip_past(|line| line.contains(ARRAY_MARKER))? {
            return Ok(None);
        }

        let start = self.line_no;
        let mut bytes = Vec::new();
        let mut malformed = None;
        loop {
            let Some(line) = self.next_line()? else {
                warn!(start_line = start, "stream ended inside a pixel dump");
                return Ok(None);
            };
            if line.contains(ARRAY_END) {
                break;
            }
            if malformed.is_some() {
                continue;
            }
            for token in line.split_whitespace() {
                match u8::from_str_radix(token, 16) {
                    Ok(byte) => bytes.push(byte),
                    Err(_) => {
                        malformed = Some(DumpError::Malformed {
                            token: token.to_string(),
                            line: self.line_no,
                        });
                        break;
                    }
                }
            }
        }
        if let Some(err) = malformed {
            return Err(err);
        }

        if bytes.len() % 3 != 0 {
            debug!(
                extra = bytes.len() % 3,
                "dropping trailing bytes of an incomplete pixel"
            );
        }
        let pixels: Vec<Sample> = bytes
            .chunks_exact(3)
            .map(|px| Srgb::new(px[0], px[1], px[2]).into_format())
            .collect();
        debug!(pixels = pixels.len(), start_line = start, "read pixel dump");
        Ok(Some(pixels))
    }

    fn next_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        let n = self.reader.read_line(&mut line)?;
        if n == 0 {
            return Ok(None);
        }
        self.line_no += 1;
        Ok(Some(line))
    }

    /// Consume lines up to and including the first one matching `pred`.
    fn skip_past(&mut self, pred: impl Fn(&str) -> bool) -> Result<bool> {
        while let Some(line) = self.next_line()? {
            if pred(line.as_str()) {
                return Ok(true);
            }
        }
        Ok(false)
    }
}

impl<R: BufRead> Iterator for DumpReader<R> {
    type Item = Result<Vec<Sample>>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_dump().transpose()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    const ONE_DUMP: &str = "\
signal time=1 sender=:1.5 -> destination=(null destination)
   string \"org.mpris.MediaPlayer2.spotify\"
   dict entry(
      string \"image_data\"
      variant          array of bytes [
            ff 00 00 00 ff 00
            00 00 ff
         ]
   )
";

    fn reader(text: &str) -> DumpReader<Cursor<Vec<u8>>> {
        DumpReader::new(Cursor::new(text.as_bytes().to_vec()))
    }

    #[test]
    fn parses_rgb_triples() {
        let pixels = reader(ONE_DUMP).next_dump().unwrap().unwrap();
        assert_eq!(
            pixels,
            vec![
                Srgb::new(1.0, 0.0, 0.0),
                Srgb::new(0.0, 1.0, 0.0),
                Srgb::new(0.0, 0.0, 1.0),
            ]
        );
    }

    #[test]
    fn end_of_stream_is_none() {
        let mut r = reader(ONE_DUMP);
        assert!(r.next_dump().unwrap().is_some());
        assert!(r.next_dump().unwrap().is_none());
    }

    #[test]
    fn iterates_over_multiple_dumps() {
        let text = format!("{ONE_DUMP}{ONE_DUMP}noise\n{ONE_DUMP}");
        let dumps: Vec<Vec<Sample>> = reader(&text).collect::<Result<_>>().unwrap();
        assert_eq!(dumps.len(), 3);
        assert!(dumps.iter().all(|d| d.len() == 3));
    }

    #[test]
    fn player_filter_skips_other_players() {
        let text = "\
string \"vlc\"
\"image_data\"
array of bytes [
   10 10 10
]
string \"Spotify\"
\"image_data\"
array of bytes [
   20 30 40
]
";
        let mut r = reader(text).with_player("Spotify");
        let pixels = r.next_dump().unwrap().unwrap();
        let expected: Sample = Srgb::new(0x20u8, 0x30, 0x40).into_format();
        assert_eq!(pixels, vec![expected]);
        assert!(r.next_dump().unwrap().is_none());
    }

    #[test]
    fn incomplete_trailing_pixel_is_dropped() {
        let text = "image_data\narray of bytes [\n01 02 03 04 05\n]\n";
        let pixels = reader(text).next_dump().unwrap().unwrap();
        assert_eq!(pixels.len(), 1);
    }

    #[test]
    fn truncated_dump_is_none() {
        let text = "image_data\narray of bytes [\n01 02 03\n";
        assert!(reader(text).next_dump().unwrap().is_none());
    }

    #[test]
    fn invalid_hex_is_an_error() {
        let text = "image_data\narray of bytes [\n01 zz 03\n]\n";
        let err = reader(text).next_dump().unwrap_err().to_string();
        assert!(err.contains("\"zz\""), "unexpected error: {err}");
        assert!(err.contains("line 3"), "unexpected error: {err}");
    }

    #[test]
    fn malformed_dump_does_not_poison_the_next_one() {
        let text = format!(
            "image_data\narray of bytes [\n30 zz 90\n60 60 60\n]\n{ONE_DUMP}"
        );
        let mut r = reader(&text);
        assert!(matches!(
            r.next_dump(),
            Err(DumpError::Malformed { ref token, line: 3 }) if token == "zz"
        ));
        let pixels = r.next_dump().unwrap().unwrap();
        assert_eq!(pixels.len(), 3);
        assert!(r.next_dump().unwrap().is_none());
    }
}
