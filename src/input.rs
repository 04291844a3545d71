use log::warn;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

/// Search terms, one per line. Lines that are not UTF-8 are logged and skipped.
pub struct Terms<R> {
    segments: tokio::io::Split<R>,
}

impl<R: AsyncBufRead + Unpin> Terms<R> {
    pub fn new(reader: R) -> Terms<R> {
        Terms {
            segments: reader.split(b'\n'),
        }
    }

    pub async fn next_term(&mut self) -> anyhow::Result<Option<String>> {
        while let Some(segment) = self.segments.next_segment().await? {
            if let Some(term) = decode(segment) {
                return Ok(Some(term));
            }
        }

        Ok(None)
    }
}

fn decode(mut segment: Vec<u8>) -> Option<String> {
    if segment.last() == Some(&b'\r') {
        segment.pop();
    }

    match String::from_utf8(segment) {
        Ok(term) => Some(term),
        Err(err) => {
            warn!("skipping search term that is not valid UTF-8: {}", err);
            None
        }
    }
}
