use tessel_core::{Error, Result};

use flate2::read::{DeflateDecoder, GzDecoder, ZlibDecoder};
use std::io::Read;

/// Undoes the `Content-Encoding` of a response body.
///
/// Unknown encodings are passed through untouched.
pub(crate) fn decompress(encoding: Option<&str>, body: Vec<u8>) -> Result<Vec<u8>> {
    let encoding = encoding.map(|encoding| encoding.trim().to_ascii_lowercase());

    match encoding.as_deref() {
        Some("gzip") | Some("x-gzip") => read_all(GzDecoder::new(&body[..])),
        Some("deflate") => {
            // Servers disagree on whether "deflate" means zlib-wrapped or raw
            read_all(ZlibDecoder::new(&body[..]))
                .or_else(|_| read_all(DeflateDecoder::new(&body[..])))
        }
        _ => Ok(body),
    }
}

fn read_all(mut reader: impl Read) -> Result<Vec<u8>> {
    let mut out = vec![];
    reader
        .read_to_end(&mut out)
        .map_err(|err| Error::transport(err))?;
    Ok(out)
}
