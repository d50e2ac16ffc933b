//! zlib framing for loose objects (2-byte header, deflate blocks,
//! Adler-32 trailer).

use std::io::{self, Write};

use flate2::write::ZlibEncoder;
use flate2::{Compression, Decompress, FlushDecompress, Status};

use super::{Error, Result};

const CHUNK: usize = 8192;

/// Compress `data` into `writer` and hand the writer back once the zlib
/// trailer has been written.
pub fn compress_to<W: Write>(writer: W, data: &[u8]) -> io::Result<W> {
    let mut encoder = ZlibEncoder::new(writer, Compression::default());
    encoder.write_all(data)?;
    encoder.finish()
}

/// Compress `data` into a new buffer.
pub fn compress(data: &[u8]) -> io::Result<Vec<u8>> {
    compress_to(Vec::with_capacity(data.len() / 2 + 16), data)
}

/// Inflate one complete zlib stream.
///
/// Fails with [`Error::CorruptStream`] if the stream is invalid or ends
/// before its trailer. Bytes after the end of the stream are ignored.
pub fn decompress(data: &[u8]) -> Result<Vec<u8>> {
    let mut inflater = Decompress::new(true);
    let mut out = Vec::with_capacity(data.len().saturating_mul(2).max(CHUNK));

    loop {
        let (in_before, out_before) = (inflater.total_in(), inflater.total_out());
        if out.len() == out.capacity() {
            out.reserve(CHUNK.max(out.len()));
        }

        let input = &data[in_before as usize..];
        let status = inflater
            .decompress_vec(input, &mut out, FlushDecompress::None)
            .map_err(|err| Error::CorruptStream(io::Error::new(io::ErrorKind::InvalidData, err)))?;

        if status == Status::StreamEnd {
            return Ok(out);
        }

        if inflater.total_in() == in_before && inflater.total_out() == out_before {
            return Err(Error::CorruptStream(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "zlib stream ended early",
            )));
        }
    }
}
