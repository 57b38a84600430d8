// Plain-text PPM ("P3") output.
// http://netpbm.sourceforge.net/doc/ppm.html

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use image::Rgb;
use log::{debug, info};

use crate::error::Error;
use crate::types::FrameBuffer;

/// Highest channel value announced in the header.
const MAX_VALUE: u8 = 255;

/// Pass-through writer that remembers how many bytes were accepted.
struct CountingWriter<W> {
    inner: W,
    bytes: usize,
}

impl<W: Write> CountingWriter<W> {
    fn new(inner: W) -> Self {
        Self { inner, bytes: 0 }
    }
}

impl<W: Write> Write for CountingWriter<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let n = self.inner.write(buf)?;
        self.bytes += n;
        Ok(n)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}

/// Serialize `fb` as P3: header, then one "r g b" line per pixel in row-major order.
/// Alpha is not part of the format and is dropped.
pub fn encode_ppm<W: Write>(out: &mut W, fb: &FrameBuffer) -> io::Result<()> {
    write!(out, "P3\n{} {}\n{}\n", fb.width(), fb.height(), MAX_VALUE)?;
    for &color in fb.pixels() {
        let Rgb([r, g, b]) = color.to_rgb();
        writeln!(out, "{r} {g} {b}")?;
    }
    Ok(())
}

/// Write `fb` to `path`, creating or truncating the file.
///
/// Fails with [`Error::CreateOutput`] before touching anything if the file can't be
/// opened, and with [`Error::WriteOutput`] if any later write or the final flush fails.
/// The handle is closed on return either way.
pub fn write_ppm(path: impl AsRef<Path>, fb: &FrameBuffer) -> Result<(), Error> {
    let path = path.as_ref();
    let file = File::create(path).map_err(|source| Error::CreateOutput { path: path.to_path_buf(), source })?;

    let mut out = CountingWriter::new(BufWriter::new(file));
    encode_ppm(&mut out, fb)
        .and_then(|()| out.flush())
        .map_err(|source| Error::WriteOutput { path: path.to_path_buf(), source })?;

    debug!("wrote {} bytes", out.bytes);
    info!("saved {}x{} image to {}", fb.width(), fb.height(), path.display());
    Ok(())
}
