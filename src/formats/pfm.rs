use std::fs::File;
use std::io::{BufReader, BufWriter, ErrorKind, Read, Write};
use std::path::Path;

use anyhow::Context as _;

use crate::foundation::core::Dimensions;
use crate::foundation::error::{DenoyteError, DenoyteResult};

/// Magic token of a three-channel (color) float map.
const COLOR_MAGIC: &str = "PF";

/// Header lines longer than this are treated as garbage input.
const MAX_HEADER_LINE: usize = 1024;

/// Byte order of the binary pixel payload.
///
/// The header never names the order directly; the sign of the scale field
/// selects it. Negative scale means little-endian, non-negative big-endian.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ByteOrder {
    /// Least significant byte first; encoded as a negative scale.
    LittleEndian,
    /// Most significant byte first; encoded as a positive scale.
    BigEndian,
}

impl ByteOrder {
    /// The byte order a decoded scale field implies.
    pub fn from_scale(scale: f32) -> Self {
        if scale < 0.0 {
            Self::LittleEndian
        } else {
            Self::BigEndian
        }
    }

    /// The unit-magnitude scale literal written for this order.
    pub fn scale_literal(self) -> &'static str {
        match self {
            Self::LittleEndian => "-1.0",
            Self::BigEndian => "1.0",
        }
    }
}

/// A decoded color float image.
///
/// Rows are stored top first, unlike the bottom-first stream layout; the
/// codec flips scanlines on both paths.
#[derive(Clone, Debug, PartialEq)]
pub struct FloatImage {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// RGB triples, `width * height * 3` values, row-major, top row first.
    pub data: Vec<f32>,
}

impl FloatImage {
    /// Dimensions of the image.
    pub fn dimensions(&self) -> Dimensions {
        Dimensions {
            width: self.width,
            height: self.height,
        }
    }

    /// Quantize to opaque RGBA8, clamping each channel to `[0, 1]`.
    pub fn to_rgba8(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.pixel_bytes());
        for px in self.data.chunks_exact(3) {
            out.push(quantize(px[0]));
            out.push(quantize(px[1]));
            out.push(quantize(px[2]));
            out.push(255);
        }
        out
    }

    fn pixel_bytes(&self) -> usize {
        self.data.len() / 3 * 4
    }
}

fn quantize(v: f32) -> u8 {
    (v.clamp(0.0, 1.0) * 255.0).round() as u8
}

/// Encode an RGB sample buffer as a color float map.
///
/// `samples` holds `dims.sample_len()` values, row-major, top row first; the
/// stream is written bottom row first per the format. Values are written
/// verbatim, so callers clamp or remap display-range data before encoding.
pub fn write_pfm<W: Write>(
    w: &mut W,
    samples: &[f32],
    dims: Dimensions,
    order: ByteOrder,
) -> DenoyteResult<()> {
    if samples.len() != dims.sample_len() {
        return Err(DenoyteError::validation(format!(
            "sample buffer holds {} values, {}x{} RGB needs {}",
            samples.len(),
            dims.width,
            dims.height,
            dims.sample_len(),
        )));
    }

    write!(
        w,
        "{COLOR_MAGIC}\n{} {}\n{}\n",
        dims.width,
        dims.height,
        order.scale_literal()
    )
    .map_err(|e| DenoyteError::export(format!("write float-map header: {e}")))?;

    let row_len = dims.width as usize * 3;
    let mut row_bytes = Vec::with_capacity(row_len * 4);
    for y in (0..dims.height as usize).rev() {
        row_bytes.clear();
        for &v in &samples[y * row_len..(y + 1) * row_len] {
            let bytes = match order {
                ByteOrder::LittleEndian => v.to_le_bytes(),
                ByteOrder::BigEndian => v.to_be_bytes(),
            };
            row_bytes.extend_from_slice(&bytes);
        }
        w.write_all(&row_bytes)
            .map_err(|e| DenoyteError::export(format!("write float-map scanline: {e}")))?;
    }
    Ok(())
}

/// Encode an RGB sample buffer into a file, see [`write_pfm`].
pub fn write_pfm_file(
    path: &Path,
    samples: &[f32],
    dims: Dimensions,
    order: ByteOrder,
) -> DenoyteResult<()> {
    let file = File::create(path)
        .map_err(|e| DenoyteError::export(format!("create '{}': {e}", path.display())))?;
    let mut w = BufWriter::new(file);
    write_pfm(&mut w, samples, dims, order)?;
    w.flush()
        .map_err(|e| DenoyteError::export(format!("flush '{}': {e}", path.display())))?;
    Ok(())
}

/// Parse the three-line header, leaving the reader at the first pixel byte.
///
/// Fails with [`DenoyteError::MalformedImage`] when the magic is not `PF`,
/// the dimensions are not two positive integers describing a decodable
/// image size, or the scale is not a finite number.
pub fn read_pfm_header<R: Read>(r: &mut R) -> DenoyteResult<(Dimensions, ByteOrder)> {
    let magic = read_header_line(r)?;
    if magic != COLOR_MAGIC {
        return Err(DenoyteError::malformed(format!(
            "expected magic {COLOR_MAGIC:?}, got {magic:?}"
        )));
    }
    let dims = parse_dimensions(&read_header_line(r)?)?;
    let order = ByteOrder::from_scale(parse_scale(&read_header_line(r)?)?);
    Ok((dims, order))
}

/// Decode a color float map from a byte stream.
///
/// Fails with [`DenoyteError::MalformedImage`] when the header cannot be
/// parsed or the stream ends before all pixel bytes are read. The decoded
/// rows are returned top first.
pub fn read_pfm<R: Read>(r: &mut R) -> DenoyteResult<FloatImage> {
    let (dims, order) = read_pfm_header(r)?;

    let row_len = dims.width as usize * 3;
    let mut data = vec![0.0f32; dims.sample_len()];
    let mut row_bytes = vec![0u8; row_len * 4];
    // The stream stores the bottom row first.
    for y in (0..dims.height as usize).rev() {
        read_pixel_bytes(r, &mut row_bytes)?;
        let row = &mut data[y * row_len..(y + 1) * row_len];
        for (dst, src) in row.iter_mut().zip(row_bytes.chunks_exact(4)) {
            let bytes = [src[0], src[1], src[2], src[3]];
            *dst = match order {
                ByteOrder::LittleEndian => f32::from_le_bytes(bytes),
                ByteOrder::BigEndian => f32::from_be_bytes(bytes),
            };
        }
    }
    Ok(FloatImage {
        width: dims.width,
        height: dims.height,
        data,
    })
}

/// Decode a color float map from a file, see [`read_pfm`].
pub fn read_pfm_file(path: &Path) -> DenoyteResult<FloatImage> {
    let file = File::open(path)
        .with_context(|| format!("open float map '{}'", path.display()))?;
    read_pfm(&mut BufReader::new(file))
}

/// Read one header line, byte by byte, up to a bare linefeed.
///
/// The format terminates header lines with a single `\n` (0x0A); a carriage
/// return is not header whitespace and pollutes the token it lands in.
fn read_header_line<R: Read>(r: &mut R) -> DenoyteResult<String> {
    let mut line = Vec::new();
    let mut byte = [0u8; 1];
    loop {
        match r.read_exact(&mut byte) {
            Ok(()) => {}
            Err(e) if e.kind() == ErrorKind::UnexpectedEof => {
                return Err(DenoyteError::malformed(
                    "stream ended before a header line terminator",
                ));
            }
            Err(e) => {
                return Err(anyhow::Error::new(e)
                    .context("read float-map header")
                    .into());
            }
        }
        if byte[0] == b'\n' {
            break;
        }
        line.push(byte[0]);
        if line.len() > MAX_HEADER_LINE {
            return Err(DenoyteError::malformed(format!(
                "header line longer than {MAX_HEADER_LINE} bytes"
            )));
        }
    }
    String::from_utf8(line)
        .map_err(|_| DenoyteError::malformed("header line is not valid UTF-8"))
}

fn parse_dimensions(line: &str) -> DenoyteResult<Dimensions> {
    let mut tokens = line.split_whitespace();
    let (Some(w), Some(h), None) = (tokens.next(), tokens.next(), tokens.next()) else {
        return Err(DenoyteError::malformed(format!(
            "expected '<width> <height>', got {line:?}"
        )));
    };
    let width: u32 = w
        .parse()
        .map_err(|_| DenoyteError::malformed(format!("width {w:?} is not a positive integer")))?;
    let height: u32 = h
        .parse()
        .map_err(|_| DenoyteError::malformed(format!("height {h:?} is not a positive integer")))?;
    if width == 0 || height == 0 {
        return Err(DenoyteError::malformed(format!(
            "dimensions {width}x{height} must be positive"
        )));
    }
    // Three 4-byte channels per pixel. A header whose payload byte count
    // overflows u64 or exceeds the decode buffer's isize::MAX bytes can
    // never be followed by complete pixel data.
    let payload_bytes = (u64::from(width) * u64::from(height)).checked_mul(12);
    if payload_bytes.is_none_or(|b| b > isize::MAX as u64) {
        return Err(DenoyteError::malformed(format!(
            "dimensions {width}x{height} exceed the largest decodable image"
        )));
    }
    Ok(Dimensions { width, height })
}

fn parse_scale(line: &str) -> DenoyteResult<f32> {
    let scale: f32 = line
        .trim()
        .parse()
        .map_err(|_| DenoyteError::malformed(format!("scale {line:?} is not a number")))?;
    if !scale.is_finite() {
        return Err(DenoyteError::malformed(format!(
            "scale {scale} must be finite"
        )));
    }
    Ok(scale)
}

fn read_pixel_bytes<R: Read>(r: &mut R, buf: &mut [u8]) -> DenoyteResult<()> {
    r.read_exact(buf).map_err(|e| match e.kind() {
        ErrorKind::UnexpectedEof => {
            DenoyteError::malformed("stream ended inside pixel data")
        }
        _ => anyhow::Error::new(e).context("read float-map pixels").into(),
    })
}

#[cfg(test)]
#[path = "../../tests/unit/formats/pfm.rs"]
mod tests;
