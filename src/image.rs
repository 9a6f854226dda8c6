use crate::*;
use anyhow::{bail, Context, Result};
use std::io::Write;
use std::path::Path;

fn pixel_index(w: u32, x: u32, y: u32) -> usize {
    y as usize * w as usize + x as usize
}

/// Linear color buffer, row 0 at the top.
pub struct Image {
    w: u32,
    h: u32,
    buf: Vec<RGB>,
}

impl Image {
    pub fn new(w: u32, h: u32) -> Self {
        let mut buf = Vec::new();
        buf.resize(w as usize * h as usize, RGB::black());
        Image { w, h, buf }
    }

    pub fn at(&self, x: u32, y: u32) -> &RGB {
        &self.buf[pixel_index(self.w, x, y)]
    }

    pub fn at_mut(&mut self, x: u32, y: u32) -> &mut RGB {
        &mut self.buf[pixel_index(self.w, x, y)]
    }

    pub fn w(&self) -> u32 {
        self.w
    }
    pub fn h(&self) -> u32 {
        self.h
    }

    /// Plain `P3` pixmap, one gamma corrected pixel per line.
    pub fn write_ppm<W: Write>(&self, out: &mut W) -> std::io::Result<()> {
        write!(out, "P3\n{} {}\n255\n", self.w, self.h)?;
        for c in self.buf.iter() {
            let [r, g, b] = c.to_bytes();
            writeln!(out, "{} {} {}", r, g, b)?;
        }
        Ok(())
    }

    /// Gamma corrected 8-bit RGB triples in row-major order.
    pub fn to_rgb8(&self) -> Vec<u8> {
        self.buf.iter().flat_map(|c| c.to_bytes().to_vec()).collect()
    }

    pub fn write_png<W: Write>(&self, out: W) -> Result<()> {
        let mut encoder = png::Encoder::new(out, self.w, self.h);
        encoder.set_color(png::ColorType::Rgb);
        encoder.set_depth(png::BitDepth::Eight);
        let mut writer = encoder.write_header()?;
        writer.write_image_data(&self.to_rgb8())?;
        writer.finish()?;
        Ok(())
    }

    /// Picks the encoding from the file extension: `.ppm` or `.png`.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());
        match ext.as_deref() {
            Some("ppm") => {
                let mut out = Self::create(path)?;
                self.write_ppm(&mut out)
                    .and_then(|_| out.flush())
                    .with_context(|| format!("failed to write {}", path.display()))?;
            }
            Some("png") => {
                let out = Self::create(path)?;
                self.write_png(out)
                    .with_context(|| format!("failed to write {}", path.display()))?;
            }
            _ => bail!(
                "unsupported output format {}; use .ppm or .png",
                path.display()
            ),
        }
        Ok(())
    }

    fn create(path: &Path) -> Result<std::io::BufWriter<std::fs::File>> {
        let file = std::fs::File::create(path)
            .with_context(|| format!("failed to create {}", path.display()))?;
        Ok(std::io::BufWriter::new(file))
    }
}

#[derive(Clone, Copy, Debug)]
pub struct Pixel {
    pub accum: RGB,
    pub samples: usize,
}

impl Default for Pixel {
    fn default() -> Self {
        Pixel {
            accum: RGB::all(0.0),
            samples: 0,
        }
    }
}

impl Pixel {
    pub fn average(&self) -> RGB {
        if self.samples == 0 {
            RGB::black()
        } else {
            self.accum / (self.samples as f64)
        }
    }
}

/// Per-pixel sample sums, averaged into an [`Image`] once rendering ends.
pub struct Film {
    w: u32,
    h: u32,
    buf: Vec<Pixel>,
}

impl Film {
    pub fn new(w: u32, h: u32) -> Self {
        let mut buf = Vec::new();
        buf.resize(w as usize * h as usize, Default::default());
        Film { w, h, buf }
    }

    pub fn to_image(&self) -> Image {
        Image {
            w: self.w,
            h: self.h,
            buf: self.buf.iter().map(Pixel::average).collect(),
        }
    }

    pub fn at_mut(&mut self, x: u32, y: u32) -> &mut Pixel {
        &mut self.buf[pixel_index(self.w, x, y)]
    }

    pub fn w(&self) -> u32 {
        self.w
    }
    pub fn h(&self) -> u32 {
        self.h
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indexing_does_not_wrap_at_large_sizes() {
        assert_eq!(pixel_index(4, 3, 2), 11);
        assert_eq!(
            pixel_index(65536, 65535, 65535) as u64,
            65536u64 * 65536 - 1
        );
    }

    #[test]
    fn ppm_layout() {
        let mut image = Image::new(2, 1);
        *image.at_mut(0, 0) = RGB::all(1.0);
        *image.at_mut(1, 0) = RGB::new(0.25, 0.0, 2.0);
        let mut out = vec![];
        image.write_ppm(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text, "P3\n2 1\n255\n255 255 255\n128 0 255\n");
    }

    #[test]
    fn film_averages_samples() {
        let mut film = Film::new(2, 2);
        {
            let p = film.at_mut(1, 0);
            p.accum += RGB::new(1.0, 0.0, 0.5);
            p.accum += RGB::new(0.0, 0.0, 0.5);
            p.samples += 2;
        }
        let image = film.to_image();
        assert_eq!(*image.at(1, 0), RGB::new(0.5, 0.0, 0.5));
        // untouched pixels stay black rather than NaN
        assert_eq!(*image.at(0, 1), RGB::black());
    }

    #[test]
    fn rgb8_conversion_keeps_layout() {
        let mut image = Image::new(3, 2);
        *image.at_mut(2, 1) = RGB::all(1.0);
        let rgb8 = image.to_rgb8();
        assert_eq!(rgb8.len(), 3 * 2 * 3);
        assert_eq!(&rgb8[15..18], &[255, 255, 255]);
        assert!(rgb8[..15].iter().all(|b| *b == 0));
    }

    #[test]
    fn png_has_signature() {
        let mut image = Image::new(4, 3);
        *image.at_mut(1, 2) = RGB::new(0.5, 0.2, 0.9);
        let mut out = vec![];
        image.write_png(&mut out).unwrap();
        assert_eq!(&out[..8], &[0x89, b'P', b'N', b'G', 0x0d, 0x0a, 0x1a, 0x0a]);
    }

    #[test]
    fn unknown_extension_is_rejected() {
        let image = Image::new(1, 1);
        let err = image.save("out.exr").unwrap_err();
        assert!(err.to_string().contains("unsupported output format"));
    }
}
