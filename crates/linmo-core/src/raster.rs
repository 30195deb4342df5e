use bytemuck::{Pod, Zeroable};

/// A single RGBA8 pixel, straight (non-premultiplied) alpha.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Pod, Zeroable)]
pub struct Rgba8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba8 {
    pub const TRANSPARENT: Rgba8 = Rgba8::new(0, 0, 0, 0);
    pub const BLACK: Rgba8 = Rgba8::new(0, 0, 0, 255);
    pub const WHITE: Rgba8 = Rgba8::new(255, 255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Fully opaque color.
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    /// Black at the given opacity.
    pub const fn black_alpha(a: u8) -> Self {
        Self::new(0, 0, 0, a)
    }
}

/// A CPU-side RGBA raster, row-major, origin at the top-left.
#[derive(Debug, Clone, PartialEq)]
pub struct Raster {
    width: u32,
    height: u32,
    pixels: Vec<Rgba8>,
}

impl Raster {
    /// Allocate a fully transparent raster.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Rgba8::TRANSPARENT; width as usize * height as usize],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Reset every pixel to transparent.
    pub fn clear(&mut self) {
        self.pixels.fill(Rgba8::TRANSPARENT);
    }

    pub fn get(&self, x: u32, y: u32) -> Option<Rgba8> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.pixels[(y * self.width + x) as usize])
    }

    /// Write one pixel. Out-of-bounds writes are ignored.
    pub fn put(&mut self, x: u32, y: u32, color: Rgba8) {
        if x >= self.width || y >= self.height {
            return;
        }
        self.pixels[(y * self.width + x) as usize] = color;
    }

    pub fn pixels(&self) -> &[Rgba8] {
        &self.pixels
    }

    /// The pixel data as raw bytes, for blitting.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.pixels)
    }

    /// Paint `layer` over the current contents (source-over, straight alpha).
    /// Both rasters must have the same dimensions.
    pub fn blend_layer(&mut self, layer: &Raster) {
        debug_assert_eq!(self.dimensions(), layer.dimensions());
        for (dst, src) in self.pixels.iter_mut().zip(layer.pixels.iter()) {
            *dst = over(*dst, *src);
        }
    }
}

/// Source-over in u32 arithmetic. Layers are binary alpha in practice, so the
/// rounding here is invisible.
fn over(dst: Rgba8, src: Rgba8) -> Rgba8 {
    let sa = src.a as u32;
    if sa == 255 {
        return src;
    }
    if sa == 0 {
        return dst;
    }
    let da = dst.a as u32;
    let dst_weight = da * (255 - sa) / 255;
    let out_a = sa + dst_weight;
    if out_a == 0 {
        return Rgba8::TRANSPARENT;
    }
    let channel = |s: u8, d: u8| ((s as u32 * sa + d as u32 * dst_weight) / out_a) as u8;
    Rgba8 {
        r: channel(src.r, dst.r),
        g: channel(src.g, dst.g),
        b: channel(src.b, dst.b),
        a: out_a as u8,
    }
}
