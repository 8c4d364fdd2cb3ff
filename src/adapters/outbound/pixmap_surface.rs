use crate::common::{DomainError, DomainResult};
use crate::config::CanvasConfig;
use crate::domains::simulation::{Rgba, Surface};
use std::path::PathBuf;
use tiny_skia::{FillRule, Paint, PathBuilder, Pixmap, Rect, Transform};

/// Raster canvas backed by a `tiny_skia::Pixmap`. When an output directory is
/// configured every presented frame is written there as PNG.
pub struct PixmapSurface {
    pixmap: Pixmap,
    output_dir: Option<PathBuf>,
}

impl PixmapSurface {
    pub fn new(width: u32, height: u32) -> DomainResult<Self> {
        let pixmap = Pixmap::new(width, height).ok_or_else(|| {
            DomainError::InfrastructureError(format!("invalid canvas size {}x{}", width, height))
        })?;
        Ok(Self {
            pixmap,
            output_dir: None,
        })
    }

    pub fn from_config(config: &CanvasConfig) -> DomainResult<Self> {
        let surface = Self::new(config.width, config.height)?;
        match &config.output_dir {
            Some(dir) => surface.with_output_dir(dir.clone()),
            None => Ok(surface),
        }
    }

    pub fn with_output_dir(mut self, dir: PathBuf) -> DomainResult<Self> {
        std::fs::create_dir_all(&dir)
            .map_err(|e| DomainError::InfrastructureError(format!("{}: {}", dir.display(), e)))?;
        self.output_dir = Some(dir);
        Ok(self)
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgba> {
        self.pixmap.pixel(x, y).map(|p| {
            let c = p.demultiply();
            Rgba {
                r: c.red(),
                g: c.green(),
                b: c.blue(),
                a: c.alpha(),
            }
        })
    }

    pub fn frame_path(&self, frame_index: u64) -> Option<PathBuf> {
        self.output_dir
            .as_ref()
            .map(|dir| dir.join(format!("frame_{:06}.png", frame_index)))
    }
}

fn paint_for(color: Rgba) -> Paint<'static> {
    let mut paint = Paint::default();
    paint.set_color_rgba8(color.r, color.g, color.b, color.a);
    paint.anti_alias = true;
    paint
}

impl Surface for PixmapSurface {
    fn width(&self) -> u32 {
        self.pixmap.width()
    }

    fn height(&self) -> u32 {
        self.pixmap.height()
    }

    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: Rgba) {
        if let Some(rect) = Rect::from_xywh(x, y, width, height) {
            self.pixmap
                .fill_rect(rect, &paint_for(color), Transform::identity(), None);
        }
    }

    fn fill_circle(&mut self, cx: f32, cy: f32, radius: f32, color: Rgba) {
        if let Some(path) = PathBuilder::from_circle(cx, cy, radius) {
            self.pixmap.fill_path(
                &path,
                &paint_for(color),
                FillRule::Winding,
                Transform::identity(),
                None,
            );
        }
    }

    fn present(&mut self, frame_index: u64) -> DomainResult<()> {
        if let Some(path) = self.frame_path(frame_index) {
            self.pixmap
                .save_png(&path)
                .map_err(|e| DomainError::InfrastructureError(format!("{}: {}", path.display(), e)))?;
        }
        Ok(())
    }
}
