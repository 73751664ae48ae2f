mod georef_tests;
mod source_tests;

use std::cell::{Cell, RefCell};

use image::{Rgba, RgbaImage};

use crate::constants::layers::REMOTE_PROVIDER;
use crate::coordinate::Rectangle;
use crate::errors::{QInfraError, QInfraResult};
use crate::export::render::{RenderRequest, Renderer, SourceLoader};
use crate::workspace::SourceReference;

/// Renderer that records its calls and returns a solid image
#[derive(Default)]
pub(crate) struct RecordingRenderer {
    pub calls: Cell<usize>,
    pub last_layers: RefCell<Vec<SourceReference>>,
    /// Return an image of this size instead of the requested one
    pub wrong_size: Option<(u32, u32)>,
    pub fail: bool,
}

impl Renderer for RecordingRenderer {
    fn render(&self, request: &RenderRequest<'_>) -> QInfraResult<RgbaImage> {
        self.calls.set(self.calls.get() + 1);
        *self.last_layers.borrow_mut() = request.layers.to_vec();
        if self.fail {
            return Err(QInfraError::RenderFailed("tile request timed out".to_string()));
        }
        let (width, height) = self.wrong_size.unwrap_or((request.width_px, request.height_px));
        Ok(RgbaImage::from_pixel(width, height, Rgba([10, 120, 30, 255])))
    }
}

/// Source loader that counts loads and accepts or rejects everything
pub(crate) struct FakeLoader {
    pub valid: bool,
    pub loads: Cell<usize>,
    pub extent: Option<Rectangle>,
}

impl FakeLoader {
    pub fn accepting() -> Self {
        FakeLoader {
            valid: true,
            loads: Cell::new(0),
            extent: None,
        }
    }

    pub fn rejecting() -> Self {
        FakeLoader {
            valid: false,
            ..FakeLoader::accepting()
        }
    }
}

impl SourceLoader for FakeLoader {
    fn load(&self, request: &str, label: &str) -> SourceReference {
        self.loads.set(self.loads.get() + 1);
        SourceReference {
            label: label.to_string(),
            provider: REMOTE_PROVIDER.to_string(),
            request: request.to_string(),
            identity: None,
            valid: self.valid,
            extent: self.extent,
        }
    }
}
