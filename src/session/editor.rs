use std::path::Path;
use std::sync::Arc;

use image::RgbaImage;
use image::imageops::{self, FilterType};

use crate::brush::{BrushEngine, BrushMode, BrushSpec};
use crate::config::EditorConfig;
use crate::formats::{self, FormatError, encode_png, png_data_url};
use crate::geometry::{ScreenPoint, Size};
use crate::gesture::{GestureAction, GestureRouter, GestureState, InputEvent};
use crate::history::HistoryStack;
use crate::viewport::{ViewportError, ViewportTransform};

use super::render::render_frame;
use super::{Asset, Result, SessionError};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BrushCursor {
    pub center: ScreenPoint,
    pub diameter: f32,
    pub visible: bool,
}

/// Result of applying the edits: the working raster and its PNG encodings.
#[derive(Debug, Clone)]
pub struct AppliedEdit {
    pub width: u32,
    pub height: u32,
    pub image: RgbaImage,
    pub png: Vec<u8>,
    pub data_url: String,
}

/// One manual mask-correction session.
///
/// Owns the working raster, a read-only source raster, the viewport, the
/// brush, the undo history and the gesture state. Entering creates all of
/// them; `apply` and `cancel` consume the session.
#[derive(Debug)]
pub struct EditorSession {
    config: EditorConfig,
    working: RgbaImage,
    source: Arc<RgbaImage>,
    initial: Arc<RgbaImage>,
    viewport: ViewportTransform,
    history: HistoryStack,
    router: GestureRouter,
    brush: BrushEngine,
    container: Option<Size>,
    pending_fit: bool,
    hover: Option<ScreenPoint>,
    dirty: bool,
}

impl EditorSession {
    pub fn enter(processed: RgbaImage, source: RgbaImage, config: EditorConfig) -> Result<Self> {
        config.validate()?;
        if processed.width() == 0 || processed.height() == 0 {
            return Err(SessionError::EmptyRaster(Asset::Processed));
        }
        if source.width() == 0 || source.height() == 0 {
            return Err(SessionError::EmptyRaster(Asset::Source));
        }

        let (width, height) = processed.dimensions();
        let source = if source.dimensions() != (width, height) {
            log::warn!(
                "source is {}x{}, resampling to the processed size {width}x{height}",
                source.width(),
                source.height()
            );
            imageops::resize(&source, width, height, FilterType::Triangle)
        } else {
            source
        };

        let brush = BrushEngine::new(BrushSpec::from_size(
            BrushMode::Erase,
            config.brush_size,
            config.brush_hardness,
        )?)?;
        let history = HistoryStack::seeded(&processed, config.history_capacity);
        log::info!(
            "enter_edit_mode {width}x{height}, history limit {} snapshots ({} bytes each)",
            history.capacity(),
            processed.as_raw().len()
        );

        Ok(Self {
            viewport: ViewportTransform::new(config.min_scale, config.max_scale),
            router: GestureRouter::new(config.wheel_sensitivity),
            initial: Arc::new(processed.clone()),
            working: processed,
            source: Arc::new(source),
            history,
            brush,
            config,
            container: None,
            pending_fit: true,
            hover: None,
            dirty: true,
        })
    }

    /// Decodes both images first; on failure no session exists.
    pub fn enter_encoded(processed: &[u8], source: &[u8], config: EditorConfig) -> Result<Self> {
        let processed = decode(Asset::Processed, formats::decode_rgba(processed))?;
        let source = decode(Asset::Source, formats::decode_rgba(source))?;
        Self::enter(processed, source, config)
    }

    pub fn enter_files(
        processed: impl AsRef<Path>,
        source: impl AsRef<Path>,
        config: EditorConfig,
    ) -> Result<Self> {
        let processed = decode(Asset::Processed, formats::read_rgba(processed))?;
        let source = decode(Asset::Source, formats::read_rgba(source))?;
        Self::enter(processed, source, config)
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    pub fn working(&self) -> &RgbaImage {
        &self.working
    }

    pub fn source(&self) -> &RgbaImage {
        &self.source
    }

    pub fn shared_source(&self) -> Arc<RgbaImage> {
        Arc::clone(&self.source)
    }

    pub fn raster_size(&self) -> Size {
        Size::from_pixels(self.working.width(), self.working.height())
    }

    pub fn viewport(&self) -> &ViewportTransform {
        &self.viewport
    }

    pub fn history(&self) -> &HistoryStack {
        &self.history
    }

    pub fn gesture_state(&self) -> &GestureState {
        self.router.state()
    }

    pub fn brush(&self) -> &BrushSpec {
        self.brush.spec()
    }

    pub fn container(&self) -> Option<Size> {
        self.container
    }

    pub fn needs_fit(&self) -> bool {
        self.pending_fit
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Records the container size and performs a deferred fit if one is
    /// waiting. Returns `true` when the viewport was fitted.
    pub fn set_container(&mut self, size: Size) -> bool {
        self.container = Some(size);
        self.dirty = true;
        if self.pending_fit { self.fit() } else { false }
    }

    /// Fits the raster into the container. While the container has no
    /// size yet the fit stays pending and is retried by `set_container`.
    pub fn fit(&mut self) -> bool {
        let Some(container) = self.container else {
            self.pending_fit = true;
            return false;
        };
        match self
            .viewport
            .fit_to_container(container, self.raster_size(), self.config.fit_margin)
        {
            Ok(()) => {
                self.pending_fit = false;
                self.dirty = true;
                true
            }
            Err(error @ ViewportError::LayoutNotReady { .. }) => {
                log::debug!("{error}; fit deferred");
                self.pending_fit = true;
                false
            }
            Err(error) => {
                log::warn!("fit skipped: {error}");
                false
            }
        }
    }

    pub fn dispatch(&mut self, event: &InputEvent) -> Result<()> {
        let actions = self.router.route(event, &self.viewport);
        for action in actions {
            self.apply_action(action)?;
        }
        Ok(())
    }

    fn apply_action(&mut self, action: GestureAction) -> Result<()> {
        match action {
            GestureAction::SetOffset(offset) => {
                self.viewport.set_offset(offset);
                self.dirty = true;
            }
            GestureAction::SetView { scale, offset } => {
                self.viewport.set_view(scale, offset);
                self.dirty = true;
            }
            GestureAction::ZoomAt { anchor, zoom } => {
                self.viewport.zoom_at(anchor, zoom);
                self.dirty = true;
            }
            GestureAction::Stroke(at) => {
                if self
                    .brush
                    .apply_stroke(&mut self.working, &self.source, at)?
                    .is_some()
                {
                    self.dirty = true;
                }
            }
            GestureAction::CommitStroke => {
                if self.history.commit(&self.working) {
                    log::debug!(
                        "stroke committed, history {}/{}",
                        self.history.len(),
                        self.history.capacity()
                    );
                }
            }
            GestureAction::Hover(position) => self.hover = position,
        }
        Ok(())
    }

    pub fn brush_cursor(&self) -> BrushCursor {
        BrushCursor {
            center: self.hover.unwrap_or_default(),
            diameter: self.viewport.cursor_diameter(self.brush.spec().radius),
            visible: self.hover.is_some() && !self.router.state().is_navigating(),
        }
    }

    pub fn set_tool(&mut self, mode: BrushMode) {
        if self.brush.spec().mode != mode {
            log::info!("tool switched to {}", mode.label());
            self.brush.set_mode(mode);
            self.dirty = true;
        }
    }

    pub fn set_brush_size(&mut self, size: f32) -> Result<()> {
        self.brush.set_size(size)?;
        Ok(())
    }

    pub fn set_hardness(&mut self, hardness: f32) -> Result<()> {
        self.brush.set_hardness(hardness)?;
        Ok(())
    }

    pub fn can_undo(&self) -> bool {
        self.router.state().is_idle() && self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.router.state().is_idle() && self.history.can_redo()
    }

    pub fn undo(&mut self) -> bool {
        if !self.router.state().is_idle() {
            return false;
        }
        match self.history.undo() {
            Some(entry) => {
                self.dirty |= entry.restore_into(&mut self.working);
                true
            }
            None => false,
        }
    }

    pub fn redo(&mut self) -> bool {
        if !self.router.state().is_idle() {
            return false;
        }
        match self.history.redo() {
            Some(entry) => {
                self.dirty |= entry.restore_into(&mut self.working);
                true
            }
            None => false,
        }
    }

    /// Drops every edit: back to the processed image as entered, with a
    /// fresh single-entry history. A gesture in progress is abandoned.
    pub fn reset(&mut self) {
        self.router.cancel();
        self.working.copy_from_slice(self.initial.as_raw());
        self.history.reset(&self.working);
        self.dirty = true;
        log::info!("reset_edits");
    }

    /// Renders a frame if anything changed since the last one and the
    /// container has a size.
    pub fn render(&mut self) -> Option<RgbaImage> {
        if !self.dirty {
            return None;
        }
        let frame = self.frame()?;
        self.dirty = false;
        Some(frame)
    }

    pub fn frame(&self) -> Option<RgbaImage> {
        let container = self.container.filter(|size| size.is_laid_out())?;
        let ghost = (self.brush.spec().mode == BrushMode::Restore).then_some(self.config.ghost_opacity);
        Some(render_frame(
            &self.working,
            &self.source,
            &self.viewport,
            container,
            ghost,
        ))
    }

    /// Commits the edits: the working raster is encoded as PNG and as a
    /// data URL for download links and the comparison view.
    pub fn apply(self) -> Result<AppliedEdit> {
        let png = encode_png(&self.working).map_err(SessionError::Export)?;
        let data_url = png_data_url(&png);
        log::info!(
            "apply_edits {}x{}, {} png bytes",
            self.working.width(),
            self.working.height(),
            png.len()
        );
        Ok(AppliedEdit {
            width: self.working.width(),
            height: self.working.height(),
            image: self.working,
            png,
            data_url,
        })
    }

    pub fn cancel(self) {
        log::info!("cancel_edits");
    }
}

fn decode(asset: Asset, result: std::result::Result<RgbaImage, FormatError>) -> Result<RgbaImage> {
    result.map_err(|error| {
        log::warn!("{asset} failed to load: {error}");
        SessionError::AssetLoad { asset, error }
    })
}
