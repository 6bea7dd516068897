//! Editor session.
//!
//! [`GradientEditor`] owns the spec and everything around it: the canvas
//! controller, the generator, the resize debouncer and the clipboard. Every
//! operation returns a [`Response`]; failures become warning status lines and
//! leave the spec as it was.

use std::path::Path;
use std::time::Instant;

use tinct_engine::color::{base_palettes, BasePalettes, Hsv};
use tinct_engine::export::{self, ExportFormat, ExportSize, SwatchFont, SwatchLayout};
use tinct_engine::generate::{Generator, Style};
use tinct_engine::gradient::{find_preset, GradientKind, GradientSpec, MAX_STOPS, MIN_STOPS};
use tinct_engine::raster::{render_preview, sv_pick, sv_square, Field};
use tinct_engine::time::Debouncer;
use tinct_engine::{GradientError, Result, Rgb};

use crate::canvas::{CanvasGeometry, Marker};
use crate::clipboard::{ClipboardSink, SystemClipboard};
use crate::config::EditorConfig;
use crate::controller::{Controller, DragState, Response};
use crate::event::PointerEvent;
use crate::status::StatusMessage;

pub struct GradientEditor<C: ClipboardSink = SystemClipboard> {
    spec: GradientSpec,
    controller: Controller,
    generator: Generator,
    config: EditorConfig,
    style: Style,
    color_count: usize,
    resize: Debouncer,
    pending_width: Option<u32>,
    clipboard: C,
    swatch_font: Option<SwatchFont>,
    status: Option<StatusMessage>,
}

impl<C: ClipboardSink> GradientEditor<C> {
    /// Editor with an OS-seeded generator and a freshly generated gradient.
    pub fn new(config: EditorConfig, clipboard: C) -> Result<Self> {
        Self::with_generator(config, Generator::from_os_rng(), clipboard)
    }

    /// Editor drawing its colors from `generator`.
    pub fn with_generator(config: EditorConfig, mut generator: Generator, clipboard: C) -> Result<Self> {
        let color_count = config.color_count.clamp(MIN_STOPS, MAX_STOPS);
        let colors = generator.colors(config.style, color_count)?;
        let spec = GradientSpec::new(config.kind, config.angle_degrees, &colors)?;
        let canvas = CanvasGeometry::new(config.canvas_width, config.canvas_height, config.marker_radius);

        log::info!(
            "editor ready: {} {color_count} colors, canvas {}x{}",
            config.style,
            canvas.width,
            canvas.height
        );

        Ok(Self {
            spec,
            controller: Controller::new(canvas, config.add_guard_radius),
            generator,
            style: config.style,
            color_count,
            resize: Debouncer::new(config.resize_debounce),
            pending_width: None,
            clipboard,
            swatch_font: None,
            status: None,
            config,
        })
    }

    // ── state ─────────────────────────────────────────────────────────────

    #[inline]
    pub fn spec(&self) -> &GradientSpec {
        &self.spec
    }

    #[inline]
    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    #[inline]
    pub fn style(&self) -> Style {
        self.style
    }

    #[inline]
    pub fn color_count(&self) -> usize {
        self.color_count
    }

    #[inline]
    pub fn canvas(&self) -> CanvasGeometry {
        self.controller.canvas()
    }

    #[inline]
    pub fn drag_state(&self) -> DragState {
        self.controller.drag_state()
    }

    #[inline]
    pub fn clipboard(&self) -> &C {
        &self.clipboard
    }

    /// The most recent status line.
    pub fn last_status(&self) -> Option<&StatusMessage> {
        self.status.as_ref()
    }

    // ── drawing ───────────────────────────────────────────────────────────

    /// Preview field at the current canvas size.
    pub fn preview(&self) -> Field {
        let canvas = self.controller.canvas();
        render_preview(&self.spec, canvas.width, canvas.height, self.config.preview_cell)
    }

    pub fn markers(&self) -> Vec<Marker> {
        self.controller.canvas().markers(self.spec.stops())
    }

    /// `#RRGGBB` label per stop, in stop order.
    pub fn hex_labels(&self) -> Vec<String> {
        self.spec.stops().iter().map(|s| s.color.to_hex()).collect()
    }

    pub fn css(&self) -> String {
        export::css(&self.spec)
    }

    // ── canvas ────────────────────────────────────────────────────────────

    pub fn handle_pointer(&mut self, event: PointerEvent) -> Response {
        let response = self.controller.handle(&mut self.spec, event);
        self.finish(response)
    }

    /// Records that the canvas container is now `available_width` wide. The
    /// resize is applied by [`tick`](Self::tick) once the burst settles.
    pub fn notify_resize(&mut self, available_width: u32, now: Instant) {
        self.pending_width = Some(available_width);
        self.resize.notify(now);
    }

    /// Applies a settled resize. Call from the shell's idle loop.
    pub fn tick(&mut self, now: Instant) -> Response {
        if !self.resize.poll(now) {
            return Response::none();
        }
        let Some(available) = self.pending_width.take() else {
            return Response::none();
        };

        let mut canvas = self.controller.canvas();
        let bounds = self.config.canvas_bounds;
        let next = bounds.fit(available);
        if !bounds.is_significant((canvas.width, canvas.height), next) {
            return Response::none();
        }
        (canvas.width, canvas.height) = next;
        self.controller.set_canvas(canvas);
        log::debug!("canvas resized to {}x{}", next.0, next.1);
        Response::redraw()
    }

    // ── generation ────────────────────────────────────────────────────────

    /// Replaces the stops with fresh colors in the current style and count.
    pub fn regenerate(&mut self) -> Response {
        self.controller.cancel_drag();
        let result = self.generator.regenerate(&mut self.spec, self.style, self.color_count);
        let response = match result {
            Ok(()) => Response::changed(),
            Err(e) => Response::status(StatusMessage::from_error(&e)),
        };
        self.finish(response)
    }

    pub fn set_style(&mut self, style: Style) -> Response {
        self.style = style;
        self.regenerate()
    }

    pub fn set_color_count(&mut self, count: usize) -> Response {
        if !(MIN_STOPS..=MAX_STOPS).contains(&count) {
            let e = GradientError::InvalidStopCount { count, max: MAX_STOPS };
            return self.finish(Response::status(StatusMessage::from_error(&e)));
        }
        self.color_count = count;
        self.regenerate()
    }

    pub fn load_preset(&mut self, name: &str) -> Response {
        let result = find_preset(name).and_then(|preset| {
            self.spec.load_preset(preset.colors)?;
            Ok(preset.colors.len())
        });
        let response = match result {
            Ok(n) => {
                self.controller.cancel_drag();
                Response::changed()
                    .with_status(StatusMessage::success(format!("Loaded preset gradient with {n} colors!")))
            }
            Err(e) => Response::status(StatusMessage::from_error(&e)),
        };
        self.finish(response)
    }

    // ── geometry ──────────────────────────────────────────────────────────

    pub fn set_kind(&mut self, kind: GradientKind) -> Response {
        if self.spec.kind() == kind {
            return Response::none();
        }
        self.spec.set_kind(kind);
        Response::redraw()
    }

    /// Applies live-typed angle text. Anything that is not an integer is
    /// ignored until it becomes one.
    pub fn set_angle_text(&mut self, text: &str) -> Response {
        match text.trim().parse::<i32>() {
            Ok(degrees) => {
                self.spec.set_angle(degrees);
                Response::redraw()
            }
            Err(_) => Response::none(),
        }
    }

    // ── stop colors ───────────────────────────────────────────────────────

    /// Recolors a stop from hex text typed into its label.
    pub fn set_stop_hex(&mut self, index: usize, text: &str) -> Response {
        let response = match self.spec.recolor_stop(index, text) {
            Ok(_) => Self::recolored(index),
            Err(e) => Response::status(StatusMessage::from_error(&e)),
        };
        self.finish(response)
    }

    /// Hue of stop `index` in degrees, where the color picker starts.
    pub fn stop_hue(&self, index: usize) -> Option<f64> {
        self.spec.stops().get(index).map(|s| Hsv::from_rgb(s.color).h * 360.0)
    }

    /// Saturation/value square the color picker shows for `hue_degrees`.
    pub fn picker_square(&self, hue_degrees: f64) -> Field {
        sv_square(hue_degrees, self.config.picker_size)
    }

    /// Recolors stop `index` with the picker color under `(x, y)`.
    pub fn pick_stop_color(&mut self, index: usize, hue_degrees: f64, x: i32, y: i32) -> Response {
        let Some(color) = sv_pick(hue_degrees, self.config.picker_size, x, y) else {
            return Response::none();
        };
        let response = match self.spec.set_stop_color(index, color) {
            Ok(_) => Self::recolored(index),
            Err(e) => Response::status(StatusMessage::from_error(&e)),
        };
        self.finish(response)
    }

    fn recolored(index: usize) -> Response {
        Response::changed().with_status(StatusMessage::success(format!("Color {} updated!", index + 1)))
    }

    // ── palettes ──────────────────────────────────────────────────────────

    /// The four harmony families around `base_hex`.
    pub fn base_palettes(&mut self, base_hex: &str) -> Option<BasePalettes> {
        match Rgb::from_hex(base_hex.trim()) {
            Ok(base) => Some(base_palettes(base, &mut rand::rng())),
            Err(e) => {
                self.finish(Response::status(StatusMessage::from_error(&e)));
                None
            }
        }
    }

    /// Loads the typeface used to print hex codes on exported swatch strips.
    /// Until one loads, the label band is left blank.
    pub fn load_swatch_font(&mut self, bytes: &[u8]) -> Response {
        let response = match SwatchFont::from_bytes(bytes, self.config.swatch_font_px) {
            Ok(font) => {
                self.swatch_font = Some(font);
                Response::status(StatusMessage::info("Palette exports will include HEX labels."))
            }
            Err(e) => Response::status(StatusMessage::warning(format!("Failed to load font: {e}"))),
        };
        self.finish(response)
    }

    #[inline]
    pub fn has_swatch_font(&self) -> bool {
        self.swatch_font.is_some()
    }

    /// Writes a swatch strip of `colors` into `dir` under the next free
    /// `"<name>_palette N.jpeg"` name.
    pub fn export_palette(&mut self, name: &str, colors: &[Rgb], dir: &Path) -> Response {
        let existing: Vec<String> = std::fs::read_dir(dir)
            .map(|entries| {
                entries
                    .filter_map(|e| e.ok())
                    .map(|e| e.file_name().to_string_lossy().into_owned())
                    .collect()
            })
            .unwrap_or_default();
        let file = dir.join(export::next_swatch_name(existing.iter().map(String::as_str), name));

        let result = export::encode_swatches(colors, SwatchLayout::default(), self.swatch_font.as_ref())
            .and_then(|bytes| export::write_atomic(&file, &bytes));
        let response = match result {
            Ok(()) => {
                log::info!("palette {name} written to {}", file.display());
                Response::status(StatusMessage::success(format!("Palette '{name}' exported successfully!")))
            }
            Err(e @ GradientError::MissingImageDependency { .. }) => {
                Response::status(StatusMessage::from_error(&e))
            }
            Err(e) => Response::status(StatusMessage::warning(format!("Failed to export palette: {e}"))),
        };
        self.finish(response)
    }

    // ── clipboard ─────────────────────────────────────────────────────────

    /// Copies every stop color, space separated.
    pub fn copy_all_hex(&mut self) -> Response {
        let text = self.spec.hex_list();
        self.copy(&text, "All HEX codes copied!")
    }

    /// Copies the color of stop `index`.
    pub fn copy_stop_hex(&mut self, index: usize) -> Response {
        match self.spec.stops().get(index) {
            Some(stop) => {
                let hex = stop.color.to_hex();
                self.copy(&hex, &format!("{hex} copied!"))
            }
            None => {
                let e = GradientError::StopIndexOutOfRange { index, len: self.spec.len() };
                self.finish(Response::status(StatusMessage::from_error(&e)))
            }
        }
    }

    pub fn copy_css(&mut self) -> Response {
        let text = self.css();
        self.copy(&text, "CSS code copied!")
    }

    fn copy(&mut self, text: &str, success: &str) -> Response {
        let response = match self.clipboard.set_text(text) {
            Ok(()) => Response::status(StatusMessage::success(success)),
            Err(e) => Response::status(StatusMessage::warning(format!("Clipboard unavailable: {e}"))),
        };
        self.finish(response)
    }

    // ── export ────────────────────────────────────────────────────────────

    /// Width and height text the export fields start with.
    pub fn export_fields(&self) -> (String, String) {
        let size = self.config.export_size;
        (size.width.to_string(), size.height.to_string())
    }

    /// Exports the gradient to `path`, validating the size fields first.
    pub fn export(&mut self, format: ExportFormat, width: &str, height: &str, path: &Path) -> Response {
        let response = match ExportSize::parse(width, height) {
            Err(e) => Response::status(StatusMessage::from_error(&e)),
            Ok(size) => match export::export_to(&self.spec, format, size, path) {
                Ok(()) => Response::status(StatusMessage::success(format!(
                    "{format} gradient exported successfully!"
                ))),
                Err(e @ GradientError::MissingImageDependency { .. }) => {
                    Response::status(StatusMessage::from_error(&e))
                }
                Err(e) => {
                    Response::status(StatusMessage::warning(format!("Failed to export {format}: {e}")))
                }
            },
        };
        self.finish(response)
    }

    fn finish(&mut self, response: Response) -> Response {
        if let Some(status) = &response.status {
            log::debug!("status: {status}");
            self.status = Some(status.clone());
        }
        response
    }
}
