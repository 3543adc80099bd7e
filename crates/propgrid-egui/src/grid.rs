//! The two-column attribute grid.

use std::sync::Arc;

use egui::Ui;
use propgrid_core::actions::ActionMap;
use propgrid_core::error::{PropGridError, Result};
use propgrid_core::loader::ImageLoader;
use propgrid_core::range::LinearRange;
use propgrid_core::raw_image::RawImage;
use propgrid_core::thumbnail::{render_thumbnail, THUMBNAIL_SIZE};

use crate::style::GridStyle;
use crate::texture::thumbnail_texture;

/// Callback invoked when a numeric row changes.
pub type ValueCallback = Box<dyn FnMut(f64)>;

/// Callback invoked when a color row changes.
pub type ColorCallback = Box<dyn FnMut([f32; 3])>;

/// Callback invoked when an image row loads or clears its image.
pub type ImageCallback = Box<dyn FnMut(Option<Arc<RawImage>>)>;

/// One cell of a plain row: a text label or a custom widget.
pub enum Cell {
    /// A text label.
    Label(String),
    /// An arbitrary widget drawn by the closure.
    Widget(Box<dyn FnMut(&mut Ui)>),
}

impl Cell {
    /// Shorthand for a label cell.
    pub fn label(text: impl Into<String>) -> Self {
        Self::Label(text.into())
    }

    /// Shorthand for a custom widget cell.
    pub fn widget(draw: impl FnMut(&mut Ui) + 'static) -> Self {
        Self::Widget(Box::new(draw))
    }

    fn draw(&mut self, ui: &mut Ui) {
        match self {
            Self::Label(text) => {
                ui.label(text.as_str());
            }
            Self::Widget(draw) => draw(ui),
        }
    }
}

enum Row {
    /// Up to two arbitrary cells.
    Line {
        left: Option<Cell>,
        right: Option<Cell>,
    },
    /// Label and unbounded numeric field.
    EditVal {
        label: String,
        value: f64,
        step: f64,
        on_change: ValueCallback,
    },
    /// Numeric field and slider synchronized over a bounded range.
    EditRange {
        range: LinearRange,
        value: f64,
        on_change: ValueCallback,
    },
    /// Label and color swatch opening the picker.
    EditColor {
        label: String,
        color: [f32; 3],
        on_change: ColorCallback,
    },
    /// Label and combo box dispatching to an action map.
    Combo {
        label: String,
        current: String,
        actions: ActionMap,
    },
    /// Thumbnail with load and clear buttons; occupies two grid rows.
    EditImage {
        label: String,
        image: Option<Arc<RawImage>>,
        loader: Arc<dyn ImageLoader>,
        texture: Option<egui::TextureHandle>,
        on_change: ImageCallback,
    },
}

impl Row {
    /// Number of grid rows this entry occupies when drawn.
    fn visual_rows(&self) -> usize {
        match self {
            Self::EditImage { .. } => 2,
            _ => 1,
        }
    }
}

/// A two-column property grid for editor panels.
///
/// Rows are appended through the `add_*` builders and replayed into an
/// [`egui::Grid`] every frame, in insertion order. Each row owns its current
/// value and notifies the caller through its callback, so the caller never
/// hands out a long-lived mutable borrow.
pub struct AttributeGrid {
    id: egui::Id,
    style: GridStyle,
    rows: Vec<Row>,
}

impl AttributeGrid {
    /// Creates an empty grid. `id_salt` must be unique within the hosting
    /// panel.
    #[must_use]
    pub fn new(id_salt: impl std::hash::Hash) -> Self {
        Self {
            id: egui::Id::new(id_salt),
            style: GridStyle::default(),
            rows: Vec::new(),
        }
    }

    /// Replaces the grid's appearance options.
    #[must_use]
    pub fn with_style(mut self, style: GridStyle) -> Self {
        self.style = style;
        self
    }

    /// Appends one row with optional left and right cells; either may be
    /// absent, producing a single-column row.
    pub fn add_line(&mut self, left: Option<Cell>, right: Option<Cell>) -> &mut Self {
        self.rows.push(Row::Line { left, right });
        self
    }

    /// Appends a single label row.
    pub fn add_text(&mut self, title: impl Into<String>) -> &mut Self {
        self.add_line(Some(Cell::label(title)), None)
    }

    /// Appends a two-label row.
    pub fn add_text_pair(
        &mut self,
        left: impl Into<String>,
        right: impl Into<String>,
    ) -> &mut Self {
        self.add_line(Some(Cell::label(left)), Some(Cell::label(right)))
    }

    /// Appends a label plus an unbounded numeric field dragging in
    /// `single_step` increments. `on_change` receives every edited value.
    pub fn add_edit_val(
        &mut self,
        label: impl Into<String>,
        value: f64,
        single_step: f64,
        on_change: impl FnMut(f64) + 'static,
    ) -> &mut Self {
        self.rows.push(Row::EditVal {
            label: label.into(),
            value,
            step: single_step,
            on_change: Box::new(on_change),
        });
        self
    }

    /// Appends a title row followed by a numeric field and a slider kept
    /// consistent through a [`LinearRange`] over `[min, max]` with `steps`
    /// positions.
    ///
    /// Fails without adding anything when the range itself is unusable
    /// (`steps == 0` or bad bounds).
    pub fn add_edit_val_range(
        &mut self,
        label: impl Into<String>,
        value: f64,
        min: f64,
        max: f64,
        steps: u32,
        on_change: impl FnMut(f64) + 'static,
    ) -> Result<&mut Self> {
        let range = LinearRange::new(min, max, steps)?;
        self.add_text(label);
        self.rows.push(Row::EditRange {
            range,
            value: range.clamp(value),
            on_change: Box::new(on_change),
        });
        Ok(self)
    }

    /// Appends a label plus a color swatch that opens the picker. The row
    /// owns the color; confirming a new color invokes `on_change`, while
    /// closing the picker unchanged performs no mutation.
    pub fn add_edit_color(
        &mut self,
        label: impl Into<String>,
        color: [f32; 3],
        on_change: impl FnMut([f32; 3]) + 'static,
    ) -> &mut Self {
        self.rows.push(Row::EditColor {
            label: label.into(),
            color,
            on_change: Box::new(on_change),
        });
        self
    }

    /// Appends a label plus a combo box listing every label of `actions`
    /// with `current` preselected. A user selection dispatches to the
    /// matching action.
    ///
    /// Fails without adding anything when `current` is not a key of the map.
    pub fn add_combo_box(
        &mut self,
        label: impl Into<String>,
        current: impl Into<String>,
        actions: ActionMap,
    ) -> Result<&mut Self> {
        let label = label.into();
        let current = current.into();
        if !actions.contains(&current) {
            log::error!("combo box '{label}': selection '{current}' is not in the action map");
            return Err(PropGridError::UnknownSelection(current));
        }

        self.rows.push(Row::Combo {
            label,
            current,
            actions,
        });
        Ok(self)
    }

    /// Appends an image editor: a (label | "Load") row and a
    /// (thumbnail | "Clear") row.
    ///
    /// Load opens a file dialog, hands the chosen path to `loader`, and
    /// invokes `on_change` with the new image once its thumbnail rendered.
    /// Clear resets to the placeholder and invokes `on_change` with `None`.
    pub fn add_edit_image(
        &mut self,
        label: impl Into<String>,
        image: Option<Arc<RawImage>>,
        loader: Arc<dyn ImageLoader>,
        on_change: impl FnMut(Option<Arc<RawImage>>) + 'static,
    ) -> &mut Self {
        self.rows.push(Row::EditImage {
            label: label.into(),
            image,
            loader,
            texture: None,
            on_change: Box::new(on_change),
        });
        self
    }

    /// Number of grid rows currently retained, as displayed.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.iter().map(Row::visual_rows).sum()
    }

    /// Whether the grid has no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Drops every retained row, in insertion order, releasing their texture
    /// handles. A no-op on an empty grid.
    pub fn clear(&mut self) {
        self.rows.clear();
    }

    /// Replays the rows into a two-column grid.
    pub fn show(&mut self, ui: &mut Ui) {
        let id = self.id;
        egui::Grid::new(id)
            .num_columns(2)
            .striped(self.style.striped)
            .min_col_width(self.style.min_col_width)
            .spacing(self.style.spacing)
            .show(ui, |ui| {
                for (row_idx, row) in self.rows.iter_mut().enumerate() {
                    draw_row(ui, id, row_idx, row);
                }
            });
    }
}

impl std::fmt::Debug for AttributeGrid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AttributeGrid")
            .field("id", &self.id)
            .field("rows", &self.rows.len())
            .finish()
    }
}

fn draw_row(ui: &mut Ui, grid_id: egui::Id, row_idx: usize, row: &mut Row) {
    match row {
        Row::Line { left, right } => {
            match left {
                Some(cell) => cell.draw(ui),
                None => {
                    ui.label("");
                }
            }
            if let Some(cell) = right {
                cell.draw(ui);
            }
            ui.end_row();
        }

        Row::EditVal {
            label,
            value,
            step,
            on_change,
        } => {
            ui.label(label.as_str());
            if ui.add(egui::DragValue::new(value).speed(*step)).changed() {
                on_change(*value);
            }
            ui.end_row();
        }

        Row::EditRange {
            range,
            value,
            on_change,
        } => {
            // The value is the single source of truth; the slider position is
            // derived from it each frame, so an edit on one control can never
            // re-trigger the other's change handler.
            let field = egui::DragValue::new(value)
                .speed(range.step_size())
                .range(range.min()..=range.max());
            if ui.add(field).changed() {
                on_change(*value);
            }

            let mut index = range.index_of(*value);
            let slider = egui::Slider::new(&mut index, 0..=range.steps()).show_value(false);
            if ui.add(slider).changed() {
                *value = range.value_at(index);
                on_change(*value);
            }
            ui.end_row();
        }

        Row::EditColor {
            label,
            color,
            on_change,
        } => {
            ui.label(label.as_str());
            if ui.color_edit_button_rgb(color).changed() {
                log::debug!(
                    "{label}: ({:.3}, {:.3}, {:.3})",
                    color[0],
                    color[1],
                    color[2]
                );
                on_change(*color);
            }
            ui.end_row();
        }

        Row::Combo {
            label,
            current,
            actions,
        } => {
            ui.label(label.as_str());
            egui::ComboBox::from_id_salt(grid_id.with(row_idx))
                .selected_text(current.as_str())
                .show_ui(ui, |ui| {
                    let labels: Vec<String> = actions.labels().map(str::to_owned).collect();
                    for item in labels {
                        if ui.selectable_label(*current == item, &item).clicked() {
                            current.clone_from(&item);
                            actions.invoke(&item);
                        }
                    }
                });
            ui.end_row();
        }

        Row::EditImage {
            label,
            image,
            loader,
            texture,
            on_change,
        } => {
            ui.label(label.as_str());
            let load_clicked = ui.button("Load").clicked();
            ui.end_row();

            if texture.is_none() {
                let thumb = render_thumbnail(image.as_deref());
                *texture = Some(thumbnail_texture(ui.ctx(), label, &thumb));
            }
            if let Some(tex) = texture.as_ref() {
                ui.add(
                    egui::Image::new(tex)
                        .fit_to_exact_size(egui::Vec2::splat(THUMBNAIL_SIZE as f32)),
                );
            }
            let clear_clicked = ui.button("Clear").clicked();
            ui.end_row();

            if load_clicked {
                if let Some(path) = rfd::FileDialog::new()
                    .add_filter("Image Files", &["png"])
                    .pick_file()
                {
                    match loader.load(&path) {
                        Ok(loaded) => {
                            let candidate = Arc::new(loaded);
                            let thumb = render_thumbnail(Some(&*candidate));
                            *texture = Some(thumbnail_texture(ui.ctx(), label, &thumb));
                            if thumb.loaded {
                                *image = Some(Arc::clone(&candidate));
                                on_change(Some(candidate));
                            } else {
                                log::warn!(
                                    "image '{}' is not displayable, showing placeholder",
                                    path.display()
                                );
                            }
                        }
                        Err(err) => log::error!("{err}"),
                    }
                }
            }

            if clear_clicked {
                *image = None;
                *texture = None;
                on_change(None);
            }
        }
    }
}
