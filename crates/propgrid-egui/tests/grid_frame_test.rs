//! Headless frame tests for the attribute grid.
//!
//! egui runs a full frame without any windowing backend, which is enough to
//! exercise every row drawing path, including thumbnail texture upload.

use std::sync::Arc;

use propgrid_egui::{
    build_attribute_panel, ActionMap, AttributeGrid, Cell, DiskImageLoader, GridStyle, RawImage,
};

fn demo_grid() -> AttributeGrid {
    let mut grid = AttributeGrid::new("frame_test").with_style(GridStyle::default());

    grid.add_text("Material");
    grid.add_text_pair("Shader", "PBR");
    grid.add_line(
        Some(Cell::label("Actions")),
        Some(Cell::widget(|ui| {
            let _ = ui.button("Reset");
        })),
    );
    grid.add_edit_val("Intensity", 1.0, 0.1, |_| {});
    grid.add_edit_val_range("Roughness", 0.5, 0.0, 1.0, 100, |_| {})
        .expect("valid range");
    grid.add_edit_color("Albedo", [0.8, 0.2, 0.2], |_| {});

    let mut modes = ActionMap::new();
    modes.insert("Lambertian", || {}).insert("Mirror", || {});
    grid.add_combo_box("BRDF", "Mirror", modes)
        .expect("registered selection");

    let checker = RawImage::new(2, 2, 3, vec![0, 0, 0, 255, 255, 255, 255, 255, 255, 0, 0, 0]);
    grid.add_edit_image(
        "Albedo map",
        Some(Arc::new(checker)),
        Arc::new(DiskImageLoader),
        |_| {},
    );
    grid.add_edit_image("Normal map", None, Arc::new(DiskImageLoader), |_| {});

    grid
}

#[test]
fn test_grid_renders_headlessly() {
    let mut grid = demo_grid();
    let row_count = grid.len();

    let ctx = egui::Context::default();
    let output = ctx.run(egui::RawInput::default(), |ctx| {
        egui::CentralPanel::default().show(ctx, |ui| {
            grid.show(ui);
        });
    });

    // Something was painted, and the thumbnail textures were uploaded.
    assert!(!output.shapes.is_empty());
    assert!(!output.textures_delta.set.is_empty());

    // Drawing must not add or drop rows.
    assert_eq!(grid.len(), row_count);
}

#[test]
fn test_panel_helper_renders_headlessly() {
    let mut grid = demo_grid();

    let ctx = egui::Context::default();
    let output = ctx.run(egui::RawInput::default(), |ctx| {
        build_attribute_panel(ctx, "Attributes", &mut grid);
    });

    assert!(!output.shapes.is_empty());
}

#[test]
fn test_cleared_grid_renders_empty() {
    let mut grid = demo_grid();
    grid.clear();
    assert!(grid.is_empty());

    let ctx = egui::Context::default();
    ctx.run(egui::RawInput::default(), |ctx| {
        egui::CentralPanel::default().show(ctx, |ui| {
            grid.show(ui);
        });
    });

    // Clearing again after a frame stays a no-op.
    grid.clear();
    assert!(grid.is_empty());
}
