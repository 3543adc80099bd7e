//! Side-panel helper for hosting an attribute grid.

use egui::{Context, ScrollArea, SidePanel};

use crate::grid::AttributeGrid;

/// Shows `grid` inside a resizable right side panel with a heading.
pub fn build_attribute_panel(ctx: &Context, title: &str, grid: &mut AttributeGrid) {
    SidePanel::right("propgrid_attribute_panel")
        .default_width(305.0)
        .resizable(true)
        .show(ctx, |ui| {
            ui.heading(title);
            ui.separator();
            ScrollArea::vertical().show(ui, |ui| {
                grid.show(ui);
            });
        });
}
