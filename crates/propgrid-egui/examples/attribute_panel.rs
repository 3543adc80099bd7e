//! Material-editor style demo panel.
//!
//! Run with: `cargo run -p propgrid-egui --example attribute_panel`

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;

use propgrid_egui::{build_attribute_panel, ActionMap, AttributeGrid, DiskImageLoader};

#[derive(Debug, Clone)]
struct Material {
    roughness: f64,
    intensity: f64,
    albedo: [f32; 3],
    texture_loaded: bool,
}

struct DemoApp {
    grid: AttributeGrid,
    material: Rc<RefCell<Material>>,
}

impl DemoApp {
    fn new() -> Self {
        let material = Rc::new(RefCell::new(Material {
            roughness: 0.5,
            intensity: 1.0,
            albedo: [0.8, 0.2, 0.2],
            texture_loaded: false,
        }));

        let mut grid = AttributeGrid::new("material_grid");
        grid.add_text("Sphere material");
        grid.add_text_pair("Shader", "PBR metallic-roughness");

        let state = Rc::clone(&material);
        grid.add_edit_val_range("Roughness", 0.5, 0.0, 1.0, 100, move |v| {
            state.borrow_mut().roughness = v;
            log::info!("roughness = {v:.2}");
        })
        .expect("valid roughness range");

        let state = Rc::clone(&material);
        grid.add_edit_val("Intensity", 1.0, 0.1, move |v| {
            state.borrow_mut().intensity = v;
        });

        let state = Rc::clone(&material);
        grid.add_edit_color("Albedo", [0.8, 0.2, 0.2], move |rgb| {
            state.borrow_mut().albedo = rgb;
        });

        let mut modes = ActionMap::new();
        modes.insert("Lambertian", || log::info!("switched to Lambertian"));
        modes.insert("Microfacet", || log::info!("switched to Microfacet"));
        modes.insert("Mirror", || log::info!("switched to Mirror"));
        grid.add_combo_box("BRDF", "Microfacet", modes)
            .expect("current mode is registered");

        let state = Rc::clone(&material);
        grid.add_edit_image("Albedo map", None, Arc::new(DiskImageLoader), move |img| {
            state.borrow_mut().texture_loaded = img.is_some();
        });

        Self { grid, material }
    }
}

impl eframe::App for DemoApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        build_attribute_panel(ctx, "Attributes", &mut self.grid);

        egui::CentralPanel::default().show(ctx, |ui| {
            let material = self.material.borrow();
            ui.monospace(format!("{material:#?}"));
        });
    }
}

fn main() -> eframe::Result {
    env_logger::init();

    eframe::run_native(
        "propgrid demo",
        eframe::NativeOptions::default(),
        Box::new(|_cc| Ok(Box::new(DemoApp::new()))),
    )
}
