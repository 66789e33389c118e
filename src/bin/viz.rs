use eframe::egui;
use egui_plot::{Line, Plot, PlotPoints};

use rocket_ascent::sim;
use rocket_ascent::types::{presets, SimConfig, StepRecord};

fn main() -> eframe::Result {
    pretty_env_logger::init();

    let config = SimConfig::default();
    let records = match sim::simulate(&presets::reference_rocket(), &config) {
        Ok(records) => records,
        Err(e) => {
            log::error!("Simulation failed: {}", e);
            Vec::new()
        }
    };

    let app = AscentViz { records, config };
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([1200.0, 800.0]),
        ..Default::default()
    };
    eframe::run_native("Rocket Ascent", options, Box::new(|_| Ok(Box::new(app))))
}

struct AscentViz {
    records: Vec<StepRecord>,
    config: SimConfig,
}

impl AscentViz {
    fn plot(
        &self,
        ui: &mut egui::Ui,
        id: &str,
        label: &str,
        size: (f32, f32),
        value: impl Fn(&StepRecord) -> f64,
    ) {
        let step = (self.records.len() / 2000).max(1);
        ui.vertical(|ui| {
            ui.label(label);
            let points: PlotPoints = self
                .records
                .iter()
                .step_by(step)
                .map(|r| [r.time, value(r)])
                .collect();
            Plot::new(id)
                .width(size.0)
                .height(size.1)
                .x_axis_label("Time (s)")
                .show(ui, |plot_ui| {
                    plot_ui.line(Line::new(label, points));
                });
        });
    }
}

impl eframe::App for AscentViz {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            ui.heading("Vertical ascent");
            let last = self.records.last();
            ui.label(format!(
                "dt: {} s  |  Altitude: {:.2} m  |  Velocity: {:.2} m/s  |  Mass: {:.2} kg  |  Steps: {}",
                self.config.dt,
                last.map_or(0.0, |r| r.altitude),
                last.map_or(0.0, |r| r.velocity),
                last.map_or(0.0, |r| r.mass),
                self.records.len(),
            ));
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            let available = ui.available_size();
            let size = (available.x / 2.0 - 8.0, available.y / 2.0 - 8.0);

            ui.horizontal(|ui| {
                self.plot(ui, "altitude", "Altitude (m)", size, |r| r.altitude);
                self.plot(ui, "velocity", "Velocity (m/s)", size, |r| r.velocity);
            });
            ui.horizontal(|ui| {
                self.plot(ui, "mass", "Mass (kg)", size, |r| r.mass);
                self.plot(ui, "mach", "Mach", size, |r| r.mach);
            });
        });
    }
}
