use crate::effect::Effect;

/// Values shown in the overlay and the controls it edits
#[derive(Debug, Clone)]
pub struct HudState {
    pub fps: f32,
    pub time: f32,
    pub effect: Effect,
    pub triangles: usize,
    pub seed: u64,
    pub paused: bool,
    pub time_scale: f32,
    pub wireframe: bool,
    pub wireframe_supported: bool,
    pub restart_requested: bool,
}

impl HudState {
    pub fn new(effect: Effect, triangles: usize, seed: u64) -> Self {
        Self {
            fps: 0.0,
            time: 0.0,
            effect,
            triangles,
            seed,
            paused: false,
            time_scale: 1.0,
            wireframe: false,
            wireframe_supported: true,
            restart_requested: false,
        }
    }

    /// Clear one-shot requests after the app has handled them
    pub fn take_restart(&mut self) -> bool {
        std::mem::take(&mut self.restart_requested)
    }
}

pub fn draw(ctx: &egui::Context, hud: &mut HudState) {
    egui::Window::new("Disintegration")
        .title_bar(true)
        .resizable(false)
        .fixed_pos(egui::pos2(10.0, 10.0))
        .default_width(220.0)
        .show(ctx, |ui| {
            ui.heading(
                egui::RichText::new(format!("{:.0} FPS", hud.fps))
                    .size(28.0)
                    .color(egui::Color32::from_rgb(74, 158, 255)),
            );
            let frame_time_ms = if hud.fps > 0.0 { 1000.0 / hud.fps } else { 0.0 };
            ui.label(
                egui::RichText::new(format!("{:.2} ms", frame_time_ms))
                    .size(14.0)
                    .color(egui::Color32::GRAY),
            );

            ui.add_space(8.0);
            ui.separator();

            ui.monospace(format!("Effect: {}", hud.effect));
            ui.monospace(format!("Triangles: {}", hud.triangles));
            ui.monospace(format!("Seed: {}", hud.seed));
            ui.monospace(format!("Time: {:.2}s", hud.time));

            ui.add_space(8.0);
            ui.separator();

            ui.checkbox(&mut hud.paused, "Paused");
            ui.add(egui::Slider::new(&mut hud.time_scale, 0.0..=4.0).text("Time scale"));
            ui.add_enabled_ui(hud.wireframe_supported, |ui| {
                ui.checkbox(&mut hud.wireframe, "Wireframe");
            });
            if ui.button("Restart").clicked() {
                hud.restart_requested = true;
            }
        });
}
