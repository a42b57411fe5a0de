use std::ops::RangeInclusive;

use eframe::egui::{self, Color32, CornerRadius, Sense, Stroke};
use uuid::Uuid;

use crate::modulation;
use crate::pattern::{self, ShapeOutline};
use crate::store::PatternStore;
use crate::types::{
    color_to_hex, ModTarget, OscillatorPatch, OscillatorSpec, ParameterUpdate, ShapeKind,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum PanelTab {
    Parameters,
    Oscillators,
}

pub struct StudioApp {
    store: PatternStore,
    tab: PanelTab,
    time: f32,
    paused: bool,
    rings_drawn: u32,
    shapes_drawn: usize,
}

impl StudioApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, initial_color: Option<Color32>) -> Self {
        let mut store = PatternStore::new();
        if let Some(color) = initial_color {
            store.set_parameter(ParameterUpdate::Color(color));
        }

        Self {
            store,
            tab: PanelTab::Parameters,
            time: 0.0,
            paused: false,
            rings_drawn: 0,
            shapes_drawn: 0,
        }
    }

    fn draw_controls(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.heading("Controls");
            if ui.button("Reset").clicked() {
                self.store.reset_parameters();
            }
            if ui
                .button(if self.paused {
                    "Resume animation"
                } else {
                    "Pause animation"
                })
                .clicked()
            {
                self.paused = !self.paused;
            }
        });

        ui.horizontal(|ui| {
            ui.selectable_value(&mut self.tab, PanelTab::Parameters, "Parameters");
            ui.selectable_value(&mut self.tab, PanelTab::Oscillators, "Oscillators");
        });
        ui.separator();

        match self.tab {
            PanelTab::Parameters => self.draw_parameters(ui),
            PanelTab::Oscillators => self.draw_oscillators(ui),
        }
    }

    fn draw_parameters(&mut self, ui: &mut egui::Ui) {
        let params = *self.store.params();

        let mut shape = params.shape;
        egui::ComboBox::from_label("shape")
            .selected_text(shape.label())
            .show_ui(ui, |ui| {
                for kind in ShapeKind::ALL {
                    ui.selectable_value(&mut shape, kind, kind.label());
                }
            });
        if shape != params.shape {
            self.store.set_parameter(ParameterUpdate::Shape(shape));
        }

        let store = &mut self.store;
        param_slider_f32(
            ui,
            store,
            params.size,
            10.0..=200.0,
            0.0,
            "size",
            ParameterUpdate::Size,
        );
        param_slider_f32(
            ui,
            store,
            params.rotation,
            0.0..=std::f32::consts::TAU,
            0.1,
            "rotation",
            ParameterUpdate::Rotation,
        );
        param_slider_f32(
            ui,
            store,
            params.scale,
            0.1..=2.0,
            0.1,
            "scale",
            ParameterUpdate::Scale,
        );
        param_slider_f32(
            ui,
            store,
            params.position,
            0.0..=std::f32::consts::TAU,
            0.1,
            "position",
            ParameterUpdate::Position,
        );
        param_slider_f32(
            ui,
            store,
            params.opacity,
            0.0..=1.0,
            0.1,
            "opacity",
            ParameterUpdate::Opacity,
        );

        ui.horizontal(|ui| {
            let mut rgb = [params.color.r(), params.color.g(), params.color.b()];
            if ui.color_edit_button_srgb(&mut rgb).changed() {
                store.set_parameter(ParameterUpdate::Color(Color32::from_rgb(
                    rgb[0], rgb[1], rgb[2],
                )));
            }
            ui.label(format!("color {}", color_to_hex(params.color)));
        });

        param_slider_u32(
            ui,
            store,
            params.density,
            1..=20,
            "density",
            ParameterUpdate::Density,
        );
        param_slider_f32(
            ui,
            store,
            params.spacing,
            5.0..=100.0,
            0.0,
            "spacing",
            ParameterUpdate::Spacing,
        );
        param_slider_u32(
            ui,
            store,
            params.symmetry,
            1..=12,
            "symmetry",
            ParameterUpdate::Symmetry,
        );
        param_slider_f32(
            ui,
            store,
            params.noise,
            0.0..=1.0,
            0.1,
            "noise",
            ParameterUpdate::Noise,
        );
        param_slider_u32(
            ui,
            store,
            params.complexity,
            1..=10,
            "complexity",
            ParameterUpdate::Complexity,
        );
        param_slider_u32(
            ui,
            store,
            params.num_shapes,
            1..=60,
            "shapes per ring",
            ParameterUpdate::NumShapes,
        );
    }

    fn draw_oscillators(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.heading("Oscillators");
            if ui.button("Add oscillator").clicked() {
                let name = format!("Oscillator {}", self.store.oscillators().len() + 1);
                self.store.add_oscillator(OscillatorSpec {
                    name,
                    target: ModTarget::Rotation,
                    frequency: 1.0,
                    amplitude: 0.5,
                    enabled: true,
                });
            }
        });

        let mut edits: Vec<(Uuid, OscillatorPatch)> = Vec::new();
        let mut removed: Option<Uuid> = None;

        for oscillator in self.store.oscillators() {
            ui.separator();
            ui.horizontal(|ui| {
                let mut enabled = oscillator.enabled;
                if ui.checkbox(&mut enabled, "").changed() {
                    edits.push((
                        oscillator.id,
                        OscillatorPatch {
                            enabled: Some(enabled),
                            ..OscillatorPatch::default()
                        },
                    ));
                }

                ui.add_enabled_ui(oscillator.enabled, |ui| {
                    let mut name = oscillator.name.clone();
                    if ui.text_edit_singleline(&mut name).changed() {
                        edits.push((
                            oscillator.id,
                            OscillatorPatch {
                                name: Some(name),
                                ..OscillatorPatch::default()
                            },
                        ));
                    }
                });

                if ui.button("remove").clicked() {
                    removed = Some(oscillator.id);
                }
            });

            ui.add_enabled_ui(oscillator.enabled, |ui| {
                let mut target = oscillator.target;
                egui::ComboBox::from_id_salt(oscillator.id)
                    .selected_text(target.label())
                    .show_ui(ui, |ui| {
                        for candidate in ModTarget::ALL {
                            ui.selectable_value(&mut target, candidate, candidate.label());
                        }
                    });
                if target != oscillator.target {
                    edits.push((
                        oscillator.id,
                        OscillatorPatch {
                            target: Some(target),
                            ..OscillatorPatch::default()
                        },
                    ));
                }

                let mut frequency = oscillator.frequency;
                if ui
                    .add(
                        egui::Slider::new(&mut frequency, 0.1..=10.0)
                            .step_by(0.1)
                            .text("freq (Hz)"),
                    )
                    .changed()
                {
                    edits.push((
                        oscillator.id,
                        OscillatorPatch {
                            frequency: Some(frequency),
                            ..OscillatorPatch::default()
                        },
                    ));
                }

                let mut amplitude = oscillator.amplitude;
                if ui
                    .add(
                        egui::Slider::new(&mut amplitude, 0.0..=1.0)
                            .step_by(0.1)
                            .text("amp"),
                    )
                    .changed()
                {
                    edits.push((
                        oscillator.id,
                        OscillatorPatch {
                            amplitude: Some(amplitude),
                            ..OscillatorPatch::default()
                        },
                    ));
                }
            });
        }

        if self.store.oscillators().is_empty() {
            ui.label("No oscillators added yet");
        }

        for (id, patch) in edits {
            self.store.update_oscillator(id, patch);
        }
        if let Some(id) = removed {
            self.store.remove_oscillator(id);
        }
    }

    fn draw_canvas(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.label(format!("t: {:.1}s", self.time));
            ui.separator();
            ui.label(format!("rings: {}", self.rings_drawn));
            ui.separator();
            ui.label(format!("shapes: {}", self.shapes_drawn));
        });
        ui.separator();

        let (response, painter) = ui.allocate_painter(ui.available_size(), Sense::hover());
        let rect = response.rect;
        painter.rect_filled(rect, CornerRadius::ZERO, Color32::BLACK);

        let offsets = modulation::evaluate(self.store.oscillators(), self.time);
        let params = self.store.params().modulated(&offsets);
        let outlines = pattern::plan_frame(&params, rect);

        self.rings_drawn = pattern::ring_count(&params, pattern::max_distance(rect));
        self.shapes_drawn = outlines.len();

        let fill = fill_color(params.color, params.opacity);
        for outline in outlines {
            match outline {
                ShapeOutline::Circle { center, radius } => {
                    painter.circle_filled(center, radius, fill);
                }
                ShapeOutline::Polygon { points } => {
                    painter.add(egui::Shape::convex_polygon(points, fill, Stroke::NONE));
                }
            }
        }
    }
}

impl eframe::App for StudioApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if !self.paused {
            self.time += ctx.input(|i| i.stable_dt);
        }

        egui::SidePanel::left("controls")
            .resizable(true)
            .default_width(290.0)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical()
                    .auto_shrink([false, false])
                    .show(ui, |ui| {
                        self.draw_controls(ui);
                    });
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            self.draw_canvas(ui);
        });

        ctx.request_repaint();
    }
}

fn param_slider_f32(
    ui: &mut egui::Ui,
    store: &mut PatternStore,
    value: f32,
    range: RangeInclusive<f32>,
    step: f64,
    text: &str,
    wrap: fn(f32) -> ParameterUpdate,
) {
    let mut value = value;
    let mut slider = egui::Slider::new(&mut value, range).text(text);
    if step > 0.0 {
        slider = slider.step_by(step);
    }
    if ui.add(slider).changed() {
        store.set_parameter(wrap(value));
    }
}

fn param_slider_u32(
    ui: &mut egui::Ui,
    store: &mut PatternStore,
    value: u32,
    range: RangeInclusive<u32>,
    text: &str,
    wrap: fn(u32) -> ParameterUpdate,
) {
    let mut value = value;
    if ui.add(egui::Slider::new(&mut value, range).text(text)).changed() {
        store.set_parameter(wrap(value));
    }
}

fn fill_color(color: Color32, opacity: f32) -> Color32 {
    // Alpha conversion to the raster's u8 channel is the one place the
    // effective opacity is clamped.
    let alpha = (opacity.clamp(0.0, 1.0) * 255.0).round() as u8;
    Color32::from_rgba_unmultiplied(color.r(), color.g(), color.b(), alpha)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fill_color_clamps_out_of_range_opacity() {
        let color = Color32::from_rgb(10, 20, 30);
        assert_eq!(fill_color(color, 1.7).a(), 255);
        assert_eq!(fill_color(color, -0.4).a(), 0);
    }

    #[test]
    fn fill_color_keeps_the_rgb_channels() {
        let filled = fill_color(Color32::from_rgb(0x0e, 0xa5, 0xe9), 1.0);
        assert_eq!(
            (filled.r(), filled.g(), filled.b(), filled.a()),
            (0x0e, 0xa5, 0xe9, 255)
        );
    }
}
