//! 2D chrome drawn over the scenes with egui
//!
//! Welcome screen, journey HUD, portfolio header/menu and the project
//! gallery. Everything here is stateless over the GPU: it renders from the
//! phase, the journey progress and [`OverlayState`], and reports visitor
//! intent back through return values.

use egui::{Align2, Color32, Context, Pos2, RichText, Stroke};

use crate::content::Category;

/// Mutable overlay state owned by the app
#[derive(Default)]
pub struct OverlayState {
    pub menu_open: bool,
    pub dark_mode: bool,
    /// Index of the category whose gallery is open
    pub selected: Option<usize>,
}

/// Status caption shown under the journey progress indicator
pub fn journey_caption(progress: f32) -> &'static str {
    if progress < 0.2 {
        "Initiating launch sequence..."
    } else if progress < 0.4 {
        "Entering deep space..."
    } else if progress < 0.6 {
        "Traveling at warp speed..."
    } else if progress < 0.8 {
        "Approaching destination..."
    } else {
        "Preparing for landing..."
    }
}

/// Welcome screen. Returns true when the visitor presses "Begin Journey".
pub fn draw_welcome(ctx: &Context) -> bool {
    let mut begin = false;

    egui::CentralPanel::default()
        .frame(egui::Frame::none())
        .show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(ui.available_height() * 0.28);
                ui.label(
                    RichText::new("Enter a realm of")
                        .size(52.0)
                        .color(Color32::WHITE),
                );
                ui.label(
                    RichText::new("Creativity...")
                        .size(64.0)
                        .strong()
                        .color(Color32::from_rgb(192, 132, 252)),
                );
                ui.add_space(24.0);
                ui.label(
                    RichText::new(
                        "Journey through the cosmos to discover a universe of design and code",
                    )
                    .size(20.0)
                    .color(Color32::from_rgb(216, 180, 254)),
                );
                ui.add_space(48.0);

                let button = egui::Button::new(
                    RichText::new("  Begin Journey  ").size(24.0).color(Color32::WHITE),
                )
                .fill(Color32::from_rgb(109, 40, 217))
                .rounding(28.0);
                if ui.add(button).clicked() {
                    begin = true;
                }
            });
        });

    begin
}

const GAUGE_RADIUS: f32 = 72.0;
const GAUGE_STROKE: f32 = 5.0;
const GAUGE_SEGMENTS: usize = 64;

/// Points of the progress arc, starting at twelve o'clock and sweeping
/// clockwise through `progress` of a full turn.
pub fn gauge_arc_points(center: Pos2, radius: f32, progress: f32, segments: usize) -> Vec<Pos2> {
    let sweep = progress.clamp(0.0, 1.0) * std::f32::consts::TAU;
    (0..=segments)
        .map(|i| {
            let angle = -std::f32::consts::FRAC_PI_2 + sweep * i as f32 / segments as f32;
            Pos2::new(
                center.x + radius * angle.cos(),
                center.y + radius * angle.sin(),
            )
        })
        .collect()
}

/// Journey HUD: radial progress gauge with the percentage centered inside,
/// status caption underneath. Non-interactive.
pub fn draw_journey_hud(ctx: &Context, progress: f32) {
    egui::Area::new(egui::Id::new("journey_hud"))
        .anchor(Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                let side = GAUGE_RADIUS * 2.0 + GAUGE_STROKE * 2.0;
                let (rect, _) =
                    ui.allocate_exact_size(egui::vec2(side, side), egui::Sense::hover());
                let painter = ui.painter();
                let center = rect.center();

                painter.circle_stroke(
                    center,
                    GAUGE_RADIUS,
                    Stroke::new(GAUGE_STROKE, Color32::from_rgba_unmultiplied(255, 255, 255, 40)),
                );
                if progress > 0.0 {
                    painter.add(egui::Shape::line(
                        gauge_arc_points(center, GAUGE_RADIUS, progress, GAUGE_SEGMENTS),
                        Stroke::new(GAUGE_STROKE, Color32::from_rgb(147, 51, 234)),
                    ));
                }
                painter.text(
                    center,
                    Align2::CENTER_CENTER,
                    format!("{}%", (progress * 100.0).round() as u32),
                    egui::FontId::proportional(36.0),
                    Color32::WHITE,
                );

                ui.add_space(16.0);
                ui.label(
                    RichText::new(journey_caption(progress))
                        .size(26.0)
                        .color(Color32::from_gray(230)),
                );
            });
        });
}

/// Portfolio chrome: header, optional menu overlay, hint text and the
/// gallery for the selected category.
pub fn draw_portfolio(ctx: &Context, state: &mut OverlayState, categories: &[Category]) {
    draw_header(ctx, state);

    if state.menu_open {
        draw_menu(ctx, state);
        return; // the menu covers everything else
    }

    if let Some(index) = state.selected {
        draw_gallery(ctx, state, &categories[index]);
    } else {
        draw_hint(ctx);
    }
}

fn draw_header(ctx: &Context, state: &mut OverlayState) {
    egui::TopBottomPanel::top("header")
        .frame(egui::Frame::none().inner_margin(12.0))
        .show_separator_line(false)
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(
                    RichText::new("yourname / Eric Amankyim")
                        .size(16.0)
                        .color(Color32::from_gray(220)),
                );

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let menu_icon = if state.menu_open { "✕" } else { "☰" };
                    if ui.button(RichText::new(menu_icon).size(20.0)).clicked() {
                        state.menu_open = !state.menu_open;
                    }
                    let mode_icon = if state.dark_mode { "☀" } else { "🌙" };
                    if ui.button(RichText::new(mode_icon).size(18.0)).clicked() {
                        state.dark_mode = !state.dark_mode;
                    }
                });
            });
        });
}

fn draw_menu(ctx: &Context, state: &mut OverlayState) {
    let fill = if state.dark_mode {
        Color32::from_rgba_unmultiplied(17, 24, 39, 242)
    } else {
        Color32::from_rgba_unmultiplied(255, 255, 255, 242)
    };
    let text = if state.dark_mode {
        Color32::WHITE
    } else {
        Color32::from_gray(25)
    };

    egui::CentralPanel::default()
        .frame(egui::Frame::none().fill(fill))
        .show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(ui.available_height() * 0.22);
                for item in ["Home", "Work", "About", "Contact"] {
                    if ui
                        .add(egui::Button::new(RichText::new(item).size(56.0).color(text)).frame(false))
                        .clicked()
                    {
                        state.menu_open = false;
                    }
                    ui.add_space(12.0);
                }

                ui.add_space(40.0);
                ui.horizontal(|ui| {
                    ui.add_space(ui.available_width() / 2.0 - 140.0);
                    ui.hyperlink_to("Instagram", "https://instagram.com");
                    ui.add_space(24.0);
                    ui.hyperlink_to("GitHub", "https://github.com");
                    ui.add_space(24.0);
                    ui.hyperlink_to("LinkedIn", "https://linkedin.com");
                });
            });
        });
}

fn draw_hint(ctx: &Context) {
    egui::Area::new(egui::Id::new("portfolio_hint"))
        .anchor(Align2::CENTER_TOP, [0.0, 80.0])
        .show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.label(
                    RichText::new("Welcome to my Universe")
                        .size(40.0)
                        .color(Color32::WHITE),
                );
                ui.label(
                    RichText::new("Click on any planet to explore its projects")
                        .size(18.0)
                        .color(Color32::from_gray(210)),
                );
            });
        });
}

fn draw_gallery(ctx: &Context, state: &mut OverlayState, category: &Category) {
    let mut open = true;
    let planet_color = Color32::from_rgb(
        (category.color[0] * 255.0) as u8,
        (category.color[1] * 255.0) as u8,
        (category.color[2] * 255.0) as u8,
    );

    egui::Window::new(RichText::new(category.name).size(28.0).color(planet_color))
        .id(egui::Id::new("gallery"))
        .open(&mut open)
        .collapsible(false)
        .resizable(false)
        .anchor(Align2::CENTER_CENTER, [0.0, 0.0])
        .min_width(520.0)
        .show(ctx, |ui| {
            ui.label(
                RichText::new(format!("{} Projects in this Universe", category.projects.len()))
                    .color(Color32::from_gray(180)),
            );
            ui.separator();

            egui::ScrollArea::vertical().max_height(420.0).show(ui, |ui| {
                for project in category.projects {
                    ui.group(|ui| {
                        ui.horizontal(|ui| {
                            ui.label(RichText::new(project.title).size(20.0).strong());
                            ui.with_layout(
                                egui::Layout::right_to_left(egui::Align::Center),
                                |ui| {
                                    ui.label(
                                        RichText::new(project.year)
                                            .color(Color32::from_gray(160)),
                                    );
                                },
                            );
                        });
                        ui.label(RichText::new(project.description).color(Color32::from_gray(200)));
                        ui.horizontal(|ui| {
                            ui.hyperlink_to("View Project ↗", project.link);
                            ui.add_space(16.0);
                            ui.hyperlink_to("Preview ↗", project.image_url);
                        });
                    });
                    ui.add_space(6.0);
                }
            });

            ui.separator();
            ui.vertical_centered(|ui| {
                if ui.button("← Back to Solar System").clicked() {
                    state.selected = None;
                }
            });
        });

    if !open {
        state.selected = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gauge_arc_sweeps_clockwise_from_the_top() {
        let center = Pos2::new(0.0, 0.0);

        let quarter = gauge_arc_points(center, 10.0, 0.25, 64);
        let first = quarter[0];
        let last = *quarter.last().unwrap();
        // Starts at twelve o'clock (screen y grows downward)
        assert!(first.x.abs() < 1e-4 && (first.y + 10.0).abs() < 1e-4);
        // A quarter turn clockwise ends at three o'clock
        assert!((last.x - 10.0).abs() < 1e-3 && last.y.abs() < 1e-3);

        // Full progress closes the circle
        let full = gauge_arc_points(center, 10.0, 1.0, 64);
        let end = *full.last().unwrap();
        assert!((end.x - first.x).abs() < 1e-3 && (end.y - first.y).abs() < 1e-3);

        // Overshoot clamps rather than wrapping past the start
        let over = gauge_arc_points(center, 10.0, 1.5, 64);
        assert_eq!(over.last(), full.last());
    }

    #[test]
    fn caption_thresholds() {
        assert_eq!(journey_caption(0.0), "Initiating launch sequence...");
        assert_eq!(journey_caption(0.19), "Initiating launch sequence...");
        assert_eq!(journey_caption(0.2), "Entering deep space...");
        assert_eq!(journey_caption(0.45), "Traveling at warp speed...");
        assert_eq!(journey_caption(0.65), "Approaching destination...");
        assert_eq!(journey_caption(0.8), "Preparing for landing...");
        assert_eq!(journey_caption(1.0), "Preparing for landing...");
    }
}
