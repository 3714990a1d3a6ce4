// ui.rs - egui front-end: controls, grid painter and statistics

use eframe::egui;
use egui::{Color32, Rect, Stroke, Vec2};
use std::time::Instant;
use crate::{GameOfLife, GameOfLifeInterface};
use conway::patterns;

const GRID_PIXELS: f32 = 780.0;         // Space given to the grid
const SPACING: f32 = 0.5;

impl eframe::App for GameOfLife {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Auto-update if running
        if self.is_running && self.last_update.elapsed() >= self.config.update_interval {
            self.update_generation();
            self.last_update = Instant::now();
            ctx.request_repaint(); // Ensure continuous updates
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Async Conway's Game of Life (Row Coroutines)");

            // Controls
            ui.horizontal(|ui| {
                let button_text = if self.is_running { "⏸ Pause" } else { "▶ Start" };
                if ui.button(button_text).clicked() {
                    self.is_running = !self.is_running;
                    if self.is_running {
                        self.last_update = Instant::now();
                    }
                }

                if ui.button("⏭ Step").clicked() {
                    self.is_running = false;
                    self.update_generation();
                }

                if ui.button("⏹ Clear").clicked() {
                    self.is_running = false;
                    self.clear_grid();
                }

                if ui.button("🎲 Random").clicked() {
                    self.is_running = false;
                    self.apply_random_pattern();
                }

                ui.separator();

                // Pattern dropdown
                ui.label("Pattern:");
                egui::ComboBox::from_id_source("pattern_selector")
                    .selected_text(patterns::PATTERNS[self.selected_pattern].name)
                    .show_ui(ui, |ui| {
                        for (i, pattern) in patterns::PATTERNS.iter().enumerate() {
                            ui.selectable_value(&mut self.selected_pattern, i, pattern.name);
                        }
                    });

                if ui.button("Apply Pattern").clicked() {
                    self.is_running = false;
                    self.apply_selected_pattern();
                }

                ui.separator();

                ui.label(format!("Generation: {}", self.generation));
            });

            ui.separator();

            // Speed control
            ui.horizontal(|ui| {
                ui.label("Speed:");
                let mut speed = self.config.speed();
                if ui.add(egui::Slider::new(&mut speed, 0.5..=90.0).suffix(" gen/sec")).changed() {
                    self.config.set_speed(speed);
                }

                ui.separator();

                ui.label("Live:");
                ui.color_edit_button_srgba(&mut self.live_color);
                ui.label("Dead:");
                ui.color_edit_button_srgba(&mut self.dead_color);
            });

            ui.separator();

            ui.label("🚀 Each row runs as an async coroutine that yields cooperatively!");
            ui.label("Click cells to toggle them alive/dead while paused. Use Start/Pause to run the simulation.");

            ui.separator();

            self.draw_grid(ui);

            ui.separator();

            let total = self.grid.rows() * self.grid.columns();
            let live_cells = self.grid.population();
            ui.horizontal(|ui| {
                ui.label(format!("Live cells: {}", live_cells));
                ui.label(format!("Dead cells: {}", total - live_cells));
                ui.label(format!("Population: {:.1}%", (live_cells as f32 / total as f32) * 100.0));
            });
        });

        // Request repaint if running to keep animation smooth
        if self.is_running {
            ctx.request_repaint();
        }
    }
}

impl GameOfLife {
    fn draw_grid(&mut self, ui: &mut egui::Ui) {
        let (rows, columns) = (self.grid.rows(), self.grid.columns());
        let box_size = (GRID_PIXELS / rows.max(columns) as f32 - SPACING).clamp(2.0, 15.0);
        let pitch = box_size + SPACING;

        let start_pos = ui.cursor().min;
        let total_size = Vec2::new(pitch * columns as f32 - SPACING, pitch * rows as f32 - SPACING);

        let (response, painter) = ui.allocate_painter(total_size, egui::Sense::click());

        // Fill background
        painter.rect_filled(
            Rect::from_min_size(start_pos, total_size),
            0.0,
            Color32::BLACK,
        );

        for cell in self.grid.cells() {
            let x = start_pos.x + cell.column() as f32 * pitch;
            let y = start_pos.y + cell.row() as f32 * pitch;
            let rect = Rect::from_min_size(egui::pos2(x, y), Vec2::splat(box_size));

            let cell_color = if cell.is_alive() { self.live_color } else { self.dead_color };
            painter.rect_filled(rect, 1.0, cell_color);
            painter.rect_stroke(rect, 1.0, Stroke::new(0.2, Color32::from_gray(60)));
        }

        // Handle clicking (only when not running)
        if !self.is_running && response.clicked() {
            if let Some(pos) = response.interact_pointer_pos() {
                let offset = pos - start_pos;
                let col = (offset.x / pitch).floor();
                let row = (offset.y / pitch).floor();
                if row >= 0.0 && col >= 0.0 {
                    self.toggle_cell(row as usize, col as usize);
                }
            }
        }
    }
}
