use eframe::egui;
use eframe::egui::{Color32, Pos2, ScrollArea, Ui};
use eframe::run_native;
use engine::{Brush, Catalog, RunState, Simulation, SimulationConfig, Speed};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::thread;
use std::time::{Duration, Instant};

const CELL_SIZE: f32 = 14.0;
const POLL_INTERVAL: Duration = Duration::from_millis(20);
const DEAD_COLOR: Color32 = Color32::from_rgb(36, 41, 46);
const GRID_BACKGROUND: Color32 = Color32::from_rgb(31, 36, 40);
const GRADIENT_START: Color32 = Color32::from_rgb(33, 255, 148);
const GRADIENT_END: Color32 = Color32::from_rgb(129, 67, 255);

type SharedSimulation = Arc<Mutex<Simulation>>;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let config = SimulationConfig::default();
    log::info!("starting {}x{} board", config.rows, config.columns);

    // Shared simulation wrapped in Arc<Mutex<T>> so the timer thread and the UI take turns
    let shared = Arc::new(Mutex::new(Simulation::new(config)));

    run_native(
        "Conway's Game of Life",
        eframe::NativeOptions::default(),
        Box::new(|cc| {
            let ctx = cc.egui_ctx.clone();
            let timer = Arc::clone(&shared);

            // Background timer: steps whenever the simulation is running and its delay has passed
            thread::spawn(move || loop {
                thread::sleep(POLL_INTERVAL);
                let stepped = lock(&timer).tick(Instant::now());
                if stepped.is_some() {
                    ctx.request_repaint();
                }
            });

            Ok(Box::new(GuiOfLife::new(cc, shared)))
        }),
    )
    .map_err(|err| anyhow::anyhow!("failed to run window: {err}"))
}

fn lock(simulation: &SharedSimulation) -> MutexGuard<'_, Simulation> {
    simulation.lock().unwrap_or_else(PoisonError::into_inner)
}

struct GuiOfLife {
    simulation: SharedSimulation,
    catalog: Catalog,
    selected_pattern: String,
    brush: Brush,
}

impl GuiOfLife {
    fn new(_cc: &eframe::CreationContext<'_>, simulation: SharedSimulation) -> Self {
        let catalog = Catalog::builtin();
        let selected_pattern = catalog.names().next().unwrap_or_default().to_string();
        Self {
            simulation,
            catalog,
            selected_pattern,
            brush: Brush::Paint,
        }
    }

    fn controls(&mut self, ui: &mut Ui) {
        let mut simulation = lock(&self.simulation);

        ui.horizontal(|ui| {
            let label = if simulation.is_running() { "Stop" } else { "Start" };
            if ui.button(label).clicked() {
                simulation.toggle_running();
            }
            if ui.button("Step").clicked() {
                simulation.step();
            }
            if ui.button("Clear").clicked() {
                simulation.clear();
            }
            if ui.button("Randomize").clicked() {
                simulation.randomize();
            }

            ui.separator();

            let mut level = simulation.speed().level();
            ui.add(egui::Slider::new(&mut level, Speed::MIN..=Speed::MAX).show_value(false));
            if level != simulation.speed().level() {
                simulation.set_speed(Speed::new(level));
            }
            ui.label(format!("Speed: {}", simulation.speed()));

            ui.separator();

            let status = match simulation.state() {
                RunState::Halted => " (halted)",
                _ => "",
            };
            ui.label(format!("Iteration # {}{status}", simulation.iterations()));
        });

        ui.horizontal(|ui| {
            ui.label("Brush:");
            egui::ComboBox::from_id_salt("pattern_selector")
                .selected_text(self.selected_pattern.as_str())
                .show_ui(ui, |ui| {
                    for name in self.catalog.names() {
                        ui.selectable_value(&mut self.selected_pattern, name.to_string(), name);
                    }
                });
            ui.selectable_value(&mut self.brush, Brush::Paint, "Paint");
            ui.selectable_value(&mut self.brush, Brush::Erase, "Erase");
        });
    }

    fn create_grid(&mut self, ui: &mut Ui) {
        let mut simulation = lock(&self.simulation);
        let rows = simulation.grid().rows();
        let columns = simulation.grid().columns();

        // Calculate the grid starting point
        let (rect, response) = ui.allocate_exact_size(
            egui::vec2(CELL_SIZE * columns as f32, CELL_SIZE * rows as f32),
            egui::Sense::click_and_drag(),
        );

        if response.clicked() || response.dragged() {
            let target = response
                .interact_pointer_pos()
                .and_then(|pointer| cell_at(rect.min, pointer, rows, columns));
            if let (Some((row, col)), Some(pattern)) = (target, self.catalog.get(&self.selected_pattern)) {
                simulation.place(pattern, row as isize, col as isize, self.brush);
            }
        }

        let painter = ui.painter();
        painter.rect_filled(rect, 0.0, GRID_BACKGROUND);

        // Draw each cell at its calculated position
        for (row_index, row) in simulation.grid().iter_rows().enumerate() {
            for (col_index, cell) in row.iter().enumerate() {
                let pos = rect.min + egui::vec2(col_index as f32 * CELL_SIZE, row_index as f32 * CELL_SIZE);

                let color = if cell.state() {
                    gradient(row_index, col_index, rows, columns)
                } else {
                    DEAD_COLOR
                };

                painter.rect_filled(
                    egui::Rect::from_min_size(pos, egui::vec2(CELL_SIZE - 1.0, CELL_SIZE - 1.0)),
                    CELL_SIZE / 4f32,
                    color,
                );
            }
        }
    }
}

/// Map a pointer position to the `(row, col)` under it, if any.
fn cell_at(origin: Pos2, pointer: Pos2, rows: usize, columns: usize) -> Option<(usize, usize)> {
    let offset = pointer - origin;
    if offset.x < 0.0 || offset.y < 0.0 {
        return None;
    }
    let row = (offset.y / CELL_SIZE) as usize;
    let col = (offset.x / CELL_SIZE) as usize;
    (row < rows && col < columns).then_some((row, col))
}

/// Alive-cell color, blended diagonally across the board.
fn gradient(row: usize, col: usize, rows: usize, columns: usize) -> Color32 {
    let span = (rows + columns).saturating_sub(2).max(1) as f32;
    let t = (row + col) as f32 / span;
    let mix = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * t).round() as u8;
    Color32::from_rgb(
        mix(GRADIENT_START.r(), GRADIENT_END.r()),
        mix(GRADIENT_START.g(), GRADIENT_END.g()),
        mix(GRADIENT_START.b(), GRADIENT_END.b()),
    )
}

impl eframe::App for GuiOfLife {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ScrollArea::both().show(ui, |ui| {
                ui.heading("Conway's Game of Life");
                self.controls(ui);
                self.create_grid(ui);
            });
        });
    }
}
