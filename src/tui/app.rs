use crate::catalog::Catalog;
use crate::scoring::{evaluate, ScoreSummary};
use crate::selection::{FactorKind, Selection};
use crate::tui::theme::ThemeColors;
use ratatui::widgets::TableState;
use std::time::Instant;

/// Severity of a status bar flash, picks its color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlashKind {
    Info,
    Success,
    Warning,
}

#[derive(Debug, Clone, PartialEq)]
pub enum InputMode {
    Normal,
    Help,
    Breakdown,
}

pub struct App {
    pub catalog: Catalog,
    pub selection: Selection,
    pub summary: ScoreSummary,
    pub current_tab: FactorKind,
    pub risk_table: TableState,
    pub prevention_table: TableState,
    pub input_mode: InputMode,
    pub flash_message: Option<(String, Instant, FlashKind)>,
    pub should_quit: bool,
    pub colors: ThemeColors,
}

impl App {
    pub fn new(catalog: Catalog, colors: ThemeColors) -> Self {
        let selection = Selection::new();
        let summary = evaluate(&catalog, &selection);

        let mut risk_table = TableState::default();
        if !catalog.risks.is_empty() {
            risk_table.select(Some(0));
        }
        let mut prevention_table = TableState::default();
        if !catalog.preventions.is_empty() {
            prevention_table.select(Some(0));
        }

        Self {
            catalog,
            selection,
            summary,
            current_tab: FactorKind::Risk,
            risk_table,
            prevention_table,
            input_mode: InputMode::Normal,
            flash_message: None,
            should_quit: false,
            colors,
        }
    }

    /// Number of rows in the active tab
    pub fn current_len(&self) -> usize {
        match self.current_tab {
            FactorKind::Risk => self.catalog.risks.len(),
            FactorKind::Prevention => self.catalog.preventions.len(),
        }
    }

    pub fn current_table_mut(&mut self) -> &mut TableState {
        match self.current_tab {
            FactorKind::Risk => &mut self.risk_table,
            FactorKind::Prevention => &mut self.prevention_table,
        }
    }

    pub fn current_table(&self) -> &TableState {
        match self.current_tab {
            FactorKind::Risk => &self.risk_table,
            FactorKind::Prevention => &self.prevention_table,
        }
    }

    pub fn next_row(&mut self) {
        let len = self.current_len();
        if len == 0 {
            return;
        }
        let table = self.current_table_mut();
        let i = match table.selected() {
            Some(i) if i >= len - 1 => 0,
            Some(i) => i + 1,
            None => 0,
        };
        table.select(Some(i));
    }

    pub fn previous_row(&mut self) {
        let len = self.current_len();
        if len == 0 {
            return;
        }
        let table = self.current_table_mut();
        let i = match table.selected() {
            Some(0) => len - 1,
            Some(i) => i - 1,
            None => 0,
        };
        table.select(Some(i));
    }

    /// Id and label of the highlighted row in the active tab
    pub fn selected_factor(&self) -> Option<(&str, &str)> {
        let i = self.current_table().selected()?;
        match self.current_tab {
            FactorKind::Risk => self
                .catalog
                .risks
                .get(i)
                .map(|f| (f.id.as_str(), f.label.as_str())),
            FactorKind::Prevention => self
                .catalog
                .preventions
                .get(i)
                .map(|f| (f.id.as_str(), f.label.as_str())),
        }
    }

    /// Tick or untick the highlighted row, then rescore
    pub fn toggle_selected(&mut self) {
        let (id, label) = match self.selected_factor() {
            Some((id, label)) => (id.to_string(), label.to_string()),
            None => return,
        };

        let now_selected = self.selection.toggle(self.current_tab, &id);
        self.recompute();

        if now_selected {
            self.show_flash(format!("Selected: {}", label), FlashKind::Success);
        } else {
            self.show_flash(format!("Cleared: {}", label), FlashKind::Info);
        }
    }

    /// Switch between the risk and prevention tabs
    pub fn toggle_tab(&mut self) {
        self.current_tab = match self.current_tab {
            FactorKind::Risk => FactorKind::Prevention,
            FactorKind::Prevention => FactorKind::Risk,
        };
    }

    /// Untick everything in the active tab
    pub fn clear_current(&mut self) {
        self.selection.clear(self.current_tab);
        self.recompute();
        self.show_flash("Cleared this tab".to_string(), FlashKind::Info);
    }

    /// Untick everything in both tabs
    pub fn clear_all(&mut self) {
        self.selection.clear_all();
        self.recompute();
        self.show_flash("Cleared all selections".to_string(), FlashKind::Info);
    }

    pub fn recompute(&mut self) {
        self.summary = evaluate(&self.catalog, &self.selection);
    }

    pub fn update_flash(&mut self) {
        if let Some((_, timestamp, _)) = self.flash_message {
            if timestamp.elapsed().as_secs() >= 3 {
                self.flash_message = None;
            }
        }
    }

    pub fn show_flash(&mut self, msg: String, kind: FlashKind) {
        self.flash_message = Some((msg, Instant::now(), kind));
    }

    pub fn show_help(&mut self) {
        self.input_mode = InputMode::Help;
    }

    pub fn dismiss_help(&mut self) {
        self.input_mode = InputMode::Normal;
    }

    pub fn show_breakdown(&mut self) {
        self.input_mode = InputMode::Breakdown;
    }

    pub fn dismiss_breakdown(&mut self) {
        self.input_mode = InputMode::Normal;
    }
}
