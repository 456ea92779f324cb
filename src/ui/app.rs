use eframe::{Frame, egui};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use strum_macros::EnumIter;

use crate::data::LoadError;
use crate::models::DashboardModel;
use crate::ui::ui_plot_view::PlotView;
use crate::ui::utils::setup_custom_visuals;

#[cfg(debug_assertions)]
use crate::config::DEBUG_FLAGS;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, EnumIter)]
pub enum Tab {
    #[default]
    Trend,
    Windows,
    Analysis,
}

/// What the dashboard has to show. Fixed for the lifetime of the window.
#[derive(Default)]
pub enum DataState {
    #[default]
    Empty,
    Ready {
        model: Arc<DashboardModel>,
        plots: PlotView,
    },
    Failed(LoadError),
}

impl DataState {
    pub fn from_loaded(loaded: Result<DashboardModel, LoadError>) -> Self {
        match loaded {
            Ok(model) => {
                let plots = PlotView::new(&model);
                DataState::Ready {
                    model: Arc::new(model),
                    plots,
                }
            }
            Err(e) => DataState::Failed(e),
        }
    }
}

#[derive(Deserialize, Serialize, Default)]
pub struct YearEndDashboardApp {
    // UI state (the only thing persisted between runs)
    #[serde(default)]
    pub(super) active_tab: Tab,

    // Data state - skip serialization since it contains runtime-only data
    #[serde(skip)]
    pub(super) data_state: DataState,
}

impl YearEndDashboardApp {
    pub fn new(cc: &eframe::CreationContext, loaded: Result<DashboardModel, LoadError>) -> Self {
        let mut app: Self = cc
            .storage
            .and_then(|storage| eframe::get_value(storage, eframe::APP_KEY))
            .unwrap_or_default();

        #[cfg(debug_assertions)]
        if DEBUG_FLAGS.print_state_serde {
            log::info!("Restored UI state: active tab {:?}", app.active_tab);
        }

        app.data_state = DataState::from_loaded(loaded);
        app
    }
}

impl eframe::App for YearEndDashboardApp {
    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        #[cfg(debug_assertions)]
        if DEBUG_FLAGS.print_shutdown {
            log::info!("Application shutdown complete.");
        }
    }

    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        #[cfg(debug_assertions)]
        if DEBUG_FLAGS.print_state_serde {
            log::info!("Saving UI state: active tab {:?}", self.active_tab);
        }
        eframe::set_value(storage, eframe::APP_KEY, &self);
    }

    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        setup_custom_visuals(ctx);

        self.render_tab_bar(ctx);
        self.render_status_panel(ctx);
        self.render_central_panel(ctx);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn only_the_tab_survives_serialization() {
        let app = YearEndDashboardApp {
            active_tab: Tab::Windows,
            data_state: DataState::Failed(LoadError::EmptyDataset),
        };
        let json = serde_json::to_string(&app).unwrap();
        let restored: YearEndDashboardApp = serde_json::from_str(&json).unwrap();

        assert_eq!(restored.active_tab, Tab::Windows);
        assert!(matches!(restored.data_state, DataState::Empty));
    }

    #[test]
    fn tabs_are_listed_in_display_order() {
        let tabs: Vec<Tab> = Tab::iter().collect();
        assert_eq!(tabs, vec![Tab::Trend, Tab::Windows, Tab::Analysis]);
    }

    #[test]
    fn load_failure_keeps_the_error() {
        let state = DataState::from_loaded(Err(LoadError::Connection("refused".to_string())));
        assert!(matches!(state, DataState::Failed(LoadError::Connection(_))));
    }
}
