use std::sync::Arc;

use crate::{
    config::{Settings, SettingsError},
    models::ratio_table::RatioTable,
    utils::date::{Clock, SystemClock},
};

pub struct AppState {
    pub settings: Settings,
    pub ratios: RatioTable,
    pub clock: Arc<dyn Clock>,
}

impl AppState {
    pub fn load(settings: Settings) -> Result<Arc<Self>, SettingsError> {
        let ratios = RatioTable::load(&settings.ratio_table)?;
        settings.warn_missing_skus();

        Ok(Self::new(settings, ratios, Arc::new(SystemClock)))
    }

    pub fn new(settings: Settings, ratios: RatioTable, clock: Arc<dyn Clock>) -> Arc<Self> {
        Arc::new(Self {
            settings,
            ratios,
            clock,
        })
    }
}
