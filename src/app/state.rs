use crate::component::mount::Mount;
use crate::config::AppConfig;
use crate::demo::{self, RootProps};

pub struct AppState {
    pub config: AppConfig,
    pub page: Mount<RootProps>,
    pub tick_count: u64,
    pub should_quit: bool,
    pub dirty: bool,
    pub status_message: Option<String>,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        let root = demo::root(config.theme.context(), &config.demo);
        let page = Mount::new(root, RootProps::new(&config.demo));
        Self {
            config,
            page,
            tick_count: 0,
            should_quit: false,
            dirty: true,
            status_message: None,
        }
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
        self.dirty = true;
    }

    pub fn status_line(&self) -> String {
        if let Some(ref msg) = self.status_message {
            return msg.clone();
        }
        match self.page.focused() {
            Some(_) => "Esc: blur | Tab: next field | F4: loading | F5: remount | F6: save".to_string(),
            None => "Tab: focus a field | F4: loading | F5: remount | F6: save | Ctrl+Q: quit"
                .to_string(),
        }
    }
}
