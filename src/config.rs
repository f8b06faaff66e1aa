/// Fixed settings and popup texts

/// How often the popup re-reads the active tab, in milliseconds
pub const POLL_INTERVAL_MS: u32 = 500;

/// How long the "link copied" confirmation stays visible, in milliseconds
pub const COPY_MESSAGE_MS: u32 = 2000;

pub const EXTENSION_NAME: &str = "TS_switcher";
pub const EXTENSION_VERSION: &str = env!("CARGO_PKG_VERSION");

pub const TEXT_COPY_LINK: &str = "Скопировать ссылку на rating.chgk.info";
pub const TEXT_COPY_UNAVAILABLE: &str = "Функция недоступна";
pub const TEXT_COPIED: &str = "Ссылка скопирована";
pub const TEXT_COPY_FAILED: &str = "Не удалось скопировать ссылку";
pub const TEXT_LOAD_ERROR: &str = "Ошибка загрузки";
pub const TEXT_LOADING: &str = "Загрузка...";
