//! Persisted settings behind an explicit store interface. The admin view gets
//! a store injected at construction, so tests can swap in an in-memory fake.

use gloo::console::log;
use gloo_storage::{LocalStorage, Storage};

use crate::constants::{
    STORAGE_KEY_BACKEND_CONFIG, STORAGE_KEY_LIVE_LINK, STORAGE_KEY_WEBINAR_INFO,
};
use crate::types::{BackendSettings, WebinarTopic};

/// Read/write contract for the live link, webinar info, and backend
/// connection settings. Reads return defaults (empty strings) when nothing
/// was written yet; absence is not an error.
pub trait ConfigStore {
    fn live_link(&self) -> String;
    fn set_live_link(&self, url: &str);
    fn webinar_info(&self) -> WebinarTopic;
    fn set_webinar_info(&self, topic: &WebinarTopic);
    fn backend_settings(&self) -> BackendSettings;
    fn set_backend_settings(&self, settings: &BackendSettings);
}

/// localStorage-backed store. Values are JSON under fixed keys; a corrupt or
/// missing value reads back as the default rather than failing the editor.
#[derive(Default, PartialEq)]
pub struct BrowserConfig;

impl ConfigStore for BrowserConfig {
    fn live_link(&self) -> String {
        LocalStorage::get(STORAGE_KEY_LIVE_LINK).unwrap_or_default()
    }

    fn set_live_link(&self, url: &str) {
        if let Err(e) = LocalStorage::set(STORAGE_KEY_LIVE_LINK, url) {
            log!(format!("live link save failed: {e:?}"));
        }
    }

    fn webinar_info(&self) -> WebinarTopic {
        LocalStorage::get(STORAGE_KEY_WEBINAR_INFO).unwrap_or_default()
    }

    fn set_webinar_info(&self, topic: &WebinarTopic) {
        if let Err(e) = LocalStorage::set(STORAGE_KEY_WEBINAR_INFO, topic) {
            log!(format!("webinar info save failed: {e:?}"));
        }
    }

    fn backend_settings(&self) -> BackendSettings {
        LocalStorage::get(STORAGE_KEY_BACKEND_CONFIG).unwrap_or_default()
    }

    fn set_backend_settings(&self, settings: &BackendSettings) {
        if let Err(e) = LocalStorage::set(STORAGE_KEY_BACKEND_CONFIG, settings) {
            log!(format!("backend settings save failed: {e:?}"));
        }
    }
}

#[cfg(test)]
pub mod fake {
    use std::cell::RefCell;

    use super::ConfigStore;
    use crate::types::{BackendSettings, WebinarTopic};

    /// In-memory store with the same defaults-on-absence behaviour as the
    /// browser one.
    #[derive(Default)]
    pub struct MemoryConfig {
        live_link: RefCell<String>,
        topic: RefCell<WebinarTopic>,
        backend: RefCell<BackendSettings>,
    }

    impl ConfigStore for MemoryConfig {
        fn live_link(&self) -> String {
            self.live_link.borrow().clone()
        }

        fn set_live_link(&self, url: &str) {
            *self.live_link.borrow_mut() = url.to_string();
        }

        fn webinar_info(&self) -> WebinarTopic {
            self.topic.borrow().clone()
        }

        fn set_webinar_info(&self, topic: &WebinarTopic) {
            *self.topic.borrow_mut() = topic.clone();
        }

        fn backend_settings(&self) -> BackendSettings {
            self.backend.borrow().clone()
        }

        fn set_backend_settings(&self, settings: &BackendSettings) {
            *self.backend.borrow_mut() = settings.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fake::MemoryConfig;
    use super::ConfigStore;
    use crate::types::{BackendSettings, WebinarTopic};

    #[test]
    fn absent_values_read_back_as_defaults() {
        let store = MemoryConfig::default();
        assert_eq!(store.live_link(), "");
        assert_eq!(store.webinar_info(), WebinarTopic::default());
        assert_eq!(store.backend_settings(), BackendSettings::default());
    }

    #[test]
    fn webinar_info_round_trips_untransformed() {
        let store = MemoryConfig::default();
        let topic = WebinarTopic {
            title: "AI 실무 활용".into(),
            description: "현업 사례 중심".into(),
            image_url: "https://example.com/hero.png".into(),
            schedule: "14:00 - 오프닝\n14:30 - 세션 1".into(),
            speaker: "홍길동 소장\nOO연구소 15년".into(),
        };
        store.set_webinar_info(&topic);
        assert_eq!(store.webinar_info(), topic);
    }

    #[test]
    fn live_link_last_write_wins() {
        let store = MemoryConfig::default();
        store.set_live_link("https://youtube.com/live/abc");
        store.set_live_link("https://youtube.com/live/def");
        assert_eq!(store.live_link(), "https://youtube.com/live/def");
    }

    #[test]
    fn backend_settings_round_trip() {
        let store = MemoryConfig::default();
        let settings = BackendSettings {
            api_key: "AIza-test".into(),
            project_id: "xclass-now".into(),
            ..Default::default()
        };
        store.set_backend_settings(&settings);
        assert_eq!(store.backend_settings(), settings);
    }
}
