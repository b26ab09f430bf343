//! Platform detection and task-spawning helpers.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Web,
    Desktop,
    Mobile,
}

impl Platform {
    pub fn current() -> Self {
        #[cfg(target_arch = "wasm32")]
        {
            Self::Web
        }

        #[cfg(all(not(target_arch = "wasm32"), any(target_os = "android", target_os = "ios")))]
        {
            Self::Mobile
        }

        #[cfg(all(
            not(target_arch = "wasm32"),
            not(any(target_os = "android", target_os = "ios"))
        ))]
        {
            Self::Desktop
        }
    }
}

pub fn platform_string() -> String {
    match Platform::current() {
        Platform::Web => "web".to_string(),
        Platform::Desktop => format!("desktop-{}", std::env::consts::OS),
        Platform::Mobile => "mobile".to_string(),
    }
}

/// Spawn a detached future on the UI runtime.
pub fn spawn_future<F>(future: F)
where
    F: std::future::Future<Output = ()> + 'static,
{
    #[cfg(target_arch = "wasm32")]
    wasm_bindgen_futures::spawn_local(future);

    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = dioxus::prelude::spawn(future);
    }
}

/// Whether the host exposes an OS share sheet (`navigator.share`).
///
/// Share transports fall back to web intents or local download when absent;
/// native builds never report the capability.
pub fn supports_native_share() -> bool {
    #[cfg(target_arch = "wasm32")]
    {
        let Some(window) = web_sys::window() else {
            return false;
        };
        let navigator = window.navigator();
        js_sys::Reflect::has(navigator.as_ref(), &wasm_bindgen::JsValue::from_str("share"))
            .unwrap_or(false)
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        false
    }
}
