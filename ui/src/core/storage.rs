//! Local persistence for dashboard settings and export artifacts.
//!
//! Web builds write settings through `localStorage`; native builds keep a
//! small JSON map under the project config directory and save exported
//! artifacts under the project data directory.

/// Storage key for the persisted theme (`dark` | `light`).
pub const THEME_KEY: &str = "sentimentx-theme";

pub fn load_setting(key: &str) -> Option<String> {
    #[cfg(target_arch = "wasm32")]
    {
        let storage = web_sys::window()?.local_storage().ok()??;
        storage.get_item(key).ok()?
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let path = settings_path().ok()?;
        let content = std::fs::read_to_string(path).ok()?;
        read_map_value(&content, key)
    }
}

pub fn store_setting(key: &str, value: &str) -> Result<(), String> {
    #[cfg(target_arch = "wasm32")]
    {
        let storage = web_sys::window()
            .ok_or("window unavailable")?
            .local_storage()
            .map_err(|_| "localStorage unavailable")?
            .ok_or("localStorage unavailable")?;
        storage
            .set_item(key, value)
            .map_err(|_| "localStorage write blocked".to_string())
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let path = settings_path()?;
        if let Some(dir) = path.parent() {
            std::fs::create_dir_all(dir).map_err(|err| err.to_string())?;
        }
        let current = std::fs::read_to_string(&path).unwrap_or_default();
        let updated = upsert_map_value(&current, key, value);
        std::fs::write(&path, updated).map_err(|err| err.to_string())
    }
}

/// Directory native builds save exported chart artifacts into.
#[cfg(not(target_arch = "wasm32"))]
pub fn export_dir() -> Result<std::path::PathBuf, String> {
    let dirs = directories::ProjectDirs::from("com", "SentimentX", "SentimentX")
        .ok_or("Unable to determine export directory")?;
    Ok(dirs.data_dir().join("exports"))
}

#[cfg(not(target_arch = "wasm32"))]
fn settings_path() -> Result<std::path::PathBuf, String> {
    let dirs = directories::ProjectDirs::from("com", "SentimentX", "SentimentX")
        .ok_or("Unable to determine settings directory")?;
    Ok(dirs.config_dir().join("settings.json"))
}

/// Read one value out of a JSON string map. Tolerates a missing or corrupt
/// file by returning `None`.
#[cfg_attr(target_arch = "wasm32", allow(dead_code))]
fn read_map_value(content: &str, key: &str) -> Option<String> {
    let map: serde_json::Value = serde_json::from_str(content).ok()?;
    map.get(key)?.as_str().map(str::to_string)
}

/// Set one key in a JSON string map, preserving other entries. A corrupt
/// file is replaced rather than propagated.
#[cfg_attr(target_arch = "wasm32", allow(dead_code))]
fn upsert_map_value(content: &str, key: &str, value: &str) -> String {
    let mut map = serde_json::from_str::<serde_json::Map<String, serde_json::Value>>(content)
        .unwrap_or_default();
    map.insert(key.to_string(), serde_json::Value::String(value.to_string()));
    serde_json::to_string_pretty(&serde_json::Value::Object(map))
        .unwrap_or_else(|_| String::from("{}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn map_roundtrip_preserves_other_entries() {
        let first = upsert_map_value("", THEME_KEY, "light");
        let second = upsert_map_value(&first, "other-key", "42");

        assert_eq!(read_map_value(&second, THEME_KEY).as_deref(), Some("light"));
        assert_eq!(read_map_value(&second, "other-key").as_deref(), Some("42"));
    }

    #[test]
    fn corrupt_content_is_replaced_not_propagated() {
        assert_eq!(read_map_value("not json", THEME_KEY), None);
        let repaired = upsert_map_value("not json", THEME_KEY, "dark");
        assert_eq!(read_map_value(&repaired, THEME_KEY).as_deref(), Some("dark"));
    }
}
