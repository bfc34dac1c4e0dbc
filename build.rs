use std::collections::HashMap;
use std::env;
use std::fs;
use std::path::Path;

/// Variables que `WizardConfig::from_env()` lee con `option_env!`
const WIZARD_KEYS: [&str; 14] = [
    "WIZARD_ENTITY_KIND",
    "ENABLE_LOGGING",
    "UPLOAD_IMAGE_PATH",
    "LIST_IMAGES_PATH",
    "DELETE_IMAGE_PATH",
    "WIZARD_RESET_PATH",
    "MAX_IMAGES",
    "GEOCODER_URL",
    "DEFAULT_MAP_CENTER_LAT",
    "DEFAULT_MAP_CENTER_LNG",
    "DEFAULT_MAP_ZOOM",
    "MAP_INIT_DELAY_MS",
    "CSRF_FIELD_NAME",
    "DATE_PICKER_LOCALE",
];

/// Parsear KEY=VALUE ignorando comentarios y líneas vacías
fn read_env_file(path: &Path) -> HashMap<String, String> {
    let Ok(contents) = fs::read_to_string(path) else {
        return HashMap::new();
    };
    contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .filter_map(|line| line.split_once('='))
        .map(|(key, value)| (key.trim().to_string(), value.trim().trim_matches('"').to_string()))
        .collect()
}

fn main() {
    let env_file = Path::new(".env");
    println!("cargo:rerun-if-changed=.env");
    println!("cargo:rerun-if-changed=build.rs");

    if !env_file.exists() {
        println!("cargo:warning=No .env file found. Using wizard defaults (see .env.example).");
    }
    let file_values = read_env_file(env_file);

    for key in WIZARD_KEYS {
        println!("cargo:rerun-if-env-changed={}", key);
        // El entorno del proceso tiene prioridad sobre .env
        if env::var(key).is_ok() {
            continue;
        }
        if let Some(value) = file_values.get(key) {
            println!("cargo:rustc-env={}={}", key, value);
        }
    }
}
